/// Server-assigned record id
pub type EntityId = i64;
