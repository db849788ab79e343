use serde::{Deserialize, Serialize};

use crate::domain::common::{null_as_empty, CatalogEntity, EntityId};

/// Longest accepted `abreviacion`, counted in characters
pub const UNIT_ABBREVIATION_MAX_LEN: usize = 10;

/// Unit of measure ("Kilogramo" / "kg")
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub nombre: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub abreviacion: String,
}

impl CatalogEntity for Unit {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.nombre
    }

    fn collection_name() -> &'static str {
        "unidades"
    }

    fn element_name() -> &'static str {
        "Unidad"
    }

    fn list_name() -> &'static str {
        "Unidades"
    }
}
