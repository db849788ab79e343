pub mod api;
pub mod guard;
pub mod session;
pub mod storage;

pub use guard::RequireAdmin;
pub use session::{use_session, Session, SessionData};
