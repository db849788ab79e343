use serde::{Deserialize, Serialize};

use crate::domain::common::{null_as_empty, CatalogEntity, EntityId};

/// Food tag: "Orgánico", "Sin TACC", "Vegano"...
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub nombre: String,
}

impl CatalogEntity for Tag {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.nombre
    }

    fn collection_name() -> &'static str {
        "etiquetas"
    }

    fn element_name() -> &'static str {
        "Etiqueta"
    }

    fn list_name() -> &'static str {
        "Etiquetas"
    }
}
