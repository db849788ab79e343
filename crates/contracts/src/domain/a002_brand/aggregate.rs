use serde::{Deserialize, Serialize};

use crate::domain::common::{null_as_empty, CatalogEntity, EntityId};

/// Product brand
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub nombre: String,
}

impl CatalogEntity for Brand {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.nombre
    }

    fn collection_name() -> &'static str {
        "marcas"
    }

    fn element_name() -> &'static str {
        "Marca"
    }

    fn list_name() -> &'static str {
        "Marcas"
    }
}
