use serde::{Deserialize, Serialize};

use crate::domain::common::{null_as_empty, CatalogEntity, EntityId};

/// Store product category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub nombre: String,
}

impl CatalogEntity for Category {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.nombre
    }

    fn collection_name() -> &'static str {
        "categorias"
    }

    fn element_name() -> &'static str {
        "Categoría"
    }

    fn list_name() -> &'static str {
        "Categorías"
    }
}
