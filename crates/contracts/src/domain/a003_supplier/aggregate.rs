use serde::{Deserialize, Serialize};

use crate::domain::common::{null_as_empty, CatalogEntity, EntityId};

/// Supplier; phone and email are optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub nombre: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub telefono: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

impl CatalogEntity for Supplier {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.nombre
    }

    fn collection_name() -> &'static str {
        "proveedores"
    }

    fn element_name() -> &'static str {
        "Proveedor"
    }

    fn list_name() -> &'static str {
        "Proveedores"
    }
}
