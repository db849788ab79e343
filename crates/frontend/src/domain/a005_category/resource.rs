use contracts::domain::a005_category::aggregate::Category;

use crate::shared::admin::{AdminResource, CellStyle, Column, FieldSpec, ResourceMessages};

const FIELDS: &[FieldSpec] = &[FieldSpec::text("nombre", "Nombre")
    .required()
    .placeholder("Ej: Lácteos, Frutos Secos, etc.")];

const COLUMNS: &[Column] = &[
    Column::new("id", "ID"),
    Column::styled("nombre", "Nombre", CellStyle::Strong),
];

const MESSAGES: ResourceMessages = ResourceMessages {
    title: "Administración de Categorías",
    new_label: "Nueva Categoría",
    create_title: "Crear Categoría",
    edit_title: "Editar Categoría",
    list_title: "Categorías existentes",
    empty: "No hay categorías registradas. Crea una nueva.",
    created: "Categoría creada exitosamente",
    updated: "Categoría actualizada exitosamente",
    deleted: "Categoría eliminada exitosamente",
    create_failed: "Error al crear la categoría",
    update_failed: "Error al actualizar la categoría",
    delete_failed: "Error al eliminar la categoría",
    confirm_delete: "¿Estás seguro de eliminar esta categoría?",
};

impl AdminResource for Category {
    const PAGE_ID: &'static str = "a005_category--list";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn messages() -> &'static ResourceMessages {
        &MESSAGES
    }

    fn field_value(&self, key: &str) -> String {
        match key {
            "nombre" => self.nombre.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, value: String) {
        if key == "nombre" {
            self.nombre = value;
        }
    }
}
