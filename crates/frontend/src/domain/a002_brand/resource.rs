use contracts::domain::a002_brand::aggregate::Brand;

use crate::shared::admin::{AdminResource, CellStyle, Column, FieldSpec, ResourceMessages};

const FIELDS: &[FieldSpec] = &[FieldSpec::text("nombre", "Nombre")
    .required()
    .placeholder("Ej: La Serenísima, Granix, etc.")];

const COLUMNS: &[Column] = &[
    Column::new("id", "ID"),
    Column::styled("nombre", "Nombre", CellStyle::Strong),
];

const MESSAGES: ResourceMessages = ResourceMessages {
    title: "Administración de Marcas",
    new_label: "Nueva Marca",
    create_title: "Crear Marca",
    edit_title: "Editar Marca",
    list_title: "Marcas existentes",
    empty: "No hay marcas registradas. Crea una nueva.",
    created: "Marca creada exitosamente",
    updated: "Marca actualizada exitosamente",
    deleted: "Marca eliminada exitosamente",
    create_failed: "Error al crear la marca",
    update_failed: "Error al actualizar la marca",
    delete_failed: "Error al eliminar la marca",
    confirm_delete: "¿Estás seguro de eliminar esta marca?",
};

impl AdminResource for Brand {
    const PAGE_ID: &'static str = "a002_brand--list";

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
