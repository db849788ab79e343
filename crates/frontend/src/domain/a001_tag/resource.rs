use contracts::domain::a001_tag::aggregate::Tag;

use crate::shared::admin::{AdminResource, CellStyle, Column, FieldSpec, ResourceMessages};

const FIELDS: &[FieldSpec] = &[FieldSpec::text("nombre", "Nombre")
    .required()
    .placeholder("Ej: Orgánico, Sin TACC, Vegano, etc.")];

const COLUMNS: &[Column] = &[
    Column::new("id", "ID"),
    Column::styled("nombre", "Nombre", CellStyle::Strong),
];

const MESSAGES: ResourceMessages = ResourceMessages {
    title: "Administración de Etiquetas",
    new_label: "Nueva Etiqueta",
    create_title: "Crear Etiqueta",
    edit_title: "Editar Etiqueta",
    list_title: "Etiquetas existentes",
    empty: "No hay etiquetas registradas. Crea una nueva.",
    created: "Etiqueta creada exitosamente",
    updated: "Etiqueta actualizada exitosamente",
    deleted: "Etiqueta eliminada exitosamente",
    create_failed: "Error al crear la etiqueta",
    update_failed: "Error al actualizar la etiqueta",
    delete_failed: "Error al eliminar la etiqueta",
    confirm_delete: "¿Estás seguro de eliminar esta etiqueta?",
};

impl AdminResource for Tag {
    const PAGE_ID: &'static str = "a001_tag--list";

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
