use contracts::domain::a004_unit::aggregate::{Unit, UNIT_ABBREVIATION_MAX_LEN};

use crate::shared::admin::{AdminResource, CellStyle, Column, FieldSpec, ResourceMessages};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("nombre", "Nombre")
        .required()
        .placeholder("Ej: gramos, kilogramos, litros, etc."),
    FieldSpec::text("abreviacion", "Abreviación")
        .required()
        .max_len(UNIT_ABBREVIATION_MAX_LEN)
        .placeholder("Ej: g, kg, l, etc."),
];

const COLUMNS: &[Column] = &[
    Column::new("id", "ID"),
    Column::styled("nombre", "Nombre", CellStyle::Strong),
    Column::styled("abreviacion", "Abreviación", CellStyle::Badge),
];

const MESSAGES: ResourceMessages = ResourceMessages {
    title: "Administración de Unidades",
    new_label: "Nueva Unidad",
    create_title: "Crear Unidad",
    edit_title: "Editar Unidad",
    list_title: "Unidades existentes",
    empty: "No hay unidades registradas. Crea una nueva.",
    created: "Unidad creada exitosamente",
    updated: "Unidad actualizada exitosamente",
    deleted: "Unidad eliminada exitosamente",
    create_failed: "Error al crear la unidad",
    update_failed: "Error al actualizar la unidad",
    delete_failed: "Error al eliminar la unidad",
    confirm_delete: "¿Estás seguro de eliminar esta unidad?",
};

impl AdminResource for Unit {
    const PAGE_ID: &'static str = "a004_unit--list";

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
            "abreviacion" => self.abreviacion.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, value: String) {
        match key {
            "nombre" => self.nombre = value,
            "abreviacion" => self.abreviacion = value,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::admin::validation::{validate_draft, ValidationError};

    fn draft(abreviacion: &str) -> Unit {
        Unit {
            id: None,
            nombre: "Kilogramo".into(),
            abreviacion: abreviacion.into(),
        }
    }

    #[test]
    fn test_abbreviation_limit_from_schema() {
        assert_eq!(validate_draft(&draft("kg"), false, false), Ok(()));
        assert_eq!(
            validate_draft(&draft("kilogramos!"), false, false),
            Err(ValidationError::TooLong {
                label: "Abreviación",
                max: 10
            })
        );
    }

    #[test]
    fn test_missing_abbreviation() {
        assert_eq!(
            validate_draft(&draft(""), true, false),
            Err(ValidationError::Required("Abreviación"))
        );
    }

    #[test]
    fn test_abbreviation_counts_chars_not_bytes() {
        assert_eq!(validate_draft(&draft(&"á".repeat(10)), false, false), Ok(()));
        assert!(validate_draft(&draft(&"á".repeat(11)), false, false).is_err());
    }
}
