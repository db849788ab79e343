use contracts::domain::a003_supplier::aggregate::Supplier;

use crate::shared::admin::{
    AdminResource, CellStyle, Column, FieldKind, FieldSpec, ResourceMessages,
};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("nombre", "Nombre").required(),
    FieldSpec::text("telefono", "Teléfono")
        .kind(FieldKind::Tel)
        .placeholder("11-1234-5678"),
    FieldSpec::text("email", "E-mail")
        .kind(FieldKind::Email)
        .placeholder("contacto@proveedor.com"),
];

const COLUMNS: &[Column] = &[
    Column::new("id", "ID"),
    Column::styled("nombre", "Nombre", CellStyle::Strong),
    Column::new("telefono", "Teléfono"),
    Column::new("email", "E-mail"),
];

const MESSAGES: ResourceMessages = ResourceMessages {
    title: "Administración de Proveedores",
    new_label: "Nuevo Proveedor",
    create_title: "Crear Proveedor",
    edit_title: "Editar Proveedor",
    list_title: "Proveedores existentes",
    empty: "No hay proveedores registrados. Crea uno nuevo.",
    created: "Proveedor creado exitosamente",
    updated: "Proveedor actualizado exitosamente",
    deleted: "Proveedor eliminado exitosamente",
    create_failed: "Error al crear el proveedor",
    update_failed: "Error al actualizar el proveedor",
    delete_failed: "Error al eliminar el proveedor",
    confirm_delete: "¿Estás seguro de eliminar este proveedor?",
};

impl AdminResource for Supplier {
    const PAGE_ID: &'static str = "a003_supplier--list";

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
            "telefono" => self.telefono.clone(),
            "email" => self.email.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, value: String) {
        match key {
            "nombre" => self.nombre = value,
            "telefono" => self.telefono = value,
            "email" => self.email = value,
            _ => {}
        }
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "id" => self.id.map(|id| id.to_string()).unwrap_or_default(),
            // contact fields are optional
            other => {
                let value = self.field_value(other);
                if value.trim().is_empty() {
                    "-".to_string()
                } else {
                    value
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::admin::validation::validate_draft;

    #[test]
    fn test_contact_fields_are_optional() {
        let mut draft = Supplier::default();
        draft.set_field("nombre", "Granja del Sol".into());
        assert_eq!(validate_draft(&draft, false, false), Ok(()));
        assert_eq!(draft.cell("telefono"), "-");
    }

    #[test]
    fn test_email_format_is_left_to_the_input() {
        let mut draft = Supplier::default();
        draft.set_field("nombre", "Granja del Sol".into());
        draft.set_field("email", "granja.del.sol".into());
        assert_eq!(validate_draft(&draft, false, false), Ok(()));
        assert_eq!(
            Supplier::fields().iter().find(|f| f.key == "email").map(|f| f.kind),
            Some(FieldKind::Email)
        );
    }
}
