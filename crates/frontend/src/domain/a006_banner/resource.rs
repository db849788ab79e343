use contracts::domain::a006_banner::aggregate::{Banner, BannerListQuery, DEFAULT_BORDER_COLOR};

use crate::shared::admin::resource::{bool_field, parse_bool_field};
use crate::shared::admin::{
    AdminResource, CellStyle, Column, FieldKind, FieldSpec, ImageUpload, MultipartForm, Payload,
    ResourceMessages,
};
use crate::shared::date_utils::date_only;
use crate::shared::http::ApiError;

/// Multipart field carrying the image binary
pub const IMAGE_FIELD: &str = "imagen";

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("titulo", "Título"),
    FieldSpec::text("descripcion", "Descripción").kind(FieldKind::TextArea),
    FieldSpec::text("url_link", "Enlace (opcional)")
        .kind(FieldKind::Url)
        .placeholder("https://..."),
    FieldSpec::text("fecha_inicio", "Fecha de inicio").kind(FieldKind::Date),
    FieldSpec::text("fecha_fin", "Fecha de fin").kind(FieldKind::Date),
    FieldSpec::text("orden", "Orden").kind(FieldKind::Number),
    FieldSpec::text("color_borde", "Color del borde").kind(FieldKind::Color),
    FieldSpec::text("activo", "Activo").kind(FieldKind::Checkbox),
];

// The banner screen renders its own table
const COLUMNS: &[Column] = &[
    Column::new("orden", "Orden"),
    Column::styled("titulo", "Título", CellStyle::Strong),
    Column::styled("activo", "Estado", CellStyle::Badge),
];

const MESSAGES: ResourceMessages = ResourceMessages {
    title: "Administración de Banners Promocionales",
    new_label: "Nuevo Banner",
    create_title: "Crear Banner",
    edit_title: "Editar Banner",
    list_title: "Banners existentes",
    empty: "No hay banners registrados. Crea uno nuevo.",
    created: "Banner creado exitosamente",
    updated: "Banner actualizado exitosamente",
    deleted: "Banner eliminado exitosamente",
    create_failed: "Error al crear el banner",
    update_failed: "Error al actualizar el banner",
    delete_failed: "Error al eliminar el banner",
    confirm_delete: "¿Estás seguro de eliminar esta promoción?",
};

impl AdminResource for Banner {
    const PAGE_ID: &'static str = "a006_banner--list";
    const REQUIRES_IMAGE_ON_CREATE: bool = true;

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
            "titulo" => self.titulo.clone(),
            "descripcion" => self.descripcion.clone(),
            "url_link" => self.url_link.clone(),
            "fecha_inicio" => self.fecha_inicio.clone(),
            "fecha_fin" => self.fecha_fin.clone(),
            "orden" => self.orden.to_string(),
            "color_borde" => self.border_color().to_string(),
            "activo" => bool_field(self.activo),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, value: String) {
        match key {
            "titulo" => self.titulo = value,
            "descripcion" => self.descripcion = value,
            "url_link" => self.url_link = value,
            "fecha_inicio" => self.fecha_inicio = value,
            "fecha_fin" => self.fecha_fin = value,
            "orden" => {
                if let Ok(orden) = value.trim().parse() {
                    self.orden = orden;
                }
            }
            "color_borde" => self.color_borde = value,
            "activo" => self.activo = parse_bool_field(&value),
            _ => {}
        }
    }

    fn list_query() -> Option<String> {
        serde_qs::to_string(&BannerListQuery { all: true }).ok()
    }

    /// New banners go to the end of the carousel
    fn blank(existing: &[Self]) -> Self {
        Banner {
            orden: existing.len() as i32,
            activo: true,
            ..Banner::default()
        }
    }

    fn prepare_edit(&self) -> Self {
        let color_borde = if self.color_borde.trim().is_empty() {
            DEFAULT_BORDER_COLOR.to_string()
        } else {
            self.color_borde.clone()
        };
        Banner {
            fecha_inicio: date_only(&self.fecha_inicio),
            fecha_fin: date_only(&self.fecha_fin),
            color_borde,
            ..self.clone()
        }
    }

    fn preview(&self) -> Option<String> {
        self.image_source()
    }

    /// A new image always travels as multipart; an edit without one sends
    /// only the scalar fields as JSON and keeps the stored image.
    fn payload(&self, editing: bool, upload: Option<&ImageUpload>) -> Result<Payload, ApiError> {
        match upload {
            None if editing => Payload::json(&self.to_update()),
            upload => {
                let update = self.to_update();
                let mut form = MultipartForm::new()
                    .text("titulo", &update.titulo)
                    .text("descripcion", &update.descripcion)
                    .text("url_link", &update.url_link)
                    .text("activo", update.activo)
                    .text("orden", update.orden)
                    .text("fecha_inicio", &update.fecha_inicio)
                    .text("fecha_fin", &update.fecha_fin)
                    .text("color_borde", &update.color_borde);
                if let Some(upload) = upload {
                    form = form.file(IMAGE_FIELD, upload.clone());
                }
                Ok(Payload::Multipart(form))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::admin::validation::{validate_draft, ValidationError};

    fn upload() -> ImageUpload {
        ImageUpload {
            file_name: "otono.jpg".into(),
            content_type: "image/jpeg".into(),
            bytes: vec![0xFF, 0xD8, 0xFF],
        }
    }

    fn stored() -> Banner {
        Banner {
            id: Some(4),
            titulo: "Otoño".into(),
            imagen_base64: "QUJD".into(),
            orden: 1,
            fecha_inicio: "2024-03-01T00:00:00".into(),
            ..Banner::default()
        }
    }

    #[test]
    fn test_create_without_file_is_rejected() {
        let draft = Banner::blank(&[]);
        assert_eq!(
            validate_draft(&draft, false, false),
            Err(ValidationError::ImageRequired)
        );
        assert_eq!(validate_draft(&draft, false, true), Ok(()));
        // editing keeps the stored image
        assert_eq!(validate_draft(&stored(), true, false), Ok(()));
    }

    #[test]
    fn test_edit_without_file_sends_json_update() {
        let draft = stored().prepare_edit();
        let payload = draft.payload(true, None).unwrap();
        assert_eq!(
            payload,
            Payload::Json(serde_json::to_value(draft.to_update()).unwrap())
        );
    }

    #[test]
    fn test_edit_with_file_sends_multipart() {
        let draft = stored().prepare_edit();
        match draft.payload(true, Some(&upload())).unwrap() {
            Payload::Multipart(form) => {
                assert_eq!(form.field("titulo"), Some("Otoño"));
                assert_eq!(form.field("orden"), Some("1"));
                assert_eq!(form.field("activo"), Some("true"));
                assert_eq!(form.field("fecha_inicio"), Some("2024-03-01"));
                assert_eq!(form.field("color_borde"), Some(DEFAULT_BORDER_COLOR));
                let (name, file) = form.file.unwrap();
                assert_eq!(name, IMAGE_FIELD);
                assert_eq!(file, upload());
            }
            other => panic!("expected multipart, got {:?}", other),
        }
    }

    #[test]
    fn test_create_is_multipart() {
        let draft = Banner::blank(&[stored(), stored()]);
        assert_eq!(draft.orden, 2);
        assert!(draft.activo);
        assert!(draft.payload(false, Some(&upload())).unwrap().is_multipart());
    }

    #[test]
    fn test_prepare_edit_truncates_dates() {
        let draft = Banner {
            fecha_fin: "2024-03-31T23:59:59".into(),
            color_borde: String::new(),
            ..stored()
        }
        .prepare_edit();
        assert_eq!(draft.fecha_inicio, "2024-03-01");
        assert_eq!(draft.fecha_fin, "2024-03-31");
        assert_eq!(draft.color_borde, DEFAULT_BORDER_COLOR);
        assert_eq!(
            stored().preview().as_deref(),
            Some("data:image/jpeg;base64,QUJD")
        );
    }

    #[test]
    fn test_admin_list_query() {
        assert_eq!(Banner::list_query().as_deref(), Some("all=true"));
    }

    #[test]
    fn test_orden_field_ignores_garbage() {
        let mut draft = stored();
        draft.set_field("orden", "abc".into());
        assert_eq!(draft.orden, 1);
        draft.set_field("orden", " 3 ".into());
        assert_eq!(draft.orden, 3);
    }
}
