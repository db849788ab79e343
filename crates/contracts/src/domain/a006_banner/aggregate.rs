use serde::{Deserialize, Serialize};

use crate::domain::common::{null_as_empty, CatalogEntity, EntityId};

/// Border colour when none was chosen
pub const DEFAULT_BORDER_COLOR: &str = "#000000";

fn default_true() -> bool {
    true
}

fn default_border_color() -> String {
    DEFAULT_BORDER_COLOR.to_string()
}

fn border_color_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = null_as_empty(deserializer)?;
    Ok(if value.trim().is_empty() {
        default_border_color()
    } else {
        value
    })
}

// ============================================================================
// Aggregate
// ============================================================================

/// Promotional banner of the home page carousel.
///
/// The image is either an external URL (`es_url` + `url_imagen`) or a binary
/// stored by the server and returned in `imagen_base64`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub titulo: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub descripcion: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub url_imagen: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub imagen_base64: String,

    #[serde(default)]
    pub es_url: bool,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub url_link: String,

    #[serde(default = "default_true")]
    pub activo: bool,

    /// 0-based carousel position
    #[serde(default)]
    pub orden: i32,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub fecha_inicio: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub fecha_fin: String,

    #[serde(
        default = "default_border_color",
        deserialize_with = "border_color_or_default"
    )]
    pub color_borde: String,
}

impl Default for Banner {
    fn default() -> Self {
        Self {
            id: None,
            titulo: String::new(),
            descripcion: String::new(),
            url_imagen: String::new(),
            imagen_base64: String::new(),
            es_url: false,
            url_link: String::new(),
            activo: true,
            orden: 0,
            fecha_inicio: String::new(),
            fecha_fin: String::new(),
            color_borde: default_border_color(),
        }
    }
}

impl Banner {
    /// `<img src>` value: the external URL or a data URL
    pub fn image_source(&self) -> Option<String> {
        if self.es_url {
            if self.url_imagen.trim().is_empty() {
                None
            } else {
                Some(self.url_imagen.clone())
            }
        } else if !self.imagen_base64.is_empty() {
            Some(format!("data:image/jpeg;base64,{}", self.imagen_base64))
        } else {
            None
        }
    }

    pub fn link(&self) -> Option<&str> {
        let link = self.url_link.trim();
        if link.is_empty() {
            None
        } else {
            Some(link)
        }
    }

    /// Caption is shown only with a title or a description
    pub fn has_caption(&self) -> bool {
        !self.titulo.trim().is_empty() || !self.descripcion.trim().is_empty()
    }

    pub fn border_color(&self) -> &str {
        if self.color_borde.trim().is_empty() {
            DEFAULT_BORDER_COLOR
        } else {
            &self.color_borde
        }
    }

    /// Scalar fields for an update that keeps the stored image
    pub fn to_update(&self) -> BannerUpdate {
        BannerUpdate {
            titulo: self.titulo.clone(),
            descripcion: self.descripcion.clone(),
            url_link: self.url_link.clone(),
            activo: self.activo,
            orden: self.orden,
            fecha_inicio: self.fecha_inicio.clone(),
            fecha_fin: self.fecha_fin.clone(),
            color_borde: self.border_color().to_string(),
        }
    }

    /// `{id, orden}` pair of a reorder request; `None` for drafts
    pub fn order_entry(&self) -> Option<BannerOrder> {
        self.id.map(|id| BannerOrder {
            id,
            orden: self.orden,
        })
    }
}

impl CatalogEntity for Banner {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.titulo
    }

    fn collection_name() -> &'static str {
        "banners"
    }

    fn element_name() -> &'static str {
        "Banner"
    }

    fn list_name() -> &'static str {
        "Banners promocionales"
    }
}

// ============================================================================
// Wire DTOs
// ============================================================================

/// JSON body of `PUT /api/banners/{id}` without a new image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerUpdate {
    pub titulo: String,
    pub descripcion: String,
    pub url_link: String,
    pub activo: bool,
    pub orden: i32,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub color_borde: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerOrder {
    pub id: EntityId,
    pub orden: i32,
}

/// Body of `PUT /api/banners/reordenar`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub ordenes: Vec<BannerOrder>,
}

/// `GET /api/banners` query; `all=true` includes inactive banners
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerListQuery {
    pub all: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_sparse_json() {
        let b: Banner = serde_json::from_str(
            r#"{"id": 1, "titulo": null, "color_borde": null, "imagen_base64": "AAAA"}"#,
        )
        .unwrap();
        assert_eq!(b.titulo, "");
        assert_eq!(b.color_borde, DEFAULT_BORDER_COLOR);
        assert!(b.activo);
        assert_eq!(b.orden, 0);
        assert!(!b.es_url);
    }

    #[test]
    fn test_image_source() {
        let mut b = Banner {
            imagen_base64: "QUJD".into(),
            ..Banner::default()
        };
        assert_eq!(
            b.image_source().as_deref(),
            Some("data:image/jpeg;base64,QUJD")
        );

        b.es_url = true;
        b.url_imagen = "https://cdn.example.com/promo.jpg".into();
        assert_eq!(
            b.image_source().as_deref(),
            Some("https://cdn.example.com/promo.jpg")
        );

        b.url_imagen.clear();
        assert_eq!(b.image_source(), None);
    }

    #[test]
    fn test_caption_and_link() {
        let mut b = Banner::default();
        assert!(!b.has_caption());
        assert_eq!(b.link(), None);

        b.descripcion = "20% off".into();
        b.url_link = "https://example.com/oferta".into();
        assert!(b.has_caption());
        assert_eq!(b.link(), Some("https://example.com/oferta"));
    }

    #[test]
    fn test_order_entry() {
        let b = Banner {
            id: Some(5),
            orden: 3,
            ..Banner::default()
        };
        assert_eq!(b.order_entry(), Some(BannerOrder { id: 5, orden: 3 }));
        assert_eq!(Banner::default().order_entry(), None);
    }

    #[test]
    fn test_update_carries_only_scalar_fields() {
        let b = Banner {
            id: Some(9),
            titulo: "Otoño".into(),
            imagen_base64: "QUJD".into(),
            orden: 2,
            ..Banner::default()
        };
        let json = serde_json::to_value(b.to_update()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("id"));
        assert!(!obj.contains_key("imagen_base64"));
        assert_eq!(obj["titulo"], "Otoño");
        assert_eq!(obj["orden"], 2);
        assert_eq!(obj["color_borde"], DEFAULT_BORDER_COLOR);
    }

    #[test]
    fn test_reorder_request_shape() {
        let req = ReorderRequest {
            ordenes: vec![BannerOrder { id: 1, orden: 1 }, BannerOrder { id: 2, orden: 0 }],
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({ "ordenes": [{ "id": 1, "orden": 1 }, { "id": 2, "orden": 0 }] })
        );
    }
}
