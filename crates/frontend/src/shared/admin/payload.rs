use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

use crate::shared::http::ApiError;

/// Image picked in the form, read fully into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// `data:` URL for the `<img>` preview
    pub fn preview_url(&self) -> String {
        let content_type = if self.content_type.is_empty() {
            "image/jpeg"
        } else {
            &self.content_type
        };
        format!("data:{};base64,{}", content_type, STANDARD.encode(&self.bytes))
    }
}

/// `multipart/form-data` body: text fields plus at most one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    pub fields: Vec<(String, String)>,
    pub file: Option<(String, ImageUpload)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl ToString) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    pub fn file(mut self, name: &str, upload: ImageUpload) -> Self {
        self.file = Some((name.to_string(), upload));
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    Multipart(MultipartForm),
}

impl Payload {
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        Ok(Payload::Json(serde_json::to_value(value)?))
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, Payload::Multipart(_))
    }
}
