//! Resource descriptor consumed by the generic admin controller.
//!
//! Each admin screen is the same list + form + CRUD flow; the differences
//! (endpoint, form fields, table columns, user-facing texts, payload shape)
//! are described by implementing [`AdminResource`].

use contracts::domain::common::CatalogEntity;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::payload::{ImageUpload, Payload};
use crate::shared::http::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Url,
    TextArea,
    Date,
    Color,
    Number,
    Checkbox,
}

impl FieldKind {
    /// `type` attribute of the rendered `<input>`
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::TextArea => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Url => "url",
            FieldKind::Date => "date",
            FieldKind::Color => "color",
            FieldKind::Number => "number",
            FieldKind::Checkbox => "checkbox",
        }
    }
}

/// One form input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub max_len: Option<usize>,
    pub placeholder: &'static str,
}

impl FieldSpec {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            required: false,
            max_len: None,
            placeholder: "",
        }
    }

    pub const fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn max_len(mut self, max: usize) -> Self {
        self.max_len = Some(max);
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Plain,
    Strong,
    Badge,
}

/// One table column; the cell text comes from [`AdminResource::cell`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub style: CellStyle,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            style: CellStyle::Plain,
        }
    }

    pub const fn styled(key: &'static str, label: &'static str, style: CellStyle) -> Self {
        Self { key, label, style }
    }
}

/// Texts shown by an admin screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceMessages {
    pub title: &'static str,
    pub new_label: &'static str,
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub list_title: &'static str,
    pub empty: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
    pub confirm_delete: &'static str,
}

pub trait AdminResource:
    CatalogEntity + Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// `{entity}--{category}` id of the admin page
    const PAGE_ID: &'static str;

    /// Create is rejected unless an image file is attached
    const REQUIRES_IMAGE_ON_CREATE: bool = false;

    fn fields() -> &'static [FieldSpec];

    fn columns() -> &'static [Column];

    fn messages() -> &'static ResourceMessages;

    /// Current value of a form field as text
    fn field_value(&self, key: &str) -> String;

    /// Writes a form field; unknown keys are ignored
    fn set_field(&mut self, key: &str, value: String);

    fn cell(&self, key: &str) -> String {
        match key {
            "id" => self.id().map(|id| id.to_string()).unwrap_or_default(),
            other => self.field_value(other),
        }
    }

    /// Query string appended to the list request
    fn list_query() -> Option<String> {
        None
    }

    /// Fresh draft for the create form
    fn blank(_existing: &[Self]) -> Self {
        Self::default()
    }

    /// Draft for the edit form
    fn prepare_edit(&self) -> Self {
        self.clone()
    }

    /// Image preview source for the edit form
    fn preview(&self) -> Option<String> {
        None
    }

    /// Request body for create (`editing == false`) or update
    fn payload(&self, _editing: bool, _upload: Option<&ImageUpload>) -> Result<Payload, ApiError> {
        Payload::json(self)
    }
}

pub(crate) fn bool_field(value: bool) -> String {
    let text = if value { "true" } else { "false" };
    text.to_string()
}

pub(crate) fn parse_bool_field(value: &str) -> bool {
    matches!(value, "true" | "on" | "1")
}
