use thiserror::Error;

use super::resource::AdminResource;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("El campo \"{0}\" es obligatorio")]
    Required(&'static str),

    #[error("El campo \"{label}\" admite como máximo {max} caracteres")]
    TooLong { label: &'static str, max: usize },

    #[error("Selecciona una imagen para el banner")]
    ImageRequired,
}

/// Checks a draft against the field schema of its resource.
///
/// Same rules the form advertises with `required` / `maxlength`, plus the
/// image a new banner must carry. Nothing else blocks a submit.
pub fn validate_draft<R: AdminResource>(
    draft: &R,
    editing: bool,
    has_upload: bool,
) -> Result<(), ValidationError> {
    for field in R::fields() {
        let value = draft.field_value(field.key);
        if field.required && value.trim().is_empty() {
            return Err(ValidationError::Required(field.label));
        }
        if let Some(max) = field.max_len {
            if value.chars().count() > max {
                return Err(ValidationError::TooLong {
                    label: field.label,
                    max,
                });
            }
        }
    }

    if R::REQUIRES_IMAGE_ON_CREATE && !editing && !has_upload {
        return Err(ValidationError::ImageRequired);
    }
    Ok(())
}
