use contracts::domain::a006_banner::aggregate::Banner;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::shared::admin::{AdminHandle, ImageUpload};
use crate::shared::http::ApiError;
use crate::shared::notifications::{use_notifications, Notifier};

/// Reads the picked file into memory
async fn read_image(file: web_sys::File) -> Result<ImageUpload, ApiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(ApiError::browser)?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    Ok(ImageUpload {
        file_name: file.name(),
        content_type: file.type_(),
        bytes,
    })
}

/// Label and `required` flag of the picker: a new banner needs an image,
/// an edit keeps the stored one unless a file is chosen.
fn image_field(editing: bool) -> (&'static str, bool) {
    if editing {
        ("Nueva imagen (opcional)", false)
    } else {
        ("Imagen *", true)
    }
}

/// File picker with preview. Required on create, optional on edit.
#[component]
pub fn BannerImageInput(admin: AdminHandle<Banner>) -> impl IntoView {
    let notices = use_notifications();
    let editing = move || admin.state.with(|s| s.editing);
    let preview = move || admin.state.with(|s| s.preview.clone());

    let on_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            return;
        };

        spawn_local(async move {
            match read_image(file).await {
                Ok(upload) => {
                    log::debug!("Imagen seleccionada: {} ({} bytes)", upload.file_name, upload.bytes.len());
                    admin.attach_image(upload);
                }
                Err(e) => {
                    log::error!("No se pudo leer la imagen: {}", e);
                    notices.error("No se pudo leer la imagen seleccionada");
                }
            }
        });
    };

    view! {
        <div class="form__group">
            <label class="form__label">
                {move || image_field(editing()).0}
            </label>
            <input
                type="file"
                accept="image/*"
                class="form__input"
                required=move || image_field(editing()).1
                on:change=on_change
            />
            {move || {
                preview()
                    .map(|src| {
                        view! {
                            <div class="banner-preview">
                                <img src=src alt="Vista previa" />
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_required_only_on_create() {
        assert_eq!(image_field(false), ("Imagen *", true));
        assert_eq!(image_field(true), ("Nueva imagen (opcional)", false));
    }
}
