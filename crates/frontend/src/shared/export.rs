//! Server-generated Excel export of the catalog

use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::api_utils::api_url;
use super::date_utils::today_iso;
use super::http::{authorized, read_bytes, ApiError};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// `delicias_naturales_<YYYY-MM-DD>.xlsx`
pub fn excel_export_filename(date: &str) -> String {
    format!("delicias_naturales_{}.xlsx", date)
}

/// Fetches `GET /api/export/excel` and hands the file to the browser
pub async fn download_excel_export() -> Result<String, ApiError> {
    let response = authorized(Request::get(&api_url("/api/export/excel")))
        .send()
        .await?;
    let bytes = read_bytes(response).await?;

    let filename = excel_export_filename(&today_iso());
    let blob = create_blob(&bytes, XLSX_MIME)?;
    download_blob(&blob, &filename).map_err(ApiError::Browser)?;
    Ok(filename)
}

fn create_blob(bytes: &[u8], mime: &str) -> Result<Blob, ApiError> {
    let array = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties).map_err(ApiError::browser)
}

/// Triggers a browser download of `blob`
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    // throwaway anchor
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excel_export_filename() {
        assert_eq!(
            excel_export_filename("2024-11-05"),
            "delicias_naturales_2024-11-05.xlsx"
        );
    }
}
