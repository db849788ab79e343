use async_trait::async_trait;
use contracts::domain::common::EntityId;
use gloo_net::http::{Request, RequestBuilder};
use std::marker::PhantomData;
use web_sys::{Blob, BlobPropertyBag, FormData};

use super::controller::ResourceApi;
use super::payload::{MultipartForm, Payload};
use super::resource::AdminResource;
use crate::shared::api_utils::api_url;
use crate::shared::http::{authorized, ensure_ok, read_json, ApiError};

/// REST implementation of [`ResourceApi`] for `/api/{collection}`
pub struct HttpResourceApi<R> {
    _resource: PhantomData<fn() -> R>,
}

impl<R> HttpResourceApi<R> {
    pub fn new() -> Self {
        Self {
            _resource: PhantomData,
        }
    }
}

impl<R> Default for HttpResourceApi<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for HttpResourceApi<R> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl<R: AdminResource> ResourceApi<R> for HttpResourceApi<R> {
    async fn list(&self) -> Result<Vec<R>, ApiError> {
        let mut url = api_url(&R::endpoint());
        if let Some(query) = R::list_query() {
            url.push('?');
            url.push_str(&query);
        }
        let response = authorized(Request::get(&url)).send().await?;
        read_json(response).await
    }

    async fn create(&self, payload: Payload) -> Result<(), ApiError> {
        send_payload(Request::post(&api_url(&R::endpoint())), payload).await
    }

    async fn update(&self, id: EntityId, payload: Payload) -> Result<(), ApiError> {
        send_payload(Request::put(&api_url(&R::item_endpoint(id))), payload).await
    }

    async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
        let response = authorized(Request::delete(&api_url(&R::item_endpoint(id))))
            .send()
            .await?;
        ensure_ok(response).map(|_| ())
    }
}

pub async fn send_payload(builder: RequestBuilder, payload: Payload) -> Result<(), ApiError> {
    let builder = authorized(builder);
    let request = match payload {
        Payload::Json(body) => builder.json(&body)?,
        // Content-Type with the boundary is set by the browser
        Payload::Multipart(form) => builder.body(to_form_data(&form)?)?,
    };
    let response = request.send().await?;
    ensure_ok(response).map(|_| ())
}

fn to_form_data(form: &MultipartForm) -> Result<FormData, ApiError> {
    let data = FormData::new().map_err(ApiError::browser)?;
    for (name, value) in &form.fields {
        data.append_with_str(name, value)
            .map_err(ApiError::browser)?;
    }

    if let Some((name, upload)) = &form.file {
        let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let properties = BlobPropertyBag::new();
        properties.set_type(&upload.content_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &properties)
            .map_err(ApiError::browser)?;
        data.append_with_blob_and_filename(name, &blob, &upload.file_name)
            .map_err(ApiError::browser)?;
    }

    Ok(data)
}
