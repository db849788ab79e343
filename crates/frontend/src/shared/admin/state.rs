use leptos::prelude::*;

use super::payload::ImageUpload;
use super::resource::AdminResource;

/// State of one admin screen
#[derive(Clone, Debug, PartialEq)]
pub struct AdminState<R: AdminResource> {
    /// Collection in server order
    pub items: Vec<R>,
    pub loading: bool,
    pub editing: bool,
    pub form_visible: bool,
    pub draft: R,
    /// Image picked in the form, not yet uploaded
    pub upload: Option<ImageUpload>,
    pub preview: Option<String>,
}

impl<R: AdminResource> Default for AdminState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            editing: false,
            form_visible: false,
            draft: R::default(),
            upload: None,
            preview: None,
        }
    }
}

impl<R: AdminResource> AdminState<R> {
    /// Hides the form and drops the draft
    pub fn reset_form(&mut self) {
        self.form_visible = false;
        self.editing = false;
        self.draft = R::blank(&self.items);
        self.upload = None;
        self.preview = None;
    }

    pub fn set_upload(&mut self, upload: ImageUpload) {
        self.preview = Some(upload.preview_url());
        self.upload = Some(upload);
    }
}

pub fn create_state<R: AdminResource>() -> RwSignal<AdminState<R>> {
    RwSignal::new(AdminState::default())
}
