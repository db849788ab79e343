//! Generic admin screens: resource descriptor, controller and UI pieces.

pub mod controller;
pub mod http_api;
pub mod payload;
pub mod resource;
pub mod state;
pub mod ui;
pub mod validation;

pub use controller::{AdminController, DeepLink, ResourceApi, StateCell};
pub use http_api::HttpResourceApi;
pub use payload::{ImageUpload, MultipartForm, Payload};
pub use resource::{AdminResource, CellStyle, Column, FieldKind, FieldSpec, ResourceMessages};
pub use state::AdminState;

use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::confirm::BrowserConfirm;
use crate::shared::notifications::{use_notifications, NotificationService};

/// Controller wired to the browser: REST, a reactive signal and the app notices
pub type PageController<R> =
    AdminController<R, HttpResourceApi<R>, RwSignal<AdminState<R>>, NotificationService>;

/// Copyable handle used from view closures and event handlers.
///
/// The controller itself holds an `Rc`, so it lives in a local `StoredValue`;
/// async operations are spawned on the local executor.
pub struct AdminHandle<R: AdminResource> {
    pub(crate) controller: StoredValue<PageController<R>, LocalStorage>,
    pub state: RwSignal<AdminState<R>>,
}

impl<R: AdminResource> Clone for AdminHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: AdminResource> Copy for AdminHandle<R> {}

impl<R: AdminResource> AdminHandle<R> {
    pub fn controller(&self) -> PageController<R> {
        self.controller.get_value()
    }

    pub fn open_create(&self) {
        self.controller.with_value(|c| c.open_create());
    }

    pub fn open_edit(&self, item: &R) {
        self.controller.with_value(|c| c.open_edit(item));
    }

    pub fn set_field(&self, key: &str, value: String) {
        self.controller.with_value(|c| c.set_field(key, value));
    }

    pub fn attach_image(&self, upload: ImageUpload) {
        self.controller.with_value(|c| c.attach_image(upload));
    }

    pub fn submit(&self) {
        let controller = self.controller();
        spawn_local(async move {
            controller.submit().await;
        });
    }

    pub fn remove(&self, id: EntityId) {
        let controller = self.controller();
        spawn_local(async move {
            controller.remove(id, &BrowserConfirm).await;
        });
    }

    pub fn cancel(&self) {
        self.controller.with_value(|c| c.cancel());
    }
}

/// Builds the controller of an admin screen, loads the collection and honours
/// the "open create form" deep link once the collection is known.
pub fn use_admin<R: AdminResource>() -> AdminHandle<R> {
    let state = state::create_state::<R>();
    let controller = AdminController::new(
        std::rc::Rc::new(HttpResourceApi::<R>::new()),
        state,
        use_notifications(),
    );
    let deep_link = use_context::<AppGlobalContext>();

    let handle = AdminHandle {
        controller: StoredValue::new_local(controller.clone()),
        state,
    };

    // the blank draft depends on the loaded items (banner `orden`)
    spawn_local(async move {
        controller.load().await;
        if let Some(ctx) = deep_link {
            controller.open_from_deep_link(&ctx);
        }
    });
    handle
}
