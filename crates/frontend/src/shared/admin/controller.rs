//! Generic list + form + CRUD controller shared by every admin screen.
//!
//! The controller owns no DOM. It talks to three seams: [`ResourceApi`] for
//! REST calls, a [`StateCell`] holding [`AdminState`], and a [`Notifier`]
//! for user-facing notices. The Leptos page wires the browser versions; tests
//! plug in-memory ones.

use async_trait::async_trait;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use super::payload::{ImageUpload, Payload};
use super::resource::AdminResource;
use super::state::AdminState;
use super::validation::validate_draft;
use crate::shared::confirm::Confirm;
use crate::shared::http::ApiError;
use crate::shared::notifications::Notifier;

#[async_trait(?Send)]
pub trait ResourceApi<R> {
    async fn list(&self) -> Result<Vec<R>, ApiError>;

    async fn create(&self, payload: Payload) -> Result<(), ApiError>;

    async fn update(&self, id: EntityId, payload: Payload) -> Result<(), ApiError>;

    async fn delete(&self, id: EntityId) -> Result<(), ApiError>;
}

/// Source of the one-shot "open the create form" navigation signal
pub trait DeepLink {
    /// Returns the signal and clears it, so it fires at most once
    fn take_open_form(&self) -> bool;
}

/// Shared mutable cell the controller reads and writes state through
pub trait StateCell<T>: Clone + 'static {
    fn peek<U>(&self, f: impl FnOnce(&T) -> U) -> U;

    fn modify(&self, f: impl FnOnce(&mut T));
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn peek<U>(&self, f: impl FnOnce(&T) -> U) -> U {
        self.with_untracked(f)
    }

    fn modify(&self, f: impl FnOnce(&mut T)) {
        self.update(f);
    }
}

impl<T: 'static> StateCell<T> for Rc<RefCell<T>> {
    fn peek<U>(&self, f: impl FnOnce(&T) -> U) -> U {
        f(&self.borrow())
    }

    fn modify(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut());
    }
}

pub struct AdminController<R, A, S, N> {
    pub(crate) api: Rc<A>,
    pub(crate) state: S,
    pub(crate) notifier: N,
    _resource: PhantomData<fn() -> R>,
}

impl<R, A, S: Clone, N: Clone> Clone for AdminController<R, A, S, N> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            state: self.state.clone(),
            notifier: self.notifier.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R, A, S, N> AdminController<R, A, S, N>
where
    R: AdminResource,
    A: ResourceApi<R> + 'static,
    S: StateCell<AdminState<R>>,
    N: Notifier + Clone + 'static,
{
    pub fn new(api: Rc<A>, state: S, notifier: N) -> Self {
        Self {
            api,
            state,
            notifier,
            _resource: PhantomData,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Fetches the collection. On failure the previous list stays on screen.
    pub async fn load(&self) {
        self.state.modify(|s| s.loading = true);
        match self.api.list().await {
            Ok(items) => {
                log::debug!("{}: {} registros", R::list_name(), items.len());
                self.state.modify(|s| {
                    s.items = items;
                    s.loading = false;
                });
            }
            Err(e) => {
                log::error!("Error cargando {}: {}", R::list_name(), e);
                self.state.modify(|s| s.loading = false);
            }
        }
    }

    pub fn open_create(&self) {
        self.state.modify(|s| {
            s.draft = R::blank(&s.items);
            s.editing = false;
            s.upload = None;
            s.preview = None;
            s.form_visible = true;
        });
    }

    pub fn open_edit(&self, item: &R) {
        let draft = item.prepare_edit();
        let preview = item.preview();
        self.state.modify(|s| {
            s.draft = draft;
            s.preview = preview;
            s.upload = None;
            s.editing = true;
            s.form_visible = true;
        });
    }

    pub fn set_field(&self, key: &str, value: String) {
        self.state.modify(|s| s.draft.set_field(key, value));
    }

    pub fn attach_image(&self, upload: ImageUpload) {
        self.state.modify(|s| s.set_upload(upload));
    }

    /// Creates or updates the draft depending on the editing flag.
    ///
    /// Returns `true` when the server accepted it. Invalid drafts never reach
    /// the API; a failed request leaves the form open with the draft intact.
    pub async fn submit(&self) -> bool {
        let (draft, editing, upload) = self
            .state
            .peek(|s| (s.draft.clone(), s.editing, s.upload.clone()));
        let messages = R::messages();
        let failed = if editing {
            messages.update_failed
        } else {
            messages.create_failed
        };

        if let Err(e) = validate_draft(&draft, editing, upload.is_some()) {
            log::debug!("{}: borrador rechazado: {}", R::element_name(), e);
            self.notifier.warning(&e.to_string());
            return false;
        }

        let result = match draft.payload(editing, upload.as_ref()) {
            Ok(payload) if editing => match draft.id() {
                Some(id) => self.api.update(id, payload).await,
                None => Err(ApiError::Encode("el registro no tiene id".into())),
            },
            Ok(payload) => self.api.create(payload).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                self.state.modify(|s| s.reset_form());
                self.notifier.success(if editing {
                    messages.updated
                } else {
                    messages.created
                });
                self.load().await;
                true
            }
            Err(e) => {
                log::error!("Error guardando {}: {}", R::element_name(), e);
                self.notifier.error(failed);
                false
            }
        }
    }

    /// Deletes after an affirmative confirmation; no optimistic removal.
    pub async fn remove(&self, id: EntityId, confirm: &impl Confirm) -> bool {
        let messages = R::messages();
        if !confirm.confirm(messages.confirm_delete) {
            return false;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                self.notifier.success(messages.deleted);
                self.load().await;
                true
            }
            Err(e) => {
                log::error!("Error eliminando {} {}: {}", R::element_name(), id, e);
                self.notifier.error(messages.delete_failed);
                false
            }
        }
    }

    pub fn cancel(&self) {
        self.state.modify(|s| s.reset_form());
    }

    /// Opens the create form when the page was entered with the deep-link signal
    pub fn open_from_deep_link(&self, link: &impl DeepLink) -> bool {
        if link.take_open_form() {
            log::debug!("{}: formulario abierto por enlace directo", R::list_name());
            self.open_create();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::notifications::NoticeKind;
    use contracts::domain::a001_tag::aggregate::Tag;
    use contracts::domain::a003_supplier::aggregate::Supplier;
    use contracts::domain::a004_unit::aggregate::Unit;
    use contracts::domain::a006_banner::aggregate::Banner;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        List,
        Create(Payload),
        Update(EntityId, Payload),
        Delete(EntityId),
    }

    pub struct FakeApi<R> {
        pub items: RefCell<Vec<R>>,
        pub fail_list: Cell<bool>,
        pub fail_mutations: Cell<bool>,
        pub calls: RefCell<Vec<Call>>,
    }

    impl<R> FakeApi<R> {
        pub fn with_items(items: Vec<R>) -> Rc<Self> {
            Rc::new(Self {
                items: RefCell::new(items),
                fail_list: Cell::new(false),
                fail_mutations: Cell::new(false),
                calls: RefCell::new(Vec::new()),
            })
        }

        pub fn mutations(&self) -> Vec<Call> {
            self.calls
                .borrow()
                .iter()
                .filter(|c| **c != Call::List)
                .cloned()
                .collect()
        }

        fn mutate(&self, call: Call) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(call);
            if self.fail_mutations.get() {
                Err(ApiError::Status(500))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl<R: Clone> ResourceApi<R> for FakeApi<R> {
        async fn list(&self) -> Result<Vec<R>, ApiError> {
            self.calls.borrow_mut().push(Call::List);
            if self.fail_list.get() {
                Err(ApiError::Network("offline".into()))
            } else {
                Ok(self.items.borrow().clone())
            }
        }

        async fn create(&self, payload: Payload) -> Result<(), ApiError> {
            self.mutate(Call::Create(payload))
        }

        async fn update(&self, id: EntityId, payload: Payload) -> Result<(), ApiError> {
            self.mutate(Call::Update(id, payload))
        }

        async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
            self.mutate(Call::Delete(id))
        }
    }

    #[derive(Clone, Default)]
    pub struct RecordingNotifier(pub Rc<RefCell<Vec<(NoticeKind, String)>>>);

    impl RecordingNotifier {
        pub fn kinds(&self) -> Vec<NoticeKind> {
            self.0.borrow().iter().map(|(k, _)| *k).collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, kind: NoticeKind, message: &str) {
            self.0.borrow_mut().push((kind, message.to_string()));
        }
    }

    pub struct Answer(pub bool);

    impl Confirm for Answer {
        fn confirm(&self, _message: &str) -> bool {
            self.0
        }
    }

    pub type TestController<R> =
        AdminController<R, FakeApi<R>, Rc<RefCell<AdminState<R>>>, RecordingNotifier>;

    pub fn controller<R: AdminResource>(
        api: &Rc<FakeApi<R>>,
    ) -> (TestController<R>, RecordingNotifier) {
        let notifier = RecordingNotifier::default();
        let state = Rc::new(RefCell::new(AdminState::<R>::default()));
        (
            AdminController::new(Rc::clone(api), state, notifier.clone()),
            notifier,
        )
    }

    fn tag(id: EntityId, nombre: &str) -> Tag {
        Tag {
            id: Some(id),
            nombre: nombre.into(),
        }
    }

    #[test]
    fn test_load_replaces_items() {
        let api = FakeApi::with_items(vec![tag(1, "Sin TACC"), tag(2, "Vegano")]);
        let (ctrl, _) = controller(&api);
        block_on(ctrl.load());
        ctrl.state().peek(|s| {
            assert_eq!(s.items.len(), 2);
            assert!(!s.loading);
        });
    }

    #[test]
    fn test_load_failure_keeps_stale_list() {
        let api = FakeApi::with_items(vec![tag(1, "Sin TACC")]);
        let (ctrl, notifier) = controller(&api);
        block_on(ctrl.load());

        api.items.borrow_mut().clear();
        api.fail_list.set(true);
        block_on(ctrl.load());

        ctrl.state().peek(|s| {
            assert_eq!(s.items, vec![tag(1, "Sin TACC")]);
            assert!(!s.loading);
        });
        // load failures are only logged
        assert!(notifier.kinds().is_empty());
    }

    #[test]
    fn test_edit_then_submit_sends_item_unchanged() {
        let item = tag(7, "Orgánico");
        let api = FakeApi::with_items(vec![item.clone()]);
        let (ctrl, notifier) = controller(&api);
        block_on(ctrl.load());

        ctrl.open_edit(&item);
        assert!(block_on(ctrl.submit()));

        assert_eq!(
            api.mutations(),
            vec![Call::Update(
                7,
                Payload::Json(serde_json::to_value(&item).unwrap())
            )]
        );
        assert_eq!(notifier.kinds(), vec![NoticeKind::Success]);
        ctrl.state().peek(|s| {
            assert!(!s.form_visible);
            assert!(!s.editing);
            assert_eq!(s.draft, Tag::default());
        });
    }

    #[test]
    fn test_stored_records_resubmit_as_they_are() {
        // reversed promotion window and a loose email are the server's business
        let banner = Banner {
            id: Some(2),
            titulo: "Otoño".into(),
            imagen_base64: "QUJD".into(),
            fecha_inicio: "2024-04-01".into(),
            fecha_fin: "2024-03-01".into(),
            ..Banner::default()
        };
        let api = FakeApi::with_items(vec![banner.clone()]);
        let (ctrl, notifier) = controller(&api);
        ctrl.open_edit(&banner);
        assert!(block_on(ctrl.submit()));
        assert_eq!(
            api.mutations(),
            vec![Call::Update(
                2,
                Payload::Json(serde_json::to_value(banner.to_update()).unwrap())
            )]
        );
        assert_eq!(notifier.kinds(), vec![NoticeKind::Success]);

        let supplier = Supplier {
            id: Some(4),
            nombre: "Granja Sol".into(),
            telefono: String::new(),
            email: "ventas".into(),
        };
        let api = FakeApi::with_items(vec![supplier.clone()]);
        let (ctrl, _) = controller(&api);
        ctrl.open_edit(&supplier);
        assert!(block_on(ctrl.submit()));
        assert_eq!(
            api.mutations(),
            vec![Call::Update(
                4,
                Payload::Json(serde_json::to_value(&supplier).unwrap())
            )]
        );
    }

    #[test]
    fn test_create_posts_draft_without_id() {
        let api = FakeApi::<Tag>::with_items(vec![]);
        let (ctrl, _) = controller(&api);
        ctrl.open_create();
        ctrl.set_field("nombre", "Sin azúcar".into());
        assert!(block_on(ctrl.submit()));

        assert_eq!(
            api.mutations(),
            vec![Call::Create(Payload::Json(
                serde_json::json!({ "nombre": "Sin azúcar" })
            ))]
        );
        // reloaded after the mutation
        assert_eq!(api.calls.borrow().last(), Some(&Call::List));
    }

    #[test]
    fn test_submit_failure_keeps_form_open() {
        let api = FakeApi::<Tag>::with_items(vec![]);
        api.fail_mutations.set(true);
        let (ctrl, notifier) = controller::<Tag>(&api);
        ctrl.open_create();
        ctrl.set_field("nombre", "Keto".into());

        assert!(!block_on(ctrl.submit()));
        ctrl.state().peek(|s| {
            assert!(s.form_visible);
            assert_eq!(s.draft.nombre, "Keto");
        });
        assert_eq!(notifier.kinds(), vec![NoticeKind::Error]);
        assert!(!api.calls.borrow().contains(&Call::List));
    }

    #[test]
    fn test_required_field_blocks_request() {
        let api = FakeApi::<Tag>::with_items(vec![]);
        let (ctrl, notifier) = controller::<Tag>(&api);
        ctrl.open_create();
        ctrl.set_field("nombre", "   ".into());

        assert!(!block_on(ctrl.submit()));
        assert!(api.mutations().is_empty());
        assert_eq!(notifier.kinds(), vec![NoticeKind::Warning]);
    }

    #[test]
    fn test_unit_abbreviation_too_long_is_rejected() {
        let api = FakeApi::<Unit>::with_items(vec![]);
        let (ctrl, notifier) = controller(&api);
        ctrl.open_create();
        ctrl.set_field("nombre", "Kilogramo".into());
        ctrl.set_field("abreviacion", "kilogramos!".into());

        assert!(!block_on(ctrl.submit()));
        assert!(api.mutations().is_empty());
        assert_eq!(notifier.0.borrow().len(), 1);
        assert!(ctrl.state().peek(|s| s.form_visible));
    }

    #[test]
    fn test_remove_requires_confirmation() {
        let api = FakeApi::with_items(vec![tag(3, "Vegano")]);
        let (ctrl, notifier) = controller(&api);

        assert!(!block_on(ctrl.remove(3, &Answer(false))));
        assert!(api.mutations().is_empty());
        assert!(notifier.kinds().is_empty());

        assert!(block_on(ctrl.remove(3, &Answer(true))));
        assert_eq!(api.mutations(), vec![Call::Delete(3)]);
        assert_eq!(notifier.kinds(), vec![NoticeKind::Success]);
    }

    #[test]
    fn test_remove_failure_notifies_error() {
        let api = FakeApi::with_items(vec![tag(3, "Vegano")]);
        api.fail_mutations.set(true);
        let (ctrl, notifier) = controller(&api);
        block_on(ctrl.load());

        assert!(!block_on(ctrl.remove(3, &Answer(true))));
        assert_eq!(notifier.kinds(), vec![NoticeKind::Error]);
        assert_eq!(ctrl.state().peek(|s| s.items.len()), 1);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let api = FakeApi::<Tag>::with_items(vec![]);
        let (ctrl, _) = controller::<Tag>(&api);
        ctrl.open_edit(&tag(1, "Vegano"));
        ctrl.cancel();
        ctrl.state().peek(|s| {
            assert!(!s.form_visible);
            assert_eq!(s.draft, Tag::default());
        });
        assert!(api.calls.borrow().is_empty());
    }

    struct OneShot(Cell<bool>);

    impl DeepLink for OneShot {
        fn take_open_form(&self) -> bool {
            self.0.replace(false)
        }
    }

    #[test]
    fn test_deep_link_opens_create_form_once() {
        let api = FakeApi::<Tag>::with_items(vec![]);
        let (ctrl, _) = controller::<Tag>(&api);
        let link = OneShot(Cell::new(true));

        assert!(ctrl.open_from_deep_link(&link));
        ctrl.state().peek(|s| {
            assert!(s.form_visible);
            assert!(!s.editing);
        });

        ctrl.cancel();
        assert!(!ctrl.open_from_deep_link(&link));
        assert!(!ctrl.state().peek(|s| s.form_visible));
    }
}
