pub mod queue;

pub use queue::{Notice, NoticeKind, NotificationQueue};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::config::config;
use crate::shared::date_utils::now_ms;

/// Anything that can surface a short message to the user.
pub trait Notifier {
    fn notify(&self, kind: NoticeKind, message: &str);

    fn success(&self, message: &str) {
        self.notify(NoticeKind::Success, message);
    }

    fn warning(&self, message: &str) {
        self.notify(NoticeKind::Warning, message);
    }

    fn error(&self, message: &str) {
        self.notify(NoticeKind::Error, message);
    }
}

/// App-wide notification queue.
///
/// Every notice expires after `[notifications].ttl_ms`; `NotificationHost`
/// renders whatever is currently queued.
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
    ttl_ms: u32,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::new()),
            ttl_ms: config().notifications.ttl_ms,
        }
    }

    pub fn push(&self, kind: NoticeKind, message: &str) -> u64 {
        let mut id = 0;
        self.queue
            .update(|q| id = q.push(kind, message, self.ttl_ms, now_ms()));

        let svc = *self;
        let ttl = self.ttl_ms;
        spawn_local(async move {
            TimeoutFuture::new(ttl).await;
            svc.queue.update(|q| {
                q.prune(now_ms());
            });
        });

        id
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationService {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.push(kind, message);
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().unwrap_or_else(|| {
        log::warn!("NotificationService not provided, using a detached queue");
        NotificationService::new()
    })
}

/// Renders queued notices at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_notifications();

    view! {
        <Show when=move || svc.queue.with(|q| !q.is_empty())>
            <div class="notice-stack" role="status" aria-live="polite">
                <For
                    each=move || svc.queue.with(|q| q.entries().to_vec())
                    key=|notice| notice.id
                    children=move |notice| {
                        let id = notice.id;
                        view! {
                            <div class=format!("notice {}", notice.kind.css_modifier())>
                                <span class="notice__text">{notice.message}</span>
                                <button
                                    class="notice__close"
                                    aria-label="Cerrar"
                                    on:click=move |_| svc.dismiss(id)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
