use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notifications::NotificationService;
use crate::system::auth::Session;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session restored from localStorage, read by the navbar and route guards
    provide_context(Session::restore());

    provide_context(NotificationService::new());

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
}
