pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

use crate::shared::notifications::NotificationHost;

/// Application shell.
///
/// ```text
/// +------------------------------+
/// |            NavBar            |
/// +------------------------------+
/// |        routed content        |
/// +------------------------------+
/// |            Footer            |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::NavBar />
            <main class="app-main">{children()}</main>
            <footer::Footer />
            <NotificationHost />
        </div>
    }
}
