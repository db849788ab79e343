use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::routes::app_route::AppRoute;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    let nav = use_app_context();

    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM title="Página no encontrada">
            <div class="not-found">
                <h2>"Página no encontrada"</h2>
                <p>"No existe ninguna página en " <code>{path}</code></p>
                <button class="button button--primary" on:click=move |_| nav.navigate(AppRoute::Home)>
                    "Volver al inicio"
                </button>
            </div>
        </PageFrame>
    }
}
