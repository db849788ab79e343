use leptos::prelude::*;
use thaw::*;

use super::export::start_export;
use crate::layout::global_context::{use_app_context, NavState};
use crate::routes::app_route::{AdminScreen, AppRoute};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Back-office landing page: one card per admin screen, quick "new" actions
/// and the Excel export.
#[component]
pub fn AdminPanel() -> impl IntoView {
    let nav = use_app_context();
    let notices = use_notifications();
    let exporting = RwSignal::new(false);

    let open = move |screen: AdminScreen| nav.navigate(AppRoute::Admin(screen));
    let create = move |screen: AdminScreen| {
        nav.navigate_with(AppRoute::Admin(screen), NavState { open_form: true })
    };

    let quick_actions = AdminScreen::ALL
        .into_iter()
        .map(|screen| {
            view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| create(screen)>
                    {icon("plus")}
                    {screen.new_label()}
                </Button>
            }
        })
        .collect_view();

    let cards = AdminScreen::ALL
        .into_iter()
        .map(|screen| {
            view! {
                <div class="admin-card" on:click=move |_| open(screen)>
                    <div class="admin-card__icon">{icon(screen.icon())}</div>
                    <h5 class="admin-card__title">{screen.title()}</h5>
                    <p class="admin-card__text">{screen.description()}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="d400_admin_panel--dashboard" category=PAGE_CAT_DASHBOARD title="Administración">
            <div class="page__header">
                <h1 class="page__title">{icon("admin")} "Panel de Administración"</h1>
            </div>

            <div class="admin-panel">
                <aside class="card admin-panel__actions">
                    <div class="card__header">
                        <h3 class="card__title">"Acceso Rápido"</h3>
                    </div>
                    <div class="card__body">
                        <Flex vertical=true gap=FlexGap::Small>
                            {quick_actions}
                            <hr />
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || exporting.get())
                                on_click=move |_| start_export(exporting, notices)
                            >
                                <Show
                                    when=move || exporting.get()
                                    fallback=|| view! { {icon("download")} "Exportar a Excel" }
                                >
                                    <Spinner />
                                    "Exportando..."
                                </Show>
                            </Button>
                        </Flex>
                    </div>
                </aside>

                <section class="admin-panel__grid">{cards}</section>
            </div>
        </PageFrame>
    }
}
