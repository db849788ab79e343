use leptos::prelude::*;

use crate::dashboards::AdminPanel;
use crate::domain::a001_tag::ui::list::TagList;
use crate::domain::a002_brand::ui::list::BrandList;
use crate::domain::a003_supplier::ui::list::SupplierList;
use crate::domain::a004_unit::ui::list::UnitList;
use crate::domain::a005_category::ui::list::CategoryList;
use crate::domain::a006_banner::ui::list::BannerList;
use crate::layout::global_context::use_app_context;
use crate::layout::Shell;
use crate::routes::app_route::{AdminScreen, AppRoute};
use crate::system::auth::RequireAdmin;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;

fn admin_screen(screen: AdminScreen) -> AnyView {
    match screen {
        AdminScreen::Tags => view! { <TagList /> }.into_any(),
        AdminScreen::Brands => view! { <BrandList /> }.into_any(),
        AdminScreen::Suppliers => view! { <SupplierList /> }.into_any(),
        AdminScreen::Units => view! { <UnitList /> }.into_any(),
        AdminScreen::Categories => view! { <CategoryList /> }.into_any(),
        AdminScreen::Banners => view! { <BannerList /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let nav = use_app_context();

    // Initialize router integration. This runs once when the component is created.
    nav.init_router_integration();

    let route = Memo::new(move |_| nav.route.get());

    view! {
        <Shell>
            {move || match route.get() {
                AppRoute::Home => view! { <HomePage /> }.into_any(),
                AppRoute::Login { next } => view! { <LoginPage next=next /> }.into_any(),
                AppRoute::AdminPanel => view! {
                    <RequireAdmin>
                        <AdminPanel />
                    </RequireAdmin>
                }
                .into_any(),
                AppRoute::Admin(screen) => view! {
                    <RequireAdmin>{move || admin_screen(screen)}</RequireAdmin>
                }
                .into_any(),
                AppRoute::NotFound(path) => view! { <NotFoundPage path=path /> }.into_any(),
            }}
        </Shell>
    }
}
