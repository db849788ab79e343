use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::routes::app_route::{AdminScreen, AppRoute};
use crate::shared::icons::icon;
use crate::system::auth::use_session;

#[component]
pub fn NavBar() -> impl IntoView {
    let nav = use_app_context();
    let session = use_session();
    let menu_open = RwSignal::new(false);

    let go = move |route: AppRoute| {
        menu_open.set(false);
        nav.navigate(route);
    };
    let logout = move |_: leptos::ev::MouseEvent| {
        menu_open.set(false);
        session.logout();
        nav.navigate(AppRoute::Home);
    };
    let user_name = move || {
        session
            .current_user()
            .map(|u| u.display_name())
            .unwrap_or_default()
    };
    let role_label = move || {
        session
            .current_user()
            .map(|u| u.role.label())
            .unwrap_or_default()
    };

    let admin_links = move || {
        AdminScreen::ALL
            .into_iter()
            .map(|screen| {
                view! {
                    <button class="navbar__menu-item" on:click=move |_| go(AppRoute::Admin(screen))>
                        {icon(screen.icon())}
                        {screen.title()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header data-zone="header" class="navbar">
            <button class="navbar__brand" on:click=move |_| go(AppRoute::Home)>
                {icon("home")}
                <span class="navbar__title">"Delicias Naturales"</span>
            </button>

            <nav class="navbar__actions">
                <Show when=move || session.is_admin()>
                    <div class="navbar__menu">
                        <button
                            class="button button--ghost"
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                        >
                            {icon("admin")}
                            "Administrar"
                        </button>
                        <Show when=move || menu_open.get()>
                            <div class="navbar__dropdown">
                                <button class="navbar__menu-item" on:click=move |_| go(AppRoute::AdminPanel)>
                                    "Panel de Administración"
                                </button>
                                {admin_links()}
                            </div>
                        </Show>
                    </div>
                </Show>

                <Show
                    when=move || session.is_authenticated()
                    fallback=move || view! {
                        <button
                            class="button button--primary"
                            on:click=move |_| go(AppRoute::Login { next: None })
                        >
                            {icon("user")}
                            "Iniciar sesión"
                        </button>
                    }
                >
                    <span class="navbar__user" title=role_label>{icon("user")} {user_name}</span>
                    <button class="button button--ghost" on:click=logout>
                        {icon("logout")}
                        "Salir"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
