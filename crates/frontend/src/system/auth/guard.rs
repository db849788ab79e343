use leptos::prelude::*;

use super::session::use_session;
use crate::layout::global_context::{use_app_context, AppGlobalContext};
use crate::routes::app_route::AppRoute;

/// Outcome of a route guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Not signed in: go to the login page
    Login,
    /// Signed in without the required role
    Denied,
}

pub fn check_access(authenticated: bool, admin: bool, require_admin: bool) -> Access {
    match (authenticated, admin) {
        (false, _) => Access::Login,
        (true, false) if require_admin => Access::Denied,
        _ => Access::Granted,
    }
}

/// Sends the visitor to `/login?next=<current path>`
fn redirect_to_login(nav: AppGlobalContext) {
    let next = nav.route.with_untracked(|r| r.path());
    log::debug!("Acceso sin sesión a {}, redirigiendo al login", next);
    nav.replace(AppRoute::Login { next: Some(next) });
}

/// Renders `children` only for an administrator.
///
/// Anonymous visitors are sent to the login page, signed-in clients get the
/// access denied panel.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let nav = use_app_context();
    let access = Memo::new(move |_| {
        check_access(session.is_authenticated(), session.is_admin(), true)
    });

    Effect::new(move |_| {
        if access.get() == Access::Login {
            redirect_to_login(nav);
        }
    });

    move || match access.get() {
        Access::Granted => children().into_any(),
        Access::Login => ().into_any(),
        Access::Denied => view! { <AccessDenied /> }.into_any(),
    }
}

#[component]
fn AccessDenied() -> impl IntoView {
    let nav = use_app_context();

    view! {
        <div class="access-denied">
            <h2>"Acceso denegado"</h2>
            <p>"Necesitas permisos de administrador para ver esta página."</p>
            <button class="button button--primary" on:click=move |_| nav.navigate(AppRoute::Home)>
                "Volver al inicio"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_access() {
        assert_eq!(check_access(false, false, false), Access::Login);
        assert_eq!(check_access(false, false, true), Access::Login);
        assert_eq!(check_access(true, false, false), Access::Granted);
        assert_eq!(check_access(true, false, true), Access::Denied);
        assert_eq!(check_access(true, true, true), Access::Granted);
    }
}
