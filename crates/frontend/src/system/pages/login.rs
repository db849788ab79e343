use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::use_app_context;
use crate::routes::app_route::AppRoute;
use crate::shared::http::ApiError;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::{api, use_session, SessionData};

fn login_error_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Status(400) | ApiError::Status(401) | ApiError::Status(403) => {
            "Correo o contraseña incorrectos"
        }
        _ => "Error de conexión. Intenta nuevamente.",
    }
}

#[component]
pub fn LoginPage(next: Option<String>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<&'static str>::None);
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();
    let nav = use_app_context();
    let target = StoredValue::new(next);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(response) => {
                    session.login(SessionData::from(response));
                    set_is_loading.set(false);

                    let route = target
                        .get_value()
                        .map(|path| AppRoute::from_location(&path, ""))
                        .unwrap_or(AppRoute::Home);
                    nav.navigate(route);
                }
                Err(e) => {
                    log::error!("Login fallido: {}", e);
                    set_error_message.set(Some(login_error_message(&e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <PageFrame page_id="login--system" category=PAGE_CAT_SYSTEM title="Iniciar sesión">
            <div class="login-container">
                <div class="login-card">
                    <h2 class="login-title">"INICIAR SESIÓN"</h2>
                    <p class="login-subtitle">"Accede a tu cuenta"</p>

                    <Show when=move || error_message.get().is_some()>
                        <div class="alert alert--error" role="alert">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form class="form" on:submit=on_submit>
                        <div class="form__group">
                            <label class="form__label" for="email">"Correo electrónico"</label>
                            <input
                                type="email"
                                id="email"
                                class="form__input"
                                placeholder="Ingrese su correo"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="password">"Contraseña"</label>
                            <input
                                type="password"
                                id="password"
                                class="form__input"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <button
                            type="submit"
                            class="button button--primary"
                            disabled=move || is_loading.get()
                        >
                            {move || if is_loading.get() { "Ingresando..." } else { "Ingresar" }}
                        </button>
                    </form>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_message_hides_server_detail() {
        assert_eq!(
            login_error_message(&ApiError::Status(401)),
            "Correo o contraseña incorrectos"
        );
        assert_eq!(
            login_error_message(&ApiError::Network("refused".into())),
            "Error de conexión. Intenta nuevamente."
        );
    }
}
