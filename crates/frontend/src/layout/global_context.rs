use leptos::ev;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::window;

use crate::routes::app_route::{redirect_for, AppRoute};
use crate::shared::admin::DeepLink;

/// State carried in the history entry next to the URL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    /// Ask the target admin screen to open its create form
    #[serde(default)]
    pub open_form: bool,
}

fn current_location() -> (String, String) {
    let location = window().map(|w| w.location());
    let path = location
        .as_ref()
        .and_then(|l| l.pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    let search = location
        .as_ref()
        .and_then(|l| l.search().ok())
        .unwrap_or_default();
    (path, search)
}

fn history_state() -> NavState {
    window()
        .and_then(|w| w.history().ok())
        .and_then(|h| h.state().ok())
        .and_then(|state| serde_wasm_bindgen::from_value(state).ok())
        .unwrap_or_default()
}

fn write_history(url: &str, state: NavState, replace: bool) {
    let Some(history) = window().and_then(|w| w.history().ok()) else {
        return;
    };
    let data = serde_wasm_bindgen::to_value(&state).unwrap_or(JsValue::NULL);
    let result = if replace {
        history.replace_state_with_url(&data, "", Some(url))
    } else {
        history.push_state_with_url(&data, "", Some(url))
    };
    if let Err(e) = result {
        log::error!("History API: no se pudo navegar a {}: {:?}", url, e);
    }
}

/// App-wide navigation context: current route plus the history entry state
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<AppRoute>,
    nav_state: RwSignal<NavState>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let (path, search) = current_location();
        Self {
            route: RwSignal::new(AppRoute::from_location(&path, &search)),
            nav_state: RwSignal::new(history_state()),
        }
    }

    pub fn navigate(&self, route: AppRoute) {
        self.navigate_with(route, NavState::default());
    }

    /// Pushes a history entry carrying `state`
    pub fn navigate_with(&self, route: AppRoute, state: NavState) {
        let url = route.path();
        log::debug!("navigate: {} {:?}", url, state);
        write_history(&url, state, false);
        self.nav_state.set(state);
        self.route.set(route);
    }

    /// Same as [`navigate`](Self::navigate) without a new history entry
    pub fn replace(&self, route: AppRoute) {
        let url = route.path();
        log::debug!("replace: {}", url);
        write_history(&url, NavState::default(), true);
        self.nav_state.set(NavState::default());
        self.route.set(route);
    }

    /// Rewrites alias URLs and follows back/forward.
    pub fn init_router_integration(&self) {
        let (path, search) = current_location();
        if let Some(target) = redirect_for(&path) {
            log::info!("Redirigiendo {} -> {}", path, target);
            let state = self.nav_state.get_untracked();
            write_history(&target, state, true);
            self.route.set(AppRoute::from_location(&target, &search));
        }

        let this = *self;
        // the listener lives as long as the page
        let _ = window_event_listener(ev::popstate, move |event| {
            let state = serde_wasm_bindgen::from_value(event.state()).unwrap_or_default();
            let (path, search) = current_location();
            log::debug!("popstate: {}", path);
            this.nav_state.set(state);
            this.route.set(AppRoute::from_location(&path, &search));
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DeepLink for AppGlobalContext {
    /// Consumes the flag and clears it from the history entry, so a reload
    /// or a back navigation does not reopen the form.
    fn take_open_form(&self) -> bool {
        let requested = self.nav_state.with_untracked(|s| s.open_form);
        if requested {
            let cleared = NavState::default();
            self.nav_state.set(cleared);
            let (path, search) = current_location();
            write_history(&format!("{}{}", path, search), cleared, true);
        }
        requested
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().unwrap_or_else(|| {
        log::warn!("AppGlobalContext no encontrado en el contexto");
        AppGlobalContext::new()
    })
}
