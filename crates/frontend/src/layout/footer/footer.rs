use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer data-zone="footer" class="footer">
            <span class="footer__brand">"Delicias Naturales"</span>
            <span class="footer__copy">{format!("© {} Todos los derechos reservados", year)}</span>
        </footer>
    }
}
