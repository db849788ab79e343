//! Root wrapper of every routed page.
//!
//! The root element carries `id="{entity}--{category}"` and
//! `data-page-category`, and the browser tab title follows the page.

use super::page_standard::*;
use leptos::prelude::*;

const SITE_NAME: &str = "Delicias Naturales";

/// BEM block plus the category modifier and any extra classes
pub fn page_class(category: &str, extra: &str) -> String {
    let mut class = String::from("page");
    if category != PAGE_CAT_LIST && is_known_category(category) {
        class.push_str(" page--");
        class.push_str(category);
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

pub fn document_title(title: Option<&str>) -> String {
    match title {
        Some(t) if !t.is_empty() => format!("{} | {}", t, SITE_NAME),
        _ => SITE_NAME.to_string(),
    }
}

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    #[prop(optional)] class: &'static str,
    /// Shown in the browser tab
    #[prop(optional)]
    title: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {}", page_id);

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&document_title(title));
    }

    view! {
        <div id=page_id class=page_class(category, class) data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_LIST, ""), "page");
        assert_eq!(page_class(PAGE_CAT_DASHBOARD, ""), "page page--dashboard");
        assert_eq!(page_class(PAGE_CAT_SYSTEM, "login"), "page page--system login");
    }

    #[test]
    fn test_document_title() {
        assert_eq!(document_title(None), "Delicias Naturales");
        assert_eq!(
            document_title(Some("Marcas")),
            "Marcas | Delicias Naturales"
        );
    }
}
