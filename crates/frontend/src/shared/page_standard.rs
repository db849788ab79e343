//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a004_unit--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity searchable: the id copied from the DOM
//! inspector leads straight to `domain/a004_unit/`.

/// Admin table of a catalog collection, with its create/edit form.
pub const PAGE_CAT_LIST: &str = "list";

/// Overview page with shortcuts (admin panel).
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Session and error pages (login, access denied, not found).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Storefront pages with free-form layout.
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
    PAGE_CAT_CUSTOM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a004_unit--list"));
        assert!(is_valid_page_id("d400_admin_panel--dashboard"));
        assert!(!is_valid_page_id("a004_unit"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a004_unit--detail"));
    }
}
