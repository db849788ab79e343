use contracts::domain::a005_category::aggregate::Category;
use leptos::prelude::*;

use crate::shared::admin::ui::ResourceAdminPage;
use crate::shared::admin::use_admin;

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let admin = use_admin::<Category>();

    view! { <ResourceAdminPage admin=admin /> }
}
