use contracts::domain::a001_tag::aggregate::Tag;
use leptos::prelude::*;

use crate::shared::admin::ui::ResourceAdminPage;
use crate::shared::admin::use_admin;

#[component]
#[allow(non_snake_case)]
pub fn TagList() -> impl IntoView {
    let admin = use_admin::<Tag>();

    view! { <ResourceAdminPage admin=admin /> }
}
