use contracts::domain::a002_brand::aggregate::Brand;
use leptos::prelude::*;

use crate::shared::admin::ui::ResourceAdminPage;
use crate::shared::admin::use_admin;

#[component]
#[allow(non_snake_case)]
pub fn BrandList() -> impl IntoView {
    let admin = use_admin::<Brand>();

    view! { <ResourceAdminPage admin=admin /> }
}
