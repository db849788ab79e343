use contracts::domain::a004_unit::aggregate::Unit;
use leptos::prelude::*;

use crate::shared::admin::ui::ResourceAdminPage;
use crate::shared::admin::use_admin;

#[component]
#[allow(non_snake_case)]
pub fn UnitList() -> impl IntoView {
    let admin = use_admin::<Unit>();

    view! { <ResourceAdminPage admin=admin /> }
}
