use contracts::domain::a003_supplier::aggregate::Supplier;
use leptos::prelude::*;

use crate::shared::admin::ui::ResourceAdminPage;
use crate::shared::admin::use_admin;

#[component]
#[allow(non_snake_case)]
pub fn SupplierList() -> impl IntoView {
    let admin = use_admin::<Supplier>();

    view! { <ResourceAdminPage admin=admin /> }
}
