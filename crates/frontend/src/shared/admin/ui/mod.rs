pub mod form;
pub mod table;

pub use form::{AdminFieldInput, AdminForm};
pub use table::AdminTable;

use leptos::prelude::*;
use thaw::*;

use crate::shared::admin::resource::AdminResource;
use crate::shared::admin::AdminHandle;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// Standard admin screen: header, create/edit form and collection table
#[component]
pub fn ResourceAdminPage<R: AdminResource>(admin: AdminHandle<R>) -> impl IntoView {
    let messages = R::messages();

    view! {
        <PageFrame page_id=R::PAGE_ID category=PAGE_CAT_LIST title=R::list_name()>
            <div class="page__header">
                <h1 class="page__title">{messages.title}</h1>
                <div class="page__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| admin.open_create()>
                        {icon("plus")}
                        {messages.new_label}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || admin.state.with(|s| s.form_visible)>
                    <AdminForm admin=admin />
                </Show>

                <AdminListSection admin=admin>
                    <AdminTable admin=admin />
                </AdminListSection>
            </div>
        </PageFrame>
    }
}

/// Card around a collection view with loading and empty states
#[component]
pub fn AdminListSection<R: AdminResource>(admin: AdminHandle<R>, children: ChildrenFn) -> impl IntoView {
    let messages = R::messages();
    let loading = move || admin.state.with(|s| s.loading);
    let empty = move || admin.state.with(|s| s.items.is_empty());

    view! {
        <div class="card">
            <div class="card__header">
                <h3 class="card__title">{messages.list_title}</h3>
            </div>
            <div class="card__body">
                <Show
                    when=move || !loading()
                    fallback=|| view! {
                        <div class="loading">
                            <Spinner />
                        </div>
                    }
                >
                    {
                        let children = children.clone();
                        view! {
                            <Show
                                when=move || !empty()
                                fallback=move || view! { <div class="alert alert--info">{messages.empty}</div> }
                            >
                                {children()}
                            </Show>
                        }
                    }
                </Show>
            </div>
        </div>
    }
}
