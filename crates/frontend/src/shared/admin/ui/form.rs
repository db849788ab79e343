use leptos::prelude::*;
use thaw::*;

use crate::shared::admin::resource::{parse_bool_field, AdminResource, FieldKind, FieldSpec};
use crate::shared::admin::AdminHandle;

/// One input bound to a draft field
#[component]
pub fn AdminFieldInput<R: AdminResource>(admin: AdminHandle<R>, field: FieldSpec) -> impl IntoView {
    let key = field.key;
    let value = move || admin.state.with(|s| s.draft.field_value(key));
    let maxlength = field.max_len.map(|m| m.to_string());
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    };

    let input = match field.kind {
        FieldKind::TextArea => view! {
            <textarea
                class="form__input form__input--textarea"
                name=key
                rows="3"
                required=field.required
                maxlength=maxlength
                placeholder=field.placeholder
                prop:value=value
                on:input=move |ev| admin.set_field(key, event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Checkbox => view! {
            <input
                type="checkbox"
                class="form__checkbox"
                name=key
                prop:checked=move || parse_bool_field(&value())
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    admin.set_field(key, checked.to_string());
                }
            />
        }
        .into_any(),
        kind => view! {
            <input
                type=kind.input_type()
                class="form__input"
                name=key
                required=field.required
                maxlength=maxlength
                placeholder=field.placeholder
                prop:value=value
                on:input=move |ev| admin.set_field(key, event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            {input}
        </div>
    }
}

/// Create / edit form. `children` is rendered after the schema fields.
#[component]
pub fn AdminForm<R: AdminResource>(
    admin: AdminHandle<R>,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let messages = R::messages();
    let editing = move || admin.state.with(|s| s.editing);

    view! {
        <div class="card admin-form">
            <div class="card__header">
                <h3 class="card__title">
                    {move || if editing() { messages.edit_title } else { messages.create_title }}
                </h3>
            </div>
            <form
                class="card__body form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    admin.submit();
                }
            >
                {R::fields()
                    .iter()
                    .map(|field| view! { <AdminFieldInput admin=admin field=*field /> })
                    .collect_view()}

                {children.map(|c| c())}

                <Flex gap=FlexGap::Small>
                    <button type="submit" class="button button--primary">
                        {move || if editing() { "Actualizar" } else { "Guardar" }}
                    </button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| admin.cancel()>
                        "Cancelar"
                    </Button>
                </Flex>
            </form>
        </div>
    }
}
