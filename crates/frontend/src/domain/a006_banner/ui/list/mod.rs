mod image_input;

use contracts::domain::a006_banner::aggregate::Banner;
use contracts::domain::common::{CatalogEntity, EntityId};
use leptos::prelude::*;
use thaw::*;

use self::image_input::BannerImageInput;
use crate::domain::a006_banner::reorder::MoveDirection;
use crate::shared::admin::ui::{AdminForm, AdminListSection};
use crate::shared::admin::{use_admin, AdminHandle, AdminResource};
use crate::shared::date_utils::format_period;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
#[allow(non_snake_case)]
pub fn BannerList() -> impl IntoView {
    let admin = use_admin::<Banner>();
    let messages = Banner::messages();

    view! {
        <PageFrame page_id=Banner::PAGE_ID category=PAGE_CAT_LIST title=Banner::list_name()>
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
                    <AdminForm admin=admin>
                        <BannerImageInput admin=admin />
                    </AdminForm>
                </Show>

                <AdminListSection admin=admin>
                    <BannerTable admin=admin />
                </AdminListSection>
            </div>
        </PageFrame>
    }
}

/// Admin table: order arrows, thumbnail, status and validity window
#[component]
fn BannerTable(admin: AdminHandle<Banner>) -> impl IntoView {
    let position = move |id: Option<EntityId>| {
        admin.state.with(|s| {
            let index = s.items.iter().position(|b| b.id == id);
            (index, s.items.len())
        })
    };

    view! {
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell resizable=false>"Orden"</TableHeaderCell>
                    <TableHeaderCell resizable=false>"Imagen"</TableHeaderCell>
                    <TableHeaderCell resizable=false>"Título"</TableHeaderCell>
                    <TableHeaderCell resizable=false>"Estado"</TableHeaderCell>
                    <TableHeaderCell resizable=false>"Vigencia"</TableHeaderCell>
                    <TableHeaderCell resizable=false>"Acciones"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                <For
                    each=move || admin.state.with(|s| s.items.clone())
                    key=|banner| (banner.id(), banner.orden)
                    children=move |banner| {
                        let id = banner.id();
                        let is_first = move || matches!(position(id), (Some(0), _));
                        let is_last = move || match position(id) {
                            (Some(index), len) => index + 1 == len,
                            _ => true,
                        };
                        let move_banner = move |direction: MoveDirection| {
                            if let Some(id) = id {
                                admin.reorder(id, direction);
                            }
                        };

                        let thumbnail = banner
                            .image_source()
                            .map(|src| view! { <img class="banner-thumb" src=src alt=banner.titulo.clone() /> });
                        let (status_class, status) = if banner.activo {
                            ("badge badge--success", "Activo")
                        } else {
                            ("badge badge--neutral", "Inactivo")
                        };
                        let period = format_period(&banner.fecha_inicio, &banner.fecha_fin);
                        let orden = banner.orden;
                        let titulo = banner.titulo.clone();
                        let for_edit = banner.clone();

                        view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>
                                        <Flex gap=FlexGap::Small>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                disabled=Signal::derive(is_first)
                                                on_click=move |_| move_banner(MoveDirection::Up)
                                            >
                                                {icon("arrow-up")}
                                            </Button>
                                            <span>{orden}</span>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                disabled=Signal::derive(is_last)
                                                on_click=move |_| move_banner(MoveDirection::Down)
                                            >
                                                {icon("arrow-down")}
                                            </Button>
                                        </Flex>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{thumbnail}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>
                                        <strong>{titulo}</strong>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <span class=status_class>{status}</span>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>{period}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <Flex gap=FlexGap::Small>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| admin.open_edit(&for_edit)
                                            >
                                                {icon("edit")}
                                                "Editar"
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| {
                                                    if let Some(id) = id {
                                                        admin.remove(id);
                                                    }
                                                }
                                            >
                                                {icon("delete")}
                                                "Eliminar"
                                            </Button>
                                        </Flex>
                                    </TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                    }
                />
            </TableBody>
        </Table>
    }
}
