use leptos::prelude::*;
use thaw::*;

use crate::shared::admin::resource::{AdminResource, CellStyle};
use crate::shared::admin::AdminHandle;
use crate::shared::icons::icon;

/// Collection table with edit / delete actions per row
#[component]
pub fn AdminTable<R: AdminResource>(admin: AdminHandle<R>) -> impl IntoView {
    view! {
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    {R::columns()
                        .iter()
                        .map(|col| view! {
                            <TableHeaderCell resizable=false>{col.label}</TableHeaderCell>
                        })
                        .collect_view()}
                    <TableHeaderCell resizable=false>"Acciones"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                <For
                    each=move || admin.state.with(|s| s.items.clone())
                    key=|item| item.id()
                    children=move |item| {
                        let cells = R::columns()
                            .iter()
                            .map(|col| {
                                let text = item.cell(col.key);
                                let content = match col.style {
                                    CellStyle::Plain => view! { <span>{text}</span> }.into_any(),
                                    CellStyle::Strong => view! { <strong>{text}</strong> }.into_any(),
                                    CellStyle::Badge => view! {
                                        <span class="badge badge--info">{text}</span>
                                    }
                                    .into_any(),
                                };
                                view! {
                                    <TableCell>
                                        <TableCellLayout truncate=true>{content}</TableCellLayout>
                                    </TableCell>
                                }
                            })
                            .collect_view();
                        let id = item.id();
                        let for_edit = item.clone();

                        view! {
                            <TableRow>
                                {cells}
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
