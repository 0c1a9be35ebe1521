//! View rendering for the template generator.
//!
//! One card with three sections (required, optional and custom columns), the
//! generate button below it and, when open, the custom column dialog. All
//! user-facing text is Japanese, matching the generated workbook.

use super::dialogs::custom_column_dialog;
use super::messages::Msg;
use super::state::TemplateGeneratorComponent;
use common::model::column::{ColumnKind, CustomColumn};
use yew::html::Scope;
use yew::prelude::*;

pub fn view(component: &TemplateGeneratorComponent, ctx: &Context<TemplateGeneratorComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="container">
            <header class="text-center mb-5">
                <h1>{"顧客管理Excelフォーマットジェネレーター"}</h1>
                <p class="lead">{"必要な項目を選択・追加して、オリジナルのExcelフォーマットを作成します。"}</p>
            </header>

            <div class="card mb-4">
                <h5 class="card-header">{"項目設定"}</h5>
                <div class="card-body">
                    { build_required_section(component) }
                    { build_optional_section(component, link) }
                    { build_custom_section(component, link) }
                </div>
            </div>

            <div class="text-center">
                <button
                    class="btn btn-success btn-lg"
                    disabled={component.generating}
                    onclick={link.callback(|_| Msg::Generate)}
                >
                    { if component.generating { "生成中..." } else { "Excelフォーマットを生成" } }
                </button>
            </div>

            { custom_column_dialog(component, link) }
        </div>
    }
}

fn build_required_section(component: &TemplateGeneratorComponent) -> Html {
    html! {
        <>
            <h5 class="card-title">{"必須項目"}</h5>
            <p>{"これらの項目は常に含まれます。"}</p>
            <ul class="list-group list-group-horizontal flex-wrap mb-2">
                { for component.catalog.required.iter().map(|header| html! {
                    <li class="list-group-item mb-2">{ header.clone() }</li>
                }) }
            </ul>
            if !component.industries.is_empty() {
                <p class="text-muted small mb-4">
                    { format!("業種の選択肢: {}", component.industries.join(" / ")) }
                </p>
            }
        </>
    }
}

fn build_optional_section(
    component: &TemplateGeneratorComponent,
    link: &Scope<TemplateGeneratorComponent>,
) -> Html {
    html! {
        <>
            <h5 class="card-title">{"自由追加項目"}</h5>
            <p>{"チェックを入れた項目が追加されます。"}</p>
            <div class="mb-4">
                { for component.catalog.optional.iter().map(|column| {
                    let id = format!("optional-{}", column.key);
                    let checked = component.selected_optional.contains(&column.key);
                    let key = column.key.clone();
                    html! {
                        <div class="form-check">
                            <input
                                class="form-check-input"
                                type="checkbox"
                                id={id.clone()}
                                checked={checked}
                                onchange={link.callback(move |_| Msg::ToggleOptional(key.clone()))}
                            />
                            <label class="form-check-label" for={id}>{ column.label.clone() }</label>
                        </div>
                    }
                }) }
            </div>
        </>
    }
}

fn build_custom_section(
    component: &TemplateGeneratorComponent,
    link: &Scope<TemplateGeneratorComponent>,
) -> Html {
    html! {
        <>
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h5 class="card-title mb-0">{"カスタム項目"}</h5>
                <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenDialog)}>
                    {"＋ オリジナル項目を追加"}
                </button>
            </div>
            <p>{"独自の項目を追加します。"}</p>
            <ul class="list-group">
                if component.custom_columns.is_empty() {
                    <li class="list-group-item text-muted">{"追加されたカスタム項目はありません。"}</li>
                } else {
                    { for component.custom_columns.iter().enumerate().map(|(index, column)| {
                        custom_column_item(index, column, link)
                    }) }
                }
            </ul>
        </>
    }
}

fn custom_column_item(
    index: usize,
    column: &CustomColumn,
    link: &Scope<TemplateGeneratorComponent>,
) -> Html {
    let kind_label = match column.kind {
        ColumnKind::Dropdown => "プルダウン",
        ColumnKind::Free => "自由入力",
    };

    html! {
        <li class="list-group-item d-flex justify-content-between align-items-center">
            <div>
                { column.name.clone() }
                <span class="badge rounded-pill bg-secondary ms-2">{ kind_label }</span>
                if let Some(options) = column.dropdown_options() {
                    <div class="text-muted small">{ format!("選択肢: {}", options.join(", ")) }</div>
                }
            </div>
            <button
                type="button"
                class="btn-close"
                onclick={link.callback(move |_| Msg::RemoveCustomColumn(index))}
            />
        </li>
    }
}
