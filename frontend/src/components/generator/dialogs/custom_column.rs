use crate::components::generator::{Msg, TemplateGeneratorComponent};
use common::model::column::ColumnKind;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

/// Modal for adding one custom column: name, input method and, for dropdown
/// columns, the comma separated choices.
pub fn custom_column_dialog(
    component: &TemplateGeneratorComponent,
    link: &Scope<TemplateGeneratorComponent>,
) -> Html {
    if !component.show_dialog {
        return html! {};
    }

    let draft = &component.draft;
    let is_dropdown = draft.kind == ColumnKind::Dropdown;

    let on_name = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetDraftName(input.value())
    });
    let on_kind = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetDraftKind(if select.value() == "dropdown" {
            ColumnKind::Dropdown
        } else {
            ColumnKind::Free
        })
    });
    let on_options = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetDraftOptions(input.value())
    });

    html! {
        <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.5);z-index:1050;display:flex;align-items:center;justify-content:center;">
            <div class="modal-content bg-white rounded" style="width:min(500px,90vw);">
                <div class="modal-header p-3">
                    <h5 class="modal-title">{"オリジナル項目を追加"}</h5>
                    <button type="button" class="btn-close" onclick={link.callback(|_| Msg::CloseDialog)}></button>
                </div>
                <div class="modal-body p-3">
                    <div class="mb-3">
                        <label class="form-label">{"カラム名"}</label>
                        <input
                            type="text"
                            class="form-control"
                            value={draft.name.clone()}
                            oninput={on_name}
                            placeholder="例：備考"
                        />
                    </div>
                    <div class="mb-3">
                        <label class="form-label">{"入力方法"}</label>
                        <select class="form-select" onchange={on_kind}>
                            <option value="free" selected={!is_dropdown}>{"自由入力"}</option>
                            <option value="dropdown" selected={is_dropdown}>{"プルダウン"}</option>
                        </select>
                    </div>
                    {
                        if is_dropdown {
                            html! {
                                <div class="mb-3">
                                    <label class="form-label">{"プルダウンの選択肢"}</label>
                                    <input
                                        type="text"
                                        class="form-control"
                                        value={draft.options_text.clone()}
                                        oninput={on_options}
                                        placeholder="カンマ区切りで入力（例：A,B,C）"
                                    />
                                    <div class="form-text text-muted">
                                        {"選択肢をカンマ（,）で区切って入力してください。"}
                                    </div>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="modal-footer p-3">
                    <button class="btn btn-secondary" onclick={link.callback(|_| Msg::CloseDialog)}>
                        {"キャンセル"}
                    </button>
                    <button class="btn btn-primary" onclick={link.callback(|_| Msg::AddCustomColumn)}>
                        {"追加する"}
                    </button>
                </div>
            </div>
        </div>
    }
}
