//! Update function for the template generator component.
//!
//! Elm-style: receives the current state, the `Context` and a `Msg`, mutates the
//! state and returns whether the view should re-render. The only network call
//! made from here is the generation request; its outcome comes back as
//! `Msg::GenerationFinished`.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::draft::{toggle_key, ColumnDraft};
use super::helpers::{download_bytes, show_toast};
use super::messages::Msg;
use super::state::TemplateGeneratorComponent;

const GENERATE_URL: &str = "/api/generate-excel";
const FILE_NAME: &str = "customer_list_format.xlsx";
const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub fn update(
    component: &mut TemplateGeneratorComponent,
    ctx: &Context<TemplateGeneratorComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::CatalogLoaded(catalog) => {
            component.catalog = catalog;
            true
        }
        Msg::IndustriesLoaded(industries) => {
            component.industries = industries;
            true
        }
        Msg::ToggleOptional(key) => {
            toggle_key(&mut component.selected_optional, &key);
            true
        }
        Msg::OpenDialog => {
            component.draft = ColumnDraft::default();
            component.show_dialog = true;
            true
        }
        Msg::CloseDialog => {
            component.show_dialog = false;
            true
        }
        Msg::SetDraftName(name) => {
            component.draft.name = name;
            false
        }
        Msg::SetDraftKind(kind) => {
            component.draft.kind = kind;
            // the options field appears only for dropdown columns
            true
        }
        Msg::SetDraftOptions(text) => {
            component.draft.options_text = text;
            false
        }
        Msg::AddCustomColumn => match component.draft.build() {
            Ok(column) => {
                component.custom_columns.push(column);
                component.draft = ColumnDraft::default();
                component.show_dialog = false;
                true
            }
            Err(reason) => {
                show_toast(reason);
                false
            }
        },
        Msg::RemoveCustomColumn(index) => {
            if index < component.custom_columns.len() {
                component.custom_columns.remove(index);
            }
            true
        }
        Msg::Generate => {
            if component.generating {
                return false;
            }
            component.generating = true;

            let request = component.request();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = request_workbook(&request).await;
                link.send_message(Msg::GenerationFinished(result));
            });
            true
        }
        Msg::GenerationFinished(result) => {
            component.generating = false;
            match result {
                Ok(()) => show_toast("Excelフォーマットをダウンロードしました。"),
                Err(err) => show_toast(&format!("Excelファイルの生成に失敗しました: {}", err)),
            }
            true
        }
    }
}

async fn request_workbook(request: &common::requests::GenerationRequest) -> Result<(), String> {
    let response = Request::post(GENERATE_URL)
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| format!("APIサーバーに接続できません ({})", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("HTTP {}: {}", status, body));
    }

    let bytes = response.binary().await.map_err(|e| e.to_string())?;
    download_bytes(&bytes, FILE_NAME, XLSX_MIME).map_err(|e| format!("{:?}", e))
}
