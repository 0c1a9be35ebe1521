//! Template generator: the page that lets a user pick columns and download the
//! resulting customer-list workbook.
//!
//! Same layout as the other Yew components in this crate: state, messages,
//! update and view live in their own submodules and the `Component`
//! implementation below only wires them together.
//!
//! On first render the column catalog and the industry list are fetched from
//! the backend; everything else happens locally until "generate" is pressed.

use common::model::catalog::ColumnCatalog;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

mod dialogs;
mod draft;
mod helpers;
mod messages;
mod state;
mod update;
mod view;

use helpers::show_toast;
pub use messages::Msg;
pub use state::TemplateGeneratorComponent;

impl Component for TemplateGeneratorComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        TemplateGeneratorComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                match Request::get("/api/columns").send().await {
                    Ok(resp) if resp.ok() => match resp.json::<ColumnCatalog>().await {
                        Ok(catalog) => link.send_message(Msg::CatalogLoaded(catalog)),
                        Err(err) => show_toast(&format!("項目一覧を読み込めませんでした: {}", err)),
                    },
                    Ok(resp) => show_toast(&format!(
                        "項目一覧を読み込めませんでした (HTTP {})",
                        resp.status()
                    )),
                    Err(err) => show_toast(&format!("APIサーバーに接続できません: {}", err)),
                }
            });

            let link = ctx.link().clone();
            spawn_local(async move {
                if let Ok(resp) = Request::get("/api/industries").send().await {
                    if let Ok(industries) = resp.json::<Vec<String>>().await {
                        link.send_message(Msg::IndustriesLoaded(industries));
                    }
                }
            });
        }
    }
}
