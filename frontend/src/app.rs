use crate::components::generator::TemplateGeneratorComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="bg-light min-vh-100 py-5">
                <TemplateGeneratorComponent />
            </div>
        }
    }
}
