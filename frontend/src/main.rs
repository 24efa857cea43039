mod api;
mod components;

use std::rc::Rc;

use api::{BrowserClock, HttpTransport};
use components::config_panel::render_config_panel;
use components::handlers;
use components::header::render_header;
use components::results::render_results;
use components::status_panel::render_status;
use shared::{
    ConfigurationPanel, MatchMethod, NarrativeTiming, Orchestrator, RenderedResults, StatusChannel,
    StatusUpdate, SubmitOutcome,
};
use yew::prelude::*;

type ComparisonOrchestrator = Orchestrator<HttpTransport, BrowserClock>;

// Yew msg components
enum Msg {
    // Configuration panel
    SetSourceA(String),
    SetSourceB(String),
    SelectMethod(MatchMethod),
    AdjustThreshold(f64),

    // Comparison
    Submit,
    Status(StatusUpdate),
    Finished(SubmitOutcome),
}

// Main component
struct Model {
    panel: ConfigurationPanel,
    status: StatusChannel,
    results: Option<RenderedResults>,
    orchestrator: Rc<ComparisonOrchestrator>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            panel: ConfigurationPanel::default(),
            status: StatusChannel::new(),
            results: None,
            orchestrator: Rc::new(Orchestrator::new(
                HttpTransport::default(),
                BrowserClock,
                NarrativeTiming::default(),
            )),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetSourceA(id) => {
                self.panel.set_source_a(id);
                true
            }
            Msg::SetSourceB(id) => {
                self.panel.set_source_b(id);
                true
            }
            Msg::SelectMethod(method) => {
                self.panel.select_method(method);
                true
            }
            Msg::AdjustThreshold(value) => {
                self.panel.adjust_threshold(value);
                true
            }

            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::Status(update) => handlers::handle_status(self, update),
            Msg::Finished(outcome) => handlers::handle_finished(self, outcome),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                    { render_config_panel(self, ctx) }
                    { render_status(&self.status) }
                    { render_results(self.results.as_ref()) }
                </main>

                <footer class="app-footer">
                    <p>{"Hotel Photo Match | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Hotel photo match starting...");
    yew::Renderer::<Model>::new().render();
}
