use gloo_file::{File as GlooFile, ObjectUrl};
use shared::Prediction;
use web_sys::DragEvent;
use yew::prelude::*;

mod chart;
mod components;
mod state;

use chart::ChartSurface;
use components::{handlers, header, preview_area, results, upload_section, utils};
use state::SubmissionState;

// Models
/// The single upload candidate. Replaced wholesale on every selection; `id`
/// ties an in-flight preview decode to the selection that started it.
pub struct FileData {
    id: u64,
    file: GlooFile,
    preview_url: Option<ObjectUrl>,
}

// Yew msg components
pub enum Msg {
    // File intake
    FilesChosen(Vec<GlooFile>),
    PreviewReady(u64, ObjectUrl),

    // Submission lifecycle
    Submit,
    DetectFinished(Result<Prediction, String>),

    // UI states
    SetDragging(bool),

    // Input events
    HandleDrop(DragEvent),
}

// Main component
pub struct Model {
    candidate: Option<FileData>,
    submission: SubmissionState,
    intake_error: Option<String>,
    is_dragging: bool,
    chart: ChartSurface,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            candidate: None,
            submission: SubmissionState::Idle,
            intake_error: None,
            is_dragging: false,
            chart: ChartSurface::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File intake
            Msg::FilesChosen(files) => handlers::handle_files_chosen(self, ctx, files),
            Msg::PreviewReady(id, url) => handlers::handle_preview_ready(self, id, url),

            // Submission lifecycle
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::DetectFinished(outcome) => handlers::handle_detect_finished(self, outcome),

            // UI states
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header() }

                <main class="main-content">
                    { upload_section::render_upload_section(self, ctx) }
                    { preview_area::render_preview_area(self, ctx) }
                    { utils::render_error_panel(self) }
                    { results::render_loading_indicator(self) }
                    { results::render_results(self) }
                </main>

                <footer class="app-footer">
                    <p>{"Tomato Leaf Disease Detection | Rust WASM Client"}</p>
                </footer>
            </div>
        }
    }

    // The chart canvas only exists while a result is shown, so the chart is
    // rebuilt after every render that produced one.
    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let SubmissionState::Success(prediction) = &self.submission {
            if let Err(err) = self
                .chart
                .render(results::CHART_CANVAS_ID, &prediction.all_probabilities)
            {
                log::error!("chart rendering failed: {err:?}");
            }
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
