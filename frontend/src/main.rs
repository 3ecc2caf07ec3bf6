mod api;
mod components;

use components::controls::{
    ModelInfo, render_confidence_slider, render_display_mode, render_run_button,
};
use components::handlers;
use components::header::render_header;
use components::media_input::{render_sample_gallery, render_upload_card, render_url_form};
use components::stage::{ProcessingIndicator, render_error_banner, render_stage};
use detector_shared::{
    AcceptFilter, ClientConfig, DisplayMode, ModelVariant, ProcessingResult, Session, SubmitError,
};
use gloo_file::{File as GlooFile, ObjectUrl};
use std::rc::Rc;
use web_sys::DragEvent;
use yew::prelude::*;

const CONFIG_YAML: &str = include_str!("../../config/detector.yaml");

// Yew msg components
pub enum Msg {
    // Media acquisition
    FilePicked(Option<GlooFile>),
    HandleDrop(DragEvent),
    SetDragging(bool),
    SampleClicked(String),
    UrlSubmitted(String),
    OpenPicker(AcceptFilter),

    // Parameters
    SetModel(ModelVariant),
    SetConfidence(u8),
    SetDisplayMode(DisplayMode),

    // Submission
    Run,
    Completed(u64, Result<ProcessingResult, SubmitError>),
    DismissError,
}

// Main component
pub struct App {
    config: Rc<ClientConfig>,
    session: Session<GlooFile>,
    /// Keeps the object URL of a local file alive while it is previewed.
    preview_url: Option<ObjectUrl>,
    is_dragging: bool,
    accept: AcceptFilter,
    file_input: NodeRef,
    url_input: NodeRef,
}

fn load_config() -> ClientConfig {
    ClientConfig::from_yaml(CONFIG_YAML).unwrap_or_else(|e| {
        log::warn!("{}; falling back to built-in defaults", e);
        ClientConfig::default()
    })
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = load_config();
        let session = Session::new(config.initial_parameters());

        Self {
            config: Rc::new(config),
            session,
            preview_url: None,
            is_dragging: false,
            accept: AcceptFilter::Any,
            file_input: NodeRef::default(),
            url_input: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Media acquisition
            Msg::FilePicked(file) => handlers::handle_file_picked(self, file),
            Msg::HandleDrop(event) => handlers::handle_drop(self, event),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::SampleClicked(path) => handlers::handle_sample_clicked(self, path),
            Msg::UrlSubmitted(url) => handlers::handle_url_submitted(self, &url),
            Msg::OpenPicker(accept) => handlers::handle_open_picker(self, accept),

            // Parameters
            Msg::SetModel(model) => {
                self.session.set_model(model);
                true
            }
            Msg::SetConfidence(percent) => {
                self.session.set_confidence(percent);
                true
            }
            Msg::SetDisplayMode(mode) => {
                self.session.set_display_mode(mode);
                true
            }

            // Submission
            Msg::Run => handlers::handle_run(self, ctx),
            Msg::Completed(generation, outcome) => {
                handlers::handle_completed(self, generation, outcome)
            }
            Msg::DismissError => {
                self.session.dismiss_error();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let selected_model = self.session.parameters().model;

        html! {
            <div class="container">
                { render_header() }

                <main class="main-content detector-grid">
                    <aside class="sidebar">
                        <ModelInfo
                            selected={selected_model}
                            on_select={link.callback(Msg::SetModel)}
                        />
                        { render_sample_gallery(self, ctx) }
                        { render_upload_card(self, ctx) }
                        { render_url_form(self, ctx) }
                        { render_run_button(self, ctx) }
                    </aside>

                    <section class="workspace">
                        { render_stage(self) }
                        <ProcessingIndicator is_processing={self.session.is_processing()} />
                        { render_error_banner(self, ctx) }
                        <div class="settings">
                            { render_confidence_slider(self, ctx) }
                            { render_display_mode(self, ctx) }
                        </div>
                    </section>
                </main>

                <footer class="app-footer">
                    <p>{"Road Boundary Detector | Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<App>::new().render();
}
