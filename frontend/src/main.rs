mod api;
mod components;

use api::GlooApi;
use components::handlers;
use components::header::render_header;
use components::preview_area::render_preview_area;
use components::results::render_results;
use components::upload_section::render_upload_section;
use components::utils::render_status_message;
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{ApiConfig, ApiError, DetectionId, DetectionRecord, FormState, RenameOutcome};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

// Image held for upload; the preview URL is revoked when this is dropped.
struct UploadInput {
    file: GlooFile,
    preview_url: ObjectUrl,
}

enum Msg {
    // File selection
    FileSelected(GlooFile),
    NoImageSelected,
    SetDragging(bool),
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),

    // Detection
    Detect,
    DetectionFinished(Result<DetectionRecord, ApiError>),

    // Rename
    NewNameChanged(String),
    UpdateName,
    NameAccepted(DetectionId, String),
    NameUpdateFinished(RenameOutcome),
}

struct Model {
    form: FormState,
    upload: Option<UploadInput>,
    api: Rc<GlooApi>,
    is_dragging: bool,
    paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = Self {
            form: FormState::new(),
            upload: None,
            api: Rc::new(GlooApi::new(ApiConfig::default())),
            is_dragging: false,
            paste_listener: None,
        };

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let listener = EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            });
            model.paste_listener = Some(listener);
        } else {
            log::warn!("No window available, paste support disabled");
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileSelected(file) => handlers::handle_file_selected(self, file),
            Msg::NoImageSelected => handlers::handle_no_image_selected(self),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),

            Msg::Detect => handlers::handle_detect(self, ctx),
            Msg::DetectionFinished(outcome) => handlers::handle_detection_finished(self, outcome),

            Msg::NewNameChanged(value) => {
                self.form = self.form.set_new_name(value);
                true
            }
            Msg::UpdateName => handlers::handle_update_name(self, ctx),
            Msg::NameAccepted(detection_id, new_name) => {
                self.form = self.form.name_accepted(&detection_id, &new_name);
                true
            }
            Msg::NameUpdateFinished(outcome) => handlers::handle_name_update_finished(self, outcome),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                    <div class="upload-section">
                        { render_upload_section(self, ctx) }
                        { render_preview_area(self, ctx) }
                    </div>
                    { render_status_message(self) }
                    { render_results(self, ctx) }
                </main>

                <footer class="app-footer">
                    <p>{"Smart Drug Authentication | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
