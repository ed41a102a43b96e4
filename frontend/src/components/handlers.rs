use super::super::{Model, Msg, UploadInput};
use crate::api::GlooApi;
use super::utils::first_image_file;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{rename_and_enrich, run_detection, ApiError, DetectionRecord, RenameOutcome, StatusMessage};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, FileList};
use yew::prelude::*;

pub fn handle_file_selected(model: &mut Model, file: GlooFile) -> bool {
    log::info!("Selected image: {} ({} bytes)", file.name(), file.size());

    let preview_url = ObjectUrl::from(file.clone());
    model.form = model.form.select_file(file.name());
    // Replacing the input drops the previous preview URL.
    model.upload = Some(UploadInput { file, preview_url });
    true
}

pub fn handle_no_image_selected(model: &mut Model) -> bool {
    model.form = model.form.with_status(StatusMessage::NoImageSelected);
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(data_transfer) = event.data_transfer() {
        if let Some(file_list) = data_transfer.files() {
            process_file_list(ctx, &file_list);
        }
    }

    true
}

pub fn handle_paste(_model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(data_transfer) = event.clipboard_data() {
        if let Some(file_list) = data_transfer.files() {
            if file_list.length() > 0 {
                event.prevent_default();
                process_file_list(ctx, &file_list);
                return true;
            }
        }
    }
    false
}

pub fn process_file_list(ctx: &Context<Model>, file_list: &FileList) {
    match first_image_file(file_list) {
        Some(file) => ctx.link().send_message(Msg::FileSelected(file)),
        None => {
            log::warn!("Skipping {} non-image file(s)", file_list.length());
            ctx.link().send_message(Msg::NoImageSelected);
        }
    }
}

pub fn handle_detect(model: &mut Model, ctx: &Context<Model>) -> bool {
    let started = model.form.begin_detection();
    model.form = started.state;

    match (started.dispatch, model.upload.as_ref()) {
        (Some(()), Some(upload)) => {
            send_detection_request(ctx, Rc::clone(&model.api), upload.file.clone());
        }
        (Some(()), None) => {
            log::error!("Detection started without an image held for upload");
            model.form = model
                .form
                .finish_detection(Err(ApiError::Request("no image held for upload".into())));
        }
        (None, _) => {}
    }

    true
}

pub fn send_detection_request(ctx: &Context<Model>, api: Rc<GlooApi>, file: GlooFile) {
    let link = ctx.link().clone();

    spawn_local(async move {
        let outcome = run_detection(api.as_ref(), &file).await;
        link.send_message(Msg::DetectionFinished(outcome));
    });
}

pub fn handle_detection_finished(
    model: &mut Model,
    outcome: Result<DetectionRecord, ApiError>,
) -> bool {
    model.form = model.form.finish_detection(outcome);
    true
}

pub fn handle_update_name(model: &mut Model, ctx: &Context<Model>) -> bool {
    let started = model.form.begin_name_update();
    model.form = started.state;

    if let Some(request) = started.dispatch {
        let api = Rc::clone(&model.api);
        let link = ctx.link().clone();

        spawn_local(async move {
            let accepted = link.clone();
            let outcome = rename_and_enrich(api.as_ref(), request, move |id, name| {
                accepted.send_message(Msg::NameAccepted(id.clone(), name.to_string()));
            })
            .await;
            link.send_message(Msg::NameUpdateFinished(outcome));
        });
    }

    true
}

pub fn handle_name_update_finished(model: &mut Model, outcome: RenameOutcome) -> bool {
    if outcome.accepted() {
        log::info!("Detection {} is now '{}'", outcome.detection_id, outcome.new_name);
    }
    model.form = model.form.finish_name_update(&outcome);
    true
}
