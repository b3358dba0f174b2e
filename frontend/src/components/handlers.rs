use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_net::http::Request;
use shared::{DetectResponse, Prediction};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

use super::utils::{first_file, generate_id};
use crate::state::{IntakeError, validate_media_type};
use crate::{FileData, Model, Msg};

/// Shown when the transport itself fails; the cause only goes to the log.
pub const GENERIC_DETECT_ERROR: &str = "An error occurred while processing the image";

pub fn handle_files_chosen(model: &mut Model, ctx: &Context<Model>, files: Vec<GlooFile>) -> bool {
    // Only the first file of a multi-file selection or drop is considered.
    let Some(file) = files.into_iter().next() else {
        model.intake_error = Some(IntakeError::EmptySelection.message().to_string());
        return true;
    };

    if let Err(err) = validate_media_type(&file.raw_mime_type()) {
        log::warn!(
            "rejected file {} with media type {:?}",
            file.name(),
            file.raw_mime_type()
        );
        model.intake_error = Some(err.message().to_string());
        return true;
    }

    model.intake_error = None;
    let id = generate_id();
    model.candidate = Some(FileData {
        id,
        file: file.clone(),
        preview_url: None,
    });

    // Preview materialization runs through the message queue; the id lets a
    // replacement selection win over a decode still in flight.
    let preview_url = ObjectUrl::from(file);
    ctx.link().send_message(Msg::PreviewReady(id, preview_url));

    true
}

pub fn handle_preview_ready(model: &mut Model, id: u64, url: ObjectUrl) -> bool {
    match model.candidate.as_mut() {
        Some(candidate) if candidate.id == id => {
            candidate.preview_url = Some(url);
            true
        }
        // A newer selection replaced this candidate; dropping the url
        // revokes it.
        _ => false,
    }
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    let Some(candidate) = model.candidate.as_ref() else {
        model.intake_error = Some(IntakeError::EmptySelection.message().to_string());
        return true;
    };

    model.intake_error = None;
    model.submission.begin();
    send_detect_request(ctx, candidate.file.clone());
    true
}

pub fn handle_detect_finished(model: &mut Model, outcome: Result<Prediction, String>) -> bool {
    model.submission.finish(outcome);
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(data_transfer) = event.data_transfer() {
        if let Some(file_list) = data_transfer.files() {
            if let Some(file) = first_file(&file_list) {
                ctx.link().send_message(Msg::FilesChosen(vec![file]));
            }
        }
    }

    true
}

fn send_detect_request(ctx: &Context<Model>, file: GlooFile) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let form_data = web_sys::FormData::new().unwrap();
            form_data.append_with_blob("file", file.as_ref()).unwrap();

            let request = Request::post("/detect")
                .body(form_data)
                .expect("Failed to build request.");

            let outcome = match request.send().await {
                Ok(response) => match response.json::<DetectResponse>().await {
                    Ok(DetectResponse::Success(prediction)) => Ok(prediction),
                    Ok(DetectResponse::Failure(err)) => Err(err.to_string()),
                    Err(err) => {
                        log::error!("unparseable response from /detect: {err}");
                        Err(GENERIC_DETECT_ERROR.to_string())
                    }
                },
                Err(err) => {
                    log::error!("request to /detect failed: {err}");
                    Err(GENERIC_DETECT_ERROR.to_string())
                }
            };

            link.send_message(Msg::DetectFinished(outcome));
        }
    });
}
