use super::super::{App, Msg};
use super::utils::first_file;
use crate::api::BrowserTransport;
use detector_shared::{
    AcceptFilter, LocalFile, MediaSelection, ProcessingResult, SubmitError, submit,
};
use gloo_file::{File as GlooFile, ObjectUrl};
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn handle_file_picked(model: &mut App, file: Option<GlooFile>) -> bool {
    let Some(file) = file else {
        return false;
    };

    let object_url = ObjectUrl::from(file.clone());
    let local = LocalFile::new(file.name(), file.raw_mime_type(), file.size(), file);
    model
        .session
        .select(MediaSelection::local_file(local, object_url.to_string()));
    // Replacing the old URL revokes it.
    model.preview_url = Some(object_url);
    true
}

pub fn handle_drop(model: &mut App, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    let file = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .as_ref()
        .and_then(first_file);

    // Still re-render to clear the drag highlight.
    handle_file_picked(model, file);
    true
}

pub fn handle_sample_clicked(model: &mut App, path: String) -> bool {
    model.session.select(MediaSelection::sample(path));
    model.preview_url = None;
    true
}

pub fn handle_url_submitted(model: &mut App, url: &str) -> bool {
    match MediaSelection::remote_url(url) {
        Some(selection) => {
            model.session.select(selection);
            model.preview_url = None;
            true
        }
        None => false,
    }
}

pub fn handle_open_picker(model: &mut App, accept: AcceptFilter) -> bool {
    model.accept = accept;
    if let Some(input) = model.file_input.cast::<HtmlInputElement>() {
        // Set directly so the dialog opens with the new filter before the
        // next render.
        if let Err(e) = input.set_attribute("accept", accept.as_attr()) {
            log::warn!("Could not set accept filter on file input: {:?}", e);
        }
        input.click();
    }
    true
}

pub fn handle_run(model: &mut App, ctx: &Context<App>) -> bool {
    let ticket = match model.session.begin_submission() {
        Ok(ticket) => ticket,
        Err(SubmitError::AlreadyProcessing) => return false,
        Err(e) => {
            log::error!("Error processing image: {}", e);
            return true;
        }
    };

    let link = ctx.link().clone();
    let config = model.config.clone();
    spawn_local(async move {
        let outcome = submit(&BrowserTransport, &config, &ticket).await;
        if let Err(e) = &outcome {
            log::error!("Error processing image: {}", e);
        }
        link.send_message(Msg::Completed(ticket.generation(), outcome));
    });

    true
}

pub fn handle_completed(
    model: &mut App,
    generation: u64,
    outcome: Result<ProcessingResult, SubmitError>,
) -> bool {
    if let Ok(result) = &outcome {
        log::info!("Processing finished: {}", result.result_url);
    }
    model.session.complete(generation, outcome)
}
