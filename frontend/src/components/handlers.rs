use super::super::{Model, Msg};
use shared::{StatusUpdate, SubmitOutcome};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    if model.status.current().is_loading() || model.orchestrator.is_in_flight() {
        log::debug!("Submit ignored while a comparison is running");
        return false;
    }

    let snapshot = model.panel.read_configuration();
    let orchestrator = model.orchestrator.clone();
    let link = ctx.link().clone();

    spawn_local(async move {
        let status_link = link.clone();
        let outcome = orchestrator
            .submit(snapshot, move |update| {
                status_link.send_message(Msg::Status(update))
            })
            .await;
        link.send_message(Msg::Finished(outcome));
    });

    false
}

pub fn handle_status(model: &mut Model, update: StatusUpdate) -> bool {
    let starting = matches!(update, StatusUpdate::Started(_));

    if let Err(e) = model.status.apply(update) {
        log::warn!("Dropped status update: {}", e);
        return false;
    }

    // A new request replaces whatever the previous one rendered.
    if starting {
        model.results = None;
    }
    true
}

pub fn handle_finished(model: &mut Model, outcome: SubmitOutcome) -> bool {
    match outcome {
        SubmitOutcome::Rendered(results) => {
            model.results = Some(results);
            true
        }
        SubmitOutcome::Failed(e) => {
            log::error!("Comparison failed: {}", e);
            model.results = None;
            true
        }
        SubmitOutcome::Invalid(e) => {
            log::info!("Submit rejected: {}", e);
            false
        }
        SubmitOutcome::Busy => false,
    }
}
