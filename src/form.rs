//! Application form wiring: read, validate, post to the relay, report.

use crate::constants::{FORM_EMAIL_ERROR_ID, FORM_STATUS_ID};
use crate::core::form::{resolve_outcome, RELAY_ENDPOINT};
use crate::core::{ApplicationForm, FormError, SubmitOutcome, FIELD_NAMES};
use crate::dom::js_err;
use crate::overlay::{self, Tone};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn read_form(form: &web::HtmlFormElement) -> anyhow::Result<ApplicationForm> {
    let data = web::FormData::new_with_form(form).map_err(js_err)?;
    Ok(ApplicationForm::from_pairs(
        FIELD_NAMES
            .iter()
            .map(|name| (*name, data.get(name).as_string().unwrap_or_default())),
    ))
}

/// Submit handler for the application form. Validation failures stay on
/// the page; a valid form is posted in the background.
pub fn handle_submit(document: &web::Document, form: &web::HtmlFormElement) {
    overlay::clear_message(document, FORM_EMAIL_ERROR_ID);
    overlay::clear_message(document, FORM_STATUS_ID);

    let app = match read_form(form) {
        Ok(app) => app,
        Err(e) => {
            log::error!("[form] read failed: {:?}", e);
            return;
        }
    };
    match app.validate() {
        Ok(()) => {}
        Err(e @ FormError::EmailDomain) => {
            overlay::set_message(document, FORM_EMAIL_ERROR_ID, &e.to_string(), Tone::Error);
            return;
        }
        Err(e) => {
            overlay::set_message(document, FORM_STATUS_ID, &e.to_string(), Tone::Error);
            return;
        }
    }

    overlay::set_message(document, FORM_STATUS_ID, "Sending…", Tone::Info);
    let document = document.clone();
    let form = form.clone();
    spawn_local(async move {
        let outcome = submit(&app).await;
        match &outcome {
            SubmitOutcome::Sent => {
                log::info!("[form] application sent");
                form.reset();
                overlay::set_message(&document, FORM_STATUS_ID, outcome.message(), Tone::Success);
            }
            SubmitOutcome::Retry(_) => {
                overlay::set_message(&document, FORM_STATUS_ID, outcome.message(), Tone::Error);
            }
        }
    });
}

/// One POST, no retries. An OK status wins even if reading the body fails.
pub async fn submit(app: &ApplicationForm) -> SubmitOutcome {
    let mut status = None;
    let mut failed = false;
    match send(app).await {
        Ok(resp) => {
            status = Some(resp.status());
            if let Err(e) = drain_body(&resp).await {
                log::warn!("[form] response body unreadable: {:?}", e);
                failed = true;
            }
        }
        Err(e) => {
            log::warn!("[form] request failed: {:?}", e);
            failed = true;
        }
    }
    let outcome = resolve_outcome(status, failed);
    if let SubmitOutcome::Retry(msg) = &outcome {
        log::warn!("[form] status={:?} -> {}", status, msg);
    }
    outcome
}

async fn send(app: &ApplicationForm) -> anyhow::Result<web::Response> {
    let data = web::FormData::new().map_err(js_err)?;
    for (name, value) in app.payload() {
        data.append_with_str(name, &value).map_err(js_err)?;
    }
    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_body(&data);
    let request = web::Request::new_with_str_and_init(RELAY_ENDPOINT, &init).map_err(js_err)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_err)?;
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    resp.dyn_into::<web::Response>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

async fn drain_body(resp: &web::Response) -> anyhow::Result<()> {
    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    log::info!(
        "[form] relay replied {} ({} bytes)",
        resp.status(),
        text.as_string().map(|s| s.len()).unwrap_or(0)
    );
    Ok(())
}
