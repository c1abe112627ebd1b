use std::rc::Rc;

use gloo::events::EventListener;
use gloo::net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlButtonElement, HtmlElement, HtmlFormElement};

use sakusen_core::{
    interpret_response, rejection_alert, SubmitOutcome, CONNECT_FAILED_ALERT, PREDICT_ENDPOINT,
};

use crate::dom;
use crate::result_panel::ResultPanel;
use crate::reveal::RevealGate;

pub(crate) struct SubmitController {
    form: HtmlFormElement,
    submit_button: HtmlButtonElement,
    overlay: HtmlElement,
    panel: Rc<ResultPanel>,
    gate: Rc<RevealGate>,
    listener: Option<EventListener>,
}

impl SubmitController {
    pub(crate) fn new(
        form: HtmlFormElement,
        submit_button: HtmlButtonElement,
        overlay: HtmlElement,
        panel: Rc<ResultPanel>,
        gate: Rc<RevealGate>,
    ) -> Self {
        Self {
            form,
            submit_button,
            overlay,
            panel,
            gate,
            listener: None,
        }
    }

    pub(crate) fn install(&mut self) {
        let form = self.form.clone();
        let button = self.submit_button.clone();
        let overlay = self.overlay.clone();
        let panel = Rc::clone(&self.panel);
        let gate = Rc::clone(&self.gate);
        let listener = EventListener::new(&self.form, "submit", move |event| {
            event.prevent_default();
            spawn_local(submit_flow(
                form.clone(),
                button.clone(),
                overlay.clone(),
                Rc::clone(&panel),
                Rc::clone(&gate),
            ));
        });
        self.listener.replace(listener);
    }
}

// One submission attempt. The busy lease drops on every exit path; the
// reveal itself happens later on the gate's own load signal, so the overlay
// can disappear before the panel shows.
async fn submit_flow(
    form: HtmlFormElement,
    button: HtmlButtonElement,
    overlay: HtmlElement,
    panel: Rc<ResultPanel>,
    gate: Rc<RevealGate>,
) {
    let _busy = BusyLease::engage(overlay, button);
    gate.rearm();

    let Ok(snapshot) = FormData::new_with_form(&form) else {
        gloo::console::warn!("submit: form snapshot failed");
        dom::alert(CONNECT_FAILED_ALERT);
        return;
    };
    let request = match Request::post(PREDICT_ENDPOINT).body(snapshot) {
        Ok(request) => request,
        Err(err) => {
            gloo::console::warn!("submit: request build failed", err.to_string());
            dom::alert(CONNECT_FAILED_ALERT);
            return;
        }
    };
    let response = match request.send().await {
        Ok(response) => response,
        Err(err) => {
            gloo::console::warn!("submit: request failed", err.to_string());
            dom::alert(CONNECT_FAILED_ALERT);
            return;
        }
    };
    let ok = response.ok();
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            gloo::console::warn!("submit: body read failed", err.to_string());
            dom::alert(CONNECT_FAILED_ALERT);
            return;
        }
    };
    match interpret_response(ok, &body) {
        Ok(SubmitOutcome::Plan(plan)) => {
            panel.render(&plan);
            gate.arm();
        }
        Ok(SubmitOutcome::Rejected(message)) => {
            dom::alert(&rejection_alert(&message));
        }
        Err(err) => {
            gloo::console::warn!("submit: unreadable response", err.to_string());
            dom::alert(CONNECT_FAILED_ALERT);
        }
    }
}

struct BusyLease {
    overlay: HtmlElement,
    button: HtmlButtonElement,
}

impl BusyLease {
    fn engage(overlay: HtmlElement, button: HtmlButtonElement) -> Self {
        let _ = overlay.style().set_property("display", "flex");
        button.set_disabled(true);
        Self { overlay, button }
    }
}

impl Drop for BusyLease {
    fn drop(&mut self) {
        let _ = self.overlay.style().set_property("display", "none");
        self.button.set_disabled(false);
    }
}
