use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlImageElement,
};

use crate::dom;
use crate::picker::FormationPicker;
use crate::result_panel::ResultPanel;
use crate::reveal::RevealGate;
use crate::submit::SubmitController;

const FORM_ID: &str = "tacticForm";
const SUBMIT_BUTTON_SELECTOR: &str = "button[type=submit]";
const OVERLAY_ID: &str = "loading-overlay";
const RESULT_SECTION_ID: &str = "result-section";
const RESULT_FORMATION_ID: &str = "result-formation";
const RESULT_EXPLANATION_ID: &str = "result-explanation";
const TACTIC_ATTACK_ID: &str = "tactic-attack";
const TACTIC_DEFENSE_ID: &str = "tactic-defense";
const TACTIC_TEMPO_ID: &str = "tactic-tempo";
const TACTIC_INSTRUCTION_ID: &str = "tactic-instruction";
const PLAYER_NAME_ID: &str = "player-name";
const PLAYER_DESC_ID: &str = "player-desc";
const RESULT_IMAGE_ID: &str = "result-image";
const PLAYER_IMAGE_ID: &str = "player-image";

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

pub(crate) struct App {
    _controller: SubmitController,
    _picker: FormationPicker,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MountError {
    DocumentUnavailable,
    MissingElement(&'static str),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::DocumentUnavailable => write!(f, "document unavailable"),
            MountError::MissingElement(id) => write!(f, "missing element: {id}"),
        }
    }
}

impl std::error::Error for MountError {}

pub(crate) fn run() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        gloo::console::error!(MountError::DocumentUnavailable.to_string());
        return;
    };
    match App::mount(&document) {
        Ok(app) => APP.with(|slot| {
            *slot.borrow_mut() = Some(app);
        }),
        Err(err) => gloo::console::error!("mount failed:", err.to_string()),
    }
}

fn require<T: JsCast>(document: &Document, id: &'static str) -> Result<T, MountError> {
    dom::typed_by_id(document, id).ok_or(MountError::MissingElement(id))
}

impl App {
    pub(crate) fn mount(document: &Document) -> Result<Self, MountError> {
        let form: HtmlFormElement = require(document, FORM_ID)?;
        let submit_button = form
            .query_selector(SUBMIT_BUTTON_SELECTOR)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok())
            .ok_or(MountError::MissingElement("submit button"))?;
        let overlay: HtmlElement = require(document, OVERLAY_ID)?;
        let section: Element = require(document, RESULT_SECTION_ID)?;
        let formation_image: HtmlImageElement = require(document, RESULT_IMAGE_ID)?;
        let player_image: HtmlImageElement = require(document, PLAYER_IMAGE_ID)?;

        let panel = Rc::new(ResultPanel::new(
            require(document, RESULT_FORMATION_ID)?,
            require(document, RESULT_EXPLANATION_ID)?,
            require(document, TACTIC_ATTACK_ID)?,
            require(document, TACTIC_DEFENSE_ID)?,
            require(document, TACTIC_TEMPO_ID)?,
            require(document, TACTIC_INSTRUCTION_ID)?,
            require(document, PLAYER_NAME_ID)?,
            require(document, PLAYER_DESC_ID)?,
            formation_image.clone(),
            player_image,
        ));
        let gate = Rc::new(RevealGate::new(formation_image, section));

        let mut controller = SubmitController::new(form, submit_button, overlay, panel, gate);
        controller.install();

        let mut picker = FormationPicker::collect(document);
        picker.install();
        picker.sync_initial();

        Ok(Self {
            _controller: controller,
            _picker: picker,
        })
    }
}
