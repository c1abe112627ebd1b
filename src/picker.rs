use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

const CARD_INPUT_SELECTOR: &str = ".formation-card input";
const ACTIVE_CLASS: &str = "active";

struct CardChoice {
    input: HtmlInputElement,
    card: Element,
}

pub(crate) struct FormationPicker {
    choices: Rc<Vec<CardChoice>>,
    listeners: Vec<EventListener>,
}

impl FormationPicker {
    pub(crate) fn collect(document: &Document) -> Self {
        let mut choices = Vec::new();
        if let Ok(nodes) = document.query_selector_all(CARD_INPUT_SELECTOR) {
            for index in 0..nodes.length() {
                let Some(node) = nodes.get(index) else {
                    continue;
                };
                let Ok(input) = node.dyn_into::<HtmlInputElement>() else {
                    continue;
                };
                let Some(card) = input.parent_element() else {
                    continue;
                };
                choices.push(CardChoice { input, card });
            }
        }
        Self {
            choices: Rc::new(choices),
            listeners: Vec::new(),
        }
    }

    pub(crate) fn install(&mut self) {
        for index in 0..self.choices.len() {
            let choices = Rc::clone(&self.choices);
            let listener = EventListener::new(&self.choices[index].input, "change", move |_event| {
                apply_change(&choices, index);
            });
            self.listeners.push(listener);
        }
    }

    // The markup pre-checks exactly one input; mirror it before the first
    // change event ever fires.
    pub(crate) fn sync_initial(&self) {
        match self.choices.iter().find(|choice| choice.input.checked()) {
            Some(choice) => {
                let _ = choice.card.class_list().add_1(ACTIVE_CLASS);
            }
            None => gloo::console::warn!("formation picker: no pre-checked input"),
        }
    }
}

fn apply_change(choices: &[CardChoice], changed: usize) {
    for choice in choices {
        let _ = choice.card.class_list().remove_1(ACTIVE_CLASS);
    }
    let choice = &choices[changed];
    if choice.input.checked() {
        let _ = choice.card.class_list().add_1(ACTIVE_CLASS);
    }
}
