use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{
    Element, HtmlImageElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

const COLLAPSED_CLASS: &str = "collapsed";

pub(crate) struct RevealGate {
    image: HtmlImageElement,
    section: Element,
    fired: Rc<Cell<bool>>,
    load_listener: RefCell<Option<EventListener>>,
}

impl RevealGate {
    pub(crate) fn new(image: HtmlImageElement, section: Element) -> Self {
        Self {
            image,
            section,
            fired: Rc::new(Cell::new(false)),
            load_listener: RefCell::new(None),
        }
    }

    pub(crate) fn rearm(&self) {
        self.fired.set(false);
        self.load_listener.borrow_mut().take();
        let _ = self.section.class_list().add_1(COLLAPSED_CLASS);
    }

    // Call after the image src has been assigned. The load event and the
    // synchronous complete() check race to the same once-only reveal; cached
    // or already-decoded images may never fire load again.
    pub(crate) fn arm(&self) {
        let fired = Rc::clone(&self.fired);
        let section = self.section.clone();
        let listener = EventListener::new(&self.image, "load", move |_event| {
            reveal(&fired, &section);
        });
        *self.load_listener.borrow_mut() = Some(listener);
        if self.image.complete() {
            reveal(&self.fired, &self.section);
        }
    }
}

fn reveal(fired: &Cell<bool>, section: &Element) {
    if fired.get() {
        return;
    }
    fired.set(true);
    let _ = section.class_list().remove_1(COLLAPSED_CLASS);
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Nearest);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    const PIXEL_PNG: &str = "data:image/png;base64,\
        iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    fn test_fixture() -> (HtmlImageElement, Element) {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let section = document.create_element("section").expect("create section");
        let _ = section.class_list().add_1(COLLAPSED_CLASS);
        let image = document
            .create_element("img")
            .expect("create image")
            .dyn_into::<HtmlImageElement>()
            .expect("image element");
        let _ = section.append_child(&image);
        document
            .body()
            .expect("body available")
            .append_child(&section)
            .expect("append section");
        (image, section)
    }

    fn is_collapsed(section: &Element) -> bool {
        section.class_list().contains(COLLAPSED_CLASS)
    }

    async fn wait_until_revealed(section: &Element) {
        for _ in 0..500 {
            if !is_collapsed(section) {
                return;
            }
            TimeoutFuture::new(10).await;
        }
        panic!("section never revealed");
    }

    #[wasm_bindgen_test]
    async fn reveals_once_image_has_loaded() {
        set_panic_hook();
        let (image, section) = test_fixture();
        let gate = RevealGate::new(image.clone(), section.clone());
        image.set_src(PIXEL_PNG);
        gate.arm();
        wait_until_revealed(&section).await;
        section.remove();
    }

    #[wasm_bindgen_test]
    async fn reveal_fires_at_most_once_per_arming() {
        set_panic_hook();
        let (image, section) = test_fixture();
        let gate = RevealGate::new(image.clone(), section.clone());
        image.set_src(PIXEL_PNG);
        gate.arm();
        wait_until_revealed(&section).await;

        // A second load signal after the reveal must not strip the class again.
        let _ = section.class_list().add_1(COLLAPSED_CLASS);
        let load = Event::new("load").expect("create load event");
        let _ = image.dispatch_event(&load);
        TimeoutFuture::new(50).await;
        assert!(is_collapsed(&section));
        section.remove();
    }

    #[wasm_bindgen_test]
    async fn rearm_collapses_and_accepts_the_next_submission() {
        set_panic_hook();
        let (image, section) = test_fixture();
        let gate = RevealGate::new(image.clone(), section.clone());
        image.set_src(PIXEL_PNG);
        gate.arm();
        wait_until_revealed(&section).await;

        gate.rearm();
        assert!(is_collapsed(&section));

        // The image is still complete from the previous submission, so the
        // synchronous check alone must reveal again.
        gate.arm();
        wait_until_revealed(&section).await;
        section.remove();
    }

    #[wasm_bindgen_test]
    async fn broken_image_never_reveals() {
        set_panic_hook();
        let (image, section) = test_fixture();
        let gate = RevealGate::new(image.clone(), section.clone());
        image.set_src("/no-such-formation-image.png");
        gate.arm();
        TimeoutFuture::new(300).await;
        assert!(is_collapsed(&section));
        section.remove();
    }
}
