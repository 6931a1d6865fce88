use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    window, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::config::MOBILE_BREAKPOINT_PX;

/// Where an element should land in the viewport after scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAnchor {
    Start,
    Center,
    End,
}

impl ScrollAnchor {
    fn logical_position(self) -> ScrollLogicalPosition {
        match self {
            ScrollAnchor::Start => ScrollLogicalPosition::Start,
            ScrollAnchor::Center => ScrollLogicalPosition::Center,
            ScrollAnchor::End => ScrollLogicalPosition::End,
        }
    }
}

fn element_by_id(id: &str) -> Option<web_sys::Element> {
    window()?.document()?.get_element_by_id(id)
}

/// Smoothly scroll the element into view. Returns `false` when the element is
/// not in the document, which callers treat as nothing to do.
pub fn scroll_into_view(element_id: &str, anchor: ScrollAnchor) -> bool {
    let Some(element) = element_by_id(element_id) else {
        log::debug!("scroll target #{element_id} not in document");
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(anchor.logical_position());
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Scroll a scrollable container to its last line.
pub fn scroll_to_bottom(element_id: &str) {
    if let Some(element) = element_by_id(element_id) {
        element.set_scroll_top(element.scroll_height());
    }
}

pub fn scroll_window_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn focus_element(element_id: &str) {
    if let Some(element) = element_by_id(element_id).and_then(|e| e.dyn_into::<HtmlElement>().ok())
    {
        let _ = element.focus();
    }
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(1920.0)
}

pub fn is_mobile_viewport() -> bool {
    viewport_width() <= MOBILE_BREAKPOINT_PX
}

/// Page-wide key presses the shell reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKey {
    Escape,
}

impl PageKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(PageKey::Escape),
            _ => None,
        }
    }
}

/// Filled by the DOM listener, drained from the component's own task.
pub type PageKeyQueue = Rc<RefCell<VecDeque<PageKey>>>;

pub fn drain_page_keys(queue: &PageKeyQueue) -> Vec<PageKey> {
    queue.borrow_mut().drain(..).collect()
}

/// Document-level keydown listener, removed when dropped.
pub struct EscapeListener {
    closure: Closure<dyn FnMut(KeyboardEvent)>,
}

impl Drop for EscapeListener {
    fn drop(&mut self) {
        if let Some(document) = window().and_then(|w| w.document()) {
            let _ = document.remove_event_listener_with_callback(
                "keydown",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Queue a [`PageKey::Escape`] whenever Escape is pressed anywhere on the page.
pub fn listen_for_escape(queue: PageKeyQueue) -> Option<Rc<EscapeListener>> {
    let document = window()?.document()?;

    let closure = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if let Some(key) = PageKey::from_key(&e.key()) {
            queue.borrow_mut().push_back(key);
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);

    if let Err(e) =
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
    {
        log::error!("failed to add keydown listener: {:?}", e);
        return None;
    }

    Some(Rc::new(EscapeListener { closure }))
}
