//! Small DOM helpers shared by the router and the game views.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, Window, window};

use crate::error::{Result, SiteError};

pub fn win() -> Result<Window> {
    window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document> {
    win()?.document().ok_or(SiteError::NoDocument)
}

/// Find `#id`, creating it as a `<div>` under `<body>` when missing.
pub fn ensure_root(doc: &Document, id: &str) -> Result<Element> {
    if let Some(el) = doc.get_element_by_id(id) {
        return Ok(el);
    }
    let body = doc.body().ok_or(SiteError::MissingElement("body"))?;
    let div = doc.create_element("div")?;
    div.set_id(id);
    body.append_child(&div)?;
    Ok(div)
}

/// Nearest ancestor-or-self of the event target carrying `data-action`,
/// returned as (action, element).
pub fn action_of(evt: &Event) -> Option<(String, Element)> {
    let target: Element = evt.target()?.dyn_into().ok()?;
    let el = target.closest("[data-action]").ok()??;
    let action = el.get_attribute("data-action")?;
    Some((action, el))
}

/// Whether the event target is a link or sits inside one.
pub fn from_link(evt: &Event) -> bool {
    evt.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten())
        .is_some()
}

/// An event listener that unregisters itself when dropped.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    cb: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self> {
        let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), kind, cb })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.cb.as_ref().unchecked_ref());
    }
}
