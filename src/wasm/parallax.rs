use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use super::dom;
use crate::config::FogConfig;
use crate::geometry::Vec2;
use crate::parallax;

/// Nudge `.vignette` with the pointer. Does nothing if the page has none.
pub fn attach(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(vignette) = dom::query::<HtmlElement>(document, ".vignette")? else {
        log::debug!("no .vignette element, parallax disabled");
        return Ok(());
    };
    let strength = FogConfig::default().parallax_strength;

    let on_move = {
        let window = window.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            let Ok(viewport) = dom::viewport(&window) else {
                return;
            };
            let pointer = Vec2::new(e.client_x() as f64, e.client_y() as f64);
            let value = parallax::transform(parallax::offset(pointer, viewport.size, strength));
            if let Err(err) = vignette.style().set_property("transform", &value) {
                log::warn!("failed to move vignette: {err:?}");
            }
        })
    };
    window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();
    Ok(())
}
