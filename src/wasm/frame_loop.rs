use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::Window;

type Slot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A task that re-submits itself to `requestAnimationFrame` every frame.
///
/// The closure lives in `slot`; it only holds a weak reference back to it, so
/// dropping the loop (or calling [`FrameLoop::stop`]) releases everything once
/// the pending frame has been cancelled.
pub struct FrameLoop {
    window: Window,
    slot: Slot,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Run `step` once per display frame until it returns `false` or the loop
    /// is stopped.
    pub fn start(
        window: &Window,
        mut step: impl FnMut() -> bool + 'static,
    ) -> Result<Self, JsValue> {
        let slot: Slot = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let weak = Rc::downgrade(&slot);
        let frame = {
            let window = window.clone();
            let pending = pending.clone();
            Closure::<dyn FnMut()>::new(move || {
                pending.set(None);
                if !step() {
                    return;
                }
                // schedule next
                let Some(slot) = weak.upgrade() else {
                    return;
                };
                let slot = slot.borrow();
                let Some(closure) = slot.as_ref() else {
                    return;
                };
                match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                    Ok(id) => pending.set(Some(id)),
                    Err(err) => log::error!("requestAnimationFrame failed: {err:?}"),
                }
            })
        };

        let id = window.request_animation_frame(frame.as_ref().unchecked_ref())?;
        pending.set(Some(id));
        *slot.borrow_mut() = Some(frame);

        Ok(Self {
            window: window.clone(),
            slot,
            pending,
        })
    }

    pub fn is_running(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Cancel the pending frame and release the closure.
    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {err:?}");
            }
        }
        self.slot.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
