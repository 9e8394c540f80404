use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlCanvasElement, Window};

use super::canvas::CanvasSurface;
use super::dom;
use super::frame_loop::FrameLoop;
use crate::config::FogConfig;
use crate::renderer::{FogRenderer, PageLayout};

type Renderer = FogRenderer<CanvasSurface, Xoshiro256PlusPlus>;

thread_local! {
    static FOG: RefCell<Option<FogBackground>> = const { RefCell::new(None) };
}

/// A running fog: renderer, frame loop and the resize listener feeding it.
struct FogBackground {
    window: Window,
    frames: FrameLoop,
    on_resize: Closure<dyn FnMut()>,
}

impl FogBackground {
    fn dispose(self) {
        self.frames.stop();
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove resize listener: {err:?}");
        }
    }
}

/// Start rendering into `#bg`. Missing canvas or content leaves the page
/// without a background.
pub fn start(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(canvas) = document
        .get_element_by_id("bg")
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        log::warn!("no #bg canvas, fog disabled");
        return Ok(());
    };
    let Some(content) = dom::query::<Element>(document, ".content")? else {
        log::warn!("no .content element, fog disabled");
        return Ok(());
    };
    let top_bar = dom::query::<Element>(document, ".topbar")?;
    if top_bar.is_none() {
        log::debug!("no .topbar element, fog fills the whole viewport");
    }

    let dataset = canvas.dataset();
    let config = FogConfig::default().with_overrides(
        dataset.get("supersample").as_deref(),
        dataset.get("maxPixels").as_deref(),
        dataset.get("seed").as_deref(),
    );
    let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);

    let surface = CanvasSurface::new(canvas, document.clone())?;
    let renderer = FogRenderer::new(
        surface,
        dom::viewport(window)?,
        config,
        Xoshiro256PlusPlus::seed_from_u64(seed),
    )?;
    let (bw, bh) = renderer.state().buffer_size();
    log::info!(
        "fog started: scale {:.3}, buffer {bw}x{bh}, {} + {} blobs",
        renderer.state().scale,
        renderer.blue().len(),
        renderer.green().len()
    );
    let renderer: Rc<RefCell<Renderer>> = Rc::new(RefCell::new(renderer));

    // Resize canvas to fit window
    let on_resize = {
        let window = window.clone();
        let renderer = renderer.clone();
        Closure::<dyn FnMut()>::new(move || {
            let result = dom::viewport(&window).and_then(|vp| renderer.borrow_mut().on_resize(vp));
            if let Err(err) = result {
                log::error!("fog resize failed: {err:?}");
            }
        })
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

    let frames = FrameLoop::start(window, move || {
        let layout = PageLayout {
            content: dom::bounds(&content),
            top_bar_bottom: top_bar.as_ref().map(|el| dom::bounds(el).bottom()),
        };
        match renderer.borrow_mut().render_frame(&layout) {
            Ok(()) => true,
            Err(err) => {
                log::error!("fog render failed, stopping: {err:?}");
                false
            }
        }
    })?;

    let previous = FOG.with(|fog| {
        fog.borrow_mut().replace(FogBackground {
            window: window.clone(),
            frames,
            on_resize,
        })
    });
    if let Some(previous) = previous {
        previous.dispose();
    }
    Ok(())
}

/// Stop the fog animation and detach its listeners. The last frame stays visible.
#[wasm_bindgen]
pub fn stop_fog() {
    if let Some(fog) = FOG.with(|fog| fog.borrow_mut().take()) {
        fog.dispose();
        log::info!("fog stopped");
    }
}

/// Whether a fog animation is currently scheduled.
#[wasm_bindgen]
pub fn fog_running() -> bool {
    FOG.with(|fog| fog.borrow().as_ref().is_some_and(|f| f.frames.is_running()))
}
