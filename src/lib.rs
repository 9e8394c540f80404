//! Animated fog background: soft blue and green blobs orbiting the page
//! content, darkened toward the edges and dithered against banding.
//!
//! The drawing pipeline is host-independent and runs against any
//! [`Surface`]; the browser bindings live behind `wasm32`.

pub mod blob;
pub mod color;
pub mod config;
pub mod focal;
pub mod geometry;
pub mod noise;
pub mod parallax;
pub mod renderer;
pub mod scale;
pub mod surface;

pub use config::FogConfig;
pub use geometry::{Rect, Size, Vec2};
pub use renderer::{FogRenderer, PageLayout};
pub use scale::{RenderState, Viewport};
pub use surface::{Composite, Surface};

#[cfg(target_arch = "wasm32")]
pub use wasm::{fog_running, stop_fog};

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod canvas;
    mod dom;
    mod frame_loop;
    mod parallax;
    mod render;

    pub use render::{fog_running, stop_fog};

    #[cfg(test)]
    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        parallax::attach(&window, &document)?;
        render::start(&window, &document)?;
        Ok(())
    }
}
