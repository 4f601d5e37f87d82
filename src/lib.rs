//! Animated "waves" surface: a folded, noise-displaced plane colored by a
//! three-stop gradient, drawn with WebGL2 in the browser.
//!
//! The shader math lives twice: as GLSL in `src/shaders/` for the GPU and as
//! plain Rust in [`noise`] and [`shading`] for tests and the host-side
//! [`raster`] snapshot renderer.

pub mod camera;
pub mod clock;
pub mod color;
pub mod config;
pub mod controls;
pub mod error;
pub mod mesh;
pub mod noise;
pub mod raster;
pub mod scene;
pub mod shaders;
pub mod shading;
pub mod uniforms;

#[cfg(not(target_arch = "wasm32"))]
pub mod snapshot;

pub use config::WavesConfig;
pub use controls::{Control, ControlValue};
pub use error::WavesError;
pub use scene::{Theme, WavesScene};
pub use uniforms::WaveUniforms;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod export;
    mod gl;
    mod orbit;
    mod panel;
    mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        // a logger may already be installed when the module is re-instantiated
        let _ = console_log::init_with_level(log::Level::Info);

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let Some(element) = document.get_element_by_id("c") else {
            log::warn!("no #c canvas on this page; call mount() with a canvas instead");
            return Ok(());
        };

        render::start(element.dyn_into::<web_sys::HtmlCanvasElement>()?)
    }

    /// Start the scene on an arbitrary canvas.
    #[wasm_bindgen]
    pub fn mount(canvas: web_sys::HtmlCanvasElement) -> Result<(), JsValue> {
        render::start(canvas)
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::mount;
