use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlAnchorElement, HtmlCanvasElement};

pub const FILE_NAME: &str = "waves.png";

/// Download the canvas contents as a PNG.
///
/// Relies on the context keeping its drawing buffer after presentation, so
/// the read-back can happen from an event handler outside the frame loop.
pub fn save_png(canvas: &HtmlCanvasElement, file_name: &str) -> Result<(), JsValue> {
    let url = canvas.to_data_url_with_type("image/png")?;
    let document = window()
        .and_then(|w| w.document())
        .ok_or("no document")?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(file_name);
    link.click();

    log::info!("saved {}x{} frame as {}", canvas.width(), canvas.height(), file_name);
    Ok(())
}
