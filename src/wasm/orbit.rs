//! Drag-to-orbit and wheel zoom on the canvas.
//!
//! After every interaction the camera is copied back into the panel so the
//! position/zoom controls keep showing what is on screen.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, AddEventListenerOptions, MouseEvent, WheelEvent};

use super::render::App;

pub fn attach(app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let canvas = app.borrow().canvas.clone();
    let window = window().ok_or("no window")?;
    // last pointer position while the button is held
    let drag: Rc<Cell<Option<(i32, i32)>>> = Rc::new(Cell::new(None));

    let on_down = {
        let drag = drag.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            drag.set(Some((event.client_x(), event.client_y())));
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    canvas.add_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref())?;
    on_down.forget();

    let on_move = {
        let drag = drag.clone();
        let app = app.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let Some((x, y)) = drag.get() else { return };
            let (nx, ny) = (event.client_x(), event.client_y());
            drag.set(Some((nx, ny)));

            let mut guard = app.borrow_mut();
            let app = &mut *guard;
            let height = app.canvas.client_height() as f32;
            app.scene.orbit((nx - x) as f32, (ny - y) as f32, height);
            app.scene.sync_camera_controls();
            app.panel.show(app.scene.panel());
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    let on_up = Closure::wrap(Box::new(move |_event: MouseEvent| {
        drag.set(None);
    }) as Box<dyn FnMut(MouseEvent)>);
    window.add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref())?;
    on_up.forget();

    let on_wheel = {
        let app = app.clone();
        Closure::wrap(Box::new(move |event: WheelEvent| {
            event.prevent_default();
            let mut guard = app.borrow_mut();
            let app = &mut *guard;
            app.scene.dolly(event.delta_y() as f32);
            app.scene.sync_camera_controls();
            app.panel.show(app.scene.panel());
        }) as Box<dyn FnMut(WheelEvent)>)
    };
    // non-passive so prevent_default stops the page from scrolling
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    canvas.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        on_wheel.as_ref().unchecked_ref(),
        &options,
    )?;
    on_wheel.forget();

    Ok(())
}
