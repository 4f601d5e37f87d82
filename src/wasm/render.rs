use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlContextAttributes};

use super::gl::{PlaneMesh, WavesProgram};
use super::{orbit, panel};
use crate::scene::WavesScene;

/// Everything the frame loop and the DOM listeners share.
pub struct App {
    pub scene: WavesScene,
    pub canvas: HtmlCanvasElement,
    pub panel: panel::Panel,
    gl: GL,
    program: WavesProgram,
    mesh: PlaneMesh,
}

impl App {
    fn frame(&mut self) {
        self.scene.advance_frame();

        let (w, h) = (self.canvas.width(), self.canvas.height());
        self.gl.viewport(0, 0, w as i32, h as i32);
        self.gl.clear_color(0.0, 0.0, 0.0, 0.0);
        self.gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);

        self.program.bind(&self.gl);
        self.program.upload(&self.gl, &self.scene.uniforms);
        let camera = &self.scene.camera;
        self.program.set_matrices(
            &self.gl,
            &self.scene.model(),
            &camera.view(),
            &camera.projection(w as f32, h as f32),
        );
        self.mesh.draw(&self.gl);
    }
}

fn fit_to_window(canvas: &HtmlCanvasElement) {
    let Some(win) = window() else { return };
    let size = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    canvas.set_width(size(win.inner_width()) as u32);
    canvas.set_height(size(win.inner_height()) as u32);
}

/// Set up GL, the panel and the orbit handler, then start the render loop.
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    // keep the drawing buffer so "save image" can read it back between frames
    let attrs = WebGlContextAttributes::new();
    attrs.set_preserve_drawing_buffer(true);
    attrs.set_antialias(true);
    let gl: GL = canvas
        .get_context_with_context_options("webgl2", &attrs)?
        .ok_or("WebGL2 not supported")?
        .dyn_into()?;
    gl.enable(GL::DEPTH_TEST);
    gl.disable(GL::CULL_FACE);

    fit_to_window(&canvas);
    let resize_closure = {
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || fit_to_window(&canvas)) as Box<dyn FnMut()>)
    };
    let win = window().ok_or("no window")?;
    win.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    let scene = WavesScene::new();
    let program = WavesProgram::new(&gl)?;
    let mesh = PlaneMesh::upload(&gl, &scene.geometry)?;
    let document = win.document().ok_or("no document")?;
    let panel = panel::Panel::build(&document, scene.panel())?;

    let app = Rc::new(RefCell::new(App {
        scene,
        canvas,
        panel,
        gl,
        program,
        mesh,
    }));
    panel::bind(&app)?;
    orbit::attach(&app)?;
    log::info!("waves scene ready");

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        app.borrow_mut().frame();

        // schedule next
        if let Some(cb) = f.borrow().as_ref() {
            if let Err(err) = request_animation_frame(cb) {
                log::error!("failed to schedule frame: {:?}", err);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = g.borrow().as_ref() {
        request_animation_frame(cb)?;
    }
    Ok(())
}

fn request_animation_frame(cb: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()
        .ok_or("no window")?
        .request_animation_frame(cb.as_ref().unchecked_ref())
}
