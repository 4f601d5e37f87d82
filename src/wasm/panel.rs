//! Parameter panel: one DOM input per control, generated from the control
//! table and bound to `WavesScene::set_control`.

use std::cell::RefCell;
use std::rc::Rc;

use glam::{Vec2, Vec3};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlInputElement};

use super::export;
use super::render::App;
use crate::color;
use crate::controls::{Control, ControlKind, ControlValue, PanelState};
use crate::error::WavesError;
use crate::scene::Theme;

#[derive(Clone, Copy, Debug)]
enum Action {
    LightMode,
    DarkMode,
    ResetCamera,
    SaveImage,
    LogPreset,
}

impl Action {
    const ALL: [Action; 5] = [
        Action::LightMode,
        Action::DarkMode,
        Action::ResetCamera,
        Action::SaveImage,
        Action::LogPreset,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::LightMode => "light mode",
            Action::DarkMode => "dark mode",
            Action::ResetCamera => "reset camera",
            Action::SaveImage => "save image",
            Action::LogPreset => "log preset",
        }
    }
}

pub struct Panel {
    inputs: Vec<(Control, Vec<HtmlInputElement>)>,
    buttons: Vec<(Action, HtmlButtonElement)>,
}

fn component_count(kind: ControlKind) -> usize {
    match kind {
        ControlKind::Vec2 => 2,
        ControlKind::Vec3 => 3,
        _ => 1,
    }
}

fn parse_number(input: &HtmlInputElement) -> Result<f32, WavesError> {
    let raw = input.value();
    raw.trim()
        .parse::<f32>()
        .map_err(|_| WavesError::InvalidNumber(raw))
}

impl Panel {
    /// Create the panel under `<body>` and show `state` in it.
    pub fn build(document: &Document, state: &PanelState) -> Result<Self, JsValue> {
        let root = document.create_element("div")?;
        root.set_id("panel");

        let mut inputs = Vec::with_capacity(Control::ALL.len());
        let mut group = "";
        for control in Control::ALL {
            let spec = control.spec();
            if spec.group != group {
                group = spec.group;
                let heading = document.create_element("h4")?;
                heading.set_text_content(Some(group));
                root.append_child(&heading)?;
            }

            let row = document.create_element("label")?;
            row.set_text_content(Some(spec.label));

            let count = component_count(spec.kind);
            let mut elements = Vec::with_capacity(count);
            for i in 0..count {
                let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
                if count == 1 {
                    input.set_id(control.key());
                } else {
                    input.set_id(&format!("{}-{}", control.key(), i));
                }
                input.set_type(match spec.kind {
                    ControlKind::Color => "color",
                    ControlKind::Bool => "checkbox",
                    ControlKind::Float if control != Control::CameraZoom => "range",
                    _ => "number",
                });
                if let Some((min, max)) = spec.range {
                    input.set_min(&min.to_string());
                    input.set_max(&max.to_string());
                    input.set_step(&spec.step.to_string());
                }
                row.append_child(&input)?;
                elements.push(input);
            }
            root.append_child(&row)?;
            inputs.push((control, elements));
        }

        let buttons = Self::build_buttons(document, &root)?;

        document
            .body()
            .ok_or("no body")?
            .append_child(&root)?;

        let panel = Self { inputs, buttons };
        panel.show(state);
        Ok(panel)
    }

    fn build_buttons(document: &Document, root: &Element) -> Result<Vec<(Action, HtmlButtonElement)>, JsValue> {
        let row = document.create_element("div")?;
        let mut buttons = Vec::with_capacity(Action::ALL.len());
        for action in Action::ALL {
            let button: HtmlButtonElement = document.create_element("button")?.dyn_into()?;
            button.set_text_content(Some(action.label()));
            row.append_child(&button)?;
            buttons.push((action, button));
        }
        root.append_child(&row)?;
        Ok(buttons)
    }

    /// Write every control value into its inputs.
    pub fn show(&self, state: &PanelState) {
        for (control, _) in &self.inputs {
            self.show_control(*control, state.get(*control));
        }
    }

    pub fn show_control(&self, control: Control, value: ControlValue) {
        let Some((_, inputs)) = self.inputs.iter().find(|(c, _)| *c == control) else {
            return;
        };
        match value {
            ControlValue::Color(c) => inputs[0].set_value(&color::to_hex(c)),
            ControlValue::Float(v) => inputs[0].set_value(&v.to_string()),
            ControlValue::Bool(b) => inputs[0].set_checked(b),
            ControlValue::Vec2(v) => {
                for (input, c) in inputs.iter().zip(v.to_array()) {
                    input.set_value(&c.to_string());
                }
            }
            ControlValue::Vec3(v) => {
                for (input, c) in inputs.iter().zip(v.to_array()) {
                    input.set_value(&c.to_string());
                }
            }
        }
    }

    /// Parse the current contents of a control's inputs.
    pub fn read(&self, control: Control) -> Result<ControlValue, WavesError> {
        let (_, inputs) = self
            .inputs
            .iter()
            .find(|(c, _)| *c == control)
            .ok_or_else(|| WavesError::UnknownControl(control.key().to_string()))?;

        Ok(match control.spec().kind {
            ControlKind::Color => ControlValue::Color(color::parse_hex(&inputs[0].value())?),
            ControlKind::Float => ControlValue::Float(parse_number(&inputs[0])?),
            ControlKind::Bool => ControlValue::Bool(inputs[0].checked()),
            ControlKind::Vec2 => ControlValue::Vec2(Vec2::new(
                parse_number(&inputs[0])?,
                parse_number(&inputs[1])?,
            )),
            ControlKind::Vec3 => ControlValue::Vec3(Vec3::new(
                parse_number(&inputs[0])?,
                parse_number(&inputs[1])?,
                parse_number(&inputs[2])?,
            )),
        })
    }
}

/// Attach input and click listeners. Each listener borrows the app for the
/// duration of one event.
pub fn bind(app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let (inputs, buttons) = {
        let app = app.borrow();
        (app.panel.inputs.clone(), app.panel.buttons.clone())
    };

    for (control, elements) in inputs {
        for input in elements {
            let app = app.clone();
            let on_input = Closure::wrap(Box::new(move |_event: Event| {
                apply_input(&app, control);
            }) as Box<dyn FnMut(Event)>);
            input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
            on_input.forget();
        }
    }

    for (action, button) in buttons {
        let app = app.clone();
        let on_click = Closure::wrap(Box::new(move |_event: Event| {
            if let Err(err) = run_action(&app, action) {
                log::error!("{} failed: {:?}", action.label(), err);
            }
        }) as Box<dyn FnMut(Event)>);
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

fn apply_input(app: &Rc<RefCell<App>>, control: Control) {
    let mut guard = app.borrow_mut();
    let app = &mut *guard;
    let result = app
        .panel
        .read(control)
        .and_then(|value| app.scene.set_control(control, value).map(|applied| (value, applied)));
    match result {
        // show the clamped value when the input was out of bounds
        Ok((value, applied)) if value != applied => app.panel.show_control(control, applied),
        Ok(_) => {}
        Err(err) => log::warn!("{}: {}", control.key(), err),
    }
}

fn run_action(app: &Rc<RefCell<App>>, action: Action) -> Result<(), JsValue> {
    let mut guard = app.borrow_mut();
    let app = &mut *guard;
    match action {
        Action::LightMode => app.scene.set_theme(Theme::Light)?,
        Action::DarkMode => app.scene.set_theme(Theme::Dark)?,
        Action::ResetCamera => app.scene.reset_camera(),
        Action::SaveImage => export::save_png(&app.canvas, export::FILE_NAME)?,
        Action::LogPreset => log::info!("preset:\n{}", app.scene.to_config().to_json()?),
    }
    app.panel.show(app.scene.panel());
    Ok(())
}
