use std::collections::HashMap;
use std::f64::consts::TAU;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, Event as DomEvent, HtmlButtonElement,
    HtmlCanvasElement, HtmlElement, HtmlInputElement, MouseEvent,
};

use super::app;
use crate::error::{GameError, Result};
use crate::game::{Event, GameConfig, GameState, OutcomeKind, Target};

const SUCCESS_COLOR: &str = "#22c55e";
const FAILURE_COLOR: &str = "#ef4444";
const CLICKED_FILL: &str = "#ef4444";
const IDLE_FILL: &str = "#ffffff";

/// DOM side of one mounted game: the control panel plus the canvas play area.
///
/// Controls (message, time, input, button) are synced right after every
/// dispatch; the canvas is repainted once per animation frame.
pub struct View {
    root: HtmlElement,
    message: HtmlElement,
    time: HtmlElement,
    input: HtmlInputElement,
    button: HtmlButtonElement,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    target_size: f64,
    fade_ms: f64,
    // rAF timestamp at which each target was first painted as fading
    fade_started: HashMap<u32, f64>,
    fade_round: u64,
    listeners: Vec<EventListener>,
}

fn create<T: JsCast>(doc: &Document, tag: &str) -> Result<T> {
    doc.create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| GameError::dom(format!("<{tag}> has an unexpected element type")))
}

fn labelled_row(doc: &Document, label: &str, content: &HtmlElement) -> Result<HtmlElement> {
    let row: HtmlElement = create(doc, "div")?;
    row.set_attribute("style", "display:flex; align-items:center; gap:16px; margin:16px 0;")?;
    let span: HtmlElement = create(doc, "span")?;
    span.set_text_content(Some(label));
    row.append_child(&span)?;
    row.append_child(content)?;
    Ok(row)
}

impl View {
    pub fn mount(container: &Element, config: &GameConfig) -> Result<Self> {
        let doc = container
            .owner_document()
            .ok_or_else(|| GameError::dom("container is not attached to a document"))?;

        let root: HtmlElement = create(&doc, "div")?;
        root.set_attribute(
            "style",
            "max-width:64rem; padding:16px; border:1px solid #e5e7eb; font-family:sans-serif;",
        )?;

        let message: HtmlElement = create(&doc, "p")?;
        message.set_attribute("style", "font-size:18px; font-weight:bold; min-height:1.5em;")?;
        root.append_child(&message)?;

        let title: HtmlElement = create(&doc, "h1")?;
        title.set_text_content(Some("LET'S PLAY"));
        title.set_attribute("style", "font-size:20px; font-weight:bold;")?;
        root.append_child(&title)?;

        let input: HtmlInputElement = create(&doc, "input")?;
        input.set_type("text");
        input.set_value("0");
        let point_row = labelled_row(&doc, "Point:", &input)?;
        root.append_child(&point_row)?;

        let time: HtmlElement = create(&doc, "p")?;
        time.set_text_content(Some("0.0s"));
        let time_row = labelled_row(&doc, "Time:", &time)?;
        root.append_child(&time_row)?;

        let button: HtmlButtonElement = create(&doc, "button")?;
        button.set_text_content(Some("Play"));
        root.append_child(&button)?;

        let canvas: HtmlCanvasElement = create(&doc, "canvas")?;
        let side = config.area_size.round() as u32;
        canvas.set_width(side);
        canvas.set_height(side);
        // CSS size must match the backing store so offsetX/Y map 1:1 to board pixels.
        canvas.set_attribute(
            "style",
            &format!(
                "display:block; margin:16px auto; border:1px solid #e5e7eb; width:{side}px; height:{side}px;"
            ),
        )?;
        root.append_child(&canvas)?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| GameError::dom("2d canvas context unavailable"))?
            .dyn_into()
            .map_err(|_| GameError::dom("2d canvas context has an unexpected type"))?;
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");

        container.append_child(&root)?;

        let mut view = Self {
            root,
            message,
            time,
            input,
            button,
            canvas,
            ctx,
            target_size: config.target_size,
            fade_ms: f64::from(config.fade_ms),
            fade_started: HashMap::new(),
            fade_round: 0,
            listeners: Vec::new(),
        };
        view.install_listeners();
        Ok(view)
    }

    fn install_listeners(&mut self) {
        let input = self.input.clone();
        self.listeners
            .push(EventListener::new(&self.input, "input", move |_event: &DomEvent| {
                app::dispatch(Event::SetTargetCount(input.value()));
            }));

        self.listeners
            .push(EventListener::new(&self.button, "click", |_event: &DomEvent| {
                app::press_button();
            }));

        self.listeners
            .push(EventListener::new(&self.canvas, "click", |event: &DomEvent| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                app::click_at(f64::from(event.offset_x()), f64::from(event.offset_y()));
            }));
    }

    /// Bring the control panel in line with `state`.
    pub fn sync_controls(&self, state: &GameState) {
        match &state.outcome {
            Some(outcome) => {
                let color = match outcome.kind {
                    OutcomeKind::Success => SUCCESS_COLOR,
                    OutcomeKind::Failure => FAILURE_COLOR,
                };
                self.message.set_text_content(Some(outcome.message));
                self.message.style().set_property("color", color).ok();
            }
            None => {
                self.message.set_text_content(Some(""));
                self.message.style().remove_property("color").ok();
            }
        }

        self.time.set_text_content(Some(&state.elapsed_label()));

        // Rejected edits snap back to the accepted value.
        let count = state.target_count.to_string();
        if self.input.value() != count {
            self.input.set_value(&count);
        }

        let label = if state.has_started() { "Restart" } else { "Play" };
        self.button.set_text_content(Some(label));
    }

    /// Repaint the play area. `now` is the animation frame timestamp.
    pub fn paint(&mut self, state: &GameState, now: f64) {
        let side_w = f64::from(self.canvas.width());
        let side_h = f64::from(self.canvas.height());
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_fill_style_str("#ffffff");
        self.ctx.fill_rect(0.0, 0.0, side_w, side_h);

        if state.round != self.fade_round {
            self.fade_started.clear();
            self.fade_round = state.round;
        }
        if !state.is_running() {
            return;
        }

        let fading: Vec<u32> = state
            .targets
            .iter()
            .filter(|t| t.fading)
            .map(|t| t.index)
            .collect();
        self.fade_started.retain(|index, _| fading.contains(index));

        self.ctx.set_font(&format!("{}px sans-serif", (self.target_size * 0.4).round()));
        for target in &state.targets {
            let alpha = if target.fading {
                let start = *self.fade_started.entry(target.index).or_insert(now);
                (1.0 - (now - start) / self.fade_ms).clamp(0.0, 1.0)
            } else {
                1.0
            };
            self.draw_target(target, alpha);
        }
        self.ctx.set_global_alpha(1.0);
    }

    fn draw_target(&self, target: &Target, alpha: f64) {
        let radius = self.target_size / 2.0;
        let cx = target.position.x + radius;
        let cy = target.position.y + radius;

        self.ctx.set_global_alpha(alpha);
        self.ctx.begin_path();
        self.ctx.arc(cx, cy, radius - 0.5, 0.0, TAU).ok();
        self.ctx.set_fill_style_str(if target.clicked { CLICKED_FILL } else { IDLE_FILL });
        self.ctx.fill();
        self.ctx.set_line_width(1.0);
        self.ctx.set_stroke_style_str("#111827");
        self.ctx.stroke();

        self.ctx.set_fill_style_str("#111827");
        self.ctx.fill_text(&target.index.to_string(), cx, cy).ok();
    }
}

impl Drop for View {
    fn drop(&mut self) {
        // Listeners unregister themselves on drop; the markup goes with the root.
        self.root.remove();
    }
}
