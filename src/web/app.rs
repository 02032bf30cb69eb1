use std::cell::RefCell;

use gloo::render::{AnimationFrame, request_animation_frame};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, window};

use super::scheduler::WebScheduler;
use super::view::View;
use crate::controller::GameController;
use crate::error::{GameError, Result};
#[cfg(feature = "serde_json")]
use crate::game::GameState;
use crate::game::{Event, GameConfig, target_at};

struct App {
    controller: GameController<WebScheduler>,
    view: View,
    frame: Option<AnimationFrame>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Run `f` against the mounted game, if any.
///
/// Timer and DOM callbacks only ever run from the event loop, so a failed
/// borrow means a re-entrant call; it is dropped rather than panicking.
fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|cell| match cell.try_borrow_mut() {
        Ok(mut guard) => guard.as_mut().map(f),
        Err(_) => {
            log::warn!("re-entrant game access dropped");
            None
        }
    })
}

pub fn mount(container_id: &str, config: GameConfig) -> Result<()> {
    config.validate()?;
    if APP.with(|cell| cell.borrow().is_some()) {
        return Err(GameError::AlreadyMounted);
    }

    let doc = window()
        .and_then(|w| w.document())
        .ok_or_else(|| GameError::dom("no document"))?;
    // Reuse the given container or create one at the end of <body>
    let container = match doc.get_element_by_id(container_id) {
        Some(el) => el,
        None => {
            let el: HtmlElement = doc
                .create_element("div")?
                .dyn_into()
                .map_err(|_| GameError::dom("<div> has an unexpected element type"))?;
            el.set_id(container_id);
            doc.body()
                .ok_or_else(|| GameError::dom("no body"))?
                .append_child(&el)?;
            el.into()
        }
    };

    let view = View::mount(&container, &config)?;
    let controller = GameController::new(config, WebScheduler::new())?;
    view.sync_controls(controller.state());

    APP.with(|cell| {
        *cell.borrow_mut() = Some(App {
            controller,
            view,
            frame: None,
        });
    });
    schedule_frame();
    log::info!("game mounted into #{container_id}");
    Ok(())
}

/// Tear the game down. Dropping the app drops the controller (stopping the
/// ticker and pending removals), the listeners, the frame loop and the markup.
pub fn unmount() -> bool {
    let app = APP.with(|cell| cell.borrow_mut().take());
    let mounted = app.is_some();
    drop(app);
    if mounted {
        log::info!("game unmounted");
    }
    mounted
}

pub fn dispatch(event: Event) {
    with_app(|app| {
        app.controller.dispatch(event);
        app.view.sync_controls(app.controller.state());
    });
}

pub fn press_button() {
    with_app(|app| {
        app.controller.press_button();
        app.view.sync_controls(app.controller.state());
    });
}

/// Canvas click at board coordinates. Ignored unless a round is running.
pub fn click_at(x: f64, y: f64) {
    with_app(|app| {
        let state = app.controller.state();
        if !state.is_running() {
            return;
        }
        let diameter = app.controller.config().target_size;
        if let Some(index) = target_at(&state.targets, x, y, diameter) {
            app.controller.dispatch(Event::Click(index));
            app.view.sync_controls(app.controller.state());
        }
    });
}

#[cfg(feature = "serde_json")]
pub fn snapshot() -> Option<GameState> {
    with_app(|app| app.controller.state().clone())
}

fn schedule_frame() {
    let handle = request_animation_frame(|timestamp| {
        let mounted = with_app(|app| {
            app.frame.take();
            app.view.paint(app.controller.state(), timestamp);
        });
        if mounted.is_some() {
            schedule_frame();
        }
    });
    with_app(move |app| app.frame = Some(handle));
}
