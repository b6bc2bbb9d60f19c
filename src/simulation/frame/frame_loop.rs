//! FrameLoop - one simulator tick per display refresh
//!
//! Re-registers itself with `requestAnimationFrame` after every tick, so at
//! most one tick is ever in flight. `stop()` (or dropping the loop, e.g. when
//! the widget unmounts) cancels the pending frame.
//!
//! Browser-only: needs a JS `window`, so native builds never construct it.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::facade::Simulator;
use super::SimulatorCore;

struct LoopShared {
    core: Rc<RefCell<SimulatorCore>>,
    on_frame: Option<js_sys::Function>,
    running: Cell<bool>,
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

#[wasm_bindgen]
pub struct FrameLoop {
    shared: Rc<LoopShared>,
}

#[wasm_bindgen]
impl FrameLoop {
    /// `on_frame` is called with no arguments after each tick, for redrawing.
    #[wasm_bindgen(constructor)]
    pub fn new(simulator: &Simulator, on_frame: Option<js_sys::Function>) -> FrameLoop {
        let shared = Rc::new(LoopShared {
            core: simulator.shared_core(),
            on_frame,
            running: Cell::new(false),
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });

        // Weak so the closure does not keep its own owner alive
        let weak: Weak<LoopShared> = Rc::downgrade(&shared);
        let callback = Closure::wrap(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                run_frame(&shared);
            }
        }) as Box<dyn FnMut()>);
        *shared.callback.borrow_mut() = Some(callback);

        FrameLoop { shared }
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.shared.running.get() {
            return Ok(());
        }
        self.shared.running.set(true);
        if let Err(e) = schedule(&self.shared) {
            self.shared.running.set(false);
            return Err(e);
        }
        console_log!("torque frame loop started");
        Ok(())
    }

    /// Cancel the pending frame. Safe to call from inside `on_frame`.
    pub fn stop(&mut self) {
        stop_loop(&self.shared);
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.shared.running.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        stop_loop(&self.shared);
    }
}

fn schedule(shared: &LoopShared) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let callback = shared.callback.borrow();
    let Some(callback) = callback.as_ref() else {
        return Err(JsValue::from_str("frame callback missing"));
    };
    let handle = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    shared.handle.set(Some(handle));
    Ok(())
}

fn run_frame(shared: &LoopShared) {
    shared.handle.set(None);
    if !shared.running.get() {
        return;
    }

    // Borrow released before calling into JS, which reads the same core
    shared.core.borrow_mut().tick();

    if let Some(on_frame) = &shared.on_frame {
        if let Err(e) = on_frame.call0(&JsValue::NULL) {
            console_warn!("frame callback threw: {:?}", e);
        }
    }

    if shared.running.get() {
        if let Err(e) = schedule(shared) {
            console_warn!("could not schedule next frame: {:?}", e);
            shared.running.set(false);
        }
    }
}

fn stop_loop(shared: &LoopShared) {
    let was_running = shared.running.replace(false);
    if let Some(handle) = shared.handle.take() {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(handle);
        }
    }
    if was_running {
        console_log!("torque frame loop stopped");
    }
}
