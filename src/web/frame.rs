use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LoopState {
    running: Cell<bool>,
    handle: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopState {
    fn schedule(&self) {
        let tick = self.tick.borrow();
        let (Some(cb), Some(w)) = (tick.as_ref(), web::window()) else {
            return;
        };
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(h) => self.handle.set(Some(h)),
            Err(e) => {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                self.running.set(false);
            }
        }
    }
}

/// A self-rescheduling `requestAnimationFrame` loop.
///
/// The loop runs until `stop` is called or the handle is dropped; either way
/// the pending frame is cancelled and the callback released.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut() + 'static) -> Self {
        let state = Rc::new(LoopState {
            running: Cell::new(true),
            handle: Cell::new(None),
            tick: RefCell::new(None),
        });
        // The callback only holds a weak reference so the handle stays the owner.
        let weak = Rc::downgrade(&state);
        let tick = Closure::wrap(Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.handle.set(None);
            if !state.running.get() {
                return;
            }
            on_frame();
            state.schedule();
        }) as Box<dyn FnMut()>);
        *state.tick.borrow_mut() = Some(tick);
        state.schedule();
        Self { state }
    }

    pub fn stop(&self) {
        if !self.state.running.replace(false) {
            return;
        }
        if let (Some(h), Some(w)) = (self.state.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(h);
        }
        self.state.tick.borrow_mut().take();
        log::debug!("[frame] loop stopped");
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
