use super::dom::{self, Listener};
use super::frame::FrameLoop;
use super::pointer;
use crate::core::{DrawSurface, NullSurface, ParticleConfig, ParticleField, Rgba};
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `DrawSurface` backed by a canvas 2-D context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn acquire(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(x as f64, y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }
}

/// A particle field animating on a canvas for as long as it is held.
pub struct ParticleLayer {
    field: Rc<RefCell<ParticleField>>,
    frame: FrameLoop,
    _resize: Option<Listener>,
    _pointer: Option<Listener>,
}

impl ParticleLayer {
    pub fn mount(canvas: web::HtmlCanvasElement, config: ParticleConfig, seed: u64) -> Self {
        let bounds = dom::sync_canvas_size(&canvas);
        let field = Rc::new(RefCell::new(ParticleField::new(config, bounds, seed)));

        let mut surface: Box<dyn DrawSurface> = match CanvasSurface::acquire(&canvas) {
            Some(s) => Box::new(s),
            None => {
                log::warn!("[particles] no 2d context for #{}; rendering disabled", canvas.id());
                Box::new(NullSurface)
            }
        };

        let field_tick = field.clone();
        let frame = FrameLoop::start(move || {
            field_tick.borrow_mut().tick(surface.as_mut());
        });

        let canvas_resize = canvas.clone();
        let field_resize = field.clone();
        let resize = Listener::on_window("resize", move |_| {
            let bounds = dom::sync_canvas_size(&canvas_resize);
            field_resize.borrow_mut().set_bounds(bounds);
        });

        let pointer = pointer::track_canvas_pointer(canvas.clone(), field.clone());

        log::info!(
            "[particles] mounted #{} with {} particles ({}x{})",
            canvas.id(),
            field.borrow().len(),
            bounds.x,
            bounds.y
        );

        Self {
            field,
            frame,
            _resize: resize,
            _pointer: pointer,
        }
    }

    /// Stop animating; listeners are released when the layer is dropped.
    pub fn stop(&self) {
        self.frame.stop();
        self.field.borrow_mut().clear_pointer();
    }
}

impl Drop for ParticleLayer {
    fn drop(&mut self) {
        self.stop();
    }
}
