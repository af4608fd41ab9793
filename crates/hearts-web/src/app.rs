//! Shared page state and the target rebuild flow.

use crate::canvas::{CanvasSurface, OffscreenRaster};
use crate::dom;
use crate::image::{self, PonyImage};
use hearts_core::{
    CanvasLayout, Mode, RebuildQueue, RebuildRequest, SceneConfig, Simulation, TargetSampler,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct App {
    pub canvas: web::HtmlCanvasElement,
    pub surface: CanvasSurface,
    pub sim: Simulation,
    config: SceneConfig,
    sampler: TargetSampler<OffscreenRaster>,
    pony: PonyImage,
    rebuilds: RebuildQueue,
}

impl App {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        surface: CanvasSurface,
        raster: OffscreenRaster,
        config: SceneConfig,
    ) -> Self {
        let sim = Simulation::new(config.clone(), canvas.width(), canvas.height(), 1.0);
        Self {
            canvas,
            surface,
            sim,
            config,
            sampler: TargetSampler::new(raster),
            pony: PonyImage::default(),
            rebuilds: RebuildQueue::default(),
        }
    }

    /// Resize the canvas to the window and tell the simulation.
    pub fn apply_layout(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let layout = CanvasLayout::compute(dom::read_viewport(&window));
        dom::apply_canvas_layout(&self.canvas, &layout);
        self.sim.resize(
            layout.pixel_width,
            layout.pixel_height,
            layout.device_pixel_ratio,
        );
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.sim.mode() != mode {
            log::info!("switching to {:?} mode", mode);
        }
        self.sim.set_mode(mode);
    }

    /// Sample targets for the current mode and reconcile the particles.
    /// On failure the previous targets stay in place.
    fn rebuild_now(&mut self, image: Option<&web::HtmlImageElement>, request: RebuildRequest) {
        let (width, height) = self.sim.size();
        let mode = self.sim.mode();
        let sampled = self.sampler.sample_mode(
            width,
            height,
            mode,
            image,
            &self.config,
            self.sim.rng_mut(),
        );
        match sampled {
            Ok(targets) => self.sim.rebuild(targets, request.reset_positions),
            Err(e) => log::warn!("target sampling failed: {}", e),
        }
        if let Some(magnitude) = request.ripple {
            self.sim.add_center_ripple(magnitude);
        }
    }

    /// One animation frame.
    pub fn frame(&mut self) {
        let Self { sim, surface, .. } = self;
        sim.frame(surface);
    }
}

/// Rebuild targets for the current mode, waiting for the pony image when
/// needed without blocking the frame loop. `ripple` is spawned at the canvas
/// centre once the rebuild lands. Requests made while an image wait is in
/// flight are merged into it and applied by the newest one.
pub fn request_rebuild(app: &Rc<RefCell<App>>, reset_positions: bool, ripple: Option<f32>) {
    let (ticket, promise) = {
        let mut a = app.borrow_mut();
        let ticket = a.rebuilds.submit(RebuildRequest::new(reset_positions, ripple));
        let resolved = if a.sim.mode().is_pony() {
            a.pony.resolved().map(|image| image.cloned())
        } else {
            Some(None)
        };
        if let Some(image) = resolved {
            if let Some(request) = a.rebuilds.take(ticket) {
                a.rebuild_now(image.as_ref(), request);
            }
            return;
        }
        (ticket, a.pony.promise())
    };

    let app = app.clone();
    spawn_local(async move {
        let image = image::await_image(promise).await;
        let mut a = app.borrow_mut();
        a.pony.store(image.clone());
        match a.rebuilds.take(ticket) {
            Some(request) => a.rebuild_now(image.as_ref(), request),
            None => log::debug!("rebuild #{} superseded", ticket),
        }
    });
}

/// Window geometry changed: resize, then rebuild without scattering.
pub fn relayout(app: &Rc<RefCell<App>>) {
    app.borrow_mut().apply_layout();
    request_rebuild(app, false, None);
}
