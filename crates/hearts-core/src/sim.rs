//! Particle simulation: spring toward targets, pointer and ripple repulsion,
//! damping, ambient jitter. One call to [`Simulation::step`] is one animation
//! frame.

use crate::config::SceneConfig;
use crate::constants::*;
use crate::glyph::glyph_paint;
use crate::params::{Mode, ModeParams};
use crate::pointer::Pointer;
use crate::ripple::Ripples;
use crate::sampler::TargetSet;
use crate::surface::Surface;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Extra hue in degrees, fixed per particle.
    pub hue_shift: f32,
    /// Jitter phase offset in radians.
    pub phase: f32,
    /// Index into the current target set; always below its length.
    pub target: usize,
}

impl Particle {
    /// Glow intensity from the current speed.
    #[inline]
    pub fn glow(&self) -> f32 {
        (self.vel.x.abs() + self.vel.y.abs() + GLOW_BASE).min(GLOW_CAP)
    }
}

#[inline]
fn random_position(rng: &mut StdRng, width: f32, height: f32) -> Vec2 {
    Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height)
}

/// Owned animation state for one canvas.
pub struct Simulation {
    config: SceneConfig,
    mode: Mode,
    params: ModeParams,
    width: u32,
    height: u32,
    dpr: f32,
    particles: Vec<Particle>,
    targets: Option<TargetSet>,
    ripples: Ripples,
    pointer: Pointer,
    phase: f32,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: SceneConfig, width: u32, height: u32, dpr: f32) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, width, height, dpr, rng)
    }

    pub fn with_rng(config: SceneConfig, width: u32, height: u32, dpr: f32, rng: StdRng) -> Self {
        let mode = Mode::default();
        Self {
            config,
            mode,
            params: mode.params(),
            width,
            height,
            dpr,
            particles: Vec::new(),
            targets: None,
            ripples: Ripples::default(),
            pointer: Pointer::default(),
            phase: 0.0,
            rng,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn params(&self) -> &ModeParams {
        &self.params
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn device_pixel_ratio(&self) -> f32 {
        self.dpr
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn targets(&self) -> Option<&TargetSet> {
        self.targets.as_ref()
    }

    pub fn ripples(&self) -> &Ripples {
        &self.ripples
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    /// Global jitter phase accumulator.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Shared RNG, also used for image-mode interior sampling.
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Switch coefficients and glyph. Targets are left alone until the next
    /// [`rebuild`](Self::rebuild).
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.params = mode.params();
    }

    pub fn resize(&mut self, width: u32, height: u32, dpr: f32) {
        self.width = width;
        self.height = height;
        self.dpr = dpr;
        self.pointer.clamp_to(width as f32, height as f32);
        log::debug!("simulation resized to {}x{} @{}x", width, height, dpr);
    }

    /// Reconcile the particle pool with a fresh target set.
    ///
    /// The pool is truncated or grown to the mode's clamp of the target
    /// count, then particle `i` is assigned target `i mod len`. With
    /// `reset_positions` every particle is scattered anew at rest.
    pub fn rebuild(&mut self, targets: TargetSet, reset_positions: bool) {
        let count = self.params.particle_count(targets.len());
        let (w, h) = (self.width as f32, self.height as f32);

        self.particles.truncate(count);
        while self.particles.len() < count {
            let pos = random_position(&mut self.rng, w, h);
            let size = PARTICLE_SIZE_MIN + self.rng.gen::<f32>() * PARTICLE_SIZE_SPAN;
            let hue_shift = self.rng.gen::<f32>() * PARTICLE_HUE_SPAN;
            let phase = self.rng.gen::<f32>() * TAU;
            self.particles.push(Particle {
                pos,
                vel: Vec2::ZERO,
                size,
                hue_shift,
                phase,
                target: 0,
            });
        }

        for (i, p) in self.particles.iter_mut().enumerate() {
            p.target = i % targets.len();
            if reset_positions {
                p.pos = random_position(&mut self.rng, w, h);
                p.vel = Vec2::ZERO;
            }
        }

        log::debug!(
            "rebuilt {} particles over {} targets (mode={:?}, reset={})",
            self.particles.len(),
            targets.len(),
            self.mode,
            reset_positions
        );
        self.targets = Some(targets);
    }

    #[inline]
    pub fn apply_pointer(&mut self, pos: Vec2, strength: f32) {
        self.pointer.apply(pos, strength);
    }

    #[inline]
    pub fn add_ripple(&mut self, center: Vec2, magnitude: f32) {
        self.ripples.spawn(center, magnitude);
    }

    pub fn add_center_ripple(&mut self, magnitude: f32) {
        let center = Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0);
        self.ripples.spawn(center, magnitude);
    }

    /// Ripple at a random point away from the canvas edges.
    pub fn spawn_ambient_ripple(&mut self) {
        let span = 1.0 - 2.0 * AMBIENT_RIPPLE_MARGIN;
        let u = AMBIENT_RIPPLE_MARGIN + self.rng.gen::<f32>() * span;
        let v = AMBIENT_RIPPLE_MARGIN + self.rng.gen::<f32>() * span;
        let center = Vec2::new(u * self.width as f32, v * self.height as f32);
        self.ripples.spawn(center, AMBIENT_RIPPLE_MAGNITUDE);
    }

    /// Advance ripples, integrate every particle, then decay the pointer.
    pub fn step(&mut self) {
        self.phase += PHASE_STEP;
        self.ripples.step();

        let params = self.params;
        let pointer = self.pointer;
        let reach = POINTER_RADIUS * self.dpr;
        let band = RIPPLE_BAND * self.dpr;
        let pointer_active = pointer.force > POINTER_ACTIVE_FORCE;

        for p in &mut self.particles {
            let jitter = (self.phase * JITTER_FREQUENCY + p.phase).sin() * params.jitter;

            if let Some(targets) = &self.targets {
                p.vel += (targets.cyclic(p.target) - p.pos) * params.pull;
            }

            let away = p.pos - pointer.pos;
            let mut dist = away.length();
            if dist == 0.0 {
                dist = 1.0;
            }
            if pointer_active && dist < reach {
                let push = (reach - dist) / reach;
                p.vel += away / dist * push * POINTER_PUSH * pointer.force;
            }

            for ripple in self.ripples.iter() {
                if let Some(impulse) = ripple.impulse(p.pos, band) {
                    p.vel += impulse;
                }
            }

            p.vel *= params.damping;
            p.pos += p.vel + Vec2::new(jitter, jitter * JITTER_Y_SCALE);
        }

        self.pointer.decay();
    }

    /// Paint the current state: backdrop, ripple rings, then glyphs.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        surface.fill(self.params.backdrop);

        for ripple in self.ripples.iter() {
            let alpha = ripple.life_fraction() * self.params.ripple_alpha_scale;
            surface.stroke_circle(
                ripple.center,
                ripple.radius,
                RIPPLE_LINE_WIDTH,
                self.params.ripple_color.with_alpha(alpha),
            );
        }

        let glyph = self.config.glyph_for(self.mode);
        for p in &self.particles {
            let glow = p.glow() * GLOW_SPEED_WEIGHT + p.hue_shift * GLOW_HUE_WEIGHT;
            let paint = glyph_paint(glow, self.params.hue_tone);
            glyph.draw(surface, p.pos, p.size, &paint);
        }
    }

    /// One animation frame.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.step();
        self.draw(surface);
    }
}
