// Render loop driver. Decides once at startup whether the particle field runs
// at all, then owns the field and its surface for the rest of the page's life.
// Scheduling the frames themselves is left to the caller (see `web.rs`).

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::surface::Surface;
use crate::viewport::Viewport;

/// What the loop needs from the environment it runs in.
pub trait Host {
    type Surface: Surface;

    fn prefers_reduced_motion(&self) -> bool;
    fn surface(&self) -> Option<Self::Surface>;
    fn viewport(&self) -> Viewport;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopState {
    Inactive,
    Running,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InactiveReason {
    ReducedMotion,
    NoSurface,
}

pub enum RenderLoop<S> {
    Inactive(InactiveReason),
    Running { field: ParticleField, surface: S },
}

impl<S: Surface> RenderLoop<S> {
    pub fn start<H>(host: &H, config: FieldConfig) -> RenderLoop<S>
    where
        H: Host<Surface = S>,
    {
        if host.prefers_reduced_motion() {
            return RenderLoop::Inactive(InactiveReason::ReducedMotion);
        }
        let mut surface = match host.surface() {
            Some(surface) => surface,
            None => return RenderLoop::Inactive(InactiveReason::NoSurface),
        };
        let viewport = host.viewport();
        surface.resize(viewport);
        RenderLoop::Running {
            field: ParticleField::new(config, viewport),
            surface,
        }
    }

    pub fn state(&self) -> LoopState {
        match self {
            RenderLoop::Inactive(_) => LoopState::Inactive,
            RenderLoop::Running { .. } => LoopState::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == LoopState::Running
    }

    /// Runs one frame. Returns whether another frame should be requested.
    pub fn frame(&mut self) -> Result<bool, String> {
        match self {
            RenderLoop::Inactive(_) => Ok(false),
            RenderLoop::Running { field, surface } => field.frame(surface).map(|_| true),
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if let RenderLoop::Running { field, surface } = self {
            surface.resize(viewport);
            field.resize(viewport);
        }
    }

    pub fn field(&self) -> Option<&ParticleField> {
        match self {
            RenderLoop::Running { field, .. } => Some(field),
            RenderLoop::Inactive(_) => None,
        }
    }
}
