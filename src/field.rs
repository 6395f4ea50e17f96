// The particle field owns the particle set, its bounds and the random source
// used to regenerate it. One call to `frame` is one animation frame.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::FieldConfig;
use crate::linker;
use crate::motion;
use crate::particle::Particle;
use crate::store;
use crate::surface::Surface;
use crate::viewport::Viewport;

pub struct ParticleField {
    config: FieldConfig,
    viewport: Viewport,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig, viewport: Viewport) -> ParticleField {
        ParticleField::with_rng(config, viewport, StdRng::from_entropy())
    }

    pub fn with_rng(config: FieldConfig, viewport: Viewport, mut rng: StdRng) -> ParticleField {
        let particles = store::regenerate(viewport, &config, &mut rng);
        ParticleField {
            config,
            viewport,
            particles,
            rng,
        }
    }

    /// Swaps in a brand new particle set for the new bounds.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.particles = store::regenerate(viewport, &self.config, &mut self.rng);
    }

    pub fn frame<S: Surface>(&mut self, surface: &mut S) -> Result<(), String> {
        surface.clear(self.viewport);
        motion::step(&mut self.particles, self.viewport);

        let color = self.config.accent_color();
        for particle in &self.particles {
            surface.draw_glow(particle.pos, particle.glow_radius(), color, self.config.glow_alpha)?;
        }

        let link_width = self.config.link_width;
        linker::try_for_each_link(&self.particles, self.config.link_distance, |link| {
            surface.draw_link(link.from, link.to, color, link.opacity, link_width)
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
