// Motion integrator: one fixed step per frame, reflecting off canvas edges.
// Displacement is per frame rather than per second, so speed follows the
// display refresh rate.

use vecmath::vec2_add;

use crate::particle::Particle;
use crate::viewport::Viewport;

pub fn step(particles: &mut [Particle], viewport: Viewport) {
    for particle in particles.iter_mut() {
        particle.pos = vec2_add(particle.pos, particle.vel);
        reflect(&mut particle.pos[0], &mut particle.vel[0], viewport.width);
        reflect(&mut particle.pos[1], &mut particle.vel[1], viewport.height);
    }
}

// Bounce a single axis. The overshoot is mirrored back inside so every frame
// starts with the particle in bounds.
fn reflect(pos: &mut f64, vel: &mut f64, limit: f64) {
    if *pos < 0.0 || *pos > limit {
        *vel = -*vel;
        let mirrored = if *pos < 0.0 { -*pos } else { 2.0 * limit - *pos };
        *pos = mirrored.max(0.0).min(limit);
    }
}
