// Particle store: builds a fresh particle set sized to the viewport.
// The whole set is thrown away and rebuilt on every resize.

use rand::Rng;

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::viewport::Viewport;

/// Density scales with viewport width, capped by `max_particles`.
pub fn particle_count(width: f64, config: &FieldConfig) -> usize {
    if !(width > 0.0) || !(config.density_divisor > 0.0) {
        return 0;
    }
    let by_width = (width / config.density_divisor).floor() as usize;
    by_width.min(config.max_particles as usize)
}

pub fn regenerate<R: Rng>(viewport: Viewport, config: &FieldConfig, rng: &mut R) -> Vec<Particle> {
    let count = particle_count(viewport.width, config);
    let mut particles = Vec::with_capacity(count);
    for _ in 0..count {
        let pos_x = rng.gen::<f64>() * viewport.width;
        let pos_y = rng.gen::<f64>() * viewport.height;
        let vel_x = (rng.gen::<f64>() - 0.5) * config.max_speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * config.max_speed;
        let radius = rng.gen::<f64>() * (config.max_size - config.min_size) + config.min_size;
        particles.push(Particle::new(pos_x, pos_y, vel_x, vel_y, radius));
    }
    particles
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn wide_viewport_hits_the_cap() {
        let config = FieldConfig::default();
        assert_eq!(particle_count(1440.0, &config), 120);
        assert_eq!(particle_count(4000.0, &config), 120);
    }

    #[test]
    fn narrow_viewport_scales_with_width() {
        let config = FieldConfig::default();
        assert_eq!(particle_count(600.0, &config), 50);
        assert_eq!(particle_count(11.0, &config), 0);
        assert_eq!(particle_count(23.9, &config), 1);
    }

    #[test]
    fn empty_viewport_has_no_particles() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(regenerate(Viewport::new(0.0, 500.0), &config, &mut rng).is_empty());
        assert_eq!(particle_count(-10.0, &config), 0);
        assert_eq!(particle_count(f64::NAN, &config), 0);
    }

    #[test]
    fn generated_particles_respect_ranges() {
        let config = FieldConfig::default();
        let viewport = Viewport::new(1440.0, 900.0);
        let mut rng = StdRng::seed_from_u64(42);
        let particles = regenerate(viewport, &config, &mut rng);
        assert_eq!(particles.len(), 120);
        let half_speed = config.max_speed / 2.0;
        for p in &particles {
            assert!(viewport.contains(p.pos));
            assert!(p.vel[0].abs() <= half_speed);
            assert!(p.vel[1].abs() <= half_speed);
            assert!(p.radius >= config.min_size && p.radius <= config.max_size);
        }
    }

    #[test]
    fn velocities_take_both_signs() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let particles = regenerate(Viewport::new(1440.0, 900.0), &config, &mut rng);
        assert!(particles.iter().any(|p| p.vel[0] < 0.0));
        assert!(particles.iter().any(|p| p.vel[0] > 0.0));
    }

    #[test]
    fn custom_cap_is_honoured() {
        let config = FieldConfig {
            max_particles: 10,
            ..FieldConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(regenerate(Viewport::new(1440.0, 900.0), &config, &mut rng).len(), 10);
    }
}
