// Simple particle struct to keep track of individual position, velocity, and radius

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
        }
    }

    // The glow is drawn out to twice the particle's radius
    pub fn glow_radius(&self) -> f64 {
        self.radius * 2.0
    }
}
