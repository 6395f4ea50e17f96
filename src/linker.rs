// Proximity linker: every unordered pair closer than the link distance gets a
// line, fading out as the pair drifts apart. Plain O(n^2) scan; the particle
// cap keeps it cheap enough per frame.

use crate::particle::Particle;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub opacity: f64,
}

/// `None` at or beyond `link_distance`.
pub fn link_opacity(distance: f64, link_distance: f64) -> Option<f64> {
    if distance < link_distance {
        Some(1.0 - distance / link_distance)
    } else {
        None
    }
}

pub fn distance(a: &Particle, b: &Particle) -> f64 {
    glm::distance(&glm::vec2(a.pos[0], a.pos[1]), &glm::vec2(b.pos[0], b.pos[1]))
}

pub fn try_for_each_link<E, F>(particles: &[Particle], link_distance: f64, mut f: F) -> Result<(), E>
where
    F: FnMut(Link) -> Result<(), E>,
{
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            if let Some(opacity) = link_opacity(distance(a, b), link_distance) {
                f(Link {
                    from: a.pos,
                    to: b.pos,
                    opacity,
                })?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn links(particles: &[Particle], link_distance: f64) -> Vec<Link> {
        let mut out = Vec::new();
        let scanned = try_for_each_link::<Infallible, _>(particles, link_distance, |link| {
            out.push(link);
            Ok(())
        });
        assert!(scanned.is_ok());
        out
    }

    fn at(x: f64, y: f64) -> Particle {
        Particle::new(x, y, 0.0, 0.0, 1.0)
    }

    #[test]
    fn coincident_pair_is_fully_opaque() {
        assert_eq!(link_opacity(0.0, 120.0), Some(1.0));
        let found = links(&[at(5.0, 5.0), at(5.0, 5.0)], 120.0);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].opacity, 1.0);
    }

    #[test]
    fn exact_link_distance_is_not_linked() {
        assert_eq!(link_opacity(120.0, 120.0), None);
        assert!(links(&[at(0.0, 0.0), at(120.0, 0.0)], 120.0).is_empty());
        assert!(links(&[at(0.0, 0.0), at(72.0, 96.0)], 120.0).is_empty());
    }

    #[test]
    fn opacity_falls_with_distance() {
        let half = link_opacity(60.0, 120.0).unwrap();
        assert!((half - 0.5).abs() < 1e-12);
        let near = link_opacity(12.0, 120.0).unwrap();
        let far = link_opacity(108.0, 120.0).unwrap();
        assert!(near > far);
    }

    #[test]
    fn uses_euclidean_distance() {
        assert_eq!(distance(&at(0.0, 0.0), &at(3.0, 4.0)), 5.0);
    }

    #[test]
    fn each_pair_is_visited_once_in_index_order() {
        let particles = [at(0.0, 0.0), at(10.0, 0.0), at(20.0, 0.0)];
        let found = links(&particles, 120.0);
        let pairs: Vec<_> = found.iter().map(|l| (l.from[0], l.to[0])).collect();
        assert_eq!(pairs, vec![(0.0, 10.0), (0.0, 20.0), (10.0, 20.0)]);
    }

    #[test]
    fn distant_particles_are_skipped() {
        let particles = [at(0.0, 0.0), at(500.0, 0.0), at(505.0, 0.0)];
        let found = links(&particles, 120.0);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].from, [500.0, 0.0]);
    }

    #[test]
    fn first_error_stops_the_scan() {
        let particles = [at(0.0, 0.0), at(1.0, 0.0), at(2.0, 0.0)];
        let mut seen = 0;
        let result = try_for_each_link(&particles, 120.0, |_| {
            seen += 1;
            Err("surface gone")
        });
        assert_eq!(result, Err("surface gone"));
        assert_eq!(seen, 1);
    }

    #[test]
    fn single_or_no_particles_make_no_links() {
        assert!(links(&[], 120.0).is_empty());
        assert!(links(&[at(1.0, 1.0)], 120.0).is_empty());
    }
}
