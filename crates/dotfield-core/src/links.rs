//! Proximity links: connectivity edges between close particle pairs.

use glam::Vec2;

/// One edge between the particles at indices `a` and `b`, with the alpha
/// the renderer should stroke it at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

/// Extra opacity for edges whose midpoint is close to the pointer.
#[derive(Clone, Copy, Debug)]
pub struct PointerGlow {
    pub pos: Vec2,
    pub radius: f32,
    pub bonus: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct LinkParams {
    /// Strict upper bound on linked pair distance.
    pub max_dist: f32,
    /// Scale on the distance-derived alpha term.
    pub alpha_scale: f32,
    pub glow: Option<PointerGlow>,
}

/// Compute edges for every unordered pair closer than `max_dist`.
///
/// Alpha falls off linearly with distance (closer pairs are more opaque)
/// plus an optional pointer-proximity bonus. Each unordered pair is
/// visited exactly once, so the result is symmetric by construction.
/// O(n^2), fine at the fixed population sizes the fields use.
pub fn proximity_links(positions: &[Vec2], params: &LinkParams) -> Vec<Link> {
    let mut links = Vec::new();
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let dist = positions[i].distance(positions[j]);
            if dist >= params.max_dist {
                continue;
            }
            let mut alpha = (1.0 - dist / params.max_dist) * params.alpha_scale;
            if let Some(glow) = &params.glow {
                let mid = (positions[i] + positions[j]) * 0.5;
                let proximity = (1.0 - mid.distance(glow.pos) / glow.radius).max(0.0);
                alpha += proximity * glow.bonus;
            }
            links.push(Link {
                a: i,
                b: j,
                alpha: alpha.min(1.0),
            });
        }
    }
    links
}
