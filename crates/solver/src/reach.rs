use ik_kernel::{Vec3, soften_edge};
use tracing::debug;

/// The dynamic third side of the IK triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reach {
    /// Root-to-target distance, floored at `edge_a - edge_b` so the triangle
    /// stays solvable when the target sits inside the minimum reach.
    pub dynamic: f64,
    /// `edge_a + edge_b`.
    pub chain_length: f64,
    /// `dynamic` after the soften ease.
    pub edge_c: f64,
}

impl Reach {
    pub fn resolve(target: &Vec3, edge_a: f64, edge_b: f64, soften: f64, do_soften: bool) -> Self {
        let distance = target.length();
        let floor = edge_a - edge_b;
        let dynamic = if distance < floor { floor } else { distance };
        let chain_length = edge_a + edge_b;
        let soften = if do_soften { soften } else { 0.0 };
        let edge_c = soften_edge(dynamic, chain_length, soften);

        if edge_c != dynamic {
            debug!(dynamic, edge_c, chain_length, soften, "soften engaged");
        }

        Self {
            dynamic,
            chain_length,
            edge_c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reach_is_target_distance() {
        let r = Reach::resolve(&Vec3::new(3.0, 4.0, 0.0), 5.0, 5.0, 0.0, false);
        assert_eq!(r.dynamic, 5.0);
        assert_eq!(r.chain_length, 10.0);
        assert_eq!(r.edge_c, 5.0);
    }

    #[test]
    fn test_reach_floored_at_edge_difference() {
        let r = Reach::resolve(&Vec3::new(1.0, 0.0, 0.0), 6.0, 2.0, 0.0, false);
        assert_eq!(r.dynamic, 4.0);
    }

    #[test]
    fn test_soften_requires_flag() {
        let target = Vec3::new(10.0, 0.0, 0.0);
        let off = Reach::resolve(&target, 5.0, 5.0, 2.0, false);
        assert_eq!(off.edge_c, 10.0);

        let on = Reach::resolve(&target, 5.0, 5.0, 2.0, true);
        assert!(on.edge_c < 10.0);
        assert_eq!(on.dynamic, 10.0);
    }

    #[test]
    fn test_non_finite_soften_ignored_when_disabled() {
        let target = Vec3::new(9.5, 0.0, 0.0);
        for soften in [f64::NAN, f64::INFINITY] {
            let r = Reach::resolve(&target, 5.0, 5.0, soften, false);
            assert_eq!(r.edge_c, 9.5);
        }
    }
}
