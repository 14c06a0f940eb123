//! Reach-distance shaping: the soften ease near full extension and the stretch
//! scale past it.

use crate::scalar::lerp;

/// Ease `hard_edge` toward `chain_length` once it passes
/// `chain_length - soften`.
///
/// Inside the blend region the edge follows
/// `d + s * (1 - exp((d - hard_edge) / s))` with `d = chain_length - soften`,
/// which meets the identity at `d` and never exceeds `chain_length`. Outside it,
/// or when `soften <= 0` or `soften >= chain_length`, `hard_edge` is returned
/// unchanged.
pub fn soften_edge(hard_edge: f64, chain_length: f64, soften: f64) -> f64 {
    let blend_start = chain_length - soften;
    if soften > 0.0 && blend_start > 0.0 && hard_edge > blend_start {
        blend_start + soften * (1.0 - ((blend_start - hard_edge) / soften).exp())
    } else {
        hard_edge
    }
}

/// Scale `hard_edge` by how far `dynamic_reach` overshoots `chain_length`,
/// blended in by `strength`.
///
/// The scale is floored at 1, so the edge is returned exactly when the reach is
/// within the chain length.
pub fn stretch_edge(hard_edge: f64, dynamic_reach: f64, chain_length: f64, strength: f64) -> f64 {
    let scale = if dynamic_reach > chain_length {
        dynamic_reach / chain_length
    } else {
        1.0
    };
    lerp(1.0, scale, strength) * hard_edge
}
