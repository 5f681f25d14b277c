//! Irrigated-land planning.
//!
//! Closed-form arithmetic for splitting a world tile budget into oceans:
//! each ocean of `size` tiles irrigates a forest strip of `size + 4` tiles
//! on both shores. Standalone helper, shares no state with the yield engine.

use serde::Serialize;

/// Smallest ocean worth placing.
pub const MIN_OCEAN_SIZE: f64 = 6.0;

/// Forest tiles irrigated by `oceans` oceans of width `size`.
pub fn forest_tiles(oceans: u32, size: f64) -> f64 {
    (size + 4.0) * 2.0 * oceans as f64
}

/// Total tiles consumed: the oceans themselves plus their forests.
pub fn tiles_used(oceans: u32, size: f64) -> f64 {
    oceans as f64 * size + forest_tiles(oceans, size)
}

/// One candidate split of the world budget.
#[derive(Debug, Clone, Serialize)]
pub struct LandPlan {
    pub oceans: u32,
    pub size: f64,
    pub tiles: f64,
    pub forest: f64,
}

/// Candidate ocean layouts for a world of `total` tiles: for each feasible
/// ocean count, the exact width that spends the whole budget plus its two
/// integer roundings.
pub fn plans(total: f64) -> Vec<LandPlan> {
    let max_oceans = (total / (3.0 * MIN_OCEAN_SIZE + 8.0)) as u32;
    let mut out = Vec::new();
    for oceans in 1..=max_oceans {
        let exact = (total / oceans as f64 - 8.0) / 3.0;
        for size in [exact, exact.floor(), exact.floor() + 1.0] {
            out.push(LandPlan {
                oceans,
                size,
                tiles: tiles_used(oceans, size),
                forest: forest_tiles(oceans, size),
            });
        }
    }
    out
}
