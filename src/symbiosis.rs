//! Symbiosis bonus rules.
//!
//! Every rule is an independent computation over the world's neighbor
//! queries, re-evaluated on each call. Nothing here caches: neighboring
//! yields can depend on each other, so each evaluation walks the layout
//! fresh.

use crate::species::{Family, Species};
use crate::world::{World, WorldError};
use crate::yields::Yields;

/// One symbiosis, with magnitudes already specialized to a species tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rule {
    /// +`per_neighbor` range for each same-family neighbor within range,
    /// up to `cap`. Affects range, never yields.
    MassiveSchool { per_neighbor: i64, cap: i64 },
    /// Flat bonus if a Clownfish or Parrotfish is directly adjacent.
    CoralDweller { bonus: Yields },
    /// `per_kind` for each distinct fish family within range.
    BarrierDweller { per_kind: Yields },
    /// Flat bonus if a Mackerel or Clownfish is within range.
    Predator { bonus: Yields },
    /// Food from the wealth of adjacent Clownfish, Parrotfish or Marlin.
    GrowingHunters { food_factor: f64, per_wealth: i64 },
    /// Flat bonus if no other Tuna is within range.
    Territorial { bonus: Yields },
    /// `per_neighbor` for each Seabass within range.
    VigorousSpecimen { per_neighbor: Yields },
    /// `per_neighbor` for each Parrotfish within range.
    HugeSpecimen { per_neighbor: Yields },
    /// Tech from the food of adjacent Mackerel, Seabass or Marlin.
    WeirdDeeps { tech_factor: f64, per_food: i64 },
    /// Flat bonus once the source's own yield so far reaches `min_tech`.
    LegendaryProportions { bonus: Yields, min_tech: i64 },
}

impl Rule {
    /// Yield contribution of this rule for the source at `tile`.
    ///
    /// `so_far` is the yield accumulated before this rule (base plus any
    /// earlier rules); only LegendaryProportions inspects it.
    pub fn bonus(&self, world: &World, tile: i64, so_far: Yields) -> Result<Yields, WorldError> {
        match *self {
            Rule::MassiveSchool { .. } => Ok(Yields::ZERO),
            Rule::CoralDweller { bonus } => {
                let near = world.neighbors(
                    tile,
                    Some(&[Family::Clownfish, Family::Parrotfish]),
                    1,
                );
                Ok(if near.is_empty() { Yields::ZERO } else { bonus })
            }
            Rule::BarrierDweller { per_kind } => {
                let range = world.effective_range(tile)?;
                let mut kinds: Vec<Family> = world
                    .neighbors(tile, None, range)
                    .iter()
                    .map(|(_, species)| species.family())
                    .collect();
                kinds.sort();
                kinds.dedup();
                Ok(per_kind * kinds.len() as i64)
            }
            Rule::Predator { bonus } => {
                let range = world.effective_range(tile)?;
                let near = world.neighbors(
                    tile,
                    Some(&[Family::Mackerel, Family::Clownfish]),
                    range,
                );
                Ok(if near.is_empty() { Yields::ZERO } else { bonus })
            }
            Rule::GrowingHunters {
                food_factor,
                per_wealth,
            } => {
                let wealth = world
                    .neighbor_yields(
                        tile,
                        Some(&[Family::Clownfish, Family::Parrotfish, Family::Marlin]),
                        1,
                    )?
                    .wealth;
                // Integer-divide the summed field before the fractional
                // multiply; the game truncates in that order.
                let factor = (wealth / per_wealth) as f64 * food_factor;
                Ok(Yields::food(1) * factor)
            }
            Rule::Territorial { bonus } => {
                let range = world.effective_range(tile)?;
                let near = world.neighbors(tile, Some(&[Family::Tuna]), range);
                Ok(if near.is_empty() { bonus } else { Yields::ZERO })
            }
            Rule::VigorousSpecimen { per_neighbor } => {
                let range = world.effective_range(tile)?;
                let count = world.neighbors(tile, Some(&[Family::Seabass]), range).len();
                Ok(per_neighbor * count as i64)
            }
            Rule::HugeSpecimen { per_neighbor } => {
                let range = world.effective_range(tile)?;
                let count = world
                    .neighbors(tile, Some(&[Family::Parrotfish]), range)
                    .len();
                Ok(per_neighbor * count as i64)
            }
            Rule::WeirdDeeps {
                tech_factor,
                per_food,
            } => {
                let food = world
                    .neighbor_yields(
                        tile,
                        Some(&[Family::Mackerel, Family::Seabass, Family::Marlin]),
                        1,
                    )?
                    .food;
                let factor = tech_factor * (food / per_food) as f64;
                Ok(Yields::tech(1) * factor)
            }
            Rule::LegendaryProportions { bonus, min_tech } => {
                Ok(if so_far.tech >= min_tech {
                    bonus
                } else {
                    Yields::ZERO
                })
            }
        }
    }

    /// Extra influence range granted by this rule.
    ///
    /// Massive School is a fixed point: the number of peers in range depends
    /// on the range the bonus itself extends. The search re-counts at most
    /// `cap` times and exits early once the bonus settles at 0 or the cap.
    pub fn range_bonus(&self, world: &World, tile: i64, family: Family) -> i64 {
        match *self {
            Rule::MassiveSchool { per_neighbor, cap } => {
                let mut bonus = 0;
                for _ in 0..cap {
                    let peers = world
                        .neighbors(tile, Some(&[family]), Species::BASE_RANGE + bonus)
                        .len() as i64;
                    bonus = (per_neighbor * peers).min(cap);
                    if bonus == 0 || bonus == cap {
                        break;
                    }
                }
                bonus
            }
            _ => 0,
        }
    }
}
