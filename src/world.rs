use std::collections::BTreeMap;

use thiserror::Error;
use tracing::warn;

use crate::species::{Family, Species};
use crate::yields::Yields;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("no natural source at tile {0}")]
    TileNotFound(i64),
}

/// An ordered one-dimensional layout of natural sources.
///
/// The position in the layout is the tile index; membership is fixed at
/// construction. Sources are plain data, so every spatial relationship goes
/// through the index-based queries here rather than through references
/// between sources.
#[derive(Clone, Debug, Default)]
pub struct World {
    layout: Vec<Species>,
}

impl World {
    pub fn new(layout: impl IntoIterator<Item = Species>) -> Self {
        Self {
            layout: layout.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.layout.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    pub fn layout(&self) -> &[Species] {
        &self.layout
    }

    /// The source placed on `tile`. Out-of-range tiles are a hard error:
    /// tiles are assigned internally, so a bad index is a caller defect.
    pub fn species_at(&self, tile: i64) -> Result<Species, WorldError> {
        self.resolve(tile).ok_or(WorldError::TileNotFound(tile))
    }

    /// Total city slots consumed by the whole layout.
    pub fn total_slots(&self) -> u32 {
        self.layout.iter().map(|species| species.slots()).sum()
    }

    /// Sources within `distance` tiles on either side of `tile`, in layout
    /// order, excluding `tile` itself and clamped at the layout bounds.
    /// Optionally restricted to the given families.
    ///
    /// A reference tile that cannot be resolved is a normal transient state
    /// for partial layouts, not a bug: the query logs and returns empty.
    pub fn neighbors(
        &self,
        tile: i64,
        families: Option<&[Family]>,
        distance: i64,
    ) -> Vec<(i64, Species)> {
        if distance <= 0 {
            return Vec::new();
        }
        if self.resolve(tile).is_none() {
            warn!(tile, "natural source not found, no neighbors");
            return Vec::new();
        }
        let lo = (tile - distance).max(0);
        let hi = (tile + distance).min(self.layout.len() as i64 - 1);
        (lo..=hi)
            .filter(|&other| other != tile)
            .map(|other| (other, self.layout[other as usize]))
            .filter(|(_, species)| {
                families.is_none_or(|families| families.contains(&species.family()))
            })
            .collect()
    }

    /// Summed own yields of the matching neighbors.
    pub fn neighbor_yields(
        &self,
        tile: i64,
        families: Option<&[Family]>,
        distance: i64,
    ) -> Result<Yields, WorldError> {
        let mut total = Yields::ZERO;
        for (near, _) in self.neighbors(tile, families, distance) {
            total = total + self.own_yield(near)?;
        }
        Ok(total)
    }

    /// Yield of the source at `tile` on its own tile: base plus every
    /// applicable symbiosis bonus. Evaluated fresh on every call.
    pub fn own_yield(&self, tile: i64) -> Result<Yields, WorldError> {
        let species = self.species_at(tile)?;
        let mut total = species.base();
        for rule in species.rules() {
            total = total + rule.bonus(self, tile, total)?;
        }
        Ok(total)
    }

    /// Influence radius of the source at `tile`, including any range
    /// symbiosis. The area window always uses this final value.
    pub fn effective_range(&self, tile: i64) -> Result<i64, WorldError> {
        let species = self.species_at(tile)?;
        let mut range = Species::BASE_RANGE;
        for rule in species.rules() {
            range += rule.range_bonus(self, tile, species.family());
        }
        Ok(range)
    }

    /// Per-tile yields projected by the source at `tile`: its own yield
    /// broadcast unchanged over the whole symmetric window (an animal does
    /// not split its yield across tiles). Keys are offsets when `relative`,
    /// absolute tiles otherwise; absolute tiles may fall outside the layout.
    pub fn area_yields(
        &self,
        tile: i64,
        relative: bool,
    ) -> Result<BTreeMap<i64, Yields>, WorldError> {
        let range = self.effective_range(tile)?;
        let yields = self.own_yield(tile)?;
        let origin = if relative { 0 } else { tile };
        Ok((-range..=range)
            .map(|offset| (origin + offset, yields))
            .collect())
    }

    /// Aggregated yields per tile over the half-open range `[start, until)`,
    /// summing every source's absolute contribution map. `None` bounds mean
    /// unbounded, so negative tiles and tiles past the layout end are kept
    /// unless a bound excludes them.
    pub fn all_yields(
        &self,
        start: Option<i64>,
        until: Option<i64>,
    ) -> Result<BTreeMap<i64, Yields>, WorldError> {
        let mut tiles: BTreeMap<i64, Yields> = BTreeMap::new();
        for tile in 0..self.layout.len() as i64 {
            for (target, yields) in self.area_yields(tile, false)? {
                if start.is_some_and(|start| target < start) {
                    continue;
                }
                if until.is_some_and(|until| target >= until) {
                    continue;
                }
                let entry = tiles.entry(target).or_insert(Yields::ZERO);
                *entry = *entry + yields;
            }
        }
        Ok(tiles)
    }

    /// Grand total vector over `[start, until)`.
    pub fn total_yields(
        &self,
        start: Option<i64>,
        until: Option<i64>,
    ) -> Result<Yields, WorldError> {
        Ok(Yields::sum(self.all_yields(start, until)?.into_values()))
    }

    fn resolve(&self, tile: i64) -> Option<Species> {
        if tile < 0 {
            return None;
        }
        self.layout.get(tile as usize).copied()
    }
}
