use std::fmt::Write as _;

use serde::Serialize;

use crate::species::Species;
use crate::world::{World, WorldError};
use crate::yields::Yields;

/// One aggregated tile inside the city range.
#[derive(Debug, Serialize)]
pub struct TileRow {
    pub tile: i64,
    /// The source placed on this tile, if the tile is part of the layout.
    pub species: Option<Species>,
    pub yields: Yields,
}

/// Aggregation result for a whole layout, ready for printing or JSON export.
#[derive(Debug, Serialize)]
pub struct LayoutReport {
    pub scenario: String,
    pub city_range: i64,
    pub layout: Vec<Species>,
    pub slots: u32,
    pub tiles: Vec<TileRow>,
    pub total: Yields,
    pub prosperity: i64,
}

impl LayoutReport {
    /// Aggregate `world` over the city tiles `[0, city_range)`.
    pub fn build(world: &World, scenario: &str, city_range: i64) -> Result<Self, WorldError> {
        let yields = world.all_yields(Some(0), Some(city_range))?;
        let tiles = yields
            .into_iter()
            .map(|(tile, yields)| TileRow {
                tile,
                species: world.species_at(tile).ok(),
                yields,
            })
            .collect::<Vec<_>>();
        let total = Yields::sum(tiles.iter().map(|row| row.yields));
        Ok(Self {
            scenario: scenario.to_string(),
            city_range,
            layout: world.layout().to_vec(),
            slots: world.total_slots(),
            tiles,
            total,
            prosperity: total.prosperity(),
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable rendering: the layout, every city tile with its
    /// aggregated yields, then the totals.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Ocean layout ({} slots):", self.slots);
        for (tile, species) in self.layout.iter().enumerate() {
            let _ = writeln!(out, "  {tile}: {species}");
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "City tiles, range = {}:", self.city_range);
        for row in &self.tiles {
            let _ = writeln!(out, "  {}: {}", row.tile, row.yields);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Total: {}", self.total);
        let _ = writeln!(out, "Prosperity: {}", self.prosperity);
        out
    }
}
