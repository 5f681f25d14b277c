use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::species::Species;
use crate::world::World;

fn default_city_range() -> i64 {
    6
}

/// An ocean layout described in a YAML file: a name, an optional city
/// range, and the ordered list of species (one per tile).
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_city_range")]
    pub city_range: i64,
    pub layout: Vec<Species>,
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        scenario.validate()?;
        Ok(scenario)
    }
}

impl Scenario {
    /// The reference ocean layout used when no scenario file is given.
    pub fn ocean() -> Self {
        use crate::species::Species::*;
        Self {
            name: "ocean".to_string(),
            description: Some("Reference reef layout".to_string()),
            city_range: default_city_range(),
            layout: vec![
                Seabass, Clownfish, Parrotfish, Tuna, Parrotfish, Seabass, Mackerel, Tuna,
                Mackerel,
            ],
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.layout.is_empty() {
            bail!("scenario '{}' must place at least one source", self.name);
        }
        Ok(())
    }

    pub fn build_world(&self) -> World {
        World::new(self.layout.iter().copied())
    }
}
