pub mod landmass;
pub mod report;
pub mod scenario;
pub mod species;
pub mod symbiosis;
pub mod world;
pub mod yields;

pub use report::LayoutReport;
pub use scenario::{Scenario, ScenarioLoader};
pub use species::{Family, Species};
pub use world::{World, WorldError};
pub use yields::Yields;
