use std::fmt;

use serde::{Deserialize, Serialize};

use crate::symbiosis::Rule;
use crate::yields::Yields;

/// Every placeable natural source, one variant per species and tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Mackerel,
    GreatMackerel,
    SuperiorMackerel,
    Clownfish,
    GreatClownfish,
    SuperiorClownfish,
    Parrotfish,
    GreatParrotfish,
    SuperiorParrotfish,
    Seabass,
    GreatSeabass,
    SuperiorSeabass,
    Tuna,
    GreatTuna,
    Marlin,
    GreatMarlin,
    Anglerfish,
    GreatAnglerfish,
}

/// Species family, ignoring tier. This is the identity used by neighbor
/// filters and by "different fish type" counting: an upgraded tier is still
/// the same kind of fish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Mackerel,
    Clownfish,
    Parrotfish,
    Seabass,
    Tuna,
    Marlin,
    Anglerfish,
}

impl Species {
    /// Influence radius shared by all animals before any range symbiosis.
    pub const BASE_RANGE: i64 = 2;

    pub fn family(self) -> Family {
        use self::Species::*;
        match self {
            Mackerel | GreatMackerel | SuperiorMackerel => Family::Mackerel,
            Clownfish | GreatClownfish | SuperiorClownfish => Family::Clownfish,
            Parrotfish | GreatParrotfish | SuperiorParrotfish => Family::Parrotfish,
            Seabass | GreatSeabass | SuperiorSeabass => Family::Seabass,
            Tuna | GreatTuna => Family::Tuna,
            Marlin | GreatMarlin => Family::Marlin,
            Anglerfish | GreatAnglerfish => Family::Anglerfish,
        }
    }

    /// Static yield on the species' own tile before symbiosis bonuses.
    pub fn base(self) -> Yields {
        use self::Species::*;
        match self {
            Mackerel => Yields::food(2),
            GreatMackerel => Yields::food(4),
            SuperiorMackerel => Yields::food(8),
            Clownfish => Yields::wealth(2),
            GreatClownfish => Yields::wealth(4),
            SuperiorClownfish => Yields::wealth(8),
            Parrotfish => Yields::wealth(2),
            GreatParrotfish => Yields::wealth(3),
            SuperiorParrotfish => Yields::wealth(6),
            Seabass => Yields::food(2),
            GreatSeabass => Yields::food(4),
            SuperiorSeabass => Yields::food(8),
            Tuna => Yields::food(4),
            GreatTuna => Yields::food(8),
            Marlin => Yields::food(2),
            GreatMarlin => Yields::food(4),
            Anglerfish => Yields::wealth(6),
            GreatAnglerfish => Yields::wealth(12),
        }
    }

    /// City slots consumed when placed. Bookkeeping only, never part of
    /// the yield math.
    pub fn slots(self) -> u32 {
        use self::Species::*;
        match self {
            Mackerel | GreatMackerel | Clownfish => 1,
            SuperiorMackerel | GreatClownfish | Parrotfish | Seabass => 2,
            SuperiorClownfish | GreatParrotfish | GreatSeabass => 3,
            SuperiorParrotfish | SuperiorSeabass | Tuna | Marlin | Anglerfish => 4,
            GreatTuna | GreatMarlin | GreatAnglerfish => 5,
        }
    }

    /// Symbiosis rules in application order. Magnitudes differ per tier,
    /// the shape of each rule does not.
    pub fn rules(self) -> Vec<Rule> {
        use self::Species::*;
        match self {
            Mackerel | GreatMackerel | SuperiorMackerel => vec![Rule::MassiveSchool {
                per_neighbor: 1,
                cap: 2,
            }],
            Clownfish => vec![Rule::CoralDweller {
                bonus: Yields::wealth(2),
            }],
            GreatClownfish => vec![Rule::CoralDweller {
                bonus: Yields::wealth(4),
            }],
            SuperiorClownfish => vec![Rule::CoralDweller {
                bonus: Yields::wealth(6),
            }],
            Parrotfish => vec![Rule::BarrierDweller {
                per_kind: Yields::wealth(1) + Yields::tech(1),
            }],
            GreatParrotfish => vec![Rule::BarrierDweller {
                per_kind: Yields::wealth(2) + Yields::tech(2),
            }],
            SuperiorParrotfish => vec![Rule::BarrierDweller {
                per_kind: Yields::wealth(3) + Yields::tech(3),
            }],
            Seabass => vec![Rule::Predator {
                bonus: Yields::food(3),
            }],
            GreatSeabass => vec![Rule::Predator {
                bonus: Yields::food(6),
            }],
            SuperiorSeabass => vec![Rule::Predator {
                bonus: Yields::food(12),
            }],
            Tuna => vec![
                Rule::GrowingHunters {
                    food_factor: 0.5,
                    per_wealth: 1,
                },
                Rule::Territorial {
                    bonus: Yields::food(3),
                },
            ],
            GreatTuna => vec![
                Rule::GrowingHunters {
                    food_factor: 0.75,
                    per_wealth: 1,
                },
                Rule::Territorial {
                    bonus: Yields::food(6),
                },
            ],
            Marlin => vec![
                Rule::VigorousSpecimen {
                    per_neighbor: Yields::food(4) + Yields::tech(2),
                },
                Rule::HugeSpecimen {
                    per_neighbor: Yields::wealth(4) + Yields::tech(2),
                },
            ],
            GreatMarlin => vec![
                Rule::VigorousSpecimen {
                    per_neighbor: Yields::food(6) + Yields::tech(3),
                },
                Rule::HugeSpecimen {
                    per_neighbor: Yields::wealth(6) + Yields::tech(3),
                },
            ],
            Anglerfish => vec![
                Rule::WeirdDeeps {
                    tech_factor: 0.75,
                    per_food: 1,
                },
                Rule::LegendaryProportions {
                    bonus: Yields::awe(5),
                    min_tech: 10,
                },
            ],
            GreatAnglerfish => vec![
                Rule::WeirdDeeps {
                    tech_factor: 1.5,
                    per_food: 2,
                },
                Rule::LegendaryProportions {
                    bonus: Yields::awe(8),
                    min_tech: 10,
                },
            ],
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
