use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul};

use serde::{Deserialize, Serialize};

/// Resources produced on a single tile.
///
/// Natura is deliberately absent: it aggregates by max instead of sum and is
/// not tied to one tile, so it does not fit this vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Yields {
    #[serde(default)]
    pub food: i64,
    #[serde(default)]
    pub wealth: i64,
    #[serde(default)]
    pub tech: i64,
    #[serde(default)]
    pub awe: i64,
    #[serde(default)]
    pub danger: i64,
}

impl Yields {
    pub const ZERO: Yields = Yields {
        food: 0,
        wealth: 0,
        tech: 0,
        awe: 0,
        danger: 0,
    };

    pub const fn food(amount: i64) -> Yields {
        Yields {
            food: amount,
            ..Yields::ZERO
        }
    }

    pub const fn wealth(amount: i64) -> Yields {
        Yields {
            wealth: amount,
            ..Yields::ZERO
        }
    }

    pub const fn tech(amount: i64) -> Yields {
        Yields {
            tech: amount,
            ..Yields::ZERO
        }
    }

    pub const fn awe(amount: i64) -> Yields {
        Yields {
            awe: amount,
            ..Yields::ZERO
        }
    }

    /// Food + wealth + tech. Danger and awe do not count towards prosperity.
    pub fn prosperity(&self) -> i64 {
        self.food + self.wealth + self.tech
    }

    /// Componentwise sum over any sequence; empty sums to the identity.
    pub fn sum(iterable: impl IntoIterator<Item = Yields>) -> Yields {
        iterable.into_iter().fold(Yields::ZERO, Add::add)
    }

    /// Multiply every field by `factor`, truncating each result toward zero.
    ///
    /// Truncation happens per field after the multiplication, matching how
    /// the game rounds computed bonuses.
    pub fn scale(self, factor: f64) -> Yields {
        Yields {
            food: (self.food as f64 * factor) as i64,
            wealth: (self.wealth as f64 * factor) as i64,
            tech: (self.tech as f64 * factor) as i64,
            awe: (self.awe as f64 * factor) as i64,
            danger: (self.danger as f64 * factor) as i64,
        }
    }
}

impl Add for Yields {
    type Output = Yields;

    fn add(self, other: Yields) -> Yields {
        Yields {
            food: self.food + other.food,
            wealth: self.wealth + other.wealth,
            tech: self.tech + other.tech,
            awe: self.awe + other.awe,
            danger: self.danger + other.danger,
        }
    }
}

impl Sum for Yields {
    fn sum<I: Iterator<Item = Yields>>(iter: I) -> Yields {
        Yields::sum(iter)
    }
}

impl Mul<i64> for Yields {
    type Output = Yields;

    fn mul(self, factor: i64) -> Yields {
        Yields {
            food: self.food * factor,
            wealth: self.wealth * factor,
            tech: self.tech * factor,
            awe: self.awe * factor,
            danger: self.danger * factor,
        }
    }
}

impl Mul<f64> for Yields {
    type Output = Yields;

    fn mul(self, factor: f64) -> Yields {
        self.scale(factor)
    }
}

impl Div<i64> for Yields {
    type Output = Yields;

    /// Truncating division of every field. The divisor must be non-zero:
    /// a zero divisor has no meaningful truncation and is a caller bug.
    fn div(self, divisor: i64) -> Yields {
        debug_assert!(divisor != 0, "yield division by zero");
        self.scale(1.0 / divisor as f64)
    }
}

impl Div<f64> for Yields {
    type Output = Yields;

    fn div(self, divisor: f64) -> Yields {
        debug_assert!(divisor != 0.0, "yield division by zero");
        self.scale(1.0 / divisor)
    }
}

impl fmt::Display for Yields {
    /// Lists only the non-zero fields, or "-" when all are zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("food", self.food),
            ("wealth", self.wealth),
            ("tech", self.tech),
            ("awe", self.awe),
            ("danger", self.danger),
        ];
        let mut any = false;
        for (name, value) in fields {
            if value == 0 {
                continue;
            }
            if any {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
            any = true;
        }
        if !any {
            write!(f, "-")?;
        }
        Ok(())
    }
}
