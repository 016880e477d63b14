//! The [`LifeBudget`]: how many hazard hits a path may absorb.

use std::fmt;
use std::str::FromStr;

use crate::maze::MazeError;

/// A positive number of lives, fixed for a whole search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "u32"))]
pub struct LifeBudget(u32);

impl LifeBudget {
    /// The budget used when none is configured.
    pub const DEFAULT: Self = Self(3);

    /// Validate a budget. Values outside `1..=u32::MAX` are rejected.
    pub fn new(lives: i64) -> Result<Self, MazeError> {
        match u32::try_from(lives) {
            Ok(n) if n > 0 => Ok(Self(n)),
            _ => Err(MazeError::InvalidLifeBudget(lives)),
        }
    }

    /// Number of lives.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for LifeBudget {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for LifeBudget {
    type Error = MazeError;

    fn try_from(lives: i64) -> Result<Self, Self::Error> {
        Self::new(lives)
    }
}

impl From<LifeBudget> for u32 {
    fn from(b: LifeBudget) -> Self {
        b.0
    }
}

impl FromStr for LifeBudget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: i64 = s
            .trim()
            .parse()
            .map_err(|e| format!("invalid life count '{s}': {e}"))?;
        Self::new(n).map_err(|e| e.to_string())
    }
}

impl fmt::Display for LifeBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
