use crate::constants::{PATCH, WALL};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// OpenFOAM patch type of a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchKind {
    #[default]
    Patch,
    Wall,
}

impl PatchKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Patch => PATCH,
            Self::Wall => WALL,
        }
    }
}

impl fmt::Display for PatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            PATCH => Ok(Self::Patch),
            WALL => Ok(Self::Wall),
            other => Err(format!("unknown patch type '{other}', expected 'patch' or 'wall'")),
        }
    }
}
