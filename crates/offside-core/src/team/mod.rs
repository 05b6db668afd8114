//! Team identities and attack direction

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two marker colours on the pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Red,
    Blue,
}

/// Direction along the image x-axis in which a team attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackDirection {
    /// Toward decreasing x
    RightToLeft,
    /// Toward increasing x
    LeftToRight,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }

    /// Fixed by colour: red always attacks right to left, blue left to right.
    pub fn attack_direction(self) -> AttackDirection {
        match self {
            Team::Red => AttackDirection::RightToLeft,
            Team::Blue => AttackDirection::LeftToRight,
        }
    }

    /// RGB colour used when drawing this team's markers
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Team::Red => (255, 0, 0),
            Team::Blue => (0, 0, 255),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Team::Red => "red",
            Team::Blue => "blue",
        }
    }
}

impl AttackDirection {
    /// True if `x` lies strictly further along this direction than `reference`.
    pub fn is_beyond(self, x: i32, reference: i32) -> bool {
        match self {
            AttackDirection::RightToLeft => x < reference,
            AttackDirection::LeftToRight => x > reference,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Team {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Team::Red),
            "blue" | "b" => Ok(Team::Blue),
            other => bail!("unknown team '{other}', expected red or blue"),
        }
    }
}
