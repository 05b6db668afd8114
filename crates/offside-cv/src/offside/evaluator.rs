//! Second-last defender line and offside membership

use super::result::OffsideLine;
use crate::error::AnalysisError;
use crate::Result;
use offside_core::{Point, Team};
use std::collections::BTreeSet;

/// Offside line plus the attackers beyond it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsideOutcome {
    pub line: OffsideLine,
    pub offside_players: BTreeSet<Point>,
}

/// Evaluate the offside rule along the image x-axis only.
///
/// Defenders are sorted by x, descending when red attacks and ascending when
/// blue attacks; the line is the x of the second defender in that order. An
/// attacker is offside when it is beyond both the line and the ball in its
/// team's attack direction.
pub fn evaluate(
    attacking: &[Point],
    defending: &[Point],
    ball: Point,
    attacking_team: Team,
) -> Result<OffsideOutcome> {
    if defending.len() < 2 {
        return Err(AnalysisError::InsufficientDefenders {
            found: defending.len(),
        });
    }

    let mut sorted: Vec<i32> = defending.iter().map(|p| p.x).collect();
    match attacking_team {
        Team::Red => sorted.sort_by(|a, b| b.cmp(a)),
        Team::Blue => sorted.sort(),
    }
    let line_x = sorted[1];

    let direction = attacking_team.attack_direction();
    let offside_players = attacking
        .iter()
        .filter(|a| direction.is_beyond(a.x, line_x) && direction.is_beyond(a.x, ball.x))
        .copied()
        .collect();

    Ok(OffsideOutcome {
        line: OffsideLine {
            defending: attacking_team.opponent(),
            x: line_x,
        },
        offside_players,
    })
}
