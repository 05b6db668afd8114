//! Offside rule evaluation

pub mod evaluator;
pub mod result;

pub use evaluator::{OffsideOutcome, evaluate};
pub use result::{AnalysisResult, DefenderLines, OffsideLine};

use crate::detection::Detection;
use crate::error::{AnalysisError, Prerequisite};
use crate::Result;
use offside_core::Team;
use tracing::info;

/// Run the offside rule over one detection with `possession` attacking.
///
/// Fails with [`AnalysisError::MissingPrerequisite`] unless both teams and
/// the ball were detected, and with [`AnalysisError::InsufficientDefenders`]
/// when the defending side has fewer than two players.
pub fn analyze(detection: &Detection, possession: Team) -> Result<AnalysisResult> {
    if detection.red_team.is_empty() {
        return Err(AnalysisError::MissingPrerequisite(Prerequisite::RedTeam));
    }
    if detection.blue_team.is_empty() {
        return Err(AnalysisError::MissingPrerequisite(Prerequisite::BlueTeam));
    }
    let ball = detection
        .ball
        .ok_or(AnalysisError::MissingPrerequisite(Prerequisite::Ball))?;

    let attacking = detection.team(possession);
    let defending = detection.team(possession.opponent());
    let outcome = evaluate(attacking, defending, ball, possession)?;

    info!(
        attacking = %possession,
        line = outcome.line.x,
        offside = outcome.offside_players.len(),
        "offside analysis complete"
    );

    Ok(AnalysisResult {
        possession,
        red_team: detection.red_team.clone(),
        blue_team: detection.blue_team.clone(),
        ball,
        offside_line: outcome.line,
        offside_players: outcome.offside_players,
    })
}
