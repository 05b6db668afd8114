//! Analysis result handed to presentation

use crate::Result;
use offside_core::{Point, Team};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// The offside line, tagged with the defending team it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsideLine {
    pub defending: Team,
    pub x: i32,
}

/// Per-team defender line; at most one is ever set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenderLines {
    pub red: Option<i32>,
    pub blue: Option<i32>,
}

impl DefenderLines {
    pub fn get(&self, team: Team) -> Option<i32> {
        match team {
            Team::Red => self.red,
            Team::Blue => self.blue,
        }
    }
}

/// Immutable outcome of one analysis pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub possession: Team,
    pub red_team: Vec<Point>,
    pub blue_team: Vec<Point>,
    pub ball: Point,
    pub offside_line: OffsideLine,
    pub offside_players: BTreeSet<Point>,
}

impl AnalysisResult {
    pub fn offside_count(&self) -> usize {
        self.offside_players.len()
    }

    pub fn defender_lines(&self) -> DefenderLines {
        let mut lines = DefenderLines::default();
        match self.offside_line.defending {
            Team::Red => lines.red = Some(self.offside_line.x),
            Team::Blue => lines.blue = Some(self.offside_line.x),
        }
        lines
    }

    pub fn is_offside(&self, player: &Point) -> bool {
        self.offside_players.contains(player)
    }

    /// One-line message for the user
    pub fn summary(&self) -> String {
        format!("{} player(s) in offside position", self.offside_count())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Export the result in JSON format
    pub fn export_json(&self, output_path: &Path) -> Result<()> {
        std::fs::write(output_path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> AnalysisResult {
        AnalysisResult {
            possession: Team::Blue,
            red_team: vec![Point::new(10, 10), Point::new(40, 20)],
            blue_team: vec![Point::new(90, 30)],
            ball: Point::new(50, 50),
            offside_line: OffsideLine {
                defending: Team::Red,
                x: 40,
            },
            offside_players: [Point::new(90, 30)].into_iter().collect(),
        }
    }

    #[test]
    fn test_only_defending_line_is_set() {
        let lines = result().defender_lines();
        assert_eq!(lines.get(Team::Red), Some(40));
        assert_eq!(lines.get(Team::Blue), None);
    }

    #[test]
    fn test_summary() {
        assert_eq!(result().summary(), "1 player(s) in offside position");
    }

    #[test]
    fn test_json_export() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("result.json");
        result().export_json(&path)?;

        let text = std::fs::read_to_string(&path)?;
        let parsed: AnalysisResult = serde_json::from_str(&text)?;
        assert_eq!(parsed, result());
        assert!(text.contains("\"possession\": \"blue\""));
        Ok(())
    }
}
