//! Offside core types
//!
//! Pitch coordinates, team identities and the small amount of geometry the
//! detection pipeline shares.

pub mod geometry;
pub mod team;

pub use geometry::Point;
pub use team::{AttackDirection, Team};
