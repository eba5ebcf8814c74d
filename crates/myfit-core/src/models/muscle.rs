// ABOUTME: Muscle group vocabulary for workout tagging
// ABOUTME: Fixed 9-item enumeration with parsing, display, and CSV storage helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use thiserror::Error;

/// The fixed muscle-group vocabulary used to tag workouts
///
/// This is a closed set: every workout entry carries one or more of these
/// values, and the neglect recommendation iterates the full vocabulary.
/// Unknown strings are rejected at the API boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    /// Chest (pectorals)
    Chest,
    /// Back (lats, traps, lower back)
    Back,
    /// Legs (quads, hamstrings, glutes, calves)
    Legs,
    /// Shoulders (deltoids)
    Shoulders,
    /// Biceps
    Biceps,
    /// Triceps
    Triceps,
    /// Abdominals
    Abs,
    /// Cardiovascular training
    Cardio,
    /// Stretching and mobility work
    Stretching,
}

/// Error returned when parsing an unknown muscle group string
#[derive(Debug, Clone, Error)]
#[error("unknown muscle group: {0}")]
pub struct ParseMuscleGroupError(pub String);

impl MuscleGroup {
    /// The full vocabulary in canonical order
    pub const ALL: [Self; 9] = [
        Self::Chest,
        Self::Back,
        Self::Legs,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Abs,
        Self::Cardio,
        Self::Stretching,
    ];

    /// Lowercase identifier used on the wire and in storage
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Legs => "legs",
            Self::Shoulders => "shoulders",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Abs => "abs",
            Self::Cardio => "cardio",
            Self::Stretching => "stretching",
        }
    }

    /// Parse a comma-joined storage string (e.g. `"chest,triceps"`)
    ///
    /// Unknown segments are skipped with a warning rather than failing the
    /// whole row; rows are validated on write, so a skip here indicates a
    /// vocabulary change after the row was stored.
    #[must_use]
    pub fn parse_csv(raw: &str) -> Vec<Self> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| match s.parse() {
                Ok(group) => Some(group),
                Err(ParseMuscleGroupError(value)) => {
                    tracing::warn!("skipping unknown muscle group in stored row: {value}");
                    None
                }
            })
            .collect()
    }

    /// Join a group list into the comma-separated storage form
    #[must_use]
    pub fn join_csv(groups: &[Self]) -> String {
        groups
            .iter()
            .map(|g| g.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for MuscleGroup {
    type Err = ParseMuscleGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chest" => Ok(Self::Chest),
            "back" => Ok(Self::Back),
            "legs" => Ok(Self::Legs),
            "shoulders" => Ok(Self::Shoulders),
            "biceps" => Ok(Self::Biceps),
            "triceps" => Ok(Self::Triceps),
            "abs" => Ok(Self::Abs),
            "cardio" => Ok(Self::Cardio),
            "stretching" => Ok(Self::Stretching),
            other => Err(ParseMuscleGroupError(other.to_owned())),
        }
    }
}

impl Display for MuscleGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_groups() {
        for group in MuscleGroup::ALL {
            assert_eq!(group.as_str().parse::<MuscleGroup>().unwrap(), group);
        }
    }

    #[test]
    fn test_unknown_group_rejected() {
        assert!("forearms".parse::<MuscleGroup>().is_err());
    }

    #[test]
    fn test_csv_storage_form() {
        let groups = vec![MuscleGroup::Chest, MuscleGroup::Triceps];
        let joined = MuscleGroup::join_csv(&groups);
        assert_eq!(joined, "chest,triceps");
        assert_eq!(MuscleGroup::parse_csv(&joined), groups);
    }

    #[test]
    fn test_csv_skips_unknown_segments() {
        assert_eq!(
            MuscleGroup::parse_csv("chest,unknown,back"),
            vec![MuscleGroup::Chest, MuscleGroup::Back]
        );
    }
}
