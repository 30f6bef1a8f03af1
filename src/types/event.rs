//! Event classification: pool type, stroke and race distances

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Race distances recognised by the record tables, in meters.
pub const STANDARD_DISTANCES: [u32; 7] = [25, 50, 100, 200, 400, 800, 1500];

/// Pool length category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "snake_case")]
pub enum PoolType {
    /// 25m pool
    Short,
    /// 50m pool
    Long,
}

impl PoolType {
    pub const ALL: [PoolType; 2] = [PoolType::Short, PoolType::Long];

    /// Identifier used on the wire.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PoolType::Short => "short",
            PoolType::Long => "long",
        }
    }
}

/// Swimming stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "snake_case")]
pub enum Stroke {
    Freestyle,
    Backstroke,
    Breaststroke,
    Butterfly,
    IndividualMedley,
}

impl Stroke {
    pub const ALL: [Stroke; 5] = [
        Stroke::Freestyle,
        Stroke::Backstroke,
        Stroke::Breaststroke,
        Stroke::Butterfly,
        Stroke::IndividualMedley,
    ];

    /// Identifier used on the wire.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Stroke::Freestyle => "freestyle",
            Stroke::Backstroke => "backstroke",
            Stroke::Breaststroke => "breaststroke",
            Stroke::Butterfly => "butterfly",
            Stroke::IndividualMedley => "individual_medley",
        }
    }
}

/// Returned when an identifier is not part of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} identifier '{value}'")]
pub struct UnknownIdentifier {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for PoolType {
    type Err = UnknownIdentifier;

    /// Case-sensitive; no trimming or normalisation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PoolType::ALL
            .into_iter()
            .find(|pool| pool.as_str() == s)
            .ok_or_else(|| UnknownIdentifier { kind: "pool type", value: s.to_string() })
    }
}

impl FromStr for Stroke {
    type Err = UnknownIdentifier;

    /// Case-sensitive; no trimming or normalisation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stroke::ALL
            .into_iter()
            .find(|stroke| stroke.as_str() == s)
            .ok_or_else(|| UnknownIdentifier { kind: "stroke", value: s.to_string() })
    }
}

impl fmt::Display for PoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
