//! season segments and stat fields
//!
//! the whitelists the stats api accepts, plus the validators the client
//! runs before any request leaves the process.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// season segments accepted by `playerStatLeaders`
pub const SEASON_SEGMENTS: [&str; 3] = ["regular", "post", "champSeries"];

/// stat fields accepted by `playerStatLeaders`, in canonical order
pub const PLAYER_STATISTICS: [&str; 21] = [
    "points",
    "onePointGoals",
    "twoPointGoals",
    "scoringPoints",
    "assists",
    "shots",
    "pointsPG",
    "onePointGoalsPG",
    "assistsPG",
    "shotsPG",
    "shotPct",
    "touches",
    "faceoffPct",
    "faceoffWinsPG",
    "touchesPG",
    "savesPG",
    "savePct",
    "causedTurnovers",
    "causedTurnoversPG",
    "groundBalls",
    "groundBallsPG",
];

/// phase of competition a stat applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeasonSegment {
    Regular,
    Post,
    ChampSeries,
}

impl SeasonSegment {
    /// every segment, in whitelist order
    pub const ALL: [SeasonSegment; 3] = [
        SeasonSegment::Regular,
        SeasonSegment::Post,
        SeasonSegment::ChampSeries,
    ];

    /// wire name of the segment
    pub fn as_str(self) -> &'static str {
        match self {
            SeasonSegment::Regular => "regular",
            SeasonSegment::Post => "post",
            SeasonSegment::ChampSeries => "champSeries",
        }
    }
}

impl fmt::Display for SeasonSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeasonSegment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SeasonSegment::ALL
            .into_iter()
            .find(|segment| segment.as_str() == s)
            .ok_or_else(|| Error::InvalidSegment {
                segment: s.to_string(),
            })
    }
}

/// check that `segment` is one of [`SEASON_SEGMENTS`]
pub fn validate_season_segment(segment: &str) -> Result<()> {
    segment.parse::<SeasonSegment>().map(|_| ())
}

/// check that every entry of `fields` is one of [`PLAYER_STATISTICS`]
///
/// a list equal to [`PLAYER_STATISTICS`] (same entries, same order) is
/// accepted without looking at individual entries. anything else is
/// checked entry by entry and the first unknown field is reported.
pub fn validate_stat_fields<S: AsRef<str>>(fields: &[S]) -> Result<()> {
    if is_canonical(fields) {
        return Ok(());
    }

    match fields
        .iter()
        .map(|field| field.as_ref())
        .find(|field| !PLAYER_STATISTICS.contains(field))
    {
        Some(field) => Err(Error::InvalidStat {
            field: field.to_string(),
        }),
        None => Ok(()),
    }
}

fn is_canonical<S: AsRef<str>>(fields: &[S]) -> bool {
    fields.len() == PLAYER_STATISTICS.len()
        && fields
            .iter()
            .zip(PLAYER_STATISTICS)
            .all(|(field, canonical)| field.as_ref() == canonical)
}
