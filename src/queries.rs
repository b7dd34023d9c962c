//! query catalog
//!
//! the fixed graphql documents the client sends, each paired with the
//! variables it binds and the payload it decodes into.

use crate::models::{PlayerStatsResponse, StandingsResponse};
use crate::operation::Operation;
use serde::Serialize;

/// team standings for a season.
///
/// win/loss/score fields are skipped when `champSeries` is set and the
/// `cs*` variants are included instead; conference fields are always sent.
pub struct Standings;

/// variables for [`Standings`]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsVariables {
    pub year: i32,
    pub champ_series: bool,
}

impl Operation for Standings {
    const QUERY: &'static str = r#"query($year: Int!, $champSeries: Boolean!) {
  standings(season: $year, champSeries: $champSeries) {
    team {
      officialId
      location
      locationCode
      urlLogo
      fullName
    }
    seed
    wins @skip(if: $champSeries)
    losses @skip(if: $champSeries)
    ties @skip(if: $champSeries)
    scores @skip(if: $champSeries)
    scoresAgainst @skip(if: $champSeries)
    scoreDiff @skip(if: $champSeries)
    csWins @include(if: $champSeries)
    csLosses @include(if: $champSeries)
    csTies @include(if: $champSeries)
    csScores @include(if: $champSeries)
    csScoresAgainst @include(if: $champSeries)
    csScoreDiff @include(if: $champSeries)
    conferenceWins
    conferenceLosses
    conferenceTies
    conferenceScores
    conferenceScoresAgainst
    conference
    conferenceSeed
  }
}
"#;
    type Variables = StandingsVariables;
    type Response = StandingsResponse;
}

/// per-stat player leaders for a season segment.
pub struct PlayerStatLeaders;

/// variables for [`PlayerStatLeaders`]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatLeadersVariables {
    pub year: i32,
    pub season_segment: String,
    /// comma-joined stat field names
    pub stat_list: String,
    pub limit: i32,
}

impl PlayerStatLeadersVariables {
    /// bind a stat field list, joining it the way the server expects
    pub fn new<S: AsRef<str>>(year: i32, limit: i32, season_segment: &str, stats: &[S]) -> Self {
        Self {
            year,
            season_segment: season_segment.to_string(),
            stat_list: stats
                .iter()
                .map(|stat| stat.as_ref())
                .collect::<Vec<_>>()
                .join(","),
            limit,
        }
    }
}

impl Operation for PlayerStatLeaders {
    const QUERY: &'static str = r#"query($year: Int!, $seasonSegment: SeasonSegment, $statList: [String], $limit: Int) {
  playerStatLeaders(year: $year, seasonSegment: $seasonSegment, statList: $statList, limit: $limit) {
    officialId
    profileUrl
    firstName
    lastName
    position
    statType
    slug
    statValue
    playerRank
    jerseyNum
    teamId
    year
  }
}
"#;
    type Variables = PlayerStatLeadersVariables;
    type Response = PlayerStatsResponse;
}
