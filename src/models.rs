//! response models
//!
//! typed payloads decoded from the `data` member of a graphql response.

use serde::{Deserialize, Deserializer, Serialize};

/// team identity as embedded in standings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(deserialize_with = "null_default")]
    pub official_id: String,
    #[serde(deserialize_with = "null_default")]
    pub full_name: String,
    pub location: Option<String>,
    pub location_code: Option<String>,
    /// url to the team logo image
    pub url_logo: Option<String>,
}

/// one team's standing for a season.
///
/// the server sends either the regular fields (`wins` .. `score_diff`) or
/// the championship series fields (`cs_wins` .. `cs_score_diff`) depending
/// on the `champSeries` flag, so both groups are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub team: Team,
    pub seed: Option<i64>,

    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub ties: Option<i64>,
    pub scores: Option<i64>,
    pub scores_against: Option<i64>,
    pub score_diff: Option<i64>,

    pub cs_wins: Option<i64>,
    pub cs_losses: Option<i64>,
    pub cs_ties: Option<i64>,
    pub cs_scores: Option<i64>,
    pub cs_scores_against: Option<i64>,
    pub cs_score_diff: Option<i64>,

    pub conference_wins: Option<i64>,
    pub conference_losses: Option<i64>,
    pub conference_ties: Option<i64>,
    pub conference_scores: Option<i64>,
    pub conference_scores_against: Option<i64>,
    pub conference: Option<String>,
    pub conference_seed: Option<i64>,
}

/// payload of the standings query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsResponse {
    pub standings: Vec<Standing>,
}

/// a player's rank and value for one requested stat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatLeader {
    #[serde(deserialize_with = "null_default")]
    pub official_id: String,
    pub profile_url: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_default")]
    pub last_name: String,
    pub position: Option<String>,
    pub stat_type: String,
    pub slug: Option<String>,
    /// formatted by the server, e.g. "0.524" for percentages
    #[serde(deserialize_with = "null_default")]
    pub stat_value: String,
    pub player_rank: i64,
    pub jersey_num: Option<String>,
    pub team_id: Option<String>,
    pub year: i64,
}

impl PlayerStatLeader {
    /// "first last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// payload of the player stat leaders query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsResponse {
    pub player_stat_leaders: Vec<PlayerStatLeader>,
}

impl PlayerStatsResponse {
    /// leaders for a single stat, in the order the server ranked them
    pub fn leaders_for<'a>(
        &'a self,
        stat: &'a str,
    ) -> impl Iterator<Item = &'a PlayerStatLeader> + 'a {
        self.player_stat_leaders
            .iter()
            .filter(move |leader| leader.stat_type == stat)
    }
}

// team stats are decoded but no query in the catalog requests them.

/// payload shape of an `allTeams` query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllTeamsResponse {
    pub all_teams: Vec<TeamSummary>,
}

/// a team with its season record and aggregate stats
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamSummary {
    #[serde(deserialize_with = "null_default")]
    pub official_id: String,
    pub location_code: Option<String>,
    pub location: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub full_name: String,
    pub url_logo: Option<String>,
    pub slogan: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub team_wins: i64,
    #[serde(deserialize_with = "null_default")]
    pub team_losses: i64,
    #[serde(deserialize_with = "null_default")]
    pub team_ties: i64,
    #[serde(deserialize_with = "null_default")]
    pub team_wins_post: i64,
    #[serde(deserialize_with = "null_default")]
    pub team_losses_post: i64,
    #[serde(deserialize_with = "null_default")]
    pub team_ties_post: i64,
    pub league: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub coaches: Vec<Coach>,
    pub stats: Option<TeamStatLine>,
    pub post_stats: Option<TeamStatLine>,
    pub champ_series: Option<ChampSeriesTeamStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Coach {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub coach_type: String,
}

/// championship series record and stats
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChampSeriesTeamStats {
    #[serde(deserialize_with = "null_default")]
    pub team_wins: i64,
    #[serde(deserialize_with = "null_default")]
    pub team_losses: i64,
    #[serde(deserialize_with = "null_default")]
    pub team_ties: i64,
    pub stats: Option<TeamStatLine>,
}

/// aggregate team stats for one season segment.
///
/// rates and per-game values are floats; the server sends whole numbers
/// for them when they happen to be integral, which decode fine as `f64`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamStatLine {
    #[serde(deserialize_with = "null_default")]
    pub games_played: i64,
    #[serde(deserialize_with = "null_default")]
    pub scores: i64,
    #[serde(deserialize_with = "null_default")]
    pub scores_against: i64,
    #[serde(deserialize_with = "null_default")]
    pub goals: i64,
    #[serde(deserialize_with = "null_default")]
    pub one_point_goals: i64,
    #[serde(deserialize_with = "null_default")]
    pub two_point_goals: i64,
    #[serde(deserialize_with = "null_default")]
    pub goals_against: i64,
    #[serde(deserialize_with = "null_default")]
    pub two_point_goals_against: i64,
    #[serde(deserialize_with = "null_default")]
    pub assists: i64,
    #[serde(deserialize_with = "null_default")]
    pub shots: i64,
    #[serde(deserialize_with = "null_default")]
    pub shots_on_goal: i64,
    #[serde(deserialize_with = "null_default")]
    pub two_point_shots: i64,
    #[serde(deserialize_with = "null_default")]
    pub two_point_shots_on_goal: i64,
    #[serde(deserialize_with = "null_default")]
    pub ground_balls: i64,
    #[serde(deserialize_with = "null_default")]
    pub turnovers: i64,
    #[serde(deserialize_with = "null_default")]
    pub caused_turnovers: i64,
    #[serde(deserialize_with = "null_default")]
    pub faceoffs: i64,
    #[serde(deserialize_with = "null_default")]
    pub faceoffs_won: i64,
    #[serde(deserialize_with = "null_default")]
    pub faceoffs_lost: i64,
    #[serde(deserialize_with = "null_default")]
    pub num_penalties: i64,
    #[serde(deserialize_with = "null_default")]
    pub clears: i64,
    #[serde(deserialize_with = "null_default")]
    pub clear_attempts: i64,
    #[serde(deserialize_with = "null_default")]
    pub rides: i64,
    #[serde(deserialize_with = "null_default")]
    pub ride_attempts: i64,
    #[serde(deserialize_with = "null_default")]
    pub saves: i64,
    #[serde(deserialize_with = "null_default")]
    pub offsides: i64,
    #[serde(deserialize_with = "null_default")]
    pub shot_clock_expirations: i64,
    #[serde(deserialize_with = "null_default")]
    pub power_play_goals: i64,
    #[serde(deserialize_with = "null_default")]
    pub power_play_shots: i64,
    #[serde(deserialize_with = "null_default")]
    pub short_handed_goals: i64,
    #[serde(deserialize_with = "null_default")]
    pub short_handed_shots: i64,
    #[serde(deserialize_with = "null_default")]
    pub short_handed_shots_against: i64,
    #[serde(deserialize_with = "null_default")]
    pub short_handed_goals_against: i64,
    #[serde(deserialize_with = "null_default")]
    pub power_play_goals_against: i64,
    #[serde(deserialize_with = "null_default")]
    pub power_play_shots_against: i64,
    #[serde(deserialize_with = "null_default")]
    pub times_man_up: i64,
    #[serde(deserialize_with = "null_default")]
    pub times_short_handed: i64,
    #[serde(deserialize_with = "null_default")]
    pub total_passes: i64,
    #[serde(deserialize_with = "null_default")]
    pub touches: i64,

    #[serde(deserialize_with = "null_default")]
    pub faceoff_pct: f64,
    #[serde(deserialize_with = "null_default")]
    pub shot_pct: f64,
    #[serde(deserialize_with = "null_default")]
    pub two_point_shot_pct: f64,
    #[serde(deserialize_with = "null_default")]
    pub two_point_shots_on_goal_pct: f64,
    #[serde(deserialize_with = "null_default")]
    pub shots_on_goal_pct: f64,
    #[serde(deserialize_with = "null_default")]
    pub clear_pct: f64,
    #[serde(deserialize_with = "null_default")]
    pub rides_pct: f64,
    #[serde(deserialize_with = "null_default")]
    pub save_pct: f64,
    #[serde(deserialize_with = "null_default")]
    pub short_handed_pct: f64,
    #[serde(deserialize_with = "null_default")]
    pub short_handed_goals_against_pct: f64,
    #[serde(deserialize_with = "null_default")]
    pub power_play_pct: f64,
    #[serde(deserialize_with = "null_default")]
    pub power_play_goals_against_pct: f64,
    #[serde(deserialize_with = "null_default")]
    pub man_down_pct: f64,
    #[serde(deserialize_with = "null_default")]
    pub saa: f64,
    #[serde(deserialize_with = "null_default")]
    pub pim: f64,
    #[serde(rename = "scoresPG", deserialize_with = "null_default")]
    pub scores_pg: f64,
    #[serde(rename = "shotsPG", deserialize_with = "null_default")]
    pub shots_pg: f64,
}

/// decode `null` as the type's default value
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_standing_regular_season() {
        let standing: Standing = serde_json::from_value(json!({
            "team": {
                "officialId": "ARC",
                "location": "Boston",
                "locationCode": "BOS",
                "urlLogo": "https://img.example/arc.png",
                "fullName": "Archers Lacrosse Club"
            },
            "seed": 1,
            "wins": 8,
            "losses": 2,
            "ties": 0,
            "scores": 130,
            "scoresAgainst": 101,
            "scoreDiff": 29,
            "conferenceWins": 4,
            "conferenceLosses": 1,
            "conferenceTies": 0,
            "conferenceScores": 60,
            "conferenceScoresAgainst": 48,
            "conference": "Eastern",
            "conferenceSeed": 1
        }))
        .unwrap();

        assert_eq!(standing.team.full_name, "Archers Lacrosse Club");
        assert_eq!(standing.seed, Some(1));
        assert_eq!(standing.wins, Some(8));
        assert_eq!(standing.score_diff, Some(29));
        assert_eq!(standing.cs_wins, None);
        assert_eq!(standing.conference.as_deref(), Some("Eastern"));
    }

    #[test]
    fn test_standing_champ_series_with_nulls() {
        let standing: Standing = serde_json::from_value(json!({
            "team": {
                "officialId": "WAT",
                "location": null,
                "locationCode": null,
                "urlLogo": null,
                "fullName": "Waterdogs Lacrosse Club"
            },
            "seed": 3,
            "csWins": 2,
            "csLosses": 1,
            "csTies": 0,
            "csScores": 40,
            "csScoresAgainst": 33,
            "csScoreDiff": 7,
            "conferenceWins": 0,
            "conferenceLosses": 0,
            "conferenceTies": 0,
            "conferenceScores": 0,
            "conferenceScoresAgainst": 0,
            "conference": null,
            "conferenceSeed": null
        }))
        .unwrap();

        assert_eq!(standing.wins, None);
        assert_eq!(standing.cs_wins, Some(2));
        assert_eq!(standing.cs_score_diff, Some(7));
        assert_eq!(standing.team.location, None);
        assert_eq!(standing.conference_seed, None);
    }

    #[test]
    fn test_player_stat_leaders() {
        let response: PlayerStatsResponse = serde_json::from_value(json!({
            "playerStatLeaders": [
                {
                    "officialId": "p1",
                    "profileUrl": null,
                    "firstName": "Jeff",
                    "lastName": "Teat",
                    "position": "A",
                    "statType": "points",
                    "slug": "jeff-teat",
                    "statValue": "45",
                    "playerRank": 1,
                    "jerseyNum": "7",
                    "teamId": "RED",
                    "year": 2024
                },
                {
                    "officialId": "p2",
                    "profileUrl": null,
                    "firstName": "Trevor",
                    "lastName": "Baptiste",
                    "position": "FO",
                    "statType": "faceoffPct",
                    "slug": "trevor-baptiste",
                    "statValue": "0.681",
                    "playerRank": 1,
                    "jerseyNum": "9",
                    "teamId": "WHP",
                    "year": 2024
                }
            ]
        }))
        .unwrap();

        assert_eq!(response.player_stat_leaders.len(), 2);
        assert_eq!(response.player_stat_leaders[0].full_name(), "Jeff Teat");
        let faceoffs: Vec<_> = response.leaders_for("faceoffPct").collect();
        assert_eq!(faceoffs.len(), 1);
        assert_eq!(faceoffs[0].stat_value, "0.681");
        assert_eq!(response.leaders_for("assists").count(), 0);
    }

    #[test]
    fn test_team_stats_decode() {
        let response: AllTeamsResponse = serde_json::from_value(json!({
            "allTeams": [{
                "officialId": "CHA",
                "fullName": "Chaos Lacrosse Club",
                "teamWins": 6,
                "teamLosses": 4,
                "coaches": [{"name": "Andy Towers", "coachType": "head"}],
                "stats": {
                    "gamesPlayed": 10,
                    "scores": 120,
                    "faceoffPct": 0.48,
                    "savePct": 1,
                    "scoresPG": 12
                },
                "postStats": {
                    "gamesPlayed": 1,
                    "clearPct": 1,
                    "scoresPG": 9.0
                },
                "champSeries": {
                    "teamWins": 1,
                    "stats": {"pim": 2}
                }
            }]
        }))
        .unwrap();

        let team = &response.all_teams[0];
        assert_eq!(team.full_name, "Chaos Lacrosse Club");
        assert_eq!(team.coaches[0].coach_type, "head");
        assert_eq!(team.team_ties, 0);

        let stats = team.stats.as_ref().unwrap();
        assert_eq!(stats.games_played, 10);
        assert_eq!(stats.save_pct, 1.0);
        assert_eq!(stats.scores_pg, 12.0);
        assert_eq!(team.post_stats.as_ref().unwrap().clear_pct, 1.0);

        let cs = team.champ_series.as_ref().unwrap();
        assert_eq!(cs.team_wins, 1);
        assert_eq!(cs.stats.as_ref().unwrap().pim, 2.0);
    }

    #[test]
    fn test_null_scalars_decode_as_defaults() {
        let line: TeamStatLine = serde_json::from_value(json!({
            "gamesPlayed": 3,
            "saves": null,
            "savePct": null,
            "scoresPG": null
        }))
        .unwrap();
        assert_eq!(line.games_played, 3);
        assert_eq!(line.saves, 0);
        assert_eq!(line.save_pct, 0.0);
        assert_eq!(line.scores_pg, 0.0);

        let team: TeamSummary = serde_json::from_value(json!({
            "officialId": "CAN",
            "fullName": null,
            "teamWins": null,
            "coaches": null,
            "champSeries": {"teamWins": null, "stats": {"pim": null}}
        }))
        .unwrap();
        assert_eq!(team.full_name, "");
        assert_eq!(team.team_wins, 0);
        assert!(team.coaches.is_empty());
        let cs = team.champ_series.unwrap();
        assert_eq!(cs.team_wins, 0);
        assert_eq!(cs.stats.unwrap().pim, 0.0);

        let coach: Coach =
            serde_json::from_value(json!({"name": "Tim Soudan", "coachType": null})).unwrap();
        assert_eq!(coach.coach_type, "");
    }

    #[test]
    fn test_null_names_decode_as_empty() {
        let leader: PlayerStatLeader = serde_json::from_value(json!({
            "officialId": "p3",
            "profileUrl": null,
            "firstName": "Xander",
            "lastName": null,
            "position": null,
            "statType": "shots",
            "slug": null,
            "statValue": null,
            "playerRank": 2,
            "jerseyNum": null,
            "teamId": null,
            "year": 2024
        }))
        .unwrap();
        assert_eq!(leader.last_name, "");
        assert_eq!(leader.stat_value, "");
        assert_eq!(leader.full_name(), "Xander ");

        let team: Team = serde_json::from_value(json!({
            "officialId": null,
            "fullName": "Outlaws Lacrosse Club",
            "location": null,
            "locationCode": null,
            "urlLogo": null
        }))
        .unwrap();
        assert_eq!(team.official_id, "");
    }

    #[test]
    fn test_missing_required_leader_field_fails() {
        let err = serde_json::from_value::<PlayerStatLeader>(json!({
            "officialId": "p4",
            "statType": "points",
            "playerRank": 1,
            "year": 2024
        }));
        assert!(err.is_err());
    }
}
