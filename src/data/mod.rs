//! Core data models for the standings CLI
//!
//! This module contains the serde types that mirror the football-data.org
//! standings payload. Rows arrive pre-sorted by competition rank; nothing in
//! this crate re-sorts them.

pub mod standings;

pub use standings::{FetchError, StandingsClient, StandingsSource};

use serde::{Deserialize, Serialize};

/// Top-level standings payload for one competition
///
/// The API returns several standings groups (total, home, away); the first
/// group carries the overall league table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsResponse {
    /// Standings groups in API order; the first is the overall table
    pub standings: Vec<StandingGroup>,
}

/// One standings group holding a ranked table of team rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingGroup {
    /// Team rows, pre-sorted by position
    pub table: Vec<TeamRow>,
}

/// A single ranked row in the standings table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRow {
    /// Rank in the table, starting at 1
    pub position: u32,
    /// The team this row describes
    pub team: Team,
    /// Points accumulated
    pub points: i32,
    /// Games played so far
    pub played_games: u32,
    /// Games won
    pub won: u32,
    /// Games drawn
    pub draw: u32,
    /// Games lost
    pub lost: u32,
    /// Goals scored
    pub goals_for: i32,
    /// Goals conceded
    pub goals_against: i32,
    /// Goal difference (scored minus conceded)
    pub goal_difference: i32,
}

/// Team identification within a row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Short display name (e.g. "São Paulo")
    pub short_name: String,
}

impl StandingsResponse {
    /// Returns the rows of the overall league table
    ///
    /// Empty when the payload carries no standings groups.
    pub fn rows(&self) -> &[TeamRow] {
        self.standings.first().map(|g| g.table.as_slice()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> &'static str {
        r#"{
            "standings": [
                {
                    "table": [
                        {
                            "position": 1,
                            "team": {"shortName": "Botafogo"},
                            "points": 45,
                            "playedGames": 20,
                            "won": 14,
                            "draw": 3,
                            "lost": 3,
                            "goalsFor": 38,
                            "goalsAgainst": 15,
                            "goalDifference": 23
                        },
                        {
                            "position": 2,
                            "team": {"shortName": "São Paulo"},
                            "points": 40,
                            "playedGames": 20,
                            "won": 12,
                            "draw": 4,
                            "lost": 4,
                            "goalsFor": 30,
                            "goalsAgainst": 18,
                            "goalDifference": 12
                        }
                    ]
                }
            ]
        }"#
    }

    #[test]
    fn test_deserialize_standings_payload() {
        let response: StandingsResponse =
            serde_json::from_str(sample_payload()).expect("Payload should deserialize");

        let rows = response.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[0].team.short_name, "Botafogo");
        assert_eq!(rows[0].points, 45);
        assert_eq!(rows[0].played_games, 20);
        assert_eq!(rows[0].goal_difference, 23);
    }

    #[test]
    fn test_rows_preserves_input_order() {
        let response: StandingsResponse = serde_json::from_str(sample_payload()).unwrap();

        let positions: Vec<u32> = response.rows().iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2]);
    }

    #[test]
    fn test_rows_empty_when_no_standings_groups() {
        let response: StandingsResponse =
            serde_json::from_str(r#"{"standings": []}"#).expect("Should deserialize");

        assert!(response.rows().is_empty());
    }

    #[test]
    fn test_non_ascii_team_name_preserved() {
        let response: StandingsResponse = serde_json::from_str(sample_payload()).unwrap();

        assert_eq!(response.rows()[1].team.short_name, "São Paulo");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let payload = r#"{
            "filters": {"season": "2024"},
            "standings": [
                {
                    "stage": "REGULAR_SEASON",
                    "table": [
                        {
                            "position": 1,
                            "team": {"shortName": "Fortaleza", "crest": "http://x/f.png"},
                            "points": 10,
                            "playedGames": 5,
                            "won": 3,
                            "draw": 1,
                            "lost": 1,
                            "goalsFor": 9,
                            "goalsAgainst": 4,
                            "goalDifference": 5,
                            "form": "W,W,D"
                        }
                    ]
                }
            ]
        }"#;

        let response: StandingsResponse =
            serde_json::from_str(payload).expect("Extra fields should not break parsing");
        assert_eq!(response.rows().len(), 1);
    }
}
