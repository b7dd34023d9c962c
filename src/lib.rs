//! premier lacrosse league stats client
//!
//! this crate provides a small, typed client for the pll statistics graphql
//! api. start with [`Client`] and [`ClientConfig`], then call
//! [`Client::standings`] or [`Client::player_stats`]. season segments and
//! stat names are checked locally before a request is sent.
//!
//! ## quick start
//!
//! ```no_run
//! use pll::{Client, ClientConfig, PLAYER_STATISTICS};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(ClientConfig::new("token"))?;
//! let cancel = CancellationToken::new();
//!
//! let standings = client.standings(2023, false, &cancel).await?;
//! println!("{:?}", standings.standings.first());
//!
//! let leaders = client
//!     .player_stats(2024, 5, "regular", &PLAYER_STATISTICS, &cancel)
//!     .await?;
//! println!("{} leaders", leaders.player_stat_leaders.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## cancellation
//!
//! every call takes a [`tokio_util::sync::CancellationToken`]. cancelling it
//! before or during a call yields [`Error::Cancelled`].

mod client;
mod config;
mod error;
mod graphql;
mod models;
mod operation;
mod queries;
mod registry;
mod request;

pub use client::Client;
pub use config::{ClientConfig, ENDPOINT_ENV, GRAPHQL_ENDPOINT, TOKEN_ENV};
pub use error::{Error, ErrorKind, Result};
pub use graphql::{GraphQlError, GraphQlLocation, GraphQlResponse};
pub use models::{
    AllTeamsResponse, ChampSeriesTeamStats, Coach, PlayerStatLeader, PlayerStatsResponse,
    Standing, StandingsResponse, Team, TeamStatLine, TeamSummary,
};
pub use operation::Operation;
pub use queries::{PlayerStatLeaders, PlayerStatLeadersVariables, Standings, StandingsVariables};
pub use registry::{
    validate_season_segment, validate_stat_fields, SeasonSegment, PLAYER_STATISTICS,
    SEASON_SEGMENTS,
};
pub use request::GraphQlRequest;
