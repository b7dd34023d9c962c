//! main client
//!
//! one method per catalog query, plus helpers for executing any request
//! built against the stats endpoint.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::graphql::GraphQlResponse;
use crate::models::{PlayerStatsResponse, StandingsResponse};
use crate::operation::Operation;
use crate::queries::{PlayerStatLeaders, PlayerStatLeadersVariables, Standings, StandingsVariables};
use crate::registry::{validate_season_segment, validate_stat_fields};
use crate::request::GraphQlRequest;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use url::Url;

/// graphql client for the premier lacrosse league stats api
///
/// cheap to clone and safe to share; holds no per-request state.
#[derive(Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
    http: reqwest::Client,
}

impl Client {
    /// create a new client
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = config.build_http_client()?;

        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }

    /// access the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// team standings for `year`.
    ///
    /// with `champ_series` set the server returns the championship series
    /// record (`cs_*` fields) instead of the regular season one.
    pub async fn standings(
        &self,
        year: i32,
        champ_series: bool,
        cancel: &CancellationToken,
    ) -> Result<StandingsResponse> {
        self.standings_with(year, champ_series, cancel, |url, request| {
            self.send(url, request)
        })
        .await
    }

    /// stat leaders for `year` and `season_segment`, up to `limit` players
    /// per requested stat.
    ///
    /// the segment and stat names are checked against
    /// [`crate::SEASON_SEGMENTS`] and [`crate::PLAYER_STATISTICS`] before
    /// anything is sent.
    pub async fn player_stats<S: AsRef<str>>(
        &self,
        year: i32,
        limit: i32,
        season_segment: &str,
        stats: &[S],
        cancel: &CancellationToken,
    ) -> Result<PlayerStatsResponse> {
        self.player_stats_with(year, limit, season_segment, stats, cancel, |url, request| {
            self.send(url, request)
        })
        .await
    }

    /// build an authenticated request for a catalog operation
    pub fn request<O: Operation>(&self, variables: &O::Variables) -> Result<GraphQlRequest> {
        GraphQlRequest::new(O::QUERY)
            .with_variables(variables)?
            .with_bearer_token(&self.config.token)
    }

    /// execute a prepared request and deserialize into a typed response
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: GraphQlRequest,
        cancel: &CancellationToken,
    ) -> Result<GraphQlResponse<T>> {
        self.execute_with(request, cancel, |url, request| self.send(url, request))
            .await
    }

    /// execute a catalog operation and return its data payload
    pub async fn execute_operation<O: Operation>(
        &self,
        variables: &O::Variables,
        cancel: &CancellationToken,
    ) -> Result<O::Response> {
        self.operation_with::<O, _, _>(variables, cancel, |url, request| {
            self.send(url, request)
        })
        .await
    }

    async fn send(&self, url: Url, request: GraphQlRequest) -> Result<(StatusCode, String)> {
        let response = self
            .http
            .post(url)
            .headers(request.headers().clone())
            .json(&request.body())
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        Ok((status, text))
    }
}

fn parse_graphql_response<T: DeserializeOwned>(
    status: StatusCode,
    text: String,
) -> Result<GraphQlResponse<T>> {
    let parsed: GraphQlResponse<T> = match serde_json::from_str(&text) {
        Ok(parsed) => parsed,
        // non-json error pages keep their http status
        Err(_) if !status.is_success() => {
            return Err(Error::GraphQl {
                status: Some(status.as_u16()),
                errors: Vec::new(),
                body: text,
                message: format!("graphql http error: {}", status),
            });
        }
        Err(err) => return Err(err.into()),
    };
    if !parsed.errors.is_empty() {
        let message = parsed
            .errors
            .first()
            .map(|err| err.message.clone())
            .unwrap_or_else(|| "graphql error".to_string());
        tracing::warn!(
            status = status.as_u16(),
            errors = parsed.errors.len(),
            %message,
            "graphql errors in response"
        );
        return Err(Error::GraphQl {
            status: Some(status.as_u16()),
            errors: parsed.errors,
            body: text,
            message,
        });
    }

    if !status.is_success() {
        return Err(Error::GraphQl {
            status: Some(status.as_u16()),
            errors: Vec::new(),
            body: text,
            message: format!("graphql http error: {}", status),
        });
    }

    Ok(parsed)
}

impl Client {
    pub(crate) async fn standings_with<F, Fut>(
        &self,
        year: i32,
        champ_series: bool,
        cancel: &CancellationToken,
        send: F,
    ) -> Result<StandingsResponse>
    where
        F: FnOnce(Url, GraphQlRequest) -> Fut,
        Fut: Future<Output = Result<(StatusCode, String)>>,
    {
        let variables = StandingsVariables { year, champ_series };
        self.operation_with::<Standings, _, _>(&variables, cancel, send)
            .await
    }

    pub(crate) async fn player_stats_with<S, F, Fut>(
        &self,
        year: i32,
        limit: i32,
        season_segment: &str,
        stats: &[S],
        cancel: &CancellationToken,
        send: F,
    ) -> Result<PlayerStatsResponse>
    where
        S: AsRef<str>,
        F: FnOnce(Url, GraphQlRequest) -> Fut,
        Fut: Future<Output = Result<(StatusCode, String)>>,
    {
        validate_season_segment(season_segment)?;
        validate_stat_fields(stats)?;

        let variables = PlayerStatLeadersVariables::new(year, limit, season_segment, stats);
        self.operation_with::<PlayerStatLeaders, _, _>(&variables, cancel, send)
            .await
    }

    pub(crate) async fn operation_with<O: Operation, F, Fut>(
        &self,
        variables: &O::Variables,
        cancel: &CancellationToken,
        send: F,
    ) -> Result<O::Response>
    where
        F: FnOnce(Url, GraphQlRequest) -> Fut,
        Fut: Future<Output = Result<(StatusCode, String)>>,
    {
        let request = self.request::<O>(variables)?;
        self.execute_with::<O::Response, _, _>(request, cancel, send)
            .await?
            .into_data()
    }

    pub(crate) async fn execute_with<T: DeserializeOwned, F, Fut>(
        &self,
        request: GraphQlRequest,
        cancel: &CancellationToken,
        send: F,
    ) -> Result<GraphQlResponse<T>>
    where
        F: FnOnce(Url, GraphQlRequest) -> Fut,
        Fut: Future<Output = Result<(StatusCode, String)>>,
    {
        if cancel.is_cancelled() {
            tracing::debug!("graphql request cancelled before sending");
            return Err(Error::Cancelled);
        }

        let url = self.config.graphql_url()?;
        tracing::debug!(endpoint = %url, variables = ?request.variables(), "sending graphql request");

        let (status, text) = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::debug!("graphql request cancelled in flight");
                return Err(Error::Cancelled);
            }
            sent = send(url, request) => sent?,
        };

        tracing::debug!(status = status.as_u16(), bytes = text.len(), "graphql response received");
        parse_graphql_response(status, text)
    }
}
