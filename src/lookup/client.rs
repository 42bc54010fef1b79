//! Lookup service client
//!
//! [`LookupClient`] owns a pooled HTTP client configured from [`Config`]
//! and exposes one thin wrapper method per endpoint, all funneling into
//! the table-driven dispatcher. Wrappers take an optional expected status
//! (`None` asserts 200); `broadcasts_over_period` is the exception and
//! always requires one.

use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::config::Config;
use crate::constants;
use crate::error::LookupError;
use crate::lookup::dispatch::{ApiResponse, dispatch};
use crate::lookup::params::{
    BroadcastsOverPeriod, CareerHittingStats, CareerPitchingStats, CurrentInjuries,
    FortyManRoster, HittingLeaders, InfoPerGame, LeagueHittingStats, LeaguePitchingStats,
    LookupRequest, PitchingLeaders, PlayerInfo, PlayerSearch, PlayerTeams,
    ProjectedHittingStats, ProjectedPitchingStats, RosterBySeasons, SeasonHittingStats,
    SeasonPitchingStats, TeamsBySeason, TransactionsOverPeriod,
};
use crate::lookup::query::QueryParams;
use crate::lookup::routes::Endpoint;

/// Creates the HTTP client with the configured request timeout and
/// connection pooling.
fn build_http_client(timeout_seconds: u64) -> Result<Client, LookupError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
        .map_err(LookupError::Http)
}

/// Client for the MLB lookup service.
///
/// Cheap to clone; the inner HTTP client shares its connection pool
/// across clones. Each call issues exactly one outbound GET and holds no
/// state between calls.
#[derive(Debug, Clone)]
pub struct LookupClient {
    http: Client,
    config: Config,
}

impl LookupClient {
    /// Creates a client from environment-driven configuration.
    pub fn new() -> Result<Self, LookupError> {
        Self::with_config(Config::from_env()?)
    }

    /// Creates a client from an explicit configuration.
    pub fn with_config(config: Config) -> Result<Self, LookupError> {
        config.validate()?;
        let http = build_http_client(config.http_timeout_seconds)?;
        Ok(Self { http, config })
    }

    /// The base URI requests are issued against.
    pub fn base_uri(&self) -> &str {
        &self.config.base_uri
    }

    /// Dispatches a typed request, asserting `expected_status` (`None`
    /// asserts 200).
    pub async fn call<R: LookupRequest>(
        &self,
        request: R,
        expected_status: Option<StatusCode>,
    ) -> Result<ApiResponse, LookupError> {
        let expected = expected_status.unwrap_or(StatusCode::OK);
        self.request(R::ENDPOINT, request.into_query(), expected)
            .await
    }

    /// Low-level escape hatch: dispatches hand-built query parameters
    /// against an endpoint. Parameters are validated against the
    /// endpoint's declared table before the request is issued.
    pub async fn request(
        &self,
        endpoint: Endpoint,
        query: QueryParams,
        expected_status: StatusCode,
    ) -> Result<ApiResponse, LookupError> {
        dispatch(
            &self.http,
            &self.config.base_uri,
            endpoint,
            &query,
            expected_status,
        )
        .await
    }

    // Player data

    /// Search for active and historic players by name.
    pub async fn player_search(
        &self,
        query: PlayerSearch,
        expected_status: Option<StatusCode>,
    ) -> Result<ApiResponse, LookupError> {
        self.call(query, expected_status).await
    }

    /// General information on a player.
    pub async fn player_info(
        &self,
        query: PlayerInfo,
        expected_status: Option<StatusCode>,
    ) -> Result<ApiResponse, LookupError> {
        self.call(query, expected_status).await
    }

    /// The teams a player has played for over a season, or their career.
    pub async fn player_teams(
        &self,
        query: PlayerTeams,
        expected_status: Option<StatusCode>,
    ) -> Result<ApiResponse, LookupError> {
        self.call(query, expected_status).await
    }

    // Stats data

    /// A player's hitting stats for a given season.
    pub async fn season_hitting_stats(
        &self,
        query: SeasonHittingStats,
        expected_status: Option<StatusCode>,
    ) -> Result<ApiResponse, LookupError> {
        self.call(query, expected_status).await
    }

    /// A player's pitching stats for a given season.
    pub async fn season_pitching_stats(
        &self,
        query: SeasonPitchingStats,
        expected_status: Option<StatusCode>,
    ) -> Result<ApiResponse, LookupError> {
        self.call(query, expected_status).await
    }

    /// A player's career hitting stats for a given game type.
    pub async fn career_hitting_stats(
        &self,
        query: CareerHittingStats,
        expected_status: Option<StatusCode>,
    ) -> Result<ApiResponse, LookupError> {
        self.call(query, expected_status).await
    }

    /// A player's career pitching stats for a given game type.
    pub async fn career_pitching_stats(
        &self,
        query: CareerPitchingStats,
        expected_status: Option<StatusCode>,
    ) -> Result<ApiResponse, LookupError> {
        self.call(query, expected_status).await
    }

    /// Career hitting stats split by league.
    pub async fn league_hitting_stats(
        &self,
        query: LeagueHittingStats,
        expected_status: Option<StatusCode>,
    ) -> Result<ApiResponse, LookupError> {
        self.call(query, expected_status).await
    }

    /// Career pitching stats split by league.
    pub async fn league_pitching_stats(
        &self,
        query: LeaguePitchingStats,
        expected_status: Option<StatusCode>,
    ) -> Result<ApiResponse, LookupError> {
        self.call(query, expected_status).await
    }

    /// Projected hitting stats for a season.
    pub async fn projected_hitting_stats(
        &self,
        query: ProjectedHittingStats,
        expected_status: Option<StatusCode>,
    ) -> Result<ApiResponse, LookupError> {
        self.call(query, expected_status).await
    }

    /// Projected pitching stats for a season.
    pub async fn projected_pitching_stats(
        &self,
        query: ProjectedPitchingStats,
        expected_status: Option<StatusCode>,
    ) -> Result<ApiResponse, LookupError> {
        self.call(query, expected_status).await
    }

    // Team data

    /// The major league teams active during a season.
    pub async fn teams_by_season(
        &self,
        query: TeamsBySeason,
        expected_status: Option<StatusCode>,
    ) -> Result<ApiResponse, LookupError> {
        self.call(query, expected_status).await
    }

    /// A team's 40-man roster.
    pub async fn forty_man_roster(
        &self,
        query: FortyManRoster,
        expected_status: Option<StatusCode>,
    ) -> Result<ApiResponse, LookupError> {
        self.call(query, expected_status).await
    }

    /// A team's roster between a start and end season.
    pub async fn roster_by_seasons(
        &self,
        query: RosterBySeasons,
        expected_status: Option<StatusCode>,
    ) -> Result<ApiResponse, LookupError> {
        self.call(query, expected_status).await
    }

    // Game data

    /// Date information for one or more game types in a season.
    pub async fn info_per_game(
        &self,
        query: InfoPerGame,
        expected_status: Option<StatusCode>,
    ) -> Result<ApiResponse, LookupError> {
        self.call(query, expected_status).await
    }

    // Reports

    /// All transactions in a period.
    pub async fn transactions_over_period(
        &self,
        query: TransactionsOverPeriod,
        expected_status: Option<StatusCode>,
    ) -> Result<ApiResponse, LookupError> {
        self.call(query, expected_status).await
    }

    /// Broadcast information over a period. Unlike every other endpoint
    /// the expected status has no default here; the caller must always
    /// supply one.
    pub async fn broadcasts_over_period(
        &self,
        query: BroadcastsOverPeriod,
        expected_status: StatusCode,
    ) -> Result<ApiResponse, LookupError> {
        self.request(
            Endpoint::BroadcastsOverPeriod,
            query.into_query(),
            expected_status,
        )
        .await
    }

    /// The top leaders for a hitting statistic.
    pub async fn hitting_leaders(
        &self,
        query: HittingLeaders,
        expected_status: Option<StatusCode>,
    ) -> Result<ApiResponse, LookupError> {
        self.call(query, expected_status).await
    }

    /// The top leaders for a pitching statistic.
    pub async fn pitching_leaders(
        &self,
        query: PitchingLeaders,
        expected_status: Option<StatusCode>,
    ) -> Result<ApiResponse, LookupError> {
        self.call(query, expected_status).await
    }

    // Fantasy

    /// All currently injured players.
    pub async fn current_injuries(
        &self,
        expected_status: Option<StatusCode>,
    ) -> Result<ApiResponse, LookupError> {
        self.call(CurrentInjuries, expected_status).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_client(base_uri: &str) -> LookupClient {
        LookupClient::with_config(Config {
            base_uri: base_uri.to_string(),
            http_timeout_seconds: constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
        })
        .expect("Failed to create test client")
    }

    #[test]
    fn test_with_config_rejects_invalid_config() {
        let result = LookupClient::with_config(Config {
            base_uri: "lookup-service-prod.mlb.com".to_string(),
            http_timeout_seconds: 30,
        });
        assert!(matches!(result, Err(LookupError::Config(_))));
    }

    #[test]
    fn test_base_uri_accessor() {
        let client = create_test_client("http://localhost:8080");
        assert_eq!(client.base_uri(), "http://localhost:8080");
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        // Nothing listens on port 1; the request must surface as a
        // connection failure, not a status mismatch.
        let client = create_test_client("http://127.0.0.1:1");
        let result = client
            .player_info(
                PlayerInfo {
                    player_id: "493316".to_string(),
                },
                None,
            )
            .await;

        match result {
            Err(error) => {
                assert!(error.is_transport(), "unexpected error: {error:?}");
                assert!(!error.is_status_mismatch());
            }
            Ok(_) => panic!("Expected a transport failure"),
        }
    }

    #[tokio::test]
    async fn test_request_validates_before_sending() {
        // Validation failures must not depend on a reachable service.
        let client = create_test_client("http://127.0.0.1:1");
        let result = client
            .request(
                Endpoint::FortyManRoster,
                QueryParams::new(),
                StatusCode::OK,
            )
            .await;

        assert!(matches!(
            result,
            Err(LookupError::MissingParam {
                endpoint: "forty_man_roster",
                param: "team_id"
            })
        ));
    }
}
