//! Thin async client for the public MLB lookup-service stats API
//!
//! Every operation the service exposes is a fixed HTTP GET: this crate
//! composes the query string, issues the request, asserts an expected
//! status code (200 unless told otherwise) and returns the raw response
//! for the caller to inspect. Response bodies are never parsed and
//! nothing is retried or cached.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mlb_lookup::{LookupClient, LookupError, PlayerSearch};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), LookupError> {
//!     let client = LookupClient::new()?;
//!
//!     // Search for active players; None asserts a 200 response.
//!     let response = client
//!         .player_search(
//!             PlayerSearch {
//!                 active_sw: Some("Y".to_string()),
//!                 name_part: "cespedes%".to_string(),
//!             },
//!             None,
//!         )
//!         .await?;
//!
//!     println!("{}", response.body);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod lookup;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::LookupError;
pub use lookup::client::LookupClient;
pub use lookup::dispatch::ApiResponse;
pub use lookup::params::{
    BroadcastsOverPeriod, CareerHittingStats, CareerPitchingStats, CurrentInjuries,
    FortyManRoster, HittingLeaders, InfoPerGame, LeagueHittingStats, LeaguePitchingStats,
    LookupRequest, PitchingLeaders, PlayerInfo, PlayerSearch, PlayerTeams,
    ProjectedHittingStats, ProjectedPitchingStats, RosterBySeasons, SeasonHittingStats,
    SeasonPitchingStats, TeamsBySeason, TransactionsOverPeriod,
};
pub use lookup::query::QueryParams;
pub use lookup::routes::{Endpoint, EndpointSpec, ParamSpec};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
