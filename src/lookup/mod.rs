//! Lookup service surface: route registry, query model, typed requests,
//! client and dispatcher.

pub mod client;
pub mod dispatch;
pub mod params;
pub mod query;
pub mod routes;

pub use client::LookupClient;
pub use dispatch::ApiResponse;
pub use params::{
    BroadcastsOverPeriod, CareerHittingStats, CareerPitchingStats, CurrentInjuries,
    FortyManRoster, HittingLeaders, InfoPerGame, LeagueHittingStats, LeaguePitchingStats,
    LookupRequest, PitchingLeaders, PlayerInfo, PlayerSearch, PlayerTeams,
    ProjectedHittingStats, ProjectedPitchingStats, RosterBySeasons, SeasonHittingStats,
    SeasonPitchingStats, TeamsBySeason, TransactionsOverPeriod,
};
pub use query::QueryParams;
pub use routes::{Endpoint, EndpointSpec, ParamSpec};
