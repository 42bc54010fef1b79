//! Per-endpoint request types
//!
//! One struct per lookup-service operation, with the operation's declared
//! parameter set: required parameters are plain fields, optional ones are
//! `Option` and are only attached when set. Each type knows its endpoint
//! and serializes itself into [`QueryParams`] in declared order, so the
//! request surface stays typed while the dispatch underneath is table
//! driven.
//!
//! `game_type` values are single-letter codes passed through verbatim:
//! 'R' regular season, 'S' spring training, 'E' exhibition, 'A' all-star
//! game, 'D' division series, 'F' first round (wild card), 'L' league
//! championship, 'W' world series.

use crate::lookup::query::QueryParams;
use crate::lookup::routes::Endpoint;

/// A typed request for one lookup-service endpoint.
pub trait LookupRequest {
    /// The endpoint this request targets.
    const ENDPOINT: Endpoint;

    /// Serializes the request into query parameters, in declared order.
    fn into_query(self) -> QueryParams;
}

/// Search for active and historic players by name.
///
/// Set `active_sw` to `"Y"` to search active players only and `"N"` for
/// inactive players; leaving it unset searches both at the cost of a
/// slower response. `name_part` supports a trailing `%` wildcard, e.g.
/// `"cespedes%"`.
#[derive(Debug, Clone)]
pub struct PlayerSearch {
    pub active_sw: Option<String>,
    pub name_part: String,
}

impl LookupRequest for PlayerSearch {
    const ENDPOINT: Endpoint = Endpoint::PlayerSearch;

    fn into_query(self) -> QueryParams {
        let mut query = QueryParams::new();
        if let Some(active_sw) = self.active_sw {
            query.set("active_sw", active_sw);
        }
        query.set("name_part", self.name_part);
        query
    }
}

/// General information on a player: name variants, education, country of
/// origin, height, weight and age. `player_id` example: `"493316"`.
#[derive(Debug, Clone)]
pub struct PlayerInfo {
    pub player_id: String,
}

impl LookupRequest for PlayerInfo {
    const ENDPOINT: Endpoint = Endpoint::PlayerInfo;

    fn into_query(self) -> QueryParams {
        QueryParams::new().with("player_id", self.player_id)
    }
}

/// The teams a player has played for over a season, or their career when
/// `season` is unset.
#[derive(Debug, Clone)]
pub struct PlayerTeams {
    pub season: Option<String>,
    pub player_id: String,
}

impl LookupRequest for PlayerTeams {
    const ENDPOINT: Endpoint = Endpoint::PlayerTeams;

    fn into_query(self) -> QueryParams {
        let mut query = QueryParams::new();
        if let Some(season) = self.season {
            query.set("season", season);
        }
        query.set("player_id", self.player_id);
        query
    }
}

/// A player's hitting stats for a given season and game type.
#[derive(Debug, Clone)]
pub struct SeasonHittingStats {
    pub game_type: String,
    pub season: String,
    pub player_id: String,
}

impl LookupRequest for SeasonHittingStats {
    const ENDPOINT: Endpoint = Endpoint::SeasonHittingStats;

    fn into_query(self) -> QueryParams {
        QueryParams::new()
            .with("game_type", self.game_type)
            .with("season", self.season)
            .with("player_id", self.player_id)
    }
}

/// A player's pitching stats for a given season and game type.
#[derive(Debug, Clone)]
pub struct SeasonPitchingStats {
    pub game_type: String,
    pub season: String,
    pub player_id: String,
}

impl LookupRequest for SeasonPitchingStats {
    const ENDPOINT: Endpoint = Endpoint::SeasonPitchingStats;

    fn into_query(self) -> QueryParams {
        QueryParams::new()
            .with("game_type", self.game_type)
            .with("season", self.season)
            .with("player_id", self.player_id)
    }
}

/// A player's career hitting stats for a given game type.
#[derive(Debug, Clone)]
pub struct CareerHittingStats {
    pub game_type: String,
    pub player_id: String,
}

impl LookupRequest for CareerHittingStats {
    const ENDPOINT: Endpoint = Endpoint::CareerHittingStats;

    fn into_query(self) -> QueryParams {
        QueryParams::new()
            .with("game_type", self.game_type)
            .with("player_id", self.player_id)
    }
}

/// A player's career pitching stats for a given game type.
#[derive(Debug, Clone)]
pub struct CareerPitchingStats {
    pub game_type: String,
    pub player_id: String,
}

impl LookupRequest for CareerPitchingStats {
    const ENDPOINT: Endpoint = Endpoint::CareerPitchingStats;

    fn into_query(self) -> QueryParams {
        QueryParams::new()
            .with("game_type", self.game_type)
            .with("player_id", self.player_id)
    }
}

/// Career hitting stats split by league.
#[derive(Debug, Clone)]
pub struct LeagueHittingStats {
    pub game_type: String,
    pub player_id: String,
}

impl LookupRequest for LeagueHittingStats {
    const ENDPOINT: Endpoint = Endpoint::LeagueHittingStats;

    fn into_query(self) -> QueryParams {
        QueryParams::new()
            .with("game_type", self.game_type)
            .with("player_id", self.player_id)
    }
}

/// Career pitching stats split by league.
#[derive(Debug, Clone)]
pub struct LeaguePitchingStats {
    pub game_type: String,
    pub player_id: String,
}

impl LookupRequest for LeaguePitchingStats {
    const ENDPOINT: Endpoint = Endpoint::LeaguePitchingStats;

    fn into_query(self) -> QueryParams {
        QueryParams::new()
            .with("game_type", self.game_type)
            .with("player_id", self.player_id)
    }
}

/// Projected hitting stats for a season. Omitting `season` returns the
/// actual stats for the player's earliest major league season.
#[derive(Debug, Clone)]
pub struct ProjectedHittingStats {
    pub season: Option<String>,
    pub player_id: String,
}

impl LookupRequest for ProjectedHittingStats {
    const ENDPOINT: Endpoint = Endpoint::ProjectedHittingStats;

    fn into_query(self) -> QueryParams {
        let mut query = QueryParams::new();
        if let Some(season) = self.season {
            query.set("season", season);
        }
        query.set("player_id", self.player_id);
        query
    }
}

/// Projected pitching stats for a season. Omitting `season` returns the
/// actual stats for the player's earliest major league season.
#[derive(Debug, Clone)]
pub struct ProjectedPitchingStats {
    pub season: Option<String>,
    pub player_id: String,
}

impl LookupRequest for ProjectedPitchingStats {
    const ENDPOINT: Endpoint = Endpoint::ProjectedPitchingStats;

    fn into_query(self) -> QueryParams {
        let mut query = QueryParams::new();
        if let Some(season) = self.season {
            query.set("season", season);
        }
        query.set("player_id", self.player_id);
        query
    }
}

/// The major league teams active during a season. Set `all_star_sw` to
/// `"Y"` for all-star team data; `sort_order` sorts results by a named
/// field, e.g. `"name_asc"`.
#[derive(Debug, Clone)]
pub struct TeamsBySeason {
    pub all_star_sw: Option<String>,
    pub sort_order: Option<String>,
    pub season: String,
}

impl LookupRequest for TeamsBySeason {
    const ENDPOINT: Endpoint = Endpoint::TeamsBySeason;

    fn into_query(self) -> QueryParams {
        let mut query = QueryParams::new();
        if let Some(all_star_sw) = self.all_star_sw {
            query.set("all_star_sw", all_star_sw);
        }
        if let Some(sort_order) = self.sort_order {
            query.set("sort_order", sort_order);
        }
        query.set("season", self.season);
        query
    }
}

/// A team's 40-man roster. `team_id` example: `"121"`.
#[derive(Debug, Clone)]
pub struct FortyManRoster {
    pub team_id: String,
}

impl LookupRequest for FortyManRoster {
    const ENDPOINT: Endpoint = Endpoint::FortyManRoster;

    fn into_query(self) -> QueryParams {
        QueryParams::new().with("team_id", self.team_id)
    }
}

/// A team's roster between a start and end season. Pass the same season
/// for both bounds to get a single season's roster.
#[derive(Debug, Clone)]
pub struct RosterBySeasons {
    pub start_season: String,
    pub end_season: String,
    pub team_id: String,
}

impl LookupRequest for RosterBySeasons {
    const ENDPOINT: Endpoint = Endpoint::RosterBySeasons;

    fn into_query(self) -> QueryParams {
        QueryParams::new()
            .with("start_season", self.start_season)
            .with("end_season", self.end_season)
            .with("team_id", self.team_id)
    }
}

/// Date information for one or more game types in a season.
#[derive(Debug, Clone)]
pub struct InfoPerGame {
    pub game_type: String,
    pub season: String,
}

impl LookupRequest for InfoPerGame {
    const ENDPOINT: Endpoint = Endpoint::InfoPerGame;

    fn into_query(self) -> QueryParams {
        QueryParams::new()
            .with("game_type", self.game_type)
            .with("season", self.season)
    }
}

/// All transactions in a period. Dates are in YYYYMMDD format, e.g.
/// `"20171201"`.
#[derive(Debug, Clone)]
pub struct TransactionsOverPeriod {
    pub start_date: String,
    pub end_date: String,
}

impl LookupRequest for TransactionsOverPeriod {
    const ENDPOINT: Endpoint = Endpoint::TransactionsOverPeriod;

    fn into_query(self) -> QueryParams {
        QueryParams::new()
            .with("start_date", self.start_date)
            .with("end_date", self.end_date)
    }
}

/// Broadcast information over a period. `home_away` takes `"H"` for home
/// games and `"A"` for away games; unset returns both. Dates are in
/// YYYYMMDD format.
#[derive(Debug, Clone)]
pub struct BroadcastsOverPeriod {
    pub sort_by: Option<String>,
    pub home_away: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub season: String,
}

impl LookupRequest for BroadcastsOverPeriod {
    const ENDPOINT: Endpoint = Endpoint::BroadcastsOverPeriod;

    fn into_query(self) -> QueryParams {
        let mut query = QueryParams::new();
        if let Some(sort_by) = self.sort_by {
            query.set("sort_by", sort_by);
        }
        if let Some(home_away) = self.home_away {
            query.set("home_away", home_away);
        }
        if let Some(start_date) = self.start_date {
            query.set("start_date", start_date);
        }
        if let Some(end_date) = self.end_date {
            query.set("end_date", end_date);
        }
        query.set("season", self.season);
        query
    }
}

/// The top `results` leaders for a hitting statistic. `sort_column` names
/// the statistic, e.g. `"ab"`; `leader_hitting_repeater` prunes the
/// response to the named columns and is sent as
/// `leader_hitting_repeater.col_in`.
#[derive(Debug, Clone)]
pub struct HittingLeaders {
    pub results: u32,
    pub game_type: String,
    pub season: String,
    pub sort_column: String,
    pub leader_hitting_repeater: Option<String>,
}

impl LookupRequest for HittingLeaders {
    const ENDPOINT: Endpoint = Endpoint::HittingLeaders;

    fn into_query(self) -> QueryParams {
        let mut query = QueryParams::new()
            .with("results", self.results.to_string())
            .with("game_type", self.game_type)
            .with("season", self.season)
            .with("sort_column", self.sort_column);
        if let Some(columns) = self.leader_hitting_repeater {
            query.set("leader_hitting_repeater.col_in", columns);
        }
        query
    }
}

/// The top `results` leaders for a pitching statistic. `sort_column` names
/// the statistic, e.g. `"era"`; `leader_pitching_repeater` prunes the
/// response to the named columns and is sent as
/// `leader_pitching_repeater.col_in`.
#[derive(Debug, Clone)]
pub struct PitchingLeaders {
    pub results: u32,
    pub game_type: String,
    pub season: String,
    pub sort_column: String,
    pub leader_pitching_repeater: Option<String>,
}

impl LookupRequest for PitchingLeaders {
    const ENDPOINT: Endpoint = Endpoint::PitchingLeaders;

    fn into_query(self) -> QueryParams {
        let mut query = QueryParams::new()
            .with("results", self.results.to_string())
            .with("game_type", self.game_type)
            .with("season", self.season)
            .with("sort_column", self.sort_column);
        if let Some(columns) = self.leader_pitching_repeater {
            query.set("leader_pitching_repeater.col_in", columns);
        }
        query
    }
}

/// All currently injured players. Takes no parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentInjuries;

impl LookupRequest for CurrentInjuries {
    const ENDPOINT: Endpoint = Endpoint::CurrentInjuries;

    fn into_query(self) -> QueryParams {
        QueryParams::new()
    }
}
