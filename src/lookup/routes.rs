//! Static route registry for the lookup service
//!
//! Every operation the service exposes is a fixed GET path with a declared
//! set of query parameters. The registry maps each [`Endpoint`] to its path
//! and parameter table at compile time; there is no runtime mutation and no
//! fallible lookup. Paths are kept exactly as the service publishes them,
//! including the handful of irregular ones (noted on the individual
//! definitions).

/// A single declared query parameter of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub required: bool,
}

/// Static definition of one endpoint: symbolic name, request path and the
/// declared parameter set in attachment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointSpec {
    pub name: &'static str,
    pub path: &'static str,
    pub params: &'static [ParamSpec],
}

const fn required(name: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        required: true,
    }
}

const fn optional(name: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        required: false,
    }
}

/// The closed set of lookup-service operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    PlayerSearch,
    PlayerInfo,
    PlayerTeams,
    SeasonHittingStats,
    SeasonPitchingStats,
    CareerHittingStats,
    CareerPitchingStats,
    LeagueHittingStats,
    LeaguePitchingStats,
    ProjectedHittingStats,
    ProjectedPitchingStats,
    TeamsBySeason,
    FortyManRoster,
    RosterBySeasons,
    InfoPerGame,
    TransactionsOverPeriod,
    BroadcastsOverPeriod,
    HittingLeaders,
    PitchingLeaders,
    CurrentInjuries,
}

// Player data
static PLAYER_SEARCH: EndpointSpec = EndpointSpec {
    name: "player_search",
    path: "/json/named.search_player_all.bam",
    params: &[optional("active_sw"), required("name_part")],
};

static PLAYER_INFO: EndpointSpec = EndpointSpec {
    name: "player_info",
    path: "/json/named.player_info.bam",
    params: &[required("player_id")],
};

// The teams-played-for route sits directly under the host, outside the
// shared prefix.
static PLAYER_TEAMS: EndpointSpec = EndpointSpec {
    name: "player_teams",
    path: "/player_teams.bam",
    params: &[optional("season"), required("player_id")],
};

// Stats data
static SEASON_HITTING_STATS: EndpointSpec = EndpointSpec {
    name: "season_hitting_stats",
    path: "/json/named.sport_hitting_tm.bam",
    params: &[
        required("game_type"),
        required("season"),
        required("player_id"),
    ],
};

static SEASON_PITCHING_STATS: EndpointSpec = EndpointSpec {
    name: "season_pitching_stats",
    path: "/json/named.sport_pitching_tm.bam",
    params: &[
        required("game_type"),
        required("season"),
        required("player_id"),
    ],
};

static CAREER_HITTING_STATS: EndpointSpec = EndpointSpec {
    name: "career_hitting_stats",
    path: "/json/named.sport_career_hitting.bam",
    params: &[required("game_type"), required("player_id")],
};

static CAREER_PITCHING_STATS: EndpointSpec = EndpointSpec {
    name: "career_pitching_stats",
    path: "/json/named.sport_career_pitching.bam",
    params: &[required("game_type"), required("player_id")],
};

static LEAGUE_HITTING_STATS: EndpointSpec = EndpointSpec {
    name: "league_hitting_stats",
    path: "/json/named.sport_career_hitting_lg.bam",
    params: &[required("game_type"), required("player_id")],
};

// The league pitching route has no .bam suffix on the service side.
static LEAGUE_PITCHING_STATS: EndpointSpec = EndpointSpec {
    name: "league_pitching_stats",
    path: "/json/named.sport_career_pitching_lg",
    params: &[required("game_type"), required("player_id")],
};

// The projection routes are crossed on the service side: hitting
// projections are served from the pitching-named route and vice versa.
static PROJECTED_HITTING_STATS: EndpointSpec = EndpointSpec {
    name: "projected_hitting_stats",
    path: "/json/named.proj_pecota_pitching.bam",
    params: &[optional("season"), required("player_id")],
};

static PROJECTED_PITCHING_STATS: EndpointSpec = EndpointSpec {
    name: "projected_pitching_stats",
    path: "/json/named.proj_pecota_batting.bam",
    params: &[optional("season"), required("player_id")],
};

// Team data
static TEAMS_BY_SEASON: EndpointSpec = EndpointSpec {
    name: "teams_by_season",
    path: "/json/named.team_all_season.bam",
    params: &[
        optional("all_star_sw"),
        optional("sort_order"),
        required("season"),
    ],
};

static FORTY_MAN_ROSTER: EndpointSpec = EndpointSpec {
    name: "forty_man_roster",
    path: "/json/named.roster_40.bam",
    params: &[required("team_id")],
};

static ROSTER_BY_SEASONS: EndpointSpec = EndpointSpec {
    name: "roster_by_seasons",
    path: "/json/named.roster_team_alltime.bam",
    params: &[
        required("start_season"),
        required("end_season"),
        required("team_id"),
    ],
};

// Game data
static INFO_PER_GAME: EndpointSpec = EndpointSpec {
    name: "info_per_game",
    path: "/json/named.org_game_type_date_info.bam",
    params: &[required("game_type"), required("season")],
};

// Reports
static TRANSACTIONS_OVER_PERIOD: EndpointSpec = EndpointSpec {
    name: "transactions_over_period",
    path: "/json/named.transaction_all.bam",
    params: &[required("start_date"), required("end_date")],
};

static BROADCASTS_OVER_PERIOD: EndpointSpec = EndpointSpec {
    name: "broadcasts_over_period",
    path: "/json/named.mlb_broadcast_info.bam",
    params: &[
        optional("sort_by"),
        optional("home_away"),
        optional("start_date"),
        optional("end_date"),
        required("season"),
    ],
};

static HITTING_LEADERS: EndpointSpec = EndpointSpec {
    name: "hitting_leaders",
    path: "/json/named.leader_hitting_repeater.bam",
    params: &[
        required("results"),
        required("game_type"),
        required("season"),
        required("sort_column"),
        optional("leader_hitting_repeater.col_in"),
    ],
};

static PITCHING_LEADERS: EndpointSpec = EndpointSpec {
    name: "pitching_leaders",
    path: "/json/named.leader_pitching_repeater.bam",
    params: &[
        required("results"),
        required("game_type"),
        required("season"),
        required("sort_column"),
        optional("leader_pitching_repeater.col_in"),
    ],
};

// Fantasy. This route lives under the /fantasylookup/json prefix fragment
// in front of the shared prefix rather than replacing it.
static CURRENT_INJURIES: EndpointSpec = EndpointSpec {
    name: "current_injuries",
    path: "/fantasylookup/json/json/named./wsfb_news_injury.bam",
    params: &[],
};

impl Endpoint {
    /// Every endpoint the service exposes, in catalog order.
    pub const ALL: [Endpoint; 20] = [
        Endpoint::PlayerSearch,
        Endpoint::PlayerInfo,
        Endpoint::PlayerTeams,
        Endpoint::SeasonHittingStats,
        Endpoint::SeasonPitchingStats,
        Endpoint::CareerHittingStats,
        Endpoint::CareerPitchingStats,
        Endpoint::LeagueHittingStats,
        Endpoint::LeaguePitchingStats,
        Endpoint::ProjectedHittingStats,
        Endpoint::ProjectedPitchingStats,
        Endpoint::TeamsBySeason,
        Endpoint::FortyManRoster,
        Endpoint::RosterBySeasons,
        Endpoint::InfoPerGame,
        Endpoint::TransactionsOverPeriod,
        Endpoint::BroadcastsOverPeriod,
        Endpoint::HittingLeaders,
        Endpoint::PitchingLeaders,
        Endpoint::CurrentInjuries,
    ];

    /// The static definition for this endpoint.
    pub fn spec(self) -> &'static EndpointSpec {
        match self {
            Endpoint::PlayerSearch => &PLAYER_SEARCH,
            Endpoint::PlayerInfo => &PLAYER_INFO,
            Endpoint::PlayerTeams => &PLAYER_TEAMS,
            Endpoint::SeasonHittingStats => &SEASON_HITTING_STATS,
            Endpoint::SeasonPitchingStats => &SEASON_PITCHING_STATS,
            Endpoint::CareerHittingStats => &CAREER_HITTING_STATS,
            Endpoint::CareerPitchingStats => &CAREER_PITCHING_STATS,
            Endpoint::LeagueHittingStats => &LEAGUE_HITTING_STATS,
            Endpoint::LeaguePitchingStats => &LEAGUE_PITCHING_STATS,
            Endpoint::ProjectedHittingStats => &PROJECTED_HITTING_STATS,
            Endpoint::ProjectedPitchingStats => &PROJECTED_PITCHING_STATS,
            Endpoint::TeamsBySeason => &TEAMS_BY_SEASON,
            Endpoint::FortyManRoster => &FORTY_MAN_ROSTER,
            Endpoint::RosterBySeasons => &ROSTER_BY_SEASONS,
            Endpoint::InfoPerGame => &INFO_PER_GAME,
            Endpoint::TransactionsOverPeriod => &TRANSACTIONS_OVER_PERIOD,
            Endpoint::BroadcastsOverPeriod => &BROADCASTS_OVER_PERIOD,
            Endpoint::HittingLeaders => &HITTING_LEADERS,
            Endpoint::PitchingLeaders => &PITCHING_LEADERS,
            Endpoint::CurrentInjuries => &CURRENT_INJURIES,
        }
    }

    /// Symbolic name, used in log lines and error messages.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Request path under the base URI.
    pub fn path(self) -> &'static str {
        self.spec().path
    }

    /// Builds the full request URL for this endpoint.
    ///
    /// # Example
    /// ```
    /// use mlb_lookup::Endpoint;
    ///
    /// let url = Endpoint::PlayerInfo.url("http://lookup-service-prod.mlb.com");
    /// assert_eq!(
    ///     url,
    ///     "http://lookup-service-prod.mlb.com/json/named.player_info.bam"
    /// );
    /// ```
    pub fn url(self, base_uri: &str) -> String {
        format!("{}{}", base_uri.trim_end_matches('/'), self.path())
    }
}
