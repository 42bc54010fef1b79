//! Crate-wide constants and configuration defaults
//!
//! This module centralizes the fixed service coordinates and HTTP client
//! defaults so they are defined in exactly one place.

/// Base URI of the public MLB lookup service. Every endpoint is a GET
/// against a fixed path under this host.
pub const BASE_URI: &str = "http://lookup-service-prod.mlb.com";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;
