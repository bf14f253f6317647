//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Alpha Vantage query endpoint. Every API function is selected through the
/// `function` query parameter on this single base.
pub(crate) const DEFAULT_BASE_QUERY: &str = "https://www.alphavantage.co/query";

/// API key used when the builder is given none. Alpha Vantage serves a
/// throttled demo tier for it, which is enough for smoke runs.
pub(crate) const DEMO_API_KEY: &str = "demo";
