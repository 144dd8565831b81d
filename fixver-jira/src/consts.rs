//! Constants for the fixver Jira client

/// Base path of the Jira REST API used by all endpoints
pub const API_PATH: &str = "/rest/api/latest";

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Per-request timeout applied by [`create_jira_client`](crate::create_jira_client)
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
