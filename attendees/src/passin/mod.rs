use std::time::Duration;

pub mod errors;

pub mod model;
pub mod attendees;

pub const PASS_IN_BASE_URL: &'static str = "https://pass-in-server.onrender.com";
pub const PASS_IN_EVENT_ID: &'static str = "9e9bd979-9d10-4915-b339-3786b1634f33";
pub const PASS_IN_TIMEOUT: Duration = Duration::from_secs(10);

/// Location of the attendee list endpoint of a pass-in server
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub event_id: String,
    /// Upper bound for a whole attendee page request
    pub timeout: Duration
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig { base_url: PASS_IN_BASE_URL.to_owned(), event_id: PASS_IN_EVENT_ID.to_owned(), timeout: PASS_IN_TIMEOUT }
    }
}
