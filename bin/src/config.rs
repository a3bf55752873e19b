use std::env;
use std::time::Duration;
use pass_in_attendees::passin::{ApiConfig, PASS_IN_BASE_URL, PASS_IN_EVENT_ID, PASS_IN_TIMEOUT};

pub const DEFAULT_BIND_ADDRESS: &'static str = "127.0.0.1:8088";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind_address: String,
    pub api: ApiConfig
}

fn setting<F: Fn(&str) -> Option<String>>(lookup: &F, name: &str, default: &str) -> String {
    lookup(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

fn timeout_setting<F: Fn(&str) -> Option<String>>(lookup: &F, name: &str, default: Duration) -> Duration {
    let raw = setting(lookup, name, "");
    match raw.parse::<u64>() {
        Ok(seconds) if seconds > 0 => Duration::from_secs(seconds),
        _ if raw.is_empty() => default,
        _ => {
            warn!("Ignoring {}={}, expected a positive number of seconds", name, raw);
            default
        }
    }
}

fn settings_from<F: Fn(&str) -> Option<String>>(lookup: F) -> Settings {
    Settings {
        bind_address: setting(&lookup, "BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
        api: ApiConfig {
            base_url: setting(&lookup, "PASS_IN_BASE_URL", PASS_IN_BASE_URL),
            event_id: setting(&lookup, "PASS_IN_EVENT_ID", PASS_IN_EVENT_ID),
            timeout: timeout_setting(&lookup, "PASS_IN_TIMEOUT_SECS", PASS_IN_TIMEOUT),
        }
    }
}

pub fn from_env() -> Settings {
    settings_from(|name| env::var(name).ok())
}
