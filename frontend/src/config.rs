//! Runtime configuration of the page controller.
//!
//! Values come from the environment with logged defaults; element ids default
//! to the ones the portfolio page uses.

use std::{env, fmt, str::FromStr};

use tracing::{info, warn};

/// What the controller does with a failure nobody else handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Leave the page as it was and say nothing.
    Silent,
    /// Leave the page as it was and emit a `warn!` event.
    #[default]
    Log,
    /// Log, and write a short message into the status element.
    Notice,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "log" => Ok(Self::Log),
            "notice" => Ok(Self::Notice),
            other => Err(format!("unknown failure policy {other:?}")),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Silent => "silent",
            Self::Log => "log",
            Self::Notice => "notice",
        })
    }
}

/// Ids of the page elements the controller writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub comments_container: String,
    pub comment_count: String,
    pub text_input: String,
    pub submit_button: String,
    pub delete_button: String,
    pub nickname: String,
    pub login_link: String,
    pub map: String,
    pub status: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            comments_container: "comments-container".into(),
            comment_count: "comment-count".into(),
            text_input: "text-input".into(),
            submit_button: "submit-button".into(),
            delete_button: "delete-button".into(),
            nickname: "nickname".into(),
            login_link: "login-link".into(),
            map: "map".into(),
            status: "status".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    pub api_url: String,
    /// Without a key the map is left out of the bootstrap.
    pub maps_key: Option<String>,
    pub max_comments: usize,
    pub failure_policy: FailurePolicy,
    pub ids: ElementIds,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:8080".into(),
            maps_key: None,
            max_comments: 5,
            failure_policy: FailurePolicy::default(),
            ids: ElementIds::default(),
        }
    }
}

impl FrontendConfig {
    pub fn load() -> Self {
        let defaults = Self::default();
        Self {
            api_url: try_load("PORTFOLIO_API_URL", defaults.api_url),
            maps_key: env::var("PORTFOLIO_MAPS_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            max_comments: try_load("PORTFOLIO_MAX_COMMENTS", defaults.max_comments),
            failure_policy: try_load("PORTFOLIO_FAILURE_POLICY", defaults.failure_policy),
            ids: defaults.ids,
        }
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|err| {
            warn!("Invalid {key} value {raw:?}: {err}, using default: {default}");
            default
        }),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_policies_parse_case_insensitively() {
        assert_eq!("Silent".parse(), Ok(FailurePolicy::Silent));
        assert_eq!(" log ".parse(), Ok(FailurePolicy::Log));
        assert_eq!("NOTICE".parse(), Ok(FailurePolicy::Notice));
        assert!("retry".parse::<FailurePolicy>().is_err());
    }
}
