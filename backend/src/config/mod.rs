//! Central module for application-wide configuration settings.
//!
//! This module handles loading the server port, the page comment forms
//! redirect back to, the login/logout URLs handed to visitors, and the header
//! the fronting proxy uses to identify the signed-in user.

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub comments_page: String,
    pub login_url: String,
    pub logout_url: String,
    pub identity_header: String,
    pub default_max_comments: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            comments_page: "/comments.html".into(),
            login_url: "/_ah/login".into(),
            logout_url: "/_ah/logout".into(),
            identity_header: "x-goog-authenticated-user-email".into(),
            default_max_comments: 5,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let defaults = Self::default();
        Self {
            port: try_load("PORTFOLIO_PORT", defaults.port),
            comments_page: try_load("PORTFOLIO_COMMENTS_PAGE", defaults.comments_page),
            login_url: try_load("PORTFOLIO_LOGIN_URL", defaults.login_url),
            logout_url: try_load("PORTFOLIO_LOGOUT_URL", defaults.logout_url),
            identity_header: try_load::<String>("PORTFOLIO_IDENTITY_HEADER", defaults.identity_header)
                .to_ascii_lowercase(),
            default_max_comments: try_load(
                "PORTFOLIO_DEFAULT_MAX_COMMENTS",
                defaults.default_max_comments,
            ),
        }
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
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
