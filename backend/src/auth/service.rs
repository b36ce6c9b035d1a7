//! Core business logic for the account endpoint.
//!
//! Maps the forwarded identity (or its absence) to `Credentials`: anonymous
//! visitors get the login URL, signed-in users their email's local part and
//! the logout URL. Both URLs send the visitor back to the comments page.

use portfolio_adapters::Credentials;
use url::form_urlencoded::byte_serialize;

use crate::{config::Config, errors::AppError};

pub const ANONYMOUS: &str = "Anonymous";

pub struct AccountService {
    login_url: String,
    logout_url: String,
}

fn with_continue(base: &str, target: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    let target: String = byte_serialize(target.as_bytes()).collect();
    format!("{base}{separator}continue={target}")
}

impl AccountService {
    pub fn new(config: &Config) -> Self {
        Self {
            login_url: with_continue(&config.login_url, &config.comments_page),
            logout_url: with_continue(&config.logout_url, &config.comments_page),
        }
    }

    /// `identity` is the raw header value, e.g.
    /// `accounts.google.com:alice@example.com`.
    pub fn credentials(&self, identity: Option<&str>) -> Result<Credentials, AppError> {
        let Some(identity) = identity.map(str::trim).filter(|value| !value.is_empty()) else {
            return Ok(Credentials {
                nickname: ANONYMOUS.into(),
                authentication_url: self.login_url.clone(),
                is_logged_in: false,
            });
        };

        let email = identity
            .rsplit_once(':')
            .map_or(identity, |(_, email)| email);
        let (nickname, _) = email
            .split_once('@')
            .ok_or_else(|| AppError::InvalidIdentity(format!("{email:?} is not an email")))?;

        Ok(Credentials {
            nickname: nickname.to_string(),
            authentication_url: self.logout_url.clone(),
            is_logged_in: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn service() -> AccountService {
        AccountService::new(&Config::default())
    }

    #[test]
    fn anonymous_visitors_get_the_login_url() {
        let creds = service().credentials(None).unwrap();
        assert_eq!(
            creds,
            Credentials {
                nickname: "Anonymous".into(),
                authentication_url: "/_ah/login?continue=%2Fcomments.html".into(),
                is_logged_in: false,
            }
        );
        assert_eq!(service().credentials(Some("  ")).unwrap(), creds);
    }

    #[test]
    fn signed_in_users_get_their_local_part_and_the_logout_url() {
        let creds = service()
            .credentials(Some("accounts.google.com:ada@example.com"))
            .unwrap();
        assert_eq!(creds.nickname, "ada");
        assert_eq!(creds.authentication_url, "/_ah/logout?continue=%2Fcomments.html");
        assert!(creds.is_logged_in);
    }

    #[test]
    fn bare_emails_are_accepted() {
        let creds = service().credentials(Some("grace@example.com")).unwrap();
        assert_eq!(creds.nickname, "grace");
    }

    #[test]
    fn identities_without_an_email_are_rejected() {
        assert!(matches!(
            service().credentials(Some("accounts.google.com:nobody")),
            Err(AppError::InvalidIdentity(_))
        ));
    }

    #[test]
    fn existing_query_strings_are_extended() {
        let config = Config {
            login_url: "https://auth.example.com/login?hl=en".into(),
            ..Config::default()
        };
        let creds = AccountService::new(&config).credentials(None).unwrap();
        assert_eq!(
            creds.authentication_url,
            "https://auth.example.com/login?hl=en&continue=%2Fcomments.html"
        );
    }
}
