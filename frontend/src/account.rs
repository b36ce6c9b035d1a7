//! Login state shown in the page header.

use portfolio_adapters::Credentials;

use crate::{
    config::ElementIds,
    dom::{DomError, Page},
};

pub fn login_label(is_logged_in: bool) -> &'static str {
    if is_logged_in {
        "Log out"
    } else {
        "Log in"
    }
}

pub fn render_account(
    page: &mut impl Page,
    ids: &ElementIds,
    credentials: &Credentials,
) -> Result<(), DomError> {
    page.set_text(&ids.nickname, &credentials.nickname)?;
    page.set_attribute(&ids.login_link, "href", &credentials.authentication_url)?;
    page.set_text(&ids.login_link, login_label(credentials.is_logged_in))
}
