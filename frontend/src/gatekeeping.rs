//! Enabling the comment form's submit control.

use crate::{
    config::ElementIds,
    dom::{DomError, Page},
};

/// The control is disabled only for an exactly empty value; whitespace counts
/// as content.
pub fn submit_disabled(value: &str) -> bool {
    value.is_empty()
}

/// Recompute the submit control from the text field. Returns the new disabled
/// state.
pub fn update_submit_state(page: &mut impl Page, ids: &ElementIds) -> Result<bool, DomError> {
    let disabled = submit_disabled(&page.value(&ids.text_input)?);
    page.set_disabled(&ids.submit_button, disabled)?;
    Ok(disabled)
}
