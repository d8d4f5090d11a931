//! Role and accessible-name element lookup
//!
//! Finds controls the way a user perceives them: by ARIA role and
//! accessible name, not by markup-specific selectors.

use chromiumoxide::element::Element;
use chromiumoxide::page::Page;

use crate::core::{CheckError, Result};

/// CSS candidates for controls with role "button"
const BUTTON_SELECTOR: &str =
    "button, [role=\"button\"], input[type=\"button\"], input[type=\"submit\"]";

/// Find the first control with role "button" and the given accessible name
///
/// The accessible name is approximated, in priority order, by the
/// `aria-label` attribute, the element's visible text, and the `value`
/// attribute (for `input` buttons). Matching is exact after trimming.
pub async fn find_button(page: &Page, name: &str) -> Result<Element> {
    let candidates = page.find_elements(BUTTON_SELECTOR).await?;
    let candidate_count = candidates.len();

    for element in candidates {
        let aria_label = element.attribute("aria-label").await?;
        let text = element.inner_text().await?;
        let value = element.attribute("value").await?;

        if accessible_name_matches(
            aria_label.as_deref(),
            text.as_deref(),
            value.as_deref(),
            name,
        ) {
            return Ok(element);
        }
    }

    Err(CheckError::element(format!(
        "no button with accessible name \"{}\" ({} button candidates on page)",
        name, candidate_count
    )))
}

/// Whether a control's accessible name matches `wanted`
///
/// The first non-empty source defines the name; later sources are not
/// consulted as fallbacks once a name exists.
fn accessible_name_matches(
    aria_label: Option<&str>,
    text: Option<&str>,
    value: Option<&str>,
    wanted: &str,
) -> bool {
    let name = [aria_label, text, value]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty());

    match name {
        Some(name) => name == wanted.trim(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_by_text() {
        assert!(accessible_name_matches(None, Some("Edit"), None, "Edit"));
        assert!(accessible_name_matches(None, Some("  Edit \n"), None, "Edit"));
        assert!(!accessible_name_matches(None, Some("Edit Expense"), None, "Edit"));
    }

    #[test]
    fn test_aria_label_takes_priority() {
        assert!(accessible_name_matches(
            Some("Update Expense"),
            Some("Save"),
            None,
            "Update Expense"
        ));
        // A non-empty aria-label defines the name even if the text matches.
        assert!(!accessible_name_matches(
            Some("Save"),
            Some("Edit"),
            None,
            "Edit"
        ));
    }

    #[test]
    fn test_value_used_for_input_buttons() {
        assert!(accessible_name_matches(None, None, Some("Edit"), "Edit"));
        assert!(accessible_name_matches(None, Some(""), Some("Edit"), "Edit"));
    }

    #[test]
    fn test_nameless_control_never_matches() {
        assert!(!accessible_name_matches(None, None, None, "Edit"));
        assert!(!accessible_name_matches(Some("  "), Some(""), None, "Edit"));
    }
}
