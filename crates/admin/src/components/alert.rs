//! Transient alert shown after a save.
//!
//! Form posts redirect back with `?alert=<message>&status=<flag>`; the page
//! shows the alert once and its dismiss link drops both parameters.

use crate::actions::Outcome;

/// Tone of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertTone {
    Success,
    #[default]
    Failed,
}

impl AlertTone {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }

    /// Tone named by the `status` query parameter; anything but
    /// `success` reads as a failure.
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some(value) if value.eq_ignore_ascii_case("success") => Self::Success,
            _ => Self::Failed,
        }
    }
}

/// A message displayed until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub tone: AlertTone,
    /// Where the dismiss link points: the current page without the alert.
    pub dismiss_href: String,
}

impl Alert {
    /// Build the alert from query parameters, if a message is present.
    #[must_use]
    pub fn from_query(
        message: Option<&str>,
        status: Option<&str>,
        dismiss_href: &str,
    ) -> Option<Self> {
        let message = message.map(str::trim).filter(|m| !m.is_empty())?;
        Some(Self {
            message: message.to_string(),
            tone: AlertTone::from_param(status),
            dismiss_href: dismiss_href.to_string(),
        })
    }

    /// CSS class for the alert box.
    #[must_use]
    pub fn css_class(&self) -> String {
        format!("alert alert-{}", self.tone.as_str())
    }
}

/// Redirect target carrying a message back to `path`.
#[must_use]
pub fn redirect_with_alert(path: &str, message: &str, tone: AlertTone) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!(
        "{path}{separator}alert={}&status={}",
        urlencoding::encode(message),
        tone.as_str()
    )
}

impl From<Outcome> for AlertTone {
    fn from(outcome: Outcome) -> Self {
        if outcome.succeeded() {
            Self::Success
        } else {
            Self::Failed
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_message_shows_nothing() {
        assert!(Alert::from_query(Some("  "), None, "/admin/shop").is_none());
        assert!(Alert::from_query(None, Some("success"), "/admin/shop").is_none());
    }

    #[test]
    fn test_alert_defaults_to_failed_tone() {
        let alert = Alert::from_query(Some("Please provide the title"), None, "/admin/shop").unwrap();
        assert_eq!(alert.tone, AlertTone::Failed);
        assert_eq!(alert.css_class(), "alert alert-failed");

        let alert = Alert::from_query(Some("Page hero updated"), Some("success"), "/admin/shop").unwrap();
        assert_eq!(alert.tone, AlertTone::Success);
    }

    #[test]
    fn test_redirect_encodes_message() {
        assert_eq!(
            redirect_with_alert("/admin/shop", "Page hero updated", AlertTone::Success),
            "/admin/shop?alert=Page%20hero%20updated&status=success"
        );
        assert_eq!(
            redirect_with_alert("/admin/shop?page=2", "Error updating page hero", AlertTone::Failed),
            "/admin/shop?page=2&alert=Error%20updating%20page%20hero&status=failed"
        );
    }
}
