//! Formatting helpers shared by pages and actions.

use serde::Serialize;
use url::Url;

use crate::campaign::parse_campaign_date;

/// Format a stored date as `January 15, 2024`.
///
/// The date is read on its UTC calendar day. Input that is not a date is
/// returned unchanged so it still shows up in tables.
#[must_use]
pub fn format_date(value: &str) -> String {
    parse_campaign_date(value).map_or_else(
        || value.to_string(),
        |date| date.format("%B %-d, %Y").to_string(),
    )
}

/// Upper-case the first character and leave the rest untouched.
#[must_use]
pub fn capitalize_first_letter(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Label for a stored enum value: `PUBLISHED` becomes `Published`,
/// `FEATURED_COLLECTION` becomes `Featured_collection`.
#[must_use]
pub fn chip_label(value: &str) -> String {
    capitalize_first_letter(&value.to_lowercase())
}

/// Colour tone of a status chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChipTone {
    Published,
    Draft,
    Visible,
    Hidden,
    Neutral,
}

impl ChipTone {
    /// Tone for a stored status value (case-insensitive).
    #[must_use]
    pub fn for_value(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "published" => Self::Published,
            "draft" => Self::Draft,
            "visible" => Self::Visible,
            "hidden" => Self::Hidden,
            _ => Self::Neutral,
        }
    }

    /// CSS class suffix used by the templates.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Published => "chip-published",
            Self::Draft => "chip-draft",
            Self::Visible => "chip-visible",
            Self::Hidden => "chip-hidden",
            Self::Neutral => "chip-neutral",
        }
    }
}

/// Check that `value` points at a remotely hosted image we are willing to
/// render.
///
/// The URL must be absolute `http(s)` with a host. When `allowed_hosts` is
/// non-empty the host must match one entry exactly (case-insensitive).
#[must_use]
pub fn is_valid_remote_image(value: &str, allowed_hosts: &[String]) -> bool {
    let Ok(url) = Url::parse(value.trim()) else {
        return false;
    };

    if !matches!(url.scheme(), "https" | "http") {
        return false;
    }

    let Some(host) = url.host_str() else {
        return false;
    };

    allowed_hosts.is_empty()
        || allowed_hosts
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(host))
}

/// Status code constant with its default message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCode {
    pub code: u16,
    pub message: &'static str,
}

impl StatusCode {
    pub const SUCCESS: Self = Self {
        code: 200,
        message: "Success",
    };
    pub const CREATED: Self = Self {
        code: 201,
        message: "Created",
    };
    pub const BAD_REQUEST: Self = Self {
        code: 400,
        message: "Bad request",
    };
    pub const UNAUTHORIZED: Self = Self {
        code: 401,
        message: "Unauthorized",
    };
    pub const FORBIDDEN: Self = Self {
        code: 403,
        message: "Forbidden",
    };
    pub const NOT_FOUND: Self = Self {
        code: 404,
        message: "Not found",
    };
    pub const INTERNAL_SERVER_ERROR: Self = Self {
        code: 500,
        message: "Internal server error",
    };
}

/// Whether an action succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFlag {
    Success,
    Failed,
}

/// Status block of an [`ActionResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionStatus {
    pub code: u16,
    pub flag: ResponseFlag,
    pub message: String,
}

/// JSON envelope returned by the update endpoints.
///
/// ```json
/// { "status": { "code": 200, "flag": "success", "message": "Product updated" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResponse {
    pub status: ActionStatus,
}

impl ActionResponse {
    /// Build a response; the flag is `success` only for [`StatusCode::SUCCESS`].
    #[must_use]
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        let flag = if code == StatusCode::SUCCESS.code {
            ResponseFlag::Success
        } else {
            ResponseFlag::Failed
        };

        Self {
            status: ActionStatus {
                code,
                flag,
                message: message.into(),
            },
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status.flag, ResponseFlag::Success)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_long_form() {
        assert_eq!(format_date("2024-01-05"), "January 5, 2024");
        assert_eq!(format_date("2023-12-31T23:30:00Z"), "December 31, 2023");
    }

    #[test]
    fn test_format_date_passes_through_garbage() {
        assert_eq!(format_date("TBD"), "TBD");
    }

    #[test]
    fn test_capitalize_first_letter() {
        assert_eq!(capitalize_first_letter("published"), "Published");
        assert_eq!(capitalize_first_letter("already Fine"), "Already Fine");
        assert_eq!(capitalize_first_letter(""), "");
        assert_eq!(capitalize_first_letter("élan"), "Élan");
    }

    #[test]
    fn test_chip_label_lowercases_rest() {
        assert_eq!(chip_label("HIDDEN"), "Hidden");
        assert_eq!(chip_label("PROMOTIONAL_BANNER"), "Promotional_banner");
    }

    #[test]
    fn test_chip_tone() {
        assert_eq!(ChipTone::for_value("PUBLISHED"), ChipTone::Published);
        assert_eq!(ChipTone::for_value("hidden"), ChipTone::Hidden);
        assert_eq!(ChipTone::for_value("archived"), ChipTone::Neutral);
    }

    #[test]
    fn test_remote_image_requires_absolute_http_url() {
        let any: Vec<String> = vec![];
        assert!(is_valid_remote_image("https://cdn.example.com/a.jpg", &any));
        assert!(is_valid_remote_image("http://cdn.example.com/a.jpg", &any));
        assert!(!is_valid_remote_image("/images/a.jpg", &any));
        assert!(!is_valid_remote_image("ftp://cdn.example.com/a.jpg", &any));
        assert!(!is_valid_remote_image("data:image/png;base64,AAAA", &any));
        assert!(!is_valid_remote_image("", &any));
    }

    #[test]
    fn test_remote_image_honours_allowlist() {
        let allowed = vec!["firebasestorage.googleapis.com".to_string()];
        assert!(is_valid_remote_image(
            "https://FirebaseStorage.googleapis.com/v0/b/shop/o/hero.png",
            &allowed
        ));
        assert!(!is_valid_remote_image(
            "https://evil.example.com/hero.png",
            &allowed
        ));
    }

    #[test]
    fn test_action_response_flag() {
        let ok = ActionResponse::new(StatusCode::SUCCESS.code, "Product updated");
        assert!(ok.is_success());

        let failed = ActionResponse::new(StatusCode::INTERNAL_SERVER_ERROR.code, "nope");
        assert_eq!(failed.status.flag, ResponseFlag::Failed);

        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["status"]["flag"], "success");
        assert_eq!(json["status"]["code"], 200);
    }
}
