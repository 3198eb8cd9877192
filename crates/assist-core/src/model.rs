use crate::lenient;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Classification assigned to an email by the backend analyzer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Work,
    Personal,
    Newsletter,
    Spam,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Work,
        Category::Personal,
        Category::Newsletter,
        Category::Spam,
        Category::Other,
    ];

    /// Maps a backend category label onto the fixed set, falling back to
    /// [`Category::Other`] for anything unrecognized.
    pub fn from_label(label: &str) -> Self {
        match label {
            "work" => Self::Work,
            "personal" => Self::Personal,
            "newsletter" => Self::Newsletter,
            "spam" => Self::Spam,
            _ => Self::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Newsletter => "newsletter",
            Self::Spam => "spam",
            Self::Other => "other",
        }
    }

    /// Font Awesome icon class.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Work => "fa-briefcase",
            Self::Personal => "fa-user-friends",
            Self::Newsletter => "fa-newspaper",
            Self::Spam => "fa-exclamation-triangle",
            Self::Other => "fa-question-circle",
        }
    }

    /// Bootstrap background class used for the category badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Work => "bg-info",
            Self::Personal => "bg-success",
            Self::Newsletter => "bg-primary",
            Self::Spam => "bg-danger",
            Self::Other => "bg-secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportanceLevel {
    High,
    Medium,
    Low,
}

impl ImportanceLevel {
    pub const HIGH_THRESHOLD: f64 = 0.7;
    pub const MEDIUM_THRESHOLD: f64 = 0.4;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            Self::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Card border class; the more important the email, the louder the border.
    pub fn border_class(self) -> &'static str {
        match self {
            Self::High => "border-danger",
            Self::Medium => "border-warning",
            Self::Low => "border-success",
        }
    }
}

/// Application settings as reported by `GET /api/config`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub app_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub log_level: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub email_check_interval: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub importance_threshold: Option<f64>,
}

impl Config {
    pub fn is_empty(&self) -> bool {
        self.app_name.is_none()
            && self.version.is_none()
            && self.log_level.is_none()
            && self.email_check_interval.is_none()
            && self.importance_threshold.is_none()
    }
}

/// A configured mailbox as reported by `GET /api/accounts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Account {
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email_address: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub imap_server: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub last_checked: Option<String>,
}

/// An analyzed email as reported by `GET /api/emails`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmailSummary {
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub db_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", rename = "from")]
    pub sender: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub importance: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub processed: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub date: Option<String>,
}

impl EmailSummary {
    pub fn category(&self) -> Category {
        Category::from_label(self.category.as_deref().unwrap_or_default())
    }

    /// Missing scores rank as the lowest importance.
    pub fn importance_score(&self) -> f64 {
        self.importance.unwrap_or(0.0)
    }

    pub fn importance_level(&self) -> ImportanceLevel {
        ImportanceLevel::from_score(self.importance_score())
    }
}

/// Response body shared by every backend endpoint:
/// `{ success, <payload>?, error? }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(alias = "config", alias = "accounts", alias = "emails")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Splits the envelope into its payload or the server-provided message.
    pub fn into_result(self) -> Result<Option<T>, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self
                .error
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| "Unknown error".to_string()))
        }
    }
}

/// Decodes a payload list one record at a time so a malformed entry is
/// dropped on its own. Returns the records and the number skipped.
pub fn decode_records<T: DeserializeOwned>(values: Vec<Value>) -> (Vec<T>, usize) {
    let total = values.len();
    let records: Vec<T> = values
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect();
    let skipped = total - records.len();
    (records, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_falls_back_to_other() {
        assert_eq!(Category::from_label("finance"), Category::Other);
        assert_eq!(Category::from_label(""), Category::Other);
        assert_eq!(Category::from_label("Work"), Category::Other);
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.as_str()), category);
        }
    }

    #[test]
    fn decodes_email_envelope() {
        let body = r#"{
            "success": true,
            "emails": [{
                "db_id": 4,
                "id": "<abc@example.com>",
                "from": "alice@example.com",
                "subject": "Budget",
                "body": "ignored",
                "date": "Mon, 14 Oct 2024 09:30:00 +0000",
                "importance": 0.82,
                "summary": "Needs sign-off",
                "category": "work",
                "action": "reply"
            }]
        }"#;
        let envelope: ApiEnvelope<Vec<EmailSummary>> =
            serde_json::from_str(body).expect("envelope decoded");
        let emails = envelope.into_result().expect("success").expect("payload");
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].sender.as_deref(), Some("alice@example.com"));
        assert_eq!(emails[0].category(), Category::Work);
        assert_eq!(emails[0].importance_level(), ImportanceLevel::High);
    }

    #[test]
    fn failed_envelope_carries_server_message() {
        let envelope: ApiEnvelope<Config> =
            serde_json::from_str(r#"{"success": false, "error": "database is locked"}"#)
                .expect("envelope decoded");
        assert_eq!(envelope.into_result(), Err("database is locked".to_string()));

        let envelope: ApiEnvelope<Config> =
            serde_json::from_str(r#"{"success": false}"#).expect("envelope decoded");
        assert_eq!(envelope.into_result(), Err("Unknown error".to_string()));
    }

    #[test]
    fn null_fields_are_tolerated() {
        let email: EmailSummary = serde_json::from_str(
            r#"{"subject": null, "importance": null, "category": null, "from": "bob@example.com"}"#,
        )
        .expect("email decoded");
        assert_eq!(email.importance_score(), 0.0);
        assert_eq!(email.category(), Category::Other);
        assert_eq!(email.importance_level(), ImportanceLevel::Low);
    }

    #[test]
    fn fractional_check_interval_is_accepted() {
        let envelope: ApiEnvelope<Config> = serde_json::from_str(
            r#"{"success": true, "config": {"app_name": "Email Assistant", "email_check_interval": 300.0, "importance_threshold": "0.7"}}"#,
        )
        .expect("envelope decoded");
        let config = envelope.into_result().expect("success").expect("payload");
        assert_eq!(config.email_check_interval, Some(300));
        assert_eq!(config.importance_threshold, Some(0.7));
        assert_eq!(config.app_name.as_deref(), Some("Email Assistant"));
    }

    #[test]
    fn mistyped_config_fields_become_absent() {
        let config: Config = serde_json::from_str(
            r#"{"version": 2, "email_check_interval": "soon", "importance_threshold": {"v": 1}}"#,
        )
        .expect("config decoded");
        assert_eq!(config.version.as_deref(), Some("2"));
        assert_eq!(config.email_check_interval, None);
        assert_eq!(config.importance_threshold, None);
    }

    #[test]
    fn textual_importance_does_not_sink_the_list() {
        let envelope: ApiEnvelope<Vec<EmailSummary>> = serde_json::from_str(
            r#"{"success": true, "emails": [
                {"subject": "Budget", "importance": 0.9, "processed": 1},
                {"subject": "Lunch", "importance": "high"},
                {"subject": "Digest", "importance": "0.45", "processed": "false"}
            ]}"#,
        )
        .expect("envelope decoded");
        let emails = envelope.into_result().expect("success").expect("payload");
        assert_eq!(emails.len(), 3);
        assert_eq!(emails[0].processed, Some(true));
        assert_eq!(emails[1].importance, None);
        assert_eq!(emails[1].importance_level(), ImportanceLevel::Low);
        assert_eq!(emails[2].importance, Some(0.45));
        assert_eq!(emails[2].processed, Some(false));
    }

    #[test]
    fn non_object_records_are_skipped_individually() {
        let values: Vec<Value> = serde_json::from_str(
            r#"[{"email_address": "me@example.com", "imap_server": "imap.example.com"}, "garbage", null, {"email_address": 42}]"#,
        )
        .expect("values decoded");
        let (accounts, skipped) = decode_records::<Account>(values);
        assert_eq!(skipped, 2);
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].imap_server, "imap.example.com");
        assert_eq!(accounts[1].email_address, "42");
    }
}
