use serde::{Deserialize, Serialize};
use url::Url;

/// Client-side settings for talking to the Email Assistant backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientSettings {
    pub base_url: String,
    #[serde(default = "default_email_limit")]
    pub email_limit: u32,
    #[serde(default = "default_watch_interval")]
    pub watch_interval_secs: u64,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl ClientSettings {
    pub fn backend_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)
    }
}

fn default_email_limit() -> u32 {
    20
}

fn default_watch_interval() -> u64 {
    300
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            email_limit: default_email_limit(),
            watch_interval_secs: default_watch_interval(),
            log_filter: default_log_filter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ClientSettings;

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: ClientSettings =
            toml::from_str("base_url = \"http://mail.local:8080\"").expect("settings parsed");
        assert_eq!(parsed.email_limit, 20);
        assert_eq!(parsed.watch_interval_secs, 300);
        assert_eq!(parsed.log_filter, "info");
        assert_eq!(
            parsed.backend_url().expect("url").host_str(),
            Some("mail.local")
        );
    }

    #[test]
    fn defaults_survive_toml_round_trip() {
        let initial = ClientSettings::default();
        let content = toml::to_string_pretty(&initial).expect("serialized");
        let parsed: ClientSettings = toml::from_str(&content).expect("parsed");
        assert_eq!(parsed, initial);
    }
}
