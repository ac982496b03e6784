//! Client Configuration
//!
//! Replica host and canister ids. Defaults point at a local replica; a page
//! can override any field with a JSON block:
//!
//! ```html
//! <script id="social-ic-config" type="application/json">
//!   { "backendCanisterId": "bkyz2-fmaaa-aaaaa-qaaaq-cai" }
//! </script>
//! ```

use log::LevelFilter;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::error::ClientResult;
use crate::routes::Page;

/// Element id of the JSON override block
pub const CONFIG_ELEMENT_ID: &str = "social-ic-config";

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Replica / asset host, without trailing slash
    pub host: String,
    /// Canister serving these pages
    pub frontend_canister_id: String,
    /// Canister exposing the social-network actor
    pub backend_canister_id: String,
    /// Internet Identity authorize endpoint
    pub identity_provider: String,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "http://127.0.0.1:4943".to_string(),
            frontend_canister_id: "be2us-64aaa-aaaaa-qaabq-cai".to_string(),
            backend_canister_id: "bkyz2-fmaaa-aaaaa-qaaaq-cai".to_string(),
            identity_provider: "https://identity.ic0.app/#authorize".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> ClientResult<Self> {
        let mut config: ClientConfig = serde_json::from_str(json)?;
        config.host = config.host.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Read the page's override block; defaults when the page has none
    pub fn load() -> ClientResult<Self> {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match json {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Absolute URL of a page on the frontend canister
    pub fn page_url(&self, page: Page) -> String {
        format!("{}/{}?canisterId={}", self.host, page.file_name(), self.frontend_canister_id)
    }

    pub fn profile_url(&self, user: &str) -> String {
        format!("{}&user={}", self.page_url(Page::Profile), encode_component(user))
    }

    /// Internet Identity authorize URL that returns to the home page
    pub fn login_url(&self) -> String {
        format!(
            "{}&redirect_uri={}&canisterId={}",
            self.identity_provider,
            encode_component(&self.page_url(Page::Home)),
            self.backend_canister_id
        )
    }
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url() {
        let config = ClientConfig::default();
        assert_eq!(
            config.page_url(Page::Register),
            "http://127.0.0.1:4943/register.html?canisterId=be2us-64aaa-aaaaa-qaabq-cai"
        );
    }

    #[test]
    fn test_login_url_encodes_redirect() {
        let config = ClientConfig::default();
        assert_eq!(
            config.login_url(),
            "https://identity.ic0.app/#authorize\
             &redirect_uri=http%3A%2F%2F127.0.0.1%3A4943%2Fhome.html%3FcanisterId%3Dbe2us-64aaa-aaaaa-qaabq-cai\
             &canisterId=bkyz2-fmaaa-aaaaa-qaaaq-cai"
        );
    }

    #[test]
    fn test_profile_url() {
        let config = ClientConfig::default();
        assert!(config.profile_url("2vxsx-fae").ends_with("&user=2vxsx-fae"));
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = ClientConfig::from_json(
            r#"{"host": "https://example.icp0.io/", "backendCanisterId": "rrkah-fqaaa-aaaaa-aaaaq-cai", "logLevel": "debug"}"#,
        )
        .unwrap();
        assert_eq!(config.host, "https://example.icp0.io");
        assert_eq!(config.backend_canister_id, "rrkah-fqaaa-aaaaa-aaaaq-cai");
        assert_eq!(config.frontend_canister_id, ClientConfig::default().frontend_canister_id);
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_bad_log_level_falls_back_to_info() {
        let config = ClientConfig { log_level: "loud".to_string(), ..Default::default() };
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(ClientConfig::from_json("not json").is_err());
    }
}
