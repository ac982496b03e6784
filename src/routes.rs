//! Page Routing
//!
//! The site is a set of separate HTML pages; the page to mount is
//! picked from the URL path.

use percent_encoding::percent_decode_str;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Register,
    Login,
    Home,
    Profile,
    Followers,
}

impl Page {
    /// Resolve a location path such as `/home.html`; unknown paths show login
    pub fn from_path(path: &str) -> Self {
        let file = path.rsplit('/').next().unwrap_or("");
        match file {
            "register.html" => Page::Register,
            "home.html" => Page::Home,
            "profile.html" => Page::Profile,
            "followers.html" => Page::Followers,
            _ => Page::Login,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Page::Register => "register.html",
            Page::Login => "login.html",
            Page::Home => "home.html",
            Page::Profile => "profile.html",
            Page::Followers => "followers.html",
        }
    }
}

/// Look up a decoded query parameter in a `?a=b&c=d` search string
pub fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| percent_decode_str(&v.replace('+', " ")).decode_utf8_lossy().into_owned())
}

/// Current page and search string from `window.location`
pub fn current_location() -> (Page, String) {
    let location = web_sys::window().map(|w| w.location());
    let path = location.as_ref().and_then(|l| l.pathname().ok()).unwrap_or_default();
    let search = location.as_ref().and_then(|l| l.search().ok()).unwrap_or_default();
    (Page::from_path(&path), search)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/register.html"), Page::Register);
        assert_eq!(Page::from_path("/home.html"), Page::Home);
        assert_eq!(Page::from_path("/profile.html"), Page::Profile);
        assert_eq!(Page::from_path("/followers.html"), Page::Followers);
        assert_eq!(Page::from_path("/login.html"), Page::Login);
        assert_eq!(Page::from_path("/"), Page::Login);
        assert_eq!(Page::from_path("/unknown"), Page::Login);
    }

    #[test]
    fn test_file_name_round_trips_through_path() {
        for page in [Page::Register, Page::Login, Page::Home, Page::Profile, Page::Followers] {
            assert_eq!(Page::from_path(&format!("/{}", page.file_name())), page);
        }
    }

    #[test]
    fn test_query_param() {
        let search = "?canisterId=be2us-64aaa-aaaaa-qaabq-cai&user=abc%2Ddef";
        assert_eq!(query_param(search, "user").as_deref(), Some("abc-def"));
        assert_eq!(query_param(search, "canisterId").as_deref(), Some("be2us-64aaa-aaaaa-qaabq-cai"));
        assert_eq!(query_param(search, "missing"), None);
        assert_eq!(query_param("?flag", "flag").as_deref(), Some(""));
    }
}
