//! Browser Shell
//!
//! The few window services handlers need: alert, prompt and navigation.

pub trait Shell {
    fn alert(&self, message: &str);
    /// `None` when the user cancels
    fn prompt(&self, message: &str) -> Option<String>;
    fn redirect(&self, url: &str);
}

/// `window.alert` / `window.prompt` / `location.href`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserShell;

impl Shell for BrowserShell {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn prompt(&self, message: &str) -> Option<String> {
        web_sys::window()?.prompt_with_message(message).ok().flatten()
    }

    fn redirect(&self, url: &str) {
        log::info!("Navigating to {}", url);
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                log::error!("Navigation to {} failed: {:?}", url, e);
            }
        }
    }
}
