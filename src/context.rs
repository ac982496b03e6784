//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::CanisterActor;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::shell::{BrowserShell, Shell};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend actor, or why it could not be built
    actor: StoredValue<Result<CanisterActor, ClientError>, LocalStorage>,
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        let actor = CanisterActor::connect(&config);
        if let Err(e) = &actor {
            log::error!("Cannot reach backend canister {}: {}", config.backend_canister_id, e);
        }
        Self {
            actor: StoredValue::new_local(actor),
            config: StoredValue::new(config),
        }
    }

    /// The backend actor; alerts the user when the bridge never came up
    pub fn actor(&self) -> Option<CanisterActor> {
        self.actor.with_value(|actor| match actor {
            Ok(actor) => Some(actor.clone()),
            Err(e) => {
                BrowserShell.alert(&format!("Error connecting to backend: {}", e));
                None
            }
        })
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
