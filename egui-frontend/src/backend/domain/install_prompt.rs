//! Install promotion banner.
//!
//! The host may offer a deferred install prompt. The banner shows an install
//! button while one is held, or manual "Add to Home Screen" steps on iOS,
//! and stays hidden once the app runs installed or the user dismissed it.
//! Dismissal is remembered in session storage for the rest of the run.

use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::backend::storage::KeyValueStorage;

/// Session storage key of the dismissal flag
pub const DISMISSED_SESSION_KEY: &str = "pwa-dismissed";

/// Platform family, as far as the banner cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Needs manual install instructions
    Ios,
    Other,
}

/// Answers the environment questions the banner depends on
pub trait InstallHost {
    fn platform(&self) -> Platform;

    /// The app is already running as an installed app
    fn is_standalone(&self) -> bool;
}

/// The user's answer to an install prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Accepted,
    #[allow(dead_code)]
    Dismissed,
}

/// A prompt the host handed over for later use
pub trait DeferredInstallPrompt: Send {
    /// Show the prompt and wait for the user's choice
    fn prompt(&mut self) -> Result<InstallOutcome>;
}

/// What the banner should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallBannerView {
    Hidden,
    /// Share -> "Add to Home Screen" steps
    ManualInstructions,
    InstallButton,
}

/// Native desktop host: the binary is already installed
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeInstallHost;

impl InstallHost for NativeInstallHost {
    fn platform(&self) -> Platform {
        if std::env::consts::OS == "ios" {
            Platform::Ios
        } else {
            Platform::Other
        }
    }

    fn is_standalone(&self) -> bool {
        true
    }
}

/// Banner state for one app session
pub struct InstallBanner {
    session: Arc<dyn KeyValueStorage>,
    platform: Platform,
    standalone: bool,
    dismissed: bool,
    deferred_prompt: Option<Box<dyn DeferredInstallPrompt>>,
}

impl InstallBanner {
    pub fn new(host: &dyn InstallHost, session: Arc<dyn KeyValueStorage>) -> Self {
        let dismissed = match session.get(DISMISSED_SESSION_KEY) {
            Ok(flag) => flag.is_some(),
            Err(e) => {
                warn!("Could not read install banner flag: {:#}", e);
                false
            }
        };

        Self {
            session,
            platform: host.platform(),
            standalone: host.is_standalone(),
            dismissed,
            deferred_prompt: None,
        }
    }

    /// The host signalled the app can be installed. Never called on the
    /// native host, which is always installed.
    #[allow(dead_code)]
    pub fn on_installable(&mut self, prompt: Box<dyn DeferredInstallPrompt>) {
        info!("Install prompt available");
        self.deferred_prompt = Some(prompt);
    }

    pub fn view(&self) -> InstallBannerView {
        if self.standalone || self.dismissed {
            InstallBannerView::Hidden
        } else if self.platform == Platform::Ios {
            InstallBannerView::ManualInstructions
        } else if self.deferred_prompt.is_some() {
            InstallBannerView::InstallButton
        } else {
            InstallBannerView::Hidden
        }
    }

    /// Hide the banner for the rest of the session
    pub fn dismiss(&mut self) -> Result<()> {
        self.dismissed = true;
        self.session.set(DISMISSED_SESSION_KEY, "1")
    }

    /// Run the deferred prompt, if any. The prompt can only be used once.
    pub fn install(&mut self) -> Result<Option<InstallOutcome>> {
        let Some(mut prompt) = self.deferred_prompt.take() else {
            return Ok(None);
        };

        let outcome = prompt.prompt()?;
        info!("Install prompt outcome: {:?}", outcome);
        if outcome == InstallOutcome::Accepted {
            self.dismissed = true;
        }
        Ok(Some(outcome))
    }
}
