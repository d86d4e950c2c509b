//! Shared context for operations
//!
//! Bundles the host layout with the external collaborators every operation
//! consumes, so they can be swapped out in tests.

use crate::archive::PluginHost;
use crate::download::Downloader;
use crate::settings::Settings;
use crate::ui::prompt::Prompter;

pub struct Context<'a> {
    pub settings: &'a Settings,
    pub prompter: &'a dyn Prompter,
    pub downloader: &'a dyn Downloader,
    pub plugins: &'a dyn PluginHost,
}

impl<'a> Context<'a> {
    pub fn new(
        settings: &'a Settings,
        prompter: &'a dyn Prompter,
        downloader: &'a dyn Downloader,
        plugins: &'a dyn PluginHost,
    ) -> Self {
        Self {
            settings,
            prompter,
            downloader,
            plugins,
        }
    }
}
