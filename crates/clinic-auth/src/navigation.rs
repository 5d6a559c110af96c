//! The dashboard shell: one tab per visible panel, gated by role.

use clinic_core::enums::{Access, Panel};
use clinic_core::responses::{DashboardResponse, DashboardTab};

use crate::error::AuthError;
use crate::identity::Identity;
use crate::permissions::access;

#[derive(Debug, Clone)]
pub struct Dashboard {
    identity: Identity,
    tabs: Vec<DashboardTab>,
    current: Option<Panel>,
}

impl Dashboard {
    /// Build the tab strip for `identity`. The first visible tab is open.
    #[must_use]
    pub fn for_identity(identity: &Identity) -> Self {
        let tabs: Vec<DashboardTab> = Panel::ALL
            .into_iter()
            .filter_map(|panel| {
                let level = access(identity.role, panel);
                (level != Access::Hidden).then(|| DashboardTab {
                    panel,
                    title: panel.title().to_string(),
                    access: level,
                })
            })
            .collect();
        let current = tabs.first().map(|tab| tab.panel);
        Self {
            identity: identity.clone(),
            tabs,
            current,
        }
    }

    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    #[must_use]
    pub fn tabs(&self) -> &[DashboardTab] {
        &self.tabs
    }

    /// The open tab. `None` only for a role that sees no panel at all.
    #[must_use]
    pub const fn current(&self) -> Option<Panel> {
        self.current
    }

    #[must_use]
    pub fn access(&self, panel: Panel) -> Access {
        self.tabs
            .iter()
            .find(|tab| tab.panel == panel)
            .map_or(Access::Hidden, |tab| tab.access)
    }

    /// Open `panel`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PanelHidden` if the role cannot see it. The open
    /// tab is unchanged in that case.
    pub fn switch_to(&mut self, panel: Panel) -> Result<&DashboardTab, AuthError> {
        let Some(tab) = self.tabs.iter().find(|tab| tab.panel == panel) else {
            return Err(AuthError::PanelHidden {
                role: self.identity.role,
                panel,
            });
        };
        self.current = Some(panel);
        Ok(tab)
    }

    #[must_use]
    pub fn to_response(&self) -> DashboardResponse {
        DashboardResponse {
            greeting: self.identity.greeting(),
            role: self.identity.role,
            default_panel: self.tabs.first().map(|tab| tab.panel),
            open_panel: self.current,
            tabs: self.tabs.clone(),
        }
    }
}
