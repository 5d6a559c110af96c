use anyhow::Context;
use clinic_auth::{AuthError, Identity, SessionStore, refresh_identity, resolve_login};
use clinic_config::ClinicConfig;
use clinic_store::ClinicStore;

/// Shared application resources initialized once per command.
pub struct AppContext {
    pub store: ClinicStore,
    pub config: ClinicConfig,
    pub sessions: SessionStore,
    identity: Option<Identity>,
    /// Whether `identity` came from `--as` rather than the session file.
    one_shot: bool,
}

impl AppContext {
    /// Open the data directory and work out who is running the command.
    ///
    /// `as_identifier` takes precedence over the stored session. A stored
    /// session that no longer resolves (the user was deleted, say) is
    /// ignored with a warning.
    pub fn init(config: ClinicConfig, as_identifier: Option<&str>) -> anyhow::Result<Self> {
        let store = ClinicStore::from_config(&config.storage).with_context(|| {
            format!(
                "failed to load records from {}",
                config.storage.data_dir.display()
            )
        })?;
        let sessions = SessionStore::from_config(&config.storage);

        let (identity, one_shot) = if let Some(identifier) = as_identifier {
            let identity = resolve_login(&store, identifier, &config.login)
                .with_context(|| format!("--as {identifier}"))?;
            (Some(identity), true)
        } else {
            let restored = match sessions.load()? {
                Some(stored) => match refresh_identity(&store, &stored, &config.login) {
                    Ok(identity) => Some(identity),
                    Err(AuthError::NotLoggedIn) => None,
                    Err(other) => return Err(other.into()),
                },
                None => None,
            };
            (restored, false)
        };

        if let Some(identity) = &identity {
            tracing::debug!(identifier = %identity.identifier, role = identity.role.as_str(), one_shot, "identity resolved");
        }

        Ok(Self {
            store,
            config,
            sessions,
            identity,
            one_shot,
        })
    }

    /// The identity running this command.
    pub fn identity(&self) -> Result<&Identity, AuthError> {
        self.identity.as_ref().ok_or(AuthError::NotLoggedIn)
    }

    /// Replace the current identity, e.g. after `clinic login`.
    pub fn set_identity(&mut self, identity: Option<Identity>) {
        self.identity = identity;
    }

    pub const fn is_one_shot(&self) -> bool {
        self.one_shot
    }

    pub fn default_limit(&self) -> u32 {
        self.config.general.default_limit
    }
}
