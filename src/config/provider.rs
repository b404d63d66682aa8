//! Identity provider constants.
//!
//! The gateway authenticates against a single provider. Its auth mode and
//! service endpoints are product invariants, not user settings, so they are
//! kept in a constant table that the resolver is handed at construction.

use crate::config::schema::{AuthConfig, ServiceDescriptor, ServiceTable};

/// Auth mode and service URLs of one identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityProvider {
    pub name: &'static str,
    pub auth_mode: &'static str,
    pub app: &'static str,
    pub user: &'static str,
    pub menus: &'static str,
    pub users: &'static str,
    pub open_id: &'static str,
}

/// The Doreamon provider used by the `connect` binary.
pub const DOREAMON: IdentityProvider = IdentityProvider {
    name: "doreamon",
    auth_mode: "oauth2",
    app: "https://api.zcorky.com/oauth/app",
    user: "https://api.zcorky.com/user",
    menus: "https://api.zcorky.com/menus",
    users: "https://api.zcorky.com/users",
    open_id: "https://api.zcorky.com/oauth/app/user/open_id",
};

const SERVICE_MODE: &str = "service";

impl IdentityProvider {
    pub fn auth(&self) -> AuthConfig {
        AuthConfig {
            mode: self.auth_mode.to_string(),
            provider: self.name.to_string(),
        }
    }

    pub fn services(&self) -> ServiceTable {
        let descriptor = |url: &str| ServiceDescriptor {
            mode: SERVICE_MODE.to_string(),
            service: url.to_string(),
        };
        ServiceTable {
            app: descriptor(self.app),
            user: descriptor(self.user),
            menus: descriptor(self.menus),
            users: descriptor(self.users),
            open_id: descriptor(self.open_id),
        }
    }
}

impl Default for IdentityProvider {
    fn default() -> Self {
        DOREAMON
    }
}
