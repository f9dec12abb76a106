//! Login command handler - the full lifecycle pass.

use crate::config::Config;
use crate::credentials::ENV_VARS;
use crate::error::Result;
use crate::manager::{self, CredentialSource};

/// Handle the login command: reuse a cached snapshot or authenticate fresh,
/// then export the credentials to the process environment.
pub fn handle_login(
    config: &Config,
    role: Option<String>,
    fresh: bool,
    export: bool,
) -> Result<()> {
    let session = manager::get_or_refresh_credentials(config, role.as_deref(), fresh)?;

    match session.source {
        CredentialSource::CacheHit => {
            println!("Reusing cached snapshot '{}'.", session.snapshot);
        }
        CredentialSource::Refreshed => {
            println!("Fresh credentials obtained and cached as '{}'.", session.snapshot);
        }
    }
    println!("Active role: {}", session.role_label);

    if export {
        // For `eval "$(rolecache login --export)"` in a parent shell.
        let set = &session.credentials;
        let values = [
            &set.access_key_id,
            &set.secret_access_key,
            &set.session_token,
            &set.security_token,
        ];
        for (name, value) in ENV_VARS.iter().zip(values) {
            println!("export {}={}", name, value);
        }
        if let Some(region) = config.region() {
            println!("export AWS_DEFAULT_REGION={}", region);
        }
    }

    Ok(())
}
