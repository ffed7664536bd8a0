//! Harvest password acquisition

use anyhow::{Context, Result};
use dialoguer::Password;
use tracing::debug;

/// Environment variable that bypasses the interactive prompt
pub const PASSWORD_ENV: &str = "HARVESTMINE_HARVEST_PASSWORD";

/// Read the Harvest password from the environment, or ask for it.
///
/// # Errors
/// Fails when the interactive prompt cannot read from the terminal.
pub fn harvest_password(email: &str) -> Result<String> {
    if let Some(password) = password_from_env() {
        debug!(env = PASSWORD_ENV, "using Harvest password from environment");
        return Ok(password);
    }

    Password::new()
        .with_prompt(format!("Please, enter your Harvest password for {email}"))
        .interact()
        .context("Failed to read the Harvest password")
}

fn password_from_env() -> Option<String> {
    std::env::var(PASSWORD_ENV).ok().filter(|password| !password.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_password_skips_prompt() {
        std::env::set_var(PASSWORD_ENV, "hunter2");
        assert_eq!(harvest_password("me@example.com").unwrap(), "hunter2");

        std::env::set_var(PASSWORD_ENV, "");
        assert_eq!(password_from_env(), None);
        std::env::remove_var(PASSWORD_ENV);
    }
}
