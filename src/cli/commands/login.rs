use crate::api::ApiClient;
use crate::cli::Session;
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::env;

pub const PASSWORD_ENV: &str = "RATTENDANCE_PASSWORD";

/// `login`: exchange credentials for a token and store it in the config.
pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::Login { email, password } = cmd {
        let password = match password {
            Some(p) => p.clone(),
            None => env::var(PASSWORD_ENV).map_err(|_| {
                AppError::InvalidInput(format!("pass --password or set {PASSWORD_ENV}"))
            })?,
        };

        let client = ApiClient::new(
            &session.cfg.api_base_url,
            None,
            session.cfg.request_timeout_secs,
        )?;
        let token = client.login(email.trim(), &password)?;

        let mut cfg = session.cfg.clone();
        cfg.api_token = Some(token);
        cfg.save(&session.cfg_path)?;

        success(format!("Logged in as {}", email.trim()));
        info(format!("Token stored in {}", session.cfg_path.display()));
    }
    Ok(())
}

/// `logout`: drop the stored token.
pub fn logout(session: &Session) -> AppResult<()> {
    if session.cfg.token().is_none() {
        info("No stored token.");
        return Ok(());
    }
    let mut cfg = session.cfg.clone();
    cfg.api_token = None;
    cfg.save(&session.cfg_path)?;
    success("Logged out.");
    Ok(())
}
