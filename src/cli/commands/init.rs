use crate::cli::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use url::Url;

/// Handle the `init` command: write the config file, keeping an existing one.
pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::Init { api_url } = cmd {
        let path = &session.cfg_path;

        let mut cfg = if path.exists() {
            warning(format!(
                "Config file already exists: {} (keeping its values)",
                path.display()
            ));
            session.cfg.clone()
        } else {
            Config::default()
        };

        if let Some(url) = api_url {
            Url::parse(url).map_err(|e| AppError::Config(format!("api url '{url}': {e}")))?;
            cfg.api_base_url = url.trim().to_string();
        }

        cfg.save(path)?;

        info(format!("Config file : {}", path.display()));
        info(format!("API         : {}", cfg.api_base_url));
        success("rattendance initialized. Next: `rattendance login --email <you>`");
    }
    Ok(())
}
