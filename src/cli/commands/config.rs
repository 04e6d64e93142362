use crate::cli::Session;
use crate::cli::parser::Commands;
use crate::config::migrate::{migrate_missing_keys, missing_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = &session.cfg_path;

        if *print_config {
            let mut shown = session.cfg.clone();
            if shown.api_token.is_some() {
                shown.api_token = Some("********".to_string());
            }
            let yaml = serde_yaml::to_string(&shown)
                .map_err(|e| AppError::Config(e.to_string()))?;
            println!("📄 {}\n", path.display());
            println!("{yaml}");
            info(format!("Display timezone: {}", session.zone));
        }

        if *check {
            if !path.exists() {
                warning(format!(
                    "{} does not exist; run `rattendance init`",
                    path.display()
                ));
            } else {
                let missing = missing_keys(path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!("Missing keys: {}", missing.join(", ")));
                    info("Run `rattendance config --migrate` to add them.");
                }
            }
        }

        if *migrate {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "{} does not exist; run `rattendance init`",
                    path.display()
                )));
            }
            let added = migrate_missing_keys(path)?;
            if added.is_empty() {
                info("Nothing to migrate.");
            } else {
                success(format!("Added: {}", added.join(", ")));
            }
        }

        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!("Configuration edited with '{editor_to_use}'"));
                }
                _ => {
                    warning(format!(
                        "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                    ));
                    match Command::new(&default_editor).arg(path).status() {
                        Ok(s) if s.success() => {
                            success(format!("Configuration edited with '{default_editor}'"));
                        }
                        _ => error(format!(
                            "Failed to edit configuration with '{default_editor}'"
                        )),
                    }
                }
            }
        }

        if !(*print_config || *check || *migrate || *edit_config) {
            println!("{}", path.display());
        }
    }

    Ok(())
}
