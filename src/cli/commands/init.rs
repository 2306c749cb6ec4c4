use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command: write the default configuration to `path`.
pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    info(format!("Writing default configuration to {}", path.display()));
    Config::default().save(path)?;
    success(format!("Configuration file: {}", path.display()));
    Ok(())
}
