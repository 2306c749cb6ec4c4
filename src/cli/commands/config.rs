use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cfg: &Config, path: &Path, print_config: bool, check: bool) -> AppResult<()> {
    if print_config {
        info(format!("Configuration ({}):", path.display()));
        println!("{}", cfg.to_yaml()?);
    }

    if check {
        if !path.exists() {
            warning(format!(
                "{} does not exist, defaults are used (run `helferlist init`)",
                path.display()
            ));
            return Ok(());
        }

        let missing = Config::missing_fields(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            for field in missing {
                warning(format!("Missing setting '{field}', default applies"));
            }
        }
        // also surfaces an invalid default_format
        cfg.export_format()?;
    }

    if !print_config && !check {
        info(format!("Configuration file: {}", path.display()));
    }
    Ok(())
}
