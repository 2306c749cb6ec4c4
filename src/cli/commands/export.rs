use crate::cli::parser::Commands;
use crate::config::Config;
use crate::dataset;
use crate::errors::{AppError, AppResult};
use crate::export::{ColumnSelection, ExportLogic, ExportOptions, export_filename};
use chrono::NaiveDate;
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        format,
        file,
        job,
        date,
        columns,
        no_sensitive,
        force,
    } = cmd
    {
        let format = match format {
            Some(f) => *f,
            None => cfg.export_format()?,
        };

        let date = date.as_deref().map(parse_date).transpose()?;

        let columns = match columns {
            Some(list) => list.parse::<ColumnSelection>()?,
            None => cfg.columns,
        };

        let options = ExportOptions {
            date,
            columns,
            include_sensitive: cfg.include_sensitive && !*no_sensitive,
        };

        let event = dataset::load(input)?;
        let jobs = ExportLogic::select_jobs(&event, job.as_deref())?;

        let path = match file {
            Some(p) => p.clone(),
            None => {
                let single = if job.is_some() { jobs.first().copied() } else { None };
                PathBuf::from(export_filename(&event, single, format))
            }
        };

        ExportLogic::to_file(&event, &jobs, format, &options, &path, *force)?;
    }
    Ok(())
}

fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}
