// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ExportOptions, notify_export_success};
use crate::models::{Event, Job};
use crate::ui::messages::info;
use crate::utils::filename::escape_filename;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// High level entry points of the export.
pub struct ExportLogic;

impl ExportLogic {
    /// Renders the helper list of `jobs` and hands the finished document to
    /// `out`. Nothing is written to `out` if rendering fails.
    pub fn render<W: Write>(
        event: &Event,
        jobs: &[&Job],
        format: ExportFormat,
        options: &ExportOptions,
        out: &mut W,
    ) -> AppResult<()> {
        debug!(
            event = %event.name,
            jobs = jobs.len(),
            format = format.as_str(),
            date = ?options.date,
            "rendering export"
        );

        let mut buffer = Vec::new();
        match format {
            ExportFormat::Excel => export_xlsx(event, jobs, options, &mut buffer)?,
            ExportFormat::Pdf => export_pdf(event, jobs, options, &mut buffer)?,
        }

        out.write_all(&buffer)?;
        Ok(())
    }

    /// Renders into memory, then stores the result at `path`.
    pub fn to_file(
        event: &Event,
        jobs: &[&Job],
        format: ExportFormat,
        options: &ExportOptions,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;
        info(format!(
            "Exporting {} job(s) to {}: {}",
            jobs.len(),
            format.as_str(),
            path.display()
        ));

        let mut buffer = Vec::new();
        Self::render(event, jobs, format, options, &mut buffer)?;
        fs::write(path, &buffer)?;

        notify_export_success(format.as_str(), path);
        Ok(())
    }

    /// All jobs of the event, or the single job called `name`.
    pub fn select_jobs<'a>(event: &'a Event, name: Option<&str>) -> AppResult<Vec<&'a Job>> {
        match name {
            None => Ok(event.jobs.iter().collect()),
            Some(name) => event
                .job(name)
                .map(|job| vec![job])
                .ok_or_else(|| AppError::JobNotFound(name.to_string())),
        }
    }
}

/// `<event>.xlsx` or `<event> - <job>.pdf`, safe to use as a file name.
pub fn export_filename(event: &Event, job: Option<&Job>, format: ExportFormat) -> String {
    let stem = match job {
        Some(job) => format!("{} - {}", event.name, job.name),
        None => event.name.clone(),
    };
    format!("{}.{}", escape_filename(&stem), format.extension())
}
