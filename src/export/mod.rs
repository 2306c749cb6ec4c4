// src/export/mod.rs

pub mod columns;
mod fs_utils;
pub mod logic;
pub mod pdf;
pub mod pdf_export;
pub mod sanitize;
pub mod sheet_name;
pub mod xlsx;

pub use columns::{Column, ColumnSelection, EffectiveColumns};
pub use logic::{ExportLogic, export_filename};

use crate::ui::messages::success;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for file exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[value(alias = "xlsx")]
    Excel,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "excel",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

/// What goes into a helper list, independent of the output format.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportOptions {
    /// Only shifts on this day; coordinators are left out when set.
    pub date: Option<NaiveDate>,
    pub columns: ColumnSelection,
    /// The caller may see phone numbers.
    pub include_sensitive: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            date: None,
            columns: ColumnSelection::all(),
            include_sensitive: false,
        }
    }
}
