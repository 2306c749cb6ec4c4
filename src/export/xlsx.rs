// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::ExportOptions;
use crate::export::columns::{Column, EffectiveColumns};
use crate::export::sanitize::escape;
use crate::export::sheet_name::unique_sheet_names;
use crate::models::{Event, Helper, HelperId, Job, Roster};
use rust_xlsxwriter::{Color, Format, FormatPattern, Workbook, Worksheet};
use std::io::Write;
use tracing::debug;

/// Background of rows whose helper has more than one assignment.
const MULTI_ASSIGNMENT_COLOR: u32 = 0xFFFF99;

/// Longest string Excel accepts in a cell; longer values are cut.
pub const MAX_CELL_CHARS: usize = 32_767;

/// A physical spreadsheet column. The name column spans two of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetColumn {
    FirstName,
    Surname,
    Email,
    Phone,
    Shirt,
    Nutrition,
    FoodHandling,
    Comment,
    /// Stands in when no column is left, so the sheet never has zero columns.
    Placeholder,
}

impl SheetColumn {
    pub fn header(&self) -> &'static str {
        match self {
            SheetColumn::FirstName => "First name",
            SheetColumn::Surname => "Surname",
            SheetColumn::Email => "E-Mail",
            SheetColumn::Phone => "Mobile phone",
            SheetColumn::Shirt => "T-shirt",
            SheetColumn::Nutrition => "Nutrition",
            SheetColumn::FoodHandling => "Food handling",
            SheetColumn::Comment => "Comment",
            SheetColumn::Placeholder => "",
        }
    }

    pub fn width(&self) -> f64 {
        match self {
            SheetColumn::FirstName | SheetColumn::Surname | SheetColumn::Email => 30.0,
            SheetColumn::Phone | SheetColumn::FoodHandling => 20.0,
            SheetColumn::Shirt | SheetColumn::Placeholder => 10.0,
            SheetColumn::Nutrition => 13.0,
            SheetColumn::Comment => 50.0,
        }
    }

    fn value(&self, helper: &Helper) -> String {
        let raw: &str = match self {
            SheetColumn::FirstName => &helper.firstname,
            SheetColumn::Surname => &helper.surname,
            SheetColumn::Email => &helper.email,
            SheetColumn::Phone => &helper.phone,
            SheetColumn::Shirt => helper.shirt_display(),
            SheetColumn::Nutrition => helper.nutrition_short(),
            SheetColumn::FoodHandling => helper.infection_instruction_short(),
            SheetColumn::Comment => &helper.comment,
            SheetColumn::Placeholder => "",
        };
        truncate_cell(escape(raw).into_owned())
    }

    pub fn for_columns(columns: &EffectiveColumns) -> Vec<SheetColumn> {
        let mut out = Vec::new();
        for column in columns.iter() {
            match column {
                Column::Name => {
                    out.push(SheetColumn::FirstName);
                    out.push(SheetColumn::Surname);
                }
                Column::Email => out.push(SheetColumn::Email),
                Column::Phone => out.push(SheetColumn::Phone),
                Column::Shirt => out.push(SheetColumn::Shirt),
                Column::Nutrition => out.push(SheetColumn::Nutrition),
                Column::FoodHandling => out.push(SheetColumn::FoodHandling),
                Column::Comment => out.push(SheetColumn::Comment),
            }
        }

        if out.is_empty() {
            out.push(SheetColumn::Placeholder);
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SheetRow {
    /// Bold label merged over the full width: "Coordinators" or a shift time.
    Banner(String),
    Helper { cells: Vec<String>, highlight: bool },
}

/// Content of one worksheet, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPlan {
    pub name: String,
    pub columns: Vec<SheetColumn>,
    pub rows: Vec<SheetRow>,
}

/// Lays out one worksheet per job. Pure, the input is only read.
pub fn plan_workbook(event: &Event, jobs: &[&Job], options: &ExportOptions) -> Vec<SheetPlan> {
    let roster = Roster::new(event);
    let names = unique_sheet_names(jobs.iter().map(|j| j.name.as_str()));

    jobs.iter()
        .zip(names)
        .map(|(job, name)| {
            let effective = EffectiveColumns::for_job(
                &options.columns,
                event,
                job,
                options.include_sensitive,
            );
            let columns = SheetColumn::for_columns(&effective);
            let mut rows = Vec::new();

            if options.date.is_none() && job.has_coordinators() {
                rows.push(SheetRow::Banner("Coordinators".to_string()));
                push_helpers(&mut rows, &roster, &columns, &job.coordinators);
            }

            for shift in job.shifts_on(options.date) {
                rows.push(SheetRow::Banner(shift.time()));
                push_helpers(&mut rows, &roster, &columns, &shift.helpers);
            }

            SheetPlan {
                name,
                columns,
                rows,
            }
        })
        .collect()
}

fn push_helpers(rows: &mut Vec<SheetRow>, roster: &Roster<'_>, columns: &[SheetColumn], ids: &[HelperId]) {
    for helper in roster.resolve(ids) {
        rows.push(SheetRow::Helper {
            cells: columns.iter().map(|c| c.value(helper)).collect(),
            highlight: roster.is_multi_assigned(helper.id),
        });
    }
}

/// Writes the planned sheets into an in-memory xlsx file.
pub fn write_workbook(plans: &[SheetPlan]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    let bold = Format::new().set_bold();
    let multi = Format::new()
        .set_background_color(Color::RGB(MULTI_ASSIGNMENT_COLOR))
        .set_pattern(FormatPattern::Solid);

    // ---------------------------
    // Nothing selected
    // ---------------------------
    if plans.is_empty() {
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "No data available")?;
        return Ok(workbook.save_to_buffer()?);
    }

    for plan in plans {
        debug!(sheet = %plan.name, rows = plan.rows.len(), "writing worksheet");

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&plan.name)?;

        // ---------------------------
        // Header
        // ---------------------------
        for (col, column) in plan.columns.iter().enumerate() {
            let col = col as u16;
            write_cell(worksheet, 0, col, column.header(), Some(&bold))?;
            worksheet.set_column_width(col, column.width())?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        let last_col = (plan.columns.len() - 1) as u16;

        // ---------------------------
        // Banners and helper rows
        // ---------------------------
        for (index, row) in plan.rows.iter().enumerate() {
            let r = (index + 1) as u32;
            match row {
                SheetRow::Banner(label) => {
                    let label = escape(label);
                    if last_col == 0 {
                        // a single-cell merge is rejected by the writer
                        worksheet.write_string_with_format(r, 0, &*label, &bold)?;
                    } else {
                        worksheet.merge_range(r, 0, r, last_col, &*label, &bold)?;
                    }
                }
                SheetRow::Helper { cells, highlight } => {
                    let format = highlight.then_some(&multi);
                    for (col, value) in cells.iter().enumerate() {
                        write_cell(worksheet, r, col as u16, value, format)?;
                    }
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn truncate_cell(value: String) -> String {
    if value.chars().count() <= MAX_CELL_CHARS {
        value
    } else {
        value.chars().take(MAX_CELL_CHARS).collect()
    }
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &str,
    format: Option<&Format>,
) -> AppResult<()> {
    match (value.is_empty(), format) {
        (true, Some(fmt)) => {
            worksheet.write_blank(row, col, fmt)?;
        }
        (true, None) => {}
        (false, Some(fmt)) => {
            worksheet.write_string_with_format(row, col, value, fmt)?;
        }
        (false, None) => {
            worksheet.write_string(row, col, value)?;
        }
    }
    Ok(())
}

/// Spreadsheet export: one worksheet per job, written to `out` in one piece.
pub(crate) fn export_xlsx<W: Write>(
    event: &Event,
    jobs: &[&Job],
    options: &ExportOptions,
    out: &mut W,
) -> AppResult<()> {
    let plans = plan_workbook(event, jobs, options);
    let bytes = write_workbook(&plans)?;
    out.write_all(&bytes)?;
    Ok(())
}
