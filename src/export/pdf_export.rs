// src/export/pdf_export.rs

use crate::errors::AppResult;
use crate::export::ExportOptions;
use crate::export::columns::{Column, EffectiveColumns};
use crate::export::pdf::PdfManager;
use crate::models::{Event, Helper, Job, Roster};
use std::io::Write;
use tracing::debug;

/// Total table width on an A4 page with 1.5 cm margins.
pub const AVAILABLE_WIDTH_CM: f32 = 17.0;

/// Width of the stand-in column of a table without any selected column.
const PLACEHOLDER_WIDTH_CM: f32 = 4.0;

pub const NOBODY_REGISTERED: &str = "Nobody is registered for this shift.";

#[derive(Debug, Clone, PartialEq)]
pub struct PdfColumn {
    pub header: &'static str,
    pub width_cm: f32,
    column: Option<Column>,
}

impl PdfColumn {
    pub fn new(header: &'static str, width_cm: f32) -> Self {
        Self {
            header,
            width_cm,
            column: None,
        }
    }

    pub fn column(&self) -> Option<Column> {
        self.column
    }

    fn value(&self, helper: &Helper) -> String {
        match self.column {
            Some(Column::Name) => helper.full_name(),
            Some(Column::Email) => helper.email.clone(),
            Some(Column::Phone) => helper.phone.clone(),
            Some(Column::Shirt) => helper.shirt_display().to_string(),
            Some(Column::Nutrition) => helper.nutrition_short().to_string(),
            Some(Column::FoodHandling) => helper.infection_instruction_short().to_string(),
            Some(Column::Comment) => helper.comment.clone(),
            None => String::new(),
        }
    }
}

fn heading_for(column: Column) -> &'static str {
    match column {
        Column::Name => "Name",
        Column::Email => "E-Mail",
        Column::Phone => "Phone",
        Column::Shirt => "T-shirt",
        Column::Nutrition => "Nutrition",
        Column::FoodHandling => "Food Handling Instructions",
        Column::Comment => "Comment",
    }
}

/// Fixed width in cm; `None` means "whatever is left".
fn fixed_width(column: Column) -> Option<f32> {
    match column {
        Column::Name | Column::Email => Some(5.0),
        Column::Phone => Some(3.0),
        Column::Shirt => Some(1.5),
        Column::Nutrition => Some(2.5),
        Column::FoodHandling => Some(4.0),
        Column::Comment => None,
    }
}

/// Assigns widths left to right within [`AVAILABLE_WIDTH_CM`]. A column
/// that does not fit into the remaining budget is left out; the comment
/// column takes the rest and is left out when nothing remains.
pub fn table_columns(columns: &EffectiveColumns) -> Vec<PdfColumn> {
    let mut remaining = AVAILABLE_WIDTH_CM;
    let mut out = Vec::new();

    for column in columns.iter() {
        let width = fixed_width(column).unwrap_or(remaining);
        if width <= 0.0 || width > remaining {
            debug!(%column, width, remaining, "column does not fit on the page, dropped");
            continue;
        }
        remaining -= width;
        out.push(PdfColumn {
            header: heading_for(column),
            width_cm: width,
            column: Some(column),
        });
    }

    if out.is_empty() {
        out.push(PdfColumn::new("", PLACEHOLDER_WIDTH_CM));
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct HelperTable {
    pub columns: Vec<PdfColumn>,
    pub rows: Vec<Vec<String>>,
}

impl HelperTable {
    fn new(columns: Vec<PdfColumn>, helpers: &[&Helper]) -> Self {
        let rows = helpers
            .iter()
            .map(|h| columns.iter().map(|c| c.value(h)).collect())
            .collect();
        Self { columns, rows }
    }
}

/// Document structure before it is put on pages.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(String),
    SubHeading(String),
    Paragraph(String),
    Table(HelperTable),
    PageBreak,
}

/// One section per job: coordinators first, then one table (or a note)
/// per shift, and a page break after every job.
pub fn plan_document(event: &Event, jobs: &[&Job], options: &ExportOptions) -> Vec<Block> {
    let roster = Roster::new(event);
    let mut blocks = Vec::new();

    for job in jobs {
        blocks.push(Block::Heading(job.name.clone()));

        let effective =
            EffectiveColumns::for_job(&options.columns, event, job, options.include_sensitive);

        if options.date.is_none() && job.has_coordinators() {
            blocks.push(Block::SubHeading("Coordinators".to_string()));
            let helpers = roster.resolve(&job.coordinators);
            blocks.push(Block::Table(HelperTable::new(table_columns(&effective), &helpers)));
        }

        for shift in job.shifts_on(options.date) {
            let title = if shift.name.is_empty() {
                shift.time_with_day()
            } else {
                format!("{}: {}", shift.time_with_day(), shift.name)
            };
            blocks.push(Block::SubHeading(title));

            let helpers = roster.resolve(&shift.helpers);
            if helpers.is_empty() {
                blocks.push(Block::Paragraph(NOBODY_REGISTERED.to_string()));
            } else {
                blocks.push(Block::Table(HelperTable::new(table_columns(&effective), &helpers)));
            }
        }

        blocks.push(Block::PageBreak);
    }

    blocks
}

/// PDF export: headings and helper tables per job, written to `out` in one piece.
pub(crate) fn export_pdf<W: Write>(
    event: &Event,
    jobs: &[&Job],
    options: &ExportOptions,
    out: &mut W,
) -> AppResult<()> {
    let blocks = plan_document(event, jobs, options);

    let mut pdf = PdfManager::new(&event.name);
    pdf.render(&blocks);
    debug!(pages = pdf.page_count(), "pdf laid out");

    out.write_all(&pdf.finish())?;
    Ok(())
}
