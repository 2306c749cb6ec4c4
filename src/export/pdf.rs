// src/export/pdf.rs

use crate::export::pdf_export::{Block, HelperTable};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

/// Points per centimeter.
pub const CM: f32 = 72.0 / 2.54;

const LEADING: f32 = 1.2;
const CELL_PADDING: f32 = 3.0;
/// Average Helvetica glyph width in em, used to estimate line breaks.
const AVG_CHAR_EM: f32 = 0.5;

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");

struct OpenPage {
    content_id: Ref,
    content: Content,
}

/// Flow layout on A4 pages: headings, paragraphs and bordered tables are
/// stacked top to bottom, a new page starts whenever the next element does
/// not fit or an explicit page break was requested.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    page: Option<OpenPage>,
    cursor_y: f32,

    page_w: f32,
    page_h: f32,
    margin: f32,

    next_id: i32,
    regular_font: Ref,
    bold_font: Ref,

    footer: String,
    font_size: f32,
    h1_size: f32,
    h2_size: f32,
}

impl PdfManager {
    pub fn new(footer: &str) -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let regular_font = Ref::new(3);
        let bold_font = Ref::new(4);

        pdf.type1_font(regular_font)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            page: None,
            cursor_y: 0.0,

            page_w: 21.0 * CM,
            page_h: 29.7 * CM,
            margin: 1.5 * CM,

            next_id: 5,
            regular_font,
            bold_font,

            footer: footer.to_string(),
            font_size: 10.0,
            h1_size: 18.0,
            h2_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Usable width between the left and right margin.
    pub fn text_width(&self) -> f32 {
        self.page_w - 2.0 * self.margin
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    fn start_page(&mut self) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(REGULAR, self.regular_font);
            fonts.pair(BOLD, self.bold_font);
        }

        let mut content = Content::new();

        // footer: document name left, page number right
        let footer_y = self.margin / 2.0;
        draw_text(&mut content, REGULAR, self.margin, footer_y, 8.0, &self.footer);
        let number = format!("Page {}", self.page_refs.len());
        draw_text(
            &mut content,
            REGULAR,
            self.page_w - self.margin - 40.0,
            footer_y,
            8.0,
            &number,
        );

        self.page = Some(OpenPage {
            content_id,
            content,
        });
        self.cursor_y = self.page_h - self.margin;
    }

    fn finalize_page(&mut self) {
        if let Some(open) = self.page.take() {
            self.pdf.stream(open.content_id, &open.content.finish());
        }
    }

    /// Opens a page if none is open, or moves on to the next one when
    /// `height` no longer fits. Returns true if a new page was started.
    fn ensure_space(&mut self, height: f32) -> bool {
        if self.page.is_none() {
            self.start_page();
            return true;
        }
        if self.cursor_y - height < self.margin {
            self.finalize_page();
            self.start_page();
            return true;
        }
        false
    }

    /// The next element starts on a fresh page. Breaks with nothing after
    /// them leave no empty page behind.
    pub fn page_break(&mut self) {
        self.finalize_page();
    }

    fn text_block(&mut self, text: &str, font: Name<'static>, size: f32, before: f32, after: f32) {
        let width = self.text_width();
        let lines = wrap_lines(text, width, size);
        let line_h = size * LEADING;
        let height = before + lines.len() as f32 * line_h + after;

        // no spacing above the first element of a page
        let fresh = self.ensure_space(height);
        let top = if fresh { self.cursor_y } else { self.cursor_y - before };

        if let Some(open) = self.page.as_mut() {
            for (i, line) in lines.iter().enumerate() {
                let baseline = top - size - i as f32 * line_h;
                draw_text(&mut open.content, font, self.margin, baseline, size, line);
            }
        }

        self.cursor_y = top - lines.len() as f32 * line_h - after;
    }

    pub fn heading(&mut self, text: &str) {
        let size = self.h1_size;
        self.text_block(text, BOLD, size, 0.0, 8.0);
    }

    pub fn sub_heading(&mut self, text: &str) {
        let size = self.h2_size;
        self.text_block(text, BOLD, size, 10.0, 6.0);
    }

    pub fn paragraph(&mut self, text: &str) {
        let size = self.font_size;
        self.text_block(text, REGULAR, size, 0.0, 6.0);
    }

    /// Bordered table with a shaded header row, repeated on every page the
    /// table spans.
    pub fn table(&mut self, table: &HelperTable) {
        let widths: Vec<f32> = table.columns.iter().map(|c| c.width_cm * CM).collect();
        let header: Vec<String> = table.columns.iter().map(|c| c.header.to_string()).collect();

        let header_cells = layout_cells(&header, &widths, self.font_size);
        let header_h = row_height(&header_cells, self.font_size);

        let first_h = table
            .rows
            .first()
            .map(|r| row_height(&layout_cells(r, &widths, self.font_size), self.font_size))
            .unwrap_or(0.0);

        // keep the header together with the first row
        self.ensure_space(header_h + first_h);
        self.draw_row(&header_cells, &widths, header_h, true);

        for row in &table.rows {
            let cells = layout_cells(row, &widths, self.font_size);
            let h = row_height(&cells, self.font_size);
            if self.ensure_space(h) {
                self.draw_row(&header_cells, &widths, header_h, true);
            }
            self.draw_row(&cells, &widths, h, false);
        }

        self.cursor_y -= 6.0;
    }

    fn draw_row(&mut self, cells: &[Vec<String>], widths: &[f32], height: f32, header: bool) {
        let top = self.cursor_y;
        let size = self.font_size;
        let x_start = self.margin;

        if let Some(open) = self.page.as_mut() {
            let content = &mut open.content;

            if header {
                content.save_state();
                content.set_fill_rgb(0.85, 0.87, 0.90);
                content.rect(x_start, top - height, widths.iter().sum(), height);
                content.fill_nonzero();
                content.restore_state();
            }

            let font = if header { BOLD } else { REGULAR };
            let mut x = x_start;
            for (lines, w) in cells.iter().zip(widths) {
                for (i, line) in lines.iter().enumerate() {
                    let baseline = top - CELL_PADDING - size - i as f32 * size * LEADING;
                    draw_text(content, font, x + CELL_PADDING, baseline, size, line);
                }
                draw_cell_borders(content, x, top - height, *w, height);
                x += w;
            }
        }

        self.cursor_y -= height;
    }

    pub fn render(&mut self, blocks: &[Block]) {
        for block in blocks {
            match block {
                Block::Heading(text) => self.heading(text),
                Block::SubHeading(text) => self.sub_heading(text),
                Block::Paragraph(text) => self.paragraph(text),
                Block::Table(table) => self.table(table),
                Block::PageBreak => self.page_break(),
            }
        }
    }

    /// Closes the document and returns the PDF bytes. An empty document
    /// still gets one page.
    pub fn finish(mut self) -> Vec<u8> {
        self.finalize_page();
        if self.page_refs.is_empty() {
            self.start_page();
            self.finalize_page();
        }

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.iter().copied());
        drop(pages);

        self.pdf.finish()
    }
}

fn draw_text(content: &mut Content, font: Name<'_>, x: f32, y: f32, size: f32, text: &str) {
    let encoded = win_ansi(text);
    content.begin_text();
    content.set_font(font, size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(&encoded));
    content.end_text();
}

fn draw_cell_borders(content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
    content.save_state();
    content.set_line_width(0.25);
    content.set_stroke_rgb(0.0, 0.0, 0.0);
    content.rect(x, y, w, h);
    content.stroke();
    content.restore_state();
}

/// WinAnsiEncoding: Latin-1 plus the typographic characters in 0x80..=0x9F,
/// anything else becomes `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{FF}' => c as u32 as u8,
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            _ => b'?',
        })
        .collect()
}

fn wrap_lines(text: &str, width: f32, size: f32) -> Vec<String> {
    let chars = ((width / (size * AVG_CHAR_EM)).floor() as usize).max(1);
    let lines: Vec<String> = textwrap::wrap(text, chars)
        .into_iter()
        .map(|l| l.into_owned())
        .collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

fn layout_cells(row: &[String], widths: &[f32], size: f32) -> Vec<Vec<String>> {
    row.iter()
        .zip(widths)
        .map(|(text, w)| wrap_lines(text, w - 2.0 * CELL_PADDING, size))
        .collect()
}

fn row_height(cells: &[Vec<String>], size: f32) -> f32 {
    let lines = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
    lines as f32 * size * LEADING + 2.0 * CELL_PADDING
}
