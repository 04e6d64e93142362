// src/export/pdf.rs

use crate::core::calculator::badges::Severity;
use crate::export::TabularData;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

const ROW_H: f32 = 16.0;
const TITLE_BAND: f32 = 28.0;
const CELL_PAD: f32 = 3.0;

type Rgb = (f32, f32, f32);

const HEADER_FILL: Rgb = (0.18, 0.46, 0.71);
const BAD_FILL: Rgb = (0.99, 0.86, 0.86);
const WARN_FILL: Rgb = (1.0, 0.95, 0.80);
const ZEBRA_FILL: Rgb = (0.96, 0.96, 0.96);
const GRID: Rgb = (0.70, 0.70, 0.70);

/// Page geometry in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub body_pt: f32,
    pub header_pt: f32,
}

impl PageSize {
    pub const A4_PORTRAIT: PageSize = PageSize {
        width: 595.0,
        height: 842.0,
        margin: 40.0,
        body_pt: 9.0,
        header_pt: 9.5,
    };

    /// Wide tables such as the presence matrix.
    pub const A4_LANDSCAPE: PageSize = PageSize {
        width: 842.0,
        height: 595.0,
        margin: 28.0,
        body_pt: 7.0,
        header_pt: 7.5,
    };

    fn usable_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Body rows that fit under the title band and the header row.
    fn rows_per_page(&self) -> usize {
        let room = self.height - 2.0 * self.margin - TITLE_BAND - ROW_H;
        ((room / ROW_H).floor() as usize).max(1)
    }
}

/// Table-only PDF document. Object ids are handed out sequentially.
pub struct PdfTable {
    pdf: Pdf,
    size: PageSize,
    catalog: Ref,
    tree: Ref,
    font: Ref,
    pages: Vec<Ref>,
    next: i32,
}

impl PdfTable {
    pub fn new(size: PageSize) -> Self {
        let mut pdf = Pdf::new();
        let font = Ref::new(3);
        pdf.type1_font(font).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            size,
            catalog: Ref::new(1),
            tree: Ref::new(2),
            font,
            pages: Vec::new(),
            next: 4,
        }
    }

    fn alloc(&mut self) -> Ref {
        let r = Ref::new(self.next);
        self.next += 1;
        r
    }

    /// Lay the table out over as many pages as needed. The header row is
    /// repeated on every page.
    pub fn render(&mut self, data: &TabularData) {
        let widths = column_widths(data, self.size.usable_width());
        let per_page = self.size.rows_per_page();
        let total_pages = data.rows.len().div_ceil(per_page).max(1);

        for page_no in 0..total_pages {
            let start = page_no * per_page;
            let end = (start + per_page).min(data.rows.len());
            let mut content = Content::new();

            self.paint_page(&mut content, data, &widths, start..end);
            self.footer(&mut content, page_no + 1, total_pages);
            self.push_page(content);
        }
    }

    fn paint_page(
        &self,
        content: &mut Content,
        data: &TabularData,
        widths: &[f32],
        rows: std::ops::Range<usize>,
    ) {
        let s = self.size;
        let left = s.margin;
        let mut y = s.height - s.margin - TITLE_BAND;

        text(content, left, y + 10.0, s.header_pt + 4.0, &data.title);

        fill_band(content, left, y - ROW_H, widths, HEADER_FILL);
        content.set_fill_rgb(1.0, 1.0, 1.0);
        self.cells(content, left, y - ROW_H, widths, &data.headers, s.header_pt);
        content.set_fill_rgb(0.0, 0.0, 0.0);
        y -= ROW_H;

        for idx in rows {
            y -= ROW_H;
            if let Some(fill) = row_fill(data.severity_of(idx), idx) {
                fill_band(content, left, y, widths, fill);
            }
            self.cells(content, left, y, widths, &data.rows[idx], s.body_pt);
        }
    }

    fn cells(&self, content: &mut Content, left: f32, y: f32, widths: &[f32], row: &[String], pt: f32) {
        let mut x = left;
        for (w, cell) in widths.iter().zip(row) {
            let fitted = fit_to_width(cell, w - 2.0 * CELL_PAD, pt);
            text(content, x + CELL_PAD, y + 4.5, pt, &fitted);

            content.save_state();
            content.set_stroke_rgb(GRID.0, GRID.1, GRID.2);
            content.set_line_width(0.4);
            content.rect(x, y, *w, ROW_H);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    fn footer(&self, content: &mut Content, page: usize, of: usize) {
        let s = self.size;
        let label = format!("Page {page} / {of}");
        text(content, s.width - s.margin - 60.0, s.margin / 2.0, s.body_pt, &label);
    }

    fn push_page(&mut self, content: Content) {
        let page_id = self.alloc();
        let content_id = self.alloc();
        let (w, h) = (self.size.width, self.size.height);

        let mut page = self.pdf.page(page_id);
        page.parent(self.tree)
            .media_box(Rect::new(0.0, 0.0, w, h))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font);
        drop(page);

        self.pdf.stream(content_id, &content.finish());
        self.pages.push(page_id);
    }

    /// Close the page tree and return the serialized document.
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog).pages(self.tree);
        self.pdf
            .pages(self.tree)
            .count(self.pages.len() as i32)
            .kids(self.pages.iter().copied());
        self.pdf.finish()
    }
}

fn text(content: &mut Content, x: f32, y: f32, pt: f32, s: &str) {
    let safe = pdf_safe(s);
    content.begin_text();
    content.set_font(Name(b"F1"), pt);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(safe.as_bytes()));
    content.end_text();
}

fn fill_band(content: &mut Content, left: f32, y: f32, widths: &[f32], (r, g, b): Rgb) {
    content.save_state();
    content.set_fill_rgb(r, g, b);
    content.rect(left, y, widths.iter().sum(), ROW_H);
    content.fill_nonzero();
    content.restore_state();
}

/// Flagged rows are tinted by severity; the rest alternate.
fn row_fill(severity: Option<Severity>, idx: usize) -> Option<Rgb> {
    match severity {
        Some(Severity::Bad) => Some(BAD_FILL),
        Some(Severity::Warn) => Some(WARN_FILL),
        _ if idx % 2 == 0 => Some(ZEBRA_FILL),
        _ => None,
    }
}

/// Widths proportional to the longest cell per column, squeezed into `room`.
fn column_widths(data: &TabularData, room: f32) -> Vec<f32> {
    let mut chars: Vec<usize> = data.headers.iter().map(|h| h.chars().count()).collect();
    for row in &data.rows {
        for (slot, cell) in chars.iter_mut().zip(row) {
            *slot = (*slot).max(cell.chars().count());
        }
    }

    let natural: Vec<f32> = chars
        .iter()
        .map(|c| (*c).max(3) as f32 * 5.5 + 2.0 * CELL_PAD)
        .collect();
    let total: f32 = natural.iter().sum();
    if total <= room || total == 0.0 {
        return natural;
    }
    natural.iter().map(|w| w * room / total).collect()
}

/// Helvetica is a single-byte font: map the glyphs we emit to ASCII.
fn pdf_safe(text: &str) -> String {
    const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if let Some(level) = BLOCKS.iter().position(|b| *b == c) {
            out.push(char::from(b'1' + level as u8));
        } else if c == '·' {
            out.push('.');
        } else if c == '…' {
            out.push_str("...");
        } else if c.is_ascii() {
            out.push(c);
        } else {
            out.push('?');
        }
    }
    out
}

/// Truncate `text` so that it roughly fits `width` points.
fn fit_to_width(text: &str, width: f32, font_size: f32) -> String {
    let max_chars = (width / (font_size * 0.55)).floor().max(1.0) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{cut}…")
}
