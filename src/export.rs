//! Export pipeline: serializes a rendered document into PDF bytes.
//!
//! Operates only on the transient render handed to it; persisted state is
//! never read or written here, so a failed export cannot corrupt anything.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};

use crate::{
    error::{Error, Result},
    render::{LineKind, RenderedDocument},
};

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 20.0;

/// Maximum characters per line before wrapping, by typographic role.
fn wrap_width(kind: LineKind) -> usize {
    match kind {
        LineKind::Title => 40,
        LineKind::Subtitle => 60,
        LineKind::Heading => 60,
        LineKind::Body => 95,
    }
}

fn font_size(kind: LineKind) -> f64 {
    match kind {
        LineKind::Title => 22.0,
        LineKind::Subtitle => 14.0,
        LineKind::Heading => 13.0,
        LineKind::Body => 10.5,
    }
}

/// Vertical advance after a line, in millimeters.
fn advance(kind: LineKind) -> f64 {
    match kind {
        LineKind::Title => 10.0,
        LineKind::Subtitle => 8.0,
        LineKind::Heading => 7.0,
        LineKind::Body => 5.5,
    }
}

/// Wraps text at whitespace so no emitted line exceeds `max` characters.
/// A single overlong word is emitted as its own line rather than split.
fn wrap(text: &str, max: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max {
            current.push(' ');
            current.push_str(word);
        } else {
            out.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Serializes a rendered resume into a downloadable PDF.
///
/// Lines are laid onto A4 pages top to bottom; a new page starts whenever
/// the cursor passes the bottom margin, so long documents paginate instead
/// of truncating.
pub fn pdf_bytes(document: &RenderedDocument) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Resume",
        Mm(PAGE_WIDTH_MM as _),
        Mm(PAGE_HEIGHT_MM as _),
        "Layer 1",
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| Error::Export(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| Error::Export(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    for line in &document.lines {
        let face: &IndirectFontRef = match line.kind {
            LineKind::Title | LineKind::Heading => &bold,
            LineKind::Subtitle | LineKind::Body => &regular,
        };

        // Breathing room above section headings, except at a page top.
        if line.kind == LineKind::Heading && y < PAGE_HEIGHT_MM - MARGIN_MM {
            y -= 3.0;
        }

        for piece in wrap(&line.text, wrap_width(line.kind)) {
            if y < MARGIN_MM {
                let (page, layer_idx) = doc.add_page(
                    Mm(PAGE_WIDTH_MM as _),
                    Mm(PAGE_HEIGHT_MM as _),
                    "Layer 1",
                );
                layer = doc.get_page(page).get_layer(layer_idx);
                y = PAGE_HEIGHT_MM - MARGIN_MM;
            }

            layer.use_text(
                piece,
                font_size(line.kind) as _,
                Mm(MARGIN_MM as _),
                Mm(y as _),
                face,
            );
            y -= advance(line.kind);
        }
    }

    doc.save_to_bytes().map_err(|e| Error::Export(e.to_string()))
}
