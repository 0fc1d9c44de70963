//! Template renderer: pure mapping from resume content + template kind to a
//! rendered document.
//!
//! Rendering has no state and no I/O; identical input yields byte-identical
//! output. Each layout decides for itself which optional content fields it
//! shows (absent fields are omitted, never rendered as empty placeholders)
//! and how the comma-separated skills string is formatted.

pub mod templates;

use crate::models::resumes::{ResumeContent, TemplateKind};

/// A rendered resume: an HTML body for on-screen preview plus a flattened
/// sequence of typed text lines consumed by the PDF export pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub template: TemplateKind,
    pub html: String,
    pub lines: Vec<Line>,
}

/// One line of the flattened text layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

/// Typographic role of a line, used by the exporter to pick face and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Subtitle,
    Heading,
    Body,
}

impl Line {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Renders `content` with the given template.
///
/// Unknown template identifiers never reach this function; the boundary
/// coerces them to [`TemplateKind::Classic`] via `parse_or_default`.
pub fn render(content: &ResumeContent, template: TemplateKind) -> RenderedDocument {
    let (html, lines) = match template {
        TemplateKind::Classic => templates::classic(content),
        TemplateKind::Modern => templates::modern(content),
        TemplateKind::Minimal => templates::minimal(content),
        TemplateKind::Professional => templates::professional(content),
        TemplateKind::Creative => templates::creative(content),
    };

    RenderedDocument {
        template,
        html,
        lines,
    }
}

/// Escapes text for inclusion in HTML.
pub(crate) fn esc(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
