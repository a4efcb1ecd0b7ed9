use super::flow::{FlowGeometry, PageFlow, PageHook, PlacedWord};
use super::justify::{align, TextAlign};
use super::lines::break_into_lines;
use super::measure::TextMeasure;
use crate::error::LayoutError;
use crate::units::{Mm, Pt};

/// Line height as a multiple of the font size, used when a request does not set
/// one explicitly
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// One paragraph (or several, separated by line breaks) to set in a column
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRequest {
    pub text: String,
    pub max_width: Mm,
    pub font_size: Pt,
    pub indent_first_line: Mm,
    /// Advance between lines; derived from `font_size` when unset
    pub line_height: Option<Mm>,
    pub align: TextAlign,
}

impl LayoutRequest {
    /// A justified, unindented request in 11 pt
    pub fn new<S: Into<String>>(text: S, max_width: Mm) -> LayoutRequest {
        LayoutRequest {
            text: text.into(),
            max_width,
            font_size: Pt(11.0),
            indent_first_line: Mm(0.0),
            line_height: None,
            align: TextAlign::Justify,
        }
    }

    pub fn font_size(mut self, size: Pt) -> Self {
        self.font_size = size;
        self
    }

    pub fn indent(mut self, indent: Mm) -> Self {
        self.indent_first_line = indent;
        self
    }

    pub fn line_height(mut self, line_height: Mm) -> Self {
        self.line_height = Some(line_height);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn effective_line_height(&self) -> Mm {
        self.line_height
            .unwrap_or_else(|| Mm::from(self.font_size) * LINE_HEIGHT_FACTOR)
    }

    /// Reject column geometry no line could be set in
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.max_width <= Mm(0.0) {
            return Err(LayoutError::NonPositiveWidth(self.max_width));
        }
        if self.indent_first_line >= self.max_width {
            return Err(LayoutError::IndentExceedsWidth {
                indent: self.indent_first_line,
                max_width: self.max_width,
            });
        }
        let line_height = self.effective_line_height();
        if line_height <= Mm(0.0) {
            return Err(LayoutError::NonPositiveLineHeight(line_height));
        }
        Ok(())
    }
}

/// Break, align and place a request's text at the flow's cursor, breaking pages
/// as needed. Words come back in reading order.
pub fn layout_paragraph<H, M>(
    flow: &mut PageFlow<H>,
    request: &LayoutRequest,
    measure: &M,
) -> Result<Vec<PlacedWord>, LayoutError>
where
    H: PageHook,
    M: TextMeasure + ?Sized,
{
    request.validate()?;
    let line_height = request.effective_line_height();

    let mut placed = Vec::new();
    for line in break_into_lines(
        &request.text,
        request.max_width,
        measure,
        request.indent_first_line,
    ) {
        let positioned = align(
            &line,
            request.max_width,
            request.indent_first_line,
            request.align,
            measure,
        );
        placed.extend(flow.emit_line(positioned.words, line_height)?);
    }
    Ok(placed)
}

/// Result of laying out text on fresh pages
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub words: Vec<PlacedWord>,
    pub page_count: u32,
}

/// Lay out `request` from the top of page 1. Deterministic: identical input
/// always yields identical placements.
pub fn layout_text<M: TextMeasure + ?Sized>(
    request: &LayoutRequest,
    geometry: FlowGeometry,
    measure: &M,
) -> Result<TextLayout, LayoutError> {
    let mut flow = PageFlow::without_hook(geometry)?;
    let words = layout_paragraph(&mut flow, request, measure)?;
    Ok(TextLayout {
        words,
        page_count: flow.page_count(),
    })
}
