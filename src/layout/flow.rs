use super::justify::WordOffset;
use super::margins::Margins;
use crate::error::LayoutError;
use crate::pagesize::PageSize;
use crate::units::Mm;

/// Slack allowed when comparing the cursor against the bottom threshold, so that
/// a page sized for exactly N lines holds N lines despite rounding in f32 sums
pub(crate) const EPSILON: Mm = Mm(1e-4);

/// Where the next line will be written. `y` is the baseline of that line,
/// measured from the top edge of the sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCursor {
    /// 1-based page number
    pub page: u32,
    pub y: Mm,
}

/// Vertical extent of the writing area and the column's left edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowGeometry {
    pub left: Mm,
    /// First baseline on every page
    pub top: Mm,
    /// No line may extend below this
    pub bottom: Mm,
    /// Default advance between lines
    pub line_height: Mm,
}

impl FlowGeometry {
    pub fn for_page(size: PageSize, margins: &Margins, line_height: Mm) -> FlowGeometry {
        FlowGeometry {
            left: margins.left,
            top: margins.top,
            bottom: size.1 - margins.bottom,
            line_height,
        }
    }

    /// Height available between the top margin and the bottom threshold
    pub fn body_height(&self) -> Mm {
        self.bottom - self.top
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.bottom <= self.top {
            return Err(LayoutError::InvertedMargins {
                top: self.top,
                bottom: self.bottom,
            });
        }
        self.check_line_height(self.line_height)
    }

    fn check_line_height(&self, line_height: Mm) -> Result<(), LayoutError> {
        if line_height <= Mm(0.0) {
            return Err(LayoutError::NonPositiveLineHeight(line_height));
        }
        if line_height > self.body_height() + EPSILON {
            return Err(LayoutError::LineTallerThanPage {
                line_height,
                body_height: self.body_height(),
            });
        }
        Ok(())
    }
}

/// A word with its final position on the document
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    /// Left edge of the word, from the left edge of the sheet
    pub x: Mm,
    /// Baseline, from the top edge of the sheet
    pub y: Mm,
    /// 1-based page number
    pub page: u32,
}

/// Notified whenever a page is started, including the first one. This is where
/// running headers and footers get (re)drawn.
pub trait PageHook {
    fn page_started(&mut self, page: u32);
}

/// A [`PageHook`] that does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHook;

impl PageHook for NoHook {
    fn page_started(&mut self, _page: u32) {}
}

impl<F> PageHook for F
where
    F: FnMut(u32),
{
    fn page_started(&mut self, page: u32) {
        self(page)
    }
}

/// Vertical bookkeeping for one document.
///
/// Owns the document's single [`PageCursor`]. Lines are stamped with the
/// cursor's page and baseline and the cursor moves down; whenever a line would
/// cross the bottom threshold the flow moves to the top of a new page first.
/// Fixed elements (signature blocks, images) use [`PageFlow::ensure_space`],
/// [`PageFlow::cursor`] and [`PageFlow::skip`] so they share the same page
/// breaks as the flowed text.
pub struct PageFlow<H: PageHook = NoHook> {
    geometry: FlowGeometry,
    cursor: PageCursor,
    hook: H,
}

impl PageFlow<NoHook> {
    pub fn without_hook(geometry: FlowGeometry) -> Result<PageFlow<NoHook>, LayoutError> {
        PageFlow::new(geometry, NoHook)
    }
}

impl<H: PageHook> PageFlow<H> {
    /// Validate the geometry and open page 1
    pub fn new(geometry: FlowGeometry, mut hook: H) -> Result<PageFlow<H>, LayoutError> {
        geometry.validate()?;
        hook.page_started(1);
        Ok(PageFlow {
            geometry,
            cursor: PageCursor {
                page: 1,
                y: geometry.top,
            },
            hook,
        })
    }

    pub fn geometry(&self) -> &FlowGeometry {
        &self.geometry
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// Pages started so far
    pub fn page_count(&self) -> u32 {
        self.cursor.page
    }

    /// Space left on the current page
    pub fn remaining(&self) -> Mm {
        self.geometry.bottom - self.cursor.y
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    pub fn hook_mut(&mut self) -> &mut H {
        &mut self.hook
    }

    pub fn into_hook(self) -> H {
        self.hook
    }

    /// Start a new page and put the cursor at its top margin
    pub fn advance_page(&mut self) {
        self.cursor.page += 1;
        self.cursor.y = self.geometry.top;
        log::debug!("starting page {}", self.cursor.page);
        self.hook.page_started(self.cursor.page);
    }

    /// Make sure `required` fits below the cursor, breaking the page if it does not.
    /// Returns whether a page break happened. Asking for more than a whole page
    /// body is a configuration error.
    pub fn ensure_space(&mut self, required: Mm) -> Result<bool, LayoutError> {
        if required > self.geometry.body_height() + EPSILON {
            return Err(LayoutError::LineTallerThanPage {
                line_height: required,
                body_height: self.geometry.body_height(),
            });
        }
        if self.cursor.y + required > self.geometry.bottom + EPSILON {
            self.advance_page();
            return Ok(true);
        }
        Ok(false)
    }

    /// Move the cursor down by `dy` (paragraph spacing and the like). Spacing never
    /// carries over a page break: if it does not fit, the next page starts instead.
    /// The cursor only moves down, so a negative or NaN `dy` is ignored.
    pub fn skip(&mut self, dy: Mm) {
        if dy.0.is_nan() || dy <= Mm(0.0) {
            log::debug!("ignoring vertical skip of {dy} mm");
            return;
        }
        if self.cursor.y + dy > self.geometry.bottom + EPSILON {
            self.advance_page();
        } else {
            self.cursor.y += dy;
        }
    }

    /// Stamp a line's words with the current page and baseline, then move down by
    /// `line_height`
    pub fn emit_line(
        &mut self,
        words: Vec<WordOffset>,
        line_height: Mm,
    ) -> Result<Vec<PlacedWord>, LayoutError> {
        self.geometry.check_line_height(line_height)?;
        self.ensure_space(line_height)?;

        let PageCursor { page, y } = self.cursor;
        let left = self.geometry.left;
        log::trace!("line of {} word(s) on page {page} at {y} mm", words.len());

        let placed = words
            .into_iter()
            .map(|word| PlacedWord {
                text: word.text,
                x: left + word.x,
                y,
                page,
            })
            .collect();
        self.cursor.y += line_height;
        Ok(placed)
    }
}
