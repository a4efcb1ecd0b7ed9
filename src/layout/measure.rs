use crate::font::Font;
use crate::units::{Mm, Pt};

/// Width of a string once set in a particular font and size.
///
/// The line breaker relies on widths growing with the text (appending a word
/// never makes a string narrower); that is assumed, not checked.
pub trait TextMeasure {
    fn width(&self, text: &str) -> Mm;

    /// Width of the natural gap between two words
    fn space_width(&self) -> Mm {
        self.width(" ")
    }
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> Mm,
{
    fn width(&self, text: &str) -> Mm {
        self(text)
    }
}

/// Measures text with the advances of an embedded font
#[derive(Clone, Copy)]
pub struct FontMeasure<'f> {
    pub font: &'f Font,
    pub size: Pt,
}

impl<'f> FontMeasure<'f> {
    pub fn new(font: &'f Font, size: Pt) -> FontMeasure<'f> {
        FontMeasure { font, size }
    }
}

impl TextMeasure for FontMeasure<'_> {
    fn width(&self, text: &str) -> Mm {
        self.font.width_of_text(text, self.size).into()
    }
}
