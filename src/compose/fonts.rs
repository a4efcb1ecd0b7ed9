use crate::document::Document;
use crate::error::PDFError;
use crate::font::Font;
use crate::layout::{FontMeasure, TextMeasure};
use crate::units::{Mm, Pt};
use id_arena::Id;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    #[default]
    Regular,
    Bold,
}

/// Weight and size of a run of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub weight: Weight,
    pub size: Pt,
}

impl TextStyle {
    pub fn regular(size: Pt) -> TextStyle {
        TextStyle {
            weight: Weight::Regular,
            size,
        }
    }

    pub fn bold(size: Pt) -> TextStyle {
        TextStyle {
            weight: Weight::Bold,
            size,
        }
    }
}

/// The faces a document is composed with, as far as layout is concerned: all it
/// needs is how wide a string is in a given style.
pub trait FontSet {
    fn measure(&self, style: TextStyle, text: &str) -> Mm;
}

/// One style of a [`FontSet`], usable wherever a [`TextMeasure`] is expected
pub struct StyledMeasure<'a, F: FontSet + ?Sized> {
    pub fonts: &'a F,
    pub style: TextStyle,
}

impl<F: FontSet + ?Sized> TextMeasure for StyledMeasure<'_, F> {
    fn width(&self, text: &str) -> Mm {
        self.fonts.measure(self.style, text)
    }
}

/// Where the regular and bold faces live in a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypefaceIds {
    pub regular: Id<Font>,
    pub bold: Id<Font>,
}

impl TypefaceIds {
    pub fn get(&self, weight: Weight) -> Id<Font> {
        match weight {
            Weight::Regular => self.regular,
            Weight::Bold => self.bold,
        }
    }
}

/// A [`FontSet`] backed by the fonts embedded in a document
pub struct Typefaces<'f> {
    regular: &'f Font,
    bold: &'f Font,
}

impl<'f> Typefaces<'f> {
    pub fn new(document: &'f Document, ids: TypefaceIds) -> Result<Typefaces<'f>, PDFError> {
        let font = move |id: Id<Font>| document.fonts.get(id).ok_or(PDFError::FontMissing);
        Ok(Typefaces {
            regular: font(ids.regular)?,
            bold: font(ids.bold)?,
        })
    }

    pub fn font(&self, weight: Weight) -> &'f Font {
        match weight {
            Weight::Regular => self.regular,
            Weight::Bold => self.bold,
        }
    }
}

impl FontSet for Typefaces<'_> {
    fn measure(&self, style: TextStyle, text: &str) -> Mm {
        FontMeasure::new(self.font(style.weight), style.size).width(text)
    }
}

/// Fixed-advance metrics: every character is `advance` em wide, whatever its
/// weight. Lets documents be composed without any font files at hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub advance: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        MonospaceMetrics { advance: 0.5 }
    }
}

impl FontSet for MonospaceMetrics {
    fn measure(&self, style: TextStyle, text: &str) -> Mm {
        Mm::from(style.size) * (self.advance * text.chars().count() as f32)
    }
}
