use super::composer::ComposedDocument;
use super::fonts::TypefaceIds;
use super::sheets::Mark;
use crate::document::Document;
use crate::error::PDFError;
use crate::page::{ImageLayout, Page, RuleLayout, SpanFont, SpanLayout};
use crate::rect::Rect;

impl ComposedDocument {
    /// Append the composed pages to `document`, converting every mark into PDF
    /// space. The typefaces and any images the marks refer to must already have
    /// been added to the document.
    pub fn render_into(&self, document: &mut Document, typefaces: &TypefaceIds) -> Result<(), PDFError> {
        for id in [typefaces.regular, typefaces.bold] {
            document.fonts.get(id).ok_or(PDFError::FontMissing)?;
        }
        document.set_info(self.info.clone());

        for composed in self.pages.iter() {
            let mut page = Page::new(self.size, &self.margins);
            for mark in composed.marks.iter() {
                match mark {
                    Mark::Text {
                        text,
                        x,
                        y,
                        style,
                        colour,
                    } => page.add_span(SpanLayout {
                        text: text.clone(),
                        font: SpanFont {
                            id: typefaces.get(style.weight),
                            size: style.size,
                        },
                        colour: *colour,
                        coords: page.flip(*x, *y),
                    }),
                    Mark::Rule {
                        x1,
                        x2,
                        y,
                        thickness,
                        colour,
                    } => page.add_rule(RuleLayout {
                        from: page.flip(*x1, *y),
                        to: page.flip(*x2, *y),
                        thickness: *thickness,
                        colour: *colour,
                    }),
                    Mark::Image {
                        image,
                        x,
                        top,
                        width,
                        height,
                    } => {
                        if document.images.get(*image).is_none() {
                            log::warn!("page {} refers to an image that was never added", composed.number);
                            continue;
                        }
                        let position = Rect::from_layout_box(*x, *top, *width, *height, page.height());
                        page.add_image(ImageLayout {
                            image_id: *image,
                            position,
                        });
                    }
                }
            }
            document.add_page(page);
        }

        log::debug!("rendered {} page(s)", self.pages.len());
        Ok(())
    }
}
