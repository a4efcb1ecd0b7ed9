use crate::error::{LayoutError, PDFError};
use crate::layout::{FlowGeometry, Margins};
use crate::pagesize::{PageSize, PaperSize};
use crate::units::{Mm, Pt};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Geometry and type sizes shared by every generated document.
///
/// Styles are usually read from a TOML file where every key is optional:
///
/// ```
/// use acta_pdf::{DocumentStyle, Mm, pagesize::PaperSize};
///
/// let style = DocumentStyle::from_toml_str(r#"
///     paper = "oficio"
///     line_height = 7.0
/// "#).expect("valid style");
/// assert_eq!(style.paper, PaperSize::Oficio);
/// assert_eq!(style.line_height, Mm(7.0));
/// assert_eq!(style.sangria, Mm(12.7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyle {
    pub paper: PaperSize,
    /// The top margin leaves room for the letterhead, the bottom one for the footer
    pub margins: Margins,
    pub body_size: Pt,
    pub heading_size: Pt,
    pub title_size: Pt,
    /// Letterhead and footer text
    pub header_size: Pt,
    pub line_height: Mm,
    /// First-line indent of body paragraphs
    pub sangria: Mm,
    /// Extra space after each paragraph
    pub paragraph_spacing: Mm,
    /// Baseline of the first letterhead line, from the top edge
    pub header_baseline: Mm,
    /// Baseline of the page footer, from the bottom edge
    pub footer_baseline: Mm,
    /// Vertical room reserved for a row of signatures, rule and names included
    pub signature_height: Mm,
    /// Height the letterhead logo is scaled to
    pub logo_height: Mm,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        DocumentStyle {
            paper: PaperSize::A4,
            margins: Margins::trbl(Mm(35.0), Mm(20.0), Mm(20.0), Mm(20.0)),
            body_size: Pt(11.0),
            heading_size: Pt(12.0),
            title_size: Pt(14.0),
            header_size: Pt(8.0),
            line_height: Mm(6.5),
            sangria: Mm(12.7),
            paragraph_spacing: Mm(3.0),
            header_baseline: Mm(12.0),
            footer_baseline: Mm(10.0),
            signature_height: Mm(32.0),
            logo_height: Mm(18.0),
        }
    }
}

impl DocumentStyle {
    pub fn from_toml_str(source: &str) -> Result<DocumentStyle, PDFError> {
        let style: DocumentStyle = toml::from_str(source)?;
        style.validate()?;
        Ok(style)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<DocumentStyle, PDFError> {
        let source = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loading document style from {}", path.as_ref().display());
        DocumentStyle::from_toml_str(&source)
    }

    pub fn page_size(&self) -> PageSize {
        self.paper.dimensions()
    }

    pub fn column_width(&self) -> Mm {
        self.margins.column_width(self.page_size().0)
    }

    pub fn flow_geometry(&self) -> FlowGeometry {
        FlowGeometry::for_page(self.page_size(), &self.margins, self.line_height)
    }

    /// Reject a style in which the body text could never be set
    pub fn validate(&self) -> Result<(), LayoutError> {
        let geometry = self.flow_geometry();
        geometry.validate()?;

        let column = self.column_width();
        if column <= Mm(0.0) {
            return Err(LayoutError::NonPositiveWidth(column));
        }
        if self.sangria >= column {
            return Err(LayoutError::IndentExceedsWidth {
                indent: self.sangria,
                max_width: column,
            });
        }
        if self.signature_height > geometry.body_height() {
            return Err(LayoutError::LineTallerThanPage {
                line_height: self.signature_height,
                body_height: geometry.body_height(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_an_a4_sheet() {
        let style = DocumentStyle::default();
        assert_eq!(style.column_width(), Mm(170.0));
        let geometry = style.flow_geometry();
        assert_eq!(geometry.top, Mm(35.0));
        assert_eq!(geometry.bottom, Mm(277.0));
        assert!(style.validate().is_ok());
    }

    #[test]
    fn empty_file_is_the_default_style() {
        assert_eq!(
            DocumentStyle::from_toml_str("").expect("valid"),
            DocumentStyle::default()
        );
    }

    #[test]
    fn margins_can_be_overridden() {
        let style = DocumentStyle::from_toml_str(
            r#"
            body_size = 12.0

            [margins]
            top = 40.0
            right = 15.0
            bottom = 25.0
            left = 30.0
            "#,
        )
        .expect("valid");
        assert_eq!(style.body_size, Pt(12.0));
        assert_eq!(style.column_width(), Mm(165.0));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        assert!(matches!(
            DocumentStyle::from_toml_str("line_height = \"alto\""),
            Err(PDFError::Config(_))
        ));
    }

    #[test]
    fn impossible_geometry_is_rejected() {
        let err = DocumentStyle::from_toml_str("line_height = 300.0").unwrap_err();
        assert!(matches!(
            err,
            PDFError::Layout(LayoutError::LineTallerThanPage { .. })
        ));

        let style = DocumentStyle {
            sangria: Mm(200.0),
            ..DocumentStyle::default()
        };
        assert!(matches!(
            style.validate(),
            Err(LayoutError::IndentExceedsWidth { .. })
        ));
    }
}
