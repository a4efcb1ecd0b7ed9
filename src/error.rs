use crate::units::Mm;
use thiserror::Error;

/// Page geometry that can never hold a line of text. These are configuration
/// errors and are reported before any layout happens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("column width must be positive, got {0} mm")]
    NonPositiveWidth(Mm),

    #[error("line height must be positive, got {0} mm")]
    NonPositiveLineHeight(Mm),

    #[error("first-line indent of {indent} mm leaves no room in a {max_width} mm column")]
    IndentExceedsWidth { indent: Mm, max_width: Mm },

    #[error("line height of {line_height} mm does not fit a page body of {body_height} mm")]
    LineTallerThanPage { line_height: Mm, body_height: Mm },

    #[error("top margin ({top} mm) must lie above the bottom threshold ({bottom} mm)")]
    InvertedMargins { top: Mm, bottom: Mm },
}

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to parse the image
    Image(#[from] image::ImageError),

    #[error(transparent)]
    /// The requested page geometry cannot be laid out
    Layout(#[from] LayoutError),

    #[error("invalid document style: {0}")]
    /// A style file could not be parsed
    Config(#[from] toml::de::Error),

    #[error("invalid record: {0}")]
    /// A record payload could not be deserialised
    Record(#[from] serde_json::Error),

    #[error("page is missing from the document")]
    /// A page referenced by the page order is no longer in the document
    PageMissing,

    #[error("font is missing from the document")]
    /// A span refers to a font that was never added to the document
    FontMissing,
}
