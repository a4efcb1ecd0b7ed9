mod colour;
pub use colour::*;

/// Composition of flowed text, fields and signature blocks into pages
pub mod compose;

mod config;
pub use config::*;

mod content;

mod document;
pub use document::*;

/// Generators for the precinct's official documents
pub mod documents;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Line breaking, justification and page flow
pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

/// Records that feed the document generators
pub mod records;

pub(crate) mod refs;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
