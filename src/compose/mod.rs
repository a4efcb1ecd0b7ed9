//! Putting documents together.
//!
//! A [`Composer`](crate::compose::Composer) sets titles, headings, justified
//! paragraphs, labelled fields and signature blocks one after another on a single
//! [`PageFlow`](crate::layout::PageFlow). The result is a
//! [`ComposedDocument`](crate::compose::ComposedDocument): pages of positioned
//! marks that do not depend on the PDF backend until
//! [`render_into`](crate::compose::ComposedDocument::render_into) is called.
//!
//! Layout only needs text widths, so composition works against any
//! [`FontSet`](crate::compose::FontSet): the document's embedded
//! [`Typefaces`](crate::compose::Typefaces), or
//! [`MonospaceMetrics`](crate::compose::MonospaceMetrics) when no font files are
//! available.
//!
//! ```
//! use acta_pdf::compose::{Composer, MonospaceMetrics, Signature};
//! use acta_pdf::{DocumentStyle, Info};
//!
//! let metrics = MonospaceMetrics::default();
//! let letterhead = vec!["Policía Nacional".to_string()];
//! let mut composer = Composer::with_letterhead(DocumentStyle::default(), &metrics, &letterhead, None)
//!     .expect("valid style");
//! composer
//!     .title("CONSTANCIA")?
//!     .paragraph("Se deja constancia de lo actuado.")?
//!     .signatures(&[Signature::new("Luis Pérez", "Oficial de guardia")])?;
//!
//! let composed = composer.finish(Info::new());
//! assert_eq!(composed.page_count(), 1);
//! # Ok::<(), acta_pdf::LayoutError>(())
//! ```

mod composer;
mod fonts;
mod render;
mod sheets;

pub use composer::*;
pub use fonts::*;
pub use sheets::*;
