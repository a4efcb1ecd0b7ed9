//! Paper formats used for precinct documents.
//!
//! All sizes are given in portrait orientation as (width, height) in millimetres.
//!
//! ```
//! use acta_pdf::pagesize::{self, PaperSize};
//!
//! assert_eq!(PaperSize::Oficio.dimensions(), pagesize::OFICIO);
//! ```

use crate::units::*;
use serde::{Deserialize, Serialize};

/// Page dimensions as (width, height) in millimetres.
pub type PageSize = (Mm, Mm);

pub const A4: PageSize = (Mm(210.0), Mm(297.0));
pub const LETTER: PageSize = (Mm(215.9), Mm(279.4));
pub const LEGAL: PageSize = (Mm(215.9), Mm(355.6));
/// The "oficio" sheet still common in Latin American public offices
pub const OFICIO: PageSize = (Mm(216.0), Mm(340.0));

/// Named paper formats, as they appear in document style files
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
    Legal,
    Oficio,
}

impl PaperSize {
    pub fn dimensions(self) -> PageSize {
        match self {
            PaperSize::A4 => A4,
            PaperSize::Letter => LETTER,
            PaperSize::Legal => LEGAL,
            PaperSize::Oficio => OFICIO,
        }
    }
}
