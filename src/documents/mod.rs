//! The precinct's documents.
//!
//! Each generator turns a record into a [`ComposedDocument`] with the same
//! letterhead, body style and page numbering; only the wording differs.
//!
//! ```no_run
//! use acta_pdf::compose::{Logo, TypefaceIds, Typefaces};
//! use acta_pdf::records::{self, Denuncia, Precinct};
//! use acta_pdf::{documents, Document, DocumentStyle, Font, Image};
//!
//! # fn main() -> Result<(), acta_pdf::PDFError> {
//! let mut document = Document::default();
//! let ids = TypefaceIds {
//!     regular: document.add_font(Font::load(std::fs::read("fonts/Regular.ttf")?)?),
//!     bold: document.add_font(Font::load(std::fs::read("fonts/Bold.ttf")?)?),
//! };
//! let logo = Image::load_or_skip("escudo.png").map(|image| {
//!     let aspect_ratio = image.aspect_ratio();
//!     Logo { id: document.add_image(image), aspect_ratio }
//! });
//!
//! let precinct: Precinct = records::from_json(&std::fs::read_to_string("comisaria.json")?)?;
//! let denuncia: Denuncia = records::from_json(&std::fs::read_to_string("denuncia.json")?)?;
//!
//! let composed = {
//!     let typefaces = Typefaces::new(&document, ids)?;
//!     documents::denuncia(&denuncia, &precinct, logo, &DocumentStyle::default(), &typefaces)?
//! };
//! composed.render_into(&mut document, &ids)?;
//! document.write(std::fs::File::create("denuncia.pdf")?)?;
//! # Ok(())
//! # }
//! ```

mod certificado;
mod custodia;
mod denuncia;

pub use certificado::certificado;
pub use custodia::custodia;
pub use denuncia::denuncia;

use crate::compose::{Composer, FontSet, Logo, Signature};
use crate::config::DocumentStyle;
use crate::error::LayoutError;
use crate::info::Info;
use crate::records::{long_date, Officer, Precinct};
use chrono::NaiveDate;

fn composer<'f, F: FontSet + ?Sized>(
    precinct: &Precinct,
    logo: Option<Logo>,
    style: &DocumentStyle,
    fonts: &'f F,
) -> Result<Composer<'f, F>, LayoutError> {
    Composer::with_letterhead(style.clone(), fonts, &precinct.letterhead(), logo)
}

/// "En la ciudad de Rosario, a los 5 días del mes de marzo de 2024, siendo las
/// 14:30 horas"
fn opening(precinct: &Precinct, date: NaiveDate, time: Option<&str>) -> String {
    let mut opening = format!("En la ciudad de {}, {}", precinct.city(), long_date(date));
    if let Some(time) = time.map(str::trim).filter(|t| !t.is_empty()) {
        opening.push_str(&format!(", siendo las {time} horas"));
    }
    opening
}

fn officer_signature(officer: &Officer, role: &str) -> Signature {
    let caption = match officer.badge.as_deref().map(str::trim) {
        Some(badge) if !badge.is_empty() => format!("{role} - Placa N° {badge}"),
        _ => role.to_string(),
    };
    Signature::new(officer.title(), caption)
}

fn info(title: String, precinct: &Precinct, subject: &str, keywords: &[&str]) -> Info {
    let mut info = Info::new();
    info.title(title).subject(subject);
    for keyword in keywords {
        info.keyword(keyword);
    }
    if !precinct.name.trim().is_empty() {
        info.author(&precinct.name);
    }
    info
}
