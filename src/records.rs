//! The data that ends up on paper.
//!
//! Records arrive from the precinct's database already validated; all this module
//! does is give them a typed shape and render optional values consistently.
//! Anything left blank prints as [`NOT_SPECIFIED`].
//!
//! ```
//! use acta_pdf::records::{self, Person};
//!
//! let person: Person = records::from_json(r#"{ "name": "Ana Gómez", "age": 34 }"#)
//!     .expect("valid record");
//! assert_eq!(person.address(), records::NOT_SPECIFIED);
//! ```

use crate::error::PDFError;
use chrono::{Datelike, NaiveDate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Printed in place of any value the record does not carry
pub const NOT_SPECIFIED: &str = "No especificado";

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Parse any record from its JSON form
pub fn from_json<T: DeserializeOwned>(source: &str) -> Result<T, PDFError> {
    Ok(serde_json::from_str(source)?)
}

/// `value`, unless it is missing or blank
pub fn or_not_specified(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => NOT_SPECIFIED,
    }
}

/// `05/03/2024`
pub fn short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Month name in lower case, `month` being 1-based
pub fn month_name(month: u32) -> &'static str {
    MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or(NOT_SPECIFIED)
}

/// The form dates take in the closing formula of an acta: "a los 5 días del mes
/// de marzo de 2024"
pub fn long_date(date: NaiveDate) -> String {
    let day = date.day();
    let days = if day == 1 {
        "al 1 día".to_string()
    } else {
        format!("a los {day} días")
    };
    format!(
        "{days} del mes de {} de {}",
        month_name(date.month()),
        date.year()
    )
}

fn optional_date(date: Option<NaiveDate>) -> String {
    date.map(short_date)
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

/// A citizen named on a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub name: String,
    /// National identity document number
    pub id_number: Option<String>,
    pub nationality: Option<String>,
    pub age: Option<u32>,
    pub occupation: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl Person {
    pub fn name(&self) -> &str {
        or_not_specified(Some(self.name.as_str()))
    }

    pub fn id_number(&self) -> &str {
        or_not_specified(self.id_number.as_deref())
    }

    pub fn nationality(&self) -> &str {
        or_not_specified(self.nationality.as_deref())
    }

    pub fn age(&self) -> String {
        self.age
            .map(|a| format!("{a} años"))
            .unwrap_or_else(|| NOT_SPECIFIED.to_string())
    }

    pub fn occupation(&self) -> &str {
        or_not_specified(self.occupation.as_deref())
    }

    pub fn address(&self) -> &str {
        or_not_specified(self.address.as_deref())
    }

    pub fn phone(&self) -> &str {
        or_not_specified(self.phone.as_deref())
    }

    /// The identification clause used when a person appears before the officer
    pub fn introduction(&self) -> String {
        format!(
            "{}, de nacionalidad {}, edad {}, documento de identidad N° {}, de ocupación {}, \
             con domicilio en {} y teléfono {}",
            self.name(),
            self.nationality(),
            self.age(),
            self.id_number(),
            self.occupation(),
            self.address(),
            self.phone()
        )
    }
}

/// The officer who takes down or signs a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Officer {
    pub name: String,
    pub rank: Option<String>,
    pub badge: Option<String>,
}

impl Officer {
    /// "Sargento Luis Pérez", or just the name when the rank is unknown
    pub fn title(&self) -> String {
        let name = or_not_specified(Some(self.name.as_str()));
        match self.rank.as_deref().map(str::trim) {
            Some(rank) if !rank.is_empty() => format!("{rank} {name}"),
            _ => name.to_string(),
        }
    }

    pub fn badge(&self) -> &str {
        or_not_specified(self.badge.as_deref())
    }
}

/// The issuing unit, printed as the letterhead of every page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Precinct {
    /// Issuing institution, e.g. "Policía Nacional"
    pub institution: String,
    /// The unit itself, e.g. "Comisaría Tercera"
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// City the documents are dated in
    pub city: String,
    /// Crest drawn at the left of the letterhead
    pub logo: Option<PathBuf>,
}

impl Precinct {
    /// Letterhead lines, top to bottom. Blank entries are left out.
    pub fn letterhead(&self) -> Vec<String> {
        let contact = match (self.address.as_deref(), self.phone.as_deref()) {
            (Some(address), Some(phone)) => Some(format!("{address} - Tel. {phone}")),
            (Some(address), None) => Some(address.to_string()),
            (None, Some(phone)) => Some(format!("Tel. {phone}")),
            (None, None) => None,
        };
        [Some(self.institution.clone()), Some(self.name.clone()), contact]
            .into_iter()
            .flatten()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    }

    pub fn city(&self) -> &str {
        or_not_specified(Some(self.city.as_str()))
    }
}

/// A criminal complaint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Denuncia {
    /// Record number, e.g. "1234/2024"
    pub number: String,
    /// When the complaint was filed
    pub date: NaiveDate,
    /// Time of filing, as written by the officer ("14:30")
    #[serde(default)]
    pub time: Option<String>,
    pub complainant: Person,
    /// Kind of offence reported
    pub offense: String,
    #[serde(default)]
    pub incident_date: Option<NaiveDate>,
    #[serde(default)]
    pub incident_time: Option<String>,
    #[serde(default)]
    pub incident_place: Option<String>,
    /// The complainant's account; line breaks separate paragraphs
    pub narrative: String,
    #[serde(default)]
    pub officer: Officer,
}

impl Denuncia {
    pub fn offense(&self) -> &str {
        or_not_specified(Some(self.offense.as_str()))
    }

    pub fn time(&self) -> &str {
        or_not_specified(self.time.as_deref())
    }

    pub fn incident_date(&self) -> String {
        optional_date(self.incident_date)
    }

    pub fn incident_time(&self) -> &str {
        or_not_specified(self.incident_time.as_deref())
    }

    pub fn incident_place(&self) -> &str {
        or_not_specified(self.incident_place.as_deref())
    }
}

/// A request for a certificate stating that a complaint was filed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateRequest {
    /// Certificate number
    pub number: String,
    pub issued_on: NaiveDate,
    /// The complaint being certified
    pub denuncia_number: String,
    pub denuncia_date: NaiveDate,
    pub complainant: Person,
    pub offense: String,
    /// Authority or institution the certificate is addressed to
    #[serde(default)]
    pub addressee: Option<String>,
    /// What the certificate will be used for
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub officer: Officer,
}

impl CertificateRequest {
    pub fn addressee(&self) -> &str {
        or_not_specified(self.addressee.as_deref())
    }

    pub fn purpose(&self) -> Option<&str> {
        self.purpose
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

/// A vehicle or other object taken into custody
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    /// "Automóvil", "Motocicleta", "Bicicleta", ...
    pub kind: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub plate: Option<String>,
    pub colour: Option<String>,
    pub chassis: Option<String>,
    pub engine: Option<String>,
    /// Condition on intake ("Con daños en el paragolpes trasero")
    pub condition: Option<String>,
}

impl Asset {
    /// Labelled description, in the order it is printed
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let field = |value: &Option<String>| or_not_specified(value.as_deref()).to_string();
        vec![
            ("Tipo", or_not_specified(Some(self.kind.as_str())).to_string()),
            ("Marca", field(&self.brand)),
            ("Modelo", field(&self.model)),
            ("Dominio / Placa", field(&self.plate)),
            ("Color", field(&self.colour)),
            ("N° de chasis", field(&self.chassis)),
            ("N° de motor", field(&self.engine)),
            ("Estado", field(&self.condition)),
        ]
    }
}

/// Receipt for an asset handed over to the precinct's custody
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustodyReceipt {
    pub number: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<String>,
    pub asset: Asset,
    /// The complaint the asset relates to, if any
    #[serde(default)]
    pub denuncia_number: Option<String>,
    pub delivered_by: Person,
    #[serde(default)]
    pub received_by: Officer,
    #[serde(default)]
    pub observations: Option<String>,
}

impl CustodyReceipt {
    pub fn time(&self) -> &str {
        or_not_specified(self.time.as_deref())
    }

    pub fn observations(&self) -> &str {
        or_not_specified(self.observations.as_deref())
    }
}
