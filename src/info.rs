use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// Document metadata written into the PDF information dictionary
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Info {
    /// e.g. "Denuncia N° 1234/2024"
    pub title: Option<String>,
    /// The issuing precinct
    pub author: Option<String>,
    pub subject: Option<String>,
    /// Record numbers, document kind; written comma separated
    pub keywords: Vec<String>,
    /// Creation timestamp, the moment of writing when unset
    pub created: Option<DateTime<FixedOffset>>,
}

impl Info {
    /// Create a new info block with no metadata
    pub fn new() -> Info {
        Info::default()
    }

    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn keyword<S: ToString>(&mut self, keyword: S) -> &mut Self {
        self.keywords.push(keyword.to_string());
        self
    }

    /// Pin the creation date, for reproducible output
    pub fn created(&mut self, at: DateTime<FixedOffset>) -> &mut Self {
        self.created = Some(at);
        self
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title));
        }
        if let Some(author) = &self.author {
            info.author(TextStr(author));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject));
        }
        if !self.keywords.is_empty() {
            info.keywords(TextStr(&self.keywords.join(", ")));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));

        let created = self
            .created
            .unwrap_or_else(|| Local::now().fixed_offset());
        info.creation_date(pdf_date(created));
    }
}

/// A timestamp as PDF wants it: local time plus the offset from UTC
fn pdf_date(at: DateTime<FixedOffset>) -> PDate {
    let offset = at.offset().local_minus_utc();
    let offset_hours = offset / 3600;
    let offset_minutes = ((offset % 3600) / 60).unsigned_abs();
    PDate::new(at.year() as u16)
        .month(at.month() as u8)
        .day(at.day() as u8)
        .hour(at.hour() as u8)
        .minute(at.minute() as u8)
        .second(at.second() as u8)
        .utc_offset_hour(offset_hours as i8)
        .utc_offset_minute(offset_minutes as u8)
}
