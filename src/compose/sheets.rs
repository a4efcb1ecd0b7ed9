use super::fonts::{FontSet, TextStyle};
use crate::colour::{colours, Colour};
use crate::config::DocumentStyle;
use crate::image::Image;
use crate::layout::{PageHook, LINE_HEIGHT_FACTOR};
use crate::units::{Mm, Pt};
use id_arena::Id;

/// Something drawn on a composed page. Positions are in millimetres from the
/// top-left corner of the sheet; text is positioned by its baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Text {
        text: String,
        x: Mm,
        y: Mm,
        style: TextStyle,
        colour: Colour,
    },
    /// A horizontal rule at `y`, from `x1` to `x2`
    Rule {
        x1: Mm,
        x2: Mm,
        y: Mm,
        thickness: Pt,
        colour: Colour,
    },
    Image {
        image: Id<Image>,
        x: Mm,
        top: Mm,
        width: Mm,
        height: Mm,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComposedPage {
    /// 1-based
    pub number: u32,
    pub marks: Vec<Mark>,
}

impl ComposedPage {
    /// Every text mark on the page, in the order it was set
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.marks.iter().filter_map(|mark| match mark {
            Mark::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// The page's text, words joined by single spaces
    pub fn text(&self) -> String {
        self.words().collect::<Vec<_>>().join(" ")
    }
}

/// An image already added to the document, with the proportions it is drawn in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Logo {
    pub id: Id<Image>,
    /// Height over width
    pub aspect_ratio: f32,
}

impl Logo {
    pub fn new(id: Id<Image>, image: &Image) -> Logo {
        Logo {
            id,
            aspect_ratio: image.aspect_ratio(),
        }
    }
}

/// Letterhead drawn at the top of every page: centred lines (the first one in
/// bold), an optional logo at the left margin and a rule separating it from the
/// body. The marks are worked out once and stamped onto each new page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunningHeader {
    marks: Vec<Mark>,
}

impl RunningHeader {
    /// A header that draws nothing
    pub fn none() -> RunningHeader {
        RunningHeader::default()
    }

    pub fn new<F: FontSet + ?Sized>(
        lines: &[String],
        logo: Option<Logo>,
        style: &DocumentStyle,
        fonts: &F,
    ) -> RunningHeader {
        let (page_width, _) = style.page_size();
        let left = style.margins.left;
        let right = page_width - style.margins.right;
        let advance = Mm::from(style.header_size) * LINE_HEIGHT_FACTOR;
        let mut marks = Vec::new();

        if let Some(logo) = logo {
            let height = style.logo_height;
            let width = height / logo.aspect_ratio.max(f32::EPSILON);
            marks.push(Mark::Image {
                image: logo.id,
                x: left,
                top: (style.header_baseline - advance).max(Mm(0.0)),
                width,
                height,
            });
        }

        for (i, line) in lines.iter().enumerate() {
            let text_style = if i == 0 {
                TextStyle::bold(style.header_size)
            } else {
                TextStyle::regular(style.header_size)
            };
            let width = fonts.measure(text_style, line);
            let x = left + ((right - left - width) / 2.0).max(Mm(0.0));
            marks.push(Mark::Text {
                text: line.clone(),
                x,
                y: style.header_baseline + advance * i as f32,
                style: text_style,
                colour: colours::MUTED,
            });
        }

        if !marks.is_empty() {
            marks.push(Mark::Rule {
                x1: left,
                x2: right,
                y: style.margins.top - style.line_height,
                thickness: Pt(0.75),
                colour: colours::RULE,
            });
        }

        RunningHeader { marks }
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }
}

/// The page hook composition runs with. Owns the composed pages and starts
/// every new one with the running header already on it.
#[derive(Debug, Default)]
pub struct Sheets {
    header: RunningHeader,
    pages: Vec<ComposedPage>,
}

impl Sheets {
    pub fn new(header: RunningHeader) -> Sheets {
        Sheets {
            header,
            pages: Vec::new(),
        }
    }

    pub fn pages(&self) -> &[ComposedPage] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<ComposedPage> {
        self.pages
    }

    /// Add a mark to an already started page
    pub fn push(&mut self, page: u32, mark: Mark) {
        match self.pages.iter_mut().find(|p| p.number == page) {
            Some(sheet) => sheet.marks.push(mark),
            None => log::warn!("dropping mark for page {page}, which was never started"),
        }
    }
}

impl PageHook for Sheets {
    fn page_started(&mut self, page: u32) {
        self.pages.push(ComposedPage {
            number: page,
            marks: self.header.marks.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::MonospaceMetrics;

    fn header() -> RunningHeader {
        RunningHeader::new(
            &["Policía Nacional".to_string(), "Comisaría Tercera".to_string()],
            None,
            &DocumentStyle::default(),
            &MonospaceMetrics::default(),
        )
    }

    #[test]
    fn header_lines_are_centred_above_a_rule() {
        let header = header();
        assert_eq!(header.marks().len(), 3);
        let Mark::Text { x, style, .. } = &header.marks()[0] else {
            panic!("expected the first letterhead line");
        };
        assert!(*x > Mm(20.0));
        assert_eq!(style.weight, crate::compose::Weight::Bold);
        assert!(matches!(header.marks()[2], Mark::Rule { y, .. } if y == Mm(28.5)));
    }

    #[test]
    fn every_started_page_gets_the_header() {
        let mut sheets = Sheets::new(header());
        sheets.page_started(1);
        sheets.page_started(2);
        sheets.push(2, Mark::Text {
            text: "cuerpo".into(),
            x: Mm(20.0),
            y: Mm(35.0),
            style: TextStyle::regular(Pt(11.0)),
            colour: colours::INK,
        });
        sheets.push(7, Mark::Rule {
            x1: Mm(0.0),
            x2: Mm(1.0),
            y: Mm(1.0),
            thickness: Pt(1.0),
            colour: colours::RULE,
        });

        let pages = sheets.into_pages();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].text(), "Policía Nacional Comisaría Tercera");
        assert_eq!(pages[1].text(), "Policía Nacional Comisaría Tercera cuerpo");
    }

    #[test]
    fn empty_header_draws_nothing() {
        let header = RunningHeader::new(&[], None, &DocumentStyle::default(), &MonospaceMetrics::default());
        assert!(header.marks().is_empty());
    }
}
