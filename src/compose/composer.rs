use super::fonts::{FontSet, StyledMeasure, TextStyle};
use super::sheets::{ComposedPage, Logo, Mark, RunningHeader, Sheets};
use crate::colour::{colours, Colour};
use crate::config::DocumentStyle;
use crate::error::LayoutError;
use crate::info::Info;
use crate::layout::{
    break_into_lines, layout_paragraph, LayoutRequest, Margins, PageCursor, PageFlow, TextAlign,
    TextMeasure,
};
use crate::pagesize::PageSize;
use crate::records::NOT_SPECIFIED;
use crate::units::{Mm, Pt};

/// A name to be signed above
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub name: String,
    /// Role of the signer, printed under the name ("Denunciante")
    pub caption: String,
}

impl Signature {
    pub fn new<N: Into<String>, C: Into<String>>(name: N, caption: C) -> Signature {
        Signature {
            name: name.into(),
            caption: caption.into(),
        }
    }
}

/// The pages of a composed document, ready to be rendered into a
/// [`Document`](crate::Document)
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedDocument {
    pub size: PageSize,
    pub margins: Margins,
    pub info: Info,
    pub pages: Vec<ComposedPage>,
}

impl ComposedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All text of the document, page by page
    pub fn text(&self) -> String {
        self.pages
            .iter()
            .map(ComposedPage::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Lays out one document top to bottom.
///
/// Flowed text and fixed elements (fields, signature blocks, images) share a
/// single [`PageFlow`], so they also share its page breaks. Every new page starts
/// with the running header; [`Composer::finish`] numbers the pages once their
/// total is known.
pub struct Composer<'f, F: FontSet + ?Sized> {
    fonts: &'f F,
    style: DocumentStyle,
    flow: PageFlow<Sheets>,
}

impl<'f, F: FontSet + ?Sized> Composer<'f, F> {
    pub fn new(
        style: DocumentStyle,
        fonts: &'f F,
        header: RunningHeader,
    ) -> Result<Composer<'f, F>, LayoutError> {
        style.validate()?;
        let flow = PageFlow::new(style.flow_geometry(), Sheets::new(header))?;
        Ok(Composer { fonts, style, flow })
    }

    /// Compose with the letterhead built from `lines` and `logo`
    pub fn with_letterhead(
        style: DocumentStyle,
        fonts: &'f F,
        lines: &[String],
        logo: Option<Logo>,
    ) -> Result<Composer<'f, F>, LayoutError> {
        let header = RunningHeader::new(lines, logo, &style, fonts);
        Composer::new(style, fonts, header)
    }

    pub fn style(&self) -> &DocumentStyle {
        &self.style
    }

    pub fn cursor(&self) -> PageCursor {
        self.flow.cursor()
    }

    pub fn page_count(&self) -> u32 {
        self.flow.page_count()
    }

    fn column_width(&self) -> Mm {
        self.style.column_width()
    }

    fn left(&self) -> Mm {
        self.style.margins.left
    }

    fn measure(&self, style: TextStyle) -> StyledMeasure<'f, F> {
        StyledMeasure {
            fonts: self.fonts,
            style,
        }
    }

    fn push(&mut self, page: u32, mark: Mark) {
        self.flow.hook_mut().push(page, mark);
    }

    fn text_mark(text: String, x: Mm, y: Mm, style: TextStyle, colour: Colour) -> Mark {
        Mark::Text {
            text,
            x,
            y,
            style,
            colour,
        }
    }

    /// Flow `request` in `style`, one text mark per word
    fn set(
        &mut self,
        request: &LayoutRequest,
        style: TextStyle,
        colour: Colour,
    ) -> Result<(), LayoutError> {
        let measure = self.measure(style);
        let placed = layout_paragraph(&mut self.flow, request, &measure)?;
        for word in placed {
            let mark = Self::text_mark(word.text, word.x, word.y, style, colour);
            self.push(word.page, mark);
        }
        Ok(())
    }

    /// Document title, centred and in bold
    pub fn title(&mut self, text: &str) -> Result<&mut Self, LayoutError> {
        let request = LayoutRequest::new(text, self.column_width())
            .font_size(self.style.title_size)
            .align(TextAlign::Center);
        self.set(&request, TextStyle::bold(self.style.title_size), colours::INSTITUTIONAL)?;
        self.flow.skip(self.style.paragraph_spacing);
        Ok(self)
    }

    /// Section heading. Never left alone at the bottom of a page: it moves to the
    /// next one unless all of its lines and two body lines fit under it.
    pub fn heading(&mut self, text: &str) -> Result<&mut Self, LayoutError> {
        let size = self.style.heading_size;
        let request = LayoutRequest::new(text, self.column_width())
            .font_size(size)
            .align(TextAlign::Left);
        let heading_measure = self.measure(TextStyle::bold(size));
        let heading_lines = break_into_lines(text, self.column_width(), &heading_measure, Mm(0.0))
            .len()
            .max(1);
        let keep_with_next = request.effective_line_height() * heading_lines as f32
            + self.style.line_height * 2.0;
        if keep_with_next <= self.flow.geometry().body_height() {
            self.flow.ensure_space(keep_with_next)?;
        }
        self.set(&request, TextStyle::bold(size), colours::INK)?;
        self.flow.skip(self.style.paragraph_spacing / 2.0);
        Ok(self)
    }

    /// Justified body text with the sangria on the first line of each paragraph.
    /// Line breaks in `text` start new paragraphs.
    pub fn paragraph(&mut self, text: &str) -> Result<&mut Self, LayoutError> {
        let request = LayoutRequest::new(text, self.column_width())
            .font_size(self.style.body_size)
            .line_height(self.style.line_height)
            .indent(self.style.sangria);
        self.set(&request, TextStyle::regular(self.style.body_size), colours::INK)?;
        self.flow.skip(self.style.paragraph_spacing);
        Ok(self)
    }

    /// Flush-left body text without indent or trailing space
    pub fn plain(&mut self, text: &str) -> Result<&mut Self, LayoutError> {
        let request = LayoutRequest::new(text, self.column_width())
            .font_size(self.style.body_size)
            .line_height(self.style.line_height)
            .align(TextAlign::Left);
        self.set(&request, TextStyle::regular(self.style.body_size), colours::INK)?;
        Ok(self)
    }

    /// `Label: value`, with the label in bold. The value starts after the label
    /// and wraps back to the left margin; a label too wide to share its line gets
    /// a line of its own. Further paragraphs of the value start at the margin.
    pub fn field(&mut self, label: &str, value: &str) -> Result<&mut Self, LayoutError> {
        let size = self.style.body_size;
        let line_height = self.style.line_height;
        let label = format!("{}:", label.trim_end_matches(':'));
        let value = if value.trim().is_empty() {
            NOT_SPECIFIED
        } else {
            value
        };

        let body = self.measure(TextStyle::regular(size));
        let indent = self.measure(TextStyle::bold(size)).width(&label) + body.space_width();

        self.flow.ensure_space(line_height)?;
        let PageCursor { page, y } = self.flow.cursor();
        let left = self.left();
        self.push(
            page,
            Self::text_mark(label, left, y, TextStyle::bold(size), colours::INK),
        );

        let column = self.column_width();
        let flush_left = |text: &str| {
            LayoutRequest::new(text, column)
                .font_size(size)
                .line_height(line_height)
                .align(TextAlign::Left)
        };
        let value = value.trim_start();
        let (first, rest) = value.split_once(['\n', '\r']).unwrap_or((value, ""));

        // a label at most half the column keeps the value beside it
        let request = if indent <= column / 2.0 {
            flush_left(first).indent(indent)
        } else {
            self.flow.skip(line_height);
            flush_left(first)
        };
        self.set(&request, TextStyle::regular(size), colours::INK)?;
        if !rest.trim().is_empty() {
            self.set(&flush_left(rest), TextStyle::regular(size), colours::INK)?;
        }
        Ok(self)
    }

    /// Vertical space; at the bottom of a page it starts the next page instead.
    /// Negative heights are ignored.
    pub fn spacer(&mut self, height: Mm) -> &mut Self {
        self.flow.skip(height);
        self
    }

    /// A row of signature lines with the signers' names and roles underneath.
    /// The whole row is kept on one page.
    pub fn signatures(&mut self, signatures: &[Signature]) -> Result<&mut Self, LayoutError> {
        if signatures.is_empty() {
            return Ok(self);
        }
        let height = self.style.signature_height;
        let line_height = self.style.line_height;
        let size = self.style.body_size;

        self.flow.ensure_space(height)?;
        let PageCursor { page, y: top } = self.flow.cursor();
        let name_y = top + height - line_height * 2.0;
        let caption_y = top + height - line_height;
        let rule_y = name_y - line_height * 0.8;

        let slot = self.column_width() / signatures.len() as f32;
        let column_right = self.left() + self.column_width();
        for (i, signature) in signatures.iter().enumerate() {
            let x = self.left() + slot * i as f32;
            self.push(
                page,
                Mark::Rule {
                    x1: x + slot * 0.1,
                    x2: x + slot * 0.9,
                    y: rule_y,
                    thickness: Pt(0.5),
                    colour: colours::RULE,
                },
            );
            let lines = [
                (signature.name.as_str(), TextStyle::bold(size), name_y),
                (signature.caption.as_str(), TextStyle::regular(size), caption_y),
            ];
            for (text, style, baseline) in lines {
                if text.trim().is_empty() {
                    continue;
                }
                let text = text.trim();
                let width = self.fonts.measure(style, text);
                // centred under the rule, but a long caption may not leave the column
                let centred = (x + (slot - width) / 2.0)
                    .min(column_right - width)
                    .max(self.left());
                let mark = Self::text_mark(text.to_string(), centred, baseline, style, colours::INK);
                self.push(page, mark);
            }
        }

        self.flow.skip(height);
        Ok(self)
    }

    /// An image centred in the column, `width` wide, kept whole on one page
    pub fn image_block(&mut self, logo: Logo, width: Mm) -> Result<&mut Self, LayoutError> {
        let width = width.min(self.column_width());
        let height = width * logo.aspect_ratio;
        self.flow.ensure_space(height)?;
        let PageCursor { page, y } = self.flow.cursor();
        let x = self.left() + (self.column_width() - width) / 2.0;
        self.push(
            page,
            Mark::Image {
                image: logo.id,
                x,
                top: y,
                width,
                height,
            },
        );
        self.flow.skip(height + self.style.paragraph_spacing);
        Ok(self)
    }

    /// Stamp "Página n de N" on every page and hand the pages over
    pub fn finish(self, info: Info) -> ComposedDocument {
        let Composer { fonts, style, flow } = self;
        let mut pages = flow.into_hook().into_pages();
        let total = pages.len();

        let (page_width, page_height) = style.page_size();
        let footer_style = TextStyle::regular(style.header_size);
        for page in pages.iter_mut() {
            let text = format!("Página {} de {total}", page.number);
            let width = fonts.measure(footer_style, &text);
            page.marks.push(Mark::Text {
                x: ((page_width - width) / 2.0).max(Mm(0.0)),
                y: page_height - style.footer_baseline,
                text,
                style: footer_style,
                colour: colours::MUTED,
            });
        }
        log::debug!("composed {total} page(s)");

        ComposedDocument {
            size: style.page_size(),
            margins: style.margins,
            info,
            pages,
        }
    }
}
