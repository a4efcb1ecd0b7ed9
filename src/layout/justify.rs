use super::lines::MeasuredLine;
use super::measure::TextMeasure;
use crate::units::Mm;
use serde::{Deserialize, Serialize};

/// A word and its horizontal offset from the start of the column
#[derive(Debug, Clone, PartialEq)]
pub struct WordOffset {
    pub text: String,
    pub x: Mm,
    pub width: Mm,
}

/// Why a line that could have been justified was set flush left instead
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftAlignReason {
    /// Last line of a paragraph
    LastLine,
    /// Nothing to distribute space between
    SingleWord,
    /// The words alone are wider than the target; spreading them would overlap
    Overfull,
    /// The caller asked for left alignment
    Requested,
}

/// The policy a line was set with
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alignment {
    Justified { gap: Mm },
    LeftAligned(LeftAlignReason),
    Centered,
    RightAligned,
}

/// Requested horizontal alignment for a block of text
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Justify,
    Left,
    Center,
    Right,
}

/// A line with every word positioned
#[derive(Debug, Clone, PartialEq)]
pub struct JustifiedLine {
    pub words: Vec<WordOffset>,
    pub alignment: Alignment,
}

impl JustifiedLine {
    /// Right edge of the last word, relative to the column start
    pub fn right_edge(&self) -> Mm {
        self.words
            .last()
            .map(|w| w.x + w.width)
            .unwrap_or_default()
    }
}

fn word_widths<M: TextMeasure + ?Sized>(line: &MeasuredLine, measure: &M) -> Vec<Mm> {
    line.words.iter().map(|w| measure.width(w)).collect()
}

/// Words placed one after another from `start`, separated by `gap`. Offsets are a
/// running sum so rounding never compounds per word index.
fn place_from(line: &MeasuredLine, widths: &[Mm], start: Mm, gap: Mm) -> Vec<WordOffset> {
    let mut x = start;
    line.words
        .iter()
        .zip(widths)
        .map(|(word, &width)| {
            let placed = WordOffset {
                text: word.clone(),
                x,
                width,
            };
            x += width + gap;
            placed
        })
        .collect()
}

fn natural_width(widths: &[Mm], space: Mm) -> Mm {
    let words: Mm = widths.iter().copied().sum();
    words + space * widths.len().saturating_sub(1) as f32
}

/// Spread a line's words so the last one ends exactly at `target_width`.
///
/// `indent` applies to the first line of a paragraph only: the first word starts
/// there and the remaining width is what gets filled. The last line of a
/// paragraph, single-word lines and (defensively) lines whose words do not fit
/// are set flush left with natural spaces instead; [`JustifiedLine::alignment`]
/// records which branch was taken.
pub fn justify<M: TextMeasure + ?Sized>(
    line: &MeasuredLine,
    target_width: Mm,
    indent: Mm,
    measure: &M,
) -> JustifiedLine {
    let start = line.indent(indent);
    let widths = word_widths(line, measure);

    let reason = if line.is_last_line_of_paragraph {
        Some(LeftAlignReason::LastLine)
    } else if widths.len() < 2 {
        Some(LeftAlignReason::SingleWord)
    } else {
        None
    };
    if let Some(reason) = reason {
        return JustifiedLine {
            words: place_from(line, &widths, start, measure.space_width()),
            alignment: Alignment::LeftAligned(reason),
        };
    }

    let total_word_width: Mm = widths.iter().copied().sum();
    let gap_budget = target_width - start - total_word_width;
    if gap_budget < Mm(0.0) {
        log::debug!(
            "line {:?} is {} mm too wide to justify, setting it flush left",
            line.text(),
            -gap_budget
        );
        return JustifiedLine {
            words: place_from(line, &widths, start, measure.space_width()),
            alignment: Alignment::LeftAligned(LeftAlignReason::Overfull),
        };
    }

    let gap = gap_budget / (widths.len() - 1) as f32;
    JustifiedLine {
        words: place_from(line, &widths, start, gap),
        alignment: Alignment::Justified { gap },
    }
}

/// Position a line's words according to `align`. Centred and right-aligned lines
/// never start left of the indent, even when they overflow.
pub fn align<M: TextMeasure + ?Sized>(
    line: &MeasuredLine,
    target_width: Mm,
    indent: Mm,
    align: TextAlign,
    measure: &M,
) -> JustifiedLine {
    let start = line.indent(indent);
    let space = measure.space_width();

    match align {
        TextAlign::Justify => justify(line, target_width, indent, measure),
        TextAlign::Left => JustifiedLine {
            words: place_from(line, &word_widths(line, measure), start, space),
            alignment: Alignment::LeftAligned(LeftAlignReason::Requested),
        },
        TextAlign::Center => {
            let widths = word_widths(line, measure);
            let slack = (target_width - start - natural_width(&widths, space)).max(Mm(0.0));
            JustifiedLine {
                words: place_from(line, &widths, start + slack / 2.0, space),
                alignment: Alignment::Centered,
            }
        }
        TextAlign::Right => {
            let widths = word_widths(line, measure);
            let slack = (target_width - start - natural_width(&widths, space)).max(Mm(0.0));
            JustifiedLine {
                words: place_from(line, &widths, start + slack, space),
                alignment: Alignment::RightAligned,
            }
        }
    }
}
