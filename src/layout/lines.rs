use super::flow::EPSILON;
use super::measure::TextMeasure;
use crate::units::Mm;

/// One line of a paragraph, as chosen by [`break_into_lines`]
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredLine {
    pub words: Vec<String>,
    /// Measured width of the words joined by single spaces
    pub raw_width: Mm,
    pub is_first_line_of_paragraph: bool,
    pub is_last_line_of_paragraph: bool,
}

impl MeasuredLine {
    /// The line as it would read with natural spacing
    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    /// The indent this line starts at: `indent_first_line` on a paragraph's first
    /// line, nothing otherwise
    pub fn indent(&self, indent_first_line: Mm) -> Mm {
        if self.is_first_line_of_paragraph {
            indent_first_line
        } else {
            Mm(0.0)
        }
    }

    /// Horizontal space available to this line's words
    pub fn usable_width(&self, max_width: Mm, indent_first_line: Mm) -> Mm {
        max_width - self.indent(indent_first_line)
    }

    /// A lone word wider than the column; the only way a line can overflow
    pub fn is_overfull(&self, max_width: Mm, indent_first_line: Mm) -> bool {
        self.raw_width > self.usable_width(max_width, indent_first_line) + EPSILON
    }
}

/// Split `text` into paragraphs at line breaks (`\n`, `\r\n` or `\r`). Blank
/// paragraphs are dropped and whitespace runs inside a paragraph collapse into
/// single spaces.
pub fn paragraphs(text: &str) -> impl Iterator<Item = Vec<&str>> {
    text.split(['\n', '\r'])
        .map(|paragraph| paragraph.split_whitespace().collect::<Vec<&str>>())
        .filter(|words| !words.is_empty())
}

/// Greedy word wrap.
///
/// Words are appended to the current line while the line, measured as a whole,
/// still fits the usable width: `max_width` on most lines, `max_width -
/// indent_first_line` on the first line of each paragraph. A word that does not
/// fit starts the next line. A single word wider than the column is emitted alone
/// and unbroken.
///
/// Returns no lines for empty (or all-whitespace) text.
pub fn break_into_lines<M: TextMeasure + ?Sized>(
    text: &str,
    max_width: Mm,
    measure: &M,
    indent_first_line: Mm,
) -> Vec<MeasuredLine> {
    let mut lines: Vec<MeasuredLine> = Vec::new();

    for words in paragraphs(text) {
        let paragraph_start = lines.len();
        let mut current: Vec<&str> = Vec::new();
        let mut current_text = String::new();
        let mut current_width = Mm(0.0);

        for word in words {
            let usable = if lines.len() == paragraph_start {
                max_width - indent_first_line
            } else {
                max_width
            };

            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current_text} {word}")
            };
            let candidate_width = measure.width(&candidate);

            if candidate_width > usable + EPSILON && !current.is_empty() {
                lines.push(MeasuredLine {
                    words: current.iter().map(|w| w.to_string()).collect(),
                    raw_width: current_width,
                    is_first_line_of_paragraph: lines.len() == paragraph_start,
                    is_last_line_of_paragraph: false,
                });
                current.clear();
                current.push(word);
                current_text = word.to_string();
                current_width = measure.width(word);
            } else {
                current.push(word);
                current_text = candidate;
                current_width = candidate_width;
            }
        }

        lines.push(MeasuredLine {
            words: current.iter().map(|w| w.to_string()).collect(),
            raw_width: current_width,
            is_first_line_of_paragraph: lines.len() == paragraph_start,
            is_last_line_of_paragraph: true,
        });
    }

    for line in lines.iter().filter(|l| l.words.len() == 1) {
        if line.is_overfull(max_width, indent_first_line) {
            log::debug!(
                "word {:?} ({} mm) is wider than its {} mm line, leaving it unbroken",
                line.words[0],
                line.raw_width,
                line.usable_width(max_width, indent_first_line)
            );
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_per_char(text: &str) -> Mm {
        Mm(text.chars().count() as f32)
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(break_into_lines("", Mm(10.0), &one_per_char, Mm(0.0)).is_empty());
        assert!(break_into_lines(" \n\t \r\n", Mm(10.0), &one_per_char, Mm(0.0)).is_empty());
    }

    #[test]
    fn short_paragraph_is_one_first_and_last_line() {
        let lines = break_into_lines("Se deja constancia", Mm(40.0), &one_per_char, Mm(0.0));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_first_line_of_paragraph);
        assert!(lines[0].is_last_line_of_paragraph);
        assert_eq!(lines[0].raw_width, Mm(18.0));
    }

    #[test]
    fn greedy_wrap_fills_each_line() {
        // "aaa bbb" is exactly 7 wide and must stay together
        let lines = break_into_lines("aaa bbb ccc ddd", Mm(7.0), &one_per_char, Mm(0.0));
        let texts: Vec<String> = lines.iter().map(MeasuredLine::text).collect();
        assert_eq!(texts, vec!["aaa bbb", "ccc ddd"]);
        assert!(!lines[0].is_last_line_of_paragraph);
        assert!(lines[1].is_last_line_of_paragraph);
        assert!(!lines[1].is_first_line_of_paragraph);
    }

    #[test]
    fn indent_only_narrows_the_first_line() {
        let unindented = break_into_lines("aa bb cc dd ee", Mm(8.0), &one_per_char, Mm(0.0));
        let texts: Vec<String> = unindented.iter().map(MeasuredLine::text).collect();
        assert_eq!(texts, vec!["aa bb cc", "dd ee"]);

        let lines = break_into_lines("aa bb cc dd ee", Mm(8.0), &one_per_char, Mm(3.0));
        let texts: Vec<String> = lines.iter().map(MeasuredLine::text).collect();
        assert_eq!(texts, vec!["aa bb", "cc dd ee"]);
        assert_eq!(lines[0].usable_width(Mm(8.0), Mm(3.0)), Mm(5.0));
        assert_eq!(lines[1].usable_width(Mm(8.0), Mm(3.0)), Mm(8.0));
    }

    #[test]
    fn every_paragraph_gets_its_own_first_and_last_line() {
        let lines = break_into_lines(
            "uno dos\r\n\r\ntres cuatro\rcinco",
            Mm(20.0),
            &one_per_char,
            Mm(2.0),
        );
        assert_eq!(lines.len(), 3);
        assert!(lines
            .iter()
            .all(|l| l.is_first_line_of_paragraph && l.is_last_line_of_paragraph));
        assert_eq!(lines[1].text(), "tres cuatro");
    }

    #[test]
    fn whitespace_runs_collapse() {
        let lines = break_into_lines("a\t\tb   c", Mm(20.0), &one_per_char, Mm(0.0));
        assert_eq!(lines[0].text(), "a b c");
        assert_eq!(lines[0].raw_width, Mm(5.0));
    }

    #[test]
    fn rounding_slack_does_not_break_a_line_early() {
        // "aaa bbb" measures 7, a hair over the column
        let lines = break_into_lines("aaa bbb", Mm(7.0 - 5e-5), &one_per_char, Mm(0.0));
        assert_eq!(lines.len(), 1);
        assert!(!lines[0].is_overfull(Mm(7.0 - 5e-5), Mm(0.0)));

        let lines = break_into_lines("aaa bbb", Mm(6.9), &one_per_char, Mm(0.0));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn overlong_word_stands_alone() {
        let lines = break_into_lines(
            "ab supercalifragilistico cd",
            Mm(10.0),
            &one_per_char,
            Mm(0.0),
        );
        let texts: Vec<String> = lines.iter().map(MeasuredLine::text).collect();
        assert_eq!(texts, vec!["ab", "supercalifragilistico", "cd"]);
        assert!(lines[1].is_overfull(Mm(10.0), Mm(0.0)));
        assert!(!lines[0].is_overfull(Mm(10.0), Mm(0.0)));
    }
}
