use acta_pdf::layout::{
    align, break_into_lines, justify, layout_text, Alignment, FlowGeometry, LayoutRequest,
    LeftAlignReason, MeasuredLine, PageCursor, PageFlow, TextAlign, TextMeasure, WordOffset,
};
use acta_pdf::{LayoutError, Mm};
use proptest::prelude::*;

const TOLERANCE: f32 = 1e-3;

/// Proportional-ish widths: capitals and wide letters 3, narrow ones 1, the rest 2
fn proportional(text: &str) -> Mm {
    Mm(text
        .chars()
        .map(|c| match c {
            'M' | 'W' | 'T' => 3.0,
            'i' | 'l' | ' ' => 1.0,
            _ => 2.0,
        })
        .sum())
}

fn geometry() -> FlowGeometry {
    FlowGeometry {
        left: Mm(20.0),
        top: Mm(35.0),
        bottom: Mm(100.0),
        line_height: Mm(6.5),
    }
}

fn word() -> impl Strategy<Value = String> {
    "[a-zMWTil]{1,14}"
}

/// One to four paragraphs of up to forty words
fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::collection::vec(word(), 1..40), 1..4).prop_map(|paragraphs| {
        paragraphs
            .into_iter()
            .map(|words| words.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn max_width() -> impl Strategy<Value = Mm> {
    (30.0f32..200.0).prop_map(Mm)
}

fn indent() -> impl Strategy<Value = Mm> {
    prop_oneof![Just(Mm(0.0)), Just(Mm(12.7)), (0.0f32..25.0).prop_map(Mm)]
}

fn gaps(words: &[WordOffset]) -> Vec<f32> {
    words
        .windows(2)
        .map(|pair| (pair[1].x - pair[0].x - pair[0].width).0)
        .collect()
}

proptest! {
    /// Every multi-word line fits its usable width; only a lone word may overflow
    #[test]
    fn lines_fit_their_usable_width(text in text(), max_width in max_width(), indent in indent()) {
        for line in break_into_lines(&text, max_width, &proportional, indent) {
            let usable = line.usable_width(max_width, indent);
            if line.words.len() > 1 {
                prop_assert!(proportional(&line.text()) <= usable + Mm(TOLERANCE));
            } else if line.is_overfull(max_width, indent) {
                prop_assert!(proportional(&line.words[0]) > usable);
            }
            prop_assert_eq!(line.raw_width, proportional(&line.text()));
        }
    }

    /// No word is lost or reordered by wrapping
    #[test]
    fn wrapping_keeps_every_word(text in text(), max_width in max_width(), indent in indent()) {
        let lines = break_into_lines(&text, max_width, &proportional, indent);
        let rewrapped: Vec<String> = lines.iter().flat_map(|l| l.words.clone()).collect();
        let original: Vec<String> = text.split_whitespace().map(String::from).collect();
        prop_assert_eq!(rewrapped, original);
    }

    /// Justified lines end exactly at the target width
    #[test]
    fn justified_lines_reach_the_right_edge(text in text(), max_width in max_width(), indent in indent()) {
        for line in break_into_lines(&text, max_width, &proportional, indent) {
            if line.is_last_line_of_paragraph || line.words.len() < 2 {
                continue;
            }
            let justified = justify(&line, max_width, indent, &proportional);
            let stretched = matches!(justified.alignment, Alignment::Justified { .. });
            prop_assert!(stretched, "line {:?} was not justified", line.text());
            prop_assert!((justified.right_edge() - max_width).abs() <= Mm(TOLERANCE));

            let gaps = gaps(&justified.words);
            let first = gaps[0];
            prop_assert!(gaps.iter().all(|g| (g - first).abs() <= TOLERANCE));
        }
    }

    /// Last and single-word lines keep natural spaces and start at their indent
    #[test]
    fn unjustified_lines_start_at_their_indent(text in text(), max_width in max_width(), indent in indent()) {
        for line in break_into_lines(&text, max_width, &proportional, indent) {
            if !line.is_last_line_of_paragraph && line.words.len() > 1 {
                continue;
            }
            let justified = justify(&line, max_width, indent, &proportional);
            let left_aligned = matches!(justified.alignment, Alignment::LeftAligned(_));
            prop_assert!(left_aligned, "line {:?} was stretched", line.text());

            let expected_start = if line.is_first_line_of_paragraph { indent } else { Mm(0.0) };
            prop_assert_eq!(justified.words[0].x, expected_start);
            for gap in gaps(&justified.words) {
                prop_assert!((gap - proportional.space_width().0).abs() <= TOLERANCE);
            }
        }
    }

    /// Placements never leave the body and move forward through the document
    #[test]
    fn placements_stay_in_the_body(text in text(), max_width in max_width(), indent in indent()) {
        let geometry = geometry();
        let request = LayoutRequest::new(text, max_width).indent(indent).line_height(Mm(6.5));
        let layout = layout_text(&request, geometry, &proportional).expect("valid geometry");

        let mut previous = PageCursor { page: 1, y: geometry.top };
        for word in layout.words.iter() {
            prop_assert!(word.y >= geometry.top);
            prop_assert!(word.y + Mm(6.5) <= geometry.bottom + Mm(TOLERANCE));
            prop_assert!(word.page >= previous.page);
            if word.page == previous.page {
                prop_assert!(word.y >= previous.y);
            }
            prop_assert!(word.page <= layout.page_count);
            previous = PageCursor { page: word.page, y: word.y };
        }
    }

    /// Identical input, identical output
    #[test]
    fn layout_is_deterministic(text in text(), max_width in max_width(), indent in indent()) {
        let request = LayoutRequest::new(text, max_width).indent(indent).line_height(Mm(6.5));
        let first = layout_text(&request, geometry(), &proportional).expect("valid geometry");
        let second = layout_text(&request, geometry(), &proportional).expect("valid geometry");
        prop_assert_eq!(first, second);
    }

    /// Alignment never pushes a line outside the column
    #[test]
    fn aligned_lines_stay_in_the_column(
        text in text(),
        max_width in max_width(),
        align_to in prop_oneof![Just(TextAlign::Left), Just(TextAlign::Center), Just(TextAlign::Right)],
    ) {
        for line in break_into_lines(&text, max_width, &proportional, Mm(0.0)) {
            let aligned = align(&line, max_width, Mm(0.0), align_to, &proportional);
            prop_assert!(aligned.words[0].x >= Mm(0.0));
            if line.words.len() > 1 || !line.is_overfull(max_width, Mm(0.0)) {
                prop_assert!(aligned.right_edge() <= max_width + Mm(TOLERANCE));
            }
        }
    }
}

#[test]
fn quick_brown_fox_wraps_after_fox() {
    // a wide capital makes the first four words exactly as wide as the last five
    let wide_t = |text: &str| Mm(text.chars().map(|c| if c == 'T' { 10.0 } else { 1.0 }).sum());
    let text = "The quick brown fox jumps over the lazy dog";
    let max_width = wide_t("The quick brown fox");

    let lines = break_into_lines(text, max_width, &wide_t, Mm(0.0));
    let texts: Vec<String> = lines.iter().map(MeasuredLine::text).collect();
    assert_eq!(texts, vec!["The quick brown fox", "jumps over the lazy dog"]);

    let last = justify(&lines[1], max_width, Mm(0.0), &wide_t);
    assert_eq!(last.alignment, Alignment::LeftAligned(LeftAlignReason::LastLine));
    assert_eq!(last.words[0].x, Mm(0.0));
}

#[test]
fn three_words_spread_over_fifty_units() {
    let ten_per_char = |text: &str| Mm(text.chars().count() as f32 * 10.0);
    let line = MeasuredLine {
        words: vec!["A".into(), "B".into(), "C".into()],
        raw_width: Mm(50.0),
        is_first_line_of_paragraph: false,
        is_last_line_of_paragraph: false,
    };
    let justified = justify(&line, Mm(50.0), Mm(0.0), &ten_per_char);
    assert_eq!(justified.alignment, Alignment::Justified { gap: Mm(10.0) });
    let offsets: Vec<Mm> = justified.words.iter().map(|w| w.x).collect();
    assert_eq!(offsets, vec![Mm(0.0), Mm(20.0), Mm(40.0)]);
    assert_eq!(justified.right_edge(), Mm(50.0));
}

#[test]
fn sangria_narrows_the_first_line() {
    let lines = break_into_lines(
        "Se presenta ante esta dependencia policial una persona que manifiesta",
        Mm(100.0),
        &proportional,
        Mm(12.7),
    );
    assert!((lines[0].usable_width(Mm(100.0), Mm(12.7)).0 - 87.3).abs() < TOLERANCE);
    assert_eq!(lines[1].usable_width(Mm(100.0), Mm(12.7)), Mm(100.0));

    let first = justify(&lines[0], Mm(100.0), Mm(12.7), &proportional);
    assert_eq!(first.words[0].x, Mm(12.7));
    assert!((first.right_edge().0 - 100.0).abs() < TOLERANCE);
}

#[test]
fn fourth_line_starts_page_two() {
    let mut pages_started = Vec::new();
    let geometry = FlowGeometry {
        left: Mm(0.0),
        top: Mm(20.0),
        bottom: Mm(39.5),
        line_height: Mm(6.5),
    };
    let mut flow = PageFlow::new(geometry, |page: u32| pages_started.push(page)).expect("valid");
    let mut placed = Vec::new();
    for i in 0..4 {
        let word = WordOffset {
            text: format!("l{i}"),
            x: Mm(0.0),
            width: Mm(2.0),
        };
        placed.extend(flow.emit_line(vec![word], Mm(6.5)).expect("fits"));
    }
    drop(flow);

    assert_eq!(placed[2].page, 1);
    assert_eq!(placed[3].page, 2);
    assert_eq!(placed[3].y, Mm(20.0));
    assert_eq!(pages_started, vec![1, 2]);
}

#[test]
fn overlong_word_is_left_whole() {
    let ten_per_char = |text: &str| Mm(text.chars().count() as f32 * 10.0);
    let lines = break_into_lines("ab XXXXXXXXXXXX cd", Mm(100.0), &ten_per_char, Mm(0.0));
    let texts: Vec<String> = lines.iter().map(MeasuredLine::text).collect();
    assert_eq!(texts, vec!["ab", "XXXXXXXXXXXX", "cd"]);
    assert_eq!(lines[1].raw_width, Mm(120.0));
    assert!(lines[1].is_overfull(Mm(100.0), Mm(0.0)));

    let justified = justify(&lines[1], Mm(100.0), Mm(0.0), &ten_per_char);
    assert_eq!(justified.alignment, Alignment::LeftAligned(LeftAlignReason::SingleWord));
    assert_eq!(justified.right_edge(), Mm(120.0));

    let alone = break_into_lines("XXXXXXXXXXXX", Mm(100.0), &ten_per_char, Mm(0.0));
    assert_eq!(alone.len(), 1);
    let justified = justify(&alone[0], Mm(100.0), Mm(0.0), &ten_per_char);
    assert!(matches!(justified.alignment, Alignment::LeftAligned(_)));
}

#[test]
fn line_taller_than_the_page_is_rejected_before_layout() {
    let geometry = FlowGeometry {
        line_height: Mm(70.0),
        ..geometry()
    };
    let request = LayoutRequest::new("texto", Mm(100.0)).line_height(Mm(6.5));
    assert!(matches!(
        layout_text(&request, geometry, &proportional),
        Err(LayoutError::LineTallerThanPage { .. })
    ));
}
