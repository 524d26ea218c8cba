//! Whole-deck tests: build, write, reopen.

use super::{DeckSummary, PptxFileWriter, PptxWriter};
use crate::common::Error;
use crate::deck::{Align, Canvas, Deck, PanelStyle, ParagraphSpec, Rect};
use crate::palette::{Palette, colors};
use quick_xml::events::Event;
use std::io::{Cursor, Read};

fn summarize(deck: Deck) -> DeckSummary {
    let bytes = deck.finalize(&mut PptxWriter::new()).unwrap();
    DeckSummary::from_pptx(&bytes).unwrap()
}

fn read_member(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

#[test]
fn test_korean_table_deck() {
    let mut deck = Deck::default();
    {
        let mut slide = deck.new_slide();
        slide.fill_default_background();
        slide
            .add_table(
                Rect::from_inches(0.5, 1.0, 6.0, 1.5),
                [["이름", "HP"], ["퇴마사", "150"], ["무녀", "120"]],
                None,
            )
            .unwrap();
    }

    let table = deck.slides()[0].elements()[0].as_table().unwrap();
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.column_count(), 2);
    assert!(table.row_style(0).bold);
    assert_ne!(table.row_style(1).fill, table.row_style(2).fill);

    let summary = summarize(deck);
    let slide = &summary.slides[0];
    assert_eq!(slide.background, Some(colors::BG_DARK));
    assert_eq!(slide.shape_count, 1);
    assert_eq!(slide.table_count(), 1);
    assert_eq!(
        slide.tables[0],
        [["이름", "HP"], ["퇴마사", "150"], ["무녀", "120"]]
    );
}

#[test]
fn test_mixed_multiline_deck() {
    let mut deck = Deck::default();
    deck.new_slide()
        .add_multiline(
            Rect::from_inches(0.5, 0.5, 6.0, 3.0),
            [
                ParagraphSpec::new("title").size(20.0).color(colors::GOLD).bold(true),
                ParagraphSpec::new("body text").size(12.0),
            ],
        )
        .unwrap();

    let block = deck.slides()[0].elements()[0].as_text_block().unwrap();
    assert_eq!(block.paragraph_count(), 2);
    assert!(block.paragraphs[0].bold);
    assert_eq!(block.paragraphs[0].size, 20.0);
    assert_eq!(block.paragraphs[1].size, 12.0);
    assert_eq!(block.paragraphs[1].color, deck.palette().body_text);

    let summary = summarize(deck);
    assert_eq!(summary.slides[0].paragraphs, ["title", "body text"]);
}

#[test]
fn test_three_slides_in_creation_order() {
    let mut deck = Deck::default();
    for title in ["표지", "캐릭터", "무기"] {
        let mut slide = deck.new_slide();
        slide.fill_default_background();
        slide
            .add_text(
                Rect::from_inches(0.5, 0.3, 12.0, 0.5),
                ParagraphSpec::new(title).size(28.0).align(Align::Center),
            )
            .unwrap();
    }

    let summary = summarize(deck);
    assert_eq!(summary.slide_count(), 3);
    assert_eq!(summary.canvas, Canvas::WIDESCREEN);
    let titles: Vec<&str> = summary
        .slides
        .iter()
        .map(|slide| slide.paragraphs[0].as_str())
        .collect();
    assert_eq!(titles, ["표지", "캐릭터", "무기"]);
}

#[test]
fn test_user_text_is_escaped() {
    let text = r#"<b>"HP" & 'MP'</b>"#;
    let mut deck = Deck::default();
    deck.new_slide()
        .add_text(Rect::from_inches(1.0, 1.0, 4.0, 1.0), text)
        .unwrap();

    let bytes = deck.finalize(&mut PptxWriter::new()).unwrap();
    let slide_xml = read_member(&bytes, "ppt/slides/slide1.xml");
    assert!(!slide_xml.contains("<b>"));

    let summary = DeckSummary::from_pptx(&bytes).unwrap();
    assert_eq!(summary.slides[0].paragraphs, [text]);
}

#[test]
fn test_control_chars_keep_slide_xml_well_formed() {
    let mut deck = Deck::default();
    {
        let mut slide = deck.new_slide();
        slide
            .add_text(Rect::from_inches(1.0, 1.0, 4.0, 1.0), "HP\u{0B}150\u{07}")
            .unwrap();
        slide
            .add_table(
                Rect::from_inches(1.0, 2.5, 4.0, 1.0),
                [["이름\u{0B}별칭", "비고"], ["무녀\u{1B}", "\u{0C}방울"]],
                None,
            )
            .unwrap();
    }

    let bytes = deck.finalize(&mut PptxWriter::new()).unwrap();
    let slide_xml = read_member(&bytes, "ppt/slides/slide1.xml");
    assert!(!slide_xml.contains(|c: char| c < ' ' && !matches!(c, '\t' | '\n' | '\r')));
    assert_eq!(slide_xml.matches("<a:br>").count(), 2);
    assert!(slide_xml.contains("<a:t>150_x0007_</a:t>"));
    assert!(slide_xml.contains("<a:t>_x000C_방울</a:t>"));

    let mut reader = quick_xml::Reader::from_str(&slide_xml);
    let mut runs = Vec::new();
    let mut in_text = false;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_text = true,
            Event::End(e) if e.local_name().as_ref() == b"t" => in_text = false,
            Event::Text(e) if in_text => runs.push(String::from_utf8(e.to_vec()).unwrap()),
            Event::Eof => break,
            _ => {},
        }
    }
    assert_eq!(runs, ["HP", "150_x0007_", "이름", "별칭", "비고", "무녀_x001B_", "_x000C_방울"]);

    // Vertical tab reads back as a line break, other controls as themselves
    let summary = DeckSummary::from_pptx(&bytes).unwrap();
    let slide = &summary.slides[0];
    assert_eq!(slide.paragraphs, ["HP\n150\u{07}"]);
    assert_eq!(
        slide.tables[0],
        [["이름\n별칭", "비고"], ["무녀\u{1B}", "\u{0C}방울"]]
    );
}

#[test]
fn test_palette_font_reaches_theme_and_runs() {
    let palette = Palette {
        font_family: "Noto Sans KR".to_string(),
        ..Palette::default()
    };
    let mut deck = Deck::new(Canvas::STANDARD, palette);
    deck.new_slide()
        .add_text(Rect::from_inches(1.0, 1.0, 4.0, 1.0), "가나다")
        .unwrap();

    let bytes = deck.finalize(&mut PptxWriter::new()).unwrap();
    let theme = read_member(&bytes, "ppt/theme/theme1.xml");
    assert!(theme.contains(r#"<a:latin typeface="Noto Sans KR"/>"#));
    let slide = read_member(&bytes, "ppt/slides/slide1.xml");
    assert!(slide.contains(r#"<a:ea typeface="Noto Sans KR"/>"#));
    let app = read_member(&bytes, "docProps/app.xml");
    assert!(app.contains("<Slides>1</Slides>"));

    assert_eq!(DeckSummary::from_pptx(&bytes).unwrap().canvas, Canvas::STANDARD);
}

#[test]
fn test_elements_keep_drawing_order() {
    let mut deck = Deck::default();
    {
        let mut slide = deck.new_slide();
        slide
            .add_panel(Rect::from_inches(0.5, 1.0, 6.0, 5.0), PanelStyle::default())
            .unwrap();
        slide
            .add_text(Rect::from_inches(0.7, 1.2, 5.6, 0.5), "위")
            .unwrap();
        slide
            .add_table(Rect::from_inches(0.7, 2.0, 5.6, 1.0), [["a"], ["b"]], None)
            .unwrap();
    }

    let bytes = deck.finalize(&mut PptxWriter::new()).unwrap();
    let xml = read_member(&bytes, "ppt/slides/slide1.xml");
    let panel = xml.find(r#"name="Rounded Rectangle 2""#).unwrap();
    let text = xml.find(r#"name="TextBox 3""#).unwrap();
    let table = xml.find(r#"name="Table 4""#).unwrap();
    assert!(panel < text && text < table);

    let summary = DeckSummary::from_pptx(&bytes).unwrap();
    assert_eq!(summary.slides[0].shape_count, 3);
}

#[test]
fn test_empty_deck_is_still_a_package() {
    let summary = summarize(Deck::default());
    assert_eq!(summary.slide_count(), 0);
}

#[test]
fn test_save_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.pptx");

    let mut deck = Deck::default();
    deck.new_slide().fill_background(colors::PURPLE);
    deck.new_slide();
    let written = deck.finalize(&mut PptxFileWriter::new(&path)).unwrap();
    assert_eq!(written, path);

    let summary = DeckSummary::from_pptx(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(summary.slide_count(), 2);
    assert_eq!(summary.slides[0].background, Some(colors::PURPLE));
    assert_eq!(summary.slides[1].background, None);
}

#[test]
fn test_failed_table_leaves_slide_unchanged() {
    let mut deck = Deck::default();
    {
        let mut slide = deck.new_slide();
        let err = slide
            .add_table(
                Rect::from_inches(0.5, 1.0, 6.0, 1.5),
                vec![vec!["이름", "HP"], vec!["퇴마사"]],
                None,
            )
            .unwrap_err();
        assert!(matches!(err, Error::MalformedTable { slide: 1, element: 0, .. }));
    }
    assert_eq!(summarize(deck).slides[0].shape_count, 0);
}
