//! Build a small game design deck and save it as a .pptx file.
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run --example build_deck -- toemarok.pptx [palette.yaml]
//! ```

use deckforge::deck::{Align, Border, Deck, PanelStyle, ParagraphSpec, Rect, SlideBuilder};
use deckforge::ooxml::pptx::DeckSummary;
use deckforge::palette::{Palette, colors};
use deckforge::{Canvas, common::RGBColor, common::unit::inches};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "toemarok.pptx".to_string());
    let palette = match args.next() {
        Some(path) => Palette::load(path)?,
        None => Palette::default(),
    };

    let mut deck = Deck::new(Canvas::WIDESCREEN, palette);
    cover_slide(&mut deck.new_slide())?;
    spec_slide(&mut deck.new_slide())?;
    character_slide(&mut deck.new_slide())?;

    let path = deck.save(&output)?;

    let summary = DeckSummary::from_pptx(&std::fs::read(&path)?)?;
    println!("Saved {} ({} slides)", path.display(), summary.slide_count());
    for (index, slide) in summary.slides.iter().enumerate() {
        println!(
            "  slide {}: {} shapes, {} tables, title {:?}",
            index + 1,
            slide.shape_count,
            slide.table_count(),
            slide.paragraphs.first().map(String::as_str).unwrap_or("")
        );
    }

    Ok(())
}

/// Thin gold bars along the top and bottom edges.
fn edge_bars(slide: &mut SlideBuilder<'_>, bottom: bool) -> deckforge::Result<()> {
    let canvas = slide.canvas();
    let gold = PanelStyle::filled(slide.palette().accent);
    slide.add_panel(Rect::new(0, 0, canvas.width, inches(0.06)), gold)?;
    if bottom {
        let y = canvas.height - inches(0.06);
        slide.add_panel(Rect::new(0, y, canvas.width, inches(0.06)), gold)?;
    }
    Ok(())
}

fn cover_slide(slide: &mut SlideBuilder<'_>) -> deckforge::Result<()> {
    slide.fill_default_background();
    edge_bars(slide, true)?;

    let width = slide.canvas().width;
    slide.add_text(
        Rect::new(0, inches(1.8), width, inches(1.2)),
        ParagraphSpec::new("퇴  마  록")
            .size(72.0)
            .color(colors::GOLD)
            .bold(true)
            .align(Align::Center),
    )?;
    slide.add_text(
        Rect::new(0, inches(3.0), width, inches(0.5)),
        ParagraphSpec::new("TOEMAROK")
            .size(24.0)
            .color(RGBColor::new(136, 102, 68))
            .align(Align::Center),
    )?;
    slide.add_text(
        Rect::new(0, inches(3.5), width, inches(0.5)),
        ParagraphSpec::new("한국 신화 뱀서라이크 재현용 프롬프트 가이드")
            .size(16.0)
            .color(colors::MED_GRAY)
            .align(Align::Center),
    )?;
    slide.add_text(
        Rect::new(0, inches(5.8), width, inches(0.4)),
        ParagraphSpec::new("HTML5 Canvas  •  Pixel Art  •  No External Assets  •  Mobile Optimized")
            .size(12.0)
            .color(colors::DIM_GRAY)
            .align(Align::Center),
    )?;
    Ok(())
}

fn spec_slide(slide: &mut SlideBuilder<'_>) -> deckforge::Result<()> {
    slide.fill_default_background();
    edge_bars(slide, false)?;

    slide.add_text(
        Rect::from_inches(0.5, 0.3, 12.0, 0.5),
        ParagraphSpec::new("기술 스펙 & 핵심 구조")
            .size(28.0)
            .color(colors::GOLD)
            .bold(true),
    )?;

    let heading = |text: &str| ParagraphSpec::new(text).size(14.0).color(colors::ORANGE).bold(true);
    let item = |text: &str| ParagraphSpec::new(text).size(12.0);

    slide.add_panel(
        Rect::from_inches(0.4, 0.9, 6.0, 5.8),
        PanelStyle::default().with_border(Border::new(colors::DIM_GRAY).with_width(inches(0.01))),
    )?;
    slide.add_multiline(
        Rect::from_inches(0.5, 1.0, 5.8, 5.5),
        [
            heading("▎ 캔버스 & 렌더링"),
            item("  • 해상도: 400×700 (세로형 모바일)"),
            item("  • 모든 그래픽 Canvas API 직접 렌더링"),
            ParagraphSpec::spacer(8.0),
            heading("▎ 게임 상태 머신"),
            item("  title → charSelect → playing ↔ levelUp → gameOver / victory").color(colors::CYAN),
            ParagraphSpec::spacer(8.0),
            heading("▎ 저장 시스템"),
            item("  • localStorage: unlocks, bestTime, bestKills, totalClears"),
        ],
    )?;

    slide.add_multiline(
        Rect::from_inches(6.8, 1.0, 5.8, 5.5),
        [
            heading("▎ 모바일 입력").color(colors::RED),
            item("  • touch-area div 위에서 터치 이벤트 처리"),
            item("  • handleTap() 함수로 touch/click 양쪽에서 통합 호출").color(colors::GREEN),
            ParagraphSpec::spacer(8.0),
            heading("▎ 핵심 버그 방지 패턴").color(colors::RED),
            item("  • 적 고유 uid 사용, 배열 index 사용 금지"),
            item("  • 호밍 투사체: 타겟 사망시 자동 리타겟"),
        ],
    )?;
    Ok(())
}

fn character_slide(slide: &mut SlideBuilder<'_>) -> deckforge::Result<()> {
    slide.fill_default_background();
    edge_bars(slide, false)?;

    slide.add_text(
        Rect::from_inches(0.5, 0.3, 12.0, 0.5),
        ParagraphSpec::new("캐릭터")
            .size(28.0)
            .color(colors::GOLD)
            .bold(true),
    )?;
    slide.add_table(
        Rect::from_inches(0.5, 1.0, 12.3, 2.0),
        [
            ["이름", "HP", "속도", "시작 무기", "해금 조건"],
            ["퇴마사", "150", "2.5", "부적", "기본"],
            ["무녀", "120", "2.8", "방울", "1회 클리어"],
            ["검객", "180", "2.2", "신검", "보스 처치 50회"],
        ],
        Some(vec![inches(2.0), inches(1.5), inches(1.5), inches(3.0), inches(4.3)]),
    )?;
    slide.add_text(
        Rect::from_inches(0.5, 3.3, 12.0, 0.4),
        ParagraphSpec::new("HP는 레벨업 선택지로만 증가")
            .size(12.0)
            .color(colors::MED_GRAY),
    )?;
    Ok(())
}
