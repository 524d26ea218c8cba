//! Read-back summary of a written `.pptx` package.
//!
//! Reopens the package, follows `presentation.xml`'s slide list through its
//! relationships and reports what each slide contains. It understands the flat
//! shape trees this crate writes; group shapes are not descended into.

use crate::common::xml::{unescape_run_text, unescape_xml};
use crate::common::{Error, RGBColor, Result};
use crate::deck::Canvas;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;
use std::io::{Cursor, Read};
use zip::ZipArchive;

const PRESENTATION_MEMBER: &str = "ppt/presentation.xml";
const PRESENTATION_RELS_MEMBER: &str = "ppt/_rels/presentation.xml.rels";

/// What a package contains, slide by slide.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckSummary {
    pub canvas: Canvas,
    /// Slides in presentation order.
    pub slides: Vec<SlideSummary>,
}

/// Contents of one slide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideSummary {
    /// Solid background color, if the slide sets one.
    pub background: Option<RGBColor>,
    /// Shapes and graphic frames on the slide.
    pub shape_count: usize,
    /// Paragraph texts of text shapes in drawing order; line breaks read as `\n`.
    pub paragraphs: Vec<String>,
    /// Cell texts of each table: table, then row, then cell.
    pub tables: Vec<Vec<Vec<String>>>,
}

impl SlideSummary {
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

impl DeckSummary {
    /// Summarize a `.pptx` package held in memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use deckforge::deck::{Deck, Rect};
    /// use deckforge::ooxml::pptx::{DeckSummary, PptxWriter};
    ///
    /// let mut deck = Deck::default();
    /// deck.new_slide().add_text(Rect::from_inches(1.0, 1.0, 4.0, 1.0), "안녕하세요")?;
    /// let summary = DeckSummary::from_pptx(&deck.finalize(&mut PptxWriter::new())?)?;
    /// assert_eq!(summary.slides[0].paragraphs, ["안녕하세요"]);
    /// # Ok::<(), deckforge::Error>(())
    /// ```
    pub fn from_pptx(bytes: &[u8]) -> Result<Self> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;

        let presentation = read_member(&mut archive, PRESENTATION_MEMBER)?;
        let (canvas, slide_rel_ids) = parse_presentation(&presentation)?;

        let rels = read_member(&mut archive, PRESENTATION_RELS_MEMBER)?;
        let targets = parse_rel_targets(&rels)?;

        let mut slides = Vec::with_capacity(slide_rel_ids.len());
        for rel_id in &slide_rel_ids {
            let target = targets
                .get(rel_id)
                .ok_or_else(|| Error::Xml(format!("slide relationship {} not found", rel_id)))?;
            let member = resolve_target("ppt", target);
            let xml = read_member(&mut archive, &member)?;
            slides.push(parse_slide(&xml)?);
        }

        Ok(Self { canvas, slides })
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

fn read_member(archive: &mut ZipArchive<Cursor<&[u8]>>, name: &str) -> Result<String> {
    let mut file = archive.by_name(name)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

/// Resolve a relationship target against the source part's directory.
fn resolve_target(base_dir: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }
    let mut segments: Vec<&str> = base_dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target.split('/') {
        match segment {
            ".." => {
                segments.pop();
            },
            "." | "" => {},
            other => segments.push(other),
        }
    }
    segments.join("/")
}

/// Attribute value by local name; `prefixed` selects `r:id` over a bare `id`.
fn attr_value(e: &BytesStart<'_>, name: &[u8], prefixed: bool) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == name && attr.key.prefix().is_some() == prefixed {
            let value = std::str::from_utf8(&attr.value)?;
            return Ok(Some(unescape_xml(value)));
        }
    }
    Ok(None)
}

fn required_attr(e: &BytesStart<'_>, name: &[u8], prefixed: bool) -> Result<String> {
    attr_value(e, name, prefixed)?.ok_or_else(|| {
        Error::Xml(format!(
            "<{}> is missing attribute {}",
            String::from_utf8_lossy(e.name().as_ref()),
            String::from_utf8_lossy(name)
        ))
    })
}

fn parse_emu(value: &str) -> Result<i64> {
    value
        .parse()
        .map_err(|_| Error::Xml(format!("invalid length: {}", value)))
}

/// Slide size and slide relationship IDs in `sldIdLst` order.
fn parse_presentation(xml: &str) -> Result<(Canvas, Vec<String>)> {
    let mut reader = Reader::from_str(xml);
    let mut canvas = None;
    let mut slide_rel_ids = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                b"sldId" => slide_rel_ids.push(required_attr(&e, b"id", true)?),
                b"sldSz" => {
                    let width = parse_emu(&required_attr(&e, b"cx", false)?)?;
                    let height = parse_emu(&required_attr(&e, b"cy", false)?)?;
                    canvas = Some(Canvas::new(width, height)?);
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    let canvas = canvas.ok_or_else(|| Error::Xml("presentation has no slide size".to_string()))?;
    Ok((canvas, slide_rel_ids))
}

/// Relationship targets by rId.
fn parse_rel_targets(xml: &str) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    let mut targets = HashMap::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                let id = required_attr(&e, b"Id", false)?;
                let target = required_attr(&e, b"Target", false)?;
                targets.insert(id, target);
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(targets)
}

/// Text collected for the cell currently being read.
#[derive(Default)]
struct TableState {
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    cell: Option<String>,
}

fn parse_slide(xml: &str) -> Result<SlideSummary> {
    let mut reader = Reader::from_str(xml);
    let mut summary = SlideSummary::default();

    let mut in_background = false;
    let mut in_text = false;
    let mut paragraph: Option<String> = None;
    let mut table: Option<TableState> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"bg" => in_background = true,
                b"sp" | b"graphicFrame" => summary.shape_count += 1,
                b"tbl" => table = Some(TableState::default()),
                b"tc" => {
                    if let Some(table) = table.as_mut() {
                        table.cell = Some(String::new());
                    }
                },
                b"p" => paragraph = Some(String::new()),
                b"t" => in_text = true,
                b"br" => {
                    if let Some(paragraph) = paragraph.as_mut() {
                        paragraph.push('\n');
                    }
                },
                _ => {},
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"srgbClr" if in_background && summary.background.is_none() => {
                    let val = required_attr(&e, b"val", false)?;
                    let color = RGBColor::from_hex(&val)
                        .ok_or_else(|| Error::Xml(format!("invalid color: {}", val)))?;
                    summary.background = Some(color);
                },
                b"br" => {
                    if let Some(paragraph) = paragraph.as_mut() {
                        paragraph.push('\n');
                    }
                },
                _ => {},
            },
            Event::Text(e) if in_text => {
                if let Some(paragraph) = paragraph.as_mut() {
                    paragraph.push_str(std::str::from_utf8(e.as_ref())?);
                }
            },
            // Entity references arrive separately from the surrounding text
            Event::GeneralRef(e) if in_text => {
                if let Some(paragraph) = paragraph.as_mut() {
                    paragraph.push('&');
                    paragraph.push_str(std::str::from_utf8(e.as_ref())?);
                    paragraph.push(';');
                }
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"bg" => in_background = false,
                b"t" => in_text = false,
                b"p" => {
                    let text = unescape_run_text(&paragraph.take().unwrap_or_default());
                    match table.as_mut().and_then(|table| table.cell.as_mut()) {
                        Some(cell) => {
                            if !cell.is_empty() {
                                cell.push('\n');
                            }
                            cell.push_str(&text);
                        },
                        None => summary.paragraphs.push(text),
                    }
                },
                b"tc" => {
                    if let Some(table) = table.as_mut() {
                        let cell = table.cell.take().unwrap_or_default();
                        table.row.push(cell);
                    }
                },
                b"tr" => {
                    if let Some(table) = table.as_mut() {
                        let row = std::mem::take(&mut table.row);
                        table.rows.push(row);
                    }
                },
                b"tbl" => {
                    if let Some(table) = table.take() {
                        summary.tables.push(table.rows);
                    }
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(summary)
}
