/// Shape XML for slide elements: panels, text boxes and tables.
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::{escape_run_text, escape_xml, split_run_lines};
use crate::common::{RGBColor, Result};
use crate::deck::{Align, Element, Panel, Paragraph, Rect, RowStyle, Table, TextBlock};
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

/// Language tags written on every run.
const RUN_LANG: &str = r#"lang="ko-KR" altLang="en-US""#;

/// Borrowed view of one paragraph's text and formatting.
///
/// Text boxes and table cells share the same paragraph markup; table cells
/// take their formatting from the row style instead of the paragraph.
struct ParagraphView<'a> {
    text: &'a str,
    size: f64,
    color: RGBColor,
    bold: bool,
    align: Align,
    font: &'a str,
    space_after: Option<f64>,
}

impl<'a> From<&'a Paragraph> for ParagraphView<'a> {
    fn from(paragraph: &'a Paragraph) -> Self {
        Self {
            text: &paragraph.text,
            size: paragraph.size,
            color: paragraph.color,
            bold: paragraph.bold,
            align: paragraph.align,
            font: &paragraph.font,
            space_after: paragraph.space_after,
        }
    }
}

impl<'a> ParagraphView<'a> {
    fn cell(text: &'a str, style: &'a RowStyle) -> Self {
        Self {
            text,
            size: style.size,
            color: style.text_color,
            bold: style.bold,
            align: style.align,
            font: &style.font,
            space_after: None,
        }
    }
}

/// Append the XML of `element` to `xml` under the given shape ID.
pub(crate) fn write_element(xml: &mut String, shape_id: u32, element: &Element) -> Result<()> {
    match element {
        Element::Panel(panel) => write_panel(xml, shape_id, panel),
        Element::TextBlock(block) => write_text_block(xml, shape_id, block),
        Element::Table(table) => write_table(xml, shape_id, table),
    }
}

fn write_panel(xml: &mut String, shape_id: u32, panel: &Panel) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(xml, r#"<p:cNvPr id="{}" name="Rounded Rectangle {}"/>"#, shape_id, shape_id)?;
    xml.push_str("<p:cNvSpPr/><p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    write_xfrm(xml, "a", &panel.rect)?;
    xml.push_str(r#"<a:prstGeom prst="roundRect"><a:avLst/></a:prstGeom>"#);
    write_solid_fill(xml, panel.fill)?;
    match &panel.border {
        Some(border) => {
            match border.width {
                Some(width) => write!(xml, r#"<a:ln w="{}">"#, width)?,
                None => xml.push_str("<a:ln>"),
            }
            write_solid_fill(xml, border.color)?;
            xml.push_str("</a:ln>");
        },
        None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
    }
    xml.push_str("</p:spPr>");
    xml.push_str("</p:sp>");
    Ok(())
}

fn write_text_block(xml: &mut String, shape_id: u32, block: &TextBlock) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(xml, r#"<p:cNvPr id="{}" name="TextBox {}"/>"#, shape_id, shape_id)?;
    xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/>"#);
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    write_xfrm(xml, "a", &block.rect)?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("<a:noFill/>");
    xml.push_str("</p:spPr>");

    xml.push_str("<p:txBody>");
    xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0"><a:noAutofit/></a:bodyPr>"#);
    xml.push_str("<a:lstStyle/>");
    for paragraph in &block.paragraphs {
        write_paragraph(xml, &ParagraphView::from(paragraph))?;
    }
    xml.push_str("</p:txBody>");
    xml.push_str("</p:sp>");
    Ok(())
}

fn write_table(xml: &mut String, shape_id: u32, table: &Table) -> Result<()> {
    xml.push_str("<p:graphicFrame>");
    xml.push_str("<p:nvGraphicFramePr>");
    write!(xml, r#"<p:cNvPr id="{}" name="Table {}"/>"#, shape_id, shape_id)?;
    xml.push_str(r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>"#);
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGraphicFramePr>");
    write_xfrm(xml, "p", &table.rect)?;

    xml.push_str("<a:graphic>");
    write!(xml, r#"<a:graphicData uri="{}">"#, namespace::DML_TABLE)?;
    xml.push_str("<a:tbl>");
    xml.push_str(r#"<a:tblPr firstRow="1" bandRow="1"/>"#);

    xml.push_str("<a:tblGrid>");
    for width in table.grid_column_widths() {
        write!(xml, r#"<a:gridCol w="{}"/>"#, width)?;
    }
    xml.push_str("</a:tblGrid>");

    for ((index, row), height) in table.rows().iter().enumerate().zip(table.grid_row_heights()) {
        let style = table.row_style(index);
        write!(xml, r#"<a:tr h="{}">"#, height)?;
        for cell in row {
            xml.push_str("<a:tc>");
            xml.push_str("<a:txBody><a:bodyPr/><a:lstStyle/>");
            write_paragraph(xml, &ParagraphView::cell(cell, style))?;
            xml.push_str("</a:txBody>");
            xml.push_str("<a:tcPr>");
            write_solid_fill(xml, style.fill)?;
            xml.push_str("</a:tcPr>");
            xml.push_str("</a:tc>");
        }
        xml.push_str("</a:tr>");
    }

    xml.push_str("</a:tbl>");
    xml.push_str("</a:graphicData>");
    xml.push_str("</a:graphic>");
    xml.push_str("</p:graphicFrame>");
    Ok(())
}

/// Write `<{prefix}:xfrm>` for a rect. Shapes use `a:xfrm`, graphic frames `p:xfrm`.
fn write_xfrm(xml: &mut String, prefix: &str, rect: &Rect) -> Result<()> {
    write!(xml, "<{}:xfrm>", prefix)?;
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, rect.x, rect.y)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, rect.width, rect.height)?;
    write!(xml, "</{}:xfrm>", prefix)?;
    Ok(())
}

fn write_solid_fill(xml: &mut String, color: RGBColor) -> Result<()> {
    write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.to_hex())?;
    Ok(())
}

/// Write one `a:p`. Line breaks in the text (`\n` or vertical tab) become
/// `a:br` inside the paragraph.
fn write_paragraph(xml: &mut String, paragraph: &ParagraphView<'_>) -> Result<()> {
    xml.push_str("<a:p>");
    write!(xml, r#"<a:pPr algn="{}">"#, paragraph.align.as_ooxml())?;
    if let Some(space_after) = paragraph.space_after {
        write!(
            xml,
            r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
            pt_to_centipoints(space_after)
        )?;
    }
    xml.push_str("</a:pPr>");

    if !paragraph.text.is_empty() {
        for (index, line) in split_run_lines(paragraph.text).enumerate() {
            if index > 0 {
                xml.push_str("<a:br>");
                write_run_props(xml, "a:rPr", paragraph)?;
                xml.push_str("</a:br>");
            }
            if line.is_empty() {
                continue;
            }
            xml.push_str("<a:r>");
            write_run_props(xml, "a:rPr", paragraph)?;
            write!(xml, "<a:t>{}</a:t>", escape_run_text(line))?;
            xml.push_str("</a:r>");
        }
    }

    // Keeps the line height of an empty paragraph at the requested size
    write_run_props(xml, "a:endParaRPr", paragraph)?;
    xml.push_str("</a:p>");
    Ok(())
}

fn write_run_props(xml: &mut String, tag: &str, paragraph: &ParagraphView<'_>) -> Result<()> {
    write!(
        xml,
        r#"<{} {} sz="{}" b="{}" dirty="0">"#,
        tag,
        RUN_LANG,
        pt_to_centipoints(paragraph.size),
        u8::from(paragraph.bold)
    )?;
    write_solid_fill(xml, paragraph.color)?;
    let font = escape_xml(paragraph.font);
    write!(xml, r#"<a:latin typeface="{font}"/><a:ea typeface="{font}"/>"#)?;
    write!(xml, "</{}>", tag)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Border, Deck, PanelStyle, ParagraphSpec};
    use crate::palette::colors;

    fn first_element_xml(build: impl FnOnce(&mut crate::deck::SlideBuilder<'_>)) -> String {
        let mut deck = Deck::default();
        build(&mut deck.new_slide());
        let mut xml = String::new();
        write_element(&mut xml, 2, &deck.slides()[0].elements()[0]).unwrap();
        xml
    }

    #[test]
    fn test_panel_without_border_has_no_outline() {
        let xml = first_element_xml(|slide| {
            slide
                .add_panel(Rect::new(10, 20, 300, 400), PanelStyle::default())
                .unwrap();
        });
        assert!(xml.contains(r#"<p:cNvPr id="2" name="Rounded Rectangle 2"/>"#));
        assert!(xml.contains(r#"<a:prstGeom prst="roundRect">"#));
        assert!(xml.contains(r#"<a:off x="10" y="20"/><a:ext cx="300" cy="400"/>"#));
        assert!(xml.contains(&format!(r#"<a:srgbClr val="{}"/>"#, colors::BG_CARD.to_hex())));
        assert!(xml.contains("<a:ln><a:noFill/></a:ln>"));
    }

    #[test]
    fn test_panel_border() {
        let xml = first_element_xml(|slide| {
            let style = PanelStyle::filled(colors::BG_DARK)
                .with_border(Border::new(colors::GOLD).with_width(12_700));
            slide.add_panel(Rect::new(0, 0, 100, 100), style).unwrap();
        });
        assert!(xml.contains(r#"<a:ln w="12700"><a:solidFill><a:srgbClr val="FFD700"/></a:solidFill></a:ln>"#));
    }

    #[test]
    fn test_text_run_formatting() {
        let xml = first_element_xml(|slide| {
            slide
                .add_text(
                    Rect::new(0, 0, 1000, 500),
                    ParagraphSpec::new("A & <B>").size(28.0).bold(true).align(Align::Center),
                )
                .unwrap();
        });
        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"<a:bodyPr wrap="square""#));
        assert!(xml.contains(r#"<a:pPr algn="ctr">"#));
        assert!(xml.contains(r#"sz="2800" b="1""#));
        assert!(xml.contains("<a:t>A &amp; &lt;B&gt;</a:t>"));
        assert!(xml.contains(r#"<a:latin typeface="맑은 고딕"/><a:ea typeface="맑은 고딕"/>"#));
    }

    #[test]
    fn test_multiline_spacing_and_breaks() {
        let xml = first_element_xml(|slide| {
            slide
                .add_multiline(
                    Rect::new(0, 0, 1000, 500),
                    [ParagraphSpec::new("one\ntwo"), ParagraphSpec::spacer(6.0)],
                )
                .unwrap();
        });
        assert_eq!(xml.matches("<a:p>").count(), 2);
        assert_eq!(xml.matches(r#"<a:spcPts val="200"/>"#).count(), 2);
        assert_eq!(xml.matches("<a:br>").count(), 1);
        assert!(xml.contains("<a:t>one</a:t>"));
        assert!(xml.contains("<a:t>two</a:t>"));
        assert!(xml.contains(r#"<a:endParaRPr lang="ko-KR" altLang="en-US" sz="600""#));
    }

    #[test]
    fn test_vertical_tab_breaks_and_controls_escape() {
        let xml = first_element_xml(|slide| {
            slide
                .add_text(Rect::new(0, 0, 1000, 500), "HP\u{0B}150\u{07}")
                .unwrap();
        });
        assert_eq!(xml.matches("<a:br>").count(), 1);
        assert!(xml.contains("<a:t>HP</a:t>"));
        assert!(xml.contains("<a:t>150_x0007_</a:t>"));
        assert!(!xml.contains(['\u{0B}', '\u{07}']));
    }

    #[test]
    fn test_table_grid_and_fills() {
        let xml = first_element_xml(|slide| {
            slide
                .add_table(
                    Rect::new(0, 0, 900, 300),
                    [["이름", "HP", "속도"], ["퇴마사", "150", "2.5"], ["무녀", "120", "2.8"]],
                    None,
                )
                .unwrap();
        });
        assert!(xml.starts_with("<p:graphicFrame>"));
        assert!(xml.contains("<p:xfrm>"));
        assert_eq!(xml.matches(r#"<a:gridCol w="300"/>"#).count(), 3);
        assert_eq!(xml.matches(r#"<a:tr h="100">"#).count(), 3);
        assert_eq!(xml.matches("<a:tc>").count(), 9);

        let header_fill = format!(r#"<a:tcPr><a:solidFill><a:srgbClr val="{}"/>"#, colors::TABLE_HEADER.to_hex());
        let odd_fill = format!(r#"<a:tcPr><a:solidFill><a:srgbClr val="{}"/>"#, colors::TABLE_ODD.to_hex());
        let even_fill = format!(r#"<a:tcPr><a:solidFill><a:srgbClr val="{}"/>"#, colors::TABLE_EVEN.to_hex());
        assert_eq!(xml.matches(&header_fill).count(), 3);
        assert_eq!(xml.matches(&odd_fill).count(), 3);
        assert_eq!(xml.matches(&even_fill).count(), 3);
        assert_eq!(xml.matches(r#"sz="1000" b="1""#).count(), 6);
    }
}
