//! Presentation template module.
//!
//! Provides the fixed parts every generated package needs besides its slides:
//! one slide master, one blank layout, a theme, presentation properties, table
//! styles and document properties. Only the theme and the document properties
//! depend on the deck being written.

use crate::common::Result;
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use crate::palette::Palette;
use std::fmt::Write as FmtWrite;

/// Namespace declarations for PresentationML root elements.
pub(crate) fn pml_namespaces() -> String {
    format!(
        r#"xmlns:a="{}" xmlns:r="{}" xmlns:p="{}""#,
        namespace::DML_MAIN,
        namespace::OFC_RELATIONSHIPS,
        namespace::PML_MAIN
    )
}

/// Required first children of every `p:spTree`: the root group's properties.
pub(crate) const SP_TREE_ROOT: &str = concat!(
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
);

/// ID of the single slide master in `sldMasterIdLst`.
pub(crate) const SLIDE_MASTER_ID: u32 = 2_147_483_648;
/// ID of the blank layout in the master's `sldLayoutIdLst`.
const SLIDE_LAYOUT_ID: u32 = 2_147_483_649;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// slideMaster1.xml: master background, color map and the blank layout reference.
pub fn slide_master_xml(layout_rel_id: &str) -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECLARATION);
    xml.push_str("<p:sldMaster ");
    xml.push_str(&pml_namespaces());
    xml.push('>');
    xml.push_str(r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str("<p:spTree>");
    xml.push_str(SP_TREE_ROOT);
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(concat!(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
        r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" "#,
        r#"hlink="hlink" folHlink="folHlink"/>"#,
    ));
    xml.push_str(&format!(
        r#"<p:sldLayoutIdLst><p:sldLayoutId id="{}" r:id="{}"/></p:sldLayoutIdLst>"#,
        SLIDE_LAYOUT_ID, layout_rel_id
    ));
    xml.push_str("</p:sldMaster>");
    xml
}

/// slideLayout1.xml: the blank layout every slide uses.
pub fn blank_layout_xml() -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECLARATION);
    xml.push_str("<p:sldLayout ");
    xml.push_str(&pml_namespaces());
    xml.push_str(r#" type="blank" preserve="1">"#);
    xml.push_str(r#"<p:cSld name="Blank"><p:spTree>"#);
    xml.push_str(SP_TREE_ROOT);
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    xml
}

/// theme1.xml, with the palette's font as the theme font and its main colors
/// as the dark/light/accent scheme slots.
pub fn theme_xml(palette: &Palette) -> Result<String> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECLARATION);
    write!(xml, r#"<a:theme xmlns:a="{}" name="deckforge">"#, namespace::DML_MAIN)?;
    xml.push_str("<a:themeElements>");

    xml.push_str(r#"<a:clrScheme name="deckforge">"#);
    xml.push_str(r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#);
    xml.push_str(r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#);
    write!(xml, r#"<a:dk2><a:srgbClr val="{}"/></a:dk2>"#, palette.background.to_hex())?;
    write!(xml, r#"<a:lt2><a:srgbClr val="{}"/></a:lt2>"#, palette.body_text.to_hex())?;
    let accents = [
        palette.accent.to_hex(),
        palette.card.to_hex(),
        palette.table.header_fill.to_hex(),
        "8064A2".to_string(),
        "4BACC6".to_string(),
        "F79646".to_string(),
    ];
    for (index, accent) in accents.iter().enumerate() {
        write!(
            xml,
            r#"<a:accent{n}><a:srgbClr val="{accent}"/></a:accent{n}>"#,
            n = index + 1
        )?;
    }
    xml.push_str(r#"<a:hlink><a:srgbClr val="0000FF"/></a:hlink>"#);
    xml.push_str(r#"<a:folHlink><a:srgbClr val="800080"/></a:folHlink>"#);
    xml.push_str("</a:clrScheme>");

    let font = escape_xml(&palette.font_family);
    xml.push_str(r#"<a:fontScheme name="deckforge">"#);
    for group in ["majorFont", "minorFont"] {
        write!(
            xml,
            r#"<a:{group}><a:latin typeface="{font}"/><a:ea typeface="{font}"/><a:cs typeface=""/></a:{group}>"#
        )?;
    }
    xml.push_str("</a:fontScheme>");

    xml.push_str(r#"<a:fmtScheme name="deckforge">"#);
    let scheme_fill = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    xml.push_str("<a:fillStyleLst>");
    for _ in 0..3 {
        xml.push_str(scheme_fill);
    }
    xml.push_str("</a:fillStyleLst><a:lnStyleLst>");
    for width in [9525, 25400, 38100] {
        write!(xml, r#"<a:ln w="{}">{}</a:ln>"#, width, scheme_fill)?;
    }
    xml.push_str("</a:lnStyleLst><a:effectStyleLst>");
    for _ in 0..3 {
        xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
    }
    xml.push_str("</a:effectStyleLst><a:bgFillStyleLst>");
    for _ in 0..3 {
        xml.push_str(scheme_fill);
    }
    xml.push_str("</a:bgFillStyleLst></a:fmtScheme>");

    xml.push_str("</a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>");
    Ok(xml)
}

/// presProps.xml
pub fn pres_props_xml() -> String {
    format!("{}<p:presentationPr {}/>", XML_DECLARATION, pml_namespaces())
}

/// tableStyles.xml, pointing at the built-in "Medium Style 2 - Accent 1" default.
pub fn table_styles_xml() -> String {
    format!(
        r#"{}<a:tblStyleLst xmlns:a="{}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#,
        XML_DECLARATION,
        namespace::DML_MAIN
    )
}

/// docProps/core.xml. No timestamps, so identical decks produce identical packages.
pub fn core_props_xml() -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECLARATION);
    xml.push_str(concat!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    ));
    xml.push_str("<dc:creator>deckforge</dc:creator><cp:revision>1</cp:revision>");
    xml.push_str("</cp:coreProperties>");
    xml
}

/// docProps/app.xml, reporting the slide count.
pub fn app_props_xml(slide_count: usize) -> String {
    format!(
        concat!(
            "{}",
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            "<Application>deckforge</Application><Slides>{}</Slides></Properties>",
        ),
        XML_DECLARATION, slide_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::colors;

    #[test]
    fn test_theme_uses_palette() {
        let xml = theme_xml(&Palette::default()).unwrap();
        assert!(xml.contains(r#"<a:latin typeface="맑은 고딕"/>"#));
        assert!(xml.contains(&format!(r#"<a:accent1><a:srgbClr val="{}"/>"#, colors::GOLD.to_hex())));
        assert_eq!(xml.matches("<a:effectStyle>").count(), 3);
    }

    #[test]
    fn test_master_references_layout() {
        let xml = slide_master_xml("rId1");
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(xml.contains(SP_TREE_ROOT));
        assert!(blank_layout_xml().contains(r#"type="blank""#));
    }

    #[test]
    fn test_app_props_slide_count() {
        assert!(app_props_xml(3).contains("<Slides>3</Slides>"));
        assert!(table_styles_xml().contains(r#"def="{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}""#));
    }
}
