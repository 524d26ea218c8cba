/// Slide part XML.
use super::shape::write_element;
use crate::common::Result;
use crate::deck::Slide;
use crate::ooxml::pptx::template::{SP_TREE_ROOT, pml_namespaces};
use std::fmt::Write as FmtWrite;

/// Shape IDs on a slide start here; ID 1 is the root group.
pub(crate) const FIRST_SHAPE_ID: u32 = 2;

/// Generate the XML of one slide.
///
/// Elements are written in drawing order, so later elements render on top.
pub(crate) fn slide_xml(slide: &Slide) -> Result<String> {
    let mut xml = String::with_capacity(1024 + slide.element_count() * 1024);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, "<p:sld {}>", pml_namespaces())?;
    xml.push_str("<p:cSld>");

    if let Some(color) = slide.background() {
        xml.push_str("<p:bg><p:bgPr>");
        write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.to_hex())?;
        xml.push_str("<a:effectLst/>");
        xml.push_str("</p:bgPr></p:bg>");
    }

    xml.push_str("<p:spTree>");
    xml.push_str(SP_TREE_ROOT);
    for (shape_id, element) in (FIRST_SHAPE_ID..).zip(slide.elements()) {
        write_element(&mut xml, shape_id, element)?;
    }
    xml.push_str("</p:spTree>");

    xml.push_str("</p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");

    Ok(xml)
}
