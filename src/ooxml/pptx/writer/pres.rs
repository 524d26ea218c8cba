/// Presentation part XML: master list, slide list and slide size.
use crate::common::Result;
use crate::deck::Canvas;
use crate::ooxml::pptx::template::{SLIDE_MASTER_ID, pml_namespaces};
use std::fmt::Write as FmtWrite;

/// First ID in `sldIdLst`; lower values are reserved.
pub(crate) const FIRST_SLIDE_ID: u32 = 256;

/// Notes page size; PowerPoint writes portrait letter regardless of the slide size.
const NOTES_SIZE: (i64, i64) = (6_858_000, 9_144_000);

/// Generate presentation.xml.
///
/// `slide_rel_ids` holds the presentation-level relationship ID of each slide
/// in deck order; the slide list is written in that same order.
pub(crate) fn presentation_xml(canvas: Canvas, master_rel_id: &str, slide_rel_ids: &[String]) -> Result<String> {
    let mut xml = String::with_capacity(1024 + slide_rel_ids.len() * 64);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<p:presentation {} saveSubsetFonts="1">"#, pml_namespaces())?;

    xml.push_str("<p:sldMasterIdLst>");
    write!(
        xml,
        r#"<p:sldMasterId id="{}" r:id="{}"/>"#,
        SLIDE_MASTER_ID, master_rel_id
    )?;
    xml.push_str("</p:sldMasterIdLst>");

    if !slide_rel_ids.is_empty() {
        xml.push_str("<p:sldIdLst>");
        for (slide_id, rel_id) in (FIRST_SLIDE_ID..).zip(slide_rel_ids) {
            write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide_id, rel_id)?;
        }
        xml.push_str("</p:sldIdLst>");
    }

    write!(xml, r#"<p:sldSz cx="{}" cy="{}"/>"#, canvas.width, canvas.height)?;
    write!(xml, r#"<p:notesSz cx="{}" cy="{}"/>"#, NOTES_SIZE.0, NOTES_SIZE.1)?;

    xml.push_str("</p:presentation>");

    Ok(xml)
}
