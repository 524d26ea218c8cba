//! PPTX writers.
//!
//! [`PptxWriter`] assembles a deck into an in-memory `.pptx` package;
//! [`PptxFileWriter`] does the same and moves the result into place on disk.

mod pres;
mod shape;
mod slide;

use crate::common::{Error, Result};
use crate::deck::Deck;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{PackageWriter, Part, Relationships};
use crate::ooxml::pptx::template;
use log::{debug, info};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Produces the final artifact of a finished deck.
///
/// [`Deck::finalize`] hands the whole deck to the writer at once; a writer
/// never sees a partially built deck.
pub trait ArtifactWriter {
    /// What the writer produces: bytes, a path, a summary...
    type Artifact;

    fn write_deck(&mut self, deck: &Deck) -> Result<Self::Artifact>;
}

/// Writes a deck as `.pptx` bytes.
///
/// # Examples
///
/// ```
/// use deckforge::deck::Deck;
/// use deckforge::ooxml::pptx::PptxWriter;
///
/// let mut deck = Deck::default();
/// deck.new_slide().fill_default_background();
/// let bytes = deck.finalize(&mut PptxWriter::new())?;
/// assert_eq!(&bytes[0..2], b"PK");
/// # Ok::<(), deckforge::Error>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PptxWriter;

impl PptxWriter {
    pub fn new() -> Self {
        Self
    }

    /// Assemble the OPC package of `deck`.
    fn build_package(deck: &Deck) -> Result<PackageWriter> {
        let mut package = PackageWriter::new();
        package
            .package_rels_mut()
            .add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
        package
            .package_rels_mut()
            .add(rt::CORE_PROPERTIES, "docProps/core.xml");
        package
            .package_rels_mut()
            .add(rt::EXTENDED_PROPERTIES, "docProps/app.xml");

        // presentation.xml and its relationships
        let mut pres_rels = Relationships::new();
        let master_rel_id = pres_rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        let slide_rel_ids: Vec<String> = deck
            .slides()
            .iter()
            .map(|slide| pres_rels.add(rt::SLIDE, format!("slides/slide{}.xml", slide.number())))
            .collect();
        pres_rels.add(rt::PRES_PROPS, "presProps.xml");
        pres_rels.add(rt::THEME, "theme/theme1.xml");
        pres_rels.add(rt::TABLE_STYLES, "tableStyles.xml");

        let presentation = pres::presentation_xml(deck.canvas(), &master_rel_id, &slide_rel_ids)?;
        package.add_part(
            Part::new("/ppt/presentation.xml", ct::PML_PRESENTATION_MAIN, presentation)
                .with_rels(pres_rels),
        );

        // Slides, each on the blank layout
        for slide in deck.slides() {
            let mut slide_rels = Relationships::new();
            slide_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
            package.add_part(
                Part::new(
                    format!("/ppt/slides/slide{}.xml", slide.number()),
                    ct::PML_SLIDE,
                    slide::slide_xml(slide)?,
                )
                .with_rels(slide_rels),
            );
        }

        // Master, layout and theme
        let mut master_rels = Relationships::new();
        let layout_rel_id = master_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        master_rels.add(rt::THEME, "../theme/theme1.xml");
        package.add_part(
            Part::new(
                "/ppt/slideMasters/slideMaster1.xml",
                ct::PML_SLIDE_MASTER,
                template::slide_master_xml(&layout_rel_id),
            )
            .with_rels(master_rels),
        );

        let mut layout_rels = Relationships::new();
        layout_rels.add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        package.add_part(
            Part::new(
                "/ppt/slideLayouts/slideLayout1.xml",
                ct::PML_SLIDE_LAYOUT,
                template::blank_layout_xml(),
            )
            .with_rels(layout_rels),
        );

        package.add_part(Part::new(
            "/ppt/theme/theme1.xml",
            ct::OFC_THEME,
            template::theme_xml(deck.palette())?,
        ));
        package.add_part(Part::new(
            "/ppt/presProps.xml",
            ct::PML_PRES_PROPS,
            template::pres_props_xml(),
        ));
        package.add_part(Part::new(
            "/ppt/tableStyles.xml",
            ct::PML_TABLE_STYLES,
            template::table_styles_xml(),
        ));

        // Document properties
        package.add_part(Part::new(
            "/docProps/core.xml",
            ct::OPC_CORE_PROPERTIES,
            template::core_props_xml(),
        ));
        package.add_part(Part::new(
            "/docProps/app.xml",
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(deck.slide_count()),
        ));

        Ok(package)
    }
}

impl ArtifactWriter for PptxWriter {
    type Artifact = Vec<u8>;

    fn write_deck(&mut self, deck: &Deck) -> Result<Vec<u8>> {
        let package = Self::build_package(deck)?;
        let bytes = package.to_bytes()?;
        debug!(
            "assembled pptx package: {} parts, {} bytes",
            package.parts().len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

/// Writes a deck as a `.pptx` file.
///
/// The package is written to a temporary file in the destination directory and
/// renamed over `path` only when complete, so a failed write never leaves a
/// truncated file behind.
#[derive(Debug, Clone)]
pub struct PptxFileWriter {
    path: PathBuf,
}

impl PptxFileWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: io::Error) -> Error {
        Error::ArtifactWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl ArtifactWriter for PptxFileWriter {
    type Artifact = PathBuf;

    fn write_deck(&mut self, deck: &Deck) -> Result<PathBuf> {
        let bytes = PptxWriter::new().write_deck(deck)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir).map_err(|e| self.write_error(e))?;
        file.write_all(&bytes).map_err(|e| self.write_error(e))?;
        file.as_file().sync_all().map_err(|e| self.write_error(e))?;
        file.persist(&self.path).map_err(|e| self.write_error(e.error))?;

        info!("saved {} ({} slides)", self.path.display(), deck.slide_count());
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn member_names(bytes: Vec<u8>) -> Vec<String> {
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        archive.file_names().map(str::to_string).collect()
    }

    #[test]
    fn test_package_members() {
        let mut deck = Deck::default();
        deck.new_slide();
        deck.new_slide();
        let names = member_names(deck.finalize(&mut PptxWriter::new()).unwrap());

        for expected in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/slides/_rels/slide2.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/presProps.xml",
            "ppt/tableStyles.xml",
            "docProps/core.xml",
            "docProps/app.xml",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
        assert_eq!(names[0], "[Content_Types].xml");
    }

    #[test]
    fn test_content_types_cover_slides() {
        let mut deck = Deck::default();
        deck.new_slide();
        let bytes = deck.finalize(&mut PptxWriter::new()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut content_types = String::new();
        archive
            .by_name("[Content_Types].xml")
            .unwrap()
            .read_to_string(&mut content_types)
            .unwrap();

        assert!(content_types.contains(r#"PartName="/ppt/slides/slide1.xml""#));
        assert!(content_types.contains(ct::PML_PRESENTATION_MAIN));
        assert!(content_types.contains(ct::OPC_CORE_PROPERTIES));
    }

    #[test]
    fn test_identical_decks_identical_bytes() {
        let build = || {
            let mut deck = Deck::default();
            deck.new_slide().fill_default_background();
            deck.finalize(&mut PptxWriter::new()).unwrap()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_file_writer_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("deck.pptx");
        let err = Deck::default().save(&path).unwrap_err();
        match err {
            Error::ArtifactWrite { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_file_writer_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        std::fs::write(&path, b"stale").unwrap();

        let written = Deck::default().save(&path).unwrap();
        assert_eq!(written, path);
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..2], b"PK");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
