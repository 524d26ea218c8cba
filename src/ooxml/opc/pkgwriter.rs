//! Package writer for OPC packages.
//!
//! This module serializes a set of parts into a ZIP archive, writing the
//! [Content_Types].xml, the package relationships, every part and every part's
//! relationships.

use crate::common::Result;
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::rel::Relationships;
use log::trace;
use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use zip::{CompressionMethod, DateTime};
use zip::write::SimpleFileOptions;

/// Member name of the content types item.
pub const CONTENT_TYPES_MEMBER: &str = "[Content_Types].xml";
/// Member name of the package relationships.
pub const PACKAGE_RELS_MEMBER: &str = "_rels/.rels";

/// One part of a package.
#[derive(Debug, Clone)]
pub struct Part {
    /// Absolute part name, e.g. `/ppt/slides/slide1.xml`
    partname: String,
    content_type: &'static str,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    pub fn new(partname: impl Into<String>, content_type: &'static str, blob: impl Into<Vec<u8>>) -> Self {
        Self {
            partname: partname.into(),
            content_type,
            blob: blob.into(),
            rels: Relationships::new(),
        }
    }

    pub fn with_rels(mut self, rels: Relationships) -> Self {
        self.rels = rels;
        self
    }

    #[inline]
    pub fn partname(&self) -> &str {
        &self.partname
    }

    #[inline]
    pub fn content_type(&self) -> &str {
        self.content_type
    }

    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// ZIP member name: the part name without its leading slash.
    pub fn membername(&self) -> &str {
        self.partname.trim_start_matches('/')
    }

    /// ZIP member name of this part's relationships,
    /// e.g. `ppt/slides/_rels/slide1.xml.rels`.
    pub fn rels_membername(&self) -> String {
        let member = self.membername();
        match member.rsplit_once('/') {
            Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
            None => format!("_rels/{}.rels", member),
        }
    }

    /// File extension of the part name, lowercase.
    fn ext(&self) -> String {
        self.partname
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default()
    }
}

/// Package writer that serializes parts to an in-memory ZIP archive.
///
/// # Example
///
/// ```
/// use deckforge::ooxml::opc::{PackageWriter, Part};
/// use deckforge::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
///
/// let mut pkg = PackageWriter::new();
/// pkg.package_rels_mut().add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
/// pkg.add_part(Part::new("/ppt/presentation.xml", ct::PML_PRESENTATION_MAIN, "<p:presentation/>"));
/// let bytes = pkg.to_bytes()?;
/// assert_eq!(&bytes[0..2], b"PK");
/// # Ok::<(), deckforge::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct PackageWriter {
    package_rels: Relationships,
    parts: Vec<Part>,
}

impl PackageWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relationships from the package itself (`_rels/.rels`).
    pub fn package_rels_mut(&mut self) -> &mut Relationships {
        &mut self.package_rels
    }

    pub fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Serialize the package to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut archive = zip::ZipWriter::new(Cursor::new(Vec::new()));
        // Fixed timestamps keep the output reproducible
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        // [Content_Types].xml must come first for some consumers
        let content_types = ContentTypesItem::from_parts(&self.parts).to_xml();
        Self::write_member(&mut archive, options, CONTENT_TYPES_MEMBER, content_types.as_bytes())?;

        Self::write_member(
            &mut archive,
            options,
            PACKAGE_RELS_MEMBER,
            self.package_rels.to_xml().as_bytes(),
        )?;

        for part in &self.parts {
            Self::write_member(&mut archive, options, part.membername(), part.blob())?;

            if !part.rels().is_empty() {
                let rels_member = part.rels_membername();
                Self::write_member(&mut archive, options, &rels_member, part.rels().to_xml().as_bytes())?;
            }
        }

        Ok(archive.finish()?.into_inner())
    }

    fn write_member(
        archive: &mut zip::ZipWriter<Cursor<Vec<u8>>>,
        options: SimpleFileOptions,
        name: &str,
        blob: &[u8],
    ) -> Result<()> {
        trace!("writing package member {} ({} bytes)", name, blob.len());
        archive.start_file(name, options)?;
        archive.write_all(blob)?;
        Ok(())
    }
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_parts(parts: &[Part]) -> Self {
        let mut cti = Self::new();
        for part in parts {
            cti.add_content_type(part);
        }
        cti
    }

    /// Uses a default mapping if the extension matches a well-known type,
    /// otherwise uses an override for the specific partname.
    fn add_content_type(&mut self, part: &Part) {
        let ext = part.ext();
        if Self::is_default_content_type(&ext, part.content_type()) {
            self.defaults.insert(ext, part.content_type().to_string());
        } else {
            self.overrides
                .insert(part.partname().to_string(), part.content_type().to_string());
        }
    }

    fn is_default_content_type(ext: &str, content_type: &str) -> bool {
        matches!(
            (ext, content_type),
            ("rels", ct::OPC_RELATIONSHIPS) | ("xml", ct::XML)
        )
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Types xmlns=""#);
        xml.push_str(namespace::OPC_CONTENT_TYPES);
        xml.push_str(r#"">"#);

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }

        xml.push_str("</Types>");

        xml
    }
}
