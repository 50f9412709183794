//! Whole-file persistence of the submissions document.
//!
//! Every save rewrites the file from scratch; an empty track list deletes
//! it instead, so the file exists exactly when there is something pending.
//! Output is UTF-8 with stable 2-space indentation to keep diffs quiet.

use std::fs;
use std::io;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use crate::error::PersistError;
use crate::track::{Track, xml};

/// Format-version marker written to the root element.
const FORMAT_VERSION: &str = "2";

/// Written verbatim; the historical format uses single quotes here.
const XML_DECLARATION: &[u8] = b"<?xml version='1.0' encoding='utf-8'?>\n";

/// Reads the document at `path`, collecting each direct `<track>` child of
/// the root in document order. A missing file is an empty cache, not an
/// error. Root attributes are informational and not validated.
pub(super) fn load(path: &Path) -> Result<Vec<Track>, PersistError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    parse_document(&fs::read_to_string(path)?)
}

fn parse_document(content: &str) -> Result<Vec<Track>, PersistError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut tracks = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                if depth == 2 && e.name().as_ref() == b"track" {
                    tracks.push(xml::read_track(&mut reader)?);
                    // read_track consumed the matching </track>.
                    depth -= 1;
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(tracks)
}

/// Rewrites the document at `path` wholesale, or deletes it when `tracks`
/// is empty (a previously absent file is fine).
pub(super) fn save(path: &Path, product: &str, tracks: &[Track]) -> Result<(), PersistError> {
    if tracks.is_empty() {
        return match fs::remove_file(path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        };
    }

    let mut buf = Vec::from(XML_DECLARATION);
    {
        let mut writer = Writer::new_with_indent(&mut buf, b' ', 2);

        let mut root = BytesStart::new("submissions");
        root.push_attribute(("product", product));
        root.push_attribute(("version", FORMAT_VERSION));
        writer.write_event(Event::Start(root))?;

        for track in tracks {
            xml::write_track(&mut writer, track)?;
        }

        writer.write_event(Event::End(BytesEnd::new("submissions")))?;
    }
    buf.push(b'\n');

    fs::write(path, buf)?;
    Ok(())
}
