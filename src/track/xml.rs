//! `<track>` element codec for the persisted submissions document.
//!
//! Optional fields (artist, album, timestamp) are omitted entirely when
//! absent; unknown child elements are skipped on read so the reader stays
//! tolerant of records written by newer clients.

use std::io::Write;
use std::time::Duration;

use chrono::DateTime;
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::PersistError;

use super::model::Track;

pub(crate) fn write_track<W: Write>(
    writer: &mut Writer<W>,
    track: &Track,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new("track")))?;

    if let Some(artist) = &track.artist {
        write_text_element(writer, "artist", artist)?;
    }
    write_text_element(writer, "title", &track.title)?;
    if let Some(album) = &track.album {
        write_text_element(writer, "album", album)?;
    }
    write_text_element(writer, "duration", &track.duration.as_secs().to_string())?;
    if let Some(timestamp) = &track.timestamp {
        write_text_element(writer, "timestamp", &timestamp.timestamp().to_string())?;
    }

    writer.write_event(Event::End(BytesEnd::new("track")))
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))
}

/// Reads one track record. The reader must be positioned just past the
/// opening `<track>` tag; on success it has consumed the matching
/// `</track>`.
pub(crate) fn read_track(reader: &mut Reader<&[u8]>) -> Result<Track, PersistError> {
    let mut track = Track::default();
    // Name of the direct child element currently open, if it is one we know.
    let mut field: Option<Field> = None;
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if depth == 0 {
                    field = Field::from_name(e.name().as_ref());
                }
                depth += 1;
            }
            Event::Text(text) => {
                if depth == 1 {
                    if let Some(field) = field {
                        let value = text.unescape()?;
                        field.apply(&mut track, &value)?;
                    }
                }
            }
            Event::End(_) if depth == 0 => return Ok(track),
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    field = None;
                }
            }
            Event::Eof => {
                return Err(PersistError::Malformed(
                    "truncated <track> element".to_string(),
                ));
            }
            _ => {}
        }
    }
}

#[derive(Debug, Copy, Clone)]
enum Field {
    Artist,
    Title,
    Album,
    Duration,
    Timestamp,
}

impl Field {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"artist" => Some(Field::Artist),
            b"title" => Some(Field::Title),
            b"album" => Some(Field::Album),
            b"duration" => Some(Field::Duration),
            b"timestamp" => Some(Field::Timestamp),
            _ => None,
        }
    }

    fn apply(self, track: &mut Track, value: &str) -> Result<(), PersistError> {
        match self {
            Field::Artist => track.artist = Some(value.to_string()),
            Field::Title => track.title = value.to_string(),
            Field::Album => track.album = Some(value.to_string()),
            Field::Duration => {
                let secs: u64 = value.parse().map_err(|_| {
                    PersistError::Malformed(format!("bad <duration> value: {value:?}"))
                })?;
                track.duration = Duration::from_secs(secs);
            }
            Field::Timestamp => {
                let secs: i64 = value.parse().map_err(|_| {
                    PersistError::Malformed(format!("bad <timestamp> value: {value:?}"))
                })?;
                track.timestamp = Some(DateTime::from_timestamp(secs, 0).ok_or_else(|| {
                    PersistError::Malformed(format!("out-of-range <timestamp>: {value:?}"))
                })?);
            }
        }
        Ok(())
    }
}
