use std::time::Duration;

use chrono::DateTime;
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::Event;

use super::model::Track;
use super::xml::{read_track, write_track};

fn ts(secs: i64) -> chrono::DateTime<chrono::Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

fn full_track() -> Track {
    Track {
        artist: Some("Broadcast".to_string()),
        title: "Come On Let's Go".to_string(),
        album: Some("The Noise Made by People".to_string()),
        duration: Duration::from_secs(197),
        timestamp: Some(ts(1_600_000_000)),
    }
}

/// Serializes one track and parses it back through the codec.
fn round_trip(track: &Track) -> Track {
    let mut buf = Vec::new();
    let mut writer = Writer::new(&mut buf);
    write_track(&mut writer, track).unwrap();

    let text = String::from_utf8(buf).unwrap();
    parse_track(&text)
}

fn parse_track(text: &str) -> Track {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);
    match reader.read_event().unwrap() {
        Event::Start(e) => assert_eq!(e.name().as_ref(), b"track"),
        other => panic!("expected <track>, got {other:?}"),
    }
    read_track(&mut reader).unwrap()
}

#[test]
fn default_track_is_the_empty_sentinel() {
    assert!(Track::default().is_empty());
    assert!(!full_track().is_empty());

    let almost = Track {
        title: "x".to_string(),
        ..Track::default()
    };
    assert!(!almost.is_empty());
}

#[test]
fn equality_is_value_based() {
    assert_eq!(full_track(), full_track().clone());

    let later = Track {
        timestamp: Some(ts(1_600_000_001)),
        ..full_track()
    };
    assert_ne!(full_track(), later);
}

#[test]
fn round_trip_preserves_all_fields() {
    assert_eq!(round_trip(&full_track()), full_track());
}

#[test]
fn round_trip_omits_and_restores_absent_fields() {
    let minimal = Track {
        artist: None,
        title: "Untagged".to_string(),
        album: None,
        duration: Duration::from_secs(45),
        timestamp: None,
    };
    assert_eq!(round_trip(&minimal), minimal);

    // Absent fields must not appear in the document at all.
    let mut buf = Vec::new();
    let mut writer = Writer::new(&mut buf);
    write_track(&mut writer, &minimal).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(!text.contains("<artist>"));
    assert!(!text.contains("<album>"));
    assert!(!text.contains("<timestamp>"));
}

#[test]
fn special_characters_survive_the_codec() {
    let track = Track {
        artist: Some("Simon & Garfunkel".to_string()),
        title: "<Keep> the \"Customer\" Satisfied".to_string(),
        ..full_track()
    };
    assert_eq!(round_trip(&track), track);
}

#[test]
fn unknown_child_elements_are_skipped() {
    let parsed = parse_track(
        "<track>\
           <artist>Can</artist>\
           <mbid>not-a-field</mbid>\
           <title>Vitamin C</title>\
           <extra><nested>deep</nested></extra>\
           <duration>211</duration>\
           <timestamp>1600000000</timestamp>\
         </track>",
    );
    let expected = Track {
        artist: Some("Can".to_string()),
        title: "Vitamin C".to_string(),
        album: None,
        duration: Duration::from_secs(211),
        timestamp: Some(ts(1_600_000_000)),
    };
    assert_eq!(parsed, expected);
}

#[test]
fn missing_duration_reads_as_zero() {
    let parsed = parse_track("<track><title>Short</title></track>");
    assert_eq!(parsed.duration, Duration::ZERO);
    assert_eq!(parsed.title, "Short");
}

#[test]
fn bad_duration_is_a_parse_error() {
    let mut reader = Reader::from_str("<track><duration>soon</duration></track>");
    reader.config_mut().trim_text(true);
    reader.read_event().unwrap();
    assert!(read_track(&mut reader).is_err());
}

#[test]
fn truncated_track_is_a_parse_error() {
    let mut reader = Reader::from_str("<track><artist>Can</artist>");
    reader.config_mut().trim_text(true);
    reader.read_event().unwrap();
    assert!(read_track(&mut reader).is_err());
}
