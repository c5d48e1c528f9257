//! Integration tests for logger behavior.

use edu_portal::logger::{set_level, set_level_from_str, start_capture, take_capture, Level};
use edu_portal::{debug, error, info, warn};

#[test]
fn level_names_parse() {
    assert_eq!("WARN".parse::<Level>(), Ok(Level::Warn));
    assert_eq!("debug".parse::<Level>(), Ok(Level::Debug));
    assert!("".parse::<Level>().is_err());
}

// Level and capture are process-wide, so everything that touches them
// lives in this one test.
#[test]
fn capture_respects_level() {
    assert!(set_level_from_str("error"));
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));

    set_level(Level::Warn);
    start_capture();
    info!("hidden info");
    warn!("shown warn");
    error!("shown error");
    debug!("hidden debug");
    let lines = take_capture();

    assert_eq!(lines, vec!["[WARN] shown warn", "[ERROR] shown error"]);
    assert!(take_capture().is_empty());
}
