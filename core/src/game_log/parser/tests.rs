use super::*;
use chrono::NaiveDate;

fn utc_parser() -> LogParser {
    LogParser::new(FixedOffset::east_opt(0).unwrap())
}

fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2015, 12, 24)
        .unwrap()
        .and_hms_milli_opt(h, m, s, ms)
        .unwrap()
}

#[test]
fn test_parse_state_line() {
    let parser = utc_parser();
    let line = "DEBUG 2015-12-24 18:57:49,884 [State] Enter GameplayState";
    let record = parser.parse_line(7, line).unwrap().unwrap();

    assert_eq!(record.line_number, 7);
    assert_eq!(record.level, "DEBUG");
    assert_eq!(record.timestamp, at(18, 57, 49, 884));
    assert_eq!(record.component, Component::State);
    assert_eq!(record.message, "Enter GameplayState");
}

#[test]
fn test_parse_leading_whitespace_and_bomb_component() {
    let parser = utc_parser();
    let line = "   INFO 2015-12-24 19:00:01,002 [Bomb] Strike! 1 / 3 strikes";
    let record = parser.parse_line(1, line).unwrap().unwrap();

    assert_eq!(record.level, "INFO");
    assert_eq!(record.component, Component::Bomb);
    assert_eq!(record.message, "Strike! 1 / 3 strikes");
}

#[test]
fn test_parse_post_game_state_message_with_brackets() {
    let parser = utc_parser();
    let line = " DEBUG 2015-12-24 19:10:00,000 [PostGameState] Results screen bomb binder dismissed (retry). Retrying same mission...";
    let record = parser.parse_line(1, line).unwrap().unwrap();

    assert_eq!(record.component, Component::PostGameState);
    assert_eq!(
        record.message,
        "Results screen bomb binder dismissed (retry). Retrying same mission..."
    );
}

#[test]
fn test_lines_without_marker_are_skipped() {
    let parser = utc_parser();
    let line = "DEBUG 2015-12-24 18:57:49,884 [Assets.Scripts.Pacing.PaceMaker] Round start! Mission: The First Bomb";
    assert!(parser.parse_line(1, line).unwrap().is_none());
    assert!(parser.parse_line(2, "").unwrap().is_none());
}

#[test]
fn test_marker_line_with_bad_grammar_is_an_error() {
    let parser = utc_parser();
    let line = "debug something [State] Enter GameplayState";
    let err = parser.parse_line(12, line).unwrap_err();

    assert!(matches!(err, ParseError::InvalidLineFormat { line_number: 12, .. }));
    assert_eq!(err.line_number(), 12);
}

#[test]
fn test_marker_inside_message_of_other_component_is_an_error() {
    let parser = utc_parser();
    let line = "DEBUG 2015-12-24 18:57:49,884 [Assets.Scripts] forwarded [Bomb] Boom";
    assert!(parser.parse_line(3, line).is_err());
}

#[test]
fn test_impossible_date_is_a_timestamp_error() {
    let parser = utc_parser();
    let line = "DEBUG 2015-13-45 18:57:49,884 [State] Enter GameplayState";
    let err = parser.parse_line(4, line).unwrap_err();

    assert!(matches!(err, ParseError::InvalidTimestamp { line_number: 4, .. }));
}

#[test]
fn test_timestamp_shifted_to_local_offset() {
    let parser = LogParser::new(FixedOffset::east_opt(3600).unwrap());
    let line = "DEBUG 2015-12-24 23:30:00,500 [Bomb] Boom";
    let record = parser.parse_line(1, line).unwrap().unwrap();

    assert_eq!(
        record.timestamp,
        NaiveDate::from_ymd_opt(2015, 12, 25)
            .unwrap()
            .and_hms_milli_opt(0, 30, 0, 500)
            .unwrap()
    );

    let parser = LogParser::new(FixedOffset::west_opt(5 * 3600).unwrap());
    let record = parser.parse_line(1, line).unwrap().unwrap();
    assert_eq!(record.timestamp, at(18, 30, 0, 500));
}
