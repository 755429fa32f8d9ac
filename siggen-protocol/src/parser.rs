//! JSON command parsing
//!
//! One line is one JSON object. Field checks are fail-fast over a fixed
//! order (`command_number`, `enable_out`, `frequency`, `phase`): the first
//! bad field names the error and later fields are not inspected. Clients
//! rely on that precedence, so it is part of the wire contract.

use serde_json::Value;

use crate::command::{CommandError, CommandRecord, ErrorKind, Field, ParseOutcome};

/// Default nesting bound: objects and arrays count one level each.
pub const MAX_JSON_DEPTH: usize = 8;

/// Line-to-record parser with a bounded document depth.
#[derive(Debug, Clone)]
pub struct CommandParser {
    max_depth: usize,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser {
    /// Create a parser with the default depth bound
    pub fn new() -> Self {
        Self {
            max_depth: MAX_JSON_DEPTH,
        }
    }

    /// Create a parser with a non-default depth bound
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Parse one complete line into a command record
    pub fn parse(&self, line: &[u8]) -> ParseOutcome {
        let malformed = CommandError {
            command_number: 0,
            kind: ErrorKind::MalformedDocument,
        };

        let doc: Value = serde_json::from_slice(line).map_err(|_| malformed)?;
        if depth(&doc) > self.max_depth {
            return Err(malformed);
        }
        let object = doc.as_object().ok_or(malformed)?;

        let command_number = object
            .get("command_number")
            .and_then(Value::as_i64)
            .ok_or(CommandError {
                command_number: 0,
                kind: ErrorKind::InvalidCommandNumber,
            })?;

        let mut record = CommandRecord {
            command_number,
            ..CommandRecord::default()
        };

        if let Some(value) = object.get("enable_out") {
            record.enable_out = Some(value.as_bool().ok_or(CommandError {
                command_number,
                kind: ErrorKind::InvalidField(Field::EnableOut),
            })?);
        }

        if let Some(value) = object.get("frequency") {
            record.frequency_hz = Some(as_u32(value).ok_or(CommandError {
                command_number,
                kind: ErrorKind::InvalidField(Field::Frequency),
            })?);
        }

        if let Some(value) = object.get("phase") {
            record.phase_cdeg = Some(as_u32(value).ok_or(CommandError {
                command_number,
                kind: ErrorKind::InvalidField(Field::Phase),
            })?);
        }

        Ok(record)
    }
}

/// Integer that fits in u32; floats, negatives and oversized values fail.
fn as_u32(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|v| u32::try_from(v).ok())
}

/// Nesting depth of a document: scalars are 1, containers add 1.
fn depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(depth).max().unwrap_or(0),
        Value::Object(map) => 1 + map.values().map(depth).max().unwrap_or(0),
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &[u8]) -> ParseOutcome {
        CommandParser::new().parse(line)
    }

    #[test]
    fn test_full_command() {
        let record =
            parse(br#"{"command_number":7,"frequency":1000,"phase":4500,"enable_out":true}"#)
                .unwrap();
        assert_eq!(record.command_number, 7);
        assert_eq!(record.frequency_hz, Some(1000));
        assert_eq!(record.phase_cdeg, Some(4500));
        assert_eq!(record.enable_out, Some(true));
    }

    #[test]
    fn test_absent_fields_stay_none() {
        let record = parse(br#"{"command_number":1}"#).unwrap();
        assert_eq!(record.command_number, 1);
        assert_eq!(record.frequency_hz, None);
        assert_eq!(record.phase_cdeg, None);
        assert_eq!(record.enable_out, None);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let record = parse(br#"{"command_number":2,"mode":"am","gain":3}"#).unwrap();
        assert_eq!(record.command_number, 2);
        assert_eq!(record.frequency_hz, None);
    }

    #[test]
    fn test_not_json_is_malformed() {
        let err = parse(b"set frequency 1000").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedDocument);
        assert_eq!(err.command_number, 0);

        // A key with no value is a syntax error, not a missing field
        let err = parse(br#"{"command_number":}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedDocument);
    }

    #[test]
    fn test_non_object_is_malformed() {
        assert_eq!(
            parse(b"[1,2,3]").unwrap_err().kind,
            ErrorKind::MalformedDocument
        );
        assert_eq!(parse(b"42").unwrap_err().kind, ErrorKind::MalformedDocument);
    }

    #[test]
    fn test_missing_command_number() {
        let err = parse(br#"{"frequency":1000}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCommandNumber);
        assert_eq!(err.command_number, 0);
    }

    #[test]
    fn test_non_integer_command_number() {
        let err = parse(br#"{"command_number":"five"}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCommandNumber);
        // Floats are not integers
        let err = parse(br#"{"command_number":5.0}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCommandNumber);
    }

    #[test]
    fn test_bad_optional_fields_carry_command_number() {
        let err = parse(br#"{"command_number":9,"enable_out":1}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidField(Field::EnableOut));
        assert_eq!(err.command_number, 9);

        let err = parse(br#"{"command_number":9,"frequency":"fast"}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidField(Field::Frequency));

        let err = parse(br#"{"command_number":9,"phase":null}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidField(Field::Phase));
    }

    #[test]
    fn test_field_check_order() {
        // With several bad fields, enable_out is reported first, then
        // frequency, then phase. Clients depend on this precedence.
        let err = parse(br#"{"command_number":3,"enable_out":"y","frequency":"f","phase":"p"}"#)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidField(Field::EnableOut));

        let err = parse(br#"{"command_number":3,"frequency":"f","phase":"p"}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidField(Field::Frequency));
    }

    #[test]
    fn test_negative_and_oversized_rejected() {
        let err = parse(br#"{"command_number":4,"frequency":-1}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidField(Field::Frequency));

        // Larger than u32
        let err = parse(br#"{"command_number":4,"frequency":4294967296}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidField(Field::Frequency));
        // Exactly u32::MAX is fine
        let record = parse(br#"{"command_number":4,"frequency":4294967295}"#).unwrap();
        assert_eq!(record.frequency_hz, Some(u32::MAX));
    }

    #[test]
    fn test_depth_bound() {
        // Seven nested objects around a scalar: depth 8, accepted (the
        // command_number check then fails, proving we got past the bound).
        let shallow = br#"{"a":{"b":{"c":{"d":{"e":{"f":{"g":1}}}}}}}"#;
        assert_eq!(
            parse(shallow).unwrap_err().kind,
            ErrorKind::InvalidCommandNumber
        );

        // One more level: depth 9, rejected outright.
        let deep = br#"{"a":{"b":{"c":{"d":{"e":{"f":{"g":{"h":1}}}}}}}}"#;
        assert_eq!(parse(deep).unwrap_err().kind, ErrorKind::MalformedDocument);

        // A looser parser accepts it
        let loose = CommandParser::with_max_depth(16);
        assert_eq!(
            loose.parse(deep).unwrap_err().kind,
            ErrorKind::InvalidCommandNumber
        );
    }

    #[test]
    fn test_depth_counts_arrays_in_unknown_fields() {
        // Unknown fields are ignored for extraction but still bound the
        // document: a deep array in one is a malformed document.
        let deep_extra = br#"{"command_number":1,"x":[[[[[[[[1]]]]]]]]}"#;
        assert_eq!(
            parse(deep_extra).unwrap_err().kind,
            ErrorKind::MalformedDocument
        );
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        assert_eq!(
            parse(&[0x80, 0xFF, b'{', b'}']).unwrap_err().kind,
            ErrorKind::MalformedDocument
        );
    }

    #[test]
    fn test_empty_object_missing_number() {
        assert_eq!(
            parse(b"{}").unwrap_err().kind,
            ErrorKind::InvalidCommandNumber
        );
    }

    #[test]
    fn test_negative_command_number_allowed() {
        // The identifier is a plain integer; only the device fields are
        // unsigned.
        let record = parse(br#"{"command_number":-3}"#).unwrap();
        assert_eq!(record.command_number, -3);
    }
}
