//! Console replies
//!
//! One JSON line goes back per command: an acknowledgment carrying the
//! committed device state, or an error naming the offending command. Key
//! order and spelling are part of the wire contract.

use alloc::string::String;
use serde::Serialize;

use crate::command::CommandError;

/// A single reply line (without the trailing newline).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reply {
    /// Command applied; reports the committed values.
    Ack {
        command_number: i64,
        frequency_hz: u32,
        phase_cdeg: u32,
        enable_out: bool,
    },
    /// Command rejected.
    Error {
        command_number: i64,
        message: &'static str,
    },
}

/// Wire shape of an acknowledgment.
#[derive(Serialize)]
struct AckWire {
    command_number: i64,
    frequency: u32,
    phase: u32,
    enable_out: bool,
}

/// Wire shape of an error reply.
#[derive(Serialize)]
struct ErrorWire {
    command_number: i64,
    error: &'static str,
}

impl Reply {
    /// Build the error reply for a rejected command
    pub fn from_error(error: &CommandError) -> Self {
        Reply::Error {
            command_number: error.command_number,
            message: error.message(),
        }
    }

    /// Encode as one JSON line, without the trailing newline
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match *self {
            Reply::Ack {
                command_number,
                frequency_hz,
                phase_cdeg,
                enable_out,
            } => serde_json::to_string(&AckWire {
                command_number,
                frequency: frequency_hz,
                phase: phase_cdeg,
                enable_out,
            }),
            Reply::Error {
                command_number,
                message,
            } => serde_json::to_string(&ErrorWire {
                command_number,
                error: message,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ErrorKind;
    use crate::parser::CommandParser;

    #[test]
    fn test_ack_wire_format() {
        let reply = Reply::Ack {
            command_number: 1,
            frequency_hz: 1000,
            phase_cdeg: 4500,
            enable_out: true,
        };
        assert_eq!(
            reply.to_json().unwrap(),
            r#"{"command_number":1,"frequency":1000,"phase":4500,"enable_out":true}"#
        );
    }

    #[test]
    fn test_error_wire_format() {
        let error = CommandError {
            command_number: 0,
            kind: ErrorKind::MalformedDocument,
        };
        let reply = Reply::from_error(&error);
        assert_eq!(
            reply.to_json().unwrap(),
            r#"{"command_number":0,"error":"could not parse command as JSON"}"#
        );
    }

    #[test]
    fn test_error_keeps_recovered_number() {
        let error = CommandError {
            command_number: 17,
            kind: ErrorKind::InvalidCommandNumber,
        };
        let reply = Reply::from_error(&error);
        assert_eq!(
            reply.to_json().unwrap(),
            r#"{"command_number":17,"error":"missing or non-integer command_number"}"#
        );
    }

    #[test]
    fn test_field_error_replies_name_the_field() {
        // Wrong-typed fields surface on the wire with the field's own
        // message, end to end from the raw line.
        let parser = CommandParser::new();
        let cases: [(&[u8], &str); 3] = [
            (
                br#"{"command_number":8,"enable_out":"on"}"#,
                r#"{"command_number":8,"error":"enable_out must be a boolean"}"#,
            ),
            (
                br#"{"command_number":8,"frequency":-5}"#,
                r#"{"command_number":8,"error":"frequency must be an unsigned integer"}"#,
            ),
            (
                br#"{"command_number":8,"phase":12.5}"#,
                r#"{"command_number":8,"error":"phase must be an unsigned integer"}"#,
            ),
        ];
        for (line, wire) in cases {
            let error = parser.parse(line).unwrap_err();
            let reply = Reply::from_error(&error);
            assert_eq!(reply.to_json().unwrap(), wire);
        }
    }
}
