//! Simple TOML parser for the board configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! the board file. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (integer, boolean)
//! - [section] headers
//! - Comments (# ...)
//!
//! NOT supported:
//! - Strings, datetimes, arrays, inline tables
//! - Dotted keys and dotted section headers

use super::BoardConfig;

/// Parse error
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid section header
    InvalidSection,
    /// Invalid value type
    InvalidValue,
}

/// Current parsing context
#[derive(Debug, Clone, Copy)]
enum Section {
    Root,
    Dds,
    Console,
    Startup,
}

/// Parse TOML configuration into BoardConfig
pub fn parse_config(input: &str) -> Result<BoardConfig, ParseError> {
    let mut config = BoardConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Check for section header
        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        // Parse key = value
        if let Some((key, value)) = parse_key_value(line) {
            apply_value(section, key, value, &mut config)?;
        }
    }

    Ok(config)
}

/// Parse section header like "dds" or "startup"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "dds" => Ok(Section::Dds),
        "console" => Ok(Section::Console),
        "startup" => Ok(Section::Startup),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = match value.find('#') {
        Some(hash_pos) => value[..hash_pos].trim(),
        None => value,
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Apply a parsed value to the appropriate config field
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut BoardConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Dds => match key {
            "osc_hz" => config.dds.osc_hz = parse_int(value)?,
            "pulse_width_ns" => config.dds.pulse_width_ns = parse_int(value)?,
            "data_pin" => config.dds.data_pin = parse_int(value)?,
            "w_clk_pin" => config.dds.w_clk_pin = parse_int(value)?,
            "fq_ud_pin" => config.dds.fq_ud_pin = parse_int(value)?,
            "reset_pin" => config.dds.reset_pin = parse_int(value)?,
            _ => {} // Ignore unknown keys
        },
        Section::Console => match key {
            "baud" | "baud_rate" => config.console.baud_rate = parse_int(value)?,
            _ => {}
        },
        Section::Startup => match key {
            "frequency_hz" => config.startup.frequency_hz = parse_int(value)?,
            "phase_cdeg" => config.startup.phase_cdeg = parse_int(value)?,
            "enable_out" => config.startup.enable_out = parse_bool(value)?,
            _ => {}
        },
        Section::Root => {
            // No root-level keys
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_section_header() {
        assert!(matches!(parse_section_header("dds"), Ok(Section::Dds)));
        assert!(matches!(
            parse_section_header(" startup "),
            Ok(Section::Startup)
        ));
        assert!(parse_section_header("motor").is_err());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config_str = r#"
[dds]
osc_hz = 125000000
pulse_width_ns = 50
data_pin = 2
w_clk_pin = 3

[console]
baud = 57600

[startup]
frequency_hz = 1000
phase_cdeg = 4500
enable_out = true
"#;

        let config = parse_config(config_str).unwrap();
        assert_eq!(config.dds.osc_hz, 125_000_000);
        assert_eq!(config.dds.pulse_width_ns, 50);
        assert_eq!(config.dds.data_pin, 2);
        assert_eq!(config.dds.w_clk_pin, 3);
        assert_eq!(config.dds.fq_ud_pin, 11);
        assert_eq!(config.console.baud_rate, 57_600);
        assert_eq!(config.startup.frequency_hz, 1000);
        assert_eq!(config.startup.phase_cdeg, 4500);
        assert!(config.startup.enable_out);
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = parse_config("[dds]\nosc_hz = 100000000\n").unwrap();
        assert_eq!(config.dds.osc_hz, 100_000_000);
        assert_eq!(config.dds.pulse_width_ns, 0);
        assert_eq!(config.console.baud_rate, 115_200);
        assert_eq!(config.startup.frequency_hz, 1000);
        assert!(!config.startup.enable_out);
    }

    #[test]
    fn test_inline_comment_stripped() {
        let config = parse_config("[console]\nbaud = 9600 # slow link\n").unwrap();
        assert_eq!(config.console.baud_rate, 9600);
    }

    #[test]
    fn test_bad_value_rejected() {
        assert!(parse_config("[dds]\nosc_hz = fast\n").is_err());
        assert!(parse_config("[startup]\nenable_out = yes\n").is_err());
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(parse_config("[motor]\nrpm = 10\n").is_err());
    }

    #[test]
    fn test_unknown_key_ignored() {
        let config = parse_config("[dds]\nosc_mhz = 125\n").unwrap();
        assert_eq!(config.dds.osc_hz, 125_000_000);
    }
}
