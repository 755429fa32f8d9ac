//! Command records and parse errors

/// One parsed console command.
///
/// Absent optional fields mean "leave that setting as it is"; they are
/// never defaulted to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandRecord {
    /// Client-chosen identifier, echoed back in the reply.
    pub command_number: i64,
    /// New output frequency in Hz.
    pub frequency_hz: Option<u32>,
    /// New output phase in hundredths of a degree.
    pub phase_cdeg: Option<u32>,
    /// New output-enable flag.
    pub enable_out: Option<bool>,
}

/// Which optional command field a type error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    EnableOut,
    Frequency,
    Phase,
}

/// Why a command line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// Not valid JSON, not an object, or nested deeper than the bound.
    MalformedDocument,
    /// `command_number` missing or not an integer.
    InvalidCommandNumber,
    /// A present optional field has the wrong type.
    InvalidField(Field),
}

/// A rejected command line.
///
/// Field checks run in a fixed order, so `command_number` is the recovered
/// value whenever the number itself parsed before the failing field, and
/// zero otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandError {
    pub command_number: i64,
    pub kind: ErrorKind,
}

impl CommandError {
    /// Fixed reply message for this error.
    pub fn message(&self) -> &'static str {
        match self.kind {
            ErrorKind::MalformedDocument => "could not parse command as JSON",
            ErrorKind::InvalidCommandNumber => "missing or non-integer command_number",
            ErrorKind::InvalidField(Field::EnableOut) => "enable_out must be a boolean",
            ErrorKind::InvalidField(Field::Frequency) => "frequency must be an unsigned integer",
            ErrorKind::InvalidField(Field::Phase) => "phase must be an unsigned integer",
        }
    }
}

/// Outcome of parsing one non-empty line.
pub type ParseOutcome = Result<CommandRecord, CommandError>;
