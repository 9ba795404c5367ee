use std::path::PathBuf;

/// Why a directive was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("generic error")]
    Generic,
    #[error("invalid item number")]
    InvalidItemNumber,
    #[error("invalid dice")]
    InvalidDice,
    #[error("invalid effect")]
    InvalidEffect,
    #[error("invalid flag specification")]
    InvalidFlag,
    #[error("invalid spell frequency")]
    InvalidSpellFreq,
    #[error("invalid value")]
    InvalidValue,
    #[error("invalid colour code")]
    InvalidColor,
    #[error("missing field")]
    MissingField,
    #[error("missing record header")]
    MissingRecordHeader,
    #[error("field is not a number")]
    NotNumber,
    #[error("field is not a random value")]
    NotRandom,
    #[error("no object kinds for this ego type")]
    NoKindForEgoType,
    #[error("out of bounds")]
    OutOfBounds,
    #[error("too many entries")]
    TooManyEntries,
    #[error("undefined directive")]
    UndefinedDirective,
    #[error("unrecognised blow")]
    UnrecognisedBlow,
    #[error("unrecognised tval name")]
    UnrecognisedTval,
    #[error("unrecognised sval name")]
    UnrecognisedSval,
    #[error("vault too big")]
    VaultTooBig,
    #[error("internal error")]
    Internal,
    #[error("no file found")]
    NoFileFound,
    #[error("invalid allocation")]
    InvalidAllocation,
    #[error("not a special artifact")]
    NotSpecialArtifact,
}

/// A rejected directive: the kind plus the offending text or field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {msg}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub msg: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, msg: impl Into<String>) -> Self {
        Self {
            kind,
            msg: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Internal, msg)
    }
}

impl From<ParseErrorKind> for ParseError {
    fn from(kind: ParseErrorKind) -> Self {
        Self::new(kind, "")
    }
}

/// A directive schema that could not be registered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegError {
    #[error("empty directive schema")]
    Empty,
    #[error("field of type `{ty}` has no name")]
    MissingName { ty: String },
    #[error("unknown field type `{ty}`")]
    UnknownType { ty: String },
    #[error("required field `{field}` follows an optional field")]
    RequiredAfterOptional { field: String },
    #[error("field `{field}` follows a str field")]
    FieldAfterStr { field: String },
}

/// A table whose records parsed but could not be assembled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FinishError {
    #[error("no {what} records")]
    Empty { what: &'static str },
    #[error("{what} record has negative index {id}")]
    NegativeId { what: &'static str, id: i64 },
    #[error("{what} {id} refers to missing {target} {reference}")]
    Unresolved {
        what: &'static str,
        id: usize,
        target: &'static str,
        reference: i64,
    },
    #[error("no monsters can be generated at level 0")]
    NoTownMonsters,
}

/// Failure to load one data file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("no data file found for {name}")]
    NoFileFound { name: String },
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("bad directive schema in {table}: {source}")]
    Schema {
        table: &'static str,
        #[source]
        source: RegError,
    },
    #[error("parse error in {table} line {line} column {col}: {source}")]
    Parse {
        table: &'static str,
        line: usize,
        col: usize,
        #[source]
        source: ParseError,
    },
    #[error("parser finish error in {table}: {source}")]
    Finish {
        table: &'static str,
        #[source]
        source: FinishError,
    },
}

impl LoadError {
    /// The table that failed, when known.
    pub fn table(&self) -> Option<&str> {
        match self {
            Self::NoFileFound { name } => Some(name.as_str()),
            Self::Io { .. } => None,
            Self::Schema { table, .. } | Self::Parse { table, .. } | Self::Finish { table, .. } => {
                Some(*table)
            }
        }
    }

    /// The parse error kind, when this is a parse failure.
    pub fn parse_kind(&self) -> Option<ParseErrorKind> {
        match self {
            Self::Parse { source, .. } => Some(source.kind),
            Self::NoFileFound { .. } => Some(ParseErrorKind::NoFileFound),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let e = ParseError::new(ParseErrorKind::UnrecognisedTval, "badtval");
        assert_eq!(e.to_string(), "unrecognised tval name: badtval");
    }

    #[test]
    fn load_error_names_table_and_position() {
        let e = LoadError::Parse {
            table: "monster",
            line: 12,
            col: 2,
            source: ParseError::new(ParseErrorKind::NotNumber, "speed"),
        };
        assert_eq!(
            e.to_string(),
            "parse error in monster line 12 column 2: field is not a number: speed"
        );
        assert_eq!(e.parse_kind(), Some(ParseErrorKind::NotNumber));
    }
}
