use thiserror::Error;

use larder_core::ValueObject;
use larder_inventory::{ItemId, Name, Tag};

/// What went wrong while parsing a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    InvalidName,
    InvalidIdFormat,
    InvalidIdRange,
    InvalidCountFormat,
    InvalidCountValue,
    InvalidTag,
    InvalidIndex,
    /// `edit` without any field to change.
    NothingToEdit,
    /// Missing compulsory field or unexpected preamble.
    InvalidFormat,
    /// Name given both as preamble and with `n/`.
    NameSpecifiedTwice,
    UnknownCommand,
}

impl ParseErrorKind {
    /// The fixed message for this kind.
    pub const fn message(self) -> &'static str {
        match self {
            ParseErrorKind::InvalidName => Name::CONSTRAINTS,
            ParseErrorKind::InvalidIdFormat => "The id provided must be integer!",
            ParseErrorKind::InvalidIdRange => ItemId::CONSTRAINTS,
            ParseErrorKind::InvalidCountFormat => "The count provided must be integer!",
            ParseErrorKind::InvalidCountValue => "The count provided must be positive!",
            ParseErrorKind::InvalidTag => Tag::CONSTRAINTS,
            ParseErrorKind::InvalidIndex => "The item index provided is invalid",
            ParseErrorKind::NothingToEdit => "At least one field to edit must be provided.",
            ParseErrorKind::InvalidFormat => "Invalid command format! ",
            ParseErrorKind::NameSpecifiedTwice => {
                "The name was specified twice! Give it either before the other fields or with n/, not both."
            }
            ParseErrorKind::UnknownCommand => "Unknown command",
        }
    }
}

/// A parse failure: its kind plus the usage of the command being parsed.
///
/// The usage is only part of the rendered message for format errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.render())]
pub struct ParseError {
    kind: ParseErrorKind,
    usage: &'static str,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, usage: &'static str) -> Self {
        Self { kind, usage }
    }

    pub fn invalid_format(usage: &'static str) -> Self {
        Self::new(ParseErrorKind::InvalidFormat, usage)
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    pub fn usage(&self) -> &'static str {
        self.usage
    }

    fn render(&self) -> String {
        match self.kind {
            ParseErrorKind::InvalidFormat | ParseErrorKind::NameSpecifiedTwice => {
                format!("{}\n{}", self.kind.message(), self.usage)
            }
            kind => kind.message().to_string(),
        }
    }
}

/// Field parsers report a kind; the grammar attaches its usage.
pub(crate) type FieldResult<T> = Result<T, ParseErrorKind>;
