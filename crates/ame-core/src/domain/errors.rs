use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AmeResult<T> = Result<T, AmeError>;
pub type ParserResult<T> = AmeResult<T>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmeErrorCategory {
    InputValidationError,
    IoSystemError,
    ComputationError,
}

impl AmeErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::ComputationError => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::ComputationError => "ComputationError",
        }
    }

    /// Closing stderr line of a failed run.
    pub fn fatal_exit_line(self) -> String {
        format!("FATAL EXIT CODE: {}", self.exit_code())
    }
}

/// What went wrong, independent of where it was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmeErrorKind {
    /// The table text does not fit the fixed-width column layout.
    SchemaMismatch,
    /// An expression names an element symbol outside the periodic table.
    UnknownSymbol,
    /// Number and symbol counts fit none of the expression patterns.
    MalformedExpression,
    /// A well-formed (symbol, mass number) pair has no row in the table.
    LookupMiss,
    Io,
}

impl AmeErrorKind {
    pub const fn category(self) -> AmeErrorCategory {
        match self {
            Self::SchemaMismatch | Self::UnknownSymbol | Self::MalformedExpression => {
                AmeErrorCategory::InputValidationError
            }
            Self::LookupMiss => AmeErrorCategory::ComputationError,
            Self::Io => AmeErrorCategory::IoSystemError,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmeError {
    kind: AmeErrorKind,
    placeholder: &'static str,
    message: String,
}

impl AmeError {
    pub fn new(kind: AmeErrorKind, placeholder: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            placeholder,
            message: message.into(),
        }
    }

    pub fn schema_mismatch(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(AmeErrorKind::SchemaMismatch, placeholder, message)
    }

    pub fn unknown_symbol(symbol: &str) -> Self {
        Self::new(
            AmeErrorKind::UnknownSymbol,
            "INPUT.UNKNOWN_SYMBOL",
            format!("unknown element symbol '{symbol}'"),
        )
    }

    pub fn malformed_expression(expression: &str, reason: impl Display) -> Self {
        Self::new(
            AmeErrorKind::MalformedExpression,
            "INPUT.MALFORMED_EXPRESSION",
            format!("cannot parse expression '{expression}': {reason}"),
        )
    }

    pub fn lookup_miss(symbol: &str, mass_number: u32) -> Self {
        Self::new(
            AmeErrorKind::LookupMiss,
            "RUN.LOOKUP_MISS",
            format!("no table entry for {mass_number}{symbol}"),
        )
    }

    pub fn io(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(AmeErrorKind::Io, placeholder, message)
    }

    pub const fn kind(&self) -> AmeErrorKind {
        self.kind
    }

    pub const fn category(&self) -> AmeErrorCategory {
        self.kind.category()
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.kind.category().exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> String {
        self.category().fatal_exit_line()
    }
}

impl Display for AmeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category().as_str(),
            self.placeholder,
            self.message
        )
    }
}

impl Error for AmeError {}
