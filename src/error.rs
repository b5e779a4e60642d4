/// Every failure the front-end can report. All of them are fatal: the run
/// stops at the first one and nothing is rendered.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    #[error("expected number, got {0:?}")]
    ExpectedNumber(String),
    #[error("expected {expected}, got {rest:?}")]
    Expected { expected: String, rest: String },
    #[error("expected uint{bits} for {what}, got {text}")]
    OutOfRange {
        what: &'static str,
        text: String,
        bits: u32,
    },
    #[error("invalid bits in flag: {0:#x}")]
    InvalidFlagBits(u64),
    #[error("expected flag at {0:?}")]
    UnknownFlag(String),
    #[error("empty flag expression before {0:?}")]
    EmptyFlags(String),
    #[error("invalid cho instruction: {0:?}")]
    UnknownSubOp(String),
    #[error("unknown mnemonic in {0:?}")]
    UnknownMnemonic(String),
    #[error("missing label for {0}")]
    MissingLabel(&'static str),
    #[error("unexpected trailing text {0:?}")]
    TrailingText(String),
    #[error("too many {0} declarations")]
    TooMany(&'static str),
    #[error("mem declarations use too much memory: {used} > {budget}")]
    MemoryBudget { used: u64, budget: u32 },
    #[error("input line longer than {0} bytes")]
    LineTooLong(usize),
    #[error("read failed: {0}")]
    Io(String),
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<AsmError>,
    },
}

impl AsmError {
    pub(crate) fn expected(expected: impl Into<String>, rest: &str) -> Self {
        AsmError::Expected {
            expected: expected.into(),
            rest: rest.to_string(),
        }
    }

    /// Attach a 1-based input line number.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            AsmError::Line { .. } => self,
            other => AsmError::Line {
                line,
                source: Box::new(other),
            },
        }
    }
}

impl From<std::io::Error> for AsmError {
    fn from(err: std::io::Error) -> Self {
        AsmError::Io(err.to_string())
    }
}
