use crate::args::Args;
use crate::choices::ParseChoiceError;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use std::fmt;

/// Reasons the command line did not produce a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// `-h`/`--help` was given; carries the rendered usage text
    HelpRequested(String),
    /// A distribution or partitioning token matched no known code
    InvalidEnumValue {
        /// `distribution` or `partitioning`
        option: &'static str,
        /// The rejected token
        token: String,
    },
    /// A numeric option received text that is not a valid number for it
    MalformedNumber {
        /// The option as rendered by the parser, e.g. `--theta <THETA>`
        option: String,
        /// The rejected token
        token: String,
        /// Why the token was rejected
        reason: String,
    },
    /// A value-bearing option was the last token on the command line
    MissingValue(String),
    /// An unknown option, or any other malformed command line; carries the rendered diagnostic
    UnrecognizedOption(String),
}

impl ArgsError {
    /// Process exit status for this outcome.
    ///
    /// Help output is a successful run; everything else is a usage error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ArgsError::HelpRequested(_) => 0,
            _ => 2,
        }
    }

    /// Text to print on stderr before exiting.
    ///
    /// Unknown options are followed by the full usage listing, the same text
    /// `--help` prints.
    pub fn report(&self) -> String {
        let msg = self.to_string();
        match self {
            ArgsError::UnrecognizedOption(_) => {
                format!("{}\n\n{}", msg.trim_end(), Args::usage().trim_end())
            }
            _ => msg.trim_end().to_string(),
        }
    }

    /// Whether this is a genuine error rather than a request for information.
    pub fn is_error(&self) -> bool {
        self.exit_code() != 0
    }
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::HelpRequested(usage) => write!(f, "{usage}"),
            ArgsError::InvalidEnumValue { option, token } => write!(f, "invalid {option} {token}"),
            ArgsError::MalformedNumber {
                option,
                token,
                reason,
            } => write!(f, "invalid value '{token}' for '{option}': {reason}"),
            ArgsError::MissingValue(option) => {
                write!(f, "a value is required for '{option}' but none was supplied")
            }
            ArgsError::UnrecognizedOption(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn context_string(err: &clap::Error, kind: ContextKind) -> String {
    match err.get(kind) {
        Some(ContextValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

impl From<clap::Error> for ArgsError {
    fn from(err: clap::Error) -> Self {
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                ArgsError::HelpRequested(err.render().to_string())
            }
            ErrorKind::ValueValidation => {
                let source = std::error::Error::source(&err);
                match source.and_then(|e| e.downcast_ref::<ParseChoiceError>()) {
                    Some(choice) => ArgsError::InvalidEnumValue {
                        option: choice.option,
                        token: choice.token.clone(),
                    },
                    None => ArgsError::MalformedNumber {
                        option: context_string(&err, ContextKind::InvalidArg),
                        token: context_string(&err, ContextKind::InvalidValue),
                        reason: source.map(|e| e.to_string()).unwrap_or_default(),
                    },
                }
            }
            ErrorKind::InvalidValue => {
                ArgsError::MissingValue(context_string(&err, ContextKind::InvalidArg))
            }
            _ => ArgsError::UnrecognizedOption(err.render().to_string()),
        }
    }
}
