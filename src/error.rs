use std::fmt::Display;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    NoRoutesConfigured,
    NoRouteMatched(String),
    InvalidHandler(String),
    UnresolvableParameter(String),
    UnsupportedFamily(String),
    FactoryUnavailable(String),
    InvalidPattern { pattern: String, reason: String },
    MissingArgument { position: usize, available: usize },
}

impl Error {
    pub fn invalid_pattern<P: AsRef<str>>(pattern: P, error: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.as_ref().to_string(),
            reason: error.to_string(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRoutesConfigured => "No routes configured".fmt(f),
            Self::NoRouteMatched(subject) => write!(f, "No route matched '{subject}'"),
            Self::InvalidHandler(pattern) => {
                write!(f, "Route '{pattern}' is not bound to a callable handler")
            }
            Self::UnresolvableParameter(name) => write!(f, "Unresolvable parameter of type {name}"),
            Self::UnsupportedFamily(family) => {
                write!(f, "Unsupported response factory family '{family}'")
            }
            Self::FactoryUnavailable(id) => write!(f, "Response factory '{id}' is not installed"),
            Self::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid route pattern '{pattern}': {reason}")
            }
            Self::MissingArgument {
                position,
                available,
            } => write!(
                f,
                "Missing path argument for parameter {position} ({available} captured)"
            ),
        }
    }
}

impl std::error::Error for Error {}
