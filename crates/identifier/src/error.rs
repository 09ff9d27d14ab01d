use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedIdentifier {
    Empty,
    FieldCount(usize),
    UnknownDiscriminator(String),
    BadPercentEncoding,
}

impl fmt::Display for MalformedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty rule identifier"),
            Self::FieldCount(n) => write!(f, "expected 1 or 6 fields, got {n}"),
            Self::UnknownDiscriminator(token) => {
                write!(f, "unknown identifier discriminator: {token}")
            }
            Self::BadPercentEncoding => write!(f, "identifier is not valid percent-encoded UTF-8"),
        }
    }
}

impl std::error::Error for MalformedIdentifier {}
