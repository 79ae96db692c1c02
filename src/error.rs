use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// The defuzzifier only knows `credit`, `house` and `application`
    #[error("unknown output domain `{0}`")]
    UnknownDomain(String),
    #[error("unknown category `{category}` for {domain}")]
    UnknownCategory { domain: &'static str, category: String },
    #[error("missing category `{category}` for {domain}")]
    MissingCategory {
        domain: &'static str,
        category: &'static str,
    },
    #[error("resolution must be at least 2 sample points, got {0}")]
    InvalidResolution(usize),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
