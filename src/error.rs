use thiserror::Error;

/// Errors that can occur while parsing recipe markup
#[derive(Error, Debug)]
pub enum ParseError {
    /// Candidate text did not have the expected ingredient structure
    #[error("error parsing ingredient: '{0}'")]
    MalformedIngredient(String),

    /// Candidate text did not have the expected cookware structure
    #[error("error parsing cookware: '{0}'")]
    MalformedCookware(String),

    /// Candidate text did not have the expected timer structure
    #[error("error parsing timer: '{0}'")]
    MalformedTimer(String),

    /// Candidate text did not have the expected metadata structure
    #[error("error parsing metadata: '{0}'")]
    MalformedMetadata(String),
}
