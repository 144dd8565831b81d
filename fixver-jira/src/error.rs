//! # Error Types
//!
//! Typed errors for the Jira fix version client. Remote failures carry the
//! HTTP status and the most specific message the Jira error envelope offers;
//! assignment failures name the issue that could not be updated.

use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used throughout the client crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the Jira fix version client
#[derive(Debug, Error)]
pub enum Error {
  /// A required value was empty before a request could be built
  #[error("{0} cannot be empty")]
  Validation(&'static str),

  /// The host or a derived endpoint URL could not be parsed
  #[error("invalid host or endpoint: {0}")]
  Config(#[from] url::ParseError),

  /// A request body could not be encoded as JSON
  #[error("could not serialize request body: {0}")]
  Serialization(#[from] serde_json::Error),

  /// The request could not be sent or the response body could not be read
  #[error("request failed: {0}")]
  Transport(#[from] reqwest::Error),

  /// The server answered with a non-2xx status
  #[error("request unsuccessful ({status}): {message}")]
  RemoteApi { status: StatusCode, message: String },

  /// A fix version could not be added to a specific issue
  #[error("could not assign version to issue {issue}")]
  Assignment {
    issue: String,
    #[source]
    source: Box<Error>,
  },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_remote_api_display() {
    let err = Error::RemoteApi {
      status: StatusCode::BAD_REQUEST,
      message: "A version with this name already exists in this project.".to_string(),
    };

    assert_eq!(
      err.to_string(),
      "request unsuccessful (400 Bad Request): A version with this name already exists in this project."
    );
  }

  #[test]
  fn test_assignment_preserves_cause() {
    let cause = Error::RemoteApi {
      status: StatusCode::NOT_FOUND,
      message: "Issue does not exist or you do not have permission to see it.".to_string(),
    };
    let err = Error::Assignment {
      issue: "MB-1337".to_string(),
      source: Box::new(cause),
    };

    assert_eq!(err.to_string(), "could not assign version to issue MB-1337");

    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(
      source.as_deref(),
      Some("request unsuccessful (404 Not Found): Issue does not exist or you do not have permission to see it.")
    );
  }

  #[test]
  fn test_validation_display() {
    assert_eq!(Error::Validation("version name").to_string(), "version name cannot be empty");
  }
}
