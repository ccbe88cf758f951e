//! Errors raised while loading a route network or searching it.

use thiserror::Error;

/// Every failure of the analyzer.
///
/// Loading fails as a whole on the first [`AnalyzerError::MalformedRecord`];
/// the search itself only fails on a broken internal invariant.
#[derive(Debug, Error, PartialEq)]
pub enum AnalyzerError {
    /// A line of the route file cannot be turned into a route.
    #[error("Malformed route on line {line_number} ({line:?}): {reason}.")]
    MalformedRecord {
        /// 1-based line number in the route file.
        line_number: usize,
        /// The offending line, as read.
        line: String,
        reason: String,
    },

    /// A trace tried to leave a route from a city that is not one of its ends.
    ///
    /// This is a bug in frontier construction, never a problem with the input.
    #[error("{city} is not a valid starting point for route {route}.")]
    InvalidEndpoint { city: String, route: String },

    /// The map has no route usable under the current configuration.
    #[error("No single-color route found.")]
    NoRouteFound,
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
