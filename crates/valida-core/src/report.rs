//! End-user presentation of a validation outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `{title, message}` pair meant for display in a GUI, CLI or log line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Report {
    /// Short headline
    pub title: String,
    /// Longer explanation
    pub message: String,
}

impl Report {
    /// Create a report from a title and a message.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Default report for a mandatory value that has not been set.
    pub fn value_not_set(origin: &str) -> Self {
        Self::new(
            format!("\"{origin}\" is not set"),
            format!("\"{origin}\" is required, please provide a value."),
        )
    }

    /// Default report for a value that failed one or more conditions.
    pub fn value_not_valid(origin: &str, failed_conditions: &[String]) -> Self {
        Self::new(
            format!("\"{origin}\" is invalid"),
            format!(
                "\"{origin}\" does not satisfy: {}.",
                failed_conditions.join(", ")
            ),
        )
    }

    /// Default report for an entity, composed from the titles of its issues.
    ///
    /// The output depends only on `origin` and the ordered titles, so it is
    /// stable across runs.
    pub fn entity_not_valid<'a, I>(origin: &str, issue_titles: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let titles: Vec<&str> = issue_titles.into_iter().collect();

        let mut message = format!("\"{origin}\" has {} issue(s):", titles.len());
        for title in titles {
            message.push_str("\n- ");
            message.push_str(title);
        }

        Self::new(format!("\"{origin}\" is invalid"), message)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

impl<T: Into<String>, M: Into<String>> From<(T, M)> for Report {
    fn from((title, message): (T, M)) -> Self {
        Self::new(title, message)
    }
}
