//! The validation error taxonomy.

use crate::report::Report;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Structured failure produced by validating a value or an entity.
///
/// There are exactly three kinds. Every variant carries a [`Report`] for
/// end-user display next to the machine-readable details.
///
/// Serializes with a `type` tag:
///
/// ```json
/// {
///   "type": "value_is_not_valid",
///   "origin": "Username",
///   "value": "not-an-email",
///   "failed_conditions": ["Valid email address"],
///   "report": { "title": "...", "message": "..." }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidationError {
    /// A value is present but one or more declared conditions failed.
    #[error("{origin}: value is not valid, failed conditions: {}", .failed_conditions.join(", "))]
    ValueIsNotValid {
        /// Display name of the value
        origin: String,
        /// The offending value, `null` if it has no JSON representation
        value: serde_json::Value,
        /// Descriptions of the failed conditions, in declaration order
        failed_conditions: Vec<String>,
        /// Entity field the value belongs to, set by the entity aggregator
        #[serde(default, skip_serializing_if = "Option::is_none")]
        field: Option<String>,
        /// Identity of the failing wrapper
        #[serde(default, skip_serializing_if = "Option::is_none")]
        internal_identifier: Option<Uuid>,
        /// End-user report
        report: Report,
    },
    /// A mandatory value has no draft.
    #[error("{origin}: mandatory value is not set")]
    MandatoryValueIsNotSet {
        /// Display name of the value
        origin: String,
        /// Entity field the value belongs to, set by the entity aggregator
        #[serde(default, skip_serializing_if = "Option::is_none")]
        field: Option<String>,
        /// Identity of the failing wrapper
        #[serde(default, skip_serializing_if = "Option::is_none")]
        internal_identifier: Option<Uuid>,
        /// End-user report
        report: Report,
    },
    /// One or more members of an entity (or a manual entity check) failed.
    #[error("{origin}: entity is not valid, {} issue(s)", .issues.len())]
    EntityIsNotValid {
        /// Display name of the entity
        origin: String,
        /// Every underlying issue, in member order
        issues: Vec<ValidationError>,
        /// Aggregated end-user report
        report: Report,
    },
}

impl ValidationError {
    /// Build a `ValueIsNotValid` error with the default report.
    pub fn value_is_not_valid(
        origin: impl Into<String>,
        value: serde_json::Value,
        failed_conditions: Vec<String>,
    ) -> Self {
        let origin = origin.into();
        let report = Report::value_not_valid(&origin, &failed_conditions);

        Self::ValueIsNotValid {
            origin,
            value,
            failed_conditions,
            field: None,
            internal_identifier: None,
            report,
        }
    }

    /// Build a `MandatoryValueIsNotSet` error with the default report.
    pub fn mandatory_value_is_not_set(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        let report = Report::value_not_set(&origin);

        Self::MandatoryValueIsNotSet {
            origin,
            field: None,
            internal_identifier: None,
            report,
        }
    }

    /// Display name of whatever failed.
    pub fn origin(&self) -> &str {
        match self {
            Self::ValueIsNotValid { origin, .. }
            | Self::MandatoryValueIsNotSet { origin, .. }
            | Self::EntityIsNotValid { origin, .. } => origin,
        }
    }

    /// The end-user report.
    pub fn report(&self) -> &Report {
        match self {
            Self::ValueIsNotValid { report, .. }
            | Self::MandatoryValueIsNotSet { report, .. }
            | Self::EntityIsNotValid { report, .. } => report,
        }
    }

    /// Mutable access to the report, e.g. to localize it.
    pub fn report_mut(&mut self) -> &mut Report {
        match self {
            Self::ValueIsNotValid { report, .. }
            | Self::MandatoryValueIsNotSet { report, .. }
            | Self::EntityIsNotValid { report, .. } => report,
        }
    }

    /// Replace the report, keeping everything else.
    pub fn with_report(mut self, report: impl Into<Report>) -> Self {
        *self.report_mut() = report.into();
        self
    }

    /// Failed condition descriptions; empty unless `ValueIsNotValid`.
    pub fn failed_conditions(&self) -> &[String] {
        match self {
            Self::ValueIsNotValid {
                failed_conditions, ..
            } => failed_conditions,
            _ => &[],
        }
    }

    /// Underlying issues; empty unless `EntityIsNotValid`.
    pub fn issues(&self) -> &[ValidationError] {
        match self {
            Self::EntityIsNotValid { issues, .. } => issues,
            _ => &[],
        }
    }

    /// Entity field a field-level error came from; `None` until the entity
    /// aggregator tags it, and always `None` for `EntityIsNotValid`.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValueIsNotValid { field, .. } | Self::MandatoryValueIsNotSet { field, .. } => {
                field.as_deref()
            }
            Self::EntityIsNotValid { .. } => None,
        }
    }

    /// Identity of the wrapper that produced a field-level error.
    pub fn internal_identifier(&self) -> Option<Uuid> {
        match self {
            Self::ValueIsNotValid {
                internal_identifier,
                ..
            }
            | Self::MandatoryValueIsNotSet {
                internal_identifier,
                ..
            } => *internal_identifier,
            Self::EntityIsNotValid { .. } => None,
        }
    }

    /// Tag a field-level error with the entity field it belongs to.
    ///
    /// `EntityIsNotValid` is returned unchanged.
    pub fn with_field(mut self, name: impl Into<String>) -> Self {
        if let Self::ValueIsNotValid { field, .. } | Self::MandatoryValueIsNotSet { field, .. } =
            &mut self
        {
            *field = Some(name.into());
        }
        self
    }

    /// Tag a field-level error with the identity of its wrapper.
    ///
    /// `EntityIsNotValid` is returned unchanged.
    pub fn with_internal_identifier(mut self, id: Uuid) -> Self {
        if let Self::ValueIsNotValid {
            internal_identifier,
            ..
        }
        | Self::MandatoryValueIsNotSet {
            internal_identifier,
            ..
        } = &mut self
        {
            *internal_identifier = Some(id);
        }
        self
    }

    pub fn is_value_not_set(&self) -> bool {
        matches!(self, Self::MandatoryValueIsNotSet { .. })
    }

    pub fn is_value_not_valid(&self) -> bool {
        matches!(self, Self::ValueIsNotValid { .. })
    }

    pub fn is_entity_not_valid(&self) -> bool {
        matches!(self, Self::EntityIsNotValid { .. })
    }
}
