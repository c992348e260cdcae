//! Entity-level aggregation of field validation.

use crate::display_name::intrinsic_display_name;
use crate::error::ValidationError;
use crate::issues::Issues;
use crate::report::Report;
use crate::tracing_macros::trace_debug;
use crate::wrapper::ValueWrapper;
use std::fmt;

/// One validatable field of an entity, as listed by [`Entity::members`].
#[derive(Clone, Copy)]
pub struct Member<'a> {
    name: &'static str,
    wrapper: &'a dyn ValueWrapper,
}

impl<'a> Member<'a> {
    /// Create a member from a field name and the field itself.
    pub fn new<W: ValueWrapper>(name: &'static str, wrapper: &'a W) -> Self {
        Self { name, wrapper }
    }

    /// Field name as declared on the entity.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn wrapper(&self) -> &'a dyn ValueWrapper {
        self.wrapper
    }

    pub fn display_name(&self) -> String {
        self.wrapper.display_name()
    }

    pub fn is_mandatory(&self) -> bool {
        self.wrapper.is_mandatory()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.wrapper.validate()
    }
}

impl fmt::Debug for Member<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("display_name", &self.wrapper.display_name())
            .field("mandatory", &self.wrapper.is_mandatory())
            .finish()
    }
}

/// A composite record made of wrapper fields, validated as a whole.
///
/// Usually derived with `#[derive(Entity)]`, which implements
/// [`members`](Entity::members) and optionally
/// [`display_name`](Entity::display_name) and
/// [`review_report`](Entity::review_report). Implementing it by hand is
/// also fine, e.g. to replace [`validate`](Entity::validate) with a manual
/// check:
///
/// ```rust,ignore
/// struct Signup { /* .. */ }
///
/// impl Entity for Signup {
///     fn validate(&self) -> Result<(), ValidationError> {
///         let mut issues = Issues::new();
///         // custom checks pushing into `issues`
///         issues.into_result::<Self>()
///     }
/// }
/// ```
pub trait Entity: Sized {
    /// End-user name of the entity. Defaults to the type name.
    fn display_name() -> String {
        intrinsic_display_name::<Self>()
    }

    /// Every validatable field, in declaration order.
    fn members(&self) -> Vec<Member<'_>> {
        Vec::new()
    }

    fn all_validatable_members(&self) -> Vec<Member<'_>> {
        self.members()
    }

    /// The members whose policy is mandatory.
    fn all_required_members(&self) -> Vec<Member<'_>> {
        self.members()
            .into_iter()
            .filter(|member| member.is_mandatory())
            .collect()
    }

    /// Hook to adjust the aggregated report, e.g. to localize it.
    ///
    /// Runs after the default report is computed and only when there are
    /// issues; whatever it leaves in `report` is what gets raised.
    fn review_report(_issues: &[ValidationError], _report: &mut Report) {}

    /// Report built from the entity name and the ordered issue titles.
    fn default_report(issues: &[ValidationError]) -> Report {
        Report::entity_not_valid(
            &Self::display_name(),
            issues.iter().map(|issue| issue.report().title.as_str()),
        )
    }

    /// The default report passed through [`review_report`](Entity::review_report).
    fn prepare_report(issues: &[ValidationError]) -> Report {
        let mut report = Self::default_report(issues);
        Self::review_report(issues, &mut report);
        report
    }

    /// `EntityIsNotValid` for this entity with the prepared report.
    fn invalid(issues: Vec<ValidationError>) -> ValidationError {
        let report = Self::prepare_report(&issues);

        ValidationError::EntityIsNotValid {
            origin: Self::display_name(),
            issues,
            report,
        }
    }

    /// Validate every member and raise one aggregated error.
    fn validate(&self) -> Result<(), ValidationError> {
        validate_entity(self)
    }

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// The aggregator behind [`Entity::validate`].
///
/// Validates every member without stopping at the first failure and
/// collects each failure in member order, tagged with the member's field
/// name. Succeeds when nothing failed, otherwise raises `EntityIsNotValid`
/// with one issue per failed member. Pure and idempotent: calling it again
/// on unchanged drafts yields the same result.
pub fn validate_entity<E: Entity>(entity: &E) -> Result<(), ValidationError> {
    let issues: Issues = entity
        .all_validatable_members()
        .iter()
        .filter_map(|member| {
            member
                .validate()
                .err()
                .map(|error| error.with_field(member.name()))
        })
        .collect();

    trace_debug!(
        entity = %E::display_name(),
        issues = issues.len(),
        "entity validated"
    );

    issues.into_result::<E>()
}
