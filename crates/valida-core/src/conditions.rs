//! Ready-made conditions for common string and numeric checks.
//!
//! These are ordinary [`Condition`]s; a specification can mix them freely
//! with hand-written ones.

use crate::condition::Condition;
use regex::Regex;
use std::borrow::Cow;
use std::fmt::Display;
use std::sync::OnceLock;

// Pre-compiled regex patterns
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        // RFC 5322 simplified email regex
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
        ).unwrap()
    })
}

/// "Non-empty": the string has at least one character.
pub fn non_empty<V: AsRef<str> + 'static>() -> Condition<V> {
    Condition::new("Non-empty", |value: &V| !value.as_ref().is_empty())
}

/// "Valid email address".
pub fn email<V: AsRef<str> + 'static>() -> Condition<V> {
    Condition::new("Valid email address", |value: &V| {
        email_regex().is_match(value.as_ref())
    })
}

/// Character count within `min..=max`.
pub fn length_between<V: AsRef<str> + 'static>(min: usize, max: usize) -> Condition<V> {
    Condition::new(
        format!("Length between {min} and {max} characters"),
        move |value: &V| (min..=max).contains(&value.as_ref().chars().count()),
    )
}

/// Value within `min..=max`.
pub fn in_range<V>(min: V, max: V) -> Condition<V>
where
    V: PartialOrd + Display + Send + Sync + 'static,
{
    Condition::new(format!("Between {min} and {max}"), move |value: &V| {
        *value >= min && *value <= max
    })
}

/// The string matches `pattern`. Anchor the pattern with `^...$` to match
/// the whole value.
///
/// The pattern is compiled by the caller, so an invalid pattern is reported
/// where it is written rather than during validation.
pub fn matches<V: AsRef<str> + 'static>(
    description: impl Into<Cow<'static, str>>,
    pattern: Regex,
) -> Condition<V> {
    Condition::new(description, move |value: &V| pattern.is_match(value.as_ref()))
}

/// "Checked": a checkmark that must be ticked.
pub fn is_true() -> Condition<bool> {
    Condition::new("Checked", |value: &bool| *value)
}

/// Every character satisfies `allowed`.
pub fn each_char<V, F>(description: impl Into<Cow<'static, str>>, allowed: F) -> Condition<V>
where
    V: AsRef<str> + 'static,
    F: Fn(char) -> bool + Send + Sync + 'static,
{
    Condition::new(description, move |value: &V| {
        value.as_ref().chars().all(&allowed)
    })
}

/// At least `min` characters satisfy `class`.
pub fn min_count_of<V, F>(
    description: impl Into<Cow<'static, str>>,
    min: usize,
    class: F,
) -> Condition<V>
where
    V: AsRef<str> + 'static,
    F: Fn(char) -> bool + Send + Sync + 'static,
{
    Condition::new(description, move |value: &V| {
        value.as_ref().chars().filter(|c| class(*c)).count() >= min
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_and_email() {
        let non_empty = non_empty::<String>();
        let email = email::<String>();

        assert!(non_empty.check(&"x".to_string()));
        assert!(!non_empty.check(&String::new()));

        assert!(email.check(&"john@example.com".to_string()));
        assert!(!email.check(&"not-an-email".to_string()));
        assert!(!email.check(&"a@".to_string()));
        assert_eq!(email.description(), "Valid email address");
    }

    #[test]
    fn length_counts_characters() {
        let length = length_between::<String>(2, 3);

        assert!(!length.check(&"a".to_string()));
        assert!(length.check(&"éé".to_string()));
        assert!(length.check(&"abc".to_string()));
        assert!(!length.check(&"abcd".to_string()));
        assert_eq!(length.description(), "Length between 2 and 3 characters");
    }

    #[test]
    fn range_is_inclusive() {
        let range = in_range(18u32, 120);

        assert!(!range.check(&17));
        assert!(range.check(&18));
        assert!(range.check(&120));
        assert!(!range.check(&121));
        assert_eq!(range.description(), "Between 18 and 120");
    }

    #[test]
    fn matches_whole_string() {
        let code = matches::<String>("Country code", Regex::new(r"^[A-Z]{2}$").unwrap());

        assert!(code.check(&"NL".to_string()));
        assert!(!code.check(&"NLD".to_string()));
        assert!(!code.check(&"xNL".to_string()));
    }

    #[test]
    fn character_classes() {
        let digits = min_count_of::<String, _>("Has at least 1 digit character", 1, |c| {
            c.is_ascii_digit()
        });
        let allowed = each_char::<String, _>("Allowed characters only", |c| c.is_ascii_alphanumeric());

        assert!(digits.check(&"abc1".to_string()));
        assert!(!digits.check(&"abcd".to_string()));
        assert!(allowed.check(&"abc1".to_string()));
        assert!(!allowed.check(&"abc 1".to_string()));
    }

    #[test]
    fn checkmark() {
        assert!(is_true().check(&true));
        assert!(!is_true().check(&false));
    }
}
