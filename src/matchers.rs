//! Status matchers for resource endpoints.
//!
//! Each constructor returns a [`StatusMatcher`] that can be passed to any
//! googletest assertion macro:
//!
//! ```
//! use googletest::prelude::*;
//! use http::StatusCode;
//! use resource_test_matchers::{created, forbidden};
//!
//! assert_that!(StatusCode::CREATED, created());
//! assert_that!(StatusCode::CREATED, not(forbidden()));
//! ```

use crate::result::StatusAssertion;
use googletest::description::Description;
use googletest::matcher::{Matcher, MatcherBase, MatcherResult};
use http::StatusCode;
use tracing::debug;

/// Matches an HTTP status code against one expected value.
///
/// The description printed by googletest is the static `label`, independent
/// of the value under test.
#[derive(Debug, Clone, Copy, MatcherBase, derive_more::Display)]
#[display("{label}")]
pub struct StatusMatcher {
    expected: StatusCode,
    label: &'static str,
}

impl StatusMatcher {
    /// Creates a matcher for any status code. The named constructors below
    /// cover the statuses used by resource endpoints.
    pub const fn new(expected: StatusCode, label: &'static str) -> Self {
        Self { expected, label }
    }

    /// The status code this matcher accepts.
    pub fn expected(&self) -> StatusCode {
        self.expected
    }

    /// The label reported by googletest when the assertion fails.
    pub fn label(&self) -> &'static str {
        self.label
    }

    fn check<T: StatusAssertion + ?Sized>(&self, actual: &T) -> MatcherResult {
        match actual.expect_status(self.expected) {
            Ok(()) => MatcherResult::Match,
            Err(error) => {
                debug!(
                    expected = %error.expected,
                    actual = %error.actual,
                    label = self.label,
                    "Status check failed"
                );
                MatcherResult::NoMatch
            }
        }
    }

    fn description(&self, matcher_result: MatcherResult) -> Description {
        match matcher_result {
            MatcherResult::Match => self.label.to_string().into(),
            MatcherResult::NoMatch => format!("not {}", self.label).into(),
        }
    }
}

impl<'a, T: StatusAssertion> Matcher<&'a T> for StatusMatcher {
    fn matches(&self, actual: &'a T) -> MatcherResult {
        self.check(actual)
    }

    fn describe(&self, matcher_result: MatcherResult) -> Description {
        self.description(matcher_result)
    }

    fn explain_match(&self, actual: &'a T) -> Description {
        format!("which has status {}", actual.status_code()).into()
    }
}

/// An absent result never matches.
impl<'a, T: StatusAssertion> Matcher<Option<&'a T>> for StatusMatcher {
    fn matches(&self, actual: Option<&'a T>) -> MatcherResult {
        match actual {
            Some(actual) => self.check(actual),
            None => MatcherResult::NoMatch,
        }
    }

    fn describe(&self, matcher_result: MatcherResult) -> Description {
        self.description(matcher_result)
    }

    fn explain_match(&self, actual: Option<&'a T>) -> Description {
        match actual {
            Some(actual) => format!("which has status {}", actual.status_code()).into(),
            None => "which is absent".to_string().into(),
        }
    }
}

impl Matcher<StatusCode> for StatusMatcher {
    fn matches(&self, actual: StatusCode) -> MatcherResult {
        self.check(&actual)
    }

    fn describe(&self, matcher_result: MatcherResult) -> Description {
        self.description(matcher_result)
    }
}

macro_rules! status_matchers {
    ($($(#[$meta:meta])* $name:ident => $status:ident, $label:literal;)*) => {
        $(
            $(#[$meta])*
            pub const fn $name() -> StatusMatcher {
                StatusMatcher::new(StatusCode::$status, $label)
            }
        )*

        #[cfg(test)]
        const ALL: &[fn() -> StatusMatcher] = &[$($name),*];
    };
}

status_matchers! {
    /// Matches `200 OK` for a resource that could be read.
    accessible => OK, "accessible";
    /// Matches `201 Created`.
    created => CREATED, "created";
    forbidden => FORBIDDEN, "forbidden";
    /// Matches `200 OK` for a resource that was updated.
    ///
    /// Checks the same status as [`accessible`], but reports a different
    /// description on failure.
    updated => OK, "updated";
    no_content => NO_CONTENT, "no content";
    method_not_allowed => METHOD_NOT_ALLOWED, "method not allowed";
}
