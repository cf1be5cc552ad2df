#![doc = include_str!("../README.md")]

mod error;
pub mod logging;
pub mod matchers;
mod result;

pub use crate::error::{StatusMismatch, TestResultError};
pub use crate::matchers::{
    StatusMatcher, accessible, created, forbidden, method_not_allowed, no_content, updated,
};
pub use crate::result::{StatusAssertion, TestResult};
