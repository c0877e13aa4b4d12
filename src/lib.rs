pub mod assert;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use assert::{
    almost_equals, array_includes, equals, exists, fail, falsey, greater, greater_or_equal,
    instance_of, is_error, less, less_or_equal, match_object, not_equals, not_instance_of,
    not_match, not_strict_equals, ok, panics, r#match, rejects, strict_equals, string_includes,
    throws, truthy, unimplemented, unreachable,
};

pub use config::Settings;
pub use domain::model::{ErrorClass, ErrorExpectation};
pub use domain::ports::{Existence, Identity, Truthiness};
pub use utils::error::{AssertionFailure, ConfigError, Result};
