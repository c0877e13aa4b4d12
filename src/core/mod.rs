//! Assertion implementations. The facade in [`crate::assert`] only renames
//! these; comparison semantics and failure messages live here.

pub mod collections;
pub mod control;
pub mod equality;
pub mod errors;
pub mod instance;
pub mod matching;
pub mod numeric;
pub mod truthiness;

pub use collections::{assert_array_includes, assert_object_match};
pub use control::{fail, unimplemented, unreachable};
pub use equality::{
    assert_equals, assert_not_equals, assert_not_strict_equals, assert_strict_equals,
};
pub use errors::{assert_is_error, assert_panics, assert_rejects, assert_throws};
pub use instance::{assert_instance_of, assert_not_instance_of};
pub use matching::{assert_match, assert_not_match, assert_string_includes};
pub use numeric::{
    assert_almost_equals, assert_greater, assert_greater_or_equal, assert_less,
    assert_less_or_equal,
};
pub use truthiness::{assert_exists, assert_false, assert_truthy};

pub use crate::domain::model::{ErrorClass, ErrorExpectation};
pub use crate::domain::ports::{Existence, Identity, Truthiness};
pub use crate::utils::error::{AssertionFailure, Result};
