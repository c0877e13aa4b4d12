//! The `assert` namespace: short, ergonomic names for every assertion.
//!
//! Each item here is a plain re-export of a delegate in [`crate::core`];
//! nothing is wrapped, so signatures and failure messages are the
//! delegate's own. The same names are also re-exported at the crate root.
//!
//! ```
//! use assert_facade::assert;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), assert_facade::AssertionFailure> {
//! assert::equals(&(1 + 1), &2, None)?;
//! assert::match_object(&json!({"id": 1, "name": "a"}), &json!({"id": 1}), None)?;
//! let port = assert::exists(Some(8080), Some("port must be configured"))?;
//! assert::greater(&port, &1024, None)?;
//! # Ok(())
//! # }
//! ```
//!
//! `match` is a keyword, so that one is spelled `assert::r#match`.

pub use crate::core::assert_almost_equals as almost_equals;
pub use crate::core::assert_array_includes as array_includes;
pub use crate::core::assert_equals as equals;
pub use crate::core::assert_exists as exists;
pub use crate::core::assert_false as falsey;
pub use crate::core::assert_greater as greater;
pub use crate::core::assert_greater_or_equal as greater_or_equal;
pub use crate::core::assert_instance_of as instance_of;
pub use crate::core::assert_is_error as is_error;
pub use crate::core::assert_less as less;
pub use crate::core::assert_less_or_equal as less_or_equal;
pub use crate::core::assert_match as r#match;
pub use crate::core::assert_not_equals as not_equals;
pub use crate::core::assert_not_instance_of as not_instance_of;
pub use crate::core::assert_not_match as not_match;
pub use crate::core::assert_not_strict_equals as not_strict_equals;
pub use crate::core::assert_object_match as match_object;
pub use crate::core::assert_panics as panics;
pub use crate::core::assert_rejects as rejects;
pub use crate::core::assert_strict_equals as strict_equals;
pub use crate::core::assert_string_includes as string_includes;
pub use crate::core::assert_throws as throws;
pub use crate::core::assert_truthy as ok;
pub use crate::core::assert_truthy as truthy;
pub use crate::core::fail;
pub use crate::core::unimplemented;
pub use crate::core::unreachable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasKind {
    Comparison,
    Truthiness,
    TypeMembership,
    ErrorExpectation,
    Unconditional,
}

/// 一筆別名對照：短名稱 -> 底層斷言
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alias {
    pub name: &'static str,
    pub delegate: &'static str,
    pub kind: AliasKind,
}

const fn alias(name: &'static str, delegate: &'static str, kind: AliasKind) -> Alias {
    Alias {
        name,
        delegate,
        kind,
    }
}

/// The same mapping as the `pub use` list above, for introspection.
pub const ALIASES: &[Alias] = &[
    alias("equals", "assert_equals", AliasKind::Comparison),
    alias("strict_equals", "assert_strict_equals", AliasKind::Comparison),
    alias("not_equals", "assert_not_equals", AliasKind::Comparison),
    alias("not_strict_equals", "assert_not_strict_equals", AliasKind::Comparison),
    alias("truthy", "assert_truthy", AliasKind::Truthiness),
    alias("ok", "assert_truthy", AliasKind::Truthiness),
    alias("falsey", "assert_false", AliasKind::Truthiness),
    alias("exists", "assert_exists", AliasKind::Truthiness),
    alias("match", "assert_match", AliasKind::Comparison),
    alias("not_match", "assert_not_match", AliasKind::Comparison),
    alias("string_includes", "assert_string_includes", AliasKind::Comparison),
    alias("array_includes", "assert_array_includes", AliasKind::Comparison),
    alias("match_object", "assert_object_match", AliasKind::Comparison),
    alias("instance_of", "assert_instance_of", AliasKind::TypeMembership),
    alias("not_instance_of", "assert_not_instance_of", AliasKind::TypeMembership),
    alias("is_error", "assert_is_error", AliasKind::ErrorExpectation),
    alias("throws", "assert_throws", AliasKind::ErrorExpectation),
    alias("rejects", "assert_rejects", AliasKind::ErrorExpectation),
    alias("panics", "assert_panics", AliasKind::ErrorExpectation),
    alias("fail", "fail", AliasKind::Unconditional),
    alias("unimplemented", "unimplemented", AliasKind::Unconditional),
    alias("unreachable", "unreachable", AliasKind::Unconditional),
    alias("almost_equals", "assert_almost_equals", AliasKind::Comparison),
    alias("greater", "assert_greater", AliasKind::Comparison),
    alias("greater_or_equal", "assert_greater_or_equal", AliasKind::Comparison),
    alias("less", "assert_less", AliasKind::Comparison),
    alias("less_or_equal", "assert_less_or_equal", AliasKind::Comparison),
];

/// 依短名稱查詢別名
pub fn lookup(name: &str) -> Option<&'static Alias> {
    ALIASES.iter().find(|a| a.name == name)
}
