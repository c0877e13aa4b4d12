use std::collections::{BTreeMap, HashMap, HashSet};
use std::rc::Rc;
use std::sync::Arc;

/// 值是否為「真」，語意比照 JavaScript 的 truthy/falsy
pub trait Truthiness {
    fn is_truthy(&self) -> bool;
}

macro_rules! truthy_nonzero {
    ($($t:ty),*) => {
        $(impl Truthiness for $t {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

truthy_nonzero!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthiness for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthiness for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthiness for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthiness for char {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthiness for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthiness for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthiness for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthiness> Truthiness for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthiness::is_truthy)
    }
}

impl<T: Truthiness + ?Sized> Truthiness for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthiness + ?Sized> Truthiness for Box<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

// 容器視為物件：即使為空也是 truthy
macro_rules! truthy_container {
    ($($t:ty => [$($g:tt)*]),* $(,)?) => {
        $(impl<$($g)*> Truthiness for $t {
            fn is_truthy(&self) -> bool {
                true
            }
        })*
    };
}

truthy_container!(
    Vec<T> => [T],
    [T] => [T],
    HashMap<K, V> => [K, V],
    BTreeMap<K, V> => [K, V],
    HashSet<T> => [T],
);

impl Truthiness for serde_json::Value {
    fn is_truthy(&self) -> bool {
        use serde_json::Value;
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

/// 可能「不存在」的值 (`None`、JSON `null`)；存在時取出內部值
pub trait Existence {
    type Target;

    /// 不存在時在訊息中顯示的字樣
    const ABSENT: &'static str;

    fn into_existing(self) -> Option<Self::Target>;
}

impl<T> Existence for Option<T> {
    type Target = T;
    const ABSENT: &'static str = "None";

    fn into_existing(self) -> Option<T> {
        self
    }
}

impl<'a, T> Existence for &'a Option<T> {
    type Target = &'a T;
    const ABSENT: &'static str = "None";

    fn into_existing(self) -> Option<&'a T> {
        self.as_ref()
    }
}

impl Existence for serde_json::Value {
    type Target = serde_json::Value;
    const ABSENT: &'static str = "null";

    fn into_existing(self) -> Option<serde_json::Value> {
        match self {
            serde_json::Value::Null => None,
            other => Some(other),
        }
    }
}

impl<'a> Existence for &'a serde_json::Value {
    type Target = &'a serde_json::Value;
    const ABSENT: &'static str = "null";

    fn into_existing(self) -> Option<&'a serde_json::Value> {
        match self {
            serde_json::Value::Null => None,
            other => Some(other),
        }
    }
}

/// 嚴格相等：基本型別比較值，參考型別比較位址
pub trait Identity {
    fn is_identical(&self, other: &Self) -> bool;
}

macro_rules! identity_by_value {
    ($($t:ty),*) => {
        $(impl Identity for $t {
            fn is_identical(&self, other: &Self) -> bool {
                self == other
            }
        })*
    };
}

identity_by_value!(
    bool, char, (), str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

// NaN 與 NaN 相同，+0.0 與 -0.0 不同
impl Identity for f32 {
    fn is_identical(&self, other: &Self) -> bool {
        (self.is_nan() && other.is_nan()) || self.to_bits() == other.to_bits()
    }
}

impl Identity for f64 {
    fn is_identical(&self, other: &Self) -> bool {
        (self.is_nan() && other.is_nan()) || self.to_bits() == other.to_bits()
    }
}

impl<T: Identity> Identity for Option<T> {
    fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.is_identical(b),
            (None, None) => true,
            _ => false,
        }
    }
}

// 參考本身不決定身分，交給被參考的型別判斷
impl<T: Identity + ?Sized> Identity for &T {
    fn is_identical(&self, other: &Self) -> bool {
        (**self).is_identical(*other)
    }
}

impl<T: ?Sized> Identity for Rc<T> {
    fn is_identical(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identity for Arc<T> {
    fn is_identical(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

/// Gives a type address-based [`Identity`]: two values are strictly equal
/// only when they are the same place in memory.
///
/// ```
/// use assert_facade::{impl_reference_identity, strict_equals};
///
/// #[derive(Debug)]
/// struct Order {
///     id: u32,
/// }
/// impl_reference_identity!(Order);
///
/// let order = Order { id: 1 };
/// assert!(strict_equals(&order, &order, None).is_ok());
/// assert!(strict_equals(&order, &Order { id: 1 }, None).is_err());
/// ```
#[macro_export]
macro_rules! impl_reference_identity {
    ($($t:ty),+ $(,)?) => {
        $(impl $crate::Identity for $t {
            fn is_identical(&self, other: &Self) -> bool {
                ::core::ptr::eq(self, other)
            }
        })+
    };
}

macro_rules! identity_by_address {
    ($($t:ty => [$($g:tt)*]),* $(,)?) => {
        $(impl<$($g)*> Identity for $t {
            fn is_identical(&self, other: &Self) -> bool {
                std::ptr::eq(self, other)
            }
        })*
    };
}

identity_by_address!(
    Vec<T> => [T],
    [T] => [T],
    Box<T> => [T: ?Sized],
    HashMap<K, V> => [K, V],
    BTreeMap<K, V> => [K, V],
    HashSet<T> => [T],
);

impl Identity for serde_json::Value {
    fn is_identical(&self, other: &Self) -> bool {
        use serde_json::Value;
        match (self, other) {
            (Value::Array(_), _) | (Value::Object(_), _) => std::ptr::eq(self, other),
            (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) if a.is_f64() || b.is_f64() => x.is_identical(&y),
                _ => a == b,
            },
            _ => self == other,
        }
    }
}
