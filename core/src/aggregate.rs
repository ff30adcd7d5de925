//! Tuple traits behind [`result::all`](crate::result::all), [`result::any`](crate::result::any),
//! [`option::all`](crate::option::all), and [`option::any`](crate::option::any).
//!
//! The associated types correlate a tuple of containers with the tuple of their payloads, so aggregating
//! `(Result<u8, E>, Result<&str, E>)` yields `Result<(u8, &str), E>`. Implemented for tuples of 1 to 12 elements.
//! All scans go left to right and stop at the first deciding element.

/// Tuples of results sharing an error type.
pub trait AllResults {
  type Values;
  type Error;

  /// `Ok` of all values in order, or the first `Err`.
  fn all(self) -> Result<Self::Values, Self::Error>;
}

/// Tuples of results sharing a value type.
pub trait AnyResult {
  type Value;
  type Errors;

  /// The first `Ok`, or `Err` of all errors in order.
  fn any(self) -> Result<Self::Value, Self::Errors>;
}

/// Tuples of options.
pub trait AllOptions {
  type Values;

  /// `Some` of all values in order, or `None` at the first `None`.
  fn all(self) -> Option<Self::Values>;
}

/// Tuples of options sharing a value type.
pub trait AnyOption {
  type Value;

  /// The first `Some`, or `None`.
  fn any(self) -> Option<Self::Value>;
}

macro_rules! replace {
  ($_t:ident, $sub:ty) => { $sub };
}

macro_rules! impl_tuple {
  ($($T:ident $v:ident),+) => {
    impl<E, $($T),+> AllResults for ($(Result<$T, E>,)+) {
      type Values = ($($T,)+);
      type Error = E;

      #[inline]
      fn all(self) -> Result<Self::Values, E> {
        let ($($v,)+) = self;
        Ok(($($v?,)+))
      }
    }

    impl<V, $($T),+> AnyResult for ($(Result<V, $T>,)+) {
      type Value = V;
      type Errors = ($($T,)+);

      #[inline]
      fn any(self) -> Result<V, Self::Errors> {
        let ($($v,)+) = self;
        $(let $v = match $v {
          Ok(value) => return Ok(value),
          Err(error) => error,
        };)+
        Err(($($v,)+))
      }
    }

    impl<$($T),+> AllOptions for ($(Option<$T>,)+) {
      type Values = ($($T,)+);

      #[inline]
      fn all(self) -> Option<Self::Values> {
        let ($($v,)+) = self;
        Some(($($v?,)+))
      }
    }

    impl<V> AnyOption for ($(replace!($T, Option<V>),)+) {
      type Value = V;

      #[inline]
      fn any(self) -> Option<V> {
        let ($($v,)+) = self;
        $(if let Some(value) = $v {
          return Some(value);
        })+
        None
      }
    }
  };
}

impl_tuple!(A a);
impl_tuple!(A a, B b);
impl_tuple!(A a, B b, C c);
impl_tuple!(A a, B b, C c, D d);
impl_tuple!(A a, B b, C c, D d, F f);
impl_tuple!(A a, B b, C c, D d, F f, G g);
impl_tuple!(A a, B b, C c, D d, F f, G g, H h);
impl_tuple!(A a, B b, C c, D d, F f, G g, H h, I i);
impl_tuple!(A a, B b, C c, D d, F f, G g, H h, I i, J j);
impl_tuple!(A a, B b, C c, D d, F f, G g, H h, I i, J j, K k);
impl_tuple!(A a, B b, C c, D d, F f, G g, H h, I i, J j, K k, L l);
impl_tuple!(A a, B b, C c, D d, F f, G g, H h, I i, J j, K k, L l, M m);
