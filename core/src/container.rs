use crate::error::UnwrapPanic;

/// The two container families.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
  Option,
  Result,
}

/// Vocabulary shared by [`Option`] and [`Result`]: a success variant carrying a [`Value`](Self::Value), and a failure
/// variant carrying a [`Failure`](Self::Failure). `Option` has no error channel, so its failure is `()`.
///
/// Guards, aggregation, and the matcher are written against this trait rather than against either family.
pub trait Container: Sized {
  const KIND: Kind;

  type Value;
  type Failure;

  fn from_value(value: Self::Value) -> Self;
  fn from_failure(failure: Self::Failure) -> Self;

  /// Splits `self` into its success value or its failure payload.
  fn into_branch(self) -> Result<Self::Value, Self::Failure>;

  fn is_success(&self) -> bool;
  #[inline]
  fn is_failure(&self) -> bool { !self.is_success() }

  /// Name of the active variant: `Some`, `None`, `Ok`, or `Err`.
  fn variant_name(&self) -> &'static str;


  /// Returns the success value, or an [`UnwrapPanic`] describing the failure variant. Never panics.
  #[inline]
  fn try_unwrap(self) -> Result<Self::Value, UnwrapPanic> {
    let variant = self.variant_name();
    self.into_branch().map_err(|_| UnwrapPanic::called_on("unwrap", variant))
  }

  /// Returns the success value, panicking with an [`UnwrapPanic`] payload on the failure variant.
  #[inline]
  #[track_caller]
  fn unwrap_or_panic(self) -> Self::Value {
    self.try_unwrap().unwrap_or_else(|panic| panic.raise())
  }

  /// Like [`unwrap_or_panic`](Self::unwrap_or_panic), with `message` as the diagnostic.
  #[inline]
  #[track_caller]
  fn expect_or_panic(self, message: &str) -> Self::Value {
    match self.into_branch() {
      Ok(value) => value,
      Err(_) => UnwrapPanic::new(message).raise(),
    }
  }

  /// Returns the success value without checking the variant.
  ///
  /// # Safety
  ///
  /// `self` must be the success variant; calling this on the failure variant is undefined behavior.
  #[inline]
  unsafe fn unwrap_value_unchecked(self) -> Self::Value {
    match self.into_branch() {
      Ok(value) => value,
      // SAFETY: caller guarantees the success variant.
      Err(_) => unsafe { std::hint::unreachable_unchecked() },
    }
  }
}

impl<T> Container for Option<T> {
  const KIND: Kind = Kind::Option;

  type Value = T;
  type Failure = ();

  #[inline]
  fn from_value(value: T) -> Self { Some(value) }
  #[inline]
  fn from_failure(_: ()) -> Self { None }

  #[inline]
  fn into_branch(self) -> Result<T, ()> { self.ok_or(()) }

  #[inline]
  fn is_success(&self) -> bool { self.is_some() }

  #[inline]
  fn variant_name(&self) -> &'static str {
    if self.is_some() { "Some" } else { "None" }
  }
}

impl<T, E> Container for Result<T, E> {
  const KIND: Kind = Kind::Result;

  type Value = T;
  type Failure = E;

  #[inline]
  fn from_value(value: T) -> Self { Ok(value) }
  #[inline]
  fn from_failure(failure: E) -> Self { Err(failure) }

  #[inline]
  fn into_branch(self) -> Result<T, E> { self }

  #[inline]
  fn is_success(&self) -> bool { self.is_ok() }

  #[inline]
  fn variant_name(&self) -> &'static str {
    if self.is_ok() { "Ok" } else { "Err" }
  }
}


/// Error-side extraction for [`Result`], mirroring the value side of [`Container`].
pub trait ResultExt<T, E> {
  fn try_unwrap_err(self) -> Result<E, UnwrapPanic>;

  #[track_caller]
  fn unwrap_err_or_panic(self) -> E;

  #[track_caller]
  fn expect_err_or_panic(self, message: &str) -> E;

  /// # Safety
  ///
  /// `self` must be `Err`.
  unsafe fn unwrap_err_value_unchecked(self) -> E;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
  #[inline]
  fn try_unwrap_err(self) -> Result<E, UnwrapPanic> {
    match self {
      Ok(_) => Err(UnwrapPanic::called_on("unwrap_err", "Ok")),
      Err(error) => Ok(error),
    }
  }

  #[inline]
  fn unwrap_err_or_panic(self) -> E {
    self.try_unwrap_err().unwrap_or_else(|panic| panic.raise())
  }

  #[inline]
  fn expect_err_or_panic(self, message: &str) -> E {
    match self {
      Ok(_) => UnwrapPanic::new(message).raise(),
      Err(error) => error,
    }
  }

  #[inline]
  unsafe fn unwrap_err_value_unchecked(self) -> E {
    match self {
      // SAFETY: caller guarantees `Err`.
      Ok(_) => unsafe { std::hint::unreachable_unchecked() },
      Err(error) => error,
    }
  }
}


#[cfg(test)]
mod tests {
  use std::panic::catch_unwind;

  use super::*;

  fn unwrap_panic_of(f: impl FnOnce() + std::panic::UnwindSafe) -> UnwrapPanic {
    let payload = catch_unwind(f).unwrap_err();
    *payload.downcast::<UnwrapPanic>().unwrap()
  }

  #[test]
  fn predicates() {
    assert!(Ok::<_, ()>(1).is_success());
    assert!(!Ok::<_, ()>(1).is_failure());
    assert!(Err::<(), _>("e").is_failure());
    assert!(Some(1).is_success());
    assert!(None::<i32>.is_failure());
  }

  #[test]
  fn variant_names() {
    assert_eq!(Some(1).variant_name(), "Some");
    assert_eq!(None::<i32>.variant_name(), "None");
    assert_eq!(Ok::<_, ()>(1).variant_name(), "Ok");
    assert_eq!(Err::<(), _>(1).variant_name(), "Err");
  }

  #[test]
  fn round_trip_through_branch() {
    assert_eq!(Option::from_value(3), Some(3));
    assert_eq!(Option::<i32>::from_failure(()), None);
    assert_eq!(Result::<i32, &str>::from_failure("x"), Err("x"));
    assert_eq!(Some(3).into_branch(), Ok(3));
    assert_eq!(None::<i32>.into_branch(), Err(()));
  }

  #[test]
  fn unwrap_returns_value() {
    assert_eq!(Ok::<_, ()>(5).unwrap_or_panic(), 5);
    assert_eq!(Some("s").unwrap_or_panic(), "s");
    assert_eq!(Err::<(), _>("e").unwrap_err_or_panic(), "e");
  }

  #[test]
  fn try_unwrap_describes_failure() {
    let panic = Err::<i32, _>("e").try_unwrap().unwrap_err();
    assert_eq!(panic.message(), "called `unwrap` on a `Err` value");
    let panic = None::<i32>.try_unwrap().unwrap_err();
    assert_eq!(panic.message(), "called `unwrap` on a `None` value");
    let panic = Ok::<_, ()>(1).try_unwrap_err().unwrap_err();
    assert_eq!(panic.message(), "called `unwrap_err` on a `Ok` value");
  }

  #[test]
  fn unwrap_on_failure_panics_with_typed_payload() {
    let panic = unwrap_panic_of(|| { Err::<i32, _>("e").unwrap_or_panic(); });
    assert_eq!(panic, UnwrapPanic::new("called `unwrap` on a `Err` value"));
    let panic = unwrap_panic_of(|| { None::<i32>.expect_or_panic("missing config"); });
    assert_eq!(panic.message(), "missing config");
    let panic = unwrap_panic_of(|| { Ok::<_, ()>(1).expect_err_or_panic("expected failure"); });
    assert_eq!(panic.message(), "expected failure");
  }

  #[test]
  fn unchecked_on_success() {
    // SAFETY: both are the success variant.
    assert_eq!(unsafe { Some(9).unwrap_value_unchecked() }, 9);
    assert_eq!(unsafe { Err::<(), _>(4).unwrap_err_value_unchecked() }, 4);
  }

  #[test]
  fn unwrap_or_never_panics() {
    assert_eq!(Err::<i32, _>("e").unwrap_or(7), 7);
    assert_eq!(None.unwrap_or(7), 7);
  }

  #[test]
  fn map_leaves_failures_and_originals_alone() {
    let failure: Result<i32, &str> = Err("e");
    assert_eq!(failure.map(|v| v + 1), Err("e"));
    assert_eq!(None::<i32>.map(|v| v + 1), None);

    let original = Some(vec![1, 2]);
    let mapped = original.as_ref().map(|v| v.len());
    assert_eq!(mapped, Some(2));
    assert_eq!(original, Some(vec![1, 2]));
  }
}
