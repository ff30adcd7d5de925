//! Pattern specifiers for the [matcher](crate::matcher).
//!
//! A [`Pattern`] is tagged with its [`PatternKind`] when it is constructed. Container shapes nest: `some(eq(5))`
//! matches `Some(5)`, `ok(some(any()))` matches `Ok(Some(_))`.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum PatternKind {
  /// Matches anything without looking at it.
  Wildcard,
  /// Equal to a given value.
  Literal,
  /// A container variant, with a nested pattern for its payload.
  Shape,
  /// A container variant whose payload satisfies a predicate, or a bare predicate.
  Predicate,
  /// The very same shared function, by pointer identity.
  Identity,
}

pub struct Pattern<'p, T: ?Sized> {
  kind: PatternKind,
  test: Option<Box<dyn Fn(&T) -> bool + 'p>>,
}

impl<'p, T: ?Sized> Pattern<'p, T> {
  #[inline]
  fn new(kind: PatternKind, test: impl Fn(&T) -> bool + 'p) -> Self {
    Self { kind, test: Some(Box::new(test)) }
  }

  #[inline]
  pub fn kind(&self) -> PatternKind { self.kind }

  #[inline]
  pub fn matches(&self, value: &T) -> bool {
    match &self.test {
      None => true,
      Some(test) => test(value),
    }
  }
}

impl<T: ?Sized> fmt::Debug for Pattern<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Pattern").field("kind", &self.kind).finish_non_exhaustive()
  }
}


/// Wildcard: matches any value.
#[inline]
pub fn any<'p, T: ?Sized>() -> Pattern<'p, T> {
  Pattern { kind: PatternKind::Wildcard, test: None }
}

/// Matches values equal to `expected`.
#[inline]
pub fn eq<'p, T: PartialEq + 'p>(expected: T) -> Pattern<'p, T> {
  Pattern::new(PatternKind::Literal, move |value| *value == expected)
}

/// Matches values for which `predicate` holds.
#[inline]
pub fn is<'p, T: ?Sized>(predicate: impl Fn(&T) -> bool + 'p) -> Pattern<'p, T> {
  Pattern::new(PatternKind::Predicate, predicate)
}


#[inline]
pub fn some<'p, T: 'p>(inner: Pattern<'p, T>) -> Pattern<'p, Option<T>> {
  Pattern::new(PatternKind::Shape, move |value: &Option<T>| value.as_ref().is_some_and(|v| inner.matches(v)))
}

#[inline]
pub fn none<'p, T: 'p>() -> Pattern<'p, Option<T>> {
  Pattern::new(PatternKind::Shape, Option::is_none)
}

#[inline]
pub fn ok<'p, T: 'p, E>(inner: Pattern<'p, T>) -> Pattern<'p, Result<T, E>> {
  Pattern::new(PatternKind::Shape, move |value: &Result<T, E>| value.as_ref().is_ok_and(|v| inner.matches(v)))
}

#[inline]
pub fn err<'p, T, E: 'p>(inner: Pattern<'p, E>) -> Pattern<'p, Result<T, E>> {
  Pattern::new(PatternKind::Shape, move |value: &Result<T, E>| value.as_ref().is_err_and(|e| inner.matches(e)))
}


/// Matches `Some` whose payload satisfies `predicate`.
#[inline]
pub fn some_is<'p, T>(predicate: impl Fn(&T) -> bool + 'p) -> Pattern<'p, Option<T>> {
  Pattern::new(PatternKind::Predicate, move |value: &Option<T>| value.as_ref().is_some_and(&predicate))
}

/// Matches `Ok` whose value satisfies `predicate`.
#[inline]
pub fn ok_is<'p, T, E>(predicate: impl Fn(&T) -> bool + 'p) -> Pattern<'p, Result<T, E>> {
  Pattern::new(PatternKind::Predicate, move |value: &Result<T, E>| value.as_ref().is_ok_and(&predicate))
}

/// Matches `Err` whose error satisfies `predicate`.
#[inline]
pub fn err_is<'p, T, E>(predicate: impl Fn(&E) -> bool + 'p) -> Pattern<'p, Result<T, E>> {
  Pattern::new(PatternKind::Predicate, move |value: &Result<T, E>| value.as_ref().is_err_and(&predicate))
}


/// Shared handles compared by pointer identity.
pub trait SameRef {
  fn same_ref(&self, other: &Self) -> bool;
}
impl<F: ?Sized> SameRef for Rc<F> {
  #[inline]
  fn same_ref(&self, other: &Self) -> bool { Rc::ptr_eq(self, other) }
}
impl<F: ?Sized> SameRef for Arc<F> {
  #[inline]
  fn same_ref(&self, other: &Self) -> bool { Arc::ptr_eq(self, other) }
}

/// Matches only the very handle `target` points to (or a clone of it), never a different function that happens to
/// behave the same.
#[inline]
pub fn function<'p, P: SameRef + Clone + 'p>(target: &P) -> Pattern<'p, P> {
  let target = target.clone();
  Pattern::new(PatternKind::Identity, move |value: &P| value.same_ref(&target))
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn wildcard_matches_everything() {
    assert!(any::<i32>().matches(&1));
    assert!(any::<Option<i32>>().matches(&None));
    assert!(any::<str>().matches("unsized"));
    assert_eq!(any::<i32>().kind(), PatternKind::Wildcard);
  }

  #[test]
  fn literals_and_predicates() {
    assert!(eq(5).matches(&5));
    assert!(!eq(5).matches(&6));
    let positive = is(|n: &i32| *n > 0);
    assert!(positive.matches(&3));
    assert!(!positive.matches(&-3));
    assert_eq!(positive.kind(), PatternKind::Predicate);
  }

  #[test]
  fn shapes_nest() {
    let pattern = some(eq(5));
    assert!(pattern.matches(&Some(5)));
    assert!(!pattern.matches(&Some(4)));
    assert!(!pattern.matches(&None));
    assert_eq!(pattern.kind(), PatternKind::Shape);

    let pattern = ok::<_, &str>(some(any()));
    assert!(pattern.matches(&Ok(Some(1))));
    assert!(!pattern.matches(&Ok(None)));
    assert!(!pattern.matches(&Err("e")));

    assert!(none::<i32>().matches(&None));
    assert!(!none().matches(&Some(1)));
    assert!(err::<i32, _>(eq("e")).matches(&Err("e")));
    assert!(!err::<i32, &str>(any()).matches(&Ok(1)));
  }

  #[test]
  fn predicate_wrappers() {
    let big = some_is(|n: &i32| *n > 10);
    assert!(big.matches(&Some(20)));
    assert!(!big.matches(&Some(5)));
    assert!(!big.matches(&None));

    assert!(ok_is::<_, ()>(|s: &&str| s.is_empty()).matches(&Ok("")));
    assert!(!ok_is::<i32, i32>(|_| true).matches(&Err(1)));
    assert!(err_is::<(), _>(|code: &u16| *code >= 500).matches(&Err(503)));
    assert!(!err_is::<(), u16>(|_| true).matches(&Ok(())));
  }

  #[test]
  fn functions_match_by_identity() {
    let double: Rc<dyn Fn(i32) -> i32> = Rc::new(|n| n * 2);
    let lookalike: Rc<dyn Fn(i32) -> i32> = Rc::new(|n| n * 2);
    let pattern = function(&double);
    assert!(pattern.matches(&double.clone()));
    assert!(!pattern.matches(&lookalike));
    assert_eq!(pattern.kind(), PatternKind::Identity);

    let shared = Arc::new(|| ());
    assert!(function(&shared).matches(&shared));
  }
}
