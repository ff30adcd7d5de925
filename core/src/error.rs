use std::any::Any;
use std::error::Error;
use std::fmt::Debug;
use std::io;

/// Raised when a container is unwrapped on its failure variant.
///
/// Unwrapping functions [raise](Self::raise) this as a typed panic payload, so that [`Panic::from_payload`] can
/// recover it intact.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct UnwrapPanic {
  message: String,
}
impl UnwrapPanic {
  #[inline]
  pub fn new(message: impl Into<String>) -> Self { Self { message: message.into() } }

  #[inline]
  pub(crate) fn called_on(method: &str, variant: &str) -> Self {
    Self::new(format!("called `{}` on a `{}` value", method, variant))
  }

  #[inline]
  pub fn message(&self) -> &str { &self.message }

  /// Panic with `self` as the payload.
  #[inline]
  #[track_caller]
  pub fn raise(self) -> ! { std::panic::panic_any(self) }
}

/// Raised when no arm of a match accepts the value.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("non-exhaustive match: no pattern matched `{value}`")]
pub struct NonExhaustiveMatch {
  value: String,
}
impl NonExhaustiveMatch {
  #[inline]
  pub fn new(value: &impl Debug) -> Self { Self { value: format!("{:?}", value) } }

  /// Debug rendering of the unmatched value.
  #[inline]
  pub fn value(&self) -> &str { &self.value }

  #[inline]
  #[track_caller]
  pub fn raise(self) -> ! { std::panic::panic_any(self) }
}

/// A panic caught by one of the `safe` adapters, normalized into a value.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum Panic {
  #[error(transparent)]
  Unwrap(#[from] UnwrapPanic),
  #[error(transparent)]
  NonExhaustiveMatch(#[from] NonExhaustiveMatch),
  #[error("{0}")]
  Message(String),
  #[error("panicked with a payload that is not a string")]
  Opaque,
}
impl Panic {
  /// Converts a panic payload, as returned by [`std::panic::catch_unwind`], into a `Panic`.
  ///
  /// Payloads that already are one of this crate's error kinds are passed through unchanged. String payloads (from
  /// `panic!` with or without format arguments) become [`Panic::Message`], as do boxed errors
  /// (`Box<dyn Error + Send + Sync>`, `Box<dyn Error + Send>`) and [`io::Error`]s, rendered with `to_string`. Other
  /// payloads cannot be rendered without knowing their type and become [`Panic::Opaque`]; panic with a boxed error
  /// to keep the message.
  pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
    let payload = match payload.downcast::<Panic>() {
      Ok(panic) => return *panic,
      Err(payload) => payload,
    };
    let payload = match payload.downcast::<UnwrapPanic>() {
      Ok(unwrap) => return Self::Unwrap(*unwrap),
      Err(payload) => payload,
    };
    let payload = match payload.downcast::<NonExhaustiveMatch>() {
      Ok(non_exhaustive) => return Self::NonExhaustiveMatch(*non_exhaustive),
      Err(payload) => payload,
    };
    let payload = match payload.downcast::<String>() {
      Ok(message) => return Self::Message(*message),
      Err(payload) => payload,
    };
    let payload = match payload.downcast::<&'static str>() {
      Ok(message) => return Self::Message((*message).to_string()),
      Err(payload) => payload,
    };
    let payload = match payload.downcast::<Box<dyn Error + Send + Sync>>() {
      Ok(error) => return Self::Message(error.to_string()),
      Err(payload) => payload,
    };
    let payload = match payload.downcast::<Box<dyn Error + Send>>() {
      Ok(error) => return Self::Message(error.to_string()),
      Err(payload) => payload,
    };
    match payload.downcast::<io::Error>() {
      Ok(error) => Self::Message(error.to_string()),
      Err(_) => Self::Opaque,
    }
  }

  #[inline]
  #[track_caller]
  pub fn raise(self) -> ! { std::panic::panic_any(self) }
}


#[cfg(test)]
mod tests {
  use std::panic::catch_unwind;

  use super::*;

  #[test]
  fn string_payloads_become_messages() {
    let payload = catch_unwind(|| panic!("boom")).unwrap_err();
    assert_eq!(Panic::from_payload(payload), Panic::Message("boom".to_string()));

    let code = 7;
    let payload = catch_unwind(|| panic!("failed with code {}", code)).unwrap_err();
    assert_eq!(Panic::from_payload(payload).to_string(), "failed with code 7");
  }

  #[test]
  fn typed_payloads_pass_through() {
    let payload = catch_unwind(|| UnwrapPanic::new("nope").raise()).unwrap_err();
    assert_eq!(Panic::from_payload(payload), Panic::Unwrap(UnwrapPanic::new("nope")));

    let payload = catch_unwind(|| NonExhaustiveMatch::new(&3).raise()).unwrap_err();
    let panic = Panic::from_payload(payload);
    assert_eq!(panic, Panic::NonExhaustiveMatch(NonExhaustiveMatch::new(&3)));
    assert_eq!(panic.to_string(), "non-exhaustive match: no pattern matched `3`");

    let payload = catch_unwind(|| Panic::Message("again".to_string()).raise()).unwrap_err();
    assert_eq!(Panic::from_payload(payload), Panic::Message("again".to_string()));
  }

  #[derive(Debug)]
  struct DiskFull;
  impl std::fmt::Display for DiskFull {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str("disk full") }
  }
  impl Error for DiskFull {}

  #[test]
  fn error_payloads_keep_their_message() {
    let payload = catch_unwind(|| {
      std::panic::panic_any(Box::new(DiskFull) as Box<dyn Error + Send + Sync>)
    }).unwrap_err();
    assert_eq!(Panic::from_payload(payload), Panic::Message("disk full".to_string()));

    let payload = catch_unwind(|| std::panic::panic_any(Box::new(DiskFull) as Box<dyn Error + Send>)).unwrap_err();
    assert_eq!(Panic::from_payload(payload).to_string(), "disk full");

    let payload = catch_unwind(|| {
      std::panic::panic_any(io::Error::new(io::ErrorKind::Other, "pipe closed"))
    }).unwrap_err();
    assert_eq!(Panic::from_payload(payload), Panic::Message("pipe closed".to_string()));
  }

  #[test]
  fn other_payloads_are_opaque() {
    let payload = catch_unwind(|| std::panic::panic_any(42u8)).unwrap_err();
    assert_eq!(Panic::from_payload(payload), Panic::Opaque);
  }

  #[cfg(feature = "serde")]
  #[test]
  fn errors_serialize() {
    let json = serde_json::to_string(&UnwrapPanic::new("gone")).unwrap();
    assert_eq!(json, r#"{"message":"gone"}"#);
    let back: NonExhaustiveMatch = serde_json::from_str(r#"{"value":"Some(1)"}"#).unwrap();
    assert_eq!(back.value(), "Some(1)");
  }
}
