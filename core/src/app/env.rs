use std::env::{self, VarError};
use std::str::FromStr;

/// Loads a `.env` file from the current directory or its ancestors into the process environment. A missing file is
/// not an error; variables already set in the environment take precedence.
pub fn load_dotenv_into_env() {
  match dotenvy::dotenv() {
    Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
    Err(cause) if cause.not_found() => {}
    Err(cause) => tracing::warn!(%cause, "failed to load .env file; continuing without it"),
  }
}

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
  #[error("environment variable `{name}` is not valid unicode")]
  NotUnicode { name: &'static str },
  #[error("environment variable `{name}` has invalid value `{value}`: {reason}")]
  Invalid { name: &'static str, value: String, reason: String },
}

/// Gets the value of environment variable `name`, or `None` if it is not set.
pub fn var(name: &'static str) -> Result<Option<String>, EnvError> {
  match env::var(name) {
    Ok(value) => Ok(Some(value)),
    Err(VarError::NotPresent) => Ok(None),
    Err(VarError::NotUnicode(_)) => Err(EnvError::NotUnicode { name }),
  }
}

/// Gets environment variable `name` parsed as `T`, or `default` if it is not set.
pub fn var_or<T>(name: &'static str, default: T) -> Result<T, EnvError> where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  let Some(value) = var(name)? else {
    return Ok(default);
  };
  match value.parse() {
    Ok(parsed) => Ok(parsed),
    Err(cause) => Err(EnvError::Invalid { name, reason: cause.to_string(), value }),
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_variable_uses_default() {
    assert_eq!(var("OXIDE_TEST_SURELY_UNSET").unwrap(), None);
    assert_eq!(var_or("OXIDE_TEST_SURELY_UNSET", 3u8).unwrap(), 3);
  }

  #[test]
  fn invalid_value_is_reported() {
    env::set_var("OXIDE_TEST_INVALID_NUMBER", "three");
    let error = var_or("OXIDE_TEST_INVALID_NUMBER", 3u8).unwrap_err();
    assert!(matches!(error, EnvError::Invalid { name: "OXIDE_TEST_INVALID_NUMBER", .. }));
    env::set_var("OXIDE_TEST_VALID_NUMBER", "7");
    assert_eq!(var_or("OXIDE_TEST_VALID_NUMBER", 3u8).unwrap(), 7);
  }
}
