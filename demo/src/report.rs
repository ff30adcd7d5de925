use oxide_core::matcher::{match_value, Arm};
use oxide_core::pattern::{any, err_is, ok_is};

use crate::order::OrderError;

/// One-line summary of an order outcome.
pub fn describe(total: Result<u64, OrderError>) -> String {
  match_value(total, [
    Arm::value(ok_is(|cents: &u64| *cents == 0), "free order".to_string()),
    Arm::then(ok_is(|cents: &u64| *cents >= 100_000), |total: Result<u64, OrderError>| {
      format!("large order of {} cents, needs approval", total.unwrap_or_default())
    }),
    Arm::ok(any(), |cents| format!("order of {}.{:02}", cents / 100, cents % 100)),
    Arm::value(err_is(|error: &OrderError| matches!(error, OrderError::Stock { .. })), "out of stock".to_string()),
    Arm::err(any(), |error| format!("rejected: {}", error)),
  ])
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn describes_each_outcome() {
    assert_eq!(describe(Ok(0)), "free order");
    assert_eq!(describe(Ok(750)), "order of 7.50");
    assert_eq!(describe(Ok(250_000)), "large order of 250000 cents, needs approval");
    assert_eq!(describe(Err(OrderError::Stock { requested: 50, available: 40 })), "out of stock");
    assert_eq!(
      describe(Err(OrderError::Price("x".to_string()))),
      "rejected: unit price `x` is not a number of cents"
    );
  }
}
