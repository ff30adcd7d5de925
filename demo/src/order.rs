use oxide_core::{option, result};

pub const STOCK: u32 = 40;

#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum OrderError {
  #[error("quantity `{0}` is not a positive number")]
  Quantity(String),
  #[error("unit price `{0}` is not a number of cents")]
  Price(String),
  #[error("quantity {requested} exceeds stock of {available}")]
  Stock { requested: u32, available: u32 },
  #[error("total of {quantity} items at {unit_price} cents does not fit in 64 bits")]
  Overflow { quantity: u32, unit_price: u64 },
}

pub fn parse_quantity(input: &str) -> Result<u32, OrderError> {
  match input.trim().parse() {
    Ok(quantity) if quantity > 0 => Ok(quantity),
    _ => Err(OrderError::Quantity(input.to_string())),
  }
}

pub fn parse_price(input: &str) -> Result<u64, OrderError> {
  input.trim().parse().map_err(|_| OrderError::Price(input.to_string()))
}

/// Total in cents of ordering `quantity` items at `unit_price` cents each.
pub fn order_total(quantity: &str, unit_price: &str) -> Result<u64, OrderError> {
  result::run(|guard| {
    let quantity = guard.check(parse_quantity(quantity))?;
    let unit_price = guard.check(parse_price(unit_price))?;
    if quantity > STOCK {
      return Ok(Err(OrderError::Stock { requested: quantity, available: STOCK }));
    }
    tracing::debug!(quantity, unit_price, "order validated");
    match u64::from(quantity).checked_mul(unit_price) {
      Some(total) => Ok(Ok(total)),
      None => Ok(Err(OrderError::Overflow { quantity, unit_price })),
    }
  })
}

/// First price that parses among the given sources, or every reason none did.
pub fn first_price(primary: &str, fallback: &str) -> Result<u64, (OrderError, OrderError)> {
  result::any((parse_price(primary), parse_price(fallback)))
}

const TIER_BONUS: [u8; 3] = [0, 2, 5];

/// Discount bonus in percent of customer tier `level`.
///
/// # Panics
///
/// Panics if `level` is not a known tier.
pub fn tier_bonus(level: usize) -> u8 { TIER_BONUS[level] }

const DISCOUNTS: [(&str, u8); 2] = [("SPRING", 10), ("LOYAL", 15)];

/// Percentage discount of `code` when both the code and the customer tier are known.
pub fn discount(code: Option<&str>, tier: Option<u8>) -> Option<u8> {
  option::run(|guard| {
    let code = guard.check(code)?;
    let tier = guard.check(tier)?;
    let percent = guard.check(DISCOUNTS.iter().find(|(name, _)| *name == code).map(|(_, percent)| *percent))?;
    Ok(Some(percent + tier.min(5)))
  })
}
