use std::error::Error;

use tokio::runtime::Runtime;
use tokio::time::{sleep, Duration};
use tracing::{info, warn};

use oxide_core::{option, result};
use oxide_core::app::env;
use oxide_core::app::storage::Storage;
use oxide_core::app::tracing::AppTracingBuilder;

mod order;
mod report;

fn main() -> Result<(), Box<dyn Error>> {
  env::load_dotenv_into_env();
  let storage = Storage::new("demo");
  let _tracing = AppTracingBuilder::default()
    .with_log_file_path_opt(storage.local_data_file("log.txt"))
    .build();

  let quantity: String = env::var_or("DEMO_QUANTITY", "3".to_string())?;
  let unit_price: String = env::var_or("DEMO_UNIT_PRICE", "250".to_string())?;
  let discount_code = env::var("DEMO_DISCOUNT_CODE")?;
  let tier_level: usize = env::var_or("DEMO_TIER", 1)?;

  let runtime = tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()?;
  run(&runtime, &quantity, &unit_price, discount_code.as_deref(), tier_level);
  Ok(())
}

fn run(runtime: &Runtime, quantity: &str, unit_price: &str, discount_code: Option<&str>, tier_level: usize) {
  let total = order::order_total(quantity, unit_price);
  info!(outcome = %report::describe(total.clone()), "order total");

  match result::all((order::parse_quantity(quantity), order::parse_price(unit_price))) {
    Ok((quantity, unit_price)) => info!(quantity, unit_price, "parsed order inputs"),
    Err(cause) => warn!(%cause, "order inputs are invalid"),
  }
  match order::first_price(unit_price, "199") {
    Ok(price) => info!(price, "unit price after fallback"),
    Err((primary, fallback)) => warn!(%primary, %fallback, "no usable unit price"),
  }

  let tier = option::safe(|| order::tier_bonus(tier_level));
  if tier.is_none() {
    warn!(tier_level, "unknown customer tier");
  }
  match order::discount(discount_code, tier) {
    Some(percent) => info!(percent, "discount applied"),
    None => info!("no discount"),
  }

  let quote = runtime.block_on(result::safe_future(async {
    sleep(Duration::from_millis(10)).await;
    match total {
      Ok(cents) => cents,
      Err(cause) => panic!("cannot quote a rejected order: {}", cause),
    }
  }));
  match quote {
    Ok(cents) => info!(cents, "quote ready"),
    Err(cause) => warn!(%cause, "quote failed"),
  }
}
