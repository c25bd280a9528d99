use rust_decimal::{
  prelude::{FromPrimitive, ToPrimitive},
  Decimal,
};

/// Multipliers feeding the display-only dynamic price. Demand saturates at
/// 1.5x, urgency steps at the 7- and 30-day marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceFactors {
  pub demand: f64,
  pub supply: f64,
  pub time: f64,
}

pub fn price_factors(available: u32, total: u32, attendees: u32, days_until: i64) -> PriceFactors {
  let supply = 1.0 - (available as f64 / total as f64);
  let demand = (attendees as f64 / 500.0).min(1.5);
  let time = if days_until <= 7 {
    1.25
  } else if days_until <= 30 {
    1.10
  } else {
    1.0
  };

  PriceFactors { demand, supply, time }
}

/// Cosmetic recomputation of a base price from scarcity/demand/urgency.
/// Checkout always charges the unmodified tier price.
pub fn dynamic_price(base: Decimal, factors: &PriceFactors) -> Decimal {
  let base = base.to_f64().expect("ticket prices fit in f64");
  let price = base * (1.0 + 0.5 * factors.demand + 0.3 * factors.supply) * factors.time;
  Decimal::from_f64(price).expect("computed price is finite").round_dp(2)
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn price_never_decreases_with_more_attendees() {
    let base = dec!(1200);
    let mut last = Decimal::ZERO;
    for attendees in (0..=2000).step_by(50) {
      let price = dynamic_price(base, &price_factors(300, 1000, attendees, 45));
      assert!(price >= last, "attendees={} dropped the price", attendees);
      last = price;
    }
  }

  #[test]
  fn price_never_decreases_as_tickets_sell_out() {
    let base = dec!(1200);
    let mut last = Decimal::ZERO;
    for available in (0..=1000).rev().step_by(25) {
      let price = dynamic_price(base, &price_factors(available, 1000, 800, 45));
      assert!(price >= last, "available={} dropped the price", available);
      last = price;
    }
  }

  #[test]
  fn demand_factor_saturates() {
    let factors = price_factors(500, 1000, 2000, 45);
    assert_eq!(factors.demand, 1.5);
  }

  #[test]
  fn time_factor_steps_at_week_and_month() {
    assert_eq!(price_factors(500, 1000, 100, 0).time, 1.25);
    assert_eq!(price_factors(500, 1000, 100, 7).time, 1.25);
    assert_eq!(price_factors(500, 1000, 100, 8).time, 1.10);
    assert_eq!(price_factors(500, 1000, 100, 30).time, 1.10);
    assert_eq!(price_factors(500, 1000, 100, 31).time, 1.0);
  }

  #[test]
  fn price_is_rounded_to_two_decimals() {
    let factors = price_factors(333, 1000, 777, 12);
    let price = dynamic_price(dec!(999), &factors);
    assert!(price.scale() <= 2);
  }

  #[test]
  fn neutral_factors_leave_base_unchanged() {
    // a sold-out-free, demand-free event far in the future
    let factors = price_factors(1000, 1000, 0, 90);
    assert_eq!(dynamic_price(dec!(800), &factors), dec!(800));
  }
}
