use rust_decimal::Decimal;

/// Indian-style digit grouping: last three digits, then groups of two
/// (1234567.5 -> "12,34,567.50" style, fraction kept only when present).
pub fn format_inr(value: Decimal) -> String {
  let value = value.round_dp(2).normalize();
  let rendered = value.to_string();

  let (int_part, frac_part) = match rendered.split_once('.') {
    Some((int_part, frac_part)) => (int_part, Some(frac_part)),
    None => (rendered.as_str(), None),
  };

  let (sign, digits) = match int_part.strip_prefix('-') {
    Some(digits) => ("-", digits),
    None => ("", int_part),
  };

  let grouped = group_indian(digits);
  match frac_part {
    Some(frac) => format!("{}{}.{}", sign, grouped, frac),
    None => format!("{}{}", sign, grouped),
  }
}

fn group_indian(digits: &str) -> String {
  if digits.len() <= 3 {
    return digits.to_string();
  }

  let (head, tail) = digits.split_at(digits.len() - 3);
  let mut groups: Vec<&str> = Vec::new();
  let mut end = head.len();
  while end > 2 {
    groups.push(&head[end - 2..end]);
    end -= 2;
  }
  groups.push(&head[..end]);
  groups.reverse();

  format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn small_values_are_untouched() {
    assert_eq!(format_inr(dec!(0)), "0");
    assert_eq!(format_inr(dec!(999)), "999");
  }

  #[test]
  fn grouping_is_indian_style() {
    assert_eq!(format_inr(dec!(1000)), "1,000");
    assert_eq!(format_inr(dec!(123456)), "1,23,456");
    assert_eq!(format_inr(dec!(12345678)), "1,23,45,678");
  }

  #[test]
  fn fractions_survive_grouping() {
    assert_eq!(format_inr(dec!(123456.78)), "1,23,456.78");
    assert_eq!(format_inr(dec!(1575.00)), "1,575");
  }

  #[test]
  fn rounds_to_two_decimals() {
    assert_eq!(format_inr(dec!(999.999)), "1,000");
    assert_eq!(format_inr(dec!(12.346)), "12.35");
  }

  #[test]
  fn negative_values_keep_the_sign_outside_groups() {
    assert_eq!(format_inr(dec!(-123456)), "-1,23,456");
  }
}
