use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Parse a timeout such as `30s`, `500ms`, `1m30s` or `1.5h`.
///
/// A bare number is taken as seconds. Units are `ns`, `us`, `µs`, `ms`, `s`,
/// `m` and `h`. Zero is rejected.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
  let input = input.trim();
  if input.is_empty() {
    return Err("empty duration".to_string());
  }

  let invalid = || format!("invalid duration '{input}'");

  let nanos = if input.chars().all(|c| c.is_ascii_digit() || c == '.') {
    scaled(input, NANOS_PER_SEC).ok_or_else(invalid)?
  } else {
    let mut total: u128 = 0;
    let mut rest = input;
    while !rest.is_empty() {
      let number_end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(rest.len());
      let (number, tail) = rest.split_at(number_end);
      let unit_end = tail
        .find(|c: char| c.is_ascii_digit() || c == '.')
        .unwrap_or(tail.len());
      let (unit, tail) = tail.split_at(unit_end);

      let unit_nanos = match unit {
        "ns" => 1,
        "us" | "µs" => 1_000,
        "ms" => 1_000_000,
        "s" => NANOS_PER_SEC,
        "m" => 60 * NANOS_PER_SEC,
        "h" => 3_600 * NANOS_PER_SEC,
        "" => return Err(format!("missing unit in duration '{input}'")),
        other => return Err(format!("unknown unit '{other}' in duration '{input}'")),
      };

      let part = scaled(number, unit_nanos).ok_or_else(invalid)?;
      total = total.checked_add(part).ok_or_else(invalid)?;
      rest = tail;
    }
    total
  };

  if nanos == 0 {
    return Err("timeout must be greater than zero".to_string());
  }

  let secs = u64::try_from(nanos / NANOS_PER_SEC).map_err(|_| invalid())?;
  let subsec = (nanos % NANOS_PER_SEC) as u32;
  Ok(Duration::new(secs, subsec))
}

/// `number` (digits with an optional fraction) times `unit_nanos`, exactly.
fn scaled(number: &str, unit_nanos: u128) -> Option<u128> {
  let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
  if whole.is_empty() && fraction.is_empty() {
    return None;
  }
  if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
    return None;
  }

  let whole: u128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
  let mut nanos = whole.checked_mul(unit_nanos)?;

  let mut place = unit_nanos;
  for digit in fraction.chars() {
    place /= 10;
    nanos = nanos.checked_add(u128::from(digit.to_digit(10)?) * place)?;
  }
  Some(nanos)
}
