//! Validation and parsing of command-line values.

use anyhow::{bail, Context, Result};
use std::time::Duration;

/// Parses a duration such as `30m`, `90s`, `1h30m` or `250ms`.
///
/// A bare number is taken as seconds.
///
/// # Examples
///
/// ```
/// use chart_verifier::validation::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5400));
/// assert_eq!(parse_duration("45").unwrap(), Duration::from_secs(45));
/// assert!(parse_duration("soon").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<Duration> {
    let input = input.trim();
    if input.is_empty() {
        bail!("duration cannot be empty");
    }
    if input.chars().all(|c| c.is_ascii_digit()) {
        let secs: u64 = input
            .parse()
            .with_context(|| format!("duration '{input}' is out of range"))?;
        return Ok(Duration::from_secs(secs));
    }

    let mut total = Duration::ZERO;
    let mut rest = input;
    while !rest.is_empty() {
        let digits = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        if digits == 0 {
            bail!("invalid duration '{input}': expected a number before the unit");
        }
        let amount: u64 = rest[..digits]
            .parse()
            .with_context(|| format!("duration '{input}' is out of range"))?;
        rest = &rest[digits..];

        let unit_len = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
        let part = match &rest[..unit_len] {
            "h" => amount.checked_mul(3600).map(Duration::from_secs),
            "m" => amount.checked_mul(60).map(Duration::from_secs),
            "s" => Some(Duration::from_secs(amount)),
            "ms" => Some(Duration::from_millis(amount)),
            "" => bail!("invalid duration '{input}': missing unit"),
            unit => bail!("invalid duration '{input}': unknown unit '{unit}' (use h, m, s or ms)"),
        };
        total = part
            .and_then(|part| total.checked_add(part))
            .with_context(|| format!("duration '{input}' is out of range"))?;
        rest = &rest[unit_len..];
    }
    Ok(total)
}

/// Validates a `key=value` argument. The key must be non-empty.
pub fn validate_set_arg(arg: &str) -> Result<()> {
    match arg.split_once('=') {
        Some((key, _)) if !key.trim().is_empty() => Ok(()),
        Some(_) => bail!("'{arg}' has an empty key"),
        None => bail!("'{arg}' is not of the form key=value"),
    }
}

/// Clap value parser for durations.
///
/// Use with `#[arg(value_parser = clap_duration_parser)]`.
pub fn clap_duration_parser(s: &str) -> Result<Duration, String> {
    parse_duration(s).map_err(|e| e.to_string())
}

/// Clap value validator for `key=value` arguments.
pub fn clap_set_arg_validator(s: &str) -> Result<String, String> {
    validate_set_arg(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}
