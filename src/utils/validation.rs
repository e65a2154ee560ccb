//! Input validation utilities

/// Validate a `--benchmark_min_time` value
///
/// Accepts a non-negative number of seconds with an optional `s` suffix
/// (`0.5`, `0.01s`) or a positive iteration count with an `x` suffix
/// (`100x`).
pub fn validate_min_time(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Min time cannot be empty");
    }

    if let Some(count) = value.strip_suffix('x') {
        return match count.parse::<u64>() {
            Ok(n) if n > 0 => Ok(()),
            Ok(_) => Err("Iteration count must be positive"),
            Err(_) => Err("Iteration count must be a whole number"),
        };
    }

    let seconds = value.strip_suffix('s').unwrap_or(value);
    match seconds.parse::<f64>() {
        Ok(s) if s.is_finite() && s >= 0.0 => Ok(()),
        Ok(_) => Err("Min time must be a non-negative number of seconds"),
        Err(_) => Err("Min time must look like '0.01s' or '100x'"),
    }
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_min_time() {
        assert!(validate_min_time("0.01s").is_ok());
        assert!(validate_min_time("2").is_ok());
        assert!(validate_min_time("0s").is_ok());
        assert!(validate_min_time("100x").is_ok());
        assert!(validate_min_time("").is_err());
        assert!(validate_min_time("0x").is_err()); // Zero iterations
        assert!(validate_min_time("1.5x").is_err());
        assert!(validate_min_time("-1s").is_err());
        assert!(validate_min_time("fast").is_err());
        assert!(validate_min_time("infs").is_err());
    }

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  BM_.*\n"), "BM_.*");
        assert_eq!(sanitize_string("Vector\u{7}/Binary"), "Vector/Binary");
    }
}
