use citynet_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a `SYMBOL:WEIGHT` frequency entry
pub fn parse_frequency_entry(s: &str) -> std::result::Result<(char, u64), String> {
    let (symbol, weight) = s
        .split_once(':')
        .ok_or_else(|| format!("expected SYMBOL:WEIGHT, got '{}'", s))?;

    let mut chars = symbol.chars();
    let symbol = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(format!("symbol must be a single character, got '{}'", symbol)),
    };

    let weight = weight
        .trim()
        .parse::<u64>()
        .map_err(|_| format!("weight must be a non-negative integer, got '{}'", weight))?;

    Ok((symbol, weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("json"), Ok(OutputFormat::Json));
        assert_eq!(
            parse_output_format("xml"),
            Err("unknown format: xml (expected: human or json)".to_string())
        );
    }

    #[test]
    fn test_parse_frequency_entry() {
        assert_eq!(parse_frequency_entry("a:5"), Ok(('a', 5)));
        assert_eq!(parse_frequency_entry("#:0"), Ok(('#', 0)));
        assert_eq!(parse_frequency_entry("é:12"), Ok(('é', 12)));
    }

    #[test]
    fn test_parse_frequency_entry_errors() {
        assert!(parse_frequency_entry("a5").is_err());
        assert!(parse_frequency_entry("ab:5").is_err());
        assert!(parse_frequency_entry(":5").is_err());
        assert!(parse_frequency_entry("a:-1").is_err());
        assert!(parse_frequency_entry("a:x").is_err());
    }
}
