const RESERVED_HEADERS: [&str; 4] = ["content-length", "transfer-encoding", "connection", "upgrade"];

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c)
}

pub fn validate_header_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Header name cannot be empty".to_string());
    }
    if name.len() > 256 {
        return Err("Header name cannot exceed 256 characters".to_string());
    }
    if !name.chars().all(is_token_char) {
        return Err(format!("Header name '{name}' contains invalid characters"));
    }
    if RESERVED_HEADERS
        .iter()
        .any(|reserved| name.eq_ignore_ascii_case(reserved))
    {
        return Err(format!("Header '{name}' is managed by the server"));
    }
    Ok(())
}

pub fn validate_header_value(name: &str, value: &str) -> Result<(), String> {
    if value.len() > 8192 {
        return Err(format!("Value of header '{name}' cannot exceed 8192 characters"));
    }
    if !value.chars().all(|c| c == '\t' || (' '..='~').contains(&c)) {
        return Err(format!("Value of header '{name}' contains invalid characters"));
    }
    Ok(())
}

/// Checks a correlation header name supplied through configuration.
pub fn validate_correlation_header(name: &str) -> Result<(), String> {
    validate_header_name(name)
}
