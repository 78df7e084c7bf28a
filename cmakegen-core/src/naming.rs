//! Identifier helpers for CMake target and variable names.

/// Replace every character that is not an ASCII letter, digit or underscore
/// with an underscore (e.g., "flute-3.1" -> "flute_3_1").
pub fn to_identifier(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Lower-case identifier (e.g., "Electric-Potential" -> "electric_potential")
pub fn to_lower_identifier(s: &str) -> String {
    to_identifier(s).to_ascii_lowercase()
}

/// Upper-case identifier, used for CMake variable prefixes (e.g., "hpwl" -> "HPWL")
pub fn to_upper_identifier(s: &str) -> String {
    to_identifier(s).to_ascii_uppercase()
}
