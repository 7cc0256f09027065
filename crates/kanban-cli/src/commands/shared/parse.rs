use std::fmt::Display;
use std::str::FromStr;

/// Parse a closed enum value (case-insensitive) from a command-line string.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>()
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}
