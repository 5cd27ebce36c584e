//! Ready-made parser adapters

use std::str::FromStr;

/// Parse `value` with `T`'s `FromStr` implementation.
///
/// Register it for any type whose parse error is a standard error:
///
/// ```rust
/// let mut registry = envfill::ParserRegistry::new();
/// registry.register(envfill::parser::from_str::<u16>);
/// assert_eq!(registry.get::<u16>().unwrap()("80").unwrap(), 80);
/// ```
pub fn from_str<T>(value: &str) -> Result<T, T::Err>
where
    T: FromStr,
{
    value.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    #[test]
    fn test_from_str() {
        let addr: SocketAddr = from_str("127.0.0.1:8080").unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(from_str::<u8>("256").is_err());
    }
}
