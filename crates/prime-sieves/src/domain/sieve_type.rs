//! Sieve algorithm selector

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sieve algorithm used to produce primes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SieveType {
    /// Sieve of Eratosthenes over odd candidates
    Eratosthenes,
    /// Sieve of Sundaram via the `2k + 1` transform
    Sundaram,
}

impl SieveType {
    /// Every sieve, in declaration order
    pub const ALL: [SieveType; 2] = [SieveType::Eratosthenes, SieveType::Sundaram];

    /// Lowercase name, as accepted by `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            Self::Eratosthenes => "eratosthenes",
            Self::Sundaram => "sundaram",
        }
    }
}

impl fmt::Display for SieveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown sieve name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sieve type '{0}' (expected 'eratosthenes' or 'sundaram')")]
pub struct ParseSieveTypeError(pub String);

impl FromStr for SieveType {
    type Err = ParseSieveTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SieveType::ALL
            .into_iter()
            .find(|sieve_type| sieve_type.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSieveTypeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("eratosthenes".parse::<SieveType>(), Ok(SieveType::Eratosthenes));
        assert_eq!("sundaram".parse::<SieveType>(), Ok(SieveType::Sundaram));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Eratosthenes".parse::<SieveType>(), Ok(SieveType::Eratosthenes));
        assert_eq!(" SUNDARAM ".parse::<SieveType>(), Ok(SieveType::Sundaram));
    }

    #[test]
    fn test_parse_unknown() {
        let result = "atkin".parse::<SieveType>();
        assert_eq!(result, Err(ParseSieveTypeError("atkin".to_string())));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for sieve_type in SieveType::ALL {
            assert_eq!(sieve_type.to_string().parse::<SieveType>(), Ok(sieve_type));
        }
    }

    #[test]
    fn test_all_order() {
        assert_eq!(SieveType::ALL, [SieveType::Eratosthenes, SieveType::Sundaram]);
    }
}
