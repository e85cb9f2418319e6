use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use marquee_shared::Masked;

/// Customers are identified by a mobile number of exactly this many digits.
pub const CUSTOMER_ID_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("Invalid mobile number.")]
    InvalidFormat,
}

/// A format-validated customer identifier (10-digit mobile number).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerId(String);

impl CustomerId {
    /// Accepts exactly ten ASCII digits; surrounding whitespace is rejected.
    pub fn parse(raw: &str) -> Result<Self, IdentityError> {
        if raw.len() != CUSTOMER_ID_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdentityError::InvalidFormat);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Log-safe view of the identifier.
    pub fn masked(&self) -> Masked<String> {
        Masked(self.0.clone())
    }
}

impl FromStr for CustomerId {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CustomerId {
    type Error = IdentityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CustomerId> for String {
    fn from(id: CustomerId) -> Self {
        id.0
    }
}

// Debug goes through the mask so ids never land in logs verbatim.
impl fmt::Debug for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CustomerId").field(&self.masked()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_mobile_number() {
        let id = CustomerId::parse("1234567890").unwrap();
        assert_eq!(id.as_str(), "1234567890");
        assert_eq!("1234567890".parse::<CustomerId>().unwrap(), id);
    }

    #[test]
    fn test_rejects_surrounding_whitespace() {
        for raw in [" 1234567890", "1234567890\n", "\t1234567890 "] {
            assert_eq!(CustomerId::parse(raw), Err(IdentityError::InvalidFormat), "{raw:?}");
        }
    }

    #[test]
    fn test_rejects_wrong_length_and_non_digits() {
        for raw in ["", "123456789", "12345678901", "12345abcde", "+123456789", "12345 6789"] {
            assert_eq!(CustomerId::parse(raw), Err(IdentityError::InvalidFormat), "{raw:?}");
        }
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not part of a phone number here.
        assert!(CustomerId::parse("١٢٣٤٥٦٧٨٩٠").is_err());
    }

    #[test]
    fn test_debug_is_masked() {
        let id = CustomerId::parse("1234567890").unwrap();
        assert_eq!(format!("{:?}", id), "CustomerId(********90)");
    }

    #[test]
    fn test_serde_validates() {
        let id: CustomerId = serde_json::from_str("\"0987654321\"").unwrap();
        assert_eq!(id.as_str(), "0987654321");
        assert!(serde_json::from_str::<CustomerId>("\"42\"").is_err());
    }
}
