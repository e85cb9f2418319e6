use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Number of trailing characters left readable in masked output.
const VISIBLE_SUFFIX: usize = 2;

/// A wrapper for customer identifiers (phone numbers) that masks its value in
/// Debug and Display output. Everything but the last two characters is hidden,
/// which keeps log lines correlatable without exposing the full number.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Masked<T>(pub T);

impl<T: fmt::Display> Masked<T> {
    fn masked(&self) -> String {
        let raw = self.0.to_string();
        let len = raw.chars().count();
        if len <= VISIBLE_SUFFIX {
            return "*".repeat(len);
        }
        let tail: String = raw.chars().skip(len - VISIBLE_SUFFIX).collect();
        format!("{}{}", "*".repeat(len - VISIBLE_SUFFIX), tail)
    }
}

impl<T: fmt::Display> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl<T: fmt::Display> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Serialized payloads are consumed by the caller who owns the number;
        // only formatter output is masked.
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}
