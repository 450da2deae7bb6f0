//! # Records
//!
//! Plain values handed to the view. Components copy the text out of them and
//! never keep the record itself.

/// Text shown in every value field before any data arrives.
pub const PLACEHOLDER: &str = "...";

/// Library info shown by the data panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRecord {
    pub name: String,
    pub author: String,
    pub license: String,
}

impl DataRecord {
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        license: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            license: license.into(),
        }
    }
}

/// Expiration info shown by the action panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherDataRecord {
    pub expiration: String,
}

impl OtherDataRecord {
    pub fn new(expiration: impl Into<String>) -> Self {
        Self {
            expiration: expiration.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_compare_by_value() {
        let a = DataRecord::new("MyLib", "CBN", "Commercial");
        let b = DataRecord::new("MyLib".to_string(), "CBN", "Commercial");
        assert_eq!(a, b);
        assert_ne!(a, DataRecord::new("MyLib", "CBN", "MIT"));
        assert_eq!(OtherDataRecord::new("Tomorrow").expiration, "Tomorrow");
    }
}
