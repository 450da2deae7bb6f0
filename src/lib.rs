//! libinfo library exports for testing

use clap::ValueEnum;

use crate::core::record::DataRecord;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Preset data shown immediately instead of waiting for the delayed load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preview {
    MyApp,
    #[value(name = "my-app-2")]
    MyApp2,
}

impl Preview {
    pub fn record(self) -> DataRecord {
        match self {
            Preview::MyApp => DataRecord::new("My app", "CBN", "Commercial"),
            Preview::MyApp2 => DataRecord::new("My app 2", "PGD", "Open source"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_records() {
        assert_eq!(Preview::MyApp.record().name, "My app");
        let second = Preview::MyApp2.record();
        assert_eq!(second.author, "PGD");
        assert_eq!(second.license, "Open source");
    }

    #[test]
    fn test_preview_cli_names() {
        assert_eq!(Preview::from_str("my-app", false), Ok(Preview::MyApp));
        assert_eq!(Preview::from_str("my-app-2", false), Ok(Preview::MyApp2));
    }
}
