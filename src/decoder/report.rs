use derive_more::Display;

use crate::constants::{MODIFIER_INDEX, REPORT_LEN, USAGE_INDEX};
use crate::error::TableError;

/// One fixed-size input report as read from the device.
///
/// Displayed as 32 lowercase hex digits, the same form [`Report::from_hex`]
/// accepts.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{}", "hex::encode(_0)")]
pub struct Report([u8; REPORT_LEN]);

impl Report {
    pub const fn from_bytes(bytes: [u8; REPORT_LEN]) -> Self {
        Report(bytes)
    }

    /// Builds the report a keyboard-mode scanner sends for a single key press.
    pub const fn key_press(modifier: u8, usage: u8) -> Self {
        let mut bytes = [0u8; REPORT_LEN];
        bytes[MODIFIER_INDEX] = modifier;
        bytes[USAGE_INDEX] = usage;
        Report(bytes)
    }

    /// Parses the 32 digit hex form of a report.
    pub fn from_hex(pattern: &str) -> Result<Self, TableError> {
        let mut bytes = [0u8; REPORT_LEN];
        hex::decode_to_slice(pattern, &mut bytes)
            .map_err(|_| TableError::InvalidHex(pattern.to_string()))?;
        Ok(Report(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; REPORT_LEN] {
        &self.0
    }
}

impl From<[u8; REPORT_LEN]> for Report {
    fn from(bytes: [u8; REPORT_LEN]) -> Self {
        Report(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_lowercase_hex() {
        let report = Report::key_press(0x02, 0x1a);
        assert_eq!(report.to_string(), "02001a00000000000000000000000000");
    }

    #[test]
    fn parses_hex_pattern() {
        let report = Report::from_hex("00002800000000000000000000000000").unwrap();
        assert_eq!(report, Report::key_press(0x00, 0x28));
    }

    #[test]
    fn rejects_wrong_length_hex() {
        assert_eq!(
            Report::from_hex("000028"),
            Err(TableError::InvalidHex("000028".to_string()))
        );
        assert!(Report::from_hex("zz002800000000000000000000000000").is_err());
    }
}
