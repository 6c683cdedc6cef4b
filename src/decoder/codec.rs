use tracing::{debug, trace};

use crate::decoder::{Report, Symbol, SymbolTable};

/// Decodes reports against a borrowed, immutable [`SymbolTable`].
#[derive(Debug, Clone, Copy)]
pub struct ReportCodec<'t> {
    table: &'t SymbolTable,
}

impl<'t> ReportCodec<'t> {
    pub fn new(table: &'t SymbolTable) -> Self {
        ReportCodec { table }
    }

    /// Maps a report to its symbol, or [`Symbol::Unrecognized`] when the table
    /// has no entry for it.
    pub fn decode(&self, report: &Report) -> Symbol {
        match self.table.get(report) {
            Some(symbol) => {
                trace!(%report, %symbol, "Decoded report.");
                symbol
            }
            None => {
                debug!(%report, "Skipping unrecognized report.");
                Symbol::Unrecognized
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MOD_LEFT_CTRL, MOD_LEFT_SHIFT, MOD_NONE};
    use crate::decoder::table::MCR12_KEYMAP;

    #[test]
    fn decodes_every_keymap_entry() {
        let table = SymbolTable::mcr12().unwrap();
        let codec = ReportCodec::new(&table);
        for &(modifier, usage, symbol) in MCR12_KEYMAP.iter() {
            assert_eq!(codec.decode(&Report::key_press(modifier, usage)), symbol);
        }
    }

    #[test]
    fn distinguishes_shifted_characters_and_markers() {
        let table = SymbolTable::mcr12().unwrap();
        let codec = ReportCodec::new(&table);
        assert_eq!(
            codec.decode(&Report::key_press(MOD_NONE, 0x05)),
            Symbol::Character('b')
        );
        assert_eq!(
            codec.decode(&Report::key_press(MOD_LEFT_SHIFT, 0x05)),
            Symbol::Character('B')
        );
        assert_eq!(
            codec.decode(&Report::key_press(MOD_NONE, 0x28)),
            Symbol::EndOfTransmissionPrimary
        );
        assert_eq!(
            codec.decode(&Report::key_press(MOD_LEFT_CTRL, 0x0d)),
            Symbol::EndOfTransmissionSecondary
        );
    }

    #[test]
    fn unknown_reports_are_unrecognized() {
        let table = SymbolTable::mcr12().unwrap();
        let codec = ReportCodec::new(&table);
        // Key release.
        assert_eq!(
            codec.decode(&Report::from_bytes([0; 16])),
            Symbol::Unrecognized
        );
        // Ctrl+A is not in the keymap.
        assert_eq!(
            codec.decode(&Report::key_press(MOD_LEFT_CTRL, 0x04)),
            Symbol::Unrecognized
        );
        let mut noisy = *Report::key_press(MOD_NONE, 0x04).as_bytes();
        noisy[15] = 0xff;
        assert_eq!(
            codec.decode(&Report::from_bytes(noisy)),
            Symbol::Unrecognized
        );
    }
}
