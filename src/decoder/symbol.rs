use derive_more::Display;

/// What a single report decodes to.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A printable barcode character.
    #[display(fmt = "{:?}", _0)]
    Character(char),
    /// Ends the barcode being scanned (Enter key).
    #[display(fmt = "EOT1")]
    EndOfTransmissionPrimary,
    /// Ctrl+J, sent by the scanner but not used to end a scan by default.
    #[display(fmt = "EOT2")]
    EndOfTransmissionSecondary,
    /// The report matched no table entry.
    #[display(fmt = "unrecognized")]
    Unrecognized,
}
