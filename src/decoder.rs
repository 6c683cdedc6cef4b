//! Translation of raw scanner reports into barcodes.
//!
//! The scanner runs in keyboard emulation mode, so each character of a barcode
//! arrives as one boot-keyboard style report: a modifier byte, a reserved byte
//! and the usage ID of the pressed key, zero padded to [`REPORT_LEN`] bytes.
//! [`ReportCodec`] maps one report to a [`Symbol`] through an immutable
//! [`SymbolTable`], and [`Accumulator`] collects symbols until the primary
//! end-of-transmission marker completes a barcode.
//!
//! [`REPORT_LEN`]: crate::constants::REPORT_LEN

pub mod accumulator;
pub mod codec;
pub mod report;
pub mod symbol;
pub mod table;

pub use accumulator::{Accumulator, AccumulatorAction, SecondaryEot};
pub use codec::ReportCodec;
pub use report::Report;
pub use symbol::Symbol;
pub use table::SymbolTable;
