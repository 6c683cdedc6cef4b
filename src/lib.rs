//! Reads a USB barcode scanner in keyboard emulation mode and turns its raw
//! HID input reports into barcode strings.
//!
//! The pipeline is a single blocking loop:
//!
//! ```text
//! device --16 byte report--> ReportCodec --Symbol--> Accumulator --barcode--> ScannerServer
//! ```
//!
//! [`devices`] finds and opens the scanner, [`reader::BarcodeReader`] runs the
//! loop and [`server::ScannerServer`] writes one `SCANNER_READ:<barcode>` line
//! per scan. A [`cancel::CancelToken`] stops the loop between reads.
//!
//! ## Cargo Features
//!
//! - `hidapi`: discover and open the scanner through hidapi.

pub mod cancel;
pub mod constants;
pub mod decoder;
pub mod devices;
pub mod error;
pub mod reader;
pub mod server;
pub mod tools;

pub use cancel::CancelToken;
pub use error::{Error, ReadFault, Result, TableError};
