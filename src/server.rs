use std::io::{Read, Write};

use tracing::{error, info, warn};

use crate::constants::{
    DEVICE_NOT_FOUND_NOTICE, EXIT_NOTICE, SCANNER_READ_PREFIX, SCAN_CLOSE, SCAN_ERROR_PREFIX,
};
use crate::error::{Error, Result};
use crate::reader::BarcodeReader;

/// Drives a [`BarcodeReader`] and writes the line protocol consumers read:
///
/// - `SCANNER_READ:<barcode>` per barcode, flushed immediately,
/// - `SCAN_ERROR:<reason>` on fatal paths,
/// - `Exiting...` when stopped on request,
/// - `SCAN_CLOSE` once the device has been released.
#[derive(Debug)]
pub struct ScannerServer<W> {
    out: W,
}

impl<W: Write> ScannerServer<W> {
    pub fn new(out: W) -> Self {
        ScannerServer { out }
    }

    /// Serves barcodes until the reader stops or faults. Returns `Ok` when it
    /// was stopped through its cancel token.
    ///
    /// The reader (and with it the device handle) is dropped before `SCAN_CLOSE`
    /// is written, on every path.
    #[tracing::instrument(skip(self, reader))]
    pub fn run<R: Read>(&mut self, mut reader: BarcodeReader<'_, R>) -> Result<()> {
        info!("Starting server.");

        let outcome = loop {
            match reader.next_barcode() {
                Ok(Some(barcode)) => {
                    if let Err(e) = self.emit_barcode(&barcode) {
                        break Err(e);
                    }
                }
                Ok(None) => break Ok(()),
                Err(fault) => break Err(Error::from(fault)),
            }
        };
        drop(reader);

        match outcome {
            Ok(()) => {
                info!("Server stopped.");
                self.line(EXIT_NOTICE)?;
                self.line(SCAN_CLOSE)
            }
            Err(e) => {
                error!("Server stopped: {}", e);
                // The output itself may be what failed; the first error wins.
                let notice = format!("{}{}", SCAN_ERROR_PREFIX, e);
                for line in [notice.as_str(), SCAN_CLOSE] {
                    if let Err(output) = self.line(line) {
                        warn!("Failed to write {:?}: {}", line, output);
                    }
                }
                Err(e)
            }
        }
    }

    /// Reports that no scanner could be selected.
    pub fn report_missing_device(&mut self) -> Result<()> {
        self.line(&format!("{}{}", SCAN_ERROR_PREFIX, DEVICE_NOT_FOUND_NOTICE))
    }

    /// Reports a failure that happened before the read loop started.
    pub fn report_error(&mut self, e: &Error) -> Result<()> {
        self.line(&format!("{}{}", SCAN_ERROR_PREFIX, e))
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit_barcode(&mut self, barcode: &str) -> Result<()> {
        self.line(&format!("{}{}", SCANNER_READ_PREFIX, barcode))
    }

    fn line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line).map_err(Error::Output)?;
        self.out.flush().map_err(Error::Output)
    }
}
