//! The blocking loop that turns a stream of reports into barcodes.

use std::io::{self, Read};

use tracing::{debug, error, info, trace};

use crate::cancel::CancelToken;
use crate::constants::REPORT_LEN;
use crate::decoder::{
    Accumulator, AccumulatorAction, Report, ReportCodec, SecondaryEot, SymbolTable,
};
use crate::error::ReadFault;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    /// No read has been attempted yet.
    Idle,
    Reading,
    /// A device fault ended the loop. Terminal.
    Faulted,
    /// The cancel token ended the loop. Terminal.
    Stopped,
}

/// Reads one report from `source`, filling all [`REPORT_LEN`] bytes.
///
/// A report may arrive over several reads: hidraw hands out the 8 byte key
/// down and key up halves separately. End of stream before the first byte is
/// [`ReadFault::EndOfStream`], partway through a report it is
/// [`ReadFault::ShortRead`]. `Interrupted` is retried once a report has
/// started and returned to the caller otherwise.
pub fn read_report<R: Read>(source: &mut R) -> Result<Report, ReadFault> {
    let mut buf = [0u8; REPORT_LEN];
    let mut filled = 0;
    while filled < REPORT_LEN {
        match source.read(&mut buf[filled..]) {
            Ok(0) if filled == 0 => return Err(ReadFault::EndOfStream),
            Ok(0) => {
                return Err(ReadFault::ShortRead {
                    read: filled,
                    expected: REPORT_LEN,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted && filled > 0 => {}
            Err(e) => return Err(ReadFault::Io(e)),
        }
    }
    Ok(Report::from_bytes(buf))
}

/// Pulls reports from a device and yields completed barcodes in scan order.
///
/// The reader owns the device handle, so dropping the reader releases the
/// device. Iteration ends after a fault (yielded once as `Err`) or once the
/// cancel token is set; a scan still in progress at that point is discarded.
#[derive(Debug)]
pub struct BarcodeReader<'t, R> {
    source: R,
    codec: ReportCodec<'t>,
    accumulator: Accumulator,
    cancel: CancelToken,
    state: ReaderState,
}

impl<'t, R: Read> BarcodeReader<'t, R> {
    pub fn new(source: R, table: &'t SymbolTable, cancel: CancelToken) -> Self {
        BarcodeReader {
            source,
            codec: ReportCodec::new(table),
            accumulator: Accumulator::default(),
            cancel,
            state: ReaderState::Idle,
        }
    }

    pub fn with_secondary_eot(mut self, policy: SecondaryEot) -> Self {
        self.accumulator = Accumulator::new(policy);
        self
    }

    pub fn state(&self) -> ReaderState {
        self.state
    }

    /// Blocks until the next barcode completes.
    ///
    /// Returns `Ok(None)` once the loop has stopped, either because the cancel
    /// token was set or because an earlier call returned a fault.
    pub fn next_barcode(&mut self) -> Result<Option<String>, ReadFault> {
        match self.state {
            ReaderState::Faulted | ReaderState::Stopped => return Ok(None),
            ReaderState::Idle => {
                info!("Entering read loop.");
                self.state = ReaderState::Reading;
            }
            ReaderState::Reading => {}
        }

        loop {
            if self.cancel.is_cancelled() {
                self.accumulator.discard();
                self.state = ReaderState::Stopped;
                info!("Stop requested, leaving read loop.");
                return Ok(None);
            }

            let report = match read_report(&mut self.source) {
                Ok(report) => report,
                Err(ReadFault::Io(e)) if e.kind() == io::ErrorKind::Interrupted => {
                    debug!("Read interrupted.");
                    continue;
                }
                Err(fault) => {
                    let action = self.accumulator.fail();
                    debug_assert_eq!(action, AccumulatorAction::DeviceError);
                    self.state = ReaderState::Faulted;
                    error!(%fault, "Device fault, leaving read loop.");
                    return Err(fault);
                }
            };
            trace!(%report, "Received report.");

            if let AccumulatorAction::BarcodeComplete(barcode) =
                self.accumulator.feed(self.codec.decode(&report))
            {
                info!(%barcode, "Barcode complete.");
                return Ok(Some(barcode));
            }
        }
    }
}

impl<'t, R: Read> Iterator for BarcodeReader<'t, R> {
    type Item = Result<String, ReadFault>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_barcode().transpose()
    }
}
