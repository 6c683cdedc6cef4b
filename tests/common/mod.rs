#![allow(dead_code)]

use std::cell::Cell;
use std::collections::{HashMap, VecDeque};
use std::io::{self, Read};
use std::rc::Rc;

use hid_barcode::decoder::{Report, Symbol, SymbolTable};
use hid_barcode::CancelToken;

/// Turns text into the reports the scanner would send for it, using the
/// table in reverse. Panics on characters the table cannot produce.
pub fn encode(table: &SymbolTable, text: &str) -> Vec<Report> {
    let inverse: HashMap<Symbol, Report> = table.iter().map(|(r, s)| (*s, *r)).collect();
    text.chars()
        .map(|c| match inverse.get(&Symbol::Character(c)) {
            Some(report) => *report,
            None => panic!("no pattern for {:?}", c),
        })
        .collect()
}

pub fn marker(table: &SymbolTable, symbol: Symbol) -> Report {
    table
        .iter()
        .find(|(_, s)| **s == symbol)
        .map(|(r, _)| *r)
        .unwrap()
}

/// Every character the table can produce.
pub fn alphabet(table: &SymbolTable) -> Vec<char> {
    let mut chars: Vec<char> = table
        .iter()
        .filter_map(|(_, s)| match s {
            Symbol::Character(c) => Some(*c),
            _ => None,
        })
        .collect();
    chars.sort();
    chars
}

pub enum Step {
    Report(Report),
    /// Raw bytes returned from a single read, for malformed reports.
    Bytes(Vec<u8>),
    Fail(io::ErrorKind),
}

/// Observes a [`ScriptedDevice`] after it has been moved into a reader.
#[derive(Clone, Default)]
pub struct DeviceProbe {
    reads: Rc<Cell<usize>>,
    closed: Rc<Cell<bool>>,
}

impl DeviceProbe {
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

/// A device that replays a script, then reports end of stream.
///
/// By default each step is handed out by one read. [`ScriptedDevice::chunked`]
/// caps the bytes per read, the way a hidraw node delivers this scanner's
/// reports as 8 byte halves.
pub struct ScriptedDevice {
    steps: VecDeque<Step>,
    pending: Vec<u8>,
    chunk: usize,
    probe: DeviceProbe,
    cancel_after: Option<(usize, CancelToken)>,
}

impl ScriptedDevice {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> (Self, DeviceProbe) {
        let probe = DeviceProbe::default();
        let device = ScriptedDevice {
            steps: steps.into_iter().collect(),
            pending: Vec::new(),
            chunk: usize::MAX,
            probe: probe.clone(),
            cancel_after: None,
        };
        (device, probe)
    }

    pub fn from_reports(reports: impl IntoIterator<Item = Report>) -> (Self, DeviceProbe) {
        Self::new(reports.into_iter().map(Step::Report))
    }

    /// Hands out at most `chunk` bytes per read.
    pub fn chunked(mut self, chunk: usize) -> Self {
        self.chunk = chunk;
        self
    }

    /// Sets `token` once `reads` reads have completed.
    pub fn cancel_after(mut self, reads: usize, token: CancelToken) -> Self {
        self.cancel_after = Some((reads, token));
        self
    }
}

impl Read for ScriptedDevice {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.probe.reads.set(self.probe.reads.get() + 1);
        if let Some((after, token)) = &self.cancel_after {
            if self.probe.reads.get() >= *after {
                token.cancel();
            }
        }

        if self.pending.is_empty() {
            match self.steps.pop_front() {
                Some(Step::Report(report)) => self.pending = report.as_bytes().to_vec(),
                Some(Step::Bytes(bytes)) => self.pending = bytes,
                Some(Step::Fail(kind)) => return Err(io::Error::new(kind, "scripted failure")),
                None => return Ok(0),
            }
        }

        let n = self.pending.len().min(buf.len()).min(self.chunk);
        buf[..n].copy_from_slice(&self.pending[..n]);
        self.pending.drain(..n);
        Ok(n)
    }
}

impl Drop for ScriptedDevice {
    fn drop(&mut self) {
        self.probe.closed.set(true);
    }
}
