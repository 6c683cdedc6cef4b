// USB HID keyboard emulation:
//
// In this mode the scanner enumerates as a boot keyboard and "types" each barcode. Every
// character becomes one input report (modifier byte, reserved byte, key usage ID, zero padding)
// and the barcode ends with Enter. We read the hidraw node directly rather than listening for key
// events, so nothing is typed into whatever window has focus.
//
// Output lines on stdout are the interface for the process that launched us; logs go to stderr.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};

use hid_barcode::decoder::SymbolTable;
use hid_barcode::devices::{open_device, select_device};
use hid_barcode::reader::BarcodeReader;
use hid_barcode::server::ScannerServer;
use hid_barcode::{tools, CancelToken, Error};

mod cli;

fn main() -> ExitCode {
    let args = cli::Args::parse();
    tools::initialize_logging(args.json_logs);
    info!("Starting hid_barcode.");

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        info!("Interrupt received, stopping when the next report arrives.");
        handler_token.cancel();
    }) {
        warn!("Failed to install interrupt handler: {}", e);
    }

    let stdout = io::stdout();
    let mut server = ScannerServer::new(stdout.lock());

    match serve(&args, &mut server, cancel) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn serve<W: io::Write>(
    args: &cli::Args,
    server: &mut ScannerServer<W>,
    cancel: CancelToken,
) -> Result<(), Error> {
    let table = SymbolTable::mcr12()?;
    let policy = args.secondary_eot.into();

    #[cfg(feature = "hidapi")]
    {
        if args.hidapi {
            let device = match hid_barcode::devices::hidapi::open_last_device() {
                Ok(device) => device,
                Err(e) => return Err(report_open_failure(server, e)),
            };
            let reader = BarcodeReader::new(device, &table, cancel).with_secondary_eot(policy);
            return server.run(reader);
        }
    }

    let path = match &args.device {
        Some(path) => path.clone(),
        None => match select_device(&args.dev_dir) {
            Ok(path) => path,
            Err(e) => return Err(report_open_failure(server, e)),
        },
    };
    let device = match open_device(&path) {
        Ok(device) => device,
        Err(e) => return Err(report_open_failure(server, e)),
    };

    let reader = BarcodeReader::new(device, &table, cancel).with_secondary_eot(policy);
    server.run(reader)
}

/// Writes the diagnostic line for a failure before the read loop started.
fn report_open_failure<W: io::Write>(server: &mut ScannerServer<W>, e: Error) -> Error {
    let reported = match &e {
        Error::DeviceNotFound { .. } => server.report_missing_device(),
        other => server.report_error(other),
    };
    if let Err(output) = reported {
        warn!("{}", output);
    }
    e
}
