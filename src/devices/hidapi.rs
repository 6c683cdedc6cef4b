//! Device discovery through hidapi.
//!
//! _Requires Cargo feature `hidapi`._

use std::ffi::CString;
use std::io::{self, Read};

use ::hidapi::{HidApi, HidDevice, HidResult};
use tracing::{debug, info, warn};

use crate::devices::DeviceIdentifier;
use crate::error::{Error, Result};

/// Initializes the hidapi.
/// Will also initialize the currently available device list.
#[tracing::instrument]
pub fn initialize_hidapi() -> HidResult<HidApi> {
    debug!("Initializing the hidapi.");
    HidApi::new()
}

/// Paths of all HID devices hidapi can see, sorted.
#[tracing::instrument(skip(hidapi))]
pub fn find_devices(hidapi: &HidApi) -> Vec<CString> {
    let mut paths: Vec<CString> = hidapi
        .device_list()
        .map(|device| device.path().to_owned())
        .collect();
    paths.sort();
    info!("Connected devices: {:?}", paths);
    paths
}

/// Opens the device with the last path, the same choice the hidraw listing makes.
#[tracing::instrument]
pub fn open_last_device() -> Result<HidApiDevice> {
    let hidapi = initialize_hidapi()?;
    let path = match find_devices(&hidapi).pop() {
        Some(path) => path,
        None => {
            warn!("hidapi reports no devices.");
            return Err(Error::DeviceNotFound {
                dir: "hidapi".into(),
            });
        }
    };

    let device = hidapi.open_path(&path)?;
    let id = DeviceIdentifier::HidApi(path.to_string_lossy().into_owned());
    info!("Connected to {}.", id);
    info!("Device name: {}.", get_full_device_name(&device));

    Ok(HidApiDevice { id, device })
}

/// Get a formatted string composed of manufacturer string and product string.
pub fn get_full_device_name(device: &HidDevice) -> String {
    let describe = |s: HidResult<Option<String>>| match s {
        Ok(s) => s.unwrap_or_else(|| "NA".to_string()),
        Err(e) => format!("{:?}", e),
    };
    format!(
        "{} {}",
        describe(device.get_manufacturer_string()),
        describe(device.get_product_string())
    )
}

/// An open hidapi device. Closed when dropped.
pub struct HidApiDevice {
    id: DeviceIdentifier,
    device: HidDevice,
}

impl HidApiDevice {
    pub fn id(&self) -> &DeviceIdentifier {
        &self.id
    }
}

impl std::fmt::Debug for HidApiDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HidApiDevice {{ id: {} }}", self.id)
    }
}

impl Read for HidApiDevice {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.device
            .read(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
    }
}

impl Drop for HidApiDevice {
    fn drop(&mut self) {
        info!("Closing {}.", self.id);
    }
}
