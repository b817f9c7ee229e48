use std::fmt;
use std::path::Path;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::GoveeError;
use crate::util::credentials::{self, DEFAULT_KEY_FILE};

/// Production endpoint of the Govee developer API.
pub const BASE_URL: &str = "https://developer-api.govee.com";

const DEVICE_LIST: &str = "/v1/devices";
const CONTROL: &str = "/v1/devices/control";
const API_KEY_HEADER: &str = "Govee-API-Key";

/// The vendor API performs unbounded waits server-side; cap our end so a
/// stalled request cannot block the caller forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Govee cloud HTTP API.
///
/// Holds the API key and a blocking HTTP client; every operation builds
/// and fires its own one-shot request. There is no shared session state,
/// so a `GoveeClient` can be used from multiple threads behind a shared
/// reference.
#[derive(Debug, Clone)]
pub struct GoveeClient {
    api_key: String,
    base_url: String,
    client: Client,
}

impl GoveeClient {
    /// Creates a client with the key from the `api_key` file in the
    /// working directory.
    pub fn new() -> Result<Self, GoveeError> {
        Self::from_key_file(DEFAULT_KEY_FILE)
    }

    /// Creates a client with the key loaded from an explicit file path.
    pub fn from_key_file<P: AsRef<Path>>(path: P) -> Result<Self, GoveeError> {
        let api_key = credentials::load_api_key(path)?;
        Self::with_api_key(api_key)
    }

    /// Creates a client with an already-loaded key, pointed at the
    /// production endpoint.
    pub fn with_api_key<K: Into<String>>(api_key: K) -> Result<Self, GoveeError> {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Creates a client pointed at an arbitrary base URL. Lets tests swap
    /// in a local server instead of the vendor endpoint.
    pub fn with_base_url<K: Into<String>, U: Into<String>>(
        api_key: K,
        base_url: U,
    ) -> Result<Self, GoveeError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(GoveeClient {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client,
        })
    }

    /// Fetches the account's controllable devices.
    ///
    /// Returns an empty vector when the account has no controllable
    /// devices; a non-200 answer is [`GoveeError::Discovery`], so "no
    /// devices" and "discovery failed" cannot be conflated. Records with
    /// `controllable = false` are dropped without surfacing to the
    /// caller, in their original relative order.
    pub fn list_devices(&self) -> Result<Vec<Device>, GoveeError> {
        let url = format!("{}{}", self.base_url, DEVICE_LIST);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(GoveeError::Discovery { status });
        }

        let body = response.text()?;
        let parsed: DeviceListResponse = serde_json::from_str(&body)?;
        Ok(collect_controllable(parsed.data.devices))
    }

    /// Powers the device on.
    pub fn turn_on(&self, device: &Device) -> Result<(), GoveeError> {
        self.send_command(device, Command::Turn(PowerState::On))
    }

    /// Powers the device off.
    pub fn turn_off(&self, device: &Device) -> Result<(), GoveeError> {
        self.send_command(device, Command::Turn(PowerState::Off))
    }

    /// Sets the device color. The channel type makes 0..=255 the only
    /// representable range.
    pub fn set_color(&self, device: &Device, color: Rgb) -> Result<(), GoveeError> {
        self.send_command(device, Command::Color(color))
    }

    /// Sets the device brightness. The vendor documents 0..=100 but is
    /// left as the sole validator; values above 100 are sent as-is.
    pub fn set_brightness(&self, device: &Device, brightness: u8) -> Result<(), GoveeError> {
        self.send_command(device, Command::Brightness(brightness))
    }

    /// Fire-and-forget PUT to the control endpoint. The response status
    /// and body are not inspected; only transport-level failures surface.
    fn send_command(&self, device: &Device, cmd: Command) -> Result<(), GoveeError> {
        let url = format!("{}{}", self.base_url, CONTROL);
        let request = ControlRequest {
            device: &device.mac_address,
            model: &device.model,
            cmd,
        };
        debug!("PUT {} for device {}", url, device.mac_address);
        self.client
            .put(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()?;
        Ok(())
    }
}

/// Power state of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    On,
    Off,
}

/// An RGB color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// One controllable fixture, as reported by the discovery endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    /// Unique hardware identifier; primary key on every command request.
    pub mac_address: String,
    /// Vendor model code, required alongside the MAC on every command.
    pub model: String,
    /// Human-readable label.
    pub device_name: String,
    /// Whether the vendor API can report this device's live state.
    /// Informational only.
    pub retrievable: bool,
    /// Command names the device accepts, as declared by the vendor. Not
    /// enforced before issuing commands.
    pub supported_commands: Vec<String>,

    /// Locally cached power state. The endpoints used here never report
    /// state back, so this stays `None`.
    pub state: Option<PowerState>,
    /// Locally cached color. Never populated, see `state`.
    pub color: Option<Rgb>,
    /// Locally cached brightness. Never populated, see `state`.
    pub brightness: Option<u8>,
}

impl Device {
    fn from_record(record: DeviceRecord) -> Self {
        Device {
            mac_address: record.device,
            model: record.model,
            device_name: record.device_name,
            retrievable: record.retrievable,
            supported_commands: record.support_cmds,
            state: None,
            color: None,
            brightness: None,
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n Mac Address: {}\n Model: {}\n Retrievable: {}\n Commands: {:?}",
            self.device_name, self.mac_address, self.model, self.retrievable, self.supported_commands
        )
    }
}

/// Raw device record inside the discovery response.
#[derive(Debug, Clone, Deserialize)]
struct DeviceRecord {
    device: String,
    model: String,
    #[serde(rename = "deviceName")]
    device_name: String,
    retrievable: bool,
    #[serde(rename = "supportCmds")]
    support_cmds: Vec<String>,
    controllable: bool,
}

#[derive(Debug, Deserialize)]
struct DeviceListResponse {
    data: DeviceListData,
}

#[derive(Debug, Deserialize)]
struct DeviceListData {
    devices: Vec<DeviceRecord>,
}

/// Command payload, serialized as `{"name": ..., "value": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "name", content = "value", rename_all = "lowercase")]
enum Command {
    Turn(PowerState),
    Color(Rgb),
    Brightness(u8),
}

/// Body of a control request.
#[derive(Debug, Serialize)]
struct ControlRequest<'a> {
    device: &'a str,
    model: &'a str,
    cmd: Command,
}

fn collect_controllable(records: Vec<DeviceRecord>) -> Vec<Device> {
    records
        .into_iter()
        .filter(|record| {
            if !record.controllable {
                debug!(
                    "dropping non-controllable device {} ({})",
                    record.device, record.model
                );
            }
            record.controllable
        })
        .map(Device::from_record)
        .collect()
}
