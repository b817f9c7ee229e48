//! # Govee Control Library
//!
//! `govee-control` is a thin, typed Rust client for the Govee developer
//! cloud API. It discovers the controllable devices registered to an
//! account and issues imperative commands (power, color, brightness) to
//! individual devices.
//!
//! ## Features
//!
//! - Device discovery over the cloud device-list endpoint
//! - Power, color, and brightness commands per device
//! - API-key loading from a local `api_key` file
//! - Typed errors that keep "discovery failed" distinct from
//!   "zero devices" and transport failures distinct from vendor
//!   rejections
//!
//! All I/O is synchronous and blocking; every operation builds and fires
//! its own one-shot request. Command responses are deliberately not
//! inspected, matching the vendor API's fire-and-forget usage, so the
//! library never caches live device state.
//!
//! ## Example
//!
//! ```no_run
//! use govee_control::control_interface::GoveeClient;
//! use govee_control::error::GoveeError;
//!
//! fn main() -> Result<(), GoveeError> {
//!     // Reads the key from ./api_key
//!     let client = GoveeClient::new()?;
//!
//!     for device in client.list_devices()? {
//!         println!("{device}");
//!         client.turn_on(&device)?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Disclaimer
//!
//! This project is not affiliated with, authorized by, endorsed by, or in
//! any way officially connected with Govee or its affiliates. The official
//! Govee website can be found at [https://www.govee.com](https://www.govee.com).
//!
//! ## License
//!
//! This project is dual-licensed under the MIT License and the Apache
//! License, Version 2.0. You may choose to use either license, depending
//! on your project needs.

// The `control_interface` module provides the client for the Govee cloud
// API: device discovery plus the per-device power, color, and brightness
// commands.
//
// Example usage:
//
// ```
// use govee_control::control_interface::{GoveeClient, Rgb};
//
// let client = GoveeClient::new().unwrap();
// let devices = client.list_devices().unwrap();
// client.set_color(&devices[0], Rgb::new(255, 0, 0)).unwrap();
// ```
pub mod control_interface;

// The `error` module defines the crate-wide error type. Credential,
// transport, discovery, and response-shape failures are separate
// variants so callers can tell them apart.
pub mod error;

// The `util` module holds shared helpers, currently the API-key loader.
pub mod util;
