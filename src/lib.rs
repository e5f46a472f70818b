//! Client library for the Cisco RISPort70 real-time information service.
//!
//! RISPort70 is the SOAP API a CUCM cluster exposes for querying device
//! and CTI registration state. This crate builds the fixed SOAP 1.1
//! envelope for each of the five remote operations, sends it over HTTPS
//! with basic authentication, and returns the response body as a generic
//! JSON tree with the server's namespace prefix stripped.
//!
//! ```no_run
//! use risport70::{RisPortClient, RisPortConfig};
//!
//! # async fn run() -> Result<(), risport70::Error> {
//! let client = RisPortClient::new(RisPortConfig::new("cucm01", "admin", "secret"))?;
//! let phone = client.get_phone_by_name("SEPEC1D8B2B6DEC").await?;
//! println!("{phone}");
//! # Ok(())
//! # }
//! ```
//!
//! The client applies no schema to responses and never retries: transport
//! failures and vendor-side SOAP faults are surfaced to the caller as
//! [`Error`] values.

pub mod config;
pub mod error;
pub mod risport;
pub mod soap;

pub use config::RisPortConfig;
pub use error::Error;
pub use risport::{
    AppItemKind, CmSelectionCriteria, CtiItemStatus, CtiMgrClass, CtiSelectionCriteria,
    DeviceClass, DownloadStatus, Protocol, RisPortClient, SelectAppBy, SelectBy, SipStatus,
    Status, MODEL_ANY,
};
