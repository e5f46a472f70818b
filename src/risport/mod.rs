pub mod client;
pub mod cti;
pub mod device;
pub mod types;

pub use client::RisPortClient;
pub use types::{
    AppItemKind, CmSelectionCriteria, CtiItemStatus, CtiMgrClass, CtiSelectionCriteria,
    DeviceClass, DownloadStatus, Protocol, SelectAppBy, SelectBy, SipStatus, Status, MODEL_ANY,
};
