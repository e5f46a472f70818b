//! Selection criteria and the vendor's enumerated value tables.
//!
//! The string sets mirror the RISPort70 API reference verbatim; values
//! are passed through to the wire, never computed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wildcard for the device model criteria field.
///
/// The full vendor model table runs to hundreds of entries, so `Model`
/// stays a free string; `255` matches any model.
pub const MODEL_ANY: &str = "255";

macro_rules! vendor_enum {
    ($(#[$doc:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vendor_enum! {
    /// Device class filter for CM device selection.
    DeviceClass {
        Any => "Any",
        Phone => "Phone",
        Gateway => "Gateway",
        H323 => "H323",
        Cti => "Cti",
        VoiceMail => "VoiceMail",
        MediaResources => "MediaResources",
        HuntList => "HuntList",
        SipTrunk => "SIPTrunk",
        Unknown => "Unknown",
    }
}

vendor_enum! {
    /// Device registration status filter.
    Status {
        Any => "Any",
        Registered => "Registered",
        UnRegistered => "UnRegistered",
        Rejected => "Rejected",
        PartiallyRegistered => "PartiallyRegistered",
        Unknown => "Unknown",
    }
}

vendor_enum! {
    /// Key the selection items are matched against.
    SelectBy {
        Name => "Name",
        Ipv4Address => "IPV4Address",
        Ipv6Address => "IPV6Address",
        DirNumber => "DirNumber",
        Description => "Description",
    }
}

vendor_enum! {
    /// SIP trunk service states reported by the server.
    SipStatus {
        InService => "InService",
        OutOfService => "OutOfService",
        PartialService => "PartialService",
        Unknown => "Unknown",
    }
}

vendor_enum! {
    /// Device protocol filter.
    Protocol {
        Any => "Any",
        Sccp => "SCCP",
        Sip => "SIP",
        Unknown => "Unknown",
    }
}

vendor_enum! {
    /// Firmware download status filter.
    DownloadStatus {
        Any => "Any",
        Upgrading => "Upgrading",
        Successful => "Successful",
        Failed => "Failed",
        Unknown => "Unknown",
    }
}

vendor_enum! {
    /// CTI manager object class.
    CtiMgrClass {
        Provider => "Provider",
        Device => "Device",
        Line => "Line",
    }
}

vendor_enum! {
    /// CTI item connection status filter.
    CtiItemStatus {
        Any => "Any",
        Open => "Open",
        Closed => "Closed",
        OpenFailed => "OpenFailed",
        Unknown => "Unknown",
    }
}

vendor_enum! {
    /// Key the CTI application items are matched against.
    SelectAppBy {
        AppId => "AppId",
        AppIpv4Address => "AppIPV4Address",
        AppIpv6Address => "AppIPV6Address",
        UserId => "UserId",
    }
}

vendor_enum! {
    /// Kinds of per-application data a CTI query can name.
    AppItemKind {
        AppName => "AppName",
        AppIpAddress => "AppIPAddress",
        AppInstance => "AppInstance",
    }
}

/// Criteria for `selectCmDevice` and `selectCmDeviceExt`.
///
/// Field order here matches the WSDL sequence order of
/// `CmSelectionCriteria`; the default value equals the fixed criteria the
/// phone-by-name wrappers use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmSelectionCriteria {
    pub max_returned_devices: u32,
    pub device_class: DeviceClass,
    pub model: String,
    pub status: Status,
    pub node_name: String,
    pub select_by: SelectBy,
    pub items: Vec<String>,
    pub protocol: Protocol,
    pub download_status: DownloadStatus,
}

impl Default for CmSelectionCriteria {
    fn default() -> Self {
        Self {
            max_returned_devices: 10000,
            device_class: DeviceClass::Any,
            model: MODEL_ANY.to_string(),
            status: Status::Any,
            node_name: String::new(),
            select_by: SelectBy::Name,
            items: Vec::new(),
            protocol: Protocol::Any,
            download_status: DownloadStatus::Any,
        }
    }
}

/// Criteria for `selectCtiItem`. The vendor documents no defaults for
/// CTI selection, so every field is explicit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtiSelectionCriteria {
    pub max_returned_items: u32,
    pub cti_mgr_class: CtiMgrClass,
    pub status: CtiItemStatus,
    pub node_name: String,
    pub select_app_by: SelectAppBy,
    pub app_items: Vec<String>,
    pub dev_names: Vec<String>,
    pub dir_numbers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(DeviceClass::SipTrunk.as_str(), "SIPTrunk");
        assert_eq!(SelectBy::Ipv4Address.as_str(), "IPV4Address");
        assert_eq!(Protocol::Sccp.as_str(), "SCCP");
        assert_eq!(CtiItemStatus::OpenFailed.as_str(), "OpenFailed");
        assert_eq!(SelectAppBy::AppIpv6Address.as_str(), "AppIPV6Address");
        assert_eq!(AppItemKind::AppIpAddress.to_string(), "AppIPAddress");
        assert_eq!(SipStatus::PartialService.as_str(), "PartialService");
    }

    #[test]
    fn test_cm_criteria_defaults() {
        let criteria = CmSelectionCriteria::default();
        assert_eq!(criteria.max_returned_devices, 10000);
        assert_eq!(criteria.device_class, DeviceClass::Any);
        assert_eq!(criteria.model, "255");
        assert_eq!(criteria.status, Status::Any);
        assert_eq!(criteria.node_name, "");
        assert_eq!(criteria.select_by, SelectBy::Name);
        assert!(criteria.items.is_empty());
        assert_eq!(criteria.protocol, Protocol::Any);
        assert_eq!(criteria.download_status, DownloadStatus::Any);
    }
}
