//! CM device selection operations: `selectCmDevice`, `selectCmDeviceExt`
//! and the phone-by-name convenience wrappers.

use serde_json::Value;

use crate::error::Error;
use crate::risport::client::RisPortClient;
use crate::risport::types::CmSelectionCriteria;
use crate::soap::{escape_value, render_item_list};

impl RisPortClient {
    /// Query device registration state with fully parameterized criteria.
    pub async fn select_cm_device(&self, criteria: &CmSelectionCriteria) -> Result<Value, Error> {
        let body = render_cm_device_body("selectCmDevice", criteria);
        self.generic_ris_call("selectCmDevice", &body).await
    }

    /// Same criteria shape as [`select_cm_device`](Self::select_cm_device),
    /// but the extended action returns richer per-device data.
    pub async fn select_cm_device_ext(
        &self,
        criteria: &CmSelectionCriteria,
    ) -> Result<Value, Error> {
        let body = render_cm_device_body("selectCmDeviceExt", criteria);
        self.generic_ris_call("selectCmDeviceExt", &body).await
    }

    /// Look up a single device by directory name.
    ///
    /// Issues a `selectCmDeviceExt` with the documented fixed criteria:
    /// MaxReturnedDevices=10000, DeviceClass=Any, Model=255, Status=Any,
    /// empty NodeName, SelectBy=Name, Protocol=Any, DownloadStatus=Any.
    pub async fn get_phone_by_name(&self, name: &str) -> Result<Value, Error> {
        let criteria = CmSelectionCriteria {
            items: vec![name.to_string()],
            ..Default::default()
        };
        self.select_cm_device_ext(&criteria).await
    }

    /// Same as [`get_phone_by_name`](Self::get_phone_by_name) with one
    /// selection item per name, in input order.
    pub async fn get_phones_by_name(&self, names: &[String]) -> Result<Value, Error> {
        let criteria = CmSelectionCriteria {
            items: names.to_vec(),
            ..Default::default()
        };
        self.select_cm_device_ext(&criteria).await
    }
}

/// Render the action fragment for `selectCmDevice`/`selectCmDeviceExt`.
///
/// Criteria fields appear in the WSDL sequence order; the leading empty
/// `StateInfo` element requests full (non-delta) results.
pub(crate) fn render_cm_device_body(action: &str, criteria: &CmSelectionCriteria) -> String {
    format!(
        "<soap:{action}>\
         <soap:StateInfo></soap:StateInfo>\
         <soap:CmSelectionCriteria>\
         <soap:MaxReturnedDevices>{max_returned}</soap:MaxReturnedDevices>\
         <soap:DeviceClass>{device_class}</soap:DeviceClass>\
         <soap:Model>{model}</soap:Model>\
         <soap:Status>{status}</soap:Status>\
         <soap:NodeName>{node_name}</soap:NodeName>\
         <soap:SelectBy>{select_by}</soap:SelectBy>\
         <soap:SelectItems>{select_items}</soap:SelectItems>\
         <soap:Protocol>{protocol}</soap:Protocol>\
         <soap:DownloadStatus>{download_status}</soap:DownloadStatus>\
         </soap:CmSelectionCriteria>\
         </soap:{action}>",
        max_returned = criteria.max_returned_devices,
        device_class = criteria.device_class,
        model = escape_value(&criteria.model),
        status = criteria.status,
        node_name = escape_value(&criteria.node_name),
        select_by = criteria.select_by,
        select_items = render_item_list("Item", &criteria.items),
        protocol = criteria.protocol,
        download_status = criteria.download_status,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_position(body: &str, tag: &str) -> usize {
        body.find(&format!("<soap:{tag}>"))
            .unwrap_or_else(|| panic!("missing <soap:{tag}> in {body}"))
    }

    #[test]
    fn test_phone_by_name_fixed_defaults() {
        let criteria = CmSelectionCriteria {
            items: vec!["SEPEC1D8B2B6DEC".to_string()],
            ..Default::default()
        };
        let body = render_cm_device_body("selectCmDeviceExt", &criteria);

        assert!(body.starts_with("<soap:selectCmDeviceExt>"));
        assert!(body.ends_with("</soap:selectCmDeviceExt>"));
        assert!(body.contains("<soap:StateInfo></soap:StateInfo>"));
        assert!(body.contains("<soap:MaxReturnedDevices>10000</soap:MaxReturnedDevices>"));
        assert!(body.contains("<soap:DeviceClass>Any</soap:DeviceClass>"));
        assert!(body.contains("<soap:Model>255</soap:Model>"));
        assert!(body.contains("<soap:Status>Any</soap:Status>"));
        assert!(body.contains("<soap:NodeName></soap:NodeName>"));
        assert!(body.contains("<soap:SelectBy>Name</soap:SelectBy>"));
        assert!(body.contains(
            "<soap:SelectItems>\
             <soap:item><soap:Item>SEPEC1D8B2B6DEC</soap:Item></soap:item>\
             </soap:SelectItems>"
        ));
        assert!(body.contains("<soap:Protocol>Any</soap:Protocol>"));
        assert!(body.contains("<soap:DownloadStatus>Any</soap:DownloadStatus>"));
    }

    #[test]
    fn test_wsdl_sequence_order() {
        let body = render_cm_device_body("selectCmDevice", &CmSelectionCriteria::default());
        let order = [
            "StateInfo",
            "CmSelectionCriteria",
            "MaxReturnedDevices",
            "DeviceClass",
            "Model",
            "Status",
            "NodeName",
            "SelectBy",
            "SelectItems",
            "Protocol",
            "DownloadStatus",
        ];
        let positions: Vec<usize> = order.iter().map(|tag| field_position(&body, tag)).collect();
        assert!(
            positions.windows(2).all(|pair| pair[0] < pair[1]),
            "fields out of order in {body}"
        );
    }

    #[test]
    fn test_multiple_items_in_input_order() {
        let criteria = CmSelectionCriteria {
            items: vec!["A".to_string(), "B".to_string()],
            ..Default::default()
        };
        let body = render_cm_device_body("selectCmDeviceExt", &criteria);

        assert!(body.contains(
            "<soap:SelectItems>\
             <soap:item><soap:Item>A</soap:Item></soap:item>\
             <soap:item><soap:Item>B</soap:Item></soap:item>\
             </soap:SelectItems>"
        ));
        assert_eq!(body.matches("<soap:item>").count(), 2);
    }

    #[test]
    fn test_zero_items_render_zero_blocks() {
        let body = render_cm_device_body("selectCmDevice", &CmSelectionCriteria::default());
        assert!(body.contains("<soap:SelectItems></soap:SelectItems>"));
        assert_eq!(body.matches("<soap:item>").count(), 0);
    }

    #[test]
    fn test_values_are_escaped() {
        let criteria = CmSelectionCriteria {
            node_name: "node<1>".to_string(),
            items: vec!["A&B".to_string()],
            ..Default::default()
        };
        let body = render_cm_device_body("selectCmDevice", &criteria);
        assert!(body.contains("<soap:NodeName>node&lt;1&gt;</soap:NodeName>"));
        assert!(body.contains("<soap:Item>A&amp;B</soap:Item>"));
    }
}
