//! CTI manager item selection: `selectCtiItem`.

use serde_json::Value;

use crate::error::Error;
use crate::risport::client::RisPortClient;
use crate::risport::types::CtiSelectionCriteria;
use crate::soap::{escape_value, render_item_list};

impl RisPortClient {
    /// Query CTI manager connection state for providers, devices or lines.
    pub async fn select_cti_item(&self, criteria: &CtiSelectionCriteria) -> Result<Value, Error> {
        let body = render_cti_item_body(criteria);
        self.generic_ris_call("selectCtiItem", &body).await
    }
}

/// Render the `selectCtiItem` action fragment in WSDL sequence order.
pub(crate) fn render_cti_item_body(criteria: &CtiSelectionCriteria) -> String {
    format!(
        "<soap:selectCtiItem>\
         <soap:StateInfo></soap:StateInfo>\
         <soap:CtiSelectionCriteria>\
         <soap:MaxReturnedItems>{max_returned}</soap:MaxReturnedItems>\
         <soap:CtiMgrClass>{cti_mgr_class}</soap:CtiMgrClass>\
         <soap:Status>{status}</soap:Status>\
         <soap:NodeName>{node_name}</soap:NodeName>\
         <soap:SelectAppBy>{select_app_by}</soap:SelectAppBy>\
         <soap:AppItems>{app_items}</soap:AppItems>\
         <soap:DevNames>{dev_names}</soap:DevNames>\
         <soap:DirNumbers>{dir_numbers}</soap:DirNumbers>\
         </soap:CtiSelectionCriteria>\
         </soap:selectCtiItem>",
        max_returned = criteria.max_returned_items,
        cti_mgr_class = criteria.cti_mgr_class,
        status = criteria.status,
        node_name = escape_value(&criteria.node_name),
        select_app_by = criteria.select_app_by,
        app_items = render_item_list("AppItem", &criteria.app_items),
        dev_names = render_item_list("DevName", &criteria.dev_names),
        dir_numbers = render_item_list("DirNumber", &criteria.dir_numbers),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risport::types::{CtiItemStatus, CtiMgrClass, SelectAppBy};

    fn sample_criteria() -> CtiSelectionCriteria {
        CtiSelectionCriteria {
            max_returned_items: 200,
            cti_mgr_class: CtiMgrClass::Device,
            status: CtiItemStatus::Open,
            node_name: String::new(),
            select_app_by: SelectAppBy::AppId,
            app_items: vec!["ctiapp".to_string()],
            dev_names: vec!["SEP001122334455".to_string(), "CTIRP_1".to_string()],
            dir_numbers: Vec::new(),
        }
    }

    #[test]
    fn test_render_cti_item_body() {
        let body = render_cti_item_body(&sample_criteria());

        assert!(body.starts_with("<soap:selectCtiItem>"));
        assert!(body.contains("<soap:StateInfo></soap:StateInfo>"));
        assert!(body.contains("<soap:MaxReturnedItems>200</soap:MaxReturnedItems>"));
        assert!(body.contains("<soap:CtiMgrClass>Device</soap:CtiMgrClass>"));
        assert!(body.contains("<soap:Status>Open</soap:Status>"));
        assert!(body.contains("<soap:SelectAppBy>AppId</soap:SelectAppBy>"));
        assert!(body.contains(
            "<soap:AppItems><soap:item><soap:AppItem>ctiapp</soap:AppItem></soap:item></soap:AppItems>"
        ));
        assert!(body.contains(
            "<soap:DevNames>\
             <soap:item><soap:DevName>SEP001122334455</soap:DevName></soap:item>\
             <soap:item><soap:DevName>CTIRP_1</soap:DevName></soap:item>\
             </soap:DevNames>"
        ));
        // Empty list field renders zero item blocks.
        assert!(body.contains("<soap:DirNumbers></soap:DirNumbers>"));
    }

    #[test]
    fn test_wsdl_sequence_order() {
        let body = render_cti_item_body(&sample_criteria());
        let order = [
            "StateInfo",
            "CtiSelectionCriteria",
            "MaxReturnedItems",
            "CtiMgrClass",
            "Status",
            "NodeName",
            "SelectAppBy",
            "AppItems",
            "DevNames",
            "DirNumbers",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|tag| {
                body.find(&format!("<soap:{tag}>"))
                    .unwrap_or_else(|| panic!("missing <soap:{tag}> in {body}"))
            })
            .collect();
        assert!(
            positions.windows(2).all(|pair| pair[0] < pair[1]),
            "fields out of order in {body}"
        );
    }
}
