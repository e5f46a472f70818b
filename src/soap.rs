//! SOAP envelope construction and response parsing.
//!
//! Responses are converted into a generic `serde_json::Value` tree rather
//! than typed structs: RISPort70 result shapes vary per operation and per
//! CUCM release, and the vendor owns the schema.

use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::{Map, Value};

use crate::error::Error;

/// SOAP 1.1 envelope namespace.
pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
/// Cisco AST namespace used by every RISPort70 action element.
pub const CISCO_AST_NS: &str = "http://schemas.cisco.com/ast/soap";

/// Wrap an action fragment in the fixed SOAP 1.1 envelope.
///
/// Declares exactly two namespaces: the SOAP envelope namespace and the
/// vendor namespace aliased as `soap`, which the fragments use.
pub fn wrap_envelope(soap_body: &str) -> String {
    format!(
        "<soapenv:Envelope xmlns:soapenv=\"{SOAP_ENV_NS}\" xmlns:soap=\"{CISCO_AST_NS}\">\n \
         <soapenv:Header/>\n\
         <soapenv:Body>{soap_body}</soapenv:Body>\n\
         </soapenv:Envelope>"
    )
}

/// Element-escape a caller-supplied value before it is interpolated into
/// a request fragment.
pub fn escape_value(value: &str) -> String {
    quick_xml::escape::escape(value).into_owned()
}

/// Render a list-valued criteria field: one `<soap:item>` block per
/// entry, in input order; zero entries render nothing.
pub(crate) fn render_item_list(tag: &str, values: &[String]) -> String {
    values
        .iter()
        .map(|value| {
            format!(
                "<soap:item><soap:{tag}>{}</soap:{tag}></soap:item>",
                escape_value(value)
            )
        })
        .collect()
}

struct Element {
    name: String,
    children: Map<String, Value>,
    text: String,
}

impl Element {
    fn into_value(self) -> Value {
        if self.children.is_empty() {
            Value::String(self.text)
        } else if self.text.is_empty() {
            Value::Object(self.children)
        } else {
            // Mixed content: text next to children/attributes lands under
            // "$t", mirroring the xml2json object convention.
            let mut children = self.children;
            children.insert("$t".to_string(), Value::String(self.text));
            Value::Object(children)
        }
    }
}

/// Insert a child value, turning repeated siblings into an ordered array.
fn insert_child(map: &mut Map<String, Value>, name: String, value: Value) {
    match map.get_mut(&name) {
        Some(Value::Array(seq)) => seq.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            map.insert(name, value);
        }
    }
}

/// Convert raw XML into a generic JSON tree.
///
/// Object keys mirror element names (namespace prefix included), repeated
/// siblings become arrays, attributes merge into the element object, and
/// a childless element collapses to its text content.
pub fn xml_to_json(xml: &str) -> Result<Value, Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut root = Map::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let mut element = Element {
                    name: String::from_utf8_lossy(e.name().as_ref()).to_string(),
                    children: Map::new(),
                    text: String::new(),
                };
                for attr in e.attributes().flatten() {
                    let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
                    let value = String::from_utf8_lossy(&attr.value).to_string();
                    element.children.insert(key, Value::String(value));
                }
                stack.push(element);
            }
            Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                let mut children = Map::new();
                for attr in e.attributes().flatten() {
                    let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
                    let value = String::from_utf8_lossy(&attr.value).to_string();
                    children.insert(key, Value::String(value));
                }
                let value = if children.is_empty() {
                    Value::String(String::new())
                } else {
                    Value::Object(children)
                };
                let parent = match stack.last_mut() {
                    Some(parent) => &mut parent.children,
                    None => &mut root,
                };
                insert_child(parent, name, value);
            }
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map_err(|e| Error::Xml(format!("text unescape error: {e}")))?;
                if let Some(element) = stack.last_mut() {
                    element.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(element) = stack.last_mut() {
                    element
                        .text
                        .push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| Error::Xml("unbalanced closing tag".into()))?;
                let name = element.name.clone();
                let value = element.into_value();
                let parent = match stack.last_mut() {
                    Some(parent) => &mut parent.children,
                    None => &mut root,
                };
                insert_child(parent, name, value);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(format!("XML parsing error: {e}"))),
            _ => {}
        }
        buf.clear();
    }

    Ok(Value::Object(root))
}

/// Remove a namespace prefix from the parsed tree.
///
/// Lexical, not structural: the tree is serialized to JSON text, every
/// occurrence of the prefix is removed, and the text is reparsed. A
/// prefix-shaped substring inside element text content is therefore also
/// stripped. An empty prefix is a no-op.
pub fn strip_namespace(tree: &Value, prefix: &str) -> Result<Value, Error> {
    if prefix.is_empty() {
        return Ok(tree.clone());
    }
    let text = serde_json::to_string(tree)?;
    Ok(serde_json::from_str(&text.replace(prefix, ""))?)
}

/// Extract the `soapenv:Envelope` → `soapenv:Body` subtree.
pub fn envelope_body(tree: &Value) -> Result<Value, Error> {
    tree.get("soapenv:Envelope")
        .and_then(|envelope| envelope.get("soapenv:Body"))
        .cloned()
        .ok_or_else(|| Error::InvalidEnvelope("missing soapenv:Envelope/soapenv:Body".into()))
}

/// Surface a SOAP fault in the body as a typed error.
pub fn check_fault(body: &Value) -> Result<(), Error> {
    let map = match body {
        Value::Object(map) => map,
        _ => return Ok(()),
    };
    for (name, value) in map {
        if name == "Fault" || name.ends_with(":Fault") {
            let fault_code = value
                .get("faultcode")
                .and_then(Value::as_str)
                .unwrap_or("Unknown")
                .to_string();
            let fault_string = value
                .get("faultstring")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            return Err(Error::SoapFault {
                fault_code,
                fault_string,
            });
        }
    }
    Ok(())
}

/// Legacy single-path extraction helper.
///
/// Drills the full tree down to Envelope → Body → `<response_tag>` →
/// `return` → `<field>`, yielding `None` when any segment is absent. Not
/// used by the operation methods, which return the whole body subtree.
pub fn trim_json<'a>(tree: &'a Value, response_tag: &str, field: &str) -> Option<&'a Value> {
    tree.get("soapenv:Envelope")?
        .get("soapenv:Body")?
        .get(response_tag)?
        .get("return")?
        .get(field)
}
