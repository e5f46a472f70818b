use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::Value;

use crate::config::RisPortConfig;
use crate::error::Error;
use crate::soap;

/// Client for the RISPort70 service on one CUCM publisher.
///
/// Holds only immutable state (configuration, the derived auth token and
/// service URL, and a shared `reqwest::Client`), so clones are cheap and
/// concurrent calls from many tasks are safe. Each operation is an
/// independent request/response exchange; the client imposes no queue,
/// concurrency limit, or retry policy of its own.
#[derive(Clone)]
pub struct RisPortClient {
    config: RisPortConfig,
    http: reqwest::Client,
    url: String,
    auth_token: String,
}

impl RisPortClient {
    /// Build a client from the given configuration.
    ///
    /// The basic-auth token and service URL are derived here, once; they
    /// are never re-computed per call.
    pub fn new(config: RisPortConfig) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms));
        if config.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder.build()?;

        let auth_token = BASE64.encode(format!("{}:{}", config.username, config.password));
        let url = config.service_url();

        Ok(Self {
            config,
            http,
            url,
            auth_token,
        })
    }

    pub fn config(&self) -> &RisPortConfig {
        &self.config
    }

    /// The resolved service endpoint.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The base64 basic-auth token, without the `Basic ` prefix.
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    /// Shared call pipeline for every RISPort70 operation.
    ///
    /// Wraps the action fragment in the fixed envelope, POSTs it, parses
    /// the response into a JSON tree, strips the configured namespace
    /// prefix and returns the `soapenv:Body` subtree. A SOAP fault in the
    /// body is surfaced as `Error::SoapFault` instead of a value.
    pub(crate) async fn generic_ris_call(
        &self,
        action: &str,
        soap_body: &str,
    ) -> Result<Value, Error> {
        let envelope = soap::wrap_envelope(soap_body);

        tracing::debug!("POST {} ({})", self.url, action);
        tracing::trace!("SOAP request: {}", envelope);

        let mut request = self
            .http
            .post(&self.url)
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("Authorization", format!("Basic {}", self.auth_token));
        if self.config.send_soap_action {
            request = request.header("SOAPAction", action);
        }

        let response = request.body(envelope).send().await?;

        let status = response.status();
        let text = response.text().await?;

        tracing::trace!("SOAP response ({}): {}", status, text);

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        let tree = soap::xml_to_json(&text)?;
        let tree = soap::strip_namespace(&tree, &self.config.strip_prefix)?;
        let body = soap::envelope_body(&tree)?;
        soap::check_fault(&body)?;

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_token_derivation() {
        let client = RisPortClient::new(RisPortConfig::new("cucm01", "admin", "secret")).unwrap();
        // base64("admin:secret")
        assert_eq!(client.auth_token(), "YWRtaW46c2VjcmV0");
        // Derived once; repeated reads see the same value.
        assert_eq!(client.auth_token(), client.auth_token());
    }

    #[test]
    fn test_default_service_url() {
        let client = RisPortClient::new(RisPortConfig::new("cucm01", "admin", "secret")).unwrap();
        assert_eq!(
            client.url(),
            "https://cucm01:8443/realtimeservice2/services/RISService70"
        );
    }
}
