//! HTTP transport for form submissions

use crate::domain::models::FormPayload;
use crate::shared::errors::TransportError;

/// Sends one form POST and returns the body of a 2xx response.
/// Non-2xx responses come back as [`TransportError::Http`] with their body.
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn post(&self, endpoint: &str, payload: &FormPayload) -> Result<String, TransportError>;
}

/// Browser fetch through gloo-net
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct FetchTransport;

#[cfg(target_arch = "wasm32")]
impl FetchTransport {
    fn build_request(
        endpoint: &str,
        payload: &FormPayload,
    ) -> Result<gloo_net::http::Request, TransportError> {
        use crate::domain::models::BodyEncoding;
        use gloo_net::http::Request;

        let builder = Request::post(endpoint).header("Accept", "application/json");
        let request = match payload.encoding {
            BodyEncoding::UrlEncoded => builder
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(payload.to_query_string()),
            // Content-Type left to the browser so it can add the boundary
            BodyEncoding::Multipart => {
                let form_data = web_sys::FormData::new()
                    .map_err(|e| TransportError::Network(format!("FormData unavailable: {:?}", e)))?;
                for (name, value) in &payload.fields {
                    form_data.append_with_str(name, value).map_err(|e| {
                        TransportError::Network(format!("Failed to append {}: {:?}", name, e))
                    })?;
                }
                builder.body(form_data)
            }
        };
        request.map_err(|e| TransportError::Network(e.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl FormTransport for FetchTransport {
    async fn post(&self, endpoint: &str, payload: &FormPayload) -> Result<String, TransportError> {
        let request = Self::build_request(endpoint, payload)?;
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        if !response.ok() {
            return Err(TransportError::Http { status, body });
        }
        Ok(body)
    }
}

/// Server-side stub: forms are only submitted from the browser
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct UnavailableTransport;

#[cfg(not(target_arch = "wasm32"))]
impl FormTransport for UnavailableTransport {
    async fn post(&self, endpoint: &str, _payload: &FormPayload) -> Result<String, TransportError> {
        Err(TransportError::Network(format!(
            "Form submission to {} is only available in the browser",
            endpoint
        )))
    }
}

#[cfg(target_arch = "wasm32")]
pub type PlatformTransport = FetchTransport;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTransport = UnavailableTransport;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_server_transport_refuses() {
        let payload = FormPayload::multipart().field("vendor_name", "Acme");
        let err = block_on(UnavailableTransport.post("/vendor/new-vendor", &payload)).unwrap_err();
        assert!(matches!(err, TransportError::Network(msg) if msg.contains("/vendor/new-vendor")));
    }
}
