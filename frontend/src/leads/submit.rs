use super::{LeadForm, SubmitError};
use crate::config;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::{FormData, RequestCredentials};

pub const SIMULATED_DELAY_MS: u32 = 2_000;

/// Where a completed registration goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeadSubmitter {
    /// No intake service: waits and reports success.
    Simulated { delay_ms: u32 },
    /// Multipart POST to an intake endpoint. One attempt; retrying is the
    /// user's call.
    Http { endpoint: String },
}

impl Default for LeadSubmitter {
    fn default() -> Self {
        LeadSubmitter::Simulated {
            delay_ms: SIMULATED_DELAY_MS,
        }
    }
}

impl LeadSubmitter {
    pub fn from_config() -> Self {
        match config::lead_endpoint() {
            Some(endpoint) => LeadSubmitter::Http {
                endpoint: endpoint.to_string(),
            },
            None => LeadSubmitter::default(),
        }
    }

    pub async fn submit(&self, lead: &LeadForm, attachment: Option<&web_sys::File>) -> Result<(), SubmitError> {
        gloo_console::log!(
            "Submitting lead:",
            &lead.company_name,
            attachment.map(|f| f.name()).unwrap_or_default()
        );
        match self {
            LeadSubmitter::Simulated { delay_ms } => {
                TimeoutFuture::new(*delay_ms).await;
                log::info!("lead accepted by simulated submitter");
                Ok(())
            }
            LeadSubmitter::Http { endpoint } => {
                let body = multipart_body(lead, attachment)?;
                let response = Request::post(endpoint)
                    .credentials(RequestCredentials::SameOrigin)
                    .body(body)
                    .send()
                    .await
                    .map_err(|e| {
                        log::error!("lead submission failed: {}", e);
                        SubmitError::Network(e.to_string())
                    })?;
                if response.ok() {
                    log::info!("lead accepted by {}", endpoint);
                    Ok(())
                } else {
                    log::warn!("lead endpoint {} answered {}", endpoint, response.status());
                    Err(SubmitError::Rejected {
                        status: response.status(),
                    })
                }
            }
        }
    }
}

fn multipart_body(lead: &LeadForm, attachment: Option<&web_sys::File>) -> Result<FormData, SubmitError> {
    let encode = |e: wasm_bindgen::JsValue| SubmitError::Encode(format!("{:?}", e));
    let form = FormData::new().map_err(encode)?;
    let fields = serde_json::to_value(lead).map_err(|e| SubmitError::Encode(e.to_string()))?;
    if let serde_json::Value::Object(fields) = fields {
        for (name, value) in fields {
            if let serde_json::Value::String(value) = value {
                form.append_with_str(&name, &value).map_err(encode)?;
            }
        }
    }
    if let Some(file) = attachment {
        form.append_with_blob_and_filename("document", file, &file.name())
            .map_err(encode)?;
    }
    Ok(form)
}
