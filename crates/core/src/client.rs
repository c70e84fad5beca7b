//! Record-service endpoints for odontogram canvas data.
//!
//! The transport sits behind the [`CanvasApi`] trait so the session can be
//! driven against an in-memory fake in tests; [`HttpCanvasApi`] is the
//! production implementation over the clinic record service's JSON
//! endpoints. Authentication and routing belong to that service; this
//! module only honours its wire contract, including the CSRF token header
//! every write carries.

use crate::config::CoreConfig;
use crate::model::{
    OdontogramId, OdontogramSummary, OdontogramWorkingCopy, ToothBridge, ToothCondition,
    ToothIndicator,
};
use crate::{OdontogramError, OdontogramResult};
use async_trait::async_trait;
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Header carrying the host page's CSRF token on every write.
pub const CSRF_HEADER: &str = "X-CSRF-TOKEN";

/// One consistent fetch of an odontogram: the three collections plus the
/// service-side summary.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasSnapshot {
    pub data: OdontogramWorkingCopy,
    pub summary: OdontogramSummary,
}

/// The collaborator contract the session depends on.
#[async_trait]
pub trait CanvasApi: Send + Sync {
    /// Fetches the canonical canvas data for one odontogram.
    async fn fetch_canvas(&self, id: OdontogramId) -> OdontogramResult<CanvasSnapshot>;

    /// Persists the condition collection.
    async fn submit_conditions(
        &self,
        id: OdontogramId,
        conditions: &[ToothCondition],
    ) -> OdontogramResult<()>;

    /// Persists the bridge collection.
    async fn submit_bridges(
        &self,
        id: OdontogramId,
        bridges: &[ToothBridge],
    ) -> OdontogramResult<()>;

    /// Persists the indicator collection.
    async fn submit_indicators(
        &self,
        id: OdontogramId,
        indicators: &[ToothIndicator],
    ) -> OdontogramResult<()>;
}

#[derive(Debug, Deserialize)]
struct CanvasDataEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<OdontogramWorkingCopy>,
    #[serde(default)]
    odontogram: Option<OdontogramSummary>,
}

#[derive(Debug, Deserialize)]
struct AckEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Serialize)]
struct ConditionsBody<'a> {
    conditions: &'a [ToothCondition],
}

#[derive(Serialize)]
struct BridgesBody<'a> {
    bridges: &'a [ToothBridge],
}

#[derive(Serialize)]
struct IndicatorsBody<'a> {
    indicators: &'a [ToothIndicator],
}

/// JSON-over-HTTP implementation of [`CanvasApi`].
#[derive(Clone)]
pub struct HttpCanvasApi {
    cfg: Arc<CoreConfig>,
    client: reqwest::Client,
}

impl HttpCanvasApi {
    /// Builds a client against the configured record service.
    ///
    /// # Errors
    ///
    /// Returns `OdontogramError::Transport` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(cfg: Arc<CoreConfig>) -> OdontogramResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(cfg.request_timeout())
            .build()?;
        Ok(Self { cfg, client })
    }

    fn endpoint(&self, id: OdontogramId, leaf: &str) -> OdontogramResult<Url> {
        let mut url = self.cfg.service_base_url().clone();
        url.path_segments_mut()
            .map_err(|()| {
                OdontogramError::InvalidInput("service base URL cannot carry a path".into())
            })?
            .pop_if_empty()
            .push("odontogram")
            .push(&id.to_string())
            .push(leaf);
        Ok(url)
    }

    async fn post_collection<B: Serialize>(
        &self,
        id: OdontogramId,
        leaf: &str,
        body: &B,
    ) -> OdontogramResult<()> {
        let url = self.endpoint(id, leaf)?;
        tracing::debug!(odontogram = %id, endpoint = leaf, "submitting collection");
        let response = self
            .client
            .post(url)
            .header(CSRF_HEADER, self.cfg.csrf_token())
            .json(body)
            .send()
            .await?;
        let ack: AckEnvelope = decode(response).await?;
        if ack.success {
            Ok(())
        } else {
            Err(OdontogramError::Rejected(failure_message(ack.message)))
        }
    }
}

#[async_trait]
impl CanvasApi for HttpCanvasApi {
    async fn fetch_canvas(&self, id: OdontogramId) -> OdontogramResult<CanvasSnapshot> {
        let url = self.endpoint(id, "canvas-data")?;
        tracing::debug!(odontogram = %id, "fetching canvas data");
        let response = self.client.get(url).send().await?;
        let envelope: CanvasDataEnvelope = decode(response).await?;

        if !envelope.success {
            return Err(OdontogramError::Rejected(failure_message(envelope.message)));
        }

        Ok(CanvasSnapshot {
            data: envelope.data.unwrap_or_default(),
            summary: envelope.odontogram.unwrap_or_default(),
        })
    }

    async fn submit_conditions(
        &self,
        id: OdontogramId,
        conditions: &[ToothCondition],
    ) -> OdontogramResult<()> {
        self.post_collection(id, "tooth-conditions", &ConditionsBody { conditions })
            .await
    }

    async fn submit_bridges(
        &self,
        id: OdontogramId,
        bridges: &[ToothBridge],
    ) -> OdontogramResult<()> {
        self.post_collection(id, "tooth-bridges", &BridgesBody { bridges })
            .await
    }

    async fn submit_indicators(
        &self,
        id: OdontogramId,
        indicators: &[ToothIndicator],
    ) -> OdontogramResult<()> {
        self.post_collection(id, "tooth-indicators", &IndicatorsBody { indicators })
            .await
    }
}

/// Checks the HTTP status and decodes the JSON body.
///
/// Non-2xx responses become `OdontogramError::Endpoint` carrying the
/// body's `message` when one is present, falling back to a status-derived
/// message.
async fn decode<T: DeserializeOwned>(response: Response) -> OdontogramResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<AckEnvelope>(&body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| status_message(status));
        return Err(OdontogramError::Endpoint {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json().await?)
}

fn status_message(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

fn failure_message(message: Option<String>) -> String {
    message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| "the record service reported a failure".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn api() -> HttpCanvasApi {
        let cfg = Arc::new(
            CoreConfig::new(
                "https://clinic.example/api",
                "tok".into(),
                Some(Duration::from_secs(1)),
            )
            .expect("config should be accepted"),
        );
        HttpCanvasApi::new(cfg).expect("client should build")
    }

    #[test]
    fn endpoints_extend_the_base_path() {
        let api = api();
        let url = api
            .endpoint(OdontogramId::new(42), "canvas-data")
            .expect("endpoint should build");
        assert_eq!(
            url.as_str(),
            "https://clinic.example/api/odontogram/42/canvas-data"
        );
    }

    #[test]
    fn failure_message_falls_back_when_blank() {
        assert_eq!(
            failure_message(Some("  ".into())),
            "the record service reported a failure"
        );
        assert_eq!(failure_message(Some("locked".into())), "locked");
        assert_eq!(
            failure_message(None),
            "the record service reported a failure"
        );
    }

    #[test]
    fn canvas_envelope_tolerates_missing_collections() {
        let envelope: CanvasDataEnvelope =
            serde_json::from_str(r#"{"success": true, "odontogram": {}}"#)
                .expect("envelope should parse");
        assert!(envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.odontogram, Some(OdontogramSummary::default()));
    }
}
