use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::time::timeout;

use crate::config::ApiConfig;
use crate::remote::error::RemoteError;
use crate::remote::types::{
    Alint, Badge, BadgesResponse, BondLink, BondLinkRequest, DeliveryTimeRequest, EchoResponse,
    ErrorLogsResponse, GenerateRequest, GeneratedAlint, HealthResponse, LabRequest, LogEntry,
    ProfileForm, QuizData, ReflectRequest, ReflectedResponse, ResourceFootprint, RitualResponse,
    RitualSubmission, SaveResultsRequest, StreakData, UnlockBadgeRequest,
};

/// Header the echo endpoint reads the bond from.
pub const BOND_HEADER: &str = "X-Bond-ID";

/// Typed client for the ritual API.
///
/// Cheap to clone; confirm operations take their own copy into the task.
#[derive(Clone)]
pub struct RitualClient {
    client: Client,
    base_url: String,
    request_timeout: Duration,
}

impl RitualClient {
    pub fn new(config: &ApiConfig) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()
            .map_err(RemoteError::Build)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(config.timeout_seconds.into()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<String, RemoteError> {
        let response: HealthResponse = self.get_json("/health").await?;
        Ok(response.status)
    }

    pub async fn generate_alint(&self, lab: &LabRequest) -> Result<GeneratedAlint, RemoteError> {
        let request = GenerateRequest {
            prompt: lab.prompt(),
            lab,
        };
        self.post_for_json("/generate-alint", &request).await
    }

    pub async fn link_bond(&self, bond_code: &str, user_id: &str) -> Result<BondLink, RemoteError> {
        self.post_for_json("/api/bond/link", &BondLinkRequest { bond_code, user_id })
            .await
    }

    pub async fn reflected_indices(&self, bond_id: &str) -> Result<Vec<usize>, RemoteError> {
        let response: ReflectedResponse = self
            .get_json(&format!("/api/ritual/reflected/{}", bond_id))
            .await?;
        Ok(response.reflected_indices)
    }

    pub async fn reflect(
        &self,
        bond_id: &str,
        index: usize,
        reflected: bool,
    ) -> Result<(), RemoteError> {
        self.post(
            "/api/ritual/reflect",
            &ReflectRequest {
                bond_id,
                index,
                reflected,
            },
        )
        .await
    }

    pub async fn partner_echoes(&self, bond_id: &str) -> Result<Vec<Alint>, RemoteError> {
        let endpoint = "/api/ritual/echo";
        let request = self
            .client
            .get(self.url(endpoint))
            .header(BOND_HEADER, bond_id);
        let body = self.execute(endpoint, request).await?;
        let response: EchoResponse = decode(endpoint, &body)?;
        Ok(response.alints)
    }

    pub async fn streak(&self, bond_id: &str) -> Result<StreakData, RemoteError> {
        self.get_json(&format!("/api/streak/{}", bond_id)).await
    }

    pub async fn set_delivery_time(
        &self,
        bond_id: &str,
        delivery_time: &str,
    ) -> Result<(), RemoteError> {
        self.post(
            "/api/streak/delivery-time",
            &DeliveryTimeRequest {
                bond_id,
                delivery_time,
            },
        )
        .await
    }

    pub async fn quiz(&self, bond_id: &str) -> Result<QuizData, RemoteError> {
        self.get_json(&format!("/api/quiz/generate/{}", bond_id))
            .await
    }

    pub async fn badges(&self, bond_id: &str) -> Result<Vec<Badge>, RemoteError> {
        let response: BadgesResponse = self
            .get_json(&format!("/api/quiz/badges/{}", bond_id))
            .await?;
        Ok(response.badges)
    }

    pub async fn unlock_badge(&self, bond_id: &str, badge: &Badge) -> Result<(), RemoteError> {
        self.post(
            "/api/quiz/unlock-badge",
            &UnlockBadgeRequest {
                bond_id,
                badge_id: &badge.id,
                badge_name: &badge.name,
            },
        )
        .await
    }

    pub async fn save_quiz_results(
        &self,
        bond_id: &str,
        score: usize,
        total: usize,
    ) -> Result<(), RemoteError> {
        self.post(
            "/api/quiz/save-results",
            &SaveResultsRequest {
                bond_id,
                score,
                total,
            },
        )
        .await
    }

    pub async fn error_logs(&self) -> Result<Vec<LogEntry>, RemoteError> {
        let response: ErrorLogsResponse = self.get_json("/api/logs/errors").await?;
        Ok(response.errors)
    }

    /// Mark a log entry as ignored. The timestamp travels as a query parameter.
    pub async fn ignore_log(&self, timestamp: &str) -> Result<(), RemoteError> {
        let endpoint = "/api/logs/ignore";
        let mut url = Url::parse(&self.url(endpoint)).map_err(|e| RemoteError::InvalidUrl {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })?;
        url.query_pairs_mut().append_pair("timestamp", timestamp);

        self.execute(endpoint, self.client.post(url))
            .await
            .map(|_| ())
    }

    pub async fn resource_footprint(&self) -> Result<ResourceFootprint, RemoteError> {
        self.get_json("/api/resource-footprint").await
    }

    /// Muse context used to enrich a ritual; `null` when the backend has none.
    pub async fn muse_context(&self) -> Result<serde_json::Value, RemoteError> {
        self.get_json("/api/context").await
    }

    /// Submit the profile form and return the chemistry reading, if any.
    pub async fn submit_ritual(
        &self,
        form: &ProfileForm,
        muse_context: Option<&serde_json::Value>,
    ) -> Result<Option<String>, RemoteError> {
        let response: RitualResponse = self
            .post_for_json("/api/ritual", &RitualSubmission { form, muse_context })
            .await?;
        Ok(response.chemistry_result)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, RemoteError> {
        let body = self.execute(path, self.client.get(self.url(path))).await?;
        decode(path, &body)
    }

    async fn post<B: Serialize>(&self, path: &str, payload: &B) -> Result<(), RemoteError> {
        self.execute(path, self.client.post(self.url(path)).json(payload))
            .await
            .map(|_| ())
    }

    async fn post_for_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<R, RemoteError> {
        let body = self
            .execute(path, self.client.post(self.url(path)).json(payload))
            .await?;
        decode(path, &body)
    }

    /// Send a request under the total timeout and return the body of a 2xx response.
    async fn execute(&self, endpoint: &str, request: RequestBuilder) -> Result<String, RemoteError> {
        let exchange = async {
            let response = request
                .send()
                .await
                .map_err(|source| RemoteError::Transport {
                    endpoint: endpoint.to_string(),
                    source,
                })?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|source| RemoteError::Transport {
                    endpoint: endpoint.to_string(),
                    source,
                })?;

            tracing::debug!(endpoint, status = status.as_u16(), "Remote call completed");

            if !status.is_success() {
                return Err(RemoteError::Rejection {
                    endpoint: endpoint.to_string(),
                    status: status.as_u16(),
                    body,
                });
            }
            Ok(body)
        };

        match timeout(self.request_timeout, exchange).await {
            Ok(result) => result,
            Err(_) => Err(RemoteError::Timeout {
                endpoint: endpoint.to_string(),
                duration: self.request_timeout.as_secs(),
            }),
        }
    }
}

fn decode<R: DeserializeOwned>(endpoint: &str, body: &str) -> Result<R, RemoteError> {
    serde_json::from_str(body).map_err(|e| RemoteError::Decode {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })
}
