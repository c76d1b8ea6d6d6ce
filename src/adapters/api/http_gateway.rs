//! HTTP adapter for the briefing API.
//!
//! Talks to the deployed serverless endpoints: one data URL multiplexing
//! briefing/sentiment/restaurants through a `type` discriminator, plus a
//! separate weather URL. Implements `BriefingGateway` with strict payload
//! checking; a failing endpoint never yields substitute data.

use crate::domain::{
    BriefingResponse, DomainError, RestaurantsResponse, SentimentSummaryResponse, WeatherResponse,
};
use crate::ports::BriefingGateway;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// HTTP briefing gateway.
///
/// Works against both deployment styles:
/// - POST with a JSON body (direct Lambda URLs)
/// - GET with query parameters (API Gateway routes), via `use_get`
pub struct HttpBriefingGateway {
    client: reqwest::Client,
    data_url: String,
    weather_url: String,
    districts_url: Option<String>,
    timeout_secs: u64,
    use_get: bool,
}

impl HttpBriefingGateway {
    /// Create a new gateway. The timeout applies to each request as a whole.
    pub fn new(
        data_url: String,
        weather_url: String,
        districts_url: Option<String>,
        timeout_secs: u64,
        use_get: bool,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| DomainError::Gateway(format!("HTTP client init failed: {}", e)))?;
        Ok(Self {
            client,
            data_url,
            weather_url,
            districts_url,
            timeout_secs,
            use_get,
        })
    }

    /// One round trip against the data endpoint.
    async fn fetch_data<T>(
        &self,
        kind: &str,
        district: &str,
        days: Option<u32>,
    ) -> Result<T, DomainError>
    where
        T: serde::de::DeserializeOwned,
    {
        info!(kind, district, "requesting briefing data");
        let response = if self.use_get {
            self.client
                .get(self.data_get_url(kind, district, days))
                .send()
                .await
        } else {
            self.client
                .post(&self.data_url)
                .json(&DataRequest {
                    kind,
                    district,
                    days,
                })
                .send()
                .await
        };
        self.decode(response).await
    }

    /// Query-string form of a data request (GET mode).
    fn data_get_url(&self, kind: &str, district: &str, days: Option<u32>) -> String {
        let mut url = format!(
            "{}?type={}&district={}",
            self.data_url,
            kind,
            urlencoding::encode(district)
        );
        if let Some(days) = days {
            url.push_str(&format!("&days={}", days));
        }
        url
    }

    /// Shared transport handling: classify reqwest errors (timeouts get
    /// their own variant), then hand the body to `parse_payload`.
    async fn decode<T>(
        &self,
        response: reqwest::Result<reqwest::Response>,
    ) -> Result<T, DomainError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = response.map_err(|e| self.transport_error(e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;
        debug!(status, body_len = body.len(), "briefing API responded");
        Self::parse_payload(status, &body)
    }

    fn transport_error(&self, e: reqwest::Error) -> DomainError {
        if e.is_timeout() {
            DomainError::Timeout {
                seconds: self.timeout_secs,
            }
        } else {
            DomainError::Gateway(format!("HTTP request failed: {}", e))
        }
    }

    /// Decode one API payload. Non-2xx statuses and `success: false`
    /// envelopes both surface as `DomainError::Api`.
    fn parse_payload<T>(status: u16, body: &str) -> Result<T, DomainError>
    where
        T: serde::de::DeserializeOwned,
    {
        if !(200..300).contains(&status) {
            warn!(
                status,
                body = %body.chars().take(200).collect::<String>(),
                "briefing API returned error status"
            );
            return Err(DomainError::Api {
                status,
                message: body.chars().take(200).collect(),
            });
        }

        let value: Value = serde_json::from_str(body)
            .map_err(|e| DomainError::Gateway(format!("invalid JSON from API: {}", e)))?;

        if value.get("success").and_then(Value::as_bool) == Some(false) {
            let message = value
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown API error")
                .to_string();
            warn!(status, error = %message, "briefing API reported failure");
            return Err(DomainError::Api { status, message });
        }

        serde_json::from_value(value)
            .map_err(|e| DomainError::Gateway(format!("unexpected API shape: {}", e)))
    }
}

/// Data endpoint request body (POST mode).
#[derive(Serialize)]
struct DataRequest<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    district: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    days: Option<u32>,
}

/// Weather endpoint request body.
#[derive(Serialize)]
struct WeatherRequest<'a> {
    gu_name: &'a str,
}

/// District list response. Entries arrive either as bare names or as objects
/// carrying a `name` field, depending on the backend build.
#[derive(Deserialize)]
struct DistrictsResponse {
    #[serde(default)]
    districts: Vec<DistrictEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DistrictEntry {
    Name(String),
    Detail { name: String },
}

impl DistrictEntry {
    fn into_name(self) -> String {
        match self {
            DistrictEntry::Name(name) => name,
            DistrictEntry::Detail { name } => name,
        }
    }
}

#[async_trait::async_trait]
impl BriefingGateway for HttpBriefingGateway {
    async fn get_briefing(&self, district: &str) -> Result<BriefingResponse, DomainError> {
        self.fetch_data("briefing", district, None).await
    }

    async fn get_weather(&self, district: &str) -> Result<WeatherResponse, DomainError> {
        info!(district, "requesting weather");
        let response = self
            .client
            .post(&self.weather_url)
            .json(&WeatherRequest { gu_name: district })
            .send()
            .await;
        self.decode(response).await
    }

    async fn get_sentiment(
        &self,
        district: &str,
        days: u32,
    ) -> Result<SentimentSummaryResponse, DomainError> {
        self.fetch_data("sentiment", district, Some(days)).await
    }

    async fn get_restaurants(&self, district: &str) -> Result<RestaurantsResponse, DomainError> {
        self.fetch_data("restaurants", district, None).await
    }

    /// The district endpoint is optional; without one the gateway reports an
    /// empty list and the caller falls back to the built-in set.
    async fn get_districts(&self) -> Result<Vec<String>, DomainError> {
        let Some(url) = self.districts_url.clone() else {
            return Ok(Vec::new());
        };
        info!(url = %url, "requesting district list");
        let response = self.client.get(&url).send().await;
        let parsed: DistrictsResponse = self.decode(response).await?;
        Ok(parsed
            .districts
            .into_iter()
            .map(DistrictEntry::into_name)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload_success_envelope() {
        let body = r#"{
            "success": true,
            "district": "마포구",
            "weather": {"temp": "21°C", "condition": "구름많음", "dust": "보통"}
        }"#;

        let parsed: WeatherResponse = HttpBriefingGateway::parse_payload(200, body).unwrap();

        assert_eq!(parsed.district, "마포구");
        assert_eq!(parsed.weather.condition, "구름많음");
    }

    #[test]
    fn test_parse_payload_reports_api_failure() {
        let body = r#"{"success": false, "error": "DynamoDB query failed"}"#;

        let err =
            HttpBriefingGateway::parse_payload::<WeatherResponse>(200, body).unwrap_err();

        match err {
            DomainError::Api { status, message } => {
                assert_eq!(status, 200);
                assert_eq!(message, "DynamoDB query failed");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_payload_error_status_truncates_body() {
        let body = "x".repeat(1000);

        let err =
            HttpBriefingGateway::parse_payload::<WeatherResponse>(502, &body).unwrap_err();

        match err {
            DomainError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message.chars().count(), 200);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_payload_rejects_non_json() {
        let err = HttpBriefingGateway::parse_payload::<WeatherResponse>(200, "<html>oops</html>")
            .unwrap_err();

        assert!(matches!(err, DomainError::Gateway(_)));
    }

    #[test]
    fn test_district_entries_decode_both_shapes() {
        let body = r#"{
            "success": true,
            "districts": ["강남구", {"name": "강동구", "code": "11740"}]
        }"#;

        let parsed: DistrictsResponse = HttpBriefingGateway::parse_payload(200, body).unwrap();
        let names: Vec<String> = parsed
            .districts
            .into_iter()
            .map(DistrictEntry::into_name)
            .collect();

        assert_eq!(names, vec!["강남구", "강동구"]);
    }

    #[test]
    fn test_data_get_url_includes_days_only_when_set() {
        let gateway = HttpBriefingGateway::new(
            "https://api.example.com/data".to_string(),
            "https://api.example.com/weather".to_string(),
            None,
            10,
            true,
        )
        .unwrap();

        assert_eq!(
            gateway.data_get_url("briefing", "강남구", None),
            "https://api.example.com/data?type=briefing&district=%EA%B0%95%EB%82%A8%EA%B5%AC"
        );
        assert!(
            gateway
                .data_get_url("sentiment", "강남구", Some(7))
                .ends_with("&days=7")
        );
    }

    #[test]
    fn test_data_request_serializes_type_discriminator() {
        let body = serde_json::to_value(DataRequest {
            kind: "sentiment",
            district: "은평구",
            days: Some(7),
        })
        .unwrap();

        assert_eq!(body["type"], "sentiment");
        assert_eq!(body["district"], "은평구");
        assert_eq!(body["days"], 7);

        let no_days = serde_json::to_value(DataRequest {
            kind: "briefing",
            district: "은평구",
            days: None,
        })
        .unwrap();
        assert!(no_days.get("days").is_none());
    }
}
