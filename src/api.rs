use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;

const FALLBACK_ERROR: &str = "An error occurred while processing your query";

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct QueryReply {
    success: bool,
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HealthReply {
    status: String,
}

/// How a submission failed. `Agent` is a well-formed failure payload from
/// the server; `Network` is a transport problem (request rejected, body not
/// JSON). Both are terminal for the current submission cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    Agent(String),
    Network(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Agent(msg) => write!(f, "{}", msg),
            QueryError::Network(detail) => write!(f, "Network error: {}", detail),
        }
    }
}

impl std::error::Error for QueryError {}

pub struct AgentClient {
    client: Client,
    base_url: String,
}

impl AgentClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one query to the agent and return its reply text.
    ///
    /// The HTTP status is deliberately not inspected: the server reports
    /// failures in the JSON body (`success: false`), and error statuses
    /// still carry such a body.
    pub async fn query(&self, query: &str) -> Result<String, QueryError> {
        let request = QueryRequest { query };

        let response = self
            .client
            .post(format!("{}/api/query", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| QueryError::Network(e.to_string()))?;

        let reply: QueryReply = response
            .json()
            .await
            .map_err(|e| QueryError::Network(e.to_string()))?;

        reply_outcome(reply)
    }

    /// Probe the agent's health endpoint. Used once at startup for the
    /// status line; failures are informational.
    pub async fn health(&self) -> Result<String, QueryError> {
        let reply: HealthReply = self
            .client
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await
            .map_err(|e| QueryError::Network(e.to_string()))?
            .json()
            .await
            .map_err(|e| QueryError::Network(e.to_string()))?;
        Ok(reply.status)
    }
}

/// Map a decoded reply onto the submission outcome. A missing or empty
/// `error` on a failure payload falls back to the generic message.
fn reply_outcome(reply: QueryReply) -> Result<String, QueryError> {
    if reply.success {
        Ok(reply.response.unwrap_or_default())
    } else {
        let message = reply
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| FALLBACK_ERROR.to_string());
        Err(QueryError::Agent(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> QueryReply {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_string(&QueryRequest {
            query: "Bangalore trip",
        })
        .unwrap();
        assert_eq!(body, r#"{"query":"Bangalore trip"}"#);
    }

    #[test]
    fn test_success_reply_yields_response_text() {
        let reply = decode(r#"{"success": true, "response": "In Bangalore, visit X"}"#);
        assert_eq!(reply_outcome(reply).unwrap(), "In Bangalore, visit X");
    }

    #[test]
    fn test_failure_reply_carries_server_message() {
        let reply = decode(r#"{"success": false, "error": "City not found"}"#);
        assert_eq!(
            reply_outcome(reply).unwrap_err(),
            QueryError::Agent("City not found".to_string())
        );
    }

    #[test]
    fn test_failure_reply_without_error_uses_fallback() {
        let reply = decode(r#"{"success": false}"#);
        assert_eq!(
            reply_outcome(reply).unwrap_err(),
            QueryError::Agent(FALLBACK_ERROR.to_string())
        );
    }

    #[test]
    fn test_failure_reply_with_empty_error_uses_fallback() {
        let reply = decode(r#"{"success": false, "error": ""}"#);
        assert_eq!(
            reply_outcome(reply).unwrap_err(),
            QueryError::Agent(FALLBACK_ERROR.to_string())
        );
    }

    #[test]
    fn test_network_error_message_includes_detail() {
        let err = QueryError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
