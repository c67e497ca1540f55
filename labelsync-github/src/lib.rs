//! # labelsync-github
//!
//! Synchronous GitHub REST v3 implementation of
//! [`labelsync_core::LabelClient`].
//!
//! One HTTP call per operation (listing paginates), every call carries a
//! timeout, and HTTP failures are translated into the small
//! [`ClientError`] set. No retries here: rate limiting is surfaced with its
//! `retry-after` hint and the caller decides what to do with it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use labelsync_core::{ClientError, Label, LabelClient, RepoId};

/// Public GitHub API root. Overridable for GitHub Enterprise or tests.
pub const DEFAULT_API_ROOT: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("labelsync/", env!("CARGO_PKG_VERSION"));
const PER_PAGE: usize = 100;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Connection settings for [`GithubClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Personal access token. Empty means unauthenticated (heavily rate
    /// limited, read-only in practice).
    pub token: String,
    /// API root URL, without a trailing slash.
    pub api_root: String,
    /// Overall per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_root: DEFAULT_API_ROOT.to_owned(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// A [`LabelClient`] over the GitHub labels endpoints.
pub struct GithubClient {
    agent: ureq::Agent,
    config: ClientConfig,
}

impl GithubClient {
    pub fn new(config: ClientConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(10))
            .timeout(config.timeout)
            .build();
        Self { agent, config }
    }

    /// `<root>/repos/<owner>/<name>/labels`
    fn labels_url(&self, repo: &RepoId) -> String {
        format!(
            "{}/repos/{}/{}/labels",
            self.config.api_root, repo.owner, repo.name
        )
    }

    /// `<root>/repos/<owner>/<name>/labels/<label>` — label name
    /// percent-encoded, since label names routinely contain spaces and
    /// punctuation.
    fn label_url(&self, repo: &RepoId, name: &str) -> String {
        format!("{}/{}", self.labels_url(repo), urlencoding::encode(name))
    }

    fn request(&self, method: &str, url: &str) -> ureq::Request {
        let request = self
            .agent
            .request(method, url)
            .set("Accept", "application/vnd.github+json")
            .set("User-Agent", USER_AGENT);
        if self.config.token.is_empty() {
            request
        } else {
            request.set("Authorization", &format!("token {}", self.config.token))
        }
    }
}

impl LabelClient for GithubClient {
    fn list(&self, repo: &RepoId) -> Result<Vec<Label>, ClientError> {
        let mut labels = Vec::new();
        for page in 1.. {
            let url = format!(
                "{}?per_page={PER_PAGE}&page={page}",
                self.labels_url(repo)
            );
            tracing::debug!("GET {url}");
            let response = self
                .request("GET", &url)
                .call()
                .map_err(|e| map_error(e, &repo.to_string()))?;
            let batch: Vec<WireLabel> = response
                .into_json()
                .map_err(|e| ClientError::Transport(e.to_string()))?;
            let last_page = batch.len() < PER_PAGE;
            labels.extend(batch.into_iter().map(Label::from));
            if last_page {
                break;
            }
        }
        Ok(labels)
    }

    fn create(&self, repo: &RepoId, label: &Label) -> Result<Label, ClientError> {
        let url = self.labels_url(repo);
        tracing::debug!("POST {url} ({})", label.name);
        let response = self
            .request("POST", &url)
            .send_json(CreateLabel::from(label))
            .map_err(|e| map_error(e, &format!("'{}' on {repo}", label.name)))?;
        read_label(response)
    }

    fn update(&self, repo: &RepoId, old_name: &str, label: &Label) -> Result<Label, ClientError> {
        let url = self.label_url(repo, old_name);
        tracing::debug!("PATCH {url} -> {}", label.name);
        let response = self
            .request("PATCH", &url)
            .send_json(UpdateLabel::from(label))
            .map_err(|e| map_error(e, &format!("'{old_name}' on {repo}")))?;
        read_label(response)
    }

    fn delete(&self, repo: &RepoId, name: &str) -> Result<(), ClientError> {
        let url = self.label_url(repo, name);
        tracing::debug!("DELETE {url}");
        self.request("DELETE", &url)
            .call()
            .map_err(|e| map_error(e, &format!("'{name}' on {repo}")))?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct WireLabel {
    name: String,
    color: String,
    #[serde(default)]
    description: Option<String>,
}

impl From<WireLabel> for Label {
    fn from(wire: WireLabel) -> Self {
        Label {
            name: wire.name,
            color: wire.color.to_ascii_lowercase(),
            description: wire.description.filter(|d| !d.is_empty()),
        }
    }
}

#[derive(Debug, Serialize)]
struct CreateLabel<'a> {
    name: &'a str,
    color: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

impl<'a> From<&'a Label> for CreateLabel<'a> {
    fn from(label: &'a Label) -> Self {
        Self {
            name: &label.name,
            color: &label.color,
            description: label.description.as_deref(),
        }
    }
}

/// PATCH payload. `new_name` equals the current name for pure attribute
/// updates; GitHub treats that as a no-op rename.
#[derive(Debug, Serialize)]
struct UpdateLabel<'a> {
    new_name: &'a str,
    color: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

impl<'a> From<&'a Label> for UpdateLabel<'a> {
    fn from(label: &'a Label) -> Self {
        Self {
            new_name: &label.name,
            color: &label.color,
            description: label.description.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireError {
    message: String,
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

fn read_label(response: ureq::Response) -> Result<Label, ClientError> {
    let wire: WireLabel = response
        .into_json()
        .map_err(|e| ClientError::Transport(e.to_string()))?;
    Ok(wire.into())
}

fn map_error(err: ureq::Error, what: &str) -> ClientError {
    match err {
        ureq::Error::Status(status, response) => {
            let retry_after = response
                .header("retry-after")
                .and_then(|v| v.parse().ok());
            let exhausted = response.header("x-ratelimit-remaining") == Some("0");
            let message = error_message(response);
            classify(status, retry_after, exhausted, what, message)
        }
        ureq::Error::Transport(transport) => ClientError::Transport(transport.to_string()),
    }
}

/// Turn an HTTP status plus the rate-limit headers into a [`ClientError`].
///
/// A 403 only counts as rate limiting when the platform says so — a
/// `retry-after` header or an exhausted `x-ratelimit-remaining` budget;
/// otherwise it is a permissions problem.
fn classify(
    status: u16,
    retry_after: Option<u64>,
    exhausted: bool,
    what: &str,
    message: String,
) -> ClientError {
    match status {
        401 => ClientError::Unauthorized(message),
        403 if retry_after.is_some() || exhausted => ClientError::RateLimited { retry_after },
        403 => ClientError::Unauthorized(message),
        404 => ClientError::NotFound(what.to_owned()),
        422 => ClientError::Conflict(format!("{what}: {message}")),
        429 => ClientError::RateLimited { retry_after },
        _ => ClientError::Transport(format!("HTTP {status}: {message}")),
    }
}

/// GitHub error bodies are `{"message": "..."}`; fall back to the raw body.
fn error_message(response: ureq::Response) -> String {
    let body = response.into_string().unwrap_or_default();
    match serde_json::from_str::<WireError>(&body) {
        Ok(wire) => wire.message,
        Err(_) => body,
    }
}

// ---------------------------------------------------------------------------
// Tests — URL building and wire conversions; the HTTP paths are covered by
// the engine's in-memory client tests and by using the tool.
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GithubClient {
        GithubClient::new(ClientConfig::default())
    }

    fn repo() -> RepoId {
        RepoId::parse("octo/tools").expect("repo")
    }

    #[test]
    fn labels_url_targets_the_repository() {
        assert_eq!(
            client().labels_url(&repo()),
            "https://api.github.com/repos/octo/tools/labels"
        );
    }

    #[test]
    fn label_url_percent_encodes_the_name() {
        assert_eq!(
            client().label_url(&repo(), "help wanted"),
            "https://api.github.com/repos/octo/tools/labels/help%20wanted"
        );
        assert_eq!(
            client().label_url(&repo(), "a/b"),
            "https://api.github.com/repos/octo/tools/labels/a%2Fb"
        );
    }

    #[test]
    fn api_root_is_overridable() {
        let config = ClientConfig {
            api_root: "https://ghe.example.com/api/v3".to_owned(),
            ..ClientConfig::default()
        };
        let client = GithubClient::new(config);
        assert_eq!(
            client.labels_url(&repo()),
            "https://ghe.example.com/api/v3/repos/octo/tools/labels"
        );
    }

    #[test]
    fn wire_label_lowercases_color_and_drops_empty_description() {
        let wire = WireLabel {
            name: "bug".into(),
            color: "FF0000".into(),
            description: Some(String::new()),
        };
        let label = Label::from(wire);
        assert_eq!(label.color, "ff0000");
        assert!(label.description.is_none());
    }

    #[test]
    fn update_payload_always_carries_new_name() {
        let label = Label::new("design", "c7def8", None).expect("label");
        let json = serde_json::to_value(UpdateLabel::from(&label)).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"new_name": "design", "color": "c7def8"})
        );
    }

    #[test]
    fn create_payload_includes_description_when_present() {
        let label = Label::new("bug", "ff0000", Some("broken".into())).expect("label");
        let json = serde_json::to_value(CreateLabel::from(&label)).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"name": "bug", "color": "ff0000", "description": "broken"})
        );
    }

    #[test]
    fn classify_401_as_unauthorized() {
        let err = classify(401, None, false, "octo/tools", "Bad credentials".into());
        assert!(matches!(err, ClientError::Unauthorized(m) if m == "Bad credentials"));
    }

    #[test]
    fn classify_403_with_retry_after_as_rate_limited() {
        let err = classify(403, Some(30), false, "octo/tools", "slow down".into());
        assert!(matches!(
            err,
            ClientError::RateLimited {
                retry_after: Some(30)
            }
        ));
    }

    #[test]
    fn classify_403_with_exhausted_budget_as_rate_limited() {
        let err = classify(403, None, true, "octo/tools", "rate limit exceeded".into());
        assert!(matches!(err, ClientError::RateLimited { retry_after: None }));
    }

    #[test]
    fn classify_plain_403_as_unauthorized() {
        let err = classify(403, None, false, "octo/tools", "Forbidden".into());
        assert!(matches!(err, ClientError::Unauthorized(m) if m == "Forbidden"));
    }

    #[test]
    fn classify_404_as_not_found_with_context() {
        let err = classify(404, None, false, "'ghost' on octo/tools", "Not Found".into());
        assert!(matches!(err, ClientError::NotFound(w) if w == "'ghost' on octo/tools"));
    }

    #[test]
    fn classify_422_as_conflict() {
        let err = classify(
            422,
            None,
            false,
            "'bug' on octo/tools",
            "Validation Failed".into(),
        );
        match err {
            ClientError::Conflict(message) => {
                assert!(message.contains("'bug' on octo/tools"));
                assert!(message.contains("Validation Failed"));
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn classify_429_as_rate_limited_with_hint() {
        let err = classify(429, Some(60), false, "octo/tools", "too many requests".into());
        assert!(matches!(
            err,
            ClientError::RateLimited {
                retry_after: Some(60)
            }
        ));
    }

    #[test]
    fn classify_other_statuses_as_transport() {
        let err = classify(500, None, false, "octo/tools", "boom".into());
        match err {
            ClientError::Transport(message) => {
                assert!(message.contains("HTTP 500"));
                assert!(message.contains("boom"));
            }
            other => panic!("expected transport, got {other:?}"),
        }
    }
}
