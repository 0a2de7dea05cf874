//! Shared HTTP client, API call primitives, and the CLI error boundary.

use std::time::Duration;

use anyhow::anyhow;
use lanlords_config::{ConfigError, ConfigStore, OptionResolver};
use reqwest::{Client, Method};
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// Option resolved to obtain the API base URL on every call.
pub(crate) const API_URL_OPTION: &str = "api.url";

/// Connect timeout applied to every API request.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors produced by the API caller.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// Method other than GET or POST; rejected before any I/O.
    #[error("unsupported HTTP method '{method}'; only GET and POST are supported")]
    UnsupportedMethod {
        /// Method the caller asked for.
        method: Method,
    },
    /// The API could not be reached within the connect timeout.
    #[error("the API at '{base_url}' is unreachable (connection failed or timed out)")]
    Unreachable {
        /// Base URL the request was resolved against.
        base_url: String,
    },
    /// The resolved base URL plus path is not a valid URL.
    #[error("'{url}' is not a valid request URL")]
    InvalidBaseUrl {
        /// Effective URL that failed to parse.
        url: String,
        /// Underlying parse error.
        #[source]
        source: url::ParseError,
    },
    /// The response body could not be decoded as JSON.
    #[error("failed to decode the API response as JSON")]
    ResponseDecode {
        /// Underlying decode error.
        #[source]
        source: reqwest::Error,
    },
    /// Any other transport-level failure.
    #[error("API request failed")]
    RequestFailed {
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// Resolving the API base URL failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result of a successful API call.
///
/// GET responses are decoded as JSON; POST responses are returned as raw
/// text. The asymmetry is deliberate and preserved from the original tool.
#[derive(Debug)]
pub(crate) enum ApiPayload {
    /// Decoded JSON body (GET).
    Json(Value),
    /// Raw response text (POST).
    #[allow(dead_code)]
    Text(String),
}

/// One-shot HTTP caller against the configured API base URL.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    http: Client,
    resolver: OptionResolver,
}

impl ApiClient {
    /// Build a client with the fixed connect timeout.
    pub(crate) fn new(resolver: OptionResolver) -> CliResult<Self> {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))?;
        Ok(Self { http, resolver })
    }

    /// Perform a single best-effort request against `resolve("api.url") + path`.
    ///
    /// The base URL is re-resolved on every call. No retries, no backoff,
    /// and no status-code branching: a non-2xx response flows through the
    /// same decode path as a success.
    pub(crate) async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<ApiPayload, ApiError> {
        if method != Method::GET && method != Method::POST {
            return Err(ApiError::UnsupportedMethod { method });
        }

        let base_url = self.resolver.resolve(API_URL_OPTION)?;
        let effective = format!("{base_url}{path}");
        let url = Url::parse(&effective).map_err(|source| ApiError::InvalidBaseUrl {
            url: effective,
            source,
        })?;
        tracing::debug!(%method, %url, "dispatching API request");

        let request = if method == Method::GET {
            self.http.get(url)
        } else {
            let mut request = self.http.post(url);
            if let Some(body) = body {
                request = request.body(body);
            }
            request
        };

        let response = request.send().await.map_err(|source| {
            if source.is_connect() || source.is_timeout() {
                ApiError::Unreachable { base_url }
            } else {
                ApiError::RequestFailed { source }
            }
        })?;

        if method == Method::GET {
            let decoded = response
                .json::<Value>()
                .await
                .map_err(|source| ApiError::ResponseDecode { source })?;
            Ok(ApiPayload::Json(decoded))
        } else {
            let text = response
                .text()
                .await
                .map_err(|source| ApiError::RequestFailed { source })?;
            Ok(ApiPayload::Text(text))
        }
    }
}

/// Application context passed to command handlers.
#[derive(Debug, Clone)]
pub(crate) struct AppContext {
    pub(crate) client: ApiClient,
    pub(crate) resolver: OptionResolver,
    pub(crate) store: ConfigStore,
}

/// CLI-level error type mapping each failure kind to a distinct exit code.
#[derive(Debug)]
pub(crate) enum CliError {
    /// Invalid user input at the CLI surface.
    Validation(String),
    /// The user declined a confirmation prompt.
    Aborted,
    /// Configuration resolution or persistence failed.
    Config(ConfigError),
    /// The API call failed.
    Api(ApiError),
    /// Any other operational failure.
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    /// Process exit code for this error kind.
    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Aborted | Self::Failure(_) => 1,
            Self::Config(err) => config_exit_code(err),
            Self::Api(err) => api_exit_code(err),
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Aborted => "aborted by user".to_string(),
            Self::Config(err) => error_chain(err),
            Self::Api(err) => error_chain(err),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

const fn config_exit_code(err: &ConfigError) -> i32 {
    match err {
        ConfigError::InvalidOptionFormat { .. } | ConfigError::UnknownOption { .. } => 2,
        ConfigError::OptionNotSet { .. } | ConfigError::ConfigMissing { .. } => 3,
        ConfigError::ParseFailed { .. }
        | ConfigError::Io { .. }
        | ConfigError::HomeDirUnavailable => 4,
    }
}

const fn api_exit_code(err: &ApiError) -> i32 {
    match err {
        ApiError::UnsupportedMethod { .. } => 2,
        ApiError::Unreachable { .. } => 5,
        ApiError::InvalidBaseUrl { .. }
        | ApiError::ResponseDecode { .. }
        | ApiError::RequestFailed { .. } => 6,
        ApiError::Config(inner) => config_exit_code(inner),
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Config(inner) => Self::Config(inner),
            other => Self::Api(other),
        }
    }
}
