//! Authenticated calls against a Lemmy instance's HTTP API.
//!
//! Lemmy wants the login token twice: as a bearer `Authorization` header and as an `auth`
//! parameter (in the query string for GETs, in the JSON body for POSTs).  [`Client`] logs in
//! lazily on the first call that needs a token and attaches it both ways.
mod err;
#[cfg(test)]
pub(crate) mod mock_api;
mod query;

pub use err::{AuthErr, Error};
pub use query::{ListQuery, ListingType, SortType};

use crate::config;
use async_trait::async_trait;
use reqwest::{header, RequestBuilder, StatusCode};
use serde_json::{json, Value};
use std::fmt;
use tokio::sync::Mutex;

type Result<T> = std::result::Result<T, Error>;

/// The calls the stream and the reply helpers make against a Lemmy API.
///
/// `endpoint` is relative to `/api/v3/`, e.g. `comment/list`.
#[async_trait]
pub trait Api: Send + Sync {
    async fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value>;
    async fn post(&self, endpoint: &str, json: Value) -> Result<Value>;
}

/// An HTTP client bound to one Lemmy instance and one account.
pub struct Client {
    http: reqwest::Client,
    api_base: String,
    username: String,
    password: String,
    // Held for the whole login so that concurrent first calls share a single one.
    jwt: Mutex<Option<String>>,
}

impl Client {
    pub fn new(cfg: &config::Lemmy) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = *cfg.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            api_base: [cfg.url.as_str().trim_end_matches('/'), "/api/v3"].concat(),
            username: cfg.username.0.clone(),
            password: cfg.password.expose().to_string(),
            jwt: Mutex::new(None),
        })
    }

    /// Log in with the configured account, replacing any token already held.
    pub async fn login(&self) -> Result<()> {
        let mut jwt = self.jwt.lock().await;
        *jwt = Some(self.request_token().await?);
        Ok(())
    }

    /// Release the connection pool.
    ///
    /// Takes the client by value, so this can only happen once; dropping the client on any
    /// other path releases the pool the same way.
    pub fn close(self) {
        log::info!("Closing connection to {}", self.api_base);
    }

    async fn token(&self) -> Result<String> {
        let mut jwt = self.jwt.lock().await;
        match &*jwt {
            Some(token) => Ok(token.clone()),
            None => {
                let token = self.request_token().await?;
                *jwt = Some(token.clone());
                Ok(token)
            }
        }
    }

    async fn request_token(&self) -> Result<String> {
        log::info!("Logging in to {} as `{}`", self.api_base, self.username);
        let credentials = json!({
            "username_or_email": self.username,
            "password": self.password,
        });
        let res = self
            .http
            .post(self.url("user/login"))
            .json(&credentials)
            .send()
            .await
            .map_err(AuthErr::Transport)?;

        let status = res.status();
        if !status.is_success() {
            Err(AuthErr::Rejected(status))?
        }
        let body = res.bytes().await.map_err(AuthErr::Transport)?;
        let reply: Value = serde_json::from_slice(&body).map_err(AuthErr::Malformed)?;
        match reply.get("jwt").and_then(Value::as_str) {
            Some(token) => Ok(token.to_string()),
            None => Err(AuthErr::MissingToken)?,
        }
    }

    async fn execute(&self, req: RequestBuilder, token: &str) -> Result<Value> {
        let res = req.send().await?;
        let status = res.status();
        if status == StatusCode::UNAUTHORIZED {
            self.forget_token(token).await;
        }
        if !status.is_success() {
            return Err(Error::from_status(status));
        }

        let body = res.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Drop the held token if it is still the one that was `rejected`; a newer login stays.
    async fn forget_token(&self, rejected: &str) {
        let mut jwt = self.jwt.lock().await;
        if jwt.as_deref() == Some(rejected) {
            log::warn!(
                "{} no longer accepts our token; logging in again on the next call",
                self.api_base
            );
            *jwt = None;
        }
    }

    fn url(&self, endpoint: &str) -> String {
        [self.api_base.as_str(), "/", endpoint].concat()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_base", &self.api_base)
            .field("username", &self.username)
            .finish()
    }
}

#[async_trait]
impl Api for Client {
    async fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let token = self.token().await?;
        let req = self
            .http
            .get(self.url(endpoint))
            .bearer_auth(&token)
            .query(params)
            .query(&[("auth", &token)]);
        self.execute(req, &token).await
    }

    async fn post(&self, endpoint: &str, mut json: Value) -> Result<Value> {
        if json.is_null() {
            json = json!({});
        }
        if !json.is_object() {
            let msg = format!("a POST body must be a JSON object, not `{}`", json);
            return Err(Error::Malformed(serde::de::Error::custom(msg)));
        }
        let token = self.token().await?;
        if let Some(fields) = json.as_object_mut() {
            fields.insert("auth".to_string(), Value::String(token.clone()));
        }
        let req = self
            .http
            .post(self.url(endpoint))
            .bearer_auth(&token)
            .json(&json);
        self.execute(req, &token).await
    }
}
