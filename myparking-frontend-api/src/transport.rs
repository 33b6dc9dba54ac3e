use std::fmt;

use async_trait::async_trait;
use gloo_net::http::Request as HttpRequest;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// A single API call, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub token: Option<String>,
}

impl Request {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            token: None,
        }
    }
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }
    pub fn json<T>(mut self, data: &T) -> Result<Self>
    where
        T: Serialize,
    {
        self.body = Some(serde_json::to_value(data)?);
        Ok(self)
    }
    #[must_use]
    pub fn bearer(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the parking API.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: Request) -> Result<Response>;
}

/// Browser `fetch` based transport.
#[derive(Debug, Clone)]
pub struct FetchTransport {
    url: String,
}

impl FetchTransport {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into().trim_end_matches('/').to_owned();
        Self { url }
    }
}

pub fn auth_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: Request) -> Result<Response> {
        let Request {
            method,
            path,
            body,
            token,
        } = request;
        let url = format!("{}/{}", self.url, path.trim_start_matches('/'));
        let mut req = match method {
            Method::Get => HttpRequest::get(&url),
            Method::Post => HttpRequest::post(&url),
            Method::Put => HttpRequest::put(&url),
            Method::Delete => HttpRequest::delete(&url),
        }
        .header("Accept", "application/json")
        .credentials(RequestCredentials::Include);
        if let Some(token) = token {
            req = req.header("Authorization", &auth_header_value(&token));
        }
        let response = match body {
            Some(data) => req.json(&data)?.send().await?,
            None => req.send().await?,
        };
        let status = response.status();
        let body = response.text().await?;
        Ok(Response { status, body })
    }
}
