// src/core/net.rs
//
// Page transport. The fetcher only needs "url in, body text out"; everything
// about HTTP (timeouts, user agent, status handling) stays behind this seam.

use reqwest::blocking::Client;
use thiserror::Error;

use crate::config::options::HttpOptions;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error: {status} {url}")]
    Status { status: u16, url: String },

    #[error("{0}")]
    Other(String),
}

/// Anything that can turn a week URL into page text.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<String, TransportError>;
}

impl<F> Transport for F
where
    F: Fn(&str) -> Result<String, TransportError> + Send + Sync,
{
    fn get(&self, url: &str) -> Result<String, TransportError> {
        self(url)
    }
}

/// Blocking HTTP(S) GET.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(opts: &HttpOptions) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status { status: status.as_u16(), url: s!(url) });
        }
        Ok(resp.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_transports() {
        let t = |url: &str| -> Result<String, TransportError> { Ok(format!("<p>{url}</p>")) };
        assert_eq!(t.get("x").unwrap(), "<p>x</p>");
    }

    #[test]
    fn status_error_names_url() {
        let e = TransportError::Status { status: 404, url: s!("http://h/p") };
        assert_eq!(e.to_string(), "HTTP error: 404 http://h/p");
    }
}
