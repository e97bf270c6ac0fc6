//! Client address resolution for logs and error reports.

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use std::convert::Infallible;
use std::net::SocketAddr;

/// Proxy headers carrying the original client address, in order of preference.
const FORWARDED_HEADERS: [&str; 2] = ["cf-connecting-ip", "x-real-ip"];

/// The address a request came from, preferring proxy headers over the peer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientAddr {
    peer: Option<SocketAddr>,
    forwarded: Option<String>,
}

impl ClientAddr {
    pub fn from_parts(headers: &HeaderMap, peer: Option<SocketAddr>) -> Self {
        let forwarded = FORWARDED_HEADERS.iter().find_map(|name| {
            headers
                .get(*name)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(String::from)
        });
        ClientAddr { peer, forwarded }
    }

    /// Client host without port, `None` when nothing is known.
    pub fn host(&self) -> Option<String> {
        self.forwarded
            .clone()
            .or_else(|| self.peer.map(|peer| peer.ip().to_string()))
    }

    /// Client host with the peer's port attached, IPv6 hosts bracketed.
    pub fn with_port(&self) -> Option<String> {
        let host = self.host()?;
        match self.peer {
            Some(peer) if host.contains(':') => Some(format!("[{host}]:{}", peer.port())),
            Some(peer) => Some(format!("{host}:{}", peer.port())),
            None => Some(host),
        }
    }
}

impl<S> FromRequestParts<S> for ClientAddr
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);
        Ok(ClientAddr::from_parts(&parts.headers, peer))
    }
}
