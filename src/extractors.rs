use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

/// Extracts the peer socket address when the server was started with
/// connect-info, `None` otherwise (e.g. in router-level tests).
pub struct CallerAddr(pub Option<SocketAddr>);

impl<S: Send + Sync> FromRequestParts<S> for CallerAddr {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0);
        Ok(CallerAddr(peer))
    }
}
