// ────────────────────────────────
// src/server/listener.rs
// Low‑level socket/bind/listen, one typed error per step.
// ────────────────────────────────
use std::io;
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpSocket};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    #[error("failed to create socket: {0}")]
    Socket(#[source] io::Error),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },

    #[error("failed to listen on {addr}: {source}")]
    Listen { addr: SocketAddr, source: io::Error },
}

/// Bind a listening socket in three explicit steps: create, bind, listen.
/// `TcpSocket` instead of `TcpListener::bind` so the backlog depth is ours
/// to set. Must be called from within a Tokio runtime.
pub fn bind_tcp(addr: SocketAddr, backlog: u32) -> Result<TcpListener, ListenerError> {
    let socket = match addr {
        SocketAddr::V4(_) => TcpSocket::new_v4(),
        SocketAddr::V6(_) => TcpSocket::new_v6(),
    }
    .map_err(ListenerError::Socket)?;
    info!("socket created");

    socket
        .bind(addr)
        .map_err(|source| ListenerError::Bind { addr, source })?;
    info!(%addr, "socket bound");

    let listener = socket
        .listen(backlog)
        .map_err(|source| ListenerError::Listen { addr, source })?;
    info!(%addr, backlog, "listening");

    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn binds_an_ephemeral_port() {
        let listener = bind_tcp("127.0.0.1:0".parse().unwrap(), 10).unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn second_bind_on_same_port_is_a_bind_error() {
        let first = bind_tcp("127.0.0.1:0".parse().unwrap(), 10).unwrap();
        let addr = first.local_addr().unwrap();

        let err = bind_tcp(addr, 10).unwrap_err();
        assert!(matches!(err, ListenerError::Bind { .. }));
    }

    #[test]
    fn display_names_the_failing_step() {
        let addr: SocketAddr = "0.0.0.0:8080".parse().unwrap();
        let err = ListenerError::Bind {
            addr,
            source: io::Error::from(io::ErrorKind::AddrInUse),
        };
        assert!(err.to_string().starts_with("failed to bind 0.0.0.0:8080"));

        let err = ListenerError::Listen {
            addr,
            source: io::Error::from(io::ErrorKind::InvalidInput),
        };
        assert!(err.to_string().starts_with("failed to listen on 0.0.0.0:8080"));
    }
}
