// ────────────────────────────────
// src/server/acceptor.rs
// Owns the listening socket: accept, log the peer, close. Sequential only.
// ────────────────────────────────
use crate::config::ServerConfig;
use crate::server::listener::{bind_tcp, ListenerError};
use anyhow::Result;
use std::io;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};

#[derive(Debug)]
pub struct Acceptor {
    listener: TcpListener,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

/// Clonable trigger for the acceptor's cancellation channel.
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    tx: watch::Sender<bool>,
}

impl ShutdownHandle {
    pub fn shutdown(&self) {
        let _ = self.tx.send(true);
    }
}

impl Acceptor {
    pub fn bind(config: &ServerConfig) -> Result<Self, ListenerError> {
        let listener = bind_tcp(config.listen_addr(), config.backlog)?;
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Ok(Self {
            listener,
            shutdown_tx,
            shutdown_rx,
        })
    }

    /// Address the socket actually bound to (resolves port 0).
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            tx: self.shutdown_tx.clone(),
        }
    }

    /// Accept connections until the shutdown handle fires. Each accepted
    /// connection is logged and dropped without a byte read or written;
    /// an accept failure is logged and the loop continues.
    pub async fn run(mut self) -> Result<()> {
        loop {
            tokio::select! {
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        info!(ip = %peer.ip(), "connection accepted");
                        drop(stream);
                    }
                    Err(err) => {
                        warn!(%err, "accept failed");
                    }
                },
                _ = self.shutdown_rx.changed() => {
                    if *self.shutdown_rx.borrow() {
                        info!("acceptor shutting down");
                        break;
                    }
                }
            }
        }

        Ok(())
    }
}
