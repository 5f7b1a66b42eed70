use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::{lookup_host, UdpSocket};
use tokio::time::timeout;
use tracing::debug;

use super::error::AdminError;
use super::message::Response;
use crate::constants::MAX_DATAGRAM_SIZE;

/// A connected UDP socket to one admin endpoint.
///
/// Each request is one datagram and each response is one datagram. Requests
/// carry a `txid` that the daemon echoes back; a reply tagged with any other
/// txid belongs to an exchange that already timed out and is discarded.
/// `exchange` takes `&mut self`, so exchanges never overlap.
pub struct AdminTransport {
    socket: UdpSocket,
    addr: SocketAddr,
    read_timeout: Option<Duration>,
    buf: Vec<u8>,
    next_txid: u64,
}

impl AdminTransport {
    pub async fn connect(
        address: &str,
        port: u16,
        read_timeout: Option<Duration>,
    ) -> Result<Self, AdminError> {
        let addr = resolve(address, port).await?;

        let bind_addr = if addr.is_ipv6() { "[::]:0" } else { "0.0.0.0:0" };
        let socket = UdpSocket::bind(bind_addr).await?;
        socket.connect(addr).await?;

        Ok(Self {
            socket,
            addr,
            read_timeout,
            buf: vec![0u8; MAX_DATAGRAM_SIZE],
            next_txid: 0,
        })
    }

    /// Allocates the transaction id for the next request.
    pub fn next_txid(&mut self) -> String {
        self.next_txid += 1;
        self.next_txid.to_string()
    }

    /// Sends `request`, tagged with `txid`, and waits for its reply.
    ///
    /// Replies without a `txid` are accepted as-is.
    pub async fn exchange(
        &mut self,
        request: &[u8],
        txid: &str,
    ) -> Result<Response, AdminError> {
        self.discard_stale();
        self.socket.send(request).await?;

        match self.read_timeout {
            Some(limit) => timeout(limit, self.receive(txid))
                .await
                .map_err(|_| AdminError::Timeout)?,
            None => self.receive(txid).await,
        }
    }

    async fn receive(&mut self, txid: &str) -> Result<Response, AdminError> {
        loop {
            let n = self.socket.recv(&mut self.buf).await?;
            let response = Response::from_datagram(&self.buf[..n])?;

            let stale = matches!(response.get_str("txid"), Some(got) if got != txid);
            if !stale {
                return Ok(response);
            }
            debug!(expected = txid, "discarding reply to an earlier request");
        }
    }

    /// Drops datagrams already queued from exchanges that timed out.
    fn discard_stale(&mut self) {
        let mut stale = 0usize;
        while self.socket.try_recv(&mut self.buf).is_ok() {
            stale += 1;
        }
        if stale > 0 {
            debug!(stale, "discarded queued admin replies");
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

async fn resolve(address: &str, port: u16) -> Result<SocketAddr, AdminError> {
    // Bare IPv6 literals need brackets before lookup_host will take them.
    let target = if address.contains(':') && !address.starts_with('[') {
        format!("[{}]:{}", address, port)
    } else {
        format!("{}:{}", address, port)
    };

    let found = lookup_host(target.as_str())
        .await
        .map_err(|_| AdminError::InvalidAddress(target.clone()))?
        .next();
    found.ok_or(AdminError::InvalidAddress(target))
}
