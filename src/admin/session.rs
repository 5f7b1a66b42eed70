use std::net::SocketAddr;

use tracing::{debug, info};

use super::error::AdminError;
use super::message::{encode_tagged_request, Response};
use super::options::AdminOptions;
use super::transport::AdminTransport;
use crate::bencode::Value;
use crate::constants::{COMMAND_COOKIE, COMMAND_PING, STATUS_PONG};

/// An open session with one admin interface.
///
/// A session is only handed out once the daemon has answered a ping and
/// issued a cookie, so calls made through it are authenticated whenever a
/// password was supplied. The cookie is never refreshed: if the daemon
/// forgets it, later authenticated calls fail like any other call.
///
/// The session owns its socket. Dropping the session, or calling
/// [`Session::close`], releases it.
///
/// # Examples
///
/// ```no_run
/// use cjdadmin::admin::{AdminOptions, DumpPages, Session};
///
/// # async fn example() -> Result<(), cjdadmin::admin::AdminError> {
/// let mut session = Session::connect(AdminOptions::new("", None, "password")).await?;
/// let routes = session.dump_table(DumpPages::All).await;
/// println!("{} routes", routes.len());
/// session.close();
/// # Ok(())
/// # }
/// ```
pub struct Session {
    transport: AdminTransport,
    address: String,
    port: u16,
    password: String,
    cookie: String,
}

impl Session {
    /// Opens a socket, checks liveness and fetches a cookie.
    ///
    /// Fails with [`AdminError::NotResponding`] if the ping is not answered
    /// with `pong`, [`AdminError::AuthenticationRejected`] if the daemon
    /// refuses the password, and [`AdminError::NoCookie`] if no cookie is
    /// handed out.
    pub async fn connect(options: AdminOptions) -> Result<Self, AdminError> {
        let transport =
            AdminTransport::connect(&options.address, options.port, options.timeout).await?;

        let mut session = Self {
            transport,
            address: options.address,
            port: options.port,
            password: options.password,
            cookie: String::new(),
        };

        let pong = session.send(COMMAND_PING, None).await;
        if !session.password.is_empty() && pong.is_auth_failure() {
            return Err(AdminError::AuthenticationRejected);
        }
        if pong.get_str("q") != Some(STATUS_PONG) {
            return Err(AdminError::NotResponding);
        }

        session.cookie = session
            .fetch_cookie()
            .await
            .filter(|c| !c.is_empty())
            .ok_or(AdminError::NoCookie)?;

        // The first ping carried no credentials, so this is where a wrong
        // password actually shows up.
        if !session.password.is_empty() {
            let verified = session.send(COMMAND_PING, None).await;
            if verified.is_auth_failure() {
                return Err(AdminError::AuthenticationRejected);
            }
        }

        info!(
            addr = %session.transport.addr(),
            authenticated = session.is_authenticated(),
            "connected to admin interface"
        );

        Ok(session)
    }

    /// Performs one request/response exchange and reports why it failed.
    ///
    /// An empty `command` returns an empty response without touching the
    /// socket.
    pub async fn call(
        &mut self,
        command: &str,
        args: Option<Value>,
    ) -> Result<Response, AdminError> {
        if command.is_empty() {
            return Ok(Response::empty());
        }

        let txid = self.transport.next_txid();
        let request =
            encode_tagged_request(command, args, Some(&txid), &self.password, &self.cookie)?;
        self.transport.exchange(&request, &txid).await
    }

    /// Like [`Session::call`], but any failure becomes an empty response.
    pub async fn send(&mut self, command: &str, args: Option<Value>) -> Response {
        match self.call(command, args).await {
            Ok(response) => response,
            Err(e) => {
                debug!(command, error = %e, "admin call failed");
                Response::empty()
            }
        }
    }

    /// Pings the daemon and reports whether it answered `pong`.
    pub async fn ping(&mut self) -> bool {
        self.send(COMMAND_PING, None).await.get_str("q") == Some(STATUS_PONG)
    }

    /// Asks the daemon for a fresh cookie without storing it.
    pub async fn fetch_cookie(&mut self) -> Option<String> {
        self.send(COMMAND_COOKIE, None)
            .await
            .get_str("cookie")
            .map(String::from)
    }

    /// True when calls are being signed.
    pub fn is_authenticated(&self) -> bool {
        !self.password.is_empty() && !self.cookie.is_empty()
    }

    pub fn cookie(&self) -> &str {
        &self.cookie
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn peer_addr(&self) -> SocketAddr {
        self.transport.addr()
    }

    /// Releases the socket.
    pub fn close(self) {
        debug!(addr = %self.transport.addr(), "closing admin session");
    }
}

/// Sends a single unauthenticated ping to `address:port`.
///
/// Returns false if the socket cannot be opened or the reply is not `pong`.
pub async fn ping(address: &str, port: u16) -> bool {
    match one_shot(address, port, COMMAND_PING).await {
        Some(response) => response.get_str("q") == Some(STATUS_PONG),
        None => false,
    }
}

/// Requests a cookie from `address:port` without opening a session.
pub async fn cookie(address: &str, port: u16) -> Option<String> {
    one_shot(address, port, COMMAND_COOKIE)
        .await?
        .get_str("cookie")
        .map(String::from)
}

async fn one_shot(address: &str, port: u16, command: &str) -> Option<Response> {
    let options = AdminOptions::new(address, Some(port), "");
    let mut transport =
        match AdminTransport::connect(&options.address, options.port, options.timeout).await {
            Ok(t) => t,
            Err(e) => {
                debug!(address, port, error = %e, "failed to open admin socket");
                return None;
            }
        };

    let txid = transport.next_txid();
    let request = encode_tagged_request(command, None, Some(&txid), "", "").ok()?;
    transport.exchange(&request, &txid).await.ok()
}
