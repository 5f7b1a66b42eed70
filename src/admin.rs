//! Client for the cjdns admin RPC interface.
//!
//! The admin interface speaks bencoded dictionaries over UDP, one datagram
//! per request and one per response. Privileged calls are wrapped in an
//! `auth` envelope signed with the shared password and a cookie handed out
//! by the daemon.
//!
//! # Session bootstrap
//!
//! [`Session::connect`] pings the daemon, fetches a cookie and, when a
//! password was given, checks that the daemon accepts it:
//!
//! ```text
//! client                     daemon
//!   | -- {q: ping} ----------> |
//!   | <--------- {q: pong} --- |
//!   | -- {q: cookie} --------> |
//!   | <------ {cookie: ..} --- |
//!   | -- {q: auth, aq: ping,   |
//!   |     cookie, hash} -----> |
//!   | <--------- {q: pong} --- |
//! ```
//!
//! # Routing table
//!
//! [`Session::dump_table`] pages through `NodeStore_dumpTable`;
//! [`filter_routes`] and [`Session::peers`] narrow the result by address,
//! link quality and structural hop distance.

mod error;
mod filter;
mod message;
mod options;
mod session;
mod table;
mod transport;

pub use error::AdminError;
pub use filter::{filter_routes, peer_addresses};
pub use message::{auth_digest, encode_request, Response};
pub use options::AdminOptions;
pub use session::{cookie, ping, Session};
pub use table::{format_path, parse_path, DumpPages, Route};
