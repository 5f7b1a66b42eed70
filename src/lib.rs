//! cjdadmin - a client for the cjdns admin interface
//!
//! Talks to a running cjdns node over its admin RPC port, reads its routing
//! table and works out which nodes are nearby.
//!
//! # Modules
//!
//! - [`bencode`] - Wire encoding of admin messages
//! - [`admin`] - Sessions, authenticated calls, routing table dump and filtering
//! - [`config`] - `cjdroute.conf` reader and writer
//! - [`address`] - Short display names for mesh addresses
//! - [`constants`] - Protocol constants and defaults

pub mod address;
pub mod admin;
pub mod bencode;
pub mod config;
pub mod constants;

pub use admin::{
    filter_routes, AdminError, AdminOptions, DumpPages, Response, Route, Session,
};
pub use bencode::{decode, encode, BencodeError, Value};
pub use config::{Config, ConfigError};
