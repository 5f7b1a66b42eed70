//! Protocol constants and tuning parameters.
//!
//! Command names and status strings match what the cjdns admin interface
//! sends and expects on the wire.

use std::time::Duration;

// ============================================================================
// Endpoint defaults
// ============================================================================

/// Address the admin interface binds to unless configured otherwise
pub const DEFAULT_ADDRESS: &str = "127.0.0.1";

/// Default admin RPC port
pub const DEFAULT_PORT: u16 = 11234;

/// Per-exchange receive timeout applied by the transport
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// Commands
// ============================================================================

/// Wrapper command for authenticated calls; the real command goes in `aq`
pub const COMMAND_AUTH: &str = "auth";

/// Liveness probe, needs no authentication
pub const COMMAND_PING: &str = "ping";

/// Requests a session cookie
pub const COMMAND_COOKIE: &str = "cookie";

/// Dumps one page of the routing table
pub const COMMAND_DUMP_TABLE: &str = "NodeStore_dumpTable";

// ============================================================================
// Status strings
// ============================================================================

/// Value of `q` in a ping response
pub const STATUS_PONG: &str = "pong";

/// Value of `error` when the password or digest was rejected
pub const ERROR_AUTH_FAILED: &str = "Auth failed.";

// ============================================================================
// Limits
// ============================================================================

/// Largest datagram we accept from the admin interface
pub const MAX_DATAGRAM_SIZE: usize = 65_535;

/// Ceiling on pages fetched by a full table dump
pub const MAX_TABLE_PAGES: u64 = 4096;

/// Path label of the node's own zero-hop route
pub const SELF_PATH: u64 = 1;
