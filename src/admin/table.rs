use std::fmt;

use tracing::{debug, warn};

use super::session::Session;
use crate::bencode::Value;
use crate::constants::{COMMAND_DUMP_TABLE, MAX_TABLE_PAGES, SELF_PATH};

/// One entry of the node's routing table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    /// Address of the target node.
    pub ip: String,
    /// 64-bit switch label leading to the node.
    pub path: u64,
    /// Unitless link quality; lower is better.
    pub link: u64,
    /// Protocol version the node advertised. Informational.
    pub version: i64,
}

impl Route {
    /// Decodes one `routingTable` row. Rows without an address or link, or
    /// whose path is not a 64-bit label, yield `None`.
    pub fn from_row(row: &Value) -> Option<Self> {
        let path = parse_path(row.get_str(b"path")?)?;
        let ip = row.get_str(b"ip")?.to_string();
        let link = u64::try_from(row.get_int(b"link")?).ok()?;
        let version = row.get_int(b"version").unwrap_or(0);

        Some(Self {
            ip,
            path,
            link,
            version,
        })
    }

    /// True for the node's own zero-hop route.
    pub fn is_self(&self) -> bool {
        self.path == SELF_PATH
    }

    /// The path in the dotted form the daemon prints.
    pub fn path_label(&self) -> String {
        format_path(self.path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} link={} v{}",
            self.ip,
            format_path(self.path),
            self.link,
            self.version
        )
    }
}

/// Parses a switch label such as `0000.0000.0000.0013`.
///
/// `.` and `:` separators are ignored; what remains must be exactly 16 hex
/// digits, read big-endian.
///
/// ```
/// use cjdadmin::admin::parse_path;
///
/// assert_eq!(parse_path("0000.0000.0000.0013"), Some(0x13));
/// assert_eq!(parse_path("ffff:0000:0000:0001"), Some(0xffff_0000_0000_0001));
/// assert_eq!(parse_path("0000.0013"), None);
/// ```
pub fn parse_path(label: &str) -> Option<u64> {
    let digits: String = label.chars().filter(|c| !matches!(c, '.' | ':')).collect();
    let bytes: [u8; 8] = hex::decode(digits).ok()?.try_into().ok()?;
    Some(u64::from_be_bytes(bytes))
}

/// Formats a path as four dot-separated groups of four hex digits.
pub fn format_path(path: u64) -> String {
    let hex = format!("{:016x}", path);
    format!("{}.{}.{}.{}", &hex[0..4], &hex[4..8], &hex[8..12], &hex[12..16])
}

/// Which part of the routing table to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpPages {
    /// Every page, following the `more` marker.
    All,
    /// Exactly one page.
    Page(u64),
}

impl From<i64> for DumpPages {
    /// Negative page numbers mean "all pages".
    fn from(page: i64) -> Self {
        u64::try_from(page).map_or(DumpPages::All, DumpPages::Page)
    }
}

impl Session {
    /// Retrieves the routing table.
    ///
    /// Pages are requested strictly in order since only the response to page
    /// `n` says whether page `n + 1` exists. Malformed rows are skipped and a
    /// page that yields no usable response ends the dump with whatever was
    /// collected so far.
    pub async fn dump_table(&mut self, pages: DumpPages) -> Vec<Route> {
        let (mut page, follow) = match pages {
            DumpPages::All => (0, true),
            DumpPages::Page(n) => (n, false),
        };

        let mut table = Vec::new();
        loop {
            let Ok(wire_page) = i64::try_from(page) else {
                warn!(page, "page number does not fit the wire format");
                break;
            };
            let args = Value::dict([("page", Value::Integer(wire_page))]);
            let response = self.send(COMMAND_DUMP_TABLE, Some(args)).await;

            let rows = response
                .get("routingTable")
                .and_then(Value::as_list)
                .unwrap_or_default();

            let before = table.len();
            table.extend(rows.iter().filter_map(Route::from_row));
            let dropped = rows.len() - (table.len() - before);
            if dropped > 0 {
                debug!(page, dropped, "skipped malformed routing table rows");
            }

            if !follow || !response.contains("more") {
                break;
            }

            page += 1;
            if page >= MAX_TABLE_PAGES {
                warn!(page, "routing table dump hit the page limit");
                break;
            }
        }

        debug!(routes = table.len(), "routing table dumped");
        table
    }
}
