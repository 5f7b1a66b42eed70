use std::collections::BTreeSet;

use super::session::Session;
use super::table::{DumpPages, Route};
use crate::constants::SELF_PATH;

/// Bits of `path` below its highest set bit.
///
/// This is `u64::MAX >> (64 - floor(log2(path)))` done with integer
/// bit-length. `None` for labels 0 and 1, which have no bits below the
/// terminator.
fn prefix_mask(path: u64) -> Option<u64> {
    if path <= SELF_PATH {
        return None;
    }
    Some(u64::MAX >> (path.leading_zeros() + 1))
}

/// True when `route` lies one structural hop from `other`: the low bits of
/// `route.path` match all of `other.path` below its terminator bit.
fn is_adjacent(route: &Route, other: &Route) -> bool {
    match prefix_mask(other.path) {
        Some(mask) => route.path & mask == other.path & mask,
        None => false,
    }
}

/// Counts routes adjacent to `table[index]`, stopping at `limit`.
fn sibling_count(table: &[Route], index: usize, limit: usize) -> usize {
    let route = &table[index];
    table
        .iter()
        .enumerate()
        .filter(|&(i, other)| i != index && !other.is_self())
        .filter(|&(_, other)| is_adjacent(route, other))
        .take(limit)
        .count()
}

/// Filters a routing table.
///
/// - `host`: when non-empty, keep only routes whose `ip` equals it.
/// - `max_link`: when non-zero, drop routes with a higher (worse) link value.
/// - `max_hops`: when non-zero, drop routes that are adjacent to `max_hops`
///   or more other routes in the table. The node's own route never counts.
///
/// With neither a host nor a hop limit there is nothing to filter on and the
/// result is empty. Surviving routes keep their table order.
///
/// ```
/// use cjdadmin::admin::{filter_routes, Route};
///
/// let route = |ip: &str, path| Route { ip: ip.into(), path, link: 0, version: 0 };
/// let table = vec![route("fc00::1", 1), route("fc00::2", 0x13), route("fc00::3", 0x15)];
///
/// let found = filter_routes(&table, "fc00::2", 0, 0);
/// assert_eq!(found.len(), 1);
/// assert!(filter_routes(&table, "", 0, 0).is_empty());
/// ```
pub fn filter_routes(table: &[Route], host: &str, max_hops: usize, max_link: u64) -> Vec<Route> {
    if table.is_empty() || (host.is_empty() && max_hops == 0) {
        return Vec::new();
    }

    table
        .iter()
        .enumerate()
        .filter(|(_, r)| host.is_empty() || r.ip == host)
        .filter(|(_, r)| max_link == 0 || r.link <= max_link)
        .filter(|&(i, _)| max_hops == 0 || sibling_count(table, i, max_hops) < max_hops)
        .map(|(_, r)| r.clone())
        .collect()
}

/// Addresses of all routes in `table` within `max_hops`, excluding the
/// node's own route.
pub fn peer_addresses(table: &[Route], max_hops: usize) -> BTreeSet<String> {
    filter_routes(table, "", max_hops, 0)
        .into_iter()
        .filter(|r| !r.is_self())
        .map(|r| r.ip)
        .collect()
}

impl Session {
    /// Dumps the whole table and returns the distinct addresses within
    /// `max_hops`. A `max_hops` of 0 supplies no criterion and yields an
    /// empty set.
    pub async fn peers(&mut self, max_hops: usize) -> BTreeSet<String> {
        let table = self.dump_table(DumpPages::All).await;
        peer_addresses(&table, max_hops)
    }
}
