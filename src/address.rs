//! Short display names for mesh addresses.

use std::collections::HashMap;

/// Shortens each address to its last colon-separated group, or to its last
/// two groups when another address in `addrs` ends in the same group.
///
/// No lookups are performed. Two addresses that share their last two groups
/// still map to the same short form.
///
/// ```
/// use cjdadmin::address::truncate;
///
/// let addrs = ["fc00::1:abcd", "fc00::2:abcd", "fc00::3:1234"];
/// let short = truncate(&addrs);
/// assert_eq!(short["fc00::1:abcd"], "1:abcd");
/// assert_eq!(short["fc00::3:1234"], "1234");
/// ```
pub fn truncate<S: AsRef<str>>(addrs: &[S]) -> HashMap<String, String> {
    let last_group = |addr: &str| addr.rsplit(':').next().unwrap_or(addr).to_string();

    addrs
        .iter()
        .enumerate()
        .map(|(i, addr)| {
            let addr = addr.as_ref();
            let tail = last_group(addr);
            let collides = addrs
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && last_group(other.as_ref()) == tail);

            let short = if collides {
                let mut groups = addr.rsplitn(3, ':');
                let last = groups.next().unwrap_or_default();
                match groups.next() {
                    Some(prev) => format!("{}:{}", prev, last),
                    None => last.to_string(),
                }
            } else {
                tail
            };
            (addr.to_string(), short)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_suffixes() {
        let addrs = vec![
            "fc8f:cc50:70b3:ed5b:2a8d:3f9e:e8d6:1b38".to_string(),
            "fcd1:0fc8:ae94:1fd3:3c2b:14bf:96d5:82c5".to_string(),
        ];
        let short = truncate(&addrs);
        assert_eq!(short.len(), 2);
        assert_eq!(short[&addrs[0]], "1b38");
        assert_eq!(short[&addrs[1]], "82c5");
    }

    #[test]
    fn test_colliding_suffixes() {
        let addrs = ["fc00:0:0:0:0:0:aaaa:1b38", "fc00:0:0:0:0:0:bbbb:1b38"];
        let short = truncate(&addrs);
        assert_eq!(short["fc00:0:0:0:0:0:aaaa:1b38"], "aaaa:1b38");
        assert_eq!(short["fc00:0:0:0:0:0:bbbb:1b38"], "bbbb:1b38");
    }

    #[test]
    fn test_identical_tails_still_collide() {
        let addrs = ["fc01::aaaa:1b38", "fc02::aaaa:1b38"];
        let short = truncate(&addrs);
        assert_eq!(short["fc01::aaaa:1b38"], short["fc02::aaaa:1b38"]);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(truncate::<&str>(&[]).is_empty());
        assert_eq!(truncate(&["fc00::1"])["fc00::1"], "1");
    }
}
