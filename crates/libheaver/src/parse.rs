//! Grammars for heaver's free text answers
//!
//! heaver has no machine readable output for lifecycle commands, so the driver
//! recognises a handful of fixed shapes. Each grammar lives in its own function.
use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::action::Action;
use crate::container::{Container, ContainerStatus};

/// Dotted quad anywhere in the text, e.g. `created box1 10.0.0.5/24`.
/// Groups are not range checked.
static IP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})").unwrap());

/// One line of `heaver -L`, e.g. `c1: running, ips: 10.0.0.2/24`.
/// Captures the name, the lowercase status word and the address before the first `/`
/// that follows the last `: `.
static LISTING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*([0-9A-Za-z_.\-]+):\s([a-z]*).*:\s([0-9.]*)/").unwrap()
});

/// A parsed line of the container listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub status: ContainerStatus,
    pub ip: Option<String>,
}

impl ListingEntry {
    pub fn into_container(self, host: Option<&str>) -> Container {
        Container::listed(&self.name, self.status, self.ip, host)
    }
}

/// Returns the first dotted quad found in `text`
pub fn find_ip(text: &str) -> Option<String> {
    IP_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

/// Whether heaver confirmed `action` in its output
pub fn is_confirmed(text: &str, action: Action) -> bool {
    text.contains(action.confirmation())
}

pub fn parse_listing_line(line: &str) -> Option<ListingEntry> {
    let caps = LISTING_RE.captures(line)?;
    let ip = caps
        .get(3)
        .map(|m| m.as_str())
        .filter(|ip| !ip.is_empty())
        .map(str::to_owned);

    Some(ListingEntry {
        name: caps[1].to_owned(),
        status: ContainerStatus::from_listing(&caps[2]),
        ip,
    })
}

/// Parses the whole listing. Lines that don't match are skipped and a name seen
/// twice keeps its last entry.
pub fn parse_listing(text: &str, host: Option<&str>) -> HashMap<String, Container> {
    let mut containers = HashMap::new();
    for line in text.split('\n') {
        match parse_listing_line(line) {
            Some(entry) => {
                containers.insert(entry.name.clone(), entry.into_container(host));
            }
            None if !line.trim().is_empty() => {
                tracing::trace!(line, "skipping unrecognised listing line");
            }
            None => {}
        }
    }
    containers
}

#[cfg(test)]
mod tests {
    use quickcheck::TestResult;

    use super::*;

    #[test]
    fn test_find_ip() {
        assert_eq!(
            find_ip("box1 created, address 10.0.0.5/24 on br0"),
            Some("10.0.0.5".to_owned())
        );
        assert_eq!(
            find_ip("10.0.0.5 and 10.0.0.6"),
            Some("10.0.0.5".to_owned())
        );
        assert_eq!(find_ip("no address here"), None);
        assert_eq!(find_ip("10.0.5"), None);
    }

    #[test]
    fn test_find_ip_is_syntactic() {
        assert_eq!(find_ip("999.888.777.666"), Some("999.888.777.666".to_owned()));
    }

    #[test]
    fn test_is_confirmed() {
        assert!(is_confirmed("container c1 started", Action::Start));
        assert!(is_confirmed("c1 stopped\n", Action::Stop));
        assert!(is_confirmed("c1 destroyed", Action::Destroy));
        assert!(!is_confirmed("c1 started", Action::Stop));
        assert!(!is_confirmed("", Action::Destroy));
    }

    #[test]
    fn test_parse_listing_line() {
        let entry = parse_listing_line("c1: running, ips: 10.0.0.2/24 ...").unwrap();
        assert_eq!(
            entry,
            ListingEntry {
                name: "c1".to_owned(),
                status: ContainerStatus::Running,
                ip: Some("10.0.0.2".to_owned()),
            }
        );
    }

    #[test]
    fn test_parse_listing_line_variants() {
        let entry = parse_listing_line("  web-01.prod: stopped, ips: 192.168.1.7/16").unwrap();
        assert_eq!(entry.name, "web-01.prod");
        assert_eq!(entry.status, ContainerStatus::Stopped);
        assert_eq!(entry.ip.as_deref(), Some("192.168.1.7"));

        let entry = parse_listing_line("c2: frozen, ips: /24").unwrap();
        assert_eq!(entry.status, ContainerStatus::Error);
        assert_eq!(entry.ip, None);

        assert!(parse_listing_line("").is_none());
        assert!(parse_listing_line("total: 3 containers").is_none());
        assert!(parse_listing_line(": running, ips: 10.0.0.2/24").is_none());
    }

    #[test]
    fn test_parse_listing() {
        let output = "\
c1: running, ips: 10.0.0.2/24
garbage line
c2: stopped, ips: 10.0.0.3/24

c1: stopped, ips: 10.0.0.9/24
";
        let containers = parse_listing(output, Some("node7"));
        assert_eq!(containers.len(), 2);

        let c1 = &containers["c1"];
        assert_eq!(c1.status, ContainerStatus::Stopped);
        assert_eq!(c1.ip.as_deref(), Some("10.0.0.9"));
        assert_eq!(c1.host.as_deref(), Some("node7"));
        assert!(c1.image.is_empty());

        assert_eq!(containers["c2"].ip.as_deref(), Some("10.0.0.3"));
    }

    #[test]
    fn test_parse_listing_without_host() {
        let containers = parse_listing("c1: running, ips: 10.0.0.2/24", None);
        assert_eq!(
            containers["c1"],
            Container::listed(
                "c1",
                ContainerStatus::Running,
                Some("10.0.0.2".to_owned()),
                None
            )
        );
    }

    quickcheck! {
        fn property_find_ip_returns_first_quad(prefix: String, a: u8, b: u8, c: u8, d: u8) -> TestResult {
            if find_ip(&prefix).is_some() {
                return TestResult::discard();
            }
            let text = format!("{prefix} {a}.{b}.{c}.{d}/24 then 1.2.3.4");
            let expected = format!("{a}.{b}.{c}.{d}");
            let first = find_ip(&text);
            TestResult::from_bool(first.as_deref() == Some(expected.as_str()) && first == find_ip(&text))
        }

        fn property_listing_skips_garbage(garbage: Vec<String>, count: u8) -> bool {
            let garbage: Vec<String> = garbage
                .into_iter()
                .map(|line| line.replace(['\n', '\r'], " "))
                .filter(|line| parse_listing_line(line).is_none())
                .collect();
            let count = count as usize % 32;

            let mut lines = Vec::new();
            let mut junk = garbage.iter();
            for i in 0..count {
                lines.push(format!("c{i}: running, ips: 10.0.{}.{}/24", i / 256, i % 256));
                if let Some(line) = junk.next() {
                    lines.push(line.clone());
                }
            }
            lines.extend(junk.cloned());

            parse_listing(&lines.join("\n"), None).len() == count
        }
    }
}
