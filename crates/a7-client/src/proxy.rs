//! NO_PROXY bypass decisions.
//!
//! The environment's `NO_PROXY` pattern list is consulted exactly once, at
//! client construction; later changes to the environment have no effect on
//! a running client.

use url::Url;

/// Read the NO_PROXY pattern list from the environment.
///
/// The uppercase variant wins over the lowercase one, matching how the
/// ambient proxy variables are conventionally resolved.
pub(crate) fn no_proxy_from_env() -> String {
    std::env::var("NO_PROXY")
        .or_else(|_| std::env::var("no_proxy"))
        .unwrap_or_default()
}

/// Decide whether requests to `base_url` must bypass any configured proxy.
///
/// `patterns` is a raw comma-separated NO_PROXY value. Supported entries:
/// `*` (bypass everything), leading-dot domain suffixes (`.example.com`
/// matches `host.example.com` and `example.com` itself), exact hostnames,
/// and bare domains matching any subdomain. A URL whose hostname cannot be
/// extracted matches nothing except `*`.
pub(crate) fn should_bypass(base_url: &str, patterns: &str) -> bool {
    if patterns.is_empty() {
        return false;
    }
    if patterns == "*" {
        return true;
    }

    let hostname = Url::parse(base_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_default();

    for raw_pattern in patterns.split(',') {
        let pattern = raw_pattern.trim();
        if pattern.is_empty() {
            continue;
        }

        if let Some(bare) = pattern.strip_prefix('.') {
            // Domain suffix match, including the bare domain itself
            if hostname.ends_with(pattern) || hostname.ends_with(bare) {
                return true;
            }
        } else if pattern == hostname {
            return true;
        } else if hostname.ends_with(&format!(".{pattern}")) {
            // Subdomain match
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_never_bypasses() {
        assert!(!should_bypass("https://a7.deutsche-boerse.com/api", ""));
    }

    #[test]
    fn wildcard_bypasses_any_hostname() {
        assert!(should_bypass("https://a7.deutsche-boerse.com/api", "*"));
        assert!(should_bypass("https://anything.example.org", "*"));
        assert!(should_bypass("not a url at all", "*"));
    }

    #[test]
    fn leading_dot_matches_subdomain_and_bare_domain() {
        assert!(should_bypass("https://host.example.com", ".example.com"));
        assert!(should_bypass("https://example.com", ".example.com"));
        assert!(!should_bypass("https://notexample.com", ".example.com"));
    }

    #[test]
    fn exact_hostname_matches() {
        assert!(should_bypass("https://example.com/api", "example.com"));
    }

    #[test]
    fn bare_domain_matches_subdomains() {
        assert!(should_bypass("https://sub.example.com", "example.com"));
        assert!(!should_bypass("https://notexample.com", "example.com"));
    }

    #[test]
    fn comma_separated_list_with_whitespace() {
        let patterns = "internal.corp , example.com,, .dev.local";
        assert!(should_bypass("https://internal.corp", patterns));
        assert!(should_bypass("https://a.example.com", patterns));
        assert!(should_bypass("https://x.dev.local", patterns));
        assert!(!should_bypass("https://other.org", patterns));
    }

    #[test]
    fn malformed_url_matches_nothing_but_wildcard() {
        assert!(!should_bypass("::not-a-url::", "example.com,.corp"));
        assert!(should_bypass("::not-a-url::", "*"));
    }
}
