//! Site identifier extraction from a URL host.

use url::{Host, Url};

/// Extracts a short lowercase site identifier from `url`.
///
/// The host is lowercased, a single leading `www.` is dropped, and the first
/// dot-separated label is returned. Ports and userinfo are not part of the host.
/// Internationalized hosts keep their Unicode form.
///
/// Never fails. When the parser rejects a URL that still has a `//authority`
/// part (a bad port, for one), the authority text is used as-is. Schemeless
/// strings such as `flipkart.com/search` have no authority and yield `""`.
pub fn extract_website_name(url: &str) -> String {
    let host = match Url::parse(url) {
        Ok(parsed) => parsed.host().map(host_text).unwrap_or_default(),
        Err(_) => raw_authority_host(url).unwrap_or_default().to_string(),
    };
    let host = host.to_lowercase();

    let host = host.strip_prefix("www.").unwrap_or(&host);
    host.split('.').next().unwrap_or_default().to_string()
}

fn host_text(host: Host<&str>) -> String {
    match host {
        Host::Domain(domain) => idna::domain_to_unicode(domain).0,
        other => other.to_string(),
    }
}

/// Host part of `scheme://user@host:port/...` (or `//host/...`) without parsing it.
fn raw_authority_host(url: &str) -> Option<&str> {
    let (scheme, rest) = url.split_once("//")?;
    if !(scheme.is_empty() || scheme.ends_with(':')) || scheme.contains('/') {
        return None;
    }

    let end = rest
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(rest.len());
    let authority = &rest[..end];
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);

    let host = match host_port.find(']') {
        Some(close) if host_port.starts_with('[') => &host_port[..=close],
        _ => host_port.split(':').next().unwrap_or_default(),
    };
    Some(host)
}
