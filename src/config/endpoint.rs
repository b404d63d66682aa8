//! Endpoint string parsing.
//!
//! Two grammars are accepted:
//! - URL form, recognised by `://`: `protocol://host[:port][/path]`
//! - Host form: `host:port`, protocol defaults to `http`
//!
//! In URL form the port is read from the authority as written, so an explicit
//! default port (`http://a:80`) is kept. In both forms a missing, non-numeric
//! or out of range port is 0.

use url::Url;

use crate::config::error::FormatError;
use crate::config::schema::{Endpoint, DEFAULT_PROTOCOL};

/// Parse an endpoint string supplied through the flag or env var `field`.
pub fn parse_endpoint(field: &'static str, raw: &str) -> Result<Endpoint, FormatError> {
    if raw.contains("://") {
        parse_url(field, raw)
    } else {
        parse_host_port(field, raw)
    }
}

fn parse_url(field: &'static str, raw: &str) -> Result<Endpoint, FormatError> {
    let url = match Url::parse(raw) {
        Ok(url) => url,
        // Non-numeric or out of range port: keep the rest of the URL, port becomes 0.
        Err(url::ParseError::InvalidPort) => {
            Url::parse(&without_port(raw)).map_err(|_| FormatError::Url { field })?
        }
        Err(_) => return Err(FormatError::Url { field }),
    };

    let host = url
        .host_str()
        .unwrap_or_default()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .to_string();

    Ok(Endpoint {
        protocol: url.scheme().to_string(),
        host,
        port: authority_port(raw),
    })
}

fn parse_host_port(field: &'static str, raw: &str) -> Result<Endpoint, FormatError> {
    let mut parts = raw.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(host), Some(port), None) if !host.is_empty() && !port.is_empty() => Ok(Endpoint {
            protocol: DEFAULT_PROTOCOL.to_string(),
            host: host.to_string(),
            port: port.parse().unwrap_or(0),
        }),
        _ => Err(FormatError::HostPort { field }),
    }
}

/// Byte range of `host[:port]` inside a URL string, userinfo excluded.
fn host_port_bounds(raw: &str) -> (usize, usize) {
    let start = raw.find("://").map(|i| i + 3).unwrap_or(0);
    let rest = &raw[start..];
    let end = start + rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let start = raw[start..end]
        .rfind('@')
        .map(|i| start + i + 1)
        .unwrap_or(start);
    (start, end)
}

/// Index of the `:` separating host and port within `host_port`, if any.
fn port_separator(host_port: &str) -> Option<usize> {
    if host_port.starts_with('[') {
        let close = host_port.find(']')?;
        host_port[close..].find(':').map(|i| close + i)
    } else {
        host_port.rfind(':')
    }
}

fn authority_port(raw: &str) -> u16 {
    let (start, end) = host_port_bounds(raw);
    let host_port = &raw[start..end];
    port_separator(host_port)
        .and_then(|i| host_port[i + 1..].parse().ok())
        .unwrap_or(0)
}

fn without_port(raw: &str) -> String {
    let (start, end) = host_port_bounds(raw);
    let host_port = &raw[start..end];
    match port_separator(host_port) {
        Some(i) => format!("{}{}{}", &raw[..start], &host_port[..i], &raw[end..]),
        None => raw.to_string(),
    }
}
