//! Reassembly of a URL string from components.

use super::UrlValue;

/// A component counts as set only when it is non-empty and not `"0"`.
fn truthy(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty() && *v != "0")
}

/// Concatenates the set components in fixed order. May return an empty
/// string; the caller decides whether that is an error.
pub(super) fn assemble(v: &UrlValue) -> String {
    let mut url = String::new();

    if let Some(scheme) = truthy(&v.scheme) {
        url.push_str(scheme);
        url.push_str("://");
    }

    // pass is dropped entirely without a user.
    if let Some(user) = truthy(&v.user) {
        url.push_str(user);
        if let Some(pass) = truthy(&v.pass) {
            url.push(':');
            url.push_str(pass);
        }
        url.push('@');
    }

    if let Some(host) = truthy(&v.host) {
        url.push_str(host);
    }

    if let Some(port) = v.port.filter(|p| *p != 0) {
        url.push(':');
        url.push_str(&port.to_string());
    }

    if let Some(path) = truthy(&v.path) {
        url.push('/');
        url.push_str(path.trim_start_matches(['/', '.']));
    }

    if let Some(query) = truthy(&v.query) {
        url.push('?');
        url.push_str(query);
    }

    if let Some(fragment) = truthy(&v.fragment) {
        url.push('#');
        url.push_str(fragment);
    }

    url
}
