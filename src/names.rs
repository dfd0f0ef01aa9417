//! Qualified name utilities
//!
//! Schema element names and type references are matched on their literal,
//! prefixed spelling (`xsd:element`, `tns:Widget`). These helpers build and
//! take apart such names without resolving the prefix to a namespace URI.

/// Split a QName into prefix and local name
pub fn split_qname(qname: &str) -> (Option<&str>, &str) {
    if let Some((prefix, local)) = qname.split_once(':') {
        (Some(prefix), local)
    } else {
        (None, qname)
    }
}

/// Local part of a QName, with any prefix removed
pub fn local_name(qname: &str) -> &str {
    split_qname(qname).1
}

/// Local part of `qname` if it is written with exactly `prefix`
pub fn strip_prefix<'a>(qname: &'a str, prefix: &str) -> Option<&'a str> {
    match split_qname(qname) {
        (Some(p), local) if p == prefix && !local.is_empty() => Some(local),
        _ => None,
    }
}

/// Join a prefix and a local name into a QName
pub fn prefixed(prefix: &str, local: &str) -> String {
    if prefix.is_empty() {
        local.to_string()
    } else {
        format!("{}:{}", prefix, local)
    }
}
