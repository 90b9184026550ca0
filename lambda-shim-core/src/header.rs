//! Multi-value header folding.
//!
//! Gateway envelopes carry single-valued header maps, while the canonical
//! HTTP model is a multi-map. [`fold`] collapses a [`HeaderMap`] into the
//! single-valued form the envelopes expect, combining repeated values per
//! RFC 2616 §4.2.

use std::collections::HashMap;

use http::HeaderMap;

/// Separator used when a key carries more than one value (RFC 2616 §4.2).
pub const MULTI_VALUE_SEPARATOR: &str = ",";

/// Canonicalize a header key to its standard HTTP casing, e.g.
/// `accept-encoding` becomes `Accept-Encoding`.
pub fn canonical_header_key(key: &str) -> String {
    let mut canonical = String::with_capacity(key.len());
    let mut upper_next = true;
    for c in key.chars() {
        if upper_next {
            canonical.push(c.to_ascii_uppercase());
        } else {
            canonical.push(c.to_ascii_lowercase());
        }
        upper_next = c == '-';
    }
    canonical
}

/// Fold a header multi-map into a single-valued map.
///
/// Keys are canonicalized; a key with exactly one value maps to it
/// verbatim, and repeated values are joined with
/// [`MULTI_VALUE_SEPARATOR`] in the order they were added. Header values
/// are not required to be UTF-8 by HTTP; non-UTF-8 bytes are carried
/// through lossily.
pub fn fold(headers: &HeaderMap) -> HashMap<String, String> {
    let mut folded = HashMap::with_capacity(headers.keys_len());

    for key in headers.keys() {
        let combined = headers
            .get_all(key)
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()))
            .collect::<Vec<_>>()
            .join(MULTI_VALUE_SEPARATOR);

        folded.insert(canonical_header_key(key.as_str()), combined);
    }

    folded
}
