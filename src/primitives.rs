//! Grammar and range checks applied to well-typed scalar values.
//!
//! Each check is a pure predicate; the validator decides which error to emit.

use regex::Regex;
use std::sync::LazyLock;

/// Registry every container image must be pulled from.
pub const IMAGE_REGISTRY: &str = "registry.bigbrother.io/";

static CONTAINER_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]*(_[a-z0-9]+)*$").unwrap());

static MEMORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(Ki|Mi|Gi)$").unwrap());

/// Lowercase snake-case container name, e.g. `web`, `c1` or `api_v2`.
pub fn is_container_name(name: &str) -> bool {
    CONTAINER_NAME_RE.is_match(name)
}

/// Image reference from the internal registry with an explicit tag.
///
/// The tag separator is the last `:` and must follow the last `/`, so a
/// registry port is never mistaken for a tag.
pub fn is_image_reference(image: &str) -> bool {
    if !image.starts_with(IMAGE_REGISTRY) {
        return false;
    }
    let last_slash = image.rfind('/');
    match image.rfind(':') {
        Some(colon) => Some(colon) > last_slash && colon + 1 < image.len(),
        None => false,
    }
}

/// Memory quantity such as `512Mi`.
pub fn is_memory_quantity(value: &str) -> bool {
    MEMORY_RE.is_match(value)
}

/// CPU request/limit: a plain base-10 integer.
pub fn parse_cpu(value: &str) -> Option<i64> {
    value.parse::<i64>().ok()
}

/// TCP/UDP port number, exclusive on both ends of `0..65536`.
pub fn is_port(value: i64) -> bool {
    value > 0 && value < 65536
}

/// HTTP probe path.
pub fn is_http_path(path: &str) -> bool {
    path.starts_with('/')
}
