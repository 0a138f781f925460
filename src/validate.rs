//! Manifest validation against the fixed Pod schema.
//!
//! Returns **all** errors, not just the first, in the order fields are
//! checked. Only an empty document or a non-mapping root stops the run early;
//! every other failure is local to the field it describes.
//!
//! Field labels drop the `metadata.`/`spec.` segments and sequence indices, so
//! `spec.containers[0].image` is reported as `containers.image`.

use crate::enums::{OsName, Protocol};
use crate::error::*;
use crate::node::{Node, NodeKind, ScalarType};
use crate::parse::INT_RE;
use crate::primitives::*;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Validate a parsed manifest. `file` is only used to label errors.
///
/// Accepts either a document node (one level is unwrapped) or a bare root.
pub fn validate(file: &str, root: &Node) -> ValidationResult {
    let mut out = Collector::new(file);

    let Some(root) = root.unwrap_document() else {
        out.push(
            0,
            ErrorKind::Structural,
            "cannot unmarshal file content: empty document".to_string(),
        );
        return out.finish();
    };

    if !root.is_mapping() {
        out.push(
            root.line,
            ErrorKind::Structural,
            "root must be object".to_string(),
        );
        return out.finish();
    }

    debug!(file, "validating manifest");

    if let Some(node) = out.required(root, "apiVersion", "apiVersion") {
        check_literal(&mut out, node, "apiVersion", "v1");
    }
    if let Some(node) = out.required(root, "kind", "kind") {
        check_literal(&mut out, node, "kind", "Pod");
    }
    let metadata = out
        .required(root, "metadata", "metadata")
        .filter(|node| out.object(node, "metadata"));
    let spec = out
        .required(root, "spec", "spec")
        .filter(|node| out.object(node, "spec"));

    if let Some(metadata) = metadata {
        validate_metadata(&mut out, metadata);
    }
    if let Some(spec) = spec {
        validate_spec(&mut out, spec);
    }

    let result = out.finish();
    debug!(file, errors = result.errors.len(), "manifest validated");
    result
}

// ─── Error collector ────────────────────────────────────────────────────────

/// Ordered error accumulator plus the shape/type checks shared by every level.
struct Collector<'a> {
    file: &'a str,
    errors: Vec<ValidationError>,
}

impl<'a> Collector<'a> {
    fn new(file: &'a str) -> Self {
        Collector {
            file,
            errors: Vec::new(),
        }
    }

    fn finish(self) -> ValidationResult {
        ValidationResult {
            errors: self.errors,
        }
    }

    fn push(&mut self, line: usize, kind: ErrorKind, message: String) {
        self.errors.push(ValidationError {
            file: self.file.to_string(),
            line,
            kind,
            message,
        });
    }

    /// Child `key` of `parent`, or a "<label> is required" error at the
    /// parent's line.
    fn required<'n>(&mut self, parent: &'n Node, key: &str, label: &str) -> Option<&'n Node> {
        let child = parent.get(key);
        if child.is_none() {
            self.push(
                parent.line,
                ErrorKind::MissingField,
                format!("{} is required", label),
            );
        }
        child
    }

    fn wrong_kind(&mut self, node: &Node, label: &str, expected: &str) {
        let kind = if node.scalar().is_some() {
            ErrorKind::WrongScalarType
        } else {
            ErrorKind::WrongShape
        };
        trace!(line = node.line, label, expected, actual = node.kind_name(), "kind mismatch");
        self.push(node.line, kind, format!("{} must be {}", label, expected));
    }

    fn invalid_format(&mut self, node: &Node, label: &str, value: &str) {
        self.push(
            node.line,
            ErrorKind::InvalidFormat,
            format!("{} has invalid format '{}'", label, value),
        );
    }

    fn unsupported(&mut self, node: &Node, label: &str, value: &str) {
        self.push(
            node.line,
            ErrorKind::UnsupportedValue,
            format!("{} has unsupported value '{}'", label, value),
        );
    }

    fn out_of_range(&mut self, node: &Node, label: &str) {
        self.push(
            node.line,
            ErrorKind::OutOfRange,
            format!("{} value out of range", label),
        );
    }

    /// Whether `node` is a mapping; reports "<label> must be object" if not.
    fn object(&mut self, node: &Node, label: &str) -> bool {
        let ok = node.is_mapping();
        if !ok {
            self.wrong_kind(node, label, "object");
        }
        ok
    }

    fn string<'n>(&mut self, node: &'n Node, label: &str) -> Option<&'n str> {
        let value = node.as_str();
        if value.is_none() {
            self.wrong_kind(node, label, "string");
        }
        value
    }

    /// Port-style integer strictly between 0 and 65536.
    fn port(&mut self, node: &Node, label: &str) {
        match node.scalar() {
            Some((text, ScalarType::Int)) => match node.as_int() {
                Some(port) if is_port(port) => {}
                Some(_) => self.out_of_range(node, label),
                // Overflowing literals are still integers; `!!int abc` is not.
                None if INT_RE.is_match(text) => self.out_of_range(node, label),
                None => self.wrong_kind(node, label, "int"),
            },
            _ => self.wrong_kind(node, label, "int"),
        }
    }
}

fn check_literal(out: &mut Collector, node: &Node, label: &str, expected: &str) {
    if let Some(value) = out.string(node, label)
        && value != expected
    {
        out.unsupported(node, label, value);
    }
}

// ─── metadata ───────────────────────────────────────────────────────────────

fn validate_metadata(out: &mut Collector, metadata: &Node) {
    if let Some(name) = out.required(metadata, "name", "name") {
        out.string(name, "name");
    }
    if let Some(namespace) = metadata.get("namespace") {
        out.string(namespace, "namespace");
    }
    if let Some(labels) = metadata.get("labels") {
        validate_labels(out, labels);
    }
}

fn validate_labels(out: &mut Collector, labels: &Node) {
    let Some(pairs) = labels.as_mapping() else {
        out.wrong_kind(labels, "labels", "object");
        return;
    };
    for (key, value) in pairs {
        if key.as_str().is_none() {
            out.wrong_kind(key, "labels key", "string");
        }
        let label = match key.scalar() {
            Some((text, _)) => format!("labels.{}", text),
            None => "labels value".to_string(),
        };
        out.string(value, &label);
    }
}

// ─── spec ───────────────────────────────────────────────────────────────────

fn validate_spec(out: &mut Collector, spec: &Node) {
    if let Some(os) = spec.get("os") {
        validate_os(out, os);
    }
    if let Some(containers) = out.required(spec, "containers", "containers") {
        validate_containers(out, containers);
    }
}

/// `os` is either a bare string or an object carrying `name`.
fn validate_os(out: &mut Collector, os: &Node) {
    let name = match &os.kind {
        NodeKind::Scalar { .. } => out.string(os, "os").map(|v| (os, v)),
        NodeKind::Mapping(_) => out
            .required(os, "name", "os.name")
            .and_then(|node| out.string(node, "os.name").map(|v| (node, v))),
        _ => {
            out.wrong_kind(os, "os", "string or object");
            None
        }
    };
    if let Some((node, value)) = name
        && OsName::parse(value).is_none()
    {
        out.unsupported(node, "os", value);
    }
}

fn validate_containers(out: &mut Collector, containers: &Node) {
    let Some(items) = containers.as_sequence() else {
        out.wrong_kind(containers, "containers", "array");
        return;
    };
    if items.is_empty() {
        out.push(
            containers.line,
            ErrorKind::WrongShape,
            "containers must be non-empty array".to_string(),
        );
        return;
    }

    let mut seen = HashSet::new();
    for (i, container) in items.iter().enumerate() {
        trace!(index = i, line = container.line, "validating container");
        if out.object(container, &format!("containers[{}]", i)) {
            validate_container(out, container, &mut seen);
        }
    }
}

fn validate_container<'n>(out: &mut Collector, container: &'n Node, seen: &mut HashSet<&'n str>) {
    if let Some(node) = out.required(container, "name", "containers.name")
        && let Some(name) = out.string(node, "containers.name")
    {
        // Duplicates share the format message; callers match on this text.
        if !is_container_name(name) || !seen.insert(name) {
            out.invalid_format(node, "containers.name", name);
        }
    }

    if let Some(node) = out.required(container, "image", "containers.image")
        && let Some(image) = out.string(node, "containers.image")
        && !is_image_reference(image)
    {
        out.invalid_format(node, "containers.image", image);
    }

    if let Some(ports) = container.get("ports") {
        validate_ports(out, ports);
    }

    for probe in ["readinessProbe", "livenessProbe"] {
        if let Some(node) = container.get(probe) {
            validate_probe(out, node, &format!("containers.{}", probe));
        }
    }

    if let Some(resources) = out.required(container, "resources", "containers.resources")
        && out.object(resources, "containers.resources")
    {
        validate_resources(out, resources);
    }
}

fn validate_ports(out: &mut Collector, ports: &Node) {
    let Some(items) = ports.as_sequence() else {
        out.wrong_kind(ports, "containers.ports", "array");
        return;
    };
    for (i, port) in items.iter().enumerate() {
        if !out.object(port, &format!("containers.ports[{}]", i)) {
            continue;
        }
        if let Some(node) = out.required(port, "containerPort", "containers.ports.containerPort") {
            out.port(node, "containers.ports.containerPort");
        }
        if let Some(node) = port.get("protocol")
            && let Some(protocol) = out.string(node, "containers.ports.protocol")
            && Protocol::parse(protocol).is_none()
        {
            out.unsupported(node, "containers.ports.protocol", protocol);
        }
    }
}

fn validate_probe(out: &mut Collector, probe: &Node, label: &str) {
    if !out.object(probe, label) {
        return;
    }
    let http_label = format!("{}.httpGet", label);
    let Some(http_get) = out.required(probe, "httpGet", &http_label) else {
        return;
    };
    if !out.object(http_get, &http_label) {
        return;
    }

    let path_label = format!("{}.path", http_label);
    if let Some(node) = out.required(http_get, "path", &path_label)
        && let Some(path) = out.string(node, &path_label)
        && !is_http_path(path)
    {
        out.invalid_format(node, &path_label, path);
    }

    let port_label = format!("{}.port", http_label);
    if let Some(node) = out.required(http_get, "port", &port_label) {
        out.port(node, &port_label);
    }
}

fn validate_resources(out: &mut Collector, resources: &Node) {
    for section in ["requests", "limits"] {
        let Some(node) = resources.get(section) else {
            continue;
        };
        let label = format!("containers.resources.{}", section);
        if !out.object(node, &label) {
            continue;
        }

        if let Some(cpu) = node.get("cpu") {
            let cpu_label = format!("{}.cpu", label);
            match cpu.scalar() {
                Some((text, ScalarType::Int | ScalarType::Str)) => {
                    if parse_cpu(text).is_none() {
                        out.invalid_format(cpu, &cpu_label, text);
                    }
                }
                _ => out.wrong_kind(cpu, &cpu_label, "int"),
            }
        }

        if let Some(memory) = node.get("memory") {
            let memory_label = format!("{}.memory", label);
            if let Some(value) = out.string(memory, &memory_label)
                && !is_memory_quantity(value)
            {
                out.invalid_format(memory, &memory_label, value);
            }
        }
    }
}
