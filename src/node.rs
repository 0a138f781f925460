//! Position-annotated YAML tree consumed by the validator.
//!
//! A [`Node`] is a tagged variant over scalars, mappings and sequences, each
//! carrying the 1-based source line it started on (0 when synthetic). The
//! validator only ever borrows a tree; nothing here mutates it after parsing.

use serde::Serialize;

/// Primitive type inferred for a scalar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    Str,
    Int,
    Bool,
    Null,
    /// Floats and explicitly tagged scalars outside the core schema.
    Other,
}

impl ScalarType {
    /// Short type name, e.g. `string` or `int`.
    pub fn name(self) -> &'static str {
        match self {
            ScalarType::Str => "string",
            ScalarType::Int => "int",
            ScalarType::Bool => "bool",
            ScalarType::Null => "null",
            ScalarType::Other => "scalar",
        }
    }
}

/// Shape of a node.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Scalar { value: String, ty: ScalarType },
    /// Key/value pairs in source order. Keys are nodes, not strings.
    Mapping(Vec<(Node, Node)>),
    Sequence(Vec<Node>),
    /// Outer document marker; `None` for an empty document.
    Document(Option<Box<Node>>),
}

/// One element of the parsed tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    pub line: usize,
}

impl Node {
    pub fn new(kind: NodeKind, line: usize) -> Self {
        Node { kind, line }
    }

    /// Plain string scalar, mostly for building trees by hand.
    pub fn string(value: impl Into<String>, line: usize) -> Self {
        Node::new(
            NodeKind::Scalar {
                value: value.into(),
                ty: ScalarType::Str,
            },
            line,
        )
    }

    pub fn int(value: i64, line: usize) -> Self {
        Node::new(
            NodeKind::Scalar {
                value: value.to_string(),
                ty: ScalarType::Int,
            },
            line,
        )
    }

    pub fn mapping(pairs: Vec<(Node, Node)>, line: usize) -> Self {
        Node::new(NodeKind::Mapping(pairs), line)
    }

    pub fn sequence(items: Vec<Node>, line: usize) -> Self {
        Node::new(NodeKind::Sequence(items), line)
    }

    /// Short name of the node's actual kind (`object`, `array`, or the
    /// scalar type), recorded when a field has the wrong shape.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            NodeKind::Scalar { ty, .. } => ty.name(),
            NodeKind::Mapping(_) => "object",
            NodeKind::Sequence(_) => "array",
            NodeKind::Document(_) => "document",
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self.kind, NodeKind::Mapping(_))
    }

    pub fn as_mapping(&self) -> Option<&[(Node, Node)]> {
        match &self.kind {
            NodeKind::Mapping(pairs) => Some(pairs),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match &self.kind {
            NodeKind::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Raw scalar text regardless of inferred type.
    pub fn scalar(&self) -> Option<(&str, ScalarType)> {
        match &self.kind {
            NodeKind::Scalar { value, ty } => Some((value.as_str(), *ty)),
            _ => None,
        }
    }

    /// Scalar text, only when the scalar was inferred as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self.scalar() {
            Some((value, ScalarType::Str)) => Some(value),
            _ => None,
        }
    }

    /// Integer value of an int-typed scalar.
    pub fn as_int(&self) -> Option<i64> {
        match self.scalar() {
            Some((value, ScalarType::Int)) => parse_yaml_int(value),
            _ => None,
        }
    }

    /// Look up a child by key in a mapping node.
    ///
    /// Returns `None` both for a missing key and for a non-mapping receiver;
    /// callers check the receiver's shape first. Keys compare by scalar text,
    /// the first matching pair wins.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping()?
            .iter()
            .find(|(k, _)| matches!(k.scalar(), Some((text, _)) if text == key))
            .map(|(_, v)| v)
    }

    /// Strip one document marker, if present.
    ///
    /// Returns `None` for an empty document.
    pub fn unwrap_document(&self) -> Option<&Node> {
        match &self.kind {
            NodeKind::Document(root) => root.as_deref(),
            _ => Some(self),
        }
    }
}

/// Integer text per the YAML 1.2 core schema: decimal, `0x` hex, `0o` octal.
pub(crate) fn parse_yaml_int(text: &str) -> Option<i64> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = if let Some(hex) = digits.strip_prefix("0x") {
        i64::from_str_radix(hex, 16).ok()?
    } else if let Some(oct) = digits.strip_prefix("0o") {
        i64::from_str_radix(oct, 8).ok()?
    } else if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        digits.parse::<i64>().ok()?
    } else {
        return None;
    };
    Some(if negative { -magnitude } else { magnitude })
}
