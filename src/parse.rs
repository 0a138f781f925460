//! YAML text → position-annotated [`Node`] tree.
//!
//! Built directly on the spanned event stream of `saphyr-parser` so that every
//! node keeps the line it started on. Only the first document of a stream is
//! read. Plain scalars are typed with the YAML 1.2 core schema.

use crate::error::{ParseError, ParseErrorKind};
use crate::node::{Node, NodeKind, ScalarType};
use regex::Regex;
use saphyr_parser::{Event, Parser, ScalarStyle, ScanError, Span, SpannedEventReceiver};
use std::sync::LazyLock;

pub(crate) static INT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([-+]?[0-9]+|0o[0-7]+|0x[0-9a-fA-F]+)$").unwrap());

static FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([-+]?(\.[0-9]+|[0-9]+(\.[0-9]*)?)([eE][-+]?[0-9]+)?|[-+]?\.(inf|Inf|INF)|\.(nan|NaN|NAN))$")
        .unwrap()
});

/// Parse a YAML string into a [`NodeKind::Document`] node.
///
/// An input without any document (empty, or comments only) yields
/// `Document(None)`; the validator reports that case itself.
pub fn parse(input: &str) -> Result<Node, ParseError> {
    let mut builder = TreeBuilder::default();
    let mut parser = Parser::new_from_str(input);
    parser.load(&mut builder, false).map_err(scan_error)?;

    if let Some(err) = builder.error {
        return Err(err);
    }

    let line = builder.root.as_ref().map_or(0, |n| n.line);
    Ok(Node::new(
        NodeKind::Document(builder.root.map(Box::new)),
        line,
    ))
}

fn scan_error(e: ScanError) -> ParseError {
    let marker = e.marker();
    ParseError {
        kind: ParseErrorKind::Syntax,
        message: e.info().to_string(),
        line: Some(marker.line()),
        column: Some(marker.col() + 1),
    }
}

enum Frame {
    Sequence {
        items: Vec<Node>,
        line: usize,
    },
    Mapping {
        pairs: Vec<(Node, Node)>,
        key: Option<Node>,
        line: usize,
    },
}

#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Frame>,
    root: Option<Node>,
    finished: bool,
    error: Option<ParseError>,
}

impl TreeBuilder {
    fn attach(&mut self, node: Node) {
        match self.stack.last_mut() {
            None => {
                if self.root.is_none() {
                    self.root = Some(node);
                }
            }
            Some(Frame::Sequence { items, .. }) => items.push(node),
            Some(Frame::Mapping { pairs, key, .. }) => match key.take() {
                Some(k) => pairs.push((k, node)),
                None => *key = Some(node),
            },
        }
    }
}

impl<'input> SpannedEventReceiver<'input> for TreeBuilder {
    fn on_event(&mut self, ev: Event<'input>, span: Span) {
        if self.finished || self.error.is_some() {
            return;
        }
        let line = span.start.line();
        match ev {
            Event::Scalar(value, style, _, tag) => {
                let value: String = value.into();
                let quoted = !matches!(style, ScalarStyle::Plain);
                let explicit = tag.as_ref().and_then(|t| core_tag(&t.handle, &t.suffix));
                let ty = explicit.unwrap_or_else(|| infer_scalar_type(&value, quoted));
                self.attach(Node::new(NodeKind::Scalar { value, ty }, line));
            }
            Event::SequenceStart(..) => self.stack.push(Frame::Sequence {
                items: Vec::new(),
                line,
            }),
            Event::MappingStart(..) => self.stack.push(Frame::Mapping {
                pairs: Vec::new(),
                key: None,
                line,
            }),
            Event::SequenceEnd | Event::MappingEnd => {
                let node = match self.stack.pop() {
                    Some(Frame::Sequence { items, line }) => Node::sequence(items, line),
                    Some(Frame::Mapping { pairs, line, .. }) => Node::mapping(pairs, line),
                    None => return,
                };
                self.attach(node);
            }
            Event::Alias(_) => {
                self.error = Some(ParseError {
                    kind: ParseErrorKind::Alias,
                    message: "YAML aliases are not supported".to_string(),
                    line: Some(line),
                    column: Some(span.start.col() + 1),
                });
            }
            Event::DocumentEnd => self.finished = true,
            _ => {}
        }
    }
}

/// Type forced by an explicit `!!tag`, if it is one of the core tags.
fn core_tag(handle: &str, suffix: &str) -> Option<ScalarType> {
    if handle != "!!" && handle != "tag:yaml.org,2002:" {
        return None;
    }
    match suffix {
        "str" => Some(ScalarType::Str),
        "int" => Some(ScalarType::Int),
        "bool" => Some(ScalarType::Bool),
        "null" => Some(ScalarType::Null),
        _ => Some(ScalarType::Other),
    }
}

/// Resolve a scalar's type the way the YAML 1.2 core schema does.
pub(crate) fn infer_scalar_type(value: &str, quoted: bool) -> ScalarType {
    if quoted {
        return ScalarType::Str;
    }
    match value {
        "" | "~" | "null" | "Null" | "NULL" => ScalarType::Null,
        "true" | "True" | "TRUE" | "false" | "False" | "FALSE" => ScalarType::Bool,
        _ if INT_RE.is_match(value) => ScalarType::Int,
        _ if FLOAT_RE.is_match(value) => ScalarType::Other,
        _ => ScalarType::Str,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_schema_inference() {
        assert_eq!(infer_scalar_type("", false), ScalarType::Null);
        assert_eq!(infer_scalar_type("~", false), ScalarType::Null);
        assert_eq!(infer_scalar_type("True", false), ScalarType::Bool);
        assert_eq!(infer_scalar_type("yes", false), ScalarType::Str);
        assert_eq!(infer_scalar_type("80", false), ScalarType::Int);
        assert_eq!(infer_scalar_type("-12", false), ScalarType::Int);
        assert_eq!(infer_scalar_type("0x1f", false), ScalarType::Int);
        assert_eq!(infer_scalar_type("1.5", false), ScalarType::Other);
        assert_eq!(infer_scalar_type(".inf", false), ScalarType::Other);
        assert_eq!(infer_scalar_type("80", true), ScalarType::Str);
        assert_eq!(infer_scalar_type("v1", false), ScalarType::Str);
        assert_eq!(infer_scalar_type("500Mi", false), ScalarType::Str);
    }

    #[test]
    fn core_tags_override() {
        assert_eq!(core_tag("!!", "str"), Some(ScalarType::Str));
        assert_eq!(core_tag("tag:yaml.org,2002:", "int"), Some(ScalarType::Int));
        assert_eq!(core_tag("!", "custom"), None);
    }
}
