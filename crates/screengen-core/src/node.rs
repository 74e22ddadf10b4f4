//! Layout DSL node tree.
//!
//! Nodes are built from a generic JSON value tree. Construction never fails
//! below the document root: absent or malformed optional fields resolve to
//! "no effect", and an unrecognized `type` becomes [`NodeKind::Unknown`].

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::errors::DslError;
use crate::format::expression;
use crate::names::UNKNOWN_NAME;

/// Collection name used when a `repeat` block omits `for`.
pub const DEFAULT_REPEAT_SOURCE: &str = "items";

/// Element alias used when a `repeat` block omits `as`.
pub const DEFAULT_REPEAT_ALIAS: &str = "item";

/// A complete layout document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Top-level `name` field, used to derive the screen identifier.
    pub name: Option<String>,
    /// Root node of the layout tree.
    pub root: Node,
}

impl Document {
    /// Parse a document from JSON source text.
    pub fn from_json(source: &str) -> Result<Self, DslError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(&value)
    }

    /// Build a document from an already parsed JSON value.
    ///
    /// The root must be a JSON object.
    pub fn from_value(value: &Value) -> Result<Self, DslError> {
        let object = value.as_object().ok_or_else(|| {
            DslError::InvalidDocument(format!(
                "expected an object at the document root, found {}",
                json_kind(value)
            ))
        })?;

        Ok(Self {
            name: string_field(object, "name"),
            root: Node::from_value(value),
        })
    }
}

/// One element of the layout tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Visibility condition (inner expression text), if any.
    pub visible: Option<String>,
    pub kind: NodeKind,
}

impl Node {
    /// Create a node without a visibility condition.
    pub fn new(kind: NodeKind) -> Self {
        Self { visible: None, kind }
    }

    /// Attach a visibility condition.
    pub fn with_visibility(mut self, expr: impl Into<String>) -> Self {
        self.visible = Some(expr.into());
        self
    }

    /// Build a node from a JSON value.
    ///
    /// Non-object values become an unknown node.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            log::debug!("node is not an object: {}", json_kind(value));
            return Self::new(NodeKind::Unknown(None));
        };

        let visible = object
            .get("visible")
            .and_then(Value::as_str)
            .and_then(expression)
            .map(str::to_string);

        Self {
            visible,
            kind: NodeKind::from_object(object),
        }
    }
}

/// The closed set of node kinds, plus a soft-fail arm.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Frame(Frame),
    Text(Text),
    Spacer,
    Instance(Instance),
    Overlay(Overlay),
    /// Unrecognized or missing `type`, carrying the raw value if present.
    Unknown(Option<String>),
}

impl NodeKind {
    fn from_object(object: &Map<String, Value>) -> Self {
        let type_name = object.get("type").map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });

        match type_name.as_deref() {
            Some("FRAME") => NodeKind::Frame(Frame::from_object(object)),
            Some("TEXT") => NodeKind::Text(Text::from_object(object)),
            Some("SPACER") => NodeKind::Spacer,
            Some("INSTANCE") => NodeKind::Instance(Instance::from_object(object)),
            Some("OVERLAY") => NodeKind::Overlay(Overlay::from_object(object)),
            _ => NodeKind::Unknown(type_name),
        }
    }

    /// DSL spelling of this kind, for diagnostics and markers.
    pub fn type_name(&self) -> &str {
        match self {
            NodeKind::Frame(_) => "FRAME",
            NodeKind::Text(_) => "TEXT",
            NodeKind::Spacer => "SPACER",
            NodeKind::Instance(_) => "INSTANCE",
            NodeKind::Overlay(_) => "OVERLAY",
            NodeKind::Unknown(Some(name)) => name,
            NodeKind::Unknown(None) => "<none>",
        }
    }
}

/// A layout container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub name: Option<String>,
    pub layout: Layout,
    pub scroll: Option<ScrollMode>,
    pub repeat: Option<Repeat>,
    pub children: Vec<Node>,
}

impl Frame {
    fn from_object(object: &Map<String, Value>) -> Self {
        let children = object
            .get("children")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(Node::from_value).collect())
            .unwrap_or_default();

        Self {
            name: string_field(object, "name"),
            layout: Layout::from_value(object.get("layout")),
            scroll: object.get("scroll").and_then(ScrollMode::from_value),
            repeat: object.get("repeat").and_then(Repeat::from_value),
            children,
        }
    }
}

/// A text run.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: TextContent,
}

impl Text {
    fn from_object(object: &Map<String, Value>) -> Self {
        let raw = object.get("text").and_then(Value::as_str).unwrap_or("");
        let content = match expression(raw) {
            Some(expr) => TextContent::Expression(expr.to_string()),
            None => TextContent::Literal(raw.to_string()),
        };
        Self { content }
    }
}

/// Text content (literal or embedded expression).
#[derive(Debug, Clone, PartialEq)]
pub enum TextContent {
    Literal(String),
    Expression(String),
}

/// An instance of a named component.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// Hierarchical component name, e.g. `Za/IconButton`.
    pub name: String,
    /// Arguments in declaration order.
    pub props: IndexMap<String, PropValue>,
    /// Size and padding only; direction and spacing are ignored on leaves.
    pub layout: Layout,
}

impl Instance {
    fn from_object(object: &Map<String, Value>) -> Self {
        let props = object
            .get("props")
            .and_then(Value::as_object)
            .map(|props| {
                props
                    .iter()
                    .map(|(key, value)| (key.clone(), PropValue::from_value(value)))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: string_field(object, "name").unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            props,
            layout: Layout::from_value(object.get("layout")),
        }
    }
}

/// A component argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Bool(bool),
    Number(f64),
    String(String),
    /// Null, arrays and objects.
    Unsupported,
}

impl PropValue {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Bool(b) => PropValue::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(PropValue::Unsupported, PropValue::Number),
            Value::String(s) => PropValue::String(s.clone()),
            Value::Null | Value::Array(_) | Value::Object(_) => PropValue::Unsupported,
        }
    }
}

/// An absolutely positioned child.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub position: Position,
    pub child: Box<Node>,
}

impl Overlay {
    fn from_object(object: &Map<String, Value>) -> Self {
        let child = match object.get("child") {
            Some(value) => Node::from_value(value),
            None => Node::new(NodeKind::Unknown(None)),
        };

        Self {
            position: Position::from_value(object.get("position")),
            child: Box::new(child),
        }
    }
}

/// Flow direction of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Vertical,
    Horizontal,
}

impl Direction {
    fn from_value(value: &Value) -> Option<Self> {
        match value.as_str()? {
            "VERTICAL" => Some(Direction::Vertical),
            "HORIZONTAL" => Some(Direction::Horizontal),
            _ => None,
        }
    }
}

/// Requested scroll axis of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    Vertical,
    Horizontal,
}

impl ScrollMode {
    fn from_value(value: &Value) -> Option<Self> {
        match value.as_str()? {
            "vertical" => Some(ScrollMode::Vertical),
            "horizontal" => Some(ScrollMode::Horizontal),
            _ => None,
        }
    }
}

/// Sizing mode along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeSpec {
    Fill,
    Fixed(Option<f64>),
}

impl SizeSpec {
    fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        match object.get("mode").and_then(Value::as_str)? {
            "FILL" => Some(SizeSpec::Fill),
            "FIXED" => Some(SizeSpec::Fixed(object.get("value").and_then(Value::as_f64))),
            _ => None,
        }
    }
}

/// Padding given as `[left, top, right, bottom]`.
///
/// A non-numeric entry is kept as an absent edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
}

impl Padding {
    fn from_value(value: &Value) -> Option<Self> {
        match value.as_array().map(Vec::as_slice) {
            Some([left, top, right, bottom]) => Some(Self {
                left: left.as_f64(),
                top: top.as_f64(),
                right: right.as_f64(),
                bottom: bottom.as_f64(),
            }),
            _ => {
                log::debug!("ignoring padding that is not a 4-element list: {value}");
                None
            }
        }
    }
}

/// Layout block of a frame or instance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    pub direction: Option<Direction>,
    pub spacing: Option<f64>,
    pub width: Option<SizeSpec>,
    pub height: Option<SizeSpec>,
    pub padding: Option<Padding>,
}

impl Layout {
    /// Build from an optional `layout` value; anything but an object is empty.
    pub fn from_value(value: Option<&Value>) -> Self {
        let Some(object) = value.and_then(Value::as_object) else {
            return Self::default();
        };

        Self {
            direction: object.get("direction").and_then(Direction::from_value),
            spacing: object.get("spacing").and_then(Value::as_f64),
            width: object.get("width").and_then(SizeSpec::from_value),
            height: object.get("height").and_then(SizeSpec::from_value),
            padding: object.get("padding").and_then(Padding::from_value),
        }
    }
}

/// Repetition over a named collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Repeat {
    /// Source collection expression.
    pub source: String,
    /// Per-element alias.
    pub alias: String,
}

impl Repeat {
    fn from_value(value: &Value) -> Option<Self> {
        // An empty block means no repetition at all.
        let object = value.as_object().filter(|o| !o.is_empty())?;
        Some(Self {
            source: string_field(object, "for").unwrap_or_else(|| DEFAULT_REPEAT_SOURCE.to_string()),
            alias: string_field(object, "as").unwrap_or_else(|| DEFAULT_REPEAT_ALIAS.to_string()),
        })
    }
}

/// One side of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

/// Offsets of an overlay from the edges of its parent.
///
/// An edge is present when its key is present; a non-numeric value counts as
/// zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
}

impl Position {
    fn from_value(value: Option<&Value>) -> Self {
        let Some(object) = value.and_then(Value::as_object) else {
            return Self::default();
        };
        let edge = |key: &str| object.get(key).map(|v| v.as_f64().unwrap_or(0.0));

        Self {
            left: edge("left"),
            top: edge("top"),
            right: edge("right"),
            bottom: edge("bottom"),
        }
    }

    /// Offset for one edge, if present.
    pub fn edge(&self, edge: Edge) -> Option<f64> {
        match edge {
            Edge::Left => self.left,
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
        }
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn frame(value: Value) -> Frame {
        match Node::from_value(&value).kind {
            NodeKind::Frame(frame) => frame,
            other => panic!("expected a frame, got {other:?}"),
        }
    }

    #[test]
    fn test_document_from_json() {
        let doc = Document::from_json(r#"{"type":"FRAME","name":"TestScreen","children":[]}"#)
            .unwrap();
        assert_eq!(doc.name.as_deref(), Some("TestScreen"));
        assert!(matches!(doc.root.kind, NodeKind::Frame(_)));
    }

    #[test]
    fn test_document_rejects_malformed_input() {
        assert!(matches!(Document::from_json("{not json"), Err(DslError::Json(_))));
        assert!(matches!(
            Document::from_json("[1, 2]"),
            Err(DslError::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_frame_layout() {
        let frame = frame(json!({
            "type": "FRAME",
            "layout": {
                "direction": "HORIZONTAL",
                "spacing": 8,
                "width": {"mode": "FILL"},
                "height": {"mode": "FIXED", "value": 48},
                "padding": [16, null, 16, 8]
            },
            "scroll": "vertical",
            "repeat": {"for": "rows", "as": "row"},
            "children": [{"type": "SPACER"}]
        }));

        assert_eq!(frame.layout.direction, Some(Direction::Horizontal));
        assert_eq!(frame.layout.spacing, Some(8.0));
        assert_eq!(frame.layout.width, Some(SizeSpec::Fill));
        assert_eq!(frame.layout.height, Some(SizeSpec::Fixed(Some(48.0))));
        assert_eq!(
            frame.layout.padding,
            Some(Padding { left: Some(16.0), top: None, right: Some(16.0), bottom: Some(8.0) })
        );
        assert_eq!(frame.scroll, Some(ScrollMode::Vertical));
        assert_eq!(
            frame.repeat,
            Some(Repeat { source: "rows".into(), alias: "row".into() })
        );
        assert_eq!(frame.children.len(), 1);
    }

    #[test]
    fn test_lenient_fields() {
        let frame = frame(json!({
            "type": "FRAME",
            "layout": {"direction": "DIAGONAL", "padding": [1, 2], "width": {"mode": "HUG"}},
            "scroll": "sideways",
            "repeat": {},
            "children": "nope"
        }));

        assert_eq!(frame.layout, Layout::default());
        assert_eq!(frame.scroll, None);
        assert_eq!(frame.repeat, None);
        assert!(frame.children.is_empty());
    }

    #[test]
    fn test_repeat_defaults() {
        let frame = frame(json!({"type": "FRAME", "repeat": {"for": "products"}}));
        assert_eq!(
            frame.repeat,
            Some(Repeat { source: "products".into(), alias: DEFAULT_REPEAT_ALIAS.into() })
        );
    }

    #[test]
    fn test_visibility() {
        let node = Node::from_value(&json!({"type": "TEXT", "text": "x", "visible": "{{ showText }}"}));
        assert_eq!(node.visible.as_deref(), Some("showText"));

        let node = Node::from_value(&json!({"type": "TEXT", "text": "x", "visible": true}));
        assert_eq!(node.visible, None);
    }

    #[test]
    fn test_text_content() {
        let node = Node::from_value(&json!({"type": "TEXT", "text": "{{item.name}}"}));
        assert_eq!(
            node.kind,
            NodeKind::Text(Text { content: TextContent::Expression("item.name".into()) })
        );

        let node = Node::from_value(&json!({"type": "TEXT"}));
        assert_eq!(
            node.kind,
            NodeKind::Text(Text { content: TextContent::Literal(String::new()) })
        );
    }

    #[test]
    fn test_instance_props_keep_order() {
        let node = Node::from_value(&json!({
            "type": "INSTANCE",
            "name": "Za/Button",
            "props": {"zeta": 1, "alpha": true, "mid": "x", "nested": {"a": 1}}
        }));
        let NodeKind::Instance(instance) = node.kind else {
            panic!("expected an instance");
        };

        let keys: Vec<&str> = instance.props.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid", "nested"]);
        assert_eq!(instance.props["nested"], PropValue::Unsupported);
        assert_eq!(instance.name, "Za/Button");
    }

    #[test]
    fn test_overlay_position() {
        let node = Node::from_value(&json!({
            "type": "OVERLAY",
            "position": {"right": 16, "bottom": "auto"}
        }));
        let NodeKind::Overlay(overlay) = node.kind else {
            panic!("expected an overlay");
        };

        assert_eq!(overlay.position.edge(Edge::Right), Some(16.0));
        assert_eq!(overlay.position.edge(Edge::Bottom), Some(0.0));
        assert_eq!(overlay.position.edge(Edge::Left), None);
        assert_eq!(overlay.child.kind, NodeKind::Unknown(None));
    }

    #[test]
    fn test_unknown_kind() {
        let node = Node::from_value(&json!({"type": "VIDEO"}));
        assert_eq!(node.kind, NodeKind::Unknown(Some("VIDEO".into())));
        assert_eq!(node.kind.type_name(), "VIDEO");

        let node = Node::from_value(&json!("just a string"));
        assert_eq!(node.kind.type_name(), "<none>");
    }
}
