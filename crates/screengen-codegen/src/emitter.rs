//! Recursive node emitter shared by every backend.
//!
//! The emitter owns dispatch over node kinds, indentation and flow-direction
//! threading. Everything a backend spells differently goes through the
//! [`CodeGenerator`] strategy.

use screengen_core::{indent, Direction, Frame, Node, NodeKind, Overlay};

use crate::generators::CodeGenerator;
use crate::layout::{ContainerShape, OverlayAlignment};

/// Read-only state threaded down the recursion.
///
/// Passed by value, so sibling calls never observe each other's context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmitContext {
    /// Indentation level of the current line.
    pub level: usize,
    /// Declared direction of the nearest enclosing container.
    pub flow: Option<Direction>,
}

impl EmitContext {
    /// Context at the given level with no enclosing container.
    pub fn new(level: usize) -> Self {
        Self { level, flow: None }
    }

    /// One level deeper.
    pub fn nested(self) -> Self {
        self.deeper(1)
    }

    /// `by` levels deeper.
    pub fn deeper(self, by: usize) -> Self {
        Self {
            level: self.level + by,
            ..self
        }
    }

    /// Same level under a different enclosing direction.
    pub fn with_flow(self, flow: Option<Direction>) -> Self {
        Self { flow, ..self }
    }

    /// Whitespace for this level.
    pub fn indent(&self) -> String {
        indent(self.level)
    }
}

/// A frame together with its resolved container shape.
#[derive(Debug, Clone, Copy)]
pub struct FramePlan<'a> {
    pub frame: &'a Frame,
    pub shape: ContainerShape,
}

/// Opening line and per-element bindings of a repeat scope.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RepeatScope {
    /// Opening line, ending in the block's opening brace.
    pub opener: String,
    /// Lines emitted at the top of the scope body, e.g. alias bindings.
    pub bindings: Vec<String>,
}

/// Opening line of an overlay block and the chain appended after its closing
/// brace.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayBlock {
    pub opener: String,
    pub trailer: String,
}

/// Tree-to-text compiler parameterized by a backend.
pub struct Emitter<'g, G: ?Sized> {
    generator: &'g G,
}

impl<'g, G: CodeGenerator + ?Sized> Emitter<'g, G> {
    /// Create an emitter for the given backend.
    pub fn new(generator: &'g G) -> Self {
        Self { generator }
    }

    /// Emit a node and its subtree as a block of lines without a trailing
    /// newline.
    pub fn emit(&self, node: &Node, ctx: EmitContext) -> String {
        match &node.visible {
            Some(expr) => {
                let ind = ctx.indent();
                format!(
                    "{ind}{}\n{}\n{ind}}}",
                    self.generator.visibility_guard(expr),
                    self.emit_kind(&node.kind, ctx.nested())
                )
            }
            None => self.emit_kind(&node.kind, ctx),
        }
    }

    fn emit_kind(&self, kind: &NodeKind, ctx: EmitContext) -> String {
        log::trace!("emitting {} at level {}", kind.type_name(), ctx.level);
        let ind = ctx.indent();

        match kind {
            NodeKind::Text(text) => format!("{ind}{}", self.generator.text(&text.content)),
            NodeKind::Spacer => format!("{ind}{}", self.generator.spacer(ctx.flow)),
            NodeKind::Instance(instance) => format!("{ind}{}", self.generator.instance(instance)),
            NodeKind::Frame(frame) => self.emit_frame(frame, ctx),
            NodeKind::Overlay(overlay) => self.emit_overlay(overlay, ctx),
            NodeKind::Unknown(_) => {
                log::warn!("unsupported node type: {}", kind.type_name());
                format!("{ind}{}", self.generator.unknown_marker(kind.type_name()))
            }
        }
    }

    fn emit_frame(&self, frame: &Frame, ctx: EmitContext) -> String {
        let plan = FramePlan {
            frame,
            shape: ContainerShape::resolve(&frame.layout, frame.scroll),
        };
        let openers = self.generator.frame_openers(&plan);
        let mut lines = Vec::new();

        // Each opener owns one nesting level
        for (depth, opener) in openers.iter().enumerate() {
            lines.push(format!("{}{}", ctx.deeper(depth).indent(), opener));
        }

        let inner = ctx.deeper(openers.len()).with_flow(frame.layout.direction);

        if let Some(repeat) = &frame.repeat {
            // A single iteration scope for all children
            let scope = self.generator.repeat_scope(&plan, repeat);
            let body = inner.nested();
            lines.push(format!("{}{}", inner.indent(), scope.opener));
            for binding in &scope.bindings {
                lines.push(format!("{}{}", body.indent(), binding));
            }
            for child in &frame.children {
                lines.push(self.emit(child, body));
            }
            lines.push(format!("{}}}", inner.indent()));
        } else if let Some(wrapper) = self.generator.child_wrapper(&plan) {
            for child in &frame.children {
                lines.push(format!("{}{}", inner.indent(), wrapper));
                lines.push(self.emit(child, inner.nested()));
                lines.push(format!("{}}}", inner.indent()));
            }
        } else {
            for child in &frame.children {
                lines.push(self.emit(child, inner));
            }
        }

        // The trailing chain belongs to the outermost block
        let trailer = self.generator.frame_trailer(&plan);
        for depth in (0..openers.len()).rev() {
            let close = if depth == 0 { trailer.as_str() } else { "" };
            lines.push(format!("{}}}{}", ctx.deeper(depth).indent(), close));
        }

        lines.join("\n")
    }

    fn emit_overlay(&self, overlay: &Overlay, ctx: EmitContext) -> String {
        let alignment = OverlayAlignment::resolve(&overlay.position);
        let block = self.generator.overlay_block(alignment, &overlay.position);
        let ind = ctx.indent();

        format!(
            "{ind}{}\n{}\n{ind}}}{}",
            block.opener,
            self.emit(&overlay.child, ctx.nested()),
            block.trailer
        )
    }
}
