//! Code generators for the supported UI frameworks.

#[cfg(feature = "compose")]
mod compose;
#[cfg(feature = "swiftui")]
mod swiftui;

mod templates;

#[cfg(feature = "compose")]
pub use compose::ComposeGenerator;
#[cfg(feature = "swiftui")]
pub use swiftui::SwiftUIGenerator;

pub use templates::{ScreenData, TemplateEngine};

use screengen_core::{
    format::quote, screen_name, Direction, Document, Instance, Node, Position, Repeat,
    TextContent, DEFAULT_SCREEN_NAME,
};

use crate::emitter::{EmitContext, Emitter, FramePlan, OverlayBlock, RepeatScope};
use crate::error::Result;
use crate::layout::OverlayAlignment;

/// Indentation level of the generated body inside the screen template.
pub const BODY_LEVEL: usize = 2;

/// Backend strategy: how each layout decision is spelled in one framework.
///
/// Every method returns line content without indentation; the
/// [`Emitter`] owns indentation and nesting.
pub trait CodeGenerator {
    /// Target framework name.
    fn framework_name(&self) -> &'static str;

    /// Opening line of a visibility guard, ending in `{`.
    fn visibility_guard(&self, expr: &str) -> String;

    /// Text call for a literal or an embedded expression.
    fn text(&self, content: &TextContent) -> String {
        match content {
            TextContent::Literal(literal) => format!("Text({})", quote(literal)),
            TextContent::Expression(expr) => format!("Text({expr})"),
        }
    }

    /// Flexible spacer inside a container flowing in `flow`.
    fn spacer(&self, flow: Option<Direction>) -> String;

    /// Component call with arguments and size modifiers.
    fn instance(&self, instance: &Instance) -> String;

    /// Opening lines of a frame, outermost first, each ending in `{`.
    fn frame_openers(&self, plan: &FramePlan<'_>) -> Vec<String>;

    /// Chain appended after the outermost closing brace of a frame.
    fn frame_trailer(&self, plan: &FramePlan<'_>) -> String;

    /// Iteration scope for a repeated frame.
    fn repeat_scope(&self, plan: &FramePlan<'_>, repeat: &Repeat) -> RepeatScope;

    /// Per-child block opener for containers that need one.
    fn child_wrapper(&self, plan: &FramePlan<'_>) -> Option<String>;

    /// Alignment block of an overlay.
    fn overlay_block(&self, alignment: OverlayAlignment, position: &Position) -> OverlayBlock;

    /// Inert line standing in for a node that cannot be emitted.
    fn unknown_marker(&self, type_name: &str) -> String {
        format!("// unsupported node type: {type_name}")
    }

    /// Wrap a generated body in the framework's file template.
    fn wrap_screen(&self, screen_name: &str, body: &str) -> Result<String>;

    /// Emit the body for a layout tree at [`BODY_LEVEL`].
    fn generate_body(&self, root: &Node) -> String {
        Emitter::new(self).emit(root, EmitContext::new(BODY_LEVEL))
    }

    /// Generate a complete source file for a document.
    fn generate_screen(&self, document: &Document) -> Result<String> {
        let name = screen_name(document.name.as_deref().unwrap_or(DEFAULT_SCREEN_NAME));
        log::debug!("generating {} screen '{}'", self.framework_name(), name);

        let body = self.generate_body(&document.root);
        self.wrap_screen(&name, &body)
    }
}
