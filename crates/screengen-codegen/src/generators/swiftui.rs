//! SwiftUI code generator.

use screengen_core::{
    format_length, format_prop, round_to_int, swift_name, Direction, Edge, Instance, Layout,
    Padding, Position, Repeat,
};

use super::templates::{ScreenData, TemplateEngine};
use super::CodeGenerator;
use crate::emitter::{FramePlan, OverlayBlock, RepeatScope};
use crate::error::Result;
use crate::layout::{
    overlay_insets, size_fragments, ContainerShape, HorizontalBias, OverlayAlignment,
    SizeFragment, VerticalBias,
};

/// Overlay insets are chained trailing, leading, top, bottom.
const EDGE_ORDER: [Edge; 4] = [Edge::Right, Edge::Left, Edge::Top, Edge::Bottom];

const SCREEN_TEMPLATE: &str = "swiftui_screen";

/// SwiftUI code generator.
pub struct SwiftUIGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> SwiftUIGenerator<'a> {
    /// Create a new SwiftUI generator.
    pub fn new() -> Self {
        let mut engine = TemplateEngine::new();
        Self::register_templates(&mut engine);
        Self { engine }
    }

    fn register_templates(engine: &mut TemplateEngine) {
        let registered = engine.register_template(
            SCREEN_TEMPLATE,
            r#"import SwiftUI

struct {{screen_name}}: View {
    var items: [Any] = []

    var body: some View {
        ZStack(alignment: .center) {
{{body}}
        }
    }
}

#Preview {
    {{screen_name}}()
}
"#,
        );
        if let Err(err) = registered {
            log::error!("failed to register SwiftUI screen template: {err}");
        }
    }

    /// Trailing `.frame(...)` and `.padding(...)` chain for a layout block.
    ///
    /// Scroll fragments never reach this chain; SwiftUI scrolls through a
    /// wrapping `ScrollView` instead.
    fn modifier_chain(layout: &Layout) -> String {
        let mut width = None;
        let mut height = None;
        let mut padding = String::new();

        for fragment in size_fragments(layout, &[]) {
            match fragment {
                SizeFragment::FillWidth => width = Some("maxWidth: .infinity".to_string()),
                SizeFragment::FillHeight => height = Some("maxHeight: .infinity".to_string()),
                SizeFragment::FixedWidth(value) => {
                    width = Some(format!("width: {}", round_to_int(value)))
                }
                SizeFragment::FixedHeight(value) => {
                    height = Some(format!("height: {}", round_to_int(value)))
                }
                SizeFragment::Padding(insets) => {
                    padding = format!(".padding({})", Self::edge_insets(&insets))
                }
                SizeFragment::Scroll(_) => {}
            }
        }

        let frame_args: Vec<String> = [width, height].into_iter().flatten().collect();
        if frame_args.is_empty() {
            padding
        } else {
            format!(".frame({}){padding}", frame_args.join(", "))
        }
    }

    /// `EdgeInsets(...)` literal; missing entries render as zero.
    fn edge_insets(padding: &Padding) -> String {
        let side = |value: Option<f64>| round_to_int(value.unwrap_or(0.0));
        format!(
            "EdgeInsets(top: {}, leading: {}, bottom: {}, trailing: {})",
            side(padding.top),
            side(padding.left),
            side(padding.bottom),
            side(padding.right)
        )
    }

    /// `HStack(spacing: N)` style header.
    fn stack(keyword: &str, layout: &Layout) -> String {
        let spacing = format_length(layout.spacing, "")
            .map(|spacing| format!("spacing: {spacing}"))
            .unwrap_or_default();
        format!("{keyword}({spacing}) {{")
    }

    fn alignment_name(alignment: OverlayAlignment) -> &'static str {
        match (alignment.vertical, alignment.horizontal) {
            (VerticalBias::Top, HorizontalBias::Start) => ".topLeading",
            (VerticalBias::Top, HorizontalBias::Center) => ".top",
            (VerticalBias::Top, HorizontalBias::End) => ".topTrailing",
            (VerticalBias::Center, HorizontalBias::Start) => ".leading",
            (VerticalBias::Center, HorizontalBias::Center) => ".center",
            (VerticalBias::Center, HorizontalBias::End) => ".trailing",
            (VerticalBias::Bottom, HorizontalBias::Start) => ".bottomLeading",
            (VerticalBias::Bottom, HorizontalBias::Center) => ".bottom",
            (VerticalBias::Bottom, HorizontalBias::End) => ".bottomTrailing",
        }
    }
}

impl<'a> Default for SwiftUIGenerator<'a> {
    fn default() -> Self {
        Self::new()
    }
}

fn edge_name(edge: Edge) -> &'static str {
    match edge {
        Edge::Left => ".leading",
        Edge::Top => ".top",
        Edge::Right => ".trailing",
        Edge::Bottom => ".bottom",
    }
}

impl<'a> CodeGenerator for SwiftUIGenerator<'a> {
    fn framework_name(&self) -> &'static str {
        "SwiftUI"
    }

    fn visibility_guard(&self, expr: &str) -> String {
        format!("if {expr} {{")
    }

    fn spacer(&self, _flow: Option<Direction>) -> String {
        "Spacer()".to_string()
    }

    fn instance(&self, instance: &Instance) -> String {
        let args: Vec<String> = instance
            .props
            .iter()
            .map(|(key, value)| format_prop(key, value, ": "))
            .collect();

        format!(
            "{}({}){}",
            swift_name(&instance.name),
            args.join(", "),
            Self::modifier_chain(&instance.layout)
        )
    }

    fn frame_openers(&self, plan: &FramePlan<'_>) -> Vec<String> {
        let layout = &plan.frame.layout;
        match plan.shape {
            ContainerShape::LazyRow => vec![
                "ScrollView(.horizontal, showsIndicators: false) {".to_string(),
                Self::stack("HStack", layout),
            ],
            ContainerShape::Row { .. } => vec![Self::stack("HStack", layout)],
            ContainerShape::Column { scroll: Some(_) } => vec![
                "ScrollView(.vertical, showsIndicators: true) {".to_string(),
                Self::stack("VStack", layout),
            ],
            ContainerShape::Column { scroll: None } => vec![Self::stack("VStack", layout)],
        }
    }

    fn frame_trailer(&self, plan: &FramePlan<'_>) -> String {
        Self::modifier_chain(&plan.frame.layout)
    }

    fn repeat_scope(&self, _plan: &FramePlan<'_>, repeat: &Repeat) -> RepeatScope {
        RepeatScope {
            opener: format!("ForEach({}.indices, id: \\.self) {{ idx in", repeat.source),
            bindings: vec![format!("let {} = {}[idx]", repeat.alias, repeat.source)],
        }
    }

    fn child_wrapper(&self, _plan: &FramePlan<'_>) -> Option<String> {
        None
    }

    fn overlay_block(&self, alignment: OverlayAlignment, position: &Position) -> OverlayBlock {
        let trailer: String = overlay_insets(position, &EDGE_ORDER)
            .iter()
            .map(|(edge, offset)| format!(".padding({}, {})", edge_name(*edge), round_to_int(*offset)))
            .collect();

        OverlayBlock {
            opener: format!("ZStack(alignment: {}) {{", Self::alignment_name(alignment)),
            trailer,
        }
    }

    fn wrap_screen(&self, screen_name: &str, body: &str) -> Result<String> {
        self.engine
            .render(SCREEN_TEMPLATE, &ScreenData { screen_name, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::{EmitContext, Emitter};
    use screengen_core::{Document, Node, SizeSpec};
    use serde_json::json;

    fn emit(value: serde_json::Value, level: usize) -> String {
        let generator = SwiftUIGenerator::new();
        Emitter::new(&generator).emit(&Node::from_value(&value), EmitContext::new(level))
    }

    #[test]
    fn test_modifier_chain() {
        let fill = Layout {
            width: Some(SizeSpec::Fill),
            height: Some(SizeSpec::Fill),
            ..Layout::default()
        };
        assert_eq!(
            SwiftUIGenerator::modifier_chain(&fill),
            ".frame(maxWidth: .infinity, maxHeight: .infinity)"
        );

        let mixed = Layout {
            width: Some(SizeSpec::Fixed(Some(100.0))),
            height: Some(SizeSpec::Fill),
            ..Layout::default()
        };
        assert_eq!(
            SwiftUIGenerator::modifier_chain(&mixed),
            ".frame(width: 100, maxHeight: .infinity)"
        );

        let padded = Layout {
            padding: Some(Padding {
                left: Some(16.0),
                top: Some(8.0),
                right: Some(16.0),
                bottom: Some(8.0),
            }),
            ..Layout::default()
        };
        assert_eq!(
            SwiftUIGenerator::modifier_chain(&padded),
            ".padding(EdgeInsets(top: 8, leading: 16, bottom: 8, trailing: 16))"
        );

        assert_eq!(SwiftUIGenerator::modifier_chain(&Layout::default()), "");
    }

    #[test]
    fn test_edge_insets_keep_zero_sides() {
        let padding = Padding {
            left: Some(12.0),
            top: None,
            right: Some(0.0),
            bottom: Some(4.4),
        };
        assert_eq!(
            SwiftUIGenerator::edge_insets(&padding),
            "EdgeInsets(top: 0, leading: 12, bottom: 4, trailing: 0)"
        );
    }

    #[test]
    fn test_emit_text() {
        assert_eq!(emit(json!({"type": "TEXT", "text": "Hello"}), 1), "  Text(\"Hello\")");
        assert_eq!(emit(json!({"type": "TEXT", "text": "{{ item.name }}"}), 1), "  Text(item.name)");
    }

    #[test]
    fn test_emit_spacer_ignores_flow() {
        let out = emit(
            json!({"type": "FRAME", "layout": {"direction": "HORIZONTAL"}, "children": [{"type": "SPACER"}]}),
            0,
        );
        assert_eq!(out, "HStack() {\n  Spacer()\n}");
    }

    #[test]
    fn test_emit_instance() {
        let out = emit(
            json!({
                "type": "INSTANCE",
                "name": "Za/Button",
                "props": {"label": "Add", "enabled": true, "count": 2.6, "action": "{{ vm.add }}"},
                "layout": {"width": {"mode": "FILL"}}
            }),
            1,
        );
        assert_eq!(
            out,
            "  ZaButton(label: \"Add\", enabled: true, count: 3, action: vm.add).frame(maxWidth: .infinity)"
        );
    }

    #[test]
    fn test_emit_frame_vertical() {
        let out = emit(
            json!({
                "type": "FRAME",
                "layout": {
                    "direction": "VERTICAL",
                    "spacing": 16,
                    "width": {"mode": "FILL"},
                    "padding": [16, 8, 16, 8]
                },
                "children": [{"type": "TEXT", "text": "Title"}]
            }),
            1,
        );
        assert_eq!(
            out,
            [
                "  VStack(spacing: 16) {",
                "    Text(\"Title\")",
                "  }.frame(maxWidth: .infinity).padding(EdgeInsets(top: 8, leading: 16, bottom: 8, trailing: 16))",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_spacing_without_direction() {
        let out = emit(json!({"type": "FRAME", "layout": {"spacing": 8}}), 0);
        assert_eq!(out, "VStack(spacing: 8) {\n}");
    }

    #[test]
    fn test_vertical_scroll_column() {
        let out = emit(
            json!({
                "type": "FRAME",
                "scroll": "vertical",
                "layout": {"direction": "VERTICAL", "spacing": 12, "height": {"mode": "FIXED", "value": 300}},
                "children": [{"type": "TEXT", "text": "Row"}]
            }),
            0,
        );
        assert_eq!(
            out,
            [
                "ScrollView(.vertical, showsIndicators: true) {",
                "  VStack(spacing: 12) {",
                "    Text(\"Row\")",
                "  }",
                "}.frame(height: 300)",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_vertical_scroll_on_row_is_plain_hstack() {
        let out = emit(
            json!({
                "type": "FRAME",
                "scroll": "vertical",
                "layout": {"direction": "HORIZONTAL", "spacing": 8},
                "children": [{"type": "TEXT", "text": "a"}]
            }),
            0,
        );
        assert_eq!(out, "HStack(spacing: 8) {\n  Text(\"a\")\n}");
    }

    #[test]
    fn test_horizontal_scroll() {
        let out = emit(
            json!({
                "type": "FRAME",
                "scroll": "horizontal",
                "layout": {"spacing": 8},
                "children": [{"type": "TEXT", "text": "Item 1"}, {"type": "TEXT", "text": "Item 2"}]
            }),
            1,
        );
        assert_eq!(
            out,
            [
                "  ScrollView(.horizontal, showsIndicators: false) {",
                "    HStack(spacing: 8) {",
                "      Text(\"Item 1\")",
                "      Text(\"Item 2\")",
                "    }",
                "  }",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_emit_frame_with_repeat() {
        let out = emit(
            json!({
                "type": "FRAME",
                "layout": {"direction": "VERTICAL", "spacing": 8},
                "repeat": {"for": "items", "as": "item"},
                "children": [{"type": "TEXT", "text": "{{item.name}}"}]
            }),
            1,
        );
        assert_eq!(
            out,
            [
                "  VStack(spacing: 8) {",
                "    ForEach(items.indices, id: \\.self) { idx in",
                "      let item = items[idx]",
                "      Text(item.name)",
                "    }",
                "  }",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_repeat_keeps_scroll_wrapper() {
        let out = emit(
            json!({
                "type": "FRAME",
                "scroll": "horizontal",
                "repeat": {"for": "products", "as": "product"},
                "children": [{"type": "TEXT", "text": "{{product.name}}"}]
            }),
            0,
        );
        assert_eq!(
            out,
            [
                "ScrollView(.horizontal, showsIndicators: false) {",
                "  HStack() {",
                "    ForEach(products.indices, id: \\.self) { idx in",
                "      let product = products[idx]",
                "      Text(product.name)",
                "    }",
                "  }",
                "}",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_emit_overlay() {
        let out = emit(
            json!({
                "type": "OVERLAY",
                "position": {"right": 16, "bottom": 16},
                "child": {"type": "TEXT", "text": "FAB"}
            }),
            1,
        );
        assert_eq!(
            out,
            "  ZStack(alignment: .bottomTrailing) {\n    Text(\"FAB\")\n  }.padding(.trailing, 16).padding(.bottom, 16)"
        );
    }

    #[test]
    fn test_overlay_alignment_names() {
        let cases = [
            (json!({"left": 8, "top": 8}), ".topLeading"),
            (json!({"top": 8}), ".top"),
            (json!({"right": 8, "top": 8}), ".topTrailing"),
            (json!({"left": 8}), ".leading"),
            (json!({}), ".center"),
            (json!({"right": 8}), ".trailing"),
            (json!({"left": 8, "bottom": 8}), ".bottomLeading"),
            (json!({"bottom": 8}), ".bottom"),
            (json!({"right": 8, "bottom": 8}), ".bottomTrailing"),
        ];

        for (position, expected) in cases {
            let out = emit(
                json!({"type": "OVERLAY", "position": position, "child": {"type": "SPACER"}}),
                0,
            );
            assert!(out.starts_with(&format!("ZStack(alignment: {expected}) {{")), "{out}");
        }
    }

    #[test]
    fn test_overlay_padding_order() {
        let out = emit(
            json!({
                "type": "OVERLAY",
                "position": {"bottom": 4, "top": 0, "left": 2, "right": 1},
                "child": {"type": "SPACER"}
            }),
            0,
        );
        assert!(out.ends_with(
            "}.padding(.trailing, 1).padding(.leading, 2).padding(.top, 0).padding(.bottom, 4)"
        ));
    }

    #[test]
    fn test_emit_with_visibility() {
        let out = emit(json!({"type": "TEXT", "text": "Conditional", "visible": "{{showText}}"}), 1);
        assert_eq!(out, "  if showText {\n    Text(\"Conditional\")\n  }");
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(
            emit(json!({"type": "UNKNOWN_TYPE"}), 1),
            "  // unsupported node type: UNKNOWN_TYPE"
        );
    }

    #[test]
    fn test_generate_screen() {
        let doc = Document::from_value(&json!({
            "type": "FRAME",
            "name": "TestScreen",
            "layout": {"direction": "VERTICAL", "spacing": 16},
            "children": [{"type": "TEXT", "text": "Hello World"}]
        }))
        .unwrap();

        let code = SwiftUIGenerator::new().generate_screen(&doc).unwrap();
        assert!(code.starts_with("import SwiftUI\n"));
        assert!(code.contains("struct TestScreen: View {"));
        assert!(code.contains("var items: [Any] = []"));
        assert!(code.contains("ZStack(alignment: .center) {\n    VStack(spacing: 16) {\n      Text(\"Hello World\")\n    }\n"));
        assert!(code.contains("#Preview {\n    TestScreen()\n}"));
    }
}
