//! Kotlin Compose code generator.

use screengen_core::{
    compose_name, format_length, format_prop, Direction, Edge, Instance, Position, Repeat,
};

use super::templates::{ScreenData, TemplateEngine};
use super::CodeGenerator;
use crate::emitter::{FramePlan, OverlayBlock, RepeatScope};
use crate::error::Result;
use crate::layout::{
    size_fragments, Arrangement, ContainerShape, HorizontalBias, OverlayAlignment, ScrollAxis,
    SizeFragment, VerticalBias,
};

const DP: &str = ".dp";

/// Overlay insets are emitted start, top, end, bottom.
const EDGE_ORDER: [Edge; 4] = [Edge::Left, Edge::Top, Edge::Right, Edge::Bottom];

const SCREEN_TEMPLATE: &str = "compose_screen";

/// Kotlin Compose code generator.
pub struct ComposeGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> ComposeGenerator<'a> {
    /// Create a new Compose generator.
    pub fn new() -> Self {
        let mut engine = TemplateEngine::new();
        Self::register_templates(&mut engine);
        Self { engine }
    }

    /// Register Compose templates.
    fn register_templates(engine: &mut TemplateEngine) {
        let registered = engine.register_template(
            SCREEN_TEMPLATE,
            r#"@file:Suppress("UnusedImport")

package ui.generated

import androidx.compose.foundation.layout.*
import androidx.compose.foundation.rememberScrollState
import androidx.compose.foundation.verticalScroll
import androidx.compose.foundation.horizontalScroll
import androidx.compose.foundation.lazy.LazyColumn
import androidx.compose.foundation.lazy.LazyRow
import androidx.compose.foundation.lazy.items
import androidx.compose.material3.Text
import androidx.compose.runtime.Composable
import androidx.compose.ui.Alignment
import androidx.compose.ui.Modifier
import androidx.compose.ui.unit.dp

@Composable
fun {{screen_name}}(
    items: List<Any> = emptyList()
) {
  Box(Modifier.fillMaxSize()) {
{{body}}
  }
}
"#,
        );
        if let Err(err) = registered {
            log::error!("failed to register Compose screen template: {err}");
        }
    }

    /// `modifier = Modifier.a().b()` argument, if any fragment exists.
    fn modifier_argument(fragments: &[SizeFragment]) -> Option<String> {
        if fragments.is_empty() {
            return None;
        }
        let calls: Vec<String> = fragments.iter().map(Self::modifier_call).collect();
        Some(format!("modifier = Modifier.{}", calls.join(".")))
    }

    /// One modifier call without the leading dot.
    fn modifier_call(fragment: &SizeFragment) -> String {
        match fragment {
            SizeFragment::Scroll(ScrollAxis::Vertical) => {
                "verticalScroll(rememberScrollState())".to_string()
            }
            SizeFragment::Scroll(ScrollAxis::Horizontal) => {
                "horizontalScroll(rememberScrollState())".to_string()
            }
            SizeFragment::FillWidth => "fillMaxWidth()".to_string(),
            SizeFragment::FillHeight => "fillMaxHeight()".to_string(),
            SizeFragment::FixedWidth(width) => format!("width({})", dp_or_zero(Some(*width))),
            SizeFragment::FixedHeight(height) => format!("height({})", dp_or_zero(Some(*height))),
            SizeFragment::Padding(padding) => format!(
                "padding(start = {}, top = {}, end = {}, bottom = {})",
                dp_or_zero(padding.left),
                dp_or_zero(padding.top),
                dp_or_zero(padding.right),
                dp_or_zero(padding.bottom)
            ),
        }
    }

    /// `verticalArrangement = Arrangement.spacedBy(N.dp)` style argument.
    fn arrangement_argument(arrangement: Arrangement) -> String {
        let axis = match arrangement.direction {
            Direction::Vertical => "verticalArrangement",
            Direction::Horizontal => "horizontalArrangement",
        };
        format!("{axis} = Arrangement.spacedBy({})", dp_or_zero(Some(arrangement.spacing)))
    }

    /// Composable name for a container shape.
    fn container_name(shape: ContainerShape) -> &'static str {
        match shape {
            ContainerShape::LazyRow => "LazyRow",
            ContainerShape::Row { .. } => "Row",
            ContainerShape::Column { .. } => "Column",
        }
    }

    /// `Alignment` constant for an overlay.
    fn alignment_name(alignment: OverlayAlignment) -> &'static str {
        match (alignment.vertical, alignment.horizontal) {
            (VerticalBias::Top, HorizontalBias::Start) => "Alignment.TopStart",
            (VerticalBias::Top, HorizontalBias::Center) => "Alignment.TopCenter",
            (VerticalBias::Top, HorizontalBias::End) => "Alignment.TopEnd",
            (VerticalBias::Center, HorizontalBias::Start) => "Alignment.CenterStart",
            (VerticalBias::Center, HorizontalBias::Center) => "Alignment.Center",
            (VerticalBias::Center, HorizontalBias::End) => "Alignment.CenterEnd",
            (VerticalBias::Bottom, HorizontalBias::Start) => "Alignment.BottomStart",
            (VerticalBias::Bottom, HorizontalBias::Center) => "Alignment.BottomCenter",
            (VerticalBias::Bottom, HorizontalBias::End) => "Alignment.BottomEnd",
        }
    }
}

impl<'a> Default for ComposeGenerator<'a> {
    fn default() -> Self {
        Self::new()
    }
}

fn dp_or_zero(value: Option<f64>) -> String {
    format_length(value, DP).unwrap_or_else(|| format!("0{DP}"))
}

fn edge_argument(edge: Edge) -> &'static str {
    match edge {
        Edge::Left => "start",
        Edge::Top => "top",
        Edge::Right => "end",
        Edge::Bottom => "bottom",
    }
}

impl<'a> CodeGenerator for ComposeGenerator<'a> {
    fn framework_name(&self) -> &'static str {
        "Compose"
    }

    fn visibility_guard(&self, expr: &str) -> String {
        format!("if ({expr}) {{")
    }

    fn spacer(&self, flow: Option<Direction>) -> String {
        match flow {
            Some(Direction::Horizontal) => "Spacer(Modifier.width(0.dp).weight(1f))".to_string(),
            _ => "Spacer(Modifier.height(0.dp).weight(1f))".to_string(),
        }
    }

    fn instance(&self, instance: &Instance) -> String {
        let mut args: Vec<String> = instance
            .props
            .iter()
            .map(|(key, value)| format_prop(key, value, " = "))
            .collect();
        args.extend(Self::modifier_argument(&size_fragments(&instance.layout, &[])));

        format!("{}({})", compose_name(&instance.name), args.join(", "))
    }

    fn frame_openers(&self, plan: &FramePlan<'_>) -> Vec<String> {
        let layout = &plan.frame.layout;
        let extras: Vec<SizeFragment> =
            plan.shape.scroll().map(SizeFragment::Scroll).into_iter().collect();

        let args: Vec<String> = [
            Self::modifier_argument(&size_fragments(layout, &extras)),
            Arrangement::resolve(layout).map(Self::arrangement_argument),
        ]
        .into_iter()
        .flatten()
        .collect();

        vec![format!("{}({}) {{", Self::container_name(plan.shape), args.join(", "))]
    }

    fn frame_trailer(&self, _plan: &FramePlan<'_>) -> String {
        String::new()
    }

    fn repeat_scope(&self, plan: &FramePlan<'_>, repeat: &Repeat) -> RepeatScope {
        let opener = if plan.shape.is_lazy() {
            format!("items({}) {{ {} ->", repeat.source, repeat.alias)
        } else {
            format!("{}.forEach {{ {} ->", repeat.source, repeat.alias)
        };
        RepeatScope {
            opener,
            bindings: Vec::new(),
        }
    }

    fn child_wrapper(&self, plan: &FramePlan<'_>) -> Option<String> {
        plan.shape.is_lazy().then(|| "item {".to_string())
    }

    fn overlay_block(&self, alignment: OverlayAlignment, position: &Position) -> OverlayBlock {
        let paddings: String = crate::layout::overlay_insets(position, &EDGE_ORDER)
            .iter()
            .map(|(edge, offset)| {
                format!(".padding({} = {})", edge_argument(*edge), dp_or_zero(Some(*offset)))
            })
            .collect();

        OverlayBlock {
            opener: format!(
                "Box(Modifier.align({}){}) {{",
                Self::alignment_name(alignment),
                paddings
            ),
            trailer: String::new(),
        }
    }

    fn wrap_screen(&self, screen_name: &str, body: &str) -> Result<String> {
        self.engine
            .render(SCREEN_TEMPLATE, &ScreenData { screen_name, body })
    }
}
