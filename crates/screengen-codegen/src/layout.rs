//! Layout resolution.
//!
//! Turns a node's layout block, scroll mode and overlay position into
//! backend-neutral decisions:
//!
//! 1. **Container shape**: column, row, or a virtualized lazy row
//! 2. **Size fragments**: ordered scroll/size/padding modifiers
//! 3. **Arrangement**: spacing between children along the declared axis
//! 4. **Overlay alignment**: nine-way alignment plus per-edge insets
//!
//! Backends only decide how these are spelled.

use screengen_core::{Direction, Edge, Layout, Padding, Position, ScrollMode, SizeSpec};
use smallvec::SmallVec;

/// Axis of a scroll modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAxis {
    Vertical,
    Horizontal,
}

/// Resolved container shape of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerShape {
    /// Virtualized single-axis row. Scrolling is implicit.
    LazyRow,
    /// Plain row, optionally with a scroll modifier.
    Row { scroll: Option<ScrollAxis> },
    /// Plain column, optionally with a scroll modifier.
    Column { scroll: Option<ScrollAxis> },
}

impl ContainerShape {
    /// Resolve the shape from the declared direction and scroll mode.
    ///
    /// A horizontal scroll request always wins and yields a lazy row. A
    /// vertical scroll request on a horizontal container attaches a
    /// *horizontal* scroll modifier.
    pub fn resolve(layout: &Layout, scroll: Option<ScrollMode>) -> Self {
        if scroll == Some(ScrollMode::Horizontal) {
            return ContainerShape::LazyRow;
        }

        let vertical_scroll = scroll == Some(ScrollMode::Vertical);
        match layout.direction {
            Some(Direction::Horizontal) => ContainerShape::Row {
                scroll: vertical_scroll.then_some(ScrollAxis::Horizontal),
            },
            _ => ContainerShape::Column {
                scroll: vertical_scroll.then_some(ScrollAxis::Vertical),
            },
        }
    }

    /// Whether children are rendered on demand.
    pub fn is_lazy(&self) -> bool {
        matches!(self, ContainerShape::LazyRow)
    }

    /// Scroll modifier attached to a non-virtualized container.
    pub fn scroll(&self) -> Option<ScrollAxis> {
        match self {
            ContainerShape::LazyRow => None,
            ContainerShape::Row { scroll } | ContainerShape::Column { scroll } => *scroll,
        }
    }
}

/// One layout concern expressed as a modifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeFragment {
    Scroll(ScrollAxis),
    FillWidth,
    FillHeight,
    FixedWidth(f64),
    FixedHeight(f64),
    Padding(Padding),
}

/// Ordered fragment list; most nodes carry only a handful.
pub type SizeFragments = SmallVec<[SizeFragment; 6]>;

/// Compute the ordered size/padding fragments for a layout block.
///
/// `extras` (scroll modifiers) come first, then fill width, fill height,
/// fixed width, fixed height and a combined padding fragment. Fixed sizes of
/// zero are elided.
pub fn size_fragments(layout: &Layout, extras: &[SizeFragment]) -> SizeFragments {
    let mut fragments: SizeFragments = extras.iter().copied().collect();

    if matches!(layout.width, Some(SizeSpec::Fill)) {
        fragments.push(SizeFragment::FillWidth);
    }
    if matches!(layout.height, Some(SizeSpec::Fill)) {
        fragments.push(SizeFragment::FillHeight);
    }
    if let Some(width) = fixed_value(layout.width) {
        fragments.push(SizeFragment::FixedWidth(width));
    }
    if let Some(height) = fixed_value(layout.height) {
        fragments.push(SizeFragment::FixedHeight(height));
    }
    if let Some(padding) = layout.padding {
        fragments.push(SizeFragment::Padding(padding));
    }

    fragments
}

fn fixed_value(size: Option<SizeSpec>) -> Option<f64> {
    match size {
        Some(SizeSpec::Fixed(Some(value))) if value != 0.0 => Some(value),
        _ => None,
    }
}

/// Spacing between children along the declared axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrangement {
    pub direction: Direction,
    pub spacing: f64,
}

impl Arrangement {
    /// Present only with a declared direction and a non-zero spacing.
    pub fn resolve(layout: &Layout) -> Option<Self> {
        let spacing = layout.spacing.filter(|spacing| *spacing != 0.0)?;
        Some(Self {
            direction: layout.direction?,
            spacing,
        })
    }
}

/// Vertical placement of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalBias {
    Top,
    Center,
    Bottom,
}

/// Horizontal placement of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalBias {
    Start,
    Center,
    End,
}

/// Two-axis alignment of an overlay inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayAlignment {
    pub vertical: VerticalBias,
    pub horizontal: HorizontalBias,
}

impl OverlayAlignment {
    /// An axis is biased toward an edge only when exactly one of its two
    /// edges is given.
    pub fn resolve(position: &Position) -> Self {
        let vertical = match (position.top.is_some(), position.bottom.is_some()) {
            (true, false) => VerticalBias::Top,
            (false, true) => VerticalBias::Bottom,
            _ => VerticalBias::Center,
        };
        let horizontal = match (position.left.is_some(), position.right.is_some()) {
            (true, false) => HorizontalBias::Start,
            (false, true) => HorizontalBias::End,
            _ => HorizontalBias::Center,
        };

        Self { vertical, horizontal }
    }
}

/// Per-edge overlay insets in the caller's edge order.
///
/// One entry per edge present in the position.
pub fn overlay_insets(position: &Position, order: &[Edge]) -> SmallVec<[(Edge, f64); 4]> {
    order
        .iter()
        .filter_map(|edge| position.edge(*edge).map(|offset| (*edge, offset)))
        .collect()
}
