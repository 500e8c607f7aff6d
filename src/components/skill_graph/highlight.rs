//! Per-render styling derived from the dataset and the interaction state.
//!
//! Nothing here touches the DOM; the component feeds the results straight into
//! attributes and inline styles.

use super::dataset::SkillGraph;
use super::state::InteractionState;
use super::types::{Connection, EmergentCapability, Point, SkillNode};

pub const HIGHLIGHT_STROKE: &str = "#000";
pub const IDLE_STROKE: &str = "#ccc";
pub const FLOW_DASH: &str = "5,5";
pub const SOLID: &str = "none";
pub const SPOKE_DASH: &str = "3,3";

/// Appends a two-digit hex alpha to a `#rrggbb` color.
pub fn with_alpha(color: &str, alpha: &str) -> String {
	format!("{color}{alpha}")
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConnectionStyle {
	pub from: Point,
	pub to: Point,
	pub highlighted: bool,
	pub stroke: &'static str,
	pub width: u32,
	pub opacity: f64,
	pub dash: &'static str,
}

impl ConnectionStyle {
	fn new(from: Point, to: Point, conn: &Connection, state: &InteractionState) -> Self {
		let highlighted = state.selected.is_some_and(|id| conn.touches(id));
		let (stroke, width, opacity) = if highlighted {
			(HIGHLIGHT_STROKE, conn.strength, 0.8)
		} else {
			(IDLE_STROKE, conn.strength.saturating_sub(2).max(1), 0.4)
		};
		Self {
			from,
			to,
			highlighted,
			stroke,
			width,
			opacity,
			dash: if state.energy_flowing { FLOW_DASH } else { SOLID },
		}
	}
}

/// How strongly a node is drawn relative to the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
	Selected,
	Related,
	Dimmed,
	Idle,
}

impl Emphasis {
	pub fn of(node: &SkillNode, graph: &SkillGraph, state: &InteractionState) -> Self {
		let Some(selected) = state.selected else {
			return Self::Idle;
		};
		if node.id == selected {
			Self::Selected
		} else if graph
			.node(selected)
			.is_some_and(|s| s.related.contains(&node.id))
		{
			Self::Related
		} else {
			Self::Dimmed
		}
	}

	pub fn opacity(self) -> f64 {
		match self {
			Self::Selected => 1.0,
			Self::Related => 0.9,
			Self::Dimmed => 0.4,
			Self::Idle => 0.7,
		}
	}

	pub fn border_width(self) -> u32 {
		match self {
			Self::Selected => 3,
			Self::Related => 2,
			Self::Dimmed | Self::Idle => 1,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeStyle<'a> {
	pub node: &'a SkillNode,
	pub emphasis: Emphasis,
	pub opacity: f64,
	pub border_width: u32,
	pub fill: String,
	pub glow: Option<String>,
	pub z_index: u32,
	pub label_bold: bool,
	pub label_opacity: f64,
}

impl<'a> NodeStyle<'a> {
	fn new(node: &'a SkillNode, emphasis: Emphasis) -> Self {
		let selected = emphasis == Emphasis::Selected;
		Self {
			node,
			emphasis,
			opacity: emphasis.opacity(),
			border_width: emphasis.border_width(),
			fill: with_alpha(node.color, if selected { "ee" } else { "99" }),
			glow: selected.then(|| format!("0 0 15px {}", node.color)),
			z_index: if selected { 10 } else { 5 },
			label_bold: selected,
			label_opacity: if selected { 1.0 } else { 0.7 },
		}
	}

	/// Inline style for the circle, positioned so `position` is its centre.
	pub fn circle_css(&self) -> String {
		let n = self.node;
		format!(
			"width: {d}px; height: {d}px; left: {left}px; top: {top}px; background-color: {fill}; \
			 border: {bw}px solid {color}; box-shadow: {glow}; z-index: {z}; opacity: {op};",
			d = n.radius * 2.0,
			left = n.position.x - n.radius,
			top = n.position.y - n.radius,
			fill = self.fill,
			bw = self.border_width,
			color = n.color,
			glow = self.glow.as_deref().unwrap_or("none"),
			z = self.z_index,
			op = self.opacity,
		)
	}

	pub fn label_css(&self) -> String {
		let n = self.node;
		format!(
			"left: {}px; top: {}px; color: {}; font-weight: {}; opacity: {}; text-shadow: 1px 1px 2px white;",
			n.position.x + n.radius + 5.0,
			n.position.y,
			n.color,
			if self.label_bold { "bold" } else { "normal" },
			self.label_opacity,
		)
	}
}

/// A capability that is drawn for the current selection, with one spoke per member.
#[derive(Clone, Debug, PartialEq)]
pub struct CapabilityOverlay<'a> {
	pub capability: &'a EmergentCapability,
	pub spokes: Vec<Point>,
}

pub fn capability_visible(cap: &EmergentCapability, state: &InteractionState) -> bool {
	state.selected.is_some_and(|id| cap.includes(id))
}

/// Everything the drawing surface needs for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene<'a> {
	pub connections: Vec<ConnectionStyle>,
	pub capabilities: Vec<CapabilityOverlay<'a>>,
	pub nodes: Vec<NodeStyle<'a>>,
}

pub fn derive_scene<'a>(graph: &'a SkillGraph, state: &InteractionState) -> Scene<'a> {
	let connections = graph
		.connections()
		.iter()
		.filter_map(|conn| {
			let from = graph.node(conn.source)?.position;
			let to = graph.node(conn.target)?.position;
			Some(ConnectionStyle::new(from, to, conn, state))
		})
		.collect();

	let capabilities = graph
		.capabilities()
		.iter()
		.filter(|cap| capability_visible(cap, state))
		.map(|capability| CapabilityOverlay {
			capability,
			spokes: graph.resolve(capability.skills).map(|n| n.position).collect(),
		})
		.collect();

	let nodes = graph
		.nodes()
		.iter()
		.map(|node| NodeStyle::new(node, Emphasis::of(node, graph, state)))
		.collect();

	Scene {
		connections,
		capabilities,
		nodes,
	}
}

/// A capability card in the detail panel, listing the members other than the selection.
#[derive(Clone, Debug, PartialEq)]
pub struct CapabilityCard<'a> {
	pub capability: &'a EmergentCapability,
	pub partners: Vec<&'a SkillNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillDetails<'a> {
	pub node: &'a SkillNode,
	pub related: Vec<&'a SkillNode>,
	pub capabilities: Vec<CapabilityCard<'a>>,
}

/// `None` when nothing is selected, which hides the panel.
pub fn derive_details<'a>(graph: &'a SkillGraph, state: &InteractionState) -> Option<SkillDetails<'a>> {
	let selected = state.selected?;
	let node = graph.node(selected)?;
	let capabilities = graph
		.capabilities()
		.iter()
		.filter(|cap| cap.includes(selected))
		.map(|capability| CapabilityCard {
			capability,
			partners: graph
				.resolve(capability.skills)
				.filter(|n| n.id != selected)
				.collect(),
		})
		.collect();

	Some(SkillDetails {
		node,
		related: graph.resolve(node.related).collect(),
		capabilities,
	})
}
