/// A coordinate in the drawing surface, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillKind {
	Core,
	Specialized,
}

impl SkillKind {
	pub fn label(self) -> &'static str {
		match self {
			Self::Core => "Core Skill",
			Self::Specialized => "Specialized Skill",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillNode {
	pub id: &'static str,
	pub name: &'static str,
	pub kind: SkillKind,
	pub position: Point,
	pub radius: f64,
	/// `#rrggbb`; fills, borders and text referencing the node all use it.
	pub color: &'static str,
	pub description: &'static str,
	pub related: &'static [&'static str],
}

impl SkillNode {
	/// Word shown inside the circle.
	pub fn short_name(&self) -> &'static str {
		self.name.split(' ').next().unwrap_or(self.name)
	}
}

/// Undirected for highlighting; `strength` drives the stroke width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connection {
	pub source: &'static str,
	pub target: &'static str,
	pub strength: u32,
}

impl Connection {
	pub fn touches(&self, id: &str) -> bool {
		self.source == id || self.target == id
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmergentCapability {
	pub id: &'static str,
	pub name: &'static str,
	pub skills: &'static [&'static str],
	pub description: &'static str,
	pub position: Point,
	pub color: &'static str,
}

impl EmergentCapability {
	pub fn includes(&self, id: &str) -> bool {
		self.skills.contains(&id)
	}
}
