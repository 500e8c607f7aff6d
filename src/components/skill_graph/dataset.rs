use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use log::{error, info};

use super::error::DatasetError;
use super::types::{Connection, EmergentCapability, Point, SkillKind, SkillNode};

const SKILL_NODES: &[SkillNode] = &[
	SkillNode {
		id: "instructional",
		name: "Instructional Design",
		kind: SkillKind::Core,
		position: Point::new(300.0, 150.0),
		radius: 45.0,
		color: "#3498db",
		description: "Creating structured, effective learning experiences",
		related: &["facilitation", "edtech", "curriculum"],
	},
	SkillNode {
		id: "community",
		name: "Community Building",
		kind: SkillKind::Core,
		position: Point::new(500.0, 180.0),
		radius: 50.0,
		color: "#e74c3c",
		description: "Fostering thriving learning communities",
		related: &["facilitation", "mentoring", "crosscultural"],
	},
	SkillNode {
		id: "facilitation",
		name: "Facilitation",
		kind: SkillKind::Core,
		position: Point::new(400.0, 300.0),
		radius: 45.0,
		color: "#2ecc71",
		description: "Guiding and enhancing learning processes",
		related: &["instructional", "community", "mentoring"],
	},
	SkillNode {
		id: "crosscultural",
		name: "Cross-Cultural Communication",
		kind: SkillKind::Specialized,
		position: Point::new(600.0, 250.0),
		radius: 40.0,
		color: "#9b59b6",
		description: "Bridging diverse perspectives effectively",
		related: &["community", "facilitation"],
	},
	SkillNode {
		id: "curriculum",
		name: "Curriculum Development",
		kind: SkillKind::Specialized,
		position: Point::new(200.0, 200.0),
		radius: 35.0,
		color: "#f39c12",
		description: "Designing comprehensive learning journeys",
		related: &["instructional", "edtech"],
	},
	SkillNode {
		id: "mentoring",
		name: "Mentor Training",
		kind: SkillKind::Specialized,
		position: Point::new(450.0, 400.0),
		radius: 35.0,
		color: "#16a085",
		description: "Developing effective learning guides",
		related: &["facilitation", "community"],
	},
	SkillNode {
		id: "edtech",
		name: "Educational Technology",
		kind: SkillKind::Specialized,
		position: Point::new(250.0, 350.0),
		radius: 30.0,
		color: "#3498db",
		description: "Leveraging digital tools for learning",
		related: &["instructional", "curriculum"],
	},
];

const fn link(source: &'static str, target: &'static str, strength: u32) -> Connection {
	Connection {
		source,
		target,
		strength,
	}
}

const CONNECTIONS: &[Connection] = &[
	link("instructional", "facilitation", 4),
	link("instructional", "curriculum", 5),
	link("instructional", "edtech", 3),
	link("community", "facilitation", 5),
	link("community", "crosscultural", 3),
	link("community", "mentoring", 4),
	link("facilitation", "mentoring", 4),
	link("facilitation", "crosscultural", 3),
	link("curriculum", "edtech", 3),
	link("crosscultural", "community", 3),
];

const EMERGENT_CAPABILITIES: &[EmergentCapability] = &[
	EmergentCapability {
		id: "cohortlearning",
		name: "Cohort-Based Learning Design",
		skills: &["instructional", "community", "facilitation"],
		description: "Creating structured learning experiences that leverage peer connections",
		position: Point::new(400.0, 200.0),
		color: "#8e44ad",
	},
	EmergentCapability {
		id: "culturallearning",
		name: "Cross-Cultural Learning Design",
		skills: &["instructional", "crosscultural", "curriculum"],
		description: "Developing curriculum effective across diverse cultural contexts",
		position: Point::new(350.0, 250.0),
		color: "#d35400",
	},
	EmergentCapability {
		id: "scalablecommunity",
		name: "Scalable Community Systems",
		skills: &["community", "mentoring", "facilitation"],
		description: "Building self-sustaining learning communities through peer mentorship",
		position: Point::new(500.0, 300.0),
		color: "#c0392b",
	},
];

static BUILTIN: LazyLock<Result<SkillGraph, DatasetError>> = LazyLock::new(|| {
	let graph = SkillGraph::new(
		SKILL_NODES.to_vec(),
		CONNECTIONS.to_vec(),
		EMERGENT_CAPABILITIES.to_vec(),
	);
	match &graph {
		Ok(g) => info!(
			"Skill dataset ready: {} skills, {} connections, {} capabilities",
			g.nodes.len(),
			g.connections.len(),
			g.capabilities.len()
		),
		Err(e) => error!("Skill dataset rejected: {e}"),
	}
	graph
});

/// Validated skill dataset with O(1) lookup by id.
#[derive(Clone, Debug)]
pub struct SkillGraph {
	nodes: Vec<SkillNode>,
	connections: Vec<Connection>,
	capabilities: Vec<EmergentCapability>,
	id_to_idx: HashMap<&'static str, usize>,
}

impl SkillGraph {
	/// The embedded dataset, validated once per process.
	pub fn builtin() -> Result<&'static SkillGraph, DatasetError> {
		BUILTIN.as_ref().map_err(Clone::clone)
	}

	pub fn new(
		nodes: Vec<SkillNode>,
		connections: Vec<Connection>,
		capabilities: Vec<EmergentCapability>,
	) -> Result<Self, DatasetError> {
		let mut id_to_idx = HashMap::with_capacity(nodes.len());
		for (i, node) in nodes.iter().enumerate() {
			if id_to_idx.insert(node.id, i).is_some() {
				return Err(DatasetError::DuplicateSkill(node.id.into()));
			}
			check_color(node.id, node.color)?;
			if !(node.radius > 0.0) {
				return Err(DatasetError::InvalidRadius(node.id.into()));
			}
		}

		for node in &nodes {
			if let Some(missing) = node.related.iter().find(|id| !id_to_idx.contains_key(**id)) {
				return Err(DatasetError::UnknownRelatedSkill {
					node: node.id.into(),
					related: (*missing).into(),
				});
			}
		}

		for conn in &connections {
			for endpoint in [conn.source, conn.target] {
				if !id_to_idx.contains_key(endpoint) {
					return Err(DatasetError::UnknownConnectionEndpoint {
						source_id: conn.source.into(),
						target_id: conn.target.into(),
						missing: endpoint.into(),
					});
				}
			}
			if conn.source == conn.target {
				return Err(DatasetError::SelfLoop(conn.source.into()));
			}
			if conn.strength == 0 {
				return Err(DatasetError::ZeroStrength {
					source_id: conn.source.into(),
					target_id: conn.target.into(),
				});
			}
		}

		let mut capability_ids = HashSet::new();
		for cap in &capabilities {
			if !capability_ids.insert(cap.id) {
				return Err(DatasetError::DuplicateCapability(cap.id.into()));
			}
			check_color(cap.id, cap.color)?;
			if let Some(missing) = cap.skills.iter().find(|id| !id_to_idx.contains_key(**id)) {
				return Err(DatasetError::UnknownCapabilitySkill {
					capability: cap.id.into(),
					skill: (*missing).into(),
				});
			}
			let distinct = cap.skills.iter().collect::<HashSet<_>>().len();
			if distinct < 2 {
				return Err(DatasetError::TooFewSkills {
					capability: cap.id.into(),
					count: distinct,
				});
			}
		}

		Ok(Self {
			nodes,
			connections,
			capabilities,
			id_to_idx,
		})
	}

	/// Every id reachable from the dataset resolves; `None` only for foreign ids.
	pub fn node(&self, id: &str) -> Option<&SkillNode> {
		self.id_to_idx.get(id).map(|&i| &self.nodes[i])
	}

	pub fn nodes(&self) -> &[SkillNode] {
		&self.nodes
	}

	pub fn connections(&self) -> &[Connection] {
		&self.connections
	}

	pub fn capabilities(&self) -> &[EmergentCapability] {
		&self.capabilities
	}

	/// Resolves a list of ids, preserving order.
	pub fn resolve<'a>(&'a self, ids: &'a [&'static str]) -> impl Iterator<Item = &'a SkillNode> + 'a {
		ids.iter().filter_map(|id| self.node(id))
	}
}

fn check_color(owner: &str, color: &str) -> Result<(), DatasetError> {
	let valid = color.len() == 7
		&& color.starts_with('#')
		&& color[1..].chars().all(|c| c.is_ascii_hexdigit());
	if valid {
		Ok(())
	} else {
		Err(DatasetError::InvalidColor {
			owner: owner.into(),
			color: color.into(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn skill(id: &'static str, related: &'static [&'static str]) -> SkillNode {
		SkillNode {
			id,
			name: "Test Skill",
			kind: SkillKind::Core,
			position: Point::new(0.0, 0.0),
			radius: 10.0,
			color: "#123abc",
			description: "",
			related,
		}
	}

	fn capability(id: &'static str, skills: &'static [&'static str]) -> EmergentCapability {
		EmergentCapability {
			id,
			name: "Test Capability",
			skills,
			description: "",
			position: Point::new(0.0, 0.0),
			color: "#abcdef",
		}
	}

	#[test]
	fn test_builtin_dataset_is_valid() {
		let graph = SkillGraph::builtin().unwrap();
		assert_eq!(graph.nodes().len(), 7);
		assert_eq!(graph.connections().len(), 10);
		assert_eq!(graph.capabilities().len(), 3);
	}

	#[test]
	fn test_lookup_by_id() {
		let graph = SkillGraph::builtin().unwrap();
		let node = graph.node("mentoring").unwrap();
		assert_eq!(node.name, "Mentor Training");
		assert_eq!(node.kind, SkillKind::Specialized);
		assert_eq!(node.short_name(), "Mentor");
		assert!(graph.node("nope").is_none());
	}

	#[test]
	fn test_every_builtin_reference_resolves() {
		let graph = SkillGraph::builtin().unwrap();
		for node in graph.nodes() {
			assert_eq!(graph.resolve(node.related).count(), node.related.len());
		}
		for cap in graph.capabilities() {
			assert_eq!(graph.resolve(cap.skills).count(), cap.skills.len());
		}
	}

	#[test]
	fn test_rejects_duplicate_skill() {
		let err = SkillGraph::new(vec![skill("a", &[]), skill("a", &[])], vec![], vec![]).unwrap_err();
		assert_eq!(err, DatasetError::DuplicateSkill("a".into()));
	}

	#[test]
	fn test_rejects_unknown_related_skill() {
		let err = SkillGraph::new(vec![skill("a", &["ghost"])], vec![], vec![]).unwrap_err();
		assert_eq!(
			err,
			DatasetError::UnknownRelatedSkill {
				node: "a".into(),
				related: "ghost".into()
			}
		);
	}

	#[test]
	fn test_rejects_bad_connections() {
		let nodes = || vec![skill("a", &[]), skill("b", &[])];

		let err = SkillGraph::new(nodes(), vec![link("a", "ghost", 2)], vec![]).unwrap_err();
		assert!(matches!(err, DatasetError::UnknownConnectionEndpoint { missing, .. } if missing == "ghost"));

		let err = SkillGraph::new(nodes(), vec![link("a", "b", 0)], vec![]).unwrap_err();
		assert!(matches!(err, DatasetError::ZeroStrength { .. }));

		let err = SkillGraph::new(nodes(), vec![link("a", "a", 1)], vec![]).unwrap_err();
		assert_eq!(err, DatasetError::SelfLoop("a".into()));
	}

	#[test]
	fn test_rejects_bad_capabilities() {
		let nodes = || vec![skill("a", &[]), skill("b", &[])];

		let err = SkillGraph::new(nodes(), vec![], vec![capability("c", &["a", "a"])]).unwrap_err();
		assert_eq!(
			err,
			DatasetError::TooFewSkills {
				capability: "c".into(),
				count: 1
			}
		);

		let err = SkillGraph::new(nodes(), vec![], vec![capability("c", &["a", "x"])]).unwrap_err();
		assert!(matches!(err, DatasetError::UnknownCapabilitySkill { .. }));

		let err = SkillGraph::new(
			nodes(),
			vec![],
			vec![capability("c", &["a", "b"]), capability("c", &["a", "b"])],
		)
		.unwrap_err();
		assert_eq!(err, DatasetError::DuplicateCapability("c".into()));
	}

	#[test]
	fn test_rejects_bad_colors_and_radius() {
		let mut node = skill("a", &[]);
		node.color = "blue";
		let err = SkillGraph::new(vec![node], vec![], vec![]).unwrap_err();
		assert!(matches!(err, DatasetError::InvalidColor { .. }));

		let mut node = skill("a", &[]);
		node.radius = 0.0;
		let err = SkillGraph::new(vec![node], vec![], vec![]).unwrap_err();
		assert_eq!(err, DatasetError::InvalidRadius("a".into()));
	}

	#[test]
	fn test_error_messages_name_offenders() {
		let err = SkillGraph::new(vec![skill("a", &["ghost"])], vec![], vec![]).unwrap_err();
		assert_eq!(err.to_string(), "skill `a` lists unknown related skill `ghost`");
	}
}
