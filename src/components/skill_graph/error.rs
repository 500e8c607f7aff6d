use thiserror::Error;

/// Integrity violations found while building a [`super::SkillGraph`].
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DatasetError {
	#[error("duplicate skill id `{0}`")]
	DuplicateSkill(String),

	#[error("duplicate capability id `{0}`")]
	DuplicateCapability(String),

	#[error("skill `{node}` lists unknown related skill `{related}`")]
	UnknownRelatedSkill { node: String, related: String },

	#[error("connection {source_id} -> {target_id} references unknown skill `{missing}`")]
	UnknownConnectionEndpoint {
		source_id: String,
		target_id: String,
		missing: String,
	},

	#[error("connection {source_id} -> {target_id} must have a positive strength")]
	ZeroStrength { source_id: String, target_id: String },

	#[error("connection on `{0}` joins a skill to itself")]
	SelfLoop(String),

	#[error("capability `{capability}` references unknown skill `{skill}`")]
	UnknownCapabilitySkill { capability: String, skill: String },

	#[error("capability `{capability}` combines {count} distinct skill(s), at least 2 are required")]
	TooFewSkills { capability: String, count: usize },

	#[error("skill `{0}` must have a positive radius")]
	InvalidRadius(String),

	#[error("`{owner}` has color `{color}`, expected #rrggbb")]
	InvalidColor { owner: String, color: String },
}
