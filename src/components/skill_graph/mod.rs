mod component;
mod dataset;
mod details;
mod error;
mod highlight;
mod legend;
mod state;
mod types;

pub use component::SkillEcosystem;
pub use dataset::SkillGraph;
