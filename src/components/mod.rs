pub mod skill_graph;
pub mod ui;
