use log::debug;

/// The only mutable state of the view: one optional selection and the dash toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
	pub selected: Option<&'static str>,
	pub energy_flowing: bool,
}

impl InteractionState {
	/// Node click: selects `id`, or clears the selection if `id` is already selected.
	pub fn select(&mut self, id: &'static str) {
		self.selected = if self.selected == Some(id) {
			None
		} else {
			Some(id)
		};
		debug!("Selection is now {:?}", self.selected);
	}

	/// Pill click: always moves the selection to `id`.
	pub fn focus(&mut self, id: &'static str) {
		self.selected = Some(id);
		debug!("Selection focused on {id}");
	}

	pub fn toggle_energy_flow(&mut self) {
		self.energy_flowing = !self.energy_flowing;
		debug!("Energy flow {}", if self.energy_flowing { "on" } else { "off" });
	}

	pub fn is_selected(&self, id: &str) -> bool {
		self.selected == Some(id)
	}

	pub fn energy_flow_label(&self) -> &'static str {
		if self.energy_flowing {
			"Pause Energy Flow"
		} else {
			"Activate Energy Flow"
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_initial_state() {
		let state = InteractionState::default();
		assert_eq!(state.selected, None);
		assert!(!state.energy_flowing);
		assert_eq!(state.energy_flow_label(), "Activate Energy Flow");
	}

	#[test]
	fn test_select_toggles() {
		let mut state = InteractionState::default();
		state.select("instructional");
		assert!(state.is_selected("instructional"));
		state.select("instructional");
		assert_eq!(state.selected, None);
	}

	#[test]
	fn test_select_switches_between_nodes() {
		let mut state = InteractionState::default();
		state.select("instructional");
		state.select("community");
		assert_eq!(state.selected, Some("community"));
	}

	#[test]
	fn test_focus_never_clears() {
		let mut state = InteractionState::default();
		state.focus("edtech");
		state.focus("edtech");
		assert_eq!(state.selected, Some("edtech"));
		state.focus("curriculum");
		assert_eq!(state.selected, Some("curriculum"));
	}

	#[test]
	fn test_energy_flow_leaves_selection_alone() {
		let mut state = InteractionState::default();
		state.select("instructional");
		state.toggle_energy_flow();
		assert!(state.energy_flowing);
		assert_eq!(state.energy_flow_label(), "Pause Energy Flow");
		assert_eq!(state.selected, Some("instructional"));
		state.toggle_energy_flow();
		assert!(!state.energy_flowing);
	}
}
