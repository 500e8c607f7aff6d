use leptos::prelude::*;

/// (swatch class, inline background, label)
const ENTRIES: &[(&str, &str, &str)] = &[
	("bg-gray-400", "", "Skill Connection"),
	("", "background: #8e44ad;", "Emergent Capability"),
	("bg-blue-500", "", "Core Skill"),
	("bg-green-500", "", "Specialized Skill"),
];

#[component]
pub fn Legend() -> impl IntoView {
	view! {
		<div class="mt-4 flex flex-wrap gap-4 justify-center">
			{ENTRIES
				.iter()
				.map(|&(class, style, label)| {
					view! {
						<div class="flex items-center gap-2">
							<div class=format!("w-3 h-3 rounded-full {class}") style=style></div>
							<span class="text-xs text-gray-600">{label}</span>
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}
