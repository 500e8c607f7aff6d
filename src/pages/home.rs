use leptos::prelude::*;

use crate::components::skill_graph::{SkillEcosystem, SkillGraph};
use crate::components::ui::{Panel, PanelContent, PanelHeader, PanelTitle};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! The skill dataset is invalid."</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class="max-w-5xl mx-auto p-4">
				{SkillGraph::builtin().map(|graph| view! { <SkillEcosystem graph=graph /> })}
				<Insights />
			</div>
		</ErrorBoundary>
	}
}

#[component]
fn Insights() -> impl IntoView {
	view! {
		<Panel class="mb-6">
			<PanelHeader>
				<PanelTitle>"Learning Design Insights"</PanelTitle>
			</PanelHeader>
			<PanelContent>
				<div class="p-4 bg-blue-50 rounded-lg">
					<h3 class="font-semibold mb-2">"Understanding the Learning Design Ecosystem"</h3>
					<p class="text-gray-700 mb-3">
						"This visualization demonstrates how learning design expertise functions as an interconnected ecosystem rather than "
						"isolated skills. The connections between skills are as important as the individual competencies themselves."
					</p>
					<p class="text-gray-700 mb-3">
						<strong>"Core skills"</strong>
						" (larger circles) serve as the foundation of expertise, while "
						<strong>"specialized skills"</strong>
						" (smaller circles) provide depth in specific areas."
					</p>
					<p class="text-gray-700">
						"Most importantly, when skills are combined, they create "
						<strong>"emergent capabilities"</strong>
						" (highlighted when you select a skill) that are more powerful than any individual skill. "
						"These combinations represent the most effective approaches to learning design."
					</p>
				</div>
			</PanelContent>
		</Panel>
	}
}
