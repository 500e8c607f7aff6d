use leptos::prelude::*;
use log::debug;

use super::highlight::{CapabilityCard, SkillDetails, with_alpha};
use crate::components::ui::{Panel, PanelContent, PanelHeader, PanelTitle, Pill, PillVariant};

/// Description, related skills and capabilities of the selected skill.
///
/// Every pill moves the selection with `on_focus`; none of them toggle it off.
#[component]
pub fn SkillDetailsPanel(
	details: SkillDetails<'static>,
	on_focus: Callback<&'static str>,
) -> impl IntoView {
	let node = details.node;
	let kind = node.kind;
	let log_kind = Callback::new(move |_: ()| debug!("Skill type: {}", kind.label()));

	view! {
		<Panel class="mb-6">
			<PanelHeader>
				<div class="flex justify-between items-center">
					<PanelTitle>
						<span style=format!("color: {};", node.color)>{node.name}</span>
					</PanelTitle>
					<Pill
						variant=PillVariant::Outline
						class="text-xs"
						style=format!("border-color: {c}; color: {c};", c = node.color)
						on_activate=log_kind
					>
						{kind.label()}
					</Pill>
				</div>
			</PanelHeader>
			<PanelContent>
				<p class="text-gray-600 mb-4">{node.description}</p>

				<h3 class="text-sm font-semibold mb-2">"Connected Skills:"</h3>
				<div class="flex flex-wrap gap-2 mb-4">
					{details
						.related
						.into_iter()
						.map(|rel| {
							let id = rel.id;
							view! {
								<Pill
									variant=PillVariant::Outline
									class="text-xs"
									style=format!(
										"background-color: {}; color: {c}; border: 1px solid {c};",
										with_alpha(rel.color, "15"),
										c = rel.color,
									)
									on_activate=Callback::new(move |_: ()| on_focus.run(id))
								>
									{rel.name}
								</Pill>
							}
						})
						.collect_view()}
				</div>

				<div class="mt-6">
					<h3 class="text-sm font-semibold mb-2">"Emergent Capabilities:"</h3>
					<div class="space-y-3">
						{details
							.capabilities
							.into_iter()
							.map(|card| capability_card(card, on_focus))
							.collect_view()}
					</div>
				</div>
			</PanelContent>
		</Panel>
	}
}

fn capability_card(card: CapabilityCard<'static>, on_focus: Callback<&'static str>) -> impl IntoView {
	let cap = card.capability;
	view! {
		<div
			class="p-3 rounded-lg"
			style=format!(
				"background-color: {}; border-left: 3px solid {};",
				with_alpha(cap.color, "15"),
				cap.color,
			)
		>
			<h4 class="text-sm font-semibold mb-1" style=format!("color: {};", cap.color)>
				{cap.name}
			</h4>
			<p class="text-xs text-gray-600 mb-2">{cap.description}</p>
			<div class="flex flex-wrap gap-1">
				{card
					.partners
					.into_iter()
					.map(|partner| {
						let id = partner.id;
						view! {
							<Pill
								variant=PillVariant::Outline
								class="text-xs"
								style=format!("border-color: {c}; color: {c};", c = partner.color)
								on_activate=Callback::new(move |_: ()| on_focus.run(id))
							>
								{format!("+ {}", partner.name)}
							</Pill>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}
