use leptos::prelude::*;

use super::dataset::SkillGraph;
use super::details::SkillDetailsPanel;
use super::highlight::{CapabilityOverlay, ConnectionStyle, NodeStyle, SPOKE_DASH, derive_details, derive_scene};
use super::legend::Legend;
use super::state::InteractionState;
use crate::components::ui::{Button, ButtonVariant, Panel, PanelContent, PanelHeader, PanelTitle};

const MARKER_RADIUS: f64 = 25.0;

/// Skill map with its toggle button, legend and the detail panel for the selection.
///
/// Owns the [`InteractionState`]; every change re-derives the whole scene.
#[component]
pub fn SkillEcosystem(
	graph: &'static SkillGraph,
	#[prop(default = 500.0)] surface_height: f64,
) -> impl IntoView {
	let state = RwSignal::new(InteractionState::default());

	let toggle_flow = Callback::new(move |_: ()| state.update(InteractionState::toggle_energy_flow));
	let focus = Callback::new(move |id: &'static str| state.update(|s| s.focus(id)));
	let variant = Signal::derive(move || {
		if state.get().energy_flowing {
			ButtonVariant::Default
		} else {
			ButtonVariant::Outline
		}
	});

	view! {
		<Panel class="mb-6">
			<PanelHeader>
				<div class="flex justify-between items-center">
					<PanelTitle>"Learning Expertise Ecosystem"</PanelTitle>
					<Button variant=variant on_activate=toggle_flow>
						{move || state.get().energy_flow_label()}
					</Button>
				</div>
			</PanelHeader>
			<PanelContent>
				<p class="text-gray-600 mb-6">
					"This visualization shows how learning design expertise forms an interconnected ecosystem rather than isolated skills. "
					"Click any skill to explore its connections and contributions to the learning design process."
				</p>

				<div
					class="relative border rounded-lg overflow-hidden bg-gray-50"
					style=format!("height: {surface_height}px;")
				>
					{move || {
						let scene = derive_scene(graph, &state.get());
						view! {
							<svg width="100%" height="100%" class="absolute top-0 left-0">
								{scene.connections.into_iter().map(connection_line).collect_view()}
								{scene.capabilities.iter().cloned().map(capability_marker).collect_view()}
							</svg>
							{scene.nodes.into_iter().map(|style| skill_node(style, state)).collect_view()}
							{scene.capabilities.into_iter().map(capability_label).collect_view()}
						}
					}}
				</div>

				<Legend />
			</PanelContent>
		</Panel>

		{move || {
			derive_details(graph, &state.get())
				.map(|details| view! { <SkillDetailsPanel details=details on_focus=focus /> })
		}}
	}
}

fn connection_line(style: ConnectionStyle) -> impl IntoView {
	view! {
		<line
			x1=style.from.x.to_string()
			y1=style.from.y.to_string()
			x2=style.to.x.to_string()
			y2=style.to.y.to_string()
			stroke=style.stroke
			stroke-width=style.width.to_string()
			stroke-opacity=style.opacity.to_string()
			stroke-dasharray=style.dash
		/>
	}
}

fn capability_marker(overlay: CapabilityOverlay<'static>) -> impl IntoView {
	let cap = overlay.capability;
	let (x, y) = (cap.position.x, cap.position.y);
	view! {
		<g>
			{overlay
				.spokes
				.iter()
				.map(|to| {
					view! {
						<line
							x1=x.to_string()
							y1=y.to_string()
							x2=to.x.to_string()
							y2=to.y.to_string()
							stroke=cap.color
							stroke-width="2"
							stroke-opacity="0.6"
							stroke-dasharray=SPOKE_DASH
						/>
					}
				})
				.collect_view()}
			<circle
				cx=x.to_string()
				cy=y.to_string()
				r=MARKER_RADIUS.to_string()
				fill=cap.color
				fill-opacity="0.2"
				stroke=cap.color
				stroke-width="1"
			/>
			<text
				x=x.to_string()
				y=(y + 5.0).to_string()
				text-anchor="middle"
				font-size="10"
				font-weight="bold"
				fill=cap.color
			>
				"Emergent"
			</text>
		</g>
	}
}

fn skill_node(style: NodeStyle<'static>, state: RwSignal<InteractionState>) -> impl IntoView {
	let node = style.node;
	let id = node.id;
	view! {
		<div>
			<div
				class="absolute rounded-full flex items-center justify-center cursor-pointer transition-all duration-300 hover:shadow-lg"
				style=style.circle_css()
				on:click=move |_| state.update(|s| s.select(id))
			>
				<span class="text-white text-xs font-semibold text-center px-2">
					{node.short_name()}
				</span>
			</div>
			<div class="absolute text-xs" style=style.label_css()>
				{node.name}
			</div>
		</div>
	}
}

fn capability_label(overlay: CapabilityOverlay<'static>) -> impl IntoView {
	let cap = overlay.capability;
	view! {
		<div
			class="absolute bg-white bg-opacity-70 rounded p-1 shadow-sm"
			style=format!(
				"left: {}px; top: {}px; border-left: 3px solid {}; max-width: 200px;",
				cap.position.x + 30.0,
				cap.position.y - 10.0,
				cap.color,
			)
		>
			<p class="text-xs font-bold" style=format!("color: {};", cap.color)>
				{cap.name}
			</p>
		</div>
	}
}
