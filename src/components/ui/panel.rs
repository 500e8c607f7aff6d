use leptos::prelude::*;

/// Bordered, shadowed container. `class` is appended to the base classes.
#[component]
pub fn Panel(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
	view! {
		<div class=format!(
			"bg-white border rounded-lg shadow-sm overflow-hidden {class}",
		)>{children()}</div>
	}
}

#[component]
pub fn PanelHeader(children: Children) -> impl IntoView {
	view! { <div class="border-b p-4">{children()}</div> }
}

#[component]
pub fn PanelTitle(children: Children) -> impl IntoView {
	view! { <h2 class="text-lg font-semibold">{children()}</h2> }
}

#[component]
pub fn PanelContent(children: Children) -> impl IntoView {
	view! { <div class="p-4">{children()}</div> }
}
