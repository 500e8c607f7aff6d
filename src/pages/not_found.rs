use leptos::prelude::*;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="max-w-5xl mx-auto p-4">
			<h1 class="text-lg font-semibold">"Uh oh!" <br /> "We couldn't find that page!"</h1>
			<a class="text-blue-600" href="/">"Back to the skill map"</a>
		</div>
	}
}
