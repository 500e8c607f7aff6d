use leptos::prelude::*;

const BASE_CLASS: &str = "inline-flex items-center justify-center rounded-md font-medium transition-colors";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
	#[default]
	Default,
	Outline,
}

impl ButtonVariant {
	pub fn class(self) -> &'static str {
		match self {
			Self::Default => "bg-blue-600 text-white hover:bg-blue-700 px-4 py-2",
			Self::Outline => {
				"border border-gray-300 bg-transparent text-gray-700 hover:bg-gray-50 px-4 py-2"
			}
		}
	}
}

#[component]
pub fn Button(
	#[prop(into)] variant: Signal<ButtonVariant>,
	on_activate: Callback<()>,
	children: Children,
) -> impl IntoView {
	view! {
		<button
			class=move || format!("{BASE_CLASS} {}", variant.get().class())
			on:click=move |_| on_activate.run(())
		>
			{children()}
		</button>
	}
}
