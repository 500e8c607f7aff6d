use leptos::prelude::*;

const BASE_CLASS: &str = "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PillVariant {
	#[default]
	Default,
	Outline,
	Secondary,
}

impl PillVariant {
	pub fn class(self) -> &'static str {
		match self {
			Self::Default => "bg-blue-100 text-blue-800",
			Self::Outline => "bg-transparent border",
			Self::Secondary => "bg-gray-100 text-gray-800",
		}
	}
}

/// Class list for a pill; clickable pills get a pointer cursor.
pub fn pill_class(variant: PillVariant, extra: &str, clickable: bool) -> String {
	let cursor = if clickable { "cursor-pointer" } else { "" };
	format!("{BASE_CLASS} {} {extra} {cursor}", variant.class())
		.split_whitespace()
		.collect::<Vec<_>>()
		.join(" ")
}

/// Rounded label. `style` overrides the variant's colors inline.
#[component]
pub fn Pill(
	#[prop(optional)] variant: PillVariant,
	#[prop(optional, into)] style: String,
	#[prop(optional, into)] class: String,
	#[prop(optional)] on_activate: Option<Callback<()>>,
	children: Children,
) -> impl IntoView {
	view! {
		<span
			class=pill_class(variant, &class, on_activate.is_some())
			style=style
			on:click=move |_| {
				if let Some(cb) = on_activate {
					cb.run(());
				}
			}
		>
			{children()}
		</span>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_pill_class_per_variant() {
		assert_eq!(
			pill_class(PillVariant::Secondary, "", false),
			format!("{BASE_CLASS} bg-gray-100 text-gray-800")
		);
		assert!(pill_class(PillVariant::Default, "", false).ends_with("bg-blue-100 text-blue-800"));
	}

	#[test]
	fn test_clickable_pill_gets_pointer() {
		let class = pill_class(PillVariant::Outline, "text-xs", true);
		assert!(class.contains("bg-transparent border text-xs cursor-pointer"));
		assert!(!pill_class(PillVariant::Outline, "text-xs", false).contains("cursor-pointer"));
	}
}
