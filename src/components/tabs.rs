use leptos::prelude::*;

/// Row of tab buttons; the button whose index matches `active` carries the
/// `active` class. Sections elsewhere key off the same signal.
#[component]
pub fn TabStrip(
	labels: Vec<&'static str>,
	active: ReadSignal<usize>,
	set_active: WriteSignal<usize>,
) -> impl IntoView {
	view! {
		<nav class="tab-strip">
			{labels
				.into_iter()
				.enumerate()
				.map(|(i, label)| {
					view! {
						<button
							class="tab-button"
							class:active=move || active.get() == i
							on:click=move |_| set_active.set(i)
						>
							{label}
						</button>
					}
				})
				.collect_view()}
		</nav>
	}
}

/// One tab panel; shown (via the `active` class) only while `index` is the
/// active tab.
#[component]
pub fn TabSection(
	index: usize,
	active: ReadSignal<usize>,
	children: Children,
) -> impl IntoView {
	view! {
		<section class="tab-section" class:active=move || active.get() == index>
			{children()}
		</section>
	}
}
