use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"404: Page not found"</h1>
			<p>"The magic does not reach this address."</p>
			<a href="/">"Back home"</a>
		</div>
	}
}
