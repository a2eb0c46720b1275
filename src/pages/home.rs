use leptos::prelude::*;

use crate::components::overlay::ParticleOverlay;
use crate::components::tabs::{TabSection, TabStrip};
use crate::components::tilt_card::TiltCard;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let (active_tab, set_active_tab) = signal(0usize);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

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

			<div class="fullscreen-overlay">
				<ParticleOverlay />
				<TiltCard>
					<h1>"Magic Overlay"</h1>
					<p class="subtitle">"Reactive particle field. Move the pointer to stir the dust."</p>
					<TabStrip
						labels=vec!["About", "Engine", "Offline"]
						active=active_tab
						set_active=set_active_tab
					/>
					<TabSection index=0 active=active_tab>
						<p>
							"A decorative canvas overlay: a few hundred glowing particles "
							"drift, bounce off the edges and shy away from the cursor."
						</p>
					</TabSection>
					<TabSection index=1 active=active_tab>
						<p>
							"Particle density follows the viewport area; nearby particles "
							"are joined by lines that fade with distance. Resizing the "
							"window reseeds the whole field."
						</p>
					</TabSection>
					<TabSection index=2 active=active_tab>
						<p>
							"A small service worker caches the page shell, so the overlay "
							"keeps working without a network connection."
						</p>
					</TabSection>
				</TiltCard>
			</div>
		</ErrorBoundary>
	}
}
