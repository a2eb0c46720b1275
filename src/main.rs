use leptos::prelude::*;
use magic_overlay::{App, init_logging, register_service_worker};

fn main() {
	init_logging();
	register_service_worker();
	leptos::mount::mount_to_body(|| view! { <App /> });
}
