use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{MouseEvent, Window};

/// Divisor mapping pointer offset from screen center to degrees of tilt.
const TILT_SCALE: f64 = 40.0;

/// Card that tilts in 3D toward the pointer and snaps flat when the cursor
/// leaves the document.
#[component]
pub fn TiltCard(children: Children) -> impl IntoView {
	let (transform, set_transform) = signal(String::from("rotateY(0deg) rotateX(0deg)"));

	let tilt_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> = Rc::new(RefCell::new(None));
	let reset_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> = Rc::new(RefCell::new(None));
	let (tilt_cb_init, reset_cb_init) = (tilt_cb.clone(), reset_cb.clone());

	Effect::new(move |_| {
		let window: Window = web_sys::window().unwrap();
		let document = window.document().unwrap();

		*tilt_cb_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			let win: Window = web_sys::window().unwrap();
			let w = win.inner_width().unwrap().as_f64().unwrap();
			let h = win.inner_height().unwrap().as_f64().unwrap();
			let x_axis = (w / 2.0 - ev.page_x() as f64) / TILT_SCALE;
			let y_axis = (h / 2.0 - ev.page_y() as f64) / TILT_SCALE;
			set_transform.set(format!("rotateY({}deg) rotateX({}deg)", x_axis, y_axis));
		}));
		if let Some(ref cb) = *tilt_cb_init.borrow() {
			let _ =
				document.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		*reset_cb_init.borrow_mut() = Some(Closure::new(move |_: MouseEvent| {
			set_transform.set(String::from("rotateY(0deg) rotateX(0deg)"));
		}));
		if let Some(ref cb) = *reset_cb_init.borrow() {
			let _ = document
				.add_event_listener_with_callback("mouseleave", cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<div class="tilt-card" style:transform=move || transform.get()>
			{children()}
		</div>
	}
}
