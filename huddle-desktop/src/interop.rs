//! Browser pointer helpers for title-bar dragging

use dioxus::prelude::*;
use dioxus_web::WebEventExt;
use huddle_core::Offset;
use wasm_bindgen::JsCast;

/// Pointer position in client space.
pub fn pointer_point(e: &PointerEvent) -> Offset {
    if let Some(point) = e.data().try_as_web_event().and_then(|event| {
        event
            .dyn_ref::<web_sys::PointerEvent>()
            .map(|pointer| Offset::new(pointer.client_x(), pointer.client_y()))
    }) {
        return point;
    }

    let point = e.data().client_coordinates();
    client_offset(point.x, point.y)
}

/// Held buttons bitmask; assumes the primary button when unavailable.
pub fn pointer_buttons(e: &PointerEvent) -> u16 {
    e.data()
        .try_as_web_event()
        .and_then(|event| {
            event
                .dyn_ref::<web_sys::PointerEvent>()
                .map(|pointer| pointer.buttons())
        })
        .unwrap_or(1)
}

pub fn capture_window_pointer(e: &PointerEvent, pointer_id: i32) {
    if let Some(window) = enclosing_window(e) {
        let _ = window.set_pointer_capture(pointer_id);
    }
}

pub fn release_window_pointer(e: &PointerEvent, pointer_id: i32) {
    if let Some(window) = enclosing_window(e) {
        let _ = window.release_pointer_capture(pointer_id);
    }
}

fn enclosing_window(e: &PointerEvent) -> Option<web_sys::Element> {
    e.data()
        .try_as_web_event()
        .and_then(|event| event.current_target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(".floating-window").ok().flatten())
}

fn client_offset(x: f64, y: f64) -> Offset {
    Offset::new(x.round() as i32, y.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_coordinates_round_to_pixels() {
        assert_eq!(client_offset(10.4, 20.6), Offset::new(10, 21));
        assert_eq!(client_offset(-3.5, 0.0), Offset::new(-4, 0));
    }
}
