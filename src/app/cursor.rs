use leptos::prelude::*;

use super::transitions::{target_for, Trigger};
use super::Store;

/// Half the dot's width/height, so the glow centers on the pointer.
const CURSOR_RADIUS: f64 = 16.0;

/// Custom cursor dot following the tracked pointer position, scaled up while
/// an interactive element is hovered.
#[component]
pub fn CursorGlow() -> impl IntoView {
    let store = expect_context::<Store>();
    let pointer = Memo::new(move |_| store.with(|s| s.viewport.pointer));
    let hover = Memo::new(move |_| store.with(|s| s.cursor_hover));

    let style = move || {
        let p = pointer.get();
        let scale = if hover.get() {
            target_for(Trigger::CursorHover, "scale")
        } else {
            target_for(Trigger::CursorIdle, "scale")
        }
        .unwrap_or("1");
        format!(
            "transform: translate({}px, {}px) scale({}); transition: transform 200ms ease-out",
            p.x - CURSOR_RADIUS,
            p.y - CURSOR_RADIUS,
            scale,
        )
    };

    view! {
        <div
            class="pointer-events-none fixed z-50 h-8 w-8 rounded-full bg-white mix-blend-difference"
            style=style
        ></div>
    }
}
