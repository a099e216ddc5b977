use leptos::prelude::*;

use super::content::site_content;
use super::state::PageEvent;
use super::transitions::{stagger_delay_ms, style_for, target_for, Trigger};
use super::Store;

/// Fixed page header: menu toggle on the left, owner name centered.
#[component]
pub fn Header() -> impl IntoView {
    let store = expect_context::<Store>();

    view! {
        <header class="fixed top-0 z-40 w-full bg-white/80 shadow-sm backdrop-blur-sm">
            <div class="flex h-16 items-center justify-between px-4">
                <button
                    class="rounded-lg p-2 transition-all duration-300 hover:bg-gray-100"
                    aria-label="Toggle menu"
                    on:click=move |_| store.dispatch(PageEvent::MenuToggled)
                    on:mouseenter=move |_| store.dispatch(PageEvent::HoverChanged(true))
                    on:mouseleave=move |_| store.dispatch(PageEvent::HoverChanged(false))
                >
                    "☰"
                </button>
                <h1 class="text-xl font-bold">{site_content().owner.clone()}</h1>
                <div class="w-10"></div>
            </div>
        </header>
    }
}

/// Slide-in navigation panel. Visuals are a pure function of the menu state;
/// the transition table owns the timing.
#[component]
pub fn SideMenu() -> impl IntoView {
    let store = expect_context::<Store>();
    let is_open = Memo::new(move |_| store.with(|s| s.menu.is_open()));
    let panel_style = move || {
        style_for(if is_open.get() {
            Trigger::MenuOpen
        } else {
            Trigger::MenuClosed
        })
    };

    view! {
        <div
            class="fixed inset-y-0 left-0 z-40 w-64 bg-white/90 backdrop-blur-md"
            style=panel_style
        >
            <div class="flex items-center justify-between border-b p-4">
                <h2 class="font-bold">"Menu"</h2>
                <button
                    class="rounded-lg p-2 hover:bg-gray-100"
                    aria-label="Close menu"
                    on:click=move |_| store.dispatch(PageEvent::MenuToggled)
                >
                    "✕"
                </button>
            </div>
            <nav class="p-4">
                {site_content()
                    .menu
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let href = item.target.clone();
                        let title = item.title.clone();
                        view! {
                            <a
                                href=href
                                class="block rounded-lg px-4 py-2 text-gray-700 transition-all duration-300 hover:bg-gray-100"
                                style=move || {
                                    let opacity = if is_open.get() {
                                        target_for(Trigger::MenuOpen, "opacity")
                                    } else {
                                        target_for(Trigger::MenuClosed, "opacity")
                                    }
                                    .unwrap_or("1");
                                    format!(
                                        "opacity: {}; transition-delay: {}ms",
                                        opacity,
                                        stagger_delay_ms(index),
                                    )
                                }
                                on:click=move |_| store.dispatch(PageEvent::MenuItemSelected)
                                on:mouseenter=move |_| store.dispatch(PageEvent::HoverChanged(true))
                                on:mouseleave=move |_| store.dispatch(PageEvent::HoverChanged(false))
                            >
                                {title}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
