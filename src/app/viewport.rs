use leptos::prelude::*;
use leptos_use::{use_mouse, use_window_scroll, UseMouseReturn};

use super::state::PageEvent;
use super::Store;

/// Forward window scroll and pointer samples into the page reducer.
///
/// `leptos-use` registers the underlying listeners against the current
/// reactive owner, so tearing the page down drops the subscriptions with it;
/// no events reach the reducer after unmount.
pub fn track_viewport(store: Store) {
    let (_, scroll_y) = use_window_scroll();
    let UseMouseReturn { x, y, .. } = use_mouse();

    Effect::new(move |_| {
        store.dispatch(PageEvent::Scrolled(scroll_y.get()));
    });
    Effect::new(move |_| {
        store.dispatch(PageEvent::PointerMoved(x.get(), y.get()));
    });
}
