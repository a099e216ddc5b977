use leptos::prelude::*;

use super::content::{site_content, ExperienceEntry};
use super::state::PageEvent;
use super::Store;

/// A connector follows every entry except the last.
pub fn has_connector(index: usize, len: usize) -> bool {
    index + 1 < len
}

pub fn connector_count(entries: usize) -> usize {
    entries.saturating_sub(1)
}

/// Experience entries rendered in given order as a vertical connected list.
/// Pure presentation; no sorting or filtering.
#[component]
pub fn Timeline() -> impl IntoView {
    let entries = &site_content().experiences;
    let len = entries.len();

    view! {
        <section class="mx-auto max-w-4xl px-6 py-12">
            <h2 class="mb-8 text-2xl font-bold">"Experience Timeline"</h2>
            <div class="relative">
                {entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        view! { <TimelineRow entry=entry.clone() connector=has_connector(index, len) /> }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn TimelineRow(entry: ExperienceEntry, connector: bool) -> impl IntoView {
    let store = expect_context::<Store>();

    view! {
        <div class="mb-8 flex">
            <div class="mr-4 flex flex-col items-center">
                <div class="h-3 w-3 rounded-full bg-blue-500"></div>
                {connector.then(|| view! { <div class="mt-3 h-full w-0.5 bg-blue-200"></div> })}
            </div>
            <div
                class="flex-1 rounded-lg bg-white p-6 shadow-md transition-all duration-300 hover:shadow-xl hover:-translate-y-1"
                on:mouseenter=move |_| store.dispatch(PageEvent::HoverChanged(true))
                on:mouseleave=move |_| store.dispatch(PageEvent::HoverChanged(false))
            >
                <div class="text-sm font-semibold text-blue-500">{entry.year}</div>
                <h3 class="mt-1 text-lg font-bold">{entry.title}</h3>
                <div class="text-gray-600">{entry.company}</div>
                <p class="mt-2 text-gray-700">{entry.description}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn n_entries_yield_n_minus_one_connectors() {
        for n in 1..=6 {
            let drawn = (0..n).filter(|&i| has_connector(i, n)).count();
            assert_eq!(drawn, connector_count(n));
            assert_eq!(drawn, n - 1);
        }
    }

    #[test]
    fn connectors_sit_strictly_between_consecutive_entries() {
        let n = 4;
        // Every entry but the last carries one; the last never does.
        for i in 0..n - 1 {
            assert!(has_connector(i, n));
        }
        assert!(!has_connector(n - 1, n));
    }

    #[test]
    fn empty_and_single_entry_lists_draw_nothing() {
        assert_eq!(connector_count(0), 0);
        assert_eq!(connector_count(1), 0);
        assert!(!has_connector(0, 1));
    }
}
