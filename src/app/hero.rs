use leptos::prelude::*;

use super::content::site_content;
use super::Store;

/// Fraction of the scroll distance each hero layer travels. The mismatch
/// between the two is what reads as depth.
pub const BACKGROUND_PARALLAX: f64 = 0.5;
pub const CONTENT_PARALLAX: f64 = 0.2;

// Offsets are intentionally unclamped: the section is a fixed-height clip,
// so past the banner the layers just leave the visible region.
pub fn background_offset(scroll_offset: f64) -> f64 {
    scroll_offset * BACKGROUND_PARALLAX
}

pub fn content_offset(scroll_offset: f64) -> f64 {
    scroll_offset * CONTENT_PARALLAX
}

/// Parallax banner. Pure function of the tracked scroll offset.
#[component]
pub fn HeroSection() -> impl IntoView {
    let store = expect_context::<Store>();
    let scroll = Memo::new(move |_| store.with(|s| s.viewport.scroll_offset));
    let content = site_content();

    view! {
        <section
            class="relative overflow-hidden bg-gradient-to-r from-blue-500 to-purple-600 text-white"
            style="height: 80vh"
        >
            <div
                class="absolute inset-0 opacity-30 bg-cover bg-center"
                style:background-image="url('/hero-backdrop.jpg')"
                style:transform=move || format!("translateY({}px)", background_offset(scroll.get()))
            ></div>
            <div
                class="relative flex h-full items-center px-6"
                style:transform=move || format!("translateY({}px)", content_offset(scroll.get()))
            >
                <div class="mx-auto max-w-4xl">
                    <h1 class="mb-4 text-6xl font-bold">{content.hero_title.clone()}</h1>
                    <p class="text-xl">{content.hero_subtitle.clone()}</p>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_ratios_are_exact() {
        assert_eq!(background_offset(100.0), 50.0);
        assert_eq!(content_offset(100.0), 20.0);
    }

    #[test]
    fn zero_scroll_means_no_offset() {
        assert_eq!(background_offset(0.0), 0.0);
        assert_eq!(content_offset(0.0), 0.0);
    }

    #[test]
    fn offsets_are_unclamped() {
        assert_eq!(background_offset(10_000.0), 5_000.0);
        assert_eq!(content_offset(-250.0), -50.0);
    }

    #[test]
    fn background_leads_content() {
        assert!(BACKGROUND_PARALLAX > CONTENT_PARALLAX);
    }
}
