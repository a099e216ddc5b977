mod content;
mod cursor;
mod gate;
mod hero;
mod menu;
mod state;
mod timeline;
mod transitions;
mod viewport;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use content::site_content;
use cursor::CursorGlow;
use gate::GateForm;
use hero::HeroSection;
use menu::{Header, SideMenu};
use state::{PageEvent, PageState};
use timeline::Timeline;
use viewport::track_viewport;

/// Single source of truth for the page: one snapshot signal, advanced only
/// through the pure reducer. Handed to components via context.
#[derive(Clone, Copy)]
pub(crate) struct Store(RwSignal<PageState>);

impl Store {
    fn new() -> Self {
        Self(RwSignal::new(PageState::default()))
    }

    pub fn dispatch(self, event: PageEvent) {
        self.0.update(|state| *state = state.clone().apply(event));
    }

    pub fn with<U>(self, f: impl FnOnce(&PageState) -> U) -> U {
        self.0.with(f)
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-50">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let owner = site_content().owner.clone();

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// The whole page. The gate flag decides whether the visitor sees the
/// introduce-yourself modal or the revealed portfolio; the modal never comes
/// back once released.
#[component]
fn PortfolioPage() -> impl IntoView {
    let store = Store::new();
    provide_context(store);
    track_viewport(store);

    let released = Memo::new(move |_| store.with(|s| s.gate.is_released()));

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen overflow-hidden bg-gray-50">
            <CursorGlow />
            <Show when=move || released.get() fallback=|| view! { <GateForm /> }>
                <Header />
                <SideMenu />
                <main class="pt-16">
                    <HeroSection />
                    <Timeline />
                </main>
                <Footer />
            </Show>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-6 text-center text-sm text-gray-500">
            {format!("© {} · built {}", site_content().owner, env!("BUILD_TIME"))}
        </footer>
    }
}
