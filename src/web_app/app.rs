// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application. It sets up meta
// tags, the shared API client and session context, and the router.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::api::ApiClient;
use crate::web_app::pages::HomePage;
use crate::web_app::session::Session;

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - The shared API client and the session (single persistence owner)
/// - Router with the single storefront route
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    // One client and one session for the whole tree
    let client = ApiClient::new();
    provide_context(client.clone());
    Session::provide(client);

    view! {
        // HTML meta tags
        <Title text="Radha Kripa" />
        <Meta name="description" content="Handcrafted dhoop, agarbatti and perfumes inspired by pure bhakti" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Router setup
        <Router>
            <div class="min-h-screen bg-gradient-to-br from-purple-50 to-indigo-50 text-gray-900">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors"
                >
                    "Back to the store"
                </a>
            </div>
        </div>
    }
}
