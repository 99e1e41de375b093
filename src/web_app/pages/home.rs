// web_app/pages/home.rs - Storefront landing page
//
// The single page of the app, composing every section in order. All
// state lives in the sections themselves or in the shared session; this
// page only lays them out.

use leptos::prelude::*;

use crate::web_app::components::{
    AboutSection, CatalogSection, Hero, Logo, Navbar, SupportSection,
};

/// Storefront landing page
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navbar />
        <main class="pt-16">
            <Hero />
            <CatalogSection />
            <AboutSection />
            <SupportSection />
            <Footer />
        </main>
    }
}

/// Footer with the brand mark
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t bg-white/70 backdrop-blur mt-12">
            <div class="max-w-6xl mx-auto px-6 h-16 flex items-center justify-between text-sm text-gray-600">
                <Logo />
                <span>"© Radha Kripa. All rights reserved."</span>
            </div>
        </footer>
    }
}
