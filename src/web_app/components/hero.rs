// web_app/components/hero.rs - Hero banner

use leptos::prelude::*;

/// Opening banner with the brand pitch and section anchors.
///
/// The backdrop is a static gradient; scene embedding is out of scope.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-[70vh] w-full overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-fuchsia-100 via-purple-100 to-indigo-200"></div>
            <div class="relative z-10 max-w-6xl mx-auto px-6 pt-24 pb-16">
                <h1 class="text-4xl sm:text-6xl font-extrabold text-gray-800 drop-shadow-sm">
                    "The Fragrance of Devotion"
                </h1>
                <p class="mt-4 text-lg text-gray-700 max-w-2xl">
                    "Handcrafted dhoop batti, agarbatti and perfumes inspired by pure bhakti. \
                     Elevate your space with sacred aromas."
                </p>
                <div class="mt-6 flex flex-wrap gap-3">
                    <a
                        href="#products"
                        class="inline-flex items-center gap-2 px-5 py-3 rounded-full bg-indigo-600 text-white shadow hover:bg-indigo-700 transition"
                    >
                        "Shop Bestsellers ›"
                    </a>
                    <a
                        href="#support"
                        class="inline-flex items-center gap-2 px-5 py-3 rounded-full bg-white/80 backdrop-blur text-indigo-700 ring-1 ring-indigo-200 hover:ring-indigo-300 transition"
                    >
                        "Live Support"
                    </a>
                </div>
            </div>
        </section>
    }
}
