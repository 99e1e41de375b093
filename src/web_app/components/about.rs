// web_app/components/about.rs - About section

use leptos::prelude::*;

/// Brand story section
#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="max-w-6xl mx-auto px-6 py-16">
            <div class="grid md:grid-cols-2 gap-8 items-center">
                <div>
                    <h2 class="text-3xl font-bold text-gray-900">"Rooted in Tradition"</h2>
                    <p class="mt-4 text-gray-700">
                        "Every stick and cone is crafted with care, using natural ingredients \
                         and age old recipes. Our perfumes are blended to bring peace and \
                         positivity."
                    </p>
                </div>
                <div class="rounded-2xl overflow-hidden shadow bg-gradient-to-br from-fuchsia-100 to-indigo-200 min-h-[20rem] flex items-center justify-center">
                    <span class="text-7xl">"🕉️"</span>
                </div>
            </div>
        </section>
    }
}
