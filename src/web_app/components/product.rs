// web_app/components/product.rs - Product display components

use leptos::prelude::*;

use crate::web_app::model::Product;

/// Card for one product in the catalog grid
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
) -> impl IntoView {
    let price_display = format!("₹{:.2}", product.price);
    let image = product.images.first().cloned();
    let alt = product.title.clone();

    view! {
        <div class="group bg-white rounded-2xl overflow-hidden shadow hover:shadow-lg transition border">
            <div class="aspect-square bg-gradient-to-br from-purple-50 to-indigo-50 flex items-center justify-center overflow-hidden">
                {match image {
                    Some(src) => view! {
                        <img src=src alt=alt class="w-full h-full object-cover" />
                    }
                    .into_any(),
                    None => view! { <div class="text-6xl">"🕯️"</div> }.into_any(),
                }}
            </div>
            <div class="p-4">
                <div class="font-semibold text-gray-900">{product.title.clone()}</div>
                <p class="text-sm text-gray-600 line-clamp-2 mt-1">{product.description.clone()}</p>
                <div class="mt-3 flex items-center justify-between">
                    <span class="text-lg font-bold">{price_display}</span>
                    <button class="px-3 py-2 rounded-full bg-indigo-600 text-white text-sm">
                        "Add to cart"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Responsive grid over the fetched catalog, with an empty state
#[component]
pub fn ProductGrid(
    /// Products to display, already narrowed to the active filter
    #[prop(into)]
    products: Signal<Vec<Product>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !products.get().is_empty()
            fallback=|| view! {
                <div class="text-center py-16 bg-white/60 rounded-2xl border border-dashed border-gray-300">
                    <div class="text-6xl mb-4">"🕯️"</div>
                    <h3 class="text-xl font-bold text-gray-900 mb-2">"Nothing here yet"</h3>
                    <p class="text-gray-500">
                        "No products in this category yet. Try another one."
                    </p>
                </div>
            }
        >
            <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                <For
                    each=move || products.get()
                    key=|product| product.id.clone()
                    children=move |product| view! { <ProductCard product=product /> }
                />
            </div>
        </Show>
    }
}
