// web_app/components/catalog.rs - Catalog section
//
// Owns the active category filter and the product listing wired to it.
// Every filter change (and every admin creation) issues exactly one new
// listing request; a ticket from `RequestSequence` guarantees that only
// the most recent request's response ever reaches the grid.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::api::{self, ApiClient};
use crate::web_app::model::{Category, Product};
use crate::web_app::requests::RequestSequence;
use crate::web_app::session::use_session;

use super::admin::AdminProductForm;
use super::common::{ErrorDisplay, Loading};
use super::product::ProductGrid;

/// Chip styling shared by "All" and the category chips
fn chip_class(selected: bool) -> &'static str {
    if selected {
        "px-4 py-2 rounded-full ring-1 bg-indigo-600 text-white ring-indigo-600"
    } else {
        "px-4 py-2 rounded-full ring-1 ring-gray-200 text-gray-700 hover:bg-gray-100"
    }
}

/// Product catalog with category filter chips
#[component]
pub fn CatalogSection() -> impl IntoView {
    let session = use_session();
    let client = expect_context::<ApiClient>();

    let active = RwSignal::new(None::<Category>);
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    // Bumped after an admin creation so the catalog re-requests
    let refresh = RwSignal::new(0u32);
    let listings = StoredValue::new(Arc::new(RequestSequence::new()));

    {
        let client = client.clone();
        Effect::new(move || {
            let filter = active.get();
            refresh.track();

            let ticket = listings.with_value(|sequence| sequence.issue());
            loading.set(true);
            let client = client.clone();
            spawn_local(async move {
                let outcome = api::products::list_products(&client, filter).await;

                // Dropped if a newer filter change or a teardown won
                let still_latest = listings
                    .try_with_value(|sequence| sequence.is_latest(ticket))
                    .unwrap_or(false);
                if !still_latest {
                    return;
                }

                let _ = loading.try_set(false);
                match outcome {
                    Ok(items) => {
                        let _ = error.try_set(None);
                        let _ = products.try_set(items);
                    }
                    Err(err) => {
                        let _ = error.try_set(Some(err.to_string()));
                    }
                }
            });
        });
    }

    let on_created = Callback::new(move |()| refresh.update(|n| *n += 1));
    let is_admin = session.is_admin();

    view! {
        <section id="products" class="max-w-6xl mx-auto px-6 py-16">
            <h2 class="text-3xl font-bold text-gray-900">"Our Products"</h2>

            <div class="mt-4 flex gap-3 flex-wrap items-center">
                <button
                    on:click=move |_| active.set(None)
                    class=move || chip_class(active.get().is_none())
                >
                    "All"
                </button>
                {Category::ALL
                    .into_iter()
                    .map(|category| {
                        view! {
                            <button
                                on:click=move |_| active.set(Some(category))
                                class=move || chip_class(active.get() == Some(category))
                            >
                                {category.label()}
                            </button>
                        }
                    })
                    .collect_view()}
                <Show when=move || is_admin.get()>
                    <AdminProductForm on_created=on_created />
                </Show>
            </div>

            <div class="mt-8">
                {move || {
                    if let Some(message) = error.get() {
                        view! { <ErrorDisplay error=message /> }.into_any()
                    } else if loading.get() {
                        view! { <Loading message="Loading products..." /> }.into_any()
                    } else {
                        view! { <ProductGrid products=products /> }.into_any()
                    }
                }}
            </div>
        </section>
    }
}
