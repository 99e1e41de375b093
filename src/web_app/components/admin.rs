// web_app/components/admin.rs - Admin-only product creation
//
// Rendered only for admin profiles, but the backend keeps the final
// say: its rejections come back as inline errors no matter what the
// local role check said.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::api::{self, ApiClient};
use crate::web_app::model::{Category, ProductDraft};
use crate::web_app::session::use_session;

use super::common::{Button, SecondaryButton, TextArea, TextInput};

/// Chip-row control that expands into the product creation form.
///
/// A failed creation leaves the form open with the draft intact; a
/// successful one closes it and asks the catalog to refetch.
#[component]
pub fn AdminProductForm(
    /// Invoked after a successful creation so the catalog can refetch
    on_created: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let client = expect_context::<ApiClient>();

    let open = RwSignal::new(false);
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let category = RwSignal::new(Category::default());
    let images = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let clear_draft = move || {
        title.set(String::new());
        description.set(String::new());
        price.set(String::new());
        category.set(Category::default());
        images.set(String::new());
        error.set(None);
    };

    let submit = Callback::new(move |()| {
        let draft = ProductDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            price: price.get_untracked(),
            category: category.get_untracked(),
            images: images.get_untracked(),
        };
        let payload = draft.into_payload();
        let session = session.clone();
        let client = client.clone();
        pending.set(true);
        error.set(None);
        spawn_local(async move {
            match api::products::create_product(&client, &session.token(), &payload).await {
                Ok(_) => {
                    let _ = open.try_set(false);
                    clear_draft();
                    on_created.run(());
                }
                // Failure keeps the form open and the draft editable
                Err(err) => {
                    let _ = error.try_set(Some(err.to_string()));
                }
            }
            let _ = pending.try_set(false);
        });
    });

    let cancel = Callback::new(move |()| open.set(false));

    view! {
        <div>
            <button
                class="px-4 py-2 rounded-full bg-green-600 text-white hover:bg-green-700 transition"
                on:click=move |_| open.set(true)
            >
                "+ Add Product"
            </button>
            <Show when=move || open.get()>
                <div class="mt-4 p-4 border rounded-xl bg-white max-w-xl shadow-sm">
                    <div class="grid sm:grid-cols-2 gap-3">
                        <TextInput value=title placeholder="Title" />
                        <TextInput value=price placeholder="Price" />
                        <CategorySelect category=category />
                        <TextInput value=images placeholder="Image URLs, comma separated" />
                        <div class="sm:col-span-2">
                            <TextArea value=description placeholder="Description" rows=3 />
                        </div>
                    </div>
                    {move || error.get().map(|message| view! {
                        <p class="mt-3 text-red-600 text-sm">{message}</p>
                    })}
                    <div class="mt-3 flex gap-2">
                        <Button on_click=submit disabled=pending>
                            {move || if pending.get() { "Saving..." } else { "Save" }}
                        </Button>
                        <SecondaryButton on_click=cancel>
                            "Cancel"
                        </SecondaryButton>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Category dropdown over the fixed category set
#[component]
fn CategorySelect(
    /// Draft category, defaulting to the first chip's category
    category: RwSignal<Category>,
) -> impl IntoView {
    view! {
        <select
            class="px-3 py-2 rounded-lg ring-1 ring-gray-200 focus:ring-indigo-300 outline-none bg-white"
            on:change=move |ev| {
                if let Some(picked) = Category::from_key(&event_target_value(&ev)) {
                    category.set(picked);
                }
            }
        >
            {Category::ALL
                .into_iter()
                .map(|option| {
                    view! {
                        <option value=option.key() selected=move || category.get() == option>
                            {option.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
