// web_app/components/support.rs - Support contact form
//
// No authentication involved. A failed send keeps every field filled
// for retry; only a confirmed send clears the draft.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::api::{self, ApiClient};
use crate::web_app::model::SupportMessage;

use super::common::{Button, TextArea, TextInput};

/// Support section with the contact form and confirmation state
#[component]
pub fn SupportSection() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let sent = RwSignal::new(false);
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let send = Callback::new(move |()| {
        let message = SupportMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            content: content.get_untracked(),
        };
        let client = client.clone();
        pending.set(true);
        error.set(None);
        spawn_local(async move {
            match api::support::send_support_message(&client, &message).await {
                Ok(()) => {
                    // Only a confirmed send may clear the draft
                    let _ = sent.try_set(true);
                    let _ = name.try_set(String::new());
                    let _ = email.try_set(String::new());
                    let _ = content.try_set(String::new());
                }
                Err(err) => {
                    let _ = error.try_set(Some(err.to_string()));
                }
            }
            let _ = pending.try_set(false);
        });
    });

    view! {
        <section id="support" class="max-w-6xl mx-auto px-6 py-16">
            <h2 class="text-3xl font-bold text-gray-900">"Live Support"</h2>
            <div class="mt-4 grid md:grid-cols-2 gap-6">
                <div class="p-6 rounded-2xl border bg-white shadow-sm">
                    <Show
                        when=move || !sent.get()
                        fallback=|| view! {
                            <div class="text-center py-8">
                                <div class="text-4xl mb-3">"🙏"</div>
                                <p class="text-green-600 font-medium">
                                    "Thanks! Our team will reach out soon."
                                </p>
                            </div>
                        }
                    >
                        <div class="grid gap-3">
                            <TextInput value=name placeholder="Your name" />
                            <TextInput value=email placeholder="Email (optional)" input_type="email" />
                            <TextArea value=content placeholder="How can we help?" rows=4 />
                            {move || error.get().map(|message| view! {
                                <p class="text-red-600 text-sm">{message}</p>
                            })}
                            <Button on_click=send disabled=pending>
                                {move || if pending.get() { "Sending..." } else { "Send" }}
                            </Button>
                        </div>
                    </Show>
                </div>
                <div class="rounded-2xl overflow-hidden shadow bg-gradient-to-br from-purple-100 to-indigo-200 min-h-[20rem] flex items-center justify-center">
                    <span class="text-7xl">"🪔"</span>
                </div>
            </div>
        </section>
    }
}
