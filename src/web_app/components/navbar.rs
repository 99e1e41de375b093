// web_app/components/navbar.rs - Navigation bar and session controls
//
// The navbar owns only ephemeral UI toggles (mobile menu, login
// popover); everything session-shaped lives in the shared `Session`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::session::use_session;

use super::common::{Button, Logo, TextInput};

/// Fixed navigation bar with responsive collapse
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let menu_open = RwSignal::new(false);
    let user = session.user();

    let logout = {
        let session = session.clone();
        Callback::new(move |()| session.logout())
    };

    view! {
        <nav class="fixed top-0 left-0 right-0 z-20 bg-white/70 backdrop-blur border-b border-white/50">
            <div class="max-w-6xl mx-auto px-4 h-16 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <button
                        class="sm:hidden text-2xl leading-none"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                    <Logo />
                </div>
                <div class="hidden sm:flex items-center gap-6 text-sm font-medium text-gray-700">
                    <a href="#products" class="hover:text-indigo-600">"Products"</a>
                    <a href="#about" class="hover:text-indigo-600">"About"</a>
                    <a href="#support" class="hover:text-indigo-600">"Support"</a>
                </div>
                <div class="flex items-center gap-3">
                    {move || match user.get() {
                        Some(profile) => view! {
                            <div class="flex items-center gap-3">
                                <span class="hidden sm:inline text-sm text-gray-700">
                                    {format!("Hi, {}", profile.name)}
                                </span>
                                <button
                                    class="px-3 py-2 rounded-full ring-1 ring-gray-200 hover:bg-gray-100 text-sm"
                                    on:click=move |_| logout.run(())
                                >
                                    "Logout"
                                </button>
                            </div>
                        }
                        .into_any(),
                        None => view! { <LoginControl /> }.into_any(),
                    }}
                    <a href="#cart" class="p-2 rounded-full bg-indigo-600 text-white" title="Cart">
                        "🛒"
                    </a>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="sm:hidden border-t bg-white">
                    <a href="#products" class="block px-4 py-3">"Products"</a>
                    <a href="#about" class="block px-4 py-3">"About"</a>
                    <a href="#support" class="block px-4 py-3">"Support"</a>
                </div>
            </Show>
        </nav>
    }
}

/// Login button with a credentials popover.
///
/// A failed login leaves the popover open with an inline error and the
/// prior session untouched; success closes it and drops the password.
#[component]
fn LoginControl() -> impl IntoView {
    let session = use_session();
    let open = RwSignal::new(false);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let login = Callback::new(move |()| {
        let session = session.clone();
        pending.set(true);
        error.set(None);
        spawn_local(async move {
            match session
                .login(&email.get_untracked(), &password.get_untracked())
                .await
            {
                Ok(()) => {
                    let _ = open.try_set(false);
                    let _ = email.try_set(String::new());
                    let _ = password.try_set(String::new());
                }
                Err(err) => {
                    let _ = error.try_set(Some(err.to_string()));
                }
            }
            let _ = pending.try_set(false);
        });
    });

    view! {
        <div class="relative">
            <button
                class="px-3 py-2 rounded-full ring-1 ring-gray-200 hover:bg-gray-100 text-sm"
                on:click=move |_| open.update(|show| *show = !*show)
            >
                "Login"
            </button>
            <Show when=move || open.get()>
                <div class="absolute right-0 mt-2 w-72 bg-white shadow-lg rounded-xl p-4 border">
                    <form on:submit=move |ev: leptos::web_sys::SubmitEvent| {
                        ev.prevent_default();
                        login.run(());
                    }>
                        <div class="text-sm font-semibold mb-2">"Login"</div>
                        <div class="mb-2">
                            <TextInput value=email placeholder="Email" input_type="email" />
                        </div>
                        <div class="mb-3">
                            <TextInput value=password placeholder="Password" input_type="password" />
                        </div>
                        {move || error.get().map(|message| view! {
                            <p class="text-red-600 text-sm mb-2">{message}</p>
                        })}
                        <Button button_type="submit" disabled=pending class="w-full">
                            {move || if pending.get() { "..." } else { "Login" }}
                        </Button>
                    </form>
                </div>
            </Show>
        </div>
    }
}
