// web_app/components/common.rs - Reusable UI components
//
// Small, composable components used throughout the storefront.
// Philosophy: pure, stateless components that receive all data via props.

use leptos::prelude::*;

/// Brand mark used in the navbar and footer
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 select-none">
            <div class="w-8 h-8 rounded-full bg-gradient-to-br from-fuchsia-500 via-purple-500 to-indigo-500 shadow-lg"></div>
            <span class="text-xl font-extrabold tracking-wide bg-gradient-to-r from-fuchsia-600 via-purple-600 to-indigo-600 bg-clip-text text-transparent">
                "Radha Kripa"
            </span>
        </div>
    }
}

/// Loading spinner with an optional message
#[component]
pub fn Loading(
    #[prop(default = "Loading...")] message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-indigo-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Inline error banner
///
/// Every operation failure ends up here; nothing crashes the view.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-4 flex items-start gap-3">
            <span class="text-red-600 text-xl font-bold">"⚠"</span>
            <div>
                <h3 class="text-red-800 font-bold mb-1">"Something went wrong"</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

/// Primary action button
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] on_click: Option<Callback<()>>,
    /// Reactive so pending submissions can lock the button
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Button type (submit, button, reset)
    #[prop(default = "button")] button_type: &'static str,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 \
                      transition-colors disabled:opacity-60 disabled:cursor-not-allowed \
                      font-medium shadow-sm";

    view! {
        <button
            type=button_type
            disabled=move || disabled.get()
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Lighter button for secondary actions
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(default = false)] disabled: bool,
) -> impl IntoView {
    let class = "px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 \
                 transition-colors disabled:opacity-50 font-medium";

    view! {
        <button
            type="button"
            disabled=disabled
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Styled single-line text input bound to a signal
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    #[prop(default = "")] placeholder: &'static str,
    /// Input type (text, email, password, ...)
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let base_class = "w-full px-3 py-2 rounded-lg ring-1 ring-gray-200 \
                      focus:ring-indigo-300 outline-none transition-shadow";

    view! {
        <input
            type=input_type
            placeholder=placeholder
            class=format!("{} {}", base_class, class)
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}

/// Styled multi-line text input bound to a signal
#[component]
pub fn TextArea(
    /// The current value
    value: RwSignal<String>,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    view! {
        <textarea
            placeholder=placeholder
            rows=rows
            class="w-full px-3 py-2 rounded-lg ring-1 ring-gray-200 \
                   focus:ring-indigo-300 outline-none transition-shadow"
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        ></textarea>
    }
}
