//! Site header
//!
//! Fixed at the top of every page; gains a blurred backdrop once the page
//! is scrolled past the fold. Includes desktop nav, a mobile menu, and the
//! theme toggle.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};
use crate::ui::theme::use_theme_context;

#[component]
pub fn Header() -> impl IntoView {
    let (is_scrolled, set_is_scrolled) = signal(false);
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev;
        use leptos::web_sys;

        let handle = window_event_listener(ev::scroll, move |_| {
            let scrolled = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .map(|y| y > 10.0)
                .unwrap_or(false);
            let _ = set_is_scrolled.try_set(scrolled);
        });
        on_cleanup(move || drop(handle));
    }

    let header_class = move || {
        if is_scrolled.get() {
            "fixed top-0 left-0 right-0 z-50 py-4 px-6 md:px-12 transition-all duration-300 bg-white/80 dark:bg-gray-900/80 backdrop-blur-md shadow-sm"
        } else {
            "fixed top-0 left-0 right-0 z-50 py-4 px-6 md:px-12 transition-all duration-300 bg-transparent"
        }
    };

    view! {
        <header class=header_class>
            <div class="container mx-auto">
                <div class="flex items-center justify-between">
                    <A href="/" attr:class="flex items-center">
                        <Logo />
                        <h1 class="ml-3 text-xl font-bold purple-text-gradient">"EmoFlow"</h1>
                    </A>

                    <nav class="hidden md:flex space-x-8">
                        <A href="/" attr:class="text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-purple-600 transition-colors">
                            "Home"
                        </A>
                        <A href="/chatbot" attr:class="text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-purple-600 transition-colors">
                            "AI Advisor"
                        </A>
                        <A href="/schedule" attr:class="text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-purple-600 transition-colors">
                            "Schedule"
                        </A>
                        <a href="/#features" class="text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-purple-600 transition-colors">
                            "Features"
                        </a>
                        <a href="/#how-it-works" class="text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-purple-600 transition-colors">
                            "How It Works"
                        </a>
                    </nav>

                    <div class="hidden md:flex items-center gap-3">
                        <ThemeToggle />
                        <A
                            href="/chatbot"
                            attr:class="px-5 py-2.5 rounded-full text-sm font-medium text-white purple-gradient transition-all hover:shadow-lg hover:scale-105 active:scale-95"
                        >
                            "Boost Productivity"
                        </A>
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-md text-gray-500 hover:text-gray-800 dark:hover:text-gray-100 hover:bg-gray-100 dark:hover:bg-gray-800"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }.into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                {move || {
                    mobile_menu_open.get().then(|| view! {
                        <div class="md:hidden mt-4 py-4 px-2 bg-white dark:bg-gray-900 rounded-lg shadow-lg">
                            <nav class="flex flex-col space-y-2">
                                <MobileNavLink href="/" label="Home" close=set_mobile_menu_open />
                                <MobileNavLink href="/chatbot" label="AI Advisor" close=set_mobile_menu_open />
                                <MobileNavLink href="/schedule" label="Schedule" close=set_mobile_menu_open />
                                <a
                                    href="/#features"
                                    class="px-4 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-purple-600 hover:bg-gray-50 dark:hover:bg-gray-800 rounded-md transition-colors"
                                    on:click=move |_| set_mobile_menu_open.set(false)
                                >
                                    "Features"
                                </a>
                                <a
                                    href="/#how-it-works"
                                    class="px-4 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-purple-600 hover:bg-gray-50 dark:hover:bg-gray-800 rounded-md transition-colors"
                                    on:click=move |_| set_mobile_menu_open.set(false)
                                >
                                    "How It Works"
                                </a>
                                <div class="px-4 pt-2">
                                    <ThemeToggle />
                                </div>
                            </nav>
                        </div>
                    })
                }}
            </div>
        </header>
    }
}

#[component]
fn MobileNavLink(
    href: &'static str,
    label: &'static str,
    close: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <A
            href=href
            attr:class="px-4 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-purple-600 hover:bg-gray-50 dark:hover:bg-gray-800 rounded-md transition-colors"
            on:click=move |_| close.set(false)
        >
            {label}
        </A>
    }
}

/// Theme toggle button
#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <button
            class="p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors text-gray-600 dark:text-gray-300"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            {move || {
                if theme.is_dark() {
                    view! { <Icon name=icons::SUN class="w-5 h-5" /> }.into_any()
                } else {
                    view! { <Icon name=icons::MOON class="w-5 h-5" /> }.into_any()
                }
            }}
        </button>
    }
}

/// Round brand mark
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 rounded-full purple-gradient flex items-center justify-center shadow-md">
            <span class="text-white font-bold text-lg">"E"</span>
        </div>
    }
}
