use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::footer::Footer;
use crate::ui::header::Header;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found | EmoFlow" />

        <div class="min-h-screen bg-white dark:bg-gray-950 flex flex-col">
            <Header />

            <main class="flex-1 flex items-center justify-center px-6 pt-24">
                <div class="text-center">
                    <h1 class="text-7xl font-bold purple-text-gradient mb-4">"404"</h1>
                    <p class="text-xl text-gray-600 dark:text-gray-300 mb-8">
                        "This page seems to have wandered off to find its focus."
                    </p>
                    <A
                        href="/"
                        attr:class="inline-block px-8 py-3 rounded-full purple-gradient text-white font-medium shadow-lg hover:shadow-xl transition-all hover:scale-105 active:scale-95"
                    >
                        "Back to Home"
                    </A>
                </div>
            </main>

            <Footer />
        </div>
    }
}
