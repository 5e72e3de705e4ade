//! Site footer with brand blurb, social links, and link columns

use leptos::prelude::*;

use crate::ui::header::Logo;

const COMPANY_LINKS: [&str; 4] = ["About", "Careers", "Press", "Blog"];
const RESOURCE_LINKS: [&str; 4] = [
    "Documentation",
    "Help Center",
    "Privacy Policy",
    "Terms of Service",
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="pt-20 pb-12 px-6 md:px-12 bg-gradient-to-b from-transparent to-purple-50 dark:to-gray-900">
            <div class="container mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-12 mb-12">
                    <div class="md:col-span-2">
                        <div class="flex items-center mb-6">
                            <Logo />
                            <h1 class="ml-3 text-xl font-bold purple-text-gradient">"EmoFlow"</h1>
                        </div>
                        <p class="text-gray-600 dark:text-gray-400 mb-6 max-w-md">
                            "An emotion-responsive AI assistant that creates personalized user journeys based on your real-time emotional state."
                        </p>
                        <SocialRow />
                    </div>

                    <LinkColumn title="Company" links=COMPANY_LINKS.to_vec() />
                    <LinkColumn title="Resources" links=RESOURCE_LINKS.to_vec() />
                </div>

                <div class="pt-8 border-t border-gray-200 dark:border-gray-700">
                    <div class="flex flex-col md:flex-row justify-between items-center">
                        <p class="text-gray-500 text-sm mb-4 md:mb-0">
                            "© 2025 EmoFlow. All rights reserved."
                        </p>
                        <div class="flex space-x-6">
                            <a href="#" class="text-gray-500 text-sm hover:text-purple-600 transition-colors">
                                "Privacy Policy"
                            </a>
                            <a href="#" class="text-gray-500 text-sm hover:text-purple-600 transition-colors">
                                "Terms of Service"
                            </a>
                            <a href="#" class="text-gray-500 text-sm hover:text-purple-600 transition-colors">
                                "Cookie Policy"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn LinkColumn(title: &'static str, links: Vec<&'static str>) -> impl IntoView {
    view! {
        <div>
            <h3 class="font-semibold text-lg mb-4 text-gray-800 dark:text-gray-100">{title}</h3>
            <ul class="space-y-3">
                {links.into_iter().map(|item| {
                    view! {
                        <li>
                            <a href="#" class="text-gray-600 dark:text-gray-400 hover:text-purple-600 transition-colors">
                                {item}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn SocialRow() -> impl IntoView {
    view! {
        <div class="flex space-x-4">
            <SocialLink label="Twitter">
                <path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"></path>
            </SocialLink>
            <SocialLink label="Facebook">
                <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"></path>
            </SocialLink>
            <SocialLink label="Instagram">
                <rect width="20" height="20" x="2" y="2" rx="5" ry="5"></rect>
                <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"></path>
                <line x1="17.5" x2="17.51" y1="6.5" y2="6.5"></line>
            </SocialLink>
            <SocialLink label="LinkedIn">
                <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"></path>
                <rect width="4" height="12" x="2" y="9"></rect>
                <circle cx="4" cy="4" r="2"></circle>
            </SocialLink>
        </div>
    }
}

#[component]
fn SocialLink(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <a
            href="#"
            class="w-10 h-10 rounded-full bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 flex items-center justify-center text-gray-500 hover:text-purple-600 hover:border-purple-300 transition-colors"
            aria-label=label
        >
            <svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                {children()}
            </svg>
        </a>
    }
}
