//! AI Advisor chat demo
//!
//! Scripted chat: the user's message is appended immediately, the input is
//! cleared, and a canned reply arrives after a fixed delay. Sends made
//! while a reply is pending each get their own reply; nothing is dropped.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::{ChatLog, ChatMessage, ReplySampler, Sender};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn ChatbotPage() -> impl IntoView {
    let log = RwSignal::new(ChatLog::with_greeting());
    let (input, set_input) = signal(String::new());
    let sampler = StoredValue::new(ReplySampler::new());

    let send = move || {
        let text = input.get_untracked();
        let accepted = log
            .try_update(|l| l.submit(&text))
            .unwrap_or(false);
        if !accepted {
            return;
        }
        set_input.set(String::new());

        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            use crate::core::chat::REPLY_DELAY_MS;

            spawn_local(async move {
                TimeoutFuture::new(REPLY_DELAY_MS).await;
                if let Some(reply) = sampler.try_update_value(|s| s.next()) {
                    let _ = log.try_update(|l| l.push_reply(reply));
                }
            });
        }
        #[cfg(feature = "ssr")]
        let _ = &sampler;
    };

    view! {
        <Title text="AI Advisor | EmoFlow" />

        <div class="min-h-screen bg-white dark:bg-gray-950 flex flex-col">
            <Header />

            <main class="flex-1 pt-28 pb-12 px-6 md:px-12">
                <div class="container mx-auto max-w-3xl">
                    <div class="text-center mb-8">
                        <span class="inline-block py-1.5 px-4 rounded-full bg-purple-600/10 text-purple-600 font-medium text-sm mb-4">
                            "AI Advisor"
                        </span>
                        <h1 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white">
                            "Your Personal " <span class="purple-text-gradient">"Productivity Advisor"</span>
                        </h1>
                    </div>

                    <div class="glass-panel rounded-2xl overflow-hidden shadow-xl flex flex-col h-[32rem]">
                        <div class="purple-gradient py-4 px-6 flex items-center">
                            <div class="w-10 h-10 rounded-full bg-white/20 flex items-center justify-center">
                                <Icon name=icons::BOT class="w-5 h-5 text-white" />
                            </div>
                            <div class="ml-3">
                                <h2 class="text-white font-semibold">"EmoFlow Assistant"</h2>
                                <p class="text-white/70 text-xs">"Always here to help"</p>
                            </div>
                        </div>

                        <div class="flex-1 overflow-y-auto p-6 space-y-4">
                            {move || {
                                log.get()
                                    .messages()
                                    .iter()
                                    .cloned()
                                    .map(|message| view! { <MessageBubble message=message /> })
                                    .collect_view()
                            }}
                        </div>

                        <div class="border-t border-gray-200 dark:border-gray-700 p-4">
                            <div class="flex gap-3">
                                <input
                                    type="text"
                                    class="input-base flex-1"
                                    placeholder="Ask about your productivity..."
                                    prop:value=move || input.get()
                                    on:input=move |ev| set_input.set(event_target_value(&ev))
                                    on:keydown=move |ev| {
                                        if ev.key() == "Enter" {
                                            send();
                                        }
                                    }
                                />
                                <button
                                    class="w-12 h-12 rounded-full purple-gradient text-white flex items-center justify-center shrink-0 transition-all hover:shadow-lg hover:scale-105 active:scale-95"
                                    on:click=move |_| send()
                                    aria-label="Send message"
                                >
                                    <Icon name=icons::SEND class="w-5 h-5" />
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            </main>

            <Footer />
        </div>
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.sender == Sender::User;

    let row_class = if is_user {
        "flex justify-end"
    } else {
        "flex justify-start"
    };
    let bubble_class = if is_user {
        "max-w-[80%] rounded-2xl rounded-br-sm purple-gradient text-white py-3 px-4"
    } else {
        "max-w-[80%] rounded-2xl rounded-bl-sm bg-gray-100 dark:bg-gray-800 text-gray-800 dark:text-gray-100 py-3 px-4"
    };
    let time_class = if is_user {
        "text-white/60 text-[10px] mt-1 text-right"
    } else {
        "text-gray-400 text-[10px] mt-1"
    };

    let time_label = message.time_label();

    view! {
        <div class=row_class>
            <div class=bubble_class>
                <p class="text-sm leading-relaxed">{message.text}</p>
                <p class=time_class>{time_label}</p>
            </div>
        </div>
    }
}
