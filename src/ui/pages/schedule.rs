//! Schedule dashboard demo
//!
//! Gated behind a mock login. Once a name is entered the dashboard shows
//! the emotion gauges, the derived productivity score, and the Today and
//! Upcoming task tables. The analyze action randomizes the profile and
//! task completion after a simulated processing delay.

use leptos::prelude::*;
use leptos_meta::Title;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::core::{
    initial_schedule, initial_upcoming, toggle_task, EmotionProfile, Priority, ScheduleTask,
    Session, UpcomingTask,
};
use crate::ui::common::{Button, FormField, TabItem, TabPanel, Tabs};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::{NotificationManager, NotificationsContainer};

#[component]
pub fn SchedulePage() -> impl IntoView {
    let session = RwSignal::new(Session::new());
    let notifications = NotificationManager::new();

    view! {
        <Title text="Schedule | EmoFlow" />

        <div class="min-h-screen bg-white dark:bg-gray-950 flex flex-col">
            <Header />
            <NotificationsContainer toasts=notifications.toasts() />

            <main class="flex-1 pt-28 pb-12 px-6 md:px-12">
                <div class="container mx-auto">
                    {move || {
                        if session.get().logged_in {
                            view! { <Dashboard session=session notifications=notifications /> }
                                .into_any()
                        } else {
                            view! { <LoginCard session=session notifications=notifications /> }
                                .into_any()
                        }
                    }}
                </div>
            </main>

            <Footer />
        </div>
    }
}

#[component]
fn LoginCard(session: RwSignal<Session>, notifications: NotificationManager) -> impl IntoView {
    let (name, set_name) = signal(String::new());

    let attempt_login = move || {
        let entered = name.get_untracked();
        let ok = session
            .try_update(|s| s.login(&entered))
            .unwrap_or(false);
        if ok {
            let username = session.get_untracked().username;
            notifications.success(format!(
                "Welcome, {username}! Let's optimize your schedule."
            ));
        } else {
            notifications.error("Please enter your name to continue");
        }
    };

    view! {
        <div class="max-w-md mx-auto">
            <div class="text-center mb-8">
                <span class="inline-block py-1.5 px-4 rounded-full bg-purple-600/10 text-purple-600 font-medium text-sm mb-4">
                    "Smart Schedule"
                </span>
                <h1 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white">
                    "Your " <span class="purple-text-gradient">"Optimized Day"</span>
                </h1>
                <p class="text-gray-600 dark:text-gray-400 mt-4">
                    "Sign in to see how EmoFlow arranges your tasks around your emotional state."
                </p>
            </div>

            <div class="glass-panel rounded-2xl p-8 shadow-xl">
                <div class="w-14 h-14 rounded-xl purple-gradient flex items-center justify-center text-white mb-6 mx-auto">
                    <Icon name=icons::CALENDAR class="w-6 h-6" />
                </div>

                <FormField
                    label="Your name".to_string()
                    placeholder="Enter your name".to_string()
                    value=name.into()
                    on_input=Callback::new(move |v| set_name.set(v))
                    on_enter=Callback::new(move |_| attempt_login())
                />

                <div class="mt-6">
                    <Button
                        on_click=Callback::new(move |_| attempt_login())
                        class="w-full justify-center".to_string()
                    >
                        "Access My Schedule"
                    </Button>
                </div>

                <p class="text-xs text-gray-400 text-center mt-4">
                    "Demo only. Nothing is stored or sent anywhere."
                </p>
            </div>
        </div>
    }
}

#[component]
fn Dashboard(session: RwSignal<Session>, notifications: NotificationManager) -> impl IntoView {
    let tasks = RwSignal::new(initial_schedule());
    let upcoming = initial_upcoming();
    let profile = RwSignal::new(EmotionProfile::initial());
    let (analyzing, set_analyzing) = signal(false);
    let (active_tab, set_active_tab) = signal("today".to_string());

    let rng = StoredValue::new(SmallRng::from_entropy());

    let analyze = move || {
        if analyzing.get_untracked() {
            return;
        }
        set_analyzing.set(true);

        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            use crate::core::schedule::ANALYZE_DELAY_MS;
            use crate::core::{run_analysis, Toast};

            spawn_local(async move {
                TimeoutFuture::new(ANALYZE_DELAY_MS).await;
                rng.update_value(|rng| {
                    let _ = profile.try_update(|p| {
                        let _ = tasks.try_update(|t| {
                            run_analysis(p, t, rng);
                        });
                    });
                });
                // try_set returns None while the page is still mounted;
                // skip the toast if the user already navigated away
                if set_analyzing.try_set(false).is_none() {
                    notifications.push(
                        Toast::success("Schedule analysis complete").with_description(
                            "We've analyzed your emotional patterns and updated your schedule.",
                        ),
                    );
                }
            });
        }
        #[cfg(feature = "ssr")]
        let _ = (&rng, &notifications);
    };

    let username = move || session.get().username;

    view! {
        <div>
            <div class="flex flex-col lg:flex-row lg:items-end lg:justify-between gap-4 mb-8">
                <div>
                    <span class="inline-block py-1.5 px-4 rounded-full bg-purple-600/10 text-purple-600 font-medium text-sm mb-4">
                        "Smart Schedule"
                    </span>
                    <h1 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white">
                        "Welcome, " <span class="purple-text-gradient">{username}</span>
                    </h1>
                    <p class="text-gray-600 dark:text-gray-400 mt-2">
                        "Here's your emotionally optimized schedule for today."
                    </p>
                </div>

                <Button
                    on_click=Callback::new(move |_| analyze())
                    loading=analyzing
                    icon=icons::ACTIVITY
                >
                    {move || if analyzing.get() { "Analyzing..." } else { "Analyze My Day" }}
                </Button>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6 mb-8">
                <EnergyPanel profile=profile />
                <InsightsPanel profile=profile tasks=tasks />
            </div>

            <div class="glass-panel rounded-2xl p-6 shadow-lg">
                <Tabs
                    tabs=vec![
                        TabItem::new("today", "Today's Schedule"),
                        TabItem::new("upcoming", "Upcoming Tasks"),
                    ]
                    active_tab=active_tab
                    on_change=Callback::new(move |id| set_active_tab.set(id))
                />

                <TabPanel tab_id="today".to_string() active_tab=active_tab>
                    <TodayTable tasks=tasks />
                </TabPanel>
                <TabPanel tab_id="upcoming".to_string() active_tab=active_tab>
                    <UpcomingTable upcoming=upcoming />
                </TabPanel>
            </div>
        </div>
    }
}

/// Focus, creativity, and stress gauges
#[component]
fn EnergyPanel(profile: RwSignal<EmotionProfile>) -> impl IntoView {
    view! {
        <div class="glass-panel rounded-2xl p-6 shadow-lg lg:col-span-2">
            <div class="flex items-center mb-6">
                <div class="w-10 h-10 rounded-lg purple-gradient flex items-center justify-center text-white">
                    <Icon name=icons::ACTIVITY class="w-5 h-5" />
                </div>
                <h2 class="ml-3 text-lg font-semibold text-gray-900 dark:text-white">
                    "Today's Energy Levels"
                </h2>
            </div>

            <div class="space-y-5">
                <Gauge
                    label="Focus"
                    value=Signal::derive(move || profile.get().focus)
                    bar_class="bg-purple-600"
                />
                <Gauge
                    label="Creativity"
                    value=Signal::derive(move || profile.get().creativity)
                    bar_class="bg-fuchsia-500"
                />
                <Gauge
                    label="Stress"
                    value=Signal::derive(move || profile.get().stress)
                    bar_class="bg-amber-500"
                />
            </div>
        </div>
    }
}

#[component]
fn Gauge(label: &'static str, value: Signal<f64>, bar_class: &'static str) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <div class="flex justify-between text-sm">
                <span class="text-gray-600 dark:text-gray-400">{label}</span>
                <span class="font-medium text-gray-800 dark:text-gray-200">
                    {move || format!("{}%", value.get().round() as u32)}
                </span>
            </div>
            <div class="h-2.5 rounded-full bg-gray-200 dark:bg-gray-700 overflow-hidden">
                <div
                    class=format!("h-2.5 rounded-full transition-all duration-700 {}", bar_class)
                    style=move || format!("width: {}%", value.get())
                ></div>
            </div>
        </div>
    }
}

/// Productivity score and completion summary, derived on each render
#[component]
fn InsightsPanel(
    profile: RwSignal<EmotionProfile>,
    tasks: RwSignal<Vec<ScheduleTask>>,
) -> impl IntoView {
    let score = move || profile.get().productivity_score();
    let completed = move || tasks.get().iter().filter(|t| t.completed).count();
    let total = move || tasks.get().len();

    view! {
        <div class="glass-panel rounded-2xl p-6 shadow-lg">
            <div class="flex items-center mb-6">
                <div class="w-10 h-10 rounded-lg purple-gradient flex items-center justify-center text-white">
                    <Icon name=icons::LINE_CHART class="w-5 h-5" />
                </div>
                <h2 class="ml-3 text-lg font-semibold text-gray-900 dark:text-white">
                    "Productivity Insights"
                </h2>
            </div>

            <div class="text-center py-4">
                <div class="text-5xl font-bold purple-text-gradient">{score}</div>
                <p class="text-sm text-gray-500 mt-2">"Productivity score"</p>
            </div>

            <div class="mt-4 pt-4 border-t border-gray-200 dark:border-gray-700 flex items-center justify-between">
                <span class="text-sm text-gray-600 dark:text-gray-400">"Tasks completed"</span>
                <span class="text-sm font-medium text-gray-800 dark:text-gray-200">
                    {move || format!("{} / {}", completed(), total())}
                </span>
            </div>
        </div>
    }
}

#[component]
fn TodayTable(tasks: RwSignal<Vec<ScheduleTask>>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto mt-4">
            <table class="w-full text-left">
                <thead>
                    <tr class="text-xs uppercase tracking-wide text-gray-500 border-b border-gray-200 dark:border-gray-700">
                        <th class="py-3 pr-4">"Status"</th>
                        <th class="py-3 pr-4">"Time"</th>
                        <th class="py-3 pr-4">"Task"</th>
                        <th class="py-3 pr-4">"Optimal State"</th>
                        <th class="py-3">"Priority"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        tasks
                            .get()
                            .into_iter()
                            .map(|task| {
                                let id = task.id;
                                view! {
                                    <tr
                                        class="border-b border-gray-100 dark:border-gray-800 hover:bg-purple-50/50 dark:hover:bg-gray-800/50 cursor-pointer transition-colors"
                                        on:click=move |_| tasks.update(|t| toggle_task(t, id))
                                    >
                                        <td class="py-4 pr-4">
                                            <StatusDot completed=task.completed />
                                        </td>
                                        <td class="py-4 pr-4 text-sm text-gray-600 dark:text-gray-400 whitespace-nowrap">
                                            {task.time}
                                        </td>
                                        <td class=move || {
                                            if task.completed {
                                                "py-4 pr-4 text-sm font-medium text-gray-400 line-through"
                                            } else {
                                                "py-4 pr-4 text-sm font-medium text-gray-800 dark:text-gray-200"
                                            }
                                        }>
                                            {task.task}
                                        </td>
                                        <td class="py-4 pr-4">
                                            <span class="inline-block px-2.5 py-1 rounded-full text-xs bg-purple-600/10 text-purple-600">
                                                {task.emotion_state}
                                            </span>
                                        </td>
                                        <td class="py-4">
                                            <PriorityBadge priority=task.priority />
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <p class="text-xs text-gray-400 mt-3">"Click a row to mark it complete or incomplete."</p>
        </div>
    }
}

#[component]
fn UpcomingTable(upcoming: Vec<UpcomingTask>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto mt-4">
            <table class="w-full text-left">
                <thead>
                    <tr class="text-xs uppercase tracking-wide text-gray-500 border-b border-gray-200 dark:border-gray-700">
                        <th class="py-3 pr-4">"Date"</th>
                        <th class="py-3 pr-4">"Task"</th>
                        <th class="py-3 pr-4">"Optimal State"</th>
                        <th class="py-3">"Priority"</th>
                    </tr>
                </thead>
                <tbody>
                    {upcoming
                        .into_iter()
                        .map(|task| {
                            view! {
                                <tr class="border-b border-gray-100 dark:border-gray-800">
                                    <td class="py-4 pr-4 text-sm text-gray-600 dark:text-gray-400 whitespace-nowrap">
                                        <span class="inline-flex items-center">
                                            <Icon name=icons::CLOCK class="w-4 h-4 mr-2 text-gray-400" />
                                            {task.date}
                                        </span>
                                    </td>
                                    <td class="py-4 pr-4 text-sm font-medium text-gray-800 dark:text-gray-200">
                                        {task.task}
                                    </td>
                                    <td class="py-4 pr-4">
                                        <span class="inline-block px-2.5 py-1 rounded-full text-xs bg-purple-600/10 text-purple-600">
                                            {task.emotion_state}
                                        </span>
                                    </td>
                                    <td class="py-4">
                                        <PriorityBadge priority=task.priority />
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn StatusDot(completed: bool) -> impl IntoView {
    if completed {
        view! {
            <span class="inline-flex w-6 h-6 rounded-full bg-green-100 dark:bg-green-900/40 text-green-600 items-center justify-center">
                <Icon name=icons::CHECK class="w-3.5 h-3.5" />
            </span>
        }
        .into_any()
    } else {
        view! {
            <span class="inline-flex w-6 h-6 rounded-full border-2 border-gray-300 dark:border-gray-600"></span>
        }
        .into_any()
    }
}

#[component]
fn PriorityBadge(priority: Priority) -> impl IntoView {
    let class = match priority {
        Priority::Critical => {
            "inline-block px-2.5 py-1 rounded-full text-xs font-medium bg-red-100 text-red-700 dark:bg-red-900/40 dark:text-red-300"
        }
        Priority::High => {
            "inline-block px-2.5 py-1 rounded-full text-xs font-medium bg-orange-100 text-orange-700 dark:bg-orange-900/40 dark:text-orange-300"
        }
        Priority::Medium => {
            "inline-block px-2.5 py-1 rounded-full text-xs font-medium bg-blue-100 text-blue-700 dark:bg-blue-900/40 dark:text-blue-300"
        }
    };

    view! { <span class=class>{priority.label()}</span> }
}
