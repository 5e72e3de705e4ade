//! Landing page
//!
//! Static marketing composition: hero with parallax orbs, feature grid,
//! how-it-works steps, and use-case cards. Everything here renders fixed
//! literal data; the only client behavior is the scroll reveal and the
//! pointer parallax.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::parallax::ParallaxOrbs;
use crate::ui::reveal::ScrollReveal;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "detection",
        title: "Multi-Sensory Emotion Detection",
        description: "Advanced AI analyzes voice, expressions, and behavior patterns to understand your emotional state and optimize your work experience.",
    },
    Feature {
        icon: "prioritization",
        title: "Smart Task Prioritization",
        description: "Tasks are automatically prioritized based on your current mental state – easier tasks when stressed, challenging ones when focused.",
    },
    Feature {
        icon: "adaptive",
        title: "Adaptive UI",
        description: "Interface elements shift to enhance productivity – minimalist when focused, soothing when stressed, motivational when disengaged.",
    },
    Feature {
        icon: "personalized",
        title: "Personalized Productivity",
        description: "The system learns from your behavior over time to create increasingly tailored productivity recommendations.",
    },
];

struct Step {
    number: &'static str,
    title: &'static str,
    description: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        number: "01",
        title: "Analyze",
        description: "EmoFlow continuously analyzes your voice, facial expressions, and behavior patterns to detect your emotional and mental state in real-time.",
    },
    Step {
        number: "02",
        title: "Prioritize",
        description: "Based on your mental state, EmoFlow intelligently prioritizes tasks, adjusting complexity and pacing to match your current capacity.",
    },
    Step {
        number: "03",
        title: "Optimize",
        description: "The interface adapts to support your productivity – minimalist when focused, calm when stressed, and motivational when energy dips.",
    },
    Step {
        number: "04",
        title: "Learn",
        description: "EmoFlow continuously learns from your interactions, creating a personalized productivity profile for increasingly precise task optimization.",
    },
];

struct UseCase {
    title: &'static str,
    description: &'static str,
}

const USE_CASES: [UseCase; 3] = [
    UseCase {
        title: "Professionals",
        description: "Adapts workflow to your stress levels, prioritizing easier tasks when overwhelmed and complex ones when highly focused.",
    },
    UseCase {
        title: "Students",
        description: "Personalizes study sessions to match focus levels, providing breaks when fatigued and intensifying material when engaged.",
    },
    UseCase {
        title: "Teams",
        description: "Optimizes team productivity by analyzing group dynamics and suggesting task assignments based on emotional readiness.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="EmoFlow | Emotion-Based Productivity Optimizer" />
        <Meta name="description" content="An AI-driven productivity app that adapts in real-time to your emotions, optimizing tasks and workflow based on your current mental state." />

        <div class="min-h-screen bg-white dark:bg-gray-950">
            <Header />
            <main>
                <Hero />
                <FeaturesSection />
                <HowItWorksSection />
            </main>
            <Footer />

            <ScrollReveal />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="relative pt-24 pb-20 md:pt-32 md:pb-24 overflow-hidden">
            <ParallaxOrbs />

            <div class="container mx-auto px-6 md:px-12 relative z-10">
                <div class="text-center max-w-4xl mx-auto">
                    <span class="inline-block py-1.5 px-4 rounded-full bg-purple-600/10 text-purple-600 font-medium text-sm mb-6 fade-in">
                        "Emotion-Based Productivity Optimizer"
                    </span>

                    <h1 class="text-4xl md:text-6xl font-bold mb-6 text-gray-900 dark:text-white slide-up delay-200">
                        <span class="purple-text-gradient">"Work Smarter."</span>
                        <br class="hidden sm:block" />
                        <span>"Feel Better."</span>
                    </h1>

                    <p class="text-lg md:text-xl text-gray-600 dark:text-gray-300 mb-10 max-w-3xl mx-auto slide-up delay-400">
                        "An AI-driven productivity app that adapts in real-time to your emotions, optimizing tasks and workflow based on your current mental state."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center slide-up delay-600">
                        <A
                            href="/schedule"
                            attr:class="w-full sm:w-auto px-8 py-4 rounded-full purple-gradient text-white font-medium shadow-lg hover:shadow-xl transition-all hover:scale-105 active:scale-95 text-center"
                        >
                            "Boost Your Productivity"
                        </A>
                        <a
                            href="#how-it-works"
                            class="w-full sm:w-auto px-8 py-4 rounded-full bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 text-gray-700 dark:text-gray-200 font-medium shadow-sm hover:shadow-md transition-all hover:bg-gray-50 text-center"
                        >
                            "How It Works"
                        </a>
                    </div>
                </div>

                <HeroPreview />
            </div>
        </section>
    }
}

/// Mock "analyzing" panel shown beneath the hero copy
#[component]
fn HeroPreview() -> impl IntoView {
    view! {
        <div class="mt-20 max-w-5xl mx-auto slide-up delay-800">
            <div class="relative">
                <div class="glass-panel rounded-2xl overflow-hidden p-2 shadow-xl">
                    <div class="aspect-[16/9] rounded-xl bg-gradient-to-br from-purple-600/5 to-purple-300/10 flex items-center justify-center">
                        <div class="glass-panel rounded-xl py-6 px-8 max-w-md mx-auto">
                            <div class="flex items-center mb-6">
                                <div class="w-12 h-12 rounded-full purple-gradient flex items-center justify-center shadow-md">
                                    <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                        <path d="M12 2a3 3 0 0 0-3 3v7a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3Z"></path>
                                        <path d="M19 10v2a7 7 0 0 1-14 0v-2"></path>
                                        <line x1="12" x2="12" y1="19" y2="22"></line>
                                    </svg>
                                </div>
                                <div class="ml-4">
                                    <h3 class="font-semibold text-gray-800 dark:text-gray-100">"EmoFlow is analyzing..."</h3>
                                    <p class="text-sm text-gray-500">"Optimizing your workflow"</p>
                                </div>
                            </div>
                            <div class="space-y-3">
                                <div class="h-3 bg-gray-200/50 rounded-full w-full animate-pulse"></div>
                                <div class="h-3 bg-gray-200/50 rounded-full w-4/5 animate-pulse"></div>
                                <div class="h-3 bg-gray-200/50 rounded-full w-3/5 animate-pulse"></div>
                            </div>
                            <div class="mt-6 flex justify-end">
                                <div class="inline-flex rounded-full bg-purple-100 dark:bg-purple-900/40 px-3 py-1 items-center">
                                    <div class="w-2 h-2 rounded-full bg-purple-600 animate-pulse mr-2"></div>
                                    <span class="text-xs font-medium text-purple-600">"Optimizing tasks..."</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                // Decorative elements
                <div class="absolute -right-6 -bottom-6 w-12 h-12 rounded-full purple-gradient animate-float"></div>
                <div class="absolute -left-4 top-1/2 w-8 h-8 rounded-full bg-purple-300/30 animate-float"></div>
            </div>
        </div>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="py-20 px-6 md:px-12 bg-gradient-to-b from-transparent to-purple-50 dark:to-gray-900">
            <div class="container mx-auto">
                <div class="text-center max-w-3xl mx-auto mb-16 reveal-on-scroll">
                    <span class="inline-block py-1.5 px-4 rounded-full bg-purple-600/10 text-purple-600 font-medium text-sm mb-4">
                        "Key Features"
                    </span>
                    <h2 class="text-3xl md:text-4xl font-bold mb-6 text-gray-900 dark:text-white">
                        "Emotion-Powered " <span class="purple-text-gradient">"Productivity"</span>
                    </h2>
                    <p class="text-gray-600 dark:text-gray-400">
                        "EmoFlow combines cutting-edge emotion detection with adaptive task management to create a truly personalized productivity experience."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {FEATURES.iter().map(|feature| {
                        view! {
                            <div class="glass-card rounded-xl p-6 reveal-on-scroll">
                                <div class="w-14 h-14 rounded-xl purple-gradient flex items-center justify-center text-white mb-6">
                                    <FeatureIcon icon=feature.icon />
                                </div>
                                <h3 class="text-xl font-semibold mb-3 text-gray-900 dark:text-white">{feature.title}</h3>
                                <p class="text-gray-600 dark:text-gray-400">{feature.description}</p>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <AnalyticsHighlight />
            </div>
        </section>
    }
}

/// The "Scientifically Optimized" highlight panel with the analytics mockup
#[component]
fn AnalyticsHighlight() -> impl IntoView {
    let metrics: [(&'static str, u32); 4] = [
        ("Focus", 90),
        ("Energy", 75),
        ("Stress Level", 20),
        ("Task Difficulty", 85),
    ];

    view! {
        <div class="mt-16 glass-panel rounded-2xl p-8 reveal-on-scroll bg-white/80 dark:bg-gray-900/80">
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                <div>
                    <span class="inline-block py-1.5 px-4 rounded-full bg-purple-600/10 text-purple-600 font-medium text-sm mb-4">
                        "Scientifically Optimized"
                    </span>
                    <h3 class="text-2xl md:text-3xl font-bold mb-6 text-gray-900 dark:text-white">
                        "Your Emotions, " <span class="purple-text-gradient">"Your Productivity"</span>
                    </h3>
                    <p class="text-gray-600 dark:text-gray-400 mb-6">
                        "EmoFlow learns from your emotional patterns to create increasingly personalized productivity workflows. The more you use it, the better it understands your unique working style."
                    </p>

                    <ul class="space-y-3">
                        {[
                            "Adapts tasks based on your mental state",
                            "Prevents burnout with timely breaks",
                            "Maximizes focus during peak productivity periods",
                        ].into_iter().map(|item| {
                            view! {
                                <li class="flex items-start">
                                    <div class="mt-1 mr-3 w-5 h-5 rounded-full purple-gradient flex items-center justify-center flex-shrink-0">
                                        <svg xmlns="http://www.w3.org/2000/svg" width="12" height="12" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                            <path d="M20 6 9 17l-5-5"></path>
                                        </svg>
                                    </div>
                                    <span class="text-gray-700 dark:text-gray-300">{item}</span>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>

                <div class="relative">
                    <div class="aspect-[4/3] rounded-xl bg-gradient-to-br from-purple-300/10 to-purple-600/20 p-4 shadow-lg">
                        <div class="bg-white dark:bg-gray-900 rounded-lg h-full overflow-hidden">
                            <div class="bg-gray-50 dark:bg-gray-800 py-3 px-4 border-b border-gray-200 dark:border-gray-700 flex items-center justify-between">
                                <div class="flex items-center">
                                    <div class="w-3 h-3 rounded-full bg-purple-600 mr-3"></div>
                                    <span class="text-sm font-medium text-gray-800 dark:text-gray-100">"Productivity Analytics"</span>
                                </div>
                                <div class="flex space-x-2">
                                    <div class="w-2 h-2 rounded-full bg-gray-300"></div>
                                    <div class="w-2 h-2 rounded-full bg-gray-300"></div>
                                    <div class="w-2 h-2 rounded-full bg-gray-300"></div>
                                </div>
                            </div>

                            <div class="p-6">
                                <div class="flex items-center justify-between mb-6">
                                    <div class="text-sm font-medium text-gray-700 dark:text-gray-300">"Current State"</div>
                                    <div class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-green-100 text-green-800">
                                        <span class="w-1.5 h-1.5 rounded-full bg-green-500 mr-1"></span>
                                        "Deep Focus"
                                    </div>
                                </div>

                                <div class="space-y-4">
                                    {metrics.into_iter().map(|(metric, value)| {
                                        view! {
                                            <div class="space-y-1">
                                                <div class="flex justify-between text-xs">
                                                    <span class="text-gray-600 dark:text-gray-400">{metric}</span>
                                                    <span class="text-gray-800 dark:text-gray-200 font-medium">{value}"%"</span>
                                                </div>
                                                <div class="h-2 rounded-full bg-gray-200 dark:bg-gray-700">
                                                    <div
                                                        class="h-2 rounded-full purple-gradient"
                                                        style=format!("width: {}%", value)
                                                    ></div>
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>

                    // Decorative elements
                    <div class="absolute -right-4 -bottom-4 w-12 h-12 rounded-full bg-purple-300 opacity-30 animate-float"></div>
                    <div class="absolute -left-4 top-1/3 w-8 h-8 rounded-full purple-gradient animate-float"></div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn HowItWorksSection() -> impl IntoView {
    view! {
        <section id="how-it-works" class="py-20 px-6 md:px-12">
            <div class="container mx-auto">
                <div class="text-center max-w-3xl mx-auto mb-16 reveal-on-scroll">
                    <span class="inline-block py-1.5 px-4 rounded-full bg-purple-600/10 text-purple-600 font-medium text-sm mb-4">
                        "The Process"
                    </span>
                    <h2 class="text-3xl md:text-4xl font-bold mb-6 text-gray-900 dark:text-white">
                        "How " <span class="purple-text-gradient">"EmoFlow"</span> " Works"
                    </h2>
                    <p class="text-gray-600 dark:text-gray-400">
                        "A seamless four-step process that creates a responsive, emotionally-intelligent productivity system."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8 mb-20">
                    {STEPS.iter().map(|step| {
                        view! {
                            <div class="relative glass-card rounded-xl p-6 reveal-on-scroll">
                                <span class="absolute -top-6 -left-2 text-7xl font-bold text-purple-600/10">
                                    {step.number}
                                </span>
                                <div class="w-14 h-14 rounded-xl purple-gradient flex items-center justify-center text-white mb-6">
                                    <StepIcon number=step.number />
                                </div>
                                <h3 class="text-xl font-semibold mb-3 text-gray-900 dark:text-white">{step.title}</h3>
                                <p class="text-gray-600 dark:text-gray-400">{step.description}</p>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="text-center max-w-3xl mx-auto mb-16 reveal-on-scroll" id="use-cases">
                    <span class="inline-block py-1.5 px-4 rounded-full bg-purple-600/10 text-purple-600 font-medium text-sm mb-4">
                        "Applications"
                    </span>
                    <h2 class="text-3xl md:text-4xl font-bold mb-6 text-gray-900 dark:text-white">
                        "EmoFlow " <span class="purple-text-gradient">"For Everyone"</span>
                    </h2>
                    <p class="text-gray-600 dark:text-gray-400">
                        "Discover how EmoFlow can transform productivity across different domains."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {USE_CASES.iter().map(|use_case| {
                        view! {
                            <div class="glass-card rounded-xl p-8 reveal-on-scroll">
                                <div class="w-14 h-14 rounded-xl purple-gradient flex items-center justify-center text-white mb-6">
                                    <UseCaseIcon title=use_case.title />
                                </div>
                                <h3 class="text-xl font-semibold mb-3 text-gray-900 dark:text-white">{use_case.title}</h3>
                                <p class="text-gray-600 dark:text-gray-400">{use_case.description}</p>
                                <div class="mt-6">
                                    <button class="inline-flex items-center text-purple-600 font-medium hover:text-purple-800 transition-colors">
                                        <span>"Learn more"</span>
                                        <svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="ml-1">
                                            <path d="m9 18 6-6-6-6"></path>
                                        </svg>
                                    </button>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureIcon(icon: &'static str) -> impl IntoView {
    let paths = match icon {
        "detection" => view! {
            <path d="M15 14c.2-1 .7-1.7 1.5-2"></path>
            <path d="M9 12a3 3 0 0 0 0-6 3 3 0 0 0 0 6Z"></path>
            <path d="M17 5.2A2 2 0 0 0 16 5a3 3 0 0 0-2.8 4"></path>
            <path d="M13 19c-3.3-2.2-5-4-5-6 0-.7.4-1.3 1-1.7"></path>
            <path d="M22 19c-3.3-2.2-5-4-5-6 0-3.4 4.3-4 6-2"></path>
            <path d="M3 19c3.3-2.2 5-4 5-6 0-3.4-4.3-4-6-2"></path>
        }.into_any(),
        "prioritization" => view! {
            <path d="M3 3v18h18"></path>
            <path d="m19 9-5 5-4-4-3 3"></path>
        }.into_any(),
        "adaptive" => view! {
            <path d="M12 22c5.523 0 10-4.477 10-10S17.523 2 12 2 2 6.477 2 12s4.477 10 10 10z"></path>
            <path d="m9 12 2 2 4-4"></path>
        }.into_any(),
        _ => view! {
            <path d="M2 12a10 10 0 1 1 20 0 10 10 0 0 1-20 0Z"></path>
            <circle cx="12" cy="12" r="3"></circle>
        }.into_any(),
    };

    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            {paths}
        </svg>
    }
}

#[component]
fn StepIcon(number: &'static str) -> impl IntoView {
    let paths = match number {
        "01" => view! {
            <path d="M9 12a3 3 0 0 0 0-6 3 3 0 0 0 0 6Z"></path>
            <path d="M13 19c-3.3-2.2-5-4-5-6 0-.7.4-1.3 1-1.7"></path>
            <path d="M22 19c-3.3-2.2-5-4-5-6 0-3.4 4.3-4 6-2"></path>
            <path d="M3 19c3.3-2.2 5-4 5-6 0-3.4-4.3-4-6-2"></path>
        }.into_any(),
        "02" => view! {
            <path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"></path>
        }.into_any(),
        "03" => view! {
            <path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z"></path>
        }.into_any(),
        _ => view! {
            <path d="M2 12h5"></path>
            <path d="M9 12h5"></path>
            <path d="M16 12h6"></path>
            <path d="M3 7h2c1 0 1 1 2 1s1-1 2-1h2"></path>
            <path d="M3 17h2c1 0 1-1 2-1s1 1 2 1h2"></path>
            <path d="M17 7h1c1 0 1 1 2 1s1-1 2-1"></path>
            <path d="M17 17h1c1 0 1-1 2-1s1 1 2 1"></path>
        }.into_any(),
    };

    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            {paths}
        </svg>
    }
}

#[component]
fn UseCaseIcon(title: &'static str) -> impl IntoView {
    let paths = match title {
        "Professionals" => view! {
            <path d="m20 9-5-6-5 6"></path>
            <path d="m4 15 5 6 5-6"></path>
            <path d="M4 9h16"></path>
            <path d="M4 15h16"></path>
        }.into_any(),
        "Students" => view! {
            <path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"></path>
            <path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"></path>
        }.into_any(),
        _ => view! {
            <path d="M3 12a9 9 0 1 0 18 0 9 9 0 0 0-18 0"></path>
            <path d="M12 8v8"></path>
            <path d="M8 12h8"></path>
        }.into_any(),
    };

    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            {paths}
        </svg>
    }
}
