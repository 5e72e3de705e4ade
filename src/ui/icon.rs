use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icon names used across the site
pub mod icons {
    pub const ACTIVITY: &str = "activity";
    pub const BOT: &str = "bot";
    pub const CALENDAR: &str = "calendar";
    pub const CHECK: &str = "check";
    pub const CLOCK: &str = "clock";
    pub const LINE_CHART: &str = "line-chart";
    pub const MENU: &str = "menu";
    pub const MOON: &str = "moon";
    pub const SEND: &str = "send";
    pub const SPINNER: &str = "spinner";
    pub const SUN: &str = "sun";
    pub const X: &str = "x";
}
