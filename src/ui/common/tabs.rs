use leptos::prelude::*;

/// Tab item definition
#[derive(Clone, PartialEq)]
pub struct TabItem {
    /// Unique identifier for the tab
    pub id: String,
    /// Display label for the tab
    pub label: String,
}

impl TabItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Tabs component for organizing content into switchable panels
#[component]
pub fn Tabs(
    /// List of tab items
    tabs: Vec<TabItem>,
    /// Currently active tab ID
    active_tab: ReadSignal<String>,
    /// Callback when tab is changed
    on_change: Callback<String>,
    /// Whether tabs should take full width
    #[prop(default = false)]
    full_width: bool,
) -> impl IntoView {
    let tabs_class = if full_width {
        "tabs-list tabs-full-width"
    } else {
        "tabs-list"
    };

    view! {
        <div class="tabs-container">
            <div class=tabs_class role="tablist">
                {tabs.into_iter().map(|tab| {
                    let tab_id = tab.id.clone();
                    let is_active = Signal::derive(move || active_tab.get() == tab_id);

                    let tab_class = move || {
                        if is_active.get() {
                            "tab-item tab-active"
                        } else {
                            "tab-item"
                        }
                    };

                    let tab_id_for_click = tab.id.clone();
                    let on_click = move |_| {
                        on_change.run(tab_id_for_click.clone());
                    };

                    view! {
                        <button
                            class=tab_class
                            on:click=on_click
                            role="tab"
                            aria-selected=move || is_active.get()
                            aria-controls=format!("panel-{}", tab.id)
                        >
                            <span class="tab-label">{tab.label}</span>
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Tab panel content component
#[component]
pub fn TabPanel(
    /// Tab ID this panel belongs to
    tab_id: String,
    /// Currently active tab ID
    active_tab: ReadSignal<String>,
    /// Panel content
    children: Children,
) -> impl IntoView {
    let tab_id_for_check = tab_id.clone();
    let is_active = Signal::derive(move || active_tab.get() == tab_id_for_check);

    view! {
        <div
            class="tab-panel"
            role="tabpanel"
            id=format!("panel-{}", tab_id)
            style:display=move || if is_active.get() { "block" } else { "none" }
            aria-hidden=move || !is_active.get()
        >
            {children()}
        </div>
    }
}
