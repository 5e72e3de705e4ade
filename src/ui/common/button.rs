use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Ghost,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler
    on_click: Callback<()>,
    /// Whether button is disabled
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Whether button is in loading state (also disables it)
    #[prop(optional, into)]
    loading: Signal<bool>,
    /// Button content (text or elements)
    children: Children,
    /// Optional icon name to show before text
    #[prop(optional, into)]
    icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let base_classes = format!("btn-base {} {}", variant.class(), size.class());
    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    view! {
        <button
            class=full_classes
            on:click=move |_| {
                if !loading.get() {
                    on_click.run(())
                }
            }
            disabled=move || disabled.get() || loading.get()
        >
            {move || if loading.get() {
                view! {
                    <span class="btn-spinner">
                        <Icon name=icons::SPINNER class="icon-spin w-4 h-4"/>
                    </span>
                }.into_any()
            } else if let Some(icon_name) = icon {
                view! {
                    <Icon name=icon_name class="w-4 h-4 mr-2"/>
                }.into_any()
            } else {
                ().into_any()
            }}
            {children()}
        </button>
    }
}
