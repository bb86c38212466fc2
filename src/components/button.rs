//! Button Component
//!
//! Styled button with a small set of visual variants.

use leptos::prelude::*;

/// Visual style of a [`Button`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    /// Destructive actions (deletes)
    Danger,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    /// Extra CSS classes appended to the variant classes
    #[prop(into, optional)]
    extra_class: String,
    #[prop(into)] on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    let class = if extra_class.is_empty() {
        variant.class().to_string()
    } else {
        format!("{} {}", variant.class(), extra_class)
    };

    view! {
        <button
            type="button"
            class=class
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_classes() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonVariant::Danger.class(), "btn btn-danger");
        assert_eq!(ButtonVariant::Secondary.class(), "btn btn-secondary");
    }
}
