use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Success,
    Warning,
    Outline,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Inline label for statuses.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// Text for a count badge: `None` hides the badge, anything above `max` reads "max+".
pub fn badge_count(count: usize, max: usize) -> Option<String> {
    match count {
        0 => None,
        n if n > max => Some(format!("{max}+")),
        n => Some(n.to_string()),
    }
}

/// Pill showing a capped count. Renders nothing at zero.
#[component]
pub fn CountBadge(
    count: usize,
    #[props(default = 99)] max: usize,
    #[props(default = BadgeVariant::Secondary)] variant: BadgeVariant,
) -> Element {
    let Some(text) = badge_count(count, max) else {
        return rsx! {};
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            class: "badge badge-count",
            "data-style": variant.class(),
            "aria-label": "{count}",
            "{text}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_are_capped() {
        assert_eq!(badge_count(0, 99), None);
        assert_eq!(badge_count(7, 99), Some("7".to_string()));
        assert_eq!(badge_count(99, 99), Some("99".to_string()));
        assert_eq!(badge_count(150, 99), Some("99+".to_string()));
    }
}
