use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdUser;
use dioxus_free_icons::Icon;
use dioxus_primitives::avatar as prim;

pub use dioxus_primitives::avatar::AvatarState;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AvatarSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl AvatarSize {
    pub fn class(&self) -> &'static str {
        match self {
            AvatarSize::Sm => "sm",
            AvatarSize::Md => "md",
            AvatarSize::Lg => "lg",
        }
    }

    fn glyph_px(&self) -> u32 {
        match self {
            AvatarSize::Sm => 14,
            AvatarSize::Md => 18,
            AvatarSize::Lg => 24,
        }
    }
}

#[component]
pub fn Avatar(mut props: prim::AvatarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar { ..props }
    }
}

#[component]
pub fn AvatarImage(mut props: prim::AvatarImageProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar-image", None, false));

    rsx! {
        prim::AvatarImage { ..props }
    }
}

/// Shown until the image loads, and instead of it when loading fails.
#[component]
pub fn AvatarFallback(mut props: prim::AvatarFallbackProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar-fallback", None, false));

    rsx! {
        prim::AvatarFallback { ..props }
    }
}

/// Up to two uppercase initials from a display name.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let picked: Vec<&str> = match words.as_slice() {
        [] => Vec::new(),
        [only] => vec![only],
        [first, .., last] => vec![first, last],
    };
    picked
        .iter()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Avatar for a person: photo when it loads, otherwise initials, otherwise a glyph.
#[component]
pub fn UserAvatar(
    #[props(default)] src: Option<String>,
    #[props(default)] name: String,
    #[props(default)] size: AvatarSize,
) -> Element {
    let letters = initials(&name);
    let label = if name.trim().is_empty() {
        "User".to_string()
    } else {
        name
    };

    rsx! {
        span {
            class: "avatar-frame",
            "data-size": size.class(),
            Avatar {
                aria_label: label,
                if let Some(src) = src {
                    AvatarImage { src }
                }
                AvatarFallback {
                    if letters.is_empty() {
                        Icon::<LdUser> { icon: LdUser, width: size.glyph_px(), height: size.glyph_px() }
                    } else {
                        "{letters}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn initials_take_first_and_last_word() {
        assert_eq!(initials("ada lovelace"), "AL");
        assert_eq!(initials("Grace Brewster Murray Hopper"), "GH");
        assert_eq!(initials("  Linus  "), "L");
    }

    #[test]
    fn initials_skip_punctuation_and_empty_names() {
        assert_eq!(initials("(anonymous) user"), "AU");
        assert_eq!(initials(""), "");
        assert_eq!(initials("   "), "");
    }
}
