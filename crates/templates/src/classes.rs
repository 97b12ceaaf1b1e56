//! Shared utility-class names used by the generated markup.

/// Scroll-animation class set: a base class plus direction modifiers.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimationClasses {
    pub base: &'static str,
    pub up: &'static str,
    pub down: &'static str,
    pub right: &'static str,
    pub left: &'static str,
    pub scale: &'static str,
    pub active: &'static str,
    pub each: &'static str,
}

/// The fixed utility classes of the development environment.
#[derive(Debug, Clone, Copy)]
pub struct UtilityClasses {
    pub container: &'static str,
    pub pc_only: &'static str,
    pub sp_only: &'static str,
    pub screen_reader_only: &'static str,
    pub skip_link: &'static str,
    pub button: &'static str,
    pub frame_wrapper: &'static str,
    pub scroll_animation: ScrollAnimationClasses,
}

pub const UTILITY_CLASSES: UtilityClasses = UtilityClasses {
    container: "contentInner",
    pc_only: "pcOnly",
    sp_only: "spOnly",
    screen_reader_only: "txtHidden",
    skip_link: "skipLink",
    button: "c_btn",
    frame_wrapper: "frameWrapper",
    scroll_animation: ScrollAnimationClasses {
        base: "scrollIn",
        up: "-up",
        down: "-down",
        right: "-right",
        left: "-left",
        scale: "-scale",
        active: "-active",
        each: "-each",
    },
};

/// Direction modifier for [`scroll_animation_class`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Right,
    Left,
    Scale,
}

impl ScrollDirection {
    const fn modifier(self) -> &'static str {
        let scroll = UTILITY_CLASSES.scroll_animation;
        match self {
            Self::Up => scroll.up,
            Self::Down => scroll.down,
            Self::Right => scroll.right,
            Self::Left => scroll.left,
            Self::Scale => scroll.scale,
        }
    }
}

/// Button class, optionally extended with a custom class.
#[must_use]
pub fn button_class(custom: Option<&str>) -> String {
    match custom {
        Some(custom) => format!("{} {custom}", UTILITY_CLASSES.button),
        None => UTILITY_CLASSES.button.to_string(),
    }
}

/// Scroll-animation class list for a direction, optionally staggered per
/// child element.
#[must_use]
pub fn scroll_animation_class(direction: Option<ScrollDirection>, each: bool) -> String {
    let mut classes = vec![UTILITY_CLASSES.scroll_animation.base];
    if let Some(direction) = direction {
        classes.push(direction.modifier());
    }
    if each {
        classes.push(UTILITY_CLASSES.scroll_animation.each);
    }
    classes.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_class_appends_custom_names() {
        assert_eq!(button_class(None), "c_btn");
        assert_eq!(button_class(Some("hero_cta")), "c_btn hero_cta");
    }

    #[test]
    fn scroll_classes_compose_direction_and_stagger() {
        assert_eq!(scroll_animation_class(None, false), "scrollIn");
        assert_eq!(
            scroll_animation_class(Some(ScrollDirection::Up), true),
            "scrollIn -up -each"
        );
    }
}
