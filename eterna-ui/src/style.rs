//! State -> style descriptors
//!
//! Views never splice class strings from booleans inline. Each piece of
//! conditional styling has a small descriptor type built from the flags that
//! drive it, and views read the descriptor's fields.

/// Viewport width below which the narrow layouts apply
pub const NARROW_BREAKPOINT: f64 = 768.0;

/// Context value overriding [`NARROW_BREAKPOINT`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NarrowBreakpoint(pub f64);

impl Default for NarrowBreakpoint {
    fn default() -> Self {
        Self(NARROW_BREAKPOINT)
    }
}

/// Hero slide layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideStyle {
    pub layer: &'static str,
}

impl SlideStyle {
    pub fn for_active(active: bool) -> Self {
        Self {
            layer: if active {
                "opacity-100"
            } else {
                "opacity-0 pointer-events-none"
            },
        }
    }
}

/// Hero pagination bullet; the current slide's bullet is a wide pill
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BulletStyle {
    pub shape: &'static str,
}

impl BulletStyle {
    pub fn for_active(active: bool) -> Self {
        Self {
            shape: if active {
                "w-8 bg-white"
            } else {
                "w-2 bg-white/50 hover:bg-white/80"
            },
        }
    }

    pub fn class(self) -> String {
        format!("h-2 rounded-full transition-all duration-300 {}", self.shape)
    }
}

/// Split-screen panel: clickable only once it is mostly faded in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelStyle {
    Interactive,
    Inert,
}

impl PanelStyle {
    /// Opacity at which a fading panel starts taking clicks
    pub const INTERACTIVE_FROM: f64 = 0.5;

    pub fn for_opacity(opacity: f64) -> Self {
        if opacity >= Self::INTERACTIVE_FROM {
            PanelStyle::Interactive
        } else {
            PanelStyle::Inert
        }
    }

    pub fn pointer(self) -> &'static str {
        match self {
            PanelStyle::Interactive => "cursor-pointer",
            PanelStyle::Inert => "pointer-events-none",
        }
    }
}

/// Availability filter toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleStyle {
    /// Gradient halo behind the button
    pub glow: &'static str,
    pub button: &'static str,
}

impl ToggleStyle {
    pub fn for_active(active: bool) -> Self {
        if active {
            Self {
                glow: "opacity-75",
                button: "bg-black text-white",
            }
        } else {
            Self {
                glow: "opacity-0",
                button: "bg-black/50 text-white/70 hover:text-white hover:bg-black",
            }
        }
    }
}

/// Unit status line colour
pub fn status_class(available: bool) -> &'static str {
    if available {
        "text-green-400"
    } else {
        "text-red-400"
    }
}

/// Floating nav button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavButtonStyle {
    pub button: &'static str,
    /// Whether the active gradient pill is drawn behind the letter
    pub show_indicator: bool,
}

impl NavButtonStyle {
    pub fn for_active(active: bool) -> Self {
        if active {
            Self {
                button: "bg-gradient-to-r from-purple-600 to-pink-600 text-white",
                show_indicator: true,
            }
        } else {
            Self {
                button: "text-white/70 hover:text-white",
                show_indicator: false,
            }
        }
    }
}

/// Contact form input border
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldStyle {
    Normal,
    Invalid,
}

impl FieldStyle {
    pub fn for_error(has_error: bool) -> Self {
        if has_error {
            FieldStyle::Invalid
        } else {
            FieldStyle::Normal
        }
    }

    pub fn border(self) -> &'static str {
        match self {
            FieldStyle::Normal => "border-gray-700",
            FieldStyle::Invalid => "border-red-500",
        }
    }
}

/// Submit button while a request is or isn't in flight
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitStyle {
    pub label: &'static str,
    pub state: &'static str,
}

impl SubmitStyle {
    pub fn for_sending(sending: bool) -> Self {
        if sending {
            Self {
                label: "Sending...",
                state: "opacity-50 cursor-not-allowed",
            }
        } else {
            Self {
                label: "Send Message",
                state: "",
            }
        }
    }
}

/// Masonry tile height
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileSpan {
    Large,
    Medium,
    Small,
}

impl TileSpan {
    pub fn row_class(self) -> &'static str {
        match self {
            TileSpan::Large => "row-span-2",
            TileSpan::Medium => "row-span-1",
            TileSpan::Small => "",
        }
    }
}

/// Which side the image sits on in a story tile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoryAlign {
    ImageLeft,
    ImageRight,
}

impl StoryAlign {
    pub fn row_class(self) -> &'static str {
        match self {
            StoryAlign::ImageLeft => "md:flex-row",
            StoryAlign::ImageRight => "md:flex-row-reverse",
        }
    }
}

/// Entrance motion for a scroll-revealed block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMotion {
    /// Fade with a short rise
    Rise,
    /// Fade with a long rise
    RiseFar,
    /// Fade sliding in from the right
    SlideLeft,
    /// Fade only
    Fade,
    /// Fade, rise and straighten from a slight tilt
    Tilt,
}

/// Classes for a reveal block before and after it enters the viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub motion: RevealMotion,
    /// Seconds to wait once visible
    pub delay: f64,
}

impl RevealStyle {
    pub fn new(motion: RevealMotion) -> Self {
        Self { motion, delay: 0.0 }
    }

    /// Staggered entrance: `step` seconds per position in a list
    pub fn staggered(motion: RevealMotion, index: usize, step: f64) -> Self {
        Self {
            motion,
            delay: index as f64 * step,
        }
    }

    pub fn class(&self, visible: bool) -> &'static str {
        if visible {
            return "opacity-100 translate-x-0 translate-y-0 rotate-0";
        }
        match self.motion {
            RevealMotion::Rise => "opacity-0 translate-y-5",
            RevealMotion::RiseFar => "opacity-0 translate-y-12",
            RevealMotion::SlideLeft => "opacity-0 translate-x-5",
            RevealMotion::Fade => "opacity-0",
            RevealMotion::Tilt => "opacity-0 translate-y-24 rotate-3",
        }
    }

    pub fn transition_style(&self) -> String {
        format!("transition-delay: {:.2}s;", self.delay)
    }
}

/// How the lightbox presents the open image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxVariant {
    /// Zoomed and draggable within its drag bounds
    Pannable,
    /// Fitted to the viewport
    Contained,
}

impl LightboxVariant {
    pub fn for_width(width: f64, narrow_below: f64) -> Self {
        if width < narrow_below {
            LightboxVariant::Pannable
        } else {
            LightboxVariant::Contained
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_glow_follows_active_flag() {
        assert_eq!(ToggleStyle::for_active(true).glow, "opacity-75");
        assert_eq!(ToggleStyle::for_active(false).glow, "opacity-0");
        assert_ne!(
            ToggleStyle::for_active(true).button,
            ToggleStyle::for_active(false).button
        );
    }

    #[test]
    fn nav_indicator_only_when_active() {
        assert!(NavButtonStyle::for_active(true).show_indicator);
        assert!(!NavButtonStyle::for_active(false).show_indicator);
    }

    #[test]
    fn field_border_marks_errors() {
        assert_eq!(FieldStyle::for_error(true).border(), "border-red-500");
        assert_eq!(FieldStyle::for_error(false).border(), "border-gray-700");
    }

    #[test]
    fn submit_label_while_sending() {
        assert_eq!(SubmitStyle::for_sending(true).label, "Sending...");
        assert_eq!(SubmitStyle::for_sending(false).label, "Send Message");
        assert!(SubmitStyle::for_sending(false).state.is_empty());
    }

    #[test]
    fn lightbox_variant_switches_at_breakpoint() {
        let at = NarrowBreakpoint::default().0;
        assert_eq!(LightboxVariant::for_width(375.0, at), LightboxVariant::Pannable);
        assert_eq!(LightboxVariant::for_width(767.9, at), LightboxVariant::Pannable);
        assert_eq!(LightboxVariant::for_width(768.0, at), LightboxVariant::Contained);
        assert_eq!(LightboxVariant::for_width(1280.0, at), LightboxVariant::Contained);
    }

    #[test]
    fn lightbox_variant_follows_a_custom_breakpoint() {
        assert_eq!(LightboxVariant::for_width(800.0, 1024.0), LightboxVariant::Pannable);
        assert_eq!(LightboxVariant::for_width(1024.0, 1024.0), LightboxVariant::Contained);
    }

    #[test]
    fn only_the_current_slide_is_visible() {
        assert_eq!(SlideStyle::for_active(true).layer, "opacity-100");
        assert!(SlideStyle::for_active(false).layer.contains("pointer-events-none"));
    }

    #[test]
    fn current_bullet_is_wide() {
        assert!(BulletStyle::for_active(true).class().contains("w-8"));
        assert!(BulletStyle::for_active(false).class().contains("w-2"));
        assert!(BulletStyle::for_active(false).class().starts_with("h-2 rounded-full"));
    }

    #[test]
    fn panels_take_clicks_from_half_opacity() {
        assert_eq!(PanelStyle::for_opacity(0.0), PanelStyle::Inert);
        assert_eq!(PanelStyle::for_opacity(0.49), PanelStyle::Inert);
        assert_eq!(PanelStyle::for_opacity(0.5), PanelStyle::Interactive);
        assert_eq!(PanelStyle::for_opacity(1.0).pointer(), "cursor-pointer");
        assert_eq!(PanelStyle::Inert.pointer(), "pointer-events-none");
    }

    #[test]
    fn reveal_delay_staggers_by_index() {
        let style = RevealStyle::staggered(RevealMotion::Rise, 3, 0.1);
        assert_eq!(style.transition_style(), "transition-delay: 0.30s;");
        assert_eq!(style.class(false), "opacity-0 translate-y-5");
        assert!(style.class(true).starts_with("opacity-100"));
    }

    #[test]
    fn status_colour_tracks_availability() {
        assert_eq!(status_class(true), "text-green-400");
        assert_eq!(status_class(false), "text-red-400");
    }
}
