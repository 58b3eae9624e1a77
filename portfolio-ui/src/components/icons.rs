//! Inline SVG line icons.
//!
//! All paths are drawn on a 24x24 grid and rendered as strokes, so a single
//! `d` string can hold several open sub-paths.

use leptos::prelude::*;
use portfolio_core::skill_icon::SkillIcon;

/// Renders an inline SVG icon from a path data string.
///
/// # Props
///
/// * `path` - SVG path data (d attribute)
/// * `size` - Icon size in pixels (default: "20")
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_SEND size="18" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=format!("icon {class}")
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Path for a skill's icon.
pub fn skill_icon_path(icon: SkillIcon) -> &'static str {
    match icon {
        SkillIcon::Code => ICON_CODE,
        SkillIcon::Terminal => ICON_TERMINAL,
        SkillIcon::Cloud => ICON_CLOUD,
        SkillIcon::Package => ICON_PACKAGE,
        SkillIcon::Database => ICON_DATABASE,
        SkillIcon::Layout => ICON_LAYOUT,
        SkillIcon::Layers => ICON_LAYERS,
    }
}

// =============================================================================
// Skill icons
// =============================================================================

/// Angle brackets
pub const ICON_CODE: &str = "M16 18l6-6-6-6M8 6l-6 6 6 6";

/// Prompt with cursor
pub const ICON_TERMINAL: &str = "M4 17l6-6-6-6M12 19h8";

/// Cloud outline
pub const ICON_CLOUD: &str = "M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z";

/// Isometric box
pub const ICON_PACKAGE: &str = "M21 8l-9-5-9 5v8l9 5 9-5V8ZM3 8l9 5 9-5M12 13v8";

/// Stacked cylinder
pub const ICON_DATABASE: &str = "M4 6c0-1.66 3.58-3 8-3s8 1.34 8 3-3.58 3-8 3-8-1.34-8-3ZM4 6v12c0 1.66 3.58 3 8 3s8-1.34 8-3V6M4 12c0 1.66 3.58 3 8 3s8-1.34 8-3";

/// Page wireframe
pub const ICON_LAYOUT: &str = "M3 3h18v18H3ZM3 9h18M9 21V9";

/// Three stacked sheets (default)
pub const ICON_LAYERS: &str = "M12 2 2 7l10 5 10-5-10-5ZM2 17l10 5 10-5M2 12l10 5 10-5";

// =============================================================================
// Interface icons
// =============================================================================

/// Octocat outline
pub const ICON_GITHUB: &str = "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22";

/// LinkedIn glyph
pub const ICON_LINKEDIN: &str = "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6ZM2 9h4v12H2ZM4 2a2 2 0 1 1 0 4 2 2 0 0 1 0-4Z";

/// Bird glyph
pub const ICON_TWITTER: &str = "M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3Z";

/// Envelope
pub const ICON_MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2ZM22 6l-10 7L2 6";

/// Box with outgoing arrow
pub const ICON_EXTERNAL: &str = "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6M15 3h6v6M10 14 21 3";

/// Diagonal arrow
pub const ICON_ARROW_UP_RIGHT: &str = "M7 17 17 7M7 7h10v10";

/// Briefcase
pub const ICON_BRIEFCASE: &str = "M4 7h16a1 1 0 0 1 1 1v11a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V8a1 1 0 0 1 1-1ZM16 7V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v2";

/// Paper plane
pub const ICON_SEND: &str = "M22 2 11 13M22 2l-7 20-4-9-9-4 20-7Z";

/// Open arc, spun with CSS
pub const ICON_LOADER: &str = "M21 12a9 9 0 1 1-6.22-8.56";

/// Chip
pub const ICON_CPU: &str = "M6 6h12v12H6ZM9 9h6v6H9ZM9 1v3M15 1v3M9 20v3M15 20v3M20 9h3M20 14h3M1 9h3M1 14h3";

/// Play button in a circle
pub const ICON_PLAY: &str = "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20ZM10 8l6 4-6 4V8Z";

/// Close cross
pub const ICON_X: &str = "M18 6 6 18M6 6l12 12";

/// Hamburger
pub const ICON_MENU: &str = "M4 6h16M4 12h16M4 18h16";

/// House
pub const ICON_HOME: &str = "M3 10l9-7 9 7v11H3ZM9 21v-7h6v7";

/// Folder
pub const ICON_FOLDER: &str = "M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2Z";

/// Warning triangle
pub const ICON_ALERT: &str = "M10.29 3.86 1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0ZM12 9v4M12 17h.01";
