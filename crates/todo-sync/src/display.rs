//! Display Rules
//!
//! Theme and viewport layout. Both just reflect the last event.

/// Viewports narrower than this get the mobile layout
pub const MOBILE_BREAKPOINT_PX: f64 = 375.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Icon for the theme toggle: moon while dark, sun while light
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "/assets/sun-desktop.svg",
            Theme::Dark => "/assets/moon-desktop.svg",
        }
    }

    /// Inline style for the toggle icon; the turn animates between themes
    pub fn toggle_style(self) -> &'static str {
        match self {
            Theme::Light => "transform: rotate(360deg); transition: transform 0.5s ease;",
            Theme::Dark => "transform: rotate(0deg); transition: transform 0.5s ease;",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Mobile,
    Desktop,
}

impl Layout {
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            Layout::Mobile
        } else {
            Layout::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Layout::Mobile
    }

    pub fn background(self) -> &'static str {
        match self {
            Layout::Mobile => "/assets/bg-mobile-img.jpg",
            Layout::Desktop => "/assets/bg-desktop-img.png",
        }
    }

    pub fn logo(self) -> &'static str {
        match self {
            Layout::Mobile => "/assets/todo-logo-mobile.svg",
            Layout::Desktop => "/assets/todo-logo-desktop.svg",
        }
    }

    pub fn delete_icon(self) -> &'static str {
        match self {
            Layout::Mobile => "/assets/del-mobile-icon.svg",
            Layout::Desktop => "/assets/del-desktop-icon.svg",
        }
    }
}
