//! Per-provider color themes

/// Colors applied to the accent bars, table header, and total-row
/// highlight of both the PDF and the HTML preview
///
/// Each provider has a fixed palette so their invoices are visually
/// distinct at a glance. Frame, divider, and text colors are shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary accent (bars, table header)
    pub accent: &'static str,
    /// Lighter companion accent (gradients in the preview)
    pub accent2: &'static str,
    /// Title color
    pub heading: &'static str,
    /// Total-row background
    pub highlight: &'static str,
}

impl Theme {
    /// Frame and box outlines
    pub const BORDER: &'static str = "#BFC5CE";
    /// Section dividers
    pub const SOFT_LINE: &'static str = "#C9D1DB";
    /// Body text
    pub const BODY_TEXT: &'static str = "#222222";
    /// De-emphasized text ("Original for Recipient", colons)
    pub const NOTE: &'static str = "#666666";
    /// Signature line
    pub const SIGNATURE_LINE: &'static str = "#cccccc";

    /// Theme for a provider; unknown names fall back to the blue palette
    pub fn for_party(name: &str) -> Self {
        match name {
            "S.N.Geetha" => Self {
                accent: "#81B29A",
                accent2: "#A8D0BC",
                heading: "#3D5A4C",
                highlight: "#EDF7F1",
            },
            "N.RAJENDRAN" => Self {
                accent: "#E0A458",
                accent2: "#EFC98E",
                heading: "#6B4F2A",
                highlight: "#FDF3E3",
            },
            _ => Self::default(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: "#6FA8DC",
            accent2: "#9FC5E8",
            heading: "#42526b",
            highlight: "#EEF5FF",
        }
    }
}
