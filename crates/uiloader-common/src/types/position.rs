use super::token::token_enum;

token_enum! {
    /// Screen anchor for a loader element.
    pub enum Position: "position" {
        TopLeft => "top-left",
        TopCenter => "top-center",
        TopRight => "top-right",
        CenterLeft => "center-left",
        CenterCenter => "center-center",
        CenterRight => "center-right",
        BottomLeft => "bottom-left",
        BottomCenter => "bottom-center",
        BottomRight => "bottom-right",
    }
}

/// Vertical region of a [`Position`], ignoring horizontal alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Top,
    Center,
    Bottom,
}

impl Position {
    pub const fn band(self) -> Band {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => Band::Top,
            Self::CenterLeft | Self::CenterCenter | Self::CenterRight => Band::Center,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => Band::Bottom,
        }
    }
}

token_enum! {
    /// Direction the progress bar fills in.
    pub enum ProgressDirection: "progress bar direction" {
        /// Left to right.
        LeftToRight => "ltr",
        /// Right to left.
        RightToLeft => "rtl",
        /// Top to bottom.
        TopToBottom => "ttb",
        /// Bottom to top.
        BottomToTop => "btt",
    }
}
