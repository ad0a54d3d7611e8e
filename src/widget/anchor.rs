//! Anchor points for element positioning.

/// Which corner, edge or center of the parent box an element's authored
/// offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
    Center,
    Top,
    Bottom,
    Left,
    Right,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Self::BottomLeft,
        Self::BottomRight,
        Self::TopLeft,
        Self::TopRight,
        Self::Center,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
    ];

    /// Parse an anchor name. Accepts `BOTTOMLEFT`, `BOTTOM_LEFT` and any casing.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().replace('_', "").as_str() {
            "BOTTOMLEFT" => Some(Self::BottomLeft),
            "BOTTOMRIGHT" => Some(Self::BottomRight),
            "TOPLEFT" => Some(Self::TopLeft),
            "TOPRIGHT" => Some(Self::TopRight),
            "CENTER" => Some(Self::Center),
            "TOP" => Some(Self::Top),
            "BOTTOM" => Some(Self::Bottom),
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BottomLeft => "BOTTOMLEFT",
            Self::BottomRight => "BOTTOMRIGHT",
            Self::TopLeft => "TOPLEFT",
            Self::TopRight => "TOPRIGHT",
            Self::Center => "CENTER",
            Self::Top => "TOP",
            Self::Bottom => "BOTTOM",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for anchor in Anchor::ALL {
            assert_eq!(Anchor::from_str(anchor.as_str()), Some(anchor));
        }
    }

    #[test]
    fn accepts_underscored_and_lowercase() {
        assert_eq!(Anchor::from_str("top_right"), Some(Anchor::TopRight));
        assert_eq!(Anchor::from_str("Center"), Some(Anchor::Center));
        assert_eq!(Anchor::from_str("MIDDLE"), None);
    }
}
