// Closed lookup tables used when presenting events. Unknown keys resolve to a fixed fallback
// instead of failing.

use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum EventIcon {
    #[default]
    Trophy,
    Brain,
    Dices,
    Music,
    Gamepad,
}

impl EventIcon {
    /// Absent or unrecognized names resolve to [`EventIcon::Trophy`].
    pub fn from_name(name: Option<&str>) -> Self {
        name.and_then(|n| n.parse().ok()).unwrap_or_default()
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Trophy => "🏆",
            Self::Brain => "🧠",
            Self::Dices => "🎲",
            Self::Music => "🎵",
            Self::Gamepad => "🎮",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, EnumIter, EnumString)]
pub enum CategoryAccent {
    Sports,
    Academic,
    Strategy,
    Entertainment,
    Gaming,
    #[default]
    #[strum(disabled)]
    Fallback,
}

impl CategoryAccent {
    /// Category labels match case-sensitively; anything else gets [`CategoryAccent::Fallback`].
    pub fn from_category(category: &str) -> Self {
        category.parse().unwrap_or_default()
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::Sports => "bg-gradient-to-br from-red-600 to-orange-600",
            Self::Academic => "bg-gradient-to-br from-orange-600 to-amber-600",
            Self::Strategy => "bg-gradient-to-br from-red-700 to-orange-700",
            Self::Entertainment => "bg-gradient-to-br from-orange-500 to-red-500",
            Self::Gaming => "bg-gradient-to-br from-red-500 to-orange-400",
            Self::Fallback => "bg-red-600",
        }
    }
}
