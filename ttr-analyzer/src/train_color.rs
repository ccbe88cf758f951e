use serde::Serialize;
use std::fmt;
use std::rc::Rc;
use strum_macros::{EnumString, IntoStaticStr};

/// The token used in route files for routes that can be claimed with any color.
pub const WILD_COLOR_TOKEN: &str = "gray";

/// Represents the color a route can be traveled with.
///
/// The eight colors of the board are recognized by name, and `gray` routes are
/// wild. Any other token is kept verbatim, so custom maps can use their own colors.
///
/// # Example
/// ```
/// use ttr_analyzer::train_color::TrainColor;
///
/// let color: TrainColor = "red".parse().unwrap();
/// assert_eq!(color, TrainColor::Red);
///
/// let color: TrainColor = "gray".parse().unwrap();
/// assert!(color.is_wild());
///
/// let color: TrainColor = "turquoise".parse().unwrap();
/// assert_eq!(color.to_string(), "turquoise");
/// ```
#[derive(Clone, Debug, EnumString, Eq, Hash, IntoStaticStr, PartialEq, Serialize)]
#[serde(into = "String")]
#[strum(serialize_all = "lowercase")]
pub enum TrainColor {
    Black,
    Blue,
    Green,
    Orange,
    Pink,
    Red,
    White,
    Yellow,
    /// Gray routes on the board match with any color.
    #[strum(serialize = "gray")]
    Wild,
    /// A color that is not part of the original board.
    #[strum(default)]
    Custom(Rc<str>),
}

impl TrainColor {
    /// Whether the current color is wild, i.e. matches with any color.
    #[inline]
    pub fn is_wild(&self) -> bool {
        *self == TrainColor::Wild
    }

    /// The opposite of `is_wild`.
    #[inline]
    pub fn is_not_wild(&self) -> bool {
        !self.is_wild()
    }
}

impl fmt::Display for TrainColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainColor::Custom(name) => f.write_str(name),
            color => f.write_str(<&'static str>::from(color)),
        }
    }
}

impl From<TrainColor> for String {
    fn from(color: TrainColor) -> Self {
        color.to_string()
    }
}
