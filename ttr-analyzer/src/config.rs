use serde::Deserialize;

/// Options of a longest route search.
///
/// # JSON
/// Every field is optional, and defaults to `false`.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "snake_case")]
pub struct SearchConfig {
    /// Whether gray (wild) routes can be used at all.
    /// When disabled, gray colors are ignored as if they were not on the map.
    pub include_wild: bool,
    /// Whether every step of the search is logged. Has no effect on results.
    pub verbose_trace: bool,
    /// Whether the operator must confirm every step of the search.
    /// Handled by the caller, through [`crate::explorer::Explorer::find_longest_route_with`].
    pub interactive_step: bool,
}
