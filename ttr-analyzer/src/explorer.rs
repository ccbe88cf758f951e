//! Exhaustive search of the longest single-color route of a map.
//!
//! Every start city is explored depth-first, with an explicit stack of
//! [`RouteTrace`]s rather than recursion, so long chains of routes cannot
//! overflow the call stack.

use crate::city::CityId;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::map::Map;
use crate::state::{RouteTrace, SearchState};
use crate::train_color::TrainColor;

use tracing::{debug, info, trace};

/// The longest route found so far, copied out of the search.
#[derive(Clone, Debug, PartialEq)]
pub struct LongestRoute {
    /// Sum of the length of every route in `traces`.
    pub length: u64,
    pub traces: Vec<RouteTrace>,
}

/// Searches a [`Map`] for its longest single-color route.
///
/// A route may go through a city multiple times, but may not go through the same
/// route (or one of its parallel routes) twice. All its routes must share one color,
/// except for gray routes when they are enabled: those match any color.
///
/// # Example
/// ```
/// use ttr_analyzer::config::SearchConfig;
/// use ttr_analyzer::explorer::Explorer;
/// use ttr_analyzer::map::Map;
///
/// let map = Map::parse("A B red 1\nB C red 1\nA C blue 1\n").unwrap();
/// let longest_route = Explorer::new(&map, SearchConfig::default())
///     .find_longest_route()
///     .unwrap()
///     .unwrap();
///
/// // A => B => C, in red.
/// assert_eq!(longest_route.length, 2);
/// assert_eq!(longest_route.traces.len(), 2);
/// ```
pub struct Explorer<'a> {
    map: &'a Map,
    config: SearchConfig,
}

impl<'a> Explorer<'a> {
    pub fn new(map: &'a Map, config: SearchConfig) -> Self {
        Self { map, config }
    }

    /// Explores the map from every city, in the order cities appear in the route file.
    ///
    /// Returns `None` if no route can be used at all, e.g. an empty map, or a map of
    /// gray routes when gray is disabled.
    /// When many routes share the longest length, the first one found is kept.
    pub fn find_longest_route(&self) -> Result<Option<LongestRoute>> {
        self.find_longest_route_with(|_| {})
    }

    /// Same as [`Explorer::find_longest_route`], calling `after_step` every time a
    /// trace is pushed, once its candidate next traces are attached to it.
    pub fn find_longest_route_with(
        &self,
        mut after_step: impl FnMut(&SearchState),
    ) -> Result<Option<LongestRoute>> {
        let mut longest_route = None;
        let mut num_steps = 0;

        for start in self.map.cities() {
            num_steps += self.explore_from_city(start, &mut longest_route, &mut after_step)?;
        }

        info!(
            num_cities = self.map.num_cities(),
            num_steps,
            longest_length = longest_route.as_ref().map_or(0, |route: &LongestRoute| route.length),
            "Search complete"
        );
        Ok(longest_route)
    }

    /// Depth-first search from `start`, returning how many traces were pushed.
    fn explore_from_city(
        &self,
        start: CityId,
        longest_route: &mut Option<LongestRoute>,
        after_step: &mut impl FnMut(&SearchState),
    ) -> Result<usize> {
        let mut state = SearchState::new(self.map, start);
        // Initially, no color has been chosen, so every color is a candidate.
        let mut seed_traces = self.next_traces(&state);
        let mut num_steps = 0;

        debug!(
            start = self.map.city_name(start),
            num_seed_traces = seed_traces.len(),
            "Exploring from city"
        );

        loop {
            let next_trace = if state.is_empty() {
                seed_traces.pop()
            } else {
                state.pop_next_trace()
            };

            let current_trace = match next_trace {
                Some(current_trace) => current_trace,
                None if state.is_empty() => break,
                None => {
                    // Dead end, or every trace after the last one was explored.
                    let popped = state.pop();
                    trace!(
                        city = self.map.city_name(state.current_city()),
                        depth = state.depth(),
                        route = ?popped.map(|popped| popped.route),
                        "Backtracking"
                    );
                    continue;
                }
            };

            state.push(current_trace)?;
            num_steps += 1;

            let longest_length = longest_route.as_ref().map_or(0, |route| route.length);
            if state.current_length() > longest_length {
                debug!(
                    start = self.map.city_name(start),
                    end = self.map.city_name(state.current_city()),
                    length = state.current_length(),
                    "Found longer route"
                );
                *longest_route = Some(LongestRoute {
                    length: state.current_length(),
                    traces: state.snapshot(),
                });
            }

            let next_traces = self.next_traces(&state);
            if self.config.verbose_trace {
                self.trace_step(&state, &next_traces);
            }
            state.set_next_traces(next_traces);

            after_step(&state);
        }

        debug_assert!(!state.any_used(), "Routes still used after backtracking");
        debug!(
            start = self.map.city_name(start),
            num_steps,
            longest_length = longest_route.as_ref().map_or(0, |route| route.length),
            "Done exploring from city"
        );
        Ok(num_steps)
    }

    /// Candidate traces from the current city, in route file order, then color order.
    ///
    /// A trace is a candidate if its route is unused and:
    ///  - its color matches the committed color, OR
    ///  - no color has been committed, and its color is not gray, OR
    ///  - its color is gray, and gray is enabled.
    fn next_traces(&self, state: &SearchState) -> Vec<RouteTrace> {
        let city = state.current_city();
        let mut next_traces = Vec::new();

        for &route_id in self.map.routes_from(city) {
            if state.is_used(route_id) {
                continue;
            }

            for color in self.map.route(route_id).colors() {
                if self.is_color_eligible(color, state.current_color()) {
                    next_traces.push(RouteTrace::new(route_id, city, color.clone()));
                }
            }
        }

        next_traces
    }

    fn is_color_eligible(&self, color: &TrainColor, current_color: Option<&TrainColor>) -> bool {
        if color.is_wild() {
            return self.config.include_wild;
        }

        match current_color {
            Some(current_color) => current_color == color,
            None => true,
        }
    }

    fn trace_step(&self, state: &SearchState, next_traces: &[RouteTrace]) {
        let stack: Vec<String> = state
            .traces()
            .iter()
            .map(|route_trace| {
                match self.map.describe_route(route_trace.route, route_trace.origin) {
                    Ok(route) => format!("{} ({})", route, route_trace.color),
                    Err(err) => err.to_string(),
                }
            })
            .collect();

        trace!(
            city = self.map.city_name(state.current_city()),
            color = %state
                .current_color()
                .map_or_else(|| String::from("none"), ToString::to_string),
            length = state.current_length(),
            num_next_traces = next_traces.len(),
            stack = ?stack,
            "Pushed trace"
        );
    }
}
