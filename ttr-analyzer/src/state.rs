//! Mutable state of one exploration of the map, from one start city.

use crate::city::CityId;
use crate::error::Result;
use crate::map::{Map, RouteId};
use crate::train_color::TrainColor;

/// One step of a train route: going through `route` from `origin`, using `color`.
///
/// A trace records everything needed to undo it when backtracking.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteTrace {
    pub route: RouteId,
    /// The city this route was entered from.
    pub origin: CityId,
    /// The color used to go through the route, which may be wild.
    pub color: TrainColor,
    /// The committed color right before this step.
    /// Filled in when the trace is pushed onto a [`SearchState`].
    pub previous_color: Option<TrainColor>,
    /// The candidate traces after this one, once computed.
    /// Candidates are consumed as they get explored, so that backtracking to this
    /// trace resumes with the remaining ones.
    pub next_traces: Option<Vec<RouteTrace>>,
}

impl RouteTrace {
    pub fn new(route: RouteId, origin: CityId, color: TrainColor) -> Self {
        Self {
            route,
            origin,
            color,
            previous_color: None,
            next_traces: None,
        }
    }

    /// Copy of this trace, without its cached continuation.
    fn detached(&self) -> Self {
        Self {
            route: self.route,
            origin: self.origin,
            color: self.color.clone(),
            previous_color: self.previous_color.clone(),
            next_traces: None,
        }
    }
}

/// Where the train is, which color it is locked to, and which routes it went through.
///
/// `push` and `pop` are exact inverses: a route is marked used exactly while a trace
/// on the stack goes through it.
#[derive(Debug)]
pub struct SearchState<'a> {
    map: &'a Map,
    current_city: CityId,
    /// The committed color. Never wild.
    current_color: Option<TrainColor>,
    current_length: u64,
    traces: Vec<RouteTrace>,
    /// Indexed by `RouteId`.
    used: Vec<bool>,
}

impl<'a> SearchState<'a> {
    /// A fresh state at `start`, with no route used and no color committed.
    pub fn new(map: &'a Map, start: CityId) -> Self {
        Self {
            map,
            current_city: start,
            current_color: None,
            current_length: 0,
            traces: Vec::new(),
            used: vec![false; map.num_routes()],
        }
    }

    #[inline]
    pub fn current_city(&self) -> CityId {
        self.current_city
    }

    #[inline]
    pub fn current_color(&self) -> Option<&TrainColor> {
        self.current_color.as_ref()
    }

    #[inline]
    pub fn current_length(&self) -> u64 {
        self.current_length
    }

    #[inline]
    pub fn is_used(&self, route: RouteId) -> bool {
        self.used[route.index()]
    }

    /// Whether any route is currently marked as used.
    pub fn any_used(&self) -> bool {
        self.used.iter().any(|used| *used)
    }

    #[inline]
    pub fn traces(&self) -> &[RouteTrace] {
        &self.traces
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.traces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Goes through the trace's route, from the current city.
    ///
    /// Wild traces never change the committed color.
    /// Fails if the trace's origin is not an end of its route, in which case the
    /// state is left untouched.
    pub fn push(&mut self, mut trace: RouteTrace) -> Result<()> {
        let map = self.map;
        let route = map.route(trace.route);
        let destination = route.destination(trace.origin, map)?;

        trace.previous_color = self.current_color.clone();
        if trace.color.is_not_wild() {
            self.current_color = Some(trace.color.clone());
        }

        self.used[trace.route.index()] = true;
        self.current_length += u64::from(route.length());
        self.current_city = destination;
        self.traces.push(trace);
        Ok(())
    }

    /// Undoes the last trace, if any, and returns it.
    pub fn pop(&mut self) -> Option<RouteTrace> {
        let trace = self.traces.pop()?;

        self.used[trace.route.index()] = false;
        self.current_length -= u64::from(self.map.route(trace.route).length());
        self.current_city = trace.origin;
        self.current_color = trace.previous_color.clone();
        Some(trace)
    }

    /// Attaches the candidate traces following the last trace.
    pub(crate) fn set_next_traces(&mut self, next_traces: Vec<RouteTrace>) {
        if let Some(trace) = self.traces.last_mut() {
            trace.next_traces = Some(next_traces);
        }
    }

    /// Takes the next unexplored candidate following the last trace.
    pub(crate) fn pop_next_trace(&mut self) -> Option<RouteTrace> {
        self.traces
            .last_mut()
            .and_then(|trace| trace.next_traces.as_mut())
            .and_then(Vec::pop)
    }

    /// Deep copy of the current stack of traces, independent of further pushes and pops.
    pub fn snapshot(&self) -> Vec<RouteTrace> {
        self.traces.iter().map(RouteTrace::detached).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::train_color::TrainColor::*;
    use pretty_assertions::assert_eq;

    const ROUTES: &str = "A B red 1\nB C red,gray 2\nC A blue 3\n";

    fn city(map: &Map, name: &str) -> CityId {
        map.city_id(name).unwrap()
    }

    #[test]
    fn new_state() {
        let map = Map::parse(ROUTES).unwrap();
        let state = SearchState::new(&map, city(&map, "B"));

        assert_eq!(state.current_city(), city(&map, "B"));
        assert_eq!(state.current_color(), None);
        assert_eq!(state.current_length(), 0);
        assert!(state.is_empty());
        assert!(!state.any_used());
    }

    #[test]
    fn push_moves_and_commits_color() {
        let map = Map::parse(ROUTES).unwrap();
        let mut state = SearchState::new(&map, city(&map, "A"));

        assert!(state.push(RouteTrace::new(RouteId(0), city(&map, "A"), Red)).is_ok());

        assert_eq!(state.current_city(), city(&map, "B"));
        assert_eq!(state.current_color(), Some(&Red));
        assert_eq!(state.current_length(), 1);
        assert!(state.is_used(RouteId(0)));
        assert!(!state.is_used(RouteId(1)));
        assert_eq!(state.traces()[0].previous_color, None);
    }

    #[test]
    fn wild_push_keeps_committed_color() {
        let map = Map::parse(ROUTES).unwrap();
        let mut state = SearchState::new(&map, city(&map, "C"));

        assert!(state.push(RouteTrace::new(RouteId(1), city(&map, "C"), Wild)).is_ok());
        assert_eq!(state.current_color(), None);

        assert!(state.push(RouteTrace::new(RouteId(0), city(&map, "B"), Red)).is_ok());
        assert_eq!(state.current_color(), Some(&Red));
        assert_eq!(state.current_city(), city(&map, "A"));
        assert_eq!(state.current_length(), 3);
        assert_eq!(state.depth(), 2);
    }

    #[test]
    fn pop_is_inverse_of_push() {
        let map = Map::parse(ROUTES).unwrap();
        let mut state = SearchState::new(&map, city(&map, "A"));
        assert!(state.push(RouteTrace::new(RouteId(0), city(&map, "A"), Red)).is_ok());

        let traces = [
            RouteTrace::new(RouteId(1), city(&map, "B"), Red),
            RouteTrace::new(RouteId(1), city(&map, "B"), Wild),
        ];
        for trace in traces {
            let before = (
                state.current_city(),
                state.current_color().cloned(),
                state.current_length(),
                state.is_used(trace.route),
            );

            assert!(state.push(trace.clone()).is_ok());
            let popped = state.pop().unwrap();

            assert_eq!(popped.route, trace.route);
            assert_eq!(popped.color, trace.color);
            assert_eq!(
                (
                    state.current_city(),
                    state.current_color().cloned(),
                    state.current_length(),
                    state.is_used(trace.route),
                ),
                before
            );
        }
    }

    #[test]
    fn pop_restores_previous_color() {
        let map = Map::parse(ROUTES).unwrap();
        let mut state = SearchState::new(&map, city(&map, "B"));

        assert!(state.push(RouteTrace::new(RouteId(1), city(&map, "B"), Red)).is_ok());
        assert!(state.push(RouteTrace::new(RouteId(2), city(&map, "C"), Blue)).is_ok());
        assert_eq!(state.current_color(), Some(&Blue));
        assert_eq!(state.traces()[1].previous_color, Some(Red));

        state.pop();
        assert_eq!(state.current_color(), Some(&Red));
        assert_eq!(state.current_city(), city(&map, "C"));

        state.pop();
        assert_eq!(state.current_color(), None);
        assert_eq!(state.current_city(), city(&map, "B"));
        assert!(!state.any_used());
    }

    #[test]
    fn pop_empty_state() {
        let map = Map::parse(ROUTES).unwrap();
        let mut state = SearchState::new(&map, city(&map, "A"));

        assert_eq!(state.pop(), None);
        assert_eq!(state.current_city(), city(&map, "A"));
    }

    #[test]
    fn push_from_wrong_city_fails_without_side_effects() {
        let map = Map::parse(ROUTES).unwrap();
        let mut state = SearchState::new(&map, city(&map, "A"));

        assert!(state.push(RouteTrace::new(RouteId(1), city(&map, "A"), Red)).is_err());
        assert!(state.is_empty());
        assert!(!state.any_used());
        assert_eq!(state.current_length(), 0);
        assert_eq!(state.current_color(), None);
    }

    #[test]
    fn next_traces_are_consumed_from_the_end() {
        let map = Map::parse(ROUTES).unwrap();
        let mut state = SearchState::new(&map, city(&map, "A"));
        assert!(state.push(RouteTrace::new(RouteId(0), city(&map, "A"), Red)).is_ok());

        state.set_next_traces(vec![
            RouteTrace::new(RouteId(1), city(&map, "B"), Red),
            RouteTrace::new(RouteId(1), city(&map, "B"), Wild),
        ]);

        assert_eq!(state.pop_next_trace().map(|trace| trace.color), Some(Wild));
        assert_eq!(state.pop_next_trace().map(|trace| trace.color), Some(Red));
        assert_eq!(state.pop_next_trace(), None);
    }

    #[test]
    fn snapshot_is_independent() {
        let map = Map::parse(ROUTES).unwrap();
        let mut state = SearchState::new(&map, city(&map, "A"));
        assert!(state.push(RouteTrace::new(RouteId(0), city(&map, "A"), Red)).is_ok());
        state.set_next_traces(vec![RouteTrace::new(RouteId(1), city(&map, "B"), Red)]);

        let snapshot = state.snapshot();
        state.pop();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].route, RouteId(0));
        assert_eq!(snapshot[0].next_traces, None);
        assert!(state.is_empty());
    }
}
