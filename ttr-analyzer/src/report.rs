use crate::error::{AnalyzerError, Result};
use crate::explorer::LongestRoute;
use crate::map::Map;
use crate::record::RouteColors;
use crate::train_color::TrainColor;

use serde::Serialize;
use std::fmt;

/// One route of the longest route, in the direction it was traveled.
#[derive(Debug, PartialEq, Serialize)]
pub struct RouteStep {
    pub from: String,
    pub to: String,
    /// All the colors of the route.
    pub colors: RouteColors,
    pub length: u32,
    /// The color the route was traveled with.
    pub color: TrainColor,
}

/// Human-readable summary of the longest route.
///
/// Printed as a summary line followed by one line per route, or serialized as JSON.
#[derive(Debug, PartialEq, Serialize)]
pub struct RouteReport {
    pub start: String,
    pub end: String,
    /// The color of the whole route. Only gray if every route is gray.
    pub color: TrainColor,
    pub length: u64,
    pub steps: Vec<RouteStep>,
}

impl RouteReport {
    /// Describes `longest_route`, whose traces must come from `map`.
    ///
    /// Fails with [`AnalyzerError::NoRouteFound`] if there is no route to describe.
    pub fn new(map: &Map, longest_route: Option<&LongestRoute>) -> Result<Self> {
        let longest_route = longest_route.ok_or(AnalyzerError::NoRouteFound)?;
        let (first_trace, last_trace) = match (
            longest_route.traces.first(),
            longest_route.traces.last(),
        ) {
            (Some(first_trace), Some(last_trace)) => (first_trace, last_trace),
            _ => return Err(AnalyzerError::NoRouteFound),
        };

        let mut steps = Vec::with_capacity(longest_route.traces.len());
        for route_trace in &longest_route.traces {
            let route = map.route(route_trace.route);
            steps.push(RouteStep {
                from: map.city_name(route_trace.origin).to_owned(),
                to: map
                    .city_name(route.destination(route_trace.origin, map)?)
                    .to_owned(),
                colors: route.colors().clone(),
                length: route.length(),
                color: route_trace.color.clone(),
            });
        }

        // A trailing gray route does not change the color committed to before it.
        let color = if last_trace.color.is_wild() {
            last_trace
                .previous_color
                .clone()
                .unwrap_or(TrainColor::Wild)
        } else {
            last_trace.color.clone()
        };

        let end = steps
            .last()
            .map(|step| step.to.clone())
            .unwrap_or_default();

        Ok(Self {
            start: map.city_name(first_trace.origin).to_owned(),
            end,
            color,
            length: longest_route.length,
            steps,
        })
    }
}

impl fmt::Display for RouteStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let colors: Vec<String> = self.colors.iter().map(ToString::to_string).collect();
        write!(
            f,
            "{} => {}, colors: {}, length: {}, color: {}",
            self.from,
            self.to,
            colors.join(","),
            self.length,
            self.color
        )
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Longest single-color route is {} => {} in {} ({} cars). Trace:",
            self.start, self.end, self.color, self.length
        )?;
        for step in &self.steps {
            write!(f, "\n\t{}", step)?;
        }
        Ok(())
    }
}
