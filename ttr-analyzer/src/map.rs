use crate::city::{CityId, CityToCity};
use crate::error::{AnalyzerError, Result};
use crate::record::{RouteColors, RouteRecord};

use smallvec::SmallVec;
use std::collections::HashMap;
use tracing::debug;

// Helena has the highest number of neighbors on the US map, which is 7 adjacent cities.
const MAX_ROUTES_PER_CITY: usize = 7;

/// Identifies a route of a [`Map`], by its position in the route file.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct RouteId(pub(crate) usize);

impl RouteId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A route between two cities.
///
/// "Parallel" routes between the same two cities are a single `Route` with one
/// color per parallel route: once a train goes through one of them, the route is used.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    endpoints: CityToCity,
    /// The colors this route can be traveled with.
    /// The `Wild` color means that any color matches.
    colors: RouteColors,
    /// The distance between two cities. This is analogous to the number of train cards needed to claim the route.
    length: u32,
}

impl Route {
    #[inline]
    pub fn endpoints(&self) -> CityToCity {
        self.endpoints
    }

    #[inline]
    pub fn colors(&self) -> &RouteColors {
        &self.colors
    }

    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// The city reached when leaving `origin` through this route.
    ///
    /// Fails if `origin` is not one of the route's ends.
    pub fn destination(&self, origin: CityId, map: &Map) -> Result<CityId> {
        let (start, end) = self.endpoints;
        if origin == start {
            Ok(end)
        } else if origin == end {
            Ok(start)
        } else {
            Err(AnalyzerError::InvalidEndpoint {
                city: map.city_name(origin).to_owned(),
                route: format!("{} <=> {}", map.city_name(start), map.city_name(end)),
            })
        }
    }
}

/// The route network: every route, and the routes adjacent to every city.
///
/// Built once, and never mutated afterwards. The search keeps track of used routes
/// on its own, in [`crate::state::SearchState`].
#[derive(Debug, Default)]
pub struct Map {
    routes: Vec<Route>,
    /// City names, indexed by `CityId`.
    city_names: Vec<String>,
    city_ids: HashMap<String, CityId>,
    /// Routes adjacent to each city, indexed by `CityId`, in the order they were added.
    routes_by_city: Vec<SmallVec<[RouteId; MAX_ROUTES_PER_CITY]>>,
}

impl Map {
    /// Loads a route file, one route per line. Blank lines are ignored.
    ///
    /// Any malformed line fails the whole load.
    ///
    /// # Example
    /// ```
    /// use ttr_analyzer::map::Map;
    ///
    /// let map = Map::parse("A B red 1\nB C red,blue 2\n").unwrap();
    /// assert_eq!(map.num_cities(), 3);
    /// assert_eq!(map.num_routes(), 2);
    ///
    /// assert!(Map::parse("A B  5").is_err());
    /// ```
    pub fn parse(routes: &str) -> Result<Self> {
        let mut records = Vec::new();

        for (index, line) in routes.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let record = line
                .parse::<RouteRecord>()
                .map_err(|reason| AnalyzerError::MalformedRecord {
                    line_number: index + 1,
                    line: String::from(line),
                    reason,
                })?;
            records.push(record);
        }

        Ok(Self::from_records(records))
    }

    /// Builds the map from already parsed records, preserving their order.
    pub fn from_records(records: impl IntoIterator<Item = RouteRecord>) -> Self {
        let mut map = Self::default();

        for record in records {
            let start = map.intern_city(&record.start);
            let end = map.intern_city(&record.end);
            let route_id = RouteId(map.routes.len());

            map.routes.push(Route {
                endpoints: (start, end),
                colors: record.colors,
                length: record.length,
            });
            map.routes_by_city[start.0].push(route_id);
            map.routes_by_city[end.0].push(route_id);
        }

        debug!(
            num_cities = map.num_cities(),
            num_routes = map.num_routes(),
            total_length = map
                .routes()
                .map(|(_, route)| u64::from(route.length()))
                .sum::<u64>(),
            "Loaded route map"
        );
        map
    }

    fn intern_city(&mut self, name: &str) -> CityId {
        if let Some(city) = self.city_ids.get(name) {
            return *city;
        }

        let city = CityId(self.city_names.len());
        self.city_names.push(String::from(name));
        self.city_ids.insert(String::from(name), city);
        self.routes_by_city.push(SmallVec::new());
        city
    }

    /// All cities, in the order they first appear in the route file.
    pub fn cities(&self) -> impl Iterator<Item = CityId> + '_ {
        (0..self.city_names.len()).map(CityId)
    }

    /// # Panics
    /// Panics if `city` does not belong to this map.
    #[inline]
    pub fn city_name(&self, city: CityId) -> &str {
        &self.city_names[city.0]
    }

    pub fn city_id(&self, name: &str) -> Option<CityId> {
        self.city_ids.get(name).copied()
    }

    /// All routes, in the order they appear in the route file.
    pub fn routes(&self) -> impl Iterator<Item = (RouteId, &Route)> + '_ {
        self.routes
            .iter()
            .enumerate()
            .map(|(index, route)| (RouteId(index), route))
    }

    #[inline]
    pub fn route(&self, route: RouteId) -> &Route {
        &self.routes[route.0]
    }

    /// Routes adjacent to `city`, in the order they appear in the route file.
    #[inline]
    pub fn routes_from(&self, city: CityId) -> &[RouteId] {
        &self.routes_by_city[city.0]
    }

    #[inline]
    pub fn num_cities(&self) -> usize {
        self.city_names.len()
    }

    #[inline]
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Human-readable route, e.g. `Denver => Omaha`, when traveled from `origin`.
    pub fn describe_route(&self, route: RouteId, origin: CityId) -> Result<String> {
        let destination = self.route(route).destination(origin, self)?;
        Ok(format!(
            "{} => {}",
            self.city_name(origin),
            self.city_name(destination)
        ))
    }
}
