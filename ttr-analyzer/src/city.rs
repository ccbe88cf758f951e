/// Identifies a city of a [`crate::map::Map`].
///
/// Cities are interned in the order they first appear in the route file,
/// so ids are only meaningful for the map that created them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct CityId(pub(crate) usize);

/// Top-level representation of a connection between two cities.
pub type CityToCity = (CityId, CityId);
