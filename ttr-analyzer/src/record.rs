use crate::train_color::TrainColor;

use smallvec::SmallVec;
use std::str::FromStr;

const NUM_FIELDS: usize = 4;
const COLOR_SEPARATOR: char = ',';

/// Most routes have one color, and double routes have two.
pub type RouteColors = SmallVec<[TrainColor; 2]>;

/// One line of a route file, before cities are interned.
///
/// Lines look like `city1 city2 colorList length`, e.g. `Denver Omaha pink 4`
/// or `Chicago Pittsburgh black,orange 3`.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteRecord {
    pub start: String,
    pub end: String,
    pub colors: RouteColors,
    pub length: u32,
}

impl FromStr for RouteRecord {
    /// Why the line was rejected. Line numbers are added by [`crate::map::Map::parse`].
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: SmallVec<[&str; NUM_FIELDS]> = line.split_whitespace().collect();
        if fields.len() != NUM_FIELDS {
            return Err(format!(
                "expected {} fields, found {}",
                NUM_FIELDS,
                fields.len()
            ));
        }

        let (start, end, colors, length) = (fields[0], fields[1], fields[2], fields[3]);

        if start == end {
            return Err(format!("a route cannot connect {} to itself", start));
        }

        let mut route_colors = RouteColors::new();
        for token in colors.split(COLOR_SEPARATOR) {
            if token.is_empty() {
                return Err(format!("empty color in {:?}", colors));
            }

            // Parsing a color never fails: unknown tokens become custom colors.
            route_colors.push(token.parse().unwrap_or_else(|_| TrainColor::Custom(token.into())));
        }

        let length = match length.parse::<u32>() {
            Ok(length) if length > 0 => length,
            _ => {
                return Err(format!(
                    "length must be a positive integer, found {:?}",
                    length
                ))
            }
        };

        Ok(Self {
            start: String::from(start),
            end: String::from(end),
            colors: route_colors,
            length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    #[test]
    fn parse_single_color_route() {
        assert_eq!(
            "Denver Omaha pink 4".parse::<RouteRecord>(),
            Ok(RouteRecord {
                start: String::from("Denver"),
                end: String::from("Omaha"),
                colors: smallvec![TrainColor::Pink],
                length: 4,
            })
        );
    }

    #[test]
    fn parse_double_route() {
        assert_eq!(
            "Chicago Pittsburgh black,orange 3".parse::<RouteRecord>(),
            Ok(RouteRecord {
                start: String::from("Chicago"),
                end: String::from("Pittsburgh"),
                colors: smallvec![TrainColor::Black, TrainColor::Orange],
                length: 3,
            })
        );
    }

    #[test]
    fn parse_wild_and_custom_colors() {
        let record = "A B gray,gray,teal 2".parse::<RouteRecord>().unwrap();

        let expected_colors: RouteColors = smallvec![
            TrainColor::Wild,
            TrainColor::Wild,
            TrainColor::Custom(Rc::from("teal"))
        ];
        assert_eq!(record.colors, expected_colors);
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace() {
        assert!("  A\tB red 1  ".parse::<RouteRecord>().is_ok());
    }

    #[test]
    fn parse_empty_color_list() {
        assert_eq!(
            "A B  5".parse::<RouteRecord>(),
            Err(String::from("expected 4 fields, found 3"))
        );
    }

    #[test]
    fn parse_too_many_fields() {
        assert_eq!(
            "Salt Lake City Denver red 3".parse::<RouteRecord>(),
            Err(String::from("expected 4 fields, found 6"))
        );
    }

    #[test]
    fn parse_empty_color_token() {
        assert_eq!(
            "A B red,,blue 5".parse::<RouteRecord>(),
            Err(String::from(r#"empty color in "red,,blue""#))
        );
        assert!("A B , 5".parse::<RouteRecord>().is_err());
    }

    #[test]
    fn parse_invalid_lengths() {
        for length in ["0", "-2", "two", "3.5", ""] {
            let line = format!("A B red {}", length);
            assert!(
                line.parse::<RouteRecord>().is_err(),
                "Fails with line={line:?}"
            );
        }
    }

    #[test]
    fn parse_route_to_same_city() {
        assert_eq!(
            "A A red 1".parse::<RouteRecord>(),
            Err(String::from("a route cannot connect A to itself"))
        );
    }
}
