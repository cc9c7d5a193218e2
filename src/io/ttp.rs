//! Reader for TTP benchmark files.
//!
//! The format is a header of `KEY: value` lines followed by a
//! `NODE_COORD_SECTION` of `index x y` rows and an `ITEMS SECTION` of
//! `index profit weight node` rows. Nodes are 1-based in the file and
//! 0-based in the loaded [`Instance`]. Distances are ceil-rounded Euclidean.
//! Unknown header keys (such as `KNAPSACK DATA TYPE` or `EDGE_WEIGHT_TYPE`)
//! are ignored.
//!
//! ```text
//! PROBLEM NAME:   tiny
//! DIMENSION:  3
//! NUMBER OF ITEMS:    1
//! CAPACITY OF KNAPSACK:   10
//! MIN SPEED:  0.1
//! MAX SPEED:  1
//! RENTING RATIO:  1
//! NODE_COORD_SECTION  (INDEX, X, Y):
//! 1   0   0
//! 2   0   3
//! 3   4   0
//! ITEMS SECTION   (INDEX, PROFIT, WEIGHT, ASSIGNED NODE NUMBER):
//! 1   20  5   3
//! ```

use std::path::Path;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::error::InstanceError;
use crate::models::{City, Instance, Item};

/// Error while reading a TTP file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing header `{0}`")]
    MissingHeader(&'static str),

    #[error("missing section `{0}`")]
    MissingSection(&'static str),

    #[error("line {line}: invalid {field} `{value}`")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("{section} ends after {found} of {expected} rows")]
    Truncated {
        section: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: item node must be 1-based, got {node}")]
    ItemNode { line: usize, node: usize },

    #[error(transparent)]
    Instance(#[from] InstanceError),
}

const COORD_SECTION: &str = "NODE_COORD_SECTION";
const ITEMS_SECTION: &str = "ITEMS SECTION";

#[derive(Default)]
struct Header {
    name: String,
    dimension: Option<usize>,
    num_items: Option<usize>,
    capacity: Option<u64>,
    min_speed: Option<f64>,
    max_speed: Option<f64>,
    renting_ratio: Option<f64>,
}

#[derive(Clone, Copy, PartialEq)]
enum Section {
    Header,
    Coords,
    Items,
}

/// Loads a TTP instance from a file.
///
/// # Errors
///
/// Returns [`ParseError`] if the file cannot be read or is malformed.
pub fn load_ttp(path: impl AsRef<Path>) -> Result<Instance, ParseError> {
    let contents = std::fs::read_to_string(path)?;
    parse_ttp(&contents)
}

/// Parses a TTP instance from text.
///
/// # Examples
///
/// ```
/// use u_ttp::io::parse_ttp;
///
/// let text = "\
/// PROBLEM NAME: tiny
/// DIMENSION: 3
/// NUMBER OF ITEMS: 1
/// CAPACITY OF KNAPSACK: 10
/// MIN SPEED: 0.1
/// MAX SPEED: 1
/// RENTING RATIO: 1
/// NODE_COORD_SECTION (INDEX, X, Y):
/// 1 0 0
/// 2 0 3
/// 3 4 0
/// ITEMS SECTION (INDEX, PROFIT, WEIGHT, ASSIGNED NODE NUMBER):
/// 1 20 5 3
/// ";
/// let instance = parse_ttp(text).unwrap();
/// assert_eq!(instance.name(), "tiny");
/// assert_eq!(instance.dimension(), 3);
/// assert_eq!(instance.items()[0].city(), 2);
/// assert_eq!(instance.distance(1, 2), 5.0);
/// ```
pub fn parse_ttp(text: &str) -> Result<Instance, ParseError> {
    let mut header = Header::default();
    let mut section = Section::Header;
    let mut cities = Vec::new();
    let mut items = Vec::new();
    let mut dimension = 0;
    let mut num_items = 0;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with(COORD_SECTION) {
            dimension = require(header.dimension, "DIMENSION")?;
            num_items = require(header.num_items, "NUMBER OF ITEMS")?;
            section = Section::Coords;
            continue;
        }
        if line.starts_with(ITEMS_SECTION) {
            if section == Section::Header {
                return Err(ParseError::MissingSection(COORD_SECTION));
            }
            section = Section::Items;
            continue;
        }

        match section {
            Section::Header => parse_header_line(&mut header, line, line_no)?,
            Section::Coords if cities.len() < dimension => {
                let mut fields = line.split_whitespace().skip(1);
                let x = field(fields.next(), line_no, "x coordinate")?;
                let y = field(fields.next(), line_no, "y coordinate")?;
                cities.push(City::new(x, y));
            }
            Section::Items if items.len() < num_items => {
                let mut fields = line.split_whitespace().skip(1);
                let profit = field(fields.next(), line_no, "profit")?;
                let weight = field(fields.next(), line_no, "weight")?;
                let node: usize = field(fields.next(), line_no, "node")?;
                if node == 0 {
                    return Err(ParseError::ItemNode { line: line_no, node });
                }
                items.push(Item::new(profit, weight, node - 1));
            }
            Section::Coords | Section::Items => {}
        }
    }

    if section == Section::Header {
        return Err(ParseError::MissingSection(COORD_SECTION));
    }
    if cities.len() < dimension {
        return Err(ParseError::Truncated {
            section: COORD_SECTION,
            expected: dimension,
            found: cities.len(),
        });
    }
    if num_items > 0 && section != Section::Items {
        return Err(ParseError::MissingSection(ITEMS_SECTION));
    }
    if items.len() < num_items {
        return Err(ParseError::Truncated {
            section: ITEMS_SECTION,
            expected: num_items,
            found: items.len(),
        });
    }

    let instance = Instance::from_cities(
        cities,
        items,
        require(header.capacity, "CAPACITY OF KNAPSACK")?,
        require(header.min_speed, "MIN SPEED")?,
        require(header.max_speed, "MAX SPEED")?,
        require(header.renting_ratio, "RENTING RATIO")?,
    )?
    .with_name(header.name);

    debug!(
        event = "instance_loaded",
        name = instance.name(),
        cities = instance.dimension(),
        items = instance.num_items(),
        capacity = instance.capacity()
    );
    Ok(instance)
}

fn parse_header_line(header: &mut Header, line: &str, line_no: usize) -> Result<(), ParseError> {
    let Some((key, value)) = line.split_once(':') else {
        return Ok(());
    };
    let value = value.trim();
    match key.trim() {
        "PROBLEM NAME" => header.name = value.to_string(),
        "DIMENSION" => header.dimension = Some(field(Some(value), line_no, "DIMENSION")?),
        "NUMBER OF ITEMS" => header.num_items = Some(field(Some(value), line_no, "NUMBER OF ITEMS")?),
        "CAPACITY OF KNAPSACK" => {
            header.capacity = Some(field(Some(value), line_no, "CAPACITY OF KNAPSACK")?)
        }
        "MIN SPEED" => header.min_speed = Some(field(Some(value), line_no, "MIN SPEED")?),
        "MAX SPEED" => header.max_speed = Some(field(Some(value), line_no, "MAX SPEED")?),
        "RENTING RATIO" => header.renting_ratio = Some(field(Some(value), line_no, "RENTING RATIO")?),
        _ => {}
    }
    Ok(())
}

fn field<T: FromStr>(token: Option<&str>, line: usize, name: &'static str) -> Result<T, ParseError> {
    let token = token.unwrap_or_default();
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        field: name,
        value: token.to_string(),
    })
}

fn require<T>(value: Option<T>, key: &'static str) -> Result<T, ParseError> {
    value.ok_or(ParseError::MissingHeader(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "PROBLEM NAME:\ta280-TTP
KNAPSACK DATA TYPE:\tbounded strongly corr
DIMENSION:\t4
NUMBER OF ITEMS:\t3
CAPACITY OF KNAPSACK:\t25
MIN SPEED:\t0.1
MAX SPEED:\t1
RENTING RATIO:\t5.61
EDGE_WEIGHT_TYPE:\tCEIL_2D
NODE_COORD_SECTION\t(INDEX, X, Y):
1\t288\t149
2\t288\t129
3\t270\t133
4\t256\t141
ITEMS SECTION\t(INDEX, PROFIT, WEIGHT, ASSIGNED NODE NUMBER):
1\t101\t1\t2
2\t202\t2\t3
3\t303\t3\t4
";

    #[test]
    fn test_parse_sample() {
        let inst = parse_ttp(SAMPLE).expect("valid file");
        assert_eq!(inst.name(), "a280-TTP");
        assert_eq!(inst.dimension(), 4);
        assert_eq!(inst.num_items(), 3);
        assert_eq!(inst.capacity(), 25);
        assert_eq!(inst.min_speed(), 0.1);
        assert_eq!(inst.max_speed(), 1.0);
        assert_eq!(inst.renting_ratio(), 5.61);
        assert_eq!(inst.distance(0, 1), 20.0);
        // sqrt(18^2 + 4^2) = 18.44
        assert_eq!(inst.distance(1, 2), 19.0);
        assert_eq!(inst.items()[0].city(), 1);
        assert_eq!(inst.items()[2].city(), 3);
        assert_eq!(inst.items_at(2), &[1]);
        assert!(inst.items_at(0).is_empty());
    }

    #[test]
    fn test_missing_header() {
        let text = SAMPLE.replace("CAPACITY OF KNAPSACK:\t25\n", "");
        let err = parse_ttp(&text).unwrap_err();
        assert!(matches!(err, ParseError::MissingHeader("CAPACITY OF KNAPSACK")));
    }

    #[test]
    fn test_missing_dimension() {
        let text = SAMPLE.replace("DIMENSION:\t4\n", "");
        let err = parse_ttp(&text).unwrap_err();
        assert!(matches!(err, ParseError::MissingHeader("DIMENSION")));
    }

    #[test]
    fn test_invalid_number() {
        let text = SAMPLE.replace("2\t202\t2\t3", "2\t202\tabc\t3");
        match parse_ttp(&text).unwrap_err() {
            ParseError::InvalidNumber { line, field, value } => {
                assert_eq!(line, 17);
                assert_eq!(field, "weight");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_truncated_items() {
        let text = SAMPLE.replace("3\t303\t3\t4\n", "");
        let err = parse_ttp(&text).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Truncated { section: ITEMS_SECTION, expected: 3, found: 2 }
        ));
    }

    #[test]
    fn test_truncated_coords() {
        let text = SAMPLE.replace("4\t256\t141\n", "");
        let err = parse_ttp(&text).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Truncated { section: COORD_SECTION, expected: 4, found: 3 }
        ));
    }

    #[test]
    fn test_oversized_header_counts() {
        let text = SAMPLE
            .replace("DIMENSION:\t4", "DIMENSION:\t18446744073709551615")
            .replace("NUMBER OF ITEMS:\t3", "NUMBER OF ITEMS:\t18446744073709551615");
        let err = parse_ttp(&text).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Truncated { section: COORD_SECTION, expected: usize::MAX, found: 4 }
        ));
    }

    #[test]
    fn test_negative_renting_ratio() {
        let text = SAMPLE.replace("RENTING RATIO:\t5.61", "RENTING RATIO:\t-1");
        let err = parse_ttp(&text).unwrap_err();
        assert!(matches!(err, ParseError::Instance(InstanceError::InvalidRentingRatio(r)) if r == -1.0));
    }

    #[test]
    fn test_item_node_zero() {
        let text = SAMPLE.replace("1\t101\t1\t2", "1\t101\t1\t0");
        assert!(matches!(parse_ttp(&text).unwrap_err(), ParseError::ItemNode { node: 0, .. }));
    }

    #[test]
    fn test_item_node_out_of_range() {
        let text = SAMPLE.replace("3\t303\t3\t4", "3\t303\t3\t9");
        let err = parse_ttp(&text).unwrap_err();
        assert!(matches!(err, ParseError::Instance(InstanceError::ItemCityOutOfRange { city: 8, .. })));
    }

    #[test]
    fn test_no_sections() {
        let err = parse_ttp("DIMENSION: 3\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingSection(COORD_SECTION)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_ttp("/nonexistent/instance.ttp").unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
