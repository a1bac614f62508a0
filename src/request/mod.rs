//! Reader for patch request files. A request has one field per line, the
//! field name followed by its value for every patch:
//!
//! ```text
//! origin_x 0 8 16
//! origin_y 0 0 0
//! distance_x 3
//! distance_y 3
//! nudges 0 1 0
//! bottom_left_colour red
//! other_colour blue
//! ```
//!
//! Every field except the two origins may give a single value, which is then
//! used for every patch. The number of patches is the longest field.
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::errors::RequestLoadError;
use crate::patch::PatchSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    OriginX,
    OriginY,
    DistanceX,
    DistanceY,
    Nudges,
    BottomLeftColour,
    OtherColour,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::OriginX,
        Field::OriginY,
        Field::DistanceX,
        Field::DistanceY,
        Field::Nudges,
        Field::BottomLeftColour,
        Field::OtherColour,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::OriginX => "origin_x",
            Field::OriginY => "origin_y",
            Field::DistanceX => "distance_x",
            Field::DistanceY => "distance_y",
            Field::Nudges => "nudges",
            Field::BottomLeftColour => "bottom_left_colour",
            Field::OtherColour => "other_colour",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Whether a single value stands in for every patch.
    pub fn broadcasts(&self) -> bool {
        !matches!(self, Field::OriginX | Field::OriginY)
    }
}

#[derive(Debug)]
struct Column {
    /// 1-based line the field was read from.
    line: usize,
    values: Vec<String>,
}

/// The raw field table of a request, before broadcasting.
#[derive(Debug, Default)]
struct FieldTable {
    columns: HashMap<Field, Column>,
}

impl FieldTable {
    fn parse(text: &str) -> FieldTable {
        let mut table = FieldTable::default();
        for (idx, line) in text.lines().enumerate() {
            let mut tokens = line.split_whitespace();
            let Some(name) = tokens.next() else {
                continue;
            };
            let Some(field) = Field::from_name(name) else {
                tracing::warn!(line = idx + 1, field = name, "ignoring unknown request field");
                continue;
            };
            let column = Column {
                line: idx + 1,
                values: tokens.map(|t| t.to_string()).collect(),
            };
            if let Some(previous) = table.columns.insert(field, column) {
                tracing::warn!(
                    field = field.name(),
                    first = previous.line,
                    line = idx + 1,
                    "field given twice, keeping the later line"
                );
            }
        }
        table
    }

    /// Patch count, the longest column.
    fn rows(&self) -> usize {
        self.columns
            .values()
            .map(|c| c.values.len())
            .max()
            .unwrap_or(0)
    }

    /// `rows` values for `field`, repeating a lone value if the field allows it.
    fn expand(&self, field: Field, rows: usize) -> Result<(usize, Vec<&str>), RequestLoadError> {
        let column = self
            .columns
            .get(&field)
            .ok_or(RequestLoadError::MissingField(field.name()))?;
        let values = match column.values.len() {
            len if len == rows => column.values.iter().map(|v| v.as_str()).collect(),
            1 if field.broadcasts() => vec![column.values[0].as_str(); rows],
            found => {
                return Err(RequestLoadError::LengthMismatch {
                    field: field.name(),
                    expected: rows,
                    found,
                    broadcastable: field.broadcasts(),
                })
            }
        };
        Ok((column.line, values))
    }

    fn integers(&self, field: Field, rows: usize) -> Result<Vec<i64>, RequestLoadError> {
        let (line, values) = self.expand(field, rows)?;
        values
            .into_iter()
            .map(|value| {
                value
                    .parse::<i64>()
                    .map_err(|source| RequestLoadError::InvalidInteger {
                        field: field.name(),
                        line,
                        value: value.to_string(),
                        source,
                    })
            })
            .collect()
    }

    fn strings(&self, field: Field, rows: usize) -> Result<Vec<&str>, RequestLoadError> {
        Ok(self.expand(field, rows)?.1)
    }
}

/// A parsed request: one [`PatchSpec`] per patch, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchRequest {
    patches: Vec<PatchSpec>,
}

impl PatchRequest {
    pub fn patches(&self) -> &[PatchSpec] {
        &self.patches
    }

    pub fn into_patches(self) -> Vec<PatchSpec> {
        self.patches
    }

    pub fn from_file(path: &Path) -> Result<PatchRequest, RequestLoadError> {
        let mut reader = std::fs::File::open(path)?;
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        data.parse()
    }
}

impl FromStr for PatchRequest {
    type Err = RequestLoadError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let table = FieldTable::parse(text);
        let rows = table.rows();

        let origin_x = table.integers(Field::OriginX, rows)?;
        let origin_y = table.integers(Field::OriginY, rows)?;
        let distance_x = table.integers(Field::DistanceX, rows)?;
        let distance_y = table.integers(Field::DistanceY, rows)?;
        let nudges = table.integers(Field::Nudges, rows)?;
        let bottom_left = table.strings(Field::BottomLeftColour, rows)?;
        let other = table.strings(Field::OtherColour, rows)?;

        let patches = (0..rows)
            .map(|i| PatchSpec {
                origin: (origin_x[i], origin_y[i]),
                distance: (distance_x[i], distance_y[i]),
                nudge: nudges[i],
                bottom_left_colour: bottom_left[i].to_string(),
                other_colour: other[i].to_string(),
            })
            .collect::<Vec<_>>();
        tracing::debug!(patches = patches.len(), "parsed patch request");
        Ok(PatchRequest { patches })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const THREE: &str = "origin_x 0 8 16\n\
                         origin_y 0 0 4\n\
                         distance_x 3\n\
                         distance_y 3 5 3\n\
                         nudges 0 2 0\n\
                         bottom_left_colour red\n\
                         other_colour blue\n";

    #[test]
    fn test_broadcast() {
        let request: PatchRequest = THREE.parse().unwrap();
        let patches = request.patches();
        assert_eq!(patches.len(), 3);
        assert!(patches.iter().all(|p| p.distance.0 == 3));
        assert!(patches.iter().all(|p| p.bottom_left_colour == "red"));
        assert_eq!(patches[1].origin, (8, 0));
        assert_eq!(patches[2].origin, (16, 4));
        assert_eq!(patches[1].distance, (3, 5));
        assert!(!patches[0].is_nudged());
        assert!(patches[1].is_nudged());
        assert_eq!(patches[1].nudge, 2);
    }

    #[test]
    fn test_field_order_and_blank_lines() {
        let text = "\nother_colour green\n\nbottom_left_colour yellow\n\
                    nudges 1\ndistance_y 2\ndistance_x 4\norigin_y 3\norigin_x -1\n";
        let request: PatchRequest = text.parse().unwrap();
        assert_eq!(
            request.into_patches(),
            vec![PatchSpec::new((-1, 3), (4, 2), true, "yellow", "green")]
        );
    }

    #[test]
    fn test_extreme_distance_is_accepted() {
        let text = THREE.replace("distance_x 3", "distance_x -9223372036854775808");
        let request: PatchRequest = text.parse().unwrap();
        assert!(request.patches().iter().all(|p| p.distance.0 == i64::MIN));
        for patch in request.patches() {
            assert!(crate::patch::layout(patch)
                .iter()
                .all(|d| d.coords().is_empty()));
        }
    }

    #[test]
    fn test_missing_field() {
        let text = THREE.replace("nudges 0 2 0\n", "");
        match text.parse::<PatchRequest>() {
            Err(RequestLoadError::MissingField(field)) => assert_eq!(field, "nudges"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_origin_does_not_broadcast() {
        let text = THREE.replace("origin_y 0 0 4", "origin_y 0");
        match text.parse::<PatchRequest>() {
            Err(RequestLoadError::LengthMismatch {
                field,
                expected,
                found,
                broadcastable,
            }) => {
                assert_eq!((field, expected, found, broadcastable), ("origin_y", 3, 1, false));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_short_broadcastable_field() {
        let text = THREE.replace("distance_y 3 5 3", "distance_y 3 5");
        let err = text.parse::<PatchRequest>().unwrap_err();
        assert_eq!(err.to_string(), "Field 'distance_y' has 2 values, expected 1 or 3");
    }

    #[test]
    fn test_bad_integer() {
        let text = THREE.replace("distance_x 3", "distance_x three");
        let err = text.parse::<PatchRequest>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Line 3: field 'distance_x' expects integers, got 'three'"
        );
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let text = format!("{}label a b c d e\n", THREE);
        let request: PatchRequest = text.parse().unwrap();
        assert_eq!(request.patches().len(), 3);
    }

    #[test]
    fn test_empty_fields() {
        let text = Field::ALL
            .iter()
            .map(|f| f.name().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        let request: PatchRequest = text.parse().unwrap();
        assert!(request.patches().is_empty());
    }

    #[test]
    fn test_field_names() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("origin_z"), None);
        assert!(Field::Nudges.broadcasts());
        assert!(!Field::OriginX.broadcasts());
    }
}
