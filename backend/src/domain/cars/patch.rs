//! JSON Patch documents applied to the editable car projection.
//!
//! Only the three members of [`SaveCar`] are addressable. Paths are single
//! JSON Pointer segments; the segment is matched without regard to case.

use serde::Deserialize;
use serde_json::Value;

use super::SaveCar;

/// One patch operation, tagged by its `op` member.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Move { from: String, path: String },
    Copy { from: String, path: String },
    Test { path: String, value: Value },
}

/// Ordered list of patch operations.
///
/// # Examples
/// ```
/// use cars_backend::domain::{PatchDocument, SaveCar};
///
/// let patch: PatchDocument = serde_json::from_str(
///     r#"[{"op":"replace","path":"/model","value":"Accord"}]"#,
/// )
/// .expect("valid patch");
/// let patched = patch
///     .apply(&SaveCar::new(6, "Honda", "Civic"))
///     .expect("patch applies");
/// assert_eq!(patched, SaveCar::new(6, "Honda", "Accord"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PatchDocument(Vec<PatchOperation>);

/// Reasons a patch document cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    #[error("patch document contains no operations")]
    EmptyDocument,
    #[error("operation {index}: path `{path}` does not name a car field")]
    UnknownPath { index: usize, path: String },
    #[error("operation {index}: `{path}` expects {expected}")]
    TypeMismatch {
        index: usize,
        path: String,
        expected: &'static str,
    },
    #[error("operation {index}: test against `{path}` failed")]
    TestFailed { index: usize, path: String },
}

impl PatchError {
    /// Position of the failing operation, when one is to blame.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::EmptyDocument => None,
            Self::UnknownPath { index, .. }
            | Self::TypeMismatch { index, .. }
            | Self::TestFailed { index, .. } => Some(*index),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Cylinders,
    Make,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Member {
    Number(i64),
    Text(String),
}

impl Field {
    fn parse(index: usize, path: &str) -> Result<Self, PatchError> {
        let unknown = || PatchError::UnknownPath {
            index,
            path: path.to_owned(),
        };
        let segment = path.strip_prefix('/').ok_or_else(unknown)?;
        if segment.contains('/') {
            return Err(unknown());
        }
        let segment = segment.replace("~1", "/").replace("~0", "~");
        match segment.to_ascii_lowercase().as_str() {
            "cylinders" => Ok(Self::Cylinders),
            "make" => Ok(Self::Make),
            "model" => Ok(Self::Model),
            _ => Err(unknown()),
        }
    }

    fn expected(self) -> &'static str {
        match self {
            Self::Cylinders => "an integer",
            Self::Make | Self::Model => "a string",
        }
    }

    fn get(self, car: &SaveCar) -> Member {
        match self {
            Self::Cylinders => Member::Number(car.cylinders),
            Self::Make => Member::Text(car.make.clone()),
            Self::Model => Member::Text(car.model.clone()),
        }
    }

    fn decode(self, value: &Value) -> Option<Member> {
        match self {
            Self::Cylinders => value.as_i64().map(Member::Number),
            Self::Make | Self::Model => value.as_str().map(|s| Member::Text(s.to_owned())),
        }
    }

    fn set(self, car: SaveCar, member: Member) -> Option<SaveCar> {
        match (self, member) {
            (Self::Cylinders, Member::Number(cylinders)) => Some(SaveCar { cylinders, ..car }),
            (Self::Make, Member::Text(make)) => Some(SaveCar { make, ..car }),
            (Self::Model, Member::Text(model)) => Some(SaveCar { model, ..car }),
            _ => None,
        }
    }

    fn reset(self, car: SaveCar) -> SaveCar {
        let blank = SaveCar::default();
        match self {
            Self::Cylinders => SaveCar {
                cylinders: blank.cylinders,
                ..car
            },
            Self::Make => SaveCar {
                make: blank.make,
                ..car
            },
            Self::Model => SaveCar {
                model: blank.model,
                ..car
            },
        }
    }
}

impl PatchOperation {
    fn apply(&self, index: usize, car: SaveCar) -> Result<SaveCar, PatchError> {
        let mismatch = |field: Field, path: &str| PatchError::TypeMismatch {
            index,
            path: path.to_owned(),
            expected: field.expected(),
        };

        match self {
            Self::Add { path, value } | Self::Replace { path, value } => {
                let field = Field::parse(index, path)?;
                let member = field.decode(value).ok_or_else(|| mismatch(field, path))?;
                field.set(car, member).ok_or_else(|| mismatch(field, path))
            }
            Self::Remove { path } => Ok(Field::parse(index, path)?.reset(car)),
            Self::Move { from, path } => {
                let source = Field::parse(index, from)?;
                let target = Field::parse(index, path)?;
                if source == target {
                    return Ok(car);
                }
                let member = source.get(&car);
                let moved = target
                    .set(car, member)
                    .ok_or_else(|| mismatch(target, path))?;
                Ok(source.reset(moved))
            }
            Self::Copy { from, path } => {
                let source = Field::parse(index, from)?;
                let target = Field::parse(index, path)?;
                let member = source.get(&car);
                target.set(car, member).ok_or_else(|| mismatch(target, path))
            }
            Self::Test { path, value } => {
                let field = Field::parse(index, path)?;
                if field.decode(value) == Some(field.get(&car)) {
                    Ok(car)
                } else {
                    Err(PatchError::TestFailed {
                        index,
                        path: path.clone(),
                    })
                }
            }
        }
    }
}

impl PatchDocument {
    /// Wrap an ordered list of operations.
    #[must_use]
    pub fn new(operations: Vec<PatchOperation>) -> Self {
        Self(operations)
    }

    /// Apply every operation in order, returning the patched projection.
    ///
    /// `target` is never modified; a failure part-way through discards the
    /// intermediate result.
    ///
    /// # Errors
    /// Returns [`PatchError`] for an empty document, an unknown path, a value
    /// of the wrong type, or a failed `test` operation.
    pub fn apply(&self, target: &SaveCar) -> Result<SaveCar, PatchError> {
        if self.0.is_empty() {
            return Err(PatchError::EmptyDocument);
        }
        self.0
            .iter()
            .enumerate()
            .try_fold(target.clone(), |car, (index, op)| op.apply(index, car))
    }
}
