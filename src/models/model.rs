use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Candidate parametric family.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Model {
    Normal,
    Laplace,
}

impl Model {
    /// The competing family.
    pub fn rival(self) -> Model {
        match self {
            Model::Normal => Model::Laplace,
            Model::Laplace => Model::Normal,
        }
    }
}

/// Outcome of comparing the two families under one criterion.
///
/// Exact ties are reported as `Draw` rather than falling through to either
/// family; with floating-point lengths they are rare but must not be
/// misattributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Normal,
    Laplace,
    Draw,
}

impl Winner {
    /// The winning family, if the comparison was not a draw.
    pub fn model(self) -> Option<Model> {
        match self {
            Winner::Normal => Some(Model::Normal),
            Winner::Laplace => Some(Model::Laplace),
            Winner::Draw => None,
        }
    }
}

impl From<Model> for Winner {
    fn from(model: Model) -> Self {
        match model {
            Model::Normal => Winner::Normal,
            Model::Laplace => Winner::Laplace,
        }
    }
}
