use serde::{Deserialize, Serialize};

/// Colour family a widget uses for a badge, card accent or trend arrow.
///
/// The rendering shell maps each tone to its own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Blue,
    Green,
    Orange,
    Purple,
    Red,
    Yellow,
    Gray,
}
