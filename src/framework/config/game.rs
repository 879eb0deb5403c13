use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::games::dictle::MaskStyle;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub mask: MaskStyle,

    /// Replaces the built-in words, one per line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words_file: Option<PathBuf>,
}
