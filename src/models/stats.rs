use serde::{Deserialize, Serialize};

/// The three numbers shown above the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitStats {
    pub current: u32,
    pub longest: u32,
    pub total: u32,
}
