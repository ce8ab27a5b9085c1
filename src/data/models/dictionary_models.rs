use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictEntry {
    pub id: i32,
    pub idkata: String,
    pub lpgkata: String,
    pub lpgdialek: Option<String>,
    pub lpgaksara: Option<String>,
}
