//! General application configuration.

use kanban_core::TaskType;
use serde::{Deserialize, Serialize};

const fn default_type() -> TaskType {
    TaskType::Task
}

const fn default_record_history() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Type preset for `kanban create` when `--type` is omitted.
    #[serde(default = "default_type")]
    pub default_type: TaskType,

    /// Whether `kanban edit` appends a history entry describing the change.
    #[serde(default = "default_record_history")]
    pub record_history: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_type: default_type(),
            record_history: default_record_history(),
        }
    }
}
