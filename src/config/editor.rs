use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What a commit does with the address, DNS and route lists while the
/// effective method is Shared or Disabled.
///
/// Both methods make the lists read-only. Whether their contents survive
/// is a data decision made here rather than by the display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HiddenListPolicy {
    /// Keep the rows' entries in the committed setting.
    #[default]
    Retain,

    /// Commit empty lists. Rows are still validated first.
    Clear,
}

/// Page behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct EditorSettings {
    /// Handling of lists hidden by the Shared and Disabled methods.
    #[serde(default)]
    pub hidden_lists: HiddenListPolicy,
}
