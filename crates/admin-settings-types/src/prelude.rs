pub use crate::error::{Error, SetResult};
pub use crate::types::{now, SettingField, SettingRecord, Timestamp};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
