mod override_record;

pub use override_record::{non_empty, OverrideKey, OverrideRecord};
