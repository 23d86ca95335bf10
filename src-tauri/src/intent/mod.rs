pub mod classifier;
#[cfg(feature = "desktop")]
pub(crate) mod commands;
pub mod recipient;
pub mod rules;

pub use classifier::{IntentClassifier, IntentMatch};
pub use recipient::extract_recipient;
pub use rules::{IntentRule, RULES};
