pub mod error;
pub mod preferences;

pub use error::{UserError, UserResult};
pub use preferences::{MAX_RATING, MIN_RATING, Preferences, PreferencesStore, ShoppingItem};
