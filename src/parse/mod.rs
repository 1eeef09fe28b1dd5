pub mod names_codec;
pub mod settings_codec;
pub mod states_codec;

pub use names_codec::{NAMES_FILE_LEN, parse_names, serialize_names};
pub use settings_codec::{SETTINGS_FILE_LEN, parse_settings, serialize_settings};
pub use states_codec::{STATES_FILE_LEN, parse_states, serialize_states};
