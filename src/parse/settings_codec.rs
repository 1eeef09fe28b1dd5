use crate::model::cycle::CycleLength;

/// settings.dat is a single native-endian i32
pub const SETTINGS_FILE_LEN: usize = std::mem::size_of::<i32>();

/// Decode settings.dat. Short input or an unknown value yields the default.
pub fn parse_settings(bytes: &[u8]) -> CycleLength {
    match bytes.get(..SETTINGS_FILE_LEN) {
        Some(raw) => {
            let mut buf = [0u8; SETTINGS_FILE_LEN];
            buf.copy_from_slice(raw);
            CycleLength::from_raw(i32::from_ne_bytes(buf))
        }
        None => CycleLength::default(),
    }
}

pub fn serialize_settings(cycle: CycleLength) -> Vec<u8> {
    (cycle.days() as i32).to_ne_bytes().to_vec()
}
