use crate::model::habit::{HABIT_COUNT, HabitIndex, HabitSet, NAME_LEN, default_name};

/// Size of a complete habits.dat: ten NUL-padded 64-byte buffers.
pub const NAMES_FILE_LEN: usize = HABIT_COUNT * NAME_LEN;

/// Decode habits.dat bytes.
///
/// Unlike states.dat, a file of the wrong length is discarded as a whole and
/// every name takes its default. Within a full-length file, each buffer is
/// read up to its first NUL (the last byte is always treated as NUL) and an
/// empty entry gets its own default name.
pub fn parse_names(bytes: &[u8]) -> HabitSet {
    let mut set = HabitSet::default();
    if bytes.len() != NAMES_FILE_LEN {
        return set;
    }

    for (index, chunk) in HabitIndex::all().zip(bytes.chunks_exact(NAME_LEN)) {
        let text = &chunk[..NAME_LEN - 1];
        let end = text.iter().position(|&b| b == 0).unwrap_or(text.len());
        let name = String::from_utf8_lossy(&text[..end]).into_owned();
        if name.is_empty() {
            set.set_name(index, default_name(index));
        } else {
            set.set_name(index, name);
        }
    }
    set
}

/// Encode names into fixed buffers. Longer names are cut at the buffer limit
/// (on a char boundary) so the terminator always fits.
pub fn serialize_names(habits: &HabitSet) -> Vec<u8> {
    let mut out = vec![0u8; NAMES_FILE_LEN];
    for (index, habit) in habits.iter() {
        let name = habit.name.as_str();
        let mut len = name.len().min(NAME_LEN - 1);
        while !name.is_char_boundary(len) {
            len -= 1;
        }
        let start = index.get() * NAME_LEN;
        out[start..start + len].copy_from_slice(&name.as_bytes()[..len]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(i: usize) -> HabitIndex {
        HabitIndex::new(i).unwrap()
    }

    #[test]
    fn round_trip_custom_names() {
        let mut set = HabitSet::default();
        set.set_name(h(0), "Read 20 pages".into());
        set.set_name(h(7), "Stretch ☀".into());

        let bytes = serialize_names(&set);
        assert_eq!(bytes.len(), NAMES_FILE_LEN);
        assert_eq!(&bytes[..13], b"Read 20 pages");
        assert_eq!(bytes[13], 0);
        assert_eq!(parse_names(&bytes), set);
    }

    #[test]
    fn wrong_length_resets_whole_table() {
        let mut set = HabitSet::default();
        set.set_name(h(0), "Run".into());
        let mut bytes = serialize_names(&set);
        bytes.truncate(NAMES_FILE_LEN - 1);
        assert_eq!(parse_names(&bytes), HabitSet::default());

        assert_eq!(parse_names(&[]), HabitSet::default());
    }

    #[test]
    fn blank_entry_gets_its_own_default() {
        let mut set = HabitSet::default();
        set.set_name(h(0), "Run".into());
        set.set_name(h(2), "Meditate".into());
        let mut bytes = serialize_names(&set);
        // Blank out habit 3
        bytes[2 * NAME_LEN..3 * NAME_LEN].fill(0);

        let parsed = parse_names(&bytes);
        assert_eq!(parsed.name(h(0)), "Run");
        assert_eq!(parsed.name(h(2)), "Habit 3");
    }

    #[test]
    fn unterminated_buffer_drops_last_byte() {
        let mut bytes = serialize_names(&HabitSet::default());
        bytes[..NAME_LEN].fill(b'x');
        let parsed = parse_names(&bytes);
        assert_eq!(parsed.name(h(0)), "x".repeat(NAME_LEN - 1));
        assert_eq!(parsed.name(h(1)), "Habit 2");
    }
}
