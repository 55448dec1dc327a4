/// Longest pattern retained per entry; bytes past this are dropped.
pub const MAX_PATTERN_LEN: usize = 128;

/// Longest type name retained per entry.
pub const MAX_NAME_LEN: usize = 63;

/// A single signature definition: the magic bytes to search for and the
/// type name reported on a match.
///
/// Entries parsed from a line whose first character is `#` are inactive:
/// they occupy a database slot and count toward the loaded total, but
/// never participate in matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureEntry {
    pattern: Vec<u8>,
    type_name: String,
    active: bool,
}

impl SignatureEntry {
    /// Parses one definition line of the form `<hex bytes>|<type name>`.
    ///
    /// Returns `None` for lines without a `|` separator; such lines are
    /// discarded entirely and consume no database slot.
    pub fn parse(line: &str) -> Option<Self> {
        let active = !line.starts_with('#');

        let (hex_part, name_part) = line.split_once('|')?;
        let type_name: String = name_part.chars().take(MAX_NAME_LEN).collect();

        let mut pattern = Vec::new();
        for token in hex_part.split_whitespace() {
            if pattern.len() == MAX_PATTERN_LEN {
                break;
            }
            // A leading '#' inside the byte list is a formatting artifact,
            // not a comment marker; strip it and parse the remainder.
            let digits = match token.strip_prefix('#') {
                Some("") => continue,
                Some(rest) => rest,
                None => token,
            };
            // Over-wide tokens keep their low byte; tokens that are not
            // valid hex degrade to 0x00 rather than failing the load.
            let byte = u64::from_str_radix(digits, 16).map_or(0, |value| value as u8);
            pattern.push(byte);
        }

        Some(Self {
            pattern,
            type_name,
            active,
        })
    }

    #[must_use]
    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}
