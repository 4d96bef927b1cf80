use std::fmt;

/// Record types the DoH JSON API is queried for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    TXT,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::TXT => "TXT",
        }
    }

    /// Numeric RR type as it appears in the `type` field of a JSON answer.
    pub fn code(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::TXT => 16,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
