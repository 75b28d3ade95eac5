//! Case normalization

/// How letters are cased before formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseMode {
    /// Letters keep their case.
    #[default]
    Unchanged,
    Upper,
    Lower,
}

impl CaseMode {
    pub fn apply(self, text: &str) -> String {
        match self {
            CaseMode::Unchanged => text.to_string(),
            CaseMode::Upper => text.to_ascii_uppercase(),
            CaseMode::Lower => text.to_ascii_lowercase(),
        }
    }
}
