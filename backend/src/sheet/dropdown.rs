use crate::error::GenerationError;

/// Excel rejects inline list sources longer than this many characters.
pub const LIST_LENGTH_LIMIT: usize = 255;

/// Characters with a meaning inside an inline list source: the delimiter and
/// the quote wrapping the whole list.
const RESERVED: [char; 2] = [',', '"'];

/// The allowed values of a list-type data validation.
///
/// Inline lists are stored as one quoted, comma separated string, so entries
/// holding a reserved character cannot be represented and are rejected rather
/// than silently corrupting the list. Blank entries are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownList {
    entries: Vec<String>,
}

impl DropdownList {
    /// Validates `options` for the column headed `column`.
    pub fn new<I>(column: &str, options: I) -> Result<Self, GenerationError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut entries = Vec::new();
        for option in options {
            let option = option.as_ref();
            if option.trim().is_empty() {
                continue;
            }
            if let Some(reserved) = option.chars().find(|c| RESERVED.contains(c)) {
                return Err(GenerationError::ReservedCharacterInOption {
                    column: column.to_string(),
                    option: option.to_string(),
                    reserved,
                });
            }
            entries.push(option.to_string());
        }

        let list = Self { entries };
        let length = list.source().chars().count();
        if length > LIST_LENGTH_LIMIT {
            return Err(GenerationError::ListTooLong {
                column: column.to_string(),
                length,
                limit: LIST_LENGTH_LIMIT,
            });
        }
        Ok(list)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The list as it appears between the quotes of the validation formula.
    pub fn source(&self) -> String {
        self.entries.join(",")
    }

    /// The complete `formula1` text, e.g. `"Low,Mid,High"`.
    pub fn formula(&self) -> String {
        format!("\"{}\"", self.source())
    }
}
