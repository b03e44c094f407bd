pub(crate) const DEFAULT_FIELD_DELIMITER: u8 = b',';
pub(crate) const DEFAULT_PARENTS_DELIMITER: char = ';';

/// DEFAULT_STRICT_NUMERIC_FIELDS keeps unparseable fee and weight values
/// non-fatal: they are read as zero.
pub(crate) const DEFAULT_STRICT_NUMERIC_FIELDS: bool = false;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub field_delimiter: u8,
    pub parents_delimiter: char,
    pub strict_numeric_fields: bool,
}

impl Config {
    pub fn new(field_delimiter: u8, parents_delimiter: char, strict_numeric_fields: bool) -> Self {
        Self { field_delimiter, parents_delimiter, strict_numeric_fields }
    }

    pub fn build_default() -> Self {
        Self::new(DEFAULT_FIELD_DELIMITER, DEFAULT_PARENTS_DELIMITER, DEFAULT_STRICT_NUMERIC_FIELDS)
    }

    pub fn with_strict_numeric_fields(mut self, strict: bool) -> Self {
        self.strict_numeric_fields = strict;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::build_default()
    }
}
