use glob::Pattern;

/// Selection of the sheet and rows to read from a workbook.
#[derive(Clone, Debug)]
pub(crate) struct Criteria {
    /// Sheet name as given by the caller.
    pub(crate) sheet_name: String,

    /// Sheet name as a glob pattern, absent when the name is not a valid pattern.
    pub(crate) sheet_name_pattern: Option<Pattern>,

    /// Leading rows to drop, counted from the first non-empty row.
    pub(crate) skip_rows: usize,

    /// Whether rows holding only blank cells count towards the data range.
    pub(crate) blank_rows: bool,
}

impl Criteria {
    pub(crate) fn new(selector: &str, skip_rows: usize) -> Self {
        Self {
            sheet_name: selector.to_owned(),
            sheet_name_pattern: Pattern::new(selector).ok(),
            skip_rows,
            blank_rows: false,
        }
    }

    /// Keeps rows that exist in the document without holding any value.
    pub(crate) fn with_blank_rows(mut self) -> Self {
        self.blank_rows = true;
        self
    }

    /// Checks if a sheet name equals the selector or matches it as a pattern.
    pub(crate) fn accept(&self, sheet_name: &str) -> bool {
        self.sheet_name == sheet_name
            || self
                .sheet_name_pattern
                .as_ref()
                .map(|pattern| pattern.matches(sheet_name))
                .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_exact_and_glob() {
        let criteria = Criteria::new("Plan*", 0);
        assert!(criteria.accept("Plantilla"));
        assert!(criteria.accept("Plan*"));
        assert!(!criteria.accept("Notes"));
    }

    #[test]
    fn accept_invalid_pattern_literally() {
        let criteria = Criteria::new("Data[1", 0);
        assert!(criteria.sheet_name_pattern.is_none());
        assert!(criteria.accept("Data[1"));
        assert!(!criteria.accept("Data1"));
    }
}
