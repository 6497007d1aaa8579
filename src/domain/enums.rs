/// View filter for the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Active,
    Completed,
}

impl Filter {
    /// Whether a task with the given completion flag belongs to this view
    pub fn accepts(&self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => !completed,
            Self::Completed => completed,
        }
    }

    /// Display label for the filter bar
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// The next filter in cycling order (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Active,
            Self::Active => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    /// Get all filters in display order
    pub fn all() -> &'static [Filter] {
        &[Filter::All, Filter::Active, Filter::Completed]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts() {
        assert!(Filter::All.accepts(false));
        assert!(Filter::All.accepts(true));
        assert!(Filter::Active.accepts(false));
        assert!(!Filter::Active.accepts(true));
        assert!(!Filter::Completed.accepts(false));
        assert!(Filter::Completed.accepts(true));
    }

    #[test]
    fn test_filter_next_cycles() {
        assert_eq!(Filter::All.next(), Filter::Active);
        assert_eq!(Filter::Active.next(), Filter::Completed);
        assert_eq!(Filter::Completed.next(), Filter::All);
    }

    #[test]
    fn test_filter_all_order() {
        let all = Filter::all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0], Filter::All);
        assert_eq!(all[2], Filter::Completed);
    }
}
