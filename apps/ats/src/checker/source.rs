/// Where a result came from. A failed or missing backend is not an error:
/// the checker computes the value locally and says so.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisSource<T> {
    Remote(T),
    /// Computed locally; `advisory` is a non-blocking note for the user.
    Local { value: T, advisory: String },
}

impl<T> AnalysisSource<T> {
    pub fn value(&self) -> &T {
        match self {
            AnalysisSource::Remote(value) => value,
            AnalysisSource::Local { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            AnalysisSource::Remote(value) => value,
            AnalysisSource::Local { value, .. } => value,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, AnalysisSource::Local { .. })
    }

    pub fn advisory(&self) -> Option<&str> {
        match self {
            AnalysisSource::Remote(_) => None,
            AnalysisSource::Local { advisory, .. } => Some(advisory),
        }
    }

    pub fn map<U, F>(self, f: F) -> AnalysisSource<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            AnalysisSource::Remote(value) => AnalysisSource::Remote(f(value)),
            AnalysisSource::Local { value, advisory } => AnalysisSource::Local {
                value: f(value),
                advisory,
            },
        }
    }
}
