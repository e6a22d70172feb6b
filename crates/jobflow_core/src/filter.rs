use std::fmt;

/// Employment type filter. `Any` is the unset value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum EmploymentType {
    #[default]
    Any,
    FullTime,
    PartTime,
    Contract,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 4] = [
        EmploymentType::Any,
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Contract,
    ];

    /// Wire label sent as the `type` query value. `None` for `Any`.
    pub fn label(self) -> Option<&'static str> {
        match self {
            EmploymentType::Any => None,
            EmploymentType::FullTime => Some("Full-time"),
            EmploymentType::PartTime => Some("Part-time"),
            EmploymentType::Contract => Some("Contract"),
        }
    }

    /// Parses a select-box value; the empty string means `Any`.
    pub fn from_label(label: &str) -> Result<Self, CriteriaError> {
        match label {
            "" => Ok(EmploymentType::Any),
            "Full-time" => Ok(EmploymentType::FullTime),
            "Part-time" => Ok(EmploymentType::PartTime),
            "Contract" => Ok(EmploymentType::Contract),
            other => Err(CriteriaError::UnknownEmploymentType(other.to_string())),
        }
    }

    /// Next option in select order, wrapping around.
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    /// Previous option in select order, wrapping around.
    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("All Job Types"))
    }
}

/// Remote preference filter. `Any` is the unset value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum RemotePreference {
    #[default]
    Any,
    RemoteOnly,
    OnSiteOnly,
}

impl RemotePreference {
    pub const ALL: [RemotePreference; 3] = [
        RemotePreference::Any,
        RemotePreference::RemoteOnly,
        RemotePreference::OnSiteOnly,
    ];

    /// Boolean-as-string sent as the `remote` query value. `None` for `Any`.
    pub fn wire_value(self) -> Option<&'static str> {
        match self {
            RemotePreference::Any => None,
            RemotePreference::RemoteOnly => Some("true"),
            RemotePreference::OnSiteOnly => Some("false"),
        }
    }

    /// Parses a select-box value (`all`, `true`, `false`).
    pub fn from_label(label: &str) -> Result<Self, CriteriaError> {
        match label {
            "all" => Ok(RemotePreference::Any),
            "true" => Ok(RemotePreference::RemoteOnly),
            "false" => Ok(RemotePreference::OnSiteOnly),
            other => Err(CriteriaError::UnknownRemotePreference(other.to_string())),
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for RemotePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RemotePreference::Any => "Remote / On-site",
            RemotePreference::RemoteOnly => "Remote Only",
            RemotePreference::OnSiteOnly => "On-site Only",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CriteriaError {
    #[error("unknown employment type: {0:?}")]
    UnknownEmploymentType(String),
    #[error("unknown remote preference: {0:?}")]
    UnknownRemotePreference(String),
}

/// User-controlled search criteria for the listing board.
///
/// `Default` is the all-unset criteria: empty texts and `Any` for both enums.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct FilterCriteria {
    pub search_text: String,
    pub location_text: String,
    pub employment_type: EmploymentType,
    pub remote_preference: RemotePreference,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: usize) -> T {
    let index = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(index + step) % all.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back_to_the_same_variant() {
        for ty in EmploymentType::ALL {
            let label = ty.label().unwrap_or("");
            assert_eq!(EmploymentType::from_label(label), Ok(ty));
        }
        for pref in RemotePreference::ALL {
            let label = pref.wire_value().unwrap_or("all");
            assert_eq!(RemotePreference::from_label(label), Ok(pref));
        }
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert_eq!(
            EmploymentType::from_label("Internship"),
            Err(CriteriaError::UnknownEmploymentType("Internship".into()))
        );
        assert!(RemotePreference::from_label("maybe").is_err());
    }

    #[test]
    fn select_cycling_wraps() {
        assert_eq!(EmploymentType::Contract.next(), EmploymentType::Any);
        assert_eq!(EmploymentType::Any.prev(), EmploymentType::Contract);
        assert_eq!(RemotePreference::OnSiteOnly.next(), RemotePreference::Any);
        assert_eq!(RemotePreference::Any.prev(), RemotePreference::OnSiteOnly);
    }

    #[test]
    fn default_criteria_is_unset() {
        assert!(FilterCriteria::new().is_unset());
        let criteria = FilterCriteria {
            location_text: "Austin".into(),
            ..FilterCriteria::default()
        };
        assert!(!criteria.is_unset());
    }
}
