use url::form_urlencoded;

use crate::FilterCriteria;

/// Ordered `(key, value)` pairs sent as the listing query string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        self.0.push((key.to_string(), value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// `application/x-www-form-urlencoded` rendering, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish()
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Canonical listing query for the given criteria.
///
/// Keys appear in the order `search`, `location`, `type`, `remote`; any field
/// at its unset value is omitted entirely.
pub fn build_query(criteria: &FilterCriteria) -> QueryParams {
    let mut params = QueryParams::new();
    if !criteria.search_text.is_empty() {
        params.push("search", criteria.search_text.as_str());
    }
    if !criteria.location_text.is_empty() {
        params.push("location", criteria.location_text.as_str());
    }
    if let Some(label) = criteria.employment_type.label() {
        params.push("type", label);
    }
    if let Some(remote) = criteria.remote_preference.wire_value() {
        params.push("remote", remote);
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EmploymentType, RemotePreference};

    #[test]
    fn query_string_is_form_encoded_in_order() {
        let criteria = FilterCriteria {
            search_text: "rust & go".into(),
            location_text: "New York".into(),
            employment_type: EmploymentType::FullTime,
            remote_preference: RemotePreference::OnSiteOnly,
        };
        assert_eq!(
            build_query(&criteria).to_query_string(),
            "search=rust+%26+go&location=New+York&type=Full-time&remote=false"
        );
    }

    #[test]
    fn whitespace_text_is_sent_as_typed() {
        let criteria = FilterCriteria {
            search_text: " ".into(),
            ..FilterCriteria::default()
        };
        assert_eq!(build_query(&criteria).get("search"), Some(" "));
    }
}
