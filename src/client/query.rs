use reqwest::Url;

/// Query string assembled from optional parameters.
///
/// Only parameters with a value end up in the URL. An absent cursor is
/// dropped, never sent as `cursor=null`.
///
/// ```
/// use rechnungs_api::QueryParams;
/// use rechnungs_api::Url;
///
/// let mut url = Url::parse("https://api.example.com/api/v1/ledgers").unwrap();
/// QueryParams::new()
///     .push("limit", Some(10))
///     .push("cursor", None::<String>)
///     .apply(&mut url);
/// assert_eq!(url.query(), Some("limit=10"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key=value` if `value` is present.
    pub fn push<V: ToString>(mut self, key: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Value of the first parameter named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Append the parameters to `url`, form-encoded.
    ///
    /// An empty set leaves the URL untouched, so no trailing `?` is produced.
    pub fn apply(&self, url: &mut Url) {
        if self.pairs.is_empty() {
            return;
        }
        url.query_pairs_mut().extend_pairs(self.iter());
    }
}
