use std::collections::HashMap;

use smallvec::SmallVec;

/// Capture set produced by a search.
///
/// Values are additive per name: a name captured more than once keeps every
/// value in match order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: SmallVec<[(Box<str>, String); 4]>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<K, V>(&mut self, name: K, value: V)
    where
        K: Into<Box<str>>,
        V: Into<String>,
    {
        self.entries.push((name.into(), value.into()));
    }

    /// First value captured for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn get_all<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .filter(move |(key, _)| key.as_ref() == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key.as_ref() == name)
    }

    /// Distinct names, in order of first capture.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.entries.len());
        for (key, _) in self.entries.iter() {
            if !names.contains(&key.as_ref()) {
                names.push(key);
            }
        }
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_ref(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }

    pub fn into_map(self) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::with_capacity(self.entries.len());
        for (key, value) in self.entries {
            map.entry(key.into_string()).or_default().push(value);
        }
        map
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<Box<str>>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Params::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for Params
where
    K: Into<Box<str>>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_names_accumulate_in_order() {
        let mut params = Params::new();
        params.add("id", "1");
        params.add("other", "x");
        params.add("id", "2");

        assert_eq!(params.get("id"), Some("1"));
        assert_eq!(params.get_all("id").collect::<Vec<_>>(), vec!["1", "2"]);
        assert_eq!(params.names(), vec!["id", "other"]);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn looked_up_values_outlive_the_lookup_key() {
        let params: Params = [("id", "7"), ("id", "8")].into_iter().collect();

        let first = {
            let key = String::from("id");
            params.get(&key)
        };
        let all: Vec<&str> = {
            let key = String::from("id");
            params.get_all(&key).collect()
        };

        assert_eq!(first, Some("7"));
        assert_eq!(all, vec!["7", "8"]);
    }

    #[test]
    fn missing_names_yield_nothing() {
        let params: Params = [("id", "7")].into_iter().collect();
        assert_eq!(params.get("name"), None);
        assert!(!params.contains("name"));
        assert_eq!(params.get_all("name").count(), 0);
    }

    #[test]
    fn converts_into_multi_value_map() {
        let params: Params = [("id", "1"), ("id", "2"), ("rest", "a/b")]
            .into_iter()
            .collect();
        let map = params.into_map();
        assert_eq!(map["id"], vec!["1".to_string(), "2".to_string()]);
        assert_eq!(map["rest"], vec!["a/b".to_string()]);
    }
}
