use std::collections::HashMap;

/// Header names keyed case-insensitively, remembering the original spelling.
#[derive(Debug, Clone)]
pub struct CaseInsensitiveSet {
    map: HashMap<String, String>,
}

impl CaseInsensitiveSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = HashMap::new();
        for name in names {
            let name = name.as_ref();
            let key = normalize(name);
            map.entry(key).or_insert_with(|| name.to_string());
        }
        Self { map }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(&normalize(name)).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&normalize(name))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().trim_matches('\u{feff}').to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_ignoring_case_and_padding() {
        let set = CaseInsensitiveSet::new(["\u{feff}Nome_Cliente", " cidade "]);
        assert_eq!(set.get("nome_cliente"), Some("\u{feff}Nome_Cliente"));
        assert!(set.contains("CIDADE"));
        assert!(!set.contains("estado"));
        assert_eq!(set.len(), 2);
    }
}
