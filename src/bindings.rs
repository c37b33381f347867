use std::collections::HashMap;

use crate::Scalar;

/// Resolves variable names to values during evaluation.
pub trait Environment {
    fn lookup(&self, name: &str) -> Option<Scalar>;
}

/// Ordered `(name, value)` pairs. Lookup is a linear scan where the first
/// match wins, so rebinding a name does not shadow the earlier entry.
#[derive(Clone, Debug, Default)]
pub struct Bindings {
    entries: Vec<(String, Scalar)>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a binding.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<Scalar>) -> &mut Self {
        self.entries.push((name.into(), value.into()));
        self
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.bind(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Scalar)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl Environment for Bindings {
    fn lookup(&self, name: &str) -> Option<Scalar> {
        self.entries.as_slice().lookup(name)
    }
}

impl<S: AsRef<str>> Environment for [(S, Scalar)] {
    fn lookup(&self, name: &str) -> Option<Scalar> {
        self.iter()
            .find(|(bound, _)| bound.as_ref() == name)
            .map(|(_, value)| *value)
    }
}

impl<S: AsRef<str>, const N: usize> Environment for [(S, Scalar); N] {
    fn lookup(&self, name: &str) -> Option<Scalar> {
        self.as_slice().lookup(name)
    }
}

impl<S: AsRef<str>> Environment for Vec<(S, Scalar)> {
    fn lookup(&self, name: &str) -> Option<Scalar> {
        self.as_slice().lookup(name)
    }
}

impl Environment for HashMap<String, Scalar> {
    fn lookup(&self, name: &str) -> Option<Scalar> {
        self.get(name).copied()
    }
}

impl<N: Into<String>, V: Into<Scalar>> FromIterator<(N, V)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_wins() {
        let mut bindings = Bindings::new();
        bindings.bind("x", 1).bind("y", 2.5).bind("x", 3);

        assert_eq!(bindings.len(), 3);
        assert_eq!(bindings.lookup("x"), Some(Scalar::int(1)));
        assert_eq!(bindings.lookup("y"), Some(Scalar::float(2.5)));
        assert_eq!(bindings.lookup("z"), None);
    }

    #[test]
    fn slices_and_maps() {
        let pairs = [("a", Scalar::int(4)), ("a", Scalar::int(5))];
        assert_eq!(pairs.lookup("a"), Some(Scalar::int(4)));

        let owned: Vec<(String, Scalar)> = vec![("b".to_string(), Scalar::float(0.5))];
        assert_eq!(owned.lookup("b"), Some(Scalar::float(0.5)));

        let map: HashMap<String, Scalar> = [("c".to_string(), Scalar::int(7))].into();
        assert_eq!(map.lookup("c"), Some(Scalar::int(7)));
        assert_eq!(map.lookup("d"), None);
    }

    #[test]
    fn collect_preserves_order() {
        let bindings: Bindings = [("x", 1), ("y", 2)].into_iter().collect();
        let names: Vec<_> = bindings.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["x", "y"]);
        assert!(Bindings::new().is_empty());
    }
}
