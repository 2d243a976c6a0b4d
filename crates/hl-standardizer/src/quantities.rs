//! Ordered Quantity Mapping

use ndarray::{Array, ArrayD, Dimension};

/// Insertion-ordered mapping from quantity name to sample array.
///
/// Order matters: the standardized output places quantity `i` at index `i`
/// of the trailing axis, so downstream models can rely on a fixed
/// name-to-index schema. Re-inserting an existing name replaces its samples
/// but keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct HighLevelQuantities {
    entries: Vec<(String, ArrayD<f64>)>,
}

impl HighLevelQuantities {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mapping with room for `capacity` quantities
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert a quantity, returning the previous samples if the name existed
    pub fn insert<D: Dimension>(
        &mut self,
        name: impl Into<String>,
        values: Array<f64, D>,
    ) -> Option<ArrayD<f64>> {
        let name = name.into();
        let values = values.into_dyn();

        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, values)),
            None => {
                self.entries.push((name, values));
                None
            }
        }
    }

    /// Insert a one-dimensional quantity
    pub fn insert_column(&mut self, name: impl Into<String>, values: Vec<f64>) -> Option<ArrayD<f64>> {
        self.insert(name, Array::from_vec(values))
    }

    /// Look up a quantity by name
    pub fn get(&self, name: &str) -> Option<&ArrayD<f64>> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, values)| values)
    }

    /// Number of quantities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Quantity names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate `(name, samples)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArrayD<f64>)> {
        self.entries.iter().map(|(name, values)| (name.as_str(), values))
    }

    /// Borrow the underlying ordered entries
    pub fn entries(&self) -> &[(String, ArrayD<f64>)] {
        &self.entries
    }
}

impl<S, D> FromIterator<(S, Array<f64, D>)> for HighLevelQuantities
where
    S: Into<String>,
    D: Dimension,
{
    fn from_iter<I: IntoIterator<Item = (S, Array<f64, D>)>>(iter: I) -> Self {
        let mut quantities = Self::new();
        for (name, values) in iter {
            quantities.insert(name, values);
        }
        quantities
    }
}

impl<S, D> Extend<(S, Array<f64, D>)> for HighLevelQuantities
where
    S: Into<String>,
    D: Dimension,
{
    fn extend<I: IntoIterator<Item = (S, Array<f64, D>)>>(&mut self, iter: I) {
        for (name, values) in iter {
            self.insert(name, values);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_insertion_order_preserved() {
        let mut quantities = HighLevelQuantities::new();
        quantities.insert_column("mass", vec![1.0, 2.0]);
        quantities.insert_column("ecf2", vec![3.0, 4.0]);
        quantities.insert_column("d12", vec![5.0, 6.0]);

        let names: Vec<_> = quantities.names().collect();
        assert_eq!(names, vec!["mass", "ecf2", "d12"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut quantities = HighLevelQuantities::new();
        quantities.insert_column("a", vec![1.0]);
        quantities.insert_column("b", vec![2.0]);

        let previous = quantities.insert_column("a", vec![9.0]);
        assert_eq!(previous.map(|p| p.iter().copied().collect::<Vec<_>>()), Some(vec![1.0]));

        let names: Vec<_> = quantities.names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(quantities.len(), 2);
        assert_eq!(quantities.get("a").map(|a| a[[0]]), Some(9.0));
    }

    #[test]
    fn test_from_iterator_accepts_nd_arrays() {
        let quantities: HighLevelQuantities = vec![
            ("x", array![[1.0, 2.0], [3.0, 4.0]]),
            ("y", array![[5.0, 6.0], [7.0, 8.0]]),
        ]
        .into_iter()
        .collect();

        assert_eq!(quantities.len(), 2);
        assert_eq!(quantities.get("y").map(|y| y.shape().to_vec()), Some(vec![2, 2]));
        assert!(quantities.get("z").is_none());
    }
}
