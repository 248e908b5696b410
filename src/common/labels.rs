//! Maps raw label values to dense class indices.

use std::collections::HashMap;
use std::hash::Hash;


/// An ordered registry of the distinct classes observed during `fit`.
/// Classes are kept in first-encountered order,
/// and every parameter table in this crate is indexed by
/// the dense index assigned here.
/// Note that `self.classes.len() <= target.len()`.
#[derive(Debug, Clone)]
pub(crate) struct ClassRegistry<L> {
    index_of: HashMap<L, usize>,
    classes: Vec<L>,
}


impl<L> ClassRegistry<L>
    where L: Clone + Eq + Hash,
{
    /// Deduplicates the given target vector in first-encountered order.
    pub(crate) fn from_target(target: &[L]) -> Self {
        let mut index_of = HashMap::new();
        let mut classes = Vec::new();

        for label in target {
            if !index_of.contains_key(label) {
                index_of.insert(label.clone(), classes.len());
                classes.push(label.clone());
            }
        }

        Self { index_of, classes }
    }


    /// Returns the dense class index for each entry of `target`.
    /// Every entry is present since the registry was built
    /// from the same target vector.
    pub(crate) fn indices(&self, target: &[L]) -> Vec<usize> {
        target.iter()
            .map(|label| self.index_of[label])
            .collect()
    }


    /// Returns the number of distinct classes.
    pub(crate) fn len(&self) -> usize {
        self.classes.len()
    }


    /// Consumes the registry,
    /// returning the class labels in dense index order.
    pub(crate) fn into_classes(self) -> Vec<L> {
        self.classes
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_keep_first_encountered_order() {
        let target = [2, 2, 7, 1, 7, 2];
        let registry = ClassRegistry::from_target(&target);

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.into_classes(), vec![2, 7, 1]);
    }

    #[test]
    fn indices_map_back_to_classes() {
        let target = ["spam", "ham", "spam", "eggs"];
        let registry = ClassRegistry::from_target(&target);

        assert_eq!(registry.indices(&target), vec![0, 1, 0, 2]);
    }

    #[test]
    fn single_class_target() {
        let target = [1, 1, 1];
        let registry = ClassRegistry::from_target(&target);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.indices(&target), vec![0, 0, 0]);
    }
}
