use std::collections::BTreeMap;

use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Indices of the train and test partitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Stratified shuffle split: each class contributes `round(count × test_size)`
/// samples to the test set while always keeping at least one in training.
/// The same seed always yields the same split.
pub fn stratified_split(targets: &[usize], test_size: f64, seed: u64) -> Result<Split> {
    if !(0.0..1.0).contains(&test_size) {
        bail!("test size must be in [0, 1), got {test_size}");
    }

    let mut by_class: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (idx, &class) in targets.iter().enumerate() {
        by_class.entry(class).or_default().push(idx);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train = Vec::new();
    let mut test = Vec::new();

    for (_, mut members) in by_class {
        members.shuffle(&mut rng);
        let n_test = ((members.len() as f64 * test_size).round() as usize)
            .min(members.len().saturating_sub(1));
        test.extend_from_slice(&members[..n_test]);
        train.extend_from_slice(&members[n_test..]);
    }

    train.shuffle(&mut rng);
    test.shuffle(&mut rng);
    Ok(Split { train, test })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn targets() -> Vec<usize> {
        let mut t = vec![0; 10];
        t.extend(vec![1; 5]);
        t.push(2);
        t
    }

    #[test]
    fn test_partitions_cover_every_index_once() {
        let split = stratified_split(&targets(), 0.2, 42).unwrap();
        let mut all: Vec<usize> = split.train.iter().chain(&split.test).copied().collect();
        all.sort();
        assert_eq!(all, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_class_proportions() {
        let t = targets();
        let split = stratified_split(&t, 0.2, 42).unwrap();
        let count = |idx: &[usize], class| idx.iter().filter(|&&i| t[i] == class).count();
        assert_eq!(count(&split.test, 0), 2);
        assert_eq!(count(&split.test, 1), 1);
        // a singleton class stays in training
        assert_eq!(count(&split.test, 2), 0);
        assert_eq!(count(&split.train, 2), 1);
    }

    #[test]
    fn test_every_class_kept_in_train() {
        let t = targets();
        let split = stratified_split(&t, 0.9, 7).unwrap();
        let train_classes: HashSet<usize> = split.train.iter().map(|&i| t[i]).collect();
        assert_eq!(train_classes.len(), 3);
    }

    #[test]
    fn test_same_seed_same_split() {
        let t = targets();
        assert_eq!(
            stratified_split(&t, 0.2, 42).unwrap(),
            stratified_split(&t, 0.2, 42).unwrap()
        );
    }

    #[test]
    fn test_rejects_bad_test_size() {
        assert!(stratified_split(&targets(), 1.0, 1).is_err());
        assert!(stratified_split(&targets(), -0.1, 1).is_err());
    }
}
