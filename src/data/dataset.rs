use burn::data::dataset::Dataset;

use crate::domain::{fold::Partition, instance::EncodedInstance};

/// Lets a training or test partition feed a burn DataLoader directly.
impl Dataset<EncodedInstance> for Partition {
    fn get(&self, index: usize) -> Option<EncodedInstance> {
        self.instance(index)
    }

    fn len(&self) -> usize {
        Partition::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_view_matches_partition() {
        let partition: Partition = (0..3)
            .map(|i| EncodedInstance {
                id:            format!("id{i}"),
                token_indices: vec![1, 3 + i, 1],
                label_vector:  vec![0.0, 1.0, 0.0],
            })
            .collect();

        let dataset: &dyn Dataset<EncodedInstance> = &partition;
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.get(1).map(|s| s.id), Some("id1".to_string()));
        assert_eq!(dataset.get(2).unwrap().token_indices, vec![1, 5, 1]);
        assert!(dataset.get(3).is_none());
        assert_eq!(Dataset::iter(&partition).count(), 3);
    }
}
