// ============================================================
// Layer 3 — Label Space
// ============================================================
// The fixed, ordered set of labels a target vector indexes into.
//
//   Full mode:    17 fine-grained labels, used verbatim
//                 o5_1 o5_2 o5_3 o6_1 ... o9_4
//   Reduced mode: 3 coarse super-labels
//                 o5 o6 o7
//
// A compound label such as "o5_1,o6_2" becomes a multi-hot
// vector: one position per sub-label is set to 1.0.
//
//   Full:    "o5_1,o6_2" → positions 0 and 4
//   Reduced: "o5_1,o6_2" → positions 0 and 1
//            "o5_1,o5_3" → position 0 only
//
// Reference: Rust Book §6 (Enums), §8 (Vectors)

use serde::{Deserialize, Serialize};

const FULL_LABELS: [&str; 17] = [
    "o5_1", "o5_2", "o5_3",
    "o6_1", "o6_2", "o6_3",
    "o7_1", "o7_2", "o7_3", "o7_4",
    "o8_1", "o8_4", "o8_5",
    "o9_1", "o9_2", "o9_3", "o9_4",
];

const REDUCED_LABELS: [&str; 3] = ["o5", "o6", "o7"];

/// Which label space the target vectors are built against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    /// Fine labels, multi-label setting
    #[default]
    Full,
    /// Super-labels only, single-label setting
    Reduced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSpace {
    mode:   LabelMode,
    labels: &'static [&'static str],
}

impl LabelSpace {
    pub fn new(mode: LabelMode) -> Self {
        let labels: &'static [&'static str] = match mode {
            LabelMode::Full    => &FULL_LABELS,
            LabelMode::Reduced => &REDUCED_LABELS,
        };
        Self { mode, labels }
    }

    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    /// Length of every label vector built against this space
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Position of a single sub-label, or None if it does not belong here.
    ///
    /// In reduced mode "o5_1" resolves through its super-label "o5".
    /// A bare super-label ("o5") is accepted as-is. Anything with an
    /// empty prefix or suffix around the underscore is rejected.
    pub fn position(&self, sub_label: &str) -> Option<usize> {
        let key = match self.mode {
            LabelMode::Full => sub_label,
            LabelMode::Reduced => match sub_label.split_once('_') {
                Some((prefix, suffix)) if !prefix.is_empty() && !suffix.is_empty() => prefix,
                Some(_) => return None,
                None    => sub_label,
            },
        };
        self.labels.iter().position(|l| *l == key)
    }

    /// Build the multi-hot vector for a comma-separated compound label.
    /// Returns the first offending sub-label on failure.
    pub fn encode<'a>(&self, compound: &'a str) -> Result<Vec<f32>, &'a str> {
        let mut vector = vec![0.0f32; self.labels.len()];
        for piece in compound.split(',') {
            let idx = self.position(piece).ok_or(piece)?;
            vector[idx] = 1.0;
        }
        Ok(vector)
    }

    /// Label at the arg-max position of a (possibly soft) vector.
    /// The first maximum wins on ties.
    pub fn label_for_vector(&self, vector: &[f32]) -> Option<&'static str> {
        if vector.len() != self.labels.len() {
            return None;
        }
        let mut best: Option<(usize, f32)> = None;
        for (i, &v) in vector.iter().enumerate() {
            match best {
                Some((_, b)) if v <= b => {}
                _ => best = Some((i, v)),
            }
        }
        best.map(|(i, _)| self.labels[i])
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn set_positions(v: &[f32]) -> Vec<usize> {
        v.iter()
            .enumerate()
            .filter(|&(_, &x)| x == 1.0)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_space_sizes() {
        let full    = LabelSpace::new(LabelMode::Full);
        let reduced = LabelSpace::new(LabelMode::Reduced);
        assert_eq!((full.len(), reduced.len()), (17, 3));
        assert!(!full.is_empty() && !reduced.is_empty());
        assert_eq!(reduced.labels(), &["o5", "o6", "o7"]);
    }

    #[test]
    fn test_full_mode_multi_hot() {
        let space = LabelSpace::new(LabelMode::Full);
        let v     = space.encode("o5_1,o6_2").unwrap();
        assert_eq!(v.len(), 17);
        assert_eq!(set_positions(&v), vec![0, 4]);
        assert_eq!(v.iter().sum::<f32>(), 2.0);
    }

    #[test]
    fn test_reduced_mode_collapses_to_super_labels() {
        let space = LabelSpace::new(LabelMode::Reduced);
        assert_eq!(set_positions(&space.encode("o5_1,o6_2").unwrap()), vec![0, 1]);
        // Both sub-labels share super-label o5
        assert_eq!(set_positions(&space.encode("o5_1,o5_3").unwrap()), vec![0]);
        // Bare super-labels are valid input in reduced mode
        assert_eq!(set_positions(&space.encode("o7").unwrap()), vec![2]);
    }

    #[test]
    fn test_unknown_labels_are_reported() {
        let full = LabelSpace::new(LabelMode::Full);
        assert_eq!(full.encode("o5_1,o5"), Err("o5"));
        assert_eq!(full.encode("o5_9"), Err("o5_9"));

        let reduced = LabelSpace::new(LabelMode::Reduced);
        assert_eq!(reduced.encode("o8_1"), Err("o8_1"));
        assert_eq!(reduced.encode("o5_"), Err("o5_"));
        assert_eq!(reduced.encode("_1"), Err("_1"));
        assert_eq!(reduced.encode("o5_1,"), Err(""));
    }

    #[test]
    fn test_label_for_vector() {
        let space = LabelSpace::new(LabelMode::Reduced);
        assert_eq!(space.label_for_vector(&[0.1, 0.7, 0.2]), Some("o6"));
        // First maximum wins
        assert_eq!(space.label_for_vector(&[1.0, 0.0, 1.0]), Some("o5"));
        assert_eq!(space.label_for_vector(&[1.0, 0.0]), None);
    }
}
