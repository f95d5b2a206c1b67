use crate::shared::error::MotError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three openness tiers.
///
/// Class III is the broadest tier and Class I the strictest; requirements
/// accumulate from III down to I.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OpennessClass {
    One = 1,
    Two = 2,
    Three = 3,
}

impl OpennessClass {
    /// Evaluation order: least strict first.
    pub const DESCENDING: [OpennessClass; 3] =
        [OpennessClass::Three, OpennessClass::Two, OpennessClass::One];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(value: u8) -> Result<Self, MotError> {
        match value {
            1 => Ok(OpennessClass::One),
            2 => Ok(OpennessClass::Two),
            3 => Ok(OpennessClass::Three),
            other => Err(MotError::InvalidClass {
                value: i64::from(other),
            }),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OpennessClass::One => "Class I - Open Science Model",
            OpennessClass::Two => "Class II - Open Tooling Model",
            OpennessClass::Three => "Class III - Open Model",
        }
    }

    /// Classes from III down to and including `self`.
    pub fn down_to(self) -> impl Iterator<Item = OpennessClass> {
        Self::DESCENDING.into_iter().filter(move |c| *c >= self)
    }
}

impl TryFrom<u8> for OpennessClass {
    type Error = MotError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl From<OpennessClass> for u8 {
    fn from(class: OpennessClass) -> Self {
        class.number()
    }
}

impl fmt::Display for OpennessClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Final classification of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    PendingEvaluation,
    Unclassified,
    Qualified(OpennessClass),
}

impl Classification {
    pub fn value(self) -> i8 {
        match self {
            Classification::PendingEvaluation => -1,
            Classification::Unclassified => 0,
            Classification::Qualified(class) => class.number() as i8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Classification::PendingEvaluation => "Pending evaluation",
            Classification::Unclassified => "Unclassified",
            Classification::Qualified(class) => class.label(),
        }
    }

    /// True when the model reached `required` or a stricter class.
    pub fn meets(self, required: OpennessClass) -> bool {
        matches!(self, Classification::Qualified(class) if class <= required)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label for a numeric class value: -1 (pending), 0 (unclassified) or 1..=3.
pub fn class_label(value: i64) -> Result<&'static str, MotError> {
    match value {
        -1 => Ok(Classification::PendingEvaluation.label()),
        0 => Ok(Classification::Unclassified.label()),
        1..=3 => Ok(OpennessClass::from_number(value as u8)?.label()),
        other => Err(MotError::InvalidClass { value: other }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_labels() {
        assert_eq!(class_label(0).unwrap(), "Unclassified");
        assert_eq!(class_label(1).unwrap(), "Class I - Open Science Model");
        assert_eq!(class_label(2).unwrap(), "Class II - Open Tooling Model");
        assert_eq!(class_label(3).unwrap(), "Class III - Open Model");
        assert_eq!(class_label(-1).unwrap(), "Pending evaluation");
    }

    #[test]
    fn test_class_label_out_of_range() {
        assert!(matches!(
            class_label(4),
            Err(MotError::InvalidClass { value: 4 })
        ));
        assert!(matches!(
            class_label(-2),
            Err(MotError::InvalidClass { value: -2 })
        ));
    }

    #[test]
    fn test_from_number() {
        assert_eq!(OpennessClass::from_number(2).unwrap(), OpennessClass::Two);
        assert!(OpennessClass::from_number(0).is_err());
    }

    #[test]
    fn test_down_to() {
        let classes: Vec<_> = OpennessClass::Two.down_to().collect();
        assert_eq!(classes, vec![OpennessClass::Three, OpennessClass::Two]);

        let all: Vec<_> = OpennessClass::One.down_to().collect();
        assert_eq!(all, OpennessClass::DESCENDING.to_vec());
    }

    #[test]
    fn test_classification_values() {
        assert_eq!(Classification::PendingEvaluation.value(), -1);
        assert_eq!(Classification::Unclassified.value(), 0);
        assert_eq!(Classification::Qualified(OpennessClass::Three).value(), 3);
    }

    #[test]
    fn test_classification_meets() {
        let class_two = Classification::Qualified(OpennessClass::Two);
        assert!(class_two.meets(OpennessClass::Three));
        assert!(class_two.meets(OpennessClass::Two));
        assert!(!class_two.meets(OpennessClass::One));
        assert!(!Classification::Unclassified.meets(OpennessClass::Three));
    }

    #[test]
    fn test_serde_as_number() {
        let class: OpennessClass = serde_json::from_str("1").unwrap();
        assert_eq!(class, OpennessClass::One);
        assert_eq!(serde_json::to_string(&OpennessClass::Three).unwrap(), "3");
        assert!(serde_json::from_str::<OpennessClass>("5").is_err());
    }
}
