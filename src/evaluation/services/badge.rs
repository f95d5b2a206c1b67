use super::assessment::ModelAssessment;
use crate::evaluation::domain::OpennessClass;
use serde::Serialize;

/// Outcome shown on a class badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStatus {
    Qualified,
    NotMet,
    /// Rounded progress percentage, always within 1..=99.
    InProgress(u8),
}

impl BadgeStatus {
    pub fn from_progress(progress: f64) -> Self {
        if progress == 100.0 {
            BadgeStatus::Qualified
        } else if progress == 0.0 {
            BadgeStatus::NotMet
        } else {
            BadgeStatus::InProgress(progress.round().clamp(1.0, 99.0) as u8)
        }
    }

    pub fn text(self) -> String {
        match self {
            BadgeStatus::Qualified => "Qualified".to_string(),
            BadgeStatus::NotMet => "Not met".to_string(),
            BadgeStatus::InProgress(progress) => format!("In progress ({progress}%)"),
        }
    }

    pub fn text_color(self) -> &'static str {
        "#fff"
    }

    pub fn background_color(self) -> &'static str {
        match self {
            BadgeStatus::Qualified => "#4c1",
            BadgeStatus::NotMet => "#9ba0a2",
            BadgeStatus::InProgress(_) => "#76b1c9",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    class: OpennessClass,
    status: BadgeStatus,
}

impl Badge {
    pub fn new(class: OpennessClass, status: BadgeStatus) -> Self {
        Self { class, status }
    }

    pub fn class(&self) -> OpennessClass {
        self.class
    }

    pub fn status(&self) -> BadgeStatus {
        self.status
    }

    pub fn label(&self) -> &'static str {
        self.class.label()
    }
}

impl Serialize for Badge {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Badge", 5)?;
        state.serialize_field("class", &self.class)?;
        state.serialize_field("label", self.label())?;
        state.serialize_field("status", &self.status.text())?;
        state.serialize_field("textColor", self.status.text_color())?;
        state.serialize_field("backgroundColor", self.status.background_color())?;
        state.end()
    }
}

/// BadgeGenerator service deriving per-class badges from progress values
pub struct BadgeGenerator;

impl BadgeGenerator {
    /// Badges from Class III down to Class I.
    ///
    /// In mini mode only the strictest qualified badge and the first
    /// in-progress badge are kept; not-met badges are dropped.
    pub fn generate(assessment: &ModelAssessment, mini: bool) -> Vec<Badge> {
        Self::from_progress(|class| assessment.progress(class), mini)
    }

    pub fn from_progress(progress: impl Fn(OpennessClass) -> f64, mini: bool) -> Vec<Badge> {
        let mut badges: Vec<Badge> = Vec::new();

        for class in OpennessClass::DESCENDING {
            let badge = Badge::new(class, BadgeStatus::from_progress(progress(class)));
            if mini {
                match badge.status {
                    BadgeStatus::NotMet => continue,
                    BadgeStatus::Qualified => {
                        if let Some(previous) = badges
                            .iter_mut()
                            .find(|b| b.status == BadgeStatus::Qualified)
                        {
                            *previous = badge;
                            continue;
                        }
                    }
                    BadgeStatus::InProgress(_) => {
                        if badges
                            .iter()
                            .any(|b| matches!(b.status, BadgeStatus::InProgress(_)))
                        {
                            continue;
                        }
                    }
                }
            }
            badges.push(badge);
        }

        badges
    }
}
