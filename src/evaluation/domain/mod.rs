pub mod class;
pub mod component;
pub mod content_type;
pub mod license;
pub mod model;
pub mod release;
pub mod report;
pub mod run_metadata;

pub use class::{class_label, Classification, OpennessClass};
pub use component::{Component, ComponentId};
pub use content_type::ContentType;
pub use license::{License, LicenseSelection};
pub use model::{ComponentLicense, GlobalLicense, GlobalLicenses, LicenseData, Model, ModelStatus};
pub use release::{FrameworkInfo, Release, ReleaseComponent, ReleaseDocument};
pub use report::{ClassEvaluation, ComponentBuckets, ComponentStatus, EvaluationReport};
pub use run_metadata::RunMetadata;
