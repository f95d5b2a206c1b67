pub mod license_resolution;
pub mod research_paper_substitution;

pub use license_resolution::LicenseResolution;
pub use research_paper_substitution::ResearchPaperSubstitution;
