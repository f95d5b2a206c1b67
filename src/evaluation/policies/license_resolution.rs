use crate::evaluation::domain::{Component, LicenseData, LicenseSelection};

/// LicenseResolution policy for picking the single license that applies to a
/// component of a model.
///
/// Priority order (first match wins):
/// 1. component-specific license (blank values fall through)
/// 2. global license for each of the component's content types, in order
/// 3. distribution-wide license
/// 4. `LicenseSelection::Unlicensed`
pub struct LicenseResolution;

impl LicenseResolution {
    /// Resolves the license for `component` from the model's license data.
    ///
    /// Never fails: the absence of any license is the `Unlicensed` outcome.
    pub fn resolve(component: &Component, license_data: &LicenseData) -> LicenseSelection {
        Self::component_license(component, license_data)
            .or_else(|| Self::global_license(component, license_data))
            .or_else(|| {
                license_data
                    .global
                    .distribution()
                    .and_then(|l| LicenseSelection::parse(&l.name))
            })
            .unwrap_or(LicenseSelection::Unlicensed)
    }

    fn component_license(
        component: &Component,
        license_data: &LicenseData,
    ) -> Option<LicenseSelection> {
        license_data
            .components
            .get(&component.id())
            .and_then(|c| c.license.as_deref())
            .and_then(LicenseSelection::parse)
    }

    fn global_license(component: &Component, license_data: &LicenseData) -> Option<LicenseSelection> {
        component.content_types().iter().find_map(|content_type| {
            license_data
                .global
                .for_type(*content_type)
                .and_then(|l| LicenseSelection::parse(&l.name))
        })
    }
}
