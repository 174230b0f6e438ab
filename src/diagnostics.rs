// ABOUTME: Diagnostics accumulator for non-fatal warnings raised inside a workflow.
// ABOUTME: Collects outcomes that don't fail the workflow but should be shown to users.

/// Collects non-fatal warnings during one workflow invocation.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!(kind = ?warning.kind, "{}", warning.message);
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Hand over collected warnings, leaving the accumulator empty.
    pub fn take(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }
}

#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// The delete issued before a forced redeploy did not succeed.
    pub fn force_delete_ignored(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::ForceDeleteIgnored,
            message: message.into(),
        }
    }

    /// One device of a group fan-out could not be deployed.
    pub fn device_deploy_failed(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::DeviceDeployFailed,
            message: message.into(),
        }
    }

    /// The group listing was rejected; no devices were targeted.
    pub fn group_lookup_failed(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::GroupLookupFailed,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    ForceDeleteIgnored,
    DeviceDeployFailed,
    GroupLookupFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_starts_empty() {
        let diag = Diagnostics::default();
        assert!(!diag.has_warnings());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn diagnostics_collects_warnings() {
        let mut diag = Diagnostics::default();

        diag.warn(Warning::force_delete_ignored("delete returned 404"));
        diag.warn(Warning::device_deploy_failed("device-a: 400"));

        assert!(diag.has_warnings());
        assert_eq!(diag.warnings().len(), 2);
    }

    #[test]
    fn take_drains_warnings() {
        let mut diag = Diagnostics::default();
        diag.warn(Warning::group_lookup_failed("403"));

        let taken = diag.take();
        assert_eq!(taken.len(), 1);
        assert_eq!(taken[0].kind, WarningKind::GroupLookupFailed);
        assert!(!diag.has_warnings());
    }
}
