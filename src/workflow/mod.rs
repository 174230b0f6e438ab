// ABOUTME: Orchestration helpers composing primitive API calls into multi-step workflows.
// ABOUTME: Create-or-update, forced redeploy, group fan-out, and retrying method calls.

mod deploy;
mod group;
mod lookup;
mod method;
mod upsert;

pub use deploy::RedeployOutcome;
pub use group::{DeviceAttempt, GroupDeployReport};
pub use lookup::PAGE_SIZE;
pub use method::{MethodCall, RetryPolicy};
pub use upsert::{UpsertAction, UpsertOutcome};

use crate::api::NetfieldApi;
use crate::diagnostics::Diagnostics;
use crate::types::ApiKey;

/// Runs workflows against one API client with one credential.
///
/// Every call inside a workflow completes before the next one is issued.
/// Nothing is cached between workflows; each lookup asks the server again.
pub struct Workflow<A> {
    api: A,
    key: ApiKey,
    diagnostics: Diagnostics,
}

impl<A: NetfieldApi> Workflow<A> {
    pub fn new(api: A, key: ApiKey) -> Self {
        Self {
            api,
            key,
            diagnostics: Diagnostics::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Warnings recorded by workflows run so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }
}
