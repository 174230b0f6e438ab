// ABOUTME: Command module aggregator for the netfield CLI.
// ABOUTME: Shared context plus container, deploy, and method command handlers.

mod container;
mod deploy;
mod method;

pub use container::{create_and_deploy, create_container, update_and_redeploy};
pub use deploy::{deploy_container, deploy_on_group};
pub use method::post_method;

use netfield::api::HttpClient;
use netfield::config::SearchRoots;
use netfield::output::Output;
use netfield::types::ApiKey;
use netfield::workflow::Workflow;

/// What every command needs besides its own arguments.
pub struct Context {
    pub client: HttpClient,
    pub roots: SearchRoots,
    pub output: Output,
}

impl Context {
    pub fn workflow(&self, key: &str) -> Workflow<HttpClient> {
        Workflow::new(self.client.clone(), ApiKey::new(key))
    }

    /// Surface warnings a workflow collected along the way.
    pub fn report_warnings(&self, workflow: &mut Workflow<HttpClient>) {
        for warning in workflow.diagnostics_mut().take() {
            self.output.warning(&warning.message);
        }
    }
}
