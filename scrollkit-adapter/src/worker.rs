use alloc::string::String;

use crate::{Environment, RegistrationError, WorkerRegistrar};

/// Script of the offline-support worker.
pub const WORKER_SCRIPT: &str = "/sw.js";

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkerRegistration {
    pub scope: String,
}

/// Result of an opportunistic worker registration. Never surfaced to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkerOutcome {
    /// Insecure origin or no worker support.
    Skipped,
    Registered(WorkerRegistration),
    Failed(RegistrationError),
}

/// Registers the offline worker when the environment allows it.
///
/// Failures are logged and returned; they never affect the rest of the page.
pub fn register_offline_worker<Env, R>(env: &Env, registrar: &R, script_url: &str) -> WorkerOutcome
where
    Env: Environment,
    R: WorkerRegistrar,
{
    if !env.supports_workers() || !env.is_secure_origin() {
        kdebug!(
            secure = env.is_secure_origin(),
            supported = env.supports_workers(),
            "worker registration skipped"
        );
        return WorkerOutcome::Skipped;
    }
    match registrar.register(script_url) {
        Ok(registration) => {
            kdebug!(scope = %registration.scope, "worker registered");
            WorkerOutcome::Registered(registration)
        }
        Err(err) => {
            kwarn!(error = %err, script_url, "worker registration failed");
            WorkerOutcome::Failed(err)
        }
    }
}
