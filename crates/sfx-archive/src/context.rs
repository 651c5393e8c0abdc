use std::path::{Path, PathBuf};

use crate::options::ExtractOptions;
use crate::payload::Payload;
use crate::policy::OverwritePolicy;

/// Everything a single installation run needs, built once up front.
#[derive(Clone, Debug)]
pub struct InstallContext<'a> {
    payload: Payload<'a>,
    target: PathBuf,
    policy: OverwritePolicy,
    options: ExtractOptions,
}

impl<'a> InstallContext<'a> {
    /// Without an explicit (non-empty) `target` the payload's app base is
    /// used, relative to the working directory.
    pub fn new(payload: Payload<'a>, target: Option<PathBuf>, options: ExtractOptions) -> Self {
        let target = target
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(payload.app_base()));

        Self {
            policy: OverwritePolicy::for_app(payload.app_base()),
            payload,
            target,
            options,
        }
    }

    pub fn with_policy(mut self, policy: OverwritePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn payload(&self) -> &Payload<'a> {
        &self.payload
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn policy(&self) -> &OverwritePolicy {
        &self.policy
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }
}
