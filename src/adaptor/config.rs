/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Configuration for the structure/atoms adaptor

use serde::{Deserialize, Serialize};

/// What to do with a site holding more than one species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisorderPolicy {
    /// Reduce the site to its canonical element
    #[default]
    Canonical,
    /// Fail with [`AdaptorError::DisorderedSite`](super::AdaptorError::DisorderedSite)
    Reject,
}

/// What to do with selective dynamics that fix only some axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartialDynamicsPolicy {
    /// Treat the site as free; its flags are not carried over
    #[default]
    Ignore,
    /// Fail with [`AdaptorError::PartialDynamics`](super::AdaptorError::PartialDynamics)
    Reject,
}

/// Adaptor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptorConfig {
    /// Handling of disordered sites when building atoms
    pub disorder_policy: DisorderPolicy,
    /// Handling of partially fixed sites when building atoms
    pub partial_dynamics: PartialDynamicsPolicy,
}

impl AdaptorConfig {
    /// Reject disordered sites and partial dynamics instead of dropping information
    pub fn strict() -> Self {
        Self {
            disorder_policy: DisorderPolicy::Reject,
            partial_dynamics: PartialDynamicsPolicy::Reject,
        }
    }

    pub fn with_disorder_policy(mut self, policy: DisorderPolicy) -> Self {
        self.disorder_policy = policy;
        self
    }

    pub fn with_partial_dynamics(mut self, policy: PartialDynamicsPolicy) -> Self {
        self.partial_dynamics = policy;
        self
    }
}
