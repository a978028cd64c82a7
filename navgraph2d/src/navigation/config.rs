use crate::core::traits::Real;
use crate::error::NavError;
use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Agent kind graphs are baked for.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentConfig<T = f64> {
    pub name: String,
    pub radius: T,
}

impl<T> AgentConfig<T> {
    pub fn new(name: impl Into<String>, radius: T) -> Self {
        AgentConfig {
            name: name.into(),
            radius,
        }
    }
}

/// Agents and areas known to a [NavService](super::NavService). One graph is baked per area and
/// agent pair.
///
/// # Examples
///
/// ```
/// # use navgraph2d::navigation::*;
/// let config = NavConfig {
///     agents: vec![AgentConfig::new("small", 0.25), AgentConfig::new("large", 1.0)],
///     areas: vec!["level_1".to_string()],
/// };
/// assert!(config.validate().is_ok());
/// assert_eq!(config.agent("large").map(|a| a.radius), Some(1.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavConfig<T = f64> {
    pub agents: Vec<AgentConfig<T>>,
    pub areas: Vec<String>,
}

impl<T> NavConfig<T>
where
    T: Real,
{
    /// Check names are non-empty and unique, and every radius is finite and non-negative.
    pub fn validate(&self) -> Result<(), NavError> {
        let mut names = BTreeSet::new();
        for agent in &self.agents {
            if agent.name.is_empty() {
                return Err(NavError::InvalidConfig("empty agent name".to_string()));
            }
            if !names.insert(agent.name.as_str()) {
                return Err(NavError::InvalidConfig(format!(
                    "duplicate agent '{}'",
                    agent.name
                )));
            }
            if !agent.radius.is_finite() || agent.radius < T::zero() {
                return Err(NavError::InvalidConfig(format!(
                    "agent '{}' has invalid radius {:?}",
                    agent.name, agent.radius
                )));
            }
        }

        let mut areas = BTreeSet::new();
        for area in &self.areas {
            if area.is_empty() {
                return Err(NavError::InvalidConfig("empty area name".to_string()));
            }
            if !areas.insert(area.as_str()) {
                return Err(NavError::InvalidConfig(format!("duplicate area '{area}'")));
            }
        }

        Ok(())
    }

    pub fn agent(&self, name: &str) -> Option<&AgentConfig<T>> {
        self.agents.iter().find(|a| a.name == name)
    }

    pub fn has_area(&self, name: &str) -> bool {
        self.areas.iter().any(|a| a == name)
    }
}
