//! Bridge Session
//!
//! Owns one element registry and runs commands against it, serially.
//! Unknown ids never fail a command; only malformed input does.

use dom::{ElementRegistry, RegistryConfig};

use crate::error::Result;
use crate::protocol::{Command, Reply, Request, Response};

/// Bridge configuration
#[derive(Debug, Clone, Default)]
pub struct BridgeConfig {
    pub registry: RegistryConfig,
}

/// Command executor bound to a single registry
#[derive(Debug, Default)]
pub struct Bridge {
    registry: ElementRegistry,
}

impl Bridge {
    pub fn new() -> Self {
        Self::with_config(BridgeConfig::default())
    }

    pub fn with_config(config: BridgeConfig) -> Self {
        Self {
            registry: ElementRegistry::with_config(config.registry),
        }
    }

    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ElementRegistry {
        &mut self.registry
    }

    /// Run one command. Unknown ids are silent no-ops or empty values.
    pub fn execute(&mut self, command: Command) -> Reply {
        tracing::debug!("Executing {:?}", command);

        match command {
            Command::CreateElement { id } => {
                self.registry.create(&id);
                Reply::Done
            }
            Command::SetAttribute { id, key, value } => {
                self.registry.set_attribute(&id, &key, &value);
                Reply::Done
            }
            Command::GetAttribute { id, key } => Reply::Value {
                value: self.registry.get_attribute(&id, &key).to_string(),
            },
            Command::AppendChild {
                parent_id,
                child_id,
            } => {
                self.registry.attach_child(&parent_id, &child_id);
                Reply::Done
            }
            Command::FirstChild { parent_id } => Reply::Value {
                value: self.registry.first_child(&parent_id).to_string(),
            },
            Command::Clear => {
                self.registry.clear();
                Reply::Done
            }
            Command::ElementCount => Reply::Count {
                count: self.registry.element_count(),
            },
        }
    }

    /// Run one command, failing on unknown ids and duplicate creation
    pub fn execute_checked(&mut self, command: Command) -> Result<Reply> {
        match command {
            Command::CreateElement { id } => {
                self.registry.try_create(&id)?;
                Ok(Reply::Done)
            }
            Command::SetAttribute { id, key, value } => {
                self.registry.try_set_attribute(&id, &key, &value)?;
                Ok(Reply::Done)
            }
            Command::GetAttribute { id, key } => {
                let element = self
                    .registry
                    .element(&id)
                    .ok_or_else(|| dom::DomError::ElementNotFound(id.clone()))?;
                Ok(Reply::Value {
                    value: element.get_attribute(&key).to_string(),
                })
            }
            Command::AppendChild {
                parent_id,
                child_id,
            } => {
                self.registry.try_attach_child(&parent_id, &child_id)?;
                Ok(Reply::Done)
            }
            Command::FirstChild { parent_id } => {
                if !self.registry.contains(&parent_id) {
                    return Err(dom::DomError::ElementNotFound(parent_id).into());
                }
                Ok(Reply::Value {
                    value: self.registry.first_child(&parent_id).to_string(),
                })
            }
            other => Ok(self.execute(other)),
        }
    }

    /// Run commands in order
    pub fn execute_batch(&mut self, commands: impl IntoIterator<Item = Command>) -> Vec<Reply> {
        commands
            .into_iter()
            .map(|command| self.execute(command))
            .collect()
    }

    /// Decode a [`Request`], run it, encode the [`Response`]
    pub fn execute_json(&mut self, request: &str) -> Result<String> {
        let request: Request = serde_json::from_str(request).map_err(|e| {
            tracing::warn!("Malformed request: {}", e);
            e
        })?;

        let response = Response {
            request_id: request.request_id,
            reply: self.execute(request.command),
        };

        Ok(serde_json::to_string(&response)?)
    }
}
