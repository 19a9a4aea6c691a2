use std::{io, sync::mpsc::SendError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::event::EngineEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum TabstripError {
    #[error("Invalid action: {0}")]
    Action(String),
    #[error("Event channel error: {0}")]
    Channel(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("File system error: {0}")]
    Io(String),
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("(De)serialization error: {0}")]
    Serialization(String),
}

impl From<io::Error> for TabstripError {
    fn from(x: io::Error) -> Self {
        match x.kind() {
            io::ErrorKind::NotFound => TabstripError::NotFound(format!("{x}")),
            _ => TabstripError::Io(format!("IOError: {}", x.kind())),
        }
    }
}

impl From<toml::de::Error> for TabstripError {
    fn from(src: toml::de::Error) -> TabstripError {
        TabstripError::Config(format!("Toml deserialization error: {src}"))
    }
}

impl From<toml::ser::Error> for TabstripError {
    fn from(src: toml::ser::Error) -> TabstripError {
        TabstripError::Config(format!("Toml serialization error: {src}"))
    }
}

impl From<uuid::Error> for TabstripError {
    fn from(src: uuid::Error) -> TabstripError {
        TabstripError::Serialization(format!("UUID conversion failed: {src}"))
    }
}

impl From<SendError<EngineEvent>> for TabstripError {
    fn from(x: SendError<EngineEvent>) -> Self {
        TabstripError::Channel(format!(
            "could not transmit engine event to the host, {:?}",
            x.0
        ))
    }
}
