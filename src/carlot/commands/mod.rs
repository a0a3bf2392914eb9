//! Table controller operations.
//!
//! Each submodule exposes a `run` function that takes the in-memory table
//! and, for mutations, the store to flush to. Validation always happens
//! before the table is touched; a successful mutation is saved right away.

use crate::config::InventoryConfig;
use crate::model::Car;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod sort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_cars: Vec<Car>,
    pub listed_cars: Vec<Car>,
    pub data_path: Option<PathBuf>,
    pub config: Option<InventoryConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_cars(mut self, cars: Vec<Car>) -> Self {
        self.affected_cars = cars;
        self
    }

    pub fn with_listed_cars(mut self, cars: Vec<Car>) -> Self {
        self.listed_cars = cars;
        self
    }

    pub fn with_data_path(mut self, path: PathBuf) -> Self {
        self.data_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: InventoryConfig) -> Self {
        self.config = Some(config);
        self
    }
}
