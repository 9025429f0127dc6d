pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::roster::RosterConfig;
pub use core::{
    depth_chart::{InMemoryDepthChart, SharedDepthChart},
    registry::PositionRegistry,
    service::DepthChartService,
};
pub use domain::model::{DepthChartSnapshot, Player, PlayerId, Position, Sport};
pub use domain::ports::DepthChart;
pub use utils::error::{DepthChartError, Result};
