pub mod depth_chart;
pub mod registry;
pub mod service;

pub use crate::domain::model::{DepthChartSnapshot, Player, PlayerId, Position, Sport};
pub use crate::domain::ports::DepthChart;
pub use crate::utils::error::Result;
