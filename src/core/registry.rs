use crate::domain::model::{Position, Sport};
use crate::utils::error::{DepthChartError, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

const NFL_POSITIONS: &[&str] = &["QB", "WR", "RB", "TE", "K", "P", "KR", "PR"];
const MLB_POSITIONS: &[&str] = &["SP", "RP", "C", "1B", "2B", "3B", "SS", "LF", "RF", "CF", "DH"];

/// 各運動合法的 position code。建立後不可變更。
#[derive(Debug, Clone)]
pub struct PositionRegistry {
    positions: HashMap<Sport, &'static [&'static str]>,
}

impl Default for PositionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionRegistry {
    pub fn new() -> Self {
        let positions = HashMap::from([(Sport::Nfl, NFL_POSITIONS), (Sport::Mlb, MLB_POSITIONS)]);
        Self { positions }
    }

    /// 整個程序共用的唯讀實例
    pub fn global() -> &'static PositionRegistry {
        static REGISTRY: OnceLock<PositionRegistry> = OnceLock::new();
        REGISTRY.get_or_init(PositionRegistry::new)
    }

    pub fn is_valid(&self, code: &str, sport: Sport) -> bool {
        self.positions
            .get(&sport)
            .is_some_and(|codes| codes.iter().any(|c| *c == code))
    }

    pub fn create(&self, code: &str, sport: Sport) -> Result<Position> {
        self.ensure_valid(code, sport)?;
        Ok(Position::new(code))
    }

    pub fn ensure_valid(&self, code: &str, sport: Sport) -> Result<()> {
        if self.is_valid(code, sport) {
            Ok(())
        } else {
            Err(DepthChartError::InvalidPosition {
                code: code.to_string(),
                sport,
            })
        }
    }

    pub fn codes(&self, sport: Sport) -> &[&'static str] {
        self.positions.get(&sport).copied().unwrap_or(&[])
    }
}
