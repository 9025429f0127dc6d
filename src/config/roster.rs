use crate::core::service::DepthChartService;
use crate::domain::model::{Player, PlayerId, Position, Sport};
use crate::domain::ports::DepthChart;
use crate::utils::error::{DepthChartError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// TOML 名單檔：宣告球員，再依序放進深度圖，最後套用移除。
/// sport 以字串保存，由 [`Sport`] 的 `FromStr` 解析（不分大小寫）。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    pub sport: Option<String>,
    #[serde(default)]
    pub players: Vec<PlayerEntry>,
    #[serde(default)]
    pub placements: Vec<PlacementEntry>,
    #[serde(default)]
    pub removals: Vec<RemovalEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub id: PlayerId,
    pub name: String,
    pub position: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementEntry {
    pub player: PlayerId,
    pub position: String,
    pub sport: Option<String>,
    pub depth: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovalEntry {
    pub player: PlayerId,
    pub position: String,
    pub sport: Option<String>,
}

impl RosterConfig {
    /// 從 TOML 檔案載入名單
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn players(&self) -> HashMap<PlayerId, Player> {
        self.players
            .iter()
            .map(|entry| {
                let position = Position::new(&entry.position);
                (entry.id, Player::new(entry.id, entry.name.clone(), position))
            })
            .collect()
    }

    /// 名單層級的 sport，未設定時用 `default_sport`
    pub fn roster_sport(&self, default_sport: Sport) -> Result<Sport> {
        resolve_sport(self.sport.as_deref(), default_sport)
    }

    /// 依序套用所有 placement 與 removal。sport 的優先順序：
    /// 單筆設定 > 名單的 `sport` > `default_sport`。
    pub fn apply<C: DepthChart>(
        &self,
        service: &mut DepthChartService<C>,
        default_sport: Sport,
    ) -> Result<()> {
        let players = self.players();
        let roster_sport = self.roster_sport(default_sport)?;

        for placement in &self.placements {
            let player = lookup(&players, placement.player, "placements.player")?;
            service.add_player(
                player.clone(),
                &Position::new(&placement.position),
                resolve_sport(placement.sport.as_deref(), roster_sport)?,
                placement.depth,
            )?;
        }

        for removal in &self.removals {
            let player = lookup(&players, removal.player, "removals.player")?;
            service.remove_player(
                player,
                &Position::new(&removal.position),
                resolve_sport(removal.sport.as_deref(), roster_sport)?,
            )?;
        }

        tracing::info!(
            "Applied {} placements and {} removals",
            self.placements.len(),
            self.removals.len()
        );
        Ok(())
    }
}

fn resolve_sport(name: Option<&str>, fallback: Sport) -> Result<Sport> {
    name.map_or(Ok(fallback), |name| name.parse())
}

fn lookup<'a>(
    players: &'a HashMap<PlayerId, Player>,
    id: PlayerId,
    field: &str,
) -> Result<&'a Player> {
    players
        .get(&id)
        .ok_or_else(|| DepthChartError::InvalidConfigValueError {
            field: field.to_string(),
            value: id.to_string(),
            reason: "Player is not declared in [[players]]".to_string(),
        })
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        for player in &self.players {
            validate_non_empty_string("players.name", &player.name)?;
            validate_non_empty_string("players.position", &player.position)?;
        }
        validate_unique("players.id", self.players.iter().map(|p| p.id))?;

        // sport 名稱錯誤要回報成 UnknownSport，而不是 TOML 錯誤
        let roster_sport = self.roster_sport(Sport::Nfl)?;

        let players = self.players();
        for placement in &self.placements {
            lookup(&players, placement.player, "placements.player")?;
            validate_non_empty_string("placements.position", &placement.position)?;
            resolve_sport(placement.sport.as_deref(), roster_sport)?;
        }
        for removal in &self.removals {
            lookup(&players, removal.player, "removals.player")?;
            validate_non_empty_string("removals.position", &removal.position)?;
            resolve_sport(removal.sport.as_deref(), roster_sport)?;
        }

        if self.placements.is_empty() && self.removals.is_empty() {
            return Err(DepthChartError::ConfigError {
                message: "Roster has no [[placements]] or [[removals]] to apply".to_string(),
            });
        }

        Ok(())
    }
}
