use crate::domain::model::{DepthChartSnapshot, Player, Position};

/// 深度圖儲存介面。所有操作都不會失敗：不存在的 position / player 視為 no-op，
/// 超出範圍的 depth 會被夾回 `[0, len]`。
pub trait DepthChart {
    fn add_player(&mut self, player: Player, position: &Position, depth: Option<i64>);

    fn remove_player(&mut self, player: &Player, position: &Position);

    fn players_under(&self, player: &Player, position: &Position) -> Vec<Player>;

    fn snapshot(&self) -> DepthChartSnapshot;
}
