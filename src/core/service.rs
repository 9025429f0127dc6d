use crate::core::registry::PositionRegistry;
use crate::domain::model::{DepthChartSnapshot, Player, Position, Sport};
use crate::domain::ports::DepthChart;
use crate::utils::error::Result;

/// 先用 [`PositionRegistry`] 驗證 position，再交給底層的 [`DepthChart`]。
pub struct DepthChartService<C: DepthChart> {
    chart: C,
    registry: &'static PositionRegistry,
}

impl<C: DepthChart> DepthChartService<C> {
    pub fn new(chart: C) -> Self {
        Self::with_registry(chart, PositionRegistry::global())
    }

    pub fn with_registry(chart: C, registry: &'static PositionRegistry) -> Self {
        Self { chart, registry }
    }

    pub fn add_player(
        &mut self,
        player: Player,
        position: &Position,
        sport: Sport,
        depth: Option<i64>,
    ) -> Result<()> {
        self.validate_position(position, sport)?;
        tracing::debug!(
            "Adding player {} ({}) to {} {} at depth {:?}",
            player.player_id,
            player.name,
            sport,
            position,
            depth
        );
        self.chart.add_player(player, position, depth);
        Ok(())
    }

    pub fn remove_player(
        &mut self,
        player: &Player,
        position: &Position,
        sport: Sport,
    ) -> Result<()> {
        self.validate_position(position, sport)?;
        tracing::debug!(
            "Removing player {} from {} {}",
            player.player_id,
            sport,
            position
        );
        self.chart.remove_player(player, position);
        Ok(())
    }

    pub fn players_under(
        &self,
        player: &Player,
        position: &Position,
        sport: Sport,
    ) -> Result<Vec<Player>> {
        self.validate_position(position, sport)?;
        Ok(self.chart.players_under(player, position))
    }

    pub fn full_depth_chart(&self) -> DepthChartSnapshot {
        self.chart.snapshot()
    }

    fn validate_position(&self, position: &Position, sport: Sport) -> Result<()> {
        self.registry
            .ensure_valid(position.code(), sport)
            .inspect_err(|e| tracing::warn!("Rejected position: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::depth_chart::InMemoryDepthChart;
    use crate::utils::error::DepthChartError;

    fn service() -> DepthChartService<InMemoryDepthChart> {
        DepthChartService::new(InMemoryDepthChart::new())
    }

    #[test]
    fn test_add_player_to_valid_nfl_position() {
        let mut service = service();
        let wr = Position::new("WR");

        service
            .add_player(Player::new(1, "Bob", wr.clone()), &wr, Sport::Nfl, Some(0))
            .unwrap();

        assert_eq!(service.full_depth_chart().get("WR"), Some(&[1][..]));
    }

    #[test]
    fn test_add_player_to_invalid_mlb_position_leaves_chart_untouched() {
        let mut service = service();
        let qb = Position::new("QB");

        let err = service
            .add_player(Player::new(2, "Joe", qb.clone()), &qb, Sport::Mlb, Some(0))
            .unwrap_err();

        assert!(matches!(err, DepthChartError::InvalidPosition { .. }));
        assert!(err.to_string().contains("not a valid"));
        assert!(service.full_depth_chart().is_empty());
    }

    #[test]
    fn test_remove_and_query_validate_position() {
        let mut service = service();
        let wr = Position::new("WR");
        let bob = Player::new(1, "Bob", wr.clone());
        service.add_player(bob.clone(), &wr, Sport::Nfl, None).unwrap();

        assert!(service.players_under(&bob, &wr, Sport::Mlb).is_err());
        assert!(service.remove_player(&bob, &wr, Sport::Mlb).is_err());
        assert_eq!(service.full_depth_chart().get("WR"), Some(&[1][..]));

        service.remove_player(&bob, &wr, Sport::Nfl).unwrap();
        assert!(!service.full_depth_chart().contains("WR"));
    }
}
