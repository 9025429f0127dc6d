use depth_chart::{
    DepthChart, DepthChartError, DepthChartService, InMemoryDepthChart, Player, PositionRegistry,
    Position, Sport,
};

fn wr() -> Position {
    Position::new("WR")
}

fn bob() -> Player {
    Player::new(1, "Bob", wr())
}

fn alice() -> Player {
    Player::new(2, "Alice", wr())
}

fn charlie() -> Player {
    Player::new(3, "Charlie", wr())
}

fn wr_ids(chart: &InMemoryDepthChart) -> Vec<i32> {
    chart
        .snapshot()
        .get("WR")
        .map(|ids| ids.to_vec())
        .unwrap_or_default()
}

fn three_receivers() -> InMemoryDepthChart {
    let mut chart = InMemoryDepthChart::new();
    chart.add_player(bob(), &wr(), Some(0));
    chart.add_player(alice(), &wr(), Some(0));
    chart.add_player(charlie(), &wr(), Some(2));
    chart
}

#[test]
fn test_insert_at_depth_builds_ranking() {
    let mut chart = InMemoryDepthChart::new();

    chart.add_player(bob(), &wr(), Some(0));
    assert_eq!(wr_ids(&chart), vec![1]);

    chart.add_player(alice(), &wr(), Some(0));
    assert_eq!(wr_ids(&chart), vec![2, 1]);

    chart.add_player(charlie(), &wr(), Some(2));
    assert_eq!(wr_ids(&chart), vec![2, 1, 3]);
}

#[test]
fn test_players_under_alice() {
    let chart = three_receivers();

    let under: Vec<i32> = chart
        .players_under(&alice(), &wr())
        .into_iter()
        .map(|p| p.player_id)
        .collect();

    assert_eq!(under, vec![1, 3]);
}

#[test]
fn test_remove_bob_from_receivers() {
    let mut chart = three_receivers();

    chart.remove_player(&bob(), &wr());

    assert_eq!(wr_ids(&chart), vec![2, 3]);
}

#[test]
fn test_re_adding_player_repositions_instead_of_duplicating() {
    let mut chart = InMemoryDepthChart::new();

    chart.add_player(bob(), &wr(), None);
    chart.add_player(bob(), &wr(), Some(0));

    assert_eq!(wr_ids(&chart), vec![1]);
}

#[test]
fn test_depth_beyond_length_appends() {
    let mut chart = InMemoryDepthChart::new();
    chart.add_player(bob(), &wr(), None);

    chart.add_player(alice(), &wr(), Some(5));

    assert_eq!(wr_ids(&chart), vec![1, 2]);
}

#[test]
fn test_wr_is_rejected_for_mlb() {
    let registry = PositionRegistry::global();

    assert!(!registry.is_valid("WR", Sport::Mlb));
    assert!(matches!(
        registry.create("WR", Sport::Mlb),
        Err(DepthChartError::InvalidPosition { .. })
    ));

    let mut service = DepthChartService::new(InMemoryDepthChart::new());
    let wendy = Player::new(12, "WrongSport Wendy", wr());
    let result = service.add_player(wendy, &wr(), Sport::Mlb, Some(0));
    assert!(result.is_err());
    assert!(service.full_depth_chart().is_empty());
}

#[test]
fn test_append_default_matches_explicit_length() {
    let mut implicit = three_receivers();
    let mut explicit = three_receivers();
    let dave = Player::new(4, "Dave", wr());

    implicit.add_player(dave.clone(), &wr(), None);
    explicit.add_player(dave, &wr(), Some(3));

    assert_eq!(implicit.snapshot(), explicit.snapshot());
}

#[test]
fn test_negative_depth_behaves_as_zero() {
    let mut negative = three_receivers();
    let mut zero = three_receivers();
    let dave = Player::new(4, "Dave", wr());

    negative.add_player(dave.clone(), &wr(), Some(-1));
    zero.add_player(dave, &wr(), Some(0));

    assert_eq!(wr_ids(&negative), vec![4, 2, 1, 3]);
    assert_eq!(negative.snapshot(), zero.snapshot());
}

#[test]
fn test_uniqueness_after_many_reinserts() {
    let mut chart = InMemoryDepthChart::new();
    let depths = [Some(3), None, Some(-2), Some(1), Some(0), Some(9), None];

    for (round, depth) in depths.iter().enumerate() {
        for id in 1..=4 {
            chart.add_player(Player::new(id, format!("Player {}", round), wr()), &wr(), *depth);
        }
    }

    let mut ids = wr_ids(&chart);
    assert_eq!(ids.len(), 4);
    ids.sort();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn test_idempotent_removal() {
    let mut chart = three_receivers();
    let before = chart.snapshot();

    chart.remove_player(&Player::new(77, "Nobody", wr()), &wr());
    chart.remove_player(&alice(), &Position::new("TE"));

    assert_eq!(chart.snapshot(), before);
}

#[test]
fn test_position_present_only_while_occupied() {
    let mut chart = InMemoryDepthChart::new();
    let kr = Position::new("KR");

    chart.add_player(bob(), &kr, None);
    assert!(chart.snapshot().contains("KR"));

    chart.remove_player(&bob(), &kr);
    assert!(!chart.snapshot().contains("KR"));

    chart.remove_player(&bob(), &kr);
    assert!(chart.snapshot().is_empty());
}
