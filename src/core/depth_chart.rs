use crate::domain::model::{DepthChartSnapshot, Player, Position};
use crate::domain::ports::DepthChart;
use std::sync::{Arc, Mutex, MutexGuard};

/// 記憶體內的深度圖。每個 position 依第一次使用的順序保存，
/// list 清空時即移除該 position。
#[derive(Debug, Clone, Default)]
pub struct InMemoryDepthChart {
    chart: Vec<(Position, Vec<Player>)>,
}

impl InMemoryDepthChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth_of(&self, player: &Player, position: &Position) -> Option<usize> {
        self.list(position)?
            .iter()
            .position(|p| p.is_same_player(player))
    }

    fn list(&self, position: &Position) -> Option<&Vec<Player>> {
        self.chart
            .iter()
            .find(|(existing, _)| existing == position)
            .map(|(_, list)| list)
    }

    fn slot(&self, position: &Position) -> Option<usize> {
        self.chart.iter().position(|(existing, _)| existing == position)
    }

    fn list_mut_or_insert(&mut self, position: &Position) -> &mut Vec<Player> {
        let index = match self.slot(position) {
            Some(index) => index,
            None => {
                self.chart.push((position.clone(), Vec::new()));
                self.chart.len() - 1
            }
        };
        &mut self.chart[index].1
    }
}

fn insert_index(depth: Option<i64>, len: usize) -> usize {
    match depth {
        Some(depth) if depth <= 0 => 0,
        Some(depth) => usize::try_from(depth).map_or(len, |d| d.min(len)),
        None => len,
    }
}

impl DepthChart for InMemoryDepthChart {
    fn add_player(&mut self, player: Player, position: &Position, depth: Option<i64>) {
        let list = self.list_mut_or_insert(position);

        // 已在名單上就先移除，再插入到新的位置
        list.retain(|p| !p.is_same_player(&player));

        let index = insert_index(depth, list.len());
        list.insert(index, player);
    }

    fn remove_player(&mut self, player: &Player, position: &Position) {
        let Some(slot) = self.slot(position) else {
            return;
        };

        let list = &mut self.chart[slot].1;
        if let Some(index) = list.iter().position(|p| p.is_same_player(player)) {
            list.remove(index);
        }

        if list.is_empty() {
            self.chart.remove(slot);
        }
    }

    fn players_under(&self, player: &Player, position: &Position) -> Vec<Player> {
        let Some(list) = self.list(position) else {
            return Vec::new();
        };

        match list.iter().position(|p| p.is_same_player(player)) {
            Some(index) => list[index + 1..].to_vec(),
            None => Vec::new(),
        }
    }

    fn snapshot(&self) -> DepthChartSnapshot {
        let mut snapshot = DepthChartSnapshot::new();
        for (position, list) in &self.chart {
            snapshot.push(position.code(), list.iter().map(|p| p.player_id).collect());
        }
        snapshot
    }
}

/// 跨執行緒共用的深度圖。每個操作在整段執行期間持有同一把鎖，
/// 所以 `add_player` 的「先移除再插入」不會被其他執行緒觀察到中間狀態。
#[derive(Debug, Default)]
pub struct SharedDepthChart<C: DepthChart = InMemoryDepthChart> {
    inner: Arc<Mutex<C>>,
}

impl<C: DepthChart> Clone for SharedDepthChart<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: DepthChart> SharedDepthChart<C> {
    pub fn new(chart: C) -> Self {
        Self {
            inner: Arc::new(Mutex::new(chart)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, C> {
        // 儲存操作不會留下半完成的狀態，poisoned 也可以直接沿用
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<C: DepthChart> DepthChart for SharedDepthChart<C> {
    fn add_player(&mut self, player: Player, position: &Position, depth: Option<i64>) {
        self.lock().add_player(player, position, depth);
    }

    fn remove_player(&mut self, player: &Player, position: &Position) {
        self.lock().remove_player(player, position);
    }

    fn players_under(&self, player: &Player, position: &Position) -> Vec<Player> {
        self.lock().players_under(player, position)
    }

    fn snapshot(&self) -> DepthChartSnapshot {
        self.lock().snapshot()
    }
}
