use crate::utils::error::DepthChartError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub type PlayerId = i32;

/// 球員身分。所有排序操作只比對 `player_id`。
#[derive(Debug, Clone)]
pub struct Player {
    pub player_id: PlayerId,
    pub name: String,
    pub primary_position: Position,
}

impl Player {
    pub fn new(player_id: PlayerId, name: impl Into<String>, primary_position: Position) -> Self {
        Self {
            player_id,
            name: name.into(),
            primary_position,
        }
    }

    pub fn is_same_player(&self, other: &Player) -> bool {
        self.player_id == other.player_id
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_player(other)
    }
}

impl Eq for Player {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    code: String,
}

impl Position {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sport {
    Nfl,
    Mlb,
}

impl Sport {
    pub const ALL: [Sport; 2] = [Sport::Nfl, Sport::Mlb];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Nfl => "NFL",
            Sport::Mlb => "MLB",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = DepthChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sport::ALL
            .into_iter()
            .find(|sport| sport.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DepthChartError::UnknownSport {
                name: s.to_string(),
            })
    }
}

/// 某一時間點的深度圖複本：position code → 依排名排序的 player id。
/// 順序為各 position 第一次被使用的順序。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepthChartSnapshot {
    entries: Vec<(String, Vec<PlayerId>)>,
}

impl DepthChartSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, code: impl Into<String>, ids: Vec<PlayerId>) {
        let code = code.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == code) {
            Some((_, existing_ids)) => *existing_ids = ids,
            None => self.entries.push((code, ids)),
        }
    }

    pub fn get(&self, code: &str) -> Option<&[PlayerId]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == code)
            .map(|(_, ids)| ids.as_slice())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PlayerId])> {
        self.entries
            .iter()
            .map(|(code, ids)| (code.as_str(), ids.as_slice()))
    }
}

impl fmt::Display for DepthChartSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (code, ids) in self.iter() {
            let joined = ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "{}: [{}]", code, joined)?;
        }
        Ok(())
    }
}

impl Serialize for DepthChartSnapshot {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (code, ids) in &self.entries {
            map.serialize_entry(code, ids)?;
        }
        map.end()
    }
}
