//! Per-level generation tables built once every data file is loaded.

use angband_rng::GameRng;

use crate::error::FinishError;
use crate::registry::GameContent;

/// One generation candidate: a record index, the depths it may appear at
/// and its weight there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocEntry {
    pub index: usize,
    pub min_level: i32,
    pub max_level: i32,
    pub prob: u32,
}

/// Candidates sorted by minimum level, ties in index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocTable {
    entries: Vec<AllocEntry>,
    /// Level 0 entries only appear at level 0.
    town_only: bool,
}

impl AllocTable {
    fn new(mut entries: Vec<AllocEntry>, town_only: bool) -> Self {
        entries.sort_by_key(|e| (e.min_level, e.index));
        Self { entries, town_only }
    }

    pub fn entries(&self) -> &[AllocEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn eligible(&self, level: i32) -> impl Iterator<Item = &AllocEntry> {
        let town_only = self.town_only;
        self.entries
            .iter()
            .take_while(move |e| e.min_level <= level)
            .filter(move |e| level <= e.max_level)
            .filter(move |e| !(town_only && level > 0 && e.min_level <= 0))
    }

    /// Total weight of the entries allowed at `level`.
    pub fn total(&self, level: i32) -> u32 {
        self.eligible(level)
            .fold(0u32, |total, e| total.saturating_add(e.prob))
    }

    /// Pick an index allowed at `level`, weighted by probability.
    pub fn pick(&self, level: i32, rng: &mut GameRng) -> Option<usize> {
        let total = self.total(level);
        if total == 0 {
            return None;
        }
        let mut value = rng.randint0(i32::try_from(total).unwrap_or(i32::MAX)) as u32;
        for entry in self.eligible(level) {
            if value < entry.prob {
                return Some(entry.index);
            }
            value -= entry.prob;
        }
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocTables {
    pub objects: AllocTable,
    pub monsters: AllocTable,
    pub egos: AllocTable,
}

/// Weight of a record with `1 in rarity` odds.
fn rarity_weight(rarity: i32) -> Option<u32> {
    u32::try_from(rarity)
        .ok()
        .filter(|&r| r > 0)
        .map(|r| 100 / r)
}

fn object_allocs(content: &GameContent) -> AllocTable {
    let entries = content
        .kinds
        .iter()
        .filter_map(|(kidx, kind)| {
            let prob = u32::try_from(kind.alloc.prob).ok().filter(|&p| p > 0)?;
            Some(AllocEntry {
                index: kidx,
                min_level: kind.alloc.min,
                max_level: kind.alloc.max,
                prob,
            })
        })
        .collect();
    AllocTable::new(entries, false)
}

/// Deeper monsters weigh more: one extra share per ten levels. Weights
/// saturate rather than wrap.
fn monster_allocs(content: &GameContent) -> AllocTable {
    let entries = content
        .monsters
        .iter()
        .filter_map(|(ridx, race)| {
            let depth = u32::try_from(race.level / 10).unwrap_or(0);
            Some(AllocEntry {
                index: ridx,
                min_level: race.level,
                max_level: i32::MAX,
                prob: rarity_weight(race.rarity)?.saturating_mul(depth.saturating_add(1)),
            })
        })
        .collect();
    AllocTable::new(entries, true)
}

fn ego_allocs(content: &GameContent) -> AllocTable {
    let entries = content
        .egos
        .iter()
        .filter_map(|(eidx, ego)| {
            Some(AllocEntry {
                index: eidx,
                min_level: ego.level,
                max_level: if ego.alloc.max > 0 { ego.alloc.max } else { i32::MAX },
                prob: rarity_weight(ego.rarity)?,
            })
        })
        .collect();
    AllocTable::new(entries, false)
}

/// Build every generation table. Fails when nothing can live in town.
pub fn init_alloc(content: &GameContent) -> Result<AllocTables, FinishError> {
    let monsters = monster_allocs(content);
    if !monsters.entries.iter().any(|e| e.min_level <= 0) {
        return Err(FinishError::NoTownMonsters);
    }
    let tables = AllocTables {
        objects: object_allocs(content),
        monsters,
        egos: ego_allocs(content),
    };
    log::debug!(
        "allocation tables: {} objects, {} monsters, {} egos",
        tables.objects.len(),
        tables.monsters.len(),
        tables.egos.len()
    );
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::DenseTable;
    use angband_types::{Allocation, EgoItem, MonsterRace, ObjectKind};

    fn race(ridx: usize, level: i32, rarity: i32) -> (i64, MonsterRace) {
        let mut r = MonsterRace::new(ridx, format!("race {ridx}"));
        r.level = level;
        r.rarity = rarity;
        (ridx as i64, r)
    }

    fn content() -> GameContent {
        let mut content = GameContent::default();
        content.monsters = DenseTable::compact(
            vec![race(1, 0, 1), race(2, 5, 2), race(3, 20, 4), race(4, 3, 0)],
            "monster",
        )
        .unwrap();
        let mut dagger = ObjectKind::new(1, "& Dagger~");
        dagger.alloc = Allocation {
            prob: 40,
            min: 0,
            max: 10,
        };
        let mut sword = ObjectKind::new(2, "& Long Sword~");
        sword.alloc = Allocation {
            prob: 20,
            min: 5,
            max: 100,
        };
        content.kinds = DenseTable::compact(vec![(1, dagger), (2, sword)], "object").unwrap();
        let mut ego = EgoItem::new(1, "of Slay Evil");
        ego.level = 10;
        ego.rarity = 3;
        content.egos = DenseTable::compact(vec![(1, ego)], "ego_item").unwrap();
        content
    }

    #[test]
    fn weights() {
        let tables = init_alloc(&content()).unwrap();
        let probs: Vec<_> = tables
            .monsters
            .entries()
            .iter()
            .map(|e| (e.index, e.prob))
            .collect();
        assert_eq!(probs, [(1, 100), (2, 50), (3, 75)]);
        assert_eq!(tables.egos.entries()[0].prob, 33);
        assert_eq!(tables.objects.len(), 2);
    }

    #[test]
    fn levels_gate_entries() {
        let tables = init_alloc(&content()).unwrap();
        assert_eq!(tables.objects.total(0), 40);
        assert_eq!(tables.objects.total(7), 60);
        assert_eq!(tables.objects.total(50), 20);
        assert_eq!(tables.monsters.total(0), 100);
        // town monsters stay in town
        assert_eq!(tables.monsters.total(10), 50);
        assert_eq!(tables.egos.total(9), 0);
    }

    #[test]
    fn pick_stays_in_range() {
        let tables = init_alloc(&content()).unwrap();
        let mut rng = GameRng::new(42);
        for _ in 0..200 {
            let ridx = tables.monsters.pick(25, &mut rng).unwrap();
            assert!(ridx == 2 || ridx == 3);
        }
        assert_eq!(tables.monsters.pick(0, &mut rng), Some(1));
        assert_eq!(tables.egos.pick(1, &mut rng), None);
    }

    #[test]
    fn huge_weights_saturate() {
        let mut content = content();
        content.monsters = DenseTable::compact(
            vec![race(1, 0, 1), race(2, i32::MAX, 1), race(3, 500_000_000, 1)],
            "monster",
        )
        .unwrap();
        let tables = init_alloc(&content).unwrap();
        let deep = tables.monsters.entries().last().unwrap();
        assert_eq!((deep.index, deep.prob), (2, u32::MAX));
        assert_eq!(tables.monsters.total(i32::MAX), u32::MAX);

        let mut rng = GameRng::new(7);
        let ridx = tables.monsters.pick(i32::MAX, &mut rng).unwrap();
        assert!(ridx == 2 || ridx == 3);
    }

    #[test]
    fn no_town_monsters() {
        let mut content = content();
        content.monsters = DenseTable::compact(vec![race(2, 5, 2)], "monster").unwrap();
        assert_eq!(init_alloc(&content), Err(FinishError::NoTownMonsters));
    }
}
