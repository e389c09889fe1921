use naobot_core::{planar_distance, PlayerId, Vector3};

/// One player in a [`RankedDistanceTable`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankEntry {
    pub id: PlayerId,
    pub position: Vector3,
    /// Planar distance to the table's reference point
    pub distance: f64,
}

/// Players ordered by their distance to a reference point, nearest first.
///
/// Equal distances are kept as separate entries and ordered by jersey number, so two
/// players beamed to mirrored spots never collapse into one.
#[derive(Clone, Debug, Default)]
pub struct RankedDistanceTable {
    entries: Vec<RankEntry>,
}

impl RankedDistanceTable {
    /// Rank `players` by their planar distance to `reference`.
    pub fn build(players: &[(PlayerId, Vector3)], reference: Vector3) -> Self {
        let mut entries: Vec<_> = players
            .iter()
            .map(|&(id, position)| RankEntry {
                id,
                position,
                distance: planar_distance(position, reference),
            })
            .collect();
        entries.sort_by(|a, b| a.distance.total_cmp(&b.distance).then(a.id.cmp(&b.id)));
        Self { entries }
    }

    /// Zero-based rank of `id`, or None if the player is not in the table.
    pub fn rank_of(&self, id: PlayerId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// The nearest player.
    pub fn nearest(&self) -> Option<&RankEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries, nearest first.
    pub fn iter(&self) -> impl Iterator<Item = &RankEntry> {
        self.entries.iter()
    }
}
