use super::VertexId;
use crate::core::math::Vector2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One vertex of a [GraphSnapshot].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SnapshotVertex<T> {
    pub id: VertexId,
    pub position: Vector2<T>,
    pub neighbors: Vec<VertexId>,
}

/// Position based dump of a [VisibilityGraph](super::VisibilityGraph), meant for drawing and
/// debugging by external tools.
///
/// Vertexes are listed in [VertexId] order, each neighbor list is sorted.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GraphSnapshot<T> {
    pub polygons: Vec<Vec<Vector2<T>>>,
    pub vertexes: Vec<SnapshotVertex<T>>,
}

impl<T> GraphSnapshot<T>
where
    T: Copy,
{
    /// Every visibility link once, as a pair of end positions.
    pub fn segments(&self) -> Vec<(Vector2<T>, Vector2<T>)> {
        let mut result = Vec::new();
        for v in &self.vertexes {
            for n in v.neighbors.iter().filter(|&&n| n > v.id) {
                if let Ok(i) = self.vertexes.binary_search_by(|other| other.id.cmp(n)) {
                    result.push((v.position, self.vertexes[i].position));
                }
            }
        }

        result
    }
}
