use cozy_chess::Move;
use evaluation::scores::{clamp_decisive, is_decisive};

/// A node of the best-first tree. Scores are relative to the side to move at the node,
/// except a child's score, which is stored as its own side to move sees it.
#[derive(Debug, Clone)]
pub struct Node {
    /// Move leading here from the parent, `None` for the root.
    pub mv: Option<Move>,
    pub score: i16,
    /// `None` until expanded.
    pub children: Option<Vec<Node>>,
    /// Number of leaves below (1 for a leaf).
    pub size: u64,
    /// Nothing left to learn here. Never reset once set.
    pub complete: bool,
}

impl Node {
    pub fn root() -> Self {
        Self {
            mv: None,
            score: 0,
            children: None,
            size: 1,
            complete: false,
        }
    }

    pub fn leaf(mv: Move, score: i16) -> Self {
        Self {
            mv: Some(mv),
            score,
            children: None,
            size: 1,
            complete: false,
        }
    }

    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Recomputes size and score from the children. A decisive score is pulled one
    /// pawn toward zero and completes the node, since a forced result needs no more work.
    pub fn aggregate(&mut self) {
        let Some(children) = &self.children else {
            return;
        };
        let Some(worst_for_opponent) = children.iter().map(|c| c.score).min() else {
            return;
        };

        self.size = children.iter().map(|c| c.size).sum();
        self.score = -worst_for_opponent;

        if is_decisive(self.score) {
            self.score = clamp_decisive(self.score);
            self.complete = true;
        }
    }

    /// Index of the child to grow next: the incomplete child maximising
    /// `-score - ln(size) * visit_penalty`. The first maximum wins.
    pub fn child_to_improve(&self, visit_penalty: i16) -> Option<usize> {
        let children = self.children.as_ref()?;

        let mut best: Option<(usize, f64)> = None;
        for (index, child) in children.iter().enumerate() {
            if child.complete {
                continue;
            }
            let priority =
                -(child.score as f64) - (child.size as f64).ln() * visit_penalty as f64;
            if best.map_or(true, |(_, p)| priority > p) {
                best = Some((index, priority));
            }
        }

        best.map(|(index, _)| index)
    }

    /// Lowest child score, i.e. the reply that leaves the opponent worst off.
    pub fn min_child_score(&self) -> Option<i16> {
        self.children.as_ref()?.iter().map(|c| c.score).min()
    }

    /// Follows the best reply at every level, for the principal line.
    pub fn principal_line(&self) -> Vec<Move> {
        let mut line = Vec::new();
        let mut node = self;

        while let Some(children) = &node.children {
            let Some(best) = children.iter().min_by_key(|c| c.score) else {
                break;
            };
            if let Some(mv) = best.mv {
                line.push(mv);
            }
            node = best;
        }

        line
    }
}
