//! Generic search engines over implicit graphs. Nodes are stored once in an insertion-ordered
//! parent map and referred to by their index from then on, so frontiers only carry `usize`s and
//! path reconstruction is a walk over parent indices.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

use crate::priority_queue::PriorityQueue;
use std::collections::VecDeque;
use std::hash::Hash;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index recorded for the start node.
pub const NO_PARENT: usize = usize::MAX;

/// Order in which discovered nodes are expanded by [traverse].
pub trait Frontier {
    fn push(&mut self, index: usize);
    fn pop(&mut self) -> Option<usize>;
}

/// First in, first out: breadth-first expansion.
impl Frontier for VecDeque<usize> {
    fn push(&mut self, index: usize) {
        self.push_back(index);
    }
    fn pop(&mut self) -> Option<usize> {
        self.pop_front()
    }
}

/// Last in, first out: depth-first expansion.
impl Frontier for Vec<usize> {
    fn push(&mut self, index: usize) {
        Vec::push(self, index);
    }
    fn pop(&mut self) -> Option<usize> {
        Vec::pop(self)
    }
}

/// Walks parent indices from `end` back to the start and returns the nodes in start-to-end order.
pub fn reconstruct_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, end: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut i = end;
    let mut path: Vec<N> = std::iter::from_fn(|| {
        parents.get_index(i).map(|(node, value)| {
            i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Unweighted traversal shared by [bfs] and [dfs]. A node is marked as discovered when it is
/// pushed, so it enters the frontier at most once; `success` is tested when it is popped.
pub fn traverse<N, FR, FN, IN, FS>(
    start: &N,
    mut frontier: FR,
    mut successors: FN,
    mut success: FS,
) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    FR: Frontier,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    parents.insert(start.clone(), NO_PARENT);
    frontier.push(0);
    while let Some(index) = frontier.pop() {
        let successors = {
            let (node, _) = parents
                .get_index(index)
                .expect("frontier only holds indices of discovered nodes");
            if success(node) {
                return Some(reconstruct_path(&parents, |&p| p, index));
            }
            successors(node)
        };
        for successor in successors {
            if let Vacant(e) = parents.entry(successor) {
                let n = e.index();
                e.insert(index);
                frontier.push(n);
            }
        }
    }
    None
}

/// Breadth-first search. The returned path has the fewest edges of all paths to a node
/// satisfying `success`.
pub fn bfs<N, FN, IN, FS>(start: &N, successors: FN, success: FS) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    traverse(start, VecDeque::new(), successors, success)
}

/// Depth-first search. Finds some path if one exists; which one depends on successor order.
pub fn dfs<N, FN, IN, FS>(start: &N, successors: FN, success: FS) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    traverse(start, Vec::new(), successors, success)
}

/// Dijkstra's algorithm with lazy deletion. Each parent map entry holds the parent index and the
/// best known cost, so it doubles as the distance table. Returns the path and its total cost.
/// Edge costs must be non-negative.
pub fn dijkstra<N, C, FN, IN, FS>(
    start: &N,
    mut successors: FN,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = PriorityQueue::new();
    to_see.enqueue(0, C::zero());
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (NO_PARENT, Zero::zero()));
    while let Some((index, cost)) = to_see.pop() {
        let successors = {
            let (node, &(_, c)) = parents
                .get_index(index)
                .expect("queue only holds indices of discovered nodes");
            // A node is enqueued again whenever a cheaper route to it is found. Entries that
            // no longer match the recorded cost are stale.
            if cost > c {
                continue;
            }
            if success(node) {
                let path = reconstruct_path(&parents, |&(p, _)| p, index);
                return Some((path, cost));
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let n = match parents.entry(successor) {
                Vacant(e) => {
                    let n = e.index();
                    e.insert((index, new_cost));
                    n
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        e.insert((index, new_cost));
                        e.index()
                    } else {
                        continue;
                    }
                }
            };
            to_see.enqueue(n, new_cost);
        }
    }
    None
}
