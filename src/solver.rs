//! A* solver that races a board against its twin.
//!
//! Exactly one of a board and its twin can reach the goal, so the two
//! searches are advanced in lockstep and whichever surfaces a goal first
//! settles solvability. No parity argument is needed.
//!
//! Memory grows without bound in the frontiers. Large boards that are far
//! from the goal can exhaust memory before either side converges; callers
//! that need a deadline must enforce it from outside.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::board::Board;

/// Estimate of the remaining moves, added to the moves made so far.
///
/// Both heuristics are admissible and consistent, so either yields a
/// shortest solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Hamming,
}

impl Heuristic {
    #[inline]
    pub fn estimate(self, board: &Board) -> usize {
        match self {
            Heuristic::Manhattan => board.manhattan(),
            Heuristic::Hamming => board.hamming(),
        }
    }
}

/// How a frontier avoids re-expanding boards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dedup {
    /// Skip a neighbor only if it repeats a board on the current path.
    ///
    /// Boards reached along different paths are expanded again. Memory stays
    /// limited to the frontier, and each check costs time proportional to
    /// the path length.
    #[default]
    Ancestors,
    /// Keep a closed set of every expanded board per frontier.
    Closed,
}

/// Search configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverOptions {
    pub heuristic: Heuristic,
    pub dedup: Dedup,
}

/// Counters for one frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes removed from the frontier and expanded.
    pub expanded: usize,
    /// Nodes pushed onto the frontier, including the root.
    pub generated: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

/// A board reached during search, linked back to the node that produced it.
struct SearchNode {
    board: Board,
    moves: usize,
    predecessor: Option<Rc<SearchNode>>,
}

impl SearchNode {
    /// Walks the predecessor chain, nearest first, excluding `self`.
    fn ancestors(&self) -> impl Iterator<Item = &SearchNode> {
        std::iter::successors(self.predecessor.as_deref(), |node| {
            node.predecessor.as_deref()
        })
    }

    /// Walks from `self` back to the root.
    fn path(&self) -> impl Iterator<Item = &SearchNode> {
        std::iter::successors(Some(self), |node| node.predecessor.as_deref())
    }
}

/// Frontier entry. Ordered so `BinaryHeap` pops the lowest priority first.
struct Queued {
    priority: usize,
    estimate: usize,
    /// Insertion counter; earlier entries win remaining ties.
    sequence: u64,
    node: Rc<SearchNode>,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.estimate.cmp(&self.estimate))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One best-first search, private to a single solver run.
struct Frontier {
    heap: BinaryHeap<Queued>,
    /// Present only with `Dedup::Closed`.
    closed: Option<FxHashSet<Board>>,
    heuristic: Heuristic,
    sequence: u64,
    stats: SearchStats,
}

impl Frontier {
    fn seeded(root: Board, options: SolverOptions) -> Self {
        let mut frontier = Self {
            heap: BinaryHeap::new(),
            closed: match options.dedup {
                Dedup::Ancestors => None,
                Dedup::Closed => Some(FxHashSet::default()),
            },
            heuristic: options.heuristic,
            sequence: 0,
            stats: SearchStats::default(),
        };
        frontier.push(SearchNode {
            board: root,
            moves: 0,
            predecessor: None,
        });
        frontier
    }

    fn push(&mut self, node: SearchNode) {
        let estimate = self.heuristic.estimate(&node.board);
        self.heap.push(Queued {
            priority: node.moves + estimate,
            estimate,
            sequence: self.sequence,
            node: Rc::new(node),
        });
        self.sequence += 1;
        self.stats.generated += 1;
        self.stats.max_frontier = self.stats.max_frontier.max(self.heap.len());
    }

    #[inline]
    fn is_exhausted(&self) -> bool {
        self.heap.is_empty()
    }

    /// True if the lowest-priority node is already a goal board.
    #[inline]
    fn min_is_goal(&self) -> bool {
        self.heap
            .peek()
            .is_some_and(|queued| queued.node.board.is_goal())
    }

    fn pop_min(&mut self) -> Option<Rc<SearchNode>> {
        self.heap.pop().map(|queued| queued.node)
    }

    /// Removes the minimum node and pushes its admissible neighbors.
    ///
    /// Does nothing once the frontier is exhausted.
    fn expand_min(&mut self) {
        let node = loop {
            let Some(node) = self.pop_min() else {
                return;
            };
            if let Some(closed) = &mut self.closed {
                // stale entry for a board already expanded along a cheaper path
                if !closed.insert(node.board.clone()) {
                    continue;
                }
            }
            break node;
        };
        self.stats.expanded += 1;
        trace!(
            "expanding node at depth {} (frontier {})",
            node.moves,
            self.heap.len()
        );

        for neighbor in node.board.neighbors() {
            let revisit = match &self.closed {
                Some(closed) => closed.contains(&neighbor),
                None => node.ancestors().any(|ancestor| ancestor.board == neighbor),
            };
            if revisit {
                continue;
            }

            self.push(SearchNode {
                board: neighbor,
                moves: node.moves + 1,
                predecessor: Some(Rc::clone(&node)),
            });
        }
    }
}

/// Result of solving one board.
///
/// All work happens in the constructor; the accessors only read the stored
/// outcome, so repeated calls return identical results.
#[derive(Debug, Clone)]
pub struct Solver {
    /// Shortest path from the initial board to the goal, if one exists.
    solution: Option<Vec<Board>>,
    stats: SearchStats,
    twin_stats: SearchStats,
}

impl Solver {
    /// Solves `initial` with the Manhattan heuristic and ancestor-only
    /// duplicate checks.
    pub fn new(initial: &Board) -> Self {
        Self::with_options(initial, SolverOptions::default())
    }

    pub fn with_options(initial: &Board, options: SolverOptions) -> Self {
        debug!(
            "solving {0}x{0} board (manhattan {1}, {2:?})",
            initial.dimension(),
            initial.manhattan(),
            options
        );

        let mut frontier = Frontier::seeded(initial.clone(), options);
        let mut twin_frontier = Frontier::seeded(initial.twin(), options);

        let goal_node = loop {
            if frontier.min_is_goal() {
                break frontier.pop_min();
            }
            // an emptied frontier for the initial board means the goal is unreachable
            if twin_frontier.min_is_goal() || frontier.is_exhausted() {
                break None;
            }

            frontier.expand_min();
            twin_frontier.expand_min();
        };

        let solution = goal_node.map(|goal| {
            let mut boards: Vec<Board> = goal.path().map(|node| node.board.clone()).collect();
            boards.reverse();
            boards
        });

        match &solution {
            Some(boards) => debug!(
                "solved in {} moves ({} expanded, {} twin expanded)",
                boards.len() - 1,
                frontier.stats.expanded,
                twin_frontier.stats.expanded
            ),
            None => debug!(
                "no solution ({} expanded, {} twin expanded)",
                frontier.stats.expanded, twin_frontier.stats.expanded
            ),
        }

        Self {
            solution,
            stats: frontier.stats,
            twin_stats: twin_frontier.stats,
        }
    }

    #[inline]
    pub fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    /// Minimum number of moves, or `None` if the board is unsolvable.
    pub fn moves(&self) -> Option<usize> {
        self.solution.as_ref().map(|boards| boards.len() - 1)
    }

    /// Boards of a shortest solution from initial to goal, inclusive.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    /// Counters for the search on the initial board.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Counters for the search on the twin board.
    pub fn twin_stats(&self) -> SearchStats {
        self.twin_stats
    }
}
