use crate::board::{Board, Move};
use crate::error::{Error, Result};
use crate::position::Position;
use ego_tree::{NodeId, NodeMut, NodeRef, Tree};
use log::{debug, trace};
use std::marker::PhantomData;

/// Default number of positions preallocated in the tree arena.
pub const DEFAULT_NODE_CAPACITY: usize = 1024;

/// An explicit game tree of board positions, scored with minimax.
///
/// Positions live in an arena and are addressed by [`NodeId`]. Every position owns its own
/// board snapshot, so marking a child never affects its parent or siblings. Scores are
/// absolute: +1 means X wins, -1 means O wins, 0 is a draw.
///
/// Editing a position (appending a child or marking its board) drops the cached scores of
/// that position and all of its ancestors, so scores never go stale.
pub struct GameTree<B: Board> {
    tree: Option<Tree<Position<B>>>,
    node_capacity: usize,
    len: usize,
}

impl<B: Board> Default for GameTree<B> {
    fn default() -> Self {
        GameTreeBuilder::new().build()
    }
}

/// A builder for creating instances of `GameTree`.
pub struct GameTreeBuilder<B: Board> {
    node_capacity: usize,
    board: PhantomData<B>,
}

impl<B: Board> GameTreeBuilder<B> {
    /// Creates a builder with the default node capacity.
    pub fn new() -> Self {
        Self {
            node_capacity: DEFAULT_NODE_CAPACITY,
            board: PhantomData,
        }
    }

    /// Sets how many positions the arena preallocates once a root is added.
    pub fn with_node_capacity(mut self, node_capacity: usize) -> Self {
        self.node_capacity = node_capacity;
        self
    }

    /// Builds an empty `GameTree` with the configured parameters.
    pub fn build(self) -> GameTree<B> {
        GameTree {
            tree: None,
            node_capacity: self.node_capacity,
            len: 0,
        }
    }
}

impl<B: Board> Default for GameTreeBuilder<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Board> GameTree<B> {
    /// Returns a new builder for `GameTree`.
    pub fn builder() -> GameTreeBuilder<B> {
        GameTreeBuilder::new()
    }

    /// Creates an empty tree with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the root position, if one has been added.
    pub fn root(&self) -> Option<NodeId> {
        self.tree.as_ref().map(|tree| tree.root().id())
    }

    /// Total number of positions in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no positions yet, i.e. no root.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn node(&self, id: NodeId) -> Result<NodeRef<'_, Position<B>>> {
        self.tree
            .as_ref()
            .and_then(|tree| tree.get(id))
            .ok_or(Error::UnknownPosition)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<NodeMut<'_, Position<B>>> {
        self.tree
            .as_mut()
            .and_then(|tree| tree.get_mut(id))
            .ok_or(Error::UnknownPosition)
    }

    /// Returns the position stored under `id`.
    pub fn position(&self, id: NodeId) -> Result<&Position<B>> {
        Ok(self.node(id)?.value())
    }

    /// Returns the board snapshot of the position stored under `id`.
    pub fn board(&self, id: NodeId) -> Result<&B> {
        Ok(self.position(id)?.board())
    }

    /// Returns the memoized score of a position, `None` if it has not been scored yet.
    pub fn cached_score(&self, id: NodeId) -> Result<Option<i8>> {
        Ok(self.position(id)?.score())
    }

    /// Returns the parent of a position, `None` for the root.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(id)?.parent().map(|parent| parent.id()))
    }

    /// Returns the children of a position in insertion order.
    pub fn children(&self, id: NodeId) -> Result<Vec<NodeId>> {
        Ok(self.node(id)?.children().map(|child| child.id()).collect())
    }

    /// Returns how many direct children a position has.
    pub fn num_children(&self, id: NodeId) -> Result<usize> {
        Ok(self.node(id)?.children().count())
    }

    /// Number of edges between the position and the root.
    pub fn depth(&self, id: NodeId) -> Result<usize> {
        Ok(self.node(id)?.ancestors().count())
    }

    /// Whether the position is the root of the tree.
    pub fn is_root(&self, id: NodeId) -> Result<bool> {
        Ok(self.node(id)?.parent().is_none())
    }

    /// Whether the position has no children.
    pub fn is_leaf(&self, id: NodeId) -> Result<bool> {
        Ok(!self.node(id)?.has_children())
    }

    /// Makes a position wrapping `board` the root of the tree.
    ///
    /// Fails with [`Error::RootAlreadyExists`] if the tree already has a root.
    pub fn add_root(&mut self, board: B) -> Result<NodeId> {
        if self.tree.is_some() {
            return Err(Error::RootAlreadyExists);
        }

        let tree = Tree::with_capacity(Position::new(board), self.node_capacity);
        let root_id = tree.root().id();
        self.tree = Some(tree);
        self.len = 1;
        Ok(root_id)
    }

    /// Appends a position wrapping `board` under `parent`.
    ///
    /// The board is not checked against the parent, which allows synthetic trees. The
    /// cached scores of `parent` and its ancestors are dropped.
    pub fn add_child(&mut self, parent: NodeId, board: B) -> Result<NodeId> {
        let child_id = self.node_mut(parent)?.append(Position::new(board)).id();
        self.len += 1;
        self.invalidate_scores(parent)?;
        Ok(child_id)
    }

    /// Appends a position holding a copy of the parent's board, not yet marked.
    ///
    /// The caller is expected to [`GameTree::mark`] the new position right away.
    pub fn add_unmarked_child(&mut self, parent: NodeId) -> Result<NodeId> {
        let board = self.board(parent)?.clone();
        self.add_child(parent, board)
    }

    /// Marks the board of the given position and drops the cached scores of the position
    /// and its ancestors.
    ///
    /// On error the tree is left untouched.
    pub fn mark(&mut self, id: NodeId, row: usize, col: usize) -> Result<()> {
        let mut board = self.board(id)?.clone();
        board.mark(row, col)?;
        *self.node_mut(id)?.value().board_mut() = board;
        self.invalidate_scores(id)
    }

    /// Drops the cached score of `id` and of every ancestor up to the root.
    fn invalidate_scores(&mut self, id: NodeId) -> Result<()> {
        let stale: Vec<NodeId> = std::iter::once(id)
            .chain(self.node(id)?.ancestors().map(|ancestor| ancestor.id()))
            .collect();
        for stale_id in stale {
            self.node_mut(stale_id)?.value().clear_score();
        }
        Ok(())
    }

    /// Expands the full subtree under `id`, one child per legal move, down to terminal boards.
    ///
    /// Must be called at most once per position: a second call appends duplicate children.
    pub fn build_tree(&mut self, id: NodeId) -> Result<()> {
        let before = self.len;
        self.expand(id)?;
        debug!("built subtree of {} positions", self.len - before + 1);
        Ok(())
    }

    fn expand(&mut self, id: NodeId) -> Result<()> {
        let board = self.board(id)?.clone();
        if board.is_terminal() {
            return Ok(());
        }

        trace!("expanding position with {} to move: {:?}", board.player(), board);
        for (row, col) in board.legal_moves() {
            let child = self.add_unmarked_child(id)?;
            self.mark(child, row, col)?;
            self.expand(child)?;
        }
        Ok(())
    }

    /// Returns the minimax score of a position.
    ///
    /// Terminal boards score +1 for an X win, -1 for an O win and 0 for a draw. Other
    /// positions take the maximum of their children when X is to move and the minimum when
    /// O is to move. The result is memoized on the position.
    ///
    /// The subtree must already be built: a non-terminal position without children fails
    /// with [`Error::UnexpandedPosition`].
    pub fn compute_score(&mut self, id: NodeId) -> Result<i8> {
        let node = self.node(id)?;
        if let Some(score) = node.value().score() {
            return Ok(score);
        }

        let score = match node.value().terminal_score() {
            Some(score) => score,
            None => {
                let children: Vec<NodeId> = node.children().map(|child| child.id()).collect();
                let (_, score) = self.best_child(id, &children)?;
                score
            }
        };

        self.node_mut(id)?.value().set_score(score);
        Ok(score)
    }

    /// Scores a fully built subtree and returns the score of its root.
    pub fn score_subtree(&mut self, root: NodeId) -> Result<i8> {
        let score = self.compute_score(root)?;
        debug!("subtree scored {}", score);
        Ok(score)
    }

    /// Scores every child and returns the one the player to move at `parent` prefers.
    ///
    /// Ties go to the first child, which for built trees is the first move in legal-move order.
    fn best_child(&mut self, parent: NodeId, children: &[NodeId]) -> Result<(NodeId, i8)> {
        let mut best: Option<(NodeId, i8)> = None;
        for &child in children {
            let score = self.compute_score(child)?;
            let is_better = match best {
                None => true,
                Some((_, best_score)) => self.position(parent)?.prefers(score, best_score),
            };
            if is_better {
                best = Some((child, score));
            }
        }

        best.ok_or(Error::UnexpandedPosition)
    }

    /// Returns the best move from a position whose subtree is already built.
    ///
    /// The move is recovered by comparing the chosen child's board with the position's own.
    pub fn subtree_optimal_move(&mut self, id: NodeId) -> Result<Move> {
        let node = self.node(id)?;
        let board = node.value().board().clone();
        if board.is_terminal() {
            return Err(Error::TerminalBoard);
        }

        let children: Vec<NodeId> = node.children().map(|child| child.id()).collect();
        let (best, score) = self.best_child(id, &children)?;
        self.node_mut(id)?.value().set_score(score);

        let best_move = board.diff(self.board(best)?).ok_or(Error::NoMoveBetween)?;
        debug!(
            "{} plays {:?} with score {}",
            board.player(),
            best_move,
            score
        );
        Ok(best_move)
    }

    /// Finds the optimal move for the player to move on `board`.
    ///
    /// Builds a private tree rooted at a copy of the board, so the board itself is never
    /// modified. Fails with [`Error::TerminalBoard`] if the game is already over.
    pub fn optimal_move(board: &B) -> Result<Move> {
        if board.is_terminal() {
            return Err(Error::TerminalBoard);
        }

        let mut tree = GameTree::new();
        let root = tree.add_root(board.clone())?;
        tree.build_tree(root)?;
        tree.subtree_optimal_move(root)
    }
}
