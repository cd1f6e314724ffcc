//! Explicit game trees.
//!
//! A `TreeState` walks a fully materialised tree whose nodes carry their own
//! player locations, liberty sets and terminal payoffs. Trees are authored
//! externally (JSON files, test fixtures, or the seeded generator below), so
//! the agent can be exercised without any rules engine behind it.

use crate::error::StateError;
use crate::game::{GameState, PlayerId};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::Arc;

pub type Square = u32;
pub type Label = u32;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(default)]
    pub locs: [Option<Square>; 2],
    /// Squares reachable from each occupied square. Missing keys mean no liberties.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub liberties: BTreeMap<Square, Vec<Square>>,
    /// Payoff for player 0; its presence marks the node terminal. JSON has no
    /// infinities, so won and lost leaves are written as "inf" and "-inf".
    #[serde(default, skip_serializing_if = "Option::is_none", with = "utility_repr")]
    pub utility: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Edge>,
}

mod utility_repr {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(utility: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
        match *utility {
            Some(u) if u == f64::INFINITY => s.serialize_str("inf"),
            Some(u) if u == f64::NEG_INFINITY => s.serialize_str("-inf"),
            Some(u) => s.serialize_f64(u),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        match Option::<Repr>::deserialize(d)? {
            None => Ok(None),
            Some(Repr::Number(u)) => Ok(Some(u)),
            Some(Repr::Text(t)) => match t.as_str() {
                "inf" | "+inf" => Ok(Some(f64::INFINITY)),
                "-inf" => Ok(Some(f64::NEG_INFINITY)),
                other => Err(D::Error::custom(format!("unknown utility {:?}", other))),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub action: Label,
    pub node: Arc<TreeNode>,
}

impl TreeNode {
    pub fn terminal(utility: f64) -> Self {
        Self { utility: Some(utility), ..Self::default() }
    }

    pub fn inner<I: IntoIterator<Item = (Label, TreeNode)>>(children: I) -> Self {
        let children = children.into_iter().map(|(action, node)| Edge { action, node: Arc::new(node) }).collect();
        Self { children, ..Self::default() }
    }

    pub fn with_locs(mut self, first: Square, second: Square) -> Self {
        self.locs = [Some(first), Some(second)];
        self
    }

    pub fn with_liberties(mut self, loc: Square, libs: Vec<Square>) -> Self {
        self.liberties.insert(loc, libs);
        self
    }

    /// Number of nodes in the subtree rooted here.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(|e| e.node.size()).sum::<usize>()
    }

    /// Seeded random tree, `depth` plies deep, with 1..=`max_branching`
    /// children per inner node. Leaves at full depth are terminal; inner
    /// nodes terminate early about one time in ten. Locations live on a
    /// 7x7 board (0..49) and carry up to 8 liberties, as a knight would.
    pub fn random<R: Rng>(rng: &mut R, depth: u32, max_branching: usize) -> Self {
        let mut node = Self::default();
        for p in 0..2 {
            let sq: Square = rng.gen_range(0..49);
            node.locs[p] = Some(sq);
            let n = rng.gen_range(0..=8usize);
            let libs = (0..n).map(|_| rng.gen_range(0..49)).collect::<HashSet<Square>>();
            let mut libs: Vec<Square> = libs.into_iter().collect();
            libs.sort_unstable();
            node.liberties.insert(sq, libs);
        }
        if depth == 0 || rng.gen_ratio(1, 10) {
            node.utility = Some(match rng.gen_range(0..3) {
                0 => f64::INFINITY,
                1 => f64::NEG_INFINITY,
                _ => 0.0,
            });
            return node;
        }
        let branching = rng.gen_range(1..=max_branching.max(1));
        node.children = (0..branching as Label)
            .map(|action| Edge { action, node: Arc::new(Self::random(&mut *rng, depth - 1, max_branching)) })
            .collect();
        node
    }

    fn check(&self) -> Result<(), StateError> {
        let mut seen = HashSet::with_capacity(self.children.len());
        for e in &self.children {
            if !seen.insert(e.action) {
                return Err(StateError::Malformed(format!("duplicate action {} under one node", e.action)));
            }
            e.node.check()?;
        }
        Ok(())
    }
}

/// On-disk layout: the root node plus the ply count it sits at.
#[derive(Debug, Serialize, Deserialize)]
struct TreeFile {
    #[serde(default)]
    ply: u32,
    root: TreeNode,
}

/// Cursor into a shared tree. Cloning and stepping never copy nodes.
#[derive(Clone, Debug)]
pub struct TreeState {
    node: Arc<TreeNode>,
    ply: u32,
}

impl TreeState {
    pub fn new(root: TreeNode, ply: u32) -> Self {
        Self { node: Arc::new(root), ply }
    }

    pub fn from_json_str(s: &str) -> Result<Self, StateError> {
        let file: TreeFile = serde_json::from_str(s)?;
        file.root.check()?;
        Ok(Self::new(file.root, file.ply))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StateError> {
        let s = std::fs::read_to_string(path)?;
        Self::from_json_str(&s)
    }

    /// Pretty JSON for the subtree under the cursor, readable by `from_json_str`.
    pub fn to_json_string(&self) -> Result<String, StateError> {
        let file = TreeFile { ply: self.ply, root: (*self.node).clone() };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StateError> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    pub fn node(&self) -> &TreeNode { &self.node }
}

impl GameState for TreeState {
    type Action = Label;
    type Location = Square;

    fn ply_count(&self) -> u32 { self.ply }

    fn actions(&self) -> Result<Vec<Label>, StateError> {
        if self.node.utility.is_some() { return Ok(Vec::new()); }
        Ok(self.node.children.iter().map(|e| e.action).collect())
    }

    fn result(&self, action: Label) -> Result<Self, StateError> {
        self.node
            .children
            .iter()
            .find(|e| e.action == action)
            .map(|e| Self { node: e.node.clone(), ply: self.ply + 1 })
            .ok_or_else(|| StateError::IllegalAction { action: action.to_string(), ply: self.ply })
    }

    fn terminal_test(&self) -> Result<bool, StateError> { Ok(self.node.utility.is_some()) }

    fn utility(&self, player: PlayerId) -> Result<f64, StateError> {
        let u = self.node.utility.unwrap_or(0.0);
        Ok(if player == PlayerId::FIRST { u } else { -u })
    }

    fn location(&self, player: PlayerId) -> Option<Square> { self.node.locs[player.index()] }

    fn liberties(&self, loc: Square) -> Result<Vec<Square>, StateError> {
        Ok(self.node.liberties.get(&loc).cloned().unwrap_or_default())
    }
}
