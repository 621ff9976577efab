//! Two-coloured chain structure for conjugate-pair graphs.
//!
//! A [`Chain`] collects undirected pairs of items. Every connected
//! component ([`SubChain`]) keeps a two-colouring in which paired items
//! take opposite colours. Adding a pair may graft a branch onto an
//! existing component or close a loop between two; a loop that cannot
//! be two-coloured fails with [`Error::ChainInconsistency`] and leaves
//! the chain untouched.
//!
//! The structure is generic: single chains use it with cell indices,
//! and the tests exercise it with plain integers.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::Error;

/// One of the two parity classes of a subchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    A,
    B,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::A => Color::B,
            Color::B => Color::A,
        }
    }
}

/// A connected component with its colouring.
///
/// The colour partition is derived from the member-to-colour map, so
/// the two classes always cover the members exactly once.
#[derive(Debug, Clone)]
pub struct SubChain<T> {
    members: HashSet<T>,
    connections: HashMap<T, HashSet<T>>,
    member_to_color: HashMap<T, Color>,
}

impl<T: Eq + Hash + Clone> SubChain<T> {
    fn new(a: T, b: T) -> Self {
        let mut connections: HashMap<T, HashSet<T>> = HashMap::new();
        connections.entry(a.clone()).or_default().insert(b.clone());
        connections.entry(b.clone()).or_default().insert(a.clone());
        let mut member_to_color = HashMap::new();
        member_to_color.insert(a.clone(), Color::A);
        member_to_color.insert(b.clone(), Color::B);
        SubChain {
            members: [a, b].into_iter().collect(),
            connections,
            member_to_color,
        }
    }

    pub fn members(&self) -> &HashSet<T> {
        &self.members
    }

    pub fn color_of(&self, member: &T) -> Option<Color> {
        self.member_to_color.get(member).copied()
    }

    /// The members of one colour class.
    pub fn members_with(&self, color: Color) -> impl Iterator<Item = &T> {
        self.member_to_color
            .iter()
            .filter(move |(_, &c)| c == color)
            .map(|(member, _)| member)
    }

    /// Undirected adjacency, for diagnostics.
    pub fn connections(&self) -> &HashMap<T, HashSet<T>> {
        &self.connections
    }

    fn is_same_color(&self, a: &T, b: &T) -> bool {
        self.member_to_color.get(a) == self.member_to_color.get(b)
    }

    /// Absorb `other` into `self`. Any shared member fixes the colour
    /// map (identity or swap); every other shared member must then agree
    /// with it, otherwise the union admits no two-colouring and nothing
    /// is copied.
    fn merge(&mut self, other: &SubChain<T>) -> Result<(), Error> {
        let shared: Vec<&T> = self.members.intersection(&other.members).collect();
        let identity = match shared.first() {
            Some(anchor) => self.member_to_color[*anchor] == other.member_to_color[*anchor],
            None => true,
        };
        for member in &shared {
            let agrees = self.member_to_color[*member] == other.member_to_color[*member];
            if agrees != identity {
                return Err(Error::ChainInconsistency);
            }
        }

        for (source, destinations) in &other.connections {
            let entry = self.connections.entry(source.clone()).or_default();
            for destination in destinations {
                entry.insert(destination.clone());
            }
        }
        for member in &other.members {
            let color = other.member_to_color[member];
            let color = if identity { color } else { color.flip() };
            self.member_to_color.insert(member.clone(), color);
            self.members.insert(member.clone());
        }
        Ok(())
    }
}

/// The whole chain: all subchains plus member lookup.
#[derive(Debug, Clone, Default)]
pub struct Chain<T> {
    members: HashSet<T>,
    subchains: HashMap<usize, SubChain<T>>,
    member_to_subchain: HashMap<T, usize>,
    next_id: usize,
}

impl<T: Eq + Hash + Clone> Chain<T> {
    pub fn new() -> Self {
        Chain {
            members: HashSet::new(),
            subchains: HashMap::new(),
            member_to_subchain: HashMap::new(),
            next_id: 0,
        }
    }

    /// Add a conjugate pair. Both items end up in the same subchain with
    /// opposite colours; merging in their previous subchains may close a
    /// loop, which fails when the loop has odd parity. On failure the
    /// chain keeps its pre-call state.
    pub fn add_pair(&mut self, a: T, b: T) -> Result<(), Error> {
        let mut sub = SubChain::new(a.clone(), b.clone());
        let id_a = self.member_to_subchain.get(&a).copied();
        let id_b = self.member_to_subchain.get(&b).copied();

        // Merge into the fresh pair first; the chain itself is only
        // rewired once both merges have passed.
        if let Some(id) = id_a {
            sub.merge(&self.subchains[&id])?;
        }
        if let Some(id) = id_b {
            if id_a != Some(id) {
                sub.merge(&self.subchains[&id])?;
            }
        }

        for id in [id_a, id_b].into_iter().flatten() {
            self.subchains.remove(&id);
        }
        let id = self.next_id;
        self.next_id += 1;
        for member in sub.members() {
            self.member_to_subchain.insert(member.clone(), id);
        }
        self.members.extend(sub.members().iter().cloned());
        self.subchains.insert(id, sub);
        Ok(())
    }

    pub fn members(&self) -> &HashSet<T> {
        &self.members
    }

    pub fn subchains(&self) -> impl Iterator<Item = &SubChain<T>> {
        self.subchains.values()
    }

    pub fn subchain_of(&self, member: &T) -> Option<&SubChain<T>> {
        let id = self.member_to_subchain.get(member)?;
        self.subchains.get(id)
    }

    fn same_subchain(&self, a: &T, b: &T) -> bool {
        match (
            self.member_to_subchain.get(a),
            self.member_to_subchain.get(b),
        ) {
            (Some(id_a), Some(id_b)) => id_a == id_b,
            _ => false,
        }
    }

    /// True iff both items sit in the same subchain and share a colour.
    /// False when either item is absent.
    pub fn is_same_color(&self, a: &T, b: &T) -> bool {
        if !self.same_subchain(a, b) {
            return false;
        }
        self.subchains[&self.member_to_subchain[a]].is_same_color(a, b)
    }

    /// True iff both items sit in the same subchain with different
    /// colours. False when either item is absent.
    pub fn is_opposite_color(&self, a: &T, b: &T) -> bool {
        self.same_subchain(a, b) && !self.is_same_color(a, b)
    }
}
