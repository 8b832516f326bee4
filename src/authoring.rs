//! Pointer-driven chain authoring state.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// One frame of pointer input, in display coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InputSample<F: Float> {
    /// True while the create button is held.
    pub authoring: bool,
    pub pointer: Vec2<F>,
}

impl<F: Float> InputSample<F> {
    pub fn held(pointer: Vec2<F>) -> Self {
        InputSample { authoring: true, pointer }
    }

    pub fn released(pointer: Vec2<F>) -> Self {
        InputSample { authoring: false, pointer }
    }
}

/// A chain is either not being drawn, or being drawn with these member
/// indices in the order they were spawned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ChainAuthoring {
    #[default]
    Idle,
    Authoring(AllocVec<usize>),
}

impl ChainAuthoring {
    pub fn is_authoring(&self) -> bool {
        matches!(self, ChainAuthoring::Authoring(_))
    }

    /// Members of the chain in progress; empty when idle.
    pub fn members(&self) -> &[usize] {
        match self {
            ChainAuthoring::Idle => &[],
            ChainAuthoring::Authoring(members) => members.as_slice(),
        }
    }

    /// Append a freshly spawned mass point, starting a chain if idle.
    pub fn push(&mut self, index: usize) {
        match self {
            ChainAuthoring::Idle => *self = ChainAuthoring::Authoring(alloc::vec![index]),
            ChainAuthoring::Authoring(members) => members.push(index),
        }
    }

    /// End the chain in progress and hand back its members, if any.
    pub fn release(&mut self) -> Option<AllocVec<usize>> {
        match core::mem::take(self) {
            ChainAuthoring::Idle => None,
            ChainAuthoring::Authoring(members) if members.is_empty() => None,
            ChainAuthoring::Authoring(members) => Some(members),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_starts_chain() {
        let mut state = ChainAuthoring::default();
        assert!(!state.is_authoring());
        state.push(4);
        state.push(5);
        assert!(state.is_authoring());
        assert_eq!(state.members(), &[4, 5]);
    }

    #[test]
    fn release_returns_members_and_idles() {
        let mut state = ChainAuthoring::Idle;
        state.push(0);
        assert_eq!(state.release(), Some(alloc::vec![0]));
        assert_eq!(state, ChainAuthoring::Idle);
        assert_eq!(state.release(), None);
    }

    #[test]
    fn empty_chain_releases_nothing() {
        let mut state = ChainAuthoring::Authoring(AllocVec::new());
        assert_eq!(state.release(), None);
        assert!(!state.is_authoring());
    }
}
