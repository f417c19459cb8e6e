use super::ScreenId;

/// Ordered stack of pushed screens, bottom first.
///
/// Only the navigator mutates it, one element at a time. The host screen is
/// never part of the stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationStack {
    screens: Vec<ScreenId>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// The current (top-most) screen
    pub fn top(&self) -> Option<ScreenId> {
        self.screens.last().copied()
    }

    pub fn get(&self, index: usize) -> Option<ScreenId> {
        self.screens.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = ScreenId> + '_ {
        self.screens.iter().copied()
    }

    pub fn as_slice(&self) -> &[ScreenId] {
        &self.screens
    }

    pub(super) fn push(&mut self, id: ScreenId) {
        self.screens.push(id);
    }

    pub(super) fn pop_top(&mut self) -> Option<ScreenId> {
        self.screens.pop()
    }

    pub(super) fn clear(&mut self) {
        self.screens.clear();
    }
}

impl PartialEq<[ScreenId]> for NavigationStack {
    fn eq(&self, other: &[ScreenId]) -> bool {
        self.screens.as_slice() == other
    }
}

impl<const N: usize> PartialEq<[ScreenId; N]> for NavigationStack {
    fn eq(&self, other: &[ScreenId; N]) -> bool {
        self.screens.as_slice() == other.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_is_last_pushed() {
        let mut stack = NavigationStack::new();
        assert_eq!(stack.top(), None);

        stack.push(ScreenId::Settings);
        stack.push(ScreenId::ContactInfo);
        assert_eq!(stack.top(), Some(ScreenId::ContactInfo));
        assert_eq!(stack, [ScreenId::Settings, ScreenId::ContactInfo]);

        assert_eq!(stack.pop_top(), Some(ScreenId::ContactInfo));
        assert_eq!(stack.len(), 1);
    }
}
