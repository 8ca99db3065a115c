use std::ops::Index;

/// An ordered set of loaded models.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<M> {
    items: Vec<M>,
}

impl<M> Collection<M> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.items.iter()
    }

    pub fn first(&self) -> Option<&M> {
        self.items.first()
    }

    pub fn get(&self, index: usize) -> Option<&M> {
        self.items.get(index)
    }

    pub fn into_vec(self) -> Vec<M> {
        self.items
    }
}

impl<M> Default for Collection<M> {
    fn default() -> Self {
        Self { items: vec![] }
    }
}

impl<M> From<Vec<M>> for Collection<M> {
    fn from(items: Vec<M>) -> Self {
        Self { items }
    }
}

impl<M> FromIterator<M> for Collection<M> {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<M> IntoIterator for Collection<M> {
    type Item = M;
    type IntoIter = std::vec::IntoIter<M>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, M> IntoIterator for &'a Collection<M> {
    type Item = &'a M;
    type IntoIter = std::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<M> Index<usize> for Collection<M> {
    type Output = M;

    #[track_caller]
    fn index(&self, index: usize) -> &M {
        &self.items[index]
    }
}
