use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::Vec2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area()];
        BoundedGrid { bounds, cells }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Vec2) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.bounds.width.max(1))
    }

    fn index_of(&self, pos: &Vec2) -> usize {
        pos.i as usize * self.bounds.width + pos.j as usize
    }
}

impl<T> std::ops::Index<&Vec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[self.index_of(index)]
    }
}

impl<T> std::ops::IndexMut<&Vec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        let i = self.index_of(index);
        &mut self.cells[i]
    }
}
