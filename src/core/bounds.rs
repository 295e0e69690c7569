use crate::core::models::Vec2;

/// A rectangle with one corner fixed at row 0, column 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub height: usize,
    pub width: usize,
}

impl BoundsOriginRoot {
    pub fn new(height: usize, width: usize) -> BoundsOriginRoot {
        BoundsOriginRoot { height, width }
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.i >= 0 && (pos.i as usize) < self.height && pos.j >= 0 && (pos.j as usize) < self.width
    }

    pub fn area(&self) -> usize {
        self.height * self.width
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + use<> {
        let width = self.width;
        (0..self.area()).map(move |index| Vec2 {
            i: (index / width) as i32,
            j: (index % width) as i32,
        })
    }
}
