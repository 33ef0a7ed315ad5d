use std::ops;

use crate::dims::Coord;

/// Square, row-major grid addressed by [`Coord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    size: usize,
}

impl<T> Array2D<T> {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn dim_to_idx(&self, pos: Coord) -> Option<usize> {
        pos.linear_index(self.size)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Coord> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(Coord((idx / self.size) as i32, (idx % self.size) as i32))
    }

    pub fn is_in_bounds(&self, pos: Coord) -> bool {
        self.dim_to_idx(pos).is_some()
    }

    pub fn get(&self, pos: Coord) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Coord) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.buf.chunks(self.size.max(1))
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, size: usize) -> Self {
        Self {
            buf: vec![item; size * size],
            size,
        }
    }

    pub fn fill(&mut self, value: T) {
        self.buf.fill(value);
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Array2D<T> {
    /// Length of the offending row when the input is not square.
    type Error = usize;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        let size = rows.len();
        let mut buf = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(row.len());
            }
            buf.extend(row);
        }

        Ok(Self { buf, size })
    }
}

impl<T> ops::Index<Coord> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Coord) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {}", index))
    }
}

impl<T> ops::IndexMut<Coord> for Array2D<T> {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {}", index))
    }
}
