use std::ops;

use crate::dims::Dims;

/// Fixed size 2D storage, laid out row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    depth: usize,
}

impl<T> Array2D<T> {
    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.depth as i32)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        let Dims(x, z) = pos;
        if x < 0 || z < 0 {
            return None;
        }

        let (x, z) = (x as usize, z as usize);
        if x >= self.width || z >= self.depth {
            return None;
        }

        Some(z * self.width + x)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        let x = idx % self.width;
        let z = idx / self.width;

        Some(Dims(x as i32, z as i32))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, width: usize, depth: usize) -> Self {
        Self {
            buf: vec![item; width * depth],
            width,
            depth,
        }
    }

    /// Returns `None` if any of the dimensions is negative.
    pub fn new_dims(item: T, size: Dims) -> Option<Self> {
        if !size.all_non_negative() {
            return None;
        }

        Some(Self::new(item, size.0 as usize, size.1 as usize))
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing() {
        let mut array = Array2D::new(0u8, 3, 2);
        assert_eq!(array.size(), Dims(3, 2));
        assert_eq!(array.len(), 6);

        array[Dims(2, 1)] = 7;
        assert_eq!(array.dim_to_idx(Dims(2, 1)), Some(5));
        assert_eq!(array.idx_to_dim(5), Some(Dims(2, 1)));
        assert_eq!(array.get(Dims(2, 1)), Some(&7));

        assert_eq!(array.get(Dims(3, 0)), None);
        assert_eq!(array.get(Dims(-1, 0)), None);
        assert_eq!(array.idx_to_dim(6), None);
    }

    #[test]
    fn positions_follow_storage() {
        let array = Array2D::new((), 2, 2);
        let positions: Vec<_> = array.iter_pos().collect();
        assert_eq!(positions, Dims::iter_fill(Dims::ZERO, Dims(2, 2)).collect::<Vec<_>>());
    }

    #[test]
    fn negative_size() {
        assert!(Array2D::new_dims(false, Dims(-1, 4)).is_none());
    }

    #[test]
    #[should_panic(expected = "Index out of bounds")]
    fn index_out_of_bounds() {
        let array = Array2D::new(0u8, 1, 1);
        let _ = array[Dims(0, 1)];
    }
}
