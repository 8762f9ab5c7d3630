use crate::common::error::{InvalidArgument, QrStyleResult, RenderError};

/// Square grid of QR modules, `true` being dark.
///
/// Stored row-major: the module at column `x` and row `y` lives at `y * w + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    w: usize,
    grid: Box<[bool]>,
}

impl ModuleMatrix {
    pub fn from_modules(modules: Vec<bool>) -> QrStyleResult<Self> {
        let len = modules.len();
        let w = (len as f64).sqrt() as usize;
        if len == 0 || w * w != len {
            return Err(InvalidArgument::MatrixShape(len).into());
        }
        Ok(Self { w, grid: modules.into_boxed_slice() })
    }

    /// Builds a `w x w` matrix from `f(x, y)`.
    ///
    /// The grid is reserved up front, so a width too large to allocate fails with
    /// `RenderFailure` instead of aborting.
    pub fn from_fn(w: usize, mut f: impl FnMut(usize, usize) -> bool) -> QrStyleResult<Self> {
        if w == 0 {
            return Err(InvalidArgument::MatrixShape(0).into());
        }
        let len = w.checked_mul(w).ok_or(RenderError::MatrixTooLarge(w))?;

        let mut grid = Vec::new();
        grid.try_reserve_exact(len).map_err(RenderError::from)?;
        grid.extend((0..len).map(|i| f(i % w, i / w)));
        Ok(Self { w, grid: grid.into_boxed_slice() })
    }

    pub fn width(&self) -> usize {
        self.w
    }

    /// Modules outside the matrix read as light.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.w && y < self.w && self.grid[y * self.w + x]
    }

    pub fn dark_modules(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.grid.iter().enumerate().filter(|&(_, &m)| m).map(|(i, _)| (i % self.w, i / self.w))
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&&m| m).count()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let mut res = String::with_capacity(self.w * (self.w + 1) + 1);
        res.push('\n');
        for y in 0..self.w {
            for x in 0..self.w {
                res.push(if self.get(x, y) { '#' } else { '.' });
            }
            res.push('\n');
        }
        res
    }
}

#[cfg(test)]
mod matrix_tests {
    use test_case::test_case;

    use super::ModuleMatrix;
    use crate::common::error::{InvalidArgument, QrStyleError};

    #[test]
    fn test_from_modules_row_major() {
        let m = ModuleMatrix::from_modules(vec![true, false, false, true]).unwrap();
        assert_eq!(m.width(), 2);
        assert!(m.get(0, 0));
        assert!(!m.get(1, 0));
        assert!(!m.get(0, 1));
        assert!(m.get(1, 1));
    }

    #[test_case(0)]
    #[test_case(3)]
    #[test_case(8)]
    fn test_from_modules_not_square(len: usize) {
        let err = ModuleMatrix::from_modules(vec![false; len]).unwrap_err();
        assert!(matches!(
            err,
            QrStyleError::InvalidArgument(InvalidArgument::MatrixShape(l)) if l == len
        ));
    }

    #[test]
    fn test_out_of_range_is_light() {
        let m = ModuleMatrix::from_fn(3, |_, _| true).unwrap();
        assert!(m.get(2, 2));
        assert!(!m.get(3, 0));
        assert!(!m.get(0, 3));
    }

    #[test]
    fn test_dark_modules() {
        let m = ModuleMatrix::from_fn(3, |x, y| x == y).unwrap();
        assert_eq!(m.dark_modules().collect::<Vec<_>>(), vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(m.count_dark_modules(), 3);
        assert_eq!(m.to_debug_str(), "\n#..\n.#.\n..#\n");
    }

    #[test]
    fn test_from_fn_zero_width() {
        let err = ModuleMatrix::from_fn(0, |_, _| true).unwrap_err();
        assert!(matches!(err, QrStyleError::InvalidArgument(InvalidArgument::MatrixShape(0))));
    }

    #[test_case(usize::MAX; "overflowing_width")]
    #[test_case(u32::MAX as usize; "unallocatable_width")]
    fn test_from_fn_too_large(w: usize) {
        let err = ModuleMatrix::from_fn(w, |_, _| false).unwrap_err();
        assert!(matches!(err, QrStyleError::RenderFailure(_)), "{err}");
    }
}
