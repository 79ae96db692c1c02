use std::ops::RangeInclusive;

/// `n` evenly spaced samples over a closed range, endpoints included.
///
/// Samples are computed as `start + step * i` the way `numpy.linspace` does,
/// with the final sample pinned to the end of the range.
#[derive(Clone, Debug)]
pub struct Linspace {
    start: f64,
    end: f64,
    step: f64,
    index: usize,
    len: usize,
}

impl Linspace {
    pub fn new(start: f64, end: f64, len: usize) -> Self {
        let step = match len {
            0 | 1 => 0.,
            _ => (end - start) / (len - 1) as f64,
        };

        Linspace {
            start,
            end,
            step,
            index: 0,
            len,
        }
    }

    pub fn over(range: &RangeInclusive<f64>, n: usize) -> Self {
        Self::new(*range.start(), *range.end(), n)
    }
}

impl Iterator for Linspace {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            return None;
        }

        let i = self.index;
        self.index += 1;

        if i > 0 && i + 1 == self.len {
            Some(self.end)
        } else {
            Some(self.start + self.step * i as f64)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Linspace {}

#[test]
fn test_linspace() {
    let xs: Vec<_> = Linspace::new(0., 10., 5).collect();

    assert_eq!(xs, vec![0., 2.5, 5., 7.5, 10.]);
}

#[test]
fn test_linspace_pins_end() {
    let xs: Vec<_> = Linspace::new(0., 1000., 1000).collect();

    assert_eq!(xs.len(), 1000);
    assert_eq!(xs[0], 0.);
    assert_eq!(xs[999], 1000.);
    assert!((xs[1] - 1000. / 999.).abs() < 1e-12);
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_linspace_edge_sizes() {
    assert_eq!(Linspace::new(3., 7., 0).count(), 0);
    assert_eq!(Linspace::new(3., 7., 1).collect::<Vec<_>>(), vec![3.]);
    assert_eq!(Linspace::over(&(3. ..=7.), 2).collect::<Vec<_>>(), vec![3., 7.]);
    assert_eq!(Linspace::new(0., 1., 4).len(), 4);
}
