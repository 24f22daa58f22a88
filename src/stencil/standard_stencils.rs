use crate::stencil::*;

/// Five point Laplace update: each cell becomes the
/// average of its four orthogonal neighbors.
/// The center is not part of the neighborhood.
/// Neighbors are ordered down, up, right, left,
/// which fixes the summation order of `Stencil::apply`.
pub fn laplace_2d() -> Stencil<2, 4> {
    Stencil::new([[1, 0], [-1, 0], [0, 1], [0, -1]], |args: &[f64; 4]| {
        0.25 * (args[0] + args[1] + args[2] + args[3])
    })
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::util::*;

    #[test]
    fn laplace_2d_test() {
        let s = laplace_2d();
        for w in s.weights().iter() {
            assert_eq!(*w, 0.25);
        }
        assert_eq!(
            s.offsets(),
            &[vector![1, 0], vector![-1, 0], vector![0, 1], vector![0, -1]]
        );

        // Power of two weights keep the weighted sum exact.
        let args = vector![0.1, 0.7, 13.3, 2.9];
        let expected = 0.25 * (0.1 + 0.7 + 13.3 + 2.9);
        assert_eq!(s.apply(&args), expected);
    }
}
