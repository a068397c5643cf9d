//! Real roots of `a·t² + b·t + c = 0`.

/// Real roots of a quadratic, classified by the sign of the discriminant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    /// Negative discriminant.
    None,
    /// Double root (tangent case).
    One(f64),
    /// Two distinct roots, `(−b−√d)/2a` first.
    Two(f64, f64),
}

impl Roots {
    /// Algebraically smallest root, if any.
    pub fn smallest(&self) -> Option<f64> {
        match *self {
            Roots::None => None,
            Roots::One(t) => Some(t),
            Roots::Two(t1, t2) => Some(t1.min(t2)),
        }
    }

    /// Number of real roots reported.
    pub fn count(&self) -> usize {
        match self {
            Roots::None => 0,
            Roots::One(_) => 1,
            Roots::Two(..) => 2,
        }
    }
}

/// Solve `a·t² + b·t + c = 0` for real roots.
///
/// The double root is reported only when the discriminant is exactly zero.
/// `a` must be non-zero; it is not assumed to be 1.
#[inline]
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Roots {
    solve_quadratic_with_tolerance(a, b, c, 0.0)
}

/// Like [`solve_quadratic`], but a discriminant with `|d| <= tolerance` is
/// treated as the double root.
///
/// A tolerance of `0.0` gives the exact behaviour of [`solve_quadratic`].
pub fn solve_quadratic_with_tolerance(a: f64, b: f64, c: f64, tolerance: f64) -> Roots {
    let d = b * b - 4.0 * a * c;

    if d > tolerance {
        let sd = d.sqrt();
        Roots::Two((-b - sd) / (2.0 * a), (-b + sd) / (2.0 * a))
    } else if d.abs() <= tolerance {
        Roots::One(-b / (2.0 * a))
    } else {
        Roots::None
    }
}
