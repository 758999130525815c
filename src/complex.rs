use std::{fmt::Display, ops};

/// Tolerance used by `==` when comparing two complex numbers component-wise.
pub const EPSILON: f64 = 1e-6;

/// `0.0` as a complex number.
pub const ZERO: Complex = Complex::new(0.0, 0.0);
/// `1.0` as a complex number.
pub const ONE: Complex = Complex::new(1.0, 0.0);
/// The imaginary unit.
pub const I: Complex = Complex::new(0.0, 1.0);

/// Represents a complex number with real and imaginary parts.
///
/// Equality is approximate: two numbers compare equal when both components
/// differ by less than [`EPSILON`]. This relation is not transitive, and a
/// number with a `NaN` component is never equal to anything, itself included.
#[derive(Debug, Clone, Copy, Default)]
pub struct Complex {
    real: f64,
    imag: f64,
}

impl Complex {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// let c = Complex::new(5.0, -1.0);
    /// assert_eq!(c.real(), 5.0);
    /// assert_eq!(c.imag(), -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Constructs a complex number with a zero imaginary part.
    #[must_use]
    pub const fn from_real(real: f64) -> Self {
        Self { real, imag: 0.0 }
    }

    /// Returns the real part.
    #[must_use]
    pub const fn real(&self) -> f64 {
        self.real
    }

    /// Returns the imaginary part.
    #[must_use]
    pub const fn imag(&self) -> f64 {
        self.imag
    }

    /// Returns the magnitude of the complex number.
    ///
    /// Uses `hypot`, so components close to the limits of `f64` neither
    /// overflow nor underflow on the way.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// assert_eq!(Complex::new(3.0, 4.0).abs(), 5.0);
    /// assert!(Complex::new(1e200, 1e200).abs().is_finite());
    /// ```
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    /// Returns the complex conjugate of the number.
    ///
    /// Same as the `!` operator.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// let c = Complex::new(1.0, 5.0);
    /// assert_eq!(c.conj(), Complex::new(1.0, -5.0));
    /// assert_eq!(!c, c.conj());
    /// ```
    #[must_use]
    pub const fn conj(&self) -> Self {
        Self { real: self.real,
               imag: -self.imag, }
    }

    /// Returns the reciprocal (1/z) of the complex number.
    ///
    /// The inverse of zero is not guarded against and yields non-finite
    /// components.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// let c = Complex::new(2.0, 0.0);
    /// assert_eq!(c.inverse(), Complex::new(0.5, 0.0));
    /// assert!(!Complex::new(0.0, 0.0).inverse().is_finite());
    /// ```
    #[must_use]
    pub fn inverse(&self) -> Self {
        let square_abs = self.real * self.real + self.imag * self.imag;

        Self { real: self.real / square_abs,
               imag: -self.imag / square_abs, }
    }

    /// Compares two numbers component-wise against a custom tolerance.
    ///
    /// `==` is `approx_eq` with [`EPSILON`].
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// let a = Complex::new(1.0, 1.0);
    /// let b = Complex::new(1.05, 0.95);
    /// assert!(a != b);
    /// assert!(a.approx_eq(&b, 0.1));
    /// ```
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.real - other.real).abs() < tolerance && (self.imag - other.imag).abs() < tolerance
    }

    /// Returns `true` if either component is `NaN`.
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        self.real.is_nan() || self.imag.is_nan()
    }

    /// Returns `true` if both components are neither infinite nor `NaN`.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }

    /// Returns the canonical rendering `(<real>; <imag>)`.
    ///
    /// # Example
    /// ```
    /// use complexpr::Complex;
    /// assert_eq!(Complex::new(312.3, 643.6).str(), "(312.3; 643.6)");
    /// assert_eq!(Complex::from(5.0).str(), "(5; 0)");
    /// ```
    #[must_use]
    pub fn str(&self) -> String {
        self.to_string()
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}; {})", self.real, self.imag)
    }
}

impl ops::Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { real: -self.real,
               imag: -self.imag, }
    }
}

impl ops::Neg for &Complex {
    type Output = Complex;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl ops::Not for Complex {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.conj()
    }
}

impl ops::Not for &Complex {
    type Output = Complex;

    fn not(self) -> Self::Output {
        self.conj()
    }
}

impl ops::AddAssign for Complex {
    fn add_assign(&mut self, rhs: Self) {
        self.real += rhs.real;
        self.imag += rhs.imag;
    }
}

impl ops::SubAssign for Complex {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}

impl ops::MulAssign for Complex {
    fn mul_assign(&mut self, rhs: Self) {
        let lhs = *self;
        self.real = lhs.real * rhs.real - lhs.imag * rhs.imag;
        self.imag = lhs.imag * rhs.real + lhs.real * rhs.imag;
    }
}

impl ops::DivAssign for Complex {
    /// Smith's algorithm: divides through by the larger-magnitude component of
    /// the divisor first.
    fn div_assign(&mut self, rhs: Self) {
        let lhs = *self;
        if rhs.imag.abs() < rhs.real.abs() {
            let ratio = rhs.imag / rhs.real;
            let denom = rhs.real + rhs.imag * ratio;
            self.real = (lhs.real + lhs.imag * ratio) / denom;
            self.imag = (lhs.imag - lhs.real * ratio) / denom;
        } else {
            let ratio = rhs.real / rhs.imag;
            let denom = rhs.imag + rhs.real * ratio;
            self.real = (lhs.real * ratio + lhs.imag) / denom;
            self.imag = (lhs.imag * ratio - lhs.real) / denom;
        }
    }
}

macro_rules! forward_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign:ident) => {
        impl ops::$trait for Complex {
            type Output = Self;

            fn $method(mut self, rhs: Self) -> Self::Output {
                ops::$assign_trait::$assign(&mut self, rhs);
                self
            }
        }

        impl ops::$trait<&Complex> for &Complex {
            type Output = Complex;

            fn $method(self, rhs: &Complex) -> Self::Output {
                ops::$trait::$method(*self, *rhs)
            }
        }

        impl ops::$trait<f64> for Complex {
            type Output = Self;

            fn $method(self, rhs: f64) -> Self::Output {
                ops::$trait::$method(self, Self::from_real(rhs))
            }
        }
    };
}

forward_binary_op!(Add, add, AddAssign, add_assign);
forward_binary_op!(Sub, sub, SubAssign, sub_assign);
forward_binary_op!(Mul, mul, MulAssign, mul_assign);
forward_binary_op!(Div, div, DivAssign, div_assign);

impl From<f64> for Complex {
    fn from(value: f64) -> Self {
        Self::from_real(value)
    }
}

impl From<(f64, f64)> for Complex {
    fn from(value: (f64, f64)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_picks_branch_by_larger_component() {
        let a = Complex::new(1.0, 2.0);
        assert_eq!(a / Complex::new(4.0, 1.0), Complex::new(6.0 / 17.0, 7.0 / 17.0));
        assert_eq!(a / Complex::new(1.0, 4.0), Complex::new(9.0 / 17.0, -2.0 / 17.0));
    }

    #[test]
    fn division_survives_huge_divisors() {
        let huge = Complex::new(1e300, 1e300);
        let quotient = huge / huge;
        assert_eq!(quotient, ONE);
    }

    #[test]
    fn division_by_zero_is_not_finite() {
        assert!(!(ONE / ZERO).is_finite());
        assert!((ZERO / ZERO).is_nan());
    }

    #[test]
    fn compound_assignment_chains() {
        let mut z = Complex::new(1.0, 1.0);
        z += I;
        z *= Complex::new(2.0, 0.0);
        z -= ONE;
        z /= Complex::new(0.0, 1.0);
        assert_eq!(z, Complex::new(4.0, -1.0));
    }

    #[test]
    fn nan_is_not_equal_to_itself() {
        let nan = Complex::new(f64::NAN, 0.0);
        assert!(nan != nan);
    }
}
