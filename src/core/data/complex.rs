use std::ops::{Add, Mul};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    // (a+bi)(c+di) = (ac - bd) + (ad + bc)i
    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_has_zero_magnitude() {
        assert_eq!(Complex::ZERO.magnitude_squared(), 0.0);
    }

    #[test]
    fn test_magnitude_squared_ignores_sign() {
        let c = Complex {
            real: -3.0,
            imag: 4.0,
        };

        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_add_componentwise() {
        let a = Complex {
            real: 1.0,
            imag: -2.0,
        };
        let b = Complex {
            real: 3.0,
            imag: 7.0,
        };
        let sum = a + b;

        assert_eq!(sum.real, 4.0);
        assert_eq!(sum.imag, 5.0);
    }

    #[test]
    fn test_square_follows_binomial_expansion() {
        // (2 + 3i)² = 4 - 9 + 12i = -5 + 12i
        let c = Complex {
            real: 2.0,
            imag: 3.0,
        };
        let squared = c * c;

        assert_eq!(squared.real, -5.0);
        assert_eq!(squared.imag, 12.0);
    }

    #[test]
    fn test_mul_mixed_signs() {
        // (1 + 2i) * (-3 - 4i) = -3 - 4i - 6i + 8 = 5 - 10i
        let a = Complex {
            real: 1.0,
            imag: 2.0,
        };
        let b = Complex {
            real: -3.0,
            imag: -4.0,
        };
        let product = a * b;

        assert_eq!(product.real, 5.0);
        assert_eq!(product.imag, -10.0);
    }
}
