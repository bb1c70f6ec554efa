// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::decimal::Decimal;

pub trait SafeSub: Sized {
	fn checked_sub(&self, r: &Self) -> Option<Self>;
	fn saturating_sub(&self, r: &Self) -> Self;
	fn wrapping_sub(&self, r: &Self) -> Self;
}

macro_rules! impl_safe_sub {
	($($t:ty),*) => {
		$(
			impl SafeSub for $t {
				fn checked_sub(&self, r: &Self) -> Option<Self> {
					<$t>::checked_sub(*self, *r)
				}
				fn saturating_sub(&self, r: &Self) -> Self {
					<$t>::saturating_sub(*self, *r)
				}
				fn wrapping_sub(&self, r: &Self) -> Self {
					<$t>::wrapping_sub(*self, *r)
				}
			}
		)*
	};
}

impl_safe_sub!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_safe_sub_float {
	($($t:ty),*) => {
		$(
			impl SafeSub for $t {
				fn checked_sub(&self, r: &Self) -> Option<Self> {
					let result = *self - *r;
					if result.is_finite() || !self.is_finite() || !r.is_finite() { Some(result) } else { None }
				}

				fn saturating_sub(&self, r: &Self) -> Self {
					let result = *self - *r;
					if result.is_infinite() && self.is_finite() && r.is_finite() {
						if result.is_sign_positive() { <$t>::MAX } else { <$t>::MIN }
					} else {
						result
					}
				}

				fn wrapping_sub(&self, r: &Self) -> Self {
					*self - *r
				}
			}
		)*
	};
}

impl_safe_sub_float!(f32, f64);

impl SafeSub for Decimal {
	fn checked_sub(&self, r: &Self) -> Option<Self> {
		Some(Decimal::new(self.inner() - r.inner()))
	}

	fn saturating_sub(&self, r: &Self) -> Self {
		Decimal::new(self.inner() - r.inner())
	}

	fn wrapping_sub(&self, r: &Self) -> Self {
		Decimal::new(self.inner() - r.inner())
	}
}

#[cfg(test)]
mod tests {

	macro_rules! define_tests {
        ($($t:ty => $mod:ident),*) => {
            $(
                mod $mod {
                    use super::super::SafeSub;

                    #[test]
                    fn checked_sub_happy() {
                        let x: $t = 30;
                        let y: $t = 20;
                        assert_eq!(SafeSub::checked_sub(&x, &y), Some(10));
                    }

                    #[test]
                    fn checked_sub_unhappy() {
                        let x: $t = <$t>::MIN;
                        let y: $t = 1;
                        assert_eq!(SafeSub::checked_sub(&x, &y), None);
                    }

                    #[test]
                    fn saturating_sub_unhappy() {
                        let x: $t = <$t>::MIN;
                        let y: $t = 1;
                        assert_eq!(SafeSub::saturating_sub(&x, &y), <$t>::MIN);
                    }

                    #[test]
                    fn wrapping_sub_unhappy() {
                        let x: $t = <$t>::MIN;
                        let y: $t = 1;
                        assert_eq!(SafeSub::wrapping_sub(&x, &y), <$t>::MAX);
                    }
                }
            )*
        };
    }

	define_tests!(
		i8 => i8_tests,
		i32 => i32_tests,
		i64 => i64_tests,
		u8 => u8_tests,
		u16 => u16_tests,
		u64 => u64_tests
	);

	mod decimal_tests {
		use super::super::SafeSub;
		use crate::value::decimal::Decimal;

		#[test]
		fn sub_goes_negative() {
			let l = Decimal::from(1);
			let r = Decimal::from_parts(25, 1);
			assert_eq!(SafeSub::wrapping_sub(&l, &r), Decimal::from_parts(-15, 1));
		}
	}
}
