use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

const DECIMALS: u32 = 4;
const MULTIPLIER: u64 = 10_u64.pow(DECIMALS);

/// Money quantity with 4 fixed decimal digits. Every sum stays exact,
/// there is no binary floating point anywhere in the accounting.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    serde::Serialize,
    serde::Deserialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        match self.0.checked_sub(rhs.0) {
            Some(raw) => Some(Amount(raw)),
            None => None,
        }
    }

    /// Difference that may go below zero, for fund accounting.
    pub fn signed_sub(self, rhs: Amount) -> SignedAmount {
        SignedAmount(self.0 as i128 - rhs.0 as i128)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

fn fmt_fixed(raw: u64, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let int = raw / MULTIPLIER;
    write!(f, "{}", int)?;

    let mut floating = raw - (int * MULTIPLIER);
    if floating == 0 {
        return Ok(());
    }

    write!(f, ".")?;

    while floating != 0 {
        floating *= 10;
        write!(f, "{}", floating / MULTIPLIER)?;
        floating %= MULTIPLIER;
    }

    Ok(())
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_fixed(self.0, f)
    }
}

/// Signed quantity at the same scale as [`Amount`]. Only produced by
/// subtraction, the ledger itself never stores negative money.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct SignedAmount(i128);

impl SignedAmount {
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl std::fmt::Display for SignedAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 < 0 {
            write!(f, "-")?;
        }
        fmt_fixed(self.0.unsigned_abs() as u64, f)
    }
}

pub mod from_str {
    use std::str::FromStr;

    use super::{Amount, DECIMALS, MULTIPLIER};

    #[derive(Debug, thiserror::Error)]
    pub enum Error {
        #[error("has more than {DECIMALS} decimals")]
        MaxDecimal,
        #[error("contains too many commas or dots")]
        InvalidDecimal,
        #[error("is too big")]
        TooBig,
        #[error("is not a number")]
        InvalidNumber,
    }

    impl FromStr for Amount {
        type Err = Error;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let mut split = s.split(&['.', ',']);

            let Some(integer_str) = split.next() else {
                return Err(Error::InvalidNumber);
            };

            let integer_part = match integer_str {
                "" => 0,
                _ => integer_str
                    .parse::<u64>()
                    .map_err(|_| Error::InvalidNumber)?,
            };

            let real = integer_part.checked_mul(MULTIPLIER).ok_or(Error::TooBig)?;

            let Some(decimal_str) = split.next() else {
                return Ok(Self(real));
            };

            if split.next().is_some() {
                return Err(Error::InvalidDecimal);
            }

            if decimal_str.is_empty() {
                return Err(Error::InvalidNumber);
            }

            if decimal_str.len() > DECIMALS as usize {
                return Err(Error::MaxDecimal);
            }

            let decimal_part = decimal_str
                .parse::<u64>()
                .map_err(|_| Error::InvalidNumber)?
                * 10_u64.pow(DECIMALS - decimal_str.len() as u32);

            real.checked_add(decimal_part)
                .map(Self)
                .ok_or(Error::TooBig)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        s.parse().expect("amount literal")
    }

    #[test]
    fn parses_integers_and_decimals() {
        assert_eq!(amount("500"), Amount(500 * MULTIPLIER));
        assert_eq!(amount("12.5"), Amount(125_000));
        assert_eq!(amount("0.0001"), Amount(1));
        assert_eq!(amount(",25"), Amount(2_500));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("1.2.3".parse::<Amount>().is_err());
        assert!("1.00001".parse::<Amount>().is_err());
        assert!("abc".parse::<Amount>().is_err());
        assert!("1.".parse::<Amount>().is_err());
    }

    #[test]
    fn displays_without_trailing_zeros() {
        assert_eq!(amount("300").to_string(), "300");
        assert_eq!(amount("12.50").to_string(), "12.5");
        assert_eq!(amount("0.0001").to_string(), "0.0001");
    }

    #[test]
    fn sums_exactly() {
        let total: Amount = ["0.1", "0.2", "0.3"].iter().map(|s| amount(s)).sum();
        assert_eq!(total, amount("0.6"));
    }

    #[test]
    fn signed_sub_goes_negative() {
        let net = amount("100").signed_sub(amount("250.5"));
        assert!(net.is_negative());
        assert_eq!(net.to_string(), "-150.5");
    }
}
