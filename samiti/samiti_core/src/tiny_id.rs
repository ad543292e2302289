use std::fmt::{Debug, Display};

use rand::{thread_rng, Rng};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TinyId<const N: usize>([u8; N]);

impl<const N: usize> TinyId<N> {
    pub fn new() -> Self {
        let mut id = [0u8; N];
        let mut rng = thread_rng();

        id.fill_with(|| rng.sample(rand::distributions::Alphanumeric));

        Self(id)
    }
}

impl<const N: usize> Default for TinyId<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> AsRef<[u8]> for TinyId<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> Debug for TinyId<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TinyId({})", self)
    }
}

impl<const N: usize> Display for TinyId<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in &self.0 {
            write!(f, "{}", *byte as char)?;
        }

        Ok(())
    }
}

pub mod string {
    use std::fmt;

    use super::TinyId;

    #[derive(Debug)]
    pub enum Error {
        /// Should be alpha-numeric
        Invalid,
        /// Wrong length
        InvalidLength(usize),
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Invalid => write!(f, "id should be alpha-numeric"),
                Self::InvalidLength(len) => write!(f, "id should be of length {}", len),
            }
        }
    }

    impl std::error::Error for Error {}

    impl<const N: usize> std::str::FromStr for TinyId<N> {
        type Err = Error;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            if s.len() != N {
                return Err(Error::InvalidLength(N));
            }

            let mut bytes = [0u8; N];
            for (slot, c) in bytes.iter_mut().zip(s.chars()) {
                if !c.is_ascii_alphanumeric() {
                    return Err(Error::Invalid);
                }
                *slot = c as u8;
            }

            Ok(Self(bytes))
        }
    }
}

impl<const N: usize> serde::Serialize for TinyId<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, const N: usize> serde::Deserialize<'de> for TinyId<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::TinyId;

    #[test]
    fn round_trips_through_str() {
        let id = TinyId::<4>::new();
        let parsed: TinyId<4> = id.to_string().parse().expect("own display is parseable");
        assert_eq!(id, parsed);
    }

    #[test]
    fn rejects_bad_strings() {
        assert!("abcde".parse::<TinyId<4>>().is_err());
        assert!("ab!d".parse::<TinyId<4>>().is_err());
    }
}
