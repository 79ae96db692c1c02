use std::fmt;

pub use fixed_map::Key;
use fixed_map::Map as FixedMap;

use crate::error::{Error, Result};
use crate::ops;

/// A closed set of linguistic categories describing one variable.
///
/// Implementations are generated by [`terms!`], which keeps the external
/// category names (`"Very High"`, `"Very_low"`, ...) next to the variants.
pub trait Term: Key + Copy + Eq + fmt::Debug + 'static {
    /// Name of the variable these terms describe, used in errors
    const DOMAIN: &'static str;
    /// Every term in declaration order
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    /// Case and spelling sensitive
    fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|term| term.name() == name)
            .ok_or_else(|| Error::UnknownCategory {
                domain: Self::DOMAIN,
                category: name.to_owned(),
            })
    }
}

macro_rules! terms {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident($domain:literal) {
            $($(#[$variant_meta:meta])* $variant:ident = $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, fixed_map::Key, Ord, PartialEq, PartialOrd)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[cfg_attr(feature = "serde", serde(rename = $label))]
                $variant,
            )+
        }

        impl $crate::terms::Term for $name {
            const DOMAIN: &'static str = $domain;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::terms::Term::name(*self))
            }
        }
    };
}

pub(crate) use terms;

/// Degree of membership for every term of `K`.
///
/// Only total constructors are exposed, so a mapping always carries every
/// category of its domain, zero degrees included.
pub struct Memberships<K: Term>(FixedMap<K, f64>);

impl<K: Term> Memberships<K> {
    pub fn from_fn(mut degree: impl FnMut(K) -> f64) -> Self {
        let mut map = FixedMap::new();

        for &term in K::ALL {
            map.insert(term, degree(term));
        }

        Self(map)
    }

    pub fn try_from_fn(mut degree: impl FnMut(K) -> Result<f64>) -> Result<Self> {
        let mut map = FixedMap::new();

        for &term in K::ALL {
            map.insert(term, degree(term)?);
        }

        Ok(Self(map))
    }

    pub fn zero() -> Self {
        Self::from_fn(|_| 0.)
    }

    /// Builds a mapping from external category names.
    ///
    /// Fails on a name the domain doesn't define and on any category left out.
    pub fn from_named<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Result<Self> {
        let mut map = FixedMap::new();

        for (name, degree) in pairs {
            map.insert(K::from_name(name)?, degree);
        }

        let this = Self(map);

        for &term in K::ALL {
            this.get(term)?;
        }

        Ok(this)
    }

    pub fn get(&self, term: K) -> Result<f64> {
        self.0.get(term).copied().ok_or(Error::MissingCategory {
            domain: K::DOMAIN,
            category: term.name(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        K::ALL
            .iter()
            .filter_map(move |&term| self.0.get(term).map(|degree| (term, *degree)))
    }

    /// `(name, degree)` pairs in declaration order
    pub fn named(&self) -> Vec<(&'static str, f64)> {
        self.iter().map(|(term, degree)| (term.name(), degree)).collect()
    }

    /// Pointwise OR of two mappings over the same domain
    pub fn union(&self, other: &Self) -> Result<Self> {
        Self::try_from_fn(|term| Ok(ops::or(self.get(term)?, other.get(term)?)))
    }

    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, degree)| degree <= 0.)
    }

    /// Raises `term` to at least `degree`
    pub(crate) fn raise(&mut self, term: K, degree: f64) -> Result<()> {
        let current = self.get(term)?;

        self.0.insert(term, ops::or(current, degree));

        Ok(())
    }
}

impl<K: Term> Clone for Memberships<K> {
    fn clone(&self) -> Self {
        let mut map = FixedMap::new();

        for (term, degree) in self.iter() {
            map.insert(term, degree);
        }

        Self(map)
    }
}

impl<K: Term> PartialEq for Memberships<K> {
    fn eq(&self, other: &Self) -> bool {
        K::ALL
            .iter()
            .all(|&term| self.0.get(term) == other.0.get(term))
    }
}

impl<K: Term> fmt::Debug for Memberships<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter().map(|(term, degree)| (term.name(), degree))).finish()
    }
}

#[cfg(feature = "serde")]
impl<K: Term> serde::Serialize for Memberships<K> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(K::ALL.len()))?;

        for (term, degree) in self.iter() {
            map.serialize_entry(term.name(), &degree)?;
        }

        map.end()
    }
}

#[cfg(test)]
terms! {
    enum Grade("grade") {
        Poor = "Poor",
        Good = "Good",
        VeryGood = "Very Good",
    }
}

#[test]
fn test_term_names() {
    assert_eq!(Grade::ALL, &[Grade::Poor, Grade::Good, Grade::VeryGood]);
    assert_eq!(Grade::VeryGood.name(), "Very Good");
    assert_eq!(Grade::VeryGood.to_string(), "Very Good");
    assert_eq!(Grade::from_name("Very Good"), Ok(Grade::VeryGood));
    assert_eq!(
        Grade::from_name("very good"),
        Err(Error::UnknownCategory {
            domain: "grade",
            category: "very good".into(),
        })
    );
}

#[test]
fn test_from_named() {
    let grades = Memberships::<Grade>::from_named([("Poor", 0.), ("Very Good", 0.25), ("Good", 0.75)]).unwrap();

    assert_eq!(grades.get(Grade::Poor), Ok(0.));
    assert_eq!(grades.get(Grade::Good), Ok(0.75));
    assert_eq!(grades.named(), vec![("Poor", 0.), ("Good", 0.75), ("Very Good", 0.25)]);

    let missing = Memberships::<Grade>::from_named([("Poor", 0.), ("Good", 1.)]);

    assert_eq!(
        missing,
        Err(Error::MissingCategory {
            domain: "grade",
            category: "Very Good",
        })
    );

    let misspelled = Memberships::<Grade>::from_named([("Poor", 0.), ("Good", 1.), ("Very_Good", 0.)]);

    assert!(matches!(misspelled, Err(Error::UnknownCategory { .. })));
}

#[test]
fn test_union_and_raise() {
    let left = Memberships::<Grade>::from_named([("Poor", 0.5), ("Good", 0.1), ("Very Good", 0.)]).unwrap();
    let mut right = Memberships::<Grade>::zero();

    assert!(right.is_zero());

    right.raise(Grade::Good, 0.4).unwrap();
    right.raise(Grade::Good, 0.2).unwrap();

    assert_eq!(right.get(Grade::Good), Ok(0.4));
    assert!(!right.is_zero());

    let union = left.union(&right).unwrap();

    assert_eq!(union.named(), vec![("Poor", 0.5), ("Good", 0.4), ("Very Good", 0.)]);
    assert_eq!(union.clone(), union);
    assert_eq!(format!("{union:?}"), r#"{"Poor": 0.5, "Good": 0.4, "Very Good": 0.0}"#);
}

#[test]
fn test_raise_requires_category() {
    let mut partial = Memberships::<Grade>(FixedMap::new());

    assert_eq!(
        partial.raise(Grade::Good, 0.5),
        Err(Error::MissingCategory {
            domain: "grade",
            category: "Good",
        })
    );
    assert_eq!(partial.get(Grade::Good).ok(), None);
}
