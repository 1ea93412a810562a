//! This module provides the electronegativity parameter tables and utilities for loading them from TOML.
//!
//! Gasteiger-Marsili parameters are keyed two ways: by the bond type that reveals an atom's
//! hybridization state, and by the number of binding partners, which is the fallback when bond
//! types are unknown. Both tables map an element to a set of `(a, b, c)` coefficients. Element keys
//! in TOML files may be given as symbols or atomic numbers.

use super::error::PeoeError;
use crate::types::BondType;
use serde::Deserialize;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::path::Path;

/// The coefficients of an atom's orbital electronegativity curve.
///
/// The electronegativity at partial charge `q` is `a + b*q + c*q^2`, in electron volts.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Electronegativity of the neutral atom.
    pub a: f64,
    /// Linear charge term.
    pub b: f64,
    /// Quadratic charge term.
    pub c: f64,
}

impl Coefficients {
    /// Creates a set of coefficients.
    ///
    /// # Arguments
    ///
    /// * `a` - The electronegativity at zero charge, in eV.
    /// * `b` - The coefficient of the linear charge term.
    /// * `c` - The coefficient of the quadratic charge term.
    ///
    /// # Returns
    ///
    /// The coefficients, unvalidated. Tables loaded from TOML reject non-finite values.
    ///
    /// # Examples
    ///
    /// ```
    /// use peoe::Coefficients;
    ///
    /// let carbon_sp3 = Coefficients::new(7.98, 9.18, 1.88);
    /// assert_eq!(carbon_sp3.a, 7.98);
    /// ```
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Returns `true` if all three coefficients are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }
}

/// Why a parameter lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupFailure {
    /// The table has no entry at all for the element.
    UnknownElement,
    /// The element is known, but not with the requested bond type or partner count.
    UnknownDescriptor,
}

/// The Gasteiger-Marsili parameter tables.
///
/// Both maps are keyed by atomic number. Once loaded, a `Parameters` value is only read.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameters {
    /// Coefficients per element and bond type.
    #[serde(
        rename = "bond_type",
        default,
        deserialize_with = "deserialize_element_map"
    )]
    pub by_bond_type: HashMap<u8, HashMap<BondType, Coefficients>>,
    /// Coefficients per element and number of binding partners.
    #[serde(
        rename = "partner_count",
        default,
        deserialize_with = "deserialize_element_map"
    )]
    pub by_partner_count: HashMap<u8, HashMap<u8, Coefficients>>,
}

impl Parameters {
    /// Loads parameters from a TOML file.
    ///
    /// The file should contain a `[bond_type.<element>]` table and a
    /// `[partner_count.<element>]` table for every parametrized element.
    ///
    /// # Errors
    ///
    /// Returns a `PeoeError::IoError` if the file cannot be read, or a
    /// `PeoeError::DeserializationError` if the TOML content is invalid or contains
    /// unrecognized keys.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use peoe::Parameters;
    /// use std::path::Path;
    ///
    /// let params = Parameters::load_from_file(Path::new("gasteiger.toml")).unwrap();
    /// ```
    pub fn load_from_file(path: &Path) -> Result<Self, PeoeError> {
        let content = std::fs::read_to_string(path).map_err(|io_error| PeoeError::IoError {
            path: path.to_path_buf(),
            source: io_error,
        })?;

        Self::load_from_str(&content)
    }

    /// Parses parameters from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `PeoeError::DeserializationError` if the TOML content is invalid, names an
    /// unknown element or bond type, or uses a partner count that is not a small integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use peoe::{BondType, Parameters};
    ///
    /// let toml_data = r#"
    /// [bond_type.C]
    /// single = { a = 7.98, b = 9.18, c = 1.88 }
    ///
    /// [partner_count.6]
    /// 4 = { a = 7.98, b = 9.18, c = 1.88 }
    /// "#;
    ///
    /// let params = Parameters::load_from_str(toml_data).unwrap();
    /// assert!(params.by_bond_type(6, BondType::Single).is_ok());
    /// assert!(params.by_partner_count(6, 4).is_ok());
    /// ```
    pub fn load_from_str(toml_str: &str) -> Result<Self, PeoeError> {
        toml::from_str(toml_str).map_err(PeoeError::from)
    }

    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Parameters {
            by_bond_type: HashMap::new(),
            by_partner_count: HashMap::new(),
        }
    }

    /// Looks up the coefficients of an element in a given bond-type state.
    pub fn by_bond_type(
        &self,
        atomic_number: u8,
        bond_type: BondType,
    ) -> Result<Coefficients, LookupFailure> {
        lookup(&self.by_bond_type, atomic_number, &bond_type)
    }

    /// Looks up the coefficients of an element with a given number of binding partners.
    pub fn by_partner_count(
        &self,
        atomic_number: u8,
        partner_count: usize,
    ) -> Result<Coefficients, LookupFailure> {
        match u8::try_from(partner_count) {
            Ok(count) => lookup(&self.by_partner_count, atomic_number, &count),
            Err(_) if self.by_partner_count.contains_key(&atomic_number) => {
                Err(LookupFailure::UnknownDescriptor)
            }
            Err(_) => Err(LookupFailure::UnknownElement),
        }
    }

    /// Adds or replaces a bond-type entry.
    pub fn insert_by_bond_type(
        &mut self,
        atomic_number: u8,
        bond_type: BondType,
        coefficients: Coefficients,
    ) {
        self.by_bond_type
            .entry(atomic_number)
            .or_default()
            .insert(bond_type, coefficients);
    }

    /// Adds or replaces a partner-count entry.
    pub fn insert_by_partner_count(
        &mut self,
        atomic_number: u8,
        partner_count: u8,
        coefficients: Coefficients,
    ) {
        self.by_partner_count
            .entry(atomic_number)
            .or_default()
            .insert(partner_count, coefficients);
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup<K: Eq + Hash>(
    table: &HashMap<u8, HashMap<K, Coefficients>>,
    atomic_number: u8,
    key: &K,
) -> Result<Coefficients, LookupFailure> {
    let entries = table
        .get(&atomic_number)
        .ok_or(LookupFailure::UnknownElement)?;
    entries
        .get(key)
        .copied()
        .ok_or(LookupFailure::UnknownDescriptor)
}

/// A second-level key of a parameter table.
trait TableKey: Sized + Eq + Hash {
    fn parse_key(key: &str) -> Result<Self, String>;
}

impl TableKey for BondType {
    fn parse_key(key: &str) -> Result<Self, String> {
        match key.parse::<BondType>()? {
            BondType::Any => Err("bond type 'any' never selects parameters".to_string()),
            bond_type => Ok(bond_type),
        }
    }
}

impl TableKey for u8 {
    fn parse_key(key: &str) -> Result<Self, String> {
        key.trim()
            .parse::<u8>()
            .map_err(|_| "expected a partner count between 0 and 255".to_string())
    }
}

/// Deserializes an element table whose second-level keys parse into `K`.
///
/// Element keys may be atomic numbers (as strings) or symbols. Second-level keys are bond-type
/// names or partner counts, depending on `K`. Every coefficient must be finite.
fn deserialize_element_map<'de, D, K>(
    deserializer: D,
) -> Result<HashMap<u8, HashMap<K, Coefficients>>, D::Error>
where
    D: Deserializer<'de>,
    K: TableKey,
{
    struct ElementMapVisitor<K>(PhantomData<K>);

    impl<'de, K: TableKey> Visitor<'de> for ElementMapVisitor<K> {
        type Value = HashMap<u8, HashMap<K, Coefficients>>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map from atomic number or symbol to coefficient tables")
        }

        fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut elements = HashMap::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, table)) =
                map.next_entry::<String, HashMap<String, Coefficients>>()?
            {
                let element = key
                    .parse::<u8>()
                    .ok()
                    .filter(|&z| element_symbol(z).is_some())
                    .or_else(|| atomic_number(&key))
                    .ok_or_else(|| de::Error::custom(format!("invalid element key: '{}'", key)))?;

                let mut entries = HashMap::with_capacity(table.len());
                for (descriptor, coefficients) in table {
                    let parsed = K::parse_key(&descriptor).map_err(|e| {
                        de::Error::custom(format!(
                            "invalid key '{}' for element '{}': {}",
                            descriptor, key, e
                        ))
                    })?;
                    if !coefficients.is_finite() {
                        return Err(de::Error::custom(format!(
                            "non-finite coefficients for '{}' of element '{}'",
                            descriptor, key
                        )));
                    }
                    entries.insert(parsed, coefficients);
                }
                elements.insert(element, entries);
            }
            Ok(elements)
        }
    }

    deserializer.deserialize_map(ElementMapVisitor(PhantomData))
}

const ELEMENT_SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh",
    "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Converts an element symbol to its atomic number.
///
/// Matching ignores ASCII case and surrounding whitespace, so symbols taken from
/// upper-case file formats (`"CL"`) resolve as well.
pub fn atomic_number(symbol: &str) -> Option<u8> {
    let symbol = symbol.trim();
    ELEMENT_SYMBOLS
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(symbol))
        .map(|index| (index + 1) as u8)
}

/// Converts an atomic number to its canonical element symbol.
pub fn element_symbol(atomic_number: u8) -> Option<&'static str> {
    ELEMENT_SYMBOLS
        .get(usize::from(atomic_number).checked_sub(1)?)
        .copied()
}
