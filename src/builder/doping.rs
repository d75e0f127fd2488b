use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use super::point::Scalar;
use crate::error::{Result, SdeError};
use crate::utils::format_sci;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    #[serde(rename = "p")]
    P,
    #[serde(rename = "n")]
    N,
}

impl FromStr for Polarity {
    type Err = SdeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "p" => Ok(Polarity::P),
            "n" => Ok(Polarity::N),
            _ => Err(SdeError::InvalidPolarity(s.to_owned())),
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Polarity::P => write!(f, "p"),
            Polarity::N => write!(f, "n"),
        }
    }
}

/// Dopant species written for each polarity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dopants {
    #[serde(default = "Dopants::default_p")]
    pub p_dopant: String,
    #[serde(default = "Dopants::default_n")]
    pub n_dopant: String,
}

impl Dopants {
    fn default_p() -> String {
        "BoronActiveConcentration".to_owned()
    }

    fn default_n() -> String {
        "PhosphorusActiveConcentration".to_owned()
    }

    pub fn species(&self, polarity: Polarity) -> &str {
        match polarity {
            Polarity::P => &self.p_dopant,
            Polarity::N => &self.n_dopant,
        }
    }
}

impl Default for Dopants {
    fn default() -> Self {
        Self {
            p_dopant: Self::default_p(),
            n_dopant: Self::default_n(),
        }
    }
}

/// A named constant doping profile.
///
/// The concentration (cm^-3) is either a literal or the name of a variable
/// defined earlier in the script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DopingType {
    pub name: String,
    pub polarity: Polarity,
    pub concentration: Scalar,
}

impl DopingType {
    pub fn new(name: impl Into<String>, polarity: Polarity, concentration: impl Into<Scalar>) -> Self {
        Self {
            name: name.into(),
            polarity,
            concentration: concentration.into(),
        }
    }
}

/// Assignment of a doping type to a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDoping {
    pub region: String,
    pub doping: String,
}

impl RegionDoping {
    pub fn new(region: impl Into<String>, doping: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            doping: doping.into(),
        }
    }
}

/// The doping types defined so far in a script, by name.
#[derive(Debug, Clone, Default)]
pub struct DopingRegistry {
    types: HashMap<String, DopingType>,
}

impl DopingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later definitions of a name replace earlier ones.
    pub fn register(&mut self, types: &[DopingType]) {
        self.types
            .extend(types.iter().map(|t| (t.name.clone(), t.clone())));
    }

    pub fn get(&self, name: &str) -> Option<&DopingType> {
        self.types.get(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

pub fn render_doping_definitions(types: &[DopingType], dopants: &Dopants) -> String {
    types
        .iter()
        .map(|doping| {
            // variable names are written verbatim, not as expressions
            let concentration = match &doping.concentration {
                Scalar::Number(value) => format_sci(*value, 3),
                Scalar::Expr(name) => name.clone(),
            };
            format!(
                "(sdedr:define-constant-profile \"{}\"  {} {}) \n",
                doping.name,
                dopants.species(doping.polarity),
                concentration
            )
        })
        .collect()
}

/// Renders one placement per mapping, failing on the first mapping that
/// names a doping type missing from `registry`.
///
/// The placement is named after the region minus its last character.
pub fn render_doping_assignments(registry: &DopingRegistry, mappings: &[RegionDoping]) -> Result<String> {
    let mut statements = String::new();
    for mapping in mappings {
        let Some(doping) = registry.get(&mapping.doping) else {
            return Err(SdeError::UndefinedDoping {
                region: mapping.region.clone(),
                doping: mapping.doping.clone(),
            });
        };
        debug!("{}-type doping {} on {}", doping.polarity, doping.name, mapping.region);
        let mut placement = mapping.region.chars();
        placement.next_back();
        statements.push_str(&format!(
            "(sdedr:define-constant-profile-region \"{}\" \"{}\" \"{}\") \n",
            placement.as_str(),
            mapping.doping,
            mapping.region
        ));
    }
    Ok(statements)
}

/// The two statement groups of a constant doping block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantDoping {
    pub definitions: String,
    pub assignments: String,
}

impl fmt::Display for ConstantDoping {
    /// Definitions followed by assignments, each group closed by a blank line.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\n{}\n", self.definitions, self.assignments)
    }
}

/// Renders the definitions of `types` and the placements of `mappings`.
///
/// Mappings may name any type in `registry` or in `types`. The registry is
/// left as it is; callers keeping one across blocks register `types` once
/// this succeeds.
pub fn render_constant_doping(
    registry: &DopingRegistry,
    types: &[DopingType],
    mappings: &[RegionDoping],
    dopants: &Dopants,
) -> Result<ConstantDoping> {
    let mut known = registry.clone();
    known.register(types);
    Ok(ConstantDoping {
        assignments: render_doping_assignments(&known, mappings)?,
        definitions: render_doping_definitions(types, dopants),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types() -> Vec<DopingType> {
        vec![
            DopingType::new("P_doping", Polarity::P, 1e18),
            DopingType::new("N++_doping", Polarity::N, "mid_doping"),
        ]
    }

    fn registry() -> DopingRegistry {
        let mut registry = DopingRegistry::new();
        registry.register(&types());
        registry
    }

    #[test]
    fn definitions_select_species_by_polarity() {
        assert_eq!(
            render_doping_definitions(&types(), &Dopants::default()),
            "(sdedr:define-constant-profile \"P_doping\"  BoronActiveConcentration 1.000e+18) \n\
             (sdedr:define-constant-profile \"N++_doping\"  PhosphorusActiveConcentration mid_doping) \n"
        );
        let dopants = Dopants {
            n_dopant: "ArsenicActiveConcentration".to_owned(),
            ..Dopants::default()
        };
        assert!(render_doping_definitions(&types(), &dopants).contains("ArsenicActiveConcentration mid_doping"));
    }

    #[test]
    fn assignments_to_defined_types() {
        let registry = registry();
        let mappings = [
            RegionDoping::new("middle_spoke", "P_doping"),
            RegionDoping::new("outer_spoke", "N++_doping"),
        ];
        assert_eq!(
            render_doping_assignments(&registry, &mappings).unwrap(),
            "(sdedr:define-constant-profile-region \"middle_spok\" \"P_doping\" \"middle_spoke\") \n\
             (sdedr:define-constant-profile-region \"outer_spok\" \"N++_doping\" \"outer_spoke\") \n"
        );
    }

    #[test]
    fn every_undefined_type_is_rejected() {
        let registry = registry();
        for doping in ["p_doping", "N_doping", ""] {
            let err = render_doping_assignments(&registry, &[RegionDoping::new("body", doping)]).unwrap_err();
            assert!(
                matches!(&err, SdeError::UndefinedDoping { region, doping: d } if region == "body" && d == doping),
                "{}",
                err
            );
        }
        for doping in types() {
            assert!(render_doping_assignments(&registry, &[RegionDoping::new("body", doping.name)]).is_ok());
        }
    }

    #[test]
    fn failure_stops_the_whole_block() {
        let mappings = [
            RegionDoping::new("middle_spoke", "P_doping"),
            RegionDoping::new("outer_spoke", "missing"),
        ];
        assert!(render_constant_doping(&DopingRegistry::new(), &types(), &mappings, &Dopants::default()).is_err());
    }

    #[test]
    fn constant_doping_block() {
        let block = render_constant_doping(
            &DopingRegistry::new(),
            &types()[..1],
            &[RegionDoping::new("ab", "P_doping")],
            &Dopants::default(),
        )
        .unwrap();
        assert_eq!(
            block.to_string(),
            "(sdedr:define-constant-profile \"P_doping\"  BoronActiveConcentration 1.000e+18) \n\n\
             (sdedr:define-constant-profile-region \"a\" \"P_doping\" \"ab\") \n\n"
        );
    }

    #[test]
    fn mappings_may_use_registered_types() {
        let mut registry = DopingRegistry::new();
        registry.register(&types()[..1]);
        let block = render_constant_doping(
            &registry,
            &types()[1..],
            &[RegionDoping::new("body", "P_doping"), RegionDoping::new("cap", "N++_doping")],
            &Dopants::default(),
        )
        .unwrap();
        assert_eq!(
            block.definitions,
            "(sdedr:define-constant-profile \"N++_doping\"  PhosphorusActiveConcentration mid_doping) \n"
        );
        assert_eq!(block.assignments.lines().count(), 2);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registry_replaces_redefinitions() {
        let mut registry = registry();
        registry.register(&[DopingType::new("P_doping", Polarity::N, 1e15)]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("P_doping").unwrap().polarity, Polarity::N);
        assert!("x".parse::<Polarity>().is_err());
    }
}
