use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CorrtestError;

/// Experiment technique declared by the instrument's `ExpType` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Technique {
    /// Chronoamperometry (`ID_PotStatic`)
    Chronoamperometry,
    /// Potential staircase (`ID_PotSquareWave`)
    PotentialStaircase,
    /// Tafel plot (`ID_PotDynamic`)
    Tafel,
    /// Linear sweep stripping voltammetry (`ID_LSVStripping`)
    LinearStripping,
    /// Open circuit potential (`ID_OCP`)
    OpenCircuit,
    /// Chronopotentiometry (`ID_GalStatic`)
    Chronopotentiometry,
    /// Linear sweep voltammetry (`ID_LSVA`)
    LinearSweep,
    /// Cyclic voltammetry (`ID_CV`)
    CyclicVoltammetry,
}

impl Technique {
    /// Every supported technique
    pub const ALL: [Technique; 8] = [
        Technique::Chronoamperometry,
        Technique::PotentialStaircase,
        Technique::Tafel,
        Technique::LinearStripping,
        Technique::OpenCircuit,
        Technique::Chronopotentiometry,
        Technique::LinearSweep,
        Technique::CyclicVoltammetry,
    ];

    /// Resolve a firmware identifier
    pub fn from_id(id: &str) -> Result<Self, CorrtestError> {
        match id {
            "ID_PotStatic" => Ok(Technique::Chronoamperometry),
            "ID_PotSquareWave" => Ok(Technique::PotentialStaircase),
            "ID_PotDynamic" => Ok(Technique::Tafel),
            "ID_LSVStripping" => Ok(Technique::LinearStripping),
            "ID_OCP" => Ok(Technique::OpenCircuit),
            "ID_GalStatic" => Ok(Technique::Chronopotentiometry),
            "ID_LSVA" => Ok(Technique::LinearSweep),
            "ID_CV" => Ok(Technique::CyclicVoltammetry),
            other => Err(CorrtestError::UnknownTechnique(other.to_string())),
        }
    }

    /// Firmware identifier as written in `ExpType`
    pub fn id(&self) -> &'static str {
        match self {
            Technique::Chronoamperometry => "ID_PotStatic",
            Technique::PotentialStaircase => "ID_PotSquareWave",
            Technique::Tafel => "ID_PotDynamic",
            Technique::LinearStripping => "ID_LSVStripping",
            Technique::OpenCircuit => "ID_OCP",
            Technique::Chronopotentiometry => "ID_GalStatic",
            Technique::LinearSweep => "ID_LSVA",
            Technique::CyclicVoltammetry => "ID_CV",
        }
    }

    /// Short name used for sheets and reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Technique::Chronoamperometry => "CA",
            Technique::PotentialStaircase => "PotStairStep",
            Technique::Tafel => "Tafel",
            Technique::LinearStripping => "LinearStripping",
            Technique::OpenCircuit => "OCV",
            Technique::Chronopotentiometry => "CP",
            Technique::LinearSweep => "LSV",
            Technique::CyclicVoltammetry => "CV",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Technique {
    type Err = CorrtestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Technique::from_id(s)
    }
}
