//! Validated option sets offered to the user
//!
//! Compilers and build types are fixed enumerations. Generators are whatever
//! the installed tool reported during probing, so a [`BuildOptions`] value is
//! built fresh each run and passed by reference to whoever validates input.

use crate::error::{Result, WizardError};
use crate::probe::ToolCapabilities;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Substring identifying the Visual Studio generator family.
const VISUAL_STUDIO_MARKER: &str = "Visual Studio";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compiler {
    #[serde(rename = "clang")]
    Clang,
    #[serde(rename = "gcc")]
    Gcc,
    #[serde(rename = "cl")]
    Cl,
    #[serde(rename = "clang-cl")]
    ClangCl,
}

impl Compiler {
    pub const ALL: [Compiler; 4] = [
        Compiler::Clang,
        Compiler::Gcc,
        Compiler::Cl,
        Compiler::ClangCl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Compiler::Clang => "clang",
            Compiler::Gcc => "gcc",
            Compiler::Cl => "cl",
            Compiler::ClangCl => "clang-cl",
        }
    }

    /// Whether this driver accepts MSVC-style command lines.
    pub fn is_msvc_family(&self) -> bool {
        matches!(self, Compiler::Cl | Compiler::ClangCl)
    }
}

impl fmt::Display for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Compiler {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self> {
        Compiler::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| WizardError::InvalidInput {
                field: "compiler",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildType {
    Release,
    Debug,
    RelWithDebInfo,
    MinSizeRel,
}

impl BuildType {
    pub const ALL: [BuildType; 4] = [
        BuildType::Release,
        BuildType::Debug,
        BuildType::RelWithDebInfo,
        BuildType::MinSizeRel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildType::Release => "Release",
            BuildType::Debug => "Debug",
            BuildType::RelWithDebInfo => "RelWithDebInfo",
            BuildType::MinSizeRel => "MinSizeRel",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildType {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self> {
        BuildType::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| WizardError::InvalidInput {
                field: "build type",
                value: s.to_string(),
            })
    }
}

pub fn is_visual_studio(generator: &str) -> bool {
    generator.contains(VISUAL_STUDIO_MARKER)
}

/// Cross-field rule: Visual Studio generators need an MSVC-family compiler.
pub fn check_compatibility(generator: &str, compiler: Compiler) -> Result<()> {
    if is_visual_studio(generator) && !compiler.is_msvc_family() {
        return Err(WizardError::IncompatibleSelection {
            generator: generator.to_string(),
            compiler: compiler.to_string(),
        });
    }
    Ok(())
}

/// Immutable option sets consulted while validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    generators: Vec<String>,
}

impl BuildOptions {
    pub fn new(generators: Vec<String>) -> Self {
        Self { generators }
    }

    pub fn from_capabilities(capabilities: &ToolCapabilities) -> Self {
        Self::new(capabilities.generators.clone())
    }

    pub fn generators(&self) -> &[String] {
        &self.generators
    }

    pub fn compilers(&self) -> &'static [Compiler] {
        &Compiler::ALL
    }

    pub fn build_types(&self) -> &'static [BuildType] {
        &BuildType::ALL
    }

    pub fn parse_generator(&self, input: &str) -> Result<String> {
        if self.generators.iter().any(|g| g == input) {
            Ok(input.to_string())
        } else {
            Err(WizardError::InvalidInput {
                field: "generator",
                value: input.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiler_round_trip_names() {
        for compiler in Compiler::ALL {
            assert_eq!(compiler.as_str().parse::<Compiler>().unwrap(), compiler);
        }
    }

    #[test]
    fn test_compiler_rejects_unknown() {
        let err = "msvc".parse::<Compiler>().unwrap_err();
        assert!(matches!(err, WizardError::InvalidInput { field: "compiler", .. }));
        assert!("GCC".parse::<Compiler>().is_err());
    }

    #[test]
    fn test_msvc_family() {
        assert!(Compiler::Cl.is_msvc_family());
        assert!(Compiler::ClangCl.is_msvc_family());
        assert!(!Compiler::Clang.is_msvc_family());
        assert!(!Compiler::Gcc.is_msvc_family());
    }

    #[test]
    fn test_build_type_is_case_sensitive() {
        assert_eq!("Debug".parse::<BuildType>().unwrap(), BuildType::Debug);
        assert!("debug".parse::<BuildType>().is_err());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Compiler::ClangCl).unwrap(), "\"clang-cl\"");
        assert_eq!(
            serde_json::to_string(&BuildType::RelWithDebInfo).unwrap(),
            "\"RelWithDebInfo\""
        );
    }

    #[yare::parameterized(
        vs_with_gcc = { "Visual Studio 17 2022", Compiler::Gcc, false },
        vs_with_clang = { "Visual Studio 16 2019", Compiler::Clang, false },
        vs_with_cl = { "Visual Studio 17 2022", Compiler::Cl, true },
        vs_with_clang_cl = { "Visual Studio 17 2022", Compiler::ClangCl, true },
        make_with_gcc = { "Unix Makefiles", Compiler::Gcc, true },
        ninja_with_cl = { "Ninja", Compiler::Cl, true },
    )]
    fn test_check_compatibility(generator: &str, compiler: Compiler, ok: bool) {
        assert_eq!(check_compatibility(generator, compiler).is_ok(), ok);
    }

    #[test]
    fn test_parse_generator_exact_match() {
        let options = BuildOptions::new(vec!["Unix Makefiles".to_string(), "Ninja".to_string()]);
        assert_eq!(options.parse_generator("Ninja").unwrap(), "Ninja");
        assert!(options.parse_generator("ninja").is_err());
        assert!(options.parse_generator("Unix").is_err());
    }
}
