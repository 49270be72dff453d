use std::fmt;

use crate::domain::AppError;

/// The game engine a project targets.
///
/// Each variant contributes a fixed set of engine-specific entries to the
/// directory catalog; `Custom` contributes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineVariant {
    Custom,
    Unity,
    Unreal,
    Godot,
}

impl EngineVariant {
    /// All supported engines in selection order.
    pub const ALL: [EngineVariant; 4] = [
        EngineVariant::Custom,
        EngineVariant::Unity,
        EngineVariant::Unreal,
        EngineVariant::Godot,
    ];

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            EngineVariant::Custom => "Custom",
            EngineVariant::Unity => "Unity",
            EngineVariant::Unreal => "Unreal",
            EngineVariant::Godot => "Godot",
        }
    }

    /// Parse an engine from its name, case-insensitively.
    pub fn from_name(name: &str) -> Option<EngineVariant> {
        match name.trim().to_lowercase().as_str() {
            "custom" => Some(EngineVariant::Custom),
            "unity" => Some(EngineVariant::Unity),
            "unreal" => Some(EngineVariant::Unreal),
            "godot" => Some(EngineVariant::Godot),
            _ => None,
        }
    }

    /// Parse an engine, surfacing the supported names on failure.
    pub fn parse(name: &str) -> Result<EngineVariant, AppError> {
        EngineVariant::from_name(name)
            .ok_or_else(|| AppError::InvalidEngine { name: name.to_string() })
    }
}

impl fmt::Display for EngineVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_from_name_roundtrips() {
        for engine in EngineVariant::ALL {
            assert_eq!(EngineVariant::from_name(engine.display_name()), Some(engine));
        }
    }

    #[test]
    fn engine_from_name_is_case_insensitive() {
        assert_eq!(EngineVariant::from_name("UNITY"), Some(EngineVariant::Unity));
        assert_eq!(EngineVariant::from_name("godot"), Some(EngineVariant::Godot));
    }

    #[test]
    fn unknown_engine_is_rejected() {
        assert!(EngineVariant::parse("CryEngine").is_err());
    }
}
