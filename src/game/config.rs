use crate::error::{GameError, Result};

/// Tunables for one mounted game.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Side length of the square play area, in pixels
    pub area_size: f64,
    /// Diameter of a target, in pixels
    pub target_size: f64,
    /// Period of the elapsed-time ticker; also the amount added per tick
    pub tick_ms: u32,
    /// How long a fading target stays on the board before removal
    pub fade_ms: u32,
    /// Largest point count a round can be started with
    pub max_targets: u32,
    /// Fixed RNG seed for reproducible layouts (entropy when `None`)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            area_size: 400.0,
            target_size: 40.0,
            tick_ms: 100,
            fade_ms: 700,
            max_targets: 1000,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Default layout with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Exclusive upper bound for a target's x/y coordinate.
    pub fn placement_span(&self) -> f64 {
        self.area_size - self.target_size
    }

    pub fn validate(&self) -> Result<()> {
        if !self.area_size.is_finite() || !self.target_size.is_finite() {
            return Err(GameError::InvalidConfig("sizes must be finite".into()));
        }
        if self.target_size <= 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "target_size must be positive, got {}",
                self.target_size
            )));
        }
        if self.placement_span() <= 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "target_size {} does not fit in area_size {}",
                self.target_size, self.area_size
            )));
        }
        if self.tick_ms == 0 {
            return Err(GameError::InvalidConfig("tick_ms must be non-zero".into()));
        }
        if self.fade_ms == 0 {
            return Err(GameError::InvalidConfig("fade_ms must be non-zero".into()));
        }
        if self.max_targets == 0 {
            return Err(GameError::InvalidConfig("max_targets must be non-zero".into()));
        }
        Ok(())
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.area_size, 400.0);
        assert_eq!(config.target_size, 40.0);
        assert_eq!(config.tick_ms, 100);
        assert_eq!(config.fade_ms, 700);
        assert_eq!(config.max_targets, 1000);
        assert_eq!(config.placement_span(), 360.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_target_larger_than_area() {
        let config = GameConfig {
            target_size: 400.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_zero_periods() {
        let no_tick = GameConfig {
            tick_ms: 0,
            ..Default::default()
        };
        let no_fade = GameConfig {
            fade_ms: 0,
            ..Default::default()
        };
        let no_targets = GameConfig {
            max_targets: 0,
            ..Default::default()
        };
        assert!(no_tick.validate().is_err());
        assert!(no_fade.validate().is_err());
        assert!(no_targets.validate().is_err());
    }

    #[test]
    fn test_rejects_nan_sizes() {
        let config = GameConfig {
            area_size: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = GameConfig::from_json(r#"{"fade_ms": 350, "seed": 7}"#).unwrap();
        assert_eq!(config.fade_ms, 350);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.area_size, 400.0);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn test_json_is_validated() {
        assert!(GameConfig::from_json(r#"{"tick_ms": 0}"#).is_err());
        assert!(GameConfig::from_json("not json").is_err());
    }
}
