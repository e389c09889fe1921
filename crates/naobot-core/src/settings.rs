use std::{fs, path::Path};

use anyhow::{bail, ensure, Context};
use serde::{Deserialize, Serialize};

use crate::FieldGeometry;

/// Settings for the defensive arc in front of our goal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefenseSettings {
    /// Radius of the arc the defenders stand on, in m.
    pub arc_radius: f64,
    /// Angle covered by the defenders, in degrees.
    pub cone_angle: f64,
    /// Distance of the arc center in front of the goal line, in m.
    pub arc_offset: f64,
    /// Defenders closer than this to the ball kick it clear, in m.
    pub clear_distance: f64,
}

impl Default for DefenseSettings {
    fn default() -> Self {
        Self {
            arc_radius: 2.5,
            cone_angle: 100.0,
            arc_offset: 1.0,
            clear_distance: 1.2,
        }
    }
}

/// Settings for the keeper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalieSettings {
    /// The keeper kicks the ball clear when closer than this, in m.
    pub clear_distance: f64,
    /// Within this distance of its spot the keeper only needs to be facing the ball.
    pub stand_distance: f64,
    /// Within this distance of its spot the keeper turns instead of walking.
    pub turn_distance: f64,
    /// Largest bearing to the ball that still counts as facing it, in degrees.
    pub facing_tolerance: f64,
}

impl Default for GoalieSettings {
    fn default() -> Self {
        Self {
            clear_distance: 0.5,
            stand_distance: 0.05,
            turn_distance: 0.1,
            facing_tolerance: 5.0,
        }
    }
}

/// Tunable parameters of the team strategy. Loaded once at startup and read-only
/// during a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategySettings {
    /// Highest jersey number that plays defense. Jersey 1 is always the keeper.
    pub defense_max_index: u32,
    /// Inside this distance of the opponent goal we shoot; passes reach `1.2x` this.
    pub passing_radius: f64,
    /// How many players closest to the ball go after it.
    pub chase_ball_number: usize,
    /// The ball counts as ours when closer than this, in m.
    pub kicking_distance: f64,
    /// Roaming attackers inside this distance of the opponent goal back off.
    pub attack_radius: f64,
    /// Roaming attackers are pushed away from teammates closer than this.
    pub teammate_avoidance_distance: f64,
    /// Roaming attackers are pushed away from opponents closer than this.
    pub opponent_avoidance_distance: f64,
    pub defense: DefenseSettings,
    pub goalie: GoalieSettings,
    pub field: FieldGeometry,
}

impl Default for StrategySettings {
    fn default() -> Self {
        Self {
            defense_max_index: 4,
            passing_radius: 5.0,
            chase_ball_number: 3,
            kicking_distance: 0.5,
            attack_radius: 3.0,
            teammate_avoidance_distance: 2.0,
            opponent_avoidance_distance: 4.0,
            defense: DefenseSettings::default(),
            goalie: GoalieSettings::default(),
            field: FieldGeometry::default(),
        }
    }
}

impl StrategySettings {
    /// Number of defenders implied by `defense_max_index`.
    pub fn number_of_defenders(&self) -> u32 {
        self.defense_max_index.saturating_sub(1)
    }

    /// Check that the settings describe a playable team.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.defense_max_index >= 2,
            "defense_max_index must be at least 2 (got {})",
            self.defense_max_index
        );
        ensure!(
            self.chase_ball_number >= 1,
            "chase_ball_number must be at least 1"
        );

        let positive = [
            ("passing_radius", self.passing_radius),
            ("kicking_distance", self.kicking_distance),
            ("attack_radius", self.attack_radius),
            ("teammate_avoidance_distance", self.teammate_avoidance_distance),
            ("opponent_avoidance_distance", self.opponent_avoidance_distance),
            ("defense.arc_radius", self.defense.arc_radius),
            ("defense.clear_distance", self.defense.clear_distance),
            ("goalie.clear_distance", self.goalie.clear_distance),
            ("goalie.stand_distance", self.goalie.stand_distance),
            ("goalie.turn_distance", self.goalie.turn_distance),
            ("field.half_field_length", self.field.half_field_length),
            ("field.half_field_width", self.field.half_field_width),
            ("field.goal_width", self.field.goal_width),
            ("field.goal_depth", self.field.goal_depth),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                bail!("{name} must be a positive number (got {value})");
            }
        }

        ensure!(
            (0.0..=360.0).contains(&self.defense.cone_angle),
            "defense.cone_angle must be within [0, 360] degrees"
        );
        ensure!(
            self.goalie.stand_distance < self.goalie.turn_distance,
            "goalie.stand_distance must be smaller than goalie.turn_distance"
        );
        Ok(())
    }

    /// Load and validate settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read strategy settings from {}", path.display()))?;
        let settings: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse strategy settings in {}", path.display()))?;
        settings
            .validate()
            .with_context(|| format!("Invalid strategy settings in {}", path.display()))?;
        Ok(settings)
    }

    /// Load the settings from a file, or store the default settings if the file does
    /// not exist yet.
    pub fn load_or_insert(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }
        log::warn!(
            "No strategy settings at {}, writing defaults",
            path.display()
        );
        let settings = Self::default();
        settings.store(path)?;
        Ok(settings)
    }

    /// Store the settings in the given file.
    pub fn store(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write strategy settings to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = StrategySettings::default();
        settings.validate().unwrap();
        assert_eq!(settings.number_of_defenders(), 3);
    }

    #[test]
    fn single_slot_defense_is_rejected() {
        let settings = StrategySettings {
            defense_max_index: 1,
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("defense_max_index"));
    }

    #[test]
    fn negative_radius_is_rejected() {
        let mut settings = StrategySettings::default();
        settings.defense.arc_radius = -1.0;
        assert!(settings.validate().is_err());

        let mut settings = StrategySettings::default();
        settings.passing_radius = f64::NAN;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn goalie_thresholds_must_be_ordered() {
        let mut settings = StrategySettings::default();
        settings.goalie.stand_distance = 0.2;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn load_or_insert_writes_defaults_then_reads_them_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strategy.json");

        let written = StrategySettings::load_or_insert(&path).unwrap();
        assert!(path.exists());
        let read = StrategySettings::load(&path).unwrap();
        assert_eq!(written, read);
    }

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strategy.json");
        fs::write(&path, r#"{ "passing_radius": 6.5, "goalie": { "facing_tolerance": 8.0 } }"#)
            .unwrap();

        let settings = StrategySettings::load(&path).unwrap();
        assert_eq!(settings.passing_radius, 6.5);
        assert_eq!(settings.goalie.facing_tolerance, 8.0);
        assert_eq!(settings.goalie.clear_distance, 0.5);
        assert_eq!(settings.defense_max_index, 4);
    }

    #[test]
    fn invalid_files_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strategy.json");
        fs::write(&path, r#"{ "defense_max_index": 0 }"#).unwrap();
        assert!(StrategySettings::load(&path).is_err());

        fs::write(&path, "not json").unwrap();
        assert!(StrategySettings::load(&path).is_err());
    }
}
