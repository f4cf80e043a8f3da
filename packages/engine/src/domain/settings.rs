use serde::{Deserialize, Serialize};

/// Tunables for the icon simulation.
///
/// Every field has a default, so the host page can pass a partial JSON
/// override (camelCase keys) and keep the rest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicsSettings {
    // === Integration ===
    /// px/s²
    pub gravity: f32,
    /// Per-frame linear damping
    pub air_friction: f32,
    /// Per-frame angular damping
    pub angular_friction: f32,
    /// Upper bound on a single step (s)
    pub max_dt: f32,

    // === Contacts ===
    pub restitution: f32,
    pub wall_bounce: f32,
    /// Spin gained per px/s of post-bounce speed
    pub bounce_spin: f32,
    /// Angular kick per body/body contact (°/s)
    pub collision_spin: f32,
    /// Extra distance (px) at which two bodies count as touching
    pub collision_padding: f32,
    /// Space kept free below the floor (px)
    pub floor_offset: f32,

    // === Sleep ===
    pub sleep_frames: u32,
    pub linear_sleep_speed: f32,
    pub linear_wake_speed: f32,
    pub angular_sleep_speed: f32,
    pub angular_wake_speed: f32,
    /// Impulse magnitude that wakes both bodies of a contact
    pub wake_impulse: f32,

    // === Drag ===
    pub min_drag_dt: f32,
    /// Fraction of drag velocity kept on the body while held
    pub drag_push: f32,
    pub min_release_speed: f32,
    pub release_norm_speed: f32,
    pub release_boost_base: f32,
    pub release_boost_gain: f32,
    pub release_boost_min: f32,
    pub release_boost_max: f32,
    /// Release spin per px/s of drag speed
    pub spin_factor: f32,

    // === Pointer wind ===
    pub wind_speed: f32,
    pub wind_radius: f32,
    pub wind_strength: f32,
    pub wind_spin: f32,

    // === Layout ===
    /// Downward velocity added when a resize lifts a body
    pub resize_nudge: f32,
    /// Spawn band starts at this fraction of the surface height
    pub spawn_band: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: 2000.0,
            air_friction: 0.992,
            angular_friction: 0.8,
            max_dt: 0.04,

            restitution: 0.2,
            wall_bounce: 0.2,
            bounce_spin: 0.01,
            collision_spin: 0.25,
            collision_padding: 0.5,
            floor_offset: 70.0,

            sleep_frames: 30,
            linear_sleep_speed: 20.0,
            linear_wake_speed: 60.0,
            angular_sleep_speed: 5.0,
            angular_wake_speed: 30.0,
            wake_impulse: 150.0,

            min_drag_dt: 0.001,
            drag_push: 0.5,
            min_release_speed: 50.0,
            release_norm_speed: 500.0,
            release_boost_base: 1.1,
            release_boost_gain: 2.0,
            release_boost_min: 0.4,
            release_boost_max: 1.0,
            spin_factor: 0.3,

            wind_speed: 900.0,
            wind_radius: 250.0,
            wind_strength: 480.0,
            wind_spin: 5.0,

            resize_nudge: 40.0,
            spawn_band: 0.55,
        }
    }
}

impl PhysicsSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: PhysicsSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Reject values that would make the simulation diverge or freeze.
    fn validate(&self) -> Result<(), String> {
        if !(self.max_dt > 0.0) {
            return Err(format!("maxDt must be positive, got {}", self.max_dt));
        }
        if !(self.min_drag_dt > 0.0) {
            return Err(format!("minDragDt must be positive, got {}", self.min_drag_dt));
        }
        if self.linear_wake_speed < self.linear_sleep_speed {
            return Err("linearWakeSpeed must not be below linearSleepSpeed".to_string());
        }
        if self.angular_wake_speed < self.angular_sleep_speed {
            return Err("angularWakeSpeed must not be below angularSleepSpeed".to_string());
        }
        if self.release_boost_min > self.release_boost_max {
            return Err("releaseBoostMin must not exceed releaseBoostMax".to_string());
        }
        if !(self.release_norm_speed > 0.0) || !(self.wind_radius > 0.0) {
            return Err("releaseNormSpeed and windRadius must be positive".to_string());
        }
        Ok(())
    }
}
