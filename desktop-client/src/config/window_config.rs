use serde::{Deserialize, Serialize};
use tictactoe_engine::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 560.0,
            height: 420.0,
        }
    }
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err("window size must be a finite number".to_string());
        }
        if self.width < 320.0 || self.height < 240.0 {
            return Err("window must be at least 320x240".to_string());
        }
        if self.width > 4096.0 || self.height > 4096.0 {
            return Err("window must not exceed 4096x4096".to_string());
        }
        Ok(())
    }
}
