use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl WindowConfig {
    const MIN_SIZE: u32 = 400;
    const MAX_SIZE: u32 = 4000;
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if self.width < Self::MIN_SIZE || self.height < Self::MIN_SIZE {
            return Err(format!(
                "window dimensions must be at least {}x{}",
                Self::MIN_SIZE,
                Self::MIN_SIZE
            ));
        }
        if self.width > Self::MAX_SIZE || self.height > Self::MAX_SIZE {
            return Err(format!(
                "window dimensions must not exceed {}x{}",
                Self::MAX_SIZE,
                Self::MAX_SIZE
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_is_valid() {
        assert!(WindowConfig::default().validate().is_ok());
    }

    #[test]
    fn test_window_bounds() {
        assert!(WindowConfig { width: 399, height: 800 }.validate().is_err());
        assert!(WindowConfig { width: 800, height: 4001 }.validate().is_err());
        assert!(WindowConfig { width: 400, height: 4000 }.validate().is_ok());
    }
}
