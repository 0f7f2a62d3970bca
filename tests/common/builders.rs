//! Test data builders for creating test objects

use linecode_vis::config::AppConfig;
use linecode_vis::sequence::DEFAULT_BITS;
use linecode_vis::LineCode;

/// Builder for creating test configurations
pub struct ConfigBuilder {
    bits: String,
    code: LineCode,
    view_height: f32,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            bits: DEFAULT_BITS.to_string(),
            code: LineCode::NrzL,
            view_height: 50.0,
        }
    }

    pub fn bits(mut self, bits: &str) -> Self {
        self.bits = bits.to_string();
        self
    }

    pub fn code(mut self, code: LineCode) -> Self {
        self.code = code;
        self
    }

    pub fn view_height(mut self, height: f32) -> Self {
        self.view_height = height;
        self
    }

    pub fn build(self) -> AppConfig {
        let mut config = AppConfig::default();
        config.session.bits = self.bits;
        config.session.code = self.code;
        config.ui.view_height = self.view_height;
        config
    }

    /// Render the configuration as TOML text
    pub fn to_toml(self) -> String {
        format!(
            "[session]\nbits = \"{}\"\ncode = \"{}\"\n\n[ui]\nview_height = {:?}\n",
            self.bits,
            self.code.key(),
            self.view_height
        )
    }
}
