//! Configuration for the page behaviors.
//!
//! Every value defaults to the stock portfolio behavior, so an empty TOML
//! document (or no file at all) yields [`FolioConfig::default`].
//!
//! ```toml
//! [loader]
//! hide_after_ms = 1500
//!
//! [easter_egg]
//! filter = "invert(1)"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::layout::PortfolioContent;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub loader: LoaderConfig,
    pub cursor: CursorConfig,
    pub nav: NavConfig,
    pub parallax: ParallaxConfig,
    pub skills: SkillsConfig,
    pub reveal: RevealConfig,
    pub contact: ContactConfig,
    pub easter_egg: EasterEggConfig,
    pub aos: AosConfig,
    pub transitions: TransitionConfig,
    pub content: PortfolioContent,
}

impl FolioConfig {
    pub fn from_toml_str(source: &str) -> FolioResult<Self> {
        let config: FolioConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    /// Rejects values no behavior can work with.
    pub fn validate(&self) -> FolioResult<()> {
        for (name, ratio) in [
            ("skills.threshold", self.skills.threshold),
            ("reveal.threshold", self.reveal.threshold),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(FolioError::Config(format!(
                    "{} must be within 0.0..=1.0, got {}",
                    name, ratio
                )));
            }
        }
        if self.easter_egg.sequence.is_empty() {
            return Err(FolioError::Config(
                "easter_egg.sequence must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Delay between page load and hiding the overlay
    pub hide_after_ms: u64,
    /// Delay between hiding the overlay and removing it
    pub remove_after_ms: u64,
}

impl LoaderConfig {
    pub fn hide_after(&self) -> Duration {
        Duration::from_millis(self.hide_after_ms)
    }

    pub fn remove_after(&self) -> Duration {
        Duration::from_millis(self.remove_after_ms)
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            hide_after_ms: 2000,
            remove_after_ms: 800,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    pub outline_animation_ms: u64,
    pub hover_scale: f64,
    pub accent: String,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            outline_animation_ms: 500,
            hover_scale: 1.5,
            accent: "#6366f1".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll offset (px) above which the navbar is `scrolled`
    pub scrolled_threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 100.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub base_speed: f64,
    /// Added per shape index
    pub speed_step: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            base_speed: 0.5,
            speed_step: 0.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    pub threshold: f64,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    /// Bottom root margin in px; negative shrinks the viewport
    pub root_margin_bottom: f64,
    /// Initial downward offset of hidden text blocks
    pub offset_px: f64,
    pub transition: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin_bottom: -50.0,
            offset_px: 30.0,
            transition: "all 0.6s ease".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub send_delay_ms: u64,
    pub sending_label: String,
    pub missing_fields_notice: String,
    pub thanks_notice: String,
}

impl ContactConfig {
    pub fn send_delay(&self) -> Duration {
        Duration::from_millis(self.send_delay_ms)
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: 2000,
            sending_label: "Sending...".to_string(),
            missing_fields_notice: "Please fill in all fields".to_string(),
            thanks_notice: "Thank you for your message! I'll get back to you soon.".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EasterEggConfig {
    /// Key codes (`KeyboardEvent.code`) to type in order
    pub sequence: Vec<String>,
    pub duration_ms: u64,
    pub filter: String,
}

impl EasterEggConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// The Konami code.
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

impl Default for EasterEggConfig {
    fn default() -> Self {
        Self {
            sequence: KONAMI_SEQUENCE.iter().map(|s| s.to_string()).collect(),
            duration_ms: 3000,
            filter: "hue-rotate(180deg)".to_string(),
        }
    }
}

/// Options handed to the animate-on-scroll library when the page has it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AosConfig {
    pub duration: u64,
    pub once: bool,
    pub offset: u64,
    pub easing: String,
}

impl Default for AosConfig {
    fn default() -> Self {
        Self {
            duration: 1000,
            once: true,
            offset: 100,
            easing: "ease-out-cubic".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub fade_in_delay_ms: u64,
    pub fade: String,
}

impl TransitionConfig {
    pub fn fade_in_delay(&self) -> Duration {
        Duration::from_millis(self.fade_in_delay_ms)
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            fade_in_delay_ms: 100,
            fade: "opacity 0.5s ease".to_string(),
        }
    }
}
