use crate::command::SliderCommand;
use crate::config::{ConfigError, ConfiguredSlider, SliderConfig};
use arcdial::SliderEvent;

/// Owns the one slider and applies commands to it in arrival order.
pub struct Driver {
    slider: ConfiguredSlider,
}

impl Driver {
    pub fn from_config(config: &SliderConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            slider: config.build_slider()?,
        })
    }

    pub fn slider(&self) -> &ConfiguredSlider {
        &self.slider
    }

    pub fn apply(&mut self, command: SliderCommand) -> Vec<SliderEvent> {
        match command {
            SliderCommand::Gesture(sample) => self.slider.handle_gesture(sample).events().collect(),
            SliderCommand::Set { value, animated } => {
                vec![SliderEvent::ValueChanged(
                    self.slider.set_value(value, animated),
                )]
            }
            SliderCommand::Touch(enabled) => {
                self.slider.set_touch_enabled(enabled);
                Vec::new()
            }
        }
    }

    /// Applies a reloaded config to the running slider, keeping its value
    /// where the new bounds allow.
    pub fn reload(&mut self, config: &SliderConfig) -> Result<SliderEvent, ConfigError> {
        let range = config.range()?;
        let tracker = config.tracker()?;
        let snap = config.snap()?;

        self.slider.set_tracker(tracker);
        self.slider.set_transform(snap);
        self.slider.set_animator(config.animator());
        self.slider.set_touch_enabled(config.tracking.enabled);

        let change = self.slider.reconfigure(range);
        Ok(SliderEvent::Reconfigured { range, change })
    }
}
