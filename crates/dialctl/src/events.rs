use crate::command::SliderCommand;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Command(SliderCommand),
    ConfigReload,
}
