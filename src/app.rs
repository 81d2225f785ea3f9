use iced::{Element, Theme};
use tracing::{debug, info, warn};

use crate::base::Base;
use crate::config::Settings;
use crate::convert::{self, ConversionRequest};

pub struct App {
    pub input: String,
    pub base: Base,
    pub output: String,
    pub dialog: Option<ErrorDialog>,
    theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDialog {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    InputChanged(String),
    BaseSelected(Base),
    Convert,
    CloseDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            input: String::new(),
            base: Base::default(),
            output: String::new(),
            dialog: None,
            theme: settings.theme.clone(),
        }
    }

    pub fn update(&mut self, message: Message) {
        debug!(?message, "update");

        match message {
            Message::InputChanged(input) => self.input = input,
            Message::BaseSelected(base) => self.base = base,
            Message::Convert => self.convert(),
            Message::CloseDialog => self.dialog = None,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        crate::ui::view(self)
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn request(&self) -> ConversionRequest {
        ConversionRequest::new(self.input.clone(), self.base)
    }

    fn convert(&mut self) {
        let request = self.request();

        match convert::convert(&request) {
            Ok(conversion) => {
                info!(base = %request.base, value = %conversion.value, "converted");
                self.output = conversion.to_string();
            }
            Err(e) => {
                warn!(input = %request.input, base = %request.base, "{e}");
                self.dialog = Some(ErrorDialog {
                    title: "Error".to_string(),
                    message: e.user_message().to_string(),
                });
            }
        }
    }
}
