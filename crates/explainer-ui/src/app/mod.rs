use iced::widget::text_editor;
use iced::{Subscription, Task, keyboard, time};
use std::time::Duration;

use explainer_core::{BackgroundText, Config, Event, ExplainClient, ShellState, reduce};

use crate::style::PanelStyle;
use crate::theme::{Palette, Theme};

pub mod messages;
pub mod update;
pub mod view;

pub use messages::*;

/// Everything the application needs at launch.
#[derive(Debug)]
pub struct Flags {
    pub config: Config,
    pub client: ExplainClient,
}

pub struct App {
    /// Shell state; only changed through `dispatch`
    pub shell: ShellState,
    pub content: text_editor::Content,
    pub client: ExplainClient,
    pub palettes: Theme,
    pub style: PanelStyle,
    pub font_size: f32,
    pub background_enabled: bool,
    pub refresh_interval: Option<Duration>,
    pub frame_interval: Duration,
    // Presentation only
    pub scroll_offset: usize,
    pub spinner_frame: usize,
    pub reveal: f32,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags { config, client } = flags;

        let theme = match &config.ui.theme_file {
            Some(path) => Theme::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load theme {}: {}", path.display(), e);
                Theme::builtin()
            }),
            None => Theme::builtin(),
        };

        let shell = ShellState {
            language: config.ui.default_language,
            dark_mode: config.ui.dark_mode,
            background: BackgroundText::generate(config.background.repeat),
            ..ShellState::default()
        };

        let refresh_interval = (config.background.refresh_secs > 0)
            .then(|| Duration::from_secs(config.background.refresh_secs));

        tracing::info!(endpoint = client.endpoint(), "Explainer ready");

        let app = Self {
            shell,
            content: text_editor::Content::new(),
            client,
            palettes: theme,
            style: PanelStyle::default(),
            font_size: config.ui.font_size,
            background_enabled: config.background.enabled,
            refresh_interval,
            frame_interval: Duration::from_millis(config.background.scroll_interval_ms.max(16)),
            scroll_offset: 0,
            spinner_frame: 0,
            reveal: 0.0,
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        if self.shell.in_flight {
            "Explaining... - Code Explainer".to_string()
        } else {
            "Code Explainer".to_string()
        }
    }

    pub fn theme(&self) -> iced::Theme {
        if self.shell.dark_mode {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }

    /// Palette for the current mode.
    pub fn palette(&self) -> Palette {
        *self.palettes.palette(self.shell.dark_mode)
    }

    /// Whether the blocking alert is on screen.
    pub fn alert_open(&self) -> bool {
        self.shell.alert.is_some()
    }

    /// Runs one event through the reducer.
    pub fn dispatch(&mut self, event: Event) {
        // The default background is empty, so the swap does not allocate
        let state = std::mem::take(&mut self.shell);
        self.shell = reduce(state, event);
    }

    /// Whether anything on screen is animating.
    fn animating(&self) -> bool {
        self.background_enabled
            || self.shell.in_flight
            || (self.shell.shows_explanation() && self.reveal < 1.0)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![keyboard::on_key_press(|key, modifiers| {
            Some(Message::KeyPressed(key, modifiers))
        })];

        if self.animating() {
            subscriptions.push(time::every(self.frame_interval).map(|_| Message::Frame));
        }

        if self.background_enabled {
            if let Some(interval) = self.refresh_interval {
                subscriptions.push(time::every(interval).map(|_| Message::BackgroundTick));
            }
        }

        Subscription::batch(subscriptions)
    }
}

pub fn run(flags: Flags) -> iced::Result {
    let size = iced::Size::new(flags.config.ui.window_width, flags.config.ui.window_height);

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(size)
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
