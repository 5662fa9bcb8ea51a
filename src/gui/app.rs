//! Main GUI application

use crate::backend::WidgetEvent;
use crate::gui::integration::WidgetBridge;
use crate::gui::views::main_view;
use crate::session::SessionView;
use crate::store::{initialize_store, SnapshotStore};
use crate::utils::config::AppSettings;
use crate::utils::paths::get_store_path;
use iced::{Application, Command, Element, Subscription, Theme};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Main application state
pub struct InfinityApp {
    bridge: WidgetBridge,
    // Keep a long-lived runtime so backend tasks stay alive
    _runtime: Arc<Runtime>,

    // UI State
    session: SessionView,
    show_console: bool,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Controls
    StartPressed,
    PausePressed,
    CancelPressed,
    ToggleConsole,

    // System
    Tick, // For periodic event draining
}

impl Application for InfinityApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppSettings;

    fn new(settings: Self::Flags) -> (Self, Command<Message>) {
        // Create a single runtime and keep it alive for the app lifetime
        let rt = Runtime::new().expect("Failed to create tokio runtime");

        let store_path = get_store_path();
        let pool = rt
            .block_on(initialize_store(&store_path.to_string_lossy()))
            .expect("Failed to initialize snapshot store");
        let store = SnapshotStore::new(pool);

        let bridge = rt
            .block_on(WidgetBridge::new(settings, store))
            .expect("Failed to initialize backend");

        let app = Self {
            bridge,
            _runtime: Arc::new(rt),
            session: SessionView::default(),
            show_console: false,
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("Infinity")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::StartPressed => {
                self.bridge.start();
                Command::none()
            }

            Message::PausePressed => {
                self.bridge.pause();
                Command::none()
            }

            Message::CancelPressed => {
                self.bridge.cancel();
                Command::none()
            }

            Message::ToggleConsole => {
                self.show_console = !self.show_console;
                Command::none()
            }

            Message::Tick => {
                // Drain session events from the backend; the last one wins
                while let Some(event) = self.bridge.try_receive() {
                    match event {
                        WidgetEvent::SessionChanged(view) => self.session = view,
                    }
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        main_view(&self.session, self.show_console)
    }

    fn subscription(&self) -> Subscription<Message> {
        iced::time::every(std::time::Duration::from_millis(100)).map(|_| Message::Tick)
    }

    fn theme(&self) -> Self::Theme {
        Theme::Light
    }
}

impl Drop for InfinityApp {
    fn drop(&mut self) {
        self.bridge.shutdown();
    }
}
