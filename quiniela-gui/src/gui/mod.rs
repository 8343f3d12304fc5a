use std::sync::Arc;

use iced::{Subscription, Task};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

use quiniela_ui::widget::Element;

use crate::{
    dashboard::{self, DashboardPanel},
    dir::QuinielaDirectory,
    login::{self, LoginPanel},
    logger::setup_logger,
    register::{self, RegisterPanel},
    services::{
        auth::{AuthService, StubAuthClient},
        registration::{RegistrationService, SimulatedRegistration},
    },
    VERSION,
};

/// The places a screen can ask to be taken to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/auth/login",
            Route::Register => "/auth/register",
            Route::Dashboard => "/dashboard",
        }
    }
}

pub enum State {
    Login(Box<LoginPanel>),
    Register(Box<RegisterPanel>),
    Dashboard(Box<DashboardPanel>),
}

#[derive(Debug)]
pub enum Message {
    CtrlC,
    Event(iced::Event),
    Login(Box<login::Message>),
    Register(Box<register::Message>),
    Dashboard(Box<dashboard::Message>),
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

pub struct GUI {
    state: State,
    auth: Arc<dyn AuthService>,
    registration: Arc<dyn RegistrationService>,
}

impl GUI {
    pub fn title(&self) -> String {
        format!("Quiniela v{}", VERSION)
    }

    pub fn new((config, log_level): (Config, Option<LevelFilter>)) -> (GUI, Task<Message>) {
        let log_level = log_level.unwrap_or_else(|| {
            crate::config::Config::from_file(
                &config
                    .quiniela_directory
                    .path()
                    .join(crate::config::DEFAULT_FILE_NAME),
            )
            .ok()
            .and_then(|cfg| cfg.log_level().ok())
            .unwrap_or(LevelFilter::INFO)
        });
        if let Err(e) = setup_logger(log_level, config.quiniela_directory.clone()) {
            eprintln!("Failed to setup logger: {}", e);
        }

        let auth: Arc<dyn AuthService> = Arc::new(StubAuthClient::new());
        let registration: Arc<dyn RegistrationService> = Arc::new(SimulatedRegistration::new());

        // A live session lands directly on the dashboard.
        let (state, task) = if auth.is_authenticated() {
            let (panel, task) = DashboardPanel::new(auth.clone());
            (
                State::Dashboard(Box::new(panel)),
                task.map(|msg| Message::Dashboard(Box::new(msg))),
            )
        } else {
            let (panel, task) = LoginPanel::new(auth.clone());
            (
                State::Login(Box::new(panel)),
                task.map(|msg| Message::Login(Box::new(msg))),
            )
        };

        (
            Self {
                state,
                auth,
                registration,
            },
            Task::batch(vec![Task::perform(ctrl_c(), |_| Message::CtrlC), task]),
        )
    }

    fn goto(&mut self, route: Route) -> Task<Message> {
        info!("navigating to {}", route.path());
        match route {
            Route::Login => {
                let (panel, task) = LoginPanel::new(self.auth.clone());
                self.state = State::Login(Box::new(panel));
                task.map(|msg| Message::Login(Box::new(msg)))
            }
            Route::Register => {
                let (panel, task) = RegisterPanel::new(self.registration.clone());
                self.state = State::Register(Box::new(panel));
                task.map(|msg| Message::Register(Box::new(msg)))
            }
            Route::Dashboard => {
                let (panel, task) = DashboardPanel::new(self.auth.clone());
                self.state = State::Dashboard(Box::new(panel));
                task.map(|msg| Message::Dashboard(Box::new(msg)))
            }
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CtrlC
            | Message::Event(iced::Event::Window(iced::window::Event::CloseRequested)) => {
                iced::window::get_latest().and_then(iced::window::close)
            }
            // Messages are only routed to the screen that is still mounted,
            // anything aimed at a replaced screen is dropped here.
            Message::Login(msg) => match (&mut self.state, *msg) {
                (State::Login(_), login::Message::Redirect(route)) => self.goto(route),
                (State::Login(_), login::Message::View(login::ViewMessage::GoToRegister)) => {
                    self.goto(Route::Register)
                }
                (State::Login(panel), msg) => panel
                    .update(msg)
                    .map(|msg| Message::Login(Box::new(msg))),
                _ => Task::none(),
            },
            Message::Register(msg) => match (&mut self.state, *msg) {
                (State::Register(_), register::Message::Redirect(route)) => self.goto(route),
                (
                    State::Register(_),
                    register::Message::View(register::ViewMessage::GoToLogin),
                ) => self.goto(Route::Login),
                (State::Register(panel), msg) => panel
                    .update(msg)
                    .map(|msg| Message::Register(Box::new(msg))),
                _ => Task::none(),
            },
            Message::Dashboard(msg) => match (&mut self.state, *msg) {
                (State::Dashboard(_), dashboard::Message::Redirect(route)) => self.goto(route),
                (State::Dashboard(panel), msg) => panel
                    .update(msg)
                    .map(|msg| Message::Dashboard(Box::new(msg))),
                _ => Task::none(),
            },
            _ => Task::none(),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, status, _| match (&event, status) {
            (
                iced::Event::Window(iced::window::Event::CloseRequested),
                iced::event::Status::Ignored,
            ) => Some(Message::Event(event)),
            _ => None,
        })
    }

    pub fn view(&self) -> Element<Message> {
        match &self.state {
            State::Login(panel) => panel.view().map(|msg| Message::Login(Box::new(msg))),
            State::Register(panel) => panel.view().map(|msg| Message::Register(Box::new(msg))),
            State::Dashboard(panel) => {
                panel.view().map(|msg| Message::Dashboard(Box::new(msg)))
            }
        }
    }

    pub fn scale_factor(&self) -> f64 {
        1.0
    }
}

pub struct Config {
    pub quiniela_directory: QuinielaDirectory,
}

impl Config {
    pub fn new(quiniela_directory: QuinielaDirectory) -> Self {
        Self { quiniela_directory }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn gui() -> GUI {
        let auth: Arc<dyn AuthService> =
            Arc::new(StubAuthClient::with_latency(Duration::from_millis(0)));
        let registration: Arc<dyn RegistrationService> =
            Arc::new(SimulatedRegistration::with_delay(Duration::from_millis(0)));
        let (panel, _task) = LoginPanel::new(auth.clone());
        GUI {
            state: State::Login(Box::new(panel)),
            auth,
            registration,
        }
    }

    #[test]
    fn route_paths() {
        assert_eq!(Route::Login.path(), "/auth/login");
        assert_eq!(Route::Register.path(), "/auth/register");
        assert_eq!(Route::Dashboard.path(), "/dashboard");
    }

    #[tokio::test]
    async fn navigation_replaces_the_screen() {
        let mut gui = gui();
        let _ = gui.update(Message::Login(Box::new(login::Message::View(
            login::ViewMessage::GoToRegister,
        ))));
        assert!(matches!(gui.state, State::Register(_)));

        let _ = gui.update(Message::Register(Box::new(register::Message::Redirect(
            Route::Login,
        ))));
        assert!(matches!(gui.state, State::Login(_)));
    }

    #[tokio::test]
    async fn messages_for_a_replaced_screen_are_dropped() {
        let mut gui = gui();
        let _ = gui.update(Message::Login(Box::new(login::Message::View(
            login::ViewMessage::GoToRegister,
        ))));
        assert!(matches!(gui.state, State::Register(_)));

        // A login submission that settles after the user navigated away
        // must not move the screen anywhere.
        let _ = gui.update(Message::Login(Box::new(login::Message::Redirect(
            Route::Dashboard,
        ))));
        assert!(matches!(gui.state, State::Register(_)));
    }

    #[tokio::test]
    async fn sign_out_returns_to_login() {
        let mut gui = gui();
        let user = crate::services::auth::UserRecord {
            id: 1,
            name: "Administrador".to_string(),
            username: "admin".to_string(),
            email: "admin@system.com".to_string(),
            is_admin: true,
        };
        gui.auth.store_user_data(user);
        let _ = gui.update(Message::Login(Box::new(login::Message::Redirect(
            Route::Dashboard,
        ))));
        assert!(matches!(gui.state, State::Dashboard(_)));

        let _ = gui.update(Message::Dashboard(Box::new(dashboard::Message::View(
            dashboard::ViewMessage::SignOut,
        ))));
        // The redirect task has not run yet, the panel asked for it.
        let _ = gui.update(Message::Dashboard(Box::new(dashboard::Message::Redirect(
            Route::Login,
        ))));
        assert!(matches!(gui.state, State::Login(_)));
        assert!(!gui.auth.is_authenticated());
    }
}
