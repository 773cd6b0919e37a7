use crate::classify::types::Fork;
use crate::event::{AppEvent, ClassifyOutcome, Command};
use crate::ui::{
    confirm_dialog::ConfirmDialog,
    detail_panel::DetailPanel,
    fork_list::ForkList,
    header_bar::HeaderBar,
    help_panel::HelpPanel,
    input::{self, Action},
    status_bar::StatusBar,
    toast::{Notification, NotifyLevel, Toast},
};
use crate::working_set::WorkingSet;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub enum Popup {
    None,
    Help,
    ConfirmDelete(String),
}

pub struct App {
    pub login: String,
    pub forks: WorkingSet,
    pub selected: usize,
    pub popup: Popup,

    /// Set while a classification runs; a second one is refused.
    pub querying: bool,
    pub deleting: Option<String>,

    pub notification: Option<Notification>,
    pub last_sync: String,
    pub rate_limit: Option<u32>,
    pub should_quit: bool,
}

impl App {
    pub fn new(login: String) -> Self {
        Self {
            login,
            forks: WorkingSet::default(),
            selected: 0,
            popup: Popup::None,
            querying: false,
            deleting: None,
            notification: None,
            last_sync: "never".to_string(),
            rate_limit: None,
            should_quit: false,
        }
    }

    /// Marks the app busy and returns the command to run, unless a
    /// classification is already in flight.
    pub fn start_classify(&mut self) -> Option<Command> {
        if self.querying {
            return None;
        }
        self.querying = true;
        Some(Command::Classify)
    }

    pub fn selected_fork(&self) -> Option<&Fork> {
        self.forks.ordered().get(self.selected).copied()
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Option<Command> {
        match event {
            AppEvent::Key(key) => {
                let confirming = matches!(self.popup, Popup::ConfirmDelete(_));
                let action = input::map_key(key, confirming);
                self.handle_action(action)
            }
            AppEvent::Resize => None,
            AppEvent::Tick => {
                if self
                    .notification
                    .as_ref()
                    .is_some_and(|n| n.expired(Instant::now()))
                {
                    self.notification = None;
                }
                None
            }
            AppEvent::Classified(result) => {
                self.querying = false;
                self.on_classified(result);
                None
            }
            AppEvent::Deleted {
                name_with_owner,
                result,
            } => {
                self.on_deleted(&name_with_owner, result);
                None
            }
        }
    }

    fn on_classified(&mut self, result: Result<ClassifyOutcome, String>) {
        match result {
            Ok(outcome) => {
                self.forks = WorkingSet::new(outcome.forks);
                self.rate_limit = outcome.rate_limit.or(self.rate_limit);
                self.selected = self.selected.min(self.forks.len().saturating_sub(1));
                self.last_sync = chrono::Local::now().format("%H:%M:%S").to_string();
            }
            Err(message) => {
                self.last_sync = "error".to_string();
                self.notify(NotifyLevel::Error, message);
            }
        }
    }

    fn on_deleted(&mut self, name_with_owner: &str, result: Result<(), String>) {
        if self.deleting.as_deref() == Some(name_with_owner) {
            self.deleting = None;
        }
        match result {
            Ok(()) => {
                self.forks.remove(name_with_owner);
                self.selected = self.selected.min(self.forks.len().saturating_sub(1));
                self.notify(NotifyLevel::Info, format!("deleted {name_with_owner}"));
            }
            Err(message) => {
                self.notify(
                    NotifyLevel::Error,
                    format!("could not delete {name_with_owner}: {message}"),
                );
            }
        }
    }

    fn notify(&mut self, level: NotifyLevel, message: impl Into<String>) {
        self.notification = Some(Notification::new(level, message));
    }

    fn handle_action(&mut self, action: Action) -> Option<Command> {
        match action {
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::ClosePopup => {
                if self.popup == Popup::None {
                    self.should_quit = true;
                } else {
                    self.popup = Popup::None;
                }
                None
            }
            Action::Help => {
                self.popup = if self.popup == Popup::Help {
                    Popup::None
                } else {
                    Popup::Help
                };
                None
            }
            Action::ScrollDown => {
                if self.selected + 1 < self.forks.len() {
                    self.selected += 1;
                }
                None
            }
            Action::ScrollUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            Action::Top => {
                self.selected = 0;
                None
            }
            Action::Bottom => {
                self.selected = self.forks.len().saturating_sub(1);
                None
            }
            Action::Refresh => {
                // A scan started before a delete lands would bring the fork back.
                if self.deleting.is_some() {
                    self.notify(NotifyLevel::Warn, "wait for the delete to finish");
                    return None;
                }
                self.start_classify()
            }
            Action::Delete => {
                if self.deleting.is_some() {
                    self.notify(NotifyLevel::Warn, "a delete is already running");
                    return None;
                }
                if self.querying {
                    self.notify(NotifyLevel::Warn, "wait for the scan to finish");
                    return None;
                }
                if let Some(name) = self.selected_fork().map(|f| f.name_with_owner.clone()) {
                    self.popup = Popup::ConfirmDelete(name);
                }
                None
            }
            Action::Confirm => {
                let Popup::ConfirmDelete(name) = std::mem::replace(&mut self.popup, Popup::None)
                else {
                    return None;
                };
                self.deleting = Some(name.clone());
                Some(Command::Delete(name))
            }
            Action::Cancel => {
                self.popup = Popup::None;
                None
            }
            Action::None => None,
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        frame.render_widget(
            HeaderBar {
                login: &self.login,
                forks: &self.forks,
                querying: self.querying,
            },
            rows[0],
        );

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        frame.render_widget(
            ForkList {
                forks: &self.forks,
                selected: self.selected,
                deleting: self.deleting.as_deref(),
            },
            body[0],
        );
        frame.render_widget(
            DetailPanel {
                fork: self.selected_fork(),
                login: &self.login,
            },
            body[1],
        );

        frame.render_widget(
            StatusBar {
                last_sync: &self.last_sync,
                rate_limit: self.rate_limit,
            },
            rows[2],
        );

        match &self.popup {
            Popup::Help => frame.render_widget(HelpPanel, area),
            Popup::ConfirmDelete(name) => frame.render_widget(
                ConfirmDialog {
                    name_with_owner: name,
                },
                area,
            ),
            Popup::None => {}
        }

        if let Some(ref n) = self.notification {
            frame.render_widget(Toast { notification: n }, area);
        }
    }
}
