use crate::analyzer::AnalyzerClient;
use crate::config::AnalyzerConfig;
use crate::controller::{Completion, Controller, Phase, Submission};
use crate::message::Message;
use crate::upload::{load_image_file, pick_image, DragState};
use crate::views::{failed_panel, pending_panel, result_panel, upload_panel};
use anyhow::Context;
use iced::widget::text::Wrapping;
use iced::widget::{column, container, text};
use iced::{
    application, event, window, Alignment, Element, Event, Length, Subscription, Task, Theme,
};

const APP_TITLE: &str = "AuthentiScan";
const BUSY_NOTICE: &str = "An image is already being analyzed. Cancel it first.";

pub fn run() -> anyhow::Result<()> {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    let config = AnalyzerConfig::from_env().unwrap_or_else(|err| {
        log::warn!("{err}; falling back to the default analyzer settings");
        AnalyzerConfig::default()
    });
    let analyzer = AnalyzerClient::new(&config).context("failed to set up the analyzer client")?;
    log::info!("Using analyzer at {}", analyzer.endpoint());

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .subscription(App::subscription)
        .run_with(move || (App::new(analyzer), Task::none()))?;

    Ok(())
}

pub struct App {
    controller: Controller,
    analyzer: AnalyzerClient,
    drag: DragState,
    last_error: Option<String>,
}

impl App {
    pub fn new(analyzer: AnalyzerClient) -> Self {
        Self {
            controller: Controller::default(),
            analyzer,
            drag: DragState::default(),
            last_error: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickFile => {
                if self.controller.is_pending() {
                    return Task::none();
                }
                Task::perform(pick_image(), Message::FilePicked)
            }
            Message::FilePicked(None) => Task::none(),
            Message::FilePicked(Some(path)) => {
                Task::perform(load_image_file(path), Message::FileLoaded)
            }
            Message::FileHovered => {
                self.drag.enter();
                Task::none()
            }
            Message::FilesHoveredLeft => {
                self.drag.leave();
                Task::none()
            }
            Message::FileDropped(path) => {
                self.drag.leave();
                if self.controller.is_pending() {
                    log::debug!("Ignoring dropped file {} while busy", path.display());
                    self.last_error = Some(BUSY_NOTICE.to_string());
                    return Task::none();
                }
                Task::perform(load_image_file(path), Message::FileLoaded)
            }
            Message::FileLoaded(Ok(file)) => match self.controller.select(file) {
                Some(submission) => {
                    self.last_error = None;
                    self.dispatch(submission)
                }
                None => {
                    self.last_error = Some(BUSY_NOTICE.to_string());
                    Task::none()
                }
            },
            Message::FileLoaded(Err(err)) => {
                self.last_error = Some(err);
                Task::none()
            }
            Message::AnalysisFinished(ticket, outcome) => {
                match self.controller.complete(ticket, outcome) {
                    Completion::Applied => self.last_error = None,
                    Completion::Stale => {
                        log::debug!("Outcome for {ticket:?} arrived after it was superseded")
                    }
                }
                Task::none()
            }
            Message::Retry => match self.controller.retry() {
                Some(submission) => {
                    self.last_error = None;
                    self.dispatch(submission)
                }
                None => Task::none(),
            },
            Message::Reset => {
                self.controller.reset();
                self.last_error = None;
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let preview = self
            .controller
            .current_preview()
            .and_then(|id| self.controller.previews().handle(id));

        let body: Element<'_, Message> = match self.controller.phase() {
            Phase::Idle => upload_panel(self.drag),
            Phase::Pending { image, .. } => centered(pending_panel(image, preview)),
            Phase::Failed { image, error } => centered(failed_panel(image, preview, error)),
            Phase::Resolved { image, result } => result_panel(image, preview, result),
        };

        let mut content = column![
            text(APP_TITLE).size(22),
            container(body).width(Length::Fill).height(Length::Fill),
        ]
        .spacing(16);

        if let Some(error) = &self.last_error {
            content = content.push(text(error).size(16).wrapping(Wrapping::Word));
        }

        content.padding(20).align_x(Alignment::Start).into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn dispatch(&self, submission: Submission) -> Task<Message> {
        let analyzer = self.analyzer.clone();
        let ticket = submission.ticket;
        Task::perform(
            async move { analyzer.analyze(&submission).await },
            move |outcome| Message::AnalysisFinished(ticket, outcome),
        )
    }
}

fn centered<'a>(panel: Element<'a, Message>) -> Element<'a, Message> {
    container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyzeError;
    use crate::model::{ClassificationResult, ImageFile};
    use std::path::PathBuf;

    fn app() -> App {
        App::new(AnalyzerClient::new(&AnalyzerConfig::default()).unwrap())
    }

    fn pending_ticket(app: &App) -> crate::controller::Ticket {
        match app.controller.phase() {
            Phase::Pending { ticket, .. } => *ticket,
            other => panic!("expected pending, got {}", other.name()),
        }
    }

    fn photo() -> ImageFile {
        ImageFile::new("photo.jpg", &b"jpeg"[..])
    }

    fn verdict() -> ClassificationResult {
        serde_json::from_str(
            r#"{"image_type":"Photograph","confidence":0.97,"reason":["No manipulation artifacts detected"]}"#,
        )
        .unwrap()
    }

    #[test]
    fn dismissed_picker_is_a_no_op() {
        let mut app = app();
        let _ = app.update(Message::FilePicked(None));
        assert!(matches!(app.controller.phase(), Phase::Idle));
        assert!(app.last_error.is_none());
    }

    #[test]
    fn hover_highlight_follows_drag_events() {
        let mut app = app();
        let _ = app.update(Message::FileHovered);
        assert!(app.drag.is_hovering());
        let _ = app.update(Message::FilesHoveredLeft);
        assert!(!app.drag.is_hovering());

        let _ = app.update(Message::FileHovered);
        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/photo.jpg")));
        assert!(!app.drag.is_hovering());
    }

    #[test]
    fn upload_then_result_then_reset() {
        let mut app = app();
        let _ = app.update(Message::FileLoaded(Ok(photo())));
        let ticket = pending_ticket(&app);
        assert!(app.controller.current_preview().is_some());

        let _ = app.update(Message::AnalysisFinished(ticket, Ok(verdict())));
        assert!(matches!(app.controller.phase(), Phase::Resolved { .. }));

        let _ = app.update(Message::Reset);
        assert!(matches!(app.controller.phase(), Phase::Idle));
        assert_eq!(app.controller.previews().live_count(), 0);
    }

    #[test]
    fn server_error_allows_retry() {
        let mut app = app();
        let _ = app.update(Message::FileLoaded(Ok(photo())));
        let first = pending_ticket(&app);

        let _ = app.update(Message::AnalysisFinished(
            first,
            Err(AnalyzeError::Server {
                status: Some(500),
                message: String::new(),
            }),
        ));
        assert!(matches!(app.controller.phase(), Phase::Failed { .. }));

        let _ = app.update(Message::Retry);
        assert!(pending_ticket(&app) > first);
    }

    #[test]
    fn drop_while_pending_is_refused() {
        let mut app = app();
        let _ = app.update(Message::FileLoaded(Ok(photo())));
        let ticket = pending_ticket(&app);

        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/other.png")));

        assert_eq!(pending_ticket(&app), ticket);
        assert_eq!(app.last_error.as_deref(), Some(BUSY_NOTICE));
    }

    #[test]
    fn loaded_file_while_pending_shows_busy_notice() {
        let mut app = app();
        let _ = app.update(Message::FileLoaded(Ok(photo())));
        let ticket = pending_ticket(&app);

        let _ = app.update(Message::FileLoaded(Ok(ImageFile::new(
            "other.png",
            &b"png"[..],
        ))));

        assert_eq!(pending_ticket(&app), ticket);
        assert_eq!(app.last_error.as_deref(), Some(BUSY_NOTICE));
        assert_eq!(app.controller.previews().live_count(), 1);
    }

    #[test]
    fn finished_analysis_clears_busy_notice() {
        let mut app = app();
        let _ = app.update(Message::FileLoaded(Ok(photo())));
        let ticket = pending_ticket(&app);
        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/other.png")));
        assert!(app.last_error.is_some());

        let _ = app.update(Message::AnalysisFinished(ticket, Ok(verdict())));

        assert!(matches!(app.controller.phase(), Phase::Resolved { .. }));
        assert!(app.last_error.is_none());
    }

    #[test]
    fn stale_outcome_keeps_busy_notice() {
        let mut app = app();
        let _ = app.update(Message::FileLoaded(Ok(photo())));
        let stale = pending_ticket(&app);
        let _ = app.update(Message::Reset);
        let _ = app.update(Message::FileLoaded(Ok(photo())));
        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/other.png")));

        let _ = app.update(Message::AnalysisFinished(stale, Ok(verdict())));

        assert!(app.controller.is_pending());
        assert_eq!(app.last_error.as_deref(), Some(BUSY_NOTICE));
    }

    #[test]
    fn retry_clears_busy_notice() {
        let mut app = app();
        let _ = app.update(Message::FileLoaded(Ok(photo())));
        let ticket = pending_ticket(&app);
        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/other.png")));
        let _ = app.update(Message::AnalysisFinished(
            ticket,
            Err(AnalyzeError::Network("connection refused".into())),
        ));
        app.last_error = Some(BUSY_NOTICE.to_string());

        let _ = app.update(Message::Retry);

        assert!(pending_ticket(&app) > ticket);
        assert!(app.last_error.is_none());
    }

    #[test]
    fn unreadable_file_keeps_idle_and_reports() {
        let mut app = app();
        let _ = app.update(Message::FileLoaded(Err(
            "photo.jpg: failed to read file".into()
        )));
        assert!(matches!(app.controller.phase(), Phase::Idle));
        assert_eq!(
            app.last_error.as_deref(),
            Some("photo.jpg: failed to read file")
        );
    }
}
