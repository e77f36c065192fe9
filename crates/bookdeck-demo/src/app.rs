#![forbid(unsafe_code)]

//! The assembled browsing application.
//!
//! `BrowseApp` wires the widgets together under one [`Model`]: two
//! independent carousels, the recommendation quiz, the three book modals,
//! the toast stack, and the reading-list gateway. Every user action is
//! handled here, at the point it was triggered; no error escapes the
//! handler that caused it.

use std::sync::Arc;
use std::time::{Duration, Instant};

use bookdeck_core::book::BookRecord;
use bookdeck_core::catalog::CardCatalog;
use bookdeck_core::event::{Event, KeyCode, KeyEvent, PointerEvent};
use bookdeck_core::swipe::{SwipeConfig, SwipeTracker};
use bookdeck_gateway::client::{GatewayError, ReadingListGateway};
use bookdeck_gateway::nav::book_details_url;
use bookdeck_gateway::types::{ActionResponse, AddToReadingList};
use bookdeck_runtime::{Cmd, Model};
use bookdeck_view::ViewTree;
use bookdeck_widgets::carousel::CarouselState;
use bookdeck_widgets::modal::{Modal, ModalKind};
use bookdeck_widgets::quiz::{QuizFlow, QuizState};
use bookdeck_widgets::showcase::{Showcase, SummaryDisclosure};
use bookdeck_widgets::slide_deck::SlideDeck;
use bookdeck_widgets::toast::{Severity, ToastId, ToastStack};
use tracing::{debug, error, info};

/// Region showing the active key bindings.
const KEY_HINTS: &str = "key-hints";
const KEY_HINTS_TEXT: &str = "←/→ browse | Tab focus | s summary | n quiz | \
                              d details | a note | w save note | p progress | \
                              r start reading | g open page | Esc close | q quit";

const LOOKUP_FAILED: &str = "Error: Could not find book details";
const EXCHANGE_FAILED: &str = "An error occurred. Please try again.";
const LOADING_MESSAGE: &str = "Adding book to your reading list...";
const NOTE_SAVED: &str = "Note saved successfully!";

/// Which carousel the arrow keys and swipes currently drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Showcase,
    SlideDeck,
}

/// Tunables for the assembled application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Delay between a successful reading-list add and the view reload.
    pub reload_delay: Duration,
    /// Swipe recognition settings shared by both carousels.
    pub swipe: SwipeConfig,
    /// Number of quiz questions on the page.
    pub quiz_steps: u32,
    /// Server origin used for page navigation.
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reload_delay: Duration::from_millis(1500),
            swipe: SwipeConfig::default(),
            quiz_steps: 6,
            base_url: "http://localhost:5000".to_string(),
        }
    }
}

/// Messages the application understands.
#[derive(Debug)]
pub enum Msg {
    Key(KeyEvent),
    Pointer(PointerEvent),
    Tick,
    ShowDetails(String),
    AddNote(String),
    UpdateProgress(String),
    SaveNote,
    CloseModal,
    StartReading(String),
    ReadingListSettled(Result<ActionResponse, GatewayError>),
    Reload,
    GoToDetails(String),
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) => Msg::Key(key),
            Event::Pointer(pointer) => Msg::Pointer(pointer),
            Event::Tick => Msg::Tick,
        }
    }
}

/// The whole browsing layer as one model.
pub struct BrowseApp {
    config: AppConfig,
    catalog: CardCatalog,
    showcase: Showcase,
    showcase_state: CarouselState,
    summary: SummaryDisclosure,
    showcase_swipes: SwipeTracker,
    deck: SlideDeck,
    deck_state: CarouselState,
    deck_swipes: SwipeTracker,
    slide_captions: Vec<String>,
    quiz: QuizFlow,
    quiz_state: QuizState,
    toasts: ToastStack,
    open_modal: Option<(ModalKind, BookRecord)>,
    focus: Focus,
    gateway: Arc<dyn ReadingListGateway + Send + Sync>,
    loading_toast: Option<ToastId>,
    /// Page the user navigated away to, if any.
    pub requested_navigation: Option<String>,
    /// How many times the view resynchronized. Observable for tests.
    pub reload_count: u32,
}

impl BrowseApp {
    pub fn new(
        config: AppConfig,
        catalog: CardCatalog,
        showcase_books: Vec<BookRecord>,
        slide_captions: Vec<String>,
        gateway: Arc<dyn ReadingListGateway + Send + Sync>,
    ) -> Self {
        let showcase = Showcase::new(showcase_books);
        let showcase_state = showcase.state();
        let deck = SlideDeck::numbered("slide-", slide_captions.len());
        let deck_state = deck.state();
        let quiz_state = QuizState::new(config.quiz_steps);
        let swipe = config.swipe;
        Self {
            config,
            catalog,
            showcase,
            showcase_state,
            summary: SummaryDisclosure::default(),
            showcase_swipes: SwipeTracker::new(swipe),
            deck,
            deck_state,
            deck_swipes: SwipeTracker::new(swipe),
            slide_captions,
            quiz: QuizFlow::default(),
            quiz_state,
            toasts: ToastStack::default(),
            open_modal: None,
            focus: Focus::Showcase,
            gateway,
            loading_toast: None,
            requested_navigation: None,
            reload_count: 0,
        }
    }

    pub fn toasts(&self) -> &ToastStack {
        &self.toasts
    }

    pub fn showcase_index(&self) -> usize {
        self.showcase_state.current()
    }

    pub fn deck_index(&self) -> usize {
        self.deck_state.current()
    }

    pub fn quiz_step(&self) -> u32 {
        self.quiz_state.current_step()
    }

    pub fn open_modal(&self) -> Option<ModalKind> {
        self.open_modal.as_ref().map(|(kind, _)| *kind)
    }

    fn current_book_id(&self) -> Option<String> {
        self.showcase
            .current(&self.showcase_state)
            .map(|book| book.id.clone())
    }

    fn notify(&mut self, message: impl Into<String>, severity: Severity, auto_hide: bool) {
        self.toasts
            .notify(message, severity, auto_hide, Instant::now());
    }

    /// Resolve a card or surface the one lookup-failure notification.
    fn resolve_or_notify(&mut self, book_id: &str) -> Option<BookRecord> {
        match self.catalog.resolve(book_id) {
            Ok(book) => Some(book),
            Err(err) => {
                error!(%err, "book card lookup failed");
                self.notify(LOOKUP_FAILED, Severity::Danger, true);
                None
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Cmd<Msg> {
        if key.is_press(KeyCode::Char('q')) {
            return Cmd::quit();
        }
        if key.is_press(KeyCode::Escape) {
            return Cmd::msg(Msg::CloseModal);
        }
        if key.is_press(KeyCode::Tab) {
            self.focus = match self.focus {
                Focus::Showcase => Focus::SlideDeck,
                Focus::SlideDeck => Focus::Showcase,
            };
            self.showcase_swipes.reset();
            self.deck_swipes.reset();
            debug!(focus = ?self.focus, "focus switched");
            return Cmd::none();
        }
        if key.is_press(KeyCode::Char('s')) {
            self.summary.toggle();
            return Cmd::none();
        }
        if key.is_press(KeyCode::Char('n')) {
            self.quiz_state.advance();
            return Cmd::none();
        }
        if key.is_press(KeyCode::Char('d')) {
            if let Some(id) = self.current_book_id() {
                return Cmd::msg(Msg::ShowDetails(id));
            }
            return Cmd::none();
        }
        if key.is_press(KeyCode::Char('a')) {
            if let Some(id) = self.current_book_id() {
                return Cmd::msg(Msg::AddNote(id));
            }
            return Cmd::none();
        }
        if key.is_press(KeyCode::Char('p')) {
            if let Some(id) = self.current_book_id() {
                return Cmd::msg(Msg::UpdateProgress(id));
            }
            return Cmd::none();
        }
        if key.is_press(KeyCode::Char('r')) || key.is_press(KeyCode::Enter) {
            if let Some(id) = self.current_book_id() {
                return Cmd::msg(Msg::StartReading(id));
            }
            return Cmd::none();
        }
        if key.is_press(KeyCode::Char('w')) {
            return Cmd::msg(Msg::SaveNote);
        }
        if key.is_press(KeyCode::Char('g')) {
            if let Some(id) = self.current_book_id() {
                return Cmd::msg(Msg::GoToDetails(id));
            }
            return Cmd::none();
        }

        // Arrow keys drive whichever carousel holds focus.
        match self.focus {
            Focus::Showcase => {
                if self.showcase_state.handle_key(&key) {
                    self.summary.reset();
                }
            }
            Focus::SlideDeck => {
                self.deck_state.handle_key(&key);
            }
        }
        Cmd::none()
    }

    fn handle_pointer(&mut self, pointer: PointerEvent) -> Cmd<Msg> {
        match self.focus {
            Focus::Showcase => {
                if let Some(direction) = self.showcase_swipes.track(&pointer)
                    && self.showcase_state.handle_swipe(direction)
                {
                    self.summary.reset();
                }
            }
            Focus::SlideDeck => {
                if let Some(direction) = self.deck_swipes.track(&pointer) {
                    self.deck_state.handle_swipe(direction);
                }
            }
        }
        Cmd::none()
    }

    fn start_reading(&mut self, book_id: &str) -> Cmd<Msg> {
        let Some(book) = self.resolve_or_notify(book_id) else {
            return Cmd::none();
        };

        let loading = self
            .toasts
            .notify(LOADING_MESSAGE, Severity::Info, false, Instant::now());
        self.loading_toast = Some(loading);

        let request = AddToReadingList::start_reading(&book);
        debug!(?request, "submitting start-reading action");
        let gateway = Arc::clone(&self.gateway);
        Cmd::task(move || Msg::ReadingListSettled(gateway.add_to_reading_list(&request)))
    }

    fn reading_list_settled(&mut self, result: Result<ActionResponse, GatewayError>) -> Cmd<Msg> {
        if let Some(loading) = self.loading_toast.take() {
            self.toasts.dismiss(loading);
        }
        match result {
            Ok(verdict) if verdict.success => {
                self.notify(verdict.message, Severity::Success, true);
                Cmd::delay(self.config.reload_delay, Msg::Reload)
            }
            Ok(verdict) => {
                error!(message = %verdict.message, "server rejected reading-list add");
                self.notify(format!("Error: {}", verdict.message), Severity::Danger, true);
                Cmd::none()
            }
            Err(err) => {
                error!(%err, "reading-list exchange failed");
                self.notify(EXCHANGE_FAILED, Severity::Danger, true);
                Cmd::none()
            }
        }
    }

    /// Rebuild every piece of server-derived view state, as a page reload
    /// would. The notification stack rides through; toasts expire on their
    /// own schedule.
    fn reload(&mut self) {
        info!("resynchronizing view state");
        self.showcase_state = self.showcase.state();
        self.summary.reset();
        self.deck_state = self.deck.state();
        self.quiz_state = QuizState::new(self.config.quiz_steps);
        self.open_modal = None;
        self.focus = Focus::Showcase;
        self.showcase_swipes.reset();
        self.deck_swipes.reset();
        self.reload_count += 1;
    }
}

impl Model for BrowseApp {
    type Message = Msg;

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Key(key) => self.handle_key(key),
            Msg::Pointer(pointer) => self.handle_pointer(pointer),
            Msg::Tick => {
                self.toasts.sweep(Instant::now());
                Cmd::none()
            }
            Msg::ShowDetails(id) => {
                if let Some(book) = self.resolve_or_notify(&id) {
                    self.open_modal = Some((ModalKind::Details, book));
                }
                Cmd::none()
            }
            Msg::AddNote(id) => {
                if let Some(book) = self.resolve_or_notify(&id) {
                    self.open_modal = Some((ModalKind::AddNote, book));
                }
                Cmd::none()
            }
            Msg::UpdateProgress(id) => {
                if let Some(book) = self.resolve_or_notify(&id) {
                    self.open_modal = Some((ModalKind::UpdateProgress, book));
                }
                Cmd::none()
            }
            Msg::SaveNote => {
                if self.open_modal() == Some(ModalKind::AddNote) {
                    self.open_modal = None;
                    self.notify(NOTE_SAVED, Severity::Success, false);
                }
                Cmd::none()
            }
            Msg::CloseModal => {
                self.open_modal = None;
                Cmd::none()
            }
            Msg::StartReading(id) => self.start_reading(&id),
            Msg::ReadingListSettled(result) => self.reading_list_settled(result),
            Msg::Reload => {
                self.reload();
                Cmd::none()
            }
            Msg::GoToDetails(id) => {
                let url = book_details_url(&self.config.base_url, &id);
                info!(%url, "navigating to details page");
                self.requested_navigation = Some(url);
                Cmd::quit()
            }
        }
    }

    fn view(&self, tree: &mut ViewTree) {
        tree.set_text(KEY_HINTS, KEY_HINTS_TEXT);
        tree.show(KEY_HINTS);

        self.showcase
            .render(tree, &self.showcase_state, &self.summary);

        for (index, caption) in self.slide_captions.iter().enumerate() {
            tree.set_text(&format!("slide-{}", index + 1), caption);
        }
        self.deck.render(tree, &self.deck_state);

        self.quiz.render(tree, &self.quiz_state);

        Modal::close_all(tree);
        if let Some((kind, book)) = &self.open_modal {
            Modal::open(tree, *kind, book);
        }

        self.toasts.render(tree);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{library_cards, showcase_books, slide_captions};
    use bookdeck_runtime::ProgramSimulator;
    use bookdeck_widgets::modal;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted gateway: hands out queued outcomes, counts calls.
    struct ScriptedGateway {
        outcomes: Mutex<VecDeque<Result<ActionResponse, GatewayError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedGateway {
        fn with(outcome: Result<ActionResponse, GatewayError>) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(VecDeque::from([outcome])),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ReadingListGateway for ScriptedGateway {
        fn add_to_reading_list(
            &self,
            _request: &AddToReadingList,
        ) -> Result<ActionResponse, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(GatewayError::Network("unscripted call".to_string())))
        }
    }

    fn app_with(gateway: Arc<ScriptedGateway>) -> ProgramSimulator<BrowseApp> {
        let config = AppConfig {
            reload_delay: Duration::ZERO,
            ..AppConfig::default()
        };
        let app = BrowseApp::new(
            config,
            library_cards(),
            showcase_books(),
            slide_captions(),
            gateway,
        );
        let mut sim = ProgramSimulator::new(app);
        sim.init();
        sim
    }

    fn success(message: &str) -> Result<ActionResponse, GatewayError> {
        Ok(ActionResponse {
            success: true,
            message: message.to_string(),
        })
    }

    fn rejection(message: &str) -> Result<ActionResponse, GatewayError> {
        Ok(ActionResponse {
            success: false,
            message: message.to_string(),
        })
    }

    #[test]
    fn successful_add_notifies_once_and_reloads() {
        let gateway = ScriptedGateway::with(success("Added"));
        let mut sim = app_with(Arc::clone(&gateway));

        sim.send(Msg::StartReading("1".to_string()));

        assert_eq!(gateway.calls(), 1);
        let toasts = sim.model().toasts().toasts();
        assert_eq!(toasts.len(), 1, "loading toast must be dismissed");
        assert_eq!(toasts[0].message, "Added");
        assert_eq!(toasts[0].severity, Severity::Success);
        assert_eq!(sim.model().reload_count, 1);
    }

    #[test]
    fn rejected_add_notifies_once_and_keeps_state() {
        let gateway = ScriptedGateway::with(rejection("Already in list"));
        let mut sim = app_with(Arc::clone(&gateway));
        sim.inject_events(&[Event::Key(KeyEvent::press(KeyCode::Right))]);

        sim.send(Msg::StartReading("1".to_string()));

        assert_eq!(gateway.calls(), 1);
        let toasts = sim.model().toasts().toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "Error: Already in list");
        assert_eq!(toasts[0].severity, Severity::Danger);
        assert_eq!(sim.model().reload_count, 0);
        assert_eq!(sim.model().showcase_index(), 1, "local state untouched");
    }

    #[test]
    fn failed_exchange_notifies_once_without_reload() {
        let gateway =
            ScriptedGateway::with(Err(GatewayError::Network("connection refused".to_string())));
        let mut sim = app_with(Arc::clone(&gateway));

        sim.send(Msg::StartReading("1".to_string()));

        let toasts = sim.model().toasts().toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, EXCHANGE_FAILED);
        assert_eq!(toasts[0].severity, Severity::Danger);
        assert_eq!(sim.model().reload_count, 0);
    }

    #[test]
    fn unknown_book_aborts_before_the_gateway() {
        let gateway = ScriptedGateway::with(success("Added"));
        let mut sim = app_with(Arc::clone(&gateway));

        sim.send(Msg::StartReading("999".to_string()));

        assert_eq!(gateway.calls(), 0);
        let toasts = sim.model().toasts().toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, LOOKUP_FAILED);
        assert_eq!(sim.model().reload_count, 0);
    }

    #[test]
    fn details_modal_populates_from_card() {
        let gateway = ScriptedGateway::with(success("Added"));
        let mut sim = app_with(gateway);

        sim.send(Msg::ShowDetails("1".to_string()));
        let tree = sim.capture_view();

        assert!(tree.is_visible(modal::DETAILS_MODAL));
        assert_eq!(tree.text(modal::DETAILS_TITLE), Some("Don Quixote"));
        assert_eq!(
            tree.text(modal::DETAILS_AUTHOR),
            Some("Miguel de Cervantes")
        );
    }

    #[test]
    fn lookup_failure_never_shows_a_modal() {
        let gateway = ScriptedGateway::with(success("Added"));
        let mut sim = app_with(gateway);

        sim.send(Msg::ShowDetails("999".to_string()));
        let tree = sim.capture_view();

        assert!(!tree.is_visible(modal::DETAILS_MODAL));
        assert_eq!(sim.model().toasts().len(), 1);
    }

    #[test]
    fn note_flow_carries_hidden_id_and_saves() {
        let gateway = ScriptedGateway::with(success("Added"));
        let mut sim = app_with(gateway);

        sim.send(Msg::AddNote("2".to_string()));
        let tree = sim.capture_view();
        assert!(tree.is_visible(modal::NOTE_MODAL));
        assert_eq!(tree.value(modal::NOTE_BOOK_ID), Some("2"));

        sim.send(Msg::SaveNote);
        let tree = sim.capture_view();
        assert!(!tree.is_visible(modal::NOTE_MODAL));
        assert_eq!(sim.model().toasts().toasts()[0].message, NOTE_SAVED);
    }

    #[test]
    fn carousels_do_not_share_an_index() {
        let gateway = ScriptedGateway::with(success("Added"));
        let mut sim = app_with(gateway);
        let right = Event::Key(KeyEvent::press(KeyCode::Right));

        sim.inject_events(&[right.clone(), right.clone()]);
        assert_eq!(sim.model().showcase_index(), 2);
        assert_eq!(sim.model().deck_index(), 0);

        sim.inject_events(&[Event::Key(KeyEvent::press(KeyCode::Tab)), right]);
        assert_eq!(sim.model().showcase_index(), 2);
        assert_eq!(sim.model().deck_index(), 1);
    }

    #[test]
    fn swipe_drives_focused_carousel_only() {
        let gateway = ScriptedGateway::with(success("Added"));
        let mut sim = app_with(gateway);

        sim.inject_events(&[
            Event::Pointer(PointerEvent::down(200.0, 50.0)),
            Event::Pointer(PointerEvent::up(140.0, 50.0)),
        ]);
        assert_eq!(sim.model().showcase_index(), 1);
        assert_eq!(sim.model().deck_index(), 0);
    }

    #[test]
    fn sub_threshold_swipe_is_ignored() {
        let gateway = ScriptedGateway::with(success("Added"));
        let mut sim = app_with(gateway);

        sim.inject_events(&[
            Event::Pointer(PointerEvent::down(200.0, 50.0)),
            Event::Pointer(PointerEvent::up(230.0, 50.0)),
        ]);
        assert_eq!(sim.model().showcase_index(), 0);
    }

    #[test]
    fn advancing_showcase_collapses_summary() {
        let gateway = ScriptedGateway::with(success("Added"));
        let mut sim = app_with(gateway);

        sim.inject_events(&[Event::Key(KeyEvent::press(KeyCode::Char('s')))]);
        let tree = sim.capture_view();
        assert!(tree.is_visible(bookdeck_widgets::showcase::FULL_SUMMARY));

        sim.inject_events(&[Event::Key(KeyEvent::press(KeyCode::Right))]);
        let tree = sim.capture_view();
        assert!(!tree.is_visible(bookdeck_widgets::showcase::FULL_SUMMARY));
    }

    #[test]
    fn quiz_runs_forward_to_results() {
        let gateway = ScriptedGateway::with(success("Added"));
        let mut sim = app_with(gateway);
        let next = Event::Key(KeyEvent::press(KeyCode::Char('n')));

        for _ in 0..6 {
            sim.inject_events(std::slice::from_ref(&next));
        }
        let tree = sim.capture_view();
        assert!(tree.is_visible("recommendations"));
        assert!(tree.visible_with_prefix("question-").is_empty());

        // One more advance changes nothing.
        sim.inject_events(&[next]);
        assert_eq!(sim.model().quiz_step(), 7);
    }

    #[test]
    fn reload_resets_view_state_but_not_toasts() {
        let gateway = ScriptedGateway::with(success("Added"));
        let mut sim = app_with(gateway);
        sim.inject_events(&[
            Event::Key(KeyEvent::press(KeyCode::Right)),
            Event::Key(KeyEvent::press(KeyCode::Char('n'))),
        ]);
        sim.send(Msg::StartReading("1".to_string()));

        // The delayed reload already ran (zero delay in tests).
        assert_eq!(sim.model().showcase_index(), 0);
        assert_eq!(sim.model().quiz_step(), 1);
        assert_eq!(sim.model().toasts().len(), 1);
    }

    #[test]
    fn navigation_quits_with_target_url() {
        let gateway = ScriptedGateway::with(success("Added"));
        let mut sim = app_with(gateway);

        sim.send(Msg::GoToDetails("3".to_string()));
        assert!(!sim.is_running());
        assert_eq!(
            sim.model().requested_navigation.as_deref(),
            Some("http://localhost:5000/book/details/3")
        );
    }
}
