use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{widgets::Clear, Frame};

use crate::context::AppContext;
use crate::error::Result;
use crate::navigator::{Navigator, ViewLoader};
use crate::settings::Settings;
use crate::tui::{open_external, slid};
use crate::views::dashboard::Dashboard;
use crate::views::dialog::{AddTransactionDialog, Alert, ConfirmAction, Modal, ModalOutcome};
use crate::views::ledger::LedgerView;
use crate::views::setup::{AboutYou, BankLink, Confirmation, PersonalDetails};
use crate::views::trends::TrendsView;
use crate::views::welcome::Welcome;
use crate::views::{Action, Screen, ViewId};

/// Poll interval while a slide is playing.
const FRAME: Duration = Duration::from_millis(16);
/// Poll interval when nothing is moving.
const IDLE: Duration = Duration::from_millis(250);

/// Builds views from the current application state.
struct ScreenLoader<'a> {
    ctx: &'a AppContext,
}

impl ViewLoader<ViewId> for ScreenLoader<'_> {
    type View = Box<dyn Screen>;

    fn render(&mut self, id: &ViewId) -> Result<Box<dyn Screen>> {
        let ctx = self.ctx;
        let view: Box<dyn Screen> = match id {
            ViewId::Welcome => Box::new(Welcome),
            ViewId::Setup1 => Box::new(PersonalDetails::new(&ctx.setup)),
            ViewId::Setup2 => Box::new(AboutYou::new(&ctx.setup)),
            ViewId::Setup3 => Box::new(BankLink::new()),
            ViewId::Setup4 => Box::new(Confirmation::new(&ctx.setup)),
            ViewId::Main => Box::new(Dashboard::new(ctx)),
            ViewId::Ledger => Box::new(LedgerView::new(ctx)),
            ViewId::Trends => Box::new(TrendsView::new(ctx)),
        };
        Ok(view)
    }
}

pub struct App {
    ctx: AppContext,
    nav: Navigator<ViewId, Box<dyn Screen>>,
    modal: Option<Modal>,
    quit: bool,
}

impl App {
    /// Start on Main if a profile exists, on Welcome otherwise.
    pub fn new(ctx: AppContext) -> Result<Self> {
        let mut nav = Navigator::new(Duration::from_millis(ctx.settings.transition_ms));
        let root = ctx.initial_view();
        nav.replace_root(root, &mut ScreenLoader { ctx: &ctx })?;
        tracing::info!(view = ?root, "application started");
        Ok(Self {
            ctx,
            nav,
            modal: None,
            quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_animating(&self) -> bool {
        self.nav.is_animating()
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.nav.advance(elapsed);
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        for (offset, view) in self.nav.visible_mut() {
            if let Some(rect) = slid(area, offset) {
                frame.render_widget(Clear, rect);
                view.draw(frame, rect);
            }
        }
        if let Some(modal) = &self.modal {
            modal.draw(frame, area);
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        if let Some(modal) = &mut self.modal {
            let outcome = modal.handle_key(code);
            if outcome != ModalOutcome::Open {
                self.modal = None;
                self.on_modal_closed(outcome);
            }
            return;
        }
        let action = match self.nav.current_mut() {
            Some(view) => view.handle_key(code, &mut self.ctx),
            None => Action::None,
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Push(id) => {
                if let Err(e) = self.nav.push(id, &mut ScreenLoader { ctx: &self.ctx }) {
                    tracing::error!(view = ?id, error = %e, "could not open view");
                }
            }
            Action::ReplaceRoot(id) => self.replace_root(id),
            Action::Back => {
                if let Err(e) = self.nav.pop(&mut ScreenLoader { ctx: &self.ctx }) {
                    tracing::debug!(error = %e, "back ignored");
                }
            }
            Action::Quit => self.quit = true,
            Action::AddTransaction => self.modal = Some(Modal::AddTransaction(AddTransactionDialog::new())),
            Action::Alert(alert) => self.modal = Some(Modal::Alert(alert)),
            Action::Confirm(confirm) => self.modal = Some(Modal::Confirm(confirm)),
            Action::OpenExternal(url) => {
                tracing::info!(url, "opening in browser");
                if let Err(e) = open_external(url) {
                    tracing::warn!(url, error = %e, "could not open browser");
                }
            }
        }
    }

    fn replace_root(&mut self, id: ViewId) {
        if let Err(e) = self.nav.replace_root(id, &mut ScreenLoader { ctx: &self.ctx }) {
            tracing::error!(view = ?id, error = %e, "could not open view");
        }
    }

    fn reload_current(&mut self) {
        if let Some(view) = self.nav.current_mut() {
            view.reload(&self.ctx);
        }
    }

    fn on_modal_closed(&mut self, outcome: ModalOutcome) {
        match outcome {
            ModalOutcome::Open | ModalOutcome::Dismissed => {}
            ModalOutcome::Submitted(Some(txn)) => {
                self.ctx.store.add_transaction(&txn);
                self.reload_current();
            }
            ModalOutcome::Submitted(None) => tracing::debug!("discarded invalid finance record"),
            // The bank link cannot be edited in place, so either answer ends on the same hint.
            ModalOutcome::Answered { action: ConfirmAction::ChangeCard, .. } => {
                self.modal = Some(Modal::Alert(Alert {
                    title: "Change Card",
                    header: "Info",
                    body: "Delete all data to change/unlink bank.",
                }));
            }
            ModalOutcome::Answered { yes: false, .. } => {}
            ModalOutcome::Answered { action: ConfirmAction::DeleteAllData, yes: true } => {
                match self.ctx.delete_all_data() {
                    Ok(()) => self.replace_root(ViewId::Welcome),
                    Err(e) => tracing::error!(error = %e, "could not delete data"),
                }
            }
            ModalOutcome::Answered { action: ConfirmAction::DeleteTransaction(id), yes: true } => {
                self.ctx.store.delete_transaction(id);
                self.reload_current();
            }
        }
    }
}

pub fn run(settings: Settings) -> Result<()> {
    let ctx = AppContext::open(settings)?;
    let mut app = App::new(ctx)?;

    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        hook(info);
    }));

    let mut terminal = ratatui::init();
    let mut last_tick = Instant::now();

    let result: Result<()> = loop {
        let now = Instant::now();
        app.advance(now.duration_since(last_tick));
        last_tick = now;

        if let Err(e) = terminal.draw(|frame| app.draw(frame)) {
            break Err(e.into());
        }

        let timeout = if app.is_animating() { FRAME } else { IDLE };
        match event::poll(timeout) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => break Err(e.into()),
        }

        match event::read() {
            Err(e) => break Err(e.into()),
            Ok(Event::Key(key)) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break Ok(());
                }
                app.handle_key(key.code);
                if app.should_quit() {
                    break Ok(());
                }
            }
            Ok(_) => {}
        }
    };

    ratatui::restore();
    result
}
