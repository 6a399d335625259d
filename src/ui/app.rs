use crate::actions::{build_request, ActionKind, ActionReceipt, ActionRequest, FormKind};
use crate::config::StartScreen;
use crate::error::ActionError;
use crate::registry::RegistrySnapshot;
use crate::ui::bus_list::BusListView;
use crate::ui::events::ActionOrigin;
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;
use crate::ui::removal::{RemovalIntent, RemovalReducer, RemovalState};
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Book,
    Admin,
}

impl Screen {
    pub fn forms(self) -> &'static [FormKind] {
        match self {
            Screen::Book => &[FormKind::Booking, FormKind::Cancellation],
            Screen::Admin => &[FormKind::AddBus],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Book => "Book",
            Screen::Admin => "Admin",
        }
    }

    fn toggled(self) -> Self {
        match self {
            Screen::Book => Screen::Admin,
            Screen::Admin => Screen::Book,
        }
    }
}

impl From<StartScreen> for Screen {
    fn from(start: StartScreen) -> Self {
        match start {
            StartScreen::Book => Screen::Book,
            StartScreen::Admin => Screen::Admin,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Form(FormKind),
    BusList,
}

/// Work the UI hands to the async side.
#[derive(Debug)]
pub enum UiCommand {
    RefreshBuses,
    Submit {
        origin: ActionOrigin,
        request: ActionRequest,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($slot:expr, $reducer:ty, $intent:expr) => {
        $slot = <$reducer>::reduce(std::mem::take(&mut $slot), $intent);
    };
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    focus: Focus,
    endpoint: String,
    booking: FormState,
    cancellation: FormState,
    add_bus: FormState,
    removal: RemovalState,
    buses: RegistrySnapshot,
    selected: usize,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(screen: Screen, endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            screen,
            focus: Self::first_pane(screen),
            endpoint: endpoint.into(),
            booking: FormState::new(FormKind::Booking),
            cancellation: FormState::new(FormKind::Cancellation),
            add_bus: FormState::new(FormKind::AddBus),
            removal: RemovalState::default(),
            buses: RegistrySnapshot::default(),
            selected: 0,
            command_sender: None,
            last_command_error: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn form(&self, kind: FormKind) -> &FormState {
        match kind {
            FormKind::Booking => &self.booking,
            FormKind::Cancellation => &self.cancellation,
            FormKind::AddBus => &self.add_bus,
        }
    }

    fn form_mut(&mut self, kind: FormKind) -> &mut FormState {
        match kind {
            FormKind::Booking => &mut self.booking,
            FormKind::Cancellation => &mut self.cancellation,
            FormKind::AddBus => &mut self.add_bus,
        }
    }

    pub fn removal(&self) -> &RemovalState {
        &self.removal
    }

    pub fn buses(&self) -> &RegistrySnapshot {
        &self.buses
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    pub fn is_admin(&self) -> bool {
        self.screen == Screen::Admin
    }

    pub fn bus_list_view(&self) -> BusListView {
        let removal = self.is_admin().then_some(&self.removal);
        BusListView::from_snapshot(&self.buses, removal)
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn switch_screen(&mut self) {
        if self.removal.is_confirming() {
            self.dispatch_removal(RemovalIntent::Decline);
        }
        self.screen = self.screen.toggled();
        self.focus = Self::first_pane(self.screen);
    }

    pub fn focus_next(&mut self) {
        let panes = self.panes();
        let index = panes.iter().position(|p| *p == self.focus).unwrap_or(0);
        self.focus = panes[(index + 1) % panes.len()];
    }

    pub fn focus_prev(&mut self) {
        let panes = self.panes();
        let index = panes.iter().position(|p| *p == self.focus).unwrap_or(0);
        self.focus = panes[(index + panes.len() - 1) % panes.len()];
    }

    fn panes(&self) -> Vec<Focus> {
        self.screen
            .forms()
            .iter()
            .map(|kind| Focus::Form(*kind))
            .chain(std::iter::once(Focus::BusList))
            .collect()
    }

    fn first_pane(screen: Screen) -> Focus {
        screen
            .forms()
            .first()
            .map(|kind| Focus::Form(*kind))
            .unwrap_or(Focus::BusList)
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.buses.buses.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected.min(len - 1);
        self.selected = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    // ========================================================================
    // Forms (MVI pattern)
    // ========================================================================

    pub fn dispatch_form(&mut self, kind: FormKind, intent: FormIntent) {
        let slot = self.form_mut(kind);
        dispatch_mvi!(*slot, FormReducer, intent);
    }

    /// Validate the form and hand the request to the bridge.
    ///
    /// Ignored while the form already has a request outstanding.
    pub fn submit_form(&mut self, kind: FormKind) {
        if self.form(kind).is_submitting() {
            return;
        }
        let request = match build_request(kind, &self.form(kind).inputs) {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(?kind, error = %err, "form rejected before sending");
                self.dispatch_form(
                    kind,
                    FormIntent::Rejected {
                        message: ActionError::from(err).message(kind.action_kind()),
                    },
                );
                return;
            }
        };

        self.dispatch_form(kind, FormIntent::Submit);
        let origin = ActionOrigin::Form(kind);
        if !self.send_command(UiCommand::Submit { origin, request }) {
            let message = self.command_failure_message();
            self.dispatch_form(kind, FormIntent::Failed { message });
        }
    }

    // ========================================================================
    // Bus list and removal (MVI pattern)
    // ========================================================================

    pub fn dispatch_removal(&mut self, intent: RemovalIntent) {
        dispatch_mvi!(self.removal, RemovalReducer, intent);
    }

    /// Shows the loading state until the registry reports back.
    pub fn request_refresh(&mut self) {
        if self.send_command(UiCommand::RefreshBuses) {
            self.buses.loading = true;
        }
    }

    /// Ask for confirmation to remove the selected bus (admin screen only).
    pub fn request_removal(&mut self) {
        if !self.is_admin() {
            return;
        }
        let Some(bus) = self.buses.buses.get(self.selected) else {
            return;
        };
        let bus_id = bus.bus_id;
        self.dispatch_removal(RemovalIntent::Request { bus_id });
    }

    pub fn confirm_removal(&mut self) {
        let Some(bus_id) = self.removal.confirming else {
            return;
        };
        self.dispatch_removal(RemovalIntent::Confirm);

        let origin = ActionOrigin::Removal { bus_id };
        let request = ActionRequest::RemoveBus { bus_id };
        if !self.send_command(UiCommand::Submit { origin, request }) {
            let message = self.command_failure_message();
            self.dispatch_removal(RemovalIntent::Settled {
                bus_id,
                outcome: Err(message),
            });
        }
    }

    pub fn decline_removal(&mut self) {
        if let Some(bus_id) = self.removal.confirming {
            tracing::debug!(bus_id, "{}", ActionError::ConfirmationAborted);
        }
        self.dispatch_removal(RemovalIntent::Decline);
    }

    // ========================================================================
    // Bridge events
    // ========================================================================

    pub fn on_registry(&mut self, snapshot: RegistrySnapshot) {
        self.buses = snapshot;
        let len = self.buses.buses.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn on_action_settled(
        &mut self,
        origin: ActionOrigin,
        outcome: Result<ActionReceipt, ActionError>,
    ) {
        match origin {
            ActionOrigin::Form(kind) => {
                let intent = match outcome {
                    Ok(receipt) => FormIntent::Succeeded {
                        message: receipt.message(),
                    },
                    Err(err) => FormIntent::Failed {
                        message: err.message(kind.action_kind()),
                    },
                };
                self.dispatch_form(kind, intent);
            }
            ActionOrigin::Removal { bus_id } => {
                let outcome = outcome
                    .map(|receipt| receipt.message())
                    .map_err(|err| err.message(ActionKind::RemoveBus));
                self.dispatch_removal(RemovalIntent::Settled { bus_id, outcome });
            }
        }
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            self.last_command_error = Some("not connected".to_string());
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to queue ui command");
                self.last_command_error = Some(err.to_string());
                false
            }
        }
    }

    fn command_failure_message(&self) -> String {
        format!(
            "Could not send request: {}",
            self.last_command_error.as_deref().unwrap_or("unknown error")
        )
    }
}
