//! # Application Controller
//!
//! The controller owns the event loop. It maps key events to commands,
//! applies command events to the view model, hands requests to the
//! [`HttpService`], folds completed responses back into the view model and
//! asks the renderer to redraw.

use crate::repl::{
    commands::{CommandContext, CommandEvent, CommandRegistry},
    io::{EventStream, RenderStream},
    services::{ApiClient, ApiRequest, HttpResponseMessage, HttpService},
    view_models::{ViewModel, ViewModelSnapshot},
    views::{TerminalRenderer, ViewRenderer},
};
use crate::{cmd_args::CommandLineArgs, config};
use anyhow::{Context, Result};
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The main application controller
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: ViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    http_service: HttpService,
    event_stream: ES,
    should_quit: bool,
    needs_render: bool,
    /// Whether the last frame showed a notification
    notification_on_screen: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create a controller for the backend selected by the command line and profile
    pub fn with_io_streams(
        cmd_args: CommandLineArgs,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let profile_name = cmd_args.profile();
        let profile_path = config::get_profile_path();
        tracing::debug!("Loading profile '{}' from '{}'", profile_name, profile_path);

        let profile_server = config::load_server(profile_name, &profile_path)?;
        let server = config::resolve_server(cmd_args.server(), profile_server.as_deref());
        tracing::info!("Using backend {}", server);

        let client = ApiClient::new(&server)
            .with_context(|| format!("Cannot use '{server}' as backend address"))?;
        Self::with_client(client, event_stream, render_stream)
    }

    /// Create a controller around an already configured API client
    pub fn with_client(client: ApiClient, event_stream: ES, render_stream: RS) -> Result<Self> {
        let mut view_model = ViewModel::new();

        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;
        let (width, height) = view_renderer.terminal_size();
        view_model.update_terminal_size(width, height);

        Ok(Self {
            view_model,
            view_renderer,
            command_registry: CommandRegistry::new(),
            http_service: HttpService::new(client),
            event_stream,
            should_quit: false,
            needs_render: true,
            notification_on_screen: false,
        })
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Fetch both catalog lists, as done once at startup
    pub fn start(&mut self) {
        self.dispatch(ApiRequest::ListMakers);
        self.dispatch(ApiRequest::ListModels);
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        self.start();
        self.render()?;

        let outcome = self.event_loop().await;

        // Restore the terminal even when the loop failed
        self.view_renderer.cleanup()?;
        outcome
    }

    async fn event_loop(&mut self) -> Result<()> {
        while !self.should_quit {
            if self.event_stream.poll(POLL_INTERVAL)? {
                let event = self.event_stream.read()?;
                self.handle_event(event)?;
            }

            self.drain_responses();

            if !self.should_quit && self.frame_outdated() {
                self.render()?;
            }

            // Let spawned requests make progress when input arrives back to back
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    /// Apply one terminal event
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.process_key_event(key_event)
            }
            Event::Resize(width, height) => {
                self.view_model.update_terminal_size(width, height);
                self.view_renderer.update_size(width, height);
                self.needs_render = true;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Route a key press through the command registry and apply the outcome
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        tracing::debug!("Received key event: {:?}", key_event);

        let context = CommandContext::new(ViewModelSnapshot::from_view_model(&self.view_model));
        let events = self.command_registry.process_event(key_event, &context)?;
        if !events.is_empty() {
            tracing::debug!("Command events generated: {:?}", events);
        }

        for event in events {
            self.apply_command_event(event);
        }
        Ok(())
    }

    fn apply_command_event(&mut self, event: CommandEvent) {
        let vm = &mut self.view_model;
        let request = match event {
            CommandEvent::LoginCharRequested { ch } => {
                vm.insert_login_char(ch);
                None
            }
            CommandEvent::LoginBackspaceRequested => {
                vm.backspace_login();
                None
            }
            CommandEvent::LoginFieldSwitchRequested => {
                vm.switch_login_field();
                None
            }
            CommandEvent::LoginRequested => Some(vm.login_request()),
            CommandEvent::SignupRequested => Some(vm.signup_request()),
            CommandEvent::CreateMakerRequested => vm.create_maker_request(),
            CommandEvent::CreateModelDialogRequested => {
                vm.open_create_dialog();
                None
            }
            CommandEvent::ModelSelectionMoveRequested { delta } => {
                vm.move_model_selection(delta);
                None
            }
            CommandEvent::EditModelDialogRequested => {
                vm.open_edit_dialog();
                None
            }
            CommandEvent::DialogCharRequested { ch } => {
                vm.insert_dialog_char(ch);
                None
            }
            CommandEvent::DialogBackspaceRequested => {
                vm.backspace_dialog();
                None
            }
            CommandEvent::DialogFieldSwitchRequested => {
                vm.switch_dialog_field();
                None
            }
            CommandEvent::DialogMakerCycleRequested { forward } => {
                vm.cycle_dialog_maker(forward);
                None
            }
            CommandEvent::DialogSubmitRequested => vm.submit_dialog_request(),
            CommandEvent::DialogCloseRequested => {
                vm.close_dialog();
                None
            }
            CommandEvent::QuitRequested => {
                self.should_quit = true;
                None
            }
            CommandEvent::NoAction => return,
        };

        if let Some(request) = request {
            self.dispatch(request);
        }
        self.needs_render = true;
    }

    fn dispatch(&mut self, request: ApiRequest) {
        self.http_service.dispatch(request);
        self.view_model
            .set_requests_in_flight(self.http_service.in_flight());
        self.needs_render = true;
    }

    /// Apply every response that has already arrived, returning how many
    pub fn drain_responses(&mut self) -> usize {
        let mut applied = 0;
        while let Some(message) = self.http_service.poll_response() {
            self.handle_response(message);
            applied += 1;
        }
        applied
    }

    /// Wait until every dispatched request, follow-ups included, has been applied
    pub async fn settle(&mut self) {
        while let Some(message) = self.http_service.next_response().await {
            self.handle_response(message);
        }
    }

    fn handle_response(&mut self, message: HttpResponseMessage) {
        match message {
            HttpResponseMessage::Success { ticket, result } => {
                let follow_ups = self.view_model.apply_response(ticket, result);
                for request in follow_ups {
                    self.http_service.dispatch(request);
                }
            }
            HttpResponseMessage::Error { label, message, .. } => {
                self.view_model.apply_transport_error(&label, &message);
            }
        }
        self.view_model
            .set_requests_in_flight(self.http_service.in_flight());
        self.needs_render = true;
    }

    /// True when state changed or the visible notification has expired
    fn frame_outdated(&self) -> bool {
        let notification_visible = self
            .view_model
            .active_notification(Instant::now())
            .is_some();
        self.needs_render || notification_visible != self.notification_on_screen
    }

    /// Draw the current state
    pub fn render(&mut self) -> Result<()> {
        let snapshot = ViewModelSnapshot::from_view_model(&self.view_model);
        self.notification_on_screen = snapshot.notification.is_some();
        self.view_renderer.render_full(&snapshot)?;
        self.needs_render = false;
        Ok(())
    }
}
