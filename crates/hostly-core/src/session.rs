// ── Property session (aggregator) ──
//
// One session per open property. Owns the composite in-memory record
// (overview + sub-resource slices), fans out refreshes, routes commands,
// and reports slice-level failures as notices instead of failing the
// whole record.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use hostly_api::AdminClient;

use crate::command::{Command, CommandEnvelope, CommandResult, RefreshScope};
use crate::convert;
use crate::error::CoreError;
use crate::model::{
    AmenityCatalog, AmenityFeature, DiningTable, GalleryItem, MenuItem, PolicySet, PricingSeason,
    Property, PropertyKind, Room, VenueEvent,
};
use crate::store::{SliceCell, SliceStream, ValueCell};
use crate::tabs::TabId;

const COMMAND_CHANNEL_SIZE: usize = 32;
const NOTICE_CHANNEL_SIZE: usize = 64;

// ── Observable session state ─────────────────────────────────────────

/// Lifecycle state of a session, observable via a `watch` channel.
///
/// `Idle -> Loading -> Ready -> Mutating -> Loading/Ready`; `close()`
/// returns the session to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Loading,
    Ready,
    Mutating,
}

/// The slice a notice is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SliceKind {
    Overview,
    Rooms,
    Amenities,
    Gallery,
    Policies,
    Menu,
    Tables,
    Pricing,
    Events,
}

/// A user-facing degradation notice. One notice per failed slice per
/// refresh attempt; the slice keeps its last-known value.
#[derive(Debug, Clone)]
pub struct Notice {
    pub slice: SliceKind,
    pub message: String,
}

// ── Session ──────────────────────────────────────────────────────────

/// Aggregator for one open property.
///
/// Cheaply cloneable via `Arc`. Created with [`open()`](Self::open),
/// which seeds the overview from the already-fetched property and runs
/// the initial refresh fan-out.
#[derive(Clone)]
pub struct PropertySession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    client: Arc<AdminClient>,
    property_id: i64,
    kinds: Vec<PropertyKind>,

    // Composite record
    overview: ValueCell<Property>,
    rooms: SliceCell<Room>,
    gallery: SliceCell<GalleryItem>,
    policies: ValueCell<PolicySet>,
    menu: SliceCell<MenuItem>,
    tables: SliceCell<DiningTable>,
    pricing: SliceCell<PricingSeason>,
    events: SliceCell<VenueEvent>,
    catalog: AmenityCatalog,

    state: watch::Sender<SessionState>,
    active_tab: watch::Sender<TabId>,
    notice_tx: broadcast::Sender<Notice>,
    command_tx: mpsc::Sender<CommandEnvelope>,
    cancel: CancellationToken,
}

impl PropertySession {
    /// Open a session on an already-fetched property.
    ///
    /// Seeds the overview slice, resets the active tab to overview,
    /// spawns the command processor, and runs the initial refresh.
    /// Slice fetch failures degrade to notices; `open` itself does not
    /// fail on them.
    pub async fn open(client: Arc<AdminClient>, property: Property) -> Self {
        let (state, _) = watch::channel(SessionState::Idle);
        let (active_tab, _) = watch::channel(TabId::Overview);
        let (notice_tx, _) = broadcast::channel(NOTICE_CHANNEL_SIZE);
        let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_SIZE);
        let cancel = CancellationToken::new();

        let session = Self {
            inner: Arc::new(SessionInner {
                client,
                property_id: property.id,
                kinds: property.kinds.clone(),
                overview: ValueCell::new(),
                rooms: SliceCell::new(),
                gallery: SliceCell::new(),
                policies: ValueCell::new(),
                menu: SliceCell::new(),
                tables: SliceCell::new(),
                pricing: SliceCell::new(),
                events: SliceCell::new(),
                catalog: AmenityCatalog::new(),
                state,
                active_tab,
                notice_tx,
                command_tx,
                cancel,
            }),
        };

        session.inner.overview.replace(property);

        {
            let processor = session.clone();
            let cancel = session.inner.cancel.clone();
            tokio::spawn(command_processor_task(processor, command_rx, cancel));
        }

        debug!(property_id = session.inner.property_id, "session opened");
        session.refresh_all().await;
        session
    }

    /// Fetch a property by id and open a session on it.
    pub async fn open_by_id(
        client: Arc<AdminClient>,
        property_id: i64,
    ) -> Result<Self, CoreError> {
        let dto = client.get_property(property_id).await?;
        let property =
            convert::property_from_dto(dto).ok_or_else(|| CoreError::PropertyNotFound {
                identifier: property_id.to_string(),
            })?;
        Ok(Self::open(client, property).await)
    }

    pub fn property_id(&self) -> i64 {
        self.inner.property_id
    }

    pub fn kinds(&self) -> &[PropertyKind] {
        &self.inner.kinds
    }

    // ── Refresh ──────────────────────────────────────────────────────

    /// Fan out the primary refresh: rooms, gallery, and policies fetched
    /// concurrently. Each arm is caught independently; a failed slice
    /// emits exactly one notice and keeps its last-known value. One
    /// attempt, no retry. Completes to `Ready` even on partial failure.
    pub async fn refresh_all(&self) {
        if self.inner.cancel.is_cancelled() {
            return;
        }
        self.set_state(SessionState::Loading);

        let property_id = self.inner.property_id;
        let (rooms_res, gallery_res, policies_res) = tokio::join!(
            self.inner.client.list_rooms(property_id),
            self.fetch_gallery(),
            self.inner.client.get_property_policies(property_id),
        );

        // Stale responses must not land in a closed session.
        if self.inner.cancel.is_cancelled() {
            return;
        }

        match rooms_res {
            Ok(dtos) => {
                let rooms: Vec<Room> = dtos
                    .into_iter()
                    .filter_map(convert::room_from_dto)
                    .filter(|r| r.property_id.is_none_or(|pid| pid == property_id))
                    .collect();
                self.inner.rooms.replace_all(rooms);
            }
            Err(e) => self.notice(SliceKind::Rooms, &e),
        }

        match gallery_res {
            Ok(items) => self.inner.gallery.replace_all(items),
            Err(e) => self.notice(SliceKind::Gallery, &e),
        }

        match policies_res {
            Ok(dto) => self.inner.policies.replace(convert::policy_set_from_dto(dto)),
            Err(e) => self.notice(SliceKind::Policies, &e),
        }

        self.set_state(SessionState::Ready);
        debug!(
            property_id,
            rooms = self.inner.rooms.len(),
            gallery = self.inner.gallery.len(),
            "refresh complete"
        );
    }

    /// The contract handed to mutations: exactly one call on success,
    /// none on failure.
    pub async fn request_refresh(&self) {
        self.refresh_all().await;
    }

    /// Walk all gallery pages and keep only items belonging to this
    /// property. The `propertyId` filter is sent server-side, but older
    /// backend builds ignore it, so matching is repeated here with
    /// numeric id coercion.
    async fn fetch_gallery(&self) -> Result<Vec<GalleryItem>, hostly_api::Error> {
        let property_id = self.inner.property_id;
        let client = &self.inner.client;

        let dtos = client
            .paginate_all(client.page_size(), |page, size| {
                client.list_galleries(page, size, Some(property_id))
            })
            .await?;

        Ok(dtos
            .into_iter()
            .filter_map(convert::gallery_item_from_dto)
            .filter(|item| item.property_id == Some(property_id))
            .collect())
    }

    /// Fetch the global event list and keep events for this property
    /// that are active and not in the past. Undated events are kept.
    async fn fetch_events(&self) -> Result<Vec<VenueEvent>, hostly_api::Error> {
        let property_id = self.inner.property_id;
        let today = chrono::Utc::now().date_naive();

        let dtos = self.inner.client.list_events(Some(property_id)).await?;
        Ok(dtos
            .into_iter()
            .filter_map(convert::event_from_dto)
            .filter(|e| {
                e.active
                    && e.location_id == Some(property_id)
                    && e.date.is_none_or(|d| d >= today)
            })
            .collect())
    }

    // ── Tabs ─────────────────────────────────────────────────────────

    /// Tab set for this property's kinds.
    pub fn available_tabs(&self) -> Vec<TabId> {
        TabId::tabs_for(&self.inner.kinds)
    }

    /// Switch the active tab. A tab outside this property's set is
    /// rejected with [`CoreError::TabNotAvailable`]; the active tab is
    /// left unchanged.
    pub fn switch_tab(&self, tab: TabId) -> Result<(), CoreError> {
        if !self.available_tabs().contains(&tab) {
            return Err(CoreError::TabNotAvailable { tab });
        }
        // send() drops the value when no receiver is alive; the tab must
        // stick even without subscribers.
        self.inner.active_tab.send_replace(tab);
        Ok(())
    }

    pub fn active_tab(&self) -> TabId {
        *self.inner.active_tab.borrow()
    }

    /// Subscribe to active-tab changes.
    pub fn tab_changes(&self) -> watch::Receiver<TabId> {
        self.inner.active_tab.subscribe()
    }

    /// Load the slice behind a tab if it has never been loaded.
    ///
    /// The primary slices (rooms, gallery, policies) are covered by
    /// [`refresh_all()`](Self::refresh_all); this handles the on-demand
    /// tabs: amenity catalog, menu, tables, pricing, events.
    pub async fn ensure_loaded(&self, tab: TabId) -> Result<(), CoreError> {
        if self.inner.cancel.is_cancelled() {
            return Err(CoreError::SessionClosed);
        }

        match tab {
            TabId::Overview | TabId::Rooms | TabId::Gallery | TabId::Policies => Ok(()),
            TabId::Amenities => {
                if !self.inner.catalog.is_loaded() {
                    self.load_amenity_catalog().await?;
                }
                Ok(())
            }
            TabId::Menu => {
                if !self.inner.menu.is_loaded() {
                    self.refresh_menu().await?;
                }
                Ok(())
            }
            TabId::Tables => {
                if !self.inner.tables.is_loaded() {
                    self.refresh_tables().await?;
                }
                Ok(())
            }
            TabId::Pricing => {
                if !self.inner.pricing.is_loaded() {
                    self.refresh_pricing().await?;
                }
                Ok(())
            }
            TabId::Events => {
                if !self.inner.events.is_loaded() {
                    self.refresh_events().await?;
                }
                Ok(())
            }
        }
    }

    // ── On-demand slice refreshes ────────────────────────────────────

    /// Fetch the global amenity catalog into the shared lookup.
    pub async fn load_amenity_catalog(&self) -> Result<(), CoreError> {
        let features: Vec<AmenityFeature> = self
            .inner
            .client
            .list_amenity_features()
            .await?
            .into_iter()
            .map(convert::amenity_from_dto)
            .collect();

        if self.inner.cancel.is_cancelled() {
            return Err(CoreError::SessionClosed);
        }
        self.inner.catalog.replace(features);
        Ok(())
    }

    async fn refresh_menu(&self) -> Result<(), CoreError> {
        let property_id = self.inner.property_id;
        let items: Vec<MenuItem> = self
            .inner
            .client
            .list_menu_items(property_id)
            .await?
            .into_iter()
            .filter_map(convert::menu_item_from_dto)
            .filter(|m| m.property_id.is_none_or(|pid| pid == property_id))
            .collect();

        if self.inner.cancel.is_cancelled() {
            return Err(CoreError::SessionClosed);
        }
        self.inner.menu.replace_all(items);
        Ok(())
    }

    async fn refresh_tables(&self) -> Result<(), CoreError> {
        let property_id = self.inner.property_id;
        let tables: Vec<DiningTable> = self
            .inner
            .client
            .list_tables(property_id)
            .await?
            .into_iter()
            .filter_map(convert::table_from_dto)
            .filter(|t| t.property_id.is_none_or(|pid| pid == property_id))
            .collect();

        if self.inner.cancel.is_cancelled() {
            return Err(CoreError::SessionClosed);
        }
        self.inner.tables.replace_all(tables);
        Ok(())
    }

    async fn refresh_pricing(&self) -> Result<(), CoreError> {
        let property_id = self.inner.property_id;
        let seasons: Vec<PricingSeason> = self
            .inner
            .client
            .list_pricing_seasons(property_id)
            .await?
            .into_iter()
            .filter_map(convert::pricing_season_from_dto)
            .filter(|s| s.property_id.is_none_or(|pid| pid == property_id))
            .collect();

        if self.inner.cancel.is_cancelled() {
            return Err(CoreError::SessionClosed);
        }
        self.inner.pricing.replace_all(seasons);
        Ok(())
    }

    async fn refresh_events(&self) -> Result<(), CoreError> {
        let events = self.fetch_events().await?;
        if self.inner.cancel.is_cancelled() {
            return Err(CoreError::SessionClosed);
        }
        self.inner.events.replace_all(events);
        Ok(())
    }

    /// Refetch the property record itself into the overview slice.
    async fn refresh_overview(&self) -> Result<(), CoreError> {
        let property_id = self.inner.property_id;
        let dto = self.inner.client.get_property(property_id).await?;

        if self.inner.cancel.is_cancelled() {
            return Err(CoreError::SessionClosed);
        }
        if let Some(property) = convert::property_from_dto(dto) {
            self.inner.overview.replace(property);
        }
        Ok(())
    }

    // ── Command execution ────────────────────────────────────────────

    /// Execute a command against the open property.
    ///
    /// Validation runs first; an invalid command never reaches the
    /// backend. The command is then routed through the processor task,
    /// which serializes mutations and refreshes the affected scope on
    /// success.
    pub async fn execute(&self, cmd: Command) -> Result<CommandResult, CoreError> {
        if self.inner.cancel.is_cancelled() {
            return Err(CoreError::SessionClosed);
        }
        cmd.validate()?;

        let (tx, rx) = tokio::sync::oneshot::channel();
        self.inner
            .command_tx
            .send(CommandEnvelope {
                command: cmd,
                response_tx: tx,
            })
            .await
            .map_err(|_| CoreError::SessionClosed)?;

        rx.await.map_err(|_| CoreError::SessionClosed)?
    }

    /// Route a validated command to the backend.
    #[allow(clippy::too_many_lines)]
    async fn perform(&self, cmd: Command) -> Result<CommandResult, CoreError> {
        let client = &self.inner.client;
        let property_id = self.inner.property_id;

        match cmd {
            Command::UpdateProperty(req) => {
                let dto = client.update_property(property_id, &req.into_write()).await?;
                let property = convert::property_from_dto(dto).ok_or_else(|| {
                    CoreError::Internal("backend returned property with unusable id".into())
                })?;
                Ok(CommandResult::Property(property))
            }
            Command::EnableProperty => {
                client.enable_property(property_id).await?;
                Ok(CommandResult::Done)
            }
            Command::DisableProperty => {
                client.disable_property(property_id).await?;
                Ok(CommandResult::Done)
            }
            Command::SetAmenities { amenity_ids } => {
                client.set_property_amenities(property_id, &amenity_ids).await?;
                Ok(CommandResult::Done)
            }
            Command::CreateRoom(req) => {
                let dto = client.create_room(property_id, &req.into_write()).await?;
                let room = convert::room_from_dto(dto).ok_or_else(|| {
                    CoreError::Internal("backend returned room with unusable id".into())
                })?;
                Ok(CommandResult::Room(room))
            }
            Command::UpdateRoom { room_id, request } => {
                let dto = client.update_room(room_id, &request.into_write()).await?;
                let room = convert::room_from_dto(dto).ok_or_else(|| {
                    CoreError::Internal("backend returned room with unusable id".into())
                })?;
                Ok(CommandResult::Room(room))
            }
            Command::DeleteRoom { room_id } => {
                client.delete_room(room_id).await?;
                Ok(CommandResult::Done)
            }
            Command::AttachPolicies(req) => {
                client.attach_policies(&req.into_body(property_id)).await?;
                Ok(CommandResult::Done)
            }
            Command::UploadGalleryMedia(req) => {
                let dtos = client
                    .upload_gallery_media(property_id, &req.category.to_string(), req.files)
                    .await?;
                let items = dtos
                    .into_iter()
                    .filter_map(convert::gallery_item_from_dto)
                    .collect();
                Ok(CommandResult::GalleryItems(items))
            }
            Command::DeleteGalleryItem { gallery_id } => {
                client.delete_gallery_item(gallery_id).await?;
                Ok(CommandResult::Done)
            }
            Command::CreateMenuItem(req) => {
                let dto = client.create_menu_item(property_id, &req.into_write()).await?;
                let item = convert::menu_item_from_dto(dto).ok_or_else(|| {
                    CoreError::Internal("backend returned menu item with unusable id".into())
                })?;
                Ok(CommandResult::MenuItem(item))
            }
            Command::UpdateMenuItem { item_id, request } => {
                let dto = client.update_menu_item(item_id, &request.into_write()).await?;
                let item = convert::menu_item_from_dto(dto).ok_or_else(|| {
                    CoreError::Internal("backend returned menu item with unusable id".into())
                })?;
                Ok(CommandResult::MenuItem(item))
            }
            Command::DeleteMenuItem { item_id } => {
                client.delete_menu_item(item_id).await?;
                Ok(CommandResult::Done)
            }
            Command::CreateTable(req) => {
                let dto = client.create_table(property_id, &req.into_write()).await?;
                let table = convert::table_from_dto(dto).ok_or_else(|| {
                    CoreError::Internal("backend returned table with unusable id".into())
                })?;
                Ok(CommandResult::Table(table))
            }
            Command::UpdateTable { table_id, request } => {
                let dto = client.update_table(table_id, &request.into_write()).await?;
                let table = convert::table_from_dto(dto).ok_or_else(|| {
                    CoreError::Internal("backend returned table with unusable id".into())
                })?;
                Ok(CommandResult::Table(table))
            }
            Command::DeleteTable { table_id } => {
                client.delete_table(table_id).await?;
                Ok(CommandResult::Done)
            }
            Command::CreatePricingSeason(req) => {
                let dto = client
                    .create_pricing_season(property_id, &req.into_write())
                    .await?;
                let season = convert::pricing_season_from_dto(dto).ok_or_else(|| {
                    CoreError::Internal("backend returned season with unusable data".into())
                })?;
                Ok(CommandResult::PricingSeason(season))
            }
            Command::UpdatePricingSeason { season_id, request } => {
                let dto = client
                    .update_pricing_season(season_id, &request.into_write())
                    .await?;
                let season = convert::pricing_season_from_dto(dto).ok_or_else(|| {
                    CoreError::Internal("backend returned season with unusable data".into())
                })?;
                Ok(CommandResult::PricingSeason(season))
            }
            Command::DeletePricingSeason { season_id } => {
                client.delete_pricing_season(season_id).await?;
                Ok(CommandResult::Done)
            }
            Command::CreateEvent(req) => {
                let dto = client.create_event(&req.into_write(property_id)).await?;
                let event = convert::event_from_dto(dto).ok_or_else(|| {
                    CoreError::Internal("backend returned event with unusable id".into())
                })?;
                Ok(CommandResult::Event(event))
            }
            Command::DeleteEvent { event_id } => {
                client.delete_event(event_id).await?;
                Ok(CommandResult::Done)
            }
        }
    }

    /// Refresh the scope a successful command affected. Exactly one
    /// refresh per command; refresh failures degrade to notices.
    async fn refresh_scope(&self, scope: RefreshScope) {
        let result = match scope {
            RefreshScope::Primary => {
                self.refresh_all().await;
                Ok(())
            }
            RefreshScope::Overview => self.refresh_overview().await,
            RefreshScope::Menu => self.refresh_menu().await,
            RefreshScope::Tables => self.refresh_tables().await,
            RefreshScope::Pricing => self.refresh_pricing().await,
            RefreshScope::Events => self.refresh_events().await,
        };

        if let Err(e) = result {
            let kind = match scope {
                RefreshScope::Overview => SliceKind::Overview,
                RefreshScope::Menu => SliceKind::Menu,
                RefreshScope::Tables => SliceKind::Tables,
                RefreshScope::Pricing => SliceKind::Pricing,
                RefreshScope::Events => SliceKind::Events,
                RefreshScope::Primary => SliceKind::Overview,
            };
            self.notice(kind, &e);
        }
    }

    // ── Slice accessors ──────────────────────────────────────────────

    pub fn overview(&self) -> Option<Arc<Property>> {
        self.inner.overview.get()
    }

    pub fn policies(&self) -> Option<Arc<PolicySet>> {
        self.inner.policies.get()
    }

    pub fn rooms(&self) -> Arc<Vec<Arc<Room>>> {
        self.inner.rooms.snapshot()
    }

    pub fn gallery(&self) -> Arc<Vec<Arc<GalleryItem>>> {
        self.inner.gallery.snapshot()
    }

    pub fn menu(&self) -> Arc<Vec<Arc<MenuItem>>> {
        self.inner.menu.snapshot()
    }

    pub fn tables(&self) -> Arc<Vec<Arc<DiningTable>>> {
        self.inner.tables.snapshot()
    }

    pub fn pricing(&self) -> Arc<Vec<Arc<PricingSeason>>> {
        self.inner.pricing.snapshot()
    }

    pub fn events(&self) -> Arc<Vec<Arc<VenueEvent>>> {
        self.inner.events.snapshot()
    }

    pub fn amenity_catalog(&self) -> &AmenityCatalog {
        &self.inner.catalog
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_rooms(&self) -> SliceStream<Room> {
        self.inner.rooms.subscribe()
    }

    pub fn subscribe_gallery(&self) -> SliceStream<GalleryItem> {
        self.inner.gallery.subscribe()
    }

    pub fn subscribe_menu(&self) -> SliceStream<MenuItem> {
        self.inner.menu.subscribe()
    }

    /// Subscribe to session state changes.
    pub fn state(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    pub fn current_state(&self) -> SessionState {
        *self.inner.state.borrow()
    }

    /// Subscribe to degradation notices.
    pub fn notices(&self) -> broadcast::Receiver<Notice> {
        self.inner.notice_tx.subscribe()
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Close the session. Cancels in-flight work; late responses from
    /// already-started fetches are discarded rather than applied.
    pub fn close(&self) {
        self.inner.cancel.cancel();
        self.inner.state.send_replace(SessionState::Idle);
        debug!(property_id = self.inner.property_id, "session closed");
    }

    pub fn is_closed(&self) -> bool {
        self.inner.cancel.is_cancelled()
    }

    // ── Internals ────────────────────────────────────────────────────

    fn set_state(&self, next: SessionState) {
        self.inner.state.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    fn notice(&self, slice: SliceKind, error: &dyn std::fmt::Display) {
        let message = error.to_string();
        warn!(%slice, %message, "slice refresh failed");
        let _ = self.inner.notice_tx.send(Notice { slice, message });
    }
}

// ── Command processor ────────────────────────────────────────────────

/// Serializes mutations for one session: `Mutating` state, backend
/// call, one refresh of the affected scope on success, notice on
/// failure. Exits when the session closes.
async fn command_processor_task(
    session: PropertySession,
    mut rx: mpsc::Receiver<CommandEnvelope>,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            envelope = rx.recv() => {
                let Some(CommandEnvelope { command, response_tx }) = envelope else {
                    break;
                };

                session.set_state(SessionState::Mutating);
                let slice = command.slice();
                let scope = command.refresh_scope();

                let result = match session.perform(command).await {
                    Ok(res) => {
                        session.refresh_scope(scope).await;
                        Ok(res)
                    }
                    Err(e) => {
                        session.notice(slice, &e);
                        Err(e)
                    }
                };

                session.set_state(SessionState::Ready);
                let _ = response_tx.send(result);
            }
        }
    }
}
