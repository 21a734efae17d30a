use std::sync::{Arc, Mutex};
use std::time::Duration;

use pitchmap_content::coords::{resolve_positions, CoordinateSource};
use pitchmap_content::readiness::await_directory_ready;
use pitchmap_protocol::directory::{FilterPanel, SidebarHost, TeamDirectory};
use pitchmap_protocol::event::MapEvent;
use pitchmap_protocol::geo::ViewportSize;
use pitchmap_protocol::ids::TeamSlug;
use pitchmap_protocol::profile::WidgetTuning;
use pitchmap_protocol::surface::{MapEventSource, MapSurface};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::camera::CameraController;
use crate::debounce::Debouncer;
use crate::filters::FilterController;
use crate::geometry::cluster_threshold;
use crate::markers::MarkerLayer;
use crate::selection::SelectionController;
use crate::sidebar::SidebarController;
use crate::state::{ViewportState, WidgetSessionState};

/// The owned widget handle: wires the mapping surface, the team directory,
/// the sidebar, and the filter panel together, and runs the surface event
/// loop that keeps them consistent. One instance per map container.
pub struct MapWidget {
    events: Arc<dyn MapEventSource>,
    directory: Arc<dyn TeamDirectory>,
    coordinates: Arc<dyn CoordinateSource>,
    selection: Arc<SelectionController>,
    camera: Arc<CameraController>,
    sidebar: Arc<SidebarController>,
    filters: Arc<FilterController>,
    markers: Arc<MarkerLayer>,
    viewport: Arc<ViewportState>,
    tuning: WidgetTuning,
    session: Mutex<WidgetSessionState>,
    resize_debounce: Arc<Debouncer>,
    ingest_task: Mutex<Option<JoinHandle<()>>>,
}

struct EventContext {
    directory: Arc<dyn TeamDirectory>,
    selection: Arc<SelectionController>,
    camera: Arc<CameraController>,
    sidebar: Arc<SidebarController>,
    markers: Arc<MarkerLayer>,
    viewport: Arc<ViewportState>,
    resize_debounce: Arc<Debouncer>,
}

impl MapWidget {
    pub fn new<S>(
        surface: Arc<S>,
        directory: Arc<dyn TeamDirectory>,
        sidebar_host: Arc<dyn SidebarHost>,
        filter_panel: Arc<dyn FilterPanel>,
        coordinates: Arc<dyn CoordinateSource>,
        tuning: WidgetTuning,
        initial_viewport: ViewportSize,
    ) -> Self
    where
        S: MapSurface + 'static,
    {
        let viewport = Arc::new(ViewportState::new(initial_viewport));
        let selection = Arc::new(SelectionController::new(directory.clone(), surface.clone()));
        let camera = Arc::new(CameraController::new(
            surface.clone(),
            viewport.clone(),
            tuning.camera,
            tuning.layout,
            tuning.pitch,
        ));
        let sidebar = Arc::new(SidebarController::new(sidebar_host, viewport.clone()));
        let filters = Arc::new(FilterController::new(filter_panel, tuning.filter.clone()));
        let markers = Arc::new(MarkerLayer::new(
            surface.clone(),
            surface.clone(),
            tuning.cluster,
        ));
        let resize_debounce = Arc::new(Debouncer::new(Duration::from_millis(
            tuning.resize.debounce_ms,
        )));
        let events: Arc<dyn MapEventSource> = surface;

        Self {
            events,
            directory,
            coordinates,
            selection,
            camera,
            sidebar,
            filters,
            markers,
            viewport,
            tuning,
            session: Mutex::new(WidgetSessionState::default()),
            resize_debounce,
            ingest_task: Mutex::new(None),
        }
    }

    /// First call initializes the widget: subscribes to surface events,
    /// applies the initial padding, waits for the content layer, resolves
    /// coordinates, builds markers, and binds filters. Later calls clear
    /// filters, reset the view revealing the sidebar, and resize the surface
    /// after a short delay for the reopened container.
    pub async fn open(&self) {
        let first_open = {
            let mut session = self.session.lock().expect("widget session lock poisoned");
            if session.surface_ready {
                false
            } else {
                session.surface_ready = true;
                true
            }
        };

        if first_open {
            info!("initializing map widget");
            self.start_event_ingestion().await;
            self.camera.apply_padding().await;
            self.load_content().await;
        } else {
            debug!("widget already initialized; clearing filters and resetting view");
            self.filters.clear_all();
            self.selection.deselect().await;
            self.camera.reset_view(true).await;
            self.schedule_reopen_resize();
        }
    }

    pub async fn reset_view(&self) {
        self.selection.deselect().await;
        self.filters.show_capacity_badge();
        self.camera.reset_view(false).await;
    }

    /// The per-team "fly to marker" control: selects the team and focuses its
    /// pitch, exactly like clicking its marker.
    pub async fn fly_to_team(&self, slug: &TeamSlug) {
        let Some(team) = self.directory.team(slug) else {
            warn!(team = slug.as_str(), "cannot fly to unknown team");
            return;
        };
        let Some(position) = team.position else {
            warn!(team = slug.as_str(), "cannot fly to team without a position");
            return;
        };
        self.selection.select(slug).await;
        self.camera.focus_team(position).await;
    }

    pub async fn open_team_info(&self, slug: &TeamSlug) {
        self.selection.select(slug).await;
    }

    pub async fn close_team_info(&self, slug: &TeamSlug) {
        if self.selection.selected().as_ref() == Some(slug) {
            self.selection.deselect().await;
        } else {
            self.directory.set_info_panel_open(slug, false);
        }
    }

    pub fn toggle_team_info(&self, slug: &TeamSlug) {
        self.selection.toggle_info(slug);
    }

    pub async fn show_sidebar(&self) {
        self.sidebar.show();
        self.camera.apply_padding().await;
    }

    pub async fn hide_sidebar(&self) {
        self.sidebar.hide();
        self.camera.apply_padding().await;
    }

    pub async fn toggle_sidebar(&self) {
        self.sidebar.toggle();
        self.camera.apply_padding().await;
    }

    pub async fn toggle_gestures(&self) -> bool {
        self.camera.toggle_gestures().await
    }

    /// Applies the featured preset once content and filters are ready; until
    /// then the request is remembered and replayed after binding.
    pub fn apply_featured_filter(&self) {
        {
            let mut session = self.session.lock().expect("widget session lock poisoned");
            if !(session.content_loaded && session.filters_bound) {
                session.featured_filter_pending = true;
                debug!("featured filter deferred until content and filters are ready");
                return;
            }
        }
        self.filters.apply_featured();
    }

    pub fn clear_filters(&self) {
        self.filters.clear_all();
    }

    /// Hook for the filter panel's own apply control: keeps the capacity
    /// badge in step with the featured preset.
    pub fn refresh_filter_badge(&self) {
        self.filters.refresh_capacity_badge();
    }

    pub fn session(&self) -> WidgetSessionState {
        *self.session.lock().expect("widget session lock poisoned")
    }

    /// Whether reactive pitch recalculation is currently suppressed by an
    /// in-flight programmatic transition or touch gesture.
    pub fn pitch_suppressed(&self) -> bool {
        self.camera.pitch_suppressed()
    }

    pub fn selected_team(&self) -> Option<TeamSlug> {
        self.selection.selected()
    }

    pub fn close(&self) {
        if let Some(task) = self
            .ingest_task
            .lock()
            .expect("widget ingest task lock poisoned")
            .take()
        {
            task.abort();
        }
        self.resize_debounce.cancel();
    }

    async fn load_content(&self) {
        match await_directory_ready(self.directory.as_ref(), &self.tuning.content).await {
            Ok(count) => {
                info!(teams = count, "directory content ready");
                self.session
                    .lock()
                    .expect("widget session lock poisoned")
                    .content_loaded = true;

                let teams =
                    resolve_positions(self.coordinates.as_ref(), self.directory.teams()).await;
                for team in &teams {
                    if let Some(position) = team.position {
                        self.directory.record_position(&team.slug, position);
                    }
                }
                let threshold = cluster_threshold(
                    &self.tuning.cluster,
                    &self.tuning.layout,
                    self.viewport.size().width,
                );
                self.markers.build(&teams, threshold).await;
                if let Some(zoom) = self.camera.current_zoom().await {
                    self.markers.apply_zoom_visibility(zoom).await;
                }

                let replay_featured = {
                    let mut session = self.session.lock().expect("widget session lock poisoned");
                    if self.filters.bind() {
                        session.filters_bound = true;
                    }
                    session.filters_bound && std::mem::take(&mut session.featured_filter_pending)
                };
                if replay_featured {
                    self.filters.apply_featured();
                }
            }
            Err(error) => {
                warn!(%error, "directory content never became ready; markers unavailable");
            }
        }
    }

    async fn start_event_ingestion(&self) {
        let mut stream = match self.events.subscribe().await {
            Ok(stream) => stream,
            Err(error) => {
                warn!(%error, "map surface event subscription failed");
                return;
            }
        };

        let context = EventContext {
            directory: self.directory.clone(),
            selection: self.selection.clone(),
            camera: self.camera.clone(),
            sidebar: self.sidebar.clone(),
            markers: self.markers.clone(),
            viewport: self.viewport.clone(),
            resize_debounce: self.resize_debounce.clone(),
        };

        let task = tokio::spawn(async move {
            loop {
                match stream.next_event().await {
                    Ok(Some(event)) => dispatch_event(&context, event).await,
                    Ok(None) => {
                        info!("map surface event stream closed");
                        break;
                    }
                    Err(error) => {
                        warn!(%error, "map surface event stream failed");
                        break;
                    }
                }
            }
        });

        let mut slot = self
            .ingest_task
            .lock()
            .expect("widget ingest task lock poisoned");
        if let Some(previous) = slot.replace(task) {
            previous.abort();
        }
    }

    fn schedule_reopen_resize(&self) {
        let camera = Arc::clone(&self.camera);
        let delay = Duration::from_millis(self.tuning.resize.reopen_delay_ms);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            camera.resize_surface().await;
        });
    }
}

impl Drop for MapWidget {
    fn drop(&mut self) {
        self.close();
    }
}

async fn dispatch_event(context: &EventContext, event: MapEvent) {
    match event {
        MapEvent::MarkerClicked(event) => {
            let Some(team) = context.directory.team(&event.slug) else {
                warn!(team = event.slug.as_str(), "marker click for unknown team");
                return;
            };
            let Some(position) = team.position else {
                warn!(team = event.slug.as_str(), "marker click for team without a position");
                return;
            };
            context.selection.select(&event.slug).await;
            context.camera.focus_team(position).await;
        }
        MapEvent::ClusterClicked(event) => {
            if let Some(expansion_zoom) =
                context.markers.cluster_expansion_target(event.cluster).await
            {
                context.camera.focus_cluster(event.center, expansion_zoom).await;
            }
        }
        MapEvent::ZoomChanged(event) => {
            context.camera.handle_zoom_changed(event.zoom).await;
            context.markers.apply_zoom_visibility(event.zoom).await;
        }
        MapEvent::MoveEnded(event) => {
            let follow_up = context.camera.handle_move_end(event.transition);
            if follow_up.reveal_sidebar {
                context.sidebar.show();
            }
            if follow_up.reapply_padding || follow_up.reveal_sidebar {
                context.camera.apply_padding().await;
            }
        }
        MapEvent::TouchGestureStarted => context.camera.begin_touch_gesture(),
        MapEvent::TouchGestureEnded => context.camera.end_touch_gesture(),
        MapEvent::ViewportResized(event) => {
            context.viewport.set_size(event.viewport);
            context.camera.resize_surface().await;
            let camera = Arc::clone(&context.camera);
            context
                .resize_debounce
                .schedule(async move { camera.apply_padding().await });
        }
    }
}
