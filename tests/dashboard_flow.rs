use async_trait::async_trait;
use chrono::{Duration, FixedOffset, TimeZone, Utc};
use daybook::dashboard::{Dashboard, KeyEvent};
use daybook::notify::{NotificationTiming, Notifier, Phase};
use daybook::render::TodoListView;
use daybook::store::{
    FileStore, KeyValueStore, MemoryStore, NOTES_KEY, PROFILE_KEY, THEME_KEY, TODOS_KEY,
};
use daybook::weather::{
    Coordinates, FixedLocation, Geolocator, WeatherError, WeatherProvider, WeatherReading,
    WeatherService,
};
use daybook::Theme;
use std::sync::Arc;
use tempfile::tempdir;

struct RejectingProvider;

#[async_trait]
impl WeatherProvider for RejectingProvider {
    fn name(&self) -> &str {
        "rejecting"
    }

    async fn current(&self, _coords: Coordinates) -> Result<WeatherReading, WeatherError> {
        Err(WeatherError::Api {
            status: 503,
            message: "down".to_string(),
        })
    }
}

struct DeniedLocation;

#[async_trait]
impl Geolocator for DeniedLocation {
    fn name(&self) -> &str {
        "denied"
    }

    async fn locate(&self) -> Result<Coordinates, WeatherError> {
        Err(WeatherError::PermissionDenied)
    }
}

struct SnowProvider;

#[async_trait]
impl WeatherProvider for SnowProvider {
    fn name(&self) -> &str {
        "snow"
    }

    async fn current(&self, _coords: Coordinates) -> Result<WeatherReading, WeatherError> {
        Ok(WeatherReading::from_conditions("Snow", "light snow", 28.6, "Oslo"))
    }
}

fn memory_dashboard() -> (Dashboard, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let dashboard = Dashboard::new(store.clone(), WeatherService::offline(), Notifier::default());
    (dashboard, store)
}

#[test]
fn empty_storage_renders_placeholder_then_first_item() {
    let (mut dashboard, _) = memory_dashboard();

    let view = dashboard.view();
    assert!(view.todos.is_placeholder());
    assert_eq!(view.todo_summary.total, 0);

    let item = dashboard.add_todo("Buy milk").unwrap();
    assert!(item.id > 0);
    assert!(!item.completed);

    match dashboard.view().todos {
        TodoListView::Items { rows } => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].text_html, "Buy milk");
            assert!(!rows[0].completed);
        }
        other => panic!("expected rows, got {:?}", other),
    }
}

#[test]
fn every_todo_mutation_is_written_through() {
    let (mut dashboard, store) = memory_dashboard();

    let first = dashboard.add_todo("one").unwrap();
    let second = dashboard.add_todo("two").unwrap();
    assert!(second.id > first.id);

    dashboard.toggle_todo(second.id);
    let stored: serde_json::Value = serde_json::from_str(&store.get(TODOS_KEY).unwrap()).unwrap();
    assert_eq!(stored[1]["completed"], true);
    assert!(stored[0]["createdAt"].is_string());

    dashboard.delete_todo(first.id);
    let stored: serde_json::Value = serde_json::from_str(&store.get(TODOS_KEY).unwrap()).unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 1);
    assert_eq!(stored[0]["text"], "two");
}

#[test]
fn rapid_adds_get_strictly_increasing_ids() {
    let (mut dashboard, _) = memory_dashboard();

    let ids: Vec<i64> = (0..50)
        .map(|i| dashboard.add_todo(&format!("task {}", i)).unwrap().id)
        .collect();

    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn todo_text_is_escaped_in_the_view() {
    let (mut dashboard, _) = memory_dashboard();
    dashboard.add_todo("<b>x</b>");

    let html = dashboard.view().todos.to_html();
    assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
    assert!(!html.contains("<b>x</b>"));
}

#[tokio::test]
async fn rejecting_weather_provider_yields_fallback() {
    let store = Arc::new(MemoryStore::new());
    let service = WeatherService::new(
        Arc::new(FixedLocation::new(Coordinates::new(40.7, -74.0))),
        Arc::new(RejectingProvider),
    );
    let mut dashboard = Dashboard::new(store, service, Notifier::default());

    let reading = dashboard.refresh_weather().await.clone();
    assert_eq!(reading.temperature_f, 72);
    assert_eq!(reading.description, "Sunny");
    assert_eq!(reading.location_name, "New York, NY");
}

#[tokio::test]
async fn denied_geolocation_yields_fallback() {
    let service = WeatherService::new(Arc::new(DeniedLocation), Arc::new(SnowProvider));
    assert_eq!(service.current().await, WeatherReading::fallback());
}

#[tokio::test]
async fn live_weather_reaches_the_view() {
    let store = Arc::new(MemoryStore::new());
    let service = WeatherService::new(
        Arc::new(FixedLocation::new(Coordinates::new(59.9, 10.7))),
        Arc::new(SnowProvider),
    );
    let mut dashboard = Dashboard::new(store, service, Notifier::default());
    dashboard.refresh_weather().await;

    let view = dashboard.view();
    assert_eq!(view.weather.icon, "snowflake");
    assert_eq!(view.weather.temperature, "29°F");
    assert_eq!(view.weather.description, "Light snow");
    assert_eq!(view.weather.location, "Oslo");
}

#[test]
fn file_store_state_survives_reopen() {
    let dir = tempdir().unwrap();

    {
        let store = Arc::new(FileStore::open(dir.path()).unwrap());
        let mut dashboard = Dashboard::new(store, WeatherService::offline(), Notifier::default());
        dashboard.add_todo("Water plants");
        dashboard.save_notes("remember the keys");
        dashboard.save_profile("Ada", "London");
        dashboard.toggle_theme();
        dashboard.shutdown();
    }

    let store = Arc::new(FileStore::open(dir.path()).unwrap());
    let dashboard = Dashboard::new(store, WeatherService::offline(), Notifier::default());

    assert_eq!(dashboard.todos().len(), 1);
    assert_eq!(dashboard.todos()[0].text, "Water plants");
    assert_eq!(dashboard.notes(), "remember the keys");
    assert_eq!(dashboard.profile().name, "Ada");
    assert_eq!(dashboard.profile().location.as_deref(), Some("London"));
    assert_eq!(dashboard.theme(), Theme::Dark);
}

#[test]
fn corrupt_stored_values_load_as_defaults() {
    let store = Arc::new(MemoryStore::with_entries([
        (TODOS_KEY, "[{not json"),
        (PROFILE_KEY, "{\"name\":"),
        (THEME_KEY, "purple"),
    ]));
    let dashboard = Dashboard::new(store, WeatherService::offline(), Notifier::default());

    assert!(dashboard.todos().is_empty());
    assert!(!dashboard.profile().is_set());
    assert_eq!(dashboard.theme(), Theme::Light);
    assert_eq!(dashboard.notes(), "");
}

#[test]
fn blank_profile_name_keeps_stored_profile() {
    let (mut dashboard, store) = memory_dashboard();
    dashboard.save_profile("Ada", "London");
    let before = store.get(PROFILE_KEY);

    assert!(dashboard.save_profile("", "NYC").is_none());
    assert_eq!(store.get(PROFILE_KEY), before);
}

#[test]
fn notes_auto_save_on_every_input() {
    let (mut dashboard, store) = memory_dashboard();

    dashboard.notes_input("a");
    dashboard.notes_input("ab");
    assert_eq!(store.get(NOTES_KEY).as_deref(), Some("ab"));
    assert!(dashboard.notifier().is_empty());
}

#[test]
fn notifications_leave_then_disappear() {
    let notifier = Notifier::new(NotificationTiming::default());
    let created = Utc::now();
    notifier.emit_at("Task added!", daybook::Severity::Success, created);

    let active = notifier.active(created + Duration::milliseconds(2999));
    assert_eq!(active[0].phase, Phase::Visible);

    let active = notifier.active(created + Duration::milliseconds(3000));
    assert_eq!(active[0].phase, Phase::Leaving);

    assert!(notifier.active(created + Duration::milliseconds(3300)).is_empty());
    assert_eq!(notifier.prune(created + Duration::milliseconds(3300)), 1);
}

#[test]
fn keyboard_shortcuts_drive_panels() {
    let (mut dashboard, _) = memory_dashboard();

    dashboard.handle_key(&KeyEvent::new("k").with_ctrl());
    assert!(dashboard.panels().search_open);
    dashboard.handle_key(&KeyEvent::new("k").with_meta());
    assert!(!dashboard.panels().search_open);

    dashboard.show_profile_modal();
    dashboard.handle_key(&KeyEvent::new("Escape"));
    assert!(!dashboard.panels().profile_modal_open);
}

#[test]
fn greeting_follows_the_hour() {
    let (dashboard, _) = memory_dashboard();
    let tz = FixedOffset::west_opt(5 * 3600).unwrap();

    let at = |hour| tz.with_ymd_and_hms(2026, 10, 19, hour, 0, 0).unwrap();
    assert_eq!(dashboard.view_at(&at(11)).header.greeting, "Good morning");
    assert_eq!(dashboard.view_at(&at(12)).header.greeting, "Good afternoon");
    assert_eq!(dashboard.view_at(&at(17)).header.greeting, "Good evening");
    assert_eq!(
        dashboard.view_at(&at(17)).clock.date,
        "Monday, October 19, 2026"
    );
}
