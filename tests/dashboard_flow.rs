//! End-to-end dashboard scenarios against a scripted sales API.

use async_trait::async_trait;
use repmap::{
    data::api::parse_roster,
    views::{
        chat::{ChatSession, APOLOGY},
        dashboard::{DashboardEvent, LOAD_FAILURE_BANNER},
    },
    Dashboard, DashboardConfig, Error, ListView, Point, Result, SalesApi, SalesRep,
    SessionStore, Viewport,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct ScriptedApi {
    rosters: Mutex<VecDeque<(Duration, Result<Vec<SalesRep>>)>>,
    answer: Option<String>,
}

impl ScriptedApi {
    fn new(rosters: Vec<(Duration, Result<Vec<SalesRep>>)>) -> Arc<Self> {
        Arc::new(Self {
            rosters: Mutex::new(rosters.into()),
            answer: None,
        })
    }
}

#[async_trait]
impl SalesApi for ScriptedApi {
    async fn fetch_roster(&self) -> Result<Vec<SalesRep>> {
        let next = self.rosters.lock().unwrap().pop_front();
        match next {
            Some((delay, result)) => {
                tokio::time::sleep(delay).await;
                result
            }
            None => Err(Error::Network("no scripted response".into())),
        }
    }

    async fn ask(&self, _question: &str) -> Result<Option<String>> {
        match &self.answer {
            Some(answer) => Ok(Some(answer.clone())),
            None => Err(Error::Status { status: 502 }),
        }
    }
}

fn roster() -> Vec<SalesRep> {
    parse_roster(
        r#"{
            "success": true,
            "data": {
                "salesReps": [
                    {"id": 1, "name": "Alice", "role": "Senior Sales Executive", "region": "Europe",
                     "clients": [{"name": "Acme Corp", "industry": "Manufacturing", "contact": "a@acme.com"}],
                     "deals": [{"client": "Acme Corp", "value": 120000, "status": "Closed Won"}]},
                    {"id": 2, "name": "Bob", "role": "Account Manager", "region": "Europe"},
                    {"id": 3, "name": "Carla", "role": "Account Manager", "region": "Asia-Pacific"},
                    {"id": 4, "name": "Dan", "role": "Sales Rep", "region": "Antarctica"}
                ]
            },
            "message": "ok"
        }"#,
    )
    .unwrap()
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[tokio::test(start_paused = true)]
async fn test_initial_load_waits_for_floor() {
    let mut dashboard = Dashboard::default();
    let api = ScriptedApi::new(vec![(Duration::ZERO, Ok(roster()))]);
    let started = tokio::time::Instant::now();

    let task = tokio::spawn(dashboard.roster_task(api));
    tokio::time::sleep(ms(500)).await;
    assert!(dashboard.load_state().is_loading());
    assert!(dashboard.markers().is_empty());

    task.await.unwrap();
    assert!(started.elapsed() >= ms(1000));
    assert!(dashboard.loading_gate().state().is_ready());
    assert!(dashboard.load_state().is_loading());

    dashboard.process_pending(instant::Instant::now());
    assert!(dashboard.load_state().is_ready());
    let markers = dashboard.markers();
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].coordinate, Point::new(10.0, 50.0));
    assert_eq!(markers[1].coordinate, Point::new(110.0, 15.0));

    // The unmapped rep has no marker but is still listed
    match dashboard.list_view() {
        ListView::Grouped(groups) => {
            let regions: Vec<&str> = groups.iter().map(|g| g.region).collect();
            assert_eq!(regions, vec!["Europe", "Asia-Pacific", "Antarctica"]);
        }
        other => panic!("expected grouped view, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_failed_refresh_keeps_data() {
    let mut dashboard = Dashboard::default();
    let api = ScriptedApi::new(vec![
        (ms(50), Ok(roster())),
        (ms(50), Err(Error::Status { status: 503 })),
    ]);

    let now = instant::Instant::now();
    dashboard.roster_task(api.clone()).await;
    dashboard.process_pending(now);
    assert_eq!(dashboard.reps().len(), 4);

    dashboard.handle(DashboardEvent::SelectRegion(Some("Europe".into())), now);
    dashboard.handle(DashboardEvent::Next, now);
    assert_eq!(dashboard.selection().active_index(), 1);

    let started = tokio::time::Instant::now();
    dashboard.roster_task(api).await;
    assert!(started.elapsed() < ms(1000));
    dashboard.process_pending(now);

    assert_eq!(dashboard.selection().selected_region(), Some("Europe"));
    assert_eq!(dashboard.selection().active_index(), 1);
    match dashboard.list_view() {
        ListView::Carousel(carousel) => assert_eq!(carousel.current().name, "Bob"),
        other => panic!("expected carousel, got {:?}", other),
    }
    assert_eq!(dashboard.reps().len(), 4);
    assert_eq!(dashboard.markers().len(), 2);
    assert_eq!(dashboard.error_banner(), Some(LOAD_FAILURE_BANNER));
    assert_eq!(
        dashboard.load_state().error(),
        Some("Request failed with status 503")
    );
}

#[tokio::test(start_paused = true)]
async fn test_outcome_not_reported_before_applied() {
    let mut dashboard = Dashboard::default();
    let api = ScriptedApi::new(vec![
        (ms(10), Ok(roster())),
        (ms(10), Err(Error::Status { status: 503 })),
    ]);

    dashboard.roster_task(api.clone()).await;
    assert!(dashboard.load_state().is_loading());
    assert!(dashboard.reps().is_empty());

    dashboard.process_pending(instant::Instant::now());
    assert!(dashboard.load_state().is_ready());
    assert!(!dashboard.list_view().is_empty());

    dashboard.roster_task(api).await;
    assert!(dashboard.load_state().is_loading());
    assert_eq!(dashboard.load_state().error(), None);
    assert_eq!(dashboard.error_banner(), None);

    dashboard.process_pending(instant::Instant::now());
    assert!(dashboard.load_state().error().is_some());
    assert_eq!(dashboard.error_banner(), Some(LOAD_FAILURE_BANNER));
}

#[tokio::test(start_paused = true)]
async fn test_stale_roster_never_overwrites_newer() {
    let mut dashboard = Dashboard::default();
    let mut newer = roster();
    newer.truncate(1);
    let slow = ScriptedApi::new(vec![(ms(3000), Ok(roster()))]);
    let fast = ScriptedApi::new(vec![(ms(100), Ok(newer))]);

    let slow_task = dashboard.roster_task(slow);
    let fast_task = dashboard.roster_task(fast);
    tokio::join!(slow_task, fast_task);
    assert_eq!(dashboard.process_pending(instant::Instant::now()), 2);

    assert_eq!(dashboard.reps().len(), 1);
    assert_eq!(dashboard.reps()[0].name, "Alice");
    assert!(dashboard.load_state().is_ready());
}

#[test]
fn test_selecting_same_region_twice() {
    let mut dashboard = Dashboard::default();
    let start = instant::Instant::now();
    dashboard.handle(DashboardEvent::RosterLoaded(repmap::LoadOutcome::Fresh(roster())), start);

    let first = dashboard.select_region(Some("Europe"), start);
    assert!(first.animation_started);
    let europe = Viewport::new(Point::new(10.0, 50.0), 3.0);
    assert_eq!(first.viewport_target, Some(europe));

    dashboard.handle(DashboardEvent::Next, start);
    assert_eq!(dashboard.selection().active_index(), 1);

    let second = dashboard.select_region(Some("Europe"), start + ms(300));
    assert!(!second.animation_started);
    assert_eq!(second.viewport_target, None);
    assert_eq!(dashboard.selection().active_index(), 0);

    assert_eq!(dashboard.tick(start + ms(1000)), europe);
}

#[test]
fn test_reset_mid_animation_lands_on_world() {
    let mut dashboard = Dashboard::default();
    let start = instant::Instant::now();
    dashboard.handle(DashboardEvent::RosterLoaded(repmap::LoadOutcome::Fresh(roster())), start);

    dashboard.handle(DashboardEvent::SelectRegion(Some("Asia-Pacific".into())), start);
    for frame in 1..20 {
        dashboard.tick(start + ms(frame * 16));
    }
    dashboard.handle(DashboardEvent::SelectRegion(Some("Europe".into())), start + ms(320));
    dashboard.tick(start + ms(500));
    dashboard.handle(DashboardEvent::Reset, start + ms(500));

    assert!(dashboard.selection().selected_region().is_none());
    assert_eq!(dashboard.tick(start + ms(1500)), Viewport::world());
    assert_eq!(dashboard.viewport().center, Point::new(10.0, 10.0));
    assert_eq!(dashboard.viewport().zoom(), 1.0);
}

#[test]
fn test_unknown_region_filters_list_only() {
    let mut dashboard = Dashboard::new(DashboardConfig::default());
    let now = instant::Instant::now();
    dashboard.handle(DashboardEvent::RosterLoaded(repmap::LoadOutcome::Fresh(roster())), now);

    let change = dashboard.select_region(Some("Antarctica"), now);
    assert_eq!(change.viewport_target, None);
    assert!(!dashboard.is_animating());
    match dashboard.list_view() {
        ListView::Carousel(carousel) => assert_eq!(carousel.current().name, "Dan"),
        other => panic!("expected carousel, got {:?}", other),
    }
}

#[tokio::test]
async fn test_chat_transcript_survives_within_session() {
    let mut store = SessionStore::new();
    let api = ScriptedApi {
        rosters: Mutex::new(VecDeque::new()),
        answer: Some("Alice closed the most deals.".into()),
    };

    let mut chat = ChatSession::restore(&store);
    chat.ask(&api, "Who closed the most deals?").await.unwrap();
    chat.persist(&mut store).unwrap();

    let failing = ScriptedApi {
        rosters: Mutex::new(VecDeque::new()),
        answer: None,
    };
    let mut chat = ChatSession::restore(&store);
    assert_eq!(chat.transcript().len(), 2);
    let reply = chat.ask(&failing, "And in Europe?").await.unwrap().unwrap();
    assert_eq!(reply.text, APOLOGY);
    assert!(reply.is_error);

    store.end();
    assert!(ChatSession::restore(&store).transcript().is_empty());
}
