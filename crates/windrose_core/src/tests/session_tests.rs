use super::*;

use std::{
    cell::Cell,
    env, fs,
    rc::Rc,
    time::{SystemTime, UNIX_EPOCH},
};

/// Hands out sequential ids and tracks how many are still alive.
#[derive(Default)]
struct CountingRenderer {
    next_id: usize,
    live: Rc<Cell<usize>>,
}

impl ChartRenderer for CountingRenderer {
    type Handle = usize;

    fn render(&mut self, _chart: &Chart) -> usize {
        self.next_id += 1;
        self.live.set(self.live.get() + 1);
        self.next_id
    }

    fn dispose(&mut self, _handle: usize) {
        self.live.set(self.live.get() - 1);
    }
}

fn temp_json(name: &str, contents: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("windrose_session_test_{name}_{suffix}"));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("input.json");
    fs::write(&path, contents).expect("write input");
    path
}

fn record(time: &str) -> String {
    format!(
        r#"{{"date":"2024-01-01","time":"{time}","data":[{{"speed_kph":10,"direction":"N"}},{{"speed_kph":5,"direction":"E"}},{{"speed_kph":0,"direction":"S"}},{{"speed_kph":20,"direction":"W"}},{{"speed_kph":15,"direction":"NE"}}]}}"#
    )
}

fn dataset(times: &[&str]) -> String {
    let records: Vec<_> = times.iter().map(|time| record(time)).collect();
    format!(r#"{{"windrose":[{}]}}"#, records.join(","))
}

fn assert_cursor_invariant<R: ChartRenderer>(session: &Session<R>) {
    match session.current_index() {
        Some(index) => assert!(index < session.charts().len()),
        None => assert!(session.charts().is_empty()),
    }
}

#[test]
fn starts_empty_with_only_select_enabled() {
    let session = Session::new(CountingRenderer::default());
    assert_eq!(session.phase(), SessionPhase::Empty);
    assert_eq!(session.current_index(), None);
    assert_eq!(
        session.controls(),
        ControlState {
            select: true,
            generate: false,
            clear: false,
            previous: false,
            next: false,
        }
    );
}

#[test]
fn select_without_path_is_no_file_selected() {
    let mut session = Session::new(CountingRenderer::default());
    let err = session.select_file(None).expect_err("no path");
    assert!(matches!(err, WindroseError::NoFileSelected));
    assert_eq!(session.phase(), SessionPhase::Empty);
}

#[test]
fn select_rejects_invalid_json_and_keeps_previous_path() {
    let good = temp_json("keep_good", &dataset(&["00:00"]));
    let bad = temp_json("keep_bad", "{ not json");
    let mut session = Session::new(CountingRenderer::default());

    session.select_file(Some(good.clone())).expect("valid json");
    let err = session.select_file(Some(bad)).expect_err("invalid json");
    assert!(matches!(err, WindroseError::InvalidJson(_)));
    assert_eq!(session.selected_file(), Some(good.as_path()));
    assert_eq!(session.phase(), SessionPhase::FileSelected);
}

#[test]
fn select_accepts_json_that_is_not_windrose_shaped() {
    let path = temp_json("not_windrose", "{}");
    let mut session = Session::new(CountingRenderer::default());
    session.select_file(Some(path)).expect("schema checked later");
    assert_eq!(session.phase(), SessionPhase::FileSelected);
    assert!(session.controls().generate);
}

#[test]
fn generate_without_selection_is_no_file_selected() {
    let mut session = Session::new(CountingRenderer::default());
    let err = session.generate_charts().expect_err("nothing selected");
    assert!(matches!(err, WindroseError::NoFileSelected));
}

#[test]
fn generates_one_chart_per_record_in_order() {
    let path = temp_json("order", &dataset(&["00:00", "06:00", "12:00"]));
    let mut session = Session::new(CountingRenderer::default());
    session.select_file(Some(path)).expect("select");

    assert_eq!(session.generate_charts().expect("generate"), 3);
    assert_eq!(session.phase(), SessionPhase::Generated);
    assert_eq!(session.current_index(), Some(0));
    let titles: Vec<_> = session
        .charts()
        .iter()
        .map(|rendered| rendered.chart.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Windrose (00:00, 2024-01-01)",
            "Windrose (06:00, 2024-01-01)",
            "Windrose (12:00, 2024-01-01)",
        ]
    );
    let controls = session.controls();
    assert!(controls.clear && controls.previous && controls.next);
}

#[test]
fn single_chart_disables_navigation_but_enables_clear() {
    let path = temp_json("single", &dataset(&["00:00"]));
    let mut session = Session::new(CountingRenderer::default());
    session.select_file(Some(path)).expect("select");
    session.generate_charts().expect("generate");

    assert_eq!(session.charts().len(), 1);
    assert_eq!(session.current_index(), Some(0));
    let controls = session.controls();
    assert!(controls.clear);
    assert!(!controls.previous && !controls.next);
}

#[test]
fn empty_windrose_list_generates_nothing() {
    let path = temp_json("empty_list", r#"{"windrose":[]}"#);
    let mut session = Session::new(CountingRenderer::default());
    session.select_file(Some(path)).expect("select");

    assert_eq!(session.generate_charts().expect("generate"), 0);
    assert_eq!(session.current_index(), None);
    assert_eq!(session.phase(), SessionPhase::FileSelected);
    assert_cursor_invariant(&session);
}

#[test]
fn navigation_stops_at_both_ends() {
    let path = temp_json("nav", &dataset(&["a", "b", "c"]));
    let mut session = Session::new(CountingRenderer::default());
    session.select_file(Some(path)).expect("select");
    session.generate_charts().expect("generate");

    assert!(!session.show_previous());
    assert_eq!(session.current_index(), Some(0));
    assert!(session.show_next());
    assert!(session.show_next());
    assert_eq!(session.current_index(), Some(2));
    assert!(!session.show_next());
    assert!(!session.show_next());
    assert_eq!(session.current_index(), Some(2));
    assert!(session.show_previous());
    assert_eq!(
        session.current().map(|rendered| rendered.chart.title.as_str()),
        Some("Windrose (b, 2024-01-01)")
    );
    assert_cursor_invariant(&session);
}

#[test]
fn navigation_on_empty_session_is_a_no_op() {
    let mut session = Session::new(CountingRenderer::default());
    assert!(!session.show_next());
    assert!(!session.show_previous());
    assert_eq!(session.current_index(), None);
}

#[test]
fn failed_regeneration_keeps_existing_charts() {
    let path = temp_json("regen_fail", &dataset(&["00:00", "06:00"]));
    let mut session = Session::new(CountingRenderer::default());
    session.select_file(Some(path.clone())).expect("select");
    session.generate_charts().expect("generate");
    session.show_next();

    fs::write(&path, "{}").expect("rewrite input");
    let err = session.generate_charts().expect_err("schema error");
    assert!(err.is_schema());
    assert_eq!(session.charts().len(), 2);
    assert_eq!(session.current_index(), Some(1));
    assert_eq!(session.renderer().live.get(), 2);
}

#[test]
fn clear_resets_everything_and_requires_new_selection() {
    let path = temp_json("clear", &dataset(&["00:00", "06:00"]));
    let mut session = Session::new(CountingRenderer::default());
    session.select_file(Some(path)).expect("select");
    session.generate_charts().expect("generate");

    session.clear();
    assert_eq!(session.phase(), SessionPhase::Empty);
    assert_eq!(session.current_index(), None);
    assert!(session.charts().is_empty());
    assert_eq!(session.selected_file(), None);
    assert_eq!(session.renderer().live.get(), 0);

    let err = session.generate_charts().expect_err("selection cleared");
    assert!(matches!(err, WindroseError::NoFileSelected));
}

#[test]
fn clear_from_file_selected_returns_to_empty() {
    let path = temp_json("clear_selected", &dataset(&["00:00"]));
    let mut session = Session::new(CountingRenderer::default());
    session.select_file(Some(path)).expect("select");
    session.clear();
    assert_eq!(session.phase(), SessionPhase::Empty);
}

#[test]
fn repeated_generation_does_not_accumulate_handles() {
    let path = temp_json("cycles", &dataset(&["a", "b", "c"]));
    let live = Rc::new(Cell::new(0));
    let renderer = CountingRenderer {
        next_id: 0,
        live: Rc::clone(&live),
    };
    let mut session = Session::new(renderer);

    for _ in 0..5 {
        session.select_file(Some(path.clone())).expect("select");
        session.generate_charts().expect("generate");
        session.generate_charts().expect("regenerate");
        assert_eq!(live.get(), 3);
        session.clear();
        assert_eq!(live.get(), 0);
    }

    session.select_file(Some(path)).expect("select");
    session.generate_charts().expect("generate");
    drop(session);
    assert_eq!(live.get(), 0);
}
