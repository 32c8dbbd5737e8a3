//! End-to-end catalog flow through the public library API: permission grant,
//! host responses, search and sort, supersession and retry.

use sommelier::app::state::QuerySortState;
use sommelier::catalog::{ticket_from_context, CatalogClient, CatalogRequest, LoadState, LOAD_FAILED_MESSAGE};
use sommelier::domain::{CatalogError, Category, SortKey};
use sommelier::ui::{BodyView, CatalogContent};
use sommelier::{handle_event, initialize, Action, AppState, Config, Event};

const REDS: &str = r#"[
    {"id": 1, "wine": "Gran Reserva 904", "winery": "La Rioja Alta", "rating": {"average": "4.5", "reviews": "10 ratings"}, "location": "Spain\n·\nRioja", "image": ""},
    {"id": 2, "wine": "Barolo Cannubi", "winery": "E. Pira", "rating": {"average": "3.0", "reviews": "200 ratings"}, "location": "Italy\n·\nPiedmont", "image": ""}
]"#;

const WHITES: &str = r#"[
    {"id": 7, "wine": "Chablis Premier Cru", "winery": "Fèvre", "rating": {"average": "4.1", "reviews": "55 ratings"}, "location": "France\n·\nBurgundy", "image": ""}
]"#;

fn run(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).unwrap()
}

fn fetch_request(actions: &[Action]) -> CatalogRequest {
    actions
        .iter()
        .find_map(|action| match action {
            Action::FetchCatalog(request) => Some(request.clone()),
            _ => None,
        })
        .expect("a catalog fetch")
}

/// Simulates the host answering `request` with `status` and `body`.
fn respond(state: &mut AppState, request: &CatalogRequest, status: u16, body: &str) -> bool {
    let ticket = ticket_from_context(&request.context).expect("ticket in context");
    let outcome = CatalogClient::decode(status, body.as_bytes());
    run(state, Event::CatalogFetched { ticket, outcome }).0
}

fn visible_ids(state: &AppState) -> Vec<i64> {
    state.visible_wines().iter().map(|wine| wine.id).collect()
}

#[test]
fn grant_fetches_configured_category() {
    let config = Config {
        base_url: "http://localhost:9000/wines".to_string(),
        category: Category::Port,
        ..Config::default()
    };
    let mut state = initialize(&config);
    assert_eq!(state.loader.state(), &LoadState::Idle);

    let (render, actions) = run(&mut state, Event::PermissionsResult { granted: true });
    assert!(render);
    assert_eq!(state.loader.state(), &LoadState::Loading);
    assert_eq!(fetch_request(&actions).url, "http://localhost:9000/wines/port");
    assert!(actions.iter().any(|action| matches!(action, Action::PostToWorker(_))));
}

#[test]
fn loaded_catalog_is_searched_and_sorted() {
    let mut state = initialize(&Config::default());
    let (_, actions) = run(&mut state, Event::PermissionsResult { granted: true });
    assert!(respond(&mut state, &fetch_request(&actions), 200, REDS));

    assert_eq!(visible_ids(&state), vec![1, 2]);

    run(&mut state, Event::ToggleSort);
    assert_eq!(state.query.sort_key, SortKey::ReviewCount);
    assert_eq!(visible_ids(&state), vec![2, 1]);

    run(&mut state, Event::SearchMode);
    for c in "RESERVA".chars() {
        run(&mut state, Event::Char(c));
    }
    assert_eq!(visible_ids(&state), vec![1]);

    let vm = state.compute_viewmodel(40, 100);
    let BodyView::Catalog(view) = vm.body else {
        panic!("expected the catalog view");
    };
    let CatalogContent::List { results_label, items } = view.content else {
        panic!("expected a wine list");
    };
    assert_eq!(results_label, "1 wines found");
    assert_eq!(items[0].name, "Gran Reserva 904");
    assert_eq!(items[0].highlight_ranges, vec![(5, 12)]);
}

#[test]
fn no_match_shows_empty_state() {
    let mut state = initialize(&Config::default());
    let (_, actions) = run(&mut state, Event::PermissionsResult { granted: true });
    respond(&mut state, &fetch_request(&actions), 200, REDS);

    run(&mut state, Event::SearchMode);
    run(&mut state, Event::Char('z'));

    let BodyView::Catalog(view) = state.compute_viewmodel(40, 100).body else {
        panic!("expected the catalog view");
    };
    match view.content {
        CatalogContent::Empty(empty) => assert_eq!(empty.message, "No results"),
        other => panic!("unexpected content: {other:?}"),
    }
}

#[test]
fn late_result_for_previous_category_is_discarded() {
    let mut state = initialize(&Config::default());
    let (_, actions) = run(&mut state, Event::PermissionsResult { granted: true });
    let reds = fetch_request(&actions);

    let (_, actions) = run(&mut state, Event::NextCategory);
    let whites = fetch_request(&actions);
    assert_eq!(state.query.category, Category::Whites);

    assert!(respond(&mut state, &whites, 200, WHITES));
    assert!(!respond(&mut state, &reds, 200, REDS));

    assert_eq!(state.loader.category(), Category::Whites);
    assert_eq!(visible_ids(&state), vec![7]);
}

#[test]
fn category_chosen_while_waiting_loads_on_grant() {
    let mut state = initialize(&Config::default());
    let (_, actions) = run(&mut state, Event::NextCategory);
    assert!(actions.is_empty());

    let (_, actions) = run(&mut state, Event::PermissionsResult { granted: true });
    let whites = fetch_request(&actions);
    assert!(whites.url.ends_with("/whites"));

    assert!(respond(&mut state, &whites, 200, WHITES));
    assert_eq!(visible_ids(&state), vec![7]);
}

#[test]
fn failure_then_retry_recovers() {
    let mut state = initialize(&Config::default());
    let (_, actions) = run(&mut state, Event::PermissionsResult { granted: true });
    respond(&mut state, &fetch_request(&actions), 503, "");

    assert_eq!(state.loader.state(), &LoadState::Failed(LOAD_FAILED_MESSAGE.to_string()));
    let BodyView::Catalog(view) = state.compute_viewmodel(40, 100).body else {
        panic!("expected the catalog view");
    };
    assert!(matches!(view.content, CatalogContent::Failed { .. }));

    let (_, actions) = run(&mut state, Event::Retry);
    assert_eq!(state.loader.state(), &LoadState::Loading);

    respond(&mut state, &fetch_request(&actions), 200, REDS);
    assert!(matches!(state.loader.state(), LoadState::Loaded(items) if items.len() == 2));
}

#[test]
fn malformed_body_is_a_parse_error() {
    assert!(matches!(
        CatalogClient::decode(200, b"{\"error\": 404}"),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn query_survives_tab_switches() {
    let mut state = AppState::new(
        CatalogClient::default(),
        QuerySortState {
            query: "barolo".to_string(),
            ..QuerySortState::default()
        },
        sommelier::Theme::default(),
    );

    run(&mut state, Event::NextTab);
    run(&mut state, Event::PreviousTab);
    assert_eq!(state.query.query, "barolo");
}
