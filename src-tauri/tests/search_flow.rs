use tempfile::{tempdir, TempDir};
use wonderlist_lib::{
    catalog::{Difficulty, IdeaCategory, IdeaFilter, IdeaSort},
    navigation::{ContextKind, Screen, SearchContext, Stage},
    settings::SettingsStore,
    Planner,
};

fn planner() -> (Planner, TempDir) {
    let dir = tempdir().unwrap();
    let settings = SettingsStore::new(dir.path().join("settings.json")).unwrap();
    (Planner::new(settings), dir)
}

#[test]
fn search_hands_context_to_the_next_screen_once() {
    let (planner, _dir) = planner();

    let navigation = planner.search("gift ideas for mom");
    assert_eq!(navigation.screen, Screen::GiftPlanner);

    let expected = SearchContext {
        kind: ContextKind::GiftPlanning,
        query: "gift ideas for mom".into(),
        recipient: Some("mom".into()),
        category: None,
        meal_type: None,
    };
    assert_eq!(navigation.context.as_ref(), Some(&expected));

    // The destination screen mounts and reads the context exactly once.
    assert_eq!(planner.take_search_context(), Some(expected));
    assert_eq!(planner.take_search_context(), None);
}

#[test]
fn later_search_overwrites_unread_context() {
    let (planner, _dir) = planner();

    planner.search("buy christmas gifts");
    planner.search("christmas dinner menu");

    let context = planner.take_search_context().unwrap();
    assert_eq!(context.kind, ContextKind::MealPlanning);
    assert_eq!(context.meal_type.as_deref(), Some("dinner"));
}

#[test]
fn blank_search_opens_stage_default_without_context() {
    let (planner, _dir) = planner();
    planner.settings().set_active_stage(Stage::Start).unwrap();

    let navigation = planner.search("   ");
    assert_eq!(navigation.screen, Screen::Checklist);
    assert!(navigation.context.is_none());
    assert_eq!(planner.take_search_context(), None);
}

#[test]
fn fallback_follows_the_active_stage() {
    let (planner, _dir) = planner();

    assert_eq!(planner.search("hot cocoa").screen, Screen::CreativeIdeas);

    planner.settings().set_active_stage(Stage::Shape).unwrap();
    let navigation = planner.search("hot cocoa");
    assert_eq!(navigation.screen, Screen::Timeline);
    assert_eq!(
        navigation.context,
        Some(SearchContext::new(ContextKind::General, "hot cocoa"))
    );
}

#[test]
fn classify_can_override_the_stage_without_touching_the_relay() {
    let (planner, _dir) = planner();

    let result = planner.classify("hot cocoa", Some(Stage::Start));
    assert_eq!(result.rule, None);
    assert_eq!(result.navigation.screen, Screen::Checklist);
    assert!(planner.relay().peek().is_none());
}

#[test]
fn unknown_screen_identifier_renders_not_found() {
    let (planner, _dir) = planner();
    assert_eq!(planner.resolve_screen("budget"), Screen::Budget);
    assert_eq!(planner.resolve_screen("north-pole"), Screen::NotFound);
}

#[test]
fn creative_search_context_prefills_idea_filter() {
    let (planner, _dir) = planner();

    let context = planner.search("easy ornament crafts").context.unwrap();
    assert_eq!(context.category.as_deref(), Some("Decorations"));

    let filter: IdeaFilter = serde_json::from_value(serde_json::json!({
        "category": context.category,
        "difficulty": "Easy",
    }))
    .unwrap();
    assert_eq!(filter.category, Some(IdeaCategory::Decorations));
    assert_eq!(filter.difficulty, Some(Difficulty::Easy));

    let ideas = planner
        .catalog()
        .ideas(&filter, Some(IdeaSort::TrendingFirst));
    let ids: Vec<&str> = ideas.iter().map(|idea| idea.id.as_str()).collect();
    assert_eq!(ids, vec!["idea-1", "idea-3", "idea-7"]);
}

#[test]
fn budget_summary_uses_configured_limit() {
    let (planner, _dir) = planner();
    assert!(!planner.budget_summary().over_budget);

    planner.settings().set_budget_limit(Some(300.0)).unwrap();
    let summary = planner.budget_summary();
    assert_eq!(summary.limit, Some(300.0));
    assert!(summary.over_budget);
}
