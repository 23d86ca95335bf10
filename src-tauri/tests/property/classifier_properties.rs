use proptest::prelude::*;
use wonderlist_lib::{
    intent::{extract_recipient, IntentClassifier},
    navigation::{ContextKind, Screen, Stage},
};

fn any_stage() -> impl Strategy<Value = Stage> {
    prop_oneof![Just(Stage::Spark), Just(Stage::Shape), Just(Stage::Start)]
}

// Letters that cannot spell any routing keyword.
const INERT_WORD: &str = "[qxzj]{1,8}";

proptest! {
    #[test]
    fn gift_for_queries_reach_the_personalized_planner(
        before in INERT_WORD,
        after in INERT_WORD,
        recipient in prop::option::of(prop::sample::select(vec!["mom", "dad", "boss", "sister", "teacher"])),
        stage in any_stage(),
    ) {
        let query = match recipient {
            Some(who) => format!("{before} gift for {who} {after}"),
            None => format!("{before} gift for {after}"),
        };

        let result = IntentClassifier::default().classify(&query, stage);
        prop_assert_eq!(result.navigation.screen, Screen::GiftPlanner);

        let context = result.navigation.context.unwrap();
        prop_assert_eq!(context.kind, ContextKind::GiftPlanning);
        prop_assert_eq!(context.recipient.as_deref(), recipient);
        prop_assert_eq!(context.recipient, extract_recipient(&query));
    }

    #[test]
    fn shopping_words_route_to_shopping_in_every_stage(
        verb in prop::sample::select(vec!["buy", "Shop", "PURCHASE", "shopping"]),
        object in INERT_WORD,
        stage in any_stage(),
    ) {
        let query = format!("{verb} {object}");
        let result = IntentClassifier::default().classify(&query, stage);
        prop_assert_eq!(result.navigation.screen, Screen::Shopping);
        prop_assert_eq!(result.navigation.context.unwrap().kind, ContextKind::Shopping);
    }

    #[test]
    fn unrecognized_queries_fall_back_with_query_preserved(
        words in prop::collection::vec(INERT_WORD, 1..5),
        stage in any_stage(),
    ) {
        let query = words.join(" ");
        let result = IntentClassifier::default().classify(&query, stage);

        prop_assert_eq!(result.rule, None);
        prop_assert_eq!(result.navigation.screen, stage.default_screen());
        let context = result.navigation.context.unwrap();
        prop_assert_eq!(context.kind, ContextKind::General);
        prop_assert_eq!(context.query, query);
    }

    #[test]
    fn classification_never_panics_and_is_deterministic(query in ".{0,64}", stage in any_stage()) {
        let classifier = IntentClassifier::default();
        let first = classifier.classify(&query, stage);
        let second = classifier.classify(&query, stage);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn whitespace_only_search_skips_the_classifier(spaces in "[ \t\n]{0,6}", stage in any_stage()) {
        let navigation = IntentClassifier::default().search(&spaces, stage);
        prop_assert_eq!(navigation.screen, stage.default_screen());
        prop_assert!(navigation.context.is_none());
    }
}
