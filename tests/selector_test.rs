/// Selection behavior through the public API
use std::collections::BTreeSet;

use activity_suggester::{
    ActivityPool, AppState, Category, History, HistoryEntry, Preferences, SelectError,
    select_activity,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

#[test]
fn test_every_builtin_category_combination_draws_from_union() {
    let pool = ActivityPool::builtin();
    let mut rng = rng();
    let categories = Category::all();

    // All pairs plus the full set
    let mut selections: Vec<BTreeSet<Category>> = Vec::new();
    for (i, a) in categories.iter().enumerate() {
        for b in &categories[i..] {
            selections.push(BTreeSet::from([*a, *b]));
        }
    }
    selections.push(categories.iter().copied().collect());

    for selected in selections {
        let union: BTreeSet<&str> =
            selected.iter().flat_map(|c| pool.activities(*c)).map(String::as_str).collect();
        for _ in 0..20 {
            let pick = select_activity(&selected, &History::new(), &pool, &mut rng).unwrap();
            assert!(union.contains(pick.as_str()), "{:?} not in union of {:?}", pick, selected);
        }
    }
}

#[test]
fn test_empty_selection_always_fails() {
    let mut rng = rng();
    let mut history = History::new();
    history.push(HistoryEntry::new("Anything", BTreeSet::new()));

    for pool in [ActivityPool::builtin(), ActivityPool::default()] {
        assert_eq!(
            select_activity(&BTreeSet::new(), &history, &pool, &mut rng),
            Err(SelectError::NoCategorySelected)
        );
    }
}

#[test]
fn test_zero_combined_activities_fails() {
    let mut rng = rng();
    let pool = ActivityPool::from_entries([
        (Category::Education, Vec::<&str>::new()),
        (Category::Music, Vec::new()),
    ]);
    let selected = BTreeSet::from([Category::Education, Category::Music, Category::Social]);

    assert_eq!(
        select_activity(&selected, &History::new(), &pool, &mut rng),
        Err(SelectError::NoActivitiesAvailable)
    );
}

#[test]
fn test_single_distinct_activity_across_categories_is_forced_duplicate() {
    let mut rng = rng();
    let pool = ActivityPool::from_entries([
        (Category::Education, vec!["Same"]),
        (Category::Music, vec!["Same"]),
    ]);
    let selected = BTreeSet::from([Category::Education, Category::Music]);
    let mut history = History::new();
    history.push(HistoryEntry::new("Same", selected.clone()));

    for _ in 0..10 {
        assert_eq!(select_activity(&selected, &history, &pool, &mut rng).unwrap(), "Same");
    }
}

#[test]
fn test_eleven_generations_through_state() {
    let mut rng = rng();
    let pool = ActivityPool::from_entries([(Category::Education, vec!["A", "B"])]);
    let preferences =
        Preferences { categories: BTreeSet::from([Category::Education]), ..Preferences::default() };
    let mut state = AppState::new(preferences, std::time::Duration::ZERO);

    let mut produced = Vec::new();
    for _ in 0..11 {
        produced.push(state.generate_now(&pool, &mut rng).unwrap());
    }

    let history: Vec<&str> = state.history().iter().map(|e| e.activity.as_str()).collect();
    let expected: Vec<&str> = produced[1..].iter().rev().map(String::as_str).collect();
    assert_eq!(history, expected);
}
