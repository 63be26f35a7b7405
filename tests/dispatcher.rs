use bugforge::{
    create_bug, Action, Block, BlockKind, BugCategory, BugConfig, BugGenerator, Program,
    ProgramTree, Representation, FIELD_NAME, FIELD_NUM, SLOT_DO,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A solved exercise using every block family the strategies target.
fn fixture_tree() -> ProgramTree {
    let mut tree = ProgramTree::new(Block::start());
    let entry = tree.entry();
    tree.append_new(entry, SLOT_DO, Block::action(Action::MoveForward)).unwrap();
    let repeat = tree.append_new(entry, SLOT_DO, Block::repeat(3)).unwrap();
    tree.append_new(repeat, SLOT_DO, Block::action(Action::TurnLeft)).unwrap();
    tree.append_new(repeat, SLOT_DO, Block::action(Action::MoveForward)).unwrap();
    tree.append_new(entry, SLOT_DO, Block::action(Action::Collect)).unwrap();
    tree
}

fn fixture_actions() -> Vec<Action> {
    vec![Action::MoveForward, Action::TurnLeft, Action::Collect]
}

#[test]
fn test_unknown_category_returns_input_unchanged() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(42);
    let program = Program::from(fixture_tree());

    let result = create_bug("incorrect_math_operator", &program, &BugConfig::new(), &mut rng);
    assert_eq!(result, program);
}

#[test]
fn test_representation_mismatch_returns_input_unchanged() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(42);
    let program = Program::from(fixture_tree());

    // optimization mutates action sequences, not trees
    let result = create_bug("optimization", &program, &BugConfig::new(), &mut rng);
    assert_eq!(result, program);

    let actions = Program::from(fixture_actions());
    let result = create_bug("sequence_error", &actions, &BugConfig::new(), &mut rng);
    assert_eq!(result, actions);
}

#[test]
fn test_caller_program_is_never_mutated() {
    let mut rng = StdRng::seed_from_u64(42);
    let program = Program::from(fixture_tree());
    let snapshot = program.clone();

    let result = create_bug("sequence_error", &program, &BugConfig::new(), &mut rng);
    assert_eq!(program, snapshot);
    assert_ne!(result, program, "three distinct statements always swap visibly");
}

#[test]
fn test_each_category_produces_a_valid_program() {
    let mut generator = BugGenerator::new(Some(42)); // Fixed seed for reproducibility
    let tree_program = Program::from(fixture_tree());
    let actions_program = Program::from(fixture_actions());
    let config = BugConfig::new();

    for category in BugCategory::ALL {
        let input = match category.representation() {
            Representation::Tree => &tree_program,
            Representation::Actions => &actions_program,
        };
        let result = generator.create_bug(category.as_str(), input, &config);
        match (category.representation(), result) {
            (Representation::Tree, Program::Tree(tree)) => {
                let original = match input {
                    Program::Tree(tree) => tree,
                    Program::Actions(_) => unreachable!(),
                };
                assert_eq!(tree.entry(), original.entry());
                let delta = original.node_count() as i64 - tree.node_count() as i64;
                assert!(delta == 0 || delta == 1, "tree mutations drop at most one statement");
            }
            (Representation::Actions, Program::Actions(actions)) => {
                assert_eq!(actions.len(), fixture_actions().len() + 2);
            }
            (_, result) => panic!("representation changed: {result:?}"),
        }
    }
}

#[test]
fn test_loop_count_dispatch_changes_the_count() {
    let mut generator = BugGenerator::new(Some(42));
    let program = Program::from(fixture_tree());

    let result = generator.create_bug("incorrect_loop_count", &program, &BugConfig::new());
    let Program::Tree(tree) = result else { panic!("expected a tree back") };
    let repeat = tree.blocks_of_kind(BlockKind::Repeat)[0];
    assert_eq!(tree.field(repeat, FIELD_NUM), Some("4"));
}

#[test]
fn test_function_call_order_alias_swaps_calls() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut tree = ProgramTree::new(Block::start());
    let entry = tree.entry();
    tree.append_new(entry, SLOT_DO, Block::procedure_call("collect_row")).unwrap();
    tree.append_new(entry, SLOT_DO, Block::procedure_call("collect_column")).unwrap();
    let program = Program::from(tree);

    let result = create_bug("incorrect_function_call_order", &program, &BugConfig::new(), &mut rng);
    let Program::Tree(tree) = result else { panic!("expected a tree back") };
    let names: Vec<&str> = tree
        .children(tree.entry(), SLOT_DO)
        .iter()
        .map(|&id| tree.field(id, FIELD_NAME).unwrap())
        .collect();
    assert_eq!(names, vec!["collect_column", "collect_row"]);
}

#[test]
fn test_same_seed_reproduces_the_same_bugs() {
    let tree_program = Program::from(fixture_tree());
    let actions_program = Program::from(fixture_actions());
    let config = BugConfig::new();

    let mut first = BugGenerator::new(Some(42));
    let mut second = BugGenerator::new(Some(42));
    for category in BugCategory::ALL {
        let input = match category.representation() {
            Representation::Tree => &tree_program,
            Representation::Actions => &actions_program,
        };
        assert_eq!(
            first.create_bug(category.as_str(), input, &config),
            second.create_bug(category.as_str(), input, &config),
            "category '{}' diverged under the same seed",
            category.as_str()
        );
    }
}
