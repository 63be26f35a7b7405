use rand::Rng;

use crate::bugs::dispatch::MutationOutcome;
use crate::config::BugConfig;
use crate::error::Result;
use crate::program::ActionSequence;
use crate::types::Action;

/// Config key naming the two actions to insert.
pub const PAIR_KEY: &str = "pair";

const DEFAULT_PAIR: (Action, Action) = (Action::TurnLeft, Action::TurnRight);

/// Insert an adjacent, mutually cancelling pair of actions at a random
/// position, lengthening the sequence by exactly two.
///
/// The pair defaults to a left turn followed by a right turn; the `pair`
/// config key (an array of two action tokens) overrides it. An empty
/// sequence is left unchanged.
pub fn insert_redundant_pair<R: Rng>(
    actions: &mut ActionSequence,
    config: &BugConfig,
    rng: &mut R,
) -> Result<MutationOutcome> {
    if actions.is_empty() {
        log::debug!("empty action sequence, nothing to pad");
        return Ok(MutationOutcome::Skipped);
    }

    let (first, second) = configured_pair(config);
    let insert_at = rng.gen_range(0..=actions.len());
    actions.insert(insert_at, second);
    actions.insert(insert_at, first);
    log::debug!(
        "inserted redundant {}/{} pair at {insert_at}",
        first.as_str(),
        second.as_str()
    );
    Ok(MutationOutcome::Applied)
}

fn configured_pair(config: &BugConfig) -> (Action, Action) {
    let Some(values) = config.get_array(PAIR_KEY) else {
        return DEFAULT_PAIR;
    };
    let parsed: Vec<Action> = values
        .iter()
        .filter_map(|value| value.as_str().and_then(Action::parse))
        .collect();
    match parsed.as_slice() {
        [first, second] if parsed.len() == values.len() => (*first, *second),
        _ => {
            log::warn!("malformed '{PAIR_KEY}' config value, using the default turn pair");
            DEFAULT_PAIR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pair_defaults_to_cancelling_turns() {
        let config = BugConfig::new();
        assert_eq!(configured_pair(&config), (Action::TurnLeft, Action::TurnRight));
    }

    #[test]
    fn test_pair_read_from_config() {
        let mut config = BugConfig::new();
        config.insert(PAIR_KEY, json!(["turnRight", "turnLeft"]));
        assert_eq!(configured_pair(&config), (Action::TurnRight, Action::TurnLeft));
    }

    #[test]
    fn test_malformed_pair_falls_back_to_default() {
        let mut config = BugConfig::new();
        config.insert(PAIR_KEY, json!(["turnRight", "sprint"]));
        assert_eq!(configured_pair(&config), DEFAULT_PAIR);

        config.insert(PAIR_KEY, json!(["turnLeft"]));
        assert_eq!(configured_pair(&config), DEFAULT_PAIR);
    }
}
