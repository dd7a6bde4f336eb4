//! Property runners checking walk invariants step by step.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

use crate::{
    AgentId, PathSet, ResetCause, WalkAgent, WalkEngine, WalkEngineBuilder, WalkEvent,
};

use super::types::WalkFixture;

fn build_engine(fixture: &WalkFixture, seeds: &[u64]) -> WalkEngine {
    WalkEngineBuilder::new()
        .with_seeds(seeds.iter().copied())
        .with_path_length_cap(fixture.cap)
        .build(fixture.graph.clone())
        .expect("fixture configuration is valid")
}

fn run(fixture: &WalkFixture, seeds: &[u64]) -> Vec<Vec<WalkEvent>> {
    let mut engine = build_engine(fixture, seeds);
    let mut steps = vec![engine.full_reset()];
    for _ in 0..fixture.steps {
        steps.push(engine.step().expect("step succeeds"));
    }
    steps
}

fn events_for(steps: &[Vec<WalkEvent>], agent: AgentId) -> Vec<WalkEvent> {
    steps
        .iter()
        .flatten()
        .filter(|event| event.agent() == agent)
        .copied()
        .collect()
}

fn check_agent_state(fixture: &WalkFixture, agent: &WalkAgent) -> TestCaseResult {
    let path = agent.path();
    prop_assert!(!path.is_empty());
    prop_assert!(path.len() <= fixture.cap);
    prop_assert_eq!(path.last().copied(), Some(agent.current_vertex()));
    prop_assert!(agent.has_visited(agent.current_vertex()));

    let unique: HashSet<usize> = path.iter().copied().collect();
    prop_assert_eq!(unique.len(), path.len(), "path revisits a vertex: {:?}", path);
    prop_assert_eq!(&unique, agent.visited());

    for pair in path.windows(2) {
        let [from, to] = pair else {
            continue;
        };
        let neighbours = fixture.graph.neighbours_of(*from).expect("path vertex exists");
        prop_assert!(neighbours.contains(to), "{} is not adjacent to {}", to, from);
    }
    Ok(())
}

/// Every step emits one event per agent, moves only to unvisited neighbours,
/// restarts exactly at the cap or at a dead end, and keeps the sink in sync.
pub(super) fn run_step_invariants_property(fixture: &WalkFixture) -> TestCaseResult {
    let mut engine = build_engine(fixture, &fixture.seeds);
    let mut paths = PathSet::default();
    engine.advance(true, &mut paths).expect("full reset succeeds");

    for _ in 0..fixture.steps {
        let before: Vec<WalkAgent> = engine.agents().to_vec();
        let events = engine.advance(false, &mut paths).expect("step succeeds");
        prop_assert_eq!(events.len(), before.len());

        for ((prior, event), after) in before.iter().zip(&events).zip(engine.agents()) {
            prop_assert_eq!(event.agent(), prior.id());
            let neighbours = fixture
                .graph
                .neighbours_of(prior.current_vertex())
                .expect("current vertex exists");
            let has_unvisited = neighbours.iter().any(|v| !prior.has_visited(*v));

            match *event {
                WalkEvent::AppendPoint { vertex, .. } => {
                    prop_assert!(prior.path_length() < fixture.cap);
                    prop_assert!(neighbours.contains(&vertex));
                    prop_assert!(!prior.has_visited(vertex));
                    prop_assert_eq!(after.path_length(), prior.path_length() + 1);
                }
                WalkEvent::StartPath { vertex, cause, .. } => {
                    let expected = if prior.path_length() >= fixture.cap {
                        ResetCause::LengthCap
                    } else {
                        prop_assert!(
                            !has_unvisited,
                            "reset despite unvisited neighbours on a {:?} graph",
                            fixture.shape
                        );
                        ResetCause::DeadEnd
                    };
                    prop_assert_eq!(cause, expected);
                    prop_assert_eq!(after.path(), &[vertex]);
                }
            }

            check_agent_state(fixture, after)?;
            prop_assert_eq!(paths.current_path(after.id()), Some(after.path()));
        }
    }
    Ok(())
}

/// Two runs over the same graph and seeds emit identical events.
pub(super) fn run_determinism_property(fixture: &WalkFixture) -> TestCaseResult {
    prop_assert_eq!(run(fixture, &fixture.seeds), run(fixture, &fixture.seeds));
    Ok(())
}

/// Each agent of a shared engine behaves exactly as it does alone.
pub(super) fn run_independence_property(fixture: &WalkFixture) -> TestCaseResult {
    let shared = run(fixture, &fixture.seeds);
    for &seed in &fixture.seeds {
        let solo = run(fixture, &[seed]);
        let agent = AgentId::new(seed);
        prop_assert_eq!(events_for(&shared, agent), events_for(&solo, agent));
    }
    Ok(())
}
