//! Walk-throughs of the built-in consciousness quiz.

use std::collections::{HashSet, VecDeque};

use sentience_engine::{EngineError, Node, Phase, StepOutcome, Tone, Verdict};

use crate::common::{builtin_graph, builtin_session, paths, walk};

fn end_reached(choices: &[&str]) -> (String, Verdict, String) {
    let mut session = builtin_session();
    walk(&mut session, choices);
    let Ok(Node::End(end)) = session.current_node() else {
        panic!("{choices:?} did not reach an end position");
    };
    (end.id.to_string(), end.verdict, end.title.clone())
}

#[test]
fn named_paths_reach_their_positions() {
    assert_eq!(
        end_reached(paths::IIT),
        (
            "iit".to_string(),
            Verdict::Conscious,
            "Integrated Information Theory (IIT)".to_string()
        )
    );
    assert_eq!(
        end_reached(paths::MYSTERIAN),
        ("mysterian".to_string(), Verdict::Meta, "Mysterianism".to_string())
    );
    let (id, verdict, _) = end_reached(paths::HUMAN_EXCEPTION);
    assert_eq!((id.as_str(), verdict), ("human_exception", Verdict::Not));
    let (id, verdict, title) = end_reached(paths::QUANTUM);
    assert_eq!((id.as_str(), verdict), ("quantum", Verdict::Not));
    assert_eq!(title, "Orchestrated Objective Reduction (Orch-OR)");
}

#[test]
fn start_node_offers_subjects() {
    let session = builtin_session();
    assert_eq!(session.current_id().as_str(), "target_select");
    assert!(matches!(session.phase(), Ok(Phase::AtQuestion(_))));
    assert!(!session.can_go_back());
    assert!(session.subject().is_none());
}

#[test]
fn selected_subject_is_substituted_into_later_questions() {
    let mut session = builtin_session();
    walk(&mut session, &["ai", "yes"]);
    assert_eq!(session.current_id().as_str(), "q1");
    assert_eq!(session.subject_term(), "this AI system");

    let Ok(Node::Question(q1)) = session.current_node() else {
        panic!("q1 should be a question");
    };
    assert_eq!(
        session.render(&q1.text),
        "Does this AI system have its own felt experience — a point of view from the inside?"
    );
}

#[test]
fn default_term_is_used_before_a_subject_is_picked() {
    let session = builtin_session();
    let graph = session.graph();
    let q1 = graph.get("q1").and_then(Node::as_question).unwrap();
    let rendered = session.render(&q1.text);
    assert!(rendered.contains("this entity"));
    assert!(!rendered.contains("{{"));
}

#[test]
fn capitalized_placeholder_in_option_labels_is_rendered() {
    let mut session = builtin_session();
    walk(&mut session, &["robot", "yes", "no", "no"]);
    assert_eq!(session.current_id().as_str(), "q8");

    let Ok(Node::Question(q8)) = session.current_node() else {
        panic!("q8 should be a question");
    };
    let circuits = q8.option("circuits").unwrap();
    assert_eq!(
        session.render(&circuits.label),
        "This robot lacks specific brain circuits"
    );

    session.choose("circuits").unwrap();
    let last = session.path_so_far().last().unwrap();
    assert_eq!(last.answer, "This robot lacks specific brain circuits");
    assert_eq!(last.outcome, StepOutcome::Answer(Tone::Neutral));
}

#[test]
fn full_path_to_quantum_position() {
    let mut session = builtin_session();
    walk(&mut session, paths::QUANTUM);

    let steps: Vec<_> = session.path_so_far().collect();
    assert_eq!(steps.len(), paths::QUANTUM.len() + 1);
    assert_eq!(steps[0].prompt, "What would you like to assess for consciousness?");
    assert_eq!(steps[0].answer, "An AI system or chatbot");

    let numbers: Vec<usize> = steps.iter().map(|step| step.number).collect();
    assert_eq!(numbers, (1..=steps.len()).collect::<Vec<_>>());

    let result = steps.last().unwrap();
    assert_eq!(result.prompt, "Result");
    assert_eq!(result.answer, "Orchestrated Objective Reduction (Orch-OR)");
    assert_eq!(result.outcome, StepOutcome::Result(Verdict::Not));
}

#[test]
fn end_position_rejects_choices_but_allows_back() {
    let mut session = builtin_session();
    walk(&mut session, paths::MYSTERIAN);
    assert!(matches!(
        session.choose("yes"),
        Err(EngineError::InvalidChoice(_))
    ));

    session.back().unwrap();
    assert_eq!(session.current_id().as_str(), "q2b");
    session.choose("no").unwrap();
    assert_eq!(session.current_id().as_str(), "q1");
    assert_eq!(session.history().len(), paths::MYSTERIAN.len());
}

#[test]
fn restart_forgets_subject_and_history() {
    let mut session = builtin_session();
    walk(&mut session, paths::IIT);
    session.restart();
    assert_eq!(session, builtin_session_sharing(&session));
    assert!(session.subject().is_none());
    assert_eq!(session.path_so_far().count(), 0);
}

/// A fresh session over the same graph allocation, so sessions compare equal.
fn builtin_session_sharing(other: &sentience_engine::QuizSession) -> sentience_engine::QuizSession {
    sentience_engine::QuizSession::new(other.graph().clone())
}

/// Breadth-first over every option from every reachable question.
#[test]
fn every_position_is_reachable_and_fully_rendered() {
    let graph = builtin_graph();
    let mut start = sentience_engine::QuizSession::new(graph.clone());
    start.choose("animal").unwrap();

    let mut seen = HashSet::new();
    let mut ends = HashSet::new();
    let mut queue = VecDeque::from([start]);
    let mut details_checked = 0;

    while let Some(session) = queue.pop_front() {
        if !seen.insert(session.current_id().clone()) {
            continue;
        }
        let node = session.current_node().unwrap();
        if let Some(detail) = node.detail() {
            assert!(
                !session.render(detail).contains("{{"),
                "unrendered token in detail of {}",
                session.current_id()
            );
            details_checked += 1;
        }
        match node {
            Node::Question(question) => {
                assert!(!session.render(&question.text).contains("{{"));
                for option in &question.options {
                    assert!(!session.render(&option.label).contains("{{"));
                    let mut next = session.clone();
                    next.choose(option.id.as_str()).unwrap();
                    queue.push_back(next);
                }
            }
            Node::End(end) => {
                assert!(!session.render(&end.title).contains("{{"));
                assert!(!session.render(&end.desc).contains("{{"));
                assert!(session.path_so_far().all(|step| !step.prompt.contains("{{")));
                ends.insert(end.id.clone());
            }
        }
    }

    let total_ends = graph.iter().filter(|node| node.is_end()).count();
    assert_eq!(ends.len(), total_ends);
    assert!(details_checked > 0);
}
