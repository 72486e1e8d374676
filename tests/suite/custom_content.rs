//! Custom quiz content wired through the configuration file.

use std::fs;
use std::sync::Arc;

use sentience_config::QuizConfig;
use sentience_content::ContentError;
use sentience_engine::{GraphError, Node, QuizSession};
use tempfile::tempdir;

const PETS_TOML: &str = r#"
start = "pick"

[[node]]
kind = "question"
id = "pick"
text = "Which pet?"

[[node.options]]
id = "cat"
label = "A cat"
target = "pain"
subject = "this cat"

[[node.options]]
id = "fish"
label = "A fish"
target = "pain"
subject = "this fish"

[[node]]
kind = "question"
id = "pain"
text = "Does {{ENTITY}} feel pain?"

[[node.options]]
id = "yes"
label = "Yes"
target = "sentient"
tone = "affirmative"

[[node.options]]
id = "no"
label = "No"
target = "automaton"
tone = "negative"

[[node]]
kind = "end"
id = "sentient"
verdict = "conscious"
title = "{{ENTITY_CAP}} is sentient"
desc = "Pain implies experience."

[[node]]
kind = "end"
id = "automaton"
verdict = "not"
title = "Automaton"
desc = "Reflexes only."
"#;

#[test]
fn config_points_at_custom_graph_and_details() {
    let dir = tempdir().unwrap();
    let graph_path = dir.path().join("pets.toml");
    let details_path = dir.path().join("pets-details.json");
    let config_path = dir.path().join("config.toml");
    fs::write(&graph_path, PETS_TOML).unwrap();
    fs::write(&details_path, r#"{ "detail": { "pain": "Nociception is not enough." } }"#)
        .unwrap();
    fs::write(
        &config_path,
        format!(
            "[app]\ndefault_subject = \"your pet\"\n\n[content]\ngraph = {:?}\ndetails = {:?}\n",
            graph_path.display().to_string(),
            details_path.display().to_string(),
        ),
    )
    .unwrap();

    let config = QuizConfig::load_from(&config_path).unwrap().unwrap();
    let graph = sentience_content::load(
        &config.graph_path().unwrap(),
        config.details_path().as_deref(),
    )
    .unwrap();
    assert_eq!(graph.len(), 4);
    assert_eq!(
        graph.get("pain").and_then(Node::detail),
        Some("Nociception is not enough.")
    );

    let mut session = QuizSession::new(Arc::new(graph))
        .with_default_term(config.default_subject().unwrap());
    let pain = session.graph().get("pain").and_then(Node::as_question).unwrap().clone();
    assert_eq!(session.render(&pain.text), "Does your pet feel pain?");

    session.choose("fish").unwrap();
    session.choose("yes").unwrap();
    let Ok(Node::End(end)) = session.current_node() else {
        panic!("expected an end position");
    };
    assert_eq!(session.render(&end.title), "This fish is sentient");
}

#[test]
fn custom_graph_with_dangling_edge_is_rejected() {
    let dir = tempdir().unwrap();
    let graph_path = dir.path().join("broken.toml");
    fs::write(
        &graph_path,
        PETS_TOML.replace("target = \"automaton\"", "target = \"robot\""),
    )
    .unwrap();

    let err = sentience_content::load(&graph_path, None).unwrap_err();
    assert!(matches!(
        err,
        ContentError::Graph {
            source: GraphError::DanglingTarget { .. },
            ..
        }
    ));
}

#[test]
fn missing_config_file_means_builtin_content() {
    let dir = tempdir().unwrap();
    let config = QuizConfig::load_from(&dir.path().join("config.toml")).unwrap();
    assert!(config.is_none());
    assert!(sentience_content::builtin().is_ok());
}
