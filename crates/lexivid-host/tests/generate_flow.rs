//! End-to-end generation flow over a real (temporary) project directory:
//! manifest -> planner -> document host -> checkpoint + render handoffs.

use std::path::PathBuf;

use lexivid_core::GeneratorConfig;
use lexivid_host::{DocumentHost, Generator, JobOutcome, ProjectSession};
use lexivid_plan::Manifest;

fn fixture_project(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(dir.join("Assets/Images")).unwrap();
    std::fs::create_dir_all(dir.join("Assets/Audio")).unwrap();
    std::fs::create_dir_all(dir.join("JSON")).unwrap();

    image::RgbImage::new(32, 18)
        .save(dir.join("Assets/Images/mascot.jpg"))
        .unwrap();
    image::RgbImage::new(12, 12)
        .save(dir.join("Assets/Images/cat.png"))
        .unwrap();
    image::RgbImage::new(12, 12)
        .save(dir.join("Assets/Images/dog.png"))
        .unwrap();
    std::fs::write(dir.join("Assets/Audio/cat.wav"), b"RIFF0000WAVE").unwrap();
    std::fs::write(dir.join("Assets/Audio/dog.wav"), b"RIFF0000WAVE").unwrap();

    std::fs::write(
        dir.join("JSON/manifest.json"),
        r#"[
            {"word": "Cat", "image": "Assets/Images/cat.png", "audio": "Assets/Audio/cat.wav"},
            {"word": "Ghost", "image": "Assets/Images/ghost.png", "audio": "Assets/Audio/ghost.wav"},
            {"word": "Dog", "image": "Assets/Images/dog.png", "audio": "Assets/Audio/dog.wav"}
        ]"#,
    )
    .unwrap();

    dir
}

#[test]
fn generate_flow_produces_checkpoint_and_handoffs() {
    let dir = fixture_project("lexivid_flow_full");
    let config = GeneratorConfig::default();
    let session = ProjectSession::open(&dir, &config, None).unwrap();
    let manifest = Manifest::load(&dir.join("JSON/manifest.json")).unwrap();

    let mut host = DocumentHost::new(&config.render);
    let report = Generator::new(&session, &config)
        .run(&manifest, &mut host)
        .unwrap();

    // Two valid records, one skipped.
    assert_eq!(report.generated, vec!["Video_Cat", "Video_Dog"]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].word, "Ghost");

    // One receipt per valid record, each resolved as a written handoff.
    assert_eq!(report.receipts.len(), 2);
    assert!(report
        .receipts
        .iter()
        .all(|r| r.outcome == JobOutcome::SpecWritten));

    // The checkpoint exists and holds exactly the generated compositions.
    let checkpoint = dir.join("Main_Template.aep");
    assert!(checkpoint.is_file());
    let document: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&checkpoint).unwrap()).unwrap();
    let compositions = document["compositions"].as_array().unwrap();
    assert_eq!(compositions.len(), 2);
    assert_eq!(compositions[0]["name"], "Video_Cat");
    assert_eq!(compositions[1]["name"], "Video_Dog");

    // One deterministic handoff per output, named from the word.
    for word in ["cat", "dog"] {
        let spec = dir.join(format!(
            "Generated_Comps/output_{}.mp4.renderspec.json",
            word
        ));
        assert!(spec.is_file(), "missing {}", spec.display());
    }
    assert!(!dir
        .join("Generated_Comps/output_ghost.mp4.renderspec.json")
        .exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn generate_flow_with_output_override() {
    let dir = fixture_project("lexivid_flow_override");
    let out = std::env::temp_dir().join("lexivid_flow_override_out");
    let _ = std::fs::remove_dir_all(&out);

    let config = GeneratorConfig::default();
    let session = ProjectSession::open(&dir, &config, Some(out.clone())).unwrap();
    let manifest = Manifest::load(&dir.join("JSON/manifest.json")).unwrap();

    let mut host = DocumentHost::new(&config.render);
    let report = Generator::new(&session, &config)
        .run(&manifest, &mut host)
        .unwrap();

    assert_eq!(report.generated.len(), 2);
    assert!(out.join("output_cat.mp4.renderspec.json").is_file());

    let _ = std::fs::remove_dir_all(&dir);
    let _ = std::fs::remove_dir_all(&out);
}
