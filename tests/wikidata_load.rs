use std::collections::HashSet;
use std::fs;
use std::path::Path;

use d2t::data::Triple;
use d2t::datasets::{get_dataset, Dataset, LoadOptions, Split};
use d2t::templates::FALLBACK_TEMPLATE;

const TEMPLATES: &str = r#"{
    "P17": ["<subject> is located in <object> .", "<subject> is in <object> ."],
    "P1376": ["<subject> is the capital of <object> ."]
}"#;

fn setup(root: &Path) {
    let dev = root.join("dev");
    fs::create_dir_all(dev.join("part-0")).unwrap();
    fs::create_dir_all(dev.join("part-1")).unwrap();

    fs::write(
        dev.join("part-0").join("paris.json"),
        r#"{"data": [["Q90 | P17 | Q142", "Q90 | P1376 | Q142"]]}"#,
    )
    .unwrap();
    fs::write(
        dev.join("part-1").join("rome.json"),
        r#"{"data": [["Q220 |P17| Q38", "Q220 | P1082 | 2872800"]], "text": ["Rome is in Italy."]}"#,
    )
    .unwrap();
    fs::write(dev.join("part-1").join("empty.json"), r#"{"data": [[]]}"#).unwrap();
    fs::write(root.join("templates.json"), TEMPLATES).unwrap();
}

#[test_log::test]
fn load() {
    let dir = tempfile::tempdir().unwrap();
    setup(dir.path());

    let mut wd = get_dataset("wikidata", LoadOptions::default()).unwrap();
    wd.load(dir.path(), Some(&dir.path().join("templates.json")), &[Split::Dev])
        .unwrap();

    let dev = wd.entries(Split::Dev);
    assert_eq!(dev.len(), 2);
    assert_eq!(dev[0].triples()[0], Triple::new("Q90", "P17", "Q142"));
    assert_eq!(dev[0].lexs().len(), 2);
    assert_eq!(
        dev[1].triples().triples(),
        &[
            Triple::new("Q220", "P17", "Q38"),
            Triple::new("Q220", "P1082", "2872800"),
        ]
    );
    assert_eq!(dev[1].lexs()[0].text(), "Rome is in Italy.");
}

#[test_log::test]
fn sampled_templates() {
    let dir = tempfile::tempdir().unwrap();
    setup(dir.path());

    let mut wd = get_dataset("wikidata", LoadOptions::default()).unwrap();
    wd.load(dir.path(), Some(&dir.path().join("templates.json")), &[Split::Dev])
        .unwrap();

    let rome = &wd.entries(Split::Dev)[1];
    let located_in: HashSet<&str> = ["<subject> is located in <object> .", "<subject> is in <object> ."]
        .into_iter()
        .collect();

    for _ in 0..100 {
        assert!(located_in.contains(wd.template(&rome.triples()[0])));
    }
    // no template for population
    assert_eq!(wd.template(&rome.triples()[1]), FALLBACK_TEMPLATE);
}
