use std::sync::Arc;

use super::*;

fn sample_source() -> Source {
    let mut source = Source::new("Harrison-2015");
    source.id = Some(12);
    source.source_type = Some("article".to_string());
    source.authors = Some("J.J. Harrison, N. Allen, P. Bernath".to_string());
    source.title = Some("Infrared absorption cross sections".to_string());
    source.journal = Some("JQSRT".to_string());
    source.year = Some(2015);
    source.volume = Some("151".to_string());
    source.page_start = Some("210".to_string());
    source.page_end = Some("216".to_string());
    source.doi = Some("10.1016/j.jqsrt.2014.09.023".to_string());
    source
}

#[test]
fn test_get_or_create_is_identity_mapped() {
    let mut registry: AliasRegistry<Molecule> = AliasRegistry::new();

    let first = registry.get_or_create("CFC-11");
    let second = registry.get_or_create("CFC-11");

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.len(), 1);
    assert_eq!(first.aliases[0].kind, AliasKind::Generic);
}

#[test]
fn test_register_indexes_every_alias() {
    let mut registry = AliasRegistry::new();
    let molecule = Molecule::new("Methyl chloride")
        .with_alias("CH3Cl", AliasKind::Generic)
        .with_alias("74-87-3", AliasKind::Cas);
    let canonical = registry.register(molecule);

    for name in ["Methyl chloride", "CH3Cl", "74-87-3"] {
        let found = registry.resolve(name).unwrap();
        assert!(Arc::ptr_eq(&found, &canonical));
    }
    assert!(registry.resolve("CH4").is_none());
    assert_eq!(canonical.cas().unwrap().alias, "74-87-3");
    assert!(canonical.acronym().is_none());
}

#[test]
fn test_register_keeps_existing_names() {
    let mut registry = AliasRegistry::new();
    let water = registry.register(Molecule::new("Water").with_alias("H2O", AliasKind::Generic));
    registry.register(Molecule::new("Heavy water").with_alias("H2O", AliasKind::Generic));

    assert!(Arc::ptr_eq(&registry.get("H2O").unwrap(), &water));
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_register_same_name_returns_canonical_instance() {
    let mut registry = AliasRegistry::new();
    let first = registry.register(Molecule::new("CH3Cl"));
    let second = registry.register(Molecule::new("CH3Cl").with_alias("74-87-3", AliasKind::Cas));

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&registry.resolve("CH3Cl").unwrap(), &second));
    assert_eq!(registry.len(), 1);
    assert!(registry.get("74-87-3").is_none());
}

#[test]
fn test_source_citation() {
    let source = sample_source();
    assert_eq!(
        source.citation(),
        "J.J. Harrison, N. Allen, P. Bernath. Infrared absorption cross sections. \
         JQSRT 2015;151:210-216. doi:10.1016/j.jqsrt.2014.09.023. "
    );
}

#[test]
fn test_source_short_citation() {
    let source = sample_source();
    assert_eq!(source.short_citation(), "Article 12: J.J. Harrison et al. (2015)");

    let mut single = Source::new("x");
    single.source_type = Some("ARTICLE".to_string());
    single.authors = Some("Smith".to_string());
    assert_eq!(single.short_citation(), "Article: Smith");
}

#[test]
fn test_source_display_truncates() {
    let mut source = sample_source();
    source.title = Some("A".repeat(50));
    let line = source.display();

    assert!(line.starts_with("J.J. Harrison, N. Allen, P. Bernath // "));
    assert!(line.contains(&format!(" // {} // ", "A".repeat(35))));
    assert!(line.ends_with("JQSRT // 2015"));
}

#[test]
fn test_empty_source_citation() {
    assert_eq!(Source::new("empty").citation(), "");
}

#[test]
fn test_source_json_roundtrip() {
    let source = sample_source();
    let json = source.to_json().unwrap();
    assert!(json.contains("\"type\":\"article\""));

    let restored = Source::from_json(&json).unwrap();
    assert_eq!(restored, source);
}

#[test]
fn test_alias_kind_serialization() {
    let alias = Alias::with_kind("CFC-11", AliasKind::Acronym);
    let json = serde_json::to_string(&alias).unwrap();
    assert!(json.contains("\"type\":\"acronym\""));

    let custom: Alias =
        serde_json::from_str(r#"{"id":3,"alias":"R-11","type":"refrigerant"}"#).unwrap();
    assert_eq!(custom.kind, AliasKind::Other("refrigerant".to_string()));
}

#[test]
fn test_isotopologue_registry() {
    let mut registry: AliasRegistry<Isotopologue> = AliasRegistry::new();
    let iso = registry.get_or_create("(12C)(16O)2");

    assert_eq!(iso.to_string(), "(12C)(16O)2");
    assert!(registry.get("(12C)(16O)2").is_some());
}
