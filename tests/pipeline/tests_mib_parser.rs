//! Directory loading through MibParser.

use crate::helpers::corpus_helpers::*;
use crate::helpers::source_fixtures::*;
use mibtree::project::LoaderConfig;
use mibtree::{MibError, MibParser, ParseOptions, RootLabels};

#[test]
fn test_parse_directory() {
    let dir = mib_dir(&[("SNMPv2-SMI.mib", SMI_MODULE), ("IF-MIB.mib", IF_MODULE)]);
    let parser = MibParser::new(dir.path());

    let nodes = parser.parse().unwrap();
    assert_eq!(nodes.len(), 12);
    // IF-MIB.mib sorts first, so its declarations lead
    assert_eq!(nodes[0].name, "interfaces");
}

#[test]
fn test_tree_from_directory() {
    let dir = mib_dir(&[("SNMPv2-SMI.mib", SMI_MODULE), ("IF-MIB.mib", IF_MODULE)]);
    let forest = MibParser::new(dir.path()).tree().unwrap();

    assert_eq!(forest.roots.len(), 1);
    assert_eq!(forest.len(), 12);
}

#[test]
fn test_missing_dependency_from_directory() {
    let dir = mib_dir(&[("IF-MIB.mib", IF_MODULE)]);
    let err = MibParser::new(dir.path()).parse().unwrap_err();
    assert!(matches!(err, MibError::MissingDependency { .. }));
}

#[test]
fn test_unreadable_file_does_not_abort() {
    let dir = mib_dir(&[("SNMPv2-SMI.mib", SMI_MODULE)]);
    std::fs::write(dir.path().join("broken.mib"), [0xc3, 0x28, 0xff]).unwrap();

    let parser = MibParser::new(dir.path());
    let loaded = parser.read_corpus().unwrap();
    assert_eq!(loaded.failures.len(), 1);

    let nodes = parser.parse().unwrap();
    assert_eq!(nodes.len(), 7);
}

#[test]
fn test_missing_directory_is_io_error() {
    let dir = mib_dir(&[]);
    let err = MibParser::new(dir.path().join("gone")).parse().unwrap_err();
    assert!(matches!(err, MibError::Io { .. }));
}

#[test]
fn test_options_flow_through() {
    let dir = mib_dir(&[
        ("ACME-MIB.mib", VENDOR_MODULE),
        ("notes.txt", "ignored OBJECT IDENTIFIER ::= { iso 5 }"),
    ]);
    let config = LoaderConfig::new(dir.path()).with_extensions(["mib"]);
    let options = ParseOptions::new()
        .skip_dependency_check()
        .with_root_labels(RootLabels::default().with("enterprises"));
    let parser = MibParser::with_options(config, options);

    let forest = parser.tree().unwrap();
    assert_eq!(forest.roots.len(), 1);
    assert_eq!(forest.roots[0].name, "acme");
    assert_eq!(forest.roots[0].oid, "1.9999");
}

#[cfg(feature = "interchange")]
#[test]
fn test_json_outputs() {
    let module = "TOP-MIB DEFINITIONS ::= BEGIN\n\
                  top OBJECT IDENTIFIER ::= { iso 1 }\n\
                  child OBJECT IDENTIFIER ::= { top 2 }\n\
                  END\n";
    let dir = mib_dir(&[("TOP-MIB.mib", module)]);
    let parser = MibParser::new(dir.path());

    let objects = parser.objects_json().unwrap();
    assert_eq!(
        objects,
        r#"[{"name":"top","oid":"1.1","id":"1","parent":"iso","description":""},{"name":"child","oid":"1.1.2","id":"2","parent":"top","description":""}]"#
    );

    let tree = parser.tree_json().unwrap();
    assert_eq!(
        tree,
        r#"[{"name":"top","oid":"1.1","id":"1","parent":"iso","description":"","children":[{"name":"child","oid":"1.1.2","id":"2","parent":"top","description":""}]}]"#
    );
}
