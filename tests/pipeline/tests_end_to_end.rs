//! Pipeline tests over in-memory corpora.

use crate::helpers::corpus_helpers::*;
use crate::helpers::source_fixtures::*;
use mibtree::{MibError, ParseOptions, RootLabels, build_tree, parse_corpus};
use rstest::rstest;
use std::collections::BTreeSet;

// =============================================================================
// DEPENDENCY GATE
// =============================================================================

#[test]
fn test_missing_vendor_module_listed_once() {
    let lines = lines_from_modules(&[VENDOR_MODULE]);
    let err = parse_corpus(&lines, &ParseOptions::default()).unwrap_err();

    assert_eq!(
        err.missing_modules().map(<[String]>::to_vec),
        Some(vec!["vendorMIB.mib".to_string()])
    );
    assert!(err.to_string().contains("vendorMIB.mib"));
}

#[test]
fn test_imports_satisfied_across_modules() {
    let lines = lines_from_modules(&[IF_MODULE, SMI_MODULE]);
    assert!(parse_corpus(&lines, &ParseOptions::default()).is_ok());
}

#[test]
fn test_if_module_alone_needs_smi() {
    let lines = lines_from_modules(&[IF_MODULE]);
    let err = parse_corpus(&lines, &ParseOptions::default()).unwrap_err();
    assert_eq!(
        err.missing_modules().unwrap().to_vec(),
        vec!["SNMPv2-SMI.mib".to_string()]
    );
}

// =============================================================================
// RESOLUTION
// =============================================================================

#[rstest]
#[case("org", "1.3")]
#[case("internet", "1.3.6.1")]
#[case("mib-2", "1.3.6.1.2.1")]
#[case("enterprises", "1.3.6.1.4.1")]
#[case("interfaces", "1.3.6.1.2.1.2")]
#[case("ifNumber", "1.3.6.1.2.1.2.1")]
#[case("ifEntry", "1.3.6.1.2.1.2.2.1")]
#[case("ifIndex", "1.3.6.1.2.1.2.2.1.1")]
fn test_standard_oids(#[case] name: &str, #[case] oid: &str) {
    let lines = lines_from_modules(&[IF_MODULE, SMI_MODULE]);
    let nodes = parse_corpus(&lines, &ParseOptions::default()).unwrap();

    let node = nodes
        .iter()
        .find(|n| n.name == name)
        .unwrap_or_else(|| panic!("{name} not extracted"));
    assert_eq!(node.oid, oid);
}

#[test]
fn test_module_identity_and_macro_not_extracted() {
    let lines = lines_from_modules(&[IF_MODULE, SMI_MODULE]);
    let nodes = parse_corpus(&lines, &ParseOptions::default()).unwrap();

    let names: BTreeSet<_> = nodes.iter().map(|n| n.name.as_str()).collect();
    assert!(!names.contains("ifMIB"));
    assert!(!names.contains("OBJECT-TYPE"));
    assert_eq!(nodes.len(), 12);
}

#[test]
fn test_typed_description_spans_lines() {
    let lines = lines_from_modules(&[IF_MODULE, SMI_MODULE]);
    let nodes = parse_corpus(&lines, &ParseOptions::default()).unwrap();

    let if_number = nodes.iter().find(|n| n.name == "ifNumber").unwrap();
    assert_eq!(
        if_number.description,
        "\"The number of network interfaces (regardless of their current state) present on this system.\""
    );
    let interfaces = nodes.iter().find(|n| n.name == "interfaces").unwrap();
    assert!(interfaces.description.is_empty());
}

#[test]
fn test_cycle_terminates_with_error() {
    let lines = lines_from_modules(&[CYCLIC_MODULE]);
    let err = parse_corpus(&lines, &ParseOptions::default()).unwrap_err();
    assert!(matches!(err, MibError::CycleDetected { .. }));
}

#[test]
fn test_every_oid_has_dotted_numeric_shape() {
    let lines = lines_from_modules(&[IF_MODULE, SMI_MODULE]);
    let nodes = parse_corpus(&lines, &ParseOptions::default()).unwrap();

    for node in &nodes {
        let (root, rest) = node.oid.split_once('.').expect("at least two arcs");
        assert_eq!(root, "1");
        assert!(
            rest.split('.').all(|arc| arc.parse::<u32>().is_ok()),
            "bad OID {} for {}",
            node.oid,
            node.name
        );
    }
}

// =============================================================================
// FOREST
// =============================================================================

#[test]
fn test_forest_has_single_org_root() {
    let lines = lines_from_modules(&[IF_MODULE, SMI_MODULE]);
    let nodes = parse_corpus(&lines, &ParseOptions::default()).unwrap();
    let forest = build_tree(&nodes, &RootLabels::default());

    assert_eq!(forest.roots.len(), 1);
    assert_eq!(forest.roots[0].name, "org");
    assert!(forest.orphans.is_empty());
}

#[test]
fn test_forest_flattens_to_flat_names() {
    let lines = lines_from_modules(&[IF_MODULE, SMI_MODULE]);
    let nodes = parse_corpus(&lines, &ParseOptions::default()).unwrap();
    let forest = build_tree(&nodes, &RootLabels::default());

    let flattened: Vec<_> = forest.flatten().iter().map(|n| n.name.as_str()).collect();
    let unique: BTreeSet<_> = flattened.iter().copied().collect();
    assert_eq!(unique.len(), flattened.len(), "no duplicates in forest");

    let flat: BTreeSet<_> = nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(unique, flat);
}

#[test]
fn test_every_child_extends_its_parent_oid() {
    let lines = lines_from_modules(&[IF_MODULE, SMI_MODULE]);
    let nodes = parse_corpus(&lines, &ParseOptions::default()).unwrap();
    let forest = build_tree(&nodes, &RootLabels::default());

    for parent in forest.flatten() {
        for child in parent.children() {
            assert_eq!(child.oid, format!("{}.{}", parent.oid, child.local_id));
        }
    }
}

#[test]
fn test_orphans_only_in_flat_output() {
    let module = "X-MIB DEFINITIONS ::= BEGIN\n\
                  top OBJECT IDENTIFIER ::= { iso 1 }\n\
                  stray OBJECT IDENTIFIER ::= { elsewhere 4 }\n\
                  END";
    let lines = lines_from_modules(&[module]);
    let nodes = parse_corpus(&lines, &ParseOptions::default()).unwrap();
    let forest = build_tree(&nodes, &RootLabels::default());

    assert!(nodes.iter().any(|n| n.name == "stray" && n.oid == "1.4"));
    assert!(forest.flatten().iter().all(|n| n.name != "stray"));
    assert_eq!(forest.orphans, vec!["stray".to_string()]);
}
