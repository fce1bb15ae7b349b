
use crate::{Name, Path, WILDCARD};

const SAMPLES: &[&str] = &[
    "",
    "*",
    ":",
    "::",
    "root",
    "root:org",
    "root::org",
    ":root",
    "root:",
    "Root:Org",
    "föö:bär",
    "a/b:c",
    " root ",
];

#[test]
fn integration_construct_round_trips_any_string() {
    #[cfg(feature = "logicalcluster_tracing")]
    crate::logicalcluster_tracing::init();

    for value in SAMPLES {
        assert_eq!(Path::new(*value).to_string(), *value);
        assert_eq!(Name::new(*value).to_string(), *value);
    }
}

#[test]
fn integration_valid_name_round_trips_through_path() {
    for value in ["root", "62208dab", "us-west-invoices", "0a"] {
        let name = Name::new(value);
        assert!(name.is_valid());
        assert_eq!(name.path().name(), Some(name.clone()));
        assert_eq!(Name::try_from(Path::from(name.clone())), Ok(name));
    }
}

#[test]
fn integration_join_then_split_recovers_parts() {
    let parents = ["", "root", "root:org", "root::org", "*"];
    let segments = ["ws", "", "us-west", "Not_Valid"];
    for parent in parents {
        for segment in segments {
            let parent = Path::new(parent);
            let joined = parent.join(segment);
            let (got_parent, got_segment) = joined.split();
            assert_eq!(got_parent, parent, "parent of {joined:?}");
            assert_eq!(got_segment, segment, "segment of {joined:?}");
            assert_eq!(joined.base(), segment);
        }
    }
}

#[test]
fn integration_operations_are_total() {
    for value in SAMPLES {
        let path = Path::new(*value);
        let _ = path.split();
        let _ = path.base();
        let _ = path.parent();
        let _ = path.name();
        let _ = path.join(value);
        let _ = path.request_path();
        let _ = path.is_valid();
        assert!(path.has_prefix(&Path::default()));
        assert!(path.has_prefix(&path));
    }
}

#[test]
fn integration_parent_and_name_agree() {
    for value in SAMPLES {
        let path = Path::new(*value);
        assert_eq!(path.parent().is_some(), path.name().is_none(), "{value:?}");
    }
}

#[test]
fn integration_wildcard_is_only_non_grammar_valid_path() {
    let (path, valid) = Path::new_validated(WILDCARD.to_string());
    assert!(valid);
    assert!(path.is_wildcard());
    assert_eq!(path.name(), Some(Name::new("*")));
    assert!(!Name::new("*").is_valid());
}
