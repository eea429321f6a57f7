use envport_core::{resolve, ExportInputs, Snapshot};
use proptest::prelude::*;
use std::collections::BTreeMap;

#[test]
fn duplicate_keys_keep_last_line() {
    let snapshot = Snapshot::parse("A=1\nB=x\nA=2");
    assert_eq!(snapshot.get("A"), Some("2"));
    assert_eq!(snapshot.get("B"), Some("x"));
}

fn pairs() -> impl Strategy<Value = BTreeMap<String, String>> {
    proptest::collection::btree_map(
        "[A-Za-z_][A-Za-z0-9_]{0,12}",
        "[ -~]{0,24}".prop_filter("non-blank", |value| !value.trim().is_empty()),
        0..12,
    )
}

proptest! {
    #[test]
    fn parse_is_idempotent(values in pairs()) {
        let raw: String = values
            .iter()
            .map(|(key, value)| format!("{key}={value}\n"))
            .collect();
        let first = Snapshot::parse(&raw);
        let second = Snapshot::parse(&first.to_dotenv());
        prop_assert_eq!(second, first);
    }

    #[test]
    fn parsed_values_keep_embedded_separators(key in "[A-Z]{1,8}", value in "[a-z0-9=+/]{1,32}") {
        let snapshot = Snapshot::parse(&format!("{key}={value}"));
        prop_assert_eq!(snapshot.get(&key), Some(value.as_str()));
    }

    #[test]
    fn remainder_exports_every_key_once(values in pairs()) {
        let snapshot: Snapshot = values.clone().into_iter().collect();
        let (_, result) = resolve(&snapshot, ExportInputs::default());
        let exported: BTreeMap<String, String> = result
            .resolved()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        prop_assert_eq!(result.len(), values.len());
        prop_assert_eq!(exported, values);
    }
}
