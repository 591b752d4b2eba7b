use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn new_uses_defaults() {
    let cfg = Config::new("/tmp/sun");
    assert_eq!(cfg.data_dir, PathBuf::from("/tmp/sun"));
    assert_eq!(cfg.tail_bytes, 16 * 1024);
    assert!(!cfg.verbose);
}

#[test]
fn explicit_values_are_used() {
    let cfg = Config::from_lookup(lookup_from(&[
        (DATA_DIR_ENV, "/data/notes"),
        (TAIL_KB_ENV, "4"),
        (DEBUG_ENV, ""),
    ]))
    .unwrap();

    assert_eq!(cfg.data_dir, PathBuf::from("/data/notes"));
    assert_eq!(cfg.tail_bytes, 4 * 1024);
    assert!(cfg.verbose);
}

#[test]
fn debug_unset_means_quiet() {
    let cfg = Config::from_lookup(lookup_from(&[(DATA_DIR_ENV, "/d")])).unwrap();
    assert!(!cfg.verbose);
    assert_eq!(cfg.tail_bytes, DEFAULT_TAIL_KB * 1024);
}

#[test]
fn default_data_dir_lives_in_home() {
    // only meaningful where a home directory is known
    if let Some(home) = dirs::home_dir() {
        let cfg = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.data_dir, home.join(DATA_DIR_NAME));
    }
}

#[test]
fn empty_data_dir_falls_back_to_home() {
    if let Some(home) = dirs::home_dir() {
        let cfg = Config::from_lookup(lookup_from(&[(DATA_DIR_ENV, "")])).unwrap();
        assert_eq!(cfg.data_dir, home.join(DATA_DIR_NAME));
    }
}

#[test]
fn invalid_tail_is_rejected() {
    for bad in ["", "abc", "-1", "0", "1.5"] {
        let err = Config::from_lookup(lookup_from(&[(DATA_DIR_ENV, "/d"), (TAIL_KB_ENV, bad)]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: TAIL_KB_ENV,
                value: bad.to_string()
            }
        );
    }
}
