use super::*;

#[test]
fn registration_is_idempotent() {
    let mut reg = StyleRegistry::new();
    assert!(reg.register(STYLE_KEY, STYLESHEET));
    assert!(!reg.register(STYLE_KEY, "/* other */"));
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.get(STYLE_KEY), Some(STYLESHEET));
}

#[test]
fn distinct_keys_coexist() {
    let mut reg = StyleRegistry::new();
    reg.register("a", "x");
    reg.register("b", "y");
    assert!(reg.contains("a") && reg.contains("b"));
    assert!(!reg.is_empty());
}
