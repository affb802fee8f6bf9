use fnk_comb::apply;
#[cfg(not(feature = "sync"))]
use fnk_comb::{Fun, curry2};
use fnk_registry::{Bindings, Expr, Registry, Shared, SharedCell, SharedRegistry, Stmt};

#[cfg(not(feature = "sync"))]
type Add = Fun<i32, Fun<i32, i32>>;
#[cfg(not(feature = "sync"))]
type Concat = Fun<String, Fun<String, String>>;

// Boxed chains are single-threaded values; under `sync` the registry only
// accepts `Send + Sync` entries.
#[cfg(not(feature = "sync"))]
#[test]
fn test_registry_of_curried_functions() {
    let mut registry = Registry::new();
    registry.store("add", curry2(|a: i32, b: i32| a + b));
    registry.store(
        "concat",
        curry2(|a: String, b: String| format!("{} {}", a, b)),
    );

    let add = registry.get::<Add>("add").unwrap();
    assert_eq!(add(1)(2), 3);

    let concat = registry.get::<Concat>("concat").unwrap();
    assert_eq!(
        concat("so".to_string())("much".to_string()),
        "so much".to_string()
    );

    // Mismatched chain type or unknown key: absent either way.
    assert!(registry.get::<Concat>("add").is_none());
    assert!(registry.get::<Add>("sub").is_none());
}

#[test]
fn test_registry_lookup_feeds_applicative() {
    let mut registry = Registry::new();
    registry.store("double", (|x: i32| x * 2) as fn(i32) -> i32);

    let double = registry.get::<fn(i32) -> i32>("double").copied();
    assert_eq!(apply(double, Some(21)), Some(42));

    let triple = registry.get::<fn(i32) -> i32>("triple").copied();
    assert_eq!(apply(triple, Some(21)), None);
}

#[test]
fn test_registry_of_rules() {
    let mut registry = Registry::new();
    registry.store("both", Expr::and(Expr::var("a"), Expr::var("b")));

    let mut bindings = Bindings::default();
    bindings.insert("a".into(), true);
    bindings.insert("b".into(), true);

    let rule = registry.get::<Expr>("both").unwrap();
    assert_eq!(rule.eval(&bindings), Ok(true));
    assert!(registry.get::<Stmt>("both").is_none());
}

#[cfg(not(feature = "sync"))]
#[test]
fn test_shared_registry() {
    let shared: SharedRegistry = Shared::new(SharedCell::new(Registry::new()));
    shared.borrow_mut().store("answer", 42i32);
    assert_eq!(shared.borrow().get::<i32>("answer").copied(), Some(42));
}

#[cfg(feature = "sync")]
#[test]
fn test_shared_registry() {
    let shared: SharedRegistry = Shared::new(SharedCell::new(Registry::new()));
    shared.write().unwrap().store("answer", 42i32);
    assert_eq!(shared.read().unwrap().get::<i32>("answer").copied(), Some(42));
}

#[cfg(feature = "sync")]
#[test]
fn test_shared_registry_across_threads() {
    let shared: SharedRegistry = Shared::new(SharedCell::new(Registry::new()));

    let writer = Shared::clone(&shared);
    std::thread::spawn(move || {
        writer.write().unwrap().store("ready", true);
    })
    .join()
    .unwrap();

    assert_eq!(shared.read().unwrap().get::<bool>("ready").copied(), Some(true));
}
