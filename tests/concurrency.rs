use once_cell::sync::Lazy;
use thompson::Regex;

static VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"v?(1|2)\.(0|1)(\.(0|1|2))?(-rc)?").unwrap()
});

#[test]
fn one_regex_many_threads() {
    let inputs = [
        ("1.0", true),
        ("v2.1", true),
        ("1.1.2", true),
        ("v2.0.1-rc", true),
        ("3.0", false),
        ("1.", false),
        ("v1.0.3", false),
        ("1.0-rc-rc", false),
    ];
    std::thread::scope(|scope| {
        for (input, expected) in inputs {
            scope.spawn(move || {
                for _ in 0..100 {
                    assert_eq!(VERSION.is_match(input), expected, "{}", input);
                }
            });
        }
    });
}

#[test]
fn clones_move_across_threads() {
    let re = Regex::new("ping|pong").unwrap();
    let handles: Vec<_> = ["ping", "pong", "pang"]
        .into_iter()
        .map(|input| {
            let re = re.clone();
            std::thread::spawn(move || re.is_match(input))
        })
        .collect();
    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, true, false]);
}
