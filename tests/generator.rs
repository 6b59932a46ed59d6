use chrono::{DateTime, Duration, Months, Utc};
use fortuity::rng::alphabet::{BASE64_URL, HEX, UNMISTAKABLE};
use fortuity::{Alea, RandomError, RandomGenerator, create_with_seeds};

/// Replays a fixed list of fractions, cycling when exhausted.
struct Scripted {
    values: Vec<f64>,
    next: usize,
}

impl Scripted {
    fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }

    fn draws(&self) -> usize {
        self.next
    }
}

impl RandomGenerator for Scripted {
    fn fraction(&mut self) -> f64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

const ALMOST_ONE: f64 = 1.0 - f64::EPSILON;

fn is_uuid_v4(s: &str) -> bool {
    let groups: Vec<&str> = s.split('-').collect();
    let sizes: Vec<usize> = groups.iter().map(|g| g.len()).collect();

    sizes == [8, 4, 4, 4, 12]
        && s.chars().all(|c| c == '-' || HEX.contains(c))
        && groups[2].starts_with('4')
        && groups[3].starts_with(['8', '9', 'a', 'b'])
}

#[test]
fn hex_string_length_and_charset() {
    let mut random = Alea::new(["test"]);

    for n in [0, 1, 5, 20, 100] {
        let s = random.hex_string(n);
        assert_eq!(s.len(), n);
        assert!(s.chars().all(|c| HEX.contains(c)));
    }

    assert!(u64::from_str_radix(&random.hex_string(8), 16).is_ok());
}

#[test]
fn id_and_secret_lengths_and_alphabets() {
    let mut random = Alea::new(["test"]);

    assert_eq!(random.id().len(), 17);
    assert_eq!(random.secret().len(), 43);

    for n in [0, 1, 17, 43, 1000] {
        let id = random.id_with_len(n);
        assert_eq!(id.len(), n);
        assert!(id.chars().all(|c| UNMISTAKABLE.contains(c)));
        assert!(!id.contains(['0', '1', 'I', 'l', 'O']));

        let secret = random.secret_with_len(n);
        assert_eq!(secret.len(), n);
        assert!(secret.chars().all(|c| BASE64_URL.contains(c)));
    }
}

#[test]
fn one_draw_per_character() {
    let mut random = Scripted::new(&[0.0]);

    random.id_with_len(10);
    assert_eq!(random.draws(), 10);

    random.hex_string(7);
    assert_eq!(random.draws(), 17);

    random.uuid();
    assert_eq!(random.draws(), 33);
}

#[test]
fn choice_maps_fraction_to_index() {
    let items = ["a", "b", "c", "d"];

    assert_eq!(Scripted::new(&[0.0]).choice(&items), Some(&"a"));
    assert_eq!(Scripted::new(&[0.5]).choice(&items), Some(&"c"));
    assert_eq!(Scripted::new(&[ALMOST_ONE]).choice(&items), Some(&"d"));

    assert_eq!(Scripted::new(&[0.3]).choice_str("héllo"), "é");
    assert_eq!(Scripted::new(&[ALMOST_ONE]).choice_str("xyz"), "z");
}

#[test]
fn choice_on_empty_returns_sentinel() {
    let mut random = Alea::new(["empty"]);
    let empty: [u8; 0] = [];

    assert_eq!(random.choice(&empty), None);
    assert_eq!(random.choice_str(""), "");
}

#[test]
fn choice_is_not_biased() {
    let mut random = Alea::new(["distribution"]);
    let items = ['a', 'b', 'c'];
    let mut counts = [0usize; 3];

    for _ in 0..300 {
        let picked = random.choice(&items).unwrap();
        counts[items.iter().position(|c| c == picked).unwrap()] += 1;
    }

    for count in counts {
        assert!((30..=210).contains(&count), "skewed counts: {counts:?}");
    }
}

#[test]
fn uuid_format() {
    let mut random = Alea::new(["uuid"]);

    for _ in 0..1000 {
        let uuid = random.uuid();
        assert!(is_uuid_v4(&uuid), "bad uuid: {uuid}");
    }
}

#[test]
fn uuid_forces_version_and_variant() {
    assert_eq!(
        Scripted::new(&[0.0]).uuid(),
        "00000000-0000-4000-8000-000000000000"
    );
    assert_eq!(
        Scripted::new(&[ALMOST_ONE]).uuid(),
        "ffffffff-ffff-4fff-bfff-ffffffffffff"
    );
}

#[test]
fn integer_bounds_are_inclusive() {
    let mut random = Alea::new(["integer"]);

    for (min, max) in [(0, 100), (5, 15), (-10, -1), (-5, 5), (7, 7)] {
        for _ in 0..1000 {
            let n = random.integer(min, max);
            assert!((min..=max).contains(&n), "{n} outside [{min}, {max}]");
        }
    }

    assert_eq!(Scripted::new(&[ALMOST_ONE]).integer(1, 10), 10);
    assert_eq!(Scripted::new(&[0.0]).integer(1, 10), 1);
}

#[test]
fn cardinal_is_integer_from_zero() {
    let mut a = Alea::new(["cardinal"]);
    let mut b = Alea::new(["cardinal"]);

    for _ in 0..100 {
        assert_eq!(a.cardinal(25), b.integer(0, 25));
    }

    assert_eq!(Scripted::new(&[ALMOST_ONE]).cardinal(100), 100);
}

#[test]
fn number_upper_bound_is_exclusive() {
    let mut random = Alea::new(["number"]);

    for _ in 0..10_000 {
        let n = random.number(5.0, 15.0);
        assert!((5.0..15.0).contains(&n), "{n} outside [5, 15)");
    }

    for _ in 0..1000 {
        let n = random.number(0.0, 10.0);
        assert!((0.0..10.0).contains(&n));
    }
}

#[test]
fn decimal_rounds_to_precision() {
    let mut random = Alea::new(["decimal"]);

    for _ in 0..1000 {
        let d = random.decimal(2, 1.0);
        assert!((0.0..=1.0).contains(&d));
        assert_eq!((d * 100.0).round() / 100.0, d);
    }

    assert_eq!(Scripted::new(&[0.1234]).decimal(3, 10.0), 1.234);
    assert_eq!(Scripted::new(&[0.125]).decimal(2, 1.0), 0.13);
    assert_eq!(Scripted::new(&[0.9999]).decimal(2, 1.0), 1.0);
}

#[test]
fn from_range_handles_negative_ranges() {
    let mut random = Alea::new(["range"]);

    for _ in 0..1000 {
        let n = random.from_range(-10.0, -5.0);
        assert!((-10.0..-5.0).contains(&n));
    }

    assert_eq!(Scripted::new(&[0.5]).from_range(-4.0, 4.0), 0.0);
}

#[test]
fn date_within_given_range() {
    let start: DateTime<Utc> = "2020-01-01T00:00:00Z".parse().unwrap();
    let end: DateTime<Utc> = "2020-12-31T00:00:00Z".parse().unwrap();
    let mut random = Alea::new(["date"]);

    for _ in 0..1000 {
        let d = random.date(Some(start), Some(end));
        assert!(d >= start && d <= end);
    }

    assert_eq!(Scripted::new(&[0.0]).date(Some(start), Some(end)), start);
}

#[test]
fn date_defaults_to_last_hundred_years() {
    let before = Utc::now();
    let d = Alea::new(["recent"]).date(None, None);
    let after = Utc::now();

    // Timestamps are truncated to whole milliseconds.
    let floor = before.checked_sub_months(Months::new(1200)).unwrap() - Duration::milliseconds(1);
    assert!(d >= floor && d <= after);
}

#[test]
fn date_is_deterministic_when_seeded() {
    let start: DateTime<Utc> = "2020-01-01T00:00:00Z".parse().unwrap();
    let end: DateTime<Utc> = "2020-12-31T00:00:00Z".parse().unwrap();

    let a = Alea::new(["date-test"]).date(Some(start), Some(end));
    let b = Alea::new(["date-test"]).date(Some(start), Some(end));

    assert_eq!(a, b);
}

#[test]
fn create_with_seeds_requires_seeds() {
    let random = Alea::new(["parent"]);

    let err = random.create_with_seeds(Vec::<i32>::new()).unwrap_err();
    assert_eq!(err, RandomError::NoSeeds);
    assert_eq!(err.to_string(), "no seeds were provided");

    assert_eq!(create_with_seeds(Vec::<&str>::new()).unwrap_err(), RandomError::NoSeeds);
}

#[test]
fn create_with_seeds_is_independent_and_deterministic() {
    let parent = Scripted::new(&[0.25]);

    let mut a = parent.create_with_seeds(["child"]).unwrap();
    let mut b = create_with_seeds(["child"]).unwrap();

    assert_eq!(a.id(), b.id());
    assert_eq!(parent.draws(), 0);
}

#[test]
fn boxed_generators_keep_the_contract() {
    let mut boxed: Box<dyn RandomGenerator> = Box::new(Alea::new([0]));
    let mut plain = Alea::new([0]);

    assert_eq!(boxed.id(), plain.id());
    assert_eq!(boxed.uuid(), plain.uuid());
}
