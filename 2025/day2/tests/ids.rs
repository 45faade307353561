use day2::{IdRange, RepeatRule};

fn invalid_ids(text: &str, rule: RepeatRule) -> Vec<u64> {
    IdRange::try_from(text).unwrap().invalid_ids(rule)
}

#[test]
fn single_id_range() {
    assert_eq!(invalid_ids("1010-1010", RepeatRule::Twice), vec![1010]);
}

#[test]
fn ids_repeated_twice() {
    let cases: [(&str, &[u64]); 8] = [
        ("11-22", &[11, 22]),
        ("95-115", &[99]),
        ("998-1012", &[1010]),
        ("1188511880-1188511890", &[1188511885]),
        ("222220-222224", &[222222]),
        ("446443-446449", &[446446]),
        ("38593856-38593862", &[38593859]),
        ("1698522-1698528", &[]),
    ];
    for (text, ids) in cases {
        assert_eq!(invalid_ids(text, RepeatRule::Twice), ids, "range {}", text);
    }
}

#[test]
fn ids_repeated_at_least_twice() {
    let cases: [(&str, &[u64]); 10] = [
        ("11-22", &[11, 22]),
        ("95-115", &[99, 111]),
        ("998-1012", &[999, 1010]),
        ("1188511880-1188511890", &[1188511885]),
        ("222220-222224", &[222222]),
        ("446443-446449", &[446446]),
        ("38593856-38593862", &[38593859]),
        ("565653-565659", &[565656]),
        ("824824821-824824827", &[824824824]),
        ("2121212118-2121212124", &[2121212121]),
    ];
    for (text, ids) in cases {
        assert_eq!(
            invalid_ids(text, RepeatRule::AtLeastTwice),
            ids,
            "range {}",
            text
        );
    }
}

#[test]
fn single_digit_never_repeats() {
    assert!(!RepeatRule::AtLeastTwice.matches(7));
    assert!(RepeatRule::AtLeastTwice.matches(777));
    assert!(!RepeatRule::Twice.matches(777));
}

#[test]
fn overlapping_ranges_count_once() {
    let ranges = [
        IdRange::try_from("10-30").unwrap(),
        IdRange::try_from("20-25").unwrap(),
    ];

    assert_eq!(day2::invalid_id_sum(&ranges, RepeatRule::Twice), 11 + 22);
}

#[test]
fn bad_range_text() {
    assert!(IdRange::try_from("12").is_err());
    assert!(IdRange::try_from("a-3").is_err());
    assert!(IdRange::try_from("30-20").is_err());
}
