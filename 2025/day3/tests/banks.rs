use day3::Bank;

fn max_joltage(text: &str, digit_n: usize) -> Option<u64> {
    Bank::try_from(text).unwrap().max_joltage(digit_n)
}

#[test]
fn pick_two_batteries() {
    assert_eq!(max_joltage("987654321111111", 2), Some(98));
    assert_eq!(max_joltage("811111111111119", 2), Some(89));
    assert_eq!(max_joltage("234234234234278", 2), Some(78));
    assert_eq!(max_joltage("818181911112111", 2), Some(92));
}

#[test]
fn pick_twelve_batteries() {
    assert_eq!(max_joltage("987654321111111", 12), Some(987654321111));
    assert_eq!(max_joltage("811111111111119", 12), Some(811111111119));
    assert_eq!(max_joltage("234234234234278", 12), Some(434234234278));
    assert_eq!(max_joltage("818181911112111", 12), Some(888911112111));
}

#[test]
fn pick_from_long_bank() {
    let bank = "7657456331563216562634654224322452566143465272217643337113211677757511536441571276777725366617123589";

    assert_eq!(max_joltage(bank, 12), Some(777777777789));
}

#[test]
fn bank_too_short() {
    assert_eq!(max_joltage("12", 3), None);
    assert_eq!(max_joltage("12", 2), Some(12));
    assert_eq!(max_joltage("12", 0), Some(0));
}

#[test]
fn bad_bank_text() {
    assert!(Bank::try_from("12a4").is_err());
}

#[test]
fn zero_is_not_a_joltage() {
    assert!(Bank::try_from("1204").is_err());
    assert!(Bank::try_from("0").is_err());
}
