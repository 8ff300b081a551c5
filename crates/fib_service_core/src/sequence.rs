use num_bigint::BigUint;

/// Generates the Fibonacci sequence F(0)..=F(`index`), O(n) time and space.
///
/// Callers are responsible for bounding `index`
/// (see [`crate::contract::MAX_SEQUENCE_INDEX`]); this function does not
/// re-validate. Terms are `BigUint` because F(1000) has 209 decimal digits.
pub fn fibonacci_sequence(index: u64) -> Vec<BigUint> {
    let length = index as usize + 1;
    let mut sequence = Vec::with_capacity(length);
    sequence.push(BigUint::from(0u8));
    if index == 0 {
        return sequence;
    }

    sequence.push(BigUint::from(1u8));
    for position in 2..length {
        let next = &sequence[position - 1] + &sequence[position - 2];
        sequence.push(next);
    }

    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(sequence: &[BigUint]) -> Vec<String> {
        sequence.iter().map(BigUint::to_string).collect()
    }

    #[test]
    fn generates_base_cases() {
        assert_eq!(rendered(&fibonacci_sequence(0)), ["0"]);
        assert_eq!(rendered(&fibonacci_sequence(1)), ["0", "1"]);
        assert_eq!(
            rendered(&fibonacci_sequence(5)),
            ["0", "1", "1", "2", "3", "5"]
        );
    }

    #[test]
    fn matches_known_values_at_index_100() {
        let sequence = fibonacci_sequence(100);
        assert_eq!(sequence.len(), 101);
        assert_eq!(
            sequence[99],
            BigUint::parse_bytes(b"218922995834555169026", 10).expect("literal should parse")
        );
        assert_eq!(
            sequence[100],
            BigUint::parse_bytes(b"354224848179261915075", 10).expect("literal should parse")
        );
    }

    #[test]
    fn satisfies_recurrence_at_full_range() {
        let sequence = fibonacci_sequence(1_000);
        assert_eq!(sequence.len(), 1_001);
        assert_eq!(sequence[0], BigUint::from(0u8));
        assert_eq!(sequence[1], BigUint::from(1u8));
        for position in 2..sequence.len() {
            assert_eq!(
                sequence[position],
                &sequence[position - 1] + &sequence[position - 2],
                "recurrence should hold at index {position}"
            );
        }
        assert_eq!(sequence[1_000].to_string().len(), 209);
    }
}
