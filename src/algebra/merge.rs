use crate::models::Interval;

/// Union of a set of intervals as minimal non-overlapping intervals, sorted
/// ascending by start. Overlapping and touching intervals are combined; a
/// combined segment keeps the payload of the first interval in `(start, end)`
/// order, since one segment cannot carry two payloads.
pub fn merge_intervals<P: Clone>(intervals: &[Interval<P>]) -> Vec<Interval<P>> {
    let mut sorted = intervals.to_vec();
    for interval in &mut sorted {
        // inverted ranges behave as zero-length
        if interval.end < interval.start {
            interval.end = interval.start;
        }
    }
    sorted.sort_by(|a, b| (a.start, a.end).cmp(&(b.start, b.end)));

    let mut merged: Vec<Interval<P>> = Vec::with_capacity(sorted.len());
    for next in sorted {
        if let Some(current) = merged.last_mut() {
            if next.start <= current.end {
                if next.end > current.end {
                    current.end = next.end;
                }
                continue;
            }
        }
        merged.push(next);
    }
    merged
}

/// Total minutes covered by the union of `intervals`.
/// Unlike summing raw lengths, overlapping time is counted once.
pub fn measure<P: Clone>(intervals: &[Interval<P>]) -> i64 {
    merge_intervals(intervals).iter().map(Interval::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;

    fn spans(intervals: &[Interval<&str>]) -> Vec<(i64, i64)> {
        intervals.iter().map(|iv| (iv.start, iv.end)).collect()
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let merged: Vec<Interval<&str>> = merge_intervals(&[]);
        assert!(merged.is_empty());
        assert_eq!(measure::<&str>(&[]), 0);
    }

    #[test]
    fn single_interval_passes_through() {
        let merged = merge_intervals(&[Interval::new(10, 20, "a")]);
        assert_eq!(spans(&merged), vec![(10, 20)]);
    }

    #[test]
    fn overlapping_and_touching_intervals_combine() {
        let merged = merge_intervals(&[
            Interval::new(0, 10, "a"),
            Interval::new(5, 15, "b"),
            Interval::new(15, 20, "c"),
            Interval::new(30, 40, "d"),
        ]);
        assert_eq!(spans(&merged), vec![(0, 20), (30, 40)]);
        // first-encountered payload in sort order wins
        assert_eq!(merged[0].payload, "a");
        assert_eq!(merged[1].payload, "d");
    }

    #[test]
    fn merge_is_idempotent() {
        let input = vec![
            Interval::new(0, 10, "a"),
            Interval::new(8, 12, "b"),
            Interval::new(20, 25, "c"),
        ];
        let once = merge_intervals(&input);
        let twice = merge_intervals(&once);
        assert_eq!(spans(&once), spans(&twice));
    }

    #[test]
    fn merged_spans_are_independent_of_input_order() {
        let mut input = vec![
            Interval::new(0, 10, "a"),
            Interval::new(5, 15, "b"),
            Interval::new(20, 30, "c"),
            Interval::new(28, 35, "d"),
            Interval::new(40, 40, "e"),
        ];
        let expected = spans(&merge_intervals(&input));
        let expected_measure = measure(&input);

        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            input.shuffle(&mut rng);
            assert_eq!(spans(&merge_intervals(&input)), expected);
            assert_eq!(measure(&input), expected_measure);
        }
    }

    #[test]
    fn measure_counts_overlap_once() {
        let input = vec![Interval::new(0, 50, "a"), Interval::new(25, 75, "b")];
        assert_eq!(measure(&input), 75);
    }

    #[test]
    fn zero_length_intervals_contribute_nothing() {
        let input = vec![Interval::new(10, 10, "a"), Interval::new(20, 30, "b")];
        assert_eq!(measure(&input), 10);
        // a standalone zero-length interval survives as a degenerate segment
        let merged = merge_intervals(&input);
        assert_eq!(spans(&merged), vec![(10, 10), (20, 30)]);
    }

    #[test]
    fn inverted_ranges_are_treated_as_zero_length() {
        let input = vec![Interval::new(30, 10, "a"), Interval::new(0, 5, "b")];
        assert_eq!(measure(&input), 5);
    }
}
