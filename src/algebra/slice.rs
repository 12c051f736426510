use crate::models::{Interval, TimeRange};

/// Sub-intervals of `interval` left after removing every cutoff's
/// intersection, each carrying the original payload.
///
/// Works by successive refinement: every cutoff is applied to the current
/// working set, passing untouched segments through, dropping fully covered
/// segments, and splitting partial overlaps into the non-empty before/after
/// pieces. The final set does not depend on the order cutoffs arrive in.
pub fn slice_interval<P: Clone>(interval: &Interval<P>, cutoffs: &[TimeRange]) -> Vec<Interval<P>> {
    let mut seed = interval.clone();
    if seed.end < seed.start {
        // inverted ranges behave as zero-length
        seed.end = seed.start;
    }

    let mut working = vec![seed];
    for cutoff in cutoffs {
        if cutoff.is_empty() {
            continue;
        }
        // at most one extra segment per cutoff application
        let mut refined = Vec::with_capacity(working.len() + 1);
        for segment in working {
            if cutoff.end <= segment.start || cutoff.start >= segment.end {
                refined.push(segment);
                continue;
            }
            if cutoff.start > segment.start {
                refined.push(Interval::new(
                    segment.start,
                    cutoff.start,
                    segment.payload.clone(),
                ));
            }
            if cutoff.end < segment.end {
                refined.push(Interval::new(cutoff.end, segment.end, segment.payload));
            }
            // a segment fully inside the cutoff emits nothing
        }
        working = refined;
    }
    working
}

/// Slice every interval in a channel's list, flattened into one segment list.
pub fn slice_all<P: Clone>(intervals: &[Interval<P>], cutoffs: &[TimeRange]) -> Vec<Interval<P>> {
    intervals
        .iter()
        .flat_map(|interval| slice_interval(interval, cutoffs))
        .collect()
}

/// Restrict segments to `bound`, dropping anything fully outside it.
/// With no bound, segments pass through unchanged.
pub fn clamp_intervals<P: Clone>(
    segments: &[Interval<P>],
    bound: Option<&TimeRange>,
) -> Vec<Interval<P>> {
    match bound {
        None => segments.to_vec(),
        Some(bound) => segments
            .iter()
            .filter_map(|segment| {
                segment
                    .range()
                    .intersect(bound)
                    .map(|range| segment.with_range(range))
            })
            .collect(),
    }
}
