use lib::prelude::*;

use std::iter::from_fn;

struct Day02;

impl Puzzle for Day02 {
    type Data = Vec<ArrayVec<u32>>;
    type Part1 = usize;
    type Part2 = usize;

    fn preprocess(input: &mut IStr<'_>) -> Result<Self::Data> {
        let mut reports = Vec::new();

        while let Some(report) = input.try_line::<ArrayVec<u32>>()? {
            if report.is_empty() {
                break;
            }

            ensure!(report.len() > 1, "invalid input");
            reports.push(report);
        }

        Ok(reports)
    }

    fn part1(reports: &Self::Data) -> Result<usize> {
        let count = reports
            .iter()
            .filter(|report| first_bad(report.iter().copied()).is_none())
            .count();

        Ok(count)
    }

    fn part2(reports: &Self::Data) -> Result<usize> {
        let mut count = 0;

        for report in reports {
            let Some(bad) = first_bad(report.iter().copied()) else {
                count += 1;
                continue;
            };

            // Removing a level elsewhere keeps the bad pair adjacent and
            // cannot flip the direction established before it, so only
            // these three redactions can help.
            let fixed = [bad, bad + 1, 0]
                .into_iter()
                .any(|redact| first_bad(skip(report.iter().copied(), redact)).is_none());

            count += usize::from(fixed);
        }

        Ok(count)
    }
}

/// Position of the first adjacent pair violating the safety rule.
fn first_bad(levels: impl IntoIterator<Item = u32>) -> Option<usize> {
    let mut direction = None;

    pairs(levels).position(|(a, b)| {
        !matches!(a.abs_diff(b), 1..=3) || *direction.get_or_insert(b > a) != (b > a)
    })
}

#[inline]
fn pairs(it: impl IntoIterator<Item = u32>) -> impl Iterator<Item = (u32, u32)> {
    let mut it = it.into_iter();
    let mut buf = it.next();

    from_fn(move || {
        let a = buf.take()?;
        let b = it.next()?;
        buf = Some(b);
        Some((a, b))
    })
}

#[inline]
fn skip(it: impl IntoIterator<Item = u32>, redact: usize) -> impl Iterator<Item = u32> {
    it.into_iter()
        .enumerate()
        .filter(move |&(i, _)| i != redact)
        .map(|(_, v)| v)
}

lib::puzzle! {
    Day02,
    example = "d02e.txt", expect = (2, 4),
    input = "d02.txt",
}
