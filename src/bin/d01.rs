use lib::prelude::*;

use std::collections::HashMap;

struct Day01;

impl Puzzle for Day01 {
    type Data = (ArrayVec<u32, 1024>, ArrayVec<u32, 1024>);
    type Part1 = u64;
    type Part2 = u64;

    fn preprocess(input: &mut IStr<'_>) -> Result<Self::Data> {
        let mut left = ArrayVec::new();
        let mut right = ArrayVec::new();

        for value in input.iter::<(u32, u32)>() {
            let (l, r) = value?;
            left.try_push(l)?;
            right.try_push(r)?;
        }

        left.sort();
        right.sort();
        Ok((left, right))
    }

    fn part1((left, right): &Self::Data) -> Result<u64> {
        let total = left
            .iter()
            .zip(right)
            .map(|(l, r)| u64::from(l.abs_diff(*r)))
            .sum();

        Ok(total)
    }

    fn part2((left, right): &Self::Data) -> Result<u64> {
        let mut counts = HashMap::<u32, u64>::new();

        for r in right {
            *counts.entry(*r).or_default() += 1;
        }

        let total = left
            .iter()
            .map(|l| u64::from(*l) * counts.get(l).copied().unwrap_or_default())
            .sum();

        Ok(total)
    }
}

lib::puzzle! {
    Day01,
    example = "d01e.txt", expect = (11, 31),
    input = "d01.txt",
}
