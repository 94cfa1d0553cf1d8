use lib::prelude::*;

use regex::Regex;

struct Day03;

/// Instructions in source order, keyed by the end offset of their match.
struct Instructions {
    muls: Vec<(usize, u64)>,
    conds: Vec<(usize, bool)>,
}

impl Puzzle for Day03 {
    type Data = Instructions;
    type Part1 = u64;
    type Part2 = u64;

    fn preprocess(input: &mut IStr<'_>) -> Result<Self::Data> {
        let text = input.next::<&str>()?;

        let mul = Regex::new(r"mul\((\d+),(\d+)\)")?;
        let cond = Regex::new(r"do(n't)?\(\)")?;

        let mut muls = Vec::new();

        for caps in mul.captures_iter(text) {
            let (Some(m), Some(a), Some(b)) = (caps.get(0), caps.get(1), caps.get(2)) else {
                continue;
            };

            let a = a.as_str().parse::<u64>()?;
            let b = b.as_str().parse::<u64>()?;
            let product = a.checked_mul(b).context("mul overflow")?;
            muls.push((m.end(), product));
        }

        let conds = cond
            .find_iter(text)
            .map(|m| (m.end(), m.as_str() == "do()"))
            .collect();

        Ok(Instructions { muls, conds })
    }

    fn part1(data: &Self::Data) -> Result<u64> {
        let mut sum = 0u64;

        for &(_, product) in &data.muls {
            sum = sum.checked_add(product).context("sum overflow")?;
        }

        Ok(sum)
    }

    fn part2(data: &Self::Data) -> Result<u64> {
        let mut conds = data.conds.iter().copied().peekable();
        let mut enabled = true;
        let mut sum = 0u64;

        for &(end, product) in &data.muls {
            // The two instruction kinds never overlap in the source, so a
            // conditional never shares an end offset with a mul.
            while let Some(&(cond_end, state)) = conds.peek() {
                if cond_end > end {
                    break;
                }

                enabled = state;
                conds.next();
            }

            if enabled {
                sum = sum.checked_add(product).context("sum overflow")?;
            }
        }

        Ok(sum)
    }
}

lib::puzzle! {
    Day03,
    example = "d03e.txt", expect = (161, 48),
    input = "d03.txt",
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/d03e.txt"));

    #[test]
    fn test_example() {
        let mut input = IStr::new(EXAMPLE);
        let data = Day03::preprocess(&mut input).unwrap();
        assert_eq!(Day03::part1(&data).unwrap(), 161);
        assert_eq!(Day03::part2(&data).unwrap(), 48);
    }

    #[test]
    fn test_do_inside_other_text() {
        // The conditionals have no word boundary, `undo()` re-enables.
        let mut input = IStr::new(b"don't()mul(2,3)undo()mul(3,4)");
        let data = Day03::preprocess(&mut input).unwrap();
        assert_eq!(Day03::part1(&data).unwrap(), 18);
        assert_eq!(Day03::part2(&data).unwrap(), 12);
    }
}
