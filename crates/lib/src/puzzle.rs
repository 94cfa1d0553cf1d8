//! The contract shared by every day binary.

use core::fmt;

use anyhow::Result;

use crate::input::IStr;

/// A single day's puzzle.
///
/// Input is parsed once by [Puzzle::preprocess]; both parts borrow the
/// parsed data and report their own result, so a failing part never takes
/// the other down with it.
pub trait Puzzle {
    /// Parsed form of the input, shared by both parts.
    type Data;
    /// Answer produced by part 1.
    type Part1: fmt::Display + PartialEq;
    /// Answer produced by part 2.
    type Part2: fmt::Display + PartialEq;

    /// Parse raw input into [Puzzle::Data].
    fn preprocess(input: &mut IStr<'_>) -> Result<Self::Data>;

    /// Solve part 1.
    fn part1(data: &Self::Data) -> Result<Self::Part1>;

    /// Solve part 2.
    fn part2(data: &Self::Data) -> Result<Self::Part2>;
}
