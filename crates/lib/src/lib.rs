mod input;

pub mod cli;
pub mod grid;
pub mod puzzle;

pub use self::input::{ErrorKind, FromInput, IStr, IStrError, Iter};

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Result;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::grid::{Dims, Grid, Pos, Scan, ScanSink, WordAnchors, WordCount};
    pub use crate::input::IStr;
    pub use crate::puzzle::Puzzle;
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use bstr::{BStr, ByteSlice};
}

/// Generate `fn main` for a day binary.
///
/// The example input runs first and is checked against the expected
/// answers, then the real input runs unchecked. Paths are resolved against
/// the calling crate's `inputs/` directory.
#[macro_export]
macro_rules! puzzle {
    (
        $puzzle:ty,
        example = $example:literal, expect = ($p1:expr, $p2:expr),
        input = $input:literal $(,)?
    ) => {
        fn main() -> $crate::macro_support::Result<()> {
            let opts = $crate::cli::Opts::parse()?;

            $crate::cli::run::<$puzzle>(
                &opts,
                concat!("inputs/", $example),
                concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $example),
                Some(($p1, $p2)),
            )?;

            $crate::cli::run::<$puzzle>(
                &opts,
                concat!("inputs/", $input),
                concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $input),
                None,
            )?;

            Ok(())
        }
    };
}
