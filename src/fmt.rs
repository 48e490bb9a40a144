// Logging backend selection: defmt, log, or nothing at all.

cfg_if::cfg_if! {
    if #[cfg(feature = "defmt")] {
        pub(crate) use defmt::{trace, warn};
    } else if #[cfg(feature = "log")] {
        pub(crate) use log::{trace, warn};
    } else {
        // Private names: a `macro_rules! warn` re-exported by path clashes with `#[warn]`.
        macro_rules! trace_ {
            ($($arg:tt)*) => {};
        }
        macro_rules! warn_ {
            ($($arg:tt)*) => {};
        }
        pub(crate) use {trace_ as trace, warn_ as warn};
    }
}
