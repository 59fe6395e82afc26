//! Word fragments, as whitespace-separated lists in numeric order.

/// 1 through 9.
pub const ONES: &str = "one two three four five six seven eight nine";

/// 10 through 12, which have no common suffix.
pub const TEN_TO_TWELVE: &str = "ten eleven twelve";

/// Roots of 13 through 19, followed by [`TEEN`].
pub const TEEN_ROOTS: &str = "thir four fif six seven eigh nine";

pub const TEEN: &str = "teen";

/// Roots of 20, 30, ..., 90, followed by [`TY`].
pub const TENS_ROOTS: &str = "twen thir for fif six seven eigh nine";

pub const TY: &str = "ty";

pub const HUNDRED: &str = "hundred";
pub const THOUSAND: &str = "thousand";
pub const MILLION: &str = "million";
