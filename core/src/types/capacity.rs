use nutype::nutype;

/// Panels per page (rows × columns). Always at least 1, so the layout
/// arithmetic never divides by zero.
#[nutype(
    validate(greater_or_equal = 1),
    derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, TryFrom, Into, Display)
)]
pub struct Capacity(usize);
