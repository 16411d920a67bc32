/// Returns `Err(violation)` from the enclosing checklist when `cond` is false.
#[macro_export]
macro_rules! require {
    ($cond:expr, $violation:expr) => {
        if !$cond {
            return Err($violation);
        }
    };
}

/// Requires the array under `$value` to hold at least `$min` entries;
/// a missing or non-array value counts as empty.
#[macro_export]
macro_rules! require_min_len {
    ($value:expr, $field:expr, $min:expr) => {{
        let found = $crate::validation::entry_count($value);
        $crate::require!(
            found >= $min,
            $crate::error::ChecklistViolation::TooFew {
                field: ::std::string::String::from($field),
                min: $min,
                found,
            }
        );
    }};
}
